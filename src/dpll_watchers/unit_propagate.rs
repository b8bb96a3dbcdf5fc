use std::collections::VecDeque;

use crate::data_structures::{Reason, Statistics, WatchedFormula};

/*
A function to perform unit propagation (Boolean Constraint Propagation) through the
two-literal watcher index. Assigning a literal true falsifies its complement, and only
clauses watching the complement can change status: they are satisfied, re-watched on a
literal that is not yet false, found unit, or found empty under the trail.

Implied literals go through a FIFO queue; each literal is assigned exactly once and
duplicates are ignored. Returns false on a conflict, true once the queue drains.
*/
pub fn unit_propagate(formula: &mut WatchedFormula, unit_literals: Vec<i32>, reason: Reason, statistics: &mut Statistics) -> bool {
    let mut new_unit_literals: VecDeque<(i32, Reason)> = VecDeque::new();
    for literal in unit_literals {
        if !new_unit_literals.iter().any(|(queued, _)| *queued == literal) {
            new_unit_literals.push_back((literal, reason));
        }
    }
    while !new_unit_literals.is_empty() {
        let (temp_unit_literal, entry_reason) = new_unit_literals.pop_front().unwrap();
        match formula.value(temp_unit_literal) {
            Some(true) => continue, // Already satisfied by an earlier propagation
            Some(false) => return false, // Conflicting implication
            None => {},
        }
        statistics.increment_propagation_count();
        if entry_reason.eq(&Reason::Decision) {
            statistics.increment_decision_count();
        }
        formula.push_trail(temp_unit_literal, entry_reason);

        let complement_unit_literal = -temp_unit_literal;
        let watching = formula.watchers.get_vec(&complement_unit_literal).cloned();
        if watching.is_none() {
            continue;
        }
        for clause_index in watching.unwrap() {
            if formula.core_data.clause_set.clause_list[clause_index as usize].is_removed {
                continue;
            }
            statistics.increment_clause_visit_count();
            let other_watcher = formula.other_watcher(clause_index, complement_unit_literal);
            if formula.value(other_watcher).eq(&Some(true)) {
                formula.satisfy_clause(clause_index);
                continue;
            }
            // Try to find a replacement watcher: a literal of the clause, distinct from
            // both current watchers, that is not yet false.
            let replacement = formula.core_data.clause_set.clause_list[clause_index as usize].literals.iter()
                .find(|&&candidate| candidate != complement_unit_literal
                    && candidate != other_watcher
                    && !formula.value(candidate).eq(&Some(false)))
                .copied();
            if !replacement.is_none() {
                formula.swap_watcher(clause_index, complement_unit_literal, replacement.unwrap());
                continue;
            }
            // No replacement: the clause is unit on its other watcher, or empty under the
            // trail. A unit clause is marked satisfied as its literal is enqueued, keeping
            // every active non-unit clause on two non-false watchers.
            if formula.value(other_watcher).is_none() {
                formula.satisfy_clause(clause_index);
                if !new_unit_literals.iter().any(|(queued, _)| *queued == other_watcher) {
                    new_unit_literals.push_back((other_watcher, Reason::Propagated));
                }
            } else {
                return false; // Both watchers false under the trail
            }
        }
    }
    return true;
}
