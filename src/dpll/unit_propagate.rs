use std::collections::VecDeque;

use crate::{data_structures::{Reason, Statistics, TrailFormula}, pure_literal_deletion::get_pure_literals_under_trail};

/*
A function to perform unit propagation (Boolean Constraint Propagation) on a given
TrailFormula data structure. Clauses containing a propagated literal are deactivated and
the complement is deleted from the clauses containing it, with every mutation journaled so
backtracking can replay it in reverse. The occurrence index itself is never modified.

When the unit queue empties it will perform pure literal deletion when enabled, assigning
pure literals through the same queue. Returns false as soon as a clause becomes empty
under the trail (a conflict), true once the fixpoint is reached.
*/
pub fn unit_propagate(formula: &mut TrailFormula, unit_literals: Vec<i32>, reason: Reason, statistics: &mut Statistics) -> bool {
    let mut new_unit_literals: VecDeque<(i32, Reason)> = VecDeque::new();
    for literal in unit_literals {
        if !new_unit_literals.iter().any(|(queued, _)| *queued == literal) {
            new_unit_literals.push_back((literal, reason));
        }
    }
    loop {
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

            let pos_clause_references = formula.core_data.clause_references.get_vec(&temp_unit_literal).cloned();
            if !pos_clause_references.is_none() {
                for clause_index in pos_clause_references.unwrap() {
                    if formula.core_data.clause_set.clause_list[clause_index as usize].is_removed {
                        continue;
                    }
                    statistics.increment_clause_visit_count();
                    formula.deactivate_clause(clause_index); // Clause satisfied
                }
            }
            let complement_unit_literal = -temp_unit_literal;
            let neg_clause_references = formula.core_data.clause_references.get_vec(&complement_unit_literal).cloned();
            if !neg_clause_references.is_none() {
                for clause_index in neg_clause_references.unwrap() {
                    if formula.core_data.clause_set.clause_list[clause_index as usize].is_removed {
                        continue;
                    }
                    statistics.increment_clause_visit_count();
                    formula.remove_literal_from_clause(clause_index, complement_unit_literal);
                    // Check for conflict
                    if formula.core_data.clause_set.clause_list[clause_index as usize].is_empty() {
                        return false;
                    }
                    // Check for new unit clauses
                    let unit_clause_check = formula.core_data.clause_set.clause_list[clause_index as usize].is_unit_clause();
                    if !unit_clause_check.is_none() {
                        let found_unit_literal = unit_clause_check.unwrap();
                        if !new_unit_literals.iter().any(|(queued, _)| *queued == found_unit_literal) {
                            new_unit_literals.push_back((found_unit_literal, Reason::Propagated));
                        }
                    }
                }
            }
        }
        // Unit propagation has reached fixpoint; assign pure literals, which only ever
        // deactivate clauses and can expose further pure literals.
        if !formula.core_data.config.pure_literal_deletion_enabled() {
            return true;
        }
        let pure_literals = get_pure_literals_under_trail(&formula.core_data, &formula.values);
        if pure_literals.is_empty() {
            return true;
        }
        for pure_literal in pure_literals {
            new_unit_literals.push_back((pure_literal, Reason::Propagated));
        }
    }
}
