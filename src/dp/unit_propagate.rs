use std::collections::VecDeque;

use crate::{data_structures::{Formula, Statistics}, pure_literal_deletion::{get_pure_literals, remove_pure_literals}};

/*
A function to perform unit propagation (Boolean Constraint Propagation) on a given Formula
data structure, destructively: satisfied clauses are marked removed, falsified literals are
deleted from their clauses, and the occurrence index is pruned alongside.

When the unit queue empties it will perform pure literal deletion, which can expose further
pure literals or satisfy the formula outright. Every literal made true is recorded in the
formula's assignment context. It will check for the empty set of clauses and the empty
clause and leave the corresponding flags for handling satisfiable and unsatisfiable
assignments.
*/
pub fn unit_propagate(formula: &mut Formula, unit_literals: Vec<i32>, statistics: &mut Statistics) {
    let mut new_unit_literals: VecDeque<i32> = VecDeque::new();
    for literal in unit_literals {
        if !new_unit_literals.contains(&literal) {
            new_unit_literals.push_back(literal);
        }
    }
    loop {
        while !new_unit_literals.is_empty() {
            let temp_unit_literal = new_unit_literals.pop_front().unwrap();
            if formula.assignment.contains(&temp_unit_literal) {
                continue;
            }
            statistics.increment_propagation_count();
            formula.assignment.push(temp_unit_literal);
            let pos_clause_references = formula.clause_references.get_vec(&temp_unit_literal);
            if !pos_clause_references.is_none() {
                for clause_index in pos_clause_references.unwrap().clone() {
                    statistics.increment_clause_visit_count();
                    formula.clause_set.clause_list[clause_index as usize].is_removed = true; // Clause satisfied
                    formula.clause_set.decrement_counter();
                    formula.clause_references.retain(|&_key, &value| { value != clause_index});
                    // Check satisfiability
                    if formula.clause_set.contains_empty_set() {
                        return;
                    }
                }
            }
            let complement_unit_literal = -temp_unit_literal;
            let neg_clause_references = formula.clause_references.remove(&complement_unit_literal);
            if !neg_clause_references.is_none() {
                for clause_index in neg_clause_references.unwrap() {
                    statistics.increment_clause_visit_count();
                    formula.clause_set.clause_list[clause_index as usize].remove_literal(complement_unit_literal);
                    // Check for contradiction
                    if formula.clause_set.check_contradiction(Some(clause_index)) {
                        return;
                    }
                    // Check for new unit clauses
                    let unit_clause_check = formula.clause_set.clause_list[clause_index as usize].is_unit_clause();
                    if !unit_clause_check.is_none() && !new_unit_literals.contains(&unit_clause_check.unwrap()) {
                        new_unit_literals.push_back(unit_clause_check.unwrap());
                    }
                }
            }
        }
        // Unit propagation has reached fixpoint; run pure literal deletion, which can
        // only remove whole clauses and therefore never produces new unit clauses.
        if !formula.config.pure_literal_deletion_enabled() {
            return;
        }
        let pure_literals = get_pure_literals(&formula.clause_references);
        if pure_literals.is_empty() {
            return;
        }
        remove_pure_literals(formula, pure_literals);
        if formula.clause_set.contains_empty_set() {
            return;
        }
    }
}
