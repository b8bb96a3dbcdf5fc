use multimap::MultiMap;

use crate::{data_structures::Formula, util::count_active_references};

/*
A function to get a list of pure literals from a given state. A literal is pure when its
negation appears in no clause of the occurrence index. The list is sorted so removal
order does not depend on hash iteration order.

Returns the list of pure literals.
*/
pub fn get_pure_literals(clause_references: &MultiMap<i32, i32>) -> Vec<i32> {
    let mut pure_literals = Vec::new();
    for key in clause_references.keys() {
        let complement_key = -key;
        if !clause_references.contains_key(&complement_key) {
            pure_literals.push(*key);
        }
    }
    pure_literals.sort();
    return pure_literals;
}

/*
A function that will remove all pure literals from a given clause database, updating clause
references where necessary. Every removed pure literal is recorded as assigned true.
*/
pub fn remove_pure_literals(formula: &mut Formula, pure_literals: Vec<i32>) {
    for literal in pure_literals {
        // An earlier pure literal in the batch may have removed every clause this one appeared in.
        if formula.clause_references.get_vec(&literal).is_none() {
            continue;
        }
        formula.assignment.push(literal);
        for clause_index in formula.clause_references.get_vec(&literal).unwrap().clone() {
            formula.clause_set.clause_list[clause_index as usize].is_removed = true;
            formula.clause_set.decrement_counter();
            formula.clause_references.retain(|&_key, &value| { value != clause_index});
            // Check satisfiability
            if formula.clause_set.contains_empty_set() {
                return;
            }
        }
    }
}

/*
A function to get a list of pure literals for the trail-based variants, whose occurrence
index stays fixed during the search. A variable is a candidate when it is unassigned; its
appearances are counted over the clauses that are still active.

Returns the list of pure literals, ordered by variable id.
*/
pub fn get_pure_literals_under_trail(formula: &Formula, values: &Vec<Option<bool>>) -> Vec<i32> {
    let mut pure_literals = Vec::new();
    for variable in 1..=formula.num_variables {
        if !values[variable as usize].is_none() {
            continue;
        }
        let pos_appearances = count_active_references(formula, variable);
        let neg_appearances = count_active_references(formula, -variable);
        if pos_appearances > 0 && neg_appearances == 0 {
            pure_literals.push(variable);
        } else if neg_appearances > 0 && pos_appearances == 0 {
            pure_literals.push(-variable);
        }
    }
    return pure_literals;
}
