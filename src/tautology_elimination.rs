use crate::data_structures::Formula;

/*
A function to remove every clause containing both a literal and its negation. Such a clause
is satisfied by every assignment and never constrains the search. The simplification rules
only ever delete literals, so this runs once when the formula enters the solver and
tautologies cannot reappear afterwards.
*/
pub fn remove_tautologies(formula: &mut Formula) {
    let mut tautology_references = Vec::new();
    for (clause_index, clause) in formula.clause_set.clause_list.iter().enumerate() {
        if !clause.is_removed && clause.is_tautology() {
            tautology_references.push(clause_index as i32);
        }
    }
    for clause_index in tautology_references {
        formula.clause_set.clause_list[clause_index as usize].is_removed = true;
        formula.clause_set.decrement_counter();
        formula.clause_references.retain(|&_key, &value| { value != clause_index});
    }
}
