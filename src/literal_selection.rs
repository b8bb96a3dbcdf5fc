use crate::{data_structures::Formula, util::{get_variable_state_sum, count_active_references}};

/*
A function to select the first literal of the first active clause. This is the classical
selection scheme: deterministic and cheap but uninformed.

Returns the selected literal, or None when no active clause remains.
*/
pub fn select_literal(formula: &Formula) -> Option<i32> {
    for clause in &formula.clause_set.clause_list {
        if !clause.is_removed && !clause.literals.is_empty() {
            return Some(clause.literals[0]);
        }
    }
    return None;
}

/*
A function to select a literal based on the variable state sum over the pruned occurrence
index the DP variants maintain. The variable appearing in the most clauses is selected;
ties fall to the smallest variable id, and the polarity with the larger individual count
is tried first.

Returns the selected literal, or None when no variable appears in any clause.
*/
pub fn select_literal_vss(formula: &Formula) -> Option<i32> {
    let mut max_appearances = 0;
    let mut choice = 0;
    let mut choose_positive = true;
    for variable in 1..=formula.num_variables {
        let (appearances, priority) = get_variable_state_sum(&formula.clause_references, variable);
        if appearances > max_appearances {
            choose_positive = priority;
            max_appearances = appearances;
            choice = variable;
        }
    }
    if max_appearances == 0 {
        return None;
    }
    let literal = if choose_positive {choice} else {-choice};
    return Some(literal);
}

/*
A function to select a literal based on the variable state sum for the trail-based variants.
Their clause_references stay fixed during the search, so appearances are counted over the
clauses that are still active, and assigned variables are skipped.

Returns the selected literal, or None when every active clause is already satisfied.
*/
pub fn select_literal_vss_under_trail(formula: &Formula, values: &Vec<Option<bool>>) -> Option<i32> {
    let mut max_appearances = 0;
    let mut choice = 0;
    let mut choose_positive = true;
    for variable in 1..=formula.num_variables {
        if !values[variable as usize].is_none() {
            continue;
        }
        let pos_appearances = count_active_references(formula, variable);
        let neg_appearances = count_active_references(formula, -variable);
        let appearances = pos_appearances + neg_appearances;
        if appearances > max_appearances {
            choose_positive = pos_appearances >= neg_appearances;
            max_appearances = appearances;
            choice = variable;
        }
    }
    if max_appearances == 0 {
        return None;
    }
    let literal = if choose_positive {choice} else {-choice};
    return Some(literal);
}
