mod dp;
mod unit_propagate;

use crate::{data_structures::{Formula, SearchResult, Solution, Statistics}, dp::dp::dp, util::complete_model};

/*
A function to run the Davis-Putnam procedure on a prepared formula, checking for
satisfiability and unsatisfiability.

Returns the verdict, with a total model when the formula is satisfiable.
*/
pub fn solve(formula: &mut Formula, statistics: &mut Statistics) -> Solution {
    if formula.clause_set.contains_empty_clause() {
        return Solution::Unsatisfiable;
    }
    let model = &mut Vec::new();
    match dp(formula, None, model, statistics) {
        SearchResult::SAT => Solution::Satisfiable(complete_model(formula.num_variables, model)),
        SearchResult::UNSAT => Solution::Unsatisfiable,
    }
}
