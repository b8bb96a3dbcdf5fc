mod dpll;
mod unit_propagate;

use crate::{data_structures::{Formula, SearchResult, Solution, Statistics, TrailFormula}, dpll::dpll::dpll, util::complete_model};

/*
A function to run the trail-based DPLL procedure on a prepared formula, checking for
satisfiability and unsatisfiability.

Returns the verdict, with a total model read off the final trail when the formula is
satisfiable.
*/
pub fn solve(formula: Formula, statistics: &mut Statistics) -> Solution {
    if formula.clause_set.contains_empty_clause() {
        return Solution::Unsatisfiable;
    }
    let num_variables = formula.num_variables;
    let trail_formula = &mut TrailFormula::new(formula);
    match dpll(trail_formula, None, statistics) {
        SearchResult::SAT => {
            let assignment = trail_formula.trail.iter().map(|assignment| assignment.literal).collect();
            Solution::Satisfiable(complete_model(num_variables, &assignment))
        },
        SearchResult::UNSAT => Solution::Unsatisfiable,
    }
}
