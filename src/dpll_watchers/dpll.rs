use crate::{data_structures::{Reason, SearchResult, Statistics, WatchedFormula}, dpll_watchers::unit_propagate::unit_propagate, literal_selection::select_literal_vss_under_trail, util::get_unit_literals};

/*
A function that will perform the DPLL algorithm with unit propagation driven by the
two-literal watching scheme. Clauses are never shrunk; only satisfied flags and watcher
positions change, and both are journaled so backtracking pops to the mark taken before
each decision. Branching uses the Variable State Sum scheme.

Returns SAT (satisfiable) or UNSAT (unsatisfiable) for the current decision branch.
*/
pub fn dpll(formula: &mut WatchedFormula, decision_branch: Option<i32>, statistics: &mut Statistics) -> SearchResult {
    if !decision_branch.is_none() {
        if !unit_propagate(formula, vec![decision_branch.unwrap()], Reason::Decision, statistics) {
            return SearchResult::UNSAT;
        }
    } else {
        let unit_literals = get_unit_literals(&formula.core_data.clause_set.clause_list);
        if !unit_propagate(formula, unit_literals, Reason::Propagated, statistics) {
            return SearchResult::UNSAT;
        }
    }
    if formula.core_data.clause_set.contains_empty_set() {
        return SearchResult::SAT;
    }

    // Satisfied clauses are only marked when a watcher inspection sees them, so active
    // clauses can still be satisfied under the trail. Once no unassigned variable appears
    // in any active clause, every clause is satisfied and the branch is closed.
    let literal = match select_literal_vss_under_trail(&formula.core_data, &formula.values) {
        Some(literal) => literal,
        None => return SearchResult::SAT,
    };
    let mark = formula.mark();

    let result = dpll(formula, Some(literal), statistics);
    if result.eq(&SearchResult::SAT) {
        return result;
    }
    formula.pop_until(&mark);
    statistics.increment_backtrack_count();

    let result = dpll(formula, Some(-literal), statistics);
    if result.eq(&SearchResult::SAT) {
        return result;
    }
    formula.pop_until(&mark);
    return SearchResult::UNSAT;
}
