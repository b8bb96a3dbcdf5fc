use crate::{data_structures::{LiteralSelection, Reason, SearchResult, Statistics, TrailFormula}, dpll::unit_propagate::unit_propagate, literal_selection::{select_literal, select_literal_vss_under_trail}, util::get_unit_literals};

/*
A function that will perform the Davis-Putnam-Logemann-Loveland (DPLL) algorithm over a
journaled, in-place clause database. A decision branch is propagated together with its
unit consequences; on failure the trail and journal are popped back to the mark taken
before the decision. Has one of the literal selection schemes {Ordered, Variable State Sum},
with pure literal deletion applied inside propagation when enabled.

Returns SAT (satisfiable) or UNSAT (unsatisfiable) for the current decision branch.
*/
pub fn dpll(formula: &mut TrailFormula, decision_branch: Option<i32>, statistics: &mut Statistics) -> SearchResult {
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

    let literal_selection = if formula.core_data.config.literal_selection.eq(&LiteralSelection::Ordered)
                                                        {select_literal(&formula.core_data)} else {select_literal_vss_under_trail(&formula.core_data, &formula.values)};
    let literal = match literal_selection {
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
