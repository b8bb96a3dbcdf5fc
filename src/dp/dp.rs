use crate::{data_structures::{Formula, LiteralSelection, SearchResult, Statistics}, dp::unit_propagate::unit_propagate, literal_selection::{select_literal, select_literal_vss}, subsumption::eliminate_subsumed, util::get_unit_literals};

/*
A function that will perform the Davis-Putnam procedure: simplification rules applied to
fixpoint, then branching. State restoration is by value: every call works on an
independent clone of the formula, so backtracking never has to undo anything.
Has one of the literal selection schemes {Ordered, Variable State Sum}.

Returns SAT (satisfiable) or UNSAT (unsatisfiable). The satisfying context is written to
the model out-parameter at the SAT leaf.
*/
pub fn dp(formula: &mut Formula, decision_branch: Option<i32>, model: &mut Vec<i32>, statistics: &mut Statistics) -> SearchResult {
    let new_formula = &mut formula.clone();
    if !decision_branch.is_none() {
        unit_propagate(new_formula, vec![decision_branch.unwrap()], statistics);
    } else {
        let unit_literals = get_unit_literals(&new_formula.clause_set.clause_list);
        unit_propagate(new_formula, unit_literals, statistics);
    }
    if new_formula.config.subsumption_enabled() && !new_formula.check_solved() {
        while eliminate_subsumed(new_formula, statistics) {
            // Removing subsumed clauses can make further literals pure; rerun the rules.
            unit_propagate(new_formula, Vec::new(), statistics);
            if new_formula.check_solved() { break; }
        }
    }
    if new_formula.clause_set.contains_empty_set() {
        *model = new_formula.assignment.clone();
        return SearchResult::SAT;
    } else if new_formula.clause_set.contains_empty_clause() {
        return SearchResult::UNSAT;
    }

    let literal_selection = if new_formula.config.literal_selection.eq(&LiteralSelection::Ordered)
                                                        {select_literal(new_formula)} else {select_literal_vss(new_formula)};
    let literal = literal_selection.unwrap();
    statistics.increment_decision_count();

    let result = dp(new_formula, Some(literal), model, statistics);
    if result.eq(&SearchResult::SAT) {
        return result;
    }
    statistics.increment_backtrack_count();
    return dp(new_formula, Some(-literal), model, statistics);
}
