use std::time::Instant;
use log::info;

use crate::{data_structures::{Config, Formula, Solution, SolverVariant, Statistics}, dp, dpll, dpll_watchers, tautology_elimination::remove_tautologies};

/*
A function to decide a formula with the selected solver variant. The single entry point of
the solver: tautologies are removed once as the formula enters, the configuration knobs the
variant mandates are fixed, and the search procedure runs to completion.

The formula is consumed; it is not expected to outlive the solve.

Returns Satisfiable with a total model over [1, num_variables], or Unsatisfiable.
*/
pub fn solve(mut formula: Formula, variant: &SolverVariant, statistics: &mut Statistics) -> Solution {
    formula.config = Config::for_variant(variant, &formula.config);
    // An explicitly empty clause refutes the formula before any rule runs.
    if formula.clause_set.contains_empty_clause() {
        return Solution::Unsatisfiable;
    }
    remove_tautologies(&mut formula);
    match variant {
        SolverVariant::DPDefault | SolverVariant::DP => dp::solve(&mut formula, statistics),
        SolverVariant::ClassicalDPLL | SolverVariant::DPLL => dpll::solve(formula, statistics),
        SolverVariant::DPLLWatchers => dpll_watchers::solve(formula, statistics),
    }
}

/*
A function to parse and solve a single CNF instance, printing the verdict and model.
*/
pub fn run_instance(filename: String, variant: &SolverVariant, config: Config) {
    let timer = Instant::now();
    let formula = Formula::new(filename, config);
    let statistics = &mut Statistics::new();
    let solution = solve(formula, variant, statistics);
    info!("solved in {:?} -- propagations: {}, decisions: {}, backtracks: {}, clause visits: {}",
            timer.elapsed(), statistics.propagation_count, statistics.decision_count,
            statistics.backtrack_count, statistics.clause_visit_count);
    match &solution {
        Solution::Satisfiable(model) => {
            println!("Satisfiable");
            println!("Model: {:?}", model);
        },
        Solution::Unsatisfiable => println!("Unsatisfiable"),
    }
}
