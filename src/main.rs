extern crate multimap;

use sat_evaluators::{bench::run_bench_directory, parse_config::read_config_json, solver::run_instance};

/*
The main function for running the different SAT solver implementations.

Modify config.json to choose your solver variant and file/benchmark to run.
Run command "cargo run --release"

See README.md for more information.
*/
fn main() {
    env_logger::init();
    let (solver, config) = read_config_json();

    if solver.run_bench {
        run_bench_directory(solver.path.clone(), &solver, config);
    } else {
        run_instance(solver.path.clone(), &solver.variant, config);
    }
}
