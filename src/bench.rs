use std::{fs, time::{Duration, Instant}, collections::{HashMap, BTreeMap}};
use log::info;

use crate::{data_structures::{Config, Formula, Solution, Solver, Statistics}, solver::solve, util::{read_instance_header, read_instance_name}};

// Instances above this clause count are only run when IncludeLargeInstances is set.
const LARGE_INSTANCE_CLAUSE_LIMIT: i32 = 10_000;

/*
A function to perform tests on a given set of benchmarks in DIMACS format.
*/
pub fn run_bench_directory(path: String, solver: &Solver, config: Config) {
    run_bench_group(path, solver, config);
}

/*
A function to run a directory of files in DIMACS format. Each instance is solved
Repetitions times and the average runtime is recorded. Instances whose header declares
more clauses than the large-instance limit are skipped unless IncludeLargeInstances is set.

Stores detailed results in a file with the provided name "results-<filename_to_write>".
*/
pub fn run_bench_group(group: String, solver: &Solver, config: Config) {
    let mut test_times = BTreeMap::new();
    let paths = fs::read_dir(&group).unwrap();
    let (mut total, mut satisfiable, mut unsatisfiable, mut skipped) = (0, 0, 0, 0);
    let bench_timer = Instant::now();
    let mut statistic_database = HashMap::new();
    for path in paths {
        let file_path = path.unwrap().path().display().to_string();
        if !solver.include_large {
            if let Some((_, num_clauses)) = read_instance_header(&file_path) {
                if num_clauses > LARGE_INSTANCE_CLAUSE_LIMIT {
                    info!("skipping large instance {} ({} clauses)", file_path, num_clauses);
                    skipped += 1;
                    continue;
                }
            }
        }
        let instance_name = read_instance_name(&file_path);
        let repetitions = if solver.repetitions > 0 {solver.repetitions} else {1};
        let mut elapsed = Duration::ZERO;
        let mut statistics = Statistics::new();
        let mut solution = Solution::Unsatisfiable;
        for _ in 0..repetitions {
            let formula = Formula::new(file_path.clone(), config.clone());
            statistics = Statistics::new();
            let instance_timer = Instant::now();
            solution = solve(formula, &solver.variant, &mut statistics);
            elapsed += instance_timer.elapsed();
        }
        test_times.insert(instance_name.clone(), elapsed / repetitions as u32);
        statistic_database.insert(instance_name, (statistics.propagation_count, statistics.backtrack_count, solution.clone()));
        total += 1;
        match &solution {
            Solution::Satisfiable(_) => satisfiable += 1,
            Solution::Unsatisfiable => unsatisfiable += 1,
        }
    }
    // Formatting to store overall results
    let mut output_string = format!("--- {:?} --- \nCONFIG: [Pure Literal Deletion: {}, Subsumption: {}, Repetitions: {}]",
                                            solver.variant, config.pure_literal_deletion, config.subsumption, solver.repetitions);
    output_string += &format!("\n--------------------------------------------------------------\nTotal: {}, Sat: {}, Unsat: {}, Skipped: {}\nComplete time: {:?}", total,
                                satisfiable, unsatisfiable, skipped, bench_timer.elapsed());
    for (key, val) in test_times {
        let stats = statistic_database.get(&key).unwrap();
        let verdict = if stats.2.is_satisfiable() {"SAT"} else {"UNSAT"};
        output_string += &format!("\nInstance: {} -- Average runtime: {:?} -- Result: {} -- Propagations: {}, Backtracks: {}", key, val, verdict, stats.0, stats.1);
    }
    let pathname = format!("results-{}", solver.output);
    fs::write(pathname, output_string).expect("Unable to write file");
}
