use std::fs::File;
use serde_json::Value;

use crate::data_structures::{SolverVariant, LiteralSelection, Config, Solver};

/*
A function to read the configuration of the solver within config.json.

Returns:
- Solver variant, repetition count, and paths for running an instance or benchmark
- Solver config options
*/
pub fn read_config_json() -> (Solver, Config) {
    let file = File::open("./config.json").unwrap();
    let json: Value = serde_json::from_reader(file).expect("file should be valid JSON");
    let solver_options = json.get("SolverOptions").expect("file should have SolverOptions key");

    let variant_json = solver_options.get("SolverVariant").expect("file should have SolverVariant key");
    let variant = read_solver_variant_json(variant_json)
        .expect("SolverVariant should be one of: dp_default, dp, classical_dpll, dpll, dpll_watchers");

    let run_bench_json = json.get("RunBenchmark").expect("file should have RunBenchmark key");
    let run_bench = read_boolean_json(run_bench_json).expect("RunBenchmark should be a Boolean value");
    let path = read_path(run_bench, &json);

    let repetitions_json = json.get("Repetitions").expect("file should have Repetitions key");
    let repetitions = read_number_json_i32(repetitions_json).expect("Repetitions should be a valid number");

    let include_large_json = json.get("IncludeLargeInstances").expect("file should have IncludeLargeInstances key");
    let include_large = read_boolean_json(include_large_json).expect("IncludeLargeInstances should be a Boolean value");

    let output_json = json.get("OutputFileName").expect("file should have OutputFileName key");
    let output = read_string_json(output_json).expect("OutputFileName must be a string");

    let solver = Solver {
        variant,
        run_bench,
        path,
        repetitions,
        include_large,
        output,
    };

    let pure_literal_deletion_json = solver_options.get("PureLiteralDeletion").expect("file should have PureLiteralDeletion key");
    let pure_literal_deletion = read_boolean_json(pure_literal_deletion_json).expect("PureLiteralDeletion should be a Boolean value");

    let subsumption_json = solver_options.get("Subsumption").expect("file should have Subsumption key");
    let subsumption = read_boolean_json(subsumption_json).expect("Subsumption should be a Boolean value");

    let config = Config {
        literal_selection: LiteralSelection::Ordered,
        pure_literal_deletion,
        subsumption,
    };

    return (solver, config);
}

/*
A function to read usize numbers from json. Returns usize value or None if invalid.
*/
pub fn read_number_json_usize(value: &Value) -> Option<usize> {
    if value.is_number() && !value.is_f64() {
        return Some(value.as_u64().unwrap() as usize);
    }
    return None
}

/*
A function to read integer numbers from json. Returns integer value or None if invalid.
*/
pub fn read_number_json_i32(value: &Value) -> Option<i32> {
    if value.is_number() && !value.is_f64() {
        return Some(value.as_i64().unwrap() as i32);
    }
    return None;
}

/*
A function to read SolverVariant objects from json. Returns SolverVariant object or None if invalid.
*/
pub fn read_solver_variant_json(value: &Value) -> Option<SolverVariant> {
    if value.is_string() {
        match value.as_str().unwrap().to_lowercase().as_str() {
            "dp_default" => return Some(SolverVariant::DPDefault),
            "dp" => return Some(SolverVariant::DP),
            "classical_dpll" => return Some(SolverVariant::ClassicalDPLL),
            "dpll" => return Some(SolverVariant::DPLL),
            "dpll_watchers" => return Some(SolverVariant::DPLLWatchers),
            _ => return None,
        }
    }
    return None;
}

/*
A function to read Boolean values from json. Returns Boolean value or None if invalid.
*/
pub fn read_boolean_json(value: &Value) -> Option<bool> {
    if value.is_boolean() {
        return value.as_bool();
    } else {
        return None;
    }
}

/*
A function to read path strings from json. Returns path as String.
*/
pub fn read_path(run_bench: bool, json: &Value) -> String {
    let path_json: &Value;
    if run_bench {
        path_json = json.get("BenchmarkPath").expect("file should have BenchmarkPath key");
    } else {
        path_json = json.get("InstancePath").expect("file should have InstancePath key");
    }
    let path = read_string_json(path_json).expect("BenchmarkPath and InstancePath must be a string");
    return path;
}

/*
A function to read String values from json. Returns String value or None if invalid.
*/
pub fn read_string_json(value: &Value) -> Option<String> {
    if value.is_string() {
        return Some(value.as_str().unwrap().to_string());
    }
    return None;
}
