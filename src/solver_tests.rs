#[cfg(test)]
mod test {
    use crate::{data_structures::{Config, Formula, LiteralSelection, Solution, SolverVariant, Statistics}, solver::solve};

    fn config() -> Config {
        Config {
            literal_selection: LiteralSelection::Ordered,
            pure_literal_deletion: false,
            subsumption: false,
        }
    }

    fn variants() -> Vec<SolverVariant> {
        return vec![
            SolverVariant::DPDefault,
            SolverVariant::DP,
            SolverVariant::ClassicalDPLL,
            SolverVariant::DPLL,
            SolverVariant::DPLLWatchers,
        ];
    }

    fn run_clauses(num_variables: i32, clauses: Vec<Vec<i32>>, variant: &SolverVariant) -> Solution {
        let formula = Formula::from_clauses(num_variables, clauses, config());
        return solve(formula, variant, &mut Statistics::new());
    }

    /*
    A reference decision procedure: tries every assignment over the variable set.
    */
    fn exhaustive_satisfiable(num_variables: i32, clauses: &Vec<Vec<i32>>) -> bool {
        for assignment_bits in 0..(1u32 << num_variables) {
            let satisfied = clauses.iter().all(|clause| clause.iter().any(|&literal| {
                let value = (assignment_bits >> (literal.abs() - 1)) & 1 == 1;
                if literal > 0 {value} else {!value}
            }));
            if satisfied {
                return true;
            }
        }
        return false;
    }

    /* START OF FACADE TESTS */

    /*
    Tests that every variant returns a total model over [1, num_variables] that satisfies
    every clause of a satisfiable instance.
    */
    #[test]
    fn model_is_total_and_satisfying_test() {
        let clauses = vec![vec![1, 2], vec![-1, 3], vec![-2, -3], vec![1, -3]];
        for variant in variants() {
            match run_clauses(3, clauses.clone(), &variant) {
                Solution::Satisfiable(model) => {
                    assert_eq!(3, model.len());
                    for variable in 1..=3 {
                        assert!(model.contains(&variable) || model.contains(&-variable));
                    }
                    for clause in &clauses {
                        assert!(clause.iter().any(|literal| model.contains(literal)),
                                "variant {:?}: clause {:?} not satisfied by {:?}", variant, clause, model);
                    }
                },
                Solution::Unsatisfiable => panic!("variant {:?} refuted a satisfiable instance", variant),
            }
        }
    }

    /*
    Tests that every variant agrees on the boundary cases.
    */
    #[test]
    fn boundary_agreement_test() {
        for variant in variants() {
            assert_eq!(true, run_clauses(2, Vec::new(), &variant).is_satisfiable());
            assert_eq!(false, run_clauses(2, vec![Vec::new()], &variant).is_satisfiable());
            assert_eq!(true, run_clauses(1, vec![vec![1]], &variant).is_satisfiable());
            assert_eq!(false, run_clauses(1, vec![vec![1], vec![-1]], &variant).is_satisfiable());
        }
    }

    /*
    Tests that every variant removes the tautological clause and reports satisfiable.
    */
    #[test]
    fn tautology_agreement_test() {
        for variant in variants() {
            assert_eq!(true, run_clauses(2, vec![vec![1, -1, 2]], &variant).is_satisfiable());
        }
    }

    /*
    Tests that every variant satisfies the pure literal instance with the pure literal true.
    */
    #[test]
    fn pure_literal_agreement_test() {
        for variant in variants() {
            match run_clauses(2, vec![vec![1, 2], vec![1, -2]], &variant) {
                Solution::Satisfiable(model) => assert!(model.contains(&1)),
                Solution::Unsatisfiable => panic!("variant {:?} refuted a satisfiable instance", variant),
            }
        }
    }

    /*
    Tests that every variant refutes the pigeonhole instance PHP(3,2), read from file.
    */
    #[test]
    fn pigeonhole_agreement_test() {
        for variant in variants() {
            let formula = Formula::new("./test_files/php_3_2.cnf".to_string(), config());
            let solution = solve(formula, &variant, &mut Statistics::new());
            assert_eq!(Solution::Unsatisfiable, solution);
        }
    }
    /* END OF FACADE TESTS */

    /* START OF VARIANT AGREEMENT TESTS */

    /*
    Deterministic pseudo-random number generation via xorshift with a fixed seed.
    */
    fn next_rand(state: &mut u64) -> u64 {
        let mut x = *state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        *state = x;
        return x;
    }

    /*
    Generates a uniform random 3-SAT instance over the given number of variables.
    */
    fn random_3sat(num_variables: i32, num_clauses: i32, state: &mut u64) -> Vec<Vec<i32>> {
        let mut clauses = Vec::new();
        for _ in 0..num_clauses {
            let mut clause = Vec::new();
            while clause.len() < 3 {
                let variable = (next_rand(state) % num_variables as u64) as i32 + 1;
                if clause.iter().any(|&literal: &i32| literal.abs() == variable) {
                    continue;
                }
                let literal = if next_rand(state) % 2 == 0 {variable} else {-variable};
                clause.push(literal);
            }
            clauses.push(clause);
        }
        return clauses;
    }

    /*
    Tests that all five variants agree with an exhaustive reference check on a batch of
    fixed-seed random 3-SAT instances. Models may differ between variants; verdicts may not.
    */
    #[test]
    fn random_instance_agreement_test() {
        let mut state = 123456789u64;
        for _ in 0..12 {
            let clauses = random_3sat(8, 34, &mut state);
            let expected = exhaustive_satisfiable(8, &clauses);
            for variant in variants() {
                let solution = run_clauses(8, clauses.clone(), &variant);
                assert_eq!(expected, solution.is_satisfiable(),
                        "variant {:?} disagrees with the reference on {:?}", variant, clauses);
                if let Solution::Satisfiable(model) = &solution {
                    for clause in &clauses {
                        assert!(clause.iter().any(|literal| model.contains(literal)));
                    }
                }
            }
        }
    }
    /* END OF VARIANT AGREEMENT TESTS */
}
