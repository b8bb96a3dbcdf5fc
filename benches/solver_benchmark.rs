use criterion::{criterion_group, criterion_main, Criterion};
use sat_evaluators::data_structures::{Config, Formula, LiteralSelection, SolverVariant, Statistics};
use sat_evaluators::solver::solve;

fn config() -> Config {
    Config {
        literal_selection: LiteralSelection::Ordered,
        pure_literal_deletion: false,
        subsumption: false,
    }
}

/*
Builds the pigeonhole instance PHP(pigeons, holes): every pigeon sits in some hole and no
two pigeons share a hole. Unsatisfiable whenever pigeons > holes, which makes the search
explore the whole tree.
*/
fn pigeonhole(pigeons: i32, holes: i32) -> (i32, Vec<Vec<i32>>) {
    let variable = |pigeon: i32, hole: i32| (pigeon - 1) * holes + hole;
    let mut clauses = Vec::new();
    for pigeon in 1..=pigeons {
        clauses.push((1..=holes).map(|hole| variable(pigeon, hole)).collect());
    }
    for hole in 1..=holes {
        for first_pigeon in 1..=pigeons {
            for second_pigeon in (first_pigeon + 1)..=pigeons {
                clauses.push(vec![-variable(first_pigeon, hole), -variable(second_pigeon, hole)]);
            }
        }
    }
    (pigeons * holes, clauses)
}

fn bench_variants(c: &mut Criterion) {
    let variants = [
        ("dp_default", SolverVariant::DPDefault),
        ("dp", SolverVariant::DP),
        ("classical_dpll", SolverVariant::ClassicalDPLL),
        ("dpll", SolverVariant::DPLL),
        ("dpll_watchers", SolverVariant::DPLLWatchers),
    ];
    let (num_variables, clauses) = pigeonhole(4, 3);

    let mut group = c.benchmark_group("pigeonhole_4_3");
    group.sample_size(10);
    for (name, variant) in variants {
        group.bench_function(name, |b| {
            b.iter(|| {
                let formula = Formula::from_clauses(num_variables, clauses.clone(), config());
                solve(formula, &variant, &mut Statistics::new())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_variants);
criterion_main!(benches);
