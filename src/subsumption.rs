use crate::data_structures::{Formula, Statistics};

/*
A function to remove every clause strictly containing another active clause. The smaller
clause implies the larger one, so the larger clause is redundant. Only the DP variants
apply this rule, and it is disabled by default: the measured cost exceeds the benefit on
the benchmark inputs.

Returns true when at least one clause was removed.
*/
pub fn eliminate_subsumed(formula: &mut Formula, statistics: &mut Statistics) -> bool {
    let mut subsumed_references = Vec::new();
    let clause_list = &formula.clause_set.clause_list;
    for (subsuming_index, subsuming_clause) in clause_list.iter().enumerate() {
        if subsuming_clause.is_removed {
            continue;
        }
        for (subsumed_index, subsumed_clause) in clause_list.iter().enumerate() {
            if subsuming_index == subsumed_index || subsumed_clause.is_removed {
                continue;
            }
            if subsumed_references.contains(&(subsumed_index as i32)) {
                continue;
            }
            statistics.increment_clause_visit_count();
            if subsuming_clause.is_strict_subset_of(subsumed_clause) {
                subsumed_references.push(subsumed_index as i32);
            }
        }
    }
    for clause_index in &subsumed_references {
        formula.clause_set.clause_list[*clause_index as usize].is_removed = true;
        formula.clause_set.decrement_counter();
        formula.clause_references.retain(|&_key, &value| { value != *clause_index});
    }
    return !subsumed_references.is_empty();
}
