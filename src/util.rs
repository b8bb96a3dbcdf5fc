use multimap::MultiMap;
use regex::Regex;

use crate::data_structures::{Clause, Formula};

/*
A function to check for unit literals in a list of clauses. Clauses are scanned in
clause id order so propagation always picks the lowest numbered unit clause first.

Returns a list of unit literals.
*/
pub fn get_unit_literals(clause_list: &Vec<Clause>) -> Vec<i32> {
    let mut unit_literals = Vec::new();
    for clause in clause_list {
        let unit_clause_check = clause.is_unit_clause();
        if !unit_clause_check.is_none() {
            unit_literals.push(unit_clause_check.unwrap());
        }
    }
    return unit_literals;
}

/*
A function to find the number of references a variable has in the current formula. It also
determines the sign priority.

choose_positive determines whether the variable should be decided positively or negatively.
If the variable appears at least as often positively as negatively, we choose the variable
positively. Otherwise, we choose the variable negatively.
*/
pub fn get_variable_state_sum(clause_references: &MultiMap<i32, i32>, variable: i32) -> (i32, bool) {
    let mut pos_appearances = 0;
    if clause_references.contains_key(&variable) {
        pos_appearances += clause_references.get_vec(&variable).unwrap().len() as i32;
    }
    let mut neg_appearances = 0;
    if clause_references.contains_key(&-variable) {
        neg_appearances += clause_references.get_vec(&-variable).unwrap().len() as i32;
    }
    let choose_positive = pos_appearances >= neg_appearances;
    let appearances = pos_appearances + neg_appearances;
    return (appearances, choose_positive);
}

/*
A function to count how many active clauses a literal appears in. Used by the trail-based
variants, whose clause_references stay fixed while the is_removed flags change.
*/
pub fn count_active_references(formula: &Formula, literal: i32) -> i32 {
    let clause_references = formula.clause_references.get_vec(&literal);
    if clause_references.is_none() {
        return 0;
    }
    let mut count = 0;
    for clause_index in clause_references.unwrap() {
        if !formula.clause_set.clause_list[*clause_index as usize].is_removed {
            count += 1;
        }
    }
    return count;
}

/*
A function to extend a partial assignment into a total model over [1, num_variables].
Variables never forced or decided take positive polarity.

Returns the model ordered by variable id.
*/
pub fn complete_model(num_variables: i32, assignment: &Vec<i32>) -> Vec<i32> {
    let mut model = Vec::new();
    for variable in 1..=num_variables {
        if assignment.contains(&-variable) {
            model.push(-variable);
        } else {
            model.push(variable);
        }
    }
    return model;
}

/*
A function to get the instance name from a file_path.

Example: file_path = ./benchmarks/uniform/uf50-01.cnf
            => instance_name = uf50-01.cnf

Returns the instance name.
*/
pub fn read_instance_name(file_path: &String) -> String {
    let re_get_instance = Regex::new(r"[^/\\]+$").unwrap();
    let instance_name = re_get_instance.find(&file_path).map(|m| m.as_str()).unwrap().to_string();
    return instance_name;
}

/*
A function to read the instance size out of the "p cnf <variables> <clauses>" header line
without building the formula. Used to skip large benchmark instances.

Returns (number of variables, number of clauses), or None when no header is present.
*/
pub fn read_instance_header(file_path: &String) -> Option<(i32, i32)> {
    let re_header = Regex::new(r"p\s+cnf\s+(\d+)\s+(\d+)").unwrap();
    if let Ok(lines) = Formula::read_lines(file_path) {
        for line in lines {
            if let Ok(l) = line {
                if let Some(captures) = re_header.captures(&l) {
                    let num_variables = captures[1].parse().unwrap();
                    let num_clauses = captures[2].parse().unwrap();
                    return Some((num_variables, num_clauses));
                }
            }
        }
    }
    return None;
}
