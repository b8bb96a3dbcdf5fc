use std::{fs::File, io::{self, BufRead}, path::Path};
use multimap::MultiMap;

/*
An enum to store the solver variant to run.

DPDefault => Davis-Putnam with first-literal branching.
DP => Davis-Putnam with frequency-heuristic branching.
ClassicalDPLL => trail-based DPLL with first-literal branching.
DPLL => trail-based DPLL with frequency-heuristic branching.
DPLLWatchers => DPLL with two-literal watched propagation.
*/
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SolverVariant {
    DPDefault,
    DP,
    ClassicalDPLL,
    DPLL,
    DPLLWatchers,
}

/*
A struct to store:
- the solver variant
- whether you are running a benchmark or instance,
- the benchmark directory path or the instance file path
- the number of repetitions to run per benchmark instance
- whether large benchmark instances should be included
- the filename you want the results stored in
*/
pub struct Solver {
    pub variant: SolverVariant,
    pub run_bench: bool,
    pub path: String,
    pub repetitions: i32,
    pub include_large: bool,
    pub output: String,
}

/*
An enum to store the type of literal selection.
*/
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LiteralSelection {
    Ordered, // First literal of the first active clause
    VariableStateSum, // Variable State Sum selection
}

/*
A struct to store the solver configuration.
*/
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub literal_selection: LiteralSelection,
    pub pure_literal_deletion: bool,
    pub subsumption: bool,
}

impl Config {
    pub fn pure_literal_deletion_enabled(&self) -> bool {
        return self.pure_literal_deletion;
    }

    pub fn subsumption_enabled(&self) -> bool {
        return self.subsumption;
    }

    /*
    A function to fix the configuration knobs each solver variant mandates.

    The DP variants and the heuristic dpll always apply pure literal deletion; classical_dpll
    applies it only when the host configuration asks for it; the watcher engine never does.
    Subsumption is only ever applied by the DP variants.
    */
    pub fn for_variant(variant: &SolverVariant, host_config: &Config) -> Config {
        match variant {
            SolverVariant::DPDefault => Config {
                literal_selection: LiteralSelection::Ordered,
                pure_literal_deletion: true,
                subsumption: host_config.subsumption,
            },
            SolverVariant::DP => Config {
                literal_selection: LiteralSelection::VariableStateSum,
                pure_literal_deletion: true,
                subsumption: host_config.subsumption,
            },
            SolverVariant::ClassicalDPLL => Config {
                literal_selection: LiteralSelection::Ordered,
                pure_literal_deletion: host_config.pure_literal_deletion,
                subsumption: false,
            },
            SolverVariant::DPLL => Config {
                literal_selection: LiteralSelection::VariableStateSum,
                pure_literal_deletion: true,
                subsumption: false,
            },
            SolverVariant::DPLLWatchers => Config {
                literal_selection: LiteralSelection::VariableStateSum,
                pure_literal_deletion: false,
                subsumption: false,
            },
        }
    }
}

/*
A struct to store statistics relating to number of unit propagations, decision and
backtrack counts, and the number of clauses visited during propagation.
*/
#[derive(Clone)]
pub struct Statistics {
    pub propagation_count: i32,
    pub decision_count: i32,
    pub backtrack_count: i32,
    pub clause_visit_count: i64,
}

impl Statistics {
    /*
    Create an empty statistics struct.
    */
    pub fn new() -> Self {
        Statistics { propagation_count: 0, decision_count: 0, backtrack_count: 0, clause_visit_count: 0 }
    }

    /*
    A function to increment propagation count.
    */
    pub fn increment_propagation_count(&mut self) {
        self.propagation_count += 1;
    }

    /*
    A function to increment decision count.
    */
    pub fn increment_decision_count(&mut self) {
        self.decision_count += 1;
    }

    /*
    A function to increment backtrack count.
    */
    pub fn increment_backtrack_count(&mut self) {
        self.backtrack_count += 1;
    }

    /*
    A function to increment the number of clauses visited during propagation.
    */
    pub fn increment_clause_visit_count(&mut self) {
        self.clause_visit_count += 1;
    }
}

/*
An enum to store the result of a search procedure at the current decision branch.
*/
#[derive(Clone, Debug, PartialEq)]
pub enum SearchResult {
    SAT,
    UNSAT,
}

/*
An enum to store the overall verdict returned by the solver facade.

Satisfiable carries a total model: one signed literal per variable in [1, num_variables].
*/
#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    Satisfiable(Vec<i32>),
    Unsatisfiable,
}

impl Solution {
    pub fn is_satisfiable(&self) -> bool {
        return !self.eq(&Solution::Unsatisfiable);
    }
}

/*
A struct for storing a singular clause as a sorted, duplicate-free list of literals.
The is_removed variable marks whether the clause is removed or not.
*/
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Clause {
    pub literals: Vec<i32>,
    pub is_removed: bool,
}

impl Clause {
    /*
    A function to create a clause from a list of literals. Duplicate literals are
    collapsed and the literals are kept sorted so membership is a binary search.
    */
    pub fn new(mut literals: Vec<i32>) -> Self {
        literals.sort();
        literals.dedup();
        Clause {
            literals,
            is_removed: false,
        }
    }

    /*
    A function that checks for a unit clause and returns the unit literal if there is one.
    */
    pub fn is_unit_clause(&self) -> Option<i32> {
        if self.literals.len() == 1 && !self.is_removed {
            return Some(self.literals[0]);
        } else {
            return None;
        }
    }

    /*
    A function to check whether the given clause contains no literals.
    */
    pub fn is_empty(&self) -> bool {
        return self.literals.is_empty() && !self.is_removed;
    }

    /*
    A function to check whether the clause contains the given literal.
    */
    pub fn contains(&self, literal: i32) -> bool {
        return self.literals.binary_search(&literal).is_ok();
    }

    /*
    A function to check whether the clause contains some literal together with its negation.
    */
    pub fn is_tautology(&self) -> bool {
        return self.literals.iter().any(|&literal| self.contains(-literal));
    }

    /*
    A function that removes the given literal from the clause.

    Returns the position the literal held, so the removal can be journaled and undone.
    */
    pub fn remove_literal(&mut self, literal: i32) -> usize {
        let position = self.literals.iter().position(|&x| x == literal).unwrap();
        self.literals.remove(position);
        return position;
    }

    /*
    A function to restore a literal at the position it was removed from.
    */
    pub fn insert_literal(&mut self, position: usize, literal: i32) {
        self.literals.insert(position, literal);
    }

    /*
    A function to check whether every literal of this clause appears in the other clause,
    with the other clause strictly larger.
    */
    pub fn is_strict_subset_of(&self, other: &Clause) -> bool {
        if self.literals.len() >= other.literals.len() {
            return false;
        }
        return self.literals.iter().all(|&literal| other.contains(literal));
    }

    /*
    A function to get the number of literals in the clause.
    */
    pub fn get_clause_length(&self) -> usize {
        return self.literals.len();
    }
}

/*
A struct for storing the clause database and the number of non-removed clauses.
*/
#[derive(Clone, Debug, PartialEq)]
pub struct ClauseSet {
    pub clause_list: Vec<Clause>,
    pub clause_count: i32,
}

impl ClauseSet {
    /*
    A function to decrease the clause counter by one.
    */
    pub fn decrement_counter(&mut self) {
        self.clause_count -= 1;
    }

    /*
    A function to increase the clause counter by one. Used when undoing a journaled removal.
    */
    pub fn increment_counter(&mut self) {
        self.clause_count += 1;
    }

    /*
    Checks for the satisfiability constraint where the empty set of clauses exists.
    */
    pub fn contains_empty_set(&self) -> bool {
        return self.clause_count.eq(&0);
    }

    /*
    Checks for the unsatisfiability constraint where the empty clause exists.
    */
    pub fn contains_empty_clause(&self) -> bool {
        return self.clause_count.eq(&-1);
    }

    /*
    Checks if a given clause is a contradiction, updates the necessary state variable,
    and returns true if it is, false otherwise.
    */
    pub fn check_contradiction(&mut self, clause_index: Option<i32>) -> bool {
        if clause_index.is_none() {
            if self.clause_count.eq(&-1) {true} else {false}
        } else {
            if self.clause_list[clause_index.unwrap() as usize].is_empty() {
                self.clause_count = -1;
                return true;
            } else {
                return false;
            }
        }
    }
}

/*
An enum for storing whether a trail assignment came from a branching decision or from
unit propagation.
*/
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Reason {
    Decision,
    Propagated,
}

/*
A struct for storing a single assignment of a variable on the trail: the literal made
true and the reason it was assigned.
*/
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub literal: i32,
    pub reason: Reason,
}

impl Assignment {
    /*
    A function to return whether the given assignment was the result of a decision or implication.

    Returns true for a decision, and false for an implication.
    */
    pub fn is_decision(&self) -> bool {
        return self.reason.eq(&Reason::Decision);
    }
}

/*
An enum for the journaled mutations the in-place DPLL performs on the clause database.
Undo replays these in reverse.
*/
#[derive(Clone, Debug)]
pub enum JournalEntry {
    ClauseDeactivated(i32),
    LiteralRemoved { clause_index: i32, literal: i32, position: usize },
}

/*
An enum for the journaled mutations the watcher engine performs. Clauses are never
shrunk under watchers; only the satisfied flag and the watcher index change.
*/
#[derive(Clone, Debug)]
pub enum WatcherJournalEntry {
    ClauseSatisfied(i32),
    WatcherSwapped { clause_index: i32, old_literal: i32, new_literal: i32 },
}

/*
A struct for storing the trail and journal lengths at the moment a decision is made.
Backtracking pops both structures down to the stored lengths.
*/
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailMark {
    pub trail_length: usize,
    pub journal_length: usize,
}

/*
A struct for storing the core data structures required for performing the search procedures.

- num_variables stores the number of variables declared for the formula.
- clause_set stores the clause database and clause count.
- clause_references stores the literal occurrence index - in a multimap for O(1) access.
- assignment stores the literals made true by simplification (the DP context).
- config stores the configuration of the solver stored in config.json.
*/
#[derive(Clone)]
pub struct Formula {
    pub num_variables: i32,
    pub clause_set: ClauseSet,
    pub clause_references: MultiMap<i32, i32>,
    pub assignment: Vec<i32>,
    pub config: Config,
}

impl Formula {
    /*
    Creates a new Formula data structure from a CNF instance stored in DIMACS format.
    */
    pub fn new(filename: String, config: Config) -> Self {
        let (num_variables, clauses) = Formula::read_dimacs(filename);
        return Formula::from_clauses(num_variables, clauses, config);
    }

    /*
    Creates a new Formula data structure from an explicit list of clauses. Duplicate
    literals within a clause are collapsed. An explicitly empty clause marks the
    formula immediately unsatisfiable.
    */
    pub fn from_clauses(num_variables: i32, clauses: Vec<Vec<i32>>, config: Config) -> Self {
        let mut clause_list = Vec::new();
        let mut clause_references = MultiMap::new();
        let mut found_empty_clause = false;
        for literals in clauses {
            for &literal in &literals {
                if literal == 0 || literal.abs() > num_variables {
                    panic!("literal {} is outside the declared variable range [1, {}]", literal, num_variables);
                }
            }
            let clause = Clause::new(literals);
            if clause.literals.is_empty() {
                found_empty_clause = true;
            }
            for &literal in &clause.literals {
                clause_references.insert(literal, clause_list.len() as i32);
            }
            clause_list.push(clause);
        }
        let clause_count = clause_list.len() as i32;
        let mut clause_set = ClauseSet { clause_list, clause_count };
        if found_empty_clause {
            clause_set.clause_count = -1;
        }
        return Formula {
            num_variables,
            clause_set,
            clause_references,
            assignment: Vec::new(),
            config,
        };
    }

    /*
    Parses a CNF instance stored in DIMACS format.

    Comment lines start with "c", the header line "p cnf <variables> <clauses>" declares the
    instance size, and every clause line is a whitespace-separated list of nonzero literals
    terminated by 0. SATLIB-style "%" and bare "0" trailer lines are skipped.

    Returns (number of variables, list of clauses).
    */
    pub fn read_dimacs(filename: String) -> (i32, Vec<Vec<i32>>) {
        let mut num_variables = 0;
        let mut clauses = Vec::new();
        if let Ok(lines) = Formula::read_lines(filename) {
            for line in lines {
                if let Ok(l) = line {
                    let vec = l.split_whitespace().collect::<Vec<&str>>();
                    if vec.is_empty() || vec[0].eq("c") || vec[0].eq("%") {
                        continue;
                    } else if vec[0].eq("p") {
                        num_variables = vec[2].parse().expect("header line should read 'p cnf <variables> <clauses>'");
                    } else if vec[0].eq("0") {
                        continue;
                    } else {
                        let literals: Vec<i32> = vec.iter()
                            .map(|token| token.parse().expect("clause lines should only contain integers"))
                            .take_while(|&literal| literal != 0)
                            .collect();
                        clauses.push(literals);
                    }
                }
            }
        }
        return (num_variables, clauses);
    }

    /*
    A function to parse a given file into separate lines.
    */
    pub fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
    where P: AsRef<Path>, {
        let file = File::open(filename)?;
        Ok(io::BufReader::new(file).lines())
    }

    /*
    A function that will return true if the current state is either satisfiable (true) or
    unsatisfiable (false).
    */
    pub fn check_solved(&self) -> bool {
        if self.clause_set.contains_empty_clause() || self.clause_set.contains_empty_set() {
            return true;
        } else {
            return false;
        }
    }
}

/*
A struct for storing the core data structures required for the trail-based DPLL variants.
The clause database is mutated in place; every mutation is journaled so backtracking can
replay it in reverse.

- core_data stores the formula. Its clause_references stay fixed after construction and
  are filtered through the is_removed flags and the values table.
- values stores the truth value of each variable, indexed by variable id.
- trail stores the chronological list of assignments with their reasons.
- journal stores the clause database mutations since the start of the search.
*/
#[derive(Clone)]
pub struct TrailFormula {
    pub core_data: Formula,
    pub values: Vec<Option<bool>>,
    pub trail: Vec<Assignment>,
    pub journal: Vec<JournalEntry>,
}

impl TrailFormula {
    /*
    Creates a new TrailFormula data structure.
    */
    pub fn new(formula: Formula) -> Self {
        let values = vec![None; (formula.num_variables + 1) as usize];
        return TrailFormula {
            core_data: formula,
            values,
            trail: Vec::new(),
            journal: Vec::new(),
        };
    }

    /*
    A function to get the truth value of a literal under the current trail.
    */
    pub fn value(&self, literal: i32) -> Option<bool> {
        return self.values[literal.abs() as usize].map(|value| value == (literal > 0));
    }

    /*
    A function to record the current trail and journal lengths prior to a decision.
    */
    pub fn mark(&self) -> TrailMark {
        return TrailMark {
            trail_length: self.trail.len(),
            journal_length: self.journal.len(),
        };
    }

    /*
    A function to push an assignment onto the trail and set the variable value.
    */
    pub fn push_trail(&mut self, literal: i32, reason: Reason) {
        self.values[literal.abs() as usize] = Some(literal > 0);
        self.trail.push(Assignment { literal, reason });
    }

    /*
    A function to mark a clause removed, with the removal journaled.
    */
    pub fn deactivate_clause(&mut self, clause_index: i32) {
        self.core_data.clause_set.clause_list[clause_index as usize].is_removed = true;
        self.core_data.clause_set.decrement_counter();
        self.journal.push(JournalEntry::ClauseDeactivated(clause_index));
    }

    /*
    A function to remove a literal from a clause, with the removal journaled.
    */
    pub fn remove_literal_from_clause(&mut self, clause_index: i32, literal: i32) {
        let position = self.core_data.clause_set.clause_list[clause_index as usize].remove_literal(literal);
        self.journal.push(JournalEntry::LiteralRemoved { clause_index, literal, position });
    }

    /*
    A function to restore the formula to the state it held when the given mark was taken.
    The journal is replayed in reverse and the trail is popped, unassigning variables.
    */
    pub fn pop_until(&mut self, mark: &TrailMark) {
        while self.journal.len() > mark.journal_length {
            match self.journal.pop().unwrap() {
                JournalEntry::ClauseDeactivated(clause_index) => {
                    self.core_data.clause_set.clause_list[clause_index as usize].is_removed = false;
                    self.core_data.clause_set.increment_counter();
                },
                JournalEntry::LiteralRemoved { clause_index, literal, position } => {
                    self.core_data.clause_set.clause_list[clause_index as usize].insert_literal(position, literal);
                },
            }
        }
        while self.trail.len() > mark.trail_length {
            let assignment = self.trail.pop().unwrap();
            self.values[assignment.literal.abs() as usize] = None;
        }
    }
}

/*
A struct for storing the core data structures required for the two-literal watching engine.
Clauses are never shrunk; falsified literals are tracked through the values table and every
active non-unit clause keeps exactly two watched literals.

- core_data stores the formula. The satisfied flag of a clause is its is_removed flag.
- values and trail are as in TrailFormula.
- watchers maps each literal to the clauses currently watching it - in a multimap for O(1) access.
- watched_literals stores each clause's current watched pair, indexed by clause id.
- journal stores the satisfied-flag and watcher-swap mutations since the start of the search.
*/
#[derive(Clone)]
pub struct WatchedFormula {
    pub core_data: Formula,
    pub values: Vec<Option<bool>>,
    pub trail: Vec<Assignment>,
    pub watchers: MultiMap<i32, i32>,
    pub watched_literals: Vec<[i32; 2]>,
    pub journal: Vec<WatcherJournalEntry>,
}

impl WatchedFormula {
    /*
    Creates a new WatchedFormula data structure. Non-unit clauses watch their first two
    literals; a unit clause watches its single literal.
    */
    pub fn new(formula: Formula) -> Self {
        let values = vec![None; (formula.num_variables + 1) as usize];
        let mut watchers = MultiMap::new();
        let mut watched_literals = Vec::new();
        for (clause_index, clause) in formula.clause_set.clause_list.iter().enumerate() {
            if clause.is_removed {
                watched_literals.push([0, 0]);
                continue;
            }
            if clause.get_clause_length() == 1 {
                let literal = clause.literals[0];
                watchers.insert(literal, clause_index as i32);
                watched_literals.push([literal, literal]);
            } else {
                let first = clause.literals[0];
                let second = clause.literals[1];
                watchers.insert(first, clause_index as i32);
                watchers.insert(second, clause_index as i32);
                watched_literals.push([first, second]);
            }
        }
        return WatchedFormula {
            core_data: formula,
            values,
            trail: Vec::new(),
            watchers,
            watched_literals,
            journal: Vec::new(),
        };
    }

    /*
    A function to get the truth value of a literal under the current trail.
    */
    pub fn value(&self, literal: i32) -> Option<bool> {
        return self.values[literal.abs() as usize].map(|value| value == (literal > 0));
    }

    /*
    A function to record the current trail and journal lengths prior to a decision.
    */
    pub fn mark(&self) -> TrailMark {
        return TrailMark {
            trail_length: self.trail.len(),
            journal_length: self.journal.len(),
        };
    }

    /*
    A function to push an assignment onto the trail and set the variable value.
    */
    pub fn push_trail(&mut self, literal: i32, reason: Reason) {
        self.values[literal.abs() as usize] = Some(literal > 0);
        self.trail.push(Assignment { literal, reason });
    }

    /*
    A function to get the watched literal of a clause other than the given one.
    */
    pub fn other_watcher(&self, clause_index: i32, literal: i32) -> i32 {
        let watched = self.watched_literals[clause_index as usize];
        if watched[0] == literal {
            return watched[1];
        } else {
            return watched[0];
        }
    }

    /*
    A function to mark a clause satisfied, with the change journaled. The clause keeps its
    watcher entries; propagation skips satisfied clauses.
    */
    pub fn satisfy_clause(&mut self, clause_index: i32) {
        self.core_data.clause_set.clause_list[clause_index as usize].is_removed = true;
        self.core_data.clause_set.decrement_counter();
        self.journal.push(WatcherJournalEntry::ClauseSatisfied(clause_index));
    }

    /*
    A function to move a clause from watching old_literal to watching new_literal, with the
    swap journaled. Updates both the watcher index and the clause's watched pair.
    */
    pub fn swap_watcher(&mut self, clause_index: i32, old_literal: i32, new_literal: i32) {
        let watching = self.watchers.get_vec_mut(&old_literal).unwrap();
        let position = watching.iter().position(|&index| index == clause_index).unwrap();
        watching.remove(position);
        self.watchers.insert(new_literal, clause_index);

        let watched = &mut self.watched_literals[clause_index as usize];
        if watched[0] == old_literal {
            watched[0] = new_literal;
        } else {
            watched[1] = new_literal;
        }
        self.journal.push(WatcherJournalEntry::WatcherSwapped { clause_index, old_literal, new_literal });
    }

    /*
    A function to restore the engine to the state it held when the given mark was taken.
    The journal is replayed in reverse and the trail is popped, unassigning variables.
    */
    pub fn pop_until(&mut self, mark: &TrailMark) {
        while self.journal.len() > mark.journal_length {
            match self.journal.pop().unwrap() {
                WatcherJournalEntry::ClauseSatisfied(clause_index) => {
                    self.core_data.clause_set.clause_list[clause_index as usize].is_removed = false;
                    self.core_data.clause_set.increment_counter();
                },
                WatcherJournalEntry::WatcherSwapped { clause_index, old_literal, new_literal } => {
                    let watching = self.watchers.get_vec_mut(&new_literal).unwrap();
                    let position = watching.iter().position(|&index| index == clause_index).unwrap();
                    watching.remove(position);
                    self.watchers.insert(old_literal, clause_index);

                    let watched = &mut self.watched_literals[clause_index as usize];
                    if watched[0] == new_literal {
                        watched[0] = old_literal;
                    } else {
                        watched[1] = old_literal;
                    }
                },
            }
        }
        while self.trail.len() > mark.trail_length {
            let assignment = self.trail.pop().unwrap();
            self.values[assignment.literal.abs() as usize] = None;
        }
    }
}
