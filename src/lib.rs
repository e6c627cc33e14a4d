//! # Tabu Knapsack
//!
//! A tabu search metaheuristic for the 0/1 knapsack problem.
//!
//! The search starts from a greedy, density-ordered packing and repeatedly
//! moves to the first feasible single-flip neighbor of the current selection.
//! Recently accepted selections are tabu unless they beat the best profit
//! seen so far (aspiration). After a fixed iteration budget the best
//! selection is returned.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod initial;
pub mod neighborhood;
pub mod problem;
pub mod solution;
pub mod tabu;
pub mod utils;

use crate::config::Config;
use crate::evaluator::{evaluate, profit_of};
use crate::initial::{greedy_solution, greedy_solution_with_seed};
use crate::neighborhood::tweak;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::tabu::TabuMemory;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Outcome of a single search iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The candidate became the current solution.
    Accepted { improved: bool },
    /// The candidate was tabu and did not beat the best profit.
    Rejected,
}

/// Final state of a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub best: Solution,
    pub best_profit: u64,
    pub best_weight: u64,
    /// Profit of the greedy starting solution
    pub initial_profit: u64,
    pub iterations: u32,
    pub accepted: u32,
    pub rejected: u32,
    /// Iteration that produced `best`, `None` if the greedy start was never beaten
    pub best_iteration: Option<u32>,
    /// Best profit after each iteration
    pub profit_history: Vec<u64>,
    pub run_time: Duration,
}

/// The tabu search driver.
pub struct TabuSearch {
    pub problem: Problem,
    pub config: Config,
    pub current: Solution,
    pub current_profit: u64,
    pub best: Solution,
    pub best_profit: u64,
    pub memory: TabuMemory,
    pub initial_profit: u64,
    pub iterations: u32,
    pub accepted: u32,
    pub rejected: u32,
    pub best_iteration: Option<u32>,
    pub profit_history: Vec<u64>,
    pub run_time: Duration,
    stalled: bool,
}

impl TabuSearch {
    /// Create a new search for the given problem and configuration.
    pub fn new(problem: Problem, config: Config) -> Self {
        let n = problem.item_count();
        TabuSearch {
            memory: TabuMemory::new(config.tabu_length),
            problem,
            config,
            current: Solution::new(n),
            current_profit: 0,
            best: Solution::new(n),
            best_profit: 0,
            initial_profit: 0,
            iterations: 0,
            accepted: 0,
            rejected: 0,
            best_iteration: None,
            profit_history: Vec::new(),
            run_time: Duration::from_secs(0),
            stalled: false,
        }
    }

    /// Reset the search state to the greedy starting solution.
    pub fn initialize(&mut self) {
        let start = match self.config.seed {
            Some(seed) => greedy_solution_with_seed(&self.problem, seed),
            None => greedy_solution(&self.problem),
        };
        let evaluation = evaluate(&start, &self.problem.items);
        let profit = evaluation.profit;

        debug!(
            "greedy start: profit {} weight {}/{}",
            profit, evaluation.weight, self.problem.capacity
        );

        self.current = start.clone();
        self.current_profit = profit;
        self.best = start;
        self.best_profit = profit;
        self.initial_profit = profit;
        self.memory = TabuMemory::new(self.config.tabu_length);
        self.iterations = 0;
        self.accepted = 0;
        self.rejected = 0;
        self.best_iteration = None;
        self.profit_history =
            Vec::with_capacity((self.config.max_iterations as usize).min(1 << 16));
        self.stalled = false;
    }

    /// Perform one iteration: generate a neighbor and apply the acceptance rule.
    pub fn step(&mut self) -> Step {
        let iteration = self.iterations;
        self.iterations += 1;

        let candidate = tweak(&self.current, self.problem.capacity, &self.problem.items);
        let candidate_profit = profit_of(&candidate, &self.problem.items);
        let signature = candidate.signature();
        let is_tabu = self.memory.contains(&signature);

        let step = if !is_tabu || candidate_profit > self.best_profit {
            let improved = candidate_profit > self.best_profit;
            self.memory.record(signature);

            if improved {
                debug!(
                    "iteration {}: best profit {} -> {}",
                    iteration, self.best_profit, candidate_profit
                );
                self.best = candidate.clone();
                self.best_profit = candidate_profit;
                self.best_iteration = Some(iteration);
            }

            self.current = candidate;
            self.current_profit = candidate_profit;
            self.accepted += 1;
            Step::Accepted { improved }
        } else {
            // Neighbor generation is deterministic, so the same candidate
            // comes back on every following iteration.
            if !self.stalled {
                debug!(
                    "iteration {}: candidate {} is tabu, search stalled",
                    iteration, candidate
                );
                self.stalled = true;
            }
            self.rejected += 1;
            Step::Rejected
        };

        self.profit_history.push(self.best_profit);
        step
    }

    /// Run the search for the configured number of iterations.
    pub fn run(&mut self) -> SearchResult {
        let start_time = Instant::now();

        self.initialize();

        if !self.problem.is_empty() {
            for _ in 0..self.config.max_iterations {
                self.step();
            }
        }

        self.run_time = start_time.elapsed();

        info!(
            "{}: best profit {} after {} iterations ({} accepted, {} rejected)",
            self.problem.name, self.best_profit, self.iterations, self.accepted, self.rejected
        );

        self.result()
    }

    /// Snapshot of the current best and run statistics.
    pub fn result(&self) -> SearchResult {
        SearchResult {
            best: self.best.clone(),
            best_profit: self.best_profit,
            best_weight: evaluate(&self.best, &self.problem.items).weight,
            initial_profit: self.initial_profit,
            iterations: self.iterations,
            accepted: self.accepted,
            rejected: self.rejected,
            best_iteration: self.best_iteration,
            profit_history: self.profit_history.clone(),
            run_time: self.run_time,
        }
    }

    /// Whether a rejection has occurred, after which the state never changes.
    pub fn is_stalled(&self) -> bool {
        self.stalled
    }
}

/// Run a tabu search on `problem` and return the result.
pub fn solve(problem: Problem, config: Config) -> SearchResult {
    TabuSearch::new(problem, config).run()
}
