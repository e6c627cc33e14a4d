//! Greedy construction of the starting solution.
//!
//! Items are ranked by profit density (profit per unit of weight) and packed
//! in that order, skipping any item that no longer fits. The result is
//! feasible by construction.

use crate::problem::{Item, Problem};
use crate::solution::Solution;
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;

/// Profit per unit of weight, compared exactly.
#[derive(Debug, Clone, Copy)]
pub enum Density {
    /// Positive profit at zero weight.
    Unbounded,
    /// `profit / weight` with `weight > 0`.
    Finite { profit: u64, weight: u64 },
}

impl Density {
    /// Density of a single item. Zero-profit zero-weight items rank as zero.
    pub fn of(item: &Item) -> Self {
        match (item.profit, item.weight) {
            (0, 0) => Density::Finite {
                profit: 0,
                weight: 1,
            },
            (_, 0) => Density::Unbounded,
            (profit, weight) => Density::Finite { profit, weight },
        }
    }
}

impl Ord for Density {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Density::Unbounded, Density::Unbounded) => Ordering::Equal,
            (Density::Unbounded, Density::Finite { .. }) => Ordering::Greater,
            (Density::Finite { .. }, Density::Unbounded) => Ordering::Less,
            (
                Density::Finite {
                    profit: p1,
                    weight: w1,
                },
                Density::Finite {
                    profit: p2,
                    weight: w2,
                },
            ) => (*p1 as u128 * *w2 as u128).cmp(&(*p2 as u128 * *w1 as u128)),
        }
    }
}

impl PartialEq for Density {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Density {}

impl PartialOrd for Density {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Item indices by density, highest first, ties by ascending index.
pub fn density_order(items: &[Item]) -> Vec<usize> {
    let densities: Vec<Density> = items.iter().map(Density::of).collect();
    (0..items.len())
        .sorted_by(|&a, &b| densities[b].cmp(&densities[a]).then(a.cmp(&b)))
        .collect()
}

/// Build the greedy starting solution.
pub fn greedy_solution(problem: &Problem) -> Solution {
    pack(problem, &density_order(&problem.items))
}

/// Greedy start where exact density ties are broken by a seeded shuffle
/// instead of by index. Reproducible for a fixed seed.
pub fn greedy_solution_with_seed(problem: &Problem, seed: u64) -> Solution {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..problem.item_count()).collect();
    order.shuffle(&mut rng);

    let densities: Vec<Density> = problem.items.iter().map(Density::of).collect();
    // Stable sort keeps the shuffled order among equal densities.
    order.sort_by(|&a, &b| densities[b].cmp(&densities[a]));

    pack(problem, &order)
}

/// Walk `order` and include every item that still fits.
fn pack(problem: &Problem, order: &[usize]) -> Solution {
    let mut flags = vec![false; problem.item_count()];
    let mut load = 0u64;

    for &i in order {
        match load.checked_add(problem.items[i].weight) {
            Some(total) if total <= problem.capacity => {
                flags[i] = true;
                load = total;
            }
            _ => {}
        }
    }

    Solution::from_flags(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{profit_of, weight_of};

    fn problem(capacity: u64, items: &[(u64, u64)]) -> Problem {
        Problem::new(
            "test".to_string(),
            capacity,
            items.iter().map(|&(w, p)| Item::new(w, p)).collect(),
        )
    }

    #[test]
    fn test_greedy_picks_by_density() {
        let problem = problem(5, &[(2, 3), (3, 4), (4, 5)]);
        let solution = greedy_solution(&problem);
        assert_eq!(solution.to_bits(), "110");
        assert_eq!(profit_of(&solution, &problem.items), 7);
    }

    #[test]
    fn test_greedy_skips_without_backtracking() {
        // Density order is 0, 1, 2; item 1 does not fit after item 0 but item 2 does.
        let problem = problem(10, &[(6, 12), (5, 9), (4, 4)]);
        let solution = greedy_solution(&problem);
        assert_eq!(solution.to_bits(), "101");
        assert!(weight_of(&solution, &problem.items) <= problem.capacity);
    }

    #[test]
    fn test_ties_break_by_index() {
        // All three items have density 2.
        let problem = problem(4, &[(2, 4), (1, 2), (2, 4)]);
        assert_eq!(density_order(&problem.items), vec![0, 1, 2]);
        assert_eq!(greedy_solution(&problem).to_bits(), "110");
    }

    #[test]
    fn test_zero_weight_items() {
        let problem = problem(0, &[(3, 10), (0, 1), (0, 0), (1, 100)]);
        let order = density_order(&problem.items);
        assert_eq!(order[0], 1);
        assert_eq!(greedy_solution(&problem).to_bits(), "0110");
    }

    #[test]
    fn test_density_ordering() {
        let unbounded = Density::of(&Item::new(0, 1));
        let half = Density::of(&Item::new(2, 1));
        let also_half = Density::of(&Item::new(4, 2));
        let zero = Density::of(&Item::new(0, 0));
        assert!(unbounded > half);
        assert_eq!(half.cmp(&also_half), Ordering::Equal);
        assert!(zero < half);
        assert_eq!(zero.cmp(&Density::of(&Item::new(7, 0))), Ordering::Equal);
    }

    #[test]
    fn test_seeded_greedy_is_reproducible_and_feasible() {
        let problem = problem(6, &[(2, 4), (2, 4), (2, 4), (2, 4), (1, 1)]);
        let a = greedy_solution_with_seed(&problem, 7);
        let b = greedy_solution_with_seed(&problem, 7);
        assert_eq!(a, b);
        assert_eq!(a.selected_count(), 3);
        assert!(weight_of(&a, &problem.items) <= problem.capacity);
    }
}
