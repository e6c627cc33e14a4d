//! Profit and weight evaluation of selections.

use crate::problem::Item;
use crate::solution::Solution;

/// Profit and weight of a selection, computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    pub profit: u64,
    pub weight: u64,
}

/// Total profit of the included items.
pub fn profit_of(solution: &Solution, items: &[Item]) -> u64 {
    debug_assert_eq!(solution.len(), items.len());
    solution.selected_indices().map(|i| items[i].profit).sum()
}

/// Total weight of the included items.
pub fn weight_of(solution: &Solution, items: &[Item]) -> u64 {
    debug_assert_eq!(solution.len(), items.len());
    solution.selected_indices().map(|i| items[i].weight).sum()
}

/// Profit and weight together.
pub fn evaluate(solution: &Solution, items: &[Item]) -> Evaluation {
    debug_assert_eq!(solution.len(), items.len());
    solution
        .selected_indices()
        .fold(Evaluation::default(), |acc, i| Evaluation {
            profit: acc.profit + items[i].profit,
            weight: acc.weight + items[i].weight,
        })
}

/// Check whether the selection fits in the knapsack.
pub fn is_feasible(solution: &Solution, items: &[Item], capacity: u64) -> bool {
    weight_of(solution, items) <= capacity
}
