//! Single-flip neighborhood with feasibility repair.

use crate::evaluator::weight_of;
use crate::problem::Item;
use crate::solution::Solution;

/// Return the first feasible single-flip neighbor of `solution`.
///
/// Flags are tried in ascending index order and the first flip whose weight
/// stays within `capacity` wins, regardless of profit. When no flip is
/// feasible an unchanged copy of `solution` is returned. The result depends
/// only on the arguments.
pub fn tweak(solution: &Solution, capacity: u64, items: &[Item]) -> Solution {
    match first_feasible_flip(solution, capacity, items) {
        Some(index) => solution.flipped(index),
        None => solution.clone(),
    }
}

/// Index of the first flip that keeps the selection within `capacity`.
pub fn first_feasible_flip(solution: &Solution, capacity: u64, items: &[Item]) -> Option<usize> {
    let weight = weight_of(solution, items);

    (0..solution.len()).find(|&i| {
        let flipped_weight = if solution.is_selected(i) {
            weight - items[i].weight
        } else {
            match weight.checked_add(items[i].weight) {
                Some(w) => w,
                None => return false,
            }
        };
        flipped_weight <= capacity
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)]
    }

    #[test]
    fn test_first_flip_wins_even_if_worse() {
        let items = items();
        let current = Solution::from_bits("110").unwrap();
        // Dropping item 0 is feasible and comes first.
        assert_eq!(tweak(&current, 5, &items).to_bits(), "010");
    }

    #[test]
    fn test_infeasible_flips_are_skipped() {
        let items = items();
        let current = Solution::from_bits("010").unwrap();
        // Adding item 0 reaches weight 5 exactly.
        assert_eq!(tweak(&current, 5, &items).to_bits(), "110");

        let current = Solution::from_bits("000").unwrap();
        // From the empty selection item 0 is the first to fit.
        assert_eq!(tweak(&current, 4, &items).to_bits(), "100");
        assert_eq!(tweak(&current, 1, &items).to_bits(), "000");
    }

    #[test]
    fn test_skips_to_later_index() {
        let items = vec![Item::new(5, 1), Item::new(5, 1), Item::new(1, 1)];
        let current = Solution::new(3);
        assert_eq!(first_feasible_flip(&current, 2, &items), Some(2));
        assert_eq!(tweak(&current, 2, &items).to_bits(), "001");
    }

    #[test]
    fn test_no_feasible_flip_returns_copy() {
        let items = vec![Item::new(3, 1), Item::new(4, 1)];
        let current = Solution::new(2);
        let next = tweak(&current, 2, &items);
        assert_eq!(next, current);
        assert_eq!(first_feasible_flip(&current, 2, &items), None);
    }

    #[test]
    fn test_empty_solution() {
        let next = tweak(&Solution::new(0), 10, &[]);
        assert!(next.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let items = items();
        let current = Solution::from_bits("001").unwrap();
        assert_eq!(tweak(&current, 9, &items), tweak(&current, 9, &items));
    }
}
