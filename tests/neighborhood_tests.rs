//! Property tests for greedy construction and neighbor generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tabu_knapsack::evaluator::{is_feasible, weight_of};
use tabu_knapsack::initial::{greedy_solution, greedy_solution_with_seed};
use tabu_knapsack::neighborhood::{first_feasible_flip, tweak};
use tabu_knapsack::problem::{Item, Problem};
use tabu_knapsack::solution::Solution;

fn random_items(rng: &mut ChaCha8Rng, n: usize) -> Vec<Item> {
    (0..n)
        .map(|_| Item::new(rng.gen_range(0..=15), rng.gen_range(0..=25)))
        .collect()
}

/// A random feasible selection obtained by packing items in a shuffled order.
fn random_feasible(rng: &mut ChaCha8Rng, items: &[Item], capacity: u64) -> Solution {
    let mut flags = vec![false; items.len()];
    let mut load = 0;
    for (i, item) in items.iter().enumerate() {
        if rng.gen_bool(0.5) && load + item.weight <= capacity {
            flags[i] = true;
            load += item.weight;
        }
    }
    Solution::from_flags(flags)
}

#[test]
fn test_neighbor_is_feasible_single_flip() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..200 {
        let n = rng.gen_range(0..20);
        let items = random_items(&mut rng, n);
        let capacity = rng.gen_range(0..60);
        let current = random_feasible(&mut rng, &items, capacity);

        let next = tweak(&current, capacity, &items);
        assert!(is_feasible(&next, &items, capacity));

        match first_feasible_flip(&current, capacity, &items) {
            Some(index) => {
                assert_eq!(current.hamming_distance(&next), 1);
                assert_ne!(current.is_selected(index), next.is_selected(index));
                // No earlier flip was feasible.
                for earlier in 0..index {
                    let flipped = current.flipped(earlier);
                    assert!(weight_of(&flipped, &items) > capacity);
                }
            }
            None => assert_eq!(next, current),
        }
    }
}

#[test]
fn test_neighbor_of_nonempty_feasible_selection_exists() {
    // Removing a selected item is always feasible.
    let items = vec![Item::new(9, 1), Item::new(9, 1), Item::new(3, 1)];
    let current = Solution::from_bits("001").unwrap();
    assert_eq!(tweak(&current, 3, &items).to_bits(), "000");
}

#[test]
fn test_greedy_is_feasible_and_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for _ in 0..100 {
        let n = rng.gen_range(0..25);
        let items = random_items(&mut rng, n);
        let capacity = rng.gen_range(0..80);
        let problem = Problem::new("random".to_string(), capacity, items);

        let first = greedy_solution(&problem);
        let second = greedy_solution(&problem);
        assert_eq!(first, second);
        assert!(weight_of(&first, &problem.items) <= capacity);

        let seeded = greedy_solution_with_seed(&problem, 99);
        assert!(weight_of(&seeded, &problem.items) <= capacity);

        // Zero-weight items always fit and are always packed.
        for (i, item) in problem.items.iter().enumerate() {
            if item.weight == 0 {
                assert!(first.is_selected(i));
                assert!(seeded.is_selected(i));
            }
        }
    }
}

#[test]
fn test_greedy_is_maximal() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    for _ in 0..100 {
        let n = rng.gen_range(1..25);
        let items = random_items(&mut rng, n);
        let capacity = rng.gen_range(0..80);
        let problem = Problem::new("random".to_string(), capacity, items);

        let solution = greedy_solution(&problem);
        let load = weight_of(&solution, &problem.items);

        // No skipped item fits into the remaining space.
        for (i, item) in problem.items.iter().enumerate() {
            if !solution.is_selected(i) {
                assert!(load + item.weight > capacity);
            }
        }
    }
}
