//! Configuration parameters for the tabu search.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration settings for the tabu search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of recently accepted solutions that stay tabu
    pub tabu_length: usize,
    /// Number of iterations the search runs for
    pub max_iterations: u32,
    /// Seed for randomized tie-breaking in the greedy start; `None` breaks
    /// ties by item index
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tabu_length: 20,
            max_iterations: 1000,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the tabu list length.
    pub fn with_tabu_length(mut self, length: usize) -> Self {
        self.tabu_length = length;
        self
    }

    /// Set the iteration budget.
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Set the tie-break seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace every field for which an override is given.
    pub fn with_overrides(
        mut self,
        tabu_length: Option<usize>,
        max_iterations: Option<u32>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(length) = tabu_length {
            self.tabu_length = length;
        }
        if let Some(iterations) = max_iterations {
            self.max_iterations = iterations;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tabu_length, 20);
        assert_eq!(config.max_iterations, 1000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = Config::new()
            .with_tabu_length(5)
            .with_max_iterations(50)
            .with_seed(9);
        assert_eq!(config.tabu_length, 5);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_overrides_only_replace_given_fields() {
        let base = Config::new().with_tabu_length(3).with_seed(4);
        let merged = base.clone().with_overrides(None, Some(77), None);
        assert_eq!(merged.tabu_length, 3);
        assert_eq!(merged.max_iterations, 77);
        assert_eq!(merged.seed, Some(4));

        assert_eq!(base.clone().with_overrides(None, None, None), base);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"max_iterations": 10}"#).unwrap();
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.tabu_length, 20);
    }
}
