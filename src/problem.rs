//! Problem definition and instance loading for the 0/1 knapsack.
//!
//! Instances are whitespace-delimited integer streams:
//!
//! ```raw
//! N W
//! weight_1 profit_1
//! ...
//! weight_N profit_N
//! ```
//!
//! Line layout is irrelevant and `#` starts a comment running to the end of
//! the line. Every value must be a non-negative integer.

use crate::error::{KnapsackError, ParseTokenError, Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// A single item that can be put in the knapsack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub profit: u64,
    pub weight: u64,
}

impl Item {
    /// Create a new item. Arguments follow the instance format: weight first.
    pub fn new(weight: u64, profit: u64) -> Self {
        Item { profit, weight }
    }
}

/// Represents a knapsack problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub capacity: u64,
    pub items: Vec<Item>,
}

impl Problem {
    /// Create a new knapsack problem.
    pub fn new(name: String, capacity: u64, items: Vec<Item>) -> Self {
        Problem {
            name,
            capacity,
            items,
        }
    }

    /// Get the number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check whether the instance has no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item weights, `None` if it does not fit in a `u64`.
    pub fn total_weight(&self) -> Option<u64> {
        self.items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.weight))
    }

    /// Sum of all item profits, `None` if it does not fit in a `u64`.
    pub fn total_profit(&self) -> Option<u64> {
        self.items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.profit))
    }

    /// Check that every selection's profit and weight can be summed without
    /// overflow. Instances built with `Problem::new` should be validated
    /// before they are searched.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.total_weight().is_none() {
            return Err(ValidationError::TotalWeightOverflow);
        }
        if self.total_profit().is_none() {
            return Err(ValidationError::TotalProfitOverflow);
        }
        Ok(())
    }

    /// Load a problem from any buffered reader.
    pub fn from_bufread<R: BufRead>(name: String, rdr: R) -> Result<Self> {
        let mut sc = Scanner::new(rdr);

        let n = sc.next_i64("item count")?;
        if n < 0 {
            return Err(ValidationError::NegativeItemCount(n).into());
        }
        let capacity = sc.next_i64("capacity")?;
        if capacity < 0 {
            return Err(ValidationError::NegativeCapacity(capacity).into());
        }

        let n = n as usize;
        let mut items = Vec::with_capacity(n.min(1 << 16));
        for i in 0..n {
            let weight = sc.next_i64("item weight")?;
            let profit = sc.next_i64("item profit")?;
            if weight < 0 {
                return Err(ValidationError::NegativeWeight {
                    item: i,
                    value: weight,
                }
                .into());
            }
            if profit < 0 {
                return Err(ValidationError::NegativeProfit {
                    item: i,
                    value: profit,
                }
                .into());
            }
            items.push(Item::new(weight as u64, profit as u64));
        }

        let problem = Problem::new(name, capacity as u64, items);
        problem.validate()?;
        Ok(problem)
    }

    /// Load a problem from a file. The file stem becomes the instance name.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "instance".to_string());
        let file = File::open(path)?;
        Self::from_bufread(name, BufReader::new(file))
    }

    /// Load a problem from an unbuffered reader such as stdin.
    pub fn from_reader<R: Read>(name: String, rdr: R) -> Result<Self> {
        Self::from_bufread(name, BufReader::new(rdr))
    }
}

impl FromStr for Problem {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bufread("instance".to_string(), s.as_bytes())
    }
}

/// Reads whitespace-delimited tokens, skipping `#` comments.
struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    fn new(rdr: R) -> Self {
        Scanner {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refill the line buffer. Returns `Ok(false)` on EOF.
    fn fill_line(&mut self) -> Result<bool> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf)?;
        Ok(n > 0)
    }

    /// Next token of the stream, or `None` at EOF.
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if self.pos >= self.buf.len() && !self.fill_line()? {
                return Ok(None);
            }

            let line = &self.buf[self.pos..];
            let line = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            };

            match line.split_whitespace().next() {
                Some(token) => {
                    // Offset of the token end inside the remaining buffer.
                    let start = line.len() - line.trim_start().len();
                    self.pos += start + token.len();
                    return Ok(Some(token.to_owned()));
                }
                None => self.pos = self.buf.len(),
            }
        }
    }

    /// Next token parsed as a signed integer.
    fn next_i64(&mut self, field: &'static str) -> Result<i64> {
        let token = self
            .next_token()?
            .ok_or(KnapsackError::UnexpectedEof { expected: field })?;
        token
            .parse::<i64>()
            .map_err(|_| ParseTokenError { token, field }.into())
    }
}
