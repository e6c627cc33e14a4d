//! Command-line front end: read an instance, run the search, print the result.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tabu_knapsack::config::Config;
use tabu_knapsack::problem::Problem;
use tabu_knapsack::utils::{format_duration, save_result, write_result, SearchStatistics};
use tabu_knapsack::TabuSearch;

/// Solve a 0/1 knapsack instance with tabu search.
///
/// The instance is `N W` followed by N `weight profit` pairs.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Instance file; standard input is read when omitted
    input: Option<PathBuf>,

    /// JSON configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of recently accepted solutions kept tabu
    #[arg(long)]
    tabu_length: Option<usize>,

    /// Number of search iterations
    #[arg(long)]
    max_iterations: Option<u32>,

    /// Seed for randomized tie-breaking in the greedy start
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the result to this file
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print the full result as JSON instead of the plain format
    #[arg(long)]
    json: bool,

    /// Print search statistics after the result
    #[arg(long)]
    stats: bool,
}

impl Args {
    fn build_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::new(),
        };

        Ok(config.with_overrides(self.tabu_length, self.max_iterations, self.seed))
    }

    fn load_problem(&self) -> Result<Problem> {
        match &self.input {
            Some(path) => Problem::from_file(path)
                .with_context(|| format!("failed to load instance {}", path.display())),
            None => Problem::from_reader("stdin".to_string(), io::stdin().lock())
                .context("failed to read instance from stdin"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.build_config()?;
    let problem = args.load_problem()?;

    info!(
        "loaded {} with {} items, capacity {}",
        problem.name,
        problem.item_count(),
        problem.capacity
    );

    let mut search = TabuSearch::new(problem, config);
    let result = search.run();

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &result)?;
        writeln!(stdout)?;
    } else {
        write_result(&mut stdout, &result)?;
    }

    if args.stats {
        writeln!(
            stdout,
            "{}",
            SearchStatistics::new(&search.problem, &result).format()
        )?;
    }

    if let Some(path) = &args.output {
        save_result(&result, &search.problem, path)
            .with_context(|| format!("failed to save result to {}", path.display()))?;
        info!("saved result to {}", path.display());
    }

    info!("finished in {}", format_duration(result.run_time));
    Ok(())
}
