//! This is a CLI tool to run the evolutionary prisoner's dilemma
//! simulation from the *tournament* library and write its results file.
//!
//! # Installation
//!
//! From the workspace directory execute the following:
//!
//! ```shell
//! $ cargo install --path ./tournament-cli
//! ```
//!
//! After that, you can use the command as `$ tournament-cli`.
//!
//! # Usage
//!
//! To see its features, execute `$ tournament-cli --help`.
//!
//! # Examples
//!
//! *Evolve the population for 150 generations, 100 rounds per pairing, and
//! write the summary to `results.txt`*
//! ```shell
//! $ tournament-cli -g 150 -r 100 -o results.txt
//! ```
//!
//! The output contains one `name:mean:stddev` line per built-in strategy
//! and can be passed straight to the `visualizer` binary.

use chrono::Local;
use clap::Parser;
use env_logger::Env;
use log::info;
use std::fs::File;
use std::io;
use std::io::prelude::Write;
use std::path::PathBuf;
use tournament::consts::POPULATION_SIZE;
use tournament::report::{ScoreHistory, StrategyScore};
use tournament::strategies::genome;
use tournament::tournament::{prisoners_dilemma_rules, Tournament};

/// Possible arguments for the executable.
#[derive(Debug, Parser)]
#[clap(about, author, version)]
pub struct Args {
    /// The number of generations the opponent population evolves for.
    #[arg(short, long, default_value_t = 100)]
    pub generations: u32,
    /// The number of rounds every pairing plays per tournament.
    #[arg(short, long, default_value_t = 100)]
    pub rounds: u32,
    /// Path of the results file to write. Defaults to a timestamped
    /// filename in the working directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// The log level of the application.
    #[arg(short, long, default_value = "error")]
    pub log_level: String,
}

/// Runs the evolutionary loop: one tournament per generation, recording
/// every generation's per-strategy totals and breeding the opponent
/// population in between.
fn run_simulation(generations: u32, rounds: u32) -> ScoreHistory {
    let mut population: Vec<u8> = (0..POPULATION_SIZE as u8).collect();
    let mut history = ScoreHistory::new();

    for generation in 0..generations {
        let mut game = Tournament::from(rounds, prisoners_dilemma_rules, &population);
        game.run();
        history.record(&game.player_totals());

        let (fittest, best) = game.fittest();
        info!("generation {generation}: best opponent total {best}");
        population = genome::next_generation(&fittest);
    }
    history
}

/// Formats the summary into the results file format, one
/// `name:mean:stddev` line per strategy, two decimal places.
fn format_results(summary: &[StrategyScore]) -> String {
    let mut out = String::new();
    for score in summary {
        out.push_str(&format!(
            "{}:{:.2}:{:.2}\n",
            score.name, score.mean, score.std_dev
        ));
    }
    out
}

/// Writes the formatted results to the given path.
fn write_results(path: &PathBuf, contents: &str) -> Result<(), io::Error> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())
}

/// Main endpoint for the executable.
fn main() {
    let args = Args::parse();

    // Init logger
    let env = Env::default().filter_or("TOURNAMENT_LOG_LEVEL", args.log_level);
    let _ = env_logger::try_init_from_env(env);

    let history = run_simulation(args.generations, args.rounds);
    let summary = history.summarize();
    let contents = format_results(&summary);

    let path = args.output.unwrap_or_else(|| {
        PathBuf::from(format!("results-{}.txt", Local::now().timestamp()))
    });
    match write_results(&path, &contents) {
        Ok(_) => println!(
            "Wrote results for {} strategies to {}",
            summary.len(),
            path.display()
        ),
        Err(e) => {
            println!("Error while writing results: {:?}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{format_results, run_simulation};
    use tournament::report::StrategyScore;

    #[test]
    fn test_format_results() {
        let summary = vec![
            StrategyScore {
                name: "random".to_string(),
                mean: 12.5,
                std_dev: 3.2,
            },
            StrategyScore {
                name: "naive".to_string(),
                mean: -3.0,
                std_dev: 0.0,
            },
        ];
        assert_eq!(
            "random:12.50:3.20\nnaive:-3.00:0.00\n",
            format_results(&summary),
            "Every strategy must become one colon-delimited line"
        );

        assert_eq!("", format_results(&[]), "No strategies, no lines");
    }

    #[test]
    fn test_run_simulation_records_every_generation() {
        let history = run_simulation(3, 2);
        assert_eq!(3, history.generations());

        let summary = history.summarize();
        assert_eq!(
            10,
            summary.len(),
            "The summary must cover all built-in strategies"
        );
        assert!(
            summary.iter().all(|score| score.std_dev >= 0.0),
            "Standard deviations are never negative"
        );
    }
}
