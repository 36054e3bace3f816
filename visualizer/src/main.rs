//! Renders a tournament results file as a bar chart with error bars.
//!
//! The input is the plain-text format written by `tournament-cli`: one
//! `name:mean:stddev` line per strategy, for example:
//!
//! ```text
//! random:12.50:3.20
//! ```
//!
//! # Usage
//!
//! ```shell
//! $ visualizer <results-file>
//! ```
//!
//! The chart window blocks the process until it is dismissed.

mod reader_testing;
mod results_reader;
mod visualizer;

use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

/// Possible arguments for the executable.
#[derive(Debug, Parser)]
#[clap(about, author, version)]
pub struct Args {
    /// Path of the tournament results file to visualize.
    pub results: Option<PathBuf>,
    /// The log level of the application.
    #[arg(short, long, default_value = "error")]
    pub log_level: String,
}

/// Main endpoint for the executable.
fn main() {
    let args = Args::parse();

    // Init logger
    let env = Env::default().filter_or("VISUALIZER_LOG_LEVEL", args.log_level);
    let _ = env_logger::try_init_from_env(env);

    let path = match args.results {
        Some(path) => path,
        None => {
            println!("error: usage is 'visualizer <results-file>'");
            std::process::exit(1);
        }
    };

    let records = match results_reader::read(&path) {
        Ok(records) => records,
        Err(e) => {
            println!("Error while reading results: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = visualizer::render_plot(records) {
        println!("{e}");
        std::process::exit(1);
    }
}
