//! Command-line interface for exploring Wayfarer destination similarity.
//!
//! The `similar` subcommand loads a JSON dataset of countries and cities,
//! resolves a target destination and prints the most similar destinations as
//! JSON. Options layer CLI flags over environment variables and configuration
//! files through `ortho_config`.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod similar;

pub use error::CliError;

use similar::{SimilarArgs, run_similar};

pub(crate) const ARG_TARGET: &str = "target";
pub(crate) const ARG_KIND: &str = "kind";
pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_MIN_SIMILARITY: &str = "min-similarity";
pub(crate) const ARG_RATING_SCALE: &str = "rating-scale";
pub(crate) const ENV_TARGET: &str = "WAYFARER_CMDS_SIMILAR_TARGET";
pub(crate) const ENV_DATASET: &str = "WAYFARER_CMDS_SIMILAR_DATASET";

/// Run the Wayfarer CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// dataset cannot be loaded, the target is unknown, or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Similar(args) => run_similar(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    about = "Find destinations similar to a country or city",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank destinations by similarity to a target.
    Similar(SimilarArgs),
}

#[cfg(test)]
mod tests;
