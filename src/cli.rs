use clap::{Parser, Subcommand};
use sorteo::DEFAULT_RETRY_LIMIT;

#[derive(Parser)]
#[command(
    name = "sorteo",
    about = "Constrained Secret Santa draws from a roster file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a draw and print giver → receiver assignments
    Draw {
        /// Path to a roster JSON file ("-" for stdin)
        file: String,

        /// Retry budget for rejection sampling
        #[arg(long, default_value_t = DEFAULT_RETRY_LIMIT)]
        retries: u32,

        /// Seed the RNG for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the assignment set as JSON instead of readable text
        #[arg(long)]
        json: bool,
    },

    /// Analyze whether the roster admits any valid draw
    Check {
        /// Path to a roster JSON file ("-" for stdin)
        file: String,
    },

    /// Audit a previously generated assignment file against a roster
    Verify {
        /// Path to a roster JSON file
        roster: String,

        /// Path to an assignments JSON file (the output of `draw --json`)
        assignments: String,
    },
}
