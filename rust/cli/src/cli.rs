//! Command-line argument types for the `mastermind` binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mastermind", version, about = "Mastermind code-breaking game")]
pub struct MastermindCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive round against the hidden secret
    Play {
        /// Seed for the secret (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Print color rows as ASCII symbols instead of emoji
        #[arg(long)]
        ascii: bool,
    },
    /// Generate a round and reveal its secret (inspection helper)
    Deal {
        /// Seed for the secret (default: random)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display current configuration settings
    Cfg,
    /// Verify that secret generation is deterministic for a seed
    Rng {
        /// Seed to check (default: random)
        #[arg(long)]
        seed: Option<u64>,
    },
}
