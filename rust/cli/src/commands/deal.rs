//! # Deal Command
//!
//! Generates a round and reveals its secret, for inspecting what a given
//! seed produces.

use crate::error::CliError;
use crate::formatters::format_colors;
use mastermind_engine::round::Round;
use std::io::Write;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let round = Round::new_with_seed(seed);

    let symbols: String = round.secret().iter().map(|c| c.to_ascii()).collect();
    writeln!(out, "seed: {}", seed)?;
    writeln!(out, "secret: {}", symbols)?;
    writeln!(out, "{}", format_colors(round.secret(), false))?;
    Ok(())
}
