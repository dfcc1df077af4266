//! # Play Command
//!
//! Interactive Mastermind gameplay.
//!
//! Runs one round: the banner and rules are printed, then the player is
//! prompted each turn for a guess of four color symbols. Valid guesses are
//! echoed as a color row and scored; malformed lines are rejected with a
//! message and re-prompted without consuming a turn. The round ends when the
//! secret is guessed, the turn budget runs out, or the player quits.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_colors, format_feedback_block};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_guess};
use mastermind_engine::round::{Round, Status};
use std::io::{BufRead, Write};

/// Handle the play command: one interactive round.
///
/// # Arguments
///
/// * `seed` - RNG seed for the secret (default: config, then random)
/// * `ascii` - Render color rows as ASCII symbols instead of emoji
/// * `out` - Output stream for the board display
/// * `err` - Error stream for input diagnostics
/// * `stdin` - Input stream for guesses
///
/// # Returns
///
/// * `Ok(())` when the round ends (won, lost, or quit)
/// * `Err(CliError)` on configuration failure or when input is exhausted
///   mid-round (EOF)
pub fn handle_play_command(
    seed: Option<u64>,
    ascii: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;

    // Precedence: flag, then config, then a fresh random seed.
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let emoji = !ascii && cfg.emoji;

    ui::print_banner(out)?;
    ui::print_rules(out, emoji)?;

    let mut round = Round::new_with_seed(seed);

    // Turn number at the moment of the winning guess, for the final message.
    let mut turn_no = round.turn();

    while round.status() == Status::Active {
        turn_no = round.turn();
        write!(out, "{}: ", turn_no)?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            ui::write_error(err, "Could not read input")?;
            return Err(CliError::InvalidInput("could not read input".to_string()));
        };

        let guess = match parse_guess(&line) {
            ParseResult::Quit => return Ok(()),
            ParseResult::Invalid(msg) => {
                writeln!(err, "{}", msg)?;
                writeln!(err, "Please try again")?;
                continue;
            }
            ParseResult::Guess(guess) => guess,
        };

        // Echo back the guess as a color row.
        writeln!(out, "{}", format_colors(&guess, !emoji))?;

        // parse_guess guarantees the length, so submission cannot fail.
        let feedback = round.guess(&guess)?;
        let block = format_feedback_block(&feedback.pegs());
        if !block.is_empty() {
            writeln!(out, "{}", block)?;
        }
    }

    // Done! Reveal the secret.
    writeln!(out)?;
    writeln!(out, "{}", format_colors(round.secret(), !emoji))?;
    writeln!(out)?;

    if round.status() == Status::Won {
        writeln!(out, "You won in {} turns!", turn_no)?;
    } else {
        writeln!(out, "You lost!")?;
    }

    Ok(())
}
