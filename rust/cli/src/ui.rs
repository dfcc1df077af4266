//! UI helper functions for terminal output formatting.

use std::io::Write;

use mastermind_engine::colors::all_colors;
use mastermind_engine::round::{MAX_TURNS, SECRET_LEN};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

pub fn print_banner(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "MASTER")?;
    writeln!(out, " MIND")?;
    writeln!(out)
}

/// Prints the color legend and the board parameters.
pub fn print_rules(out: &mut dyn Write, emoji: bool) -> std::io::Result<()> {
    let legend: Vec<String> = all_colors()
        .iter()
        .map(|c| {
            if emoji {
                format!("{} : {}", c.to_emoji(), c.to_ascii())
            } else {
                c.to_ascii().to_string()
            }
        })
        .collect();
    writeln!(out, "{}", legend.join(", "))?;

    writeln!(out, "The secret is {} colors.", SECRET_LEN)?;
    writeln!(out, "You have {} guesses.", MAX_TURNS)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_names_the_game() {
        let mut out = Vec::new();
        print_banner(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("MASTER"));
        assert!(text.contains("MIND"));
    }

    #[test]
    fn test_rules_list_every_symbol_and_budget() {
        let mut out = Vec::new();
        print_rules(&mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        for sym in ["P", "K", "R", "Y", "B", "G"] {
            assert!(text.contains(sym), "missing symbol {}", sym);
        }
        assert!(text.contains("The secret is 4 colors."));
        assert!(text.contains("You have 10 guesses."));
    }

    #[test]
    fn test_write_error_prefixes_message() {
        let mut err = Vec::new();
        write_error(&mut err, "boom").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: boom\n");
    }
}
