//! Input parsing and validation for interactive commands.
//!
//! The engine only ever sees already-validated guesses; all "try again"
//! handling for malformed player input lives here and in the play loop.

use mastermind_engine::colors::Color;
use mastermind_engine::round::SECRET_LEN;

/// Result type for parsing one line of player input.
///
/// - Valid guess of exactly [`SECRET_LEN`] colors
/// - Quit command (user wants to exit)
/// - Invalid input with error message
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid guess parsed from input
    Guess(Vec<Color>),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a line of user input into a guess or a special command.
///
/// Input requirements are strict: exactly [`SECRET_LEN`] characters, each a
/// color symbol (`P K R Y B G`, case-sensitive). `q` or `quit`
/// (case-insensitive) requests an exit.
///
/// # Example
///
/// ```rust
/// # use mastermind_cli::validation::{parse_guess, ParseResult};
/// use mastermind_engine::colors::Color;
///
/// assert_eq!(
///     parse_guess("RGBY"),
///     ParseResult::Guess(vec![Color::Red, Color::Green, Color::Blue, Color::Yellow])
/// );
///
/// assert_eq!(parse_guess("q"), ParseResult::Quit);
///
/// match parse_guess("RGB") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Not enough")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_guess(input: &str) -> ParseResult {
    let input = input.trim();

    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return ParseResult::Quit;
    }

    let chars: Vec<char> = input.chars().collect();
    if chars.len() < SECRET_LEN {
        return ParseResult::Invalid("Not enough characters".to_string());
    }
    if chars.len() > SECRET_LEN {
        return ParseResult::Invalid("Too many characters".to_string());
    }

    let mut guess = Vec::with_capacity(SECRET_LEN);
    for c in chars {
        match Color::from_ascii(c) {
            Some(color) => guess.push(color),
            None => {
                return ParseResult::Invalid(format!("'{}' is not a valid color", c));
            }
        }
    }

    ParseResult::Guess(guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mastermind_engine::colors::Color::{Black, Blue, Green, Purple, Red, Yellow};

    #[test]
    fn test_parse_valid_guess() {
        assert_eq!(
            parse_guess("PKRY"),
            ParseResult::Guess(vec![Purple, Black, Red, Yellow])
        );
        assert_eq!(
            parse_guess("BGBG"),
            ParseResult::Guess(vec![Blue, Green, Blue, Green])
        );
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        assert_eq!(
            parse_guess("  RRRR \n"),
            ParseResult::Guess(vec![Red, Red, Red, Red])
        );
    }

    #[test]
    fn test_parse_quit_commands() {
        assert_eq!(parse_guess("q"), ParseResult::Quit);
        assert_eq!(parse_guess("quit"), ParseResult::Quit);
        assert_eq!(parse_guess("QUIT"), ParseResult::Quit);
    }

    #[test]
    fn test_parse_too_short() {
        assert_eq!(
            parse_guess("RGB"),
            ParseResult::Invalid("Not enough characters".to_string())
        );
        assert_eq!(
            parse_guess(""),
            ParseResult::Invalid("Not enough characters".to_string())
        );
    }

    #[test]
    fn test_parse_too_long() {
        assert_eq!(
            parse_guess("RGBYP"),
            ParseResult::Invalid("Too many characters".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_non_color_characters() {
        assert_eq!(
            parse_guess("RGQB"),
            ParseResult::Invalid("'Q' is not a valid color".to_string())
        );
        // lowercase symbols are not colors
        assert_eq!(
            parse_guess("rgby"),
            ParseResult::Invalid("'r' is not a valid color".to_string())
        );
    }
}
