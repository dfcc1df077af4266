//! Terminal rendering of color rows and peg feedback.

use mastermind_engine::colors::Color;
use mastermind_engine::round::SECRET_LEN;

/// Pegs per feedback row; two rows of two pegs sit beside one emoji row.
const FEEDBACK_ROW: usize = SECRET_LEN / 2;

/// Renders a color sequence as one row, emoji by default or single ASCII
/// symbols with `ascii`.
pub fn format_colors(colors: &[Color], ascii: bool) -> String {
    let tokens: Vec<String> = colors
        .iter()
        .map(|c| {
            if ascii {
                c.to_ascii().to_string()
            } else {
                c.to_emoji().to_string()
            }
        })
        .collect();
    tokens.join(" ")
}

/// Lays out a peg string in rows of [`FEEDBACK_ROW`] characters, each row
/// indented past the guess row so the pegs read as a score beside it.
/// Returns an empty string for empty feedback.
pub fn format_feedback_block(pegs: &str) -> String {
    let indent = " ".repeat(2 * SECRET_LEN + 1);
    let mut out = String::new();
    for (i, c) in pegs.chars().enumerate() {
        if i % FEEDBACK_ROW == 0 {
            if i != 0 {
                out.push('\n');
            }
            out.push_str(&indent);
        }
        out.push(c);
    }
    out
}
