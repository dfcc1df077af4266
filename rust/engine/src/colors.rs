use serde::{Deserialize, Serialize};

/// Represents one of the six peg colors a secret or guess can contain.
/// Colors compare by identity and carry a stable enumeration order used
/// for uniform random sampling.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Color {
    /// Purple (💜, 'P')
    Purple,
    /// Black (🖤, 'K')
    Black,
    /// Red (❤️, 'R')
    Red,
    /// Yellow (💛, 'Y')
    Yellow,
    /// Blue (💙, 'B')
    Blue,
    /// Green (💚, 'G')
    Green,
}

/// Number of distinct colors in the alphabet.
pub const COLOR_TOTAL: usize = 6;

impl Color {
    /// Parses a single ASCII symbol into its color. Returns `None` for any
    /// character outside the color alphabet; parse failures are the only way
    /// "not a color" arises and are never stored in a secret or guess.
    pub fn from_ascii(c: char) -> Option<Color> {
        all_colors().into_iter().find(|color| color.to_ascii() == c)
    }

    /// The single-character symbol for this color.
    pub fn to_ascii(self) -> char {
        match self {
            Color::Purple => 'P',
            Color::Black => 'K',
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }

    /// The emoji heart used to display this color on the board.
    pub fn to_emoji(self) -> &'static str {
        match self {
            Color::Purple => "💜",
            Color::Black => "🖤",
            Color::Red => "❤️",
            Color::Yellow => "💛",
            Color::Blue => "💙",
            Color::Green => "💚",
        }
    }
}

/// True iff `c` is the symbol of some color.
pub fn is_color_char(c: char) -> bool {
    Color::from_ascii(c).is_some()
}

/// All colors in enumeration order (index 0..COLOR_TOTAL).
pub fn all_colors() -> [Color; COLOR_TOTAL] {
    [
        Color::Purple,
        Color::Black,
        Color::Red,
        Color::Yellow,
        Color::Blue,
        Color::Green,
    ]
}
