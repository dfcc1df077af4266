use std::fmt;

use serde::{Deserialize, Serialize};

use crate::colors::Color;

/// Symbol for a black peg (color and position match).
pub const BLACK_PEG: char = 'X';
/// Symbol for a white peg (color matches some other position).
pub const WHITE_PEG: char = 'x';

/// Score for one guess: a count of black and white pegs. A peg multiset,
/// not a position map — black pegs are listed before white pegs when
/// rendered, with no positional meaning.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    black: usize,
    white: usize,
}

impl Feedback {
    /// Pegs awarded for exact (color and position) matches.
    pub fn black(&self) -> usize {
        self.black
    }

    /// Pegs awarded for color-only matches.
    pub fn white(&self) -> usize {
        self.white
    }

    pub fn total(&self) -> usize {
        self.black + self.white
    }

    /// Encodes the pegs as a string of 'X' (black) then 'x' (white).
    pub fn pegs(&self) -> String {
        let mut s = String::with_capacity(self.total());
        for _ in 0..self.black {
            s.push(BLACK_PEG);
        }
        for _ in 0..self.white {
            s.push(WHITE_PEG);
        }
        s
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pegs())
    }
}

/// Scores a guess against a secret with Donald E. Knuth's pin-entering
/// algorithm, described in "The Computer as Master Mind", J. Recreational
/// Mathematics, Vol 9(1), 1976--77.
///
/// Every peg claims exactly one previously unclaimed secret position and one
/// previously unclaimed guess position, so `black + white` can never exceed
/// the sequence length and repeated colors are never double-counted.
///
/// Both slices must have the same length; [`crate::round::Round::guess`]
/// enforces this before calling.
///
/// # Examples
///
/// ```rust
/// use mastermind_engine::colors::Color::{Red, Yellow};
/// use mastermind_engine::feedback::score;
///
/// // Every color is present, none in the right position.
/// let fb = score(&[Red, Red, Yellow, Yellow], &[Yellow, Yellow, Red, Red]);
/// assert_eq!((fb.black(), fb.white()), (0, 4));
/// ```
pub fn score(secret: &[Color], guess: &[Color]) -> Feedback {
    debug_assert_eq!(secret.len(), guess.len());
    let len = secret.len();

    // A slot is claimed once a peg is associated with it; claimed slots are
    // excluded from the white-peg search.
    let mut secret_claimed = vec![false; len];
    let mut guess_claimed = vec![false; len];

    // 1. Black pegs: positions j with secret[j] == guess[j].
    let mut black = 0;
    for j in 0..len {
        if secret[j] == guess[j] {
            secret_claimed[j] = true;
            guess_claimed[j] = true;
            black += 1;
        }
    }

    // 2. White pegs: for each unclaimed secret position, the first unclaimed
    // guess position (in ascending order, own index excluded) with the same
    // color. At most one white peg per secret position; which guess position
    // gets claimed among equal candidates is unspecified and cannot affect
    // the counts.
    let mut white = 0;
    for i in 0..len {
        if secret_claimed[i] {
            continue;
        }
        for k in 0..len {
            if k == i || guess_claimed[k] {
                continue;
            }
            if secret[i] == guess[k] {
                secret_claimed[i] = true;
                guess_claimed[k] = true;
                white += 1;
                break;
            }
        }
    }

    debug_assert!(black + white <= len);

    Feedback { black, white }
}
