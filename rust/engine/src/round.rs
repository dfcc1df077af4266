use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::colors::{all_colors, Color, COLOR_TOTAL};
use crate::errors::GameError;
use crate::feedback::{score, Feedback};

/// Length of the secret (and of every guess).
pub const SECRET_LEN: usize = 4;

/// Maximum number of guesses before a round is lost.
pub const MAX_TURNS: u32 = 10;

/// Lifecycle state of a round. Terminal states never change once reached.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Status {
    /// The round is in progress and accepts guesses.
    Active,
    /// A guess matched the secret at every position.
    Won,
    /// The turn budget ran out without an exact match.
    Lost,
}

/// One game of Mastermind: a hidden secret, a turn counter, and a status.
///
/// The secret is drawn once at construction from a seeded ChaCha20 RNG and
/// is immutable afterward. Each round exclusively owns its state; multiple
/// rounds can coexist as long as each has a single owner.
///
/// # Examples
///
/// ```
/// use mastermind_engine::round::{Round, Status, SECRET_LEN};
///
/// let mut round = Round::new_with_seed(42);
/// assert_eq!(round.status(), Status::Active);
/// assert_eq!(round.turn(), 1);
///
/// // Guessing the secret back wins the round.
/// let winning: Vec<_> = round.secret().to_vec();
/// let fb = round.guess(&winning).expect("guess length is valid");
/// assert_eq!(fb.black(), SECRET_LEN);
/// assert_eq!(round.status(), Status::Won);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    secret: [Color; SECRET_LEN],
    turn: u32,
    status: Status,
}

impl Round {
    /// Starts a round with a random seed.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// Starts a round whose secret is fully determined by `seed`.
    /// Each position is an independent uniform draw over the six colors,
    /// so repeated colors in the secret are permitted and expected.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let colors = all_colors();
        let mut secret = [colors[0]; SECRET_LEN];
        for slot in &mut secret {
            *slot = colors[rng.random_range(0..COLOR_TOTAL)];
        }
        Self {
            secret,
            turn: 1,
            status: Status::Active,
        }
    }

    /// Submits a guess and returns its peg feedback.
    ///
    /// Scoring itself is stateless per call; afterwards the turn counter is
    /// incremented and, while the round is still [`Status::Active`], the
    /// status transitions to [`Status::Won`] on element-wise equality with
    /// the secret, or to [`Status::Lost`] once the incremented counter
    /// exceeds [`MAX_TURNS`]. Terminal statuses are never altered; callers
    /// are expected to stop guessing once the round ends.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidGuessLength`] if the guess is not exactly
    /// [`SECRET_LEN`] colors. The turn counter is untouched in that case.
    pub fn guess(&mut self, guess: &[Color]) -> Result<Feedback, GameError> {
        if guess.len() != SECRET_LEN {
            return Err(GameError::InvalidGuessLength {
                expected: SECRET_LEN,
                actual: guess.len(),
            });
        }

        let feedback = score(&self.secret, guess);

        self.turn += 1;

        // The win check compares sequences directly rather than relying on
        // the black-peg count, keeping scoring and lifecycle decoupled.
        if self.status == Status::Active {
            if guess == self.secret.as_slice() {
                self.status = Status::Won;
            } else if self.turn > MAX_TURNS {
                self.status = Status::Lost;
            }
        }

        Ok(feedback)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Current turn number, counted from 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Read-only view of the secret, for the end-of-game reveal.
    pub fn secret(&self) -> &[Color] {
        &self.secret
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
