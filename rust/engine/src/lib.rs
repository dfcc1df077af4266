//! # mastermind-engine: Mastermind Game Engine Core
//!
//! A deterministic engine for the Mastermind code-breaking game. Provides
//! secret generation, turn and status tracking, and black/white peg scoring
//! with reproducible RNG for deterministic tests and replays.
//!
//! ## Core Modules
//!
//! - [`colors`] - The closed color alphabet and symbol/emoji conversions
//! - [`feedback`] - Peg feedback and Knuth's pin-entering scoring algorithm
//! - [`round`] - Round lifecycle: secret, turn counter, and Active/Won/Lost status
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use mastermind_engine::colors::Color;
//! use mastermind_engine::round::{Round, Status};
//!
//! let mut round = Round::new_with_seed(42);
//!
//! let guess = [Color::Red, Color::Green, Color::Blue, Color::Purple];
//! let feedback = round.guess(&guess).expect("guess has the right length");
//! println!("pegs: {}", feedback.pegs());
//!
//! if round.status() == Status::Won {
//!     println!("Won in {} turns!", round.turn() - 1);
//! }
//! ```
//!
//! ## Deterministic Secrets
//!
//! All secrets are reproducible using seeded RNG:
//!
//! ```rust
//! use mastermind_engine::round::Round;
//!
//! // Same seed produces the same secret
//! let a = Round::new_with_seed(7);
//! let b = Round::new_with_seed(7);
//! assert_eq!(a.secret(), b.secret());
//! ```

pub mod colors;
pub mod errors;
pub mod feedback;
pub mod round;
