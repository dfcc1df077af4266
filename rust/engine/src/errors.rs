use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid guess length: {actual}, expected: {expected}")]
    InvalidGuessLength { expected: usize, actual: usize },
}
