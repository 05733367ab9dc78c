//! Game error handling.
//!
//! The only fallible surface of the game is the console: reading a choice can
//! fail with an I/O error or run out of input. Everything else (damage,
//! healing, levelling) is total.

use std::io;
use thiserror::Error;

/// Errors that can interrupt a running session
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading from the console failed
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Standard input reached end-of-file while a choice was pending
    #[error("Input closed before a choice was made")]
    InputClosed,
}

impl GameError {
    /// Whether the error means the player left rather than something breaking
    pub fn is_input_closed(&self) -> bool {
        matches!(self, GameError::InputClosed)
    }
}

/// Result alias used across the game crates
pub type GameResult<T> = Result<T, GameError>;

/// Convert an error into a one-line message suitable for the player
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::InputClosed => "No more input, leaving the adventure.".to_string(),
        GameError::IoError(e) => match e.kind() {
            io::ErrorKind::Interrupted => "Input was interrupted".to_string(),
            _ => format!("IO error: {}", e),
        },
    }
}
