//! Error types for dealing, flipping and building custom boards.

use thiserror::Error;

/// Errors raised by `MemoryGame`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("icon pool has {available} faces but the board needs {required} pairs")]
    InsufficientIcons { required: usize, available: usize },
    #[error("position {position} is outside the board (0..{len})")]
    IndexOutOfRange { position: usize, len: usize },
    #[error("card {0} is already face up")]
    CardAlreadyFaceUp(usize),
    #[error("card {0} is already matched")]
    CardAlreadyMatched(usize),
    #[error("the game is already won")]
    GameAlreadyWon,
}

/// Errors raised while assembling a custom photo board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CustomBoardError {
    #[error("game name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("game name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("board needs {required} images but {chosen} were chosen")]
    WrongImageCount { required: usize, chosen: usize },
    #[error("image '{0}' was already chosen")]
    DuplicateImage(String),
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
