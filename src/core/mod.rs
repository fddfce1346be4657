//! Core types: board configuration, RNG, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{BoardSize, GameConfig, ParseBoardSizeError};
pub use error::{CustomBoardError, GameError, Result};
pub use rng::GameRng;
