//! Custom photo boards.

pub mod builder;

pub use builder::{CustomBoard, CustomBoardBuilder, MAX_GAME_NAME_LENGTH, MIN_GAME_NAME_LENGTH};
