//! The memory game engine.

pub mod engine;

pub use engine::{MemoryGame, Phase};
