//! # memory-match
//!
//! A card-pairs memory game engine.
//!
//! ## Design Principles
//!
//! 1. **Explicit inputs**: The icon pool and the RNG are passed in, so
//!    tests deal from fixed pools and fixed seeds.
//!
//! 2. **Owned state**: The engine owns its cards. Renderers read a slice
//!    or `CardView` snapshots and cannot flip cards behind its back.
//!
//! 3. **Replace, don't clear**: A new game is a new `MemoryGame`.
//!
//! ## Modules
//!
//! - `core`: Board sizes, configuration, RNG, errors
//! - `cards`: Card faces, icon pools, cards and views
//! - `game`: The matching state machine
//! - `custom`: Building custom photo boards
//! - `session`: The play controller a UI talks to
//! - `autoplay`: Scripted players for demos and tests

pub mod autoplay;
pub mod cards;
pub mod core;
pub mod custom;
pub mod game;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardSize, CustomBoardError, GameConfig, GameError, GameRng, ParseBoardSizeError, Result,
};

pub use crate::cards::{CardFace, CardView, IconPool, ImageRef, MemoryCard, StockIcon};

pub use crate::game::{MemoryGame, Phase};

pub use crate::custom::{CustomBoard, CustomBoardBuilder};

pub use crate::session::{BoardStatus, GameSession, SessionEvent};

pub use crate::autoplay::{play_out, FlipPolicy, PlayReport, RandomPolicy, RecallPolicy};
