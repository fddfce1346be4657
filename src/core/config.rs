//! Board sizes and game configuration.
//!
//! Games are configured at setup time:
//! - `BoardSize`: The grid dimensions (and therefore the number of pairs)
//! - `GameConfig`: Board size plus dealing and flip-guard options

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Board dimensions offered to the player.
///
/// Every board has an even number of cells; each cell holds one half of a pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    /// 4 x 2, 4 pairs.
    #[default]
    Easy,
    /// 6 x 3, 9 pairs.
    Medium,
    /// 6 x 4, 12 pairs.
    Hard,
}

impl BoardSize {
    /// All sizes, smallest first.
    pub const ALL: [BoardSize; 3] = [BoardSize::Easy, BoardSize::Medium, BoardSize::Hard];

    /// Number of columns.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            BoardSize::Easy => 4,
            BoardSize::Medium | BoardSize::Hard => 6,
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(self) -> usize {
        match self {
            BoardSize::Easy => 2,
            BoardSize::Medium => 3,
            BoardSize::Hard => 4,
        }
    }

    /// Total cells on the board.
    #[must_use]
    pub const fn num_cards(self) -> usize {
        self.width() * self.height()
    }

    /// Number of distinct faces dealt.
    #[must_use]
    pub const fn num_pairs(self) -> usize {
        self.num_cards() / 2
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BoardSize::Easy => "easy",
            BoardSize::Medium => "medium",
            BoardSize::Hard => "hard",
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BoardSize::Easy => "Easy",
            BoardSize::Medium => "Medium",
            BoardSize::Hard => "Hard",
        };
        write!(f, "{}: {} x {}", label, self.width(), self.height())
    }
}

/// Error for an unrecognized board size name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown board size '{0}' (expected easy, medium or hard)")]
pub struct ParseBoardSizeError(pub String);

impl FromStr for BoardSize {
    type Err = ParseBoardSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardSize::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseBoardSizeError(s.to_string()))
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board to deal.
    pub board_size: BoardSize,

    /// Shuffle seed. `None` deals from OS entropy.
    pub seed: Option<u64>,

    /// Reject flips of face-up or matched cards, and any flip after a win.
    ///
    /// With this off, flipping the pending card again matches it with itself.
    pub strict_flips: bool,
}

impl GameConfig {
    /// Create a configuration for the given board, unseeded and strict.
    #[must_use]
    pub fn new(board_size: BoardSize) -> Self {
        Self {
            board_size,
            seed: None,
            strict_flips: true,
        }
    }

    /// Deal deterministically from `seed`.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Leave flip legality to the caller.
    #[must_use]
    pub fn permissive(mut self) -> Self {
        self.strict_flips = false;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
