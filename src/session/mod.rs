//! Play session controller.
//!
//! `GameSession` sits between a UI and the engine. It owns the current
//! `MemoryGame` and replaces it on reset, on a size change, or when a custom
//! board is started. It also turns player taps into notices ("already won",
//! "invalid move") instead of errors, and formats the status line.

use log::info;
use serde::{Deserialize, Serialize};

use crate::cards::{CardView, IconPool};
use crate::core::{BoardSize, GameConfig, GameRng, Result};
use crate::custom::CustomBoard;
use crate::game::MemoryGame;

/// Outcome of a player tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The board is already cleared; nothing flipped.
    AlreadyWon,
    /// The tapped card is already showing; nothing flipped.
    InvalidMove,
    /// A card was flipped.
    Flipped { matched: bool, won: bool },
}

/// Text and progress for the status bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardStatus {
    pub pairs_label: String,
    pub moves_label: String,
    /// Pairs found over total, 0.0 to 1.0.
    pub progress: f32,
}

/// A player's session across several games.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    custom: Option<CustomBoard>,
    game: MemoryGame,
}

impl GameSession {
    /// Start a stock-icon session.
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let game = deal(&config, &IconPool::stock(), &mut rng)?;
        Ok(Self {
            config,
            rng,
            custom: None,
            game,
        })
    }

    #[must_use]
    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.config.board_size
    }

    /// The custom board being played, if any.
    #[must_use]
    pub fn custom_board(&self) -> Option<&CustomBoard> {
        self.custom.as_ref()
    }

    #[must_use]
    pub fn views(&self) -> Vec<CardView> {
        self.game.views()
    }

    /// Handle a tap on `position`.
    pub fn select(&mut self, position: usize) -> Result<SessionEvent> {
        if self.game.has_won() {
            return Ok(SessionEvent::AlreadyWon);
        }
        if self.game.is_card_face_up(position)? {
            return Ok(SessionEvent::InvalidMove);
        }
        let matched = self.game.flip(position)?;
        Ok(SessionEvent::Flipped {
            matched,
            won: self.game.has_won(),
        })
    }

    /// Quitting now would throw away progress.
    #[must_use]
    pub fn needs_quit_confirmation(&self) -> bool {
        self.game.moves_count() > 0 && !self.game.has_won()
    }

    /// Deal a fresh board of the same kind.
    pub fn reset(&mut self) -> Result<()> {
        self.game = deal(&self.config, &self.pool(), &mut self.rng)?;
        info!("new {} game", self.config.board_size.name());
        Ok(())
    }

    /// Switch to stock icons on a new board size.
    pub fn change_size(&mut self, board_size: BoardSize) -> Result<()> {
        self.config.board_size = board_size;
        self.custom = None;
        self.reset()
    }

    /// Play a custom photo board.
    pub fn start_custom(&mut self, board: CustomBoard) -> Result<()> {
        let game = deal(
            &GameConfig {
                board_size: board.board_size,
                ..self.config.clone()
            },
            &board.pool,
            &mut self.rng,
        )?;
        info!("starting custom game '{}'", board.name);
        self.config.board_size = board.board_size;
        self.custom = Some(board);
        self.game = game;
        Ok(())
    }

    #[must_use]
    pub fn status(&self) -> BoardStatus {
        let moves_label = if self.game.total_flips() == 0 {
            self.config.board_size.to_string()
        } else {
            format!("Moves: {}", self.game.moves_count())
        };
        BoardStatus {
            pairs_label: format!(
                "Pairs: {} / {}",
                self.game.pairs_found(),
                self.game.total_pairs()
            ),
            moves_label,
            progress: self.game.progress(),
        }
    }

    fn pool(&self) -> IconPool {
        self.custom
            .as_ref()
            .map_or_else(IconPool::stock, |board| board.pool.clone())
    }
}

fn deal(config: &GameConfig, pool: &IconPool, rng: &mut GameRng) -> Result<MemoryGame> {
    Ok(MemoryGame::new(config.board_size, pool, rng)?.with_strict_flips(config.strict_flips))
}
