//! The card-matching state machine.
//!
//! ## Turn Structure
//!
//! A turn is two flips. The engine is always in one of two phases:
//!
//! - `Idle`: no unresolved single card. The next flip first turns every
//!   unmatched card back down, then turns the chosen card up.
//! - `AwaitingSecond(p)`: card `p` is up alone. The next flip turns a second
//!   card up and compares faces. A match is permanent; a mismatch leaves
//!   both cards showing until the following flip's restore pass.
//!
//! "Won" is derived (`pairs_found == total_pairs`), not a phase.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::{CardFace, CardView, IconPool, MemoryCard};
use crate::core::{BoardSize, GameConfig, GameError, GameRng, Result};

/// Where the engine is within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No single card pending.
    Idle,
    /// One card is up and waiting for its partner.
    AwaitingSecond(usize),
}

/// One play session on one board.
///
/// Replaced wholesale on reset; there is no in-place clear.
#[derive(Clone, Debug)]
pub struct MemoryGame {
    board_size: BoardSize,
    cards: Vec<MemoryCard>,
    pairs_found: usize,
    total_flips: usize,
    pending: Option<usize>,
    strict: bool,
}

impl MemoryGame {
    /// Deal a strict game from `pool`.
    ///
    /// Picks `num_pairs` distinct faces at random, duplicates each, and
    /// shuffles the result into the board order for the whole session.
    pub fn new(board_size: BoardSize, pool: &IconPool, rng: &mut GameRng) -> Result<Self> {
        let required = board_size.num_pairs();
        if pool.len() < required {
            return Err(GameError::InsufficientIcons {
                required,
                available: pool.len(),
            });
        }

        let mut chosen: Vec<CardFace> = pool.as_slice().to_vec();
        rng.shuffle(&mut chosen);
        chosen.truncate(required);

        let mut deck = chosen.clone();
        deck.extend(chosen);
        rng.shuffle(&mut deck);

        debug!(
            "dealt {} board ({} cards) from a pool of {}, seed {}",
            board_size.name(),
            deck.len(),
            pool.len(),
            rng.seed()
        );

        Ok(Self {
            board_size,
            cards: deck.into_iter().map(MemoryCard::new).collect(),
            pairs_found: 0,
            total_flips: 0,
            pending: None,
            strict: true,
        })
    }

    /// Deal according to `config`, from its seed or from OS entropy.
    pub fn from_config(config: &GameConfig, pool: &IconPool) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self::new(config.board_size, pool, &mut rng)?.with_strict_flips(config.strict_flips))
    }

    /// Turn the engine-boundary flip guard on or off.
    #[must_use]
    pub fn with_strict_flips(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Flip the card at `position`.
    ///
    /// Returns `true` when this flip completed a pair.
    pub fn flip(&mut self, position: usize) -> Result<bool> {
        self.check_flip(position)?;
        self.total_flips += 1;

        let found_match = match self.pending.take() {
            None => {
                self.restore_cards();
                self.pending = Some(position);
                false
            }
            Some(first) => self.check_for_match(first, position),
        };
        self.cards[position].set_face_up(true);

        debug!(
            "flip {} -> {} (flips {}, pairs {}/{})",
            position,
            self.cards[position].face(),
            self.total_flips,
            self.pairs_found,
            self.total_pairs()
        );
        if found_match {
            info!(
                "found a match: {} of {} pairs",
                self.pairs_found,
                self.total_pairs()
            );
            if self.has_won() {
                info!("board cleared in {} moves", self.moves_count());
            }
        }

        Ok(found_match)
    }

    fn check_flip(&self, position: usize) -> Result<()> {
        let card = self.cards.get(position).ok_or(GameError::IndexOutOfRange {
            position,
            len: self.cards.len(),
        })?;

        if !self.strict {
            return Ok(());
        }
        if self.has_won() {
            return Err(GameError::GameAlreadyWon);
        }
        if card.is_matched() {
            return Err(GameError::CardAlreadyMatched(position));
        }
        if card.is_face_up() {
            return Err(GameError::CardAlreadyFaceUp(position));
        }
        Ok(())
    }

    fn check_for_match(&mut self, first: usize, second: usize) -> bool {
        if self.cards[first].face() != self.cards[second].face() {
            return false;
        }
        self.cards[first].mark_matched();
        self.cards[second].mark_matched();
        // Permissive self-matches must not push the count past the board.
        self.pairs_found = (self.pairs_found + 1).min(self.total_pairs());
        true
    }

    fn restore_cards(&mut self) {
        for card in self.cards.iter_mut().filter(|c| !c.is_matched()) {
            card.set_face_up(false);
        }
    }

    // === Queries ===

    /// All pairs found.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.pairs_found == self.total_pairs()
    }

    /// Completed turns. Truncates mid-turn.
    #[must_use]
    pub fn moves_count(&self) -> usize {
        self.total_flips / 2
    }

    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.board_size.num_pairs()
    }

    #[must_use]
    pub fn total_flips(&self) -> usize {
        self.total_flips
    }

    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    /// Whether flips are guarded at the engine boundary.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.pending {
            None => Phase::Idle,
            Some(position) => Phase::AwaitingSecond(position),
        }
    }

    /// The single unresolved face-up card, if any.
    #[must_use]
    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn card(&self, position: usize) -> Option<&MemoryCard> {
        self.cards.get(position)
    }

    pub fn is_card_face_up(&self, position: usize) -> Result<bool> {
        self.cards
            .get(position)
            .map(MemoryCard::is_face_up)
            .ok_or(GameError::IndexOutOfRange {
                position,
                len: self.cards.len(),
            })
    }

    /// Read-only board, in seating order.
    #[must_use]
    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    /// Render snapshot with hidden faces masked.
    #[must_use]
    pub fn views(&self) -> Vec<CardView> {
        self.cards.iter().map(MemoryCard::view).collect()
    }

    /// Fraction of pairs found, 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.pairs_found as f32 / self.total_pairs() as f32
    }
}
