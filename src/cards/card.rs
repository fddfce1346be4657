//! Board cards and their render snapshots.
//!
//! `MemoryCard` is owned by the engine; only the engine flips its two flags.
//! Renderers get `CardView`s, which hide the face of a card that is down.

use serde::{Deserialize, Serialize};

use super::face::CardFace;

/// One cell of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCard {
    face: CardFace,
    face_up: bool,
    matched: bool,
}

impl MemoryCard {
    /// A face-down, unmatched card.
    #[must_use]
    pub fn new(face: CardFace) -> Self {
        Self {
            face,
            face_up: false,
            matched: false,
        }
    }

    /// The pair identifier.
    #[must_use]
    pub fn face(&self) -> &CardFace {
        &self.face
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub(crate) fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Matching is permanent; a matched card stays face up.
    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
        self.face_up = true;
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> CardView {
        CardView {
            face: (self.face_up || self.matched).then(|| self.face.clone()),
            face_up: self.face_up,
            matched: self.matched,
        }
    }
}

/// What a renderer may see of a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// `None` while the card is face down.
    pub face: Option<CardFace>,
    pub face_up: bool,
    pub matched: bool,
}

impl CardView {
    /// Can this card be flipped by a player?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }
}
