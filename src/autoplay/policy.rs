//! Flip policies for scripted players.
//!
//! Policies are trait-based so demos and tests can swap strategies:
//! - `RandomPolicy`: uniform over selectable cards
//! - `RecallPolicy`: remembers every face it has seen and never misses a
//!   known pair

use rustc_hash::FxHashMap;

use crate::cards::{CardFace, CardView};
use crate::core::GameRng;

/// Chooses the next card to flip from what a player can see.
pub trait FlipPolicy {
    /// Pick a face-down, unmatched position, or `None` if there is none.
    fn choose(&mut self, views: &[CardView]) -> Option<usize>;
}

fn selectable(views: &[CardView]) -> impl Iterator<Item = usize> + '_ {
    views
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_selectable())
        .map(|(i, _)| i)
}

/// Uniformly random selection.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl FlipPolicy for RandomPolicy {
    fn choose(&mut self, views: &[CardView]) -> Option<usize> {
        let options: Vec<usize> = selectable(views).collect();
        self.rng.choose(&options).copied()
    }
}

/// Perfect-memory player.
///
/// Opens with a known pair when it has one, otherwise explores unseen
/// cards. On the second flip it takes the remembered partner if known.
#[derive(Clone, Debug, Default)]
pub struct RecallPolicy {
    seen: FxHashMap<usize, CardFace>,
}

impl RecallPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of positions whose face is remembered.
    #[must_use]
    pub fn remembered(&self) -> usize {
        self.seen.len()
    }

    fn observe(&mut self, views: &[CardView]) {
        for (position, view) in views.iter().enumerate() {
            if view.matched {
                self.seen.remove(&position);
            } else if let Some(face) = &view.face {
                self.seen.insert(position, face.clone());
            }
        }
    }

    fn known_partner(&self, views: &[CardView], position: usize) -> Option<usize> {
        let face = self.seen.get(&position)?;
        selectable(views).find(|&i| i != position && self.seen.get(&i) == Some(face))
    }

    fn unseen(&self, views: &[CardView]) -> Option<usize> {
        selectable(views).find(|i| !self.seen.contains_key(i))
    }
}

impl FlipPolicy for RecallPolicy {
    fn choose(&mut self, views: &[CardView]) -> Option<usize> {
        self.observe(views);

        let up: Vec<usize> = views
            .iter()
            .enumerate()
            .filter(|(_, v)| v.face_up && !v.matched)
            .map(|(i, _)| i)
            .collect();

        if let [pending] = up.as_slice() {
            return self
                .known_partner(views, *pending)
                .or_else(|| self.unseen(views))
                .or_else(|| selectable(views).next());
        }

        selectable(views)
            .find(|&i| self.known_partner(views, i).is_some())
            .or_else(|| self.unseen(views))
            .or_else(|| selectable(views).next())
    }
}
