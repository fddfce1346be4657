//! Scripted play for demos and tests.

pub mod policy;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::game::MemoryGame;

pub use policy::{FlipPolicy, RandomPolicy, RecallPolicy};

/// Summary of an automated game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayReport {
    pub flips: usize,
    pub moves: usize,
    pub pairs_found: usize,
    pub won: bool,
}

/// Let `policy` flip cards until the board is cleared, it runs out of
/// choices, or `max_flips` is reached.
pub fn play_out<P: FlipPolicy + ?Sized>(
    game: &mut MemoryGame,
    policy: &mut P,
    max_flips: usize,
) -> Result<PlayReport> {
    while !game.has_won() && game.total_flips() < max_flips {
        let Some(position) = policy.choose(&game.views()) else {
            debug!("policy has no card to flip");
            break;
        };
        game.flip(position)?;
    }

    Ok(PlayReport {
        flips: game.total_flips(),
        moves: game.moves_count(),
        pairs_found: game.pairs_found(),
        won: game.has_won(),
    })
}
