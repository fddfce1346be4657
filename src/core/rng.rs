//! Random number generation for dealing boards.
//!
//! A live game deals from OS entropy so two sessions never share a layout.
//! Tests and replays pass a seed instead:
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut deck_a = vec![1, 2, 3, 4, 5, 6];
//! let mut deck_b = deck_a.clone();
//! a.shuffle(&mut deck_a);
//! b.shuffle(&mut deck_b);
//! assert_eq!(deck_a, deck_b);
//! ```

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8-backed RNG used for shuffling decks and by autoplay policies.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a deterministic RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The drawn seed is kept so the deal can be reported and replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (uniform permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..20 {
            let mut a: Vec<u32> = (0..24).collect();
            let mut b = a.clone();
            rng1.shuffle(&mut a);
            rng2.shuffle(&mut b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_different_seeds_different_shuffle() {
        let deck: Vec<u32> = (0..24).collect();
        let mut a = deck.clone();
        let mut b = deck;

        GameRng::new(1).shuffle(&mut a);
        GameRng::new(2).shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_entropy_seeds_differ() {
        let seeds: Vec<u64> = (0..8).map(|_| GameRng::from_entropy().seed()).collect();
        assert!(seeds.iter().any(|&s| s != seeds[0]));
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some_and(|c| items.contains(c)));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }
}
