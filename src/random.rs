//! Randomness sources for slot assignment.
//!
//! The assigner only needs two operations: shuffle a candidate list and
//! pick one element uniformly. [`RandomSource`] exposes exactly those, so
//! callers decide where entropy comes from:
//!
//! - any [`rand::Rng`] (seed a `StdRng` for reproducible timetables);
//! - [`FixedOrder`], which never reorders and always picks the first
//!   element, for forcing worst-case collision orders.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_timetable::random::RandomSource;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut items = vec![1, 2, 3, 4];
//! rng.shuffle(&mut items);
//! assert_eq!(items.len(), 4);
//! assert!(rng.choose_index(4) < 4);
//! ```

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle and uniform choice, the only randomness slot assignment uses.
pub trait RandomSource {
    /// Reorders `items` uniformly at random.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Picks an index in `0..len` uniformly. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Deterministic source: leaves order untouched and always picks index 0.
///
/// Since the assigner pops candidates from the end of the list, every
/// faculty probes cells in reverse day-major order under this source.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedOrder;

impl RandomSource for FixedOrder {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}

    fn choose_index(&mut self, _len: usize) -> usize {
        0
    }
}
