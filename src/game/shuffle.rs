use std::collections::VecDeque;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform integers used by [`shuffle`].
pub trait RandomSource {
    /// Returns a value in `[0, bound)`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;
}

/// Adapts any `rand` generator into a [`RandomSource`].
pub struct RngSource<R>(R);

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        RngSource(rand::rng())
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn below(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

/// Replays a fixed list of draws, reduced modulo the requested bound.
/// Yields 0 once the list runs out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        ScriptedRandom {
            draws: draws.into_iter().collect(),
        }
    }

    /// Draws that make [`shuffle`] leave a slice of `len` items untouched.
    pub fn identity(len: usize) -> Self {
        Self::new((1..len).rev())
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: usize) -> usize {
        self.draws.pop_front().map_or(0, |draw| draw % bound)
    }
}

/// Fisher-Yates, walking from the last slot down to index 1.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn scripted_draws_are_reproducible() {
        let mut first = vec!['a', 'b', 'c', 'd'];
        let mut second = first.clone();
        shuffle(&mut first, &mut ScriptedRandom::new([0, 1, 0]));
        shuffle(&mut second, &mut ScriptedRandom::new([0, 1, 0]));
        assert_eq!(first, second);
        // i=3 swaps with 0, i=2 swaps with 1, i=1 swaps with 0
        assert_eq!(first, vec!['c', 'd', 'b', 'a']);
    }

    #[test]
    fn identity_script_keeps_order() {
        let mut items = vec![1, 2, 3, 4, 5];
        shuffle(&mut items, &mut ScriptedRandom::identity(5));
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn exhausted_script_falls_back_to_zero() {
        let mut rng = ScriptedRandom::new([7]);
        assert_eq!(rng.below(5), 2);
        assert_eq!(rng.below(5), 0);
    }

    #[test]
    fn empty_and_single_slices_are_untouched() {
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut RngSource::seeded(1));
        assert!(empty.is_empty());

        let mut single = vec![9];
        shuffle(&mut single, &mut RngSource::seeded(1));
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn same_seed_same_order() {
        let mut first: Vec<u32> = (0..32).collect();
        let mut second = first.clone();
        shuffle(&mut first, &mut RngSource::seeded(42));
        shuffle(&mut second, &mut RngSource::seeded(42));
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(mut items in proptest::collection::vec(any::<u16>(), 0..64), seed in any::<u64>()) {
            let mut expected = items.clone();
            shuffle(&mut items, &mut RngSource::seeded(seed));
            items.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(items, expected);
        }

        #[test]
        fn draws_stay_in_bounds(bound in 1usize..1000, seed in any::<u64>()) {
            let mut rng = RngSource::seeded(seed);
            prop_assert!(rng.below(bound) < bound);
        }
    }
}
