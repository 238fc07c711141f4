use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;
use std::ops::Range;

/// Source of every random draw made while building a fixture.
///
/// Generators take `&mut dyn Entropy` instead of reaching for a global RNG,
/// so a run can be replayed from a seed or from a scripted sequence.
pub trait Entropy {
    /// Returns a value uniformly distributed in `range` (`start..end`).
    fn draw(
        &mut self,
        range: Range<u32>,
    ) -> u32;

    /// Picks one element of `items` uniformly.
    fn pick<'a>(
        &mut self,
        items: &[&'a str],
    ) -> &'a str {
        let idx = self.draw(0..items.len() as u32) as usize;
        items[idx]
    }
}

/// `Entropy` backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandEntropy<R>(pub R);

impl RandEntropy<StdRng> {
    /// Seeded from the operating system; what the binary uses.
    pub fn from_os() -> Self {
        RandEntropy(StdRng::from_entropy())
    }

    /// Reproducible stream for tests.
    pub fn seeded(seed: u64) -> Self {
        RandEntropy(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Entropy for RandEntropy<R> {
    fn draw(
        &mut self,
        range: Range<u32>,
    ) -> u32 {
        self.0.gen_range(range)
    }
}

/// Replays a fixed list of values, one per draw.
///
/// Test support: panics when the script runs out or a value falls outside
/// the requested range.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    values: VecDeque<u32>,
}

impl Scripted {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Scripted {
            values: values.into_iter().collect(),
        }
    }

    /// Values not consumed yet.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl Entropy for Scripted {
    fn draw(
        &mut self,
        range: Range<u32>,
    ) -> u32 {
        let value = self
            .values
            .pop_front()
            .unwrap_or_else(|| panic!("scripted entropy exhausted (wanted {range:?})"));
        assert!(
            range.contains(&value),
            "scripted value {value} outside {range:?}"
        );
        value
    }
}
