use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ScopeError;
use crate::model::{Catalog, Scope, SentencePair};

/// Shuffles `items` in place with Fisher–Yates.
///
/// Walks from the last index down to 1 and swaps each slot with a uniformly
/// chosen index in `0..=i`, which yields every permutation with equal probability.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// The sentence pairs of one session, played in a shuffled order.
///
/// The pool is never empty, so `current` always has a pair to return. Once every
/// pair has been visited the order is reshuffled and the next cycle begins.
pub struct SentencePool {
    items: Vec<SentencePair>,
    cursor: usize,
    cycles_completed: u64,
    rng: StdRng,
}

impl SentencePool {
    /// Builds a shuffled pool for `scope`, seeded from the thread RNG.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError` if the scope is unknown or has no sentences.
    pub fn new(catalog: &Catalog, scope: &Scope) -> Result<Self, ScopeError> {
        let rng = StdRng::from_rng(&mut rand::rng());
        Self::with_rng(catalog, scope, rng)
    }

    /// Builds a pool whose shuffles are reproducible for a given seed.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError` if the scope is unknown or has no sentences.
    pub fn with_seed(catalog: &Catalog, scope: &Scope, seed: u64) -> Result<Self, ScopeError> {
        Self::with_rng(catalog, scope, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: &Catalog, scope: &Scope, mut rng: StdRng) -> Result<Self, ScopeError> {
        let mut items = catalog.resolve(scope)?;
        shuffle(&mut items, &mut rng);
        Ok(Self {
            items,
            cursor: 0,
            cycles_completed: 0,
            rng,
        })
    }

    #[must_use]
    pub fn current(&self) -> &SentencePair {
        &self.items[self.cursor]
    }

    /// Moves to the next pair, reshuffling when the cycle wraps around.
    ///
    /// Returns true if a new cycle started.
    pub fn advance(&mut self) -> bool {
        self.cursor = (self.cursor + 1) % self.items.len();
        if self.cursor != 0 {
            return false;
        }
        shuffle(&mut self.items, &mut self.rng);
        self.cycles_completed += 1;
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    /// The current cycle's ordering.
    #[must_use]
    pub fn items(&self) -> &[SentencePair] {
        &self.items
    }
}

impl std::fmt::Debug for SentencePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentencePool")
            .field("len", &self.items.len())
            .field("cursor", &self.cursor)
            .field("cycles_completed", &self.cycles_completed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryId};
    use std::collections::HashMap;

    fn build_catalog(size: usize) -> Catalog {
        let sentences = (0..size)
            .map(|i| SentencePair::new(format!("src{i}"), format!("dst{i}")))
            .collect();
        Catalog::new(vec![Category::new(CategoryId::new("x"), "X", sentences)]).unwrap()
    }

    fn sorted_targets(items: &[SentencePair]) -> Vec<String> {
        let mut targets: Vec<_> = items.iter().map(|p| p.target_text().to_owned()).collect();
        targets.sort();
        targets
    }

    #[test]
    fn empty_scope_is_rejected() {
        let catalog =
            Catalog::new(vec![Category::new(CategoryId::new("x"), "X", Vec::new())]).unwrap();
        let err = SentencePool::new(&catalog, &Scope::parse("x")).unwrap_err();
        assert!(matches!(err, ScopeError::EmptyScope(_)));
    }

    #[test]
    fn advance_wraps_and_counts_cycles() {
        let catalog = build_catalog(3);
        let mut pool = SentencePool::with_seed(&catalog, &Scope::All, 1).unwrap();

        assert!(!pool.advance());
        assert!(!pool.advance());
        assert!(pool.advance());
        assert_eq!(pool.cursor(), 0);
        assert_eq!(pool.cycles_completed(), 1);
    }

    #[test]
    fn reshuffle_keeps_the_same_multiset() {
        let catalog = build_catalog(6);
        let mut pool = SentencePool::with_seed(&catalog, &Scope::All, 42).unwrap();
        let before = sorted_targets(pool.items());

        for _ in 0..(pool.len() * 5) {
            pool.advance();
            assert_eq!(sorted_targets(pool.items()), before);
        }
    }

    #[test]
    fn every_pair_is_visited_once_per_cycle() {
        let catalog = build_catalog(5);
        let mut pool = SentencePool::with_seed(&catalog, &Scope::All, 9).unwrap();

        for _ in 0..4 {
            let mut seen = Vec::new();
            for _ in 0..pool.len() {
                seen.push(pool.current().clone());
                pool.advance();
            }
            assert_eq!(sorted_targets(&seen), sorted_targets(catalog.categories()[0].sentences()));
        }
    }

    #[test]
    fn same_seed_gives_same_order() {
        let catalog = build_catalog(8);
        let a = SentencePool::with_seed(&catalog, &Scope::All, 7).unwrap();
        let b = SentencePool::with_seed(&catalog, &Scope::All, 7).unwrap();
        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn shuffle_is_uniform_over_permutations() {
        let mut rng = StdRng::seed_from_u64(2024);
        let rounds = 60_000;
        let mut counts: HashMap<[u8; 3], u32> = HashMap::new();

        for _ in 0..rounds {
            let mut items = [0u8, 1, 2];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_default() += 1;
        }

        // 3! permutations, each expected 10_000 times; stddev is about 91.
        assert_eq!(counts.len(), 6);
        for (perm, count) in &counts {
            assert!(
                (9_500..=10_500).contains(count),
                "permutation {perm:?} seen {count} times"
            );
        }
    }

    #[test]
    fn shuffle_handles_short_slices() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut one = [5u8];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [5]);
    }
}
