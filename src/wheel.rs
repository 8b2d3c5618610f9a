//! The wheel manager: universe handling, pool generation, greedy reduction.
//!
//! All operations go through a [`Wheel`] value, which owns the configuration,
//! the current universe, and the random source. Reduction is a randomized
//! greedy heuristic: finding a provably minimum covering set is intractable,
//! so each step samples a bounded number of candidates and accepts the best
//! eligible one. Per-step cost is therefore independent of pool size.

use log::{debug, info};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::combinations::{binomial, Combinations};
use crate::config::WheelConfig;
use crate::error::{Error, Result};
use crate::types::Combination;

/// Candidates examined per reduction step.
///
/// Caps the work of one iteration regardless of how large the remaining pool
/// is, trading optimality for tractability.
const SAMPLE_SIZE: usize = 100;

/// Reduces a pool of k-combinations to a bounded subset in which every pair
/// shares at least `min_hits` numbers.
///
/// # Example
///
/// ```
/// use wheel_rs::config::WheelConfig;
/// use wheel_rs::wheel::Wheel;
///
/// let mut wheel = Wheel::with_seed(WheelConfig::default(), 42);
/// wheel.set_universe(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
///
/// // C(8, 6) = 28 combinations, all pairs overlapping in >= 4 numbers.
/// let pool = wheel.generate(6).unwrap();
/// assert_eq!(pool.len(), 28);
/// assert!(wheel.validate(&pool, 4));
/// ```
pub struct Wheel {
    config: WheelConfig,
    universe: Vec<u32>,
    rng: StdRng,
}

impl Wheel {
    /// Creates a wheel with an entropy-seeded random source.
    pub fn new(config: WheelConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a wheel with a fixed seed, so repeated reductions over the
    /// same universe produce identical selections.
    pub fn with_seed(config: WheelConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: WheelConfig, rng: StdRng) -> Self {
        Self {
            config,
            universe: Vec::new(),
            rng,
        }
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// The current universe, sorted ascending.
    pub fn universe(&self) -> &[u32] {
        &self.universe
    }

    /// Checks a raw input list without modifying the wheel: enough numbers,
    /// all within bounds, no duplicates.
    pub fn check_input(&self, numbers: &[u32]) -> bool {
        if numbers.len() < self.config.min_input_count {
            return false;
        }
        if !numbers.iter().all(|&n| (1..=self.config.max_number).contains(&n)) {
            return false;
        }
        let mut sorted = numbers.to_vec();
        sorted.sort_unstable();
        sorted.windows(2).all(|w| w[0] < w[1])
    }

    /// Checks whether `min_hits` is an allowed guarantee value.
    pub fn check_min_hits(&self, min_hits: u32) -> bool {
        self.config.allows_min_hits(min_hits)
    }

    /// Sets the universe from the given numbers, de-duplicating and sorting.
    ///
    /// Fails with [`Error::InsufficientInput`] if any number lies outside
    /// `1..=max_number` or fewer than `min_input_count` distinct numbers
    /// remain after de-duplication.
    pub fn set_universe(&mut self, numbers: &[u32]) -> Result<()> {
        if numbers.is_empty() {
            return Err(Error::insufficient("no numbers supplied"));
        }
        if let Some(&n) = numbers.iter().find(|&&n| !(1..=self.config.max_number).contains(&n)) {
            return Err(Error::insufficient(format!(
                "number {} is outside the allowed range 1..={}",
                n, self.config.max_number
            )));
        }

        let mut universe = numbers.to_vec();
        universe.sort_unstable();
        universe.dedup();

        if universe.len() < self.config.min_input_count {
            return Err(Error::insufficient(format!(
                "at least {} distinct numbers are required, got {}",
                self.config.min_input_count,
                universe.len()
            )));
        }

        debug!("set_universe: {} distinct numbers", universe.len());
        self.universe = universe;
        Ok(())
    }

    /// Generates the full pool: every `size`-subset of the universe, in
    /// lexicographic order.
    ///
    /// The pool length is verified against the closed-form count C(n, size);
    /// a mismatch is a generator defect and fails with [`Error::Integrity`].
    pub fn generate(&self, size: usize) -> Result<Vec<Combination>> {
        let n = self.universe.len();
        if n == 0 {
            return Err(Error::insufficient("no universe has been set"));
        }
        if n < self.config.min_input_count {
            return Err(Error::insufficient(format!(
                "at least {} distinct numbers are required, got {}",
                self.config.min_input_count, n
            )));
        }
        if size == 0 || size > n {
            return Err(Error::invalid(format!(
                "combination size {} is not in 1..={}",
                size, n
            )));
        }

        let expected = binomial(n, size);
        info!(
            "generating all {}-subsets of {} numbers, expecting {} combinations",
            size, n, expected
        );

        let pool: Vec<Combination> = Combinations::new(&self.universe, size).collect();

        if BigUint::from(pool.len()) != expected {
            return Err(Error::Integrity {
                expected: expected.to_string(),
                actual: pool.len(),
            });
        }
        Ok(pool)
    }

    /// Reduces the full pool to at most `max_reduced_count` combinations in
    /// which every pair built by the greedy loop shares at least `min_hits`
    /// numbers.
    ///
    /// If the pool already fits within the bound, it is returned whole and
    /// unchecked. Otherwise the first member is drawn uniformly at random and
    /// each following step samples up to [`SAMPLE_SIZE`] remaining candidates,
    /// accepting the highest-scoring one that overlaps every selected member
    /// in at least `min_hits` numbers. A sample with no eligible candidate
    /// ends the loop early; that is expected behavior, not an error.
    pub fn reduce(&mut self, min_hits: u32) -> Result<Vec<Combination>> {
        if !self.config.allows_min_hits(min_hits) {
            return Err(Error::invalid(format!(
                "min_hits {} is not one of the allowed values {:?}",
                min_hits, self.config.allowed_min_hits
            )));
        }

        let pool = self.generate(self.config.combination_size)?;
        let max = self.config.max_reduced_count;

        if pool.len() <= max {
            info!("pool of {} fits within {}, no reduction needed", pool.len(), max);
            return Ok(pool);
        }

        let mut remaining = pool;
        let first = remaining.swap_remove(self.rng.gen_range(0..remaining.len()));
        debug!("reduce: first pick {}", first);
        let mut selection = vec![first];

        while !remaining.is_empty() && selection.len() < max {
            let amount = SAMPLE_SIZE.min(remaining.len());
            let sample = rand::seq::index::sample(&mut self.rng, remaining.len(), amount);

            // Highest-scoring sampled candidate that overlaps every selected
            // member in at least min_hits numbers. Ties go to the first
            // encountered in sample order.
            let mut best: Option<(usize, u32)> = None;
            for idx in sample {
                let candidate = &remaining[idx];
                let mut score = 0;
                let mut eligible = true;
                for selected in &selection {
                    let hits = candidate.hits(selected);
                    if hits < min_hits {
                        eligible = false;
                        break;
                    }
                    score += hits;
                }
                if eligible && best.map_or(true, |(_, s)| score > s) {
                    best = Some((idx, score));
                }
            }

            match best {
                Some((idx, score)) => {
                    debug!(
                        "reduce: accepting {} with score {} ({} selected)",
                        remaining[idx],
                        score,
                        selection.len() + 1
                    );
                    selection.push(remaining.swap_remove(idx));
                }
                None => {
                    debug!(
                        "reduce: no eligible candidate in a sample of {}, stopping at {}",
                        amount,
                        selection.len()
                    );
                    break;
                }
            }
        }

        info!("reduced to {} combinations", selection.len());
        Ok(selection)
    }

    /// Returns true iff every pair in `selection` shares at least `min_hits`
    /// numbers. Read-only post-condition check, O(m²) hit computations.
    pub fn validate(&self, selection: &[Combination], min_hits: u32) -> bool {
        for (i, a) in selection.iter().enumerate() {
            for b in &selection[i + 1..] {
                if a.hits(b) < min_hits {
                    return false;
                }
            }
        }
        true
    }
}
