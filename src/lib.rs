//! # wheel-rs: Lottery Wheel Reduction in Rust
//!
//! **`wheel-rs`** reduces a large pool of fixed-size number combinations down
//! to a smaller subset that still guarantees a minimum pairwise overlap
//! ("hits") between any two chosen combinations. It targets lottery-style
//! ticket reduction: given N candidate numbers, enumerate every k-subset,
//! then select as few subsets as possible such that every pair of selected
//! subsets shares at least `min_hits` common numbers.
//!
//! ## How it works
//!
//! Finding a minimum-size covering set is NP-hard, so the reducer is a
//! randomized greedy heuristic: the first member is drawn uniformly at
//! random, and each following step samples a bounded number of remaining
//! candidates and accepts the best one that keeps the pairwise guarantee.
//! The sample bound keeps per-step cost constant regardless of pool size.
//!
//! ## Key Features
//!
//! - **Manager-Centric Architecture**: All operations go through the
//!   [`Wheel`][crate::wheel::Wheel] manager, which owns the configuration,
//!   the universe, and the random source.
//! - **Exact Self-Checks**: The generator verifies its output against the
//!   closed-form binomial coefficient C(n, k) before returning a pool.
//! - **Reproducible**: Randomness is injected, never global. Seed the wheel
//!   and every reduction over the same universe is identical.
//! - **Explicit Configuration**: Every constant (number bounds, combination
//!   size, selection bounds, allowed guarantees) lives in one
//!   [`WheelConfig`][crate::config::WheelConfig] value passed at construction.
//!
//! ## Basic Usage
//!
//! ```rust
//! use wheel_rs::config::WheelConfig;
//! use wheel_rs::wheel::Wheel;
//!
//! // 1. Build a wheel (seeded here for reproducibility)
//! let mut wheel = Wheel::with_seed(WheelConfig::default(), 42);
//!
//! // 2. Set the universe of candidate numbers
//! wheel.set_universe(&[3, 7, 12, 19, 23, 27, 31, 38]).unwrap();
//!
//! // 3. Reduce: C(8, 6) = 28 combinations fit within the bound, so the
//! //    whole pool comes back
//! let selection = wheel.reduce(3).unwrap();
//! assert_eq!(selection.len(), 28);
//!
//! // 4. Double-check the guarantee
//! assert!(wheel.validate(&selection, 3));
//! ```
//!
//! ## Core Components
//!
//! - **[`wheel`]**: The heart of the library. Contains the
//!   [`Wheel`][crate::wheel::Wheel] manager and the greedy reduction loop.
//! - **[`combinations`]**: Memory-conscious lexicographic k-subset
//!   enumeration and the exact binomial coefficient.
//! - **[`types`]**: The canonical [`Combination`][crate::types::Combination]
//!   and hit counting.
//! - **[`config`]** / **[`error`]**: Explicit constants and the error
//!   taxonomy.

pub mod combinations;
pub mod config;
pub mod error;
pub mod types;
pub mod wheel;
