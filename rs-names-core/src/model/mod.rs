//! Top-level module for the weighted name sampling system.
//!
//! This module provides:
//! - Dataset records (`Entry`)
//! - Frequency-weighted datasets with a bias exponent (`WeightedDataset`)
//! - Given name / surname pairing (`NameSampler`)
//! - The user-facing rarity scale (`Rarity`)
//! - The injectable randomness seam (`UniformSource`)

/// A single `(name, count)` record parsed from a dataset line.
pub mod entry;

/// Ordered dataset of entries with a biased probability distribution.
///
/// Handles line parsing, probability (re)computation and inverse-CDF picking.
pub mod weighted_dataset;

/// Pairs a given-name dataset with a surname dataset to produce full names.
pub mod name_sampler;

/// Rarity scale (0 to 100) and its mapping onto the bias exponent.
pub mod rarity;

/// Source of uniform random values in `[0, 1)`.
pub mod uniform_source;
