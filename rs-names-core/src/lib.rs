//! Frequency-weighted random name generation library.
//!
//! This crate provides the sampling engine behind the name generator:
//! - Weighted datasets loaded from `name,count` lines
//! - A tunable bias exponent skewing draws toward common or rare entries
//! - Independent given-name / surname pairing with an injectable random source
//! - Dataset layout configuration and file loading helpers
//!
//! Randomness is always passed in explicitly, there is no global generator.

/// Weighted datasets, rarity mapping and name sampling.
pub mod model;

/// Dataset layout (which file backs which gender or surname group).
pub mod config;

/// Error taxonomy shared by every fallible operation.
pub mod error;

/// I/O utilities (line reading, dataset loading, binary cache).
pub mod io;

pub use error::{NameError, Result};
pub use model::name_sampler::{NameSampler, load_dataset, sample_many, sample_one};
pub use model::rarity::Rarity;
pub use model::uniform_source::UniformSource;
pub use model::weighted_dataset::WeightedDataset;
