use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, NameError>;

/// Everything that can go wrong while loading or sampling a dataset.
///
/// Lines with the wrong number of fields are not errors, they are skipped
/// during loading.
#[derive(Error, Debug)]
pub enum NameError {
	/// The count field of a two-field line is not a non-negative integer.
	#[error("line {line}: invalid count {field:?} in {content:?}")]
	Parse {
		line: usize,
		content: String,
		field: String,
	},

	/// The bias/count combination leaves no usable probability mass,
	/// or evaluates an undefined power such as `0^-1`.
	#[error("degenerate distribution: {0}")]
	DegenerateDistribution(String),

	#[error("dataset has no entries")]
	EmptyDataset,

	#[error("probabilities have not been computed")]
	NotInitialized,

	#[error("position must be in [0, 1), got {0}")]
	InvalidPosition(f64),

	#[error("rarity must be between 0 and 100, got {0}")]
	InvalidRarity(f64),

	#[error("{}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("dataset cache: {0}")]
	Cache(#[from] postcard::Error),

	#[error("invalid configuration: {0}")]
	Config(String),
}

impl NameError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}
