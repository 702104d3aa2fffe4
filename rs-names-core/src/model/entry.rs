use std::fmt;

use serde::{Deserialize, Serialize};

/// A named record with its observed frequency.
///
/// The probability derived from `count` is not stored here, it belongs to
/// the dataset distribution and is recomputed wholesale.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Entry {
	/// Name exactly as it appeared in the source line.
	name: String,
	/// Number of observations.
	count: u64,
}

impl Entry {
	pub fn new(name: impl Into<String>, count: u64) -> Self {
		Self { name: name.into(), count }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn count(&self) -> u64 {
		self.count
	}
}

impl fmt::Display for Entry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}
