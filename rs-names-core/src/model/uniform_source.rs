use rand::Rng;

/// Anything able to produce uniform values in `[0, 1)`.
///
/// Every `rand::Rng` is a source, so a seeded `StdRng` gives reproducible
/// sessions and `rand::rng()` gives fresh ones. Independent callers should
/// own independent sources.
pub trait UniformSource {
	/// Returns the next value, uniformly distributed in `[0, 1)`.
	fn next_uniform(&mut self) -> f64;
}

impl<R: Rng> UniformSource for R {
	fn next_uniform(&mut self) -> f64 {
		self.random::<f64>()
	}
}

/// Replays a fixed list of values, cycling back to the start when exhausted.
///
/// Intended for tests and demonstrations where the exact draw must be known.
#[derive(Clone, Debug)]
pub struct FixedSequence {
	values: Vec<f64>,
	cursor: usize,
}

impl FixedSequence {
	/// Creates a sequence replaying `values` in order.
	///
	/// An empty list replays `0.0` forever.
	pub fn new(values: Vec<f64>) -> Self {
		Self { values, cursor: 0 }
	}
}

impl UniformSource for FixedSequence {
	fn next_uniform(&mut self) -> f64 {
		if self.values.is_empty() {
			return 0.0;
		}
		let value = self.values[self.cursor];
		self.cursor = (self.cursor + 1) % self.values.len();
		value
	}
}
