use crate::error::{NameError, Result};

/// User-facing rarity on a 0 to 100 scale.
///
/// Rarity is translated into the bias exponent applied to counts:
/// - `0` → bias `2` (common names strongly favored)
/// - `50` → bias `1` (proportional to observed frequency)
/// - `100` → bias `-1` (rare names favored)
///
/// Both halves are linear.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Rarity(f64);

impl Rarity {
	pub const MIN: f64 = 0.0;
	pub const MAX: f64 = 100.0;
	/// Rarity at which sampling follows the raw frequencies.
	pub const NEUTRAL: f64 = 50.0;

	/// Validates a rarity value.
	///
	/// # Errors
	/// Returns `InvalidRarity` for values outside `[0, 100]` (NaN included).
	pub fn new(value: f64) -> Result<Self> {
		if !(Self::MIN..=Self::MAX).contains(&value) {
			return Err(NameError::InvalidRarity(value));
		}
		Ok(Self(value))
	}

	pub fn value(self) -> f64 {
		self.0
	}

	/// Bias exponent for this rarity.
	pub fn bias(self) -> f64 {
		if self.0 <= Self::NEUTRAL {
			2.0 - self.0 / Self::NEUTRAL
		} else {
			1.0 - 2.0 * (self.0 - Self::NEUTRAL) / (Self::MAX - Self::NEUTRAL)
		}
	}
}

impl Default for Rarity {
	fn default() -> Self {
		Self(Self::NEUTRAL)
	}
}

impl TryFrom<f64> for Rarity {
	type Error = NameError;

	fn try_from(value: f64) -> Result<Self> {
		Self::new(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn bias(value: f64) -> f64 {
		Rarity::new(value).unwrap().bias()
	}

	#[test]
	fn endpoints_are_preserved() {
		assert_eq!(bias(0.0), 2.0);
		assert_eq!(bias(50.0), 1.0);
		assert_eq!(bias(100.0), -1.0);
	}

	#[test]
	fn halves_are_linear() {
		assert!((bias(25.0) - 1.5).abs() < 1e-12);
		assert!((bias(75.0) - 0.0).abs() < 1e-12);
	}

	#[test]
	fn bias_decreases_with_rarity() {
		let mut previous = f64::INFINITY;
		for step in 0..=100 {
			let current = bias(step as f64);
			assert!(current < previous);
			previous = current;
		}
	}

	#[test]
	fn default_is_neutral() {
		assert_eq!(Rarity::default().bias(), 1.0);
	}

	#[test]
	fn out_of_range_is_rejected() {
		assert!(matches!(Rarity::new(-0.5), Err(NameError::InvalidRarity(_))));
		assert!(matches!(Rarity::new(100.5), Err(NameError::InvalidRarity(_))));
		assert!(matches!(Rarity::try_from(f64::NAN), Err(NameError::InvalidRarity(_))));
	}
}
