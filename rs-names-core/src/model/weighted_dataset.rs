use log::debug;

use super::entry::Entry;
use crate::error::{NameError, Result};

/// Field separator used by dataset lines.
pub const DELIMITER: char = ',';

/// Probabilities derived from the entry counts for a given bias.
///
/// `probabilities[i]` belongs to `entries[i]`.
#[derive(Clone, Debug)]
struct Distribution {
	bias: f64,
	probabilities: Vec<f64>,
}

/// An ordered dataset of `(name, count)` entries and its probability distribution.
///
/// ## Responsibilities:
/// - Parse `name,count` lines, tolerating lines with the wrong field count
/// - Turn counts into probabilities through the `count ^ bias` transform
/// - Map a point of `[0, 1)` onto an entry (inverse CDF in insertion order)
///
/// ## Invariants
/// - Entries keep their insertion order, duplicates are not merged
/// - Once computed, probabilities are finite and sum to 1.0 (within rounding)
/// - A failed recomputation leaves the previous distribution in place
#[derive(Clone, Debug, Default)]
pub struct WeightedDataset {
	entries: Vec<Entry>,
	distribution: Option<Distribution>,
}

impl WeightedDataset {
	/// Parses `lines` and computes the distribution with `bias`.
	///
	/// # Errors
	/// - `Parse` if a two-field line has a count that is not a non-negative integer.
	///   Nothing of the dataset is kept in that case.
	/// - `DegenerateDistribution` if `bias` leaves no usable probability mass.
	pub fn load<I, S>(lines: I, bias: f64) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut dataset = Self::from_entries(Self::parse(lines)?);
		dataset.recompute(bias)?;
		Ok(dataset)
	}

	/// Wraps already parsed entries. Probabilities still have to be computed
	/// with [`WeightedDataset::recompute`] before picking.
	pub fn from_entries(entries: Vec<Entry>) -> Self {
		Self { entries, distribution: None }
	}

	/// Parses dataset lines into entries.
	///
	/// - Lines that do not split into exactly two fields are skipped (blank lines, notes).
	/// - The name is stored verbatim, the count is parsed without trimming.
	pub(crate) fn parse<I, S>(lines: I) -> Result<Vec<Entry>>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut entries = Vec::new();
		for (index, line) in lines.into_iter().enumerate() {
			let line = line.as_ref();
			let fields: Vec<&str> = line.split(DELIMITER).collect();
			let [name, count] = fields.as_slice() else {
				debug!("skipping line {}: expected 2 fields, got {}", index + 1, fields.len());
				continue;
			};
			let count = count.parse::<u64>().map_err(|_| NameError::Parse {
				line: index + 1,
				content: line.to_owned(),
				field: (*count).to_owned(),
			})?;
			entries.push(Entry::new(*name, count));
		}
		Ok(entries)
	}

	/// Recomputes every probability with a new `bias`.
	///
	/// Each entry weighs `count ^ bias`, probabilities are weights over their total.
	/// Calls are independent from each other: nothing of a previous bias survives.
	///
	/// # Errors
	/// Returns `DegenerateDistribution` when:
	/// - `bias` is not finite
	/// - an entry has a zero count and `bias` is negative (`0^-b` is undefined)
	/// - the total weight is zero or not finite
	///
	/// # Notes
	/// An empty dataset has nothing to distribute; the call succeeds and picking
	/// keeps reporting `EmptyDataset`.
	pub fn recompute(&mut self, bias: f64) -> Result<()> {
		if self.entries.is_empty() {
			self.distribution = None;
			return Ok(());
		}
		if !bias.is_finite() {
			return Err(NameError::DegenerateDistribution(format!("bias {bias} is not finite")));
		}

		let weights = self
			.entries
			.iter()
			.map(|entry| Self::transform(entry, bias))
			.collect::<Result<Vec<f64>>>()?;

		let total: f64 = weights.iter().sum();
		if !total.is_finite() || total <= 0.0 {
			return Err(NameError::DegenerateDistribution(format!(
				"total weight {total} for bias {bias} cannot be normalized"
			)));
		}

		let probabilities = weights.into_iter().map(|weight| weight / total).collect();
		self.distribution = Some(Distribution { bias, probabilities });
		Ok(())
	}

	/// Weight of an entry for the given bias.
	fn transform(entry: &Entry, bias: f64) -> Result<f64> {
		if entry.count() == 0 && bias < 0.0 {
			return Err(NameError::DegenerateDistribution(format!(
				"{:?} has a zero count, undefined for bias {bias}",
				entry.name()
			)));
		}
		Ok((entry.count() as f64).powf(bias))
	}

	/// Returns the name found at `position` of the cumulative distribution.
	///
	/// See [`WeightedDataset::pick_entry`].
	pub fn pick(&self, position: f64) -> Result<&str> {
		Ok(self.pick_entry(position)?.name())
	}

	/// Returns the entry found at `position` of the cumulative distribution.
	///
	/// Entries are walked in insertion order, the first one with a non-zero
	/// probability whose cumulative probability reaches `position` wins.
	/// If rounding leaves the final cumulative sum below `position`, the last
	/// entry with a non-zero probability is returned.
	///
	/// # Errors
	/// - `EmptyDataset` if there are no entries
	/// - `NotInitialized` if probabilities were never computed
	/// - `InvalidPosition` if `position` is outside `[0, 1)`
	pub fn pick_entry(&self, position: f64) -> Result<&Entry> {
		if self.entries.is_empty() {
			return Err(NameError::EmptyDataset);
		}
		let distribution = self.distribution.as_ref().ok_or(NameError::NotInitialized)?;
		if !(0.0..1.0).contains(&position) {
			return Err(NameError::InvalidPosition(position));
		}

		let mut cumulative = 0.0;
		let mut last = None;
		for (entry, probability) in self.entries.iter().zip(&distribution.probabilities) {
			if *probability <= 0.0 {
				continue;
			}
			cumulative += probability;
			if cumulative >= position {
				return Ok(entry);
			}
			last = Some(entry);
		}

		// Normalization guarantees at least one entry with mass.
		last.ok_or_else(|| NameError::DegenerateDistribution("no entry carries probability mass".to_owned()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entries in insertion order.
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Probabilities in entry order, `None` until computed.
	pub fn probabilities(&self) -> Option<&[f64]> {
		self.distribution.as_ref().map(|d| d.probabilities.as_slice())
	}

	/// Probability of the entry at `index`, if computed and in range.
	pub fn probability_of(&self, index: usize) -> Option<f64> {
		self.probabilities()?.get(index).copied()
	}

	/// Bias used for the current distribution.
	pub fn bias(&self) -> Option<f64> {
		self.distribution.as_ref().map(|d| d.bias)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn load(lines: &[&str], bias: f64) -> WeightedDataset {
		WeightedDataset::load(lines.iter().copied(), bias).unwrap()
	}

	fn total(dataset: &WeightedDataset) -> f64 {
		dataset.probabilities().unwrap().iter().sum()
	}

	#[test]
	fn frequencies_drive_probabilities() {
		let dataset = load(&["Anna,100", "Maisha,1"], 1.0);
		assert!((dataset.probability_of(0).unwrap() - 100.0 / 101.0).abs() < 1e-12);
		assert!((dataset.probability_of(1).unwrap() - 1.0 / 101.0).abs() < 1e-12);
		assert_eq!(dataset.pick(0.5).unwrap(), "Anna");
		assert_eq!(dataset.pick(0.995).unwrap(), "Maisha");
	}

	#[test]
	fn zero_bias_is_uniform() {
		let dataset = load(&["A,10", "B,10"], 0.0);
		assert_eq!(dataset.probabilities().unwrap(), &[0.5, 0.5]);
		assert_eq!(dataset.pick(0.3).unwrap(), "A");
		assert_eq!(dataset.pick(0.7).unwrap(), "B");

		let skewed = load(&["A,1", "B,0", "C,5000", "D,42"], 0.0);
		for probability in skewed.probabilities().unwrap() {
			assert!((probability - 0.25).abs() < 1e-12);
		}
	}

	#[test]
	fn probabilities_sum_to_one() {
		let dataset = load(&["A,3", "B,17", "C,1", "D,250", "E,9", "F,0"], 1.0);
		assert!((total(&dataset) - 1.0).abs() < 1e-9);
	}

	#[test]
	fn higher_bias_favors_the_most_common_entry() {
		let lines = ["A,1", "B,5", "C,20", "D,3"];
		let mut previous = 0.0;
		for bias in [-1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0] {
			let probability = load(&lines, bias).probability_of(2).unwrap();
			assert!(probability >= previous, "bias {bias}: {probability} < {previous}");
			previous = probability;
		}
	}

	#[test]
	fn negative_bias_favors_rare_entries() {
		let dataset = load(&["Common,100", "Rare,1"], -1.0);
		assert!(dataset.probability_of(1).unwrap() > dataset.probability_of(0).unwrap());
	}

	#[test]
	fn pick_at_zero_skips_entries_without_mass() {
		let dataset = load(&["Zero,0", "One,1", "Two,2"], 1.0);
		assert_eq!(dataset.pick(0.0).unwrap(), "One");
	}

	#[test]
	fn pick_at_final_cumulative_sum_returns_last_entry() {
		let lines = ["a,1", "b,1", "c,1", "d,1", "e,1", "f,1", "g,1", "h,1", "i,1", "j,1"];
		let dataset = load(&lines, 1.0);
		let position = 1.0 - f64::EPSILON / 2.0;
		assert_eq!(dataset.pick(position).unwrap(), "j");
	}

	#[test]
	fn rounding_shortfall_falls_back_to_last_entry_with_mass() {
		let dataset = load(&["a,1", "b,1", "c,1", "d,1", "e,1", "f,1", "g,1", "Z,0"], 1.0);
		let position = 1.0 - f64::EPSILON / 2.0;
		let total: f64 = dataset.probabilities().unwrap().iter().sum();
		assert!(total < position, "sum {total} must fall short of {position}");
		assert_eq!(dataset.pick(position).unwrap(), "g");
	}

	#[test]
	fn trailing_zero_entries_are_never_picked() {
		let dataset = load(&["A,1", "B,1", "C,0"], 1.0);
		assert_eq!(dataset.pick(1.0 - f64::EPSILON / 2.0).unwrap(), "B");
	}

	#[test]
	fn malformed_lines_are_skipped() {
		let dataset = load(&["OnlyOneField", "Name,5"], 1.0);
		assert_eq!(dataset.len(), 1);
		assert_eq!(dataset.entries()[0], Entry::new("Name", 5));

		let dataset = load(&["", "A,1,extra", "B,2", "   "], 1.0);
		assert_eq!(dataset.entries(), &[Entry::new("B", 2)]);
	}

	#[test]
	fn header_row_is_a_parse_error() {
		let err = WeightedDataset::load(["name,count", "Anna,3"], 1.0).unwrap_err();
		match err {
			NameError::Parse { line, field, .. } => {
				assert_eq!(line, 1);
				assert_eq!(field, "count");
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn count_is_not_trimmed_and_must_be_non_negative() {
		assert!(matches!(WeightedDataset::load(["Anna, 5"], 1.0), Err(NameError::Parse { .. })));
		assert!(matches!(WeightedDataset::load(["Anna,-5"], 1.0), Err(NameError::Parse { .. })));
		assert!(matches!(WeightedDataset::load(["Anna,1.5"], 1.0), Err(NameError::Parse { .. })));
	}

	#[test]
	fn names_are_stored_verbatim() {
		let dataset = load(&["  mARY ,4", "mary,4"], 1.0);
		assert_eq!(dataset.entries()[0].name(), "  mARY ");
		assert_eq!(dataset.len(), 2);
	}

	#[test]
	fn all_zero_counts_are_degenerate() {
		let err = WeightedDataset::load(["A,0", "B,0"], 1.0).unwrap_err();
		assert!(matches!(err, NameError::DegenerateDistribution(_)));
	}

	#[test]
	fn zero_count_with_negative_bias_is_degenerate() {
		let err = WeightedDataset::load(["A,0", "B,3"], -1.0).unwrap_err();
		assert!(matches!(err, NameError::DegenerateDistribution(_)));
	}

	#[test]
	fn non_finite_bias_is_degenerate() {
		for bias in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
			let err = WeightedDataset::load(["A,2"], bias).unwrap_err();
			assert!(matches!(err, NameError::DegenerateDistribution(_)));
		}
	}

	#[test]
	fn overflowing_weights_are_degenerate() {
		let err = WeightedDataset::load(["A,18446744073709551615", "B,1"], 400.0).unwrap_err();
		assert!(matches!(err, NameError::DegenerateDistribution(_)));
	}

	#[test]
	fn recompute_overwrites_previous_bias() {
		let mut dataset = load(&["A,1", "B,3"], 1.0);
		let original = dataset.probabilities().unwrap().to_vec();

		dataset.recompute(0.0).unwrap();
		assert_eq!(dataset.probabilities().unwrap(), &[0.5, 0.5]);
		assert_eq!(dataset.bias(), Some(0.0));

		dataset.recompute(1.0).unwrap();
		assert_eq!(dataset.probabilities().unwrap(), original.as_slice());
	}

	#[test]
	fn failed_recompute_keeps_previous_distribution() {
		let mut dataset = load(&["A,0", "B,3"], 1.0);
		assert!(dataset.recompute(-2.0).is_err());
		assert_eq!(dataset.bias(), Some(1.0));
		assert_eq!(dataset.pick(0.1).unwrap(), "B");
	}

	#[test]
	fn empty_dataset_cannot_be_sampled() {
		let dataset = WeightedDataset::load(Vec::<String>::new(), 1.0).unwrap();
		assert!(dataset.is_empty());
		assert!(matches!(dataset.pick(0.5), Err(NameError::EmptyDataset)));
		assert!(matches!(WeightedDataset::default().pick(0.0), Err(NameError::EmptyDataset)));
	}

	#[test]
	fn uncomputed_dataset_is_not_initialized() {
		let dataset = WeightedDataset::from_entries(vec![Entry::new("A", 1)]);
		assert!(dataset.probabilities().is_none());
		assert!(matches!(dataset.pick(0.5), Err(NameError::NotInitialized)));
	}

	#[test]
	fn positions_outside_unit_interval_are_rejected() {
		let dataset = load(&["A,1"], 1.0);
		for position in [1.0, 1.5, -0.1, f64::NAN] {
			assert!(matches!(dataset.pick(position), Err(NameError::InvalidPosition(_))));
		}
	}

	#[test]
	fn duplicates_are_kept_in_order() {
		let dataset = load(&["A,1", "B,1", "A,2"], 1.0);
		assert_eq!(dataset.len(), 3);
		assert_eq!(dataset.pick(0.9).unwrap(), "A");
		assert_eq!(dataset.pick_entry(0.9).unwrap().count(), 2);
	}
}
