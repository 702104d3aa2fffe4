use super::uniform_source::UniformSource;
use super::weighted_dataset::WeightedDataset;
use crate::error::Result;

/// Pairs a given-name dataset with a surname dataset.
///
/// The sampler holds no state of its own: every draw comes from the source
/// passed by the caller, so two identically seeded sources give identical names.
#[derive(Clone, Copy, Debug)]
pub struct NameSampler<'a> {
	given: &'a WeightedDataset,
	surname: &'a WeightedDataset,
}

impl<'a> NameSampler<'a> {
	pub fn new(given: &'a WeightedDataset, surname: &'a WeightedDataset) -> Self {
		Self { given, surname }
	}

	/// Draws one full name as `"Given Surname"`.
	///
	/// One uniform value is drawn for the given name, then one for the surname.
	///
	/// # Errors
	/// Propagates picking errors from either dataset (`EmptyDataset`, `NotInitialized`...).
	pub fn next_name<S: UniformSource + ?Sized>(&self, source: &mut S) -> Result<String> {
		let given = self.given.pick(source.next_uniform())?;
		let surname = self.surname.pick(source.next_uniform())?;
		Ok(format!("{given} {surname}"))
	}

	/// Draws `count` independent names.
	///
	/// Repeated names are expected when one entry dominates a dataset.
	pub fn next_names<S: UniformSource + ?Sized>(&self, source: &mut S, count: usize) -> Result<Vec<String>> {
		(0..count).map(|_| self.next_name(source)).collect()
	}
}

/// Parses dataset lines and computes their distribution with `bias`.
pub fn load_dataset<I, S>(lines: I, bias: f64) -> Result<WeightedDataset>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	WeightedDataset::load(lines, bias)
}

/// Draws one `"Given Surname"` string.
pub fn sample_one<S: UniformSource + ?Sized>(
	given: &WeightedDataset,
	surname: &WeightedDataset,
	source: &mut S,
) -> Result<String> {
	NameSampler::new(given, surname).next_name(source)
}

/// Draws `count` independent `"Given Surname"` strings.
pub fn sample_many<S: UniformSource + ?Sized>(
	given: &WeightedDataset,
	surname: &WeightedDataset,
	source: &mut S,
	count: usize,
) -> Result<Vec<String>> {
	NameSampler::new(given, surname).next_names(source, count)
}
