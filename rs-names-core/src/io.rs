use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::{debug, info, warn};

use crate::error::{NameError, Result};
use crate::model::entry::Entry;
use crate::model::weighted_dataset::WeightedDataset;

/// Extension of the binary cache written next to a dataset file.
pub const CACHE_EXTENSION: &str = "bin";

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
	let path = path.as_ref();
	let contents = fs::read_to_string(path).map_err(|e| NameError::io(path, e))?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/Surnames_All.csv` + `"bin"` → `data/Surnames_All.bin`
pub(crate) fn build_output_path<P: AsRef<Path>>(input_path: P, output_extension: &str) -> Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path.file_stem().ok_or_else(|| {
		NameError::io(
			input_path,
			std::io::Error::new(std::io::ErrorKind::InvalidInput, "Input path has no filename"),
		)
	})?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

/// Loads a dataset file and computes its distribution with `bias`.
///
/// # Errors
/// - `Io` if the file cannot be read
/// - any error of [`WeightedDataset::load`]
pub fn load_dataset_file<P: AsRef<Path>>(path: P, bias: f64) -> Result<WeightedDataset> {
	let path = path.as_ref();
	let lines = read_lines(path)?;
	debug!("read {} lines from {}", lines.len(), path.display());
	WeightedDataset::load(lines, bias)
}

/// Loads a dataset file, going through a binary cache when possible.
///
/// - If `<stem>.bin` exists and is strictly newer than the text file, the parsed
///   entries are decoded from it with `postcard`.
/// - Otherwise the text file is parsed and the cache is (re)written.
///
/// Only entries are cached: the distribution is always computed with `bias`.
///
/// # Notes
/// - A cache whose source file disappeared is still used, with a warning.
/// - Equal modification times count as stale: coarse timestamps cannot order them.
pub fn load_dataset_cached<P: AsRef<Path>>(path: P, bias: f64) -> Result<WeightedDataset> {
	let path = path.as_ref();
	let cache_path = build_output_path(path, CACHE_EXTENSION)?;

	let entries = if cache_is_fresh(path, &cache_path) {
		let bytes = fs::read(&cache_path).map_err(|e| NameError::io(&cache_path, e))?;
		let entries: Vec<Entry> = postcard::from_bytes(&bytes)?;
		info!("loaded {} entries from cache {}", entries.len(), cache_path.display());
		entries
	} else {
		let entries = WeightedDataset::parse(read_lines(path)?)?;
		let bytes = postcard::to_stdvec(&entries)?;
		fs::write(&cache_path, bytes).map_err(|e| NameError::io(&cache_path, e))?;
		info!("wrote {} entries to cache {}", entries.len(), cache_path.display());
		entries
	};

	let mut dataset = WeightedDataset::from_entries(entries);
	dataset.recompute(bias)?;
	Ok(dataset)
}

/// Whether the cache can be used in place of the source file.
fn cache_is_fresh(source: &Path, cache: &Path) -> bool {
	let modified = |path: &Path| -> Option<SystemTime> { fs::metadata(path).and_then(|m| m.modified()).ok() };

	match (modified(source), modified(cache)) {
		(Some(source), Some(cache)) => cache > source,
		(None, Some(_)) => {
			warn!("{} is missing, using cache {}", source.display(), cache.display());
			true
		}
		_ => false,
	}
}
