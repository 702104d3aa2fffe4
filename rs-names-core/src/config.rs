use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{NameError, Result};

/// Which given-name dataset to sample from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gender {
	#[default]
	All,
	Female,
	Male,
	Neutral,
}

impl Gender {
	/// Matches a command-line keyword, ignoring case.
	pub fn from_keyword(keyword: &str) -> Option<Self> {
		match keyword.to_lowercase().as_str() {
			"f" | "female" => Some(Self::Female),
			"m" | "male" => Some(Self::Male),
			"n" | "neutral" => Some(Self::Neutral),
			_ => None,
		}
	}
}

impl fmt::Display for Gender {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::All => "all",
			Self::Female => "female",
			Self::Male => "male",
			Self::Neutral => "neutral",
		})
	}
}

/// Which surname dataset to sample from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurnameGroup {
	#[default]
	All,
	American,
	Asian,
	Black,
	Hispanic,
	White,
}

impl SurnameGroup {
	/// Matches a command-line keyword, ignoring case.
	///
	/// `american` refers to native North-American surnames.
	pub fn from_keyword(keyword: &str) -> Option<Self> {
		match keyword.to_lowercase().as_str() {
			"american" => Some(Self::American),
			"asian" => Some(Self::Asian),
			"black" => Some(Self::Black),
			"hispanic" => Some(Self::Hispanic),
			"white" => Some(Self::White),
			_ => None,
		}
	}
}

impl fmt::Display for SurnameGroup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::All => "all",
			Self::American => "american",
			Self::Asian => "asian",
			Self::Black => "black",
			Self::Hispanic => "hispanic",
			Self::White => "white",
		})
	}
}

/// Given-name files, relative to the data directory.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GivenNameFiles {
	pub all: PathBuf,
	pub female: PathBuf,
	pub male: PathBuf,
	pub neutral: PathBuf,
}

impl Default for GivenNameFiles {
	fn default() -> Self {
		Self {
			all: PathBuf::from("Given-Names/All.txt"),
			female: PathBuf::from("Given-Names/Female.txt"),
			male: PathBuf::from("Given-Names/Male.txt"),
			neutral: PathBuf::from("Given-Names/Neutral.txt"),
		}
	}
}

/// Surname files, relative to the data directory.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SurnameFiles {
	pub all: PathBuf,
	pub american: PathBuf,
	pub asian: PathBuf,
	pub black: PathBuf,
	pub hispanic: PathBuf,
	pub white: PathBuf,
}

impl Default for SurnameFiles {
	fn default() -> Self {
		Self {
			all: PathBuf::from("Surnames/Surnames_All.csv"),
			american: PathBuf::from("Surnames/Surnames_American.csv"),
			asian: PathBuf::from("Surnames/Surnames_Asian.csv"),
			black: PathBuf::from("Surnames/Surnames_Black.csv"),
			hispanic: PathBuf::from("Surnames/Surnames_Hispanic.csv"),
			white: PathBuf::from("Surnames/Surnames_White.csv"),
		}
	}
}

/// Where the datasets live on disk.
///
/// Every field is optional in the TOML form, missing ones keep their default:
///
/// ```toml
/// data_dir = "/usr/share/names"
///
/// [surnames]
/// all = "surnames.csv"
/// ```
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetLayout {
	pub data_dir: PathBuf,
	pub given_names: GivenNameFiles,
	pub surnames: SurnameFiles,
}

impl Default for DatasetLayout {
	fn default() -> Self {
		Self {
			data_dir: PathBuf::from("DATA"),
			given_names: GivenNameFiles::default(),
			surnames: SurnameFiles::default(),
		}
	}
}

impl DatasetLayout {
	/// Parses a layout from TOML text.
	///
	/// # Errors
	/// Returns `Config` on malformed TOML or unknown keys.
	pub fn from_toml_str(text: &str) -> Result<Self> {
		toml::from_str(text).map_err(|e| NameError::Config(e.to_string()))
	}

	/// Reads and parses a TOML layout file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let text = fs::read_to_string(path).map_err(|e| NameError::io(path, e))?;
		Self::from_toml_str(&text)
	}

	/// Replaces the data directory, keeping the relative file names.
	pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
		self.data_dir = data_dir.into();
		self
	}

	pub fn given_names_path(&self, gender: Gender) -> PathBuf {
		let files = &self.given_names;
		let file = match gender {
			Gender::All => &files.all,
			Gender::Female => &files.female,
			Gender::Male => &files.male,
			Gender::Neutral => &files.neutral,
		};
		self.data_dir.join(file)
	}

	pub fn surnames_path(&self, group: SurnameGroup) -> PathBuf {
		let files = &self.surnames;
		let file = match group {
			SurnameGroup::All => &files.all,
			SurnameGroup::American => &files.american,
			SurnameGroup::Asian => &files.asian,
			SurnameGroup::Black => &files.black,
			SurnameGroup::Hispanic => &files.hispanic,
			SurnameGroup::White => &files.white,
		};
		self.data_dir.join(file)
	}
}
