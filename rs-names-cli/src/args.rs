use std::path::PathBuf;

use clap::Parser;

use rs_names_core::config::{Gender, SurnameGroup};
use rs_names_core::{Rarity, Result};

/// Command-line interface of the name generator.
#[derive(Parser, Debug)]
#[command(name = "rs-names")]
#[command(about = "Generate random full names from frequency-weighted datasets")]
#[command(version)]
pub struct Cli {
    /// Dataset keywords (female, male, neutral, american, asian, black, hispanic, white)
    /// and rarity values: the first applies to given names, the second to surnames
    #[arg(value_name = "TOKEN", allow_negative_numbers = true)]
    pub tokens: Vec<String>,

    /// Number of names to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Treat numbers as bias exponents instead of 0-100 rarity values
    #[arg(long)]
    pub raw_bias: bool,

    /// Directory containing the datasets
    #[arg(long, env = "RS_NAMES_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// TOML file describing the dataset layout
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the names to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep a binary copy of parsed datasets next to the text files
    #[arg(long)]
    pub cache: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Dataset selection keyword.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Keyword {
    Gender(Gender),
    Surname(SurnameGroup),
}

/// Classification of a positional token.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Keyword(Keyword),
    Unknown(String),
}

/// Classifies a positional token. Every input maps to exactly one variant.
///
/// Non-finite numbers (`inf`, `NaN`) are not accepted as numbers.
pub fn classify_token(token: &str) -> Token {
    if let Ok(value) = token.parse::<f64>() {
        if value.is_finite() {
            return Token::Number(value);
        }
    }
    if let Some(gender) = Gender::from_keyword(token) {
        return Token::Keyword(Keyword::Gender(gender));
    }
    if let Some(group) = SurnameGroup::from_keyword(token) {
        return Token::Keyword(Keyword::Surname(group));
    }
    Token::Unknown(token.to_owned())
}

/// Datasets and weighting requested by the positional tokens.
#[derive(Debug, Default, PartialEq)]
pub struct Selection {
    pub gender: Gender,
    pub surname_group: SurnameGroup,
    /// Rarity (or raw bias) for given names.
    pub given_value: Option<f64>,
    /// Rarity (or raw bias) for surnames.
    pub surname_value: Option<f64>,
    pub unknown: Vec<String>,
}

impl Selection {
    /// Builds a selection from positional tokens.
    ///
    /// - The last keyword of each kind wins
    /// - The first number applies to given names, the second to surnames;
    ///   a single number applies to both, further numbers are ignored
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut selection = Self::default();
        let mut numbers = Vec::new();

        for token in tokens {
            match classify_token(token.as_ref()) {
                Token::Number(value) => numbers.push(value),
                Token::Keyword(Keyword::Gender(gender)) => selection.gender = gender,
                Token::Keyword(Keyword::Surname(group)) => selection.surname_group = group,
                Token::Unknown(token) => selection.unknown.push(token),
            }
        }

        selection.given_value = numbers.first().copied();
        selection.surname_value = numbers.get(1).copied().or(selection.given_value);
        selection
    }

    pub fn given_bias(&self, raw: bool) -> Result<f64> {
        resolve_bias(self.given_value, raw)
    }

    pub fn surname_bias(&self, raw: bool) -> Result<f64> {
        resolve_bias(self.surname_value, raw)
    }
}

/// Turns a user value into a bias exponent.
///
/// Without a value sampling follows the raw frequencies.
fn resolve_bias(value: Option<f64>, raw: bool) -> Result<f64> {
    match value {
        None => Ok(Rarity::default().bias()),
        Some(bias) if raw => Ok(bias),
        Some(rarity) => Ok(Rarity::new(rarity)?.bias()),
    }
}
