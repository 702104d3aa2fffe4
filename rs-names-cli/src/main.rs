use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_names_core::config::DatasetLayout;
use rs_names_core::{WeightedDataset, io, sample_many};

mod args;
mod output;

use crate::args::{Cli, Selection};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    run(&cli)
}

/// Loads the requested datasets, draws the names and writes them out.
fn run(cli: &Cli) -> Result<()> {
    let selection = Selection::from_tokens(&cli.tokens);
    for token in &selection.unknown {
        warn!("ignoring unrecognised argument {token:?}");
    }

    let mut layout = match &cli.config {
        Some(path) => DatasetLayout::from_file(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => DatasetLayout::default(),
    };
    if let Some(data_dir) = &cli.data_dir {
        layout = layout.with_data_dir(data_dir);
    }

    let given_bias = selection.given_bias(cli.raw_bias)?;
    let surname_bias = selection.surname_bias(cli.raw_bias)?;
    debug!(
        "given names: {} (bias {given_bias}), surnames: {} (bias {surname_bias})",
        selection.gender, selection.surname_group
    );

    let given = load(&layout.given_names_path(selection.gender), given_bias, cli.cache)?;
    let surnames = load(&layout.surnames_path(selection.surname_group), surname_bias, cli.cache)?;

    let names = match cli.seed {
        Some(seed) => sample_many(&given, &surnames, &mut StdRng::seed_from_u64(seed), cli.count)?,
        None => sample_many(&given, &surnames, &mut rand::rng(), cli.count)?,
    };

    let names: Vec<String> = names.iter().map(|name| output::title_case(name)).collect();
    output::write_output(&output::format_names(&names), cli.output.as_deref()).with_context(|| {
        match &cli.output {
            Some(path) => format!("writing {}", path.display()),
            None => "writing names to stdout".to_owned(),
        }
    })?;
    Ok(())
}

fn load(path: &Path, bias: f64, cache: bool) -> Result<WeightedDataset> {
    let dataset = if cache {
        io::load_dataset_cached(path, bias)
    } else {
        io::load_dataset_file(path, bias)
    };
    dataset.with_context(|| format!("loading dataset {}", path.display()))
}
