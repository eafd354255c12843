//! Finds, for each entity db id in an input list, every pathway diagram in
//! which the entity is drawn with its own icon (not an icon of a containing
//! complex or set), and reports the first represented pathway of each such
//! diagram as a tab-delimited table.

pub mod args;
pub mod config;
pub mod db;
pub mod diagram;
pub mod index;
pub mod report;
pub mod source;

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::args::Args;
use crate::config::Config;
use crate::db::MySqlSource;
use crate::index::IconIndex;
use crate::source::DiagramSource;

/// Run the full report: load config, read the input identifier list, build
/// the icon index from every pathway diagram, and write the report to stdout.
pub fn run(args: &Args) -> Result<()> {
    let config = Config::load(&args.config)?;
    let entity_ids = read_input_ids(&config.input_file)?;

    let mut source = MySqlSource::connect(&config).with_context(|| {
        format!("Failed to connect to {} on {}", config.database, config.host)
    })?;
    let records = source
        .fetch_pathway_diagrams()
        .context("Failed to fetch pathway diagram instances")?;
    info!("Fetched {} pathway diagrams", records.len());

    let icon_index = IconIndex::from_records(&records);

    let stdout = io::stdout();
    report::write_report(&mut stdout.lock(), &mut source, &icon_index, &entity_ids)
}

/// Read the newline-delimited entity db ids. An unreadable file or a line
/// that is not a valid integer aborts the run.
pub fn read_input_ids(path: &Path) -> Result<Vec<i64>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Unable to read input file {:?}", path))?;
    content
        .lines()
        .enumerate()
        .map(|(line_no, line)| {
            line.trim().parse::<i64>().with_context(|| {
                format!(
                    "Input file {:?} line {}: {:?} is not a db id",
                    path,
                    line_no + 1,
                    line
                )
            })
        })
        .collect()
}
