use std::io::Write;

use anyhow::{Context, Result};
use log::{error, warn};

use crate::index::IconIndex;
use crate::source::DiagramSource;

/// Placeholder for missing names, classes, and pathway lists.
pub const ABSENT: &str = "N/A";

const HEADER: [&str; 4] = [
    "Entity DB ID",
    "Entity Name",
    "Entity Class",
    "Represented Pathway IDs",
];

/// Pipe-delimited pathway list for one entity, or "N/A" when no diagram gives
/// the entity its own icon. Iteration order over the set is unspecified.
pub fn format_pathways(index: &IconIndex, entity_id: i64) -> String {
    match index.pathways_for(entity_id) {
        Some(pathways) if !pathways.is_empty() => pathways
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("|"),
        _ => ABSENT.to_string(),
    }
}

/// Write the tab-delimited report: a fixed header row, then one row per input
/// identifier in input order. A failed instance lookup never fails the row.
pub fn write_report<W, S>(
    out: &mut W,
    source: &mut S,
    index: &IconIndex,
    entity_ids: &[i64],
) -> Result<()>
where
    W: Write,
    S: DiagramSource,
{
    writeln!(out, "{}", HEADER.join("\t")).context("Failed to write report header")?;

    for &entity_id in entity_ids {
        let (name, class) = match source.fetch_instance(entity_id) {
            Ok(Some(info)) => (info.display_name, info.schema_class),
            Ok(None) => {
                warn!("DB ID {} has no instance in the data source", entity_id);
                (ABSENT.to_string(), ABSENT.to_string())
            }
            Err(err) => {
                error!("Unable to look up DB ID {}: {}", entity_id, err);
                (ABSENT.to_string(), ABSENT.to_string())
            }
        };

        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            entity_id,
            name,
            class,
            format_pathways(index, entity_id)
        )
        .context("Failed to write report row")?;
    }
    Ok(())
}
