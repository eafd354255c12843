use std::collections::{HashMap, HashSet};

use log::{error, warn};

use crate::diagram::parse_layout;
use crate::source::DiagramRecord;

/// Mapping from entity db id to the represented pathways of every diagram in
/// which the entity is drawn with its own icon.
#[derive(Debug, Default, PartialEq)]
pub struct IconIndex {
    pathways_by_entity: HashMap<i64, HashSet<i64>>,
}

impl IconIndex {
    /// Fold the full diagram collection into an index. Diagram processing is
    /// order-independent, and data-quality problems in individual diagrams or
    /// nodes are logged and skipped rather than aborting the run.
    pub fn from_records(records: &[DiagramRecord]) -> Self {
        let mut index = Self::default();
        for record in records {
            index.add_record(record);
        }
        index
    }

    fn add_record(&mut self, record: &DiagramRecord) {
        let xml = match &record.layout_xml {
            Some(xml) => xml,
            None => {
                warn!("Pathway diagram {} has no stored layout", record.label());
                return;
            }
        };

        let nodes = match parse_layout(xml) {
            Ok(nodes) => nodes,
            Err(err) => {
                error!(
                    "Unable to parse XML for pathway diagram {}: {}",
                    record.label(),
                    err
                );
                return;
            }
        };

        for node in nodes.iter().filter(|node| node.is_entity_icon()) {
            let entity_id = match node.entity_id {
                Some(id) => id,
                None => {
                    error!(
                        "{} node in pathway diagram {} has no usable reactomeId",
                        node.kind,
                        record.label()
                    );
                    continue;
                }
            };

            match record.represented_pathways.first() {
                Some(&pathway_id) => {
                    self.pathways_by_entity
                        .entry(entity_id)
                        .or_default()
                        .insert(pathway_id);
                }
                None => {
                    error!(
                        "{} in pathway diagram {} has no represented pathway",
                        entity_id,
                        record.label()
                    );
                }
            }
        }
    }

    /// Pathway set for one entity, if any diagram gave it an icon.
    pub fn pathways_for(&self, entity_id: i64) -> Option<&HashSet<i64>> {
        self.pathways_by_entity.get(&entity_id)
    }
}
