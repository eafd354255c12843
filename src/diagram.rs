use roxmltree::Document;
use thiserror::Error;

/// Kind name given to text-only XML nodes, mirroring the DOM convention.
pub const TEXT_NODE_KIND: &str = "#text";
/// Kind name of diagram note nodes, which never represent an entity.
pub const NOTE_NODE_KIND: &str = "org.gk.render.Note";

const NODES_CONTAINER: &str = "Nodes";
const ENTITY_ID_ATTR: &str = "reactomeId";

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("malformed layout XML: {0}")]
    Malformed(#[from] roxmltree::Error),
    #[error("layout has no Nodes element")]
    MissingNodes,
}

/// One classified child of a diagram's Nodes container.
#[derive(Clone, Debug)]
pub struct LayoutNode {
    /// Raw node kind, e.g. `org.gk.render.RenderableProtein`.
    pub kind: String,
    /// Value of the node's `reactomeId` attribute, where present and numeric.
    pub entity_id: Option<i64>,
}

impl LayoutNode {
    /// Text and note nodes are decoration; every other kind is a candidate
    /// entity icon.
    pub fn is_entity_icon(&self) -> bool {
        self.kind != TEXT_NODE_KIND && self.kind != NOTE_NODE_KIND
    }
}

/// Parse one diagram's serialized layout and return the children of its
/// Nodes container in document order.
pub fn parse_layout(xml: &str) -> Result<Vec<LayoutNode>, LayoutError> {
    let doc = Document::parse(xml)?;
    let container = doc
        .descendants()
        .find(|node| node.has_tag_name(NODES_CONTAINER))
        .ok_or(LayoutError::MissingNodes)?;

    let mut nodes = Vec::new();
    for child in container.children() {
        // Comments and processing instructions can never carry an icon.
        let kind = if child.is_text() {
            TEXT_NODE_KIND.to_string()
        } else if child.is_element() {
            child.tag_name().name().to_string()
        } else {
            continue;
        };
        let entity_id = child
            .attribute(ENTITY_ID_ATTR)
            .and_then(|value| value.parse::<i64>().ok());
        nodes.push(LayoutNode { kind, entity_id });
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = r#"
        <Process reactomeDiagramId="1">
          <Properties/>
          <Nodes>
            <org.gk.render.RenderableProtein reactomeId="100" />
            <org.gk.render.Note reactomeId="999" />
            <org.gk.render.RenderableComplex reactomeId="200" />
          </Nodes>
          <Edges/>
        </Process>"#;

    #[test]
    fn entity_nodes_are_returned_in_document_order() {
        let nodes = parse_layout(LAYOUT).unwrap();
        let ids: Vec<i64> = nodes
            .iter()
            .filter(|node| node.is_entity_icon())
            .filter_map(|node| node.entity_id)
            .collect();
        assert_eq!(ids, vec![100, 200]);
    }

    #[test]
    fn text_and_note_nodes_are_excluded() {
        let nodes = parse_layout(LAYOUT).unwrap();
        let note = nodes
            .iter()
            .find(|node| node.kind == NOTE_NODE_KIND)
            .unwrap();
        assert!(!note.is_entity_icon());
        // Whitespace between elements shows up as text nodes.
        assert!(nodes.iter().any(|node| node.kind == TEXT_NODE_KIND));
        assert!(nodes
            .iter()
            .filter(|node| node.kind == TEXT_NODE_KIND)
            .all(|node| !node.is_entity_icon()));
    }

    #[test]
    fn missing_reactome_id_yields_no_entity_id() {
        let nodes =
            parse_layout("<Nodes><org.gk.render.RenderableGene/></Nodes>").unwrap();
        let gene = &nodes[0];
        assert!(gene.is_entity_icon());
        assert_eq!(gene.entity_id, None);
    }

    #[test]
    fn non_numeric_reactome_id_yields_no_entity_id() {
        let nodes = parse_layout(
            r#"<Nodes><org.gk.render.RenderableGene reactomeId="abc"/></Nodes>"#,
        )
        .unwrap();
        assert_eq!(nodes[0].entity_id, None);
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        assert!(matches!(
            parse_layout("<Nodes><unclosed></Nodes>"),
            Err(LayoutError::Malformed(_))
        ));
        assert!(parse_layout("").is_err());
    }

    #[test]
    fn missing_nodes_container_is_an_error() {
        assert!(matches!(
            parse_layout("<Process><Edges/></Process>"),
            Err(LayoutError::MissingNodes)
        ));
    }
}
