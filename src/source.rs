use thiserror::Error;

/// One pathway diagram row from the data source.
#[derive(Clone, Debug)]
pub struct DiagramRecord {
    pub db_id: i64,
    /// Display name, used only to make diagnostics readable.
    pub display_name: Option<String>,
    /// Serialized layout XML; `None` when the stored value is absent.
    pub layout_xml: Option<String>,
    /// Represented pathway db ids in rank order; only the first is used.
    pub represented_pathways: Vec<i64>,
}

impl DiagramRecord {
    /// Label for log messages, preferring the display name when present.
    pub fn label(&self) -> String {
        match &self.display_name {
            Some(name) => format!("[{}] {}", self.db_id, name),
            None => self.db_id.to_string(),
        }
    }
}

/// Display name and schema class of one database instance.
#[derive(Clone, Debug)]
pub struct InstanceInfo {
    pub display_name: String,
    pub schema_class: String,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("database error: {0}")]
    Database(#[from] mysql::Error),
    #[error("{0}")]
    Unavailable(String),
}

/// Narrow data-access contract the indexing core depends on. Implemented by
/// the MySQL layer in production and by in-memory mocks in tests.
pub trait DiagramSource {
    /// Fetch every pathway diagram record, fully materialized.
    fn fetch_pathway_diagrams(&mut self) -> Result<Vec<DiagramRecord>, SourceError>;

    /// Look up display name and schema class for one instance, if it exists.
    fn fetch_instance(&mut self, db_id: i64) -> Result<Option<InstanceInfo>, SourceError>;
}
