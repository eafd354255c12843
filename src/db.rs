use std::collections::HashMap;

use log::warn;
use mysql::prelude::Queryable;
use mysql::{OptsBuilder, Pool, PooledConn};

use crate::config::Config;
use crate::report::ABSENT;
use crate::source::{DiagramRecord, DiagramSource, InstanceInfo, SourceError};

/// MySQL-backed diagram source against a Reactome-style relational schema.
pub struct MySqlSource {
    conn: PooledConn,
}

impl MySqlSource {
    /// Connect with the settings from the configuration file.
    pub fn connect(config: &Config) -> Result<Self, SourceError> {
        let opts = OptsBuilder::new()
            .ip_or_hostname(Some(config.host.as_str()))
            .tcp_port(config.port)
            .user(Some(config.user.as_str()))
            .pass(Some(config.password.as_str()))
            .db_name(Some(config.database.as_str()));
        let pool = Pool::new(opts)?;
        let conn = pool.get_conn()?;
        Ok(Self { conn })
    }
}

impl DiagramSource for MySqlSource {
    fn fetch_pathway_diagrams(&mut self) -> Result<Vec<DiagramRecord>, SourceError> {
        // representedPathway is multi-valued; rank order makes "first" well
        // defined.
        let rows: Vec<(i64, i64)> = self.conn.query(
            "SELECT DB_ID, representedPathway \
             FROM PathwayDiagram_2_representedPathway \
             ORDER BY DB_ID, representedPathway_rank",
        )?;
        let mut pathways: HashMap<i64, Vec<i64>> = HashMap::new();
        for (db_id, pathway_id) in rows {
            pathways.entry(db_id).or_default().push(pathway_id);
        }

        let rows: Vec<(i64, Option<String>, Option<String>)> = self.conn.query(
            "SELECT pd.DB_ID, obj._displayName, pd.storedATXML \
             FROM PathwayDiagram pd \
             LEFT JOIN DatabaseObject obj ON obj.DB_ID = pd.DB_ID",
        )?;
        let records = rows
            .into_iter()
            .map(|(db_id, display_name, layout_xml)| {
                if layout_xml.is_none() {
                    warn!("Unable to get pathway diagram XML for {}", db_id);
                }
                DiagramRecord {
                    db_id,
                    display_name,
                    layout_xml,
                    represented_pathways: pathways.remove(&db_id).unwrap_or_default(),
                }
            })
            .collect();
        Ok(records)
    }

    fn fetch_instance(&mut self, db_id: i64) -> Result<Option<InstanceInfo>, SourceError> {
        let row: Option<(Option<String>, String)> = self.conn.exec_first(
            "SELECT _displayName, _class FROM DatabaseObject WHERE DB_ID = ?",
            (db_id,),
        )?;
        Ok(row.map(|(display_name, schema_class)| InstanceInfo {
            display_name: display_name.unwrap_or_else(|| ABSENT.to_string()),
            schema_class,
        }))
    }
}
