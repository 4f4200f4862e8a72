//! Status code to display label tables.
//!
//! # Purpose
//! Per-entity lookup tables turning backend status codes into labels.
//!
//! # Key invariants
//! - Translation is total: unknown codes (including `""`) come back unchanged.
//! - Tables are immutable after construction.
use crate::EntityKind;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTable {
    labels: BTreeMap<String, String>,
}

impl StatusTable {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            labels: pairs
                .iter()
                .map(|(code, label)| (code.to_string(), label.to_string()))
                .collect(),
        }
    }

    /// Label for `raw`, or `raw` itself when the table has no entry.
    pub fn translate<'a>(&'a self, raw: &'a str) -> &'a str {
        self.labels.get(raw).map(String::as_str).unwrap_or(raw)
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.labels.contains_key(raw)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One table per entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTables {
    tables: BTreeMap<EntityKind, StatusTable>,
}

impl StatusTables {
    pub fn builtin() -> Self {
        Self {
            tables: EntityKind::ALL
                .into_iter()
                .map(|kind| (kind, StatusTable::from_pairs(kind.default_labels())))
                .collect(),
        }
    }

    /// Replace the table for one kind.
    pub fn with_table(mut self, kind: EntityKind, table: StatusTable) -> Self {
        self.tables.insert(kind, table);
        self
    }

    /// Table for `kind`; an empty table (pure passthrough) if none is set.
    pub fn get(&self, kind: EntityKind) -> &StatusTable {
        static EMPTY: std::sync::OnceLock<StatusTable> = std::sync::OnceLock::new();
        self.tables
            .get(&kind)
            .unwrap_or_else(|| EMPTY.get_or_init(StatusTable::default))
    }
}

impl Default for StatusTables {
    fn default() -> Self {
        Self::builtin()
    }
}
