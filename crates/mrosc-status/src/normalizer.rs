//! Generic status normalization and aggregation.
//!
//! # Purpose
//! Turns raw persisted records into display view models and summary
//! statistics, one [`EntityDescriptor`] per entity kind.
//!
//! # Key invariants
//! - Pure and linear: input slices are only borrowed, never mutated.
//! - No data-shape anomaly produces an error; unknown statuses pass through
//!   and unusable monetary values count as zero.
//! - Empty input yields `Default` statistics.
use crate::{EntityKind, StatusTable, StatusTables};
use serde::Serialize;

/// Per-entity mapping from raw records to view models and statistics.
pub trait EntityDescriptor {
    const KIND: EntityKind;

    type Record;
    type View;
    type Stats: Default;

    fn to_view(record: &Self::Record, table: &StatusTable) -> Self::View;

    /// Fold one record (and its already-built view) into `stats`.
    fn accumulate(stats: &mut Self::Stats, record: &Self::Record, view: &Self::View);

    /// Derive fields that depend on the whole set.
    fn finish(_stats: &mut Self::Stats) {}
}

/// View models together with their aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct Summary<V, S> {
    pub items: Vec<V>,
    pub stats: S,
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    tables: StatusTables,
}

impl Normalizer {
    pub fn new(tables: StatusTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &StatusTables {
        &self.tables
    }

    pub fn translate_status<'a>(&'a self, kind: EntityKind, raw: &'a str) -> &'a str {
        self.tables.get(kind).translate(raw)
    }

    pub fn normalize<D: EntityDescriptor>(&self, records: &[D::Record]) -> Vec<D::View> {
        let table = self.tables.get(D::KIND);
        records.iter().map(|record| D::to_view(record, table)).collect()
    }

    pub fn compute_aggregates<D: EntityDescriptor>(&self, records: &[D::Record]) -> D::Stats {
        self.summarize::<D>(records).stats
    }

    /// Views and stats in a single pass.
    pub fn summarize<D: EntityDescriptor>(
        &self,
        records: &[D::Record],
    ) -> Summary<D::View, D::Stats> {
        let table = self.tables.get(D::KIND);
        let mut stats = D::Stats::default();
        let mut items = Vec::with_capacity(records.len());
        for record in records {
            let view = D::to_view(record, table);
            D::accumulate(&mut stats, record, &view);
            items.push(view);
        }
        D::finish(&mut stats);
        Summary { items, stats }
    }
}
