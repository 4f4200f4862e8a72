use crate::amount::saturating_total;
use crate::normalizer::EntityDescriptor;
use crate::{Amount, EntityKind, Indication, StatusStage, StatusTable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display labels that migrated rows carry in place of the `paid` code.
const LEGACY_EXECUTED_LABELS: [&str; 2] = ["Executada", "Paga"];

fn is_executed(raw: &str) -> bool {
    EntityKind::Amendment.stage(raw) == StatusStage::Completed
        || LEGACY_EXECUTED_LABELS.contains(&raw)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmendmentRecord {
    pub id: String,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub value: Amount,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub osc_id: Option<String>,
    #[serde(default)]
    pub osc_name: Option<String>,
    /// Stored by older writers; the view derives indication from `osc_id`.
    #[serde(default)]
    pub indication_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AmendmentView {
    pub id: String,
    pub number: String,
    pub author: Option<String>,
    pub value: f64,
    pub year: Option<i32>,
    /// `31/12/<year>` when the year is known.
    pub legal_deadline: Option<String>,
    pub indication: Indication,
    pub status: String,
    pub stage: StatusStage,
    pub beneficiary_osc: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AmendmentStats {
    pub total_count: u64,
    pub total_value: f64,
    pub indirect_count: u64,
    pub executed_count: u64,
    /// Everything not executed.
    pub pending_count: u64,
}

pub struct Amendments;

impl EntityDescriptor for Amendments {
    const KIND: EntityKind = EntityKind::Amendment;

    type Record = AmendmentRecord;
    type View = AmendmentView;
    type Stats = AmendmentStats;

    fn to_view(record: &AmendmentRecord, table: &StatusTable) -> AmendmentView {
        let raw = record.status.as_deref().unwrap_or("");
        AmendmentView {
            id: record.id.clone(),
            number: record
                .number
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "S/N".to_string()),
            author: record.author_name.clone(),
            value: record.value.value(),
            year: record.year,
            legal_deadline: record.year.map(|year| format!("31/12/{year}")),
            indication: Indication::derive(record.osc_id.as_deref()),
            status: table.translate(raw).to_string(),
            stage: Self::KIND.stage(raw),
            beneficiary_osc: record.osc_name.clone(),
            created_at: record.created_at.clone(),
        }
    }

    fn accumulate(stats: &mut AmendmentStats, record: &AmendmentRecord, view: &AmendmentView) {
        stats.total_count = stats.total_count.saturating_add(1);
        stats.total_value = saturating_total(stats.total_value, view.value);
        if view.indication == Indication::Indirect {
            stats.indirect_count = stats.indirect_count.saturating_add(1);
        }
        if is_executed(record.status.as_deref().unwrap_or("")) {
            stats.executed_count = stats.executed_count.saturating_add(1);
        }
    }

    fn finish(stats: &mut AmendmentStats) {
        stats.pending_count = stats.total_count.saturating_sub(stats.executed_count);
    }
}
