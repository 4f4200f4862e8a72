use crate::normalizer::EntityDescriptor;
use crate::{Amount, EntityKind, StatusBreakdown, StatusStage, StatusTable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalRecord {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub estimated_value: Amount,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProposalView {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub stage: StatusStage,
    pub estimated_value: f64,
    pub submitted_at: Option<String>,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProposalStats {
    pub total_count: u64,
    pub draft_count: u64,
    pub status_breakdown: StatusBreakdown,
}

/// PMIS proposals.
pub struct Proposals;

impl EntityDescriptor for Proposals {
    const KIND: EntityKind = EntityKind::Proposal;

    type Record = ProposalRecord;
    type View = ProposalView;
    type Stats = ProposalStats;

    fn to_view(record: &ProposalRecord, table: &StatusTable) -> ProposalView {
        let raw = record.status.as_deref().unwrap_or("");
        ProposalView {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            status: table.translate(raw).to_string(),
            stage: Self::KIND.stage(raw),
            estimated_value: record.estimated_value.value(),
            submitted_at: record.submitted_at.clone(),
            feedback: record.feedback.clone(),
        }
    }

    fn accumulate(stats: &mut ProposalStats, _record: &ProposalRecord, view: &ProposalView) {
        stats.total_count = stats.total_count.saturating_add(1);
        if view.stage == StatusStage::Open {
            stats.draft_count = stats.draft_count.saturating_add(1);
        }
        stats.status_breakdown.record(&view.status);
    }
}
