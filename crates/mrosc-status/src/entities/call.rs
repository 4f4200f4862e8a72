use crate::normalizer::EntityDescriptor;
use crate::{EntityKind, StatusStage, StatusTable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub id: String,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub open_date: Option<String>,
    #[serde(default)]
    pub close_date: Option<String>,
    /// Number of partnership proposals attached to the call.
    #[serde(default)]
    pub proposals_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CallView {
    pub id: String,
    pub edital_number: Option<String>,
    pub object: Option<String>,
    pub status: String,
    pub stage: StatusStage,
    pub publish_date: Option<String>,
    pub deadline_date: Option<String>,
    pub category: String,
    pub proposals_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CallStats {
    pub total_count: u64,
    pub open_count: u64,
    pub judging_count: u64,
    pub homologated_count: u64,
    pub total_proposals: u64,
}

/// Public calls for proposals (chamamentos).
pub struct CallsForProposals;

impl EntityDescriptor for CallsForProposals {
    const KIND: EntityKind = EntityKind::CallForProposals;

    type Record = CallRecord;
    type View = CallView;
    type Stats = CallStats;

    fn to_view(record: &CallRecord, table: &StatusTable) -> CallView {
        let raw = record.status.as_deref().unwrap_or("");
        CallView {
            id: record.id.clone(),
            edital_number: record.number.clone(),
            object: record.title.clone(),
            status: table.translate(raw).to_string(),
            stage: Self::KIND.stage(raw),
            publish_date: record.open_date.clone(),
            deadline_date: record.close_date.clone(),
            category: "Geral".to_string(),
            proposals_count: record.proposals_count.unwrap_or(0),
        }
    }

    /// Counters key on the stored code, so a relabelled table leaves them
    /// intact. `closed` shares the review stage with `judging` but is not
    /// counted as judging.
    fn accumulate(stats: &mut CallStats, record: &CallRecord, view: &CallView) {
        stats.total_count = stats.total_count.saturating_add(1);
        stats.total_proposals = stats.total_proposals.saturating_add(view.proposals_count);
        let counter = match record.status.as_deref() {
            Some("open") => &mut stats.open_count,
            Some("judging") => &mut stats.judging_count,
            Some("finished") => &mut stats.homologated_count,
            _ => return,
        };
        *counter = counter.saturating_add(1);
    }
}
