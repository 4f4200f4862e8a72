use crate::amount::saturating_total;
use crate::normalizer::EntityDescriptor;
use crate::{Amount, EntityKind, StatusStage, StatusTable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountabilityRecord {
    pub id: String,
    #[serde(default)]
    pub partnership_id: Option<String>,
    /// `REO` (execution report) or `REFF` (financial report).
    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Amount,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccountabilityView {
    pub id: String,
    pub partnership_id: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub file_url: Option<String>,
    pub status: String,
    pub stage: StatusStage,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccountabilityStats {
    pub total_count: u64,
    pub total_amount: f64,
    pub pending_count: u64,
    pub approved_count: u64,
}

pub struct AccountabilityDocuments;

impl EntityDescriptor for AccountabilityDocuments {
    const KIND: EntityKind = EntityKind::Accountability;

    type Record = AccountabilityRecord;
    type View = AccountabilityView;
    type Stats = AccountabilityStats;

    fn to_view(record: &AccountabilityRecord, table: &StatusTable) -> AccountabilityView {
        let raw = record.status.as_deref().unwrap_or("");
        AccountabilityView {
            id: record.id.clone(),
            partnership_id: record.partnership_id.clone(),
            doc_type: record.doc_type.clone(),
            description: record.description.clone(),
            amount: record.amount.is_present().then(|| record.amount.value()),
            file_url: record.file_url.clone(),
            status: table.translate(raw).to_string(),
            stage: Self::KIND.stage(raw),
            created_at: record.created_at.clone(),
        }
    }

    fn accumulate(
        stats: &mut AccountabilityStats,
        record: &AccountabilityRecord,
        view: &AccountabilityView,
    ) {
        stats.total_count = stats.total_count.saturating_add(1);
        stats.total_amount = saturating_total(stats.total_amount, record.amount.value());
        let counter = match view.stage {
            StatusStage::UnderReview => &mut stats.pending_count,
            StatusStage::Approved => &mut stats.approved_count,
            _ => return,
        };
        *counter = counter.saturating_add(1);
    }
}
