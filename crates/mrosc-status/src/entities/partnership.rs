use crate::amount::saturating_total;
use crate::normalizer::EntityDescriptor;
use crate::{Amount, EntityKind, StatusBreakdown, StatusStage, StatusTable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnershipRecord {
    pub id: String,
    /// Object of the partnership, shown as its title.
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub osc_id: Option<String>,
    #[serde(default)]
    pub osc_name: Option<String>,
    #[serde(default)]
    pub osc_cnpj: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_value: Amount,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Version of the latest work plan, if any was filed.
    #[serde(default)]
    pub work_plan_version: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PartnershipView {
    pub id: String,
    pub title: Option<String>,
    pub osc_id: Option<String>,
    pub osc_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub stage: StatusStage,
    pub total_value: f64,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub work_plan_version: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PartnershipStats {
    pub total_count: u64,
    pub total_value: f64,
    pub status_breakdown: StatusBreakdown,
}

pub struct Partnerships;

pub(crate) const DEFAULT_PARTNERSHIP_TYPE: &str = "Termo de Fomento";

impl EntityDescriptor for Partnerships {
    const KIND: EntityKind = EntityKind::Partnership;

    type Record = PartnershipRecord;
    type View = PartnershipView;
    type Stats = PartnershipStats;

    fn to_view(record: &PartnershipRecord, table: &StatusTable) -> PartnershipView {
        let raw = record.status.as_deref().unwrap_or("");
        PartnershipView {
            id: record.id.clone(),
            title: record.object.clone(),
            osc_id: record.osc_id.clone(),
            osc_name: record.osc_name.clone(),
            kind: DEFAULT_PARTNERSHIP_TYPE.to_string(),
            status: table.translate(raw).to_string(),
            stage: Self::KIND.stage(raw),
            total_value: record.total_value.value(),
            start_date: record.start_date.clone(),
            end_date: record.end_date.clone(),
            work_plan_version: record.work_plan_version.unwrap_or(1),
        }
    }

    fn accumulate(stats: &mut PartnershipStats, _record: &PartnershipRecord, view: &PartnershipView) {
        stats.total_count = stats.total_count.saturating_add(1);
        stats.total_value = saturating_total(stats.total_value, view.total_value);
        stats.status_breakdown.record(&view.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_uses_object_as_title_and_first_work_plan() {
        let record: PartnershipRecord = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "object": "Oficinas de música",
            "status": "analysis",
            "total_value": 90000
        }))
        .expect("record");
        let view = Partnerships::to_view(
            &record,
            &StatusTable::from_pairs(EntityKind::Partnership.default_labels()),
        );
        assert_eq!(view.title.as_deref(), Some("Oficinas de música"));
        assert_eq!(view.status, "Em Análise");
        assert_eq!(view.stage, StatusStage::UnderReview);
        assert_eq!(view.kind, "Termo de Fomento");
        assert_eq!(view.work_plan_version, 1);
        assert_eq!(view.total_value, 90000.0);
    }
}
