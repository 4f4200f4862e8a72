//! Home dashboard summary and the public transparency listing.
use crate::entities::{DEFAULT_PARTNERSHIP_TYPE, PartnershipRecord, Partnerships};
use crate::osc::{OscRecord, compliance_alerts};
use crate::{EntityKind, Normalizer, StatusBreakdown};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummary {
    pub active_partnerships: u64,
    pub total_value: f64,
    pub calls_count: u64,
    /// OSCs with an expired certificate.
    pub alerts_count: u64,
    pub status_breakdown: StatusBreakdown,
}

/// Headline numbers for the home screen.
///
/// Every partnership visible to the caller counts as active here, matching
/// the figures shown on the landing cards.
pub fn dashboard_summary(
    normalizer: &Normalizer,
    partnerships: &[PartnershipRecord],
    calls_count: u64,
    oscs: &[OscRecord],
) -> DashboardSummary {
    let stats = normalizer.compute_aggregates::<Partnerships>(partnerships);
    DashboardSummary {
        active_partnerships: stats.total_count,
        total_value: stats.total_value,
        calls_count,
        alerts_count: compliance_alerts(oscs),
        status_breakdown: stats.status_breakdown,
    }
}

pub const UNIDENTIFIED_OSC: &str = "OSC Não Identificada";
pub const MISSING_CNPJ: &str = "---";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransparencyEntry {
    pub id: String,
    pub osc_name: String,
    pub cnpj: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub object: String,
    pub total_value: f64,
    pub status: String,
}

impl TransparencyEntry {
    fn from_record(record: &PartnershipRecord, normalizer: &Normalizer) -> Self {
        TransparencyEntry {
            id: record.id.clone(),
            osc_name: record
                .osc_name
                .clone()
                .unwrap_or_else(|| UNIDENTIFIED_OSC.to_string()),
            cnpj: record
                .osc_cnpj
                .clone()
                .unwrap_or_else(|| MISSING_CNPJ.to_string()),
            kind: DEFAULT_PARTNERSHIP_TYPE.to_string(),
            object: record.object.clone().unwrap_or_default(),
            total_value: record.total_value.value(),
            status: normalizer
                .translate_status(
                    EntityKind::Partnership,
                    record.status.as_deref().unwrap_or(""),
                )
                .to_string(),
        }
    }

    /// OSC name and object match case-insensitively; CNPJ matches verbatim.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.osc_name.to_lowercase().contains(&needle)
            || self.object.to_lowercase().contains(&needle)
            || self.cnpj.contains(term)
    }
}

/// Public partnership listing, optionally filtered by a search term.
pub fn transparency_listing(
    normalizer: &Normalizer,
    partnerships: &[PartnershipRecord],
    search: Option<&str>,
) -> Vec<TransparencyEntry> {
    partnerships
        .iter()
        .map(|record| TransparencyEntry::from_record(record, normalizer))
        .filter(|entry| search.is_none_or(|term| entry.matches(term)))
        .collect()
}
