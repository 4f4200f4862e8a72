//! Civil society organization (OSC) compliance.
//!
//! An OSC is in good standing while its debt clearance certificates (CNDs)
//! are current. The backend stores a single `cnd_status` column; only the
//! literal `expired` marks an organization as irregular.
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub const EXPIRED_CND: &str = "expired";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OscRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cnd_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum OscStatus {
    #[serde(rename = "Regular")]
    Regular,
    #[serde(rename = "CND Vencida")]
    ExpiredCnd,
}

impl OscStatus {
    pub fn derive(cnd_status: Option<&str>) -> Self {
        if cnd_status == Some(EXPIRED_CND) {
            OscStatus::ExpiredCnd
        } else {
            OscStatus::Regular
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OscStatus::Regular => "Regular",
            OscStatus::ExpiredCnd => "CND Vencida",
        }
    }
}

impl fmt::Display for OscStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate certificate standing across a set of certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CndStatus {
    Valid,
    Expired,
}

impl CndStatus {
    /// `Valid` iff every certificate is regular. An empty set is valid.
    pub fn overall<I: IntoIterator<Item = OscStatus>>(certificates: I) -> Self {
        if certificates
            .into_iter()
            .all(|status| status == OscStatus::Regular)
        {
            CndStatus::Valid
        } else {
            CndStatus::Expired
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OscView {
    pub id: String,
    pub name: Option<String>,
    pub cnpj: Option<String>,
    pub email: String,
    pub phone: String,
    pub status: OscStatus,
    pub last_update: Option<String>,
}

impl From<&OscRecord> for OscView {
    fn from(record: &OscRecord) -> Self {
        OscView {
            id: record.id.clone(),
            name: record.name.clone(),
            cnpj: record.cnpj.clone(),
            email: record.email.clone().unwrap_or_default(),
            phone: record.phone.clone().unwrap_or_default(),
            status: OscStatus::derive(record.cnd_status.as_deref()),
            last_update: record.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OscListing {
    pub items: Vec<OscView>,
    /// Organizations with an expired certificate.
    pub alerts_count: u64,
    /// `expired` as soon as any listed organization is irregular.
    pub cnd_status: CndStatus,
}

pub fn compliance_alerts(oscs: &[OscRecord]) -> u64 {
    oscs.iter()
        .filter(|osc| osc.cnd_status.as_deref() == Some(EXPIRED_CND))
        .count() as u64
}

pub fn osc_listing(oscs: &[OscRecord]) -> OscListing {
    let items: Vec<OscView> = oscs.iter().map(OscView::from).collect();
    OscListing {
        cnd_status: CndStatus::overall(items.iter().map(|view| view.status)),
        alerts_count: compliance_alerts(oscs),
        items,
    }
}
