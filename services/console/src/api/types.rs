//! HTTP API request/response types.
//!
//! # Purpose
//! Defines the payload shapes of the console REST API and its OpenAPI
//! schemas. Entity view models come from `mrosc_status`; this module only
//! wraps them into responses.
use mrosc_status::StatusBreakdown;
use mrosc_status::audit::{AuditStats, AuditView};
use mrosc_status::entities::{
    AccountabilityStats, AccountabilityView, AmendmentStats, AmendmentView, CallStats, CallView,
    PartnershipStats, PartnershipView, ProposalStats, ProposalView,
};
use mrosc_status::osc::{CndStatus, OscView};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SystemInfo {
    pub instance_id: String,
    pub api_version: String,
    pub store_backend: String,
    /// `builtin` or `file`.
    pub permissions_source: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
    /// Where the client should send the user back to, for access denials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessRoutesResponse {
    pub role: String,
    pub role_label: String,
    /// True for the wildcard role; `routes` is then `["all"]`.
    pub wildcard: bool,
    #[schema(value_type = Vec<String>)]
    pub routes: mrosc_authz::AccessibleRoutes,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AccessCheckQuery {
    /// Route path (`/oscs`) or capability token (`RELEASE_TRANCHE`).
    pub key: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccessCheckResponse {
    pub key: String,
    pub allowed: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NavigationEntry {
    pub path: String,
    pub label: String,
    pub visible: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NavigationResponse {
    pub items: Vec<NavigationEntry>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// Which home screen the caller gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DashboardVariant {
    /// OSC staff: their own institution, without the audit trail or the
    /// SICOM export.
    Institution,
    Management,
}

impl DashboardVariant {
    pub fn for_osc(is_osc: bool) -> Self {
        if is_osc {
            DashboardVariant::Institution
        } else {
            DashboardVariant::Management
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DashboardVariant::Institution => "Painel da Instituição",
            DashboardVariant::Management => "Gestão Estratégica MROSC",
        }
    }

    pub fn shows_audit_trail(self) -> bool {
        self == DashboardVariant::Management
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub variant: DashboardVariant,
    pub title: String,
    /// Audit trail card and SICOM export.
    pub show_audit_trail: bool,
    pub active_partnerships: u64,
    pub total_value: f64,
    pub calls_count: u64,
    pub alerts_count: u64,
    pub status_breakdown: StatusBreakdown,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AmendmentsResponse {
    pub items: Vec<AmendmentView>,
    pub stats: AmendmentStats,
    /// Capabilities of the caller relevant to this screen.
    pub actions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CallsResponse {
    pub items: Vec<CallView>,
    pub stats: CallStats,
    pub actions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PartnershipsResponse {
    pub items: Vec<PartnershipView>,
    pub stats: PartnershipStats,
    pub actions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProposalsResponse {
    pub items: Vec<ProposalView>,
    pub stats: ProposalStats,
    pub actions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountabilityResponse {
    pub items: Vec<AccountabilityView>,
    pub stats: AccountabilityStats,
    pub actions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OscsResponse {
    pub items: Vec<OscView>,
    pub alerts_count: u64,
    pub cnd_status: CndStatus,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuditLogsResponse {
    pub items: Vec<AuditView>,
    pub stats: AuditStats,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct UserView {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub role_label: String,
    pub department: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub items: Vec<UserView>,
}
