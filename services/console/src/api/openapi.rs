//! OpenAPI schema aggregation for the console API.
use crate::api::types::{
    AccessCheckResponse, AccessRoutesResponse, AccountabilityResponse, AmendmentsResponse,
    AuditLogsResponse, CallsResponse, DashboardResponse, DashboardVariant, ErrorResponse,
    HealthStatus, NavigationEntry, NavigationResponse, OscsResponse, PartnershipsResponse,
    ProposalsResponse, SystemInfo, UserView, UsersResponse,
};
use crate::api::{access, system, users, views};
use mrosc_status::audit::{AuditStats, AuditView};
use mrosc_status::dashboard::TransparencyEntry;
use mrosc_status::entities::{
    AccountabilityStats, AccountabilityView, AmendmentStats, AmendmentView, CallStats, CallView,
    PartnershipStats, PartnershipView, ProposalStats, ProposalView,
};
use mrosc_status::osc::{CndStatus, OscStatus, OscView};
use mrosc_status::{Indication, StatusBreakdown, StatusCount, StatusStage};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "mrosc-console",
        version = "v1",
        description = "MROSC partnership console HTTP API"
    ),
    paths(
        system::system_info,
        system::system_health,
        access::accessible_routes,
        access::check_key,
        access::check_action,
        access::navigation,
        views::dashboard,
        views::amendments,
        views::calls,
        views::partnerships,
        views::proposals,
        views::accountability,
        views::oscs,
        views::audit_logs,
        views::transparency,
        users::list_users
    ),
    components(schemas(
        SystemInfo,
        HealthStatus,
        ErrorResponse,
        AccessRoutesResponse,
        AccessCheckResponse,
        NavigationEntry,
        NavigationResponse,
        DashboardResponse,
        DashboardVariant,
        AmendmentsResponse,
        CallsResponse,
        PartnershipsResponse,
        ProposalsResponse,
        AccountabilityResponse,
        OscsResponse,
        AuditLogsResponse,
        UserView,
        UsersResponse,
        StatusBreakdown,
        StatusCount,
        Indication,
        StatusStage,
        AmendmentView,
        AmendmentStats,
        CallView,
        CallStats,
        PartnershipView,
        PartnershipStats,
        ProposalView,
        ProposalStats,
        AccountabilityView,
        AccountabilityStats,
        OscView,
        OscStatus,
        CndStatus,
        AuditView,
        AuditStats,
        TransparencyEntry
    )),
    tags(
        (name = "system", description = "Service metadata and health"),
        (name = "access", description = "Role-based access introspection"),
        (name = "views", description = "Normalized screen view models"),
        (name = "users", description = "User directory")
    )
)]
pub struct ApiDoc;
