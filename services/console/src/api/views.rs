//! Normalized view-model endpoints, one per console screen.
//!
//! # Purpose and responsibility
//! Each handler checks the caller may open the screen, fetches raw rows from
//! the record store and returns labels, derived fields and aggregates.
//!
//! # Key invariants and assumptions
//! - The access check runs before any store read.
//! - The transparency portal is public and requires no session.
use crate::api::error::{ApiError, api_internal};
use crate::api::types::{
    AccountabilityResponse, AmendmentsResponse, AuditLogsResponse, CallsResponse,
    DashboardResponse, DashboardVariant, ErrorResponse, OscsResponse, PartnershipsResponse, ProposalsResponse,
    SearchQuery,
};
use crate::api::{permitted_actions, require_route};
use crate::app::AppState;
use crate::session::Session;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use mrosc_authz::{Capability, Route};
use mrosc_status::audit::{self, AuditView};
use mrosc_status::dashboard::{TransparencyEntry, dashboard_summary, transparency_listing};
use mrosc_status::entities::{
    AccountabilityDocuments, Amendments, CallsForProposals, Partnerships, Proposals,
};
use mrosc_status::osc::osc_listing;

fn guard(state: &AppState, headers: &HeaderMap, route: Route) -> Result<Session, ApiError> {
    let session = Session::from_headers(headers)?;
    require_route(state, &session, route)?;
    Ok(session)
}

#[utoipa::path(
    get,
    path = "/v1/views/dashboard",
    tag = "views",
    responses(
        (status = 200, description = "Home dashboard figures", body = DashboardResponse),
        (status = 401, description = "Missing role header", body = ErrorResponse)
    )
)]
pub(crate) async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DashboardResponse>, ApiError> {
    let session = guard(&state, &headers, Route::Home)?;
    let partnerships = state
        .store
        .partnerships()
        .await
        .map_err(|err| api_internal("failed to load partnerships", &err))?;
    let calls = state
        .store
        .calls()
        .await
        .map_err(|err| api_internal("failed to load calls", &err))?;
    let oscs = state
        .store
        .oscs()
        .await
        .map_err(|err| api_internal("failed to load oscs", &err))?;
    let summary = dashboard_summary(&state.normalizer, &partnerships, calls.len() as u64, &oscs);
    let variant = DashboardVariant::for_osc(session.is_osc());
    Ok(Json(DashboardResponse {
        variant,
        title: variant.title().to_string(),
        show_audit_trail: variant.shows_audit_trail(),
        active_partnerships: summary.active_partnerships,
        total_value: summary.total_value,
        calls_count: summary.calls_count,
        alerts_count: summary.alerts_count,
        status_breakdown: summary.status_breakdown,
    }))
}

#[utoipa::path(
    get,
    path = "/v1/views/amendments",
    tag = "views",
    responses(
        (status = 200, description = "Parliamentary amendments", body = AmendmentsResponse),
        (status = 401, description = "Missing role header", body = ErrorResponse),
        (status = 403, description = "Access restricted", body = ErrorResponse)
    )
)]
pub(crate) async fn amendments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AmendmentsResponse>, ApiError> {
    let session = guard(&state, &headers, Route::Amendments)?;
    let records = state
        .store
        .amendments()
        .await
        .map_err(|err| api_internal("failed to load amendments", &err))?;
    let summary = state.normalizer.summarize::<Amendments>(&records);
    Ok(Json(AmendmentsResponse {
        items: summary.items,
        stats: summary.stats,
        actions: permitted_actions(&state, &session, &[Capability::ViewAmendments]),
    }))
}

#[utoipa::path(
    get,
    path = "/v1/views/chamamento",
    tag = "views",
    responses(
        (status = 200, description = "Calls for proposals", body = CallsResponse),
        (status = 401, description = "Missing role header", body = ErrorResponse),
        (status = 403, description = "Access restricted", body = ErrorResponse)
    )
)]
pub(crate) async fn calls(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CallsResponse>, ApiError> {
    let session = guard(&state, &headers, Route::Chamamento)?;
    let records = state
        .store
        .calls()
        .await
        .map_err(|err| api_internal("failed to load calls", &err))?;
    let summary = state.normalizer.summarize::<CallsForProposals>(&records);
    Ok(Json(CallsResponse {
        items: summary.items,
        stats: summary.stats,
        actions: permitted_actions(&state, &session, &[Capability::CreateChamamento]),
    }))
}

#[utoipa::path(
    get,
    path = "/v1/views/partnerships",
    tag = "views",
    responses(
        (status = 200, description = "Partnerships", body = PartnershipsResponse),
        (status = 401, description = "Missing role header", body = ErrorResponse),
        (status = 403, description = "Access restricted", body = ErrorResponse)
    )
)]
pub(crate) async fn partnerships(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<PartnershipsResponse>, ApiError> {
    let session = guard(&state, &headers, Route::Partnerships)?;
    let records = state
        .store
        .partnerships()
        .await
        .map_err(|err| api_internal("failed to load partnerships", &err))?;
    let summary = state.normalizer.summarize::<Partnerships>(&records);
    Ok(Json(PartnershipsResponse {
        items: summary.items,
        stats: summary.stats,
        actions: permitted_actions(
            &state,
            &session,
            &[
                Capability::CreatePartnership,
                Capability::ReleaseTranche,
                Capability::EditWorkplan,
            ],
        ),
    }))
}

#[utoipa::path(
    get,
    path = "/v1/views/pmis",
    tag = "views",
    responses(
        (status = 200, description = "PMIS proposals", body = ProposalsResponse),
        (status = 401, description = "Missing role header", body = ErrorResponse),
        (status = 403, description = "Access restricted", body = ErrorResponse)
    )
)]
pub(crate) async fn proposals(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ProposalsResponse>, ApiError> {
    let session = guard(&state, &headers, Route::Pmis)?;
    let records = state
        .store
        .proposals()
        .await
        .map_err(|err| api_internal("failed to load proposals", &err))?;
    let summary = state.normalizer.summarize::<Proposals>(&records);
    Ok(Json(ProposalsResponse {
        items: summary.items,
        stats: summary.stats,
        actions: permitted_actions(&state, &session, &[Capability::SubmitDocuments]),
    }))
}

#[utoipa::path(
    get,
    path = "/v1/views/accountability",
    tag = "views",
    responses(
        (status = 200, description = "Accountability documents", body = AccountabilityResponse),
        (status = 401, description = "Missing role header", body = ErrorResponse),
        (status = 403, description = "Access restricted", body = ErrorResponse)
    )
)]
pub(crate) async fn accountability(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AccountabilityResponse>, ApiError> {
    let session = guard(&state, &headers, Route::Accountability)?;
    let records = state
        .store
        .accountability_documents()
        .await
        .map_err(|err| api_internal("failed to load accountability documents", &err))?;
    let summary = state
        .normalizer
        .summarize::<AccountabilityDocuments>(&records);
    Ok(Json(AccountabilityResponse {
        items: summary.items,
        stats: summary.stats,
        actions: permitted_actions(
            &state,
            &session,
            &[
                Capability::SubmitDocuments,
                Capability::ApproveAccountability,
            ],
        ),
    }))
}

#[utoipa::path(
    get,
    path = "/v1/views/oscs",
    tag = "views",
    responses(
        (status = 200, description = "Registered OSCs and compliance", body = OscsResponse),
        (status = 401, description = "Missing role header", body = ErrorResponse),
        (status = 403, description = "Access restricted", body = ErrorResponse)
    )
)]
pub(crate) async fn oscs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<OscsResponse>, ApiError> {
    guard(&state, &headers, Route::Oscs)?;
    let records = state
        .store
        .oscs()
        .await
        .map_err(|err| api_internal("failed to load oscs", &err))?;
    let listing = osc_listing(&records);
    Ok(Json(OscsResponse {
        items: listing.items,
        alerts_count: listing.alerts_count,
        cnd_status: listing.cnd_status,
    }))
}

#[utoipa::path(
    get,
    path = "/v1/views/logs",
    tag = "views",
    params(SearchQuery),
    responses(
        (status = 200, description = "Audit trail, newest first", body = AuditLogsResponse),
        (status = 401, description = "Missing role header", body = ErrorResponse),
        (status = 403, description = "Access restricted", body = ErrorResponse)
    )
)]
pub(crate) async fn audit_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<Json<AuditLogsResponse>, ApiError> {
    guard(&state, &headers, Route::Logs)?;
    let records = state
        .store
        .audit_logs()
        .await
        .map_err(|err| api_internal("failed to load audit logs", &err))?;
    let views: Vec<AuditView> = records.iter().map(AuditView::from).collect();
    let stats = audit::audit_stats(&views);
    let items = match query.search.as_deref() {
        Some(term) => audit::search(&views, term).into_iter().cloned().collect(),
        None => views,
    };
    Ok(Json(AuditLogsResponse { items, stats }))
}

#[utoipa::path(
    get,
    path = "/v1/views/transparency",
    tag = "views",
    params(SearchQuery),
    responses(
        (status = 200, description = "Public partnership listing", body = [TransparencyEntry])
    )
)]
/// Public portal; no session required.
pub(crate) async fn transparency(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<TransparencyEntry>>, ApiError> {
    let records = state
        .store
        .partnerships()
        .await
        .map_err(|err| api_internal("failed to load partnerships", &err))?;
    Ok(Json(transparency_listing(
        &state.normalizer,
        &records,
        query.search.as_deref(),
    )))
}
