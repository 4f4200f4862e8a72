//! Access introspection endpoints.
//!
//! # Purpose and responsibility
//! Let the front-end ask what the current caller may see and do, so it can
//! hide sidebar entries and disable buttons. These endpoints never deny;
//! they only report.
use crate::api::error::{ApiError, api_not_found, api_validation_error};
use crate::api::types::{
    AccessCheckQuery, AccessCheckResponse, AccessRoutesResponse, ErrorResponse, NavigationEntry,
    NavigationResponse,
};
use crate::api::{check_capability, check_route};
use crate::app::AppState;
use crate::session::Session;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use mrosc_authz::{AccessKey, Capability, Route};

/// Sidebar entries in display order. `Users` is gated by `MANAGE_USERS`
/// rather than by its route entry.
const SIDEBAR: [Route; 13] = [
    Route::Home,
    Route::Amendments,
    Route::Pmis,
    Route::Chamamento,
    Route::Partnerships,
    Route::Accountability,
    Route::Oscs,
    Route::Reports,
    Route::Legislation,
    Route::Communication,
    Route::Logs,
    Route::Manual,
    Route::Users,
];

#[utoipa::path(
    get,
    path = "/v1/access/routes",
    tag = "access",
    responses(
        (status = 200, description = "Routes the caller may open", body = AccessRoutesResponse),
        (status = 401, description = "Missing role header", body = ErrorResponse)
    )
)]
pub(crate) async fn accessible_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AccessRoutesResponse>, ApiError> {
    let session = Session::from_headers(&headers)?;
    let routes = state.resolver.accessible_routes_for_code(&session.role_code);
    Ok(Json(AccessRoutesResponse {
        role: session.role_code.clone(),
        role_label: session.role_label(),
        wildcard: routes.is_all(),
        routes,
    }))
}

#[utoipa::path(
    get,
    path = "/v1/access/check",
    tag = "access",
    params(AccessCheckQuery),
    responses(
        (status = 200, description = "Whether the caller holds the key", body = AccessCheckResponse),
        (status = 400, description = "Empty key", body = ErrorResponse),
        (status = 401, description = "Missing role header", body = ErrorResponse)
    )
)]
/// Legacy string-key check: `/`-prefixed keys are routes, others capabilities.
/// Keys naming nothing known are reported as not allowed.
pub(crate) async fn check_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AccessCheckQuery>,
) -> Result<Json<AccessCheckResponse>, ApiError> {
    let session = Session::from_headers(&headers)?;
    let key = query.key.trim();
    if key.is_empty() {
        return Err(api_validation_error("key must not be empty"));
    }
    let allowed = match AccessKey::parse(key) {
        Ok(AccessKey::Route(route)) => check_route(&state, &session, route),
        Ok(AccessKey::Capability(capability)) => check_capability(&state, &session, capability),
        Err(err) => {
            tracing::debug!(key, error = %err, "unknown access key");
            false
        }
    };
    Ok(Json(AccessCheckResponse {
        key: key.to_string(),
        allowed,
    }))
}

#[utoipa::path(
    get,
    path = "/v1/access/actions/{capability}",
    tag = "access",
    params(("capability" = String, Path, description = "Capability token, e.g. RELEASE_TRANCHE")),
    responses(
        (status = 200, description = "Whether the caller may perform the action", body = AccessCheckResponse),
        (status = 401, description = "Missing role header", body = ErrorResponse),
        (status = 404, description = "Unknown capability", body = ErrorResponse)
    )
)]
pub(crate) async fn check_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(capability): Path<String>,
) -> Result<Json<AccessCheckResponse>, ApiError> {
    let session = Session::from_headers(&headers)?;
    let parsed: Capability = capability
        .parse()
        .map_err(|()| api_not_found("unknown capability"))?;
    Ok(Json(AccessCheckResponse {
        key: parsed.as_str().to_string(),
        allowed: check_capability(&state, &session, parsed),
    }))
}

#[utoipa::path(
    get,
    path = "/v1/access/navigation",
    tag = "access",
    responses(
        (status = 200, description = "Sidebar entries with visibility", body = NavigationResponse),
        (status = 401, description = "Missing role header", body = ErrorResponse)
    )
)]
pub(crate) async fn navigation(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<NavigationResponse>, ApiError> {
    let session = Session::from_headers(&headers)?;
    let items = SIDEBAR
        .into_iter()
        .map(|route| {
            let visible = match route {
                Route::Home => true,
                Route::Users => state
                    .resolver
                    .has_permission_for_code(&session.role_code, Capability::ManageUsers),
                _ => state
                    .resolver
                    .can_access_for_code(&session.role_code, AccessKey::Route(route)),
            };
            NavigationEntry {
                path: route.path().to_string(),
                label: route.nav_label().to_string(),
                visible,
            }
        })
        .collect();
    Ok(Json(NavigationResponse { items }))
}
