//! Console HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures request tracing, and defines the
//! shared state injected into handlers.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::observability;
use crate::store::RecordStore;
use axum::Router;
use mrosc_authz::AccessResolver;
use mrosc_status::Normalizer;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionsSource {
    Builtin,
    File,
}

impl PermissionsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionsSource::Builtin => "builtin",
            PermissionsSource::File => "file",
        }
    }
}

impl std::fmt::Display for PermissionsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only after startup; handlers share it by cloning the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub instance_id: String,
    pub api_version: String,
    pub permissions_source: PermissionsSource,
    pub resolver: Arc<AccessResolver>,
    pub normalizer: Arc<Normalizer>,
    pub store: Arc<dyn RecordStore>,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            let parent = observability::trace_context_from_headers(request.headers());
            let span = tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            );
            span.set_parent(parent);
            span
        });

    Router::new()
        .route(
            "/v1/system/info",
            axum::routing::get(api::system::system_info),
        )
        .route(
            "/v1/system/health",
            axum::routing::get(api::system::system_health),
        )
        .route(
            "/v1/access/routes",
            axum::routing::get(api::access::accessible_routes),
        )
        .route("/v1/access/check", axum::routing::get(api::access::check_key))
        .route(
            "/v1/access/actions/:capability",
            axum::routing::get(api::access::check_action),
        )
        .route(
            "/v1/access/navigation",
            axum::routing::get(api::access::navigation),
        )
        .route(
            "/v1/views/dashboard",
            axum::routing::get(api::views::dashboard),
        )
        .route(
            "/v1/views/amendments",
            axum::routing::get(api::views::amendments),
        )
        .route("/v1/views/chamamento", axum::routing::get(api::views::calls))
        .route(
            "/v1/views/partnerships",
            axum::routing::get(api::views::partnerships),
        )
        .route("/v1/views/pmis", axum::routing::get(api::views::proposals))
        .route(
            "/v1/views/accountability",
            axum::routing::get(api::views::accountability),
        )
        .route("/v1/views/oscs", axum::routing::get(api::views::oscs))
        .route("/v1/views/logs", axum::routing::get(api::views::audit_logs))
        .route(
            "/v1/views/transparency",
            axum::routing::get(api::views::transparency),
        )
        .route("/v1/users", axum::routing::get(api::users::list_users))
        .merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/v1/openapi.json", ApiDoc::openapi()),
        )
        .layer(trace_layer)
        .with_state(state)
}
