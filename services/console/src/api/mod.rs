//! Console HTTP API module.
//!
//! # Purpose
//! Exposes route handler modules and the shared access guards every
//! protected handler calls before touching the store.
pub mod access;
pub mod error;
pub mod openapi;
pub mod system;
pub mod types;
pub mod users;
pub mod views;

use crate::api::error::{ApiError, api_access_restricted};
use crate::app::AppState;
use crate::session::Session;
use mrosc_authz::{AccessKey, Capability, Route};

pub(crate) const ACCESS_DECISIONS_METRIC: &str = "mrosc_access_decisions_total";

fn record_decision(session: &Session, key: AccessKey, allowed: bool) {
    let outcome = if allowed { "allowed" } else { "denied" };
    metrics::counter!(ACCESS_DECISIONS_METRIC, "outcome" => outcome).increment(1);
    if !allowed {
        tracing::info!(role = %session.role_code, key = %key, "access restricted");
    }
}

/// Check a screen, recording the decision.
pub(crate) fn check_route(state: &AppState, session: &Session, route: Route) -> bool {
    let key = AccessKey::Route(route);
    let allowed = state.resolver.can_access_for_code(&session.role_code, key);
    record_decision(session, key, allowed);
    allowed
}

/// Check a named action, recording the decision.
pub(crate) fn check_capability(state: &AppState, session: &Session, capability: Capability) -> bool {
    let allowed = state
        .resolver
        .has_permission_for_code(&session.role_code, capability);
    record_decision(session, AccessKey::Capability(capability), allowed);
    allowed
}

/// Gate a screen on the caller's route grant.
///
/// # Errors
/// - `403 access_restricted`, linking back to `/`, when the role lacks
///   `route`. The decision is logged and counted either way.
pub(crate) fn require_route(
    state: &AppState,
    session: &Session,
    route: Route,
) -> Result<(), ApiError> {
    if check_route(state, session, route) {
        Ok(())
    } else {
        Err(api_access_restricted())
    }
}

pub(crate) fn require_capability(
    state: &AppState,
    session: &Session,
    capability: Capability,
) -> Result<(), ApiError> {
    if check_capability(state, session, capability) {
        Ok(())
    } else {
        Err(api_access_restricted())
    }
}

/// The subset of `candidates` the caller may perform, as tokens.
pub(crate) fn permitted_actions(
    state: &AppState,
    session: &Session,
    candidates: &[Capability],
) -> Vec<String> {
    candidates
        .iter()
        .copied()
        .filter(|capability| {
            state
                .resolver
                .has_permission_for_code(&session.role_code, *capability)
        })
        .map(|capability| capability.as_str().to_string())
        .collect()
}
