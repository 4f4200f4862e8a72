//! User directory endpoint.
//!
//! # Purpose and responsibility
//! Lists console profiles with display role labels. Reserved for the
//! master administrator through `MANAGE_USERS`.
use crate::api::error::{ApiError, api_internal};
use crate::api::require_capability;
use crate::api::types::{ErrorResponse, SearchQuery, UserView, UsersResponse};
use crate::app::AppState;
use crate::session::Session;
use crate::store::ProfileRecord;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use mrosc_authz::{Capability, Role};

impl From<&ProfileRecord> for UserView {
    fn from(profile: &ProfileRecord) -> Self {
        UserView {
            id: profile.id.clone(),
            email: profile.email.clone(),
            full_name: profile.full_name.clone(),
            role: profile.role.clone(),
            role_label: Role::label_for_code(profile.role.as_deref().unwrap_or("")),
            department: profile.department.clone(),
        }
    }
}

/// Case-insensitive match on name or email.
fn matches(user: &UserView, term: &str) -> bool {
    let needle = term.to_lowercase();
    [user.full_name.as_deref(), user.email.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[utoipa::path(
    get,
    path = "/v1/users",
    tag = "users",
    params(SearchQuery),
    responses(
        (status = 200, description = "Console users", body = UsersResponse),
        (status = 401, description = "Missing role header", body = ErrorResponse),
        (status = 403, description = "Access restricted", body = ErrorResponse)
    )
)]
pub(crate) async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<Json<UsersResponse>, ApiError> {
    let session = Session::from_headers(&headers)?;
    require_capability(&state, &session, Capability::ManageUsers)?;
    let profiles = state
        .store
        .profiles()
        .await
        .map_err(|err| api_internal("failed to load profiles", &err))?;
    let items = profiles
        .iter()
        .map(UserView::from)
        .filter(|user| query.search.as_deref().is_none_or(|term| matches(user, term)))
        .collect();
    Ok(Json(UsersResponse { items }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_carries_role_label_and_passthrough() {
        let known = UserView::from(&ProfileRecord {
            id: "u1".into(),
            role: Some("TECH_PHYSICAL".into()),
            ..ProfileRecord::default()
        });
        assert_eq!(known.role_label, "Técnico - Exec. Física");

        let unknown = UserView::from(&ProfileRecord {
            id: "u2".into(),
            role: Some("AUDITOR".into()),
            ..ProfileRecord::default()
        });
        assert_eq!(unknown.role_label, "AUDITOR");
    }

    #[test]
    fn search_matches_name_or_email() {
        let user = UserView::from(&ProfileRecord {
            id: "u1".into(),
            full_name: Some("Carla Mendes".into()),
            email: Some("carla@prefeitura.gov.br".into()),
            ..ProfileRecord::default()
        });
        assert!(matches(&user, "MENDES"));
        assert!(matches(&user, "prefeitura"));
        assert!(!matches(&user, "gestor"));
    }
}
