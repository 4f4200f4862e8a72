//! Console error responses.
//!
//! Every handler failure becomes an [`ApiError`]: a status plus the shared
//! [`ErrorResponse`] body. Access denials are the one failure users are
//! meant to see; they carry `home` so the front-end can link back to `/`.
//! Store failures are logged here and leave the process as a generic 500.
use crate::api::types::ErrorResponse;
use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use mrosc_authz::Route;

pub const ACCESS_RESTRICTED_MESSAGE: &str = "Acesso Restrito";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AccessRestricted,
    Unauthorized,
    NotFound,
    Validation,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::AccessRestricted => StatusCode::FORBIDDEN,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::AccessRestricted => "access_restricted",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Validation => "validation_error",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Handler error.
///
/// ```rust
/// use axum::http::StatusCode;
/// use console::api::error::api_access_restricted;
///
/// let err = api_access_restricted();
/// assert_eq!(err.status, StatusCode::FORBIDDEN);
/// assert_eq!(err.body.home.as_deref(), Some("/"));
/// ```
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            status: kind.status(),
            body: ErrorResponse {
                code: kind.code().to_string(),
                message: message.into(),
                request_id: None,
                home: None,
            },
        }
    }

    fn with_home(mut self, route: Route) -> Self {
        self.body.home = Some(route.path().to_string());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub fn api_access_restricted() -> ApiError {
    ApiError::new(ErrorKind::AccessRestricted, ACCESS_RESTRICTED_MESSAGE).with_home(Route::Home)
}

pub fn api_unauthorized(message: &str) -> ApiError {
    ApiError::new(ErrorKind::Unauthorized, message)
}

pub fn api_not_found(message: &str) -> ApiError {
    ApiError::new(ErrorKind::NotFound, message)
}

pub fn api_validation_error(message: &str) -> ApiError {
    ApiError::new(ErrorKind::Validation, message)
}

/// Log `err` and hide it behind `message`.
pub fn api_internal(message: &str, err: &StoreError) -> ApiError {
    tracing::error!(error = ?err, "record store failure");
    ApiError::new(ErrorKind::Internal, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_status_and_code() {
        let cases = [
            (api_unauthorized("no role"), StatusCode::UNAUTHORIZED, "unauthorized"),
            (api_not_found("gone"), StatusCode::NOT_FOUND, "not_found"),
            (api_validation_error("empty"), StatusCode::BAD_REQUEST, "validation_error"),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status, status);
            assert_eq!(err.body.code, code);
            assert_eq!(err.body.home, None);
        }
    }

    #[test]
    fn denial_links_back_home() {
        let err = api_access_restricted();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.body.code, "access_restricted");
        assert_eq!(err.body.message, "Acesso Restrito");
        assert_eq!(err.body.home.as_deref(), Some("/"));
    }

    #[test]
    fn store_failures_keep_details_private() {
        let err = StoreError::Unexpected(anyhow::anyhow!("connection reset by peer"));
        let api = api_internal("failed to load partnerships", &err);
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.body.code, "internal");
        assert!(!api.body.message.contains("connection reset"));
    }

    #[test]
    fn home_only_serialized_for_denials() {
        let json = serde_json::to_value(api_not_found("x").body).expect("json");
        assert!(json.get("home").is_none());
        let json = serde_json::to_value(api_access_restricted().body).expect("json");
        assert_eq!(json["home"], "/");
    }
}
