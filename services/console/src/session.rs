//! Caller identity taken from gateway headers.
//!
//! # Purpose
//! The upstream identity gateway authenticates users and forwards their
//! profile as trusted headers. This module turns those headers into a
//! [`Session`] for the access checks.
//!
//! # Key invariants
//! - A missing or blank role header is a 401; nothing else is rejected here.
//! - Role codes that name no known role are kept verbatim and resolve to the
//!   minimal (home-only) access downstream.
use crate::api::error::{ApiError, api_unauthorized};
use axum::http::HeaderMap;
use mrosc_authz::Role;

pub const ROLE_HEADER: &str = "x-mrosc-role";
pub const USER_NAME_HEADER: &str = "x-mrosc-user-name";
pub const DEPARTMENT_HEADER: &str = "x-mrosc-department";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role_code: String,
    pub user_name: Option<String>,
    pub department: Option<String>,
}

impl Session {
    /// # Errors
    /// - `401 unauthorized` when the role header is missing, blank or not
    ///   valid UTF-8.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, ApiError> {
        let role_code = header_value(headers, ROLE_HEADER)
            .ok_or_else(|| api_unauthorized("missing role header"))?;
        Ok(Self {
            role_code,
            user_name: header_value(headers, USER_NAME_HEADER),
            department: header_value(headers, DEPARTMENT_HEADER),
        })
    }

    /// The known role, if the code names one.
    pub fn role(&self) -> Option<Role> {
        self.role_code.parse().ok()
    }

    pub fn role_label(&self) -> String {
        Role::label_for_code(&self.role_code)
    }

    /// Whether the caller acts for an OSC. Unknown codes are not.
    pub fn is_osc(&self) -> bool {
        self.role().is_some_and(Role::is_osc)
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
