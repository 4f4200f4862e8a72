//! Route/capability access keys.
//!
//! # Purpose
//! Unifies the two kinds of permission-table entries behind one typed key and
//! keeps the string convention used by callers at the boundary.
//!
//! # Key invariants
//! - A string key starting with `/` is a route path; anything else is a
//!   capability token.
//! - Rendering a key and parsing it back yields the same key.
//!
//! # Examples
//! ```rust
//! use mrosc_authz::{AccessKey, Capability, Route};
//!
//! assert_eq!(AccessKey::parse("/amendments").unwrap(), AccessKey::Route(Route::Amendments));
//! assert_eq!(
//!     AccessKey::parse("MANAGE_USERS").unwrap(),
//!     AccessKey::Capability(Capability::ManageUsers)
//! );
//! ```
//!
//! # Common pitfalls
//! - Nested paths such as `/partnerships/42` are not keys; strip them to the
//!   screen root before checking.
use crate::{AuthzError, AuthzResult, Capability, Route};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AccessKey {
    Route(Route),
    Capability(Capability),
}

impl AccessKey {
    /// Parse a key using the `/`-prefix convention.
    ///
    /// # Errors
    /// - [`AuthzError::InvalidRoute`] for an unknown path.
    /// - [`AuthzError::InvalidCapability`] for an unknown capability token.
    pub fn parse(value: &str) -> AuthzResult<Self> {
        if value.starts_with('/') {
            return Route::from_path(value)
                .map(AccessKey::Route)
                .ok_or_else(|| AuthzError::InvalidRoute(value.to_string()));
        }
        value
            .parse::<Capability>()
            .map(AccessKey::Capability)
            .map_err(|_| AuthzError::InvalidCapability(value.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessKey::Route(route) => route.path(),
            AccessKey::Capability(capability) => capability.as_str(),
        }
    }
}

impl From<Route> for AccessKey {
    fn from(route: Route) -> Self {
        AccessKey::Route(route)
    }
}

impl From<Capability> for AccessKey {
    fn from(capability: Capability) -> Self {
        AccessKey::Capability(capability)
    }
}

impl std::str::FromStr for AccessKey {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        AccessKey::parse(value)
    }
}

impl TryFrom<String> for AccessKey {
    type Error = AuthzError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AccessKey::parse(&value)
    }
}

impl From<AccessKey> for String {
    fn from(key: AccessKey) -> Self {
        key.as_str().to_string()
    }
}

impl std::fmt::Display for AccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
