//! Access Control Resolver.
//!
//! # Purpose
//! Answers "may this role reach this screen / perform this action?" from the
//! injected permission tables.
//!
//! # How it fits
//! Every protected console view asks the resolver before producing content;
//! a `false` answer renders the access-restricted response instead.
//!
//! # Key invariants
//! - The wildcard role short-circuits before any table lookup.
//! - Default deny: unknown keys, unknown roles and missing entries never
//!   grant anything beyond the home route.
//! - `MANAGE_USERS` is reachable only by the wildcard role, whatever the
//!   tables say.
//! - No I/O, no blocking, no interior mutability.
//!
//! # Examples
//! ```rust
//! use mrosc_authz::{AccessResolver, PermissionTable, Role, Route};
//!
//! let resolver = AccessResolver::new(PermissionTable::builtin());
//! assert!(resolver.can_access_route(Role::Gestor, Route::Partnerships));
//! assert!(!resolver.can_access_route(Role::Gestor, Route::Oscs));
//! assert!(resolver.can_access_key(Role::Master, "/logs"));
//! ```
use crate::table::{PermissionSource, PermissionTable, RouteGrant};
use crate::{AccessKey, Capability, Role, Route};
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Result of a route-table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessibleRoutes {
    All,
    Keys(BTreeSet<AccessKey>),
}

impl AccessibleRoutes {
    /// The minimal grant used for roles the table does not know.
    pub fn home_only() -> Self {
        AccessibleRoutes::Keys(BTreeSet::from([AccessKey::Route(Route::Home)]))
    }

    pub fn is_all(&self) -> bool {
        matches!(self, AccessibleRoutes::All)
    }

    pub fn contains(&self, key: &AccessKey) -> bool {
        match self {
            AccessibleRoutes::All => true,
            AccessibleRoutes::Keys(keys) => keys.contains(key),
        }
    }

    /// Concrete routes in the grant, in declaration order. Empty for `All`.
    pub fn routes(&self) -> Vec<Route> {
        match self {
            AccessibleRoutes::All => Vec::new(),
            AccessibleRoutes::Keys(keys) => keys
                .iter()
                .filter_map(|key| match key {
                    AccessKey::Route(route) => Some(*route),
                    AccessKey::Capability(_) => None,
                })
                .collect(),
        }
    }
}

impl From<&RouteGrant> for AccessibleRoutes {
    fn from(grant: &RouteGrant) -> Self {
        match grant {
            RouteGrant::All => AccessibleRoutes::All,
            RouteGrant::Keys(keys) => AccessibleRoutes::Keys(keys.clone()),
        }
    }
}

// Serialized as the legacy `["all"]` marker or the list of key strings.
impl Serialize for AccessibleRoutes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AccessibleRoutes::All => ["all"].serialize(serializer),
            AccessibleRoutes::Keys(keys) => keys.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccessResolver<S = PermissionTable> {
    source: S,
}

impl Default for AccessResolver<PermissionTable> {
    fn default() -> Self {
        Self::new(PermissionTable::builtin())
    }
}

impl<S: PermissionSource> AccessResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Routes and capability keys configured for `role`.
    ///
    /// Deterministic: repeated calls with the same role are value-equal.
    pub fn accessible_routes(&self, role: Role) -> AccessibleRoutes {
        if role.is_wildcard() {
            return AccessibleRoutes::All;
        }
        self.source
            .route_grant(role)
            .map(AccessibleRoutes::from)
            .unwrap_or_else(AccessibleRoutes::home_only)
    }

    /// Same as [`Self::accessible_routes`] for a raw profile code; codes that
    /// name no role get the home-only grant.
    pub fn accessible_routes_for_code(&self, code: &str) -> AccessibleRoutes {
        match code.parse::<Role>() {
            Ok(role) => self.accessible_routes(role),
            Err(()) => AccessibleRoutes::home_only(),
        }
    }

    pub fn can_access(&self, role: Role, key: AccessKey) -> bool {
        // Step 1: the wildcard role never consults the table.
        if role.is_wildcard() {
            return true;
        }

        // Step 2: resolve the role's grant.
        let routes = self.accessible_routes(role);
        if routes.is_all() {
            return true;
        }

        match key {
            AccessKey::Route(_) => routes.contains(&key),
            // User management is never delegated through the table.
            AccessKey::Capability(capability) if capability.is_master_only() => false,
            AccessKey::Capability(_) => routes.contains(&key),
        }
    }

    /// String-keyed variant following the `/`-prefix convention. Keys that
    /// name no known route or capability are denied.
    pub fn can_access_key(&self, role: Role, key: &str) -> bool {
        if role.is_wildcard() {
            return true;
        }
        match AccessKey::parse(key) {
            Ok(key) => self.can_access(role, key),
            Err(_) => false,
        }
    }

    pub fn can_access_for_code(&self, code: &str, key: AccessKey) -> bool {
        match code.parse::<Role>() {
            Ok(role) => self.can_access(role, key),
            Err(()) => AccessibleRoutes::home_only().contains(&key),
        }
    }

    pub fn can_access_route(&self, role: Role, route: Route) -> bool {
        self.can_access(role, AccessKey::Route(route))
    }

    /// Check a named action against the action table.
    pub fn has_permission(&self, role: Role, capability: Capability) -> bool {
        if role.is_wildcard() {
            return true;
        }
        if capability.is_master_only() {
            return false;
        }
        self.source
            .action_grant(role)
            .is_some_and(|granted| granted.contains(&capability))
    }

    pub fn can_perform_action(&self, role: Role, capability: Capability) -> bool {
        self.has_permission(role, capability)
    }

    pub fn has_permission_for_code(&self, code: &str, capability: Capability) -> bool {
        code.parse::<Role>()
            .is_ok_and(|role| self.has_permission(role, capability))
    }
}
