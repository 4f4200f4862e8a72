//! Role-based access control for the MROSC partnership console.
//!
//! # Purpose
//! Centralizes the role, route and capability vocabularies, the permission
//! tables, and the resolver every console view consults before rendering
//! protected content.
//!
//! # How it fits
//! The console service builds one [`AccessResolver`] at startup from the
//! built-in [`PermissionTable`] (or a YAML override) and shares it read-only
//! across requests.
//!
//! # Key invariants
//! - [`Role::Master`] is the only wildcard role and bypasses every lookup.
//! - Anything not granted is denied; unknown roles see only the home route.
//! - User management (`MANAGE_USERS`) is never granted through the tables.
//!
//! # Examples
//! ```rust
//! use mrosc_authz::{AccessResolver, Capability, PermissionTable, Role};
//!
//! let resolver = AccessResolver::new(PermissionTable::builtin());
//! assert!(resolver.has_permission(Role::Gestor, Capability::ReleaseTranche));
//! assert!(!resolver.can_access_key(Role::Gestor, "MANAGE_USERS"));
//! ```
//!
//! # Common pitfalls
//! - Checking only the route when a screen hosts a gated action; views must
//!   call both `can_access_route` and `has_permission` where applicable.

mod capability;
mod errors;
mod key;
mod resolver;
mod role;
mod route;
mod table;

pub use capability::Capability;
pub use errors::{AuthzError, AuthzResult};
pub use key::AccessKey;
pub use resolver::{AccessResolver, AccessibleRoutes};
pub use role::Role;
pub use route::Route;
pub use table::{PermissionSource, PermissionTable, RouteGrant};
