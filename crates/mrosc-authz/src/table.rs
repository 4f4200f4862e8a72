//! Permission tables.
//!
//! # Purpose
//! Holds the role-to-route table and the independent role-to-action table the
//! resolver consults. Tables are plain immutable data built once at startup,
//! either from the built-in defaults or from a YAML document.
//!
//! # Key invariants
//! - Only [`Role::Master`] may hold [`RouteGrant::All`].
//! - A role missing from the route table is treated as `{ "/" }` by the
//!   resolver; the table itself never synthesizes entries.
//! - Route grants may list capability keys as well as paths; the resolver
//!   decides what they mean.
//!
//! # Important configuration
//! YAML shape accepted by [`PermissionTable::from_yaml_str`]:
//! ```yaml
//! routes:
//!   MASTER: ["*"]
//!   GESTOR: ["/", "/amendments", "/partnerships"]
//! actions:
//!   GESTOR: [RELEASE_TRANCHE, CREATE_PARTNERSHIP]
//! ```
//!
//! # Common pitfalls
//! - Granting `*` to anything but `MASTER` is rejected instead of silently
//!   widening access.
use crate::{AccessKey, AuthzError, AuthzResult, Capability, Role, Route};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

const WILDCARD_TOKEN: &str = "*";

/// Route-table entry for one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteGrant {
    All,
    Keys(BTreeSet<AccessKey>),
}

/// Read-only view over permission data.
///
/// The resolver only talks to tables through this trait, so alternate tables
/// (or instrumented ones in tests) can be swapped in without touching it.
pub trait PermissionSource: Send + Sync {
    fn route_grant(&self, role: Role) -> Option<&RouteGrant>;
    fn action_grant(&self, role: Role) -> Option<&BTreeSet<Capability>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionTable {
    routes: BTreeMap<Role, RouteGrant>,
    actions: BTreeMap<Role, BTreeSet<Capability>>,
}

const ROUTE_GRANTS: &[(Role, &[Route])] = &[
    (
        Role::Control,
        &[
            Route::Home,
            Route::Accountability,
            Route::Oscs,
            Route::Reports,
            Route::Legislation,
            Route::Logs,
            Route::Manual,
            Route::Communication,
        ],
    ),
    (
        Role::Gestor,
        &[
            Route::Home,
            Route::Amendments,
            Route::Pmis,
            Route::Chamamento,
            Route::Partnerships,
            Route::Accountability,
            Route::Reports,
            Route::Manual,
            Route::Communication,
        ],
    ),
    (
        Role::Legal,
        &[
            Route::Home,
            Route::Partnerships,
            Route::Legislation,
            Route::Communication,
            Route::Manual,
        ],
    ),
    (
        Role::SelectionCommission,
        &[Route::Home, Route::Chamamento, Route::Pmis, Route::Manual],
    ),
    (
        Role::MonitoringCommission,
        &[
            Route::Home,
            Route::Partnerships,
            Route::Accountability,
            Route::Manual,
        ],
    ),
    (
        Role::OscLegal,
        &[
            Route::Home,
            Route::Partnerships,
            Route::Accountability,
            Route::Communication,
            Route::Oscs,
            Route::Manual,
        ],
    ),
    (
        Role::OscUser,
        &[
            Route::Home,
            Route::Partnerships,
            Route::Accountability,
            Route::Communication,
            Route::Manual,
        ],
    ),
    (
        Role::TechPhysical,
        &[Route::Home, Route::Partnerships, Route::Accountability],
    ),
    (
        Role::TechFinancial,
        &[
            Route::Home,
            Route::Partnerships,
            Route::Accountability,
            Route::Reports,
        ],
    ),
    (
        Role::Councils,
        &[
            Route::Home,
            Route::Partnerships,
            Route::Reports,
            Route::Transparency,
        ],
    ),
];

// Master is implicit for every action and is not listed.
const ACTION_GRANTS: &[(Capability, &[Role])] = &[
    (
        Capability::ViewAmendments,
        &[Role::Control, Role::Gestor, Role::Legal],
    ),
    (Capability::EditLegislation, &[Role::Legal, Role::Control]),
    (
        Capability::ApproveAccountability,
        &[Role::Control, Role::TechFinancial],
    ),
    (Capability::ReleaseTranche, &[Role::Control, Role::Gestor]),
    (Capability::CreatePartnership, &[Role::Gestor, Role::Legal]),
    (Capability::SubmitDocuments, &[Role::OscLegal, Role::OscUser]),
    (
        Capability::CreateChamamento,
        &[Role::SelectionCommission, Role::Gestor],
    ),
    (Capability::ViewAuditLogs, &[Role::Control]),
    (Capability::ManageUsers, &[]),
    (Capability::EditWorkplan, &[Role::Gestor, Role::OscLegal]),
];

impl PermissionTable {
    /// Build a table from explicit entries.
    ///
    /// # Errors
    /// - [`AuthzError::WildcardNotAllowed`] if a non-master role holds
    ///   [`RouteGrant::All`].
    pub fn new(
        routes: BTreeMap<Role, RouteGrant>,
        actions: BTreeMap<Role, BTreeSet<Capability>>,
    ) -> AuthzResult<Self> {
        for (role, grant) in &routes {
            if *grant == RouteGrant::All && !role.is_wildcard() {
                return Err(AuthzError::WildcardNotAllowed(*role));
            }
        }
        Ok(Self { routes, actions })
    }

    /// The tables the console ships with.
    pub fn builtin() -> Self {
        let mut routes = BTreeMap::new();
        routes.insert(Role::Master, RouteGrant::All);
        for (role, granted) in ROUTE_GRANTS {
            let keys = granted.iter().copied().map(AccessKey::Route).collect();
            routes.insert(*role, RouteGrant::Keys(keys));
        }

        // Invert capability -> roles into role -> capabilities.
        let mut actions: BTreeMap<Role, BTreeSet<Capability>> = BTreeMap::new();
        for (capability, roles) in ACTION_GRANTS {
            for role in *roles {
                actions.entry(*role).or_default().insert(*capability);
            }
        }
        Self { routes, actions }
    }

    /// Parse a table from YAML.
    ///
    /// # Errors
    /// - [`AuthzError::Yaml`] for malformed documents.
    /// - [`AuthzError::InvalidRole`], [`AuthzError::InvalidRoute`],
    ///   [`AuthzError::InvalidCapability`] for unknown tokens.
    /// - [`AuthzError::WildcardNotAllowed`] for `*` on a non-master role.
    pub fn from_yaml_str(contents: &str) -> AuthzResult<Self> {
        let document: TableDocument = serde_yaml::from_str(contents)?;

        let mut routes = BTreeMap::new();
        for (code, entries) in document.routes {
            let role = parse_role(&code)?;
            let grant = if entries.iter().any(|entry| entry == WILDCARD_TOKEN) {
                RouteGrant::All
            } else {
                let keys = entries
                    .iter()
                    .map(|entry| AccessKey::parse(entry))
                    .collect::<AuthzResult<BTreeSet<_>>>()?;
                RouteGrant::Keys(keys)
            };
            routes.insert(role, grant);
        }

        let mut actions = BTreeMap::new();
        for (code, entries) in document.actions {
            let role = parse_role(&code)?;
            let capabilities = entries
                .iter()
                .map(|entry| {
                    entry
                        .parse::<Capability>()
                        .map_err(|_| AuthzError::InvalidCapability(entry.clone()))
                })
                .collect::<AuthzResult<BTreeSet<_>>>()?;
            actions.insert(role, capabilities);
        }

        let table = Self::new(routes, actions)?;
        tracing::debug!(
            route_roles = table.routes.len(),
            action_roles = table.actions.len(),
            "loaded permission table"
        );
        Ok(table)
    }

    /// Read and parse a YAML table from disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> AuthzResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| AuthzError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PermissionSource for PermissionTable {
    fn route_grant(&self, role: Role) -> Option<&RouteGrant> {
        self.routes.get(&role)
    }

    fn action_grant(&self, role: Role) -> Option<&BTreeSet<Capability>> {
        self.actions.get(&role)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableDocument {
    #[serde(default)]
    routes: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    actions: BTreeMap<String, Vec<String>>,
}

fn parse_role(code: &str) -> AuthzResult<Role> {
    code.parse::<Role>()
        .map_err(|_| AuthzError::InvalidRole(code.to_string()))
}
