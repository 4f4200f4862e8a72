//! Navigable console screens.
//!
//! # Purpose
//! Closed set of route identifiers with their canonical paths and sidebar
//! labels.
//!
//! # Key invariants
//! - Every path starts with `/`; [`Route::Home`] is exactly `/`.
//! - `from_path` only accepts canonical paths; no prefix or nested matching.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Amendments,
    Pmis,
    Chamamento,
    Partnerships,
    Accountability,
    Oscs,
    Reports,
    Legislation,
    Communication,
    Logs,
    Manual,
    Transparency,
    Users,
}

impl Route {
    pub const ALL: [Route; 14] = [
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
        Route::Transparency,
        Route::Users,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Amendments => "/amendments",
            Route::Pmis => "/pmis",
            Route::Chamamento => "/chamamento",
            Route::Partnerships => "/partnerships",
            Route::Accountability => "/accountability",
            Route::Oscs => "/oscs",
            Route::Reports => "/reports",
            Route::Legislation => "/legislation",
            Route::Communication => "/communication",
            Route::Logs => "/logs",
            Route::Manual => "/manual",
            Route::Transparency => "/transparency",
            Route::Users => "/users",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Route::Home => "Dashboard",
            Route::Amendments => "Emendas Parlamentares",
            Route::Pmis => "PMIS",
            Route::Chamamento => "Chamamentos",
            Route::Partnerships => "Parcerias",
            Route::Accountability => "Contas (REO/REFF)",
            Route::Oscs => "Cadastro OSCs",
            Route::Reports => "Relatórios e BI",
            Route::Legislation => "Legislação e Modelos",
            Route::Communication => "Comunicações",
            Route::Logs => "Audit Trail (LGPD)",
            Route::Manual => "Manual do Sistema",
            Route::Transparency => "Portal da Transparência",
            Route::Users => "Gestão de Usuários",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
