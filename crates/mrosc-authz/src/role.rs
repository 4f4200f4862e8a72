//! User roles recognised by the console.
//!
//! # Purpose
//! Enumerates the closed set of functional roles a console user can hold and
//! maps them to their storage codes and display labels.
//!
//! # Key invariants
//! - Storage codes match the profile table enum exactly (`MASTER`, `GESTOR`, ...).
//! - [`Role::Master`] is the only wildcard role.
//!
//! # Common pitfalls
//! - Comparing display labels instead of codes; labels are for rendering only.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Master,
    Control,
    Gestor,
    SelectionCommission,
    MonitoringCommission,
    Councils,
    TechPhysical,
    TechFinancial,
    Legal,
    OscLegal,
    OscUser,
}

impl Role {
    pub const ALL: [Role; 11] = [
        Role::Master,
        Role::Control,
        Role::Gestor,
        Role::SelectionCommission,
        Role::MonitoringCommission,
        Role::Councils,
        Role::TechPhysical,
        Role::TechFinancial,
        Role::Legal,
        Role::OscLegal,
        Role::OscUser,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Master => "MASTER",
            Role::Control => "CONTROL",
            Role::Gestor => "GESTOR",
            Role::SelectionCommission => "SELECTION_COMMISSION",
            Role::MonitoringCommission => "MONITORING_COMMISSION",
            Role::Councils => "COUNCILS",
            Role::TechPhysical => "TECH_PHYSICAL",
            Role::TechFinancial => "TECH_FINANCIAL",
            Role::Legal => "LEGAL",
            Role::OscLegal => "OSC_LEGAL",
            Role::OscUser => "OSC_USER",
        }
    }

    /// Human-readable name shown next to the user's avatar.
    pub fn label(self) -> &'static str {
        match self {
            Role::Master => "Administrador Master",
            Role::Control => "Controle Interno",
            Role::Gestor => "Gestor da Parceria",
            Role::SelectionCommission => "Comissão de Seleção",
            Role::MonitoringCommission => "Comissão de Monitoramento",
            Role::Councils => "Conselhos Municipais",
            Role::TechPhysical => "Técnico - Exec. Física",
            Role::TechFinancial => "Técnico - Exec. Financeira",
            Role::Legal => "Procuradoria Jurídica",
            Role::OscLegal => "Rep. Legal OSC",
            Role::OscUser => "Usuário OSC",
        }
    }

    pub fn is_wildcard(self) -> bool {
        self == Role::Master
    }

    /// Whether the role belongs to a civil-society organisation rather than
    /// the municipality.
    pub fn is_osc(self) -> bool {
        matches!(self, Role::OscLegal | Role::OscUser)
    }

    /// Display label for a raw profile code, passing unknown codes through.
    pub fn label_for_code(code: &str) -> String {
        match code.parse::<Role>() {
            Ok(role) => role.label().to_string(),
            Err(()) => code.to_string(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn role_string_roundtrip() {
        for role in Role::ALL {
            let as_str = role.as_str();
            assert_eq!(as_str.parse::<Role>().ok(), Some(role));
            assert_eq!(role.to_string(), as_str);
        }
    }

    #[test]
    fn role_from_str_is_case_sensitive() {
        assert!("master".parse::<Role>().is_err());
        assert!("Administrador Master".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn serde_uses_storage_codes() {
        let encoded = serde_json::to_string(&Role::SelectionCommission).expect("encode");
        assert_eq!(encoded, "\"SELECTION_COMMISSION\"");
        let decoded: Role = serde_json::from_str("\"OSC_LEGAL\"").expect("decode");
        assert_eq!(decoded, Role::OscLegal);
    }

    #[test]
    fn only_master_is_wildcard() {
        let wildcards: Vec<Role> = Role::ALL.into_iter().filter(|r| r.is_wildcard()).collect();
        assert_eq!(wildcards, vec![Role::Master]);
    }

    #[test]
    fn labels_fall_back_to_raw_code() {
        assert_eq!(Role::label_for_code("GESTOR"), "Gestor da Parceria");
        assert_eq!(Role::label_for_code("AUDITOR"), "AUDITOR");
    }

    #[test]
    fn osc_roles() {
        assert!(Role::OscLegal.is_osc());
        assert!(Role::OscUser.is_osc());
        assert!(!Role::Master.is_osc());
    }
}
