use serde::{Deserialize, Serialize};

/// Named action that is not tied to a navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    ViewAmendments,
    EditLegislation,
    ApproveAccountability,
    ReleaseTranche,
    CreatePartnership,
    SubmitDocuments,
    CreateChamamento,
    ViewAuditLogs,
    ManageUsers,
    EditWorkplan,
}

impl Capability {
    pub const ALL: [Capability; 10] = [
        Capability::ViewAmendments,
        Capability::EditLegislation,
        Capability::ApproveAccountability,
        Capability::ReleaseTranche,
        Capability::CreatePartnership,
        Capability::SubmitDocuments,
        Capability::CreateChamamento,
        Capability::ViewAuditLogs,
        Capability::ManageUsers,
        Capability::EditWorkplan,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::ViewAmendments => "VIEW_AMENDMENTS",
            Capability::EditLegislation => "EDIT_LEGISLATION",
            Capability::ApproveAccountability => "APPROVE_ACCOUNTABILITY",
            Capability::ReleaseTranche => "RELEASE_TRANCHE",
            Capability::CreatePartnership => "CREATE_PARTNERSHIP",
            Capability::SubmitDocuments => "SUBMIT_DOCUMENTS",
            Capability::CreateChamamento => "CREATE_CHAMAMENTO",
            Capability::ViewAuditLogs => "VIEW_AUDIT_LOGS",
            Capability::ManageUsers => "MANAGE_USERS",
            Capability::EditWorkplan => "EDIT_WORKPLAN",
        }
    }

    /// Capabilities that only the wildcard role may ever hold.
    pub fn is_master_only(self) -> bool {
        self == Capability::ManageUsers
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Capability {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|capability| capability.as_str() == value)
            .ok_or(())
    }
}
