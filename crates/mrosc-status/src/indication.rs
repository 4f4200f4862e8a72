use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// How an amendment reaches its beneficiary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Indication {
    /// Linked to a specific organization.
    #[serde(rename = "Direta")]
    Direct,
    #[serde(rename = "Indireta")]
    Indirect,
}

impl Indication {
    /// Derive the indication from the beneficiary linkage.
    ///
    /// This is the only place the rule lives; a separately persisted
    /// indication value is never consulted.
    pub fn derive(linked: Option<&str>) -> Self {
        match linked {
            Some(reference) if !reference.trim().is_empty() => Indication::Direct,
            _ => Indication::Indirect,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Indication::Direct => "Direta",
            Indication::Indirect => "Indireta",
        }
    }
}

impl fmt::Display for Indication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Indication;

    #[test]
    fn linkage_decides_indication() {
        assert_eq!(Indication::derive(Some("osc-1")), Indication::Direct);
        assert_eq!(Indication::derive(None), Indication::Indirect);
        assert_eq!(Indication::derive(Some("")), Indication::Indirect);
        assert_eq!(Indication::derive(Some("   ")), Indication::Indirect);
    }

    #[test]
    fn serializes_with_display_labels() {
        assert_eq!(
            serde_json::to_string(&Indication::Direct).expect("json"),
            "\"Direta\""
        );
        assert_eq!(Indication::Indirect.to_string(), "Indireta");
    }
}
