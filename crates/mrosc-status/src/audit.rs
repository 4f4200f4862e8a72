//! Audit trail view models (LGPD access log).
//!
//! # Purpose
//! Shapes raw audit rows for the log screen: actor fallback, a short details
//! summary, IP fallback and an abbreviated integrity hash.
//!
//! # Key invariants
//! - Every view field is populated; nothing here fails on sparse rows.
//! - Search is a case-insensitive substring match over user, action and
//!   resource. An empty term matches everything.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use utoipa::ToSchema;

pub const ANONYMOUS_ACTOR: &str = "Sistema / Anônimo";
pub const NO_DETAILS: &str = "Ação registrada";
pub const FALLBACK_IP: &str = "127.0.0.1";
const DETAILS_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: String,
    /// Full name of the acting profile, when the row is linked to one.
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub entity: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuditView {
    pub id: String,
    pub user: String,
    pub action: String,
    pub resource: String,
    pub details: String,
    pub date: Option<String>,
    pub ip: String,
    pub hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuditStats {
    pub total_count: u64,
    pub distinct_users: u64,
}

impl From<&AuditRecord> for AuditView {
    fn from(record: &AuditRecord) -> Self {
        AuditView {
            id: record.id.clone(),
            user: non_blank(record.user_name.as_deref())
                .unwrap_or(ANONYMOUS_ACTOR)
                .to_string(),
            action: record.action.clone().unwrap_or_default(),
            resource: record.entity.clone().unwrap_or_default(),
            details: summarize_details(record.details.as_ref()),
            date: record.created_at.clone(),
            ip: non_blank(record.ip_address.as_deref())
                .unwrap_or(FALLBACK_IP)
                .to_string(),
            hash: short_hash(&record.id),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// One-line summary of a details payload.
pub fn summarize_details(details: Option<&Value>) -> String {
    match details {
        None | Some(Value::Null) | Some(Value::Bool(false)) => NO_DETAILS.to_string(),
        Some(Value::String(text)) if text.is_empty() => NO_DETAILS.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => NO_DETAILS.to_string(),
        Some(other) => {
            let json = other.to_string();
            if json.chars().count() > DETAILS_PREVIEW_CHARS {
                let preview: String = json.chars().take(DETAILS_PREVIEW_CHARS).collect();
                format!("{preview}...")
            } else {
                json
            }
        }
    }
}

/// `abcd...wxyz` from the first and last four characters of `id`.
pub fn short_hash(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    let head: String = chars.iter().take(4).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}...{tail}")
}

pub fn matches_search(view: &AuditView, term: &str) -> bool {
    let needle = term.to_lowercase();
    view.user.to_lowercase().contains(&needle)
        || view.action.to_lowercase().contains(&needle)
        || view.resource.to_lowercase().contains(&needle)
}

pub fn search<'a>(views: &'a [AuditView], term: &str) -> Vec<&'a AuditView> {
    views.iter().filter(|view| matches_search(view, term)).collect()
}

pub fn audit_stats(views: &[AuditView]) -> AuditStats {
    let users: BTreeSet<&str> = views.iter().map(|view| view.user.as_str()).collect();
    AuditStats {
        total_count: views.len() as u64,
        distinct_users: users.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str) -> AuditRecord {
        AuditRecord {
            id: id.to_string(),
            ..AuditRecord::default()
        }
    }

    #[test]
    fn sparse_row_gets_fallbacks() {
        let view = AuditView::from(&record("9f1c2d3e-0000-4444-aaaa-bbbbccccdddd"));
        assert_eq!(view.user, ANONYMOUS_ACTOR);
        assert_eq!(view.details, NO_DETAILS);
        assert_eq!(view.ip, FALLBACK_IP);
        assert_eq!(view.hash, "9f1c...dddd");
        assert_eq!(view.resource, "");
    }

    #[test]
    fn details_are_summarized() {
        assert_eq!(summarize_details(Some(&json!("Editou meta 2"))), "Editou meta 2");
        assert_eq!(summarize_details(Some(&json!(""))), NO_DETAILS);
        assert_eq!(summarize_details(Some(&json!({"a": 1}))), r#"{"a":1}"#);

        let long = json!({ "field": "x".repeat(80) });
        let summary = summarize_details(Some(&long));
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), 53);
    }

    #[test]
    fn short_ids_hash_without_panicking() {
        assert_eq!(short_hash("ab"), "ab...ab");
        assert_eq!(short_hash(""), "...");
        assert_eq!(short_hash("çãoéü"), "çãoé...ãoéü");
    }

    #[test]
    fn search_is_case_insensitive_over_user_action_resource() {
        let views: Vec<AuditView> = vec![
            AuditRecord {
                user_name: Some("Maria Souza".into()),
                action: Some("UPDATE".into()),
                entity: Some("WorkPlan".into()),
                ..record("1111-aaaa")
            },
            AuditRecord {
                action: Some("DELETE".into()),
                entity: Some("Partnership".into()),
                ..record("2222-bbbb")
            },
        ]
        .iter()
        .map(AuditView::from)
        .collect();

        assert_eq!(search(&views, "maria").len(), 1);
        assert_eq!(search(&views, "update").len(), 1);
        assert_eq!(search(&views, "PARTNER").len(), 1);
        assert_eq!(search(&views, "anônimo").len(), 1);
        assert_eq!(search(&views, "").len(), 2);
        assert!(search(&views, "127.0.0.1").is_empty());

        let stats = audit_stats(&views);
        assert_eq!(stats.total_count, 2);
        assert_eq!(stats.distinct_users, 2);
    }
}
