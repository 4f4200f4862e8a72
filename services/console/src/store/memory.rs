//! In-memory implementation of the record store.
//!
//! # Purpose
//! Holds seeded backend rows in memory behind `tokio::sync::RwLock`. Used for
//! local development, demos and tests; nothing is durable.
//!
//! # Seeding
//! A seed file is a YAML (or JSON) document with one optional list per
//! table: `amendments`, `calls`, `partnerships`, `proposals`,
//! `accountability_documents`, `oscs`, `audit_logs`, `profiles`.
use super::{ProfileRecord, RecordStore, StoreError, StoreResult};
use anyhow::Context;
use async_trait::async_trait;
use mrosc_status::audit::AuditRecord;
use mrosc_status::entities::{
    AccountabilityRecord, AmendmentRecord, CallRecord, PartnershipRecord, ProposalRecord,
};
use mrosc_status::osc::OscRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    #[serde(default)]
    pub amendments: Vec<AmendmentRecord>,
    #[serde(default)]
    pub calls: Vec<CallRecord>,
    #[serde(default)]
    pub partnerships: Vec<PartnershipRecord>,
    #[serde(default)]
    pub proposals: Vec<ProposalRecord>,
    #[serde(default)]
    pub accountability_documents: Vec<AccountabilityRecord>,
    #[serde(default)]
    pub oscs: Vec<OscRecord>,
    #[serde(default)]
    pub audit_logs: Vec<AuditRecord>,
    #[serde(default)]
    pub profiles: Vec<ProfileRecord>,
}

impl SeedData {
    /// Parse seed rows from YAML (or JSON, which YAML accepts).
    ///
    /// # Errors
    /// - [`StoreError::InvalidSeed`] for malformed documents and for table
    ///   names other than the eight known ones.
    pub fn from_yaml_str(contents: &str) -> StoreResult<Self> {
        serde_yaml::from_str(contents).map_err(|err| StoreError::InvalidSeed(err.to_string()))
    }

    /// # Errors
    /// - [`StoreError::Unexpected`] when the file cannot be read.
    /// - Whatever [`SeedData::from_yaml_str`] rejects.
    pub fn from_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read seed file: {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: RwLock<SeedData>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: SeedData) -> Self {
        let mut seed = seed;
        // ISO-8601 timestamps sort lexically; rows without one go last.
        seed.audit_logs
            .sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self {
            data: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn amendments(&self) -> StoreResult<Vec<AmendmentRecord>> {
        Ok(self.data.read().await.amendments.clone())
    }

    async fn calls(&self) -> StoreResult<Vec<CallRecord>> {
        Ok(self.data.read().await.calls.clone())
    }

    async fn partnerships(&self) -> StoreResult<Vec<PartnershipRecord>> {
        Ok(self.data.read().await.partnerships.clone())
    }

    async fn proposals(&self) -> StoreResult<Vec<ProposalRecord>> {
        Ok(self.data.read().await.proposals.clone())
    }

    async fn accountability_documents(&self) -> StoreResult<Vec<AccountabilityRecord>> {
        Ok(self.data.read().await.accountability_documents.clone())
    }

    async fn oscs(&self) -> StoreResult<Vec<OscRecord>> {
        Ok(self.data.read().await.oscs.clone())
    }

    async fn audit_logs(&self) -> StoreResult<Vec<AuditRecord>> {
        Ok(self.data.read().await.audit_logs.clone())
    }

    async fn profiles(&self) -> StoreResult<Vec<ProfileRecord>> {
        Ok(self.data.read().await.profiles.clone())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEED: &str = r#"
amendments:
  - id: a1
    value: "1000"
    status: paid
    osc_id: osc-1
partnerships:
  - id: p1
    status: active
    total_value: 5000
audit_logs:
  - id: l1
    action: CREATE
    created_at: "2025-01-01T10:00:00Z"
  - id: l2
    action: UPDATE
    created_at: "2025-03-01T10:00:00Z"
  - id: l3
    action: DELETE
"#;

    #[tokio::test]
    async fn seeds_from_yaml() {
        let store = InMemoryStore::with_seed(SeedData::from_yaml_str(SEED).expect("seed"));
        assert_eq!(store.amendments().await.expect("amendments").len(), 1);
        assert_eq!(store.partnerships().await.expect("partnerships").len(), 1);
        assert!(store.calls().await.expect("calls").is_empty());
        assert_eq!(store.backend_name(), "memory");
        store.health_check().await.expect("health");
    }

    #[tokio::test]
    async fn audit_logs_are_newest_first() {
        let store = InMemoryStore::with_seed(SeedData::from_yaml_str(SEED).expect("seed"));
        let ids: Vec<String> = store
            .audit_logs()
            .await
            .expect("logs")
            .into_iter()
            .map(|log| log.id)
            .collect();
        assert_eq!(ids, vec!["l2", "l1", "l3"]);
    }

    #[test]
    fn json_seed_is_accepted() {
        let seed = SeedData::from_yaml_str(r#"{"oscs": [{"id": "o1", "cnd_status": "expired"}]}"#)
            .expect("seed");
        assert_eq!(seed.oscs.len(), 1);
    }

    #[test]
    fn unknown_table_is_rejected() {
        let err = SeedData::from_yaml_str("tenants: []").expect_err("unknown table");
        assert!(matches!(err, StoreError::InvalidSeed(_)));
    }

    #[test]
    fn seed_file_roundtrip_and_missing_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(SEED.as_bytes()).expect("write");
        let seed = SeedData::from_file(file.path()).expect("seed");
        assert_eq!(seed.audit_logs.len(), 3);

        let err = SeedData::from_file("/nonexistent/seed.yaml").expect_err("missing");
        assert!(matches!(err, StoreError::Unexpected(_)));
    }
}
