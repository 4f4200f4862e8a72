//! Record storage seam.
//!
//! # Purpose
//! The console reads plain rows from the hosted backend; [`RecordStore`] is
//! the boundary where those rows enter. Records keep every field optional
//! so sparse rows decode instead of failing.
use async_trait::async_trait;
use mrosc_status::audit::AuditRecord;
use mrosc_status::entities::{
    AccountabilityRecord, AmendmentRecord, CallRecord, PartnershipRecord, ProposalRecord,
};
use mrosc_status::osc::OscRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod memory;

/// A console user profile row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Raw role code; may name no known role.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid seed data: {0}")]
    InvalidSeed(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn amendments(&self) -> StoreResult<Vec<AmendmentRecord>>;
    async fn calls(&self) -> StoreResult<Vec<CallRecord>>;
    async fn partnerships(&self) -> StoreResult<Vec<PartnershipRecord>>;
    async fn proposals(&self) -> StoreResult<Vec<ProposalRecord>>;
    async fn accountability_documents(&self) -> StoreResult<Vec<AccountabilityRecord>>;
    async fn oscs(&self) -> StoreResult<Vec<OscRecord>>;
    /// Newest first.
    async fn audit_logs(&self) -> StoreResult<Vec<AuditRecord>>;
    async fn profiles(&self) -> StoreResult<Vec<ProfileRecord>>;

    async fn health_check(&self) -> StoreResult<()>;
    fn backend_name(&self) -> &'static str;
}
