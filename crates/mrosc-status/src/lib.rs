//! Status labels and view-model aggregation for MROSC partnership records.
//!
//! # Purpose
//! Translates storage-level status codes into display labels and reshapes
//! raw backend rows into the view models and statistics the console shows.
//!
//! # How it fits
//! The console fetches plain records from its store and hands them to a
//! shared [`Normalizer`]. Each entity kind plugs in through an
//! [`EntityDescriptor`] implementation in [`entities`].
//!
//! # Key invariants
//! - Unknown status codes are shown verbatim, never replaced or rejected.
//! - Missing or non-numeric money fields count as zero ([`Amount`]).
//! - Amendment indication comes only from [`Indication::derive`].
//!
//! # Examples
//! ```rust
//! use mrosc_status::entities::{AmendmentRecord, Amendments};
//! use mrosc_status::{Amount, Normalizer};
//!
//! let records = vec![AmendmentRecord {
//!     id: "a1".into(),
//!     value: Amount::new(100.0),
//!     status: Some("paid".into()),
//!     ..AmendmentRecord::default()
//! }];
//! let stats = Normalizer::default().compute_aggregates::<Amendments>(&records);
//! assert_eq!(stats.executed_count, 1);
//! ```

mod amount;
pub mod audit;
mod breakdown;
pub mod dashboard;
pub mod entities;
mod indication;
mod kind;
mod normalizer;
pub mod osc;
mod table;

pub use amount::Amount;
pub use breakdown::{StatusBreakdown, StatusCount};
pub use indication::Indication;
pub use kind::{EntityKind, StatusStage};
pub use normalizer::{EntityDescriptor, Normalizer, Summary};
pub use table::{StatusTable, StatusTables};
