//! Entity descriptors: raw record shapes, view models and statistics.
mod accountability;
mod amendment;
mod call;
mod partnership;
mod proposal;

pub use accountability::{
    AccountabilityDocuments, AccountabilityRecord, AccountabilityStats, AccountabilityView,
};
pub use amendment::{AmendmentRecord, AmendmentStats, AmendmentView, Amendments};
pub use call::{CallRecord, CallStats, CallView, CallsForProposals};
pub use partnership::{PartnershipRecord, PartnershipStats, PartnershipView, Partnerships};
pub use proposal::{ProposalRecord, ProposalStats, ProposalView, Proposals};

pub(crate) use partnership::DEFAULT_PARTNERSHIP_TYPE;
