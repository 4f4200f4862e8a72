//! Entity kinds carrying a status field, and their built-in label tables.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Parliamentary amendment (emenda parlamentar).
    Amendment,
    /// Public call for proposals (chamamento público).
    CallForProposals,
    Partnership,
    /// Social interest manifestation proposal (PMIS).
    Proposal,
    /// Accountability document (REO/REFF).
    Accountability,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Amendment,
        EntityKind::CallForProposals,
        EntityKind::Partnership,
        EntityKind::Proposal,
        EntityKind::Accountability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Amendment => "amendment",
            EntityKind::CallForProposals => "call_for_proposals",
            EntityKind::Partnership => "partnership",
            EntityKind::Proposal => "proposal",
            EntityKind::Accountability => "accountability",
        }
    }

    /// Built-in code to label pairs.
    pub fn default_labels(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            EntityKind::Amendment => &[
                ("pending", "Pendente"),
                ("linked", "Vinculada"),
                ("paid", "Executada"),
            ],
            EntityKind::CallForProposals => &[
                ("open", "Aberto"),
                ("closed", "Encerrado"),
                ("judging", "Em Julgamento"),
                ("finished", "Homologado"),
            ],
            EntityKind::Partnership => &[
                ("proposal", "Em Proposta"),
                ("analysis", "Em Análise"),
                ("approved", "Aprovada"),
                ("active", "Em Execução"),
                ("execution", "Em Execução"),
                ("concluded", "Concluída"),
                ("rejected", "Rejeitada"),
            ],
            EntityKind::Proposal => &[
                ("draft", "Rascunho"),
                ("submitted", "Enviado"),
                ("under_review", "Em Análise"),
                ("approved", "Aprovado"),
                ("rejected", "Rejeitado"),
            ],
            EntityKind::Accountability => &[
                ("pending", "Em Análise"),
                ("approved", "Aprovada"),
                ("rejected", "Rejeitada"),
            ],
        }
    }

    /// Conceptual lifecycle stage of a raw code.
    ///
    /// Informational only; stored codes are never checked against a
    /// transition graph.
    pub fn stage(&self, raw: &str) -> StatusStage {
        match (self, raw) {
            (EntityKind::Amendment, "pending") => StatusStage::Open,
            (EntityKind::Amendment, "linked") => StatusStage::InProgress,
            (EntityKind::Amendment, "paid") => StatusStage::Completed,

            (EntityKind::CallForProposals, "open") => StatusStage::Open,
            (EntityKind::CallForProposals, "closed" | "judging") => StatusStage::UnderReview,
            (EntityKind::CallForProposals, "finished") => StatusStage::Completed,

            (EntityKind::Partnership, "proposal") => StatusStage::Open,
            (EntityKind::Partnership, "analysis") => StatusStage::UnderReview,
            (EntityKind::Partnership, "approved") => StatusStage::Approved,
            (EntityKind::Partnership, "active" | "execution") => StatusStage::InProgress,
            (EntityKind::Partnership, "concluded") => StatusStage::Completed,
            (EntityKind::Partnership, "rejected") => StatusStage::Rejected,

            (EntityKind::Proposal, "draft") => StatusStage::Open,
            (EntityKind::Proposal, "submitted" | "under_review") => StatusStage::UnderReview,
            (EntityKind::Proposal, "approved") => StatusStage::Approved,
            (EntityKind::Proposal, "rejected") => StatusStage::Rejected,

            (EntityKind::Accountability, "pending") => StatusStage::UnderReview,
            (EntityKind::Accountability, "approved") => StatusStage::Approved,
            (EntityKind::Accountability, "rejected") => StatusStage::Rejected,

            _ => StatusStage::Unknown,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "amendment" => Ok(EntityKind::Amendment),
            "call_for_proposals" | "chamamento" => Ok(EntityKind::CallForProposals),
            "partnership" => Ok(EntityKind::Partnership),
            "proposal" | "pmis" => Ok(EntityKind::Proposal),
            "accountability" => Ok(EntityKind::Accountability),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusStage {
    Open,
    UnderReview,
    Approved,
    InProgress,
    Completed,
    Rejected,
    Unknown,
}
