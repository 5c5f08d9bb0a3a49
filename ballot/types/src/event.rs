use {
    crate::{Addr, Binary, ProposalId, Timestamp},
    serde::{Deserialize, Serialize},
};

/// A state transition observed while processing an accepted call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Enrolled {
        account: Addr,
    },
    ProposalCreated {
        id: ProposalId,
        creator: Addr,
        title: Binary,
        voting_end: Timestamp,
    },
    VoteCast {
        id: ProposalId,
        voter: Addr,
        option: Binary,
    },
    VotingClosed {
        id: ProposalId,
        closer: Addr,
    },
    ResultsPublished {
        id: ProposalId,
        total_votes: u64,
    },
}

impl Event {
    /// The proposal the event concerns, if any.
    pub fn proposal_id(&self) -> Option<ProposalId> {
        match self {
            Event::Enrolled { .. } => None,
            Event::ProposalCreated { id, .. }
            | Event::VoteCast { id, .. }
            | Event::VotingClosed { id, .. }
            | Event::ResultsPublished { id, .. } => Some(*id),
        }
    }
}

// ----------------------------------- tests -----------------------------------
