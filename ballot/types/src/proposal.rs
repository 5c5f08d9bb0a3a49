use {
    crate::{Addr, Binary, Timestamp},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Proposals are numbered from 1, in order of creation.
pub type ProposalId = u64;

#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq,
)]
#[serde(rename_all = "snake_case")]
#[borsh(use_discriminant = true)]
pub enum ProposalStatus {
    Active = 0,
    Closed = 1,
}

#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub id: ProposalId,
    /// The only account allowed to close voting.
    pub creator: Addr,
    pub title: Binary,
    pub created_at: Timestamp,
    pub voting_end: Timestamp,
    pub status: ProposalStatus,
    pub total_votes: u64,
    /// Number of distinct labels in the tally.
    pub option_count: u32,
    /// Quorum as configured when the proposal was created.
    pub min_votes: u64,
    /// Set once results have been requested after the window ended.
    pub voting_closed: bool,
}

impl Proposal {
    pub fn is_active(&self) -> bool {
        self.status == ProposalStatus::Active
    }
}

/// A vote as recorded in the voter's private namespace.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ballot {
    pub option: Binary,
    pub cast_at: Timestamp,
}

/// An account's standing with respect to one proposal.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct VoterRecord {
    pub enrolled: bool,
    pub has_voted: bool,
}

/// The read-side summary of a proposal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Results {
    pub proposal: Proposal,
    pub tally: BTreeMap<Binary, u64>,
    pub total_votes: u64,
    pub quorum_reached: bool,
    /// The label with the strictly highest count. `None` on a tie or when no
    /// vote was cast.
    pub winner: Option<Binary>,
}

impl Results {
    pub fn new(proposal: Proposal, tally: BTreeMap<Binary, u64>) -> Self {
        let mut winner: Option<(&Binary, u64)> = None;
        let mut tied = false;

        for (label, count) in &tally {
            match winner {
                Some((_, best)) if *count < best => {},
                Some((_, best)) if *count == best => tied = true,
                _ => {
                    winner = Some((label, *count));
                    tied = false;
                },
            }
        }

        let winner = if tied {
            None
        } else {
            winner.map(|(label, _)| label.clone())
        };

        Self {
            total_votes: proposal.total_votes,
            quorum_reached: proposal.total_votes >= proposal.min_votes,
            proposal,
            tally,
            winner,
        }
    }
}

// ----------------------------------- tests -----------------------------------
