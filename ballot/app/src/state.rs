use {
    ballot_storage::{Counter, Item, Map},
    ballot_types::{
        Ballot, Config, Proposal, ProposalId, StdResult, Storage, Timestamp, VoteScope,
    },
};

// ---------------------------------- global -----------------------------------

/// Engine parameters, saved once at initialization.
pub const CONFIG: Item<Config> = Item::new("config");

/// Ledger time of the last accepted call.
pub const LAST_CALL_TIME: Item<Timestamp> = Item::new("last_call_time");

/// The id the next proposal will be given.
pub const NEXT_PROPOSAL_ID: Counter<ProposalId> = Counter::new("next_proposal_id", 1, 1);

/// Every proposal ever created: id => proposal
pub const PROPOSALS: Map<ProposalId, Proposal> = Map::new("proposal");

/// Vote counts: (id, option label) => count
pub const TALLIES: Map<(ProposalId, &[u8]), u64> = Map::new("tally");

// ----------------------------------- local -----------------------------------

/// Ledger time at which the account enrolled. Present iff the account is
/// enrolled.
pub const ENROLLMENT: Item<Timestamp> = Item::new("enrolled_at");

/// The account's ballots: id => ballot
pub const BALLOTS: Map<ProposalId, Ballot> = Map::new("ballot");

/// Load the id of the most recently created proposal, the only one calls can
/// act on. `None` if no proposal has been created yet.
pub fn current_proposal_id(global: &dyn Storage) -> StdResult<Option<ProposalId>> {
    let next = NEXT_PROPOSAL_ID.current(global)?;

    Ok(next.checked_sub(1).filter(|id| *id > 0))
}

/// Load the most recently created proposal.
pub fn current_proposal(global: &dyn Storage) -> StdResult<Option<Proposal>> {
    match current_proposal_id(global)? {
        Some(id) => PROPOSALS.may_load(global, id),
        None => Ok(None),
    }
}

/// Whether the account owning `local` counts as having voted in proposal `id`.
pub fn has_voted(local: &dyn Storage, scope: VoteScope, id: ProposalId) -> bool {
    match scope {
        VoteScope::PerProposal => BALLOTS.has(local, id),
        VoteScope::Lifetime => !BALLOTS.is_empty(local),
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        ballot_types::{Binary, MemStorage},
        test_case::test_case,
    };

    #[test]
    fn current_proposal_follows_counter() {
        let mut storage = MemStorage::new();
        assert_eq!(current_proposal_id(&storage).unwrap(), None);

        let (id, _) = NEXT_PROPOSAL_ID.increment(&mut storage).unwrap();
        assert_eq!(id, 1);
        assert_eq!(current_proposal_id(&storage).unwrap(), Some(1));

        NEXT_PROPOSAL_ID.increment(&mut storage).unwrap();
        assert_eq!(current_proposal_id(&storage).unwrap(), Some(2));
    }

    #[test_case(VoteScope::PerProposal, 1, true; "per proposal, same proposal")]
    #[test_case(VoteScope::PerProposal, 2, false; "per proposal, later proposal")]
    #[test_case(VoteScope::Lifetime, 1, true; "lifetime, same proposal")]
    #[test_case(VoteScope::Lifetime, 2, true; "lifetime, later proposal")]
    fn voting_scope(scope: VoteScope, id: ProposalId, expect: bool) {
        let mut local = MemStorage::new();
        assert!(!has_voted(&local, scope, 1));

        BALLOTS
            .save(&mut local, 1, &Ballot {
                option: Binary::from("yes"),
                cast_at: Timestamp::ZERO,
            })
            .unwrap();

        assert_eq!(has_voted(&local, scope, id), expect);
    }
}
