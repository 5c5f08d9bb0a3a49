use {
    crate::{
        current_proposal_id, has_voted, AppError, AppResult, Engine, StorageProvider, CONFIG,
        ENROLLMENT, PROPOSALS, TALLIES,
    },
    ballot_types::{
        Addr, Binary, Buffer, Config, Order, Proposal, ProposalId, Results, StdResult, Storage,
        VoterRecord,
    },
    std::collections::BTreeMap,
};

// Queries read the committed store through an empty buffer, which stages
// nothing and is dropped afterwards.
impl<DB, CL, OB> Engine<DB, CL, OB>
where
    DB: Storage,
{
    pub fn query_config(&self) -> AppResult<Config> {
        let global = StorageProvider::global(Buffer::new(self.db()));

        CONFIG.may_load(&global)?.ok_or(AppError::NotInitialized)
    }

    pub fn query_current_proposal_id(&self) -> AppResult<Option<ProposalId>> {
        let global = StorageProvider::global(Buffer::new(self.db()));

        Ok(current_proposal_id(&global)?)
    }

    pub fn query_proposal(&self, id: ProposalId) -> AppResult<Option<Proposal>> {
        let global = StorageProvider::global(Buffer::new(self.db()));

        Ok(PROPOSALS.may_load(&global, id)?)
    }

    /// Vote counts of a proposal, by option label. Empty if the proposal
    /// doesn't exist or nobody voted.
    pub fn query_tally(&self, id: ProposalId) -> AppResult<BTreeMap<Binary, u64>> {
        let global = StorageProvider::global(Buffer::new(self.db()));

        let tally = TALLIES
            .prefix(id)
            .range(&global, Order::Ascending)
            .map(|res| res.map(|(label, count)| (Binary::from(label), count)))
            .collect::<StdResult<_>>()?;

        Ok(tally)
    }

    /// An account's standing with respect to a proposal, under the configured
    /// vote scope.
    pub fn query_voter(&self, account: Addr, id: ProposalId) -> AppResult<VoterRecord> {
        let cfg = self.query_config()?;
        let local = StorageProvider::local(Buffer::new(self.db()), &account);

        Ok(VoterRecord {
            enrolled: ENROLLMENT.exists(&local),
            has_voted: has_voted(&local, cfg.vote_scope, id),
        })
    }

    pub fn query_results(&self, id: ProposalId) -> AppResult<Option<Results>> {
        let Some(proposal) = self.query_proposal(id)? else {
            return Ok(None);
        };

        let tally = self.query_tally(id)?;

        Ok(Some(Results::new(proposal, tally)))
    }
}
