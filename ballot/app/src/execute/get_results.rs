use {
    crate::{
        current_proposal,
        error::{ensure, reject, CallResult},
        execute::Context,
        PROPOSALS,
    },
    ballot_types::{Event, Storage},
};

/// Mark the current proposal's results as visible once its window has ended.
///
/// The tally itself isn't returned. Readers get it from committed state.
pub(crate) fn do_get_results(global: &mut dyn Storage, ctx: Context) -> CallResult<Vec<Event>> {
    let Some(mut proposal) = current_proposal(global)? else {
        reject!(VotingNotYetEnded);
    };

    ensure!(ctx.now > proposal.voting_end, VotingNotYetEnded);

    if !proposal.voting_closed {
        proposal.voting_closed = true;
        PROPOSALS.save(global, proposal.id, &proposal)?;
    }

    Ok(vec![Event::ResultsPublished {
        id: proposal.id,
        total_votes: proposal.total_votes,
    }])
}
