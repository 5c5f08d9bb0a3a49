use {
    crate::{
        current_proposal,
        error::{ensure, reject, CallResult},
        execute::Context,
        PROPOSALS,
    },
    ballot_types::{Event, ProposalStatus, Storage},
};

/// End voting on the current proposal. Only its creator may do this.
pub(crate) fn do_close_voting(global: &mut dyn Storage, ctx: Context) -> CallResult<Vec<Event>> {
    // Without a proposal there's no creator, so nobody is authorized.
    let Some(mut proposal) = current_proposal(global)? else {
        reject!(UnauthorizedSender);
    };

    ensure!(ctx.caller == proposal.creator, UnauthorizedSender);

    if !proposal.is_active() {
        return Ok(vec![]);
    }

    proposal.status = ProposalStatus::Closed;
    PROPOSALS.save(global, proposal.id, &proposal)?;

    Ok(vec![Event::VotingClosed {
        id: proposal.id,
        closer: ctx.caller,
    }])
}
