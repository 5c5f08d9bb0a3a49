use {
    crate::{error::CallResult, execute::Context, CONFIG, NEXT_PROPOSAL_ID, PROPOSALS},
    ballot_types::{Binary, Event, Proposal, ProposalStatus, Storage},
};

/// Open a new proposal in a fresh slot. It becomes the current proposal,
/// superseding the previous one even if that one is still active.
pub(crate) fn do_create_proposal(
    global: &mut dyn Storage,
    ctx: Context,
    title: &Binary,
) -> CallResult<Vec<Event>> {
    let cfg = CONFIG.load(global)?;
    let (id, _) = NEXT_PROPOSAL_ID.increment(global)?;
    let voting_end = ctx.now.checked_add(cfg.voting_period)?;

    PROPOSALS.save(global, id, &Proposal {
        id,
        creator: ctx.caller,
        title: title.clone(),
        created_at: ctx.now,
        voting_end,
        status: ProposalStatus::Active,
        total_votes: 0,
        option_count: 0,
        min_votes: cfg.min_votes,
        voting_closed: false,
    })?;

    Ok(vec![Event::ProposalCreated {
        id,
        creator: ctx.caller,
        title: title.clone(),
        voting_end,
    }])
}
