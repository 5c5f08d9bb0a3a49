use {
    crate::{
        current_proposal,
        error::{ensure, reject, CallResult},
        execute::Context,
        has_voted, BALLOTS, CONFIG, ENROLLMENT, PROPOSALS, TALLIES,
    },
    ballot_types::{Ballot, Binary, Event, Storage},
};

pub(crate) fn do_cast_vote(
    global: &mut dyn Storage,
    local: &mut dyn Storage,
    ctx: Context,
    option: &Binary,
) -> CallResult<Vec<Event>> {
    let Some(mut proposal) = current_proposal(global)? else {
        reject!(VotingInactive);
    };

    // An expired window is reported no matter who is asking.
    ensure!(ctx.now < proposal.voting_end, ExpiredVotingWindow);
    ensure!(proposal.is_active(), VotingInactive);
    ensure!(ENROLLMENT.exists(local), MissingEnrollment);

    let cfg = CONFIG.load(global)?;

    ensure!(!has_voted(local, cfg.vote_scope, proposal.id), DuplicateVote);

    // The bound only applies to labels the tally hasn't seen yet.
    let label: &[u8] = option;
    let count = TALLIES.may_load(global, (proposal.id, label))?;
    if count.is_none() {
        ensure!(proposal.option_count < cfg.max_options, OptionLimitReached);
        proposal.option_count += 1;
    }

    // Every check has passed. Stage the writes.
    TALLIES.save(global, (proposal.id, label), &(count.unwrap_or(0) + 1))?;

    proposal.total_votes += 1;
    PROPOSALS.save(global, proposal.id, &proposal)?;

    BALLOTS.save(local, proposal.id, &Ballot {
        option: option.clone(),
        cast_at: ctx.now,
    })?;

    Ok(vec![Event::VoteCast {
        id: proposal.id,
        voter: ctx.caller,
        option: option.clone(),
    }])
}
