mod cast_vote;
mod close_voting;
mod create_proposal;
mod enroll;
mod get_results;

pub(crate) use {
    cast_vote::do_cast_vote, close_voting::do_close_voting, create_proposal::do_create_proposal,
    enroll::do_enroll, get_results::do_get_results,
};

use ballot_types::{Addr, Timestamp};

/// What a handler knows about the call besides its arguments.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context {
    pub caller: Addr,
    /// Ledger time, read once per call.
    pub now: Timestamp,
}
