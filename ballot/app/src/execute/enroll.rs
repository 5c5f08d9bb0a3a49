use {
    crate::{error::CallResult, execute::Context, ENROLLMENT},
    ballot_types::{Event, Storage},
};

/// Provision the caller's private namespace. Enrolling twice is accepted and
/// changes nothing.
pub(crate) fn do_enroll(local: &mut dyn Storage, ctx: Context) -> CallResult<Vec<Event>> {
    if ENROLLMENT.exists(local) {
        return Ok(vec![]);
    }

    ENROLLMENT.save(local, &ctx.now)?;

    Ok(vec![Event::Enrolled {
        account: ctx.caller,
    }])
}
