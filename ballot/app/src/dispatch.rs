use {
    crate::{
        error::{ensure, reject, CallResult},
        execute::{
            do_cast_vote, do_close_voting, do_create_proposal, do_enroll, do_get_results, Context,
        },
    },
    ballot_types::{Call, CompletionType, Event, Op, Storage},
    std::str::FromStr,
};

/// Route a call to exactly one handler.
///
/// `global` and `local` are staged views; the latter is the caller's own
/// private namespace.
pub(crate) fn dispatch(
    global: &mut dyn Storage,
    local: &mut dyn Storage,
    ctx: Context,
    call: &Call,
) -> CallResult<Vec<Event>> {
    if call.completion == CompletionType::Enrollment {
        return do_enroll(local, ctx);
    }

    let Some(op) = call.op.as_deref().and_then(|tag| Op::from_str(tag).ok()) else {
        reject!(MalformedArguments);
    };

    ensure!(call.arg_count() == op.arity(), MalformedArguments);

    match (op, call.args.as_slice()) {
        (Op::CreateProposal, [title]) => do_create_proposal(global, ctx, title),
        (Op::CastVote, [option]) => do_cast_vote(global, local, ctx, option),
        (Op::CloseVoting, []) => do_close_voting(global, ctx),
        (Op::GetResults, []) => do_get_results(global, ctx),
        _ => reject!(MalformedArguments),
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{error::CallError, CONFIG},
        ballot_types::{Addr, Binary, Config, MemStorage, RejectedCallKind, Timestamp},
        test_case::test_case,
    };

    fn run(call: Call) -> Result<Vec<Event>, RejectedCallKind> {
        let mut global = MemStorage::new();
        let mut local = MemStorage::new();
        CONFIG.save(&mut global, &Config::default()).unwrap();

        let ctx = Context {
            caller: call.caller,
            now: Timestamp::ZERO,
        };

        match dispatch(&mut global, &mut local, ctx, &call) {
            Ok(events) => Ok(events),
            Err(CallError::Rejected(kind)) => Err(kind),
            Err(CallError::Std(err)) => panic!("unexpected storage error: {err}"),
        }
    }

    #[test_case(None, vec![]; "no tag")]
    #[test_case(Some("delete_proposal"), vec![]; "unknown tag")]
    #[test_case(Some("create_proposal"), vec![]; "create without title")]
    #[test_case(Some("create_proposal"), vec!["a", "b"]; "create with extra argument")]
    #[test_case(Some("vote"), vec![]; "vote without option")]
    #[test_case(Some("close_voting"), vec!["now"]; "close with argument")]
    #[test_case(Some("get_results"), vec!["x"]; "results with argument")]
    fn malformed_calls_are_rejected(op: Option<&str>, args: Vec<&str>) {
        let call = Call {
            completion: CompletionType::Normal,
            op: op.map(ToString::to_string),
            args: args.into_iter().map(Binary::from).collect(),
            caller: Addr::mock(1),
        };

        assert_eq!(run(call), Err(RejectedCallKind::MalformedArguments));
    }

    #[test]
    fn enrollment_ignores_tag_and_arguments() {
        let call = Call {
            completion: CompletionType::Enrollment,
            op: Some("nonsense".to_string()),
            args: vec![Binary::from("x")],
            caller: Addr::mock(1),
        };

        assert_eq!(run(call), Ok(vec![Event::Enrolled {
            account: Addr::mock(1),
        }]));
    }

    #[test]
    fn create_proposal_is_routed() {
        let events = run(Call::create_proposal(Addr::mock(1), "Upgrade")).unwrap();

        assert!(matches!(
            events.as_slice(),
            [Event::ProposalCreated { id: 1, title, .. }] if *title == Binary::from("Upgrade")
        ));
    }
}
