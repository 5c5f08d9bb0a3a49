use {
    ballot_app::TraceOption,
    ballot_testing::TestBuilder,
    ballot_types::{Call, Duration, Event, ProposalStatus, RejectedCallKind, VoteScope},
    proptest::prelude::*,
    std::collections::{BTreeMap, BTreeSet},
};

const NAMES: [&str; 4] = ["alice", "bob", "carol", "dave"];
const OPTIONS: [&str; 4] = ["yes", "no", "abstain", "maybe"];

#[derive(Debug, Clone)]
enum Action {
    Enroll,
    Create,
    Vote(usize),
    Close,
    Results,
    Garbage,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        2 => Just(Action::Enroll),
        1 => Just(Action::Create),
        5 => (0..OPTIONS.len()).prop_map(Action::Vote),
        1 => Just(Action::Close),
        1 => Just(Action::Results),
        1 => Just(Action::Garbage),
    ]
}

fn steps() -> impl Strategy<Value = Vec<(usize, Action, u128)>> {
    prop::collection::vec((0..NAMES.len(), action(), 0..7_200_u128), 1..80)
}

fn run(scope: VoteScope, steps: Vec<(usize, Action, u128)>) -> Result<(), TestCaseError> {
    let mut builder = TestBuilder::new()
        .set_tracing_level(None)
        .set_trace_option(TraceOption::MUTE)
        .set_voting_period(Duration::from_hours(3))
        .set_max_options(3)
        .set_vote_scope(scope);
    for name in NAMES {
        builder = builder.add_account(name);
    }
    let (mut suite, accounts) = builder.build();

    let mut statuses = BTreeMap::new();
    let mut votes = BTreeSet::new();
    let mut voters_ever = BTreeSet::new();

    for (who, action, delay) in steps {
        let caller = accounts[NAMES[who]].address;
        suite.advance(Duration::from_seconds(delay));

        // Votes past the window fail on the window, whoever casts them.
        let window_expired = matches!(action, Action::Vote(_))
            && suite
                .query_current_proposal_id()
                .unwrap()
                .and_then(|id| suite.query_proposal(id).unwrap())
                .is_some_and(|proposal| suite.now() >= proposal.voting_end);

        let call = match action {
            Action::Enroll => Call::enroll(caller),
            Action::Create => Call::create_proposal(caller, "Upgrade"),
            Action::Vote(option) => Call::cast_vote(caller, OPTIONS[option]),
            Action::Close => Call::close_voting(caller),
            Action::Results => Call::get_results(caller),
            Action::Garbage => Call::new(caller, "vote", Vec::<String>::new()),
        };

        let before = suite.snapshot();
        let outcome = suite.call(call);

        if window_expired {
            prop_assert_eq!(outcome.reason, Some(RejectedCallKind::ExpiredVotingWindow));
        }

        if !outcome.accepted {
            prop_assert_eq!(suite.snapshot(), before);
            prop_assert!(outcome.events.is_empty());
        }

        for event in &outcome.events {
            if let Event::VoteCast { id, voter, .. } = event {
                // At most one accepted vote per account and proposal.
                prop_assert!(votes.insert((*id, *voter)));

                if scope == VoteScope::Lifetime {
                    prop_assert!(voters_ever.insert(*voter));
                }
            }
        }

        let Some(current) = suite.query_current_proposal_id().unwrap() else {
            continue;
        };

        for id in 1..=current {
            let proposal = suite.query_proposal(id).unwrap().unwrap();
            let tally = suite.query_tally(id).unwrap();

            prop_assert_eq!(tally.values().sum::<u64>(), proposal.total_votes);
            prop_assert_eq!(tally.len() as u32, proposal.option_count);
            prop_assert!(proposal.option_count <= 3);

            // Closed is final.
            if statuses.get(&id) == Some(&ProposalStatus::Closed) {
                prop_assert_eq!(proposal.status, ProposalStatus::Closed);
            }
            statuses.insert(id, proposal.status);
        }
    }

    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_per_proposal(steps in steps()) {
        run(VoteScope::PerProposal, steps)?;
    }

    #[test]
    fn invariants_hold_for_lifetime(steps in steps()) {
        run(VoteScope::Lifetime, steps)?;
    }
}
