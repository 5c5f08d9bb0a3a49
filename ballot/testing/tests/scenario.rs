use {
    ballot_testing::TestBuilder,
    ballot_types::{Binary, Event, ProposalStatus, RejectedCallKind, ResultExt, Timestamp},
    std::collections::BTreeMap,
};

#[test]
fn full_lifecycle() {
    let (mut suite, accounts) = TestBuilder::new()
        .add_account("alice")
        .add_account("bob")
        .add_account("carol")
        .build();

    let alice = &accounts["alice"];
    let bob = &accounts["bob"];
    let carol = &accounts["carol"];

    suite.enroll(alice).should_succeed();
    suite.enroll(carol).should_succeed();

    // Alice creates a proposal at clock = 0.
    suite
        .create_proposal(alice, "Upgrade")
        .should_succeed_and_equal(vec![Event::ProposalCreated {
            id: 1,
            creator: alice.address,
            title: Binary::from("Upgrade"),
            voting_end: Timestamp::from_seconds(86_400),
        }]);

    let proposal = suite.query_proposal(1).unwrap().unwrap();
    assert_eq!(proposal.voting_end, Timestamp::from_seconds(86_400));
    assert_eq!(proposal.status, ProposalStatus::Active);
    assert!(suite.query_tally(1).unwrap().is_empty());

    // Alice votes at clock = 10.
    suite.set_time_seconds(10);
    suite.cast_vote(alice, "yes").should_succeed();

    assert_eq!(
        suite.query_tally(1).unwrap(),
        BTreeMap::from([("yes".to_string(), 1)])
    );
    assert_eq!(suite.query_proposal(1).unwrap().unwrap().total_votes, 1);
    assert!(suite.query_voter(alice.address, 1).unwrap().has_voted);

    // She tries again at clock = 20.
    suite.set_time_seconds(20);
    suite
        .cast_vote(alice, "yes")
        .should_fail_with_error(RejectedCallKind::DuplicateVote);

    assert_eq!(
        suite.query_tally(1).unwrap(),
        BTreeMap::from([("yes".to_string(), 1)])
    );

    // Bob never enrolled.
    suite.set_time_seconds(30);
    suite
        .cast_vote(bob, "no")
        .should_fail_with_error(RejectedCallKind::MissingEnrollment);

    // Only the creator may close.
    suite.set_time_seconds(40);
    suite
        .close_voting(bob)
        .should_fail_with_error(RejectedCallKind::UnauthorizedSender);
    suite
        .close_voting(alice)
        .should_succeed_and_equal(vec![Event::VotingClosed {
            id: 1,
            closer: alice.address,
        }]);

    assert_eq!(
        suite.query_proposal(1).unwrap().unwrap().status,
        ProposalStatus::Closed
    );

    // Carol is enrolled but too late.
    suite.set_time_seconds(50);
    suite
        .cast_vote(carol, "yes")
        .should_fail_with_error(RejectedCallKind::VotingInactive);

    let proposal = suite.query_proposal(1).unwrap().unwrap();
    assert_eq!(proposal.total_votes, 1);
    assert!(!proposal.voting_closed);
}

#[test]
fn results_after_the_window() {
    let (mut suite, accounts) = TestBuilder::new()
        .set_min_votes(2)
        .add_account("alice")
        .add_account("bob")
        .add_account("carol")
        .build();

    for name in ["alice", "bob", "carol"] {
        suite.enroll(&accounts[name]).should_succeed();
    }

    suite.create_proposal(&accounts["alice"], "Upgrade").should_succeed();

    suite.set_time_seconds(1);
    suite.cast_vote(&accounts["alice"], "yes").should_succeed();
    suite.cast_vote(&accounts["bob"], "yes").should_succeed();
    suite.cast_vote(&accounts["carol"], "no").should_succeed();

    // Not before the window has ended, and not at its last instant either.
    suite
        .get_results(&accounts["bob"])
        .should_fail_with_error(RejectedCallKind::VotingNotYetEnded);
    suite.set_time_seconds(86_400);
    suite
        .get_results(&accounts["bob"])
        .should_fail_with_error(RejectedCallKind::VotingNotYetEnded);

    suite.set_time_seconds(86_401);
    suite
        .get_results(&accounts["bob"])
        .should_succeed_and_equal(vec![Event::ResultsPublished {
            id: 1,
            total_votes: 3,
        }]);

    // Asking again is fine.
    suite.get_results(&accounts["carol"]).should_succeed();

    let results = suite.query_results(1).unwrap().unwrap();
    assert!(results.proposal.voting_closed);
    assert_eq!(results.total_votes, 3);
    assert!(results.quorum_reached);
    assert_eq!(results.winner, Some(Binary::from("yes")));
    assert_eq!(results.tally.values().sum::<u64>(), results.total_votes);
}

#[test]
fn proposals_are_kept_by_id() {
    let (mut suite, accounts) = TestBuilder::new().add_account("alice").build();
    let alice = &accounts["alice"];

    suite.enroll(alice).should_succeed();
    suite.create_proposal(alice, "First").should_succeed();
    suite.cast_vote(alice, "yes").should_succeed();
    suite.close_voting(alice).should_succeed();

    suite.set_time_seconds(100);
    suite.create_proposal(alice, "Second").should_succeed();

    assert_eq!(suite.query_current_proposal_id().unwrap(), Some(2));

    // The first proposal is untouched by the second one.
    let first = suite.query_proposal(1).unwrap().unwrap();
    assert_eq!(first.title, Binary::from("First"));
    assert_eq!(first.status, ProposalStatus::Closed);
    assert_eq!(first.total_votes, 1);
    assert_eq!(suite.query_tally(1).unwrap().len(), 1);

    let second = suite.query_proposal(2).unwrap().unwrap();
    assert_eq!(second.status, ProposalStatus::Active);
    assert_eq!(second.created_at, Timestamp::from_seconds(100));
    assert!(suite.query_tally(2).unwrap().is_empty());

    assert_eq!(suite.query_proposal(3).unwrap(), None);
    assert_eq!(suite.query_results(3).unwrap(), None);
}
