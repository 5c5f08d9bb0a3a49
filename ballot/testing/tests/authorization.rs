use {
    ballot_testing::TestBuilder,
    ballot_types::{ProposalStatus, RejectedCallKind, ResultExt},
};

#[test]
fn only_creator_can_close() {
    let (mut suite, accounts) = TestBuilder::new()
        .add_account("alice")
        .add_account("bob")
        .add_account("carol")
        .build();

    suite.enroll(&accounts["bob"]).should_succeed();
    suite.create_proposal(&accounts["alice"], "Upgrade").should_succeed();

    // Enrolled or not, nobody else may close.
    for name in ["bob", "carol"] {
        suite
            .close_voting(&accounts[name])
            .should_fail_with_error(RejectedCallKind::UnauthorizedSender);

        assert_eq!(
            suite.query_proposal(1).unwrap().unwrap().status,
            ProposalStatus::Active
        );
    }

    suite.close_voting(&accounts["alice"]).should_succeed();
}

#[test]
fn closing_twice() {
    let (mut suite, accounts) = TestBuilder::new()
        .add_account("alice")
        .add_account("bob")
        .build();

    suite.create_proposal(&accounts["alice"], "Upgrade").should_succeed();
    suite.close_voting(&accounts["alice"]).should_succeed();

    // Still restricted to the creator...
    suite
        .close_voting(&accounts["bob"])
        .should_fail_with_error(RejectedCallKind::UnauthorizedSender);

    // ...for whom it's accepted, but changes nothing.
    let before = suite.snapshot();
    suite.set_time_seconds(10);
    suite
        .close_voting(&accounts["alice"])
        .should_succeed_and_equal(vec![]);

    assert_eq!(
        suite.query_proposal(1).unwrap().unwrap().status,
        ProposalStatus::Closed
    );
    // Apart from the time of the last accepted call.
    assert_eq!(suite.snapshot().len(), before.len());
}

#[test]
fn results_can_be_requested_by_anyone() {
    let (mut suite, accounts) = TestBuilder::new()
        .add_account("alice")
        .add_account("stranger")
        .build();

    suite.create_proposal(&accounts["alice"], "Upgrade").should_succeed();

    suite.set_time_seconds(86_401);
    suite.get_results(&accounts["stranger"]).should_succeed();

    assert!(suite.query_proposal(1).unwrap().unwrap().voting_closed);
}
