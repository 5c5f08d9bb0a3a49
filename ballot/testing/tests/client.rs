use {
    ballot_app::{Engine, MockClock},
    ballot_client::{
        Action, ClientError, InputValidator, RateLimitConfig, RateLimiter, Submitter,
        ValidationConfig,
    },
    ballot_testing::RecordingObserver,
    ballot_types::{
        Addr, Binary, Config, Duration, MemStorage, RejectedCallKind, ResultExt, Timestamp,
    },
};

fn setup() -> (Submitter<MemStorage, MockClock, RecordingObserver>, MockClock, RecordingObserver) {
    let clock = MockClock::new(Timestamp::ZERO);
    let observer = RecordingObserver::new();

    let mut engine = Engine::new(MemStorage::new(), clock.clone(), observer.clone());
    engine.do_init(Config::default()).should_succeed();

    let submitter = Submitter::new(
        engine,
        InputValidator::new(ValidationConfig::default()),
        RateLimiter::new(RateLimitConfig::default()),
    );

    (submitter, clock, observer)
}

#[test]
fn refused_submissions_never_reach_the_engine() {
    let (mut submitter, clock, observer) = setup();
    let alice = Addr::derive("alice");

    submitter.enroll(alice).should_succeed();
    submitter.create_proposal(alice, "Upgrade").should_succeed();
    assert_eq!(observer.len(), 2);

    submitter
        .create_proposal(alice, "   ")
        .should_fail_with_error("title cannot be empty");
    submitter
        .cast_vote(alice, "perhaps")
        .should_fail_with_error("must be one of: yes, no, abstain");
    assert_eq!(observer.len(), 2);

    clock.advance(Duration::from_seconds(1));
    submitter.cast_vote(alice, "Yes").should_succeed();

    // A second vote within the hour is stopped by the limiter, not the engine.
    clock.advance(Duration::from_seconds(1));
    let err = submitter.cast_vote(alice, "no").should_fail();
    assert_eq!(err, ClientError::RateLimited {
        account: alice,
        action: Action::Vote,
        reset_at: Timestamp::from_seconds(3_601),
    });
    assert_eq!(observer.len(), 3);

    // After the hour, the engine itself refuses the duplicate.
    clock.set(Timestamp::from_seconds(3_602));
    submitter
        .cast_vote(alice, "no")
        .should_succeed()
        .should_fail_with_error(RejectedCallKind::DuplicateVote);
    assert_eq!(observer.len(), 4);

    let tally = submitter.engine().query_tally(1).unwrap();
    assert_eq!(tally.get(&Binary::from("yes")), Some(&1));
}

#[test]
fn engine_errors_pass_through() {
    let clock = MockClock::new(Timestamp::ZERO);
    let engine = Engine::new(MemStorage::new(), clock, RecordingObserver::new());
    let mut submitter = Submitter::new(engine, InputValidator::default(), RateLimiter::default());

    submitter
        .enroll(Addr::mock(1))
        .should_fail_with_error("engine is not initialized");
}
