use {
    crate::{config::Config, prompt::print_json_pretty},
    anyhow::{bail, Context},
    ballot_app::{Engine, MockClock, NullObserver},
    ballot_client::{ClientError, InputValidator, RateLimiter, Submitter},
    ballot_types::{
        Addr, Call, CallOutcome, CompletionType, JsonDeExt, MemStorage, Op, Results, Timestamp,
    },
    clap::Parser,
    serde::{Deserialize, Serialize},
    std::{fs, path::PathBuf, str::FromStr},
};

#[derive(Parser)]
pub struct RunCmd {
    /// Path to the JSON script
    script: PathBuf,

    /// Submit through input validation and rate limiting, instead of calling
    /// the engine directly
    #[arg(long)]
    checked: bool,
}

/// One call in a script.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Ledger time of the call, in seconds.
    pub time: u64,
    /// Name of the caller. The address is derived from it.
    pub caller: String,
    #[serde(default)]
    pub enroll: bool,
    #[serde(default)]
    pub op: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Step {
    pub fn caller_addr(&self) -> Addr {
        Addr::derive(&self.caller)
    }

    pub fn to_call(&self) -> Call {
        Call {
            completion: if self.enroll {
                CompletionType::Enrollment
            } else {
                CompletionType::Normal
            },
            op: self.op.clone(),
            args: self.args.iter().map(|arg| arg.as_str().into()).collect(),
            caller: self.caller_addr(),
        }
    }
}

#[derive(Serialize, Debug)]
struct StepReport<'a> {
    step: usize,
    time: u64,
    caller: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<CallOutcome>,
    /// Set if the submitter refused the call before it reached the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    refused: Option<String>,
}

#[derive(Serialize, Debug)]
struct Summary {
    current_proposal: Option<u64>,
    results: Vec<Results>,
}

impl RunCmd {
    pub fn run(self, cfg: Config) -> anyhow::Result<()> {
        let script = fs::read(&self.script)
            .with_context(|| format!("failed to read script {}", self.script.display()))?;
        let steps = parse_script(&script)?;

        let validator = InputValidator::new(cfg.validation);
        validator.validate_voting_period(cfg.engine.voting_period)?;

        let clock = MockClock::new(Timestamp::ZERO);
        let mut engine = Engine::new(MemStorage::new(), clock.clone(), NullObserver);
        engine.do_init(cfg.engine)?;

        let mut submitter = Submitter::new(engine, validator, RateLimiter::new(cfg.rate_limits));

        for (index, step) in steps.iter().enumerate() {
            clock.set(Timestamp::from_seconds(step.time.into()));

            let result = if self.checked {
                submit_checked(&mut submitter, step)
            } else {
                submitter
                    .engine_mut()
                    .do_call(step.to_call())
                    .map_err(ClientError::from)
            };

            let (outcome, refused) = match result {
                Ok(outcome) => (Some(outcome), None),
                Err(ClientError::App(err)) => return Err(err.into()),
                Err(err) => (None, Some(err.to_string())),
            };

            print_json_pretty(&StepReport {
                step: index,
                time: step.time,
                caller: &step.caller,
                outcome,
                refused,
            })?;
        }

        let engine = submitter.into_engine();
        let current_proposal = engine.query_current_proposal_id()?;

        let mut results = Vec::new();
        for id in 1..=current_proposal.unwrap_or(0) {
            if let Some(res) = engine.query_results(id)? {
                results.push(res);
            }
        }

        print_json_pretty(&Summary {
            current_proposal,
            results,
        })
    }
}

/// Route a step through the submitter's typed methods. Steps the submitter
/// has no method for are refused.
fn submit_checked(
    submitter: &mut Submitter<MemStorage, MockClock, NullObserver>,
    step: &Step,
) -> Result<CallOutcome, ClientError> {
    let caller = step.caller_addr();

    if step.enroll {
        return submitter.enroll(caller);
    }

    let op = step.op.as_deref().and_then(|tag| Op::from_str(tag).ok());

    match (op, step.args.as_slice()) {
        (Some(Op::CreateProposal), [title]) => submitter.create_proposal(caller, title),
        (Some(Op::CastVote), [option]) => submitter.cast_vote(caller, option),
        (Some(Op::CloseVoting), []) => submitter.close_voting(caller),
        (Some(Op::GetResults), []) => submitter.get_results(caller),
        // The engine would reject this anyway; let it say so.
        _ => Ok(submitter.engine_mut().do_call(step.to_call())?),
    }
}

/// Parse a script. Step times must not decrease, as the ledger clock can't
/// move backwards.
pub fn parse_script(raw: &[u8]) -> anyhow::Result<Vec<Step>> {
    let steps: Vec<Step> = raw.deserialize_json()?;

    if let Some(window) = steps.windows(2).find(|w| w[1].time < w[0].time) {
        bail!(
            "script time moves backwards: {} after {}",
            window[1].time,
            window[0].time
        );
    }

    Ok(steps)
}

// ----------------------------------- tests -----------------------------------
