use {
    crate::Event,
    serde::{Deserialize, Serialize},
    thiserror::Error,
};

/// Why a call was rejected.
///
/// Every variant is call-scoped: the call is discarded and the engine carries
/// on with the next one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[serde(rename_all = "snake_case")]
pub enum RejectedCallKind {
    #[error("malformed arguments")]
    MalformedArguments,

    #[error("caller is not enrolled")]
    MissingEnrollment,

    #[error("voting is not active")]
    VotingInactive,

    #[error("voting window has expired")]
    ExpiredVotingWindow,

    #[error("caller has already voted")]
    DuplicateVote,

    #[error("sender is not the proposal creator")]
    UnauthorizedSender,

    #[error("voting has not yet ended")]
    VotingNotYetEnded,

    #[error("distinct option limit reached")]
    OptionLimitReached,
}

/// Outcome of processing a call.
///
/// `events` is always empty for a rejected call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CallOutcome {
    pub accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectedCallKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
}

impl CallOutcome {
    pub fn accepted(events: Vec<Event>) -> Self {
        Self {
            accepted: true,
            reason: None,
            events,
        }
    }

    pub fn rejected(reason: RejectedCallKind) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
            events: Vec::new(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn as_result(&self) -> Result<&[Event], RejectedCallKind> {
        match self.reason {
            Some(reason) => Err(reason),
            None => Ok(&self.events),
        }
    }
}
