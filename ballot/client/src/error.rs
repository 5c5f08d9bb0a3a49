use {
    crate::Action,
    ballot_app::AppError,
    ballot_types::{Addr, Duration, Timestamp},
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("invalid title: {reason}")]
    InvalidTitle { reason: String },

    #[error("invalid option `{option}`! must be one of: {allowed}")]
    InvalidOption { option: String, allowed: String },

    #[error("voting period {period} out of range! min: {min}, max: {max}")]
    InvalidVotingPeriod {
        period: Duration,
        min: Duration,
        max: Duration,
    },

    #[error("rate limit exceeded! account: {account}, action: {action}, reset at: {reset_at}")]
    RateLimited {
        account: Addr,
        action: Action,
        reset_at: Timestamp,
    },

    #[error(transparent)]
    App(#[from] AppError),
}

impl ClientError {
    pub fn invalid_title<R>(reason: R) -> Self
    where
        R: ToString,
    {
        Self::InvalidTitle {
            reason: reason.to_string(),
        }
    }
}

pub type ClientResult<T> = core::result::Result<T, ClientError>;
