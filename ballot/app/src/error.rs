use {
    ballot_types::{RejectedCallKind, StdError, Timestamp},
    thiserror::Error,
};

/// Host-level failures. Unlike a rejected call, these mean the engine could
/// not process the call at all; nothing is written either way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("ledger clock moved backwards! last: {last}, now: {now}")]
    ClockRegression { last: Timestamp, now: Timestamp },

    #[error("engine is not initialized")]
    NotInitialized,

    #[error("engine is already initialized")]
    AlreadyInitialized,
}

pub type AppResult<T> = core::result::Result<T, AppError>;

/// Error type of the handlers, so that `?` works on both rejections and
/// storage errors.
#[derive(Debug, Error)]
pub(crate) enum CallError {
    #[error(transparent)]
    Rejected(#[from] RejectedCallKind),

    #[error(transparent)]
    Std(#[from] StdError),
}

pub(crate) type CallResult<T> = core::result::Result<T, CallError>;

/// Return early from a handler with the given rejection.
macro_rules! reject {
    ($kind:ident) => {
        return Err($crate::error::CallError::Rejected(
            ::ballot_types::RejectedCallKind::$kind,
        ))
    };
}

pub(crate) use reject;

/// Reject with the given kind unless the condition holds.
macro_rules! ensure {
    ($cond:expr, $kind:ident) => {
        if !$cond {
            $crate::error::reject!($kind);
        }
    };
}

pub(crate) use ensure;
