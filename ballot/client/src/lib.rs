mod config;
mod error;
mod rate_limiter;
mod submitter;
mod validator;

pub use crate::{config::*, error::*, rate_limiter::*, submitter::*, validator::*};
