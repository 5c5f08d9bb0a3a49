mod clock;
mod dispatch;
mod engine;
mod error;
mod execute;
mod namespace;
mod observer;
mod query;
mod state;
#[cfg(feature = "tracing")]
mod tracing;

#[cfg(feature = "tracing")]
pub use crate::tracing::*;
pub use crate::{
    clock::*, engine::*, error::*, namespace::*, observer::*, state::*,
};
