mod account;
mod builder;
mod observer;
mod suite;
mod tracing;

pub use crate::{account::*, builder::*, observer::*, suite::*, tracing::*};
