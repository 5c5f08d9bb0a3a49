mod address;
mod binary;
mod buffer;
mod call;
mod config;
mod error;
mod event;
mod mem;
mod outcome;
mod proposal;
mod result;
mod serializers;
mod storage;
mod time;
mod utils;

pub use {
    address::*, binary::*, buffer::*, call::*, config::*, error::*, event::*, mem::*, outcome::*,
    proposal::*, result::*, serializers::*, storage::*, time::*, utils::*,
};

// -------------------------------- re-exports ---------------------------------

pub use serde_json::{json, Value as Json};
