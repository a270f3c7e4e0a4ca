// crates/logging/src/lib.rs
//! Log targets and subscriber construction shared by the ignore crates.
#![deny(unsafe_op_in_unsafe_fn, rust_2018_idioms)]
#![warn(missing_docs)]

mod flags;
mod sink;
mod subscriber;

pub use flags::{
    DebugFlag, InfoFlag, LogFormat, StderrMode, SubscriberConfig, SubscriberConfigBuilder,
};
pub use sink::LogWriter;
pub use subscriber::{init, subscriber};
