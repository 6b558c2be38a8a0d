// SPDX-License-Identifier: MIT OR Apache-2.0
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod fault;
mod outcome;
mod task;
mod wrap;

pub use fault::Fault;
pub use outcome::Outcome;
pub use task::{wrap_task, wrap_task_with};
pub use wrap::{
    IntoOutcome, Normalized, SETTLEMENT_FAULT_EVENT, Settle, wrap, wrap_normalized, wrap_required,
    wrap_with,
};
