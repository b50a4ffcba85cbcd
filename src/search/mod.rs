//! Dual-query orchestration against the search backend.

mod runtime;
mod worker;

pub(crate) use runtime::SearchRuntime;
pub(crate) use worker::{SearchOutcome, spawn};
