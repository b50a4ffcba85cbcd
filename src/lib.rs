//! Search orchestration engine for the initiative quick-jump overlay.
//!
//! An operator types a partial initiative code or display name, two field
//! queries run concurrently against the search endpoint, their results are
//! merged and de-duplicated, and a keyboard-driven selection state machine
//! turns the candidate list into a committed navigation target.
//!
//! Rendering, the search endpoint itself, the destination detail view, and
//! global shortcut dispatch are external collaborators wired in through the
//! ports this crate exposes: [`SearchBackend`], [`Navigator`], and the typed
//! open/close [`signal`] pair.

pub mod backend;
pub mod config;
mod debounce;
pub mod error;
pub mod handoff;
pub mod merge;
mod overlay;
mod search;
pub mod signal;

pub use backend::{FilterClause, QueryRequest, QueryResponse, SearchBackend, SearchRecord};
pub use config::OverlayConfig;
pub use error::BackendError;
pub use handoff::{BackContext, NavigationRequest, Navigator};
pub use merge::{Candidate, merge};
pub use overlay::{NavEvent, Overlay, OverlayState};
pub use signal::{OverlaySignal, SignalSender};
