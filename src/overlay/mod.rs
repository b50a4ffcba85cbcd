//! Overlay state and the engine that drives it.

mod engine;
mod state;

pub use engine::Overlay;
pub use state::{NavEvent, OverlayState};
