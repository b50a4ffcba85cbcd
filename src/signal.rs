//! Typed open/close signaling for the overlay.
//!
//! Hosts deliver open/close triggers through a [`SignalSender`] instead of a
//! loosely-typed global bus; the engine drains the receiving half at the top
//! of every tick.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Signals an external surface may deliver to the overlay engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlaySignal {
	/// Open the overlay (global shortcut or a programmatic entry point).
	Open,
	/// Close the overlay (outside click or host teardown).
	Close,
}

/// Sending half handed to the host application.
#[derive(Debug, Clone)]
pub struct SignalSender {
	tx: Sender<OverlaySignal>,
}

impl SignalSender {
	/// Deliver a signal. Dropped silently if the engine is gone.
	pub fn send(&self, signal: OverlaySignal) {
		let _ = self.tx.send(signal);
	}
}

/// Receiving half owned by the engine.
#[derive(Debug)]
pub(crate) struct SignalPort {
	rx: Receiver<OverlaySignal>,
}

impl SignalPort {
	pub(crate) fn try_recv(&self) -> Result<OverlaySignal, TryRecvError> {
		self.rx.try_recv()
	}
}

/// Create a connected sender/port pair.
pub(crate) fn channel() -> (SignalSender, SignalPort) {
	let (tx, rx) = mpsc::channel();
	(SignalSender { tx }, SignalPort { rx })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn signals_arrive_in_order() {
		let (sender, port) = channel();
		sender.send(OverlaySignal::Open);
		sender.send(OverlaySignal::Close);
		assert_eq!(port.try_recv(), Ok(OverlaySignal::Open));
		assert_eq!(port.try_recv(), Ok(OverlaySignal::Close));
		assert_eq!(port.try_recv(), Err(TryRecvError::Empty));
	}
}
