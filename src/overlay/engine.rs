//! Engine driving the quick-jump pipeline.
//!
//! Keystrokes flow strictly downward: term changes arm the debounce
//! controller, a fired deadline mints a generation and issues the dual
//! query, settled outcomes pass the generation guard before they are merged
//! into the candidate list, and navigation events drive the selection
//! machine until a commit hands off to the [`Navigator`].

use std::sync::Arc;
use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use log::trace;

use crate::backend::SearchBackend;
use crate::config::OverlayConfig;
use crate::debounce::Debounce;
use crate::handoff::{NavigationRequest, Navigator};
use crate::merge::merge;
use crate::overlay::state::{NavEvent, OverlayState};
use crate::search::{SearchOutcome, SearchRuntime, spawn};
use crate::signal::{self, OverlaySignal, SignalPort, SignalSender};

/// Orchestrates the quick-jump overlay end to end.
///
/// All state mutation happens synchronously inside the caller's event-loop
/// turn; the background worker only ever communicates through the outcome
/// channel drained by [`tick`](Self::tick).
pub struct Overlay {
	state: OverlayState,
	config: OverlayConfig,
	debounce: Debounce,
	search: SearchRuntime,
	signals: SignalPort,
	signal_tx: SignalSender,
	navigator: Box<dyn Navigator>,
}

impl Drop for Overlay {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

impl Overlay {
	pub fn new(
		config: OverlayConfig,
		backend: Arc<dyn SearchBackend>,
		navigator: Box<dyn Navigator>,
	) -> Self {
		let (command_tx, outcome_rx, latest_generation) = spawn(backend, config.query_limit);
		let search = SearchRuntime::new(command_tx, outcome_rx, latest_generation);
		let (signal_tx, signals) = signal::channel();
		let debounce = Debounce::new(config.debounce());

		Self {
			state: OverlayState::default(),
			config,
			debounce,
			search,
			signals,
			signal_tx,
			navigator,
		}
	}

	/// Read-only view of the overlay state.
	pub fn state(&self) -> &OverlayState {
		&self.state
	}

	/// Handle for delivering open/close signals from the host.
	pub fn signals(&self) -> SignalSender {
		self.signal_tx.clone()
	}

	/// Open the overlay with a fresh session.
	pub fn open(&mut self) {
		self.debounce.cancel();
		self.search.invalidate();
		self.state.reset();
		self.state.open = true;
	}

	/// Close the overlay; outstanding generations become no-ops.
	pub fn close(&mut self) {
		self.debounce.cancel();
		self.search.invalidate();
		self.state.reset();
		self.state.open = false;
	}

	/// Record a keystroke-level change to the search term.
	///
	/// Eligible terms re-arm the debounce deadline; sub-threshold terms
	/// suppress the search entirely and clear any shown candidates.
	pub fn set_term(&mut self, term: impl Into<String>, now: Instant) {
		if !self.state.open {
			return;
		}
		let term = term.into();
		self.state.term = term.clone();

		if term.chars().count() < self.config.min_term_len {
			self.debounce.cancel();
			self.search.invalidate();
			self.state.clear_candidates();
			self.state.loading = false;
			return;
		}

		self.debounce.schedule(term, now);
	}

	/// Advance the pipeline one event-loop turn: drain host signals, fire a
	/// due debounce deadline, and apply settled outcomes that still belong
	/// to the newest accepted generation.
	pub fn tick(&mut self, now: Instant) {
		self.drain_signals();

		if let Some(term) = self.debounce.poll(now)
			&& self.state.open
		{
			self.search.issue(term);
			self.state.loading = true;
		}

		self.pump_outcomes();
	}

	fn drain_signals(&mut self) {
		loop {
			match self.signals.try_recv() {
				Ok(OverlaySignal::Open) => self.open(),
				Ok(OverlaySignal::Close) => self.close(),
				Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	fn pump_outcomes(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(outcome) => self.apply_outcome(outcome),
				Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply a settled outcome if it corresponds to the newest accepted
	/// search; anything older is discarded without touching state.
	fn apply_outcome(&mut self, outcome: SearchOutcome) {
		if !self.search.matches_latest(outcome.generation) {
			trace!("discarding stale search generation {}", outcome.generation);
			return;
		}

		let merged = merge(&outcome.by_code, &outcome.by_name, self.config.merge_cap);
		self.state.replace_candidates(merged);
		self.state.loading = false;
		self.search.settle();
	}

	/// Feed one abstract navigation event into the selection machine.
	pub fn handle_nav(&mut self, event: NavEvent) {
		if !self.state.open {
			return;
		}
		match event {
			NavEvent::ArrowUp => self.state.move_selection_up(),
			NavEvent::ArrowDown => self.state.move_selection_down(),
			NavEvent::Hover(index) => self.state.hover(index),
			NavEvent::Commit(index) => self.commit(index),
			NavEvent::Escape => self.close(),
		}
	}

	/// Commit the highlighted candidate (Enter with a non-empty list).
	pub fn commit_selected(&mut self) {
		if !self.state.open {
			return;
		}
		if let Some(selected) = self.state.selection {
			self.commit(selected);
		}
	}

	/// Close the overlay and hand the committed candidate to the navigator.
	/// Rows that no longer exist are ignored.
	fn commit(&mut self, index: usize) {
		let Some(candidate) = self.state.candidates.get(index) else {
			return;
		};
		let request =
			NavigationRequest::for_candidate(candidate, self.config.back_context.clone());
		self.close();
		self.navigator.navigate(request);
	}
}
