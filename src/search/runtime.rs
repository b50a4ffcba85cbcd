//! Generation bookkeeping for in-flight searches.
//!
//! The [`SearchRuntime`] wraps the worker channels and decides which settled
//! outcomes may touch overlay state: one generation is minted per accepted
//! term, and only the newest accepted generation is ever applied.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::worker::{SearchCommand, SearchOutcome};

/// Overlay-side handle over the search worker channels.
pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchOutcome>,
	latest_generation: Arc<AtomicU64>,
	next_generation: u64,
	current_generation: Option<u64>,
	in_flight: bool,
}

impl SearchRuntime {
	pub(crate) fn new(
		tx: Sender<SearchCommand>,
		rx: Receiver<SearchOutcome>,
		latest_generation: Arc<AtomicU64>,
	) -> Self {
		Self {
			tx,
			rx,
			latest_generation,
			next_generation: 0,
			current_generation: None,
			in_flight: false,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	/// Accept `term` as the newest search and notify the worker.
	pub(crate) fn issue(&mut self, term: String) {
		self.next_generation = self.next_generation.saturating_add(1);
		let generation = self.next_generation;
		self.current_generation = Some(generation);
		self.in_flight = true;
		self.latest_generation
			.store(generation, AtomicOrdering::Release);
		let _ = self.tx.send(SearchCommand::Query { generation, term });
	}

	/// Invalidate any outstanding generation so late outcomes are no-ops.
	pub(crate) fn invalidate(&mut self) {
		self.current_generation = None;
		self.in_flight = false;
		// Advance the shared cell past the invalidated generation so the
		// worker also stops forwarding its outcome.
		self.next_generation = self.next_generation.saturating_add(1);
		self.latest_generation
			.store(self.next_generation, AtomicOrdering::Release);
	}

	/// Whether `generation` is the newest accepted search.
	pub(crate) fn matches_latest(&self, generation: u64) -> bool {
		Some(generation) == self.current_generation
	}

	/// True while the current generation has outstanding queries.
	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	/// Record that the current generation's queries have settled.
	pub(crate) fn settle(&mut self) {
		self.in_flight = false;
	}

	pub(crate) fn try_recv(&mut self) -> Result<SearchOutcome, TryRecvError> {
		self.rx.try_recv()
	}
}
