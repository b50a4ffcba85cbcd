//! Background worker issuing the dual field queries.
//!
//! Each accepted term becomes one generation. Generations run on their own
//! threads so a slow endpoint cannot delay newer searches, and within a
//! generation the code-field and name-field queries run concurrently and
//! join before the outcome is reported.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{trace, warn};

use crate::backend::{CODE_FIELD, NAME_FIELD, QueryRequest, SearchBackend, SearchRecord};

/// Commands understood by the background search worker.
pub(crate) enum SearchCommand {
	/// Run the dual field query for an accepted term.
	Query { generation: u64, term: String },
	/// Stop the worker thread.
	Shutdown,
}

/// Settled result of one generation's dual query.
///
/// A failed field query contributes an empty set; the generation still
/// settles so the overlay can clear its loading state.
pub(crate) struct SearchOutcome {
	pub generation: u64,
	pub by_code: Vec<SearchRecord>,
	pub by_name: Vec<SearchRecord>,
}

/// Launch the background search worker and return its communication
/// channels plus the shared latest-generation cell.
pub(crate) fn spawn(
	backend: Arc<dyn SearchBackend>,
	query_limit: usize,
) -> (Sender<SearchCommand>, Receiver<SearchOutcome>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (outcome_tx, outcome_rx) = mpsc::channel();
	let latest_generation = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_generation);

	thread::spawn(move || worker_loop(backend, query_limit, command_rx, outcome_tx, thread_latest));

	(command_tx, outcome_rx, latest_generation)
}

fn worker_loop(
	backend: Arc<dyn SearchBackend>,
	query_limit: usize,
	command_rx: Receiver<SearchCommand>,
	outcome_tx: Sender<SearchOutcome>,
	latest_generation: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		match command {
			SearchCommand::Query { generation, term } => {
				if latest_generation.load(AtomicOrdering::Acquire) != generation {
					trace!("skipping superseded search generation {generation}");
					continue;
				}
				let backend = Arc::clone(&backend);
				let outcome_tx = outcome_tx.clone();
				let latest_generation = Arc::clone(&latest_generation);
				thread::spawn(move || {
					let outcome = run_generation(backend.as_ref(), generation, &term, query_limit);
					// Load shedding only: the runtime's generation check on
					// the receiving side remains authoritative.
					if latest_generation.load(AtomicOrdering::Acquire) != generation {
						trace!("dropping superseded search generation {generation}");
						return;
					}
					let _ = outcome_tx.send(outcome);
				});
			}
			SearchCommand::Shutdown => break,
		}
	}
}

/// Issue both field queries concurrently and join them into one outcome.
fn run_generation(
	backend: &dyn SearchBackend,
	generation: u64,
	term: &str,
	query_limit: usize,
) -> SearchOutcome {
	let code_request = QueryRequest::containment(CODE_FIELD, term, query_limit);
	let name_request = QueryRequest::containment(NAME_FIELD, term, query_limit);

	let (by_code, by_name) = thread::scope(|scope| {
		let code = scope.spawn(|| run_query(backend, CODE_FIELD, &code_request));
		let name = scope.spawn(|| run_query(backend, NAME_FIELD, &name_request));
		(settle(code, CODE_FIELD), settle(name, NAME_FIELD))
	});

	SearchOutcome {
		generation,
		by_code,
		by_name,
	}
}

/// Run one field query, degrading failures to an empty contribution.
fn run_query(
	backend: &dyn SearchBackend,
	field: &str,
	request: &QueryRequest,
) -> Vec<SearchRecord> {
	match backend.query(request) {
		Ok(response) => response.data,
		Err(err) => {
			warn!("{field} query failed, continuing with partial results: {err}");
			Vec::new()
		}
	}
}

fn settle(
	handle: thread::ScopedJoinHandle<'_, Vec<SearchRecord>>,
	field: &str,
) -> Vec<SearchRecord> {
	handle.join().unwrap_or_else(|_| {
		warn!("{field} query panicked, continuing with partial results");
		Vec::new()
	})
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::sync::atomic::AtomicUsize;
	use std::time::Duration;

	use super::*;
	use crate::backend::QueryResponse;
	use crate::error::BackendError;

	struct FieldBackend {
		calls: AtomicUsize,
		fail_code: bool,
	}

	impl SearchBackend for FieldBackend {
		fn query(&self, request: &QueryRequest) -> Result<QueryResponse, BackendError> {
			self.calls.fetch_add(1, AtomicOrdering::SeqCst);
			let field = request.filters[0].field.as_str();
			if field == CODE_FIELD && self.fail_code {
				return Err(BackendError::Transport("connection reset".into()));
			}
			Ok(QueryResponse {
				data: vec![SearchRecord::new(format!("{field}-hit"), field)],
			})
		}
	}

	#[test]
	fn generation_joins_both_field_queries() {
		let backend = FieldBackend {
			calls: AtomicUsize::new(0),
			fail_code: false,
		};
		let outcome = run_generation(&backend, 1, "pf", 10);
		assert_eq!(backend.calls.load(AtomicOrdering::SeqCst), 2);
		assert_eq!(outcome.by_code[0].id, "code-hit");
		assert_eq!(outcome.by_name[0].id, "name-hit");
	}

	#[test]
	fn failed_field_degrades_to_empty() {
		let backend = FieldBackend {
			calls: AtomicUsize::new(0),
			fail_code: true,
		};
		let outcome = run_generation(&backend, 1, "pf", 10);
		assert!(outcome.by_code.is_empty());
		assert_eq!(outcome.by_name.len(), 1);
	}

	struct RecordingBackend {
		seen: Mutex<Vec<QueryRequest>>,
	}

	impl SearchBackend for RecordingBackend {
		fn query(&self, request: &QueryRequest) -> Result<QueryResponse, BackendError> {
			self.seen.lock().unwrap().push(request.clone());
			Ok(QueryResponse::default())
		}
	}

	#[test]
	fn superseded_command_is_skipped_without_querying() {
		let backend = Arc::new(RecordingBackend {
			seen: Mutex::new(Vec::new()),
		});
		let shared: Arc<dyn SearchBackend> = backend.clone();
		let (command_tx, outcome_rx, latest) = spawn(shared, 10);

		// Generation 1 is already superseded by the time the worker sees it.
		latest.store(2, AtomicOrdering::Release);
		command_tx
			.send(SearchCommand::Query {
				generation: 1,
				term: "pf".into(),
			})
			.unwrap();
		command_tx
			.send(SearchCommand::Query {
				generation: 2,
				term: "pf-1".into(),
			})
			.unwrap();

		let outcome = outcome_rx.recv_timeout(Duration::from_secs(1)).unwrap();
		assert_eq!(outcome.generation, 2);
		let seen = backend.seen.lock().unwrap();
		assert!(seen.iter().all(|request| request.filters[0].value == "%pf-1%"));
	}
}
