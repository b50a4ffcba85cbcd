//! Debounce controller for search triggering.

use std::time::{Duration, Instant};

/// Delays handing a term to the orchestrator until typing pauses.
///
/// The armed deadline is an explicit stored value rather than an ambient
/// timer: rescheduling replaces it, [`cancel`](Self::cancel) drops it, and
/// [`poll`](Self::poll) fires at most once per armed deadline.
#[derive(Debug)]
pub(crate) struct Debounce {
	delay: Duration,
	armed: Option<Armed>,
}

#[derive(Debug)]
struct Armed {
	deadline: Instant,
	term: String,
}

impl Debounce {
	pub(crate) fn new(delay: Duration) -> Self {
		Self { delay, armed: None }
	}

	/// Arm (or re-arm) the deadline for `term`, replacing any pending one.
	pub(crate) fn schedule(&mut self, term: String, now: Instant) {
		self.armed = Some(Armed {
			deadline: now + self.delay,
			term,
		});
	}

	/// Drop any armed deadline without firing.
	pub(crate) fn cancel(&mut self) {
		self.armed = None;
	}

	/// Hand out the armed term if its deadline has passed.
	pub(crate) fn poll(&mut self, now: Instant) -> Option<String> {
		if self.armed.as_ref().is_some_and(|armed| now >= armed.deadline) {
			self.armed.take().map(|armed| armed.term)
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DELAY: Duration = Duration::from_millis(300);

	#[test]
	fn does_not_fire_before_the_deadline() {
		let start = Instant::now();
		let mut debounce = Debounce::new(DELAY);
		debounce.schedule("pf".into(), start);
		assert_eq!(debounce.poll(start + Duration::from_millis(299)), None);
		assert_eq!(debounce.poll(start + DELAY), Some("pf".into()));
	}

	#[test]
	fn fires_at_most_once_per_armed_deadline() {
		let start = Instant::now();
		let mut debounce = Debounce::new(DELAY);
		debounce.schedule("pf".into(), start);
		assert!(debounce.poll(start + DELAY).is_some());
		assert_eq!(debounce.poll(start + DELAY * 2), None);
	}

	#[test]
	fn rescheduling_replaces_the_pending_term() {
		let start = Instant::now();
		let mut debounce = Debounce::new(DELAY);
		debounce.schedule("pf".into(), start);
		let retyped = start + Duration::from_millis(100);
		debounce.schedule("pf-1".into(), retyped);
		assert_eq!(debounce.poll(start + DELAY), None);
		assert_eq!(debounce.poll(retyped + DELAY), Some("pf-1".into()));
	}

	#[test]
	fn cancel_discards_the_deadline() {
		let start = Instant::now();
		let mut debounce = Debounce::new(DELAY);
		debounce.schedule("pf".into(), start);
		debounce.cancel();
		assert_eq!(debounce.poll(start + DELAY), None);
	}
}
