//! Overlay state and the selection state machine.

use crate::merge::Candidate;

/// Abstract navigation events delivered by the host's input translator.
///
/// The engine never sees device events; a thin binding layer outside this
/// crate maps keys and pointer rows onto these five events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
	/// Move the highlight up one row.
	ArrowUp,
	/// Move the highlight down one row.
	ArrowDown,
	/// Pointer entered row `k`; moves the highlight without committing.
	Hover(usize),
	/// Direct commit of row `k` (a click, or Enter resolved to the
	/// highlighted row).
	Commit(usize),
	/// Close without committing.
	Escape,
}

/// The single owned mutable record the whole engine reads and writes.
#[derive(Debug, Default)]
pub struct OverlayState {
	/// Whether the overlay is currently shown.
	pub open: bool,
	/// Current text in the search input.
	pub term: String,
	/// Merged candidate list for the newest accepted generation.
	pub candidates: Vec<Candidate>,
	/// True while the newest accepted generation has outstanding queries.
	pub loading: bool,
	/// Highlighted row, `None` when the list is empty.
	pub selection: Option<usize>,
}

impl OverlayState {
	/// Replace the candidate list; a non-empty list highlights the first row.
	pub(crate) fn replace_candidates(&mut self, candidates: Vec<Candidate>) {
		self.candidates = candidates;
		self.selection = if self.candidates.is_empty() {
			None
		} else {
			Some(0)
		};
	}

	/// Drop all candidates and the highlight.
	pub(crate) fn clear_candidates(&mut self) {
		self.candidates.clear();
		self.selection = None;
	}

	/// Reset everything for a fresh overlay session.
	pub(crate) fn reset(&mut self) {
		self.term.clear();
		self.clear_candidates();
		self.loading = false;
	}

	pub(crate) fn move_selection_up(&mut self) {
		if let Some(selected) = self.selection
			&& selected > 0
		{
			self.selection = Some(selected - 1);
		}
	}

	pub(crate) fn move_selection_down(&mut self) {
		if let Some(selected) = self.selection
			&& selected + 1 < self.candidates.len()
		{
			self.selection = Some(selected + 1);
		}
	}

	/// Highlight row `index` without committing. Rows that no longer exist
	/// (the pointer raced a list update) are ignored.
	pub(crate) fn hover(&mut self, index: usize) {
		if index < self.candidates.len() {
			self.selection = Some(index);
		}
	}
}
