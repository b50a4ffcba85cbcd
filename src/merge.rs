//! Merge and de-duplication of the two per-field result sets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::backend::SearchRecord;

/// A de-duplicated search result eligible for highlighting and navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
	/// Unique initiative identifier.
	pub id: String,
	/// Human-readable name shown in the overlay list.
	pub display_name: String,
	/// Whether the identifier-field query returned this id.
	pub matched_by_id: bool,
}

/// Combine the code-field and name-field result sets into one ordered,
/// unique candidate list of at most `cap` entries.
///
/// Code matches come first, each set keeps its internal order, and the first
/// occurrence of an id wins. `matched_by_id` reflects membership in the code
/// result set regardless of which copy was retained. Output order is never
/// re-sorted by any relevance metric.
pub fn merge(by_code: &[SearchRecord], by_name: &[SearchRecord], cap: usize) -> Vec<Candidate> {
	let code_ids: HashSet<&str> = by_code.iter().map(|record| record.id.as_str()).collect();

	let mut seen = HashSet::new();
	let mut merged = Vec::new();
	for record in by_code.iter().chain(by_name) {
		if merged.len() == cap {
			break;
		}
		if !seen.insert(record.id.as_str()) {
			continue;
		}
		merged.push(Candidate {
			id: record.id.clone(),
			display_name: record.display_name.clone(),
			matched_by_id: code_ids.contains(record.id.as_str()),
		});
	}
	merged
}
