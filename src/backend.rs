//! Port to the external search endpoint.
//!
//! One accepted term produces two requests, one per filtered field, each a
//! single case-insensitive containment clause capped to the first page.

use serde::{Deserialize, Serialize};

use crate::error::BackendError;

/// Field name used for identifier-code lookups.
pub const CODE_FIELD: &str = "code";

/// Field name used for display-name lookups.
pub const NAME_FIELD: &str = "name";

/// Containment operator understood by the endpoint.
pub const ILIKE_OPERATOR: &str = "ilike";

/// One filter clause of a search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClause {
	pub field: String,
	pub operator: String,
	pub value: String,
}

/// Request submitted to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
	pub filters: Vec<FilterClause>,
	pub limit: usize,
	pub offset: usize,
}

impl QueryRequest {
	/// Build a single-clause containment query for `field`.
	pub fn containment(field: &str, term: &str, limit: usize) -> Self {
		Self {
			filters: vec![FilterClause {
				field: field.to_string(),
				operator: ILIKE_OPERATOR.to_string(),
				value: format!("%{term}%"),
			}],
			limit,
			offset: 0,
		}
	}
}

/// A raw record as returned by the endpoint.
///
/// Responses carry more fields than these; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
	pub id: String,
	pub display_name: String,
}

impl SearchRecord {
	pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			display_name: display_name.into(),
		}
	}
}

/// Response envelope from the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
	pub data: Vec<SearchRecord>,
}

/// External search endpoint the engine queries.
///
/// Implementations must be shareable: the worker invokes
/// [`query`](Self::query) from two threads per accepted term.
pub trait SearchBackend: Send + Sync + 'static {
	fn query(&self, request: &QueryRequest) -> Result<QueryResponse, BackendError>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn containment_request_wraps_term_in_wildcards() {
		let request = QueryRequest::containment(CODE_FIELD, "PF-1", 10);
		let json = serde_json::to_value(&request).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"filters": [{ "field": "code", "operator": "ilike", "value": "%PF-1%" }],
				"limit": 10,
				"offset": 0,
			})
		);
	}

	#[test]
	fn response_tolerates_unknown_fields() {
		let response: QueryResponse = serde_json::from_str(
			r#"{"data":[{"id":"PF-100","displayName":"Alpha","status":"active","owner":"ops"}]}"#,
		)
		.unwrap();
		assert_eq!(response.data, vec![SearchRecord::new("PF-100", "Alpha")]);
	}
}
