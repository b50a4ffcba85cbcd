use thiserror::Error;

/// Errors surfaced by a [`SearchBackend`](crate::SearchBackend) implementation.
///
/// The engine never propagates these: a failed field query degrades to an
/// empty contribution and is logged.
#[derive(Debug, Error)]
pub enum BackendError {
	/// The endpoint answered with a non-success status code.
	#[error("search endpoint returned status {status}")]
	Status { status: u16 },

	/// The request never produced a response.
	#[error("search request failed: {0}")]
	Transport(String),

	/// The response body could not be decoded.
	#[error("malformed search response: {0}")]
	Decode(#[from] serde_json::Error),
}
