//! Navigation handoff produced when a candidate is committed.

use serde::{Deserialize, Serialize};

use crate::merge::Candidate;

/// Context the destination view uses to offer a "return to search" action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackContext {
	/// Route of the surface the operator searched from.
	pub origin_route: String,
	/// Label for the return affordance.
	pub origin_label: String,
}

/// Routing action carrying the committed initiative and back-context.
///
/// The engine's obligation ends at producing this payload; the routing stack
/// and destination view are external collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationRequest {
	/// Identifier of the committed initiative; keys the detail view route.
	pub initiative_id: String,
	/// Back-navigation payload for the destination.
	pub back: BackContext,
}

impl NavigationRequest {
	pub(crate) fn for_candidate(candidate: &Candidate, back: BackContext) -> Self {
		Self {
			initiative_id: candidate.id.clone(),
			back,
		}
	}
}

/// Routing layer the engine hands committed selections to.
pub trait Navigator {
	fn navigate(&mut self, request: NavigationRequest);
}

impl<F> Navigator for F
where
	F: FnMut(NavigationRequest),
{
	fn navigate(&mut self, request: NavigationRequest) {
		self(request);
	}
}
