//! Engine configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::handoff::BackContext;

/// Tunables for the quick-jump overlay engine.
///
/// Every value has a default; hosts typically load overrides from a TOML
/// fragment embedded in their own configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
	/// Milliseconds of typing silence before a search fires.
	pub debounce_ms: u64,
	/// Minimum term length (in characters) eligible to trigger a search.
	pub min_term_len: usize,
	/// Per-field result cap requested from the endpoint.
	pub query_limit: usize,
	/// Maximum number of merged candidates kept.
	pub merge_cap: usize,
	/// Back-navigation payload attached to every handoff.
	pub back_context: BackContext,
}

impl Default for OverlayConfig {
	fn default() -> Self {
		Self {
			debounce_ms: 300,
			min_term_len: 2,
			query_limit: 10,
			merge_cap: 15,
			back_context: BackContext {
				origin_route: "/search".to_string(),
				origin_label: "Back to search".to_string(),
			},
		}
	}
}

impl OverlayConfig {
	/// Debounce delay as a [`Duration`].
	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}

	/// Parse a TOML fragment, falling back to defaults for absent keys.
	pub fn from_toml(text: &str) -> Result<Self> {
		toml::from_str(text).context("parsing overlay configuration")
	}

	/// Load configuration from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path)
			.with_context(|| format!("reading {}", path.display()))?;
		Self::from_toml(&text)
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn defaults_match_the_engine_contract() {
		let config = OverlayConfig::default();
		assert_eq!(config.debounce(), Duration::from_millis(300));
		assert_eq!(config.min_term_len, 2);
		assert_eq!(config.query_limit, 10);
		assert_eq!(config.merge_cap, 15);
	}

	#[test]
	fn fragment_overrides_keep_remaining_defaults() {
		let config = OverlayConfig::from_toml(
			r#"
			debounce_ms = 150

			[back_context]
			originRoute = "/initiatives"
			originLabel = "Back to initiatives"
			"#,
		)
		.unwrap();
		assert_eq!(config.debounce(), Duration::from_millis(150));
		assert_eq!(config.min_term_len, 2);
		assert_eq!(config.back_context.origin_route, "/initiatives");
	}

	#[test]
	fn load_reads_a_toml_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "query_limit = 5").unwrap();
		let config = OverlayConfig::load(file.path()).unwrap();
		assert_eq!(config.query_limit, 5);
	}

	#[test]
	fn malformed_fragment_reports_context() {
		let err = OverlayConfig::from_toml("debounce_ms = \"soon\"").unwrap_err();
		assert!(err.to_string().contains("overlay configuration"));
	}
}
