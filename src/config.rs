//! Panel configuration: where the local graph service lives.

use url::Url;

use crate::error::PanelError;

/// Service root used when nothing overrides it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

/// Query parameter that overrides the service root for one panel mount.
pub const BASE_QUERY_PARAM: &str = "base";

/// Runtime configuration of a panel instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelConfig {
	base_url: Url,
}

impl PanelConfig {
	/// Parse and normalize a service root. The path always ends with `/` so
	/// endpoint paths can be appended directly.
	pub fn parse(raw: &str) -> Result<Self, PanelError> {
		let invalid = |reason: String| PanelError::InvalidBaseUrl {
			value: raw.to_string(),
			reason,
		};
		let mut base_url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
		if !matches!(base_url.scheme(), "http" | "https") {
			return Err(invalid(format!("unsupported scheme '{}'", base_url.scheme())));
		}
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());
			base_url.set_path(&path);
		}
		base_url.set_query(None);
		base_url.set_fragment(None);
		Ok(Self { base_url })
	}

	/// Resolve the effective config from an optional override, falling back
	/// to the default on absent or invalid input.
	pub fn resolve(override_url: Option<&str>) -> Self {
		match override_url.filter(|s| !s.trim().is_empty()) {
			Some(raw) => Self::parse(raw).unwrap_or_else(|err| {
				log::warn!("{err}; using {DEFAULT_BASE_URL}");
				Self::default()
			}),
			None => Self::default(),
		}
	}

	/// Normalized service root, always ending in `/`.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}
}

impl Default for PanelConfig {
	fn default() -> Self {
		Self {
			base_url: Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL"),
		}
	}
}
