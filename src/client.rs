//! HTTP access to the local graph service.
//!
//! [`GraphClient`] knows the endpoint layout; the actual I/O goes through a
//! [`Transport`] so the panel logic can be driven without a network.
//! [`HttpTransport`] uses reqwest, which maps onto `fetch` on wasm32.

use async_trait::async_trait;
use log::{debug, error};

use crate::components::filter_panel::GraphSnapshot;
use crate::config::PanelConfig;
use crate::error::PanelError;

/// Content type sent with every request, matching what the service expects.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

const SNAPSHOT_PATH: &str = "graph";
const TOGGLE_PATH: &str = "graph-color/toggle/";
const TRANSPARENT_PATH: &str = "graph-color/transparent";

/// Minimal GET-only transport.
#[async_trait(?Send)]
pub trait Transport {
	/// Issue a GET and return the body of a success response.
	///
	/// Unreachable targets map to [`PanelError::Transport`], non-2xx answers
	/// to [`PanelError::Status`].
	async fn get(&self, url: &str, content_type: Option<&str>) -> Result<String, PanelError>;
}

/// reqwest-backed transport.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
	client: reqwest::Client,
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
	async fn get(&self, url: &str, content_type: Option<&str>) -> Result<String, PanelError> {
		let transport_err = |e: reqwest::Error| PanelError::Transport {
			url: url.to_string(),
			details: e.to_string(),
		};

		let mut request = self.client.get(url);
		if let Some(content_type) = content_type {
			request = request.header(reqwest::header::CONTENT_TYPE, content_type);
		}
		let response = request.send().await.map_err(transport_err)?;

		let status = response.status();
		if !status.is_success() {
			return Err(PanelError::Status {
				url: url.to_string(),
				status: status.as_u16(),
			});
		}
		response.text().await.map_err(transport_err)
	}
}

/// Result of a fire-and-forget write request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
	Sent { url: String },
	/// Logged already; goes no further.
	Failed { url: String, reason: String },
}

impl RequestOutcome {
	pub fn is_sent(&self) -> bool {
		matches!(self, RequestOutcome::Sent { .. })
	}
}

/// Client for the graph service endpoints.
pub struct GraphClient<T = HttpTransport> {
	base: String,
	transport: T,
}

impl<T: Transport> GraphClient<T> {
	/// Build a client for the service root in `config`.
	pub fn new(config: &PanelConfig, transport: T) -> Self {
		Self {
			base: config.base_url().to_string(),
			transport,
		}
	}

	/// `<base>graph`
	pub fn snapshot_url(&self) -> String {
		format!("{}{SNAPSHOT_PATH}", self.base)
	}

	/// `<base>graph-color/toggle/<name>` with `name` encoded as one path segment.
	pub fn toggle_url(&self, name: &str) -> String {
		format!("{}{TOGGLE_PATH}{}", self.base, urlencoding::encode(name))
	}

	/// `<base>graph-color/transparent`
	pub fn hide_all_url(&self) -> String {
		format!("{}{TRANSPARENT_PATH}", self.base)
	}

	/// Read the full graph snapshot.
	pub async fn fetch_snapshot(&self) -> Result<GraphSnapshot, PanelError> {
		let url = self.snapshot_url();
		debug!("fetching snapshot from {url}");
		let body = self.transport.get(&url, Some(JSON_CONTENT_TYPE)).await?;
		serde_json::from_str(&body).map_err(|e| PanelError::MalformedResponse {
			details: e.to_string(),
		})
	}

	/// Ask the service to toggle the highlight of one filter.
	pub async fn toggle_filter(&self, name: &str) -> RequestOutcome {
		self.fire(self.toggle_url(name)).await
	}

	/// Ask the service to make the whole graph transparent.
	pub async fn hide_all(&self) -> RequestOutcome {
		self.fire(self.hide_all_url()).await
	}

	async fn fire(&self, url: String) -> RequestOutcome {
		// Body is deliberately ignored.
		match self.transport.get(&url, Some(JSON_CONTENT_TYPE)).await {
			Ok(_) => RequestOutcome::Sent { url },
			Err(err) => {
				error!("{err}");
				RequestOutcome::Failed {
					url,
					reason: err.to_string(),
				}
			}
		}
	}
}
