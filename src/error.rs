//! Error type shared by the graph client and the filter panel.

use thiserror::Error;

/// Everything that can go wrong between the panel and the graph service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
	/// The configured service root is not a usable http(s) URL.
	#[error("invalid graph service address '{value}': {reason}")]
	InvalidBaseUrl {
		value: String,
		reason: String,
	},

	/// The request never produced a response.
	#[error("request to {url} failed: {details}")]
	Transport {
		url: String,
		details: String,
	},

	/// The service answered with a non-success status.
	#[error("request to {url} returned HTTP {status}")]
	Status {
		url: String,
		status: u16,
	},

	/// The snapshot body did not match the expected shape.
	#[error("malformed graph snapshot: {details}")]
	MalformedResponse {
		details: String,
	},

	/// A control with the same DOM id is already on the surface.
	#[error("duplicate control id '{id}'")]
	DuplicateControl {
		id: String,
	},

	/// A listener target with no rendered control, or a click on an unbound control.
	#[error("no rendered control for binding target '{id}'")]
	BindingInvariantViolation {
		id: String,
	},
}

impl PanelError {
	/// Transport and status failures are both "could not reach the service".
	pub fn is_transport_failure(&self) -> bool {
		matches!(self, PanelError::Transport { .. } | PanelError::Status { .. })
	}
}
