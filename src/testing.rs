//! In-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::client::Transport;
use crate::error::PanelError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RecordedRequest {
	pub url: String,
	pub content_type: Option<String>,
}

#[derive(Default)]
struct Inner {
	bodies: HashMap<String, String>,
	statuses: HashMap<String, u16>,
	fail_all: bool,
	requests: Vec<RecordedRequest>,
}

/// Records every request; answers from canned bodies, `""` otherwise.
/// Clones share state so a test can keep a handle after moving one into a client.
#[derive(Clone, Default)]
pub(crate) struct RecordingTransport {
	inner: Rc<RefCell<Inner>>,
}

impl RecordingTransport {
	pub fn respond(self, url: &str, body: &str) -> Self {
		self.inner
			.borrow_mut()
			.bodies
			.insert(url.to_string(), body.to_string());
		self
	}

	pub fn status(self, url: &str, status: u16) -> Self {
		self.inner.borrow_mut().statuses.insert(url.to_string(), status);
		self
	}

	pub fn fail_all(self) -> Self {
		self.inner.borrow_mut().fail_all = true;
		self
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.inner.borrow().requests.clone()
	}

	pub fn urls(&self) -> Vec<String> {
		self.requests().into_iter().map(|r| r.url).collect()
	}
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
	async fn get(&self, url: &str, content_type: Option<&str>) -> Result<String, PanelError> {
		let mut inner = self.inner.borrow_mut();
		inner.requests.push(RecordedRequest {
			url: url.to_string(),
			content_type: content_type.map(str::to_string),
		});
		if inner.fail_all {
			return Err(PanelError::Transport {
				url: url.to_string(),
				details: "connection refused".into(),
			});
		}
		if let Some(&status) = inner.statuses.get(url) {
			return Err(PanelError::Status {
				url: url.to_string(),
				status,
			});
		}
		Ok(inner.bodies.get(url).cloned().unwrap_or_default())
	}
}
