//! Click routing: rendered control -> graph service request.
//!
//! The client keeps no per-filter toggle state. Every click on a filter sends
//! the same toggle request and the service decides what it means.

use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use super::controls::{ControlId, ControlSurface};
use super::registry::FilterRegistry;
use crate::client::{GraphClient, HttpTransport, RequestOutcome, Transport};
use crate::error::PanelError;

/// What a bound control does when clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlAction {
	/// `GET <base>graph-color/toggle/<name>`
	Toggle(String),
	/// `GET <base>graph-color/transparent`
	HideAll,
}

/// A click that went out, with its result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatched {
	pub action: ControlAction,
	pub outcome: RequestOutcome,
}

/// Routes clicks on the controls of one render cycle.
pub struct ToggleDispatcher<T = HttpTransport> {
	client: Rc<GraphClient<T>>,
	bindings: HashMap<ControlId, ControlAction>,
}

impl<T: Transport> ToggleDispatcher<T> {
	/// Bind every registered filter, plus the aggregate control when present,
	/// to its action.
	///
	/// Every target must exist on `surface`; a miss means the renderer and
	/// the registry disagree and is reported as
	/// [`PanelError::BindingInvariantViolation`].
	pub fn bind(
		client: Rc<GraphClient<T>>,
		surface: &ControlSurface,
		registry: &FilterRegistry,
	) -> Result<Self, PanelError> {
		let mut targets: Vec<ControlId> = registry
			.names()
			.map(|name| ControlId::Filter(name.to_string()))
			.collect();
		if registry.has_aggregate() {
			targets.push(ControlId::HideAll);
		}

		let mut bindings = HashMap::with_capacity(targets.len());
		for id in targets {
			if surface.get(&id).is_none() {
				return Err(PanelError::BindingInvariantViolation {
					id: id.as_str().to_string(),
				});
			}
			let action = match &id {
				ControlId::Filter(name) => ControlAction::Toggle(name.clone()),
				ControlId::HideAll => ControlAction::HideAll,
			};
			bindings.insert(id, action);
		}

		Ok(Self { client, bindings })
	}

	/// Action bound to `id`, if any.
	pub fn action_for(&self, id: &ControlId) -> Option<&ControlAction> {
		self.bindings.get(id)
	}

	pub fn binding_count(&self) -> usize {
		self.bindings.len()
	}

	/// Handle a click on `id`. Request failures come back inside
	/// [`Dispatched::outcome`]; only a click on an unbound control is an error.
	pub async fn dispatch(&self, id: &ControlId) -> Result<Dispatched, PanelError> {
		let action = self
			.action_for(id)
			.cloned()
			.ok_or_else(|| PanelError::BindingInvariantViolation {
				id: id.as_str().to_string(),
			})?;
		let outcome = match &action {
			ControlAction::Toggle(name) => self.client.toggle_filter(name).await,
			ControlAction::HideAll => self.client.hide_all().await,
		};
		match &outcome {
			RequestOutcome::Sent { url } => debug!("click on '{id}' -> {url}"),
			RequestOutcome::Failed { url, reason } => debug!("click on '{id}' -> {url} failed: {reason}"),
		}
		Ok(Dispatched { action, outcome })
	}
}

/// Passive feedback shown after a request completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
	pub text: String,
	/// Green when true, red otherwise.
	pub ok: bool,
}

impl From<&Dispatched> for StatusMessage {
	fn from(dispatched: &Dispatched) -> Self {
		let ok = dispatched.outcome.is_sent();
		let text = match (&dispatched.action, ok) {
			(ControlAction::Toggle(name), true) => format!("Filter '{name}' applied"),
			(ControlAction::Toggle(name), false) => {
				format!("Could not toggle filter '{name}'. Try again")
			}
			(ControlAction::HideAll, true) => "Graph hidden".to_string(),
			(ControlAction::HideAll, false) => "Could not hide the graph. Try again".to_string(),
		};
		Self { text, ok }
	}
}

#[cfg(test)]
mod tests {
	use futures::executor::block_on;
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::filter_panel::controls::FilterControlRenderer;
	use crate::components::filter_panel::types::{FilterDescriptor, GraphSnapshot};
	use crate::config::PanelConfig;
	use crate::testing::RecordingTransport;

	fn setup(
		names: &[&str],
		transport: RecordingTransport,
	) -> (ControlSurface, FilterRegistry, Rc<GraphClient<RecordingTransport>>) {
		let registry = FilterRegistry::build_from(&GraphSnapshot {
			filters: names
				.iter()
				.map(|n| FilterDescriptor {
					name: n.to_string(),
					color: "#abcdef".into(),
				})
				.collect(),
			..Default::default()
		});
		let mut surface = ControlSurface::default();
		FilterControlRenderer::render(&mut surface, &registry).unwrap();
		let client = Rc::new(GraphClient::new(&PanelConfig::default(), transport));
		(surface, registry, client)
	}

	#[test]
	fn filter_click_sends_one_encoded_toggle() {
		let transport = RecordingTransport::default();
		let (surface, registry, client) = setup(&["My Folder", "src"], transport.clone());
		let dispatcher = ToggleDispatcher::bind(client, &surface, &registry).unwrap();

		let dispatched = block_on(dispatcher.dispatch(&ControlId::Filter("My Folder".into()))).unwrap();
		assert_eq!(dispatched.action, ControlAction::Toggle("My Folder".into()));
		assert_eq!(
			transport.urls(),
			vec!["http://localhost:3000/graph-color/toggle/My%20Folder".to_string()]
		);
	}

	#[test]
	fn repeated_clicks_send_the_same_request() {
		let transport = RecordingTransport::default();
		let (surface, registry, client) = setup(&["src"], transport.clone());
		let dispatcher = ToggleDispatcher::bind(client, &surface, &registry).unwrap();
		let id = ControlId::Filter("src".into());

		block_on(dispatcher.dispatch(&id)).unwrap();
		block_on(dispatcher.dispatch(&id)).unwrap();
		let urls = transport.urls();
		assert_eq!(urls.len(), 2);
		assert_eq!(urls[0], urls[1]);
	}

	#[test]
	fn aggregate_click_only_hits_transparent() {
		let transport = RecordingTransport::default();
		let (surface, registry, client) = setup(&["src", "test"], transport.clone());
		let dispatcher = ToggleDispatcher::bind(client, &surface, &registry).unwrap();

		block_on(dispatcher.dispatch(&ControlId::HideAll)).unwrap();
		assert_eq!(
			transport.urls(),
			vec!["http://localhost:3000/graph-color/transparent".to_string()]
		);
	}

	#[test]
	fn no_filters_means_no_aggregate_binding() {
		let transport = RecordingTransport::default();
		let (surface, registry, client) = setup(&[], transport.clone());
		let dispatcher = ToggleDispatcher::bind(client, &surface, &registry).unwrap();

		assert_eq!(dispatcher.binding_count(), 0);
		assert!(dispatcher.action_for(&ControlId::HideAll).is_none());
		let err = block_on(dispatcher.dispatch(&ControlId::HideAll)).unwrap_err();
		assert!(matches!(err, PanelError::BindingInvariantViolation { .. }));
		assert!(transport.urls().is_empty());
	}

	#[test]
	fn binding_a_target_missing_from_the_surface_fails() {
		let (_, registry, client) = setup(&["src"], RecordingTransport::default());
		let result = ToggleDispatcher::bind(client, &ControlSurface::default(), &registry);
		assert_eq!(
			result.err(),
			Some(PanelError::BindingInvariantViolation { id: "src".into() })
		);
	}

	#[test]
	fn failed_request_becomes_red_status() {
		let transport = RecordingTransport::default().fail_all();
		let (surface, registry, client) = setup(&["src"], transport);
		let dispatcher = ToggleDispatcher::bind(client, &surface, &registry).unwrap();

		let dispatched = block_on(dispatcher.dispatch(&ControlId::Filter("src".into()))).unwrap();
		let status = StatusMessage::from(&dispatched);
		assert!(!status.ok);
		assert_eq!(status.text, "Could not toggle filter 'src'. Try again");
	}

	#[test]
	fn status_for_successful_hide_all() {
		let dispatched = Dispatched {
			action: ControlAction::HideAll,
			outcome: RequestOutcome::Sent {
				url: "http://localhost:3000/graph-color/transparent".into(),
			},
		};
		assert_eq!(
			StatusMessage::from(&dispatched),
			StatusMessage {
				text: "Graph hidden".into(),
				ok: true,
			}
		);
	}
}
