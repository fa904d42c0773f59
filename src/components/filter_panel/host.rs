//! Per-mount panel state and the rules for publishing a load cycle into it.
//!
//! Every cycle takes a generation number when it starts. Only the newest
//! cycle may publish, so a slow early load never replaces a later one.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, warn};

use super::pipeline::{LoadedPanel, load_panel};
use crate::client::{GraphClient, HttpTransport, Transport};
use crate::error::PanelError;

/// Placeholder shown until the first snapshot arrives.
pub const LOADING_TASK: &str = "Loading ...";

/// What happened to a finished load cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Published {
	Applied,
	/// The error is shown; earlier controls stay.
	Failed,
	/// A newer cycle started meanwhile.
	Stale,
	/// The panel was unmounted.
	Disposed,
}

/// Signal handles owned by one panel mount.
pub struct PanelHost<T: 'static = HttpTransport> {
	client: StoredValue<Rc<GraphClient<T>>, LocalStorage>,
	loaded: RwSignal<Option<Rc<LoadedPanel<T>>>, LocalStorage>,
	load_error: RwSignal<Option<String>>,
	generation: RwSignal<u64>,
}

impl<T: 'static> Clone for PanelHost<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: 'static> Copy for PanelHost<T> {}

impl<T: Transport + 'static> PanelHost<T> {
	/// Create the state for a new mount in the current owner, together with
	/// its one initial load cycle.
	pub fn mount(client: GraphClient<T>) -> (Self, impl Future<Output = ()> + 'static) {
		let host = Self {
			client: StoredValue::new_local(Rc::new(client)),
			loaded: RwSignal::new_local(None),
			load_error: RwSignal::new(None),
			generation: RwSignal::new(0),
		};
		(host, host.start_cycle())
	}

	/// Claim a new generation now and return the cycle to run.
	pub fn start_cycle(self) -> impl Future<Output = ()> + 'static {
		let generation = self.generation.try_update(|g| {
			*g += 1;
			*g
		});
		let client = self.client.try_get_value();
		async move {
			let (Some(generation), Some(client)) = (generation, client) else {
				return;
			};
			let result = load_panel(client).await;
			self.publish(generation, result);
		}
	}

	/// Apply the result of cycle `generation`, unless it is stale or the
	/// mount is gone.
	pub fn publish(
		self,
		generation: u64,
		result: Result<LoadedPanel<T>, PanelError>,
	) -> Published {
		match self.generation.try_get_untracked() {
			None => {
				debug!("panel closed before the graph arrived");
				return Published::Disposed;
			}
			Some(current) if current != generation => {
				debug!("dropping load cycle {generation}, cycle {current} is newer");
				return Published::Stale;
			}
			Some(_) => {}
		}

		match result {
			Ok(panel) => {
				if self.loaded.try_set(Some(Rc::new(panel))).is_some() {
					return Published::Disposed;
				}
				let _ = self.load_error.try_set(None);
				Published::Applied
			}
			Err(err) => {
				if err.is_transport_failure() {
					warn!("graph service unreachable: {err}");
				} else {
					error!("graph load failed: {err}");
				}
				if self.load_error.try_set(Some(err.to_string())).is_some() {
					return Published::Disposed;
				}
				Published::Failed
			}
		}
	}

	/// Latest published panel, tracked.
	pub fn loaded(self) -> Option<Rc<LoadedPanel<T>>> {
		self.loaded.try_get().flatten()
	}

	/// Latest published panel, without subscribing.
	pub fn current(self) -> Option<Rc<LoadedPanel<T>>> {
		self.loaded.try_get_untracked().flatten()
	}

	pub fn load_error(self) -> Option<String> {
		self.load_error.try_get().flatten()
	}

	/// Task labels, or the loading placeholder before the first load.
	pub fn tasks(self) -> Vec<String> {
		self.loaded()
			.map(|p| p.tasks.clone())
			.unwrap_or_else(|| vec![LOADING_TASK.to_string()])
	}

	/// Header summary: node and folder counts.
	pub fn summary(self) -> String {
		let (nodes, folders) = self
			.loaded()
			.map_or((0, 0), |p| (p.node_names.len(), p.registry.len()));
		format!("{nodes} nodes, {folders} folders")
	}
}
