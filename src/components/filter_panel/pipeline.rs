//! One load cycle: fetch -> registry -> render -> bind.

use std::rc::Rc;

use log::{debug, info};

use super::controls::{ControlSurface, FilterControlRenderer};
use super::dispatch::ToggleDispatcher;
use super::registry::FilterRegistry;
use super::types::GraphSnapshot;
use crate::client::{GraphClient, HttpTransport, Transport};
use crate::error::PanelError;

/// Everything a successful load cycle produces. Published to the view as a
/// whole or not at all.
pub struct LoadedPanel<T = HttpTransport> {
	pub tasks: Vec<String>,
	pub node_names: Vec<String>,
	pub registry: FilterRegistry,
	pub surface: ControlSurface,
	/// Click routing for `surface`.
	pub dispatcher: ToggleDispatcher<T>,
}

/// Fetch a snapshot and build the panel from it.
pub async fn load_panel<T: Transport>(
	client: Rc<GraphClient<T>>,
) -> Result<LoadedPanel<T>, PanelError> {
	let snapshot = client.fetch_snapshot().await?;
	build_panel(client, snapshot)
}

/// Synchronous half of a load cycle.
pub fn build_panel<T: Transport>(
	client: Rc<GraphClient<T>>,
	snapshot: GraphSnapshot,
) -> Result<LoadedPanel<T>, PanelError> {
	let registry = FilterRegistry::build_from(&snapshot);
	let mut surface = ControlSurface::default();
	FilterControlRenderer::render(&mut surface, &registry)?;
	let dispatcher = ToggleDispatcher::bind(client, &surface, &registry)?;

	info!(
		"graph loaded: {} filters, {} nodes, {} tasks, {} bound controls",
		registry.len(),
		snapshot.nodes.len(),
		snapshot.tasks.len(),
		dispatcher.binding_count()
	);
	debug!("rendered controls: {:?}", surface.ids());

	Ok(LoadedPanel {
		tasks: snapshot.tasks,
		node_names: snapshot.nodes.into_iter().map(|n| n.name).collect(),
		registry,
		surface,
		dispatcher,
	})
}
