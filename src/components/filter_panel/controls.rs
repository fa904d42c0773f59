//! Structured control descriptors and the renderer that fills a surface.
//!
//! The Leptos view only walks a [`ControlSurface`]; ordering and identity
//! are decided here so they can be checked without a DOM.

use std::fmt;

use super::registry::FilterRegistry;
use crate::error::PanelError;

/// DOM id of the aggregate "Hide All" control.
pub const HIDE_ALL_DOM_ID: &str = "hide-all";

/// Filter DOM ids live under this prefix so no filter name can take the
/// aggregate's id.
const FILTER_DOM_PREFIX: &str = "filter-";

pub const HIDE_ALL_LABEL: &str = "Hide All";

/// Identity of a rendered control.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlId {
	/// Per-filter toggle, identified by the filter name.
	Filter(String),
	HideAll,
}

impl ControlId {
	/// The filter name, or `hide-all` for the aggregate control.
	pub fn as_str(&self) -> &str {
		match self {
			ControlId::Filter(name) => name,
			ControlId::HideAll => HIDE_ALL_DOM_ID,
		}
	}

	/// Value of the element's `id` attribute.
	pub fn dom_id(&self) -> String {
		match self {
			ControlId::Filter(name) => format!("{FILTER_DOM_PREFIX}{name}"),
			ControlId::HideAll => HIDE_ALL_DOM_ID.to_string(),
		}
	}
}

impl fmt::Display for ControlId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One interactive control on the surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
	pub id: ControlId,
	pub label: String,
	/// Only filter controls carry a swatch.
	pub swatch: Option<String>,
}

impl Control {
	pub fn is_aggregate(&self) -> bool {
		self.id == ControlId::HideAll
	}
}

/// Ordered container the controls are rendered into.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlSurface {
	controls: Vec<Control>,
}

impl ControlSurface {
	/// Append a control; a second control with the same identity is rejected.
	pub fn append(&mut self, control: Control) -> Result<(), PanelError> {
		if self.get(&control.id).is_some() {
			return Err(PanelError::DuplicateControl {
				id: control.id.dom_id(),
			});
		}
		self.controls.push(control);
		Ok(())
	}

	pub fn clear(&mut self) {
		self.controls.clear();
	}

	pub fn controls(&self) -> &[Control] {
		&self.controls
	}

	pub fn get(&self, id: &ControlId) -> Option<&Control> {
		self.controls.iter().find(|c| &c.id == id)
	}

	/// Control identities in append order.
	pub fn ids(&self) -> Vec<&str> {
		self.controls.iter().map(|c| c.id.as_str()).collect()
	}

	pub fn len(&self) -> usize {
		self.controls.len()
	}
}

/// Materializes a registry into a surface.
pub struct FilterControlRenderer;

impl FilterControlRenderer {
	/// Clear `surface`, then append one control per filter in registry order
	/// followed by the aggregate control when any filter exists.
	///
	/// On error the surface is left empty rather than half-filled.
	pub fn render(surface: &mut ControlSurface, registry: &FilterRegistry) -> Result<(), PanelError> {
		surface.clear();
		if let Err(err) = Self::fill(surface, registry) {
			surface.clear();
			return Err(err);
		}
		Ok(())
	}

	fn fill(surface: &mut ControlSurface, registry: &FilterRegistry) -> Result<(), PanelError> {
		for filter in registry.descriptors() {
			surface.append(Control {
				id: ControlId::Filter(filter.name.clone()),
				label: filter.name.clone(),
				swatch: Some(filter.color.clone()),
			})?;
		}
		if registry.has_aggregate() {
			surface.append(Control {
				id: ControlId::HideAll,
				label: HIDE_ALL_LABEL.to_string(),
				swatch: None,
			})?;
		}
		Ok(())
	}
}
