use std::collections::HashSet;

use log::warn;

use super::types::{FilterDescriptor, GraphSnapshot};

/// The filters rendered in the current load cycle, in snapshot order.
///
/// Rebuilt from scratch on every load; names are unique and non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterRegistry {
	filters: Vec<FilterDescriptor>,
}

impl FilterRegistry {
	/// Order-preserving pass over `snapshot.filters`, skipping empty and
	/// repeated names.
	pub fn build_from(snapshot: &GraphSnapshot) -> Self {
		let mut seen = HashSet::new();
		let mut filters = Vec::with_capacity(snapshot.filters.len());

		for filter in &snapshot.filters {
			if filter.name.is_empty() {
				warn!("skipping filter with empty name");
				continue;
			}
			if !seen.insert(filter.name.as_str()) {
				warn!("skipping duplicate filter '{}'", filter.name);
				continue;
			}
			filters.push(filter.clone());
		}

		Self { filters }
	}

	/// Registered filters in render order.
	pub fn descriptors(&self) -> &[FilterDescriptor] {
		&self.filters
	}

	/// Registered filter names in render order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.filters.iter().map(|f| f.name.as_str())
	}

	pub fn len(&self) -> usize {
		self.filters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.filters.is_empty()
	}

	/// The "Hide All" control exists iff at least one filter does.
	pub fn has_aggregate(&self) -> bool {
		!self.is_empty()
	}
}
