use serde::Deserialize;

/// One full read of `GET <base>graph`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GraphSnapshot {
	pub tasks: Vec<String>,
	/// Only the name is read.
	pub nodes: Vec<NodeSummary>,
	pub filters: Vec<FilterDescriptor>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NodeSummary {
	pub name: String,
}

/// A named, colored folder category the service can highlight.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FilterDescriptor {
	/// Unique; also the toggle path segment.
	pub name: String,
	pub color: String,
}
