//! Browser entry point: mounts the code graph panel into the page body.

// Dependencies are used by the library crate; this binary only mounts it.
#![allow(unused_crate_dependencies)]

use code_graph_panel::{App, init_logging};
use leptos::mount::mount_to_body;

fn main() {
	init_logging();
	mount_to_body(App);
}
