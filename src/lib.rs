//! Leptos client-side panel that drives folder highlighting on a local code
//! graph service.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

mod client;
mod components;
mod config;
mod error;
mod pages;
#[cfg(test)]
mod testing;

use crate::pages::not_found::NotFound;
use crate::pages::panel::CodeGraphPanel;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Routes the webview to the graph panel and handles 404's
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en-us" attr:dir="ltr" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=CodeGraphPanel />
			</Routes>
		</Router>
	}
}
