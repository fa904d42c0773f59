use leptos::callback::Callback;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Link, Style, Title};
use leptos_router::hooks::use_query_map;
use log::{debug, error};
use web_sys::MouseEvent;

use crate::client::{GraphClient, HttpTransport};
use crate::components::filter_panel::{
	ControlId, FilterButtons, PanelHost, StatusMessage, StatusSnackbar, TaskList, Toast, show_toast,
};
use crate::config::{BASE_QUERY_PARAM, PanelConfig};

const PANEL_CSS: &str = include_str!("panel.css");
const MATERIAL_ICONS: &str = "https://fonts.googleapis.com/icon?family=Material+Icons";

/// The code graph panel. Every mount owns its own client and state and
/// starts exactly one load cycle.
#[component]
pub fn CodeGraphPanel() -> impl IntoView {
	let query = use_query_map();
	let base = query.with_untracked(|q| q.get(BASE_QUERY_PARAM));
	let config = PanelConfig::resolve(base.as_deref());
	debug!("graph service at {}", config.base_url());

	let (host, initial_load) = PanelHost::mount(GraphClient::new(&config, HttpTransport::default()));
	spawn_local(initial_load);
	let toast = RwSignal::new(Toast::default());

	let on_control_click = Callback::new(move |id: ControlId| {
		let Some(panel) = host.current() else {
			return;
		};
		spawn_local(async move {
			match panel.dispatcher.dispatch(&id).await {
				Ok(dispatched) => show_toast(toast, StatusMessage::from(&dispatched)),
				Err(err) => error!("{err}"),
			}
		});
	});

	let on_reload = move |ev: MouseEvent| {
		ev.prevent_default();
		spawn_local(host.start_cycle());
	};

	view! {
		<Title text="Code Graph" />
		<Link rel="stylesheet" href=MATERIAL_ICONS />
		<Style>{PANEL_CSS}</Style>

		<div id="experiment-container">
			<h1 class="build-header">
				"Graph interactions" <span class="material-icons">"build"</span>
			</h1>
			<p class="card-subtitle build-header">
				{move || host.summary()}
			</p>

			<div class="button-tools">
				<div class="card-controls button-filters">
					<div class="button-container">
						<h2 class="cart-title">
							"Folder highlighting" <span class="material-icons">"filter_alt"</span>
						</h2>
						<div class="buttons-container" id="button-container">
							{move || {
								host.loaded()
									.map(|panel| {
										view! {
											<FilterButtons
												controls=panel.surface.controls().to_vec()
												on_click=on_control_click
											/>
										}
									})
							}}
						</div>
						{move || host.load_error().map(|err| view! { <p class="load-error">{err}</p> })}
						<a
							href="#"
							id="reload-experiment-btn"
							class="button composed-button icon-button"
							on:click=on_reload
						>
							<p class="icon-text">"Reload"</p>
							<span class="material-icons">"refresh"</span>
						</a>
					</div>
				</div>
			</div>

			{move || view! { <TaskList tasks=host.tasks() /> }}
		</div>

		<StatusSnackbar toast=toast />
	}
}
