use std::time::Duration;

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use web_sys::MouseEvent;

use super::controls::{Control, ControlId};
use super::dispatch::StatusMessage;

const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Snackbar state. `seq` only grows, so an older timer never hides a newer
/// message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toast {
	seq: u64,
	message: Option<StatusMessage>,
}

/// Replace the current message; returns its sequence number, or `None` once
/// the panel is gone.
pub fn push_toast(toast: RwSignal<Toast>, message: StatusMessage) -> Option<u64> {
	toast.try_update(|t| {
		t.seq += 1;
		t.message = Some(message);
		t.seq
	})
}

/// Hide the message pushed as `seq`, unless a newer one replaced it.
pub fn expire_toast(toast: RwSignal<Toast>, seq: u64) {
	let current = toast.try_with_untracked(|t| t.seq);
	if current == Some(seq) {
		let _ = toast.try_update(|t| t.message = None);
	}
}

/// Show `message` and schedule it to disappear.
pub fn show_toast(toast: RwSignal<Toast>, message: StatusMessage) {
	if let Some(seq) = push_toast(toast, message) {
		set_timeout(move || expire_toast(toast, seq), TOAST_DURATION);
	}
}

/// Renders one anchor per control, in surface order.
#[component]
pub fn FilterButtons(controls: Vec<Control>, on_click: Callback<ControlId>) -> impl IntoView {
	controls
		.into_iter()
		.map(|control| view! { <FilterButton control=control on_click=on_click /> })
		.collect_view()
}

#[component]
fn FilterButton(control: Control, on_click: Callback<ControlId>) -> impl IntoView {
	let dom_id = control.id.dom_id();
	let is_aggregate = control.is_aggregate();
	let id = control.id;
	let handle_click = move |ev: MouseEvent| {
		ev.prevent_default();
		on_click.run(id.clone());
	};

	if is_aggregate {
		view! {
			<a
				href="#"
				id=dom_id
				class="button composed-button composed-button-big"
				on:click=handle_click
			>
				<p class="icon-text">{control.label}</p>
				<span class="material-icons">"visibility_off"</span>
			</a>
		}
		.into_any()
	} else {
		let color = control.swatch.unwrap_or_default();
		view! {
			<a href="#" id=dom_id class="button composed-button filter-button" on:click=handle_click>
				<p class="filter-name">{control.label}</p>
				<span class="filter-circle" style:background-color=color></span>
			</a>
		}
		.into_any()
	}
}

#[component]
pub fn TaskList(tasks: Vec<String>) -> impl IntoView {
	view! {
		<ul class="task-container">
			{tasks.into_iter().map(|task| view! { <li>{task}</li> }).collect_view()}
		</ul>
	}
}

/// Passive green/red snackbar for request outcomes.
#[component]
pub fn StatusSnackbar(toast: RwSignal<Toast>) -> impl IntoView {
	move || {
		toast.with(|t| t.message.clone()).map(|message| {
			let id = if message.ok { "snackbar-ok" } else { "snackbar-wrong" };
			view! {
				<div id=id class="show">
					<p>{message.text}</p>
				</div>
			}
		})
	}
}
