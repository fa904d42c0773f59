use leptos::prelude::*;

/// Fallback for any route other than the panel.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="spinner-center">
			<h1>"Nothing here"</h1>
			<p>"The code graph panel lives at the root route."</p>
		</div>
	}
}
