//! Link inspection pane: a Leptos CSR app around the [`LinkTable`] component.
//!
//! [`LinkTable`]: components::link_table::LinkTable

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

pub mod components;
mod pages;

use crate::components::link_table::{LinkTableTheme, provide_link_table_theme};
use crate::pages::inspector::Inspector;
use crate::pages::not_found::NotFound;

/// Route logs to the browser console and report panics there.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Root view. Every link table in the app shares one theme; `/` and
/// `/inspect` both open the inspection page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_link_table_theme(LinkTableTheme::default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Link inspection pane" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<main class="link-inspector-app">
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Inspector />
					<Route path=path!("/inspect") view=Inspector />
				</Routes>
			</main>
		</Router>
	}
}
