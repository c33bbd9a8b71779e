use link_inspector::{App, init_logging};

// Used through the library crate only.
use console_error_panic_hook as _;
use console_log as _;
use leptos_meta as _;
use leptos_router as _;
use log as _;
use serde as _;
use serde_json as _;

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
