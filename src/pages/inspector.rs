use leptos::prelude::*;

use crate::components::link_table::{Link, LinkTable, log_inputs, parse_links};

const SAMPLE_PAYLOAD: &str = r#"[
	{"type": "net", "source": "mcu.gpio1", "target": "led.anode"},
	{"type": "net", "source": "mcu.gnd", "target": "led.cathode"},
	{"type": "interface", "source": "mcu.i2c", "target": "sensor.i2c"},
	{"type": "power", "source": "ldo.vout", "target": "mcu.vcc"}
]"#;

/// Inspection page: an editable link payload shown through the link table.
#[component]
pub fn Inspector() -> impl IntoView {
	let (payload, set_payload) = signal(SAMPLE_PAYLOAD.to_string());
	let parsed = Memo::new(move |_| parse_links(&payload.get()));
	// Keep the last good rows on screen while the payload is being edited.
	let links = Memo::new(move |prev: Option<&Vec<Link>>| match parsed.get() {
		Ok(links) => links,
		Err(_) => prev.cloned().unwrap_or_default(),
	});

	view! {
		<div class="link-inspector">
			<LinkTable
				source="Source".to_string()
				target="Target".to_string()
				links=links
				on_render=Callback::new(log_inputs)
			/>

			<ErrorBoundary fallback=|errors| {
				view! {
					<p>"Link payload rejected:"</p>
					<ul>
						{move || {
							errors
								.get()
								.into_iter()
								.map(|(_, e)| view! { <li>{e.to_string()}</li> })
								.collect_view()
						}}
					</ul>
				}
			}>
				{move || parsed.get().map(|links| view! { <p>{format!("{} links", links.len())}</p> })}
			</ErrorBoundary>

			<textarea
				class="link-payload"
				rows="10"
				cols="80"
				prop:value=payload
				on:input=move |ev| set_payload.set(event_target_value(&ev))
			/>
		</div>
	}
}
