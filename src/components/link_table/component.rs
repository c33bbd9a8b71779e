use leptos::prelude::*;
use log::debug;

use super::model::{Cell, LinkTableModel, Row};
use super::theme::LinkTableTheme;
use super::types::{Link, LinkTableInputs};

/// Fixed-column table of links between a source and a target entity.
///
/// Rows appear in the order of `links` and are keyed by position and
/// content, so replacing `links` replaces exactly the rows that changed.
#[component]
pub fn LinkTable(
	/// Header label of the source column.
	#[prop(into)]
	source: Signal<String>,
	/// Header label of the target column.
	#[prop(into)]
	target: Signal<String>,
	/// Links to display, in display order.
	#[prop(into)]
	links: Signal<Vec<Link>>,
	/// Observer called with the inputs of every render.
	#[prop(optional)]
	on_render: Option<Callback<LinkTableInputs>>,
	/// Overrides the context-provided or default theme.
	#[prop(optional)]
	theme: Option<LinkTableTheme>,
) -> impl IntoView {
	let theme = theme
		.or_else(use_context::<LinkTableTheme>)
		.unwrap_or_default();
	let pane_css = theme.pane.to_css();

	let (inputs, model) = table_model(source, target, links, theme);

	Effect::new(move |_| notify(on_render.as_ref(), inputs.get()));

	view! {
		<div class="link-inspection-pane" style=pane_css>
			<div style="text-align: center;">{move || model.with(|m| m.title.clone())}</div>
			<table class="table">
				<thead>
					<tr>
						{move || {
							model.with(|m| m.header.clone().into_iter().map(header_cell).collect_view())
						}}
					</tr>
				</thead>
				<tbody>
					<For
						each=move || model.with(|m| m.rows.clone())
						key=|row: &Row| row.key.clone()
						children=body_row
					/>
				</tbody>
			</table>
		</div>
	}
}

/// Reactive layout: the inputs of the current render and the model built
/// from them. Both recompute whenever a label or the link list changes.
fn table_model(
	source: Signal<String>,
	target: Signal<String>,
	links: Signal<Vec<Link>>,
	theme: LinkTableTheme,
) -> (Memo<LinkTableInputs>, Memo<LinkTableModel>) {
	let inputs = Memo::new(move |_| LinkTableInputs {
		source_label: source.get(),
		target_label: target.get(),
		links: links.get(),
	});
	let model = Memo::new(move |_| inputs.with(|inputs| LinkTableModel::build(inputs, &theme)));
	(inputs, model)
}

fn header_cell(cell: Cell) -> impl IntoView {
	view! { <th style=cell.style.to_css()>{cell.text}</th> }
}

fn body_row(row: Row) -> impl IntoView {
	view! {
		<tr>
			{row
				.cells
				.into_iter()
				.map(|cell| view! { <td style=cell.style.to_css()>{cell.text}</td> })
				.collect_view()}
		</tr>
	}
}

fn notify(on_render: Option<&Callback<LinkTableInputs>>, inputs: LinkTableInputs) {
	if let Some(observer) = on_render {
		observer.run(inputs);
	}
}

/// Render observer that writes the table inputs to the debug log.
pub fn log_inputs(inputs: LinkTableInputs) {
	debug!(
		"link table: source={:?} target={:?} links={}",
		inputs.source_label,
		inputs.target_label,
		inputs.links.len()
	);
	for (i, link) in inputs.links.iter().enumerate() {
		debug!("  [{}] {:?}", i, link);
	}
}

#[cfg(test)]
mod tests {
	use std::sync::{Arc, Mutex};

	use super::*;
	use crate::components::link_table::model::RowKey;

	fn labels() -> (Signal<String>, Signal<String>) {
		(
			Signal::from("Source".to_string()),
			Signal::from("Target".to_string()),
		)
	}

	fn cell_texts(row: &Row) -> Vec<String> {
		row.cells.iter().map(|c| c.text.clone()).collect()
	}

	#[test]
	fn new_links_replace_all_previous_rows() {
		let owner = Owner::new();
		owner.with(|| {
			let (source, target) = labels();
			let (links, set_links) = signal(vec![
				Link::new("net", "A", "B"),
				Link::new("bus", "C", "D"),
				Link::new("pwr", "E", "F"),
			]);
			let (_, model) = table_model(source, target, links.into(), LinkTableTheme::default());

			assert_eq!(model.with_untracked(|m| m.rows.len()), 3);

			set_links.set(vec![Link::new("gnd", "G", "H")]);

			let rows = model.with_untracked(|m| m.rows.clone());
			assert_eq!(rows.len(), 1);
			assert_eq!(cell_texts(&rows[0]), ["gnd", "G", "~", "H"]);
			assert_eq!(rows[0].key.index, 0);
			assert_eq!(rows[0].key.kind, "gnd");
		});
	}

	#[test]
	fn unchanged_rows_keep_their_keys_across_updates() {
		let owner = Owner::new();
		owner.with(|| {
			let (source, target) = labels();
			let (links, set_links) =
				signal(vec![Link::new("net", "A", "B"), Link::new("bus", "C", "D")]);
			let (_, model) = table_model(source, target, links.into(), LinkTableTheme::default());
			let keys = move || -> Vec<RowKey> {
				model.with_untracked(|m| m.rows.iter().map(|r| r.key.clone()).collect())
			};
			let before = keys();

			set_links.update(|links| links[1] = Link::new("pwr", "E", "F"));

			let after = keys();
			assert_eq!(before[0], after[0]);
			assert_ne!(before[1], after[1]);
		});
	}

	#[test]
	fn label_changes_reach_the_header() {
		let owner = Owner::new();
		owner.with(|| {
			let (source, set_source) = signal("Source".to_string());
			let (_, target) = labels();
			let (links, _) = signal(Vec::<Link>::new());
			let (_, model) =
				table_model(source.into(), target, links.into(), LinkTableTheme::default());

			set_source.set("mcu".to_string());

			let header = model.with_untracked(|m| m.header.clone());
			assert_eq!(header[1].text, "mcu");
			assert!(model.with_untracked(|m| m.rows.is_empty()));
		});
	}

	#[test]
	fn observer_receives_the_current_render_inputs() {
		let owner = Owner::new();
		owner.with(|| {
			let seen = Arc::new(Mutex::new(Vec::new()));
			let sink = seen.clone();
			let observer = Callback::new(move |inputs: LinkTableInputs| {
				sink.lock().unwrap().push(inputs);
			});

			let (source, target) = labels();
			let (links, set_links) = signal(vec![Link::new("net", "A.1", "B.2")]);
			let (inputs, model) =
				table_model(source, target, links.into(), LinkTableTheme::default());

			notify(Some(&observer), inputs.get_untracked());
			set_links.set(vec![Link::new("bus", "C", "D"), Link::new("pwr", "E", "F")]);
			notify(Some(&observer), inputs.get_untracked());
			notify(None, inputs.get_untracked());

			let seen = seen.lock().unwrap();
			assert_eq!(seen.len(), 2);
			assert_eq!(
				seen[0],
				LinkTableInputs::new("Source", "Target", vec![Link::new("net", "A.1", "B.2")])
			);
			assert_eq!(
				seen[1].links,
				vec![Link::new("bus", "C", "D"), Link::new("pwr", "E", "F")]
			);
			// What the observer saw is what the model was built from.
			assert_eq!(model.with_untracked(|m| m.rows.len()), seen[1].links.len());
		});
	}

	#[test]
	fn log_inputs_accepts_empty_tables() {
		log_inputs(LinkTableInputs::default());
	}
}
