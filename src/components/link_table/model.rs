use super::theme::{ColumnStyle, LinkTableTheme};
use super::types::{Link, LinkTableInputs};

/// Header text of the first column.
pub const TYPE_HEADER: &str = "Type";

/// One table cell: its text and the column style it inherits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
	/// Displayed text, verbatim.
	pub text: String,
	/// Inline style for the cell.
	pub style: ColumnStyle,
}

impl Cell {
	fn new(text: impl Into<String>, style: &ColumnStyle) -> Self {
		Self {
			text: text.into(),
			style: style.clone(),
		}
	}
}

/// Identity of a body row across re-renders.
///
/// Links carry no id of their own, so the position is part of the key to
/// keep duplicates distinct.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RowKey {
	/// Position in the input sequence.
	pub index: usize,
	/// Link category at that position.
	pub kind: String,
	/// Source endpoint at that position.
	pub source: String,
	/// Target endpoint at that position.
	pub target: String,
}

/// A body row: type, source, separator, target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
	/// Keyed-list identity.
	pub key: RowKey,
	/// Cells in display order.
	pub cells: [Cell; 4],
}

/// Everything the table view draws, independent of the DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkTableModel {
	/// Title region text.
	pub title: String,
	/// Header cells: `Type`, source label, separator, target label.
	pub header: [Cell; 4],
	/// One row per link, in input order.
	pub rows: Vec<Row>,
}

impl LinkTableModel {
	/// Lay out `inputs` with `theme`. Never fails; `inputs` is only read.
	pub fn build(inputs: &LinkTableInputs, theme: &LinkTableTheme) -> Self {
		let header = [
			Cell::new(TYPE_HEADER, &ColumnStyle::default()),
			Cell::new(inputs.source_label.as_str(), &theme.source),
			Cell::new(theme.separator.as_str(), &theme.separator_column),
			Cell::new(inputs.target_label.as_str(), &theme.target),
		];

		let rows = inputs
			.links
			.iter()
			.enumerate()
			.map(|(index, link)| Self::row(index, link, theme))
			.collect();

		Self {
			title: theme.title.clone(),
			header,
			rows,
		}
	}

	fn row(index: usize, link: &Link, theme: &LinkTableTheme) -> Row {
		Row {
			key: RowKey {
				index,
				kind: link.kind.clone(),
				source: link.source.clone(),
				target: link.target.clone(),
			},
			cells: [
				Cell::new(link.kind.as_str(), &theme.kind),
				Cell::new(link.source.as_str(), &theme.source),
				Cell::new(theme.separator.as_str(), &theme.separator_column),
				Cell::new(link.target.as_str(), &theme.target),
			],
		}
	}
}
