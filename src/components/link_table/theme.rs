use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Horizontal text alignment of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
	/// `text-align: left`
	Left,
	/// `text-align: center`
	Center,
	/// `text-align: right`
	Right,
}

impl Align {
	/// CSS keyword for this alignment.
	pub fn as_css(self) -> &'static str {
		match self {
			Align::Left => "left",
			Align::Center => "center",
			Align::Right => "right",
		}
	}
}

/// Width and alignment applied to every cell of a column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnStyle {
	/// Any CSS length, e.g. `100px`.
	pub width: Option<String>,
	/// Text alignment.
	pub align: Option<Align>,
}

impl ColumnStyle {
	/// A fixed-width column with the given alignment.
	pub fn fixed(width: impl Into<String>, align: Align) -> Self {
		Self {
			width: Some(width.into()),
			align: Some(align),
		}
	}

	/// Inline CSS for a cell. Empty when nothing is set.
	pub fn to_css(&self) -> String {
		let mut css = String::new();
		if let Some(align) = self.align {
			css.push_str(&format!("text-align: {};", align.as_css()));
		}
		if let Some(width) = &self.width {
			if !css.is_empty() {
				css.push(' ');
			}
			css.push_str(&format!("width: {};", width));
		}
		css
	}
}

/// Decoration of the bordered container around the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneStyle {
	/// CSS background color.
	pub background: String,
	/// CSS border shorthand.
	pub border: String,
	/// Corner radius.
	pub radius: String,
	/// Outer spacing.
	pub margin: String,
	/// Inner spacing.
	pub padding: String,
}

impl Default for PaneStyle {
	fn default() -> Self {
		Self {
			background: "lightgray".into(),
			border: "2px solid grey".into(),
			radius: "10px".into(),
			margin: "10px".into(),
			padding: "10px".into(),
		}
	}
}

impl PaneStyle {
	/// Inline CSS for the pane container.
	pub fn to_css(&self) -> String {
		format!(
			"background-color: {}; border: {}; border-radius: {}; margin: {}; padding: {};",
			self.background, self.border, self.radius, self.margin, self.padding
		)
	}
}

/// Layout and style configuration for [`LinkTable`](super::LinkTable).
///
/// Resolved per render from the `theme` prop, then from context (see
/// [`provide_link_table_theme`]), then from [`Default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkTableTheme {
	/// Text of the title region.
	pub title: String,
	/// Glyph shown between source and target.
	pub separator: String,
	/// Container decoration.
	pub pane: PaneStyle,
	/// Style of the `type` column body cells.
	pub kind: ColumnStyle,
	/// Style of the source column.
	pub source: ColumnStyle,
	/// Style of the separator column.
	pub separator_column: ColumnStyle,
	/// Style of the target column.
	pub target: ColumnStyle,
}

impl Default for LinkTableTheme {
	fn default() -> Self {
		Self {
			title: "Link inspection pane".into(),
			separator: "~".into(),
			pane: PaneStyle::default(),
			kind: ColumnStyle::fixed("100px", Align::Center),
			source: ColumnStyle::fixed("100px", Align::Right),
			separator_column: ColumnStyle::default(),
			target: ColumnStyle::fixed("100px", Align::Left),
		}
	}
}

/// Make `theme` the default for every link table below the current owner.
pub fn provide_link_table_theme(theme: LinkTableTheme) {
	provide_context(theme);
}
