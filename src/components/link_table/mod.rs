//! Fixed-column link inspection table: data model, theme and Leptos view.

mod component;
mod model;
mod theme;
mod types;

pub use component::{LinkTable, log_inputs};
pub use model::{Cell, LinkTableModel, Row, RowKey, TYPE_HEADER};
pub use theme::{Align, ColumnStyle, LinkTableTheme, PaneStyle, provide_link_table_theme};
pub use types::{Link, LinkTableError, LinkTableInputs, parse_links};
