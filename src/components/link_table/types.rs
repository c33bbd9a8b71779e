use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single source-target relationship with a category label.
///
/// Decoding is lenient: a missing, `null` or non-string field becomes an
/// empty string, so one bad record never blanks the pane.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
	/// Category label, serialized as `type`.
	#[serde(rename = "type", deserialize_with = "lenient_string")]
	pub kind: String,
	/// Endpoint on the source side.
	#[serde(deserialize_with = "lenient_string")]
	pub source: String,
	/// Endpoint on the target side.
	#[serde(deserialize_with = "lenient_string")]
	pub target: String,
}

impl Link {
	/// Build a link from its three fields.
	pub fn new(kind: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			kind: kind.into(),
			source: source.into(),
			target: target.into(),
		}
	}
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::String(s) => s,
		_ => String::new(),
	})
}

/// Everything a single render of the table consumes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkTableInputs {
	/// Header label above the source column.
	pub source_label: String,
	/// Header label above the target column.
	pub target_label: String,
	/// Rows in display order.
	pub links: Vec<Link>,
}

impl LinkTableInputs {
	/// Bundle labels and links for one render pass.
	pub fn new(
		source_label: impl Into<String>,
		target_label: impl Into<String>,
		links: Vec<Link>,
	) -> Self {
		Self {
			source_label: source_label.into(),
			target_label: target_label.into(),
			links,
		}
	}
}

/// Errors raised while decoding a link payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTableError {
	/// The payload is not valid JSON or not an array.
	Parse(String),
}

impl std::fmt::Display for LinkTableError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LinkTableError::Parse(msg) => write!(f, "Parse error: {}", msg),
		}
	}
}

impl std::error::Error for LinkTableError {}

/// Decode a JSON array of link records.
///
/// Only a payload that is not a JSON array is an error. Elements that are
/// not objects decode to an all-empty link.
pub fn parse_links(json: &str) -> Result<Vec<Link>, LinkTableError> {
	let value: Value =
		serde_json::from_str(json).map_err(|e| LinkTableError::Parse(e.to_string()))?;
	let Value::Array(items) = value else {
		return Err(LinkTableError::Parse(format!(
			"expected an array of links, found {}",
			json_kind(&value)
		)));
	};

	Ok(items
		.into_iter()
		.map(|item| match item {
			Value::Object(_) => serde_json::from_value(item).unwrap_or_default(),
			_ => Link::default(),
		})
		.collect())
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
