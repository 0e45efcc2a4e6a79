//! Props: the named input values of a component.

use crate::attributes::Attributes;
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// An ordered mapping from prop name to JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Props(Map<String, Value>);

impl Props {
	/// Creates empty props.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a prop (builder style).
	pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(name, value);
		self
	}

	/// Sets a prop, replacing any previous value.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
		self.0.insert(name.into(), value.into());
	}

	/// Returns the value of a prop.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	/// Returns `true` if the prop was supplied.
	pub fn contains_key(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	/// Iterates props in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(name, value)| (name.as_str(), value))
	}

	/// Number of props.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if no props were supplied.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Converts the props into tag attributes.
	pub fn to_attributes(&self) -> Attributes {
		self.0
			.iter()
			.map(|(name, value)| (name.clone(), value.clone()))
			.collect()
	}

	/// Serializes any value into props.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidContent`] unless the value serializes to a JSON object.
	pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
		let value = serde_json::to_value(value).map_err(|e| Error::InvalidContent {
			value: e.to_string(),
		})?;
		match value {
			Value::Object(map) => Ok(Self(map)),
			other => Err(Error::InvalidContent {
				value: other.to_string(),
			}),
		}
	}
}

impl From<()> for Props {
	fn from(_: ()) -> Self {
		Self::new()
	}
}

impl From<Map<String, Value>> for Props {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Props {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut props = Self::new();
		for (name, value) in iter {
			props.insert(name, value);
		}
		props
	}
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Props {
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}

/// Builds [`Props`] from `name => value` pairs.
///
/// ```
/// use weft_core::props;
///
/// let props = props! { "label" => "Email", "size" => 3 };
/// assert_eq!(props.get("size"), Some(&serde_json::json!(3)));
/// ```
#[macro_export]
macro_rules! props {
	() => {
		$crate::Props::new()
	};
	($($name:expr => $value:expr),+ $(,)?) => {
		$crate::Props::new()$(.with($name, $value))+
	};
}
