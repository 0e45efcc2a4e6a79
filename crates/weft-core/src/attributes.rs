//! Tag attributes.
//!
//! Attribute values are normalized on the way in: every scalar becomes a
//! single-element list, so multi-valued attributes such as `class` render
//! space-joined no matter how they were supplied. Booleans and nested
//! mappings keep their own shape and are expanded by the renderer.
//!
//! ## Example
//!
//! ```
//! use weft_core::{AttrValue, attrs};
//!
//! let attributes = attrs! {
//!     "id" => "title",
//!     "class" => ["c1", "c2"],
//!     "hidden" => false,
//! };
//!
//! assert_eq!(attributes.get("id"), Some(&AttrValue::List(vec!["title".into()])));
//! assert_eq!(attributes.len(), 3);
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::borrow::Cow;

/// A normalized attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// One or more scalar values, rendered space-joined.
	List(Vec<String>),
	/// Present (`true`) or omitted (`false`).
	Bool(bool),
	/// Nested attributes, expanded into `name-subkey` pairs.
	Map(Attributes),
}

impl AttrValue {
	/// Returns the space-joined value of a list attribute.
	pub fn joined(&self) -> Option<String> {
		match self {
			AttrValue::List(values) => Some(values.join(" ")),
			_ => None,
		}
	}
}

/// Ordered attribute mapping with unique keys.
///
/// Insertion order is render order. Inserting an existing key replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: Vec<(String, AttrValue)>,
}

impl Attributes {
	/// Creates an empty attribute mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an attribute (builder style).
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Adds an attribute, replacing any previous value under the same name.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((name, value)),
		}
	}

	/// Returns the value stored under `name`.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, value)| value)
	}

	/// Returns `true` if `name` is present.
	pub fn contains_key(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Iterates attributes in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.entries
			.iter()
			.map(|(name, value)| (name.as_str(), value))
	}

	/// Number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when there are no attributes.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl From<()> for Attributes {
	fn from(_: ()) -> Self {
		Self::new()
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Self::new();
		for (name, value) in iter {
			attributes.insert(name, value);
		}
		attributes
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}

impl Serialize for Attributes {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (name, value) in &self.entries {
			map.serialize_entry(name, value)?;
		}
		map.end()
	}
}

impl Serialize for AttrValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			AttrValue::List(values) => values.serialize(serializer),
			AttrValue::Bool(flag) => serializer.serialize_bool(*flag),
			AttrValue::Map(nested) => nested.serialize(serializer),
		}
	}
}

// Scalar conversions: everything textual becomes a one-element list.

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::List(vec![value.to_string()])
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::List(vec![value])
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::List(vec![value.clone()])
	}
}

impl From<Cow<'_, str>> for AttrValue {
	fn from(value: Cow<'_, str>) -> Self {
		AttrValue::List(vec![value.into_owned()])
	}
}

macro_rules! impl_attr_value_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(value: $ty) -> Self {
					AttrValue::List(vec![value.to_string()])
				}
			}
		)*
	};
}

impl_attr_value_display!(char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Bool(value)
	}
}

impl From<Attributes> for AttrValue {
	fn from(value: Attributes) -> Self {
		AttrValue::Map(value)
	}
}

impl<T: ToString> From<Vec<T>> for AttrValue {
	fn from(values: Vec<T>) -> Self {
		AttrValue::List(values.iter().map(ToString::to_string).collect())
	}
}

impl<T: ToString, const N: usize> From<[T; N]> for AttrValue {
	fn from(values: [T; N]) -> Self {
		AttrValue::List(values.iter().map(ToString::to_string).collect())
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(AttrValue::Bool(false), Into::into)
	}
}

impl From<Value> for AttrValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => AttrValue::Bool(false),
			Value::Bool(flag) => AttrValue::Bool(flag),
			Value::String(text) => AttrValue::List(vec![text]),
			Value::Number(number) => AttrValue::List(vec![number.to_string()]),
			Value::Array(items) => AttrValue::List(items.into_iter().map(scalar_text).collect()),
			Value::Object(map) => AttrValue::Map(map.into_iter().collect()),
		}
	}
}

fn scalar_text(value: Value) -> String {
	match value {
		Value::String(text) => text,
		other => other.to_string(),
	}
}

/// Builds [`Attributes`] from `name => value` pairs.
///
/// Values go through the same normalization as [`Attributes::insert`].
#[macro_export]
macro_rules! attrs {
	() => {
		$crate::Attributes::new()
	};
	($($name:expr => $value:expr),+ $(,)?) => {
		$crate::Attributes::new()$(.with($name, $value))+
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_scalar_normalized_to_single_element_list() {
		let attributes = Attributes::new().with("id", "title").with("tabindex", 3);

		assert_eq!(attributes.get("id"), Some(&AttrValue::List(vec!["title".into()])));
		assert_eq!(attributes.get("tabindex"), Some(&AttrValue::List(vec!["3".into()])));
	}

	#[rstest]
	fn test_list_values_kept_in_order() {
		let attributes = Attributes::new().with("class", vec!["c1", "c2"]);
		assert_eq!(
			attributes.get("class").and_then(AttrValue::joined),
			Some("c1 c2".to_string())
		);
	}

	#[rstest]
	fn test_insert_replaces_in_place() {
		let mut attributes = attrs! { "id" => "a", "class" => "x" };
		attributes.insert("id", "b");

		let names: Vec<&str> = attributes.iter().map(|(name, _)| name).collect();
		assert_eq!(names, vec!["id", "class"]);
		assert_eq!(attributes.get("id"), Some(&AttrValue::from("b")));
	}

	#[rstest]
	fn test_boolean_and_nested_values_keep_shape() {
		let attributes = attrs! {
			"disabled" => true,
			"data" => attrs! { "foo" => 1, "bar" => "x" },
		};

		assert_eq!(attributes.get("disabled"), Some(&AttrValue::Bool(true)));
		match attributes.get("data") {
			Some(AttrValue::Map(nested)) => assert_eq!(nested.len(), 2),
			other => panic!("expected nested map, got {:?}", other),
		}
	}

	#[rstest]
	fn test_option_none_is_omitted_boolean() {
		assert_eq!(AttrValue::from(None::<&str>), AttrValue::Bool(false));
		assert_eq!(AttrValue::from(Some("x")), AttrValue::from("x"));
	}

	#[rstest]
	#[case(json!("x"), AttrValue::List(vec!["x".into()]))]
	#[case(json!(7), AttrValue::List(vec!["7".into()]))]
	#[case(json!(true), AttrValue::Bool(true))]
	#[case(json!(null), AttrValue::Bool(false))]
	#[case(json!(["a", 1]), AttrValue::List(vec!["a".into(), "1".into()]))]
	fn test_json_values_normalize(#[case] value: Value, #[case] expected: AttrValue) {
		assert_eq!(AttrValue::from(value), expected);
	}

	#[rstest]
	fn test_json_object_becomes_nested_map() {
		let value = AttrValue::from(json!({ "foo": 1, "bar": "x" }));
		let expected = AttrValue::Map(attrs! { "foo" => 1, "bar" => "x" });
		assert_eq!(value, expected);
	}

	#[rstest]
	fn test_serialize_attributes() {
		let attributes = attrs! {
			"class" => ["a", "b"],
			"open" => true,
			"data" => attrs! { "id" => 1 },
		};

		let value = serde_json::to_value(&attributes).unwrap();
		assert_eq!(
			value,
			json!({ "class": ["a", "b"], "open": true, "data": { "id": ["1"] } })
		);
	}
}
