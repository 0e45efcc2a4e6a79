//! Rendering options.

use serde::Deserialize;

/// Options shared by every dialect.
///
/// Dialects ignore the options that make no sense for them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Join tag set children with line breaks, and wrap the block content
	/// of a tag in line breaks.
	pub line_breaks: bool,
	/// Escape text nodes and attribute values.
	pub escape: bool,
	/// Language attribute added to the `html` document tag when it has none.
	pub lang: String,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			line_breaks: false,
			escape: false,
			lang: "en".to_string(),
		}
	}
}

impl RenderOptions {
	/// Creates default options: compact output, no escaping, `lang="en"`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Enables or disables line-break joined output.
	pub fn line_breaks(mut self, enable: bool) -> Self {
		self.line_breaks = enable;
		self
	}

	/// Enables or disables escaping.
	pub fn escape(mut self, enable: bool) -> Self {
		self.escape = enable;
		self
	}

	/// Sets the document language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}
}
