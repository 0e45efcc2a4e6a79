//! Renderer configuration.
//!
//! A renderer can be described in TOML and built at startup:
//!
//! ```
//! use weft_render::{Dialect, RendererConfig};
//!
//! let config = RendererConfig::from_toml_str(
//!     r#"
//! dialect = "html"
//! cache = "memory"
//! line_breaks = true
//! lang = "fr"
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.dialect, Dialect::Html);
//! assert!(config.options.line_breaks);
//! let renderer = config.build();
//! assert_eq!(renderer.dialect(), Dialect::Html);
//! ```
//!
//! Options only apply where the dialect can honour them. `escape` and `lang`
//! are HTML only, and `line_breaks` also pretty-prints the AST. Setting one of
//! them for another dialect is rejected with
//! [`ConfigError::UnsupportedOption`].
//!
//! The HTML and Markdown dialects prefix their store keys with their own
//! name, so renderers of different dialects can share the `shared` store
//! without reading each other's fragments.

use crate::dialect::{AstRenderer, HtmlRenderer, MarkdownRenderer};
use crate::error::ConfigError;
use crate::options::RenderOptions;
use crate::renderer::{Dialect, Renderer, shared_store};
use serde::Deserialize;
use std::sync::Arc;
use weft_cache::{CacheStore, InMemoryCache, NullCache};

/// Fragment store a configured renderer uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
	/// Never memoize.
	None,
	/// A private in-memory store owned by the renderer.
	Memory,
	/// The process-wide in-memory store.
	#[default]
	Shared,
}

impl CacheBackend {
	/// Creates the store.
	pub fn store(&self) -> Arc<dyn CacheStore> {
		match self {
			CacheBackend::None => Arc::new(NullCache),
			CacheBackend::Memory => Arc::new(InMemoryCache::new()),
			CacheBackend::Shared => shared_store(),
		}
	}
}

/// Declarative description of a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
	/// Output dialect.
	pub dialect: Dialect,
	/// Fragment store.
	pub cache: CacheBackend,
	/// Rendering options.
	#[serde(flatten)]
	pub options: RenderOptions,
}

impl RendererConfig {
	/// Parses a configuration from TOML.
	///
	/// Missing keys take their defaults.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Parse`] on malformed TOML or unknown values, and
	/// [`ConfigError::UnsupportedOption`] when an option is set that the
	/// dialect ignores.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks that every option set away from its default is honoured by the
	/// dialect.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::UnsupportedOption`] naming the first such option.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let options = &self.options;
		let lang = options.lang != RenderOptions::default().lang;
		let ignored = match self.dialect {
			Dialect::Html => vec![],
			Dialect::Markdown => vec![
				("escape", options.escape),
				("line_breaks", options.line_breaks),
				("lang", lang),
			],
			Dialect::Ast => vec![("escape", options.escape), ("lang", lang)],
		};
		match ignored.into_iter().find_map(|(option, set)| set.then_some(option)) {
			Some(option) => Err(ConfigError::UnsupportedOption {
				dialect: self.dialect,
				option,
			}),
			None => Ok(()),
		}
	}

	/// Builds the described renderer.
	pub fn build(&self) -> Arc<dyn Renderer> {
		tracing::debug!(dialect = %self.dialect, cache = ?self.cache, "building renderer");
		match self.dialect {
			Dialect::Html => Arc::new(HtmlRenderer::with_store(self.cache.store()).with_options(self.options.clone())),
			Dialect::Markdown => Arc::new(MarkdownRenderer::with_store(self.cache.store())),
			Dialect::Ast => Arc::new(AstRenderer::new().pretty(self.options.line_breaks)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_source_uses_defaults() {
		let config = RendererConfig::from_toml_str("").unwrap();
		assert_eq!(config, RendererConfig::default());
		assert_eq!(config.options.lang, "en");
	}

	#[rstest]
	#[case("dialect = \"markdown\"", Dialect::Markdown)]
	#[case("dialect = \"ast\"", Dialect::Ast)]
	#[case("dialect = \"html\"", Dialect::Html)]
	fn test_dialect_selection(#[case] source: &str, #[case] expected: Dialect) {
		let config = RendererConfig::from_toml_str(source).unwrap();
		assert_eq!(config.build().dialect(), expected);
	}

	#[rstest]
	fn test_options_are_flattened() {
		let config = RendererConfig::from_toml_str("escape = true\ncache = \"none\"").unwrap();
		assert!(config.options.escape);
		assert_eq!(config.cache, CacheBackend::None);
	}

	#[rstest]
	#[case("dialect = \"pdf\"")]
	#[case("line_breaks = \"yes\"")]
	#[case("dialect = ")]
	fn test_invalid_source_is_rejected(#[case] source: &str) {
		assert!(matches!(
			RendererConfig::from_toml_str(source),
			Err(ConfigError::Parse(_))
		));
	}

	#[rstest]
	#[case("dialect = \"markdown\"\nescape = true", Dialect::Markdown, "escape")]
	#[case("dialect = \"markdown\"\nline_breaks = true", Dialect::Markdown, "line_breaks")]
	#[case("dialect = \"markdown\"\nlang = \"de\"", Dialect::Markdown, "lang")]
	#[case("dialect = \"ast\"\nescape = true", Dialect::Ast, "escape")]
	fn test_ignored_option_is_rejected(
		#[case] source: &str,
		#[case] expected_dialect: Dialect,
		#[case] expected_option: &str,
	) {
		match RendererConfig::from_toml_str(source) {
			Err(ConfigError::UnsupportedOption { dialect, option }) => {
				assert_eq!(dialect, expected_dialect);
				assert_eq!(option, expected_option);
			}
			other => panic!("expected an unsupported option, got {other:?}"),
		}
	}

	#[rstest]
	#[case("dialect = \"ast\"\nline_breaks = true")]
	#[case("dialect = \"markdown\"\nlang = \"en\"")]
	fn test_honoured_option_is_accepted(#[case] source: &str) {
		assert!(RendererConfig::from_toml_str(source).is_ok());
	}

	#[rstest]
	fn test_memory_backend_is_private() {
		let a = CacheBackend::Memory.store();
		let b = CacheBackend::Memory.store();
		a.set("k", "v".to_string());
		assert_eq!(b.get("k"), None);
	}
}
