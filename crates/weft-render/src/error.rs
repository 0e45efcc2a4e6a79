//! Render and configuration errors.

/// Errors raised while rendering a node tree.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	/// Materializing a lazy part of the tree failed.
	#[error(transparent)]
	Tree(#[from] weft_core::Error),

	/// The AST could not be serialized.
	#[error("Failed to serialize AST: {0}")]
	Serialize(#[from] serde_json::Error),
}

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors raised while loading renderer configuration.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The TOML source is malformed or has values of the wrong type.
	#[error("Invalid renderer configuration: {0}")]
	Parse(#[from] toml::de::Error),

	/// An option is set that the chosen dialect cannot honour.
	#[error("Option '{option}' is not supported by the {dialect} dialect")]
	UnsupportedOption {
		/// Dialect of the configuration.
		dialect: crate::renderer::Dialect,
		/// Name of the offending option.
		option: &'static str,
	},
}
