//! Error types for tree construction.
//!
//! Every failure is a precondition violation raised at the call that caused
//! it. Nothing is recovered internally: construction either fully succeeds
//! or aborts at the first error.

/// Errors raised while building a node tree or materializing its lazy parts.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// A component was constructed without a value for a prop lacking a default.
	#[error("Missing required prop: '{prop}'")]
	MissingProp {
		/// Name of the missing prop.
		prop: String,
	},

	/// A value offered as content has no textual representation.
	#[error("Can't use {value} as content, it has no textual representation")]
	InvalidContent {
		/// The offending value, as JSON.
		value: String,
	},

	/// A component key is absent from the registry.
	#[error("Unknown component: '{key}'")]
	UnknownComponent {
		/// The key that was looked up.
		key: String,
	},

	/// A slot name is not declared on the component.
	#[error("Slot '{slot}' is not registered")]
	UnknownSlot {
		/// The slot that was filled or read.
		slot: String,
	},
}

/// Result type for tree construction.
pub type Result<T> = std::result::Result<T, Error>;
