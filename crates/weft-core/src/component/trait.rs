//! Component trait definition.

use super::instance::ComponentContext;
use super::schema::Schema;
use crate::builder::{Builder, Trailing};
use crate::error::Result;
use std::marker::PhantomData;

/// The render hook of a component class.
///
/// `render` runs once per component instance, against a builder bound to the
/// instance's own tag set. Its return value is trailing content, exactly as
/// for any construction block.
///
/// # Example
///
/// ```
/// use weft_core::{Builder, Component, ComponentClass, ComponentContext, PropSpec, Result, Schema, Trailing, attrs};
///
/// struct Input;
///
/// impl Component for Input {
///     fn render(&self, cx: &ComponentContext<'_>, b: &mut Builder) -> Result<Trailing> {
///         let name = cx.prop_str("name").unwrap_or_default().to_string();
///         b.tag_with("div", attrs! { "class" => "input" }, move |b| {
///             b.tag("input", attrs! { "type" => "text", "name" => name })
///         })?;
///         Ok(Trailing::Nothing)
///     }
///
///     fn schema() -> Schema {
///         Schema::new().prop("name", PropSpec::required())
///     }
///
///     fn name() -> Option<&'static str> {
///         Some("input")
///     }
/// }
///
/// let class = ComponentClass::new(Input);
/// assert_eq!(class.name(), Some("input"));
/// ```
pub trait Component: Send + Sync + 'static {
	/// Builds the component's children.
	fn render(&self, cx: &ComponentContext<'_>, b: &mut Builder) -> Result<Trailing>;

	/// Declared props and slots of the class.
	fn schema() -> Schema
	where
		Self: Sized,
	{
		Schema::new()
	}

	/// Registry name of the class.
	fn name() -> Option<&'static str>
	where
		Self: Sized,
	{
		None
	}
}

/// Adapter turning a closure into a render hook.
pub(super) struct FnComponent<F, R> {
	hook: F,
	_output: PhantomData<fn() -> R>,
}

impl<F, R> FnComponent<F, R> {
	pub(super) fn new(hook: F) -> Self {
		Self {
			hook,
			_output: PhantomData,
		}
	}
}

impl<F, R> Component for FnComponent<F, R>
where
	F: Fn(&ComponentContext<'_>, &mut Builder) -> Result<R> + Send + Sync + 'static,
	R: Into<Trailing> + 'static,
{
	fn render(&self, cx: &ComponentContext<'_>, b: &mut Builder) -> Result<Trailing> {
		(self.hook)(cx, b).map(Into::into)
	}
}

/// Render hook of a class without one: renders nothing.
pub(super) struct EmptyComponent;

impl Component for EmptyComponent {
	fn render(&self, _cx: &ComponentContext<'_>, _b: &mut Builder) -> Result<Trailing> {
		Ok(Trailing::Nothing)
	}
}
