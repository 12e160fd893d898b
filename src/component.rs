use core::fmt;
use hashbrown::HashMap;
use lignin::{Node, ThreadBound};
use std::rc::Rc;
use wasm_bindgen::JsValue;

/// Root props handed to the root component instance by the renderer core.
pub type Props = HashMap<String, JsValue>;

/// A render operation: produces a component's current output as a [`lignin`] virtual node tree.
///
/// The returned tree may borrow from `self`, so stateful components can render views into
/// storage they own.
pub trait RootRender {
	/// Produces the root [`Node`].
	fn render(&self) -> Node<'_, ThreadBound>;
}

impl<F> RootRender for F
where
	F: Fn() -> Node<'static, ThreadBound>,
{
	fn render(&self) -> Node<'_, ThreadBound> {
		self()
	}
}

/// The root component definition an application is created from.
///
/// Either a plain render operation ([functional](`RootComponent::Functional`)) or an
/// [options object](`ComponentOptions`) that may carry a render operation and/or a template.
pub enum RootComponent {
	/// Functional component: the definition *is* its render operation.
	Functional(Rc<dyn RootRender>),
	/// Component options object.
	Options(ComponentOptions),
}

impl RootComponent {
	/// Wraps `render` (usually a closure or function) as a functional root component.
	pub fn functional(render: impl RootRender + 'static) -> Self {
		Self::Functional(Rc::new(render))
	}
}

impl From<ComponentOptions> for RootComponent {
	fn from(options: ComponentOptions) -> Self {
		Self::Options(options)
	}
}

impl fmt::Debug for RootComponent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Functional(_) => f.debug_tuple("Functional").finish(),
			Self::Options(options) => f.debug_tuple("Options").field(options).finish(),
		}
	}
}

/// Root component options.
///
/// A definition with neither `render` nor `template` has its template inferred from the
/// mount container's markup during a client mount.
#[derive(Default)]
pub struct ComponentOptions {
	/// Render operation. Takes precedence over `template`.
	pub render: Option<Rc<dyn RootRender>>,
	/// Template markup, compiled by the renderer core.
	pub template: Option<String>,
}

impl fmt::Debug for ComponentOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentOptions")
			.field("render", &self.render.as_ref().map(|_| ..))
			.field("template", &self.template)
			.finish()
	}
}
