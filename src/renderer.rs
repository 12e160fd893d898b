//! The seam between this entry layer and the renderer core.
//!
//! The diff/patch machinery itself lives outside this crate: an embedding framework
//! supplies it through [`CoreBindings`], bound to the concrete tree operations and the
//! prop patching strategy bundled in [`RendererOptions`]. This module only defines the
//! interfaces and the thin [`Renderer`]/[`HydrationRenderer`] handles the bootstrap layer
//! hands around.

use crate::{
	app::{CoreApp, CoreHandle},
	component::{Props, RootComponent},
};
use core::{any::Any, fmt};
use lignin::{Node, ThreadBound};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Node as DomNode, Text};

/// Element namespace, as far as tag creation is concerned.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Namespace {
	/// Plain [***HTMLElement***](https://developer.mozilla.org/en-US/docs/Web/API/HTMLElement)s.
	Html,
	/// <http://www.w3.org/2000/svg>
	Svg,
	/// <http://www.w3.org/1998/Math/MathML>
	MathMl,
}

/// Primitive operations over the concrete UI tree, as consumed by the renderer core.
///
/// Implementations are expected to be plain pass-throughs to the respective
/// [`web_sys`] calls; the core never touches the document in any other way.
pub trait DomOps: fmt::Debug {
	/// Creates an element in `namespace`.
	fn create_element(&self, document: &Document, name: &str, namespace: Namespace) -> Element;
	/// Creates a text node.
	fn create_text(&self, document: &Document, data: &str) -> Text;
	/// Inserts `child` into `parent` before `anchor`, or at the end if `anchor` is [`None`].
	fn insert(&self, parent: &DomNode, child: &DomNode, anchor: Option<&DomNode>);
	/// Detaches `child` from its parent, if any.
	fn remove(&self, child: &DomNode);
	/// Replaces the character data of `text`.
	fn set_text(&self, text: &Text, data: &str);
	/// Replaces `element`'s children with a single text node.
	fn set_element_text(&self, element: &Element, data: &str);
	/// `node`'s parent element, if any.
	fn parent(&self, node: &DomNode) -> Option<Element>;
	/// `node`'s next sibling, if any.
	fn next_sibling(&self, node: &DomNode) -> Option<DomNode>;
}

/// Attribute/property patching strategy, as consumed by the renderer core.
pub trait PatchProp: fmt::Debug {
	/// Patches `key` on `element` from `previous` to `next`. [`None`] means absent.
	fn patch(&self, element: &Element, key: &str, previous: Option<&JsValue>, next: Option<&JsValue>);
	/// Whether `key` must be written through even when the old and new values compare equal
	/// (value-like properties that the user may have changed out of band).
	fn force_patch(&self, element: &Element, key: &str) -> bool;
}

/// Bundles the platform bindings a renderer core is constructed over.
#[derive(Clone, Debug)]
pub struct RendererOptions {
	/// The concrete tree operation set.
	pub ops: Rc<dyn DomOps>,
	/// The prop patching strategy.
	pub patch_prop: Rc<dyn PatchProp>,
}

/// A renderer core: the engine that translates virtual node trees into tree operations.
pub trait RenderCore: fmt::Debug {
	/// Renders `vdom` as the sole content of `container`, replacing previous output.
	fn render(&self, vdom: Node<'_, ThreadBound>, container: &Element);
	/// Instantiates `root` inside `container` and returns its instance handle.
	fn mount(&self, root: &RootComponent, props: Option<&Props>, container: &Element) -> RootInstance;
}

/// A hydration-capable renderer core. Strictly a superset of [`RenderCore`]: anything that
/// can reconcile against existing markup can also render from scratch.
pub trait HydrateCore: RenderCore {
	/// Reconciles `vdom` against the markup already present in `container` instead of
	/// discarding and rebuilding it.
	fn hydrate(&self, vdom: Node<'_, ThreadBound>, container: &Element) -> RootInstance;
	/// Hydrating counterpart of [`RenderCore::mount`].
	fn hydrate_mount(&self, root: &RootComponent, props: Option<&Props>, container: &Element) -> RootInstance;
}

/// Renderer core constructors, supplied by the embedding framework.
///
/// [`RendererRegistry`](`crate::registry::RendererRegistry`) calls each of these at most
/// once per process lifetime, on first demand.
pub trait CoreBindings: fmt::Debug {
	/// Constructs the plain renderer core over `options`.
	fn create_renderer(&self, options: &RendererOptions) -> Rc<dyn RenderCore>;
	/// Constructs the hydration-capable renderer core over `options`.
	fn create_hydration_renderer(&self, options: &RendererOptions) -> Rc<dyn HydrateCore>;
}

/// Opaque handle to a mounted root, as produced by the renderer core.
#[derive(Clone)]
pub struct RootInstance(Rc<dyn Any>);

impl RootInstance {
	/// Wraps a core-side instance value.
	#[must_use]
	pub fn new<T: 'static>(instance: T) -> Self {
		Self(Rc::new(instance))
	}

	/// Borrows the wrapped instance, if it is a `T`.
	#[must_use]
	pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
		self.0.downcast_ref()
	}
}

impl fmt::Debug for RootInstance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RootInstance").finish_non_exhaustive()
	}
}

/// Handle to the shared plain renderer.
///
/// Cheap to clone; all clones drive the same core instance.
#[derive(Clone, Debug)]
pub struct Renderer {
	core: Rc<dyn RenderCore>,
}

impl Renderer {
	pub(crate) fn new(core: Rc<dyn RenderCore>) -> Self {
		Self { core }
	}

	/// Renders `vdom` as the sole content of `container`.
	pub fn render(&self, vdom: Node<'_, ThreadBound>, container: &Element) {
		self.core.render(vdom, container);
	}

	/// Creates a core application handle driven by this renderer.
	#[must_use]
	pub fn create_app(&self, root: RootComponent, props: Option<Props>) -> CoreApp {
		CoreApp::new(CoreHandle::Plain(self.core.clone()), root, props)
	}

	/// Whether `self` and `other` drive the identical core instance.
	#[must_use]
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.core, &other.core)
	}
}

/// Handle to the shared hydration-capable renderer.
#[derive(Clone, Debug)]
pub struct HydrationRenderer {
	core: Rc<dyn HydrateCore>,
}

impl HydrationRenderer {
	pub(crate) fn new(core: Rc<dyn HydrateCore>) -> Self {
		Self { core }
	}

	/// Renders `vdom` as the sole content of `container`.
	pub fn render(&self, vdom: Node<'_, ThreadBound>, container: &Element) {
		self.core.render(vdom, container);
	}

	/// Reconciles `vdom` against the markup already present in `container`.
	pub fn hydrate(&self, vdom: Node<'_, ThreadBound>, container: &Element) -> RootInstance {
		self.core.hydrate(vdom, container)
	}

	/// Creates a core application handle driven by this renderer.
	#[must_use]
	pub fn create_app(&self, root: RootComponent, props: Option<Props>) -> CoreApp {
		CoreApp::new(CoreHandle::Hydration(self.core.clone()), root, props)
	}

	/// Whether `self` and `other` drive the identical core instance.
	#[must_use]
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.core, &other.core)
	}
}
