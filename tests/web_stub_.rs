//! Stub renderer core shared between the web test crates (included via `mod web_stub_;`).

use lignin::{Node, ThreadBound};
use lignin_app::{
	component::{Props, RootComponent, RootRender},
	registry::RendererRegistry,
	renderer::{CoreBindings, DomOps, HydrateCore, Namespace, PatchProp, RenderCore, RendererOptions, RootInstance},
};
use std::{cell::Cell, rc::Rc};
use wasm_bindgen::JsValue;
use web_sys::{window, Document, Element, Node as DomNode, Text};

/// Marker the stub cores attach to returned instances.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mounted {
	Client,
	Hydrated,
}

/// Renders a fixed text node.
#[derive(Debug)]
pub struct StaticText(pub &'static str);

impl RootRender for StaticText {
	fn render(&self) -> Node<'_, ThreadBound> {
		Node::Text {
			text: self.0,
			dom_binding: None,
		}
	}
}

#[derive(Debug)]
pub struct StubOps;

impl DomOps for StubOps {
	fn create_element(&self, document: &Document, name: &str, _namespace: Namespace) -> Element {
		document.create_element(name).unwrap()
	}

	fn create_text(&self, document: &Document, data: &str) -> Text {
		document.create_text_node(data)
	}

	fn insert(&self, parent: &DomNode, child: &DomNode, anchor: Option<&DomNode>) {
		parent.insert_before(child, anchor).unwrap();
	}

	fn remove(&self, child: &DomNode) {
		if let Some(parent) = child.parent_node() {
			parent.remove_child(child).unwrap();
		}
	}

	fn set_text(&self, text: &Text, data: &str) {
		text.set_text_content(Some(data));
	}

	fn set_element_text(&self, element: &Element, data: &str) {
		element.set_text_content(Some(data));
	}

	fn parent(&self, node: &DomNode) -> Option<Element> {
		node.parent_element()
	}

	fn next_sibling(&self, node: &DomNode) -> Option<DomNode> {
		node.next_sibling()
	}
}

#[derive(Debug)]
pub struct StubPatch;

impl PatchProp for StubPatch {
	fn patch(&self, element: &Element, key: &str, _previous: Option<&JsValue>, next: Option<&JsValue>) {
		match next.and_then(JsValue::as_string) {
			Some(value) => element.set_attribute(key, &value).unwrap(),
			None => element.remove_attribute(key).unwrap(),
		}
	}

	fn force_patch(&self, _element: &Element, key: &str) -> bool {
		key == "value"
	}
}

fn text_of(vdom: &Node<'_, ThreadBound>) -> String {
	match vdom {
		Node::Text { text, .. } => (*text).to_owned(),
		_ => String::new(),
	}
}

/// Minimal renderer core: writes its label and the vdom's text content into the container,
/// so tests can observe which core variant served a request.
#[derive(Debug)]
pub struct StubCore {
	pub label: &'static str,
}

impl RenderCore for StubCore {
	fn render(&self, vdom: Node<'_, ThreadBound>, container: &Element) {
		container.set_text_content(Some(&format!("{}:{}", self.label, text_of(&vdom))));
	}

	fn mount(&self, root: &RootComponent, _props: Option<&Props>, container: &Element) -> RootInstance {
		let output = match root {
			RootComponent::Functional(render) => text_of(&render.render()),
			RootComponent::Options(options) => match &options.render {
				Some(render) => text_of(&render.render()),
				None => options.template.clone().unwrap_or_default(),
			},
		};
		container.set_text_content(Some(&output));
		RootInstance::new(Mounted::Client)
	}
}

impl HydrateCore for StubCore {
	fn hydrate(&self, _vdom: Node<'_, ThreadBound>, _container: &Element) -> RootInstance {
		// Reconciliation leaves matching markup untouched.
		RootInstance::new(Mounted::Hydrated)
	}

	fn hydrate_mount(&self, _root: &RootComponent, _props: Option<&Props>, _container: &Element) -> RootInstance {
		RootInstance::new(Mounted::Hydrated)
	}
}

#[derive(Debug, Default)]
pub struct CountingBindings {
	pub plain_built: Rc<Cell<usize>>,
	pub hydration_built: Rc<Cell<usize>>,
}

impl CoreBindings for CountingBindings {
	fn create_renderer(&self, _options: &RendererOptions) -> Rc<dyn RenderCore> {
		self.plain_built.set(self.plain_built.get() + 1);
		Rc::new(StubCore { label: "plain" })
	}

	fn create_hydration_renderer(&self, _options: &RendererOptions) -> Rc<dyn HydrateCore> {
		self.hydration_built.set(self.hydration_built.get() + 1);
		Rc::new(StubCore { label: "hydration" })
	}
}

pub fn options() -> RendererOptions {
	RendererOptions {
		ops: Rc::new(StubOps),
		patch_prop: Rc::new(StubPatch),
	}
}

/// A fresh registry over counting stub bindings, plus the construction counters.
pub fn registry() -> (RendererRegistry, Rc<Cell<usize>>, Rc<Cell<usize>>) {
	let bindings = CountingBindings::default();
	let plain_built = bindings.plain_built.clone();
	let hydration_built = bindings.hydration_built.clone();
	(RendererRegistry::new(options(), Box::new(bindings)), plain_built, hydration_built)
}

/// A `<div>` attached to the document body.
pub fn test_container(id: &str) -> Element {
	let document = window().unwrap().document().unwrap();
	let container = document.create_element("div").unwrap();
	container.set_id(id);
	document.body().unwrap().append_child(&container).unwrap();
	container
}
