//! Lazy, memoized renderer construction and the process-wide registry instance.

use crate::{
	app::App,
	component::{Props, RootComponent},
	renderer::{CoreBindings, HydrateCore, HydrationRenderer, RenderCore, Renderer, RendererOptions, RootInstance},
};
use lignin::{Node, ThreadBound};
use std::{cell::RefCell, rc::Rc};
use tracing::{instrument, trace, warn};
use web_sys::Element;

/// The single shared renderer slot. A hydration-capable core is a superset of a plain one,
/// so it serves plain-render requests too and is never replaced by a plain core.
#[derive(Debug)]
enum RendererSlot {
	Plain(Rc<dyn RenderCore>),
	Hydration {
		core: Rc<dyn HydrateCore>,
		/// Plain-render view of `core`, created once so repeated
		/// [`ensure_renderer`](`RendererRegistry::ensure_renderer`) calls hand out the
		/// identical instance.
		render_view: Rc<dyn RenderCore>,
	},
}

#[derive(Debug)]
struct HydrationRenderView(Rc<dyn HydrateCore>);

impl RenderCore for HydrationRenderView {
	fn render(&self, vdom: Node<'_, ThreadBound>, container: &Element) {
		self.0.render(vdom, container);
	}

	fn mount(&self, root: &RootComponent, props: Option<&Props>, container: &Element) -> RootInstance {
		self.0.mount(root, props, container)
	}
}

/// Owns the renderer cache and the core bindings it is constructed from.
///
/// Renderer construction is deferred until first use, so embedders that only ever touch
/// other subsystems never pay for the renderer machinery. Each core variant is constructed
/// at most once per registry.
#[derive(Debug)]
pub struct RendererRegistry {
	options: RendererOptions,
	bindings: Box<dyn CoreBindings>,
	slot: RefCell<Option<RendererSlot>>,
}

impl RendererRegistry {
	/// Creates a registry over `bindings`, bound to the platform `options`.
	///
	/// No renderer core is constructed yet.
	#[must_use]
	pub fn new(options: RendererOptions, bindings: Box<dyn CoreBindings>) -> Self {
		Self {
			options,
			bindings,
			slot: RefCell::new(None),
		}
	}

	/// Returns the shared renderer, constructing the plain core on first use.
	///
	/// Idempotent. If the slot already holds a hydration-capable core, that instance is
	/// reused rather than constructing a plain one next to it.
	#[instrument(skip(self))]
	pub fn ensure_renderer(&self) -> Renderer {
		let mut slot = self.slot.borrow_mut();
		let slot = slot.get_or_insert_with(|| {
			trace!("Constructing the plain renderer core.");
			RendererSlot::Plain(self.bindings.create_renderer(&self.options))
		});
		match slot {
			RendererSlot::Plain(core) => Renderer::new(core.clone()),
			RendererSlot::Hydration { render_view, .. } => Renderer::new(render_view.clone()),
		}
	}

	/// Returns the shared hydration-capable renderer, constructing it on first use.
	///
	/// A previously constructed plain core is replaced; the hydration core then serves
	/// both plain and hydrating requests for the remainder of the registry's lifetime.
	#[instrument(skip(self))]
	pub fn ensure_hydration_renderer(&self) -> HydrationRenderer {
		let mut slot = self.slot.borrow_mut();
		if let Some(RendererSlot::Hydration { core, .. }) = &*slot {
			return HydrationRenderer::new(core.clone());
		}

		trace!("Constructing the hydration renderer core.");
		let core = self.bindings.create_hydration_renderer(&self.options);
		let render_view: Rc<dyn RenderCore> = Rc::new(HydrationRenderView(core.clone()));
		*slot = Some(RendererSlot::Hydration {
			core: core.clone(),
			render_view,
		});
		HydrationRenderer::new(core)
	}

	/// Creates a client-mount application for `root`.
	#[instrument(skip(self, root, props))]
	pub fn create_app(&self, root: RootComponent, props: Option<Props>) -> App {
		App::client(self.ensure_renderer().create_app(root, props))
	}

	/// Creates a hydration-mount application for `root`: its mount reconciles against
	/// server-rendered markup instead of discarding it.
	#[instrument(skip(self, root, props))]
	pub fn create_ssr_app(&self, root: RootComponent, props: Option<Props>) -> App {
		App::hydrating(self.ensure_hydration_renderer().create_app(root, props))
	}
}

thread_local! {
	static REGISTRY: RefCell<Option<Rc<RendererRegistry>>> = RefCell::new(None);
}

/// Installs `registry` as the process-wide instance backing the crate-level functions.
///
/// The first installation wins: repeated calls log a warning and leave the existing
/// instance in place. Returns the installed instance either way.
pub fn install(registry: RendererRegistry) -> Rc<RendererRegistry> {
	REGISTRY.with(|slot| {
		let mut slot = slot.borrow_mut();
		if let Some(existing) = &*slot {
			warn!("A renderer registry is already installed. Keeping the existing one.");
			return existing.clone();
		}
		let registry = Rc::new(registry);
		*slot = Some(registry.clone());
		registry
	})
}

/// The installed process-wide registry, if any.
#[must_use]
pub fn installed() -> Option<Rc<RendererRegistry>> {
	REGISTRY.with(|slot| slot.borrow().clone())
}
