#![doc(html_root_url = "https://docs.rs/lignin-app/0.0.1")]
#![warn(clippy::pedantic)]

//! Application bootstrap for [`lignin`]-based DOM renderers.
//!
//! This crate binds a renderer core to concrete browser DOM primitives and exposes the
//! application entry points: [`create_app`] for plain client mounts and [`create_ssr_app`]
//! for hydrating mounts over server-rendered markup. Renderer construction is lazy,
//! memoized and shared; see [`registry::RendererRegistry`].
//!
//! The diff/patch machinery itself is *not* part of this crate; an embedding framework
//! supplies it through [`renderer::CoreBindings`] and installs the resulting registry with
//! [`registry::install`] during startup.

pub use lignin;

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod app;
pub mod component;
pub mod container;
pub mod dev;
pub mod registry;
pub mod renderer;
pub mod tags;

pub use app::{App, AppConfig};
pub use component::{ComponentOptions, Props, RootComponent, RootRender};
pub use container::{normalize_container, MountTarget};
pub use renderer::RootInstance;

use lignin::{Node, ThreadBound};
use registry::RendererRegistry;
use std::rc::Rc;
use wasm_bindgen::UnwrapThrowExt;
use web_sys::Element;

fn installed_registry() -> Rc<RendererRegistry> {
	registry::installed().expect_throw("lignin-app: No renderer registry installed. Call `registry::install` during startup.")
}

/// Renders `vdom` as the sole content of `container`, through the shared renderer.
///
/// The renderer is constructed on first use; whichever variant the shared slot holds is
/// used, so this routes through a hydration-capable core once one exists.
pub fn render(vdom: Node<'_, ThreadBound>, container: &Element) {
	installed_registry().ensure_renderer().render(vdom, container);
}

/// Reconciles `vdom` against the markup already present in `container`, through the shared
/// hydration-capable renderer (constructed on first use).
pub fn hydrate(vdom: Node<'_, ThreadBound>, container: &Element) -> RootInstance {
	installed_registry().ensure_hydration_renderer().hydrate(vdom, container)
}

/// Creates a client-mount application for `root`.
///
/// Its [`mount`](`App::mount`) resolves the target, may infer the root template from the
/// container's markup, clears the container, delegates to the renderer core and finally
/// swaps the container's `v-cloak` attribute for a `data-v-app` marker.
#[must_use]
pub fn create_app(root: RootComponent, props: Option<Props>) -> App {
	installed_registry().create_app(root, props)
}

/// Creates a hydration-mount application for `root`.
///
/// Its [`mount`](`App::mount`) resolves the target and delegates to the renderer core in
/// hydration mode; server-rendered markup is reconciled, never discarded.
#[must_use]
pub fn create_ssr_app(root: RootComponent, props: Option<Props>) -> App {
	installed_registry().create_ssr_app(root, props)
}
