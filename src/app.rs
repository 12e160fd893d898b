//! Application handles and the DOM-side mount procedures.

use crate::{
	component::{Props, RootComponent},
	container::{normalize_container, MountTarget},
	renderer::{HydrateCore, RenderCore, RootInstance},
	tags,
};
use std::{
	cell::{Ref, RefCell, RefMut},
	rc::Rc,
};
use tracing::{error, instrument, warn};
use web_sys::Element;

/// Hides uncompiled markup until the first paint; removed from the container once a client
/// mount completes.
const CLOAK_ATTRIBUTE: &str = "v-cloak";
/// Marks the container as an application root (consumed by scoped-styling tooling).
const APP_ROOT_ATTRIBUTE: &str = "data-v-app";

/// Application configuration record.
#[derive(Clone, Debug)]
pub struct AppConfig {
	is_native_tag: Option<fn(&str) -> bool>,
}

impl AppConfig {
	fn new() -> Self {
		let is_native_tag = if cfg!(debug_assertions) {
			Some(tags::is_native_tag as fn(&str) -> bool)
		} else {
			None
		};
		Self { is_native_tag }
	}

	/// Validates tag names against the known HTML and SVG tag sets, for component name
	/// validation. Only populated in debug builds; cannot be replaced once the application
	/// exists.
	#[must_use]
	pub fn is_native_tag(&self) -> Option<fn(&str) -> bool> {
		self.is_native_tag
	}
}

#[derive(Clone, Debug)]
pub(crate) enum CoreHandle {
	Plain(Rc<dyn RenderCore>),
	Hydration(Rc<dyn HydrateCore>),
}

/// The application handle as provided by the renderer core: root component definition,
/// configuration and the raw mount operation.
///
/// Most callers want the decorating [`App`] instead, which adds container resolution and
/// the DOM-side mount housekeeping.
#[derive(Debug)]
pub struct CoreApp {
	root: RefCell<RootComponent>,
	props: Option<Props>,
	config: AppConfig,
	handle: CoreHandle,
}

impl CoreApp {
	pub(crate) fn new(handle: CoreHandle, root: RootComponent, props: Option<Props>) -> Self {
		Self {
			root: RefCell::new(root),
			props,
			config: AppConfig::new(),
			handle,
		}
	}

	/// The application configuration.
	#[must_use]
	pub fn config(&self) -> &AppConfig {
		&self.config
	}

	/// The root component definition.
	#[must_use]
	pub fn root(&self) -> Ref<'_, RootComponent> {
		self.root.borrow()
	}

	pub(crate) fn root_mut(&self) -> RefMut<'_, RootComponent> {
		self.root.borrow_mut()
	}

	/// Raw mount: instantiates the root component inside `container`.
	///
	/// With `hydrate`, a hydration-capable core reconciles against `container`'s existing
	/// child nodes; a plain core degrades to a plain mount instead.
	pub fn mount(&self, container: &Element, hydrate: bool) -> RootInstance {
		let root = self.root.borrow();
		match &self.handle {
			CoreHandle::Hydration(core) if hydrate => core.hydrate_mount(&root, self.props.as_ref(), container),
			CoreHandle::Hydration(core) => core.mount(&root, self.props.as_ref(), container),
			CoreHandle::Plain(core) => core.mount(&root, self.props.as_ref(), container),
		}
	}
}

#[derive(Clone, Copy, Debug)]
enum MountMode {
	Client,
	Hydrate,
}

/// DOM-aware application handle.
///
/// Wraps the core-provided [`CoreApp`] and implements [`mount`](`App::mount`) by resolving
/// the mount target, performing the DOM-side pre/post processing and invoking the held
/// application's raw mount.
#[derive(Debug)]
pub struct App {
	core: CoreApp,
	mode: MountMode,
}

impl App {
	pub(crate) fn client(core: CoreApp) -> Self {
		Self {
			core,
			mode: MountMode::Client,
		}
	}

	pub(crate) fn hydrating(core: CoreApp) -> Self {
		Self {
			core,
			mode: MountMode::Hydrate,
		}
	}

	/// The application configuration.
	#[must_use]
	pub fn config(&self) -> &AppConfig {
		self.core.config()
	}

	/// The root component definition.
	#[must_use]
	pub fn root(&self) -> Ref<'_, RootComponent> {
		self.core.root()
	}

	/// Mounts the application into `target`.
	///
	/// Returns [`None`] without touching the document if `target` resolves to no element.
	/// This is a designed silent no-op, not an error (debug builds log a warning for
	/// client mounts).
	#[instrument(skip(self, target))]
	pub fn mount(&self, target: impl Into<MountTarget>) -> Option<RootInstance> {
		let target = target.into();
		match self.mode {
			MountMode::Client => self.mount_client(&target),
			MountMode::Hydrate => self.mount_hydrating(&target),
		}
	}

	fn mount_client(&self, target: &MountTarget) -> Option<RootInstance> {
		let container = match normalize_container(target) {
			Some(container) => container,
			None => {
				if cfg!(debug_assertions) {
					warn!("Failed to mount app: mount target {:?} returned no element.", target);
				}
				return None;
			}
		};

		{
			let mut root = self.core.root_mut();
			if let RootComponent::Options(options) = &mut *root {
				if options.render.is_none() && options.template.is_none() {
					options.template = Some(container.inner_html());
				}
			}
		}

		// Discard existing children so the renderer's output isn't duplicated next to them.
		container.set_inner_html("");

		let instance = self.core.mount(&container, false);

		if let Err(error) = container.remove_attribute(CLOAK_ATTRIBUTE) {
			error!("Failed to remove `{}` from the container: {:?}", CLOAK_ATTRIBUTE, error);
		}
		if let Err(error) = container.set_attribute(APP_ROOT_ATTRIBUTE, "") {
			error!("Failed to set `{}` on the container: {:?}", APP_ROOT_ATTRIBUTE, error);
		}

		Some(instance)
	}

	fn mount_hydrating(&self, target: &MountTarget) -> Option<RootInstance> {
		// Server-rendered markup must be reconciled, never discarded: no clearing, no
		// marker attributes, and a silent no-op if the target doesn't resolve.
		let container = normalize_container(target)?;
		Some(self.core.mount(&container, true))
	}
}
