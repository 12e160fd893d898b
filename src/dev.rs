//! Development-build integration with external inspection tooling.

use js_sys::{Object, Reflect};
use std::cell::RefCell;
use tracing::{error, info, instrument};
use wasm_bindgen::{JsCast, JsValue};

/// Inspection hook supplied by external tooling (browser extensions and the like).
pub type DevtoolsHook = Object;

/// Advertises framework presence to external tooling.
const PRESENCE_FLAG: &str = "__LIGNIN_APP__";

thread_local! {
	static DEVTOOLS_HOOK: RefCell<Option<DevtoolsHook>> = RefCell::new(None);
}

/// Development-build initialisation. Intended to run at most once per process, but safe to
/// call again: the console notice is re-emitted and `hook` overwrites any previously
/// forwarded hook.
///
/// Sets `__LIGNIN_APP__` on the ambient global object and forwards `hook`, if any, to
/// [`set_devtools_hook`]. The global is resolved through [`js_sys::global()`], which
/// selects among the host's known global bindings
/// (***globalThis***, ***self***, ***window***, ***global***).
#[instrument(skip(hook))]
pub fn init_dev(hook: Option<DevtoolsHook>) {
	let global = js_sys::global();

	if let Err(error) = Reflect::set(&global, &JsValue::from_str(PRESENCE_FLAG), &JsValue::TRUE) {
		error!("Failed to set `{}` on the global object: {:?}", PRESENCE_FLAG, error);
	}

	if let Some(hook) = hook {
		set_devtools_hook(hook);
	}

	if global.dyn_ref::<web_sys::Window>().is_some() {
		info!("You are running a development build of lignin-app. Ship optimised builds in production.");
	}
}

/// Registers `hook` with the renderer core's devtools integration, replacing any
/// previously registered hook.
pub fn set_devtools_hook(hook: DevtoolsHook) {
	DEVTOOLS_HOOK.with(|slot| *slot.borrow_mut() = Some(hook));
}

/// The currently registered inspection hook, if any.
#[must_use]
pub fn devtools_hook() -> Option<DevtoolsHook> {
	DEVTOOLS_HOOK.with(|slot| slot.borrow().clone())
}
