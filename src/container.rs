use tracing::{error, instrument};
use web_sys::{Element, HtmlElement};

/// A mount target: either a direct container handle or a selector that is resolved against
/// the ambient document at mount time.
#[derive(Clone, Debug)]
pub enum MountTarget {
	/// CSS selector, resolved through a single [***querySelector***](https://developer.mozilla.org/en-US/docs/Web/API/Document/querySelector) call.
	Selector(String),
	/// Direct handle to the container element.
	Container(Element),
}

impl From<&str> for MountTarget {
	fn from(selector: &str) -> Self {
		Self::Selector(selector.to_owned())
	}
}

impl From<String> for MountTarget {
	fn from(selector: String) -> Self {
		Self::Selector(selector)
	}
}

impl From<Element> for MountTarget {
	fn from(container: Element) -> Self {
		Self::Container(container)
	}
}

impl From<HtmlElement> for MountTarget {
	fn from(container: HtmlElement) -> Self {
		Self::Container(container.into())
	}
}

/// Resolves `target` to a concrete container element.
///
/// Selectors are queried against the ambient document exactly once; if nothing matches at
/// call time (or no document is reachable), that invocation fails permanently with [`None`].
/// There is no retry and no polling. Direct handles are returned unchanged.
#[instrument]
#[must_use]
pub fn normalize_container(target: &MountTarget) -> Option<Element> {
	match target {
		MountTarget::Selector(selector) => {
			let document = web_sys::window()?.document()?;
			match document.query_selector(selector) {
				Ok(element) => element,
				Err(error) => {
					error!("Invalid mount target selector {:?}: {:?}", selector, error);
					None
				}
			}
		}
		MountTarget::Container(container) => Some(container.clone()),
	}
}
