use lignin::{Node, ThreadBound};
use lignin_app::component::RootComponent;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

mod web_stub_;
use web_stub_::{registry, test_container, Mounted, StaticText};

#[wasm_bindgen_test]
fn hydrating_mount_preserves_markup() {
	let (registry, _, _) = registry();
	let app = registry.create_ssr_app(RootComponent::functional(StaticText("client")), None);

	let container = test_container("hydrate-preserves");
	container.set_attribute("v-cloak", "").unwrap();
	container.set_inner_html("<p>server</p>");

	let instance = app.mount(container.clone()).unwrap();

	assert_eq!(instance.downcast_ref::<Mounted>(), Some(&Mounted::Hydrated));
	// Server-rendered markup is reconciled, not rebuilt, and no markers are written.
	assert_eq!(container.inner_html(), "<p>server</p>");
	assert!(container.has_attribute("v-cloak"));
	assert!(!container.has_attribute("data-v-app"));
}

#[wasm_bindgen_test]
fn hydrating_mount_by_selector() {
	let (registry, _, _) = registry();
	let app = registry.create_ssr_app(RootComponent::functional(StaticText("client")), None);

	let container = test_container("hydrate-selector");
	container.set_inner_html("<p>server</p>");

	let instance = app.mount("#hydrate-selector").unwrap();

	assert_eq!(instance.downcast_ref::<Mounted>(), Some(&Mounted::Hydrated));
	assert_eq!(container.inner_html(), "<p>server</p>");
}

#[wasm_bindgen_test]
fn hydrating_mount_missing_target_is_silent() {
	let (registry, _, hydration_built) = registry();
	let app = registry.create_ssr_app(RootComponent::functional(StaticText("client")), None);

	assert!(app.mount("#does-not-exist").is_none());
	// The renderer exists (created alongside the app), but nothing was mounted.
	assert_eq!(hydration_built.get(), 1);
}

#[wasm_bindgen_test]
fn hydrate_reconciles_through_the_hydration_renderer() {
	let (registry, _, _) = registry();

	let container = test_container("hydrate-direct");
	container.set_inner_html("<p>server</p>");

	let vdom: Node<'static, ThreadBound> = Node::Text {
		text: "server",
		dom_binding: None,
	};
	let instance = registry.ensure_hydration_renderer().hydrate(vdom, &container);

	assert_eq!(instance.downcast_ref::<Mounted>(), Some(&Mounted::Hydrated));
	assert_eq!(container.inner_html(), "<p>server</p>");
}
