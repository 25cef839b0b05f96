//! Mounting helpers for browser tests.

use gloo_timers::future::TimeoutFuture;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, InputEvent, InputEventInit, KeyboardEvent, KeyboardEventInit};
use yew::prelude::*;

use crate::components::notification::{NoticeList, Notifier};
use crate::config::SiteConfig;
use crate::context::AppContext;
use crate::store::Store;

#[derive(Properties, PartialEq)]
pub struct TestAppProps {
    pub store: Store,
    pub children: Children,
}

/// Provides an `AppContext` over the given store with a seeded rng.
#[function_component(TestApp)]
pub fn test_app(props: &TestAppProps) -> Html {
    let notices = use_reducer(NoticeList::default);
    let app = {
        let store = props.store.clone();
        let dispatcher = notices.dispatcher();
        use_memo(
            move |_| {
                let config = SiteConfig::default();
                let notifier = Notifier::new(dispatcher, config.notice_duration_ms);
                AppContext::new(store, notifier, config, StdRng::seed_from_u64(7))
            },
            (),
        )
    };

    html! {
        <ContextProvider<AppContext> context={(*app).clone()}>
            { for props.children.iter() }
        </ContextProvider<AppContext>>
    }
}

/// Lets Yew finish rendering and run effects.
pub async fn settle() {
    TimeoutFuture::new(30).await;
}

pub async fn mount(store: Store, content: Html) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let props = TestAppProps {
        store,
        children: Children::new(vec![content]),
    };
    yew::Renderer::<TestApp>::with_root_and_props(root.clone(), props).render();
    settle().await;
    root
}

pub fn element(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{} is not rendered", selector))
        .dyn_into()
        .unwrap()
}

pub async fn click(root: &Element, selector: &str) {
    element(root, selector).click();
    settle().await;
}

/// Sets an input's value and fires `input` so controlled state follows.
pub async fn type_into(root: &Element, selector: &str, value: &str) {
    let input: HtmlInputElement = element(root, selector).dyn_into().unwrap();
    input.set_value(value);
    let init = InputEventInit::new();
    init.set_bubbles(true);
    let event = InputEvent::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
    settle().await;
}

pub async fn press_key(key: &str, shift: bool) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
    settle().await;
}

pub fn active_id() -> Option<String> {
    web_sys::window()?
        .document()?
        .active_element()
        .map(|el| el.id())
}
