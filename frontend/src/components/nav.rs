use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::context::use_app;
use crate::tracking::meta;

/// Trimmed text of the nearest `selector` ancestor of the event target. Yew
/// delegates events, so `current_target` is not the element clicked.
pub fn clicked_text(e: &MouseEvent, selector: &str) -> String {
    e.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .and_then(|el| el.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Whether a window click closes the mobile menu: only when it is open and
/// the click landed outside both the panel and its toggle.
pub fn should_close(menu_open: bool, inside_menu: bool, inside_toggle: bool) -> bool {
    menu_open && !inside_menu && !inside_toggle
}

pub fn closes_menu_on_key(key: &str) -> bool {
    key == "Escape"
}

#[derive(Properties, PartialEq)]
pub struct JoinBetaLinkProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
}

/// Link to the waitlist section that records the click.
#[function_component(JoinBetaLink)]
pub fn join_beta_link(props: &JoinBetaLinkProps) -> Html {
    let app = use_app();
    let onclick = {
        let outer = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(app) = app.as_ref() {
                app.tracker.track(
                    "click_join_beta",
                    meta([("location", "link_to_waitlist".to_string()), ("text", clicked_text(&e, "a"))]),
                );
            }
            outer.emit(e);
        })
    };

    html! {
        <a href="#waitlist" class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    // Close on clicks outside both the panel and its toggle
    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            let inside = |node: &NodeRef| {
                node.cast::<Node>()
                    .map(|n| n.contains(Some(&target)))
                    .unwrap_or(false)
            };
            if should_close(*menu_open, inside(&menu_ref), inside(&toggle_ref)) {
                menu_open.set(false);
            }
        });
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if closes_menu_on_key(&e.key()) {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class="nav">
            <div class="container nav__inner">
                <a href="#top" class="nav__brand">{"LaunchForge AI"}</a>
                <button
                    id="navToggle"
                    ref={toggle_ref}
                    class="nav__toggle"
                    aria-controls="navMenu"
                    aria-expanded={(*menu_open).to_string()}
                    aria-label="Open menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav id="navMenu" ref={menu_ref} class={classes!("nav__menu", (*menu_open).then(|| "is-open"))}>
                    <div class="nav__links">
                        <a href="#features" onclick={close_menu.clone()}>{"Features"}</a>
                        <a href="#demo" onclick={close_menu.clone()}>{"Demo"}</a>
                        <a href="#pricing" onclick={close_menu.clone()}>{"Pricing"}</a>
                        <a href="#faq" onclick={close_menu.clone()}>{"FAQ"}</a>
                        <JoinBetaLink class={classes!("btn", "btn--primary")} onclick={close_menu}>
                            {"Join Beta"}
                        </JoinBetaLink>
                    </div>
                </nav>
            </div>
        </header>
    }
}
