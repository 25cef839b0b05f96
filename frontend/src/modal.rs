//! Named dialogs with a focus trap.
//!
//! Open modals form a stack. Opening a second modal while one is showing puts
//! it on top; only the top modal traps focus, and closing any modal hands back
//! the element that had focus when that modal opened. Opening a modal that is
//! already open does nothing.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

pub const FOCUSABLE: &str =
    "a[href], button:not([disabled]), textarea, input, select, [tabindex]:not([tabindex=\"-1\"])";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalId {
    Demo,
    Founder,
}

impl ModalId {
    pub fn dom_id(self) -> &'static str {
        match self {
            ModalId::Demo => "demoModal",
            ModalId::Founder => "founderModal",
        }
    }

    /// Event recorded when a button opens this modal.
    pub fn open_event(self) -> &'static str {
        match self {
            ModalId::Demo => "open_demo_modal",
            ModalId::Founder => "open_founder_modal",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalStack<F> {
    entries: Vec<(ModalId, Option<F>)>,
}

impl<F> Default for ModalStack<F> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<F> ModalStack<F> {
    /// Returns false when `id` is already open.
    pub fn open(&mut self, id: ModalId, return_focus: Option<F>) -> bool {
        if self.is_open(id) {
            return false;
        }
        self.entries.push((id, return_focus));
        true
    }

    /// Removes `id` wherever it sits. `None` if it was not open, otherwise the
    /// focus recorded at open time.
    pub fn close(&mut self, id: ModalId) -> Option<Option<F>> {
        let index = self.entries.iter().position(|(open, _)| *open == id)?;
        Some(self.entries.remove(index).1)
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.entries.iter().any(|(open, _)| *open == id)
    }

    pub fn top(&self) -> Option<ModalId> {
        self.entries.last().map(|(id, _)| *id)
    }

    pub fn return_focus(&self, id: ModalId) -> Option<&F> {
        self.entries
            .iter()
            .find(|(open, _)| *open == id)
            .and_then(|(_, focus)| focus.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub enum ModalAction<F> {
    Open { id: ModalId, return_focus: Option<F> },
    Close(ModalId),
}

impl<F: Clone + 'static> Reducible for ModalStack<F> {
    type Action = ModalAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            ModalAction::Open { id, return_focus } => next.open(id, return_focus),
            ModalAction::Close(id) => next.close(id).is_some(),
        };
        if changed {
            next.into()
        } else {
            self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusPosition {
    None,
    Only,
    First,
    Last,
    Other,
}

pub fn position_of<T: PartialEq>(items: &[T], active: Option<&T>) -> FocusPosition {
    let Some(active) = active else {
        return if items.is_empty() { FocusPosition::None } else { FocusPosition::Other };
    };
    match items.iter().position(|item| item == active) {
        _ if items.is_empty() => FocusPosition::None,
        Some(0) if items.len() == 1 => FocusPosition::Only,
        Some(0) => FocusPosition::First,
        Some(i) if i == items.len() - 1 => FocusPosition::Last,
        _ => FocusPosition::Other,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrapAction {
    Ignore,
    FocusFirst,
    FocusLast,
    Close,
}

pub fn trap_key(key: &str, shift: bool, position: FocusPosition) -> TrapAction {
    match (key, shift, position) {
        ("Escape", _, _) => TrapAction::Close,
        ("Tab", true, FocusPosition::First | FocusPosition::Only) => TrapAction::FocusLast,
        ("Tab", false, FocusPosition::Last | FocusPosition::Only) => TrapAction::FocusFirst,
        _ => TrapAction::Ignore,
    }
}

pub fn focusables(root: &Element) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter(|el| {
            !el.has_attribute("disabled")
                && el.get_attribute("aria-hidden").map_or(true, |v| v.is_empty())
        })
        .collect()
}

pub fn active_element() -> Option<HtmlElement> {
    window()?
        .document()?
        .active_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn lock_scroll(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

/// Open/close handle over a page's `ModalStack`. Opening records the focused
/// element; closing puts focus back on it.
#[derive(Clone, PartialEq)]
pub struct Modals {
    stack: UseReducerHandle<ModalStack<HtmlElement>>,
}

impl Modals {
    pub fn open(&self, id: ModalId) {
        self.stack.dispatch(ModalAction::Open { id, return_focus: active_element() });
    }

    pub fn close(&self, id: ModalId) {
        let return_focus = self.stack.return_focus(id).cloned();
        self.stack.dispatch(ModalAction::Close(id));
        if let Some(el) = return_focus {
            let _ = el.focus();
        }
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.stack.is_open(id)
    }

    pub fn is_top(&self, id: ModalId) -> bool {
        self.stack.top() == Some(id)
    }
}

/// Modal state for a page; scroll stays locked while any modal is open.
#[hook]
pub fn use_modals() -> Modals {
    let stack = use_reducer(ModalStack::<HtmlElement>::default);

    {
        let locked = !stack.is_empty();
        use_effect_with_deps(
            move |locked: &bool| {
                lock_scroll(*locked);
                || ()
            },
            locked,
        );
    }

    Modals { stack }
}

#[derive(Properties, PartialEq)]
struct FocusTrapProps {
    dialog: NodeRef,
    on_close: Callback<()>,
}

/// Mounted only while its modal is on top, so the window listener goes away
/// with it.
#[function_component(FocusTrap)]
fn focus_trap(props: &FocusTrapProps) -> Html {
    let dialog = props.dialog.clone();
    let on_close = props.on_close.clone();

    use_event_with_window("keydown", move |e: KeyboardEvent| {
        let Some(root) = dialog.cast::<Element>() else { return };
        let items = focusables(&root);
        let active = active_element();
        match trap_key(&e.key(), e.shift_key(), position_of(&items, active.as_ref())) {
            TrapAction::Ignore => {}
            TrapAction::Close => on_close.emit(()),
            TrapAction::FocusFirst => {
                e.prevent_default();
                if let Some(first) = items.first() {
                    let _ = first.focus();
                }
            }
            TrapAction::FocusLast => {
                e.prevent_default();
                if let Some(last) = items.last() {
                    let _ = last.focus();
                }
            }
        }
    });

    html! {}
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: ModalId,
    pub title: AttrValue,
    pub open: bool,
    /// True when this modal is the top of the stack.
    pub active: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let dialog = use_node_ref();

    // Move focus inside on open
    {
        let dialog = dialog.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open {
                    if let Some(root) = dialog.cast::<HtmlElement>() {
                        let target = focusables(&root).into_iter().next().unwrap_or(root);
                        let _ = target.focus();
                    }
                }
                || ()
            },
            props.open,
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let title_id = format!("{}Title", props.id.dom_id());

    html! {
        <div
            id={props.id.dom_id()}
            class={classes!("modal", props.open.then(|| "is-open"))}
            aria-hidden={(!props.open).to_string()}
        >
            <div class="modal__backdrop" data-close-modal="" onclick={close.clone()}></div>
            <div
                class="modal__panel"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                tabindex="-1"
                ref={dialog.clone()}
            >
                <div class="modal__head">
                    <h3 id={title_id}>{ props.title.clone() }</h3>
                    <button class="iconbtn" aria-label="Close" onclick={close}>{"✕"}</button>
                </div>
                { for props.children.iter() }
            </div>
            if props.open && props.active {
                <FocusTrap dialog={dialog} on_close={props.on_close.clone()} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_records_focus_and_close_restores_it() {
        let mut stack = ModalStack::default();
        assert!(stack.open(ModalId::Demo, Some("cta-button")));
        assert!(stack.is_open(ModalId::Demo));
        assert_eq!(stack.close(ModalId::Demo), Some(Some("cta-button")));
        assert!(stack.is_empty());
    }

    #[test]
    fn second_modal_stacks_on_top() {
        let mut stack = ModalStack::default();
        stack.open(ModalId::Demo, Some("hero"));
        stack.open(ModalId::Founder, Some("demo-upgrade"));
        assert_eq!(stack.top(), Some(ModalId::Founder));

        assert_eq!(stack.close(ModalId::Founder), Some(Some("demo-upgrade")));
        assert_eq!(stack.top(), Some(ModalId::Demo));
        assert_eq!(stack.return_focus(ModalId::Demo), Some(&"hero"));
    }

    #[test]
    fn reopening_is_a_no_op() {
        let mut stack = ModalStack::default();
        stack.open(ModalId::Demo, Some("first"));
        assert!(!stack.open(ModalId::Demo, Some("second")));
        assert_eq!(stack.close(ModalId::Demo), Some(Some("first")));
        assert_eq!(stack.close(ModalId::Demo), None::<Option<&str>>);
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let stack: Rc<ModalStack<&str>> = Rc::new(ModalStack::default());
        let same = stack.clone().reduce(ModalAction::Close(ModalId::Founder));
        assert!(Rc::ptr_eq(&stack, &same));

        let opened = stack.reduce(ModalAction::Open { id: ModalId::Founder, return_focus: None });
        assert_eq!(opened.top(), Some(ModalId::Founder));
    }

    #[test]
    fn tab_from_last_wraps_to_first() {
        let items = ["close", "email", "submit"];
        let pos = position_of(&items, Some(&"submit"));
        assert_eq!(pos, FocusPosition::Last);
        assert_eq!(trap_key("Tab", false, pos), TrapAction::FocusFirst);
        assert_eq!(trap_key("Tab", true, pos), TrapAction::Ignore);
    }

    #[test]
    fn shift_tab_from_first_wraps_to_last() {
        let items = ["close", "email", "submit"];
        let pos = position_of(&items, Some(&"close"));
        assert_eq!(pos, FocusPosition::First);
        assert_eq!(trap_key("Tab", true, pos), TrapAction::FocusLast);
        assert_eq!(trap_key("Tab", false, pos), TrapAction::Ignore);
    }

    #[test]
    fn middle_tab_is_left_to_the_browser() {
        let items = ["close", "email", "submit"];
        let pos = position_of(&items, Some(&"email"));
        assert_eq!(trap_key("Tab", false, pos), TrapAction::Ignore);
        assert_eq!(trap_key("Tab", true, pos), TrapAction::Ignore);
    }

    #[test]
    fn single_focusable_wraps_both_ways() {
        let items = ["close"];
        let pos = position_of(&items, Some(&"close"));
        assert_eq!(pos, FocusPosition::Only);
        assert_eq!(trap_key("Tab", false, pos), TrapAction::FocusFirst);
        assert_eq!(trap_key("Tab", true, pos), TrapAction::FocusLast);
    }

    #[test]
    fn escape_closes_from_anywhere() {
        let items: [&str; 0] = [];
        assert_eq!(trap_key("Escape", false, position_of(&items, None)), TrapAction::Close);
        assert_eq!(trap_key("Escape", true, FocusPosition::Other), TrapAction::Close);
        assert_eq!(trap_key("Enter", false, FocusPosition::Last), TrapAction::Ignore);
    }

    #[test]
    fn focus_outside_the_dialog_counts_as_other() {
        let items = ["close", "submit"];
        assert_eq!(position_of(&items, Some(&"page-link")), FocusPosition::Other);
        assert_eq!(position_of(&items, None), FocusPosition::Other);
    }
}
