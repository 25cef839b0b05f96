use js_sys::{Function, Promise, Reflect};
use log::warn;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;
use yew::prelude::*;

use crate::context::use_app;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard API is not available")]
    Unsupported,
    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
}

impl From<JsValue> for ClipboardError {
    fn from(value: JsValue) -> Self {
        ClipboardError::Rejected(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// `navigator.clipboard.writeText`, looked up at runtime so browsers without
/// the async clipboard API fail cleanly.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let navigator = window().ok_or(ClipboardError::Unsupported)?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unsupported);
    }
    let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into()
        .map_err(|_| ClipboardError::Unsupported)?;
    let promise: Promise = write
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into()
        .map_err(|_| ClipboardError::Unsupported)?;
    JsFuture::from(promise).await?;
    Ok(())
}

#[function_component(CopyLinkButton)]
pub fn copy_link_button() -> Html {
    let app = use_app();

    let onclick = Callback::from(move |_: MouseEvent| {
        let Some(app) = app.clone() else { return };
        let href = window().and_then(|w| w.location().href().ok()).unwrap_or_default();
        spawn_local(async move {
            match write_text(&href).await {
                Ok(()) => app.notifier.notify("Link copied", "Share it with your first users."),
                Err(e) => {
                    warn!("copy link failed: {}", e);
                    app.notifier.notify(
                        "Copy failed",
                        "Your browser blocked clipboard. Copy the URL manually.",
                    );
                }
            }
        });
    });

    html! {
        <button id="copyLinkBtn" class="btn btn--ghost" type="button" {onclick}>
            {"Copy link"}
        </button>
    }
}
