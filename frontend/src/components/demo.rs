use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::blueprint::{self, Blueprint, BlueprintView, DEFAULT_AUDIENCE, DEFAULT_IDEA};
use crate::context::use_app;

#[function_component(DemoGenerator)]
pub fn demo_generator() -> Html {
    let app = use_app();
    let idea = use_state(String::new);
    let audience = use_state(String::new);
    let output = use_state(|| None::<Blueprint>);

    let bind = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_generate = {
        let idea = idea.clone();
        let audience = audience.clone();
        let output = output.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(app) = app.as_ref() else { return };
            let generated = {
                let mut rng = app.rng.borrow_mut();
                blueprint::generate(&idea, &audience, &mut *rng)
            };
            output.set(Some(generated));
            app.notifier.notify(
                "Blueprint generated",
                "This is a mock output. Later you'll connect the AI API.",
            );
        })
    };

    html! {
        <div class="demo">
            <div class="demo__fields">
                <input
                    id="ideaInput"
                    type="text"
                    placeholder={DEFAULT_IDEA}
                    aria-label="Your idea"
                    value={(*idea).clone()}
                    oninput={bind(&idea)}
                />
                <input
                    id="audienceInput"
                    type="text"
                    placeholder={DEFAULT_AUDIENCE}
                    aria-label="Target audience"
                    value={(*audience).clone()}
                    oninput={bind(&audience)}
                />
                <button id="generateBtn" class="btn btn--primary" type="button" onclick={on_generate}>
                    {"Generate blueprint"}
                </button>
            </div>
            <div id="outputBox" class="demo__output" aria-live="polite">
                if let Some(bp) = (*output).clone() {
                    <BlueprintView blueprint={bp} />
                } else {
                    <p class="muted">{"Your blueprint will appear here."}</p>
                }
            </div>
        </div>
    }
}
