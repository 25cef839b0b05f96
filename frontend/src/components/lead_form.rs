use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::use_app;
use crate::leads::{LeadRecord, LeadType};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub form_id: AttrValue,
    pub field_id: AttrValue,
    pub error_id: AttrValue,
    pub lead_type: LeadType,
    pub submit_label: AttrValue,
    pub success_title: AttrValue,
    pub success_message: AttrValue,
    #[prop_or_default]
    pub on_success: Callback<LeadRecord>,
}

/// Email capture shared by the waitlist section and the founder modal.
#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let app = use_app();
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let error = error.clone();
        let lead_type = props.lead_type;
        let success_title = props.success_title.clone();
        let success_message = props.success_message.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(app) = app.as_ref() else { return };

            match app.leads.submit(lead_type, email.as_str()) {
                Ok(lead) => {
                    info!("captured {} lead", lead.kind.as_str());
                    error.set(None);
                    email.set(String::new());
                    app.notifier.notify(&success_title, &success_message);
                    on_success.emit(lead);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    html! {
        <form id={props.form_id.clone()} class="form" novalidate=true onsubmit={on_submit}>
            <div class="form__row">
                <input
                    id={props.field_id.clone()}
                    type="email"
                    name="email"
                    autocomplete="email"
                    aria-label="Email address"
                    placeholder="you@company.com"
                    value={(*email).clone()}
                    oninput={on_input}
                    aria-describedby={props.error_id.clone()}
                />
                <button class="btn btn--primary" type="submit">{ props.submit_label.clone() }</button>
            </div>
            <p id={props.error_id.clone()} class="form__error" role="alert">
                { (*error).clone().unwrap_or_default() }
            </p>
        </form>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::config::keys;
    use crate::store::memory_store;
    use crate::testing::{click, element, mount, type_into};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn waitlist_form() -> Html {
        html! {
            <LeadForm
                form_id="waitlistForm"
                field_id="email"
                error_id="formError"
                lead_type={LeadType::Waitlist}
                submit_label="Join waitlist"
                success_title="Welcome to the Beta"
                success_message="You're on the waitlist."
            />
        }
    }

    #[wasm_bindgen_test]
    async fn invalid_email_shows_inline_error_instead_of_browser_validation() {
        let (store, _) = memory_store();
        let root = mount(store.clone(), waitlist_form()).await;
        assert!(element(&root, "#waitlistForm").has_attribute("novalidate"));

        type_into(&root, "#email", "not-an-email").await;
        click(&root, "button[type='submit']").await;

        assert_eq!(
            element(&root, "#formError").text_content().as_deref(),
            Some("Please enter a valid email.")
        );
        assert!(store.get_list::<LeadRecord>(keys::LEADS).is_empty());
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn valid_email_is_stored_and_field_reset() {
        let (store, _) = memory_store();
        let root = mount(store.clone(), waitlist_form()).await;

        type_into(&root, "#email", "  user@example.com ").await;
        click(&root, "button[type='submit']").await;

        let leads = store.get_list::<LeadRecord>(keys::LEADS);
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].email, "user@example.com");

        let input: HtmlInputElement = wasm_bindgen::JsCast::dyn_into(element(&root, "#email")).unwrap();
        assert_eq!(input.value(), "");
        assert_eq!(element(&root, "#formError").text_content().as_deref(), Some(""));
        root.remove();
    }
}
