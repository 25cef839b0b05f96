use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::keys;
use crate::Route;

/// What each storage key holds, as told to the visitor.
fn describe(key: &str) -> Option<&'static str> {
    match key {
        keys::LEADS => Some("emails you submit to the waitlist or founder offer"),
        keys::EVENTS => Some("anonymous interaction events such as button clicks"),
        keys::BILLING_YEARLY => Some("your monthly or yearly pricing view"),
        keys::COOKIE_PREF => Some("whether you accepted or declined this notice"),
        keys::ADMIN => Some("whether the site owner's export tools are shown on this device"),
        _ => None,
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Privacy Policy"}</h1>

                <section>
                    <h2>{"1. What we store"}</h2>
                    <p>{"This page keeps a small amount of data in your browser's local storage:"}</p>
                    <ul>
                        { for keys::ALL.iter().filter_map(|key| {
                            describe(key).map(|what| html! { <li>{ format!("{}: {}", key, what) }</li> })
                        }) }
                    </ul>
                </section>

                <section>
                    <h2>{"2. Where it goes"}</h2>
                    <p>{"Nowhere. Nothing is sent to a server, and no third-party scripts read it."}</p>
                </section>

                <section>
                    <h2>{"3. Removing it"}</h2>
                    <p>{"Clear this site's data in your browser settings to delete everything listed above."}</p>
                </section>

                <Link<Route> to={Route::Home} classes="btn btn--primary">{"Back to home"}</Link<Route>>
            </div>
            <style>
                {r#"
                    .legal-content {
                        min-height: 100vh;
                        background: #0b0d12;
                        padding: 4rem 2rem;
                        color: #e8ebf1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        font-family: system-ui, sans-serif;
                    }

                    .legal-content > div {
                        background: #141821;
                        border-radius: 16px;
                        padding: 3rem;
                        max-width: 800px;
                    }

                    .legal-content h2 {
                        color: #7c5cff;
                        font-size: 1.3rem;
                    }

                    .legal-content p, .legal-content li {
                        color: #9aa3b2;
                        line-height: 1.6;
                    }

                    .legal-content .btn {
                        display: inline-block;
                        margin-top: 1.5rem;
                        padding: 0.7rem 1.2rem;
                        border-radius: 999px;
                        background: #7c5cff;
                        color: #fff;
                        text-decoration: none;
                    }
                "#}
            </style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
            </div>
        </div>
    }
}
