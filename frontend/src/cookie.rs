use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::keys;
use crate::context::use_app;
use crate::store::Store;
use crate::Route;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CookiePref {
    Accepted,
    Declined,
}

impl CookiePref {
    /// Any stored value counts as a choice, including ones this build does
    /// not recognise.
    pub fn is_chosen(store: &Store) -> bool {
        store.has(keys::COOKIE_PREF)
    }

    pub fn save(self, store: &Store) {
        store.set(keys::COOKIE_PREF, &self);
    }

    fn notice(self) -> (&'static str, &'static str) {
        match self {
            CookiePref::Accepted => (
                "Cookies accepted",
                "Thanks! You can change this later in your browser settings.",
            ),
            CookiePref::Declined => ("Cookies declined", "No problem. Some features may be limited."),
        }
    }
}

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let app = use_app();
    let open = use_state(|| {
        app.as_ref()
            .map(|a| !CookiePref::is_chosen(&a.store))
            .unwrap_or(false)
    });

    let Some(app) = app else {
        return html! {};
    };

    let choose = |pref: CookiePref| {
        let app = app.clone();
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            pref.save(&app.store);
            open.set(false);
            let (title, message) = pref.notice();
            app.notifier.notify(title, message);
        })
    };

    html! {
        <div id="cookieBanner" class={classes!("cookie", (*open).then(|| "is-open"))} role="dialog" aria-live="polite">
            <p>
                {"We store a few preferences on this device to keep the page working. "}
                <Link<Route> to={Route::Privacy}>{"Learn more"}</Link<Route>>
            </p>
            <div class="cookie__actions">
                <button id="cookieDecline" class="btn btn--ghost" onclick={choose(CookiePref::Declined)}>{"Decline"}</button>
                <button id="cookieAccept" class="btn btn--primary" onclick={choose(CookiePref::Accepted)}>{"Accept"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_store;

    #[test]
    fn banner_shows_until_a_choice_is_saved() {
        let (store, backend) = memory_store();
        assert!(!CookiePref::is_chosen(&store));

        CookiePref::Declined.save(&store);
        assert_eq!(backend.raw("cookiePref").as_deref(), Some("\"declined\""));
        assert!(CookiePref::is_chosen(&store));
    }

    #[test]
    fn unrecognised_value_still_hides_the_banner() {
        let (store, backend) = memory_store();
        backend.insert_raw("cookiePref", "\"yes\"");
        assert!(CookiePref::is_chosen(&store));

        backend.insert_raw("cookiePref", "accepted");
        assert!(CookiePref::is_chosen(&store));
    }

    #[test]
    fn stored_null_counts_as_unset() {
        let (store, backend) = memory_store();
        backend.insert_raw("cookiePref", "null");
        assert!(!CookiePref::is_chosen(&store));
    }
}
