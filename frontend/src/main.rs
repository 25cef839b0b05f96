use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod store;
mod tracking;
mod leads;
mod export;
mod blueprint;
mod billing;
mod modal;
mod scroll;
mod cookie;
mod admin;
mod context;
mod components {
    pub mod notification;
    pub mod nav;
    pub mod lead_form;
    pub mod copy_link;
    pub mod demo;
}
#[cfg(all(test, target_arch = "wasm32"))]
mod testing;
mod pages {
    pub mod landing;
    pub mod privacy;
}

use admin::{use_admin_hotkey, AdminVisible};
use components::notification::{NoticeList, NoticeStack, Notifier};
use config::SiteConfig;
use context::AppContext;
use pages::{
    landing::Landing,
    privacy::{NotFound, PrivacyPolicy},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let notices = use_reducer(NoticeList::default);
    let config = SiteConfig::default();
    let fade_ms = config.notice_fade_ms;

    let app = {
        let dispatcher = notices.dispatcher();
        use_memo(
            move |_| {
                let notifier = Notifier::new(dispatcher, config.notice_duration_ms);
                AppContext::browser(notifier, config)
            },
            (),
        )
    };

    let admin_visible = use_admin_hotkey(Some((*app).clone()));

    html! {
        <ContextProvider<AppContext> context={(*app).clone()}>
            <ContextProvider<AdminVisible> context={AdminVisible(admin_visible)}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<AdminVisible>>
            <NoticeStack items={notices.items.clone()} dispatcher={notices.dispatcher()} {fade_ms} />
        </ContextProvider<AppContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
