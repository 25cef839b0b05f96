use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use yew::prelude::*;

use crate::admin::AdminMode;
use crate::components::notification::Notifier;
use crate::config::SiteConfig;
use crate::leads::LeadCapture;
use crate::store::Store;
use crate::tracking::Tracker;

/// Everything the page's components share, created once at mount and handed
/// down through a `ContextProvider`.
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<SiteConfig>,
    pub store: Store,
    pub tracker: Tracker,
    pub leads: LeadCapture,
    pub admin: AdminMode,
    pub notifier: Notifier,
    pub rng: Rc<RefCell<StdRng>>,
}

impl AppContext {
    pub fn new(store: Store, notifier: Notifier, config: SiteConfig, rng: StdRng) -> Self {
        let tracker = Tracker::new(store.clone());
        Self {
            config: Rc::new(config),
            leads: LeadCapture::new(store.clone(), tracker.clone()),
            admin: AdminMode::new(store.clone()),
            tracker,
            store,
            notifier,
            rng: Rc::new(RefCell::new(rng)),
        }
    }

    pub fn browser(notifier: Notifier, config: SiteConfig) -> Self {
        Self::new(Store::browser(), notifier, config, StdRng::from_entropy())
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.rng, &other.rng)
            && self.store.same_backend(&other.store)
            && self.notifier == other.notifier
    }
}

/// Components render nothing when mounted outside the provider.
#[hook]
pub fn use_app() -> Option<AppContext> {
    let app = use_context::<AppContext>();
    if app.is_none() {
        log::warn!("component mounted outside the AppContext provider");
    }
    app
}
