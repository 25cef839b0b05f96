use yew::prelude::*;

use crate::components::nav::JoinBetaLink;
use crate::config::keys;
use crate::context::use_app;
use crate::store::Store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingMode {
    Monthly,
    Yearly,
}

impl BillingMode {
    pub fn from_yearly(yearly: bool) -> Self {
        if yearly {
            BillingMode::Yearly
        } else {
            BillingMode::Monthly
        }
    }

    pub fn is_yearly(self) -> bool {
        self == BillingMode::Yearly
    }

    pub fn toggled(self) -> Self {
        Self::from_yearly(!self.is_yearly())
    }

    pub fn period_label(self) -> &'static str {
        match self {
            BillingMode::Monthly => "/mo",
            BillingMode::Yearly => "/mo (billed yearly)",
        }
    }

    pub fn load(store: &Store) -> Self {
        Self::from_yearly(store.get(keys::BILLING_YEARLY, false))
    }

    pub fn save(self, store: &Store) {
        store.set(keys::BILLING_YEARLY, &self.is_yearly());
    }
}

/// Monthly and yearly amounts for one plan, as shown without the currency sign.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceTag {
    pub month: String,
    pub year: String,
}

impl PriceTag {
    pub fn new(month: &str, year: &str) -> Self {
        Self {
            month: month.to_string(),
            year: year.to_string(),
        }
    }

    pub fn display(&self, mode: BillingMode) -> String {
        match mode {
            BillingMode::Monthly => format!("${}", self.month),
            BillingMode::Yearly => format!("${}", self.year),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub blurb: &'static str,
    pub price: PriceTag,
    pub features: Vec<&'static str>,
    pub featured: bool,
}

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            name: "Starter",
            blurb: "Validate one idea end to end.",
            price: PriceTag::new("19", "15"),
            features: vec!["1 active blueprint", "Basic templates", "Email support"],
            featured: false,
        },
        Plan {
            name: "Pro",
            blurb: "For builders shipping every month.",
            price: PriceTag::new("29", "23"),
            features: vec!["Unlimited blueprints", "Landing copy", "7-day roadmaps"],
            featured: true,
        },
        Plan {
            name: "Founder",
            blurb: "Strategy help from day one.",
            price: PriceTag::new("79", "63"),
            features: vec!["Advanced strategy", "Priority support", "Founder pricing for life"],
            featured: false,
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    #[prop_or_default]
    pub on_founder: Callback<MouseEvent>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let app = use_app();
    let mode = use_state(|| {
        app.as_ref()
            .map(|a| BillingMode::load(&a.store))
            .unwrap_or(BillingMode::Monthly)
    });

    // Persist whatever mode is showing, including the one read at mount
    {
        let store = app.as_ref().map(|a| a.store.clone());
        use_effect_with_deps(
            move |mode: &BillingMode| {
                if let Some(store) = store {
                    mode.save(&store);
                }
                || ()
            },
            *mode,
        );
    }

    let toggle = {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| mode.set(mode.toggled()))
    };

    let current = *mode;

    html! {
        <section id="pricing" class="section pricing">
            <div class="section__head">
                <h2>{"Simple pricing"}</h2>
                <div class="billing">
                    <span>{"Monthly"}</span>
                    <button
                        id="billingToggle"
                        class={classes!("switch", current.is_yearly().then(|| "is-on"))}
                        aria-pressed={current.is_yearly().to_string()}
                        aria-label="Toggle yearly billing"
                        onclick={toggle}
                    >
                        <span class="switch__knob"></span>
                    </button>
                    <span>{"Yearly "}<em class="badge">{"-20%"}</em></span>
                </div>
            </div>
            <div class="pricing__grid">
                { for plans().into_iter().map(|plan| html! {
                    <article class={classes!("card", "plan", plan.featured.then(|| "plan--featured"))}>
                        <h3>{ plan.name }</h3>
                        <p class="muted">{ plan.blurb }</p>
                        <p class="plan__price">
                            <span
                                class="price"
                                data-price-month={plan.price.month.clone()}
                                data-price-year={plan.price.year.clone()}
                            >
                                { plan.price.display(current) }
                            </span>
                            <span class="period" data-period="">{ current.period_label() }</span>
                        </p>
                        <ul>
                            { for plan.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                        </ul>
                        if plan.name == "Founder" {
                            <button class="btn btn--primary" data-open-modal="founderModal" onclick={props.on_founder.clone()}>
                                {"Request founder access"}
                            </button>
                        } else {
                            <JoinBetaLink class={classes!("btn", "btn--ghost")}>{"Join the beta"}</JoinBetaLink>
                        }
                    </article>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_store;

    #[test]
    fn monthly_to_yearly_rewrites_every_price() {
        let mode = BillingMode::Monthly;
        let yearly = mode.toggled();
        assert_eq!(yearly, BillingMode::Yearly);

        for plan in plans() {
            assert_eq!(plan.price.display(mode), format!("${}", plan.price.month));
            assert_eq!(plan.price.display(yearly), format!("${}", plan.price.year));
        }
        assert_eq!(yearly.period_label(), "/mo (billed yearly)");
        assert_eq!(mode.period_label(), "/mo");
    }

    #[test]
    fn toggle_persists_yearly_flag() {
        let (store, backend) = memory_store();
        assert_eq!(BillingMode::load(&store), BillingMode::Monthly);

        BillingMode::load(&store).toggled().save(&store);
        assert_eq!(backend.raw("billingYearly").as_deref(), Some("true"));
        assert_eq!(BillingMode::load(&store), BillingMode::Yearly);
    }

    #[test]
    fn corrupt_flag_reads_as_monthly() {
        let (store, backend) = memory_store();
        backend.insert_raw("billingYearly", "\"yes\"");
        assert_eq!(BillingMode::load(&store), BillingMode::Monthly);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::store::memory_store;
    use crate::testing::{click, element, mount};
    use crate::tracking::Tracker;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn plan_card_waitlist_link_is_tracked() {
        let (store, _) = memory_store();
        let root = mount(store.clone(), html! { <Pricing /> }).await;

        click(&root, ".plan a[href='#waitlist']").await;

        let events = Tracker::new(store).events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, "click_join_beta");
        assert_eq!(events[0].meta["location"], "link_to_waitlist");
        assert_eq!(events[0].meta["text"], "Join the beta");
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn toggle_rewrites_prices_and_persists() {
        let (store, _) = memory_store();
        let root = mount(store.clone(), html! { <Pricing /> }).await;
        assert_eq!(element(&root, ".price").text_content().as_deref(), Some("$19"));

        click(&root, "#billingToggle").await;

        assert_eq!(element(&root, ".price").text_content().as_deref(), Some("$15"));
        assert_eq!(
            element(&root, "#billingToggle").get_attribute("aria-pressed").as_deref(),
            Some("true")
        );
        assert!(BillingMode::load(&store).is_yearly());
        root.remove();
    }
}
