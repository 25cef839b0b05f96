use rand::Rng;
use yew::prelude::*;

pub const DEFAULT_IDEA: &str = "A productivity tool";
pub const DEFAULT_AUDIENCE: &str = "Busy professionals";

const NICHE_TEMPLATES: [&str; 3] = [
    "who struggle with time and consistency",
    "who want results without complexity",
    "who need a simple step-by-step system",
];

const PROMISE: &str = "Reduce overwhelm and deliver measurable progress in days, not months.";

const DIFFERENTIATORS: [&str; 3] = [
    "Guided framework (not generic chat)",
    "Clear deliverables per day",
    "Built-in landing narrative + pricing",
];

const TIERS: [(&str, &str, &[&str]); 3] = [
    ("Starter", "$19/mo", &["Core feature", "Basic templates"]),
    ("Pro", "$29/mo", &["Unlimited outputs", "Landing copy", "Roadmaps"]),
    ("Founder", "$79/mo", &["Advanced strategy", "Priority support"]),
];

const ROADMAP: [&str; 7] = [
    "Day 1: Validate pain + define ICP",
    "Day 2: Craft value proposition + differentiators",
    "Day 3: Build pricing tiers + packaging",
    "Day 4: Draft landing narrative + FAQs",
    "Day 5: Create MVP scope + delivery plan",
    "Day 6: Launch to early adopters",
    "Day 7: Collect feedback + iterate",
];

#[derive(Clone, Debug, PartialEq)]
pub struct Positioning {
    pub niche: String,
    pub promise: String,
    pub differentiators: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tier {
    pub name: String,
    pub price: String,
    pub includes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Blueprint {
    pub headline: String,
    pub positioning: Positioning,
    pub pricing: Vec<Tier>,
    pub roadmap: Vec<String>,
}

fn or_default<'a>(input: &'a str, default: &'a str) -> &'a str {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

/// Mock blueprint for `idea` aimed at `audience`. Only the niche phrasing
/// depends on `rng`.
pub fn generate<R: Rng + ?Sized>(idea: &str, audience: &str, rng: &mut R) -> Blueprint {
    let idea = or_default(idea, DEFAULT_IDEA);
    let audience = or_default(audience, DEFAULT_AUDIENCE);
    let niche = NICHE_TEMPLATES[rng.gen_range(0..NICHE_TEMPLATES.len())];

    Blueprint {
        headline: format!("Launch a {} for {}", idea, audience),
        positioning: Positioning {
            niche: format!("{} {}", audience, niche),
            promise: PROMISE.to_string(),
            differentiators: DIFFERENTIATORS.iter().map(|d| d.to_string()).collect(),
        },
        pricing: TIERS
            .iter()
            .map(|(name, price, includes)| Tier {
                name: name.to_string(),
                price: price.to_string(),
                includes: includes.iter().map(|i| i.to_string()).collect(),
            })
            .collect(),
        roadmap: ROADMAP.iter().map(|r| r.to_string()).collect(),
    }
}

#[derive(Properties, PartialEq)]
pub struct BlueprintViewProps {
    pub blueprint: Blueprint,
}

#[function_component(BlueprintView)]
pub fn blueprint_view(props: &BlueprintViewProps) -> Html {
    let bp = &props.blueprint;

    html! {
        <div class="blueprint">
            <h4>{ &bp.headline }</h4>
            <p class="muted"><strong>{"Positioning"}</strong></p>
            <ul>
                <li><strong>{"Niche: "}</strong>{ &bp.positioning.niche }</li>
                <li><strong>{"Promise: "}</strong>{ &bp.positioning.promise }</li>
            </ul>
            <p class="muted"><strong>{"Differentiators"}</strong></p>
            <ul>
                { for bp.positioning.differentiators.iter().map(|d| html! { <li>{ d }</li> }) }
            </ul>
            <p class="muted"><strong>{"Pricing"}</strong></p>
            <ul>
                { for bp.pricing.iter().map(|t| html! {
                    <li>
                        <strong>{ format!("{}: ", t.name) }</strong>
                        { format!("{} — {}", t.price, t.includes.join(", ")) }
                    </li>
                }) }
            </ul>
            <p class="muted"><strong>{"7-day roadmap"}</strong></p>
            <ul>
                { for bp.roadmap.iter().map(|r| html! { <li>{ r }</li> }) }
            </ul>
        </div>
    }
}
