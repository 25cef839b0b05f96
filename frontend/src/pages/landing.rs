use chrono::{Datelike, Utc};
use log::debug;
use yew::prelude::*;

use crate::billing::Pricing;
use crate::components::copy_link::CopyLinkButton;
use crate::components::demo::DemoGenerator;
use crate::components::lead_form::LeadForm;
use crate::components::nav::{clicked_text, JoinBetaLink, Nav};
use crate::context::use_app;
use crate::cookie::CookieBanner;
use crate::admin::AdminTools;
use crate::leads::{LeadRecord, LeadType};
use crate::modal::{use_modals, Modal, ModalId};
use crate::scroll::{Counters, ProgressBar, Reveal, Stat};
use crate::tracking::meta;

fn hero_stats() -> Vec<Stat> {
    vec![
        Stat { target: 120, suffix: "+", label: "founders on the waitlist" },
        Stat { target: 14, suffix: " days", label: "from idea to launch page" },
        Stat { target: 3, suffix: "x", label: "faster positioning drafts" },
    ]
}

const FEATURES: [(&str, &str); 6] = [
    ("Positioning in minutes", "Turn a one-line idea into a promise, audience and differentiators."),
    ("Pricing that converts", "Start from proven three-tier pricing and adjust from real signals."),
    ("Launch roadmap", "A seven-step plan from validation to your first paying customers."),
    ("Waitlist built in", "Collect early emails without wiring up a backend."),
    ("Private by default", "Everything stays on this device until you export it."),
    ("Founder access", "Lock in lifetime founder pricing before payments go live."),
];

const FAQ: [(&str, &str); 4] = [
    ("Is the demo using real AI?", "Not yet. The blueprint is generated locally from templates so you can try the flow."),
    ("Where is my email stored?", "Only in this browser's local storage. Nothing is sent to a server."),
    ("What does yearly billing change?", "Each plan is billed once a year at roughly 20% off the monthly price."),
    ("Can I cancel the founder offer?", "Payments are not enabled yet, so a founder request is just a reservation."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let app = use_app();
    let modals = use_modals();

    let open_modal = {
        let app = app.clone();
        let modals = modals.clone();
        move |id: ModalId| {
            let app = app.clone();
            let modals = modals.clone();
            Callback::from(move |e: MouseEvent| {
                if let Some(app) = app.as_ref() {
                    app.tracker
                        .track(id.open_event(), meta([("text", clicked_text(&e, "button"))]));
                }
                debug!("opening {}", id.dom_id());
                modals.open(id);
            })
        }
    };

    let close_modal = {
        let modals = modals.clone();
        move |id: ModalId| {
            let modals = modals.clone();
            Callback::from(move |_: ()| modals.close(id))
        }
    };

    let on_founder_success = {
        let close = close_modal(ModalId::Founder);
        Callback::from(move |_: LeadRecord| close.emit(()))
    };

    let year = Utc::now().year();

    html! {
        <div id="top" class="page">
            <ProgressBar />
            <Nav />

            <main>
                <section class="hero">
                    <div class="container hero__inner">
                        <p class="eyebrow">{"Private beta"}</p>
                        <h1>{"Launch your SaaS idea this month, not next year."}</h1>
                        <p class="hero__lead">
                            {"LaunchForge AI turns a rough idea into positioning, pricing and a launch plan you can act on today."}
                        </p>
                        <div class="hero__actions">
                            <JoinBetaLink class={classes!("btn", "btn--primary")}>{"Join the beta"}</JoinBetaLink>
                            <button class="btn btn--ghost" data-open-modal="demoModal" onclick={open_modal(ModalId::Demo)}>
                                {"Try the demo"}
                            </button>
                        </div>
                        <Counters stats={hero_stats()} />
                    </div>
                </section>

                <section id="features" class="section">
                    <div class="container">
                        <Reveal class={classes!("section__head")}>
                            <h2>{"Everything you need before launch day"}</h2>
                        </Reveal>
                        <div class="grid">
                            { for FEATURES.iter().map(|(title, body)| html! {
                                <Reveal class={classes!("card")}>
                                    <h3>{ *title }</h3>
                                    <p class="muted">{ *body }</p>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="demo" class="section section--alt">
                    <Reveal class={classes!("container", "demo-cta")}>
                        <h2>{"See a blueprint in seconds"}</h2>
                        <p class="muted">{"Describe your idea and audience. We'll draft the rest."}</p>
                        <button class="btn btn--primary" data-open-modal="demoModal" onclick={open_modal(ModalId::Demo)}>
                            {"Generate a blueprint"}
                        </button>
                    </Reveal>
                </section>

                <div class="container">
                    <Pricing on_founder={open_modal(ModalId::Founder)} />
                </div>

                <section id="waitlist" class="section section--alt">
                    <Reveal class={classes!("container", "waitlist")}>
                        <h2>{"Join the beta"}</h2>
                        <p class="muted">{"Get early access and help shape what we build next."}</p>
                        <LeadForm
                            form_id="waitlistForm"
                            field_id="email"
                            error_id="formError"
                            lead_type={LeadType::Waitlist}
                            submit_label="Join waitlist"
                            success_title="Welcome to the Beta"
                            success_message="You're on the waitlist. We'll email you soon."
                        />
                    </Reveal>
                </section>

                <section id="faq" class="section">
                    <div class="container">
                        <h2>{"Questions"}</h2>
                        { for FAQ.iter().map(|(q, a)| html! {
                            <details class="faq">
                                <summary>{ *q }</summary>
                                <p class="muted">{ *a }</p>
                            </details>
                        }) }
                    </div>
                </section>
            </main>

            <footer class="footer">
                <div class="container footer__inner">
                    <p class="muted">{"© "}<span id="year">{ year }</span>{" LaunchForge AI"}</p>
                    <div class="footer__actions">
                        <CopyLinkButton />
                        <AdminTools />
                    </div>
                </div>
            </footer>

            <Modal
                id={ModalId::Demo}
                title="Blueprint generator"
                open={modals.is_open(ModalId::Demo)}
                active={modals.is_top(ModalId::Demo)}
                on_close={close_modal(ModalId::Demo)}
            >
                <DemoGenerator />
                <p class="modal__foot muted">
                    {"Like what you see? "}
                    <button class="btn btn--link" data-open-modal="founderModal" onclick={open_modal(ModalId::Founder)}>
                        {"Become a founder"}
                    </button>
                </p>
            </Modal>

            <Modal
                id={ModalId::Founder}
                title="Founder access"
                open={modals.is_open(ModalId::Founder)}
                active={modals.is_top(ModalId::Founder)}
                on_close={close_modal(ModalId::Founder)}
            >
                <p class="muted">{"Reserve lifetime founder pricing. We'll email you when payments open."}</p>
                <LeadForm
                    form_id="founderForm"
                    field_id="founderEmail"
                    error_id="founderError"
                    lead_type={LeadType::FounderOffer}
                    submit_label="Request access"
                    success_title="Founder request received"
                    success_message="We'll notify you when payments are enabled."
                    on_success={on_founder_success}
                />
            </Modal>

            <CookieBanner />

            <style>
                {r#"
                    :root {
                        --bg: #0b0d12;
                        --panel: #141821;
                        --text: #e8ebf1;
                        --muted: #9aa3b2;
                        --accent: #7c5cff;
                        --radius: 14px;
                    }
                    body { margin: 0; background: var(--bg); color: var(--text); font-family: system-ui, sans-serif; }
                    body.no-scroll { overflow: hidden; }
                    .container { max-width: 1100px; margin: 0 auto; padding: 0 1.25rem; }
                    .muted { color: var(--muted); }
                    .btn {
                        display: inline-block;
                        padding: 0.7rem 1.2rem;
                        border-radius: 999px;
                        border: 1px solid transparent;
                        font-weight: 600;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .btn--primary { background: var(--accent); color: #fff; }
                    .btn--ghost { background: transparent; color: var(--text); border-color: #2a3040; }
                    .btn--link { background: none; border: none; color: var(--accent); padding: 0; }
                    .admin-only { display: none; }
                    .admin-only.is-admin { display: inline-block; }

                    #progressBar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        height: 3px;
                        background: var(--accent);
                        z-index: 50;
                    }

                    .nav { position: sticky; top: 0; background: rgba(11, 13, 18, 0.85); backdrop-filter: blur(8px); z-index: 40; }
                    .nav__inner { display: flex; align-items: center; justify-content: space-between; height: 64px; }
                    .nav__brand { color: var(--text); font-weight: 700; text-decoration: none; }
                    .nav__links { display: flex; gap: 1.25rem; align-items: center; }
                    .nav__links a { color: var(--text); text-decoration: none; }
                    .nav__toggle { display: none; background: none; border: none; }
                    .nav__toggle span { display: block; width: 22px; height: 2px; margin: 4px 0; background: var(--text); }

                    @media (max-width: 768px) {
                        .nav__toggle { display: block; }
                        .nav__menu { display: none; position: absolute; top: 64px; left: 0; right: 0; background: var(--panel); padding: 1rem; }
                        .nav__menu.is-open { display: block; }
                        .nav__links { flex-direction: column; align-items: flex-start; }
                    }

                    .hero { padding: 6rem 0 4rem; }
                    .hero h1 { font-size: clamp(2rem, 5vw, 3.4rem); line-height: 1.1; margin: 0.5rem 0 1rem; }
                    .hero__actions { display: flex; gap: 0.75rem; margin: 1.5rem 0 2.5rem; }
                    .hero__stats { display: flex; gap: 2.5rem; flex-wrap: wrap; }
                    .stat__value { display: block; font-size: 2rem; font-weight: 700; }
                    .eyebrow { color: var(--accent); text-transform: uppercase; letter-spacing: 0.1em; font-size: 0.8rem; }

                    .section { padding: 5rem 0; }
                    .section--alt { background: var(--panel); }
                    .section__head { display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 1rem; }
                    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1rem; }
                    .card { background: var(--panel); border-radius: var(--radius); padding: 1.5rem; }

                    .reveal { opacity: 0; transform: translateY(16px); transition: opacity 0.5s ease, transform 0.5s ease; }
                    .reveal.is-visible { opacity: 1; transform: none; }

                    .billing { display: flex; align-items: center; gap: 0.6rem; }
                    .switch { width: 46px; height: 26px; border-radius: 999px; border: none; background: #2a3040; position: relative; cursor: pointer; }
                    .switch__knob { position: absolute; top: 3px; left: 3px; width: 20px; height: 20px; border-radius: 50%; background: #fff; transition: transform 0.2s ease; }
                    .switch.is-on { background: var(--accent); }
                    .switch.is-on .switch__knob { transform: translateX(20px); }
                    .badge { font-style: normal; color: var(--accent); }
                    .pricing__grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1rem; margin-top: 2rem; }
                    .plan--featured { outline: 2px solid var(--accent); }
                    .plan__price .price { font-size: 2.2rem; font-weight: 700; }

                    .form__row { display: flex; gap: 0.5rem; flex-wrap: wrap; }
                    .form input { flex: 1; min-width: 220px; padding: 0.7rem 1rem; border-radius: 999px; border: 1px solid #2a3040; background: var(--bg); color: var(--text); }
                    .form__error { color: #ff6b6b; min-height: 1.2em; }

                    .faq { border-bottom: 1px solid #2a3040; padding: 1rem 0; }
                    .faq summary { cursor: pointer; font-weight: 600; }

                    .footer { padding: 2rem 0; border-top: 1px solid #2a3040; }
                    .footer__inner { display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 1rem; }
                    .footer__actions { display: flex; gap: 0.5rem; }

                    .modal { position: fixed; inset: 0; display: none; z-index: 60; }
                    .modal.is-open { display: grid; place-items: center; }
                    .modal__backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.6); }
                    .modal__panel { position: relative; background: var(--panel); border-radius: var(--radius); padding: 1.5rem; width: min(640px, 92vw); max-height: 86vh; overflow-y: auto; }
                    .modal__head { display: flex; justify-content: space-between; align-items: center; }
                    .iconbtn { background: none; border: none; color: var(--text); font-size: 1.2rem; cursor: pointer; }
                    .demo__fields { display: grid; gap: 0.6rem; margin-bottom: 1rem; }
                    .demo__fields input { padding: 0.7rem 1rem; border-radius: 10px; border: 1px solid #2a3040; background: var(--bg); color: var(--text); }
                    .demo__output { background: var(--bg); border-radius: 10px; padding: 1rem; }

                    .cookie { position: fixed; left: 1rem; right: 1rem; bottom: 1rem; display: none; background: var(--panel); border-radius: var(--radius); padding: 1rem 1.25rem; z-index: 55; }
                    .cookie.is-open { display: flex; justify-content: space-between; align-items: center; gap: 1rem; flex-wrap: wrap; }
                    .cookie a { color: var(--accent); }
                    .cookie__actions { display: flex; gap: 0.5rem; }

                    .toasts { position: fixed; right: 1rem; bottom: 1rem; display: grid; gap: 0.5rem; z-index: 70; }
                    .toast { background: var(--panel); border-left: 3px solid var(--accent); border-radius: 10px; padding: 0.8rem 1rem; min-width: 240px; transition: opacity 0.22s ease, transform 0.22s ease; }
                    .toast p { margin: 0; }
                    .toast__title { font-weight: 600; }
                "#}
            </style>
        </div>
    }
}
