use js_sys::Array;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::context::use_app;

/// Share of the scrollable distance already scrolled, in percent.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let height = scroll_height - client_height;
    if height <= 0.0 {
        return 0.0;
    }
    (scroll_top / height * 100.0).clamp(0.0, 100.0)
}

pub fn ease_out_cubic(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(3)
}

pub fn counter_value(target: u32, progress: f64) -> u32 {
    (target as f64 * ease_out_cubic(progress.clamp(0.0, 1.0))).round() as u32
}

fn page_progress() -> f64 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|doc| {
            progress_percent(
                doc.scroll_top() as f64,
                doc.scroll_height() as f64,
                doc.client_height() as f64,
            )
        })
        .unwrap_or(0.0)
}

#[function_component(ProgressBar)]
pub fn progress_bar() -> Html {
    let percent = use_state_eq(page_progress);

    {
        let percent = percent.clone();
        use_event_with_window("scroll", move |_: Event| percent.set(page_progress()));
    }

    html! {
        <div class="progress" aria-hidden="true">
            <div id="progressBar" class="progress__bar" style={format!("width: {:.2}%", *percent)}></div>
        </div>
    }
}

/// Keeps an IntersectionObserver and its callback alive together.
struct OnceObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for OnceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(target: &Element, threshold: f64, on_visible: impl Fn() + 'static) -> Result<OnceObserver, JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let visible = entries.iter().any(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .map(|e| e.is_intersecting())
                .unwrap_or(false)
        });
        if visible {
            on_visible();
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);

    Ok(OnceObserver {
        observer,
        _callback: callback,
    })
}

/// Becomes true the first time `node` is at least `threshold` visible and
/// stays true.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|el| {
                    let setter = visible.clone();
                    match observe_once(&el, threshold, move || setter.set(true)) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            // No observer support: show content right away
                            debug!("IntersectionObserver unavailable: {:?}", e);
                            visible.set(true);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            node,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let threshold = use_app().map(|a| a.config.reveal_threshold).unwrap_or(0.12);
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), threshold);

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), visible.then(|| "is-visible"))}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct Stat {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct CountersProps {
    pub stats: Vec<Stat>,
}

/// Counters in the hero. All start together once the strip is on screen.
#[function_component(Counters)]
pub fn counters(props: &CountersProps) -> Html {
    let config = use_app().map(|a| a.config);
    let threshold = config.as_ref().map(|c| c.counter_threshold).unwrap_or(0.2);
    let duration_ms = config.as_ref().map(|c| c.counter_duration_ms).unwrap_or(800);
    let node = use_node_ref();
    let started = use_reveal(node.clone(), threshold);

    html! {
        <div ref={node} class="hero__stats">
            { for props.stats.iter().map(|stat| html! {
                <div class="stat">
                    <span class="stat__value">
                        if started {
                            <CountUp target={stat.target} {duration_ms} />
                        } else {
                            {"0"}
                        }
                        { stat.suffix }
                    </span>
                    <span class="stat__label">{ stat.label }</span>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CountUpProps {
    target: u32,
    duration_ms: u32,
}

/// Frame-driven count from 0; the frame loop ends when this unmounts.
#[function_component(CountUp)]
fn count_up(props: &CountUpProps) -> Html {
    let progress = use_raf(props.duration_ms, 0);
    html! { <span data-counter={props.target.to_string()}>{ counter_value(props.target, progress) }</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_zero_when_page_cannot_scroll() {
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn progress_scales_to_scrollable_height() {
        assert_eq!(progress_percent(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(1000.0, 2000.0, 1000.0), 100.0);
        assert_eq!(format!("{:.2}%", progress_percent(1.0, 1300.0, 1000.0)), "0.33%");
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(progress_percent(1200.0, 2000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(-30.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn counter_runs_from_zero_to_target() {
        assert_eq!(counter_value(1200, 0.0), 0);
        assert_eq!(counter_value(1200, 0.5), 1050);
        assert_eq!(counter_value(1200, 1.0), 1200);
        assert_eq!(counter_value(1200, 3.0), 1200);
    }

    #[test]
    fn counter_is_monotonic() {
        let mut last = 0;
        for step in 0..=100 {
            let value = counter_value(97, step as f64 / 100.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 97);
    }
}
