use chrono::Utc;
use log::{info, warn};
use web_sys::{window, Document, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{keys, Chord};
use crate::context::{use_app, AppContext};
use crate::export::{self, ClearOutcome, CsvExport, CSV_MIME};
use crate::store::Store;

/// Whether the private export tools are shown. Only a visibility switch:
/// nothing reads this flag to grant or deny an operation.
#[derive(Clone)]
pub struct AdminMode {
    store: Store,
}

impl AdminMode {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.get(keys::ADMIN, "0".to_string()) == "1"
    }

    /// Flips the flag and returns the new state.
    pub fn toggle(&self) -> bool {
        let next = !self.is_enabled();
        self.store.set(keys::ADMIN, &if next { "1" } else { "0" });
        next
    }
}

pub fn is_toggle_chord(chord: &Chord, key: &str, ctrl: bool, alt: bool) -> bool {
    let mut chars = key.chars();
    let single = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return false,
    };
    ctrl == chord.ctrl && alt == chord.alt && single.to_ascii_lowercase() == chord.key
}

fn deliver(export: Result<CsvExport, export::ExportError>, noun: &str, notify: impl Fn(&str, &str)) {
    match export {
        Ok(file) => match export::download_text_file(&file.filename, &file.content, CSV_MIME) {
            Ok(()) => {
                info!("exported {} {}(s) to {}", file.count, noun, file.filename);
                let title = format!("{}s downloaded", capitalize(noun));
                notify(&title, &format!("Exported {} {}(s) to CSV.", file.count, noun));
            }
            Err(e) => {
                warn!("download of {} failed: {}", file.filename, e);
                notify("Download failed", "Your browser blocked the file download.");
            }
        },
        Err(e) => {
            let (title, message) = e.notice();
            notify(title, message);
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn confirm_clear(count: usize) -> bool {
    window()
        .and_then(|w| {
            w.confirm_with_message(&format!(
                "Clear {} tracked event(s)? This cannot be undone.",
                count
            ))
            .ok()
        })
        .unwrap_or(false)
}

/// Whether the admin controls are showing, shared from the app root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminVisible(pub bool);

pub const LEADS_CONTROL_ID: &str = "downloadLeadsBtn";

fn leads_control_present(document: &Document) -> bool {
    document.get_element_by_id(LEADS_CONTROL_ID).is_some()
}

/// Listens for the admin chord on every page and returns the current
/// visibility. Switching on where the export controls are not rendered
/// leaves a warning, since nothing will appear.
#[hook]
pub fn use_admin_hotkey(app: Option<AppContext>) -> bool {
    let enabled = use_state(|| app.as_ref().map(|a| a.admin.is_enabled()).unwrap_or(false));

    {
        let enabled = enabled.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let Some(app) = app.as_ref() else { return };
            if !is_toggle_chord(&app.config.admin_chord, &e.key(), e.ctrl_key(), e.alt_key()) {
                return;
            }
            let next = app.admin.toggle();
            enabled.set(next);
            if next {
                app.notifier.notify("Admin mode enabled", "Private tools are now visible.");
                let present = window()
                    .and_then(|w| w.document())
                    .map(|d| leads_control_present(&d))
                    .unwrap_or(false);
                if !present {
                    warn!("[admin] download leads control is not on this page");
                }
            } else {
                app.notifier.notify("Admin mode disabled", "Private tools are hidden.");
            }
        });
    }

    *enabled
}

#[function_component(AdminTools)]
pub fn admin_tools() -> Html {
    let app = use_app();
    let enabled = use_context::<AdminVisible>().unwrap_or_default().0;

    let Some(app) = app else {
        return html! {};
    };

    let on_download_leads = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| {
            let leads = app.leads.leads();
            let export = export::export_leads(&leads, &app.config.export_prefix, Utc::now().date_naive());
            let notifier = app.notifier.clone();
            deliver(export, "lead", move |t, m| notifier.notify(t, m));
        })
    };

    let on_download_events = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| {
            let events = app.tracker.events();
            let export = export::export_events(&events, &app.config.export_prefix, Utc::now().date_naive());
            let notifier = app.notifier.clone();
            deliver(export, "event", move |t, m| notifier.notify(t, m));
        })
    };

    let on_clear_events = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| {
            match export::clear_events(&app.tracker, confirm_clear) {
                ClearOutcome::NothingToClear => {
                    app.notifier.notify("Nothing to clear", "No events stored yet.")
                }
                ClearOutcome::Cancelled => {}
                ClearOutcome::Cleared(n) => {
                    info!("cleared {} tracked event(s)", n);
                    app.notifier.notify("Events cleared", "Tracking storage is now empty.");
                }
            }
        })
    };

    let admin_class = enabled.then(|| "is-admin");

    html! {
        <div class="admin-tools">
            <button
                id={LEADS_CONTROL_ID}
                class={classes!("btn", "btn--ghost", "admin-only", admin_class)}
                onclick={on_download_leads}
            >
                {"Download leads (CSV)"}
            </button>
            <button
                id="downloadEventsBtn"
                class={classes!("btn", "btn--ghost", "admin-only", admin_class)}
                onclick={on_download_events}
            >
                {"Download events (CSV)"}
            </button>
            <button
                id="clearEventsBtn"
                class={classes!("btn", "btn--ghost", "admin-only", admin_class)}
                onclick={on_clear_events}
            >
                {"Clear events"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::store::memory_store;

    #[test]
    fn flag_defaults_off_and_toggles() {
        let (store, backend) = memory_store();
        let admin = AdminMode::new(store);
        assert!(!admin.is_enabled());

        assert!(admin.toggle());
        assert!(admin.is_enabled());
        assert_eq!(backend.raw("LF_ADMIN").as_deref(), Some("\"1\""));

        assert!(!admin.toggle());
        assert_eq!(backend.raw("LF_ADMIN").as_deref(), Some("\"0\""));
    }

    #[test]
    fn chord_matches_ctrl_alt_l_only() {
        let chord = SiteConfig::default().admin_chord;
        assert!(is_toggle_chord(&chord, "l", true, true));
        assert!(is_toggle_chord(&chord, "L", true, true));
        assert!(!is_toggle_chord(&chord, "l", true, false));
        assert!(!is_toggle_chord(&chord, "l", false, true));
        assert!(!is_toggle_chord(&chord, "k", true, true));
        assert!(!is_toggle_chord(&chord, "Escape", true, true));
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("lead"), "Lead");
        assert_eq!(capitalize(""), "");
    }
}
