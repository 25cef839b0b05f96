use log::Level;

#[cfg(debug_assertions)]
pub fn storage_namespace() -> &'static str {
    "dev."  // Keeps local development data apart from a visitor's real data
}

#[cfg(not(debug_assertions))]
pub fn storage_namespace() -> &'static str {
    ""  // Production keys are stored unprefixed
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Storage keys shared by every component.
pub mod keys {
    pub const EVENTS: &str = "events";
    pub const LEADS: &str = "leads";
    pub const BILLING_YEARLY: &str = "billingYearly";
    pub const COOKIE_PREF: &str = "cookiePref";
    pub const ADMIN: &str = "LF_ADMIN";

    pub const ALL: [&str; 5] = [LEADS, EVENTS, BILLING_YEARLY, COOKIE_PREF, ADMIN];
}

/// Keyboard chord that flips admin mode.
#[derive(Clone, Debug, PartialEq)]
pub struct Chord {
    pub ctrl: bool,
    pub alt: bool,
    pub key: char,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub notice_duration_ms: u32,
    pub notice_fade_ms: u32,
    pub counter_duration_ms: u32,
    pub reveal_threshold: f64,
    pub counter_threshold: f64,
    pub export_prefix: String,
    pub admin_chord: Chord,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            notice_duration_ms: 3500,
            notice_fade_ms: 220,
            counter_duration_ms: 800,
            reveal_threshold: 0.12,
            counter_threshold: 0.2,
            export_prefix: String::new(),
            admin_chord: Chord { ctrl: true, alt: true, key: 'l' },
        }
    }
}
