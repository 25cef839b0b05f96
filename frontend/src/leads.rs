use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::keys;
use crate::store::Store;
use crate::tracking::{meta, now_iso, Tracker};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern compiles"));

pub fn is_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Text after the first `@`, or empty.
pub fn email_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("")
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeadType {
    Waitlist,
    FounderOffer,
}

impl LeadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadType::Waitlist => "waitlist",
            LeadType::FounderOffer => "founder_offer",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LeadRecord {
    #[serde(rename = "type")]
    pub kind: LeadType,
    pub email: String,
    pub ts: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum LeadError {
    #[error("Please enter a valid email.")]
    InvalidEmail,
}

#[derive(Clone)]
pub struct LeadCapture {
    store: Store,
    tracker: Tracker,
}

impl LeadCapture {
    pub fn new(store: Store, tracker: Tracker) -> Self {
        Self { store, tracker }
    }

    pub fn submit(&self, kind: LeadType, raw_email: &str) -> Result<LeadRecord, LeadError> {
        let email = raw_email.trim();
        if !is_email(email) {
            return Err(LeadError::InvalidEmail);
        }

        let lead = LeadRecord {
            kind,
            email: email.to_string(),
            ts: now_iso(),
        };
        self.store.push(keys::LEADS, lead.clone());

        // Founder requests are not tracked as events
        if kind == LeadType::Waitlist {
            self.tracker
                .track("submit_waitlist", meta([("emailDomain", email_domain(email))]));
        }
        Ok(lead)
    }

    pub fn leads(&self) -> Vec<LeadRecord> {
        self.store.get_list(keys::LEADS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_store;
    use chrono::DateTime;

    fn capture() -> (LeadCapture, Tracker) {
        let (store, _) = memory_store();
        let tracker = Tracker::new(store.clone());
        (LeadCapture::new(store, tracker.clone()), tracker)
    }

    #[test]
    fn accepts_valid_addresses() {
        for email in [
            "user@example.com",
            "a.b+c@sub.domain.io",
            "  padded@example.org  ",
            "UPPER@EXAMPLE.COM",
            "x@y.co",
        ] {
            assert!(is_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "plainaddress",
            "missing-domain@",
            "@example.com",
            "user@example",
            "user@example.c",
            "user name@example.com",
            "user@exa mple.com",
            "user@@example.com",
        ] {
            assert!(!is_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn waitlist_submit_stores_lead_and_tracks_domain() {
        let (capture, tracker) = capture();
        let lead = capture.submit(LeadType::Waitlist, "user@example.com").unwrap();

        let leads = capture.leads();
        assert_eq!(leads, vec![lead]);
        assert_eq!(leads[0].kind, LeadType::Waitlist);
        assert_eq!(leads[0].email, "user@example.com");
        assert!(DateTime::parse_from_rfc3339(&leads[0].ts).is_ok());

        let events = tracker.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, "submit_waitlist");
        assert_eq!(events[0].meta["emailDomain"], "example.com");
    }

    #[test]
    fn founder_submit_does_not_track() {
        let (capture, tracker) = capture();
        capture.submit(LeadType::FounderOffer, " founder@startup.dev ").unwrap();

        let leads = capture.leads();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].email, "founder@startup.dev");
        assert!(tracker.events().is_empty());
    }

    #[test]
    fn invalid_submit_stores_nothing() {
        let (capture, tracker) = capture();
        let err = capture.submit(LeadType::Waitlist, "nope").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email.");
        assert!(capture.leads().is_empty());
        assert!(tracker.events().is_empty());
    }

    #[test]
    fn lead_type_serializes_snake_case() {
        let json = serde_json::to_string(&LeadType::FounderOffer).unwrap();
        assert_eq!(json, "\"founder_offer\"");
        assert_eq!(LeadType::Waitlist.as_str(), "waitlist");
    }
}
