use chrono::{SecondsFormat, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::keys;
use crate::store::Store;

pub type EventMeta = Map<String, Value>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub meta: EventMeta,
    pub ts: String,
}

/// ISO-8601 timestamp in the same shape `Date.toISOString()` produces.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Builds an `EventMeta` from string pairs.
pub fn meta<I, K, V>(pairs: I) -> EventMeta
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[derive(Clone)]
pub struct Tracker {
    store: Store,
}

impl Tracker {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn track(&self, kind: &str, meta: EventMeta) {
        let entry = EventRecord {
            kind: kind.to_string(),
            meta,
            ts: now_iso(),
        };
        debug!("[track] {} {:?}", entry.kind, entry.meta);
        self.store.push(keys::EVENTS, entry);
    }

    pub fn events(&self) -> Vec<EventRecord> {
        self.store.get_list(keys::EVENTS)
    }

    pub fn clear(&self) {
        self.store.set(keys::EVENTS, &Vec::<EventRecord>::new());
    }
}
