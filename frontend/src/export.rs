//! CSV export of captured leads and tracked events, plus the browser download
//! that hands the file to the user.

use chrono::NaiveDate;
use js_sys::Array;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::leads::LeadRecord;
use crate::tracking::{EventRecord, Tracker};

pub const CSV_MIME: &str = "text/csv;charset=utf-8";

pub trait CsvRecord {
    const COLUMNS: &'static [&'static str];
    fn fields(&self) -> Vec<String>;
}

impl CsvRecord for LeadRecord {
    const COLUMNS: &'static [&'static str] = &["type", "email", "ts"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.kind.as_str().to_string(),
            self.email.clone(),
            self.ts.clone(),
        ]
    }
}

impl CsvRecord for EventRecord {
    const COLUMNS: &'static [&'static str] = &["type", "meta", "ts"];

    fn fields(&self) -> Vec<String> {
        let meta = serde_json::to_string(&self.meta).unwrap_or_else(|_| "{}".to_string());
        vec![self.kind.clone(), meta, self.ts.clone()]
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| quote(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Header plus one row per record. Every field is quoted, rows end in `\n`
/// except the last.
pub fn to_csv<R: CsvRecord>(records: &[R]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(row(R::COLUMNS));
    for record in records {
        lines.push(row(&record.fields()));
    }
    lines.join("\n")
}

#[derive(Debug, Error, PartialEq)]
pub enum ExportError {
    #[error("no leads captured yet")]
    NoLeads,
    #[error("no events tracked yet")]
    NoEvents,
}

impl ExportError {
    pub fn notice(&self) -> (&'static str, &'static str) {
        match self {
            ExportError::NoLeads => (
                "No leads yet",
                "Collect a few emails (Join Beta / Founder) first, then download.",
            ),
            ExportError::NoEvents => (
                "No events yet",
                "Interact with the page first, then download events.",
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
    pub count: usize,
}

pub fn export_leads(leads: &[LeadRecord], prefix: &str, today: NaiveDate) -> Result<CsvExport, ExportError> {
    if leads.is_empty() {
        return Err(ExportError::NoLeads);
    }
    Ok(CsvExport {
        filename: format!("{}leads_{}.csv", prefix, today.format("%Y-%m-%d")),
        content: to_csv(leads),
        count: leads.len(),
    })
}

pub fn export_events(events: &[EventRecord], prefix: &str, today: NaiveDate) -> Result<CsvExport, ExportError> {
    if events.is_empty() {
        return Err(ExportError::NoEvents);
    }
    Ok(CsvExport {
        filename: format!("{}events_{}.csv", prefix, today.format("%Y-%m-%d")),
        content: to_csv(events),
        count: events.len(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClearOutcome {
    NothingToClear,
    Cancelled,
    Cleared(usize),
}

/// Clears the stored events once `confirm` agrees. `confirm` receives the
/// number of events about to be dropped and is not asked when there are none.
pub fn clear_events(tracker: &Tracker, confirm: impl FnOnce(usize) -> bool) -> ClearOutcome {
    let count = tracker.events().len();
    if count == 0 {
        return ClearOutcome::NothingToClear;
    }
    if !confirm(count) {
        return ClearOutcome::Cancelled;
    }
    tracker.clear();
    ClearOutcome::Cleared(count)
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("no document to attach the download link to")]
    NoDocument,
    #[error("browser refused the download: {0}")]
    Browser(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        DownloadError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Wraps `content` in a Blob and clicks a transient anchor pointing at it.
pub fn download_text_file(filename: &str, content: &str, mime: &str) -> Result<(), DownloadError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DownloadError::NoDocument)?;
    let body = document.body().ok_or(DownloadError::NoDocument)?;

    let parts = Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into().map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    // Some browsers ignore clicks on detached anchors
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&url)?;
    Ok(())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn download_leaves_no_anchor_behind() {
        let document = web_sys::window().unwrap().document().unwrap();
        let before = document.query_selector_all("a[download]").unwrap().length();

        download_text_file("leads_2026-10-18.csv", "\"type\",\"email\",\"ts\"", CSV_MIME).unwrap();

        let after = document.query_selector_all("a[download]").unwrap().length();
        assert_eq!(before, after);
    }
}
