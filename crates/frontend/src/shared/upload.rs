//! Multipart upload with progress reporting.
//!
//! `fetch` exposes no upload progress, so this goes through XMLHttpRequest.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Promise};
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use crate::shared::errors::ApiError;

/// Turns raw progress events into a non-decreasing percentage that only
/// reaches 100 once the server has accepted the file.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    last: u8,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// New percentage to report, if it moved forward.
    pub fn record(&mut self, loaded: f64, total: f64) -> Option<u8> {
        if total <= 0.0 {
            return None;
        }
        let pct = ((loaded / total) * 100.0).floor().clamp(0.0, 99.0) as u8;
        if pct > self.last {
            self.last = pct;
            Some(pct)
        } else {
            None
        }
    }

    pub fn finish(&mut self) -> u8 {
        self.last = 100;
        100
    }
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

/// POST `file` (as field `file`) plus text `fields` to `url`, reporting
/// progress through `on_progress`. Resolves with the decoded JSON response.
pub async fn upload_file(
    url: &str,
    file: &File,
    fields: &[(&str, String)],
    on_progress: impl Fn(u8) + 'static,
) -> Result<Value, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(js_error)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(js_error)?;
    }

    let xhr = XmlHttpRequest::new().map_err(js_error)?;
    xhr.open_with_async("POST", url, true).map_err(js_error)?;
    xhr.set_with_credentials(true);

    let tracker = Rc::new(RefCell::new(ProgressTracker::new()));
    let on_progress = Rc::new(on_progress);

    let progress_cb = {
        let tracker = tracker.clone();
        let on_progress = on_progress.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |ev: ProgressEvent| {
            if !ev.length_computable() {
                return;
            }
            let reported = tracker.borrow_mut().record(ev.loaded(), ev.total());
            if let Some(pct) = reported {
                on_progress(pct);
            }
        })
    };
    xhr.upload()
        .map_err(js_error)?
        .set_onprogress(Some(progress_cb.as_ref().unchecked_ref()));

    let done = Promise::new(&mut |resolve: Function, reject: Function| {
        xhr.set_onload(Some(&resolve));
        xhr.set_onerror(Some(&reject));
        xhr.set_onabort(Some(&reject));
    });

    xhr.send_with_opt_form_data(Some(&form)).map_err(js_error)?;
    let outcome = JsFuture::from(done).await;
    drop(progress_cb);
    outcome.map_err(|_| ApiError::Network("upload interrupted".to_string()))?;

    let status = xhr.status().map_err(js_error)?;
    let body = xhr.response_text().map_err(js_error)?.unwrap_or_default();
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, &body));
    }

    let pct = tracker.borrow_mut().finish();
    on_progress(pct);

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotonic_and_ends_at_100() {
        let mut tracker = ProgressTracker::new();
        let events = [(0.0, 1000.0), (250.0, 1000.0), (200.0, 1000.0), (600.0, 1000.0), (600.0, 1000.0), (1000.0, 1000.0)];
        let mut reported: Vec<u8> = events
            .iter()
            .filter_map(|(loaded, total)| tracker.record(*loaded, *total))
            .collect();
        reported.push(tracker.finish());

        assert!(reported.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(reported.last(), Some(&100));
        assert_eq!(reported, vec![25, 60, 99, 100]);
    }

    #[test]
    fn test_unknown_total_is_ignored() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.record(10.0, 0.0), None);
        assert_eq!(tracker.record(10.0, 100.0), Some(10));
    }
}
