//! Getting bytes out of the app: browser downloads on web, files under the
//! project data dir on desktop, and the clipboard on both.

pub mod csv;
pub mod report;

use std::future::Future;

use dioxus::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

#[cfg(target_arch = "wasm32")]
use crate::core::platform;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("document unavailable")]
    DocumentUnavailable,
    #[error("{0}")]
    Browser(&'static str),
    #[error("unable to determine export directory")]
    NoExportDir,
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum ExportStatus {
    #[default]
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

impl ExportStatus {
    /// CSS class and one-line message, `None` while idle.
    pub fn feedback(&self) -> Option<(&'static str, String)> {
        match self {
            Self::Idle => None,
            Self::Working(label) => Some(("status-line", format!("{label}…"))),
            Self::Done(message) => Some(("status-line status-line--success", format!("✅ {message}"))),
            Self::Error(err) => Some(("status-line status-line--error", format!("⚠️ {err}"))),
        }
    }
}

/// Where a download ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Browser,
    Saved(String),
}

impl Delivery {
    pub fn describe(&self, what: &str) -> String {
        match self {
            Self::Browser => format!("{what} download started"),
            Self::Saved(path) => format!("{what} saved to {path}"),
        }
    }
}

/// Drive an export job against a status/busy pair. A second click while a
/// job is running is ignored.
pub fn run_export<F>(
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
    label: &'static str,
    job: F,
) where
    F: Future<Output = Result<String, ExportError>> + 'static,
{
    if *busy.peek() {
        return;
    }
    busy.set(true);
    status.set(ExportStatus::Working(label));

    #[cfg(target_arch = "wasm32")]
    {
        platform::spawn_future(async move {
            let outcome = job.await;
            finish(status, outcome);
            busy.set(false);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let outcome = futures::executor::block_on(job);
        finish(status, outcome);
        busy.set(false);
    }
}

fn finish(mut status: Signal<ExportStatus>, outcome: Result<String, ExportError>) {
    match outcome {
        Ok(message) => {
            info!(%message, "export finished");
            status.set(ExportStatus::Done(message));
        }
        Err(err) => {
            warn!(error = %err, "export failed");
            status.set(ExportStatus::Error(err.to_string()));
        }
    }
}

/// `YYYY-MM-DD` of the current UTC day, for filenames.
pub fn date_stamp() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "export".into())
}

pub async fn copy_to_clipboard(payload: String) -> Result<(), ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ExportError::DocumentUnavailable)?;
        let body = document.body().ok_or(ExportError::Browser("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| ExportError::Browser("unable to create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| ExportError::Browser("textarea cast failed"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document
            .dyn_ref::<web_sys::HtmlDocument>()
            .and_then(|html| html.exec_command("copy").ok())
            .unwrap_or(false);
        textarea.remove();
        if !copied {
            return Err(ExportError::Clipboard("copy blocked".into()));
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|err| ExportError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| ExportError::Clipboard(err.to_string()))
    }
}

/// Offer `bytes` as a file. The browser path releases its object URL right
/// after the synthetic click.
pub async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Delivery, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| ExportError::Browser("failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| ExportError::Browser("unable to create download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ExportError::DocumentUnavailable)?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| ExportError::Browser("unable to create anchor"))?
            .dyn_into()
            .map_err(|_| ExportError::Browser("anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        let attached = document
            .body()
            .map(|body| body.append_child(&anchor).is_ok())
            .unwrap_or(false);
        if attached {
            anchor.click();
            anchor.remove();
        }
        Url::revoke_object_url(&url).ok();

        if attached {
            Ok(Delivery::Browser)
        } else {
            Err(ExportError::Browser("missing body"))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir)?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path)?;
        file.write_all(&bytes)?;
        Ok(Delivery::Saved(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, ExportError> {
    let dirs = directories::ProjectDirs::from("com", "CarbonTrack", "CarbonTrack")
        .ok_or(ExportError::NoExportDir)?;
    Ok(dirs.data_dir().join("exports"))
}

/// CSV download shared by every chart that offers one.
pub async fn export_csv(filename: String, csv: String) -> Result<String, ExportError> {
    let delivery = download_bytes(&filename, "text/csv", csv.into_bytes()).await?;
    Ok(delivery.describe(&filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_no_feedback() {
        assert_eq!(ExportStatus::Idle.feedback(), None);
        let (class, message) = ExportStatus::Error("nope".into()).feedback().unwrap();
        assert!(class.ends_with("--error"));
        assert!(message.contains("nope"));
    }

    #[test]
    fn delivery_messages() {
        assert_eq!(
            Delivery::Browser.describe("emissions-data.csv"),
            "emissions-data.csv download started"
        );
        assert_eq!(
            Delivery::Saved("/tmp/x.csv".into()).describe("CSV"),
            "CSV saved to /tmp/x.csv"
        );
    }

    #[test]
    fn date_stamp_is_iso_day() {
        let stamp = date_stamp();
        assert_eq!(stamp.len(), 10);
        assert_eq!(stamp.as_bytes()[4], b'-');
        assert_eq!(stamp.as_bytes()[7], b'-');
    }
}
