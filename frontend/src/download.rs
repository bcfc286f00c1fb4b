//! Client-side save of a generated artifact.
//!
//! Fetches the storage URL as bytes, wraps them in a temporary object URL,
//! and clicks a synthetic anchor to hand the file to the browser. The
//! object URL is revoked whether or not the save step succeeds.

use gloo_net::http::Request;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, Url};

use common::format::filename_from_url;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("download request failed: {0}")]
    Fetch(String),
    #[error("download failed (HTTP {0})")]
    Status(u16),
    #[error("could not save the downloaded file")]
    Save,
}

pub async fn fetch_and_save(url: &str) -> Result<(), DownloadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| DownloadError::Fetch(err.to_string()))?;
    if !response.ok() {
        return Err(DownloadError::Status(response.status()));
    }
    let bytes = response
        .binary()
        .await
        .map_err(|err| DownloadError::Fetch(err.to_string()))?;

    let blob: web_sys::Blob = gloo_file::Blob::new(bytes.as_slice()).into();
    let object_url =
        Url::create_object_url_with_blob(&blob).map_err(|_| DownloadError::Save)?;
    let saved = trigger_save(&object_url, &filename_from_url(url));
    // Release the object URL on both outcomes.
    Url::revoke_object_url(&object_url).ok();
    saved
}

fn trigger_save(object_url: &str, filename: &str) -> Result<(), DownloadError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DownloadError::Save)?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| DownloadError::Save)?
        .dyn_into()
        .map_err(|_| DownloadError::Save)?;
    anchor.set_href(object_url);
    anchor.set_download(filename);
    let body = document.body().ok_or(DownloadError::Save)?;
    body.append_child(&anchor).map_err(|_| DownloadError::Save)?;
    anchor.click();
    anchor.remove();
    Ok(())
}
