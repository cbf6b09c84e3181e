//! File export via Blob and a synthetic anchor click.

use js_sys::Array;
use limn_editor_core::{EditorError, ExportDocument};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::js_err;

/// Download the exported document as an HTML file.
pub fn download(export: &ExportDocument) -> Result<(), EditorError> {
    let parts = Array::new();
    parts.push(&JsValue::from_str(&export.content));
    let options = BlobPropertyBag::new();
    options.set_type("text/html");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;
    let document = gloo_utils::document();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(export.filename);

    let body = document
        .body()
        .ok_or_else(|| EditorError::operation("document has no body"))?;
    body.append_child(anchor.as_ref()).map_err(js_err)?;
    anchor.click();
    body.remove_child(anchor.as_ref()).map_err(js_err)?;
    Url::revoke_object_url(&url).map_err(js_err)?;

    tracing::info!(
        filename = export.filename,
        bytes = export.content.len(),
        "document downloaded"
    );
    Ok(())
}
