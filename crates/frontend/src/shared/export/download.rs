use crate::shared::error::ExportError;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offers `bytes` as a file download through a temporary anchor
pub fn download_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), ExportError> {
    let blob = create_blob(bytes, mime).map_err(ExportError::Delivery)?;
    download_blob(&blob, filename).map_err(ExportError::Delivery)
}

/// Opens the browser's print dialog for the current page
pub fn print_page() -> Result<(), ExportError> {
    let window = web_sys::window().ok_or(ExportError::Delivery("No window object".into()))?;
    window
        .print()
        .map_err(|e| ExportError::Delivery(format!("Failed to print: {:?}", e)))
}

fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
