use super::pipeline::{RasterImage, Rasterizer};
use crate::shared::error::ExportError;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use js_sys::{Function, Promise, Reflect};
use printpdf::image_crate;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlElement};

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CaptureOptions {
    scale: f64,
    use_cors: bool,
    background_color: &'static str,
    logging: bool,
}

/// Captures DOM subtrees with the page's `window.html2canvas`
#[derive(Debug, Clone, Copy, Default)]
pub struct Html2CanvasRasterizer;

fn js_err(context: &str, e: JsValue) -> ExportError {
    ExportError::Capture(format!("{}: {:?}", context, e))
}

#[async_trait(?Send)]
impl Rasterizer for Html2CanvasRasterizer {
    type Region = HtmlElement;

    async fn capture(&self, region: &HtmlElement, scale: f64) -> Result<RasterImage, ExportError> {
        let window =
            web_sys::window().ok_or_else(|| ExportError::Capture("No window object".into()))?;

        let capture_fn = Reflect::get(&window, &JsValue::from_str("html2canvas"))
            .map_err(|e| js_err("html2canvas lookup", e))?;
        if !capture_fn.is_function() {
            return Err(ExportError::Capture("html2canvas is not loaded".into()));
        }
        let capture_fn: Function = capture_fn
            .dyn_into()
            .map_err(|e| js_err("html2canvas cast", e))?;

        let options = CaptureOptions {
            scale,
            use_cors: true,
            background_color: "#ffffff",
            logging: false,
        }
        .serialize(&Serializer::json_compatible())
        .map_err(|e| ExportError::Capture(e.to_string()))?;

        let promise: Promise = capture_fn
            .call2(&window, region, &options)
            .map_err(|e| js_err("html2canvas call", e))?
            .dyn_into()
            .map_err(|e| js_err("html2canvas result", e))?;

        let canvas: HtmlCanvasElement = JsFuture::from(promise)
            .await
            .map_err(|e| js_err("html2canvas render", e))?
            .dyn_into()
            .map_err(|e| js_err("canvas cast", e))?;

        let data_url = canvas
            .to_data_url_with_type("image/png")
            .map_err(|e| js_err("canvas encode", e))?;

        decode_png_data_url(&data_url)
    }
}

/// Turns a `data:image/png;base64,...` URL into pixels
pub fn decode_png_data_url(data_url: &str) -> Result<RasterImage, ExportError> {
    let payload = data_url
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .ok_or_else(|| ExportError::Capture("canvas did not return a PNG data URL".into()))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ExportError::Capture(e.to_string()))?;
    let image = image_crate::load_from_memory_with_format(&bytes, image_crate::ImageFormat::Png)
        .map_err(|e| ExportError::Capture(e.to_string()))?;
    Ok(RasterImage::new(image))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_png_url() {
        let result = decode_png_data_url("data:image/jpeg;base64,AAAA");
        assert!(matches!(result, Err(ExportError::Capture(_))));
    }

    #[test]
    fn test_rejects_bad_base64() {
        let result = decode_png_data_url("data:image/png;base64,@@@");
        assert!(matches!(result, Err(ExportError::Capture(_))));
    }

    #[test]
    fn test_rejects_truncated_png() {
        // Valid base64 of the PNG signature alone
        let result = decode_png_data_url("data:image/png;base64,iVBORw0KGgo=");
        assert!(matches!(result, Err(ExportError::Capture(_))));
    }
}
