use super::pipeline::{DocumentEncoder, PageFormat, RasterImage};
use crate::shared::error::ExportError;
use printpdf::image_crate::DynamicImage;
use printpdf::{Image, ImageTransform, Mm, PdfDocument};

/// Resolution the raster is declared at inside the document
const IMAGE_DPI: f32 = 300.0;
const MM_PER_INCH: f32 = 25.4;

/// Placement of an image on a page, all in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x_mm: f32,
    /// Bottom edge, PDF origin is bottom-left
    pub y_mm: f32,
    pub scale: f32,
}

/// Scales the image to the printable width and anchors it to the top margin
pub fn fit_to_width(width_px: u32, height_px: u32, page: PageFormat) -> Placement {
    let natural_w = width_px.max(1) as f32 / IMAGE_DPI * MM_PER_INCH;
    let natural_h = height_px as f32 / IMAGE_DPI * MM_PER_INCH;
    let scale = page.printable_width_mm() / natural_w;
    Placement {
        x_mm: page.margin_mm,
        y_mm: page.height_mm - page.margin_mm - natural_h * scale,
        scale,
    }
}

/// Single-page PDF holding one image
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfEncoder;

impl DocumentEncoder for PdfEncoder {
    fn encode(
        &self,
        image: &RasterImage,
        page: PageFormat,
        title: &str,
    ) -> Result<Vec<u8>, ExportError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(ExportError::Encode("empty capture".into()));
        }

        let (doc, page_index, layer_index) =
            PdfDocument::new(title, Mm(page.width_mm), Mm(page.height_mm), "Layer 1");
        let layer = doc.get_page(page_index).get_layer(layer_index);

        // The document has no alpha channel support worth relying on
        let rgb = DynamicImage::ImageRgb8(image.image.to_rgb8());
        let placement = fit_to_width(rgb.width(), rgb.height(), page);

        Image::from_dynamic_image(&rgb).add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(placement.x_mm)),
                translate_y: Some(Mm(placement.y_mm)),
                scale_x: Some(placement.scale),
                scale_y: Some(placement.scale),
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        );

        doc.save_to_bytes()
            .map_err(|e| ExportError::Encode(e.to_string()))
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn mime(&self) -> &'static str {
        "application/pdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_to_width_fills_printable_area() {
        let page = PageFormat::A4_PORTRAIT;
        let placement = fit_to_width(2400, 1200, page);
        let rendered_w = 2400.0 / IMAGE_DPI * MM_PER_INCH * placement.scale;
        let rendered_h = 1200.0 / IMAGE_DPI * MM_PER_INCH * placement.scale;
        assert!((rendered_w - 190.0).abs() < 0.01);
        assert!((rendered_h - 95.0).abs() < 0.01);
        assert_eq!(placement.x_mm, 10.0);
        assert!((placement.y_mm - (297.0 - 10.0 - 95.0)).abs() < 0.01);
    }

    #[test]
    fn test_empty_image_rejected() {
        let image = RasterImage::new(DynamicImage::new_rgb8(0, 0));
        let result = PdfEncoder.encode(&image, PageFormat::A4_PORTRAIT, "empty");
        assert!(matches!(result, Err(ExportError::Encode(_))));
    }
}
