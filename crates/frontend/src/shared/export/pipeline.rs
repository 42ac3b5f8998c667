use crate::shared::error::ExportError;
use async_trait::async_trait;
use printpdf::image_crate::DynamicImage;
use std::cell::Cell;

/// Supersampling applied when capturing so text stays legible in the document
pub const CAPTURE_SCALE: f64 = 2.0;

/// Pixels of a captured screen region
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub image: DynamicImage,
}

impl RasterImage {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Physical page the snapshot is placed on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFormat {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
}

impl PageFormat {
    pub const A4_PORTRAIT: PageFormat = PageFormat {
        width_mm: 210.0,
        height_mm: 297.0,
        margin_mm: 10.0,
    };

    pub fn printable_width_mm(&self) -> f32 {
        self.width_mm - 2.0 * self.margin_mm
    }
}

/// Stage 1: screen region → pixels
#[async_trait(?Send)]
pub trait Rasterizer {
    type Region: ?Sized;

    async fn capture(&self, region: &Self::Region, scale: f64) -> Result<RasterImage, ExportError>;
}

/// Stage 2: pixels → document bytes
pub trait DocumentEncoder {
    fn encode(
        &self,
        image: &RasterImage,
        page: PageFormat,
        title: &str,
    ) -> Result<Vec<u8>, ExportError>;

    fn extension(&self) -> &'static str;

    fn mime(&self) -> &'static str;
}

/// A finished export, ready to be offered for download
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// `<report-name>_<epoch-millis>.<ext>`
pub fn export_filename(report_name: &str, epoch_millis: i64, extension: &str) -> String {
    let name: String = report_name
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    let name = if name.is_empty() { "report".to_string() } else { name };
    format!("{}_{}.{}", name, epoch_millis, extension)
}

pub struct ExportPipeline<R, E> {
    rasterizer: R,
    encoder: E,
    page: PageFormat,
    busy: Cell<bool>,
}

/// Releases the busy flag on every exit path
struct BusyGuard<'a>(&'a Cell<bool>);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<R, E> ExportPipeline<R, E>
where
    R: Rasterizer,
    E: DocumentEncoder,
{
    pub fn new(rasterizer: R, encoder: E, page: PageFormat) -> Self {
        Self {
            rasterizer,
            encoder,
            page,
            busy: Cell::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Captures `region` and encodes it into a single-page document.
    ///
    /// An unmounted region fails with [`ExportError::NotFound`] before any
    /// capture. While one export runs, further calls fail with
    /// [`ExportError::Busy`]. No document is produced on failure.
    pub async fn export(
        &self,
        region: Option<&R::Region>,
        report_name: &str,
        epoch_millis: i64,
    ) -> Result<ExportedDocument, ExportError> {
        let region = region.ok_or(ExportError::NotFound)?;
        if self.busy.replace(true) {
            return Err(ExportError::Busy);
        }
        let _guard = BusyGuard(&self.busy);

        let image = self.rasterizer.capture(region, CAPTURE_SCALE).await?;
        log::debug!("captured {}x{} px for {}", image.width(), image.height(), report_name);

        let bytes = self.encoder.encode(&image, self.page, report_name)?;
        Ok(ExportedDocument {
            filename: export_filename(report_name, epoch_millis, self.encoder.extension()),
            mime: self.encoder.mime(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::pdf::PdfEncoder;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Returns a fixed buffer and records every capture
    #[derive(Default)]
    struct FakeRasterizer {
        captures: RefCell<Vec<f64>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl Rasterizer for FakeRasterizer {
        type Region = str;

        async fn capture(&self, _region: &str, scale: f64) -> Result<RasterImage, ExportError> {
            self.captures.borrow_mut().push(scale);
            if self.fail {
                return Err(ExportError::Capture("canvas tainted".into()));
            }
            Ok(RasterImage::new(DynamicImage::new_rgb8(40, 20)))
        }
    }

    struct FailingEncoder;

    impl DocumentEncoder for FailingEncoder {
        fn encode(&self, _: &RasterImage, _: PageFormat, _: &str) -> Result<Vec<u8>, ExportError> {
            Err(ExportError::Encode("out of memory".into()))
        }

        fn extension(&self) -> &'static str {
            "pdf"
        }

        fn mime(&self) -> &'static str {
            "application/pdf"
        }
    }

    fn pipeline(fail: bool) -> ExportPipeline<FakeRasterizer, PdfEncoder> {
        ExportPipeline::new(
            FakeRasterizer {
                fail,
                ..Default::default()
            },
            PdfEncoder,
            PageFormat::A4_PORTRAIT,
        )
    }

    #[test]
    fn test_unmounted_region_is_not_found_without_capture() {
        let p = pipeline(false);
        let result = block_on(p.export(None, "sales-report", 1));
        assert_eq!(result, Err(ExportError::NotFound));
        assert!(p.rasterizer.captures.borrow().is_empty());
    }

    #[test]
    fn test_export_produces_pdf() {
        let p = pipeline(false);
        let doc = block_on(p.export(Some("report-region"), "sales-report", 1700000000123)).unwrap();
        assert_eq!(doc.filename, "sales-report_1700000000123.pdf");
        assert_eq!(doc.mime, "application/pdf");
        assert!(doc.bytes.starts_with(b"%PDF"));
        assert_eq!(*p.rasterizer.captures.borrow(), vec![CAPTURE_SCALE]);
        assert!(!p.is_busy());
    }

    #[test]
    fn test_capture_failure_releases_busy_flag() {
        let p = pipeline(true);
        let result = block_on(p.export(Some("region"), "sales-report", 1));
        assert_eq!(result, Err(ExportError::Capture("canvas tainted".into())));
        assert!(!p.is_busy());
    }

    #[test]
    fn test_encode_failure_yields_no_document() {
        let p = ExportPipeline::new(
            FakeRasterizer::default(),
            FailingEncoder,
            PageFormat::A4_PORTRAIT,
        );
        let result = block_on(p.export(Some("region"), "sales-report", 1));
        assert!(matches!(result, Err(ExportError::Encode(_))));
        assert!(!p.is_busy());
    }

    #[test]
    fn test_busy_pipeline_rejects_second_export() {
        let p = pipeline(false);
        p.busy.set(true);
        let result = block_on(p.export(Some("region"), "sales-report", 1));
        assert_eq!(result, Err(ExportError::Busy));
        assert!(p.rasterizer.captures.borrow().is_empty());
    }

    #[test]
    fn test_filename_pattern() {
        assert_eq!(export_filename("Sales Report", 42, "pdf"), "Sales-Report_42.pdf");
        assert_eq!(export_filename("  ", 7, "csv"), "report_7.csv");
    }
}
