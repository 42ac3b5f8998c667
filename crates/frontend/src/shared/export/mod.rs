//! Export of report data: CSV tables and single-page PDF snapshots
//!
//! The snapshot path is a two-stage pipeline (capture → encode) behind the
//! [`Rasterizer`] and [`DocumentEncoder`] traits; the browser engines live in
//! `raster` and `pdf`.

pub mod csv;
pub mod download;
pub mod pdf;
pub mod pipeline;
pub mod raster;

pub use csv::{export_to_csv, to_csv, CsvExportable};
pub use download::{download_bytes, print_page};
pub use pdf::PdfEncoder;
pub use pipeline::{
    export_filename, DocumentEncoder, ExportPipeline, ExportedDocument, PageFormat, RasterImage,
    Rasterizer, CAPTURE_SCALE,
};
pub use raster::Html2CanvasRasterizer;
