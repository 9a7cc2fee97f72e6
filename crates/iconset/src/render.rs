use std::path::Path;

use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};

use crate::manifest::ManifestEntry;
use crate::plan::{SizeSpec, SIZE_PLAN};

/// Outcome of rendering the size plan against one prepared source.
#[derive(Debug, Clone, Default)]
pub struct RenderReport {
    /// Successful entries in size-table order.
    pub written: Vec<ManifestEntry>,
    pub failed: Vec<RenderFailure>,
}

#[derive(Debug, Clone)]
pub struct RenderFailure {
    pub filename: String,
    pub reason: String,
}

/// Render every planned size into `out_dir`.
///
/// A failure on one size is recorded and the remaining sizes still run.
pub fn render_sizes(base: &RgbaImage, out_dir: &Path, prefix: &str) -> RenderReport {
    let mut report = RenderReport::default();

    for spec in &SIZE_PLAN {
        let filename = spec.filename(prefix);
        match write_size(base, spec, &out_dir.join(&filename)) {
            Ok(()) => report.written.push(ManifestEntry::new(filename, *spec)),
            Err(err) => report.failed.push(RenderFailure {
                filename,
                reason: err.to_string(),
            }),
        }
    }

    report
}

fn write_size(base: &RgbaImage, spec: &SizeSpec, path: &Path) -> image::ImageResult<()> {
    if base.dimensions() == (spec.pixels, spec.pixels) {
        // The full-size entry is written from the base unresized.
        base.save_with_format(path, ImageFormat::Png)
    } else {
        image::imageops::resize(base, spec.pixels, spec.pixels, FilterType::Lanczos3)
            .save_with_format(path, ImageFormat::Png)
    }
}
