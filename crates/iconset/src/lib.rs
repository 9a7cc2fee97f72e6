pub mod manifest;
pub mod plan;
pub mod render;
pub mod source;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use manifest::{ManifestEntry, MANIFEST_NAME};
pub use plan::{Idiom, SizeSpec, SIZE_PLAN, SOURCE_SIZE};
pub use render::{RenderFailure, RenderReport};
pub use source::{SourceFormat, SourceImage, ValidationWarning};

#[derive(Debug, Error)]
pub enum IconsetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Unsupported format \"{0}\": expected png, jpg, or jpeg")]
    UnsupportedFormat(String),

    #[error("Image must be square, got {width}x{height}")]
    NotSquare { width: u32, height: u32 },

    #[error("Image is {actual}x{actual}, expected {expected}x{expected}; pass --auto-scale to downscale larger sources")]
    SizeMismatch { actual: u32, expected: u32 },

    #[error("Image is {actual}x{actual}, smaller than the required {required}x{required}; upscaling would blur the icons")]
    UpscaleRejected { actual: u32, required: u32 },

    #[error("Manifest serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IconsetError>;

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Accept sources larger than 1024x1024 and downscale them first.
    pub auto_scale: bool,
    /// Prefix for output filenames, producing `{prefix}_{pixels}.png`.
    pub prefix: String,
}

/// Everything a caller needs to report on a finished run.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub warnings: Vec<ValidationWarning>,
    pub written: Vec<ManifestEntry>,
    pub failed: Vec<RenderFailure>,
    pub manifest_path: PathBuf,
}

impl GenerateReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run the whole pipeline: validate, render every planned size, write the manifest.
///
/// Fatal validation problems abort before anything is written. Per-size render
/// failures do not abort; they end up in the report and the manifest lists only
/// the files that were actually produced.
pub fn generate(
    source: &Path,
    output_dir: &Path,
    options: &GenerateOptions,
) -> Result<GenerateReport> {
    let src = SourceImage::open(source)?;
    let warnings = src.validate(options.auto_scale)?;

    fs::create_dir_all(output_dir)?;

    let base = src.prepared();
    let report = render::render_sizes(&base, output_dir, &options.prefix);
    let manifest_path = manifest::write_manifest(output_dir, &report.written)?;

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        warnings,
        written: report.written,
        failed: report.failed,
        manifest_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_source(path: &Path, edge: u32) {
        RgbaImage::from_pixel(edge, edge, Rgba([30, 90, 210, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn valid_source_yields_all_files_and_the_manifest() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("icon.png");
        write_source(&src, 1024);
        let out = dir.path().join("AppIcon.appiconset");

        let report = generate(&src, &out, &GenerateOptions::default()).unwrap();
        assert!(report.all_succeeded());
        assert!(report.warnings.is_empty());
        assert_eq!(report.written.len(), SIZE_PLAN.len());

        for entry in &report.written {
            assert!(out.join(&entry.filename).exists());
        }
        assert!(report.manifest_path.exists());
    }

    #[test]
    fn oversized_source_requires_auto_scale() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("icon.png");
        write_source(&src, 2048);
        let out = dir.path().join("out");

        let err = generate(&src, &out, &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, IconsetError::SizeMismatch { actual: 2048, .. }));
        // Nothing was written on the fatal path.
        assert!(!out.exists());

        let options = GenerateOptions {
            auto_scale: true,
            ..Default::default()
        };
        let report = generate(&src, &out, &options).unwrap();
        assert!(report.all_succeeded());
    }

    #[test]
    fn undersized_source_is_always_fatal() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("icon.png");
        write_source(&src, 512);
        let out = dir.path().join("out");

        let options = GenerateOptions {
            auto_scale: true,
            ..Default::default()
        };
        let err = generate(&src, &out, &options).unwrap_err();
        assert!(matches!(
            err,
            IconsetError::UpscaleRejected { actual: 512, .. }
        ));
    }

    #[test]
    fn manifest_matches_written_files_under_partial_failure() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("icon.png");
        write_source(&src, 1024);
        let out = dir.path().join("out");
        std::fs::create_dir_all(out.join("_20.png")).unwrap();

        let report = generate(&src, &out, &GenerateOptions::default()).unwrap();
        assert!(!report.all_succeeded());
        assert_eq!(report.written.len(), SIZE_PLAN.len() - 1);

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&report.manifest_path).unwrap())
                .unwrap();
        assert_eq!(
            parsed["images"].as_array().unwrap().len(),
            report.written.len()
        );
    }

    #[test]
    fn reruns_are_byte_identical() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("icon.png");
        write_source(&src, 1024);

        let out_a = dir.path().join("a");
        let out_b = dir.path().join("b");
        let options = GenerateOptions::default();
        generate(&src, &out_a, &options).unwrap();
        generate(&src, &out_b, &options).unwrap();

        for name in ["_20.png", "_180.png", "_1024.png", MANIFEST_NAME] {
            let a = std::fs::read(out_a.join(name)).unwrap();
            let b = std::fs::read(out_b.join(name)).unwrap();
            assert_eq!(a, b, "output {name} differs between runs");
        }
    }
}
