use std::path::Path;

use image::imageops::FilterType;
use image::RgbaImage;

use crate::plan::SOURCE_SIZE;
use crate::{IconsetError, Result};

/// Format of the source file, decided by extension before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Png,
    Jpeg,
}

/// Non-fatal findings surfaced during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationWarning {
    /// iOS icons are usually authored with a transparent background.
    NoAlphaChannel,
}

/// A decoded source image, read-only for the rest of the run.
#[derive(Debug)]
pub struct SourceImage {
    image: RgbaImage,
    pub width: u32,
    pub height: u32,
    pub format: SourceFormat,
    pub has_alpha: bool,
}

impl SourceImage {
    /// Decode the file at `path`, rejecting unsupported formats up front.
    pub fn open(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase());
        let format = match ext.as_deref() {
            Some("png") => SourceFormat::Png,
            Some("jpg") | Some("jpeg") => SourceFormat::Jpeg,
            other => return Err(IconsetError::UnsupportedFormat(other.unwrap_or("").into())),
        };

        let dyn_img = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(io) => IconsetError::Io(io),
            other => IconsetError::Decode(other.to_string()),
        })?;

        let has_alpha = dyn_img.color().has_alpha();
        let image = dyn_img.to_rgba8();
        let (width, height) = image.dimensions();

        Ok(Self {
            image,
            width,
            height,
            format,
            has_alpha,
        })
    }

    /// Enforce the square and size policy, collecting non-fatal warnings.
    ///
    /// Without `auto_scale` only an exact 1024x1024 source is accepted. With it,
    /// larger sources are accepted for downscaling; smaller ones are always
    /// rejected since upscaling produces blurry icons.
    pub fn validate(&self, auto_scale: bool) -> Result<Vec<ValidationWarning>> {
        if self.width != self.height {
            return Err(IconsetError::NotSquare {
                width: self.width,
                height: self.height,
            });
        }

        if !auto_scale && self.width != SOURCE_SIZE {
            return Err(IconsetError::SizeMismatch {
                actual: self.width,
                expected: SOURCE_SIZE,
            });
        }

        if self.width < SOURCE_SIZE {
            return Err(IconsetError::UpscaleRejected {
                actual: self.width,
                required: SOURCE_SIZE,
            });
        }

        let mut warnings = Vec::new();
        if !self.has_alpha {
            warnings.push(ValidationWarning::NoAlphaChannel);
        }
        Ok(warnings)
    }

    /// The validated source downscaled to 1024x1024 where needed.
    pub fn prepared(&self) -> RgbaImage {
        if self.width == SOURCE_SIZE {
            self.image.clone()
        } else {
            image::imageops::resize(&self.image, SOURCE_SIZE, SOURCE_SIZE, FilterType::Lanczos3)
        }
    }
}
