use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::plan::{Idiom, SizeSpec};
use crate::Result;

/// File name Xcode expects inside an .appiconset directory.
pub const MANIFEST_NAME: &str = "Contents.json";

/// One successfully written icon, as the manifest will list it.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    pub filename: String,
    pub idiom: Idiom,
    pub scale: &'static str,
    pub size: &'static str,
}

impl ManifestEntry {
    pub fn new(filename: String, spec: SizeSpec) -> Self {
        Self {
            filename,
            idiom: spec.idiom,
            scale: spec.scale,
            size: spec.size,
        }
    }
}

#[derive(Debug, Serialize)]
struct Contents<'a> {
    images: &'a [ManifestEntry],
    info: Info,
}

#[derive(Debug, Serialize)]
struct Info {
    author: &'static str,
    version: u32,
}

/// Write Contents.json listing exactly `entries`, returning its path.
pub fn write_manifest(out_dir: &Path, entries: &[ManifestEntry]) -> Result<PathBuf> {
    let contents = Contents {
        images: entries,
        info: Info {
            author: "xcode",
            version: 1,
        },
    };

    let payload = serde_json::to_string_pretty(&contents)?;
    let path = out_dir.join(MANIFEST_NAME);
    fs::write(&path, payload)?;
    Ok(path)
}
