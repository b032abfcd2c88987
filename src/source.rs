//! Image sources shown by the preview, the output region and the viewer.

use image::ImageReader;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where displayed image content comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A file picked locally by the user
    File(PathBuf),
    /// Bytes returned by the processing service
    Memory(Arc<[u8]>),
}

impl ImageSource {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::Memory(Arc::from(bytes))
    }

    /// Pixel dimensions, or `None` when the content cannot be decoded as an image.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            Self::File(path) => ImageReader::open(path)
                .ok()?
                .with_guessed_format()
                .ok()?
                .into_dimensions()
                .ok(),
            Self::Memory(bytes) => {
                if bytes.is_empty() {
                    return None;
                }
                ImageReader::new(Cursor::new(bytes.as_ref()))
                    .with_guessed_format()
                    .ok()?
                    .into_dimensions()
                    .ok()
            }
        }
    }

    pub fn is_displayable(&self) -> bool {
        self.dimensions().is_some()
    }

    /// Short label for logs
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Memory(bytes) => format!("<{} bytes in memory>", bytes.len()),
        }
    }
}

/// Locally rendered preview of the selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub source: ImageSource,
    pub width: u32,
    pub height: u32,
}

impl Preview {
    /// Build a preview for `path`, or `None` when it is not a readable image.
    pub fn load(path: &Path) -> Option<Self> {
        let source = ImageSource::File(path.to_path_buf());
        let (width, height) = source.dimensions()?;
        Some(Self {
            source,
            width,
            height,
        })
    }
}

/// MIME type a browser would attach to a picked file, from its extension
pub fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}
