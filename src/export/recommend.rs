use serde::Serialize;
use std::path::Path;

/// Broad class of a media file, determined by its extension.
///
/// # Example
///
/// ```rust
/// use stock_meta::export::MediaKind;
/// use std::path::Path;
///
/// assert_eq!(MediaKind::from_path(Path::new("logo.EPS")), Some(MediaKind::Vector));
/// assert_eq!(MediaKind::from_path(Path::new("notes.txt")), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Pixel images (JPEG, PNG, TIFF, ...)
    Raster,
    /// Scalable artwork (AI, EPS, SVG, PDF)
    Vector,
    /// Stock footage (MP4, MOV, ...)
    Video,
}

impl MediaKind {
    /// Classify a path by its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "bmp" | "tif" | "tiff" => Some(Self::Raster),
            "ai" | "eps" | "svg" | "pdf" => Some(Self::Vector),
            "mp4" | "mov" | "avi" | "mkv" | "webm" | "m4v" => Some(Self::Video),
            _ => None,
        }
    }
}

/// Which export best suits a batch, judged from its file extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendedFormat {
    /// Only vector files (`.ai`, `.eps`, `.svg`, `.pdf`).
    Vector,
    /// Only raster images (`.jpg`, `.png`, ...).
    Image,
    /// Both kinds, neither kind (e.g. video), or no files at all.
    Mixed,
}

impl RecommendedFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vector => "vector",
            Self::Image => "image",
            Self::Mixed => "mixed",
        }
    }

    /// Stem of the suggested export file name.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Vector => "vector-metadata",
            Self::Image => "image-metadata",
            Self::Mixed => "stock-metadata",
        }
    }
}

/// `true` for `.ai`, `.eps`, `.svg`, and `.pdf` files (case-insensitive).
pub fn is_vector_file(filename: &str) -> bool {
    MediaKind::from_path(Path::new(filename)) == Some(MediaKind::Vector)
}

/// `true` for common raster image extensions (case-insensitive).
pub fn is_image_file(filename: &str) -> bool {
    MediaKind::from_path(Path::new(filename)) == Some(MediaKind::Raster)
}

/// Recommend an export format for a set of filenames.
///
/// # Example
///
/// ```rust
/// use stock_meta::export::{recommended_format, RecommendedFormat};
///
/// assert_eq!(recommended_format(["logo.svg", "icon.eps"]), RecommendedFormat::Vector);
/// assert_eq!(recommended_format(["photo.jpg", "pic.png"]), RecommendedFormat::Image);
/// assert_eq!(recommended_format(["clip.mp4"]), RecommendedFormat::Mixed);
/// ```
pub fn recommended_format<I, S>(filenames: I) -> RecommendedFormat
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut vectors = 0usize;
    let mut images = 0usize;
    for name in filenames {
        match MediaKind::from_path(Path::new(name.as_ref())) {
            Some(MediaKind::Vector) => vectors += 1,
            Some(MediaKind::Raster) => images += 1,
            Some(MediaKind::Video) | None => {}
        }
    }

    match (vectors, images) {
        (v, 0) if v > 0 => RecommendedFormat::Vector,
        (0, i) if i > 0 => RecommendedFormat::Image,
        _ => RecommendedFormat::Mixed,
    }
}
