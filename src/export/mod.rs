//! Serializing metadata records for microstock upload.
//!
//! Two formats are supported:
//!
//! | Format | Function | Content type |
//! |--------|----------|--------------|
//! | CSV, one column schema per platform | [`export_delimited`] | `text/csv` |
//! | JSON array of records | [`export_structured`] | `application/json` |
//!
//! [`recommended_format`] picks a sensible default for a batch from its file
//! extensions, and [`export_records`] bundles the rendered body with a
//! suggested file name.

mod delimited;
mod recommend;
mod structured;

pub use delimited::{columns, export_delimited};
pub use recommend::{
    MediaKind, RecommendedFormat, is_image_file, is_vector_file, recommended_format,
};
pub use structured::{export_structured, parse_structured};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::generate::MetadataRecord;
use crate::settings::{ImageType, Platform};

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    /// Platform-specific CSV.
    Csv,
    /// JSON array of records.
    Json,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// The format a recommendation points to, if it has a preference.
    pub fn preferred_for(recommended: RecommendedFormat) -> Option<Self> {
        match recommended {
            RecommendedFormat::Vector => Some(Self::Csv),
            RecommendedFormat::Image => Some(Self::Json),
            RecommendedFormat::Mixed => None,
        }
    }

    /// Choose the format for an export.
    ///
    /// An explicit choice wins, then the batch recommendation, then a hint
    /// from the configured image type. CSV is the final fallback since every
    /// marketplace accepts it.
    ///
    /// ```rust
    /// use stock_meta::export::{ExportFormat, RecommendedFormat};
    /// use stock_meta::settings::ImageType;
    ///
    /// let f = ExportFormat::resolve(None, RecommendedFormat::Mixed, ImageType::Photo);
    /// assert_eq!(f, ExportFormat::Json);
    /// ```
    pub fn resolve(
        explicit: Option<Self>,
        recommended: RecommendedFormat,
        image_type: ImageType,
    ) -> Self {
        explicit
            .or_else(|| Self::preferred_for(recommended))
            .or(match image_type {
                ImageType::Vector | ImageType::Illustration => Some(Self::Csv),
                ImageType::Photo | ImageType::Raster => Some(Self::Json),
                _ => None,
            })
            .unwrap_or(Self::Csv)
    }
}

/// A rendered export, ready to be written to disk or sent as a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub format: ExportFormat,
    /// Suggested file name, e.g. `vector-metadata.csv`.
    pub file_name: String,
    pub body: String,
}

impl Export {
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }
}

/// Render `records` in `format`.
///
/// `platform` only affects CSV output. The suggested file name follows the
/// batch's [`RecommendedFormat`].
///
/// # Example
///
/// ```rust
/// use stock_meta::export::{export_records, ExportFormat};
/// use stock_meta::generate::generate_record;
/// use stock_meta::settings::{GenerationSettings, Platform};
///
/// # fn main() -> anyhow::Result<()> {
/// let settings = GenerationSettings::default();
/// let records = vec![generate_record("1", "logo.svg", &settings, false)];
///
/// let export = export_records(&records, ExportFormat::Csv, Platform::Adobe)?;
/// assert_eq!(export.file_name, "vector-metadata.csv");
/// assert_eq!(export.content_type(), "text/csv");
/// # Ok(())
/// # }
/// ```
pub fn export_records(
    records: &[MetadataRecord],
    format: ExportFormat,
    platform: Platform,
) -> Result<Export> {
    let recommended = recommended_format(records.iter().map(|r| r.filename.as_str()));
    let body = match format {
        ExportFormat::Csv => export_delimited(records, platform),
        ExportFormat::Json => export_structured(records)?,
    };

    log::debug!(
        "Exported {} record(s) as {} ({} bytes)",
        records.len(),
        format.extension(),
        body.len()
    );

    Ok(Export {
        format,
        file_name: format!("{}.{}", recommended.file_stem(), format.extension()),
        body,
    })
}
