//! Deterministic metadata and prompt generation from filenames.
//!
//! - [`generate_metadata`] - title, description, and keywords
//! - [`generate_prompt`] - an AI-image-generation prompt
//! - [`generate_record`] - both, packed into a [`MetadataRecord`]
//!
//! Every function here is pure: the same filename and settings always produce
//! the same output, so a batch can be generated in any order or in parallel.

mod metadata;
mod prompt;

pub use metadata::{GENERIC_KEYWORDS, MAX_TITLE_WORDS, generate_metadata};
pub use prompt::generate_prompt;

use serde::{Deserialize, Serialize};

use crate::settings::GenerationSettings;

/// Title, description, and keywords derived from one filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMetadata {
    pub title: String,
    pub description: String,
    /// Ordered by relevance, no duplicates.
    pub keywords: Vec<String>,
}

/// Metadata for one file, ready for export.
///
/// Records may be edited by the user after generation. The generator never
/// mutates an existing record; [`MetadataRecord::regenerate`] returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub id: String,
    pub filename: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl MetadataRecord {
    /// Build a fresh record for the same file with new settings.
    ///
    /// The id and filename carry over so the result can replace `self` in a
    /// collection.
    pub fn regenerate(&self, settings: &GenerationSettings, include_prompt: bool) -> Self {
        generate_record(self.id.clone(), &self.filename, settings, include_prompt)
    }
}

/// Generate a complete record for `filename`.
///
/// ```rust
/// use stock_meta::generate::generate_record;
/// use stock_meta::settings::GenerationSettings;
///
/// let record = generate_record("1", "red-apple.jpg", &GenerationSettings::default(), true);
/// assert_eq!(record.title, "Red Apple");
/// assert!(record.prompt.unwrap().starts_with("Generate a photo of red apple"));
/// ```
pub fn generate_record(
    id: impl Into<String>,
    filename: &str,
    settings: &GenerationSettings,
    include_prompt: bool,
) -> MetadataRecord {
    let meta = generate_metadata(filename, settings);
    let prompt = include_prompt.then(|| generate_prompt(filename, settings));

    MetadataRecord {
        id: id.into(),
        filename: filename.to_string(),
        title: meta.title,
        description: meta.description,
        keywords: meta.keywords,
        prompt,
    }
}
