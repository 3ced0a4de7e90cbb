use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::RangeInclusive;

/// Allowed range for [`GenerationSettings::title_length`].
pub const TITLE_LENGTH_RANGE: RangeInclusive<usize> = 10..=255;
/// Allowed range for [`GenerationSettings::description_length`].
pub const DESCRIPTION_LENGTH_RANGE: RangeInclusive<usize> = 50..=500;
/// Allowed range for [`GenerationSettings::keywords_count`].
pub const KEYWORDS_COUNT_RANGE: RangeInclusive<usize> = 1..=50;
/// Allowed range for [`GenerationSettings::prompt_character_length`].
pub const PROMPT_LENGTH_RANGE: RangeInclusive<usize> = 100..=1000;

/// The kind of asset being described.
///
/// Parsing is lenient: any unrecognized name becomes [`ImageType::None`], which
/// renders as the generic "image" (descriptions) or "photo" (prompts).
///
/// ```rust
/// use stock_meta::settings::ImageType;
///
/// assert_eq!(ImageType::from_name("Vector"), ImageType::Vector);
/// assert_eq!(ImageType::from_name("hologram"), ImageType::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageType {
    #[default]
    None,
    Photo,
    Vector,
    Illustration,
    Raster,
    Video,
    Mixed,
}

impl ImageType {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "photo" => Self::Photo,
            "vector" => Self::Vector,
            "illustration" => Self::Illustration,
            "raster" => Self::Raster,
            "video" => Self::Video,
            "mixed" => Self::Mixed,
            _ => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Photo => "photo",
            Self::Vector => "vector",
            Self::Illustration => "illustration",
            Self::Raster => "raster",
            Self::Video => "video",
            Self::Mixed => "mixed",
        }
    }

    /// Noun used in generated descriptions.
    pub fn description_noun(&self) -> &'static str {
        match self {
            Self::None => "image",
            Self::Raster => "raster image",
            Self::Mixed => "mixed media",
            other => other.as_str(),
        }
    }

    /// Noun used in generated prompts.
    pub fn prompt_noun(&self) -> &'static str {
        match self {
            Self::None => "photo",
            other => other.as_str(),
        }
    }
}

/// Target microstock marketplace.
///
/// Selects the CSV column schema and the platform named in descriptions.
/// Unrecognized names fall back to [`Platform::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    All,
    Adobe,
    #[default]
    Shutterstock,
    Freepik,
    Vecteezy,
    Pond5,
}

impl Platform {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "adobe" => Self::Adobe,
            "shutterstock" => Self::Shutterstock,
            "freepik" => Self::Freepik,
            "vecteezy" => Self::Vecteezy,
            "pond5" => Self::Pond5,
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Adobe => "adobe",
            Self::Shutterstock => "shutterstock",
            Self::Freepik => "freepik",
            Self::Vecteezy => "vecteezy",
            Self::Pond5 => "pond5",
        }
    }

    /// Human-readable marketplace name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::All => "all microstock platforms",
            Self::Adobe => "Adobe Stock",
            Self::Shutterstock => "Shutterstock",
            Self::Freepik => "Freepik",
            Self::Vecteezy => "Vecteezy",
            Self::Pond5 => "Pond5",
        }
    }
}

impl Serialize for ImageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ImageType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Settings for one generation run, shared unchanged across a batch.
///
/// Serialized with camelCase keys (`titleLength`, `negativeKeywordsText`, ...).
/// Missing keys take their [`Default`] values.
///
/// # Example
///
/// ```rust
/// use stock_meta::settings::{GenerationSettings, ImageType};
///
/// let settings = GenerationSettings {
///     title_length: 60,
///     image_type: ImageType::Photo,
///     negative_keywords_text: "beach; sand".into(),
///     ..Default::default()
/// };
/// assert_eq!(settings.keywords_count, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationSettings {
    /// Maximum title length in characters.
    pub title_length: usize,
    /// Maximum description length in characters.
    pub description_length: usize,
    /// Maximum number of keywords.
    pub keywords_count: usize,
    pub image_type: ImageType,
    pub prefix: bool,
    pub prefix_text: String,
    pub suffix: bool,
    pub suffix_text: String,
    /// Added to descriptions as an `Exclude:` clause.
    pub negative_title_text: String,
    /// Keywords to leave out, separated by `,` or `;`.
    pub negative_keywords_text: String,
    pub platform: Platform,

    pub prompt_image_type: ImageType,
    /// Maximum prompt length in characters.
    pub prompt_character_length: usize,
    pub prompt_prefix: bool,
    pub prompt_prefix_text: String,
    pub prompt_suffix: bool,
    pub prompt_suffix_text: String,
    pub negative_prompt_words: bool,
    pub negative_prompt_words_text: String,
    pub white_background: bool,
    pub camera_parameters: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            title_length: 70,
            description_length: 150,
            keywords_count: 30,
            image_type: ImageType::None,
            prefix: false,
            prefix_text: String::new(),
            suffix: false,
            suffix_text: String::new(),
            negative_title_text: String::new(),
            negative_keywords_text: String::new(),
            platform: Platform::Shutterstock,
            prompt_image_type: ImageType::None,
            prompt_character_length: 600,
            prompt_prefix: false,
            prompt_prefix_text: String::new(),
            prompt_suffix: false,
            prompt_suffix_text: String::new(),
            negative_prompt_words: false,
            negative_prompt_words_text: String::new(),
            white_background: false,
            camera_parameters: false,
        }
    }
}

impl GenerationSettings {
    /// Return a copy with every length limit clamped into its allowed range.
    pub fn clamped(&self) -> Self {
        Self {
            title_length: clamp(self.title_length, &TITLE_LENGTH_RANGE),
            description_length: clamp(self.description_length, &DESCRIPTION_LENGTH_RANGE),
            keywords_count: clamp(self.keywords_count, &KEYWORDS_COUNT_RANGE),
            prompt_character_length: clamp(self.prompt_character_length, &PROMPT_LENGTH_RANGE),
            ..self.clone()
        }
    }

    /// The parsed keyword exclusion list: split on `,`/`;`, trimmed, lower-cased.
    pub fn negative_keywords(&self) -> Vec<String> {
        self.negative_keywords_text
            .split([',', ';'])
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn clamp(value: usize, range: &RangeInclusive<usize>) -> usize {
    value.clamp(*range.start(), *range.end())
}
