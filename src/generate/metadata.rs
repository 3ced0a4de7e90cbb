use std::collections::HashSet;

use crate::settings::GenerationSettings;
use crate::text::{capitalize_words, strip_extension, tokenize, truncate};

use super::GeneratedMetadata;

/// Filename words beyond this count are left out of the title.
pub const MAX_TITLE_WORDS: usize = 8;

/// Keywords appended after the filename words, in relevance order.
pub const GENERIC_KEYWORDS: &[&str] = &[
    "stock",
    "photo",
    "image",
    "digital",
    "creative",
    "high quality",
    "professional",
];

const CAMERA_SENTENCE: &str =
    "Shot with professional camera settings: shallow depth of field, accurate exposure and natural color.";
const WHITE_BACKGROUND_SENTENCE: &str =
    "Clean white background for easy compositing and product display.";
const USAGE_SENTENCE: &str = "This image is ideal for use in marketing, editorial, and stock photography collections. \
     Keywords and metadata have been crafted to maximize discoverability on microstock platforms.";

/// Derive a title, description, and keyword list from a filename.
///
/// Never fails: a filename with no usable characters still yields a generic
/// description and the generic keyword set.
///
/// Prefix and suffix text is trimmed before joining; an enabled but blank
/// prefix or suffix adds nothing.
///
/// # Example
///
/// ```rust
/// use stock_meta::generate::generate_metadata;
/// use stock_meta::settings::GenerationSettings;
///
/// let settings = GenerationSettings {
///     keywords_count: 5,
///     negative_keywords_text: "beach".into(),
///     ..Default::default()
/// };
/// let meta = generate_metadata("sunset-beach_01.jpg", &settings);
/// assert_eq!(meta.title, "Sunset Beach 01");
/// assert_eq!(meta.keywords, ["sunset", "01", "stock", "photo", "image"]);
/// ```
pub fn generate_metadata(filename: &str, settings: &GenerationSettings) -> GeneratedMetadata {
    let words = tokenize(strip_extension(filename));
    let title_base = capitalize_words(&words[..words.len().min(MAX_TITLE_WORDS)]);

    GeneratedMetadata {
        title: build_title(&title_base, settings),
        description: build_description(&title_base, settings),
        keywords: build_keywords(&words, settings),
    }
}

fn build_title(base: &str, settings: &GenerationSettings) -> String {
    let prefix = settings.prefix_text.trim();
    let suffix = settings.suffix_text.trim();

    let mut parts = Vec::with_capacity(3);
    if settings.prefix && !prefix.is_empty() {
        parts.push(prefix);
    }
    if !base.is_empty() {
        parts.push(base);
    }
    if settings.suffix && !suffix.is_empty() {
        parts.push(suffix);
    }

    truncate(&parts.join(" "), settings.title_length)
}

fn build_description(title_base: &str, settings: &GenerationSettings) -> String {
    let noun = settings.image_type.description_noun();
    let platform = settings.platform.display_name();

    let mut sentences = Vec::new();
    if title_base.is_empty() {
        sentences.push(format!(
            "High-quality {noun} suitable for {platform} and commercial use."
        ));
    } else {
        sentences.push(format!(
            "{title_base} - high-quality {noun} suitable for {platform} and commercial use."
        ));
    }
    if settings.camera_parameters {
        sentences.push(CAMERA_SENTENCE.to_string());
    }
    if settings.white_background {
        sentences.push(WHITE_BACKGROUND_SENTENCE.to_string());
    }
    sentences.push(USAGE_SENTENCE.to_string());

    let exclude = settings.negative_title_text.trim();
    if !exclude.is_empty() {
        sentences.push(format!("Exclude: {exclude}."));
    }

    truncate(&sentences.join(" "), settings.description_length)
}

fn build_keywords(words: &[String], settings: &GenerationSettings) -> Vec<String> {
    let excluded: HashSet<String> = settings.negative_keywords().into_iter().collect();
    let candidates = words
        .iter()
        .map(|w| w.to_lowercase())
        .chain(GENERIC_KEYWORDS.iter().map(|k| k.to_string()));

    let mut keywords: Vec<String> = Vec::new();
    for candidate in candidates {
        if keywords.len() >= settings.keywords_count {
            break;
        }
        if candidate.is_empty() || excluded.contains(&candidate) || keywords.contains(&candidate) {
            continue;
        }
        keywords.push(candidate);
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ImageType, Platform};

    fn settings() -> GenerationSettings {
        GenerationSettings::default()
    }

    // ── title ────────────────────────────────────────────────────────

    #[test]
    fn title_from_filename() {
        let meta = generate_metadata("golden_retriever-puppy.jpeg", &settings());
        assert_eq!(meta.title, "Golden Retriever Puppy");
    }

    #[test]
    fn title_uses_first_eight_words() {
        let meta = generate_metadata("a-b-c-d-e-f-g-h-i-j.jpg", &settings());
        assert_eq!(meta.title, "A B C D E F G H");
    }

    #[test]
    fn title_prefix_and_suffix() {
        let s = GenerationSettings {
            prefix: true,
            prefix_text: "Stock".into(),
            suffix: true,
            suffix_text: "Background".into(),
            ..settings()
        };
        let meta = generate_metadata("blue-sky.jpg", &s);
        assert_eq!(meta.title, "Stock Blue Sky Background");
    }

    #[test]
    fn title_prefix_and_suffix_are_trimmed() {
        let s = GenerationSettings {
            prefix: true,
            prefix_text: "  Stock ".into(),
            suffix: true,
            suffix_text: " Background  ".into(),
            ..settings()
        };
        assert_eq!(generate_metadata("blue-sky.jpg", &s).title, "Stock Blue Sky Background");
    }

    #[test]
    fn title_prefix_ignored_when_disabled_or_blank() {
        let s = GenerationSettings {
            prefix: false,
            prefix_text: "Stock".into(),
            suffix: true,
            suffix_text: "   ".into(),
            ..settings()
        };
        assert_eq!(generate_metadata("blue-sky.jpg", &s).title, "Blue Sky");
    }

    #[test]
    fn title_truncated_with_ellipsis() {
        let s = GenerationSettings { title_length: 20, ..settings() };
        let meta = generate_metadata("beautiful-sunset-over-the-quiet-ocean.jpg", &s);
        assert!(meta.title.chars().count() <= 20);
        assert_eq!(meta.title, "Beautiful Sunset...");
    }

    #[test]
    fn title_empty_base_with_prefix() {
        let s = GenerationSettings {
            prefix: true,
            prefix_text: "Abstract".into(),
            ..settings()
        };
        assert_eq!(generate_metadata("!!!.png", &s).title, "Abstract");
    }

    #[test]
    fn title_tiny_limit_does_not_panic() {
        let s = GenerationSettings { title_length: 2, ..settings() };
        assert_eq!(generate_metadata("sunset.jpg", &s).title, "Su");
    }

    // ── description ──────────────────────────────────────────────────

    #[test]
    fn description_mentions_type_and_platform() {
        let s = GenerationSettings {
            description_length: 500,
            image_type: ImageType::Vector,
            platform: Platform::Adobe,
            ..settings()
        };
        let meta = generate_metadata("flat-icons.svg", &s);
        assert!(meta.description.starts_with(
            "Flat Icons - high-quality vector suitable for Adobe Stock and commercial use."
        ));
        assert!(meta.description.contains("discoverability on microstock platforms."));
    }

    #[test]
    fn description_optional_sentences() {
        let s = GenerationSettings {
            description_length: 500,
            camera_parameters: true,
            white_background: true,
            negative_title_text: "logos, text".into(),
            ..settings()
        };
        let d = generate_metadata("product.jpg", &s).description;
        let camera = d.find("Shot with professional camera settings").unwrap();
        let white = d.find("Clean white background").unwrap();
        assert!(camera < white);
        assert!(d.ends_with("Exclude: logos, text."));
    }

    #[test]
    fn description_truncated() {
        let s = GenerationSettings { description_length: 60, ..settings() };
        let d = generate_metadata("mountain-lake.jpg", &s).description;
        assert!(d.chars().count() <= 60);
        assert!(d.ends_with("..."));
    }

    #[test]
    fn description_empty_base_is_generic() {
        let s = GenerationSettings { description_length: 500, ..settings() };
        let d = generate_metadata(".jpg", &s).description;
        assert!(d.starts_with("High-quality image suitable for Shutterstock and commercial use."));
    }

    // ── keywords ─────────────────────────────────────────────────────

    #[test]
    fn keywords_filename_words_then_generic() {
        let s = GenerationSettings { keywords_count: 50, ..settings() };
        let k = generate_metadata("Red-Apple.jpg", &s).keywords;
        assert_eq!(
            k,
            [
                "red", "apple", "stock", "photo", "image", "digital", "creative",
                "high quality", "professional"
            ]
        );
    }

    #[test]
    fn keywords_deduplicated() {
        let k = generate_metadata("photo-Photo-stock.jpg", &settings()).keywords;
        assert_eq!(k.iter().filter(|w| *w == "photo").count(), 1);
        assert_eq!(k.iter().filter(|w| *w == "stock").count(), 1);
        assert_eq!(k[..2], ["photo", "stock"]);
    }

    #[test]
    fn keywords_exclusion_case_insensitive() {
        let s = GenerationSettings {
            negative_keywords_text: "APPLE; Stock, high quality".into(),
            ..settings()
        };
        let k = generate_metadata("red-apple.jpg", &s).keywords;
        assert!(!k.contains(&"apple".to_string()));
        assert!(!k.contains(&"stock".to_string()));
        assert!(!k.contains(&"high quality".to_string()));
        assert_eq!(k[0], "red");
    }

    #[test]
    fn keywords_cap() {
        for count in 0..12 {
            let s = GenerationSettings { keywords_count: count, ..settings() };
            let k = generate_metadata("one-two-three.jpg", &s).keywords;
            assert_eq!(k.len(), count.min(10));
        }
    }

    #[test]
    fn keywords_empty_base_uses_generic() {
        let k = generate_metadata("", &settings()).keywords;
        assert_eq!(k, GENERIC_KEYWORDS);
    }

    // ── whole record ─────────────────────────────────────────────────

    #[test]
    fn sunset_beach_scenario() {
        let s = GenerationSettings {
            title_length: 30,
            keywords_count: 5,
            image_type: ImageType::Photo,
            prefix: false,
            suffix: false,
            negative_keywords_text: "beach".into(),
            ..settings()
        };
        let meta = generate_metadata("sunset-beach_01.jpg", &s);
        assert!(meta.title.starts_with("Sunset Beach 01"));
        assert!(meta.title.chars().count() <= 30);
        assert!(meta.keywords.len() <= 5);
        assert!(!meta.keywords.contains(&"beach".to_string()));
        assert!(meta.keywords.contains(&"sunset".to_string()));
        assert!(meta.keywords.contains(&"01".to_string()));
        assert!(meta.keywords.contains(&"stock".to_string()));
    }

    #[test]
    fn deterministic() {
        let s = GenerationSettings {
            camera_parameters: true,
            negative_title_text: "people".into(),
            ..settings()
        };
        let a = generate_metadata("city_lights-2024.tiff", &s);
        let b = generate_metadata("city_lights-2024.tiff", &s);
        assert_eq!(a, b);
    }

    #[test]
    fn limits_hold_across_settings() {
        let names = ["", "x.jpg", "a-very-long-file-name-with-many-many-words-in-it.png"];
        for name in names {
            for title_length in [3, 10, 25, 255] {
                for description_length in [3, 50, 120, 500] {
                    let s = GenerationSettings {
                        title_length,
                        description_length,
                        prefix: true,
                        prefix_text: "Premium Collection".into(),
                        white_background: true,
                        ..settings()
                    };
                    let meta = generate_metadata(name, &s);
                    assert!(meta.title.chars().count() <= title_length);
                    assert!(meta.description.chars().count() <= description_length);
                    assert!(!meta.description.is_empty());
                }
            }
        }
    }
}
