use crate::settings::GenerationSettings;
use crate::text::{strip_extension, tokenize, truncate};

const FALLBACK_SUBJECT: &str = "a subject";
const WHITE_BACKGROUND_PART: &str = "on a clean white background";
const CAMERA_PART: &str = "use realistic camera parameters, shallow depth of field, natural lighting";
const STYLE_PART: &str = "high resolution, crisp details, natural colors, professional composition";

/// Build an AI-image-generation prompt for a filename.
///
/// Parts are joined with `", "` in a fixed order: prefix, subject, white
/// background, camera parameters, style guidance, negative words, suffix. The
/// result is cut to `prompt_character_length`.
///
/// ```rust
/// use stock_meta::generate::generate_prompt;
/// use stock_meta::settings::GenerationSettings;
///
/// let settings = GenerationSettings { white_background: true, ..Default::default() };
/// assert_eq!(
///     generate_prompt("red-apple.jpg", &settings),
///     "Generate a photo of red apple, on a clean white background, \
///      high resolution, crisp details, natural colors, professional composition"
/// );
/// ```
pub fn generate_prompt(filename: &str, settings: &GenerationSettings) -> String {
    let words = tokenize(strip_extension(filename));
    let subject = if words.is_empty() {
        FALLBACK_SUBJECT.to_string()
    } else {
        words.join(" ")
    };

    let mut parts: Vec<String> = Vec::new();

    if let Some(prefix) = enabled_text(settings.prompt_prefix, &settings.prompt_prefix_text) {
        parts.push(prefix.to_string());
    }
    parts.push(format!(
        "Generate a {} of {subject}",
        settings.prompt_image_type.prompt_noun()
    ));
    if settings.white_background {
        parts.push(WHITE_BACKGROUND_PART.to_string());
    }
    if settings.camera_parameters {
        parts.push(CAMERA_PART.to_string());
    }
    parts.push(STYLE_PART.to_string());
    if let Some(avoid) = enabled_text(
        settings.negative_prompt_words,
        &settings.negative_prompt_words_text,
    ) {
        parts.push(format!("avoid: {avoid}"));
    }
    if let Some(suffix) = enabled_text(settings.prompt_suffix, &settings.prompt_suffix_text) {
        parts.push(suffix.to_string());
    }

    truncate(&parts.join(", "), settings.prompt_character_length)
}

/// The trimmed text when its toggle is on and it is not blank.
fn enabled_text(enabled: bool, text: &str) -> Option<&str> {
    let text = text.trim();
    (enabled && !text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ImageType;

    #[test]
    fn prompt_minimal() {
        let p = generate_prompt("sunset-beach_01.jpg", &GenerationSettings::default());
        assert_eq!(
            p,
            "Generate a photo of sunset beach 01, high resolution, crisp details, natural colors, professional composition"
        );
    }

    #[test]
    fn prompt_all_parts_in_order() {
        let s = GenerationSettings {
            prompt_image_type: ImageType::Illustration,
            prompt_prefix: true,
            prompt_prefix_text: "Masterpiece".into(),
            prompt_suffix: true,
            prompt_suffix_text: "4k".into(),
            negative_prompt_words: true,
            negative_prompt_words_text: "text, watermark".into(),
            white_background: true,
            camera_parameters: true,
            prompt_character_length: 1000,
            ..Default::default()
        };
        let p = generate_prompt("fox.png", &s);
        assert_eq!(
            p,
            "Masterpiece, Generate a illustration of fox, on a clean white background, \
             use realistic camera parameters, shallow depth of field, natural lighting, \
             high resolution, crisp details, natural colors, professional composition, \
             avoid: text, watermark, 4k"
        );
    }

    #[test]
    fn prompt_disabled_toggles_ignore_text() {
        let s = GenerationSettings {
            prompt_prefix_text: "Masterpiece".into(),
            negative_prompt_words_text: "blur".into(),
            prompt_suffix_text: "8k".into(),
            ..Default::default()
        };
        let p = generate_prompt("fox.png", &s);
        assert!(!p.contains("Masterpiece"));
        assert!(!p.contains("avoid:"));
        assert!(!p.ends_with("8k"));
    }

    #[test]
    fn prompt_empty_subject_fallback() {
        let p = generate_prompt("", &GenerationSettings::default());
        assert!(p.starts_with("Generate a photo of a subject, "));
    }

    #[test]
    fn prompt_truncated() {
        let s = GenerationSettings {
            prompt_character_length: 40,
            ..Default::default()
        };
        let p = generate_prompt("sunset-beach_01.jpg", &s);
        assert!(p.chars().count() <= 40);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn prompt_deterministic() {
        let s = GenerationSettings {
            camera_parameters: true,
            ..Default::default()
        };
        assert_eq!(
            generate_prompt("city_lights.jpg", &s),
            generate_prompt("city_lights.jpg", &s)
        );
    }
}
