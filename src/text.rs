//! String helpers shared by the metadata and prompt generators.

/// Appended when a string is cut to fit a length limit.
pub const ELLIPSIS: &str = "...";

/// Drop the final `.ext` from a filename.
///
/// Only a non-empty extension that does not cross a path separator is removed,
/// so `"archive.tar.gz"` becomes `"archive.tar"` and `"photo."` is left alone.
pub fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) => {
            let ext = &filename[dot + 1..];
            if ext.is_empty() || ext.contains('/') {
                filename
            } else {
                &filename[..dot]
            }
        }
        None => filename,
    }
}

/// Split a filename stem into words.
///
/// `-` and `_` act as word separators, anything outside `[A-Za-z0-9 ]` is
/// removed, and the remainder is split on whitespace.
pub fn tokenize(base: &str) -> Vec<String> {
    let cleaned: String = base
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();

    cleaned
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Uppercase the first letter of each word and join with single spaces.
pub fn capitalize_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| {
            let mut chars = w.as_ref().chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cut `text` to at most `max` characters, marking the cut with [`ELLIPSIS`].
///
/// Lengths are counted in `char`s. When `max` is too small to hold the
/// ellipsis the text is cut without one.
///
/// ```rust
/// use stock_meta::text::truncate;
///
/// assert_eq!(truncate("Sunset Beach", 20), "Sunset Beach");
/// assert_eq!(truncate("Sunset Beach Waves", 10), "Sunset...");
/// ```
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let marker = ELLIPSIS.chars().count();
    if max < marker {
        return text.chars().take(max).collect();
    }

    let head: String = text.chars().take(max - marker).collect();
    format!("{}{ELLIPSIS}", head.trim_end())
}
