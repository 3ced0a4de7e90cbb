use crate::generate::MetadataRecord;
use crate::settings::Platform;

const BASE_COLUMNS: &[&str] = &["Filename", "Title", "Description", "Keywords"];
const ALL_COLUMNS: &[&str] = &["Filename", "Title", "Description", "Keywords", "AI Prompt"];

/// Column headers for a platform's CSV schema.
///
/// Every marketplace takes the same four columns; [`Platform::All`] adds the
/// AI prompt.
pub fn columns(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::All => ALL_COLUMNS,
        Platform::Adobe
        | Platform::Shutterstock
        | Platform::Freepik
        | Platform::Vecteezy
        | Platform::Pond5 => BASE_COLUMNS,
    }
}

/// Render records as CSV for `platform`.
///
/// The header row is unquoted. Every data field is wrapped in double quotes
/// with embedded quotes doubled, keywords share one field joined by `", "`,
/// and rows are separated by `\n` with no trailing newline. Row order follows
/// `records`.
///
/// ```rust
/// use stock_meta::export::export_delimited;
/// use stock_meta::settings::Platform;
///
/// assert_eq!(export_delimited(&[], Platform::Adobe), "Filename,Title,Description,Keywords");
/// ```
pub fn export_delimited(records: &[MetadataRecord], platform: Platform) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(columns(platform).join(","));

    for record in records {
        let mut fields = vec![
            quote(&record.filename),
            quote(&record.title),
            quote(&record.description),
            quote(&record.keywords.join(", ")),
        ];
        if platform == Platform::All {
            fields.push(quote(record.prompt.as_deref().unwrap_or_default()));
        }
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
