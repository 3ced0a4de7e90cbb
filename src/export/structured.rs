use anyhow::{Context, Result};

use crate::generate::MetadataRecord;

/// Render records as a pretty-printed JSON array.
///
/// Field order is fixed by [`MetadataRecord`]; `prompt` is left out of records
/// that have none.
pub fn export_structured(records: &[MetadataRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize metadata records")
}

/// Read a collection written by [`export_structured`], possibly hand-edited.
pub fn parse_structured(text: &str) -> Result<Vec<MetadataRecord>> {
    serde_json::from_str(text).context("Failed to parse metadata records")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<MetadataRecord> {
        vec![
            MetadataRecord {
                id: "a".into(),
                filename: "logo.svg".into(),
                title: "Logo".into(),
                description: "A logo.".into(),
                keywords: vec!["logo".into(), "vector".into()],
                prompt: Some("Generate a vector of logo".into()),
            },
            MetadataRecord {
                id: "b".into(),
                filename: "cat.jpg".into(),
                title: r#"The "Cat""#.into(),
                description: "A cat.".into(),
                keywords: vec![],
                prompt: None,
            },
        ]
    }

    #[test]
    fn structured_field_names_and_order() {
        let out = export_structured(&records()).unwrap();
        let id = out.find("\"id\"").unwrap();
        let filename = out.find("\"filename\"").unwrap();
        let title = out.find("\"title\"").unwrap();
        let description = out.find("\"description\"").unwrap();
        let keywords = out.find("\"keywords\"").unwrap();
        let prompt = out.find("\"prompt\"").unwrap();
        assert!(id < filename && filename < title && title < description);
        assert!(description < keywords && keywords < prompt);
    }

    #[test]
    fn structured_omits_absent_prompt() {
        let value: serde_json::Value =
            serde_json::from_str(&export_structured(&records()).unwrap()).unwrap();
        assert_eq!(value[0]["prompt"], "Generate a vector of logo");
        assert!(value[1].get("prompt").is_none());
        assert_eq!(value[0]["keywords"][1], "vector");
    }

    #[test]
    fn structured_empty_collection() {
        assert_eq!(export_structured(&[]).unwrap(), "[]");
    }

    #[test]
    fn parse_recovers_records() {
        let original = records();
        let parsed = parse_structured(&export_structured(&original).unwrap()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn parse_accepts_missing_prompt_key() {
        let text = r#"[{"id":"x","filename":"a.png","title":"A","description":"d","keywords":["a"]}]"#;
        let parsed = parse_structured(text).unwrap();
        assert_eq!(parsed[0].prompt, None);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_structured("not json").is_err());
        assert!(parse_structured(r#"{"id": "x"}"#).is_err());
    }
}
