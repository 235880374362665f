//! Metadata record serialization

use crate::error::Result;
use crate::formats::LineMetadata;

/// Render a metadata row as a compact JSON object.
///
/// Keys appear as `id`, `node`, `lineNumber`, `tags`. JSON string quoting
/// is the only escaping applied.
pub fn encode_metadata(meta: &LineMetadata) -> Result<String> {
    Ok(serde_json::to_string(meta)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::split_tags;
    use pretty_assertions::assert_eq;

    fn meta(tags: &str) -> LineMetadata {
        LineMetadata {
            id: "L1".to_string(),
            node: "N1".to_string(),
            line_number: "5".to_string(),
            tags: split_tags(tags),
        }
    }

    #[test]
    fn test_field_order_and_tags() {
        assert_eq!(
            encode_metadata(&meta("a b")).unwrap(),
            r#"{"id":"L1","node":"N1","lineNumber":"5","tags":["a","b"]}"#
        );
    }

    #[test]
    fn test_empty_tags_keep_single_empty_string() {
        assert_eq!(
            encode_metadata(&meta("")).unwrap(),
            r#"{"id":"L1","node":"N1","lineNumber":"5","tags":[""]}"#
        );
    }

    #[test]
    fn test_json_quoting() {
        let mut m = meta("x");
        m.node = "Say \"hi\"\n".to_string();
        let json = encode_metadata(&m).unwrap();
        assert!(json.contains(r#""node":"Say \"hi\"\n""#));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["node"], "Say \"hi\"\n");
    }
}
