//! Front-matter splitting and YAML metadata parsing

use serde_yaml::Mapping;

use crate::error::{Error, Result};

/// An article split into front-matter metadata and body text
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArticle {
    /// Key/value metadata from the leading delimited block
    pub metadata: Mapping,
    /// Everything after the closing delimiter
    pub body: String,
}

/// Parse a markdown document with an optional leading front-matter block.
///
/// The block is delimited by `---` lines at the very top of the file and
/// holds a YAML mapping. A document without an opening delimiter parses
/// to empty metadata and the full text as body; an opening delimiter
/// without a closing one is an error.
pub fn parse(content: &str) -> Result<ParsedArticle> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.is_empty() || lines[0].trim_end() != "---" {
        return Ok(ParsedArticle {
            metadata: Mapping::new(),
            body: content.to_string(),
        });
    }

    let close = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim_end() == "---")
        .map(|(idx, _)| idx)
        .ok_or_else(|| Error::FrontMatter("front matter block not closed".to_string()))?;

    let yaml = lines[1..close].join("\n");
    let metadata: Mapping = if yaml.trim().is_empty() {
        Mapping::new()
    } else {
        serde_yaml::from_str(&yaml)?
    };

    let body = lines[close + 1..]
        .join("\n")
        .trim_start_matches('\n')
        .to_string();

    Ok(ParsedArticle { metadata, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn get<'m>(metadata: &'m Mapping, key: &str) -> Option<&'m Value> {
        metadata.get(Value::String(key.to_string()))
    }

    #[test]
    fn test_parse_with_front_matter() {
        let doc = "---\ntitle: X\n---\nBody text";
        let parsed = parse(doc).unwrap();
        assert_eq!(
            get(&parsed.metadata, "title"),
            Some(&Value::String("X".into()))
        );
        assert_eq!(parsed.body, "Body text");
    }

    #[test]
    fn test_parse_without_front_matter() {
        let doc = "# Just a heading\n\nSome prose.";
        let parsed = parse(doc).unwrap();
        assert!(parsed.metadata.is_empty());
        assert_eq!(parsed.body, doc);
    }

    #[test]
    fn test_parse_unclosed_front_matter() {
        let doc = "---\ntitle: X\nBody text";
        let err = parse(doc).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::FrontMatter);
    }

    #[test]
    fn test_parse_empty_block() {
        let doc = "---\n---\nBody";
        let parsed = parse(doc).unwrap();
        assert!(parsed.metadata.is_empty());
        assert_eq!(parsed.body, "Body");
    }

    #[test]
    fn test_parse_structured_values() {
        let doc = "---\ntitle: Shipping week\ntags:\n  - rust\n  - ci\npublished: false\n---\ntext";
        let parsed = parse(doc).unwrap();
        assert_eq!(
            get(&parsed.metadata, "published"),
            Some(&Value::Bool(false))
        );
        let tags = get(&parsed.metadata, "tags").unwrap();
        assert_eq!(tags.as_sequence().unwrap().len(), 2);
    }

    #[test]
    fn test_body_keeps_later_delimiters() {
        // A horizontal rule in the body is not a front-matter delimiter
        let doc = "---\ntitle: X\n---\nintro\n\n---\n\noutro";
        let parsed = parse(doc).unwrap();
        assert_eq!(parsed.body, "intro\n\n---\n\noutro");
    }

    #[test]
    fn test_leading_blank_lines_stripped_from_body() {
        let doc = "---\ntitle: X\n---\n\n\nBody text";
        let parsed = parse(doc).unwrap();
        assert_eq!(parsed.body, "Body text");
    }

    #[test]
    fn test_non_mapping_front_matter_rejected() {
        let doc = "---\n- a\n- b\n---\nBody";
        assert!(parse(doc).is_err());
    }

    #[test]
    fn test_empty_document() {
        let parsed = parse("").unwrap();
        assert!(parsed.metadata.is_empty());
        assert_eq!(parsed.body, "");
    }
}
