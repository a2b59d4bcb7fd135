use std::collections::HashMap;

use anyhow::{anyhow, Result};

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub text: String,
    pub metadata: HashMap<String, String>,
}

/// Splits add-command arguments into the task text and `key:value`
/// metadata tokens. Free words join with spaces in the order given.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut text_parts = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        text_parts.push(arg.as_str());
    }

    ParsedInput {
        text: text_parts.join(" "),
        metadata,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let args = vec![
            "Buy".to_string(),
            "milk".to_string(),
            "due:2024-01-15".to_string(),
            "priority:Low".to_string(),
        ];
        let parsed = parse_args(&args);
        assert_eq!(parsed.text, "Buy milk");
        assert_eq!(parsed.metadata.get("due"), Some(&"2024-01-15".to_string()));
        assert_eq!(parsed.metadata.get("priority"), Some(&"Low".to_string()));
    }

    #[test]
    fn test_parse_no_metadata() {
        let args = vec!["Walk".to_string(), "dog".to_string()];
        let parsed = parse_args(&args);
        assert_eq!(parsed.text, "Walk dog");
        assert!(parsed.metadata.is_empty());
    }

    #[test]
    fn test_expand_key() {
        let candidates = vec!["due", "priority"];

        assert_eq!(expand_key("d", &candidates).unwrap(), "due");
        assert_eq!(expand_key("du", &candidates).unwrap(), "due");
        assert_eq!(expand_key("due", &candidates).unwrap(), "due");

        assert_eq!(expand_key("p", &candidates).unwrap(), "priority");
        assert_eq!(expand_key("pri", &candidates).unwrap(), "priority");

        // Unknown
        assert!(expand_key("x", &candidates).is_err());
    }
}
