use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One curated FAQ entry. The corpus file is a top-level YAML list of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub tags: Option<Vec<String>>,
}

/// Load and validate the FAQ corpus from a YAML file.
///
/// An empty file yields an empty corpus; downstream layers decide whether
/// that is acceptable.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_faqs(path: &Path) -> Result<Vec<FaqItem>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FaqsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let faqs = parse_faqs(&content)?;
    validate_faqs(&faqs)?;

    Ok(faqs)
}

fn parse_faqs(content: &str) -> Result<Vec<FaqItem>, ConfigError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(content).map_err(ConfigError::FaqsFileParse)
}

fn validate_faqs(faqs: &[FaqItem]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for faq in faqs {
        if faq.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "FAQ id must be non-empty".to_string(),
            ));
        }

        if faq.question.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "FAQ '{}' has an empty question",
                faq.id
            )));
        }

        if faq.answer.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "FAQ '{}' has an empty answer",
                faq.id
            )));
        }

        let lower_id = faq.id.to_lowercase();
        if !seen_ids.insert(lower_id) {
            return Err(ConfigError::Validation(format!(
                "duplicate FAQ id: '{}'",
                faq.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, question: &str, answer: &str) -> FaqItem {
        FaqItem {
            id: id.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            tags: None,
        }
    }

    #[test]
    fn parse_faqs_reads_yaml_list() {
        let content = r#"
- id: faq-001
  question: "How do I reset my password?"
  answer: "Use the reset link on the login page."
  tags: [account, login]
- id: faq-002
  question: "Do you ship internationally?"
  answer: "Yes, to most countries."
"#;
        let faqs = parse_faqs(content).unwrap();
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].id, "faq-001");
        assert_eq!(faqs[0].answer, "Use the reset link on the login page.");
        assert_eq!(
            faqs[0].tags,
            Some(vec!["account".to_string(), "login".to_string()])
        );
        assert!(faqs[1].tags.is_none());
    }

    #[test]
    fn parse_faqs_empty_content_yields_empty_corpus() {
        assert!(parse_faqs("").unwrap().is_empty());
        assert!(parse_faqs("   \n").unwrap().is_empty());
    }

    #[test]
    fn parse_faqs_rejects_missing_field() {
        let content = r#"
- id: faq-001
  question: "Where is my order?"
"#;
        let result = parse_faqs(content);
        assert!(
            matches!(result, Err(ConfigError::FaqsFileParse(_))),
            "expected FaqsFileParse, got: {result:?}"
        );
    }

    #[test]
    fn validate_rejects_empty_id() {
        let faqs = vec![item("  ", "Q?", "A.")];
        let err = validate_faqs(&faqs).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_empty_question() {
        let faqs = vec![item("faq-001", "   ", "A.")];
        let err = validate_faqs(&faqs).unwrap_err();
        assert!(err.to_string().contains("empty question"));
    }

    #[test]
    fn validate_rejects_empty_answer() {
        let faqs = vec![item("faq-001", "Q?", "")];
        let err = validate_faqs(&faqs).unwrap_err();
        assert!(err.to_string().contains("empty answer"));
    }

    #[test]
    fn validate_rejects_duplicate_id() {
        let faqs = vec![
            item("faq-001", "Q1?", "A1."),
            item("FAQ-001", "Q2?", "A2."),
        ];
        let err = validate_faqs(&faqs).unwrap_err();
        assert!(err.to_string().contains("duplicate FAQ id"));
    }

    #[test]
    fn validate_accepts_valid_corpus() {
        let faqs = vec![
            item("faq-001", "How do I reset my password?", "Use the reset link."),
            item("faq-002", "Do you ship internationally?", "Yes."),
        ];
        assert!(validate_faqs(&faqs).is_ok());
    }

    #[test]
    fn validate_accepts_empty_corpus() {
        assert!(validate_faqs(&[]).is_ok());
    }

    #[test]
    fn load_faqs_missing_file_is_io_error() {
        let result = load_faqs(Path::new("/nonexistent/faqs.yaml"));
        assert!(
            matches!(result, Err(ConfigError::FaqsFileIo { .. })),
            "expected FaqsFileIo, got: {result:?}"
        );
    }

    #[test]
    fn load_faqs_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("data")
            .join("faqs.yaml");
        assert!(
            path.exists(),
            "faqs.yaml missing at {path:?} — required for this test"
        );
        let result = load_faqs(&path);
        assert!(result.is_ok(), "failed to load faqs.yaml: {result:?}");
        let faqs = result.unwrap();
        assert!(!faqs.is_empty());
    }
}
