//! Paper module - read-only records from the external papers store

use serde::{Deserialize, Serialize};

/// A paper as stored in the external papers database.
///
/// The pipeline never creates, mutates, or deletes papers; they are
/// supplied by the store and consumed by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Row identifier in the papers store
    pub id: i64,

    /// arXiv identifier (e.g. "2401.01234")
    pub arxiv_id: String,

    /// Paper title
    pub title: String,

    /// Abstract text; may be absent for metadata-only records
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,

    /// Top-level domain label (e.g. "q-bio", "econ", "nlin")
    pub domain: String,

    /// Subdomain label (e.g. "PE", "SI"); absent for single-level domains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
}

impl Paper {
    /// Abstract text, or the empty string for metadata-only records.
    pub fn abstract_or_empty(&self) -> &str {
        self.abstract_text.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Paper {
        Paper {
            id: 42,
            arxiv_id: "2401.01234".to_string(),
            title: "Feedback in networks".to_string(),
            abstract_text: Some("We study feedback.".to_string()),
            domain: "nlin".to_string(),
            subdomain: None,
        }
    }

    #[test]
    fn test_abstract_or_empty() {
        let mut paper = sample();
        assert_eq!(paper.abstract_or_empty(), "We study feedback.");

        paper.abstract_text = None;
        assert_eq!(paper.abstract_or_empty(), "");
    }

    #[test]
    fn test_abstract_serializes_under_wire_name() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("abstract").is_some());
        assert!(json.get("abstract_text").is_none());
    }
}
