/// The ways a question can be put to the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// The caller's question, unchanged
    FreeForm,
    /// Everything the page says about a topic, with selectors and link suggestions
    Topic,
    /// Links related to a topic, each with a justification
    RelatedLinks,
}

impl QueryMode {
    /// Builds the user question for this mode from a raw question or topic
    pub fn question(&self, input: &str) -> String {
        match self {
            QueryMode::FreeForm => input.to_string(),
            QueryMode::Topic => format!(
                "Analyze the page content and provide information about: {input}

Please:
1. Find all relevant information about this topic
2. Provide CSS selectors for each finding
3. Suggest relevant links if direct information is not available
4. Structure your response clearly"
            ),
            QueryMode::RelatedLinks => format!(
                "Find all links that might be related to: {input}

For each relevant link, provide:
- CSS selector
- Link text
- Why it might be relevant"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_form_passes_through() {
        let raw = "  What is the price?  ";
        assert_eq!(QueryMode::FreeForm.question(raw), raw);
    }

    #[test]
    fn test_topic_templates_embed_topic() {
        let topic = QueryMode::Topic.question("pricing");
        assert!(topic.starts_with("Analyze the page content and provide information about: pricing\n"));
        assert!(topic.contains("Provide CSS selectors"));

        let links = QueryMode::RelatedLinks.question("pricing");
        assert!(links.starts_with("Find all links that might be related to: pricing\n"));
        assert!(links.contains("Why it might be relevant"));
    }
}
