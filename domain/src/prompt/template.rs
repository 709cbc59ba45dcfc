//! Prompt template for the news writer

use crate::record::IRRELEVANT;

/// Templates for generating prompts
pub struct NewsPromptTemplate;

impl NewsPromptTemplate {
    /// Prompt asking the model to turn a raw post into a short news item
    pub fn news_item(content: &str) -> String {
        format!(
            r#"Act as a digital news writer.
Here is a raw post taken from a social network:

"{content}"

Your task:
1. Analyze the content.
2. Write a short news item (a title and at most 2 paragraphs).
3. Use an informative, neutral tone.
4. If the post is irrelevant or spam, reply with only "{IRRELEVANT}"."#
        )
    }
}
