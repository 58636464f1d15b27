//! Built-in prompt definitions.
//!
//! Paperchat ships with exactly two prompts, compiled into the binary:
//! one for grounded question answering over a paper and one for turning
//! a research topic into an arXiv API search query.

use crate::types::PromptDefinition;

/// System instruction for grounded QA over a paper.
const QA_SYSTEM: &str = "You are a research assistant. Answer the user's question based ONLY on \
the provided context from the research paper. If the context does not contain the answer, say \
that the paper does not cover it.";

/// User template for grounded QA.
const QA_TEMPLATE: &str = "Context:\n{{context}}\n\nQuestion: {{question}}";

/// System instruction for arXiv query translation.
const ARXIV_QUERY_SYSTEM: &str =
    "You are a helpful assistant that converts user queries into search queries for the arXiv API.";

/// User template for arXiv query translation. Few-shot examples cover field
/// prefixes and submittedDate ranges.
const ARXIV_QUERY_TEMPLATE: &str = r#"Convert the user query into a search query for the arXiv API.
Return only the search query part. Don't return anything else apart from the search query.

You can search specific fields using a prefix. The available field prefixes are:
ti for Title
au for Author
abs for Abstract
co for Comment
jr for Journal Reference
cat for Subject Category
rn for Report Number
id for Id
all for all of the above fields.

Additionally, the API provides one date filter, submittedDate, that allows you to select
papers within a given submission date range. The expected format is
[YYYYMMDDTTTT+TO+YYYYMMDDTTTT] where TTTT is the time in 24 hour format to the minute, in GMT.

Here are some examples of how to construct a query:

User query: we wanted to find all articles by the author Adrian Del Maestro.
Search query: au:del_maestro

User query: I'm looking for papers on "language models" in the computer science category.
Search query: ti:"language models"+AND+cat:cs

User query: Find papers by Del Maestro submitted between Jan 1, 2023 6:00 AM and Jan 1, 2024 6:00 AM GMT.
Search query: au:del_maestro+AND+submittedDate:[202301010600+TO+202401010600]

User query: {{topic}}
Search query:"#;

/// The grounded question-answering prompt.
pub fn qa_prompt() -> PromptDefinition {
    PromptDefinition {
        id: "paper.qa".to_string(),
        title: "Grounded paper QA".to_string(),
        system: Some(QA_SYSTEM.to_string()),
        template: QA_TEMPLATE.to_string(),
    }
}

/// The topic-to-arXiv-query translation prompt.
pub fn arxiv_query_prompt() -> PromptDefinition {
    PromptDefinition {
        id: "arxiv.query".to_string(),
        title: "arXiv search query translation".to_string(),
        system: Some(ARXIV_QUERY_SYSTEM.to_string()),
        template: ARXIV_QUERY_TEMPLATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qa_prompt_shape() {
        let def = qa_prompt();
        assert_eq!(def.id, "paper.qa");
        assert!(def.system.is_some());
        assert!(def.template.contains("{{context}}"));
        assert!(def.template.contains("{{question}}"));
    }

    #[test]
    fn test_arxiv_query_prompt_shape() {
        let def = arxiv_query_prompt();
        assert_eq!(def.id, "arxiv.query");
        assert!(def.template.contains("{{topic}}"));
        assert!(def.template.contains("au:del_maestro"));
    }
}
