//! Search command handler.
//!
//! Translates a research topic into an arXiv query and prints the results.

use clap::Args;
use paperchat_arxiv::{search_papers, translate_query, Paper};
use paperchat_core::{config::AppConfig, AppResult};

/// Longest summary excerpt shown per result.
const MAX_SUMMARY_LENGTH: usize = 280;

/// Search arXiv for papers on a topic
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Research topic, or a raw arXiv query with --raw
    pub topic: String,

    /// Number of papers to fetch
    #[arg(short = 'n', long, default_value = "5")]
    pub max_results: usize,

    /// Skip LLM query translation and send the topic verbatim
    #[arg(long)]
    pub raw: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchCommand {
    /// Execute the search command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing search command for topic '{}'", self.topic);

        let query = if self.raw {
            self.topic.clone()
        } else {
            let client = super::create_llm_client(config)?;
            translate_query(client.as_ref(), &config.model, &self.topic).await?
        };

        let papers = search_papers(&query, self.max_results).await?;

        if self.json {
            let json = serde_json::to_string_pretty(&papers)?;
            println!("{}", json);
            return Ok(());
        }

        if papers.is_empty() {
            println!("No papers found for '{}'. Try a different topic.", query);
            return Ok(());
        }

        for (i, paper) in papers.iter().enumerate() {
            print_paper(i + 1, paper);
        }

        Ok(())
    }
}

/// Print one search result to stdout.
fn print_paper(number: usize, paper: &Paper) {
    println!(
        "{}. {} ({}, {})",
        number,
        paper.title,
        paper.short_authors(),
        paper.published.format("%Y-%m-%d")
    );
    println!("   arXiv: {}", paper.arxiv_id);
    if let Some(ref link) = paper.link {
        println!("   {}", link);
    }
    println!("   {}", truncate(&paper.summary, MAX_SUMMARY_LENGTH));
    println!();
}

/// Truncate text at a word boundary.
fn truncate(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }

    let mut cut = max_len;
    while cut > 0 && !text.is_char_boundary(cut) {
        cut -= 1;
    }

    let truncated = &text[..cut];
    match truncated.rfind(char::is_whitespace) {
        Some(last_space) => format!("{}...", &truncated[..last_space]),
        None => format!("{}...", truncated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text() {
        assert_eq!(truncate("Short text", 100), "Short text");
    }

    #[test]
    fn test_truncate_at_word_boundary() {
        let long = "This is a very long abstract that needs to be truncated at some point";
        let result = truncate(long, 30);
        assert!(result.len() <= 33);
        assert!(result.ends_with("..."));
    }
}
