//! Ask command handler.
//!
//! Answers a single question about one paper: fetch, index, rank, answer.

use clap::Args;
use paperchat_arxiv::fetch_paper_text;
use paperchat_core::{config::AppConfig, AppResult};
use paperchat_retrieval::{answer_question, build_index};

/// Ask a single question about a paper
#[derive(Args, Debug)]
pub struct AskCommand {
    /// arXiv identifier (e.g., 1706.03762)
    pub arxiv_id: String,

    /// The question to ask
    pub question: String,

    /// Number of passages supplied as context
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Passage size in characters
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Overlap between passages in characters
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command for paper '{}'", self.arxiv_id);

        let client = super::create_llm_client(config)?;

        let text = fetch_paper_text(&self.arxiv_id).await?;

        let chunk_size = self.chunk_size.unwrap_or(config.retrieval.chunk_size);
        let overlap = self.overlap.unwrap_or(config.retrieval.overlap);
        let top_n = self.top_n.unwrap_or(config.retrieval.top_n);

        let index = build_index(&text, chunk_size, overlap)?;

        let answer = answer_question(
            &index,
            &self.question,
            top_n,
            client.as_ref(),
            &config.model,
        )
        .await?;

        if self.json {
            let output = serde_json::json!({
                "arxivId": self.arxiv_id,
                "question": self.question,
                "answer": answer,
                "model": config.model,
                "provider": config.provider,
                "passageCount": index.passage_count(),
            });
            let json = serde_json::to_string_pretty(&output)?;
            println!("{}", json);
        } else {
            println!("{}", answer);
        }

        Ok(())
    }
}
