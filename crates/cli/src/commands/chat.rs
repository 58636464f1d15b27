//! Chat command handler.
//!
//! Interactive QA session with one paper. The paper is fetched and indexed
//! once; each question is an independent rank-and-answer call. The loop owns
//! the session transcript.

use clap::Args;
use paperchat_arxiv::fetch_paper_text;
use paperchat_core::{config::AppConfig, AppResult};
use paperchat_retrieval::{answer_question, build_index};
use std::io::{BufRead, Write};

/// One transcript entry of the session.
#[derive(Debug, Clone)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Start an interactive QA session with a paper
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// arXiv identifier (e.g., 1706.03762)
    pub arxiv_id: String,

    /// Number of passages supplied as context
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Passage size in characters
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Overlap between passages in characters
    #[arg(long)]
    pub overlap: Option<usize>,
}

impl ChatCommand {
    /// Execute the chat command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Starting chat session for paper '{}'", self.arxiv_id);

        let client = super::create_llm_client(config)?;

        let text = fetch_paper_text(&self.arxiv_id).await?;

        let chunk_size = self.chunk_size.unwrap_or(config.retrieval.chunk_size);
        let overlap = self.overlap.unwrap_or(config.retrieval.overlap);
        let top_n = self.top_n.unwrap_or(config.retrieval.top_n);

        let index = build_index(&text, chunk_size, overlap)?;

        println!(
            "Indexed {} ({} passages). Ask away; 'history' replays the session, 'exit' quits.",
            self.arxiv_id,
            index.passage_count()
        );

        let mut transcript: Vec<ChatMessage> = Vec::new();

        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("you> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let question = line?.trim().to_string();

            if question.is_empty() {
                continue;
            }
            match question.as_str() {
                "exit" | "quit" => break,
                "history" => {
                    for message in &transcript {
                        println!("{}> {}", message.role, message.content);
                    }
                    continue;
                }
                _ => {}
            }

            transcript.push(ChatMessage {
                role: "user",
                content: question.clone(),
            });

            match answer_question(&index, &question, top_n, client.as_ref(), &config.model).await
            {
                Ok(answer) => {
                    println!("\n{}\n", answer);
                    transcript.push(ChatMessage {
                        role: "assistant",
                        content: answer,
                    });
                }
                Err(e) => {
                    // Keep the session alive; the question can be retried
                    eprintln!("Could not answer: {}", e);
                }
            }
        }

        println!(
            "Session ended after {} answered questions.",
            transcript.iter().filter(|m| m.role == "assistant").count()
        );

        Ok(())
    }
}
