//! Paper text retrieval.
//!
//! Downloads a paper's PDF from arXiv and extracts its plain text. The
//! retrieval pipeline consumes this text; it never touches PDFs itself.

use paperchat_core::{AppError, AppResult};

/// Fetch the full extracted text of a paper.
///
/// # Errors
/// `Arxiv` if the PDF cannot be downloaded, `Extraction` if its content
/// cannot be parsed. An image-only PDF extracts to empty text; the indexer
/// rejects that downstream with `EmptyDocument`.
pub async fn fetch_paper_text(arxiv_id: &str) -> AppResult<String> {
    let url = format!("https://arxiv.org/pdf/{}", arxiv_id);

    tracing::info!("Downloading PDF for {}", arxiv_id);

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| AppError::Arxiv(format!("Failed to download PDF: {}", e)))?;

    if !response.status().is_success() {
        return Err(AppError::Arxiv(format!(
            "PDF download for '{}' returned status {}",
            arxiv_id,
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Arxiv(format!("Failed to read PDF body: {}", e)))?;

    tracing::debug!("Downloaded {} bytes, extracting text", bytes.len());

    let text = extract_text(&bytes)?;

    tracing::info!("Extracted {} characters from {}", text.len(), arxiv_id);

    Ok(text)
}

/// Extract plain text from PDF bytes.
pub fn extract_text(bytes: &[u8]) -> AppResult<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("Failed to extract text from PDF: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_rejects_garbage() {
        let result = extract_text(b"this is not a pdf document");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
