//! Paper metadata types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A paper record returned by the arXiv API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title, whitespace-normalized
    pub title: String,

    /// Author names in publication order
    pub authors: Vec<String>,

    /// Abstract, whitespace-normalized
    pub summary: String,

    /// arXiv identifier (e.g., "2106.09685v2")
    pub arxiv_id: String,

    /// Submission timestamp
    pub published: DateTime<Utc>,

    /// Abstract page URL, when the feed provides one
    pub link: Option<String>,
}

impl Paper {
    /// Short author attribution for display ("Vaswani et al." or the single
    /// author's name).
    pub fn short_authors(&self) -> String {
        match self.authors.as_slice() {
            [] => "Unknown".to_string(),
            [only] => only.clone(),
            [first, ..] => format!("{} et al.", first),
        }
    }
}
