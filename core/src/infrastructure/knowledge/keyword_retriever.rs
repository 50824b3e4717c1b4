use std::{collections::HashSet, path::Path, sync::Arc};

use regex::Regex;
use tracing::{info, warn};

use crate::domain::{agent::ports::KnowledgeRetriever, common::entities::app_errors::CoreError};

/// In-memory retriever over fixed-size, overlapping chunks of a text corpus.
/// Passages are ranked by how many distinct query terms they contain.
#[derive(Debug, Clone)]
pub struct KeywordKnowledgeRetriever {
    chunks: Arc<Vec<Chunk>>,
    tokenizer: Regex,
}

#[derive(Debug)]
struct Chunk {
    text: String,
    terms: HashSet<String>,
}

impl KeywordKnowledgeRetriever {
    pub fn from_text(text: &str, chunk_size: usize, chunk_overlap: usize) -> Result<Self, CoreError> {
        let tokenizer = Regex::new(r"[a-z0-9]+").map_err(|e| {
            tracing::error!("failed to compile tokenizer: {}", e);
            CoreError::InternalServerError
        })?;

        let chunks = split_into_chunks(text, chunk_size, chunk_overlap)
            .into_iter()
            .map(|text| Chunk {
                terms: tokenize(&tokenizer, &text),
                text,
            })
            .collect();

        Ok(Self {
            chunks: Arc::new(chunks),
            tokenizer,
        })
    }

    /// Loads the corpus from disk. A missing file yields an empty corpus so the
    /// assistant still runs without nutrition lookups.
    pub async fn load(
        path: impl AsRef<Path>,
        chunk_size: usize,
        chunk_overlap: usize,
    ) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "knowledge base not found, nutrition lookups will return nothing");
                String::new()
            }
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "failed to read knowledge base {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        let retriever = Self::from_text(&text, chunk_size, chunk_overlap)?;
        info!(path = %path.display(), chunks = retriever.len(), "knowledge base loaded");
        Ok(retriever)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    fn search(&self, query: &str, limit: usize) -> Vec<String> {
        let query_terms = tokenize(&self.tokenizer, query);
        if query_terms.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(usize, usize)> = self
            .chunks
            .iter()
            .enumerate()
            .filter_map(|(position, chunk)| {
                let score = query_terms.intersection(&chunk.terms).count();
                (score > 0).then_some((score, position))
            })
            .collect();

        // Higher score first, earlier chunk on ties.
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        scored
            .into_iter()
            .take(limit)
            .map(|(_, position)| self.chunks[position].text.clone())
            .collect()
    }
}

impl KnowledgeRetriever for KeywordKnowledgeRetriever {
    async fn retrieve(&self, query: &str, limit: usize) -> Result<Vec<String>, CoreError> {
        Ok(self.search(query, limit))
    }
}

fn tokenize(tokenizer: &Regex, text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    tokenizer
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Splits `text` into windows of at most `chunk_size` characters, each starting
/// `chunk_size - chunk_overlap` characters after the previous one. Windows are
/// shortened to end on whitespace when one is available.
fn split_into_chunks(text: &str, chunk_size: usize, chunk_overlap: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let chunk_size = chunk_size.max(1);
    let overlap = chunk_overlap.min(chunk_size - 1);

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let mut end = (start + chunk_size).min(chars.len());
        if end < chars.len() {
            if let Some(space) = chars[start + overlap + 1..end]
                .iter()
                .rposition(|c| c.is_whitespace())
            {
                end = start + overlap + 1 + space;
            }
        }

        let chunk: String = chars[start..end].iter().collect();
        let trimmed = chunk.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }

        if end == chars.len() {
            break;
        }
        start = end.saturating_sub(overlap).max(start + 1);
    }

    chunks
}
