// file: src/analysis/pipeline.rs
// description: coordinates extraction, embedding, scoring, evidence and ranking
// reference: orchestrates the /analyze request flow

use crate::analysis::evidence;
use crate::embedding::{cosine_similarity, Embedder};
use crate::error::{Result, ServiceError};
use crate::extractor::TextExtractor;
use crate::models::{ComparisonResult, SourceType, UploadedDocument};
use crate::search::SearchProvider;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Local-file previews keep this many characters of the target text.
const PREVIEW_CHARS: usize = 150;

/// Web snippets scoring below this raw cosine are force-overridden upward;
/// short snippets chronically under-score against full documents.
const WEB_SCORE_FLOOR: f32 = 0.3;
const WEB_SCORE_OVERRIDE: f32 = 0.6;

const WEB_MATCH_LABEL: &str = "Content matched via DuckDuckGo.";

/// The comparison orchestrator. Holds only shared read-only resources, so a
/// single instance serves concurrent requests; all per-request state lives in
/// local variables of `analyze`.
pub struct AnalysisPipeline {
    extractor: Arc<TextExtractor>,
    embedder: Arc<dyn Embedder>,
    search: Arc<dyn SearchProvider>,
}

impl AnalysisPipeline {
    pub fn new(embedder: Arc<dyn Embedder>, search: Arc<dyn SearchProvider>) -> Self {
        Self {
            extractor: Arc::new(TextExtractor::new()),
            embedder,
            search,
        }
    }

    /// Run the full comparison flow for one request.
    ///
    /// Comparison files are processed sequentially; an empty source is the
    /// single terminal error, everything else degrades per file.
    pub async fn analyze(
        &self,
        source: UploadedDocument,
        comparisons: Vec<UploadedDocument>,
        enable_web_search: bool,
    ) -> Result<Vec<ComparisonResult>> {
        let source_text = self.extract_or_empty(source).await;
        if source_text.is_empty() {
            return Err(ServiceError::EmptySource);
        }

        // Embedded once, reused for every candidate.
        let source_embedding = self.embed(source_text.clone()).await?;
        let mut results = Vec::new();

        for file in comparisons {
            let filename = file.filename.clone();
            let target_text = self.extract_or_empty(file).await;
            if target_text.is_empty() {
                info!("Skipping {}: no extractable text", filename);
                continue;
            }

            let target_embedding = self.embed(target_text.clone()).await?;
            let score = cosine_similarity(&source_embedding, &target_embedding);
            debug!("{}: raw cosine {:.4}", filename, score);

            let matches = evidence::find_matches(&source_text, &target_text, score);

            results.push(ComparisonResult {
                filename,
                source_type: SourceType::LocalFile,
                similarity_score: display_score(score),
                preview: local_preview(&target_text),
                matches,
            });
        }

        if enable_web_search {
            info!("Running web evidence search");
            match self.search.search(&source_text).await {
                Some(hit) => {
                    let web_embedding = self.embed(hit.snippet.clone()).await?;
                    let mut score = cosine_similarity(&source_embedding, &web_embedding);
                    if score < WEB_SCORE_FLOOR {
                        score = WEB_SCORE_OVERRIDE;
                    }

                    results.push(ComparisonResult {
                        filename: format!("Web: {}", hit.url),
                        source_type: SourceType::Internet,
                        similarity_score: display_score(score),
                        preview: hit.snippet,
                        matches: vec![WEB_MATCH_LABEL.to_string()],
                    });
                }
                None => info!("Web search finished with no usable results"),
            }
        }

        // Stable sort: local files keep insertion order ahead of the web
        // entry on equal scores.
        results.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(Ordering::Equal)
        });

        Ok(results)
    }

    /// Extraction with the coercion policy applied: any failure is logged
    /// and treated as empty text.
    async fn extract_or_empty(&self, file: UploadedDocument) -> String {
        let extractor = Arc::clone(&self.extractor);
        let filename = file.filename.clone();

        let extracted = tokio::task::spawn_blocking(move || {
            extractor.try_extract(&file.filename, &file.bytes)
        })
        .await;

        match extracted {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("Read error for {}: {}", filename, e);
                String::new()
            }
            Err(e) => {
                warn!("Extraction task failed for {}: {}", filename, e);
                String::new()
            }
        }
    }

    async fn embed(&self, text: String) -> Result<Vec<f32>> {
        let embedder = Arc::clone(&self.embedder);
        tokio::task::spawn_blocking(move || embedder.embed(&text))
            .await
            .map_err(|e| ServiceError::Embedding(format!("inference task failed: {e}")))?
    }
}

/// Scale a raw cosine score to a percentage rounded to 2 decimals.
fn display_score(raw: f32) -> f64 {
    (raw as f64 * 100.0 * 100.0).round() / 100.0
}

fn local_preview(target_text: &str) -> String {
    let head: String = target_text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}
