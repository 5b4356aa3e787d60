// file: src/embedding/mod.rs
// description: sentence embedding provider and cosine similarity
// reference: https://docs.rs/fastembed

use crate::config::EmbeddingConfig;
use crate::error::{Result, ServiceError};
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::info;

/// A text-to-vector capability. The production implementation wraps a
/// pretrained multilingual sentence encoder loaded once at startup; tests
/// substitute deterministic stubs.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Cosine similarity between two vectors, in [-1, 1].
///
/// Mismatched lengths or zero-magnitude inputs score 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}

/// Process-wide embedding model. Construction downloads/loads the ONNX model
/// and is expensive; do it once and share behind an `Arc`. Inference is
/// reentrant, so concurrent requests may call `embed` without coordination.
pub struct SentenceEmbedder {
    model: TextEmbedding,
}

impl SentenceEmbedder {
    pub fn new(config: &EmbeddingConfig) -> Result<Self> {
        let model_id = resolve_model(&config.model)?;
        info!("Loading embedding model: {}", config.model);

        let mut options = InitOptions::new(model_id)
            .with_show_download_progress(config.show_download_progress);
        if let Some(dir) = &config.cache_dir {
            options = options.with_cache_dir(dir.into());
        }

        let model =
            TextEmbedding::try_new(options).map_err(|e| ServiceError::Embedding(e.to_string()))?;

        Ok(Self { model })
    }
}

impl Embedder for SentenceEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut embeddings = self
            .model
            .embed(vec![text.to_string()], None)
            .map_err(|e| ServiceError::Embedding(e.to_string()))?;

        embeddings
            .pop()
            .ok_or_else(|| ServiceError::Embedding("model returned no vector".to_string()))
    }
}

fn resolve_model(name: &str) -> Result<EmbeddingModel> {
    match name {
        "paraphrase-multilingual-minilm-l12-v2" => Ok(EmbeddingModel::ParaphraseMLMiniLML12V2),
        "paraphrase-multilingual-mpnet-base-v2" => Ok(EmbeddingModel::ParaphraseMLMpnetBaseV2),
        "all-minilm-l6-v2" => Ok(EmbeddingModel::AllMiniLML6V2),
        other => Err(ServiceError::Config(format!(
            "unknown embedding model: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.5, 0.2, -0.3];
        let sim = cosine_similarity(&v, &v);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        let sim = cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]);
        assert!((sim + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_mismatched_lengths_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_cosine_zero_magnitude_scores_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_resolve_model_rejects_unknown_names() {
        assert!(resolve_model("paraphrase-multilingual-minilm-l12-v2").is_ok());
        assert!(resolve_model("made-up-model").is_err());
    }
}
