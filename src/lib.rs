// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod analysis;
pub mod config;
pub mod embedding;
pub mod error;
pub mod extractor;
pub mod models;
pub mod search;
pub mod server;
pub mod utils;

pub use analysis::{find_matches, AnalysisPipeline};
pub use config::{Config, EmbeddingConfig, SearchConfig, ServerConfig};
pub use embedding::{cosine_similarity, Embedder, SentenceEmbedder};
pub use error::{Result, ServiceError};
pub use extractor::TextExtractor;
pub use models::{AnalyzeResponse, ComparisonResult, SourceType, UploadedDocument};
pub use search::{DelayPolicy, DuckDuckGoClient, NoDelay, RandomDelay, SearchHit, SearchProvider};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _extractor = TextExtractor::new();
    }
}
