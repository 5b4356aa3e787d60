// file: src/models/mod.rs
// description: data model module exports
// reference: internal module structure

pub mod document;
pub mod result;

pub use document::UploadedDocument;
pub use result::{AnalyzeResponse, ComparisonResult, SourceType};
