// file: src/analysis/mod.rs
// description: comparison pipeline module exports
// reference: internal module structure

pub mod evidence;
pub mod pipeline;

pub use evidence::find_matches;
pub use pipeline::AnalysisPipeline;
