// file: src/utils/mod.rs
// description: shared utility module exports
// reference: internal module structure

pub mod logging;
