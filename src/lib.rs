// Public API exports
pub mod ingest;
pub mod pipeline;
pub mod preprocess;
pub mod report;
pub mod splitter;

// Re-export main types for convenience
pub use splitter::{
    ChunkingConfig, ConfigError, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_SEPARATORS,
    TextSplitter, split,
};

pub use ingest::{RECOGNIZED_EXTENSIONS, SourceFile, collect_files};
pub use pipeline::{RunSummary, chunk_file, process_directory};
pub use preprocess::{Passthrough, Preprocessor, PreprocessorRegistry, StyleBlockStripper};
pub use report::{ChunkResult, write_json_report, write_markdown_chunks};
