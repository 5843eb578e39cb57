use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use crate::ingest::{SourceFile, collect_files};
use crate::preprocess::PreprocessorRegistry;
use crate::report::ChunkResult;
use crate::splitter::TextSplitter;

/// Totals for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub files: usize,
    pub chunks: usize,
}

impl RunSummary {
    pub fn from_results(results: &[ChunkResult]) -> Self {
        Self {
            files: results.len(),
            chunks: results.iter().map(|r| r.chunks.len()).sum(),
        }
    }
}

/// Preprocess and split a single file
pub fn chunk_file(
    file: &SourceFile,
    splitter: &TextSplitter,
    registry: &PreprocessorRegistry,
) -> ChunkResult {
    let path = file.path.display().to_string();
    info!("Processing: {}", path);

    let text = registry.select(&file.extension).preprocess(&file.text);
    let chunks = splitter.split(&text);

    let oversized = chunks.iter().filter(|c| splitter.is_oversized(c)).count();
    if oversized > 0 {
        warn!(file = %path, oversized, "File produced chunks above the size limit");
    }
    info!("  -> Created {} chunks", chunks.len());

    ChunkResult { file: path, chunks }
}

/// Collect every recognized file under `root` and split each one.
///
/// Results follow discovery order.
pub fn process_directory(
    root: &Path,
    splitter: &TextSplitter,
    registry: &PreprocessorRegistry,
    exclude: &[String],
) -> Result<Vec<ChunkResult>> {
    let files = collect_files(root, exclude)
        .with_context(|| format!("Failed to collect files from {}", root.display()))?;

    let results: Vec<ChunkResult> = files
        .iter()
        .map(|file| chunk_file(file, splitter, registry))
        .collect();

    let summary = RunSummary::from_results(&results);
    info!(files = summary.files, chunks = summary.chunks, "Chunking complete");

    Ok(results)
}
