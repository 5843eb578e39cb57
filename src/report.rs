use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the JSON report inside the output directory
pub const REPORT_FILE_NAME: &str = "chunks-output.json";

/// Directory name for per-chunk Markdown files inside the output directory
pub const CHUNKS_DIR_NAME: &str = "chunks-output";

/// Chunks produced for one input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkResult {
    pub file: String,
    pub chunks: Vec<String>,
}

/// Write every result to `output_dir/chunks-output.json` as pretty JSON
pub fn write_json_report(results: &[ChunkResult], output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(REPORT_FILE_NAME);
    let json = serde_json::to_string_pretty(results).context("Failed to serialize chunk report")?;

    fs::write(&path, json)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    info!(path = %path.display(), "Wrote JSON report");
    Ok(path)
}

/// Render one chunk as a standalone Markdown document.
///
/// `global_index` counts across all files from 1; `index` counts within
/// the file from 1.
pub fn render_chunk_markdown(
    global_index: usize,
    file: &str,
    index: usize,
    count: usize,
    chunk: &str,
) -> String {
    format!(
        "# Chunk {global_index}\n\n**Source File:** {file}\n**Chunk Index:** {index}/{count}\n\n---\n\n{chunk}"
    )
}

/// File name for the chunk with the given global index
pub fn chunk_file_name(global_index: usize) -> String {
    format!("chunk-{global_index:05}.md")
}

/// Write one Markdown file per chunk into `output_dir/chunks-output/`.
///
/// The directory is removed and recreated first so stale chunks from a
/// previous run never linger. Returns the directory and the number of files
/// written.
pub fn write_markdown_chunks(
    results: &[ChunkResult],
    output_dir: &Path,
) -> Result<(PathBuf, usize)> {
    let chunks_dir = output_dir.join(CHUNKS_DIR_NAME);

    if chunks_dir.exists() {
        fs::remove_dir_all(&chunks_dir)
            .with_context(|| format!("Failed to clear {}", chunks_dir.display()))?;
    }
    fs::create_dir_all(&chunks_dir)
        .with_context(|| format!("Failed to create {}", chunks_dir.display()))?;

    let mut global_index = 0;
    for result in results {
        let count = result.chunks.len();
        for (i, chunk) in result.chunks.iter().enumerate() {
            global_index += 1;
            let path = chunks_dir.join(chunk_file_name(global_index));
            let content = render_chunk_markdown(global_index, &result.file, i + 1, count, chunk);

            fs::write(&path, content)
                .with_context(|| format!("Failed to write chunk file: {}", path.display()))?;
        }
    }

    info!(dir = %chunks_dir.display(), files = global_index, "Wrote Markdown chunks");
    Ok((chunks_dir, global_index))
}
