use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Extensions (lowercase, without the dot) treated as chunkable text
pub const RECOGNIZED_EXTENSIONS: &[&str] = &[
    "vue", "ts", "js", "tsx", "jsx", "json", "txt", "md", "css", "scss", "html", "yaml", "yml",
    "xml",
];

/// A discovered file with its decoded contents
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Root directory joined with the path relative to it
    pub path: PathBuf,
    /// Lowercased extension, e.g. "vue"
    pub extension: String,
    /// File contents; invalid UTF-8 is replaced with U+FFFD
    pub text: String,
}

/// Return the lowercased extension if the file type is recognized
pub fn recognized_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    RECOGNIZED_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}

/// Check if an entry's name is on the exclude list
pub fn is_excluded(entry: &DirEntry, exclude: &[String]) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| exclude.iter().any(|e| e == name))
}

/// Make sure `root` exists and is a directory
pub fn check_root(root: &Path) -> Result<()> {
    if !root.exists() {
        bail!("Directory \"{}\" does not exist", root.display());
    }
    if !root.is_dir() {
        bail!("\"{}\" is not a directory", root.display());
    }
    Ok(())
}

/// Walk `root` depth-first and read every recognized file.
///
/// Entries are visited in file-name order so discovery order is stable
/// across runs. Symlinks are not followed. Files that fail to read are
/// logged and skipped.
pub fn collect_files(root: &Path, exclude: &[String]) -> Result<Vec<SourceFile>> {
    check_root(root)?;
    info!(root = %root.display(), "Scanning directory");

    let mut files = Vec::new();
    let mut total_bytes = 0usize;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded(e, exclude));

    for entry in walker {
        let entry = entry.context("Failed to read directory entry")?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(extension) = recognized_extension(path) else {
            continue;
        };

        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read file, skipping");
                continue;
            }
        };
        total_bytes += bytes.len();

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                debug!(path = %path.display(), "File is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        files.push(SourceFile {
            path: path.to_path_buf(),
            extension,
            text,
        });
    }

    info!(files = files.len(), bytes = total_bytes, "Found files");
    Ok(files)
}
