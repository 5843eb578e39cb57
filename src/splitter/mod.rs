//! Recursive, separator-hierarchy text splitting.
//!
//! Text is cut on the coarsest separator it contains (paragraph, then line,
//! then word, then character). Pieces that are still too long are cut again
//! with the finer separators. The resulting fragments are packed back into
//! chunks of at most `chunk_size` characters, rejoined with the separator
//! they were cut on, and consecutive chunks share up to `chunk_overlap`
//! characters of whole trailing fragments.
//!
//! ```
//! use code_chunker::{ChunkingConfig, TextSplitter};
//!
//! let config = ChunkingConfig::new(11, 2).with_separators(["\n\n", " ", ""]);
//! let splitter = TextSplitter::new(config).unwrap();
//!
//! let chunks = splitter.split("AAAAA BBBBB\n\nCCCCC DDDDD");
//! assert_eq!(chunks, vec!["AAAAA BBBBB", "CCCCC DDDDD"]);
//! ```

mod config;
mod error;
mod fragments;
mod merge;
mod separators;

#[cfg(test)]
mod tests;

pub use config::{ChunkingConfig, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_SEPARATORS};
pub use error::ConfigError;
pub use fragments::{FragmentRun, split_fragments};
pub use merge::merge_fragments;
pub use separators::select_separator;

/// Length of `text` in characters
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// A validated splitter. Holds no mutable state, so one instance can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct TextSplitter {
    config: ChunkingConfig,
}

impl TextSplitter {
    /// Validate `config` and build a splitter from it
    pub fn new(config: ChunkingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this splitter was built with
    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Split `text` into ordered chunks.
    ///
    /// Empty or whitespace-only text produces no chunks. Text no longer than
    /// `chunk_size` comes back as a single chunk, unchanged.
    pub fn split(&self, text: &str) -> Vec<String> {
        split_validated(text, &self.config)
    }

    /// Whether `chunk` exceeds the configured size.
    ///
    /// Only an atomic fragment can do this: one that was still too long after
    /// the last separator in the hierarchy was applied. With the terminal
    /// `""` separator that never happens, since single characters always fit.
    pub fn is_oversized(&self, chunk: &str) -> bool {
        char_len(chunk) > self.config.chunk_size
    }
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self {
            config: ChunkingConfig::default(),
        }
    }
}

/// Validate `config`, then split `text` with it
pub fn split(text: &str, config: &ChunkingConfig) -> Result<Vec<String>, ConfigError> {
    config.validate()?;
    Ok(split_validated(text, config))
}

fn split_validated(text: &str, config: &ChunkingConfig) -> Vec<String> {
    split_fragments(text, &config.separators, config.chunk_size)
        .iter()
        .flat_map(|run| merge_fragments(run, config.chunk_size, config.chunk_overlap))
        .collect()
}
