use super::ConfigError;

/// Maximum characters per chunk unless configured otherwise
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Characters of trailing context carried into the next chunk
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Paragraph, line, word, character
pub const DEFAULT_SEPARATORS: &[&str] = &["\n\n", "\n", " ", ""];

/// Size and separator settings for a split.
///
/// Lengths are counted in `char`s, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkingConfig {
    /// Upper bound on chunk length
    pub chunk_size: usize,
    /// Target length of context shared by adjacent chunks
    pub chunk_overlap: usize,
    /// Split markers ordered coarse to fine, ending in `""`
    pub separators: Vec<String>,
}

impl ChunkingConfig {
    /// Create a config with the default separator hierarchy
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Set the maximum chunk length
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Set the overlap between adjacent chunks
    pub fn with_chunk_overlap(mut self, overlap: usize) -> Self {
        self.chunk_overlap = overlap;
        self
    }

    /// Replace the separator hierarchy
    pub fn with_separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Check the size and separator invariants.
    ///
    /// The overlap must be strictly smaller than the chunk size or the merge
    /// window can never advance, and the hierarchy must end in `""` or the
    /// recursive split has no guaranteed floor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize);
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(ConfigError::OverlapTooLarge {
                overlap: self.chunk_overlap,
                size: self.chunk_size,
            });
        }

        match self.separators.last() {
            None => Err(ConfigError::EmptySeparators),
            Some(last) if !last.is_empty() => {
                Err(ConfigError::MissingTerminalSeparator(last.clone()))
            }
            Some(_) => Ok(()),
        }
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP)
    }
}
