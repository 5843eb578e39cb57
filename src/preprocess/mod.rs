mod registry;
mod style;

pub use registry::PreprocessorRegistry;
pub use style::StyleBlockStripper;

use std::borrow::Cow;

/// Rewrites file contents before they are split
pub trait Preprocessor: Send + Sync {
    /// Return the text to split. Borrow when nothing changes.
    fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Leaves text untouched
pub struct Passthrough;

impl Preprocessor for Passthrough {
    fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}
