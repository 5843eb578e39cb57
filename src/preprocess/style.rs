use super::Preprocessor;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

static STYLE_BLOCK: OnceLock<Regex> = OnceLock::new();

/// Removes `<style ...>...</style>` blocks from single-file components.
///
/// Matching is case-insensitive and non-greedy, so each block ends at its
/// own closing tag and markup between two blocks survives.
pub struct StyleBlockStripper;

impl StyleBlockStripper {
    fn pattern() -> &'static Regex {
        STYLE_BLOCK.get_or_init(|| {
            Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("style block pattern is valid")
        })
    }
}

impl Preprocessor for StyleBlockStripper {
    fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Self::pattern().replace_all(text, "")
    }
}
