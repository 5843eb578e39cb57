/// Pick the coarsest separator that occurs in `text`.
///
/// Returns the chosen separator together with the finer separators that
/// follow it. The empty separator always matches, so a hierarchy ending in
/// `""` never falls off the end; if it somehow does, `""` is used with no
/// finer separators left.
pub fn select_separator<'s>(text: &str, separators: &'s [String]) -> (&'s str, &'s [String]) {
    for (i, separator) in separators.iter().enumerate() {
        if separator.is_empty() || text.contains(separator.as_str()) {
            return (separator.as_str(), &separators[i + 1..]);
        }
    }

    ("", &[])
}

/// Cut `text` on literal occurrences of `separator`.
///
/// The empty separator yields one piece per `char`.
pub fn split_on<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        text.char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect()
    } else {
        text.split(separator).collect()
    }
}
