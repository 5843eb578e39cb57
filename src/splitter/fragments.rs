use super::char_len;
use super::separators::{select_separator, split_on};
use tracing::debug;

/// Consecutive fragments cut from one piece of text with one separator.
///
/// Runs are the unit of merging: fragments inside a run are rejoined with
/// `separator`, fragments from different runs never are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRun<'a> {
    /// Separator the fragments were cut on, reused as join glue
    pub separator: &'a str,
    /// Fragments in original left-to-right order
    pub fragments: Vec<&'a str>,
}

impl<'a> FragmentRun<'a> {
    fn new(separator: &'a str) -> Self {
        Self {
            separator,
            fragments: Vec::new(),
        }
    }
}

/// Recursively cut `text` into fragments no longer than `chunk_size`.
///
/// Each level uses the coarsest separator present in its text. Pieces that
/// still exceed `chunk_size` are cut again with the finer separators, which
/// closes the current run and splices the finer runs in its place. A piece
/// that is oversized with no finer separator left is emitted as a run of its
/// own (an atomic fragment).
///
/// Text that already fits is returned as a single fragment, untouched.
pub fn split_fragments<'a>(
    text: &'a str,
    separators: &'a [String],
    chunk_size: usize,
) -> Vec<FragmentRun<'a>> {
    let mut runs = Vec::new();

    if text.is_empty() {
        return runs;
    }

    if char_len(text) <= chunk_size {
        runs.push(FragmentRun {
            separator: "",
            fragments: vec![text],
        });
        return runs;
    }

    collect_runs(text, separators, chunk_size, 0, &mut runs);
    runs
}

fn collect_runs<'a>(
    text: &'a str,
    separators: &'a [String],
    chunk_size: usize,
    depth: usize,
    runs: &mut Vec<FragmentRun<'a>>,
) {
    let (separator, finer) = select_separator(text, separators);
    debug!(depth, separator = ?separator, len = char_len(text), "Splitting oversized text");

    let mut pending = FragmentRun::new(separator);

    for piece in split_on(text, separator) {
        // Adjacent separators leave empty pieces
        if piece.is_empty() {
            continue;
        }

        if char_len(piece) <= chunk_size {
            pending.fragments.push(piece);
            continue;
        }

        if !pending.fragments.is_empty() {
            runs.push(std::mem::replace(&mut pending, FragmentRun::new(separator)));
        }

        if finer.is_empty() {
            runs.push(FragmentRun {
                separator,
                fragments: vec![piece],
            });
        } else {
            collect_runs(piece, finer, chunk_size, depth + 1, runs);
        }
    }

    if !pending.fragments.is_empty() {
        runs.push(pending);
    }
}
