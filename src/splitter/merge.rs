use super::char_len;
use super::fragments::FragmentRun;
use tracing::warn;

/// Pack a run of fragments into chunks of at most `chunk_size` characters.
///
/// The window `fragments[start..end]` grows greedily. When the next fragment
/// no longer fits, the window is emitted and its head dropped until what
/// remains is at most `chunk_overlap` long and leaves room for the incoming
/// fragment; the survivors open the next chunk. Overlap is therefore always
/// made of whole fragments, never of partial ones.
///
/// A fragment longer than `chunk_size` on its own is emitted unmerged and
/// resets the window. Whitespace-only chunks are dropped.
pub fn merge_fragments(
    run: &FragmentRun<'_>,
    chunk_size: usize,
    chunk_overlap: usize,
) -> Vec<String> {
    let fragments = &run.fragments;
    let lengths: Vec<usize> = fragments.iter().map(|f| char_len(f)).collect();
    let sep_len = char_len(run.separator);

    let mut chunks = Vec::new();
    let mut start = 0;
    // Joined length of fragments[start..end]
    let mut total = 0;

    for end in 0..fragments.len() {
        let len = lengths[end];

        if len > chunk_size {
            if end > start {
                push_chunk(&mut chunks, &fragments[start..end], run.separator);
            }
            warn!(
                len,
                chunk_size, "Fragment cannot be split further; emitting oversized chunk"
            );
            push_chunk(&mut chunks, &fragments[end..=end], run.separator);
            start = end + 1;
            total = 0;
            continue;
        }

        let glue = if end > start { sep_len } else { 0 };
        if total + glue + len > chunk_size {
            if end > start {
                push_chunk(&mut chunks, &fragments[start..end], run.separator);
            }

            while end > start && (total > chunk_overlap || total + sep_len + len > chunk_size) {
                let dropped = lengths[start] + if end - start > 1 { sep_len } else { 0 };
                total -= dropped;
                start += 1;
            }
        }

        total += len + if end > start { sep_len } else { 0 };
    }

    if start < fragments.len() {
        push_chunk(&mut chunks, &fragments[start..], run.separator);
    }

    chunks
}

fn push_chunk(chunks: &mut Vec<String>, window: &[&str], separator: &str) {
    let text = window.join(separator);
    if !text.trim().is_empty() {
        chunks.push(text);
    }
}
