use super::*;

const SAMPLE: &str = "AAAAA BBBBB\n\nCCCCC DDDDD";

fn splitter(size: usize, overlap: usize, separators: &[&str]) -> TextSplitter {
    let config = ChunkingConfig::new(size, overlap).with_separators(separators.iter().copied());
    TextSplitter::new(config).unwrap()
}

fn prose(words: usize) -> String {
    (0..words)
        .map(|i| format!("word{i:03}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Position of `needle` as a contiguous subsequence of `haystack`, at or after `from`
fn find_words(haystack: &[&str], needle: &[&str], from: usize) -> Option<usize> {
    (from..=haystack.len().saturating_sub(needle.len()))
        .find(|&i| haystack[i..i + needle.len()] == *needle)
}

#[test]
fn test_paragraphs_that_fit_are_not_merged() {
    let chunks = splitter(11, 2, &["\n\n", " ", ""]).split(SAMPLE);
    assert_eq!(chunks, vec!["AAAAA BBBBB", "CCCCC DDDDD"]);
}

#[test]
fn test_words_split_without_sub_word_overlap() {
    let chunks = splitter(6, 2, &["\n\n", " ", ""]).split(SAMPLE);
    assert_eq!(chunks, vec!["AAAAA", "BBBBB", "CCCCC", "DDDDD"]);
}

#[test]
fn test_empty_and_whitespace_text() {
    let splitter = TextSplitter::default();
    assert!(splitter.split("").is_empty());
    assert!(splitter.split("   \n\n  \n").is_empty());
}

#[test]
fn test_single_character() {
    assert_eq!(TextSplitter::default().split("x"), vec!["x"]);
}

#[test]
fn test_short_text_is_returned_unchanged() {
    let text = "fn main() {\n    println!(\"hi\");\n}\n\n\n// trailing\n";
    let chunks = TextSplitter::default().split(text);
    assert_eq!(chunks, vec![text]);
}

#[test]
fn test_text_of_exactly_chunk_size() {
    let text = "a".repeat(50);
    let chunks = splitter(50, 10, DEFAULT_SEPARATORS).split(&text);
    assert_eq!(chunks, vec![text]);
}

#[test]
fn test_long_token_falls_through_to_characters() {
    let text = "abcdefghijklmnopqrstuvwxyz";
    let chunks = splitter(10, 3, DEFAULT_SEPARATORS).split(text);

    assert_eq!(
        chunks,
        vec!["abcdefghij", "hijklmnopq", "opqrstuvwx", "vwxyz"]
    );
    for pair in chunks.windows(2) {
        let prev = &pair[0];
        assert!(pair[1].starts_with(&prev[prev.len() - 3..]));
    }
}

#[test]
fn test_size_bound_holds() {
    let text = format!(
        "{}\n\n{}\n{}\n\n{}",
        prose(40),
        "x".repeat(75),
        prose(12),
        prose(90)
    );
    let splitter = splitter(60, 15, DEFAULT_SEPARATORS);

    let chunks = splitter.split(&text);
    assert!(chunks.len() > 5);
    for chunk in &chunks {
        assert!(!splitter.is_oversized(chunk), "{chunk:?} is oversized");
    }
}

#[test]
fn test_counts_characters_not_bytes() {
    let text = "é".repeat(12);
    let chunks = splitter(6, 0, DEFAULT_SEPARATORS).split(&text);
    assert_eq!(chunks, vec!["é".repeat(6), "é".repeat(6)]);
}

#[test]
fn test_coverage_and_fragment_aligned_overlap() {
    let text = prose(200);
    let words: Vec<&str> = text.split(' ').collect();
    let chunks = splitter(100, 30, DEFAULT_SEPARATORS).split(&text);

    let mut prev_start = 0;
    let mut prev_end = 0;
    for (i, chunk) in chunks.iter().enumerate() {
        let chunk_words: Vec<&str> = chunk.split(' ').collect();
        let start = find_words(&words, &chunk_words, prev_start)
            .unwrap_or_else(|| panic!("chunk {i} is not a contiguous run of words"));
        let end = start + chunk_words.len();

        if i == 0 {
            assert_eq!(start, 0);
        } else {
            // No gap, forward progress, and the shared words are a whole suffix
            assert!(start <= prev_end, "gap before chunk {i}");
            assert!(end > prev_end, "chunk {i} makes no progress");
            let shared = prev_end - start;
            assert!(shared > 0, "chunk {i} carries no overlap");
            let shared_len = words[start..prev_end].join(" ").chars().count();
            assert!(shared_len <= 30);
        }

        prev_start = start;
        prev_end = end;
    }
    assert_eq!(prev_end, words.len());
}

#[test]
fn test_no_overlap_when_fragment_exceeds_budget() {
    let text = format!("{}\n\n{}", "a".repeat(8), "b".repeat(8));
    let chunks = splitter(10, 4, DEFAULT_SEPARATORS).split(&text);
    assert_eq!(chunks, vec!["a".repeat(8), "b".repeat(8)]);
}

#[test]
fn test_line_runs_rejoined_with_newline() {
    let text = "one\ntwo\nthree\nfour\nfive";
    let chunks = splitter(14, 0, DEFAULT_SEPARATORS).split(text);
    assert_eq!(chunks, vec!["one\ntwo\nthree", "four\nfive"]);
}

#[test]
fn test_deterministic() {
    let text = format!("{}\n{}\n\n{}", prose(70), "y".repeat(130), prose(33));
    let splitter = splitter(64, 16, DEFAULT_SEPARATORS);
    assert_eq!(splitter.split(&text), splitter.split(&text));
}

#[test]
fn test_free_function_validates() {
    let bad = ChunkingConfig::new(10, 10);
    assert_eq!(
        split("anything", &bad),
        Err(ConfigError::OverlapTooLarge {
            overlap: 10,
            size: 10
        })
    );

    let bad = ChunkingConfig::default().with_separators(["\n"]);
    assert!(matches!(
        split("anything", &bad),
        Err(ConfigError::MissingTerminalSeparator(_))
    ));

    let ok = split(SAMPLE, &ChunkingConfig::new(11, 2)).unwrap();
    assert_eq!(ok, vec!["AAAAA BBBBB", "CCCCC DDDDD"]);
}

#[test]
fn test_splitter_rejects_invalid_config() {
    assert!(TextSplitter::new(ChunkingConfig::new(0, 0)).is_err());
    assert!(TextSplitter::new(ChunkingConfig::new(100, 200)).is_err());
}

#[test]
fn test_splitter_shared_across_threads() {
    let splitter = std::sync::Arc::new(splitter(40, 8, DEFAULT_SEPARATORS));
    let expected = splitter.split(&prose(60));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let splitter = splitter.clone();
            std::thread::spawn(move || splitter.split(&prose(60)))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
