// Word list loading and synthetic dictionary generation
//
// A word list is plain text: words are separated by any whitespace and each
// word is cleaned to its lowercase alphabet letters before use. Tokens with
// no letters at all are dropped. Bytes that are not valid UTF-8 are read as
// replacement characters, which cleaning then drops like any other
// non-letter.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;
use triespell_core::normalize_word;

/// Error type for word list loading.
#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    /// The word list file could not be opened or read.
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an in-memory or streamed source failed.
    #[error("failed to read word list: {0}")]
    Read(#[from] io::Error),
}

/// Split a reader into lines, decoding invalid UTF-8 lossily.
///
/// Unlike [`BufRead::lines`], a stray Latin-1 byte does not end the stream
/// with an error. A trailing `\r` is left for the caller to trim.
pub fn lossy_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader
        .split(b'\n')
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
}

/// Read and clean every word from a buffered reader.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Vec<String>, WordlistError> {
    let mut words = Vec::new();
    for line in lossy_lines(reader) {
        let line = line?;
        words.extend(
            line.split_whitespace()
                .map(normalize_word)
                .filter(|word| !word.is_empty()),
        );
    }
    Ok(words)
}

/// Read and clean every word from a file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<String>, WordlistError> {
    let path = path.as_ref();
    let with_path = |source: io::Error| WordlistError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(with_path)?;
    let words = load_from_reader(BufReader::new(file)).map_err(|e| match e {
        WordlistError::Read(source) => with_path(source),
        other => other,
    })?;
    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Vocabulary used by [`generate_synthetic`].
pub const BASE_WORDS: &[&str] = &[
    "program", "algorithm", "structure", "performance", "optimization", "database",
    "application", "implementation", "efficiency", "scalability", "development",
    "architecture", "framework", "integration", "deployment", "configuration",
    "authentication", "authorization", "encryption", "validation", "testing", "debugging",
    "refactoring", "maintenance", "documentation", "repository", "version", "control",
    "pipeline", "container", "orchestration", "microservice", "middleware", "interface",
    "protocol", "network", "security", "infrastructure", "monitoring", "logging", "analytics",
    "processing", "computing", "storage", "memory", "cache", "queue", "stream", "batch", "real",
    "time", "synchronous", "asynchronous", "concurrent", "parallel", "distributed", "scalable",
    "reliable", "available", "consistent", "durable", "transaction", "isolation", "atomicity",
    "consistency", "durability", "serializable", "snapshot", "commit", "rollback", "recovery",
    "backup", "restore", "migration", "replication", "sharding", "partitioning", "indexing",
    "query", "execution", "planning", "optimization", "normalization", "denormalization",
    "schema", "model", "entity", "relationship", "attribute", "constraint", "foreign",
    "primary", "unique", "composite", "clustered", "nonclustered",
];

/// Misspellings of [`BASE_WORDS`] entries, for demos and benchmarks.
pub const SAMPLE_MISSPELLINGS: &[&str] = &[
    "progrm",
    "algoritm",
    "strutcure",
    "performnce",
    "optimiztion",
    "datbase",
    "applicaton",
    "implmentation",
    "efficency",
    "scalabilty",
];

/// Build a benchmark dictionary of `size` entries.
///
/// The first entries are [`BASE_WORDS`] themselves; entry `i` beyond that is
/// `BASE_WORDS[i % len]` followed by the decimal `i`. Digits are skipped on
/// insertion, so the suffixed entries raise the frequency of their base word
/// instead of adding new words.
pub fn generate_synthetic(size: usize) -> Vec<String> {
    (0..size)
        .map(|i| {
            let base = BASE_WORDS[i % BASE_WORDS.len()];
            if i < BASE_WORDS.len() {
                base.to_string()
            } else {
                format!("{base}{i}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_splits_on_whitespace_and_cleans() {
        let input = "Hello world\n  don't\tstop-me 42\n\nCAFE\u{00C9}\n";
        let words = load_from_reader(input.as_bytes()).unwrap();
        assert_eq!(words, vec!["hello", "world", "dont", "stopme", "cafe"]);
    }

    #[test]
    fn reader_drops_invalid_utf8_bytes() {
        let words = load_from_reader(&b"cache caf\xe9 queue\n\xff\xfe\nna\xefve\r\n"[..]).unwrap();
        assert_eq!(words, vec!["cache", "caf", "queue", "nave"]);
    }

    #[test]
    fn lossy_lines_keep_going_past_bad_bytes() {
        let lines: Vec<String> = lossy_lines(&b"caf\xe9\nqueue"[..])
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["caf\u{FFFD}", "queue"]);
    }

    #[test]
    fn reader_on_empty_input() {
        let words = load_from_reader("".as_bytes()).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn reader_keeps_duplicates() {
        let words = load_from_reader("cache cache Cache".as_bytes()).unwrap();
        assert_eq!(words, vec!["cache", "cache", "cache"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_from_path("/nonexistent/triespell/words.txt").unwrap_err();
        match &err {
            WordlistError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/triespell/words.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("/nonexistent/triespell/words.txt"));
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("triespell-wordlist-{}.txt", std::process::id()));
        std::fs::write(&path, "alpha beta\ngamma\n").unwrap();
        let words = load_from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn synthetic_starts_with_base_words() {
        let words = generate_synthetic(BASE_WORDS.len() + 2);
        assert_eq!(words[0], "program");
        assert_eq!(words[BASE_WORDS.len() - 1], "nonclustered");
        assert_eq!(words[BASE_WORDS.len()], format!("program{}", BASE_WORDS.len()));
        assert_eq!(words[BASE_WORDS.len() + 1], format!("algorithm{}", BASE_WORDS.len() + 1));
    }

    #[test]
    fn synthetic_size_is_exact() {
        assert_eq!(generate_synthetic(0).len(), 0);
        assert_eq!(generate_synthetic(3), vec!["program", "algorithm", "structure"]);
        assert_eq!(generate_synthetic(1234).len(), 1234);
    }

    #[test]
    fn synthetic_suffixes_collapse_into_base_words() {
        let mut dictionary = triespell_trie::PrefixDictionary::new();
        dictionary.extend(generate_synthetic(BASE_WORDS.len() * 3));
        // "optimization" appears twice in the vocabulary.
        assert_eq!(dictionary.word_count(), BASE_WORDS.len() - 1);
        assert_eq!(dictionary.frequency("program"), 3);
        assert_eq!(dictionary.frequency("optimization"), 6);
    }
}
