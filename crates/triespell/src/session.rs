// SpellSession: query statistics and timing around a SuggestionEngine
//
// The session only talks to the engine through its public operations; it
// never inspects trie nodes.

use std::fmt;
use std::time::{Duration, Instant};

use hashbrown::HashMap;
use tracing::debug;
use triespell_core::normalize_word;

use crate::suggestion::{SuggestionEngine, SuggestionOptions};

/// Default number of suggestions returned per query.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Running counters over the queries of a session.
#[derive(Debug, Clone, Default)]
pub struct QueryStats {
    total: u64,
    successful: u64,
    unresolved: HashMap<String, u64>,
}

impl QueryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one query and whether it produced any suggestion.
    ///
    /// Queries without suggestions are tallied under their normalized form;
    /// queries that normalize to nothing are only counted.
    pub fn record(&mut self, query: &str, found: bool) {
        self.total += 1;
        if found {
            self.successful += 1;
            return;
        }
        let key = normalize_word(query);
        if !key.is_empty() {
            *self.unresolved.entry(key).or_insert(0) += 1;
        }
    }

    pub fn total_queries(&self) -> u64 {
        self.total
    }

    /// Queries that returned at least one suggestion.
    pub fn successful_queries(&self) -> u64 {
        self.successful
    }

    /// Percentage of queries that returned at least one suggestion; 0 before
    /// the first query.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.successful as f64 * 100.0 / self.total as f64
    }

    /// How often the (normalized) query came back without suggestions.
    pub fn unresolved_count(&self, query: &str) -> u64 {
        self.unresolved
            .get(normalize_word(query).as_str())
            .copied()
            .unwrap_or(0)
    }

    /// The `limit` most frequent unresolved queries, most frequent first;
    /// equal counts are ordered alphabetically.
    pub fn most_unresolved(&self, limit: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .unresolved
            .iter()
            .map(|(word, &count)| (word.clone(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(limit);
        entries
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for QueryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Queries: {}", self.total)?;
        writeln!(f, "Successful Results: {}", self.successful)?;
        write!(f, "Accuracy: {:.2}%", self.accuracy())
    }
}

/// Timing of a batch of queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkReport {
    pub queries: usize,
    pub elapsed: Duration,
}

impl BenchmarkReport {
    /// Mean time per query; zero for an empty run.
    pub fn average(&self) -> Duration {
        match u32::try_from(self.queries) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.elapsed / n,
            Err(_) => Duration::from_secs_f64(self.elapsed.as_secs_f64() / self.queries as f64),
        }
    }

    /// Throughput; infinite when the run was too fast to measure.
    pub fn queries_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return f64::INFINITY;
        }
        self.queries as f64 / secs
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Queries: {}", self.queries)?;
        writeln!(f, "Total Time: {:.3} ms", self.elapsed.as_secs_f64() * 1000.0)?;
        writeln!(
            f,
            "Average Time per Query: {:.3} ms",
            self.average().as_secs_f64() * 1000.0
        )?;
        write!(f, "Queries per Second: {:.2}", self.queries_per_second())
    }
}

/// A suggestion engine together with the statistics of the queries it
/// served.
#[derive(Debug)]
pub struct SpellSession {
    engine: SuggestionEngine,
    stats: QueryStats,
    max_suggestions: usize,
}

impl Default for SpellSession {
    fn default() -> Self {
        Self::with_engine(SuggestionEngine::new())
    }
}

impl SpellSession {
    /// Create a session with an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session around an existing engine.
    pub fn with_engine(engine: SuggestionEngine) -> Self {
        Self {
            engine,
            stats: QueryStats::new(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Load a dictionary and return how long loading took.
    pub fn initialize<I, S>(&mut self, words: I) -> Duration
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut entries = 0usize;
        self.engine.load_dictionary(words.into_iter().inspect(|_| entries += 1));
        let elapsed = start.elapsed();
        debug!(
            entries,
            distinct = self.engine.word_count(),
            elapsed_ms = elapsed.as_millis() as u64,
            "dictionary loaded"
        );
        elapsed
    }

    /// Answer a query and record it in the statistics.
    pub fn process_query(&mut self, word: &str) -> Vec<String> {
        let suggestions = self.engine.get_suggestions(word, self.max_suggestions);
        self.stats.record(word, !suggestions.is_empty());
        debug!(query = word, found = suggestions.len(), "processed query");
        suggestions
    }

    /// Run `count` queries cycling through `queries` and time them.
    ///
    /// The queries are recorded in the statistics like any other. An empty
    /// query list runs nothing.
    pub fn run_benchmark(&mut self, queries: &[&str], count: usize) -> BenchmarkReport {
        if queries.is_empty() {
            return BenchmarkReport {
                queries: 0,
                elapsed: Duration::ZERO,
            };
        }
        let start = Instant::now();
        for query in queries.iter().cycle().take(count) {
            self.process_query(query);
        }
        let report = BenchmarkReport {
            queries: count,
            elapsed: start.elapsed(),
        };
        debug!(
            queries = count,
            qps = report.queries_per_second(),
            "benchmark finished"
        );
        report
    }

    pub fn add_word(&mut self, word: &str) {
        self.engine.add_word(word);
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.engine.contains_word(word)
    }

    pub fn word_count(&self) -> usize {
        self.engine.word_count()
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    /// Set the maximum number of suggestions to return.
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.max_suggestions = value;
    }

    /// Set the largest edit distance at which words are suggested.
    pub fn set_max_distance(&mut self, value: usize) {
        let options = SuggestionOptions {
            max_distance: value,
            ..self.engine.options()
        };
        self.engine.set_options(options);
    }

    pub fn stats(&self) -> &QueryStats {
        &self.stats
    }

    pub fn accuracy(&self) -> f64 {
        self.stats.accuracy()
    }

    pub fn total_queries(&self) -> u64 {
        self.stats.total_queries()
    }

    pub fn engine(&self) -> &SuggestionEngine {
        &self.engine
    }

    pub fn into_engine(self) -> SuggestionEngine {
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(words: &[&str]) -> SpellSession {
        let mut session = SpellSession::new();
        session.initialize(words);
        session
    }

    #[test]
    fn new_session_has_no_queries() {
        let session = SpellSession::new();
        assert_eq!(session.total_queries(), 0);
        assert_eq!(session.accuracy(), 0.0);
        assert_eq!(session.max_suggestions(), DEFAULT_MAX_SUGGESTIONS);
    }

    #[test]
    fn initialize_loads_words() {
        let session = session(&["cache", "queue", "cache"]);
        assert_eq!(session.word_count(), 2);
        assert!(session.contains_word("queue"));
    }

    #[test]
    fn process_query_updates_counters() {
        let mut session = session(&["cache", "queue"]);
        assert_eq!(session.process_query("cahce"), vec!["cache"]);
        assert_eq!(session.process_query("queue"), vec!["queue"]);
        assert!(session.process_query("zzzzzzzz").is_empty());
        assert_eq!(session.total_queries(), 3);
        assert_eq!(session.stats().successful_queries(), 2);
        assert!((session.accuracy() - 66.666).abs() < 0.01);
    }

    #[test]
    fn unresolved_queries_are_tallied() {
        let mut session = session(&["cache"]);
        session.process_query("Zzzzzz");
        session.process_query("zzzzzz");
        session.process_query("qqqqqq");
        session.process_query("!!!");
        assert_eq!(session.stats().unresolved_count("zzzzzz"), 2);
        assert_eq!(
            session.stats().most_unresolved(5),
            vec![("zzzzzz".to_string(), 2), ("qqqqqq".to_string(), 1)]
        );
        assert_eq!(session.stats().most_unresolved(1).len(), 1);
    }

    #[test]
    fn max_suggestions_limits_results() {
        let mut session = session(&["bat", "cat", "fat"]);
        session.set_max_suggestions(2);
        assert_eq!(session.process_query("hat").len(), 2);
        session.set_max_suggestions(0);
        assert!(session.process_query("hat").is_empty());
    }

    #[test]
    fn max_distance_is_configurable() {
        let mut session = session(&["program", "problem"]);
        assert_eq!(session.process_query("progrm"), vec!["program"]);
        session.set_max_distance(3);
        assert_eq!(session.process_query("progrm"), vec!["program", "problem"]);
        assert_eq!(session.engine().options().candidate_multiplier, 10);
    }

    #[test]
    fn add_word_after_initialize() {
        let mut session = session(&["cache"]);
        session.add_word("queue");
        assert!(session.contains_word("queue"));
    }

    #[test]
    fn benchmark_cycles_through_queries() {
        let mut session = session(&["cache", "queue"]);
        let report = session.run_benchmark(&["cahce", "qeue", "nothingclose"], 7);
        assert_eq!(report.queries, 7);
        assert_eq!(session.total_queries(), 7);
        // cahce, qeue, nothing, cahce, qeue, nothing, cahce
        assert_eq!(session.stats().successful_queries(), 5);
    }

    #[test]
    fn benchmark_without_queries_is_empty() {
        let mut session = SpellSession::new();
        let report = session.run_benchmark(&[], 100);
        assert_eq!(report.queries, 0);
        assert_eq!(session.total_queries(), 0);
    }

    #[test]
    fn report_arithmetic() {
        let report = BenchmarkReport {
            queries: 4,
            elapsed: Duration::from_millis(200),
        };
        assert_eq!(report.average(), Duration::from_millis(50));
        assert!((report.queries_per_second() - 20.0).abs() < 1e-9);

        let empty = BenchmarkReport {
            queries: 0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(empty.average(), Duration::ZERO);
    }

    #[test]
    fn stats_display() {
        let mut stats = QueryStats::new();
        stats.record("a", true);
        stats.record("b", false);
        assert_eq!(
            stats.to_string(),
            "Total Queries: 2\nSuccessful Results: 1\nAccuracy: 50.00%"
        );
        stats.reset();
        assert_eq!(stats.total_queries(), 0);
    }
}
