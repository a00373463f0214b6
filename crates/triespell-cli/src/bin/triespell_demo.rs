// triespell-demo: End-to-end demonstration on a generated dictionary.
//
// Builds a large synthetic dictionary, corrects the sample misspellings,
// measures throughput over repeated queries, and prints session statistics.
//
// Usage:
//   triespell-demo [-s SIZE] [-q QUERIES]
//
// Options:
//   -s, --size N       Dictionary entries to generate (default: 500000)
//   -q, --queries N    Queries in the throughput test (default: 1000)
//   -h, --help         Print help

use std::time::Instant;

use triespell::SpellSession;
use triespell::wordlist::{SAMPLE_MISSPELLINGS, generate_synthetic};

const DEFAULT_SIZE: usize = 500_000;
const DEFAULT_QUERIES: usize = 1000;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if triespell_cli::wants_help(&args) {
        println!("triespell-demo: Suggestion demo on a generated dictionary.");
        println!();
        println!("Usage: triespell-demo [-s SIZE] [-q QUERIES]");
        println!();
        println!("Options:");
        println!("  -s, --size N       Dictionary entries to generate (default: {DEFAULT_SIZE})");
        println!("  -q, --queries N    Queries in the throughput test (default: {DEFAULT_QUERIES})");
        println!("  -h, --help         Print this help");
        return;
    }

    triespell_cli::init_tracing();

    let mut size = DEFAULT_SIZE;
    let mut queries = DEFAULT_QUERIES;
    let mut skip_next = false;
    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "-s" | "--size" => {
                size = triespell_cli::parse_count(arg, args.get(i + 1));
                skip_next = true;
            }
            "-q" | "--queries" => {
                queries = triespell_cli::parse_count(arg, args.get(i + 1));
                skip_next = true;
            }
            other => triespell_cli::fatal(&format!("unknown argument: {other}")),
        }
    }

    let dictionary = generate_synthetic(size);
    let mut session = SpellSession::new();
    let elapsed = session.initialize(&dictionary);
    println!(
        "Dictionary loaded: {} words in {} ms ({} distinct)",
        dictionary.len(),
        elapsed.as_millis(),
        session.word_count()
    );

    println!();
    println!("Processing test queries:");
    for query in SAMPLE_MISSPELLINGS {
        let start = Instant::now();
        let suggestions = session.process_query(query);
        let elapsed = start.elapsed();
        println!(
            "Query: '{query}' -> Suggestions: {suggestions:?} (Response time: {:.3} ms)",
            elapsed.as_secs_f64() * 1000.0
        );
    }

    println!();
    println!("Running performance test with {queries} queries...");
    let report = session.run_benchmark(SAMPLE_MISSPELLINGS, queries);
    println!("Performance: {:.2} queries/second", report.queries_per_second());

    println!();
    println!("System Statistics:");
    println!("{}", session.stats());
}
