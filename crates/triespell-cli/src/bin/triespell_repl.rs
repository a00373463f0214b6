// triespell-repl: Interactive spelling correction.
//
// Loads a word list, then reads one word per prompt and prints either a
// confirmation or the suggested corrections, with the response time.
//
// Commands:
//   exit        Quit
//   benchmark   Time 1000 queries over the sample misspellings
//   stats       Print query statistics for this session
//
// Usage:
//   triespell-repl [-d DICT_PATH] [-n N]

use std::io::{self, BufRead, Write};
use std::time::Instant;

use triespell::wordlist::SAMPLE_MISSPELLINGS;

const BENCHMARK_QUERIES: usize = 1000;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = triespell_cli::parse_dict_path(&args);

    if triespell_cli::wants_help(&args) {
        println!("triespell-repl: Interactive spelling correction.");
        println!();
        println!("Usage: triespell-repl [-d DICT_PATH] [-n N]");
        println!();
        println!("Commands at the prompt:");
        println!("  exit        Quit");
        println!("  benchmark   Time {BENCHMARK_QUERIES} queries over sample misspellings");
        println!("  stats       Print query statistics");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Word list file or directory containing dictionary.txt");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 5)");
        println!("  -h, --help               Print this help");
        return;
    }

    triespell_cli::reject_unknown_flags(&args, &[], &["-n", "--max-suggestions"]);
    triespell_cli::init_tracing();

    let mut max_suggestions = None;
    if let Some(i) = args.iter().position(|a| a == "-n" || a == "--max-suggestions") {
        max_suggestions = Some(triespell_cli::parse_count(&args[i], args.get(i + 1)));
    }

    let mut session = triespell_cli::load_session(dict_path.as_deref())
        .unwrap_or_else(|e| triespell_cli::fatal(&e));
    if let Some(n) = max_suggestions {
        session.set_max_suggestions(n);
    }

    println!("Trie-Based Autocorrector with Edit Distance");
    println!("===========================================");
    println!("Loaded {} distinct words.", session.word_count());
    println!();
    println!("Type a word to check it ('exit' to quit, 'benchmark' to run tests, 'stats' for statistics).");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("\nEnter word: ");
        let _ = io::stdout().flush();

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }
        let word = line.trim();

        match word {
            "" => continue,
            "exit" => break,
            "benchmark" => {
                let report = session.run_benchmark(SAMPLE_MISSPELLINGS, BENCHMARK_QUERIES);
                println!("Benchmark Results:");
                println!("{report}");
                continue;
            }
            "stats" => {
                println!("{}", session.stats());
                continue;
            }
            _ => {}
        }

        let start = Instant::now();
        let correct = session.contains_word(word);
        let suggestions = session.process_query(word);
        let elapsed = start.elapsed();

        if suggestions.is_empty() {
            println!("No suggestions found.");
        } else if correct {
            println!("Correct spelling!");
        } else {
            println!("Did you mean: {}", suggestions.join(", "));
        }
        println!("Response time: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    }
}
