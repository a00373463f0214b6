// triespell-suggest: Generate spelling suggestions for words.
//
// Prints suggestions for misspelled words. Correctly spelled words are
// printed as-is.
//
// Usage:
//   triespell-suggest [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH     Word list file (or directory containing dictionary.txt)
//   -n, --max-suggestions N  Maximum number of suggestions (default: 5)
//   --max-distance N         Largest edit distance to suggest (default: 2)
//   -v, --verbose            Show edit distance and frequency per suggestion
//   -h, --help               Print help

use std::io::{self, Write};

use triespell::{SpellSession, wordlist};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = triespell_cli::parse_dict_path(&args);

    if triespell_cli::wants_help(&args) {
        println!("triespell-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: triespell-suggest [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Word list file or directory containing dictionary.txt");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 5)");
        println!("  --max-distance N         Largest edit distance to suggest (default: 2)");
        println!("  -v, --verbose            Show edit distance and frequency per suggestion");
        println!("  -h, --help               Print this help");
        return;
    }

    triespell_cli::reject_unknown_flags(
        &args,
        &["-v", "--verbose"],
        &["-n", "--max-suggestions", "--max-distance"],
    );
    triespell_cli::init_tracing();

    let mut max_suggestions: Option<usize> = None;
    let mut max_distance: Option<usize> = None;
    let mut verbose = false;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "-n" | "--max-suggestions" => {
                max_suggestions = Some(triespell_cli::parse_count(arg, args.get(i + 1)));
                skip_next = true;
            }
            "--max-distance" => {
                max_distance = Some(triespell_cli::parse_count(arg, args.get(i + 1)));
                skip_next = true;
            }
            "-v" | "--verbose" => verbose = true,
            _ => words.push(arg.clone()),
        }
    }

    let mut session = triespell_cli::load_session(dict_path.as_deref())
        .unwrap_or_else(|e| triespell_cli::fatal(&e));
    if let Some(n) = max_suggestions {
        session.set_max_suggestions(n);
    }
    if let Some(d) = max_distance {
        session.set_max_distance(d);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let suggest_word = |word: &str, session: &mut SpellSession, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        if session.contains_word(word) {
            let _ = writeln!(out, "{word} (correct)");
            return;
        }
        if verbose {
            let candidates = session
                .engine()
                .candidates(word, session.max_suggestions());
            if candidates.is_empty() {
                let _ = writeln!(out, "{word}: (no suggestions)");
            } else {
                let _ = writeln!(out, "{word}:");
                for c in &candidates {
                    let _ = writeln!(
                        out,
                        "  {} (distance {}, frequency {})",
                        c.word, c.distance, c.frequency
                    );
                }
            }
            return;
        }
        let suggestions = session.process_query(word);
        if suggestions.is_empty() {
            let _ = writeln!(out, "{word}: (no suggestions)");
        } else {
            let _ = writeln!(out, "{word}:");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in wordlist::lossy_lines(stdin.lock()) {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(word, &mut session, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &mut session, &mut out);
        }
    }
}
