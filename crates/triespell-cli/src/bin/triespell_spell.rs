// triespell-spell: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is in the dictionary:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//
// Usage:
//   triespell-spell [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Word list file (or directory containing dictionary.txt)
//   -s, --suggest           Also print suggestions for misspelled words
//   -h, --help              Print help

use std::io::{self, Write};

use triespell::wordlist;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = triespell_cli::parse_dict_path(&args);

    if triespell_cli::wants_help(&args) {
        println!("triespell-spell: Check spelling of words from stdin.");
        println!();
        println!("Usage: triespell-spell [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Word list file or directory containing dictionary.txt");
        println!("  -s, --suggest          Also print suggestions for misspelled words");
        println!("  -h, --help             Print this help");
        return;
    }

    triespell_cli::reject_unknown_flags(&args, &["-s", "--suggest"], &[]);
    triespell_cli::init_tracing();

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let mut session = triespell_cli::load_session(dict_path.as_deref())
        .unwrap_or_else(|e| triespell_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

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

        if session.contains_word(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                for suggestion in session.process_query(word) {
                    let _ = writeln!(out, "S: {suggestion}");
                }
            }
        }
    }
}
