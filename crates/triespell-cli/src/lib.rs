// triespell-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;
use triespell::SpellSession;
use triespell::wordlist;

/// Word list file name looked up inside search directories.
const DICT_FILE: &str = "dictionary.txt";

/// Environment variable naming a word list file or a directory holding one.
const DICT_ENV: &str = "TRIESPELL_DICT_PATH";

/// Install the tracing subscriber for a CLI tool.
///
/// Filtering follows `RUST_LOG`; without it only warnings and errors are
/// shown. Logs go to stderr so they never mix with tool output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Search for a word list and load it into a new session.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `TRIESPELL_DICT_PATH` environment variable
/// 3. `~/.triespell/dictionary.txt`
/// 4. `dictionary.txt` in the current working directory
///
/// Each candidate may name the word list file itself or a directory that
/// contains `dictionary.txt`.
pub fn load_session(dict_path: Option<&str>) -> Result<SpellSession, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        let file = if candidate.is_dir() {
            candidate.join(DICT_FILE)
        } else {
            candidate.clone()
        };
        if !file.is_file() {
            continue;
        }

        let words = wordlist::load_from_path(&file).map_err(|e| e.to_string())?;
        let mut session = SpellSession::new();
        let elapsed = session.initialize(&words);
        info!(
            path = %file.display(),
            entries = words.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "dictionary ready"
        );
        return Ok(session);
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DICT_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of paths to search for the word list.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".triespell").join(DICT_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DICT_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Parse the numeric value following a flag, exiting on malformed input.
pub fn parse_count(flag: &str, value: Option<&String>) -> usize {
    match value {
        Some(v) => v
            .parse()
            .unwrap_or_else(|_| fatal(&format!("invalid number for {flag}: {v}"))),
        None => fatal(&format!("{flag} requires a value")),
    }
}

/// Return the first flag-like argument that is neither a known switch nor
/// a known flag taking a value. Values following `valued` flags are skipped.
pub fn find_unknown_flag<'a>(
    args: &'a [String],
    switches: &[&str],
    valued: &[&str],
) -> Option<&'a str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if valued.contains(&arg.as_str()) {
            iter.next();
        } else if arg.starts_with('-') && !switches.contains(&arg.as_str()) {
            return Some(arg);
        }
    }
    None
}

/// Exit with an error if any argument is an unknown flag.
pub fn reject_unknown_flags(args: &[String], switches: &[&str], valued: &[&str]) {
    if let Some(flag) = find_unknown_flag(args, switches, valued) {
        fatal(&format!("unknown argument: {flag}"));
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dict_path_long_form() {
        let (path, rest) = parse_dict_path(&args(&["--dict-path=/tmp/words.txt", "hello"]));
        assert_eq!(path.as_deref(), Some("/tmp/words.txt"));
        assert_eq!(rest, args(&["hello"]));
    }

    #[test]
    fn dict_path_short_form() {
        let (path, rest) = parse_dict_path(&args(&["-n", "3", "-d", "words.txt", "wrold"]));
        assert_eq!(path.as_deref(), Some("words.txt"));
        assert_eq!(rest, args(&["-n", "3", "wrold"]));
    }

    #[test]
    fn no_dict_path() {
        let (path, rest) = parse_dict_path(&args(&["a", "b"]));
        assert!(path.is_none());
        assert_eq!(rest, args(&["a", "b"]));
    }

    #[test]
    fn explicit_path_is_searched_first() {
        let paths = build_search_paths(Some("/opt/words.txt"));
        assert_eq!(paths[0], PathBuf::from("/opt/words.txt"));
        assert!(paths.last().unwrap().ends_with(DICT_FILE));
    }

    #[test]
    fn help_flags() {
        assert!(wants_help(&args(&["-h"])));
        assert!(wants_help(&args(&["x", "--help"])));
        assert!(!wants_help(&args(&["help"])));
    }

    #[test]
    fn unknown_flags_are_found() {
        let switches = ["-v", "--verbose"];
        let valued = ["-n", "--max-distance"];
        assert_eq!(
            find_unknown_flag(&args(&["-n", "3", "-x", "word"]), &switches, &valued),
            Some("-x")
        );
        assert_eq!(
            find_unknown_flag(&args(&["--verbose", "--max-distance", "1", "word"]), &switches, &valued),
            None
        );
        assert_eq!(find_unknown_flag(&args(&["-s"]), &[], &[]), Some("-s"));
    }

    #[test]
    fn flag_values_are_not_checked() {
        // "-n" consumes the next argument even when it looks like a flag.
        assert_eq!(find_unknown_flag(&args(&["-n", "-1"]), &[], &["-n"]), None);
    }

    #[test]
    fn parse_count_reads_number() {
        let value = "7".to_string();
        assert_eq!(parse_count("-n", Some(&value)), 7);
    }

    #[test]
    fn load_session_from_explicit_file() {
        let path = std::env::temp_dir().join(format!("triespell-cli-{}.txt", process::id()));
        std::fs::write(&path, "cache queue\nbatch\n").unwrap();
        let session = load_session(path.to_str());
        std::fs::remove_file(&path).unwrap();
        let session = session.unwrap();
        assert_eq!(session.word_count(), 3);
        assert!(session.contains_word("batch"));
    }
}
