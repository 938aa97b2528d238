//! Supporting helpers: colored message prefixes, char-safe truncation and
//! logging setup.

use owo_colors::OwoColorize;
use std::path::Path;
use tracing::Level;

pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix() -> String {
    if colors_enabled() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

/// Longest prefix of `s` with at most `max` chars. May cut mid-word.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Like `truncate_chars`, but backs off to the last whitespace when the cut
/// lands inside a word. Falls back to the hard cut for a single long word.
pub fn truncate_words(s: &str, max: usize) -> &str {
    let cut = truncate_chars(s, max);
    if cut.len() == s.len() {
        return s;
    }
    let next_is_space = s[cut.len()..].starts_with(char::is_whitespace);
    if next_is_space {
        return cut.trim_end();
    }
    match cut.rfind(char::is_whitespace) {
        Some(idx) => cut[..idx].trim_end_matches(|c: char| c.is_whitespace() || c == ','),
        None => cut,
    }
}

/// Path relative to `base` for display; falls back to the path as given.
pub fn display_path(path: &Path, base: &Path) -> String {
    pathdiff::diff_paths(path, base)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

/// Install the stderr log subscriber. Results go to stdout.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
