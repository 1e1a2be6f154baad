//! Output filename sanitization.
//!
//! Floor and project display names become archive entry names, so they
//! are normalized to a conservative character set before use.

use regex::Regex;
use std::sync::OnceLock;

/// Fallback used when sanitization empties the input.
pub const FALLBACK_NAME: &str = "Floor";

fn unsafe_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w.\-]+").expect("static pattern"))
}

/// Normalize a display name into a safe archive filename.
///
/// Runs of characters outside `[\w.-]` collapse into a single `_`, and
/// leading/trailing `.`/`_` are stripped. An empty result falls back to
/// a fixed literal so every floor gets a usable image name.
pub fn sanitize_filename(name: &str) -> String {
    let replaced = unsafe_runs().replace_all(name, "_");
    let trimmed = replaced.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
