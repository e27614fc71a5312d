//! Argument list guessing.

use regex::Regex;
use std::sync::OnceLock;

fn fargs_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\([A-Za-z0-9$_,\s]*(\))?").expect("valid regex"))
}

/// Guess the argument list that follows `name` on `line`.
///
/// Returns e.g. `(a, b)`, or `(a, b...` when the list continues past the
/// line. Returns an empty string when no list directly follows the name.
pub fn guess_fargs(line: &str, name: &str) -> String {
    let Some(start) = line.find(name) else {
        return String::new();
    };
    let rest = &line[start + name.len()..];

    match fargs_regex().captures(rest) {
        Some(caps) => {
            let fragment = &caps[0];
            if caps.get(1).is_some() {
                fragment.to_string()
            } else {
                format!("{}...", fragment)
            }
        }
        None => String::new(),
    }
}
