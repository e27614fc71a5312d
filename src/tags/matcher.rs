//! Applying pattern rules to source text.

use tracing::debug;

use super::doc::extract_documentation_at_row;
use super::offset::offset_row;
use crate::types::{MatchRecord, PatternRule, ResultsMap};

/// Maximum length of a defining line shown as-is in `doc_head`.
pub const MAX_DOCHEAD_LENGTH: usize = 80;

/// Display excerpt of a defining line.
///
/// Lines longer than [`MAX_DOCHEAD_LENGTH`] characters are cut to the text
/// starting at that position, followed by `...`.
pub fn doc_head(line: &str) -> String {
    if line.chars().count() > MAX_DOCHEAD_LENGTH {
        let tail: String = line.chars().skip(MAX_DOCHEAD_LENGTH).collect();
        format!("{}...", tail)
    } else {
        line.to_string()
    }
}

/// Apply `tag` to `contents` and accumulate its matches into `results`.
///
/// `lines` must be `contents` split on newlines. Records are appended per
/// symbol name in match order; entries already in `results` are never
/// reordered. A documentation-only rule never creates an entry: it attaches
/// its documentation to the first existing entry for the name, and its
/// documentation is dropped when no other rule has created one.
pub fn find_matching_tags<'r, S: AsRef<str>>(
    lines: &[S],
    contents: &str,
    tag: &PatternRule,
    extract_documentation: bool,
    guess_fargs: bool,
    results: &'r mut ResultsMap,
) -> &'r mut ResultsMap {
    let mut matched = 0usize;

    for caps in tag.regex().captures_iter(contents) {
        let (Some(full), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str();

        let added = full.as_str().find(name).unwrap_or(0);
        let row = offset_row(contents, full.start() + added);
        let Some(line) = lines.get(row).map(AsRef::as_ref) else {
            debug!(row, name, "match outside of the given lines");
            continue;
        };

        let (head, doc) = if extract_documentation {
            let doc = row
                .checked_sub(1)
                .and_then(|above| extract_documentation_at_row(lines, above));
            (Some(doc_head(line)), doc)
        } else {
            (None, None)
        };

        if tag.is_doc_only() {
            let Some(doc) = doc else { continue };
            if let Some(first) = results.get_mut(name).and_then(|entries| entries.first_mut()) {
                first.doc = Some(doc);
            }
            continue;
        }

        matched += 1;
        results.entry(name.to_string()).or_default().push(MatchRecord {
            row,
            doc_head: head,
            guess_fargs,
            doc,
            kind: tag.kind().to_string(),
        });
    }

    debug!(
        pattern = tag.pattern(),
        kind = tag.kind(),
        matched,
        "Applied tag rule"
    );
    results
}
