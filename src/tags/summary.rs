//! Flattening match results into display summaries.

use super::fargs::guess_fargs;
use crate::types::{ResultsMap, TagSummary};

/// Flatten `results` into one summary per record, in first-seen order.
///
/// Argument lists are guessed here, for records that asked for it, so the
/// matcher itself never pays for it.
pub fn summarize<S: AsRef<str>>(lines: &[S], results: &ResultsMap) -> Vec<TagSummary> {
    let mut summaries = Vec::with_capacity(results.len());

    for (name, records) in results {
        for record in records {
            let fargs = if record.guess_fargs {
                lines
                    .get(record.row)
                    .map(|line| guess_fargs(line.as_ref(), name))
                    .filter(|guess| !guess.is_empty())
            } else {
                None
            };

            summaries.push(TagSummary {
                name: name.clone(),
                kind: record.kind.clone(),
                row: record.row,
                doc_head: record.doc_head.clone(),
                doc: record.doc.clone(),
                fargs,
            });
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchRecord;

    fn record(row: usize, guess: bool) -> MatchRecord {
        MatchRecord {
            row,
            doc_head: None,
            guess_fargs: guess,
            doc: None,
            kind: "function".to_string(),
        }
    }

    #[test]
    fn test_guesses_fargs_when_requested() {
        let lines = ["function foo(a, b) {", "}", "function bar(c) {"];
        let mut results = ResultsMap::new();
        results.insert("foo".to_string(), vec![record(0, true)]);
        results.insert("bar".to_string(), vec![record(2, false)]);

        let summaries = summarize(&lines, &results);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "foo");
        assert_eq!(summaries[0].fargs.as_deref(), Some("(a, b)"));
        assert_eq!(summaries[1].name, "bar");
        assert_eq!(summaries[1].fargs, None);
    }

    #[test]
    fn test_empty_guess_becomes_none() {
        let lines = ["class Foo:"];
        let mut results = ResultsMap::new();
        results.insert("Foo".to_string(), vec![record(0, true)]);

        let summaries = summarize(&lines, &results);
        assert_eq!(summaries[0].fargs, None);
    }

    #[test]
    fn test_one_summary_per_record() {
        let lines = ["def dup(a):", "def dup(a, b):"];
        let mut results = ResultsMap::new();
        results.insert("dup".to_string(), vec![record(0, true), record(1, true)]);

        let summaries = summarize(&lines, &results);
        let fargs: Vec<_> = summaries.iter().map(|s| s.fargs.clone()).collect();
        assert_eq!(
            fargs,
            [Some("(a)".to_string()), Some("(a, b)".to_string())]
        );
    }
}
