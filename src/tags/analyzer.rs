//! Whole-file analysis against a language table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::matcher::find_matching_tags;
use super::summary::summarize;
use crate::error::Result;
use crate::language::{find_matching_open_files, Language, LanguageTable, OpenFiles};
use crate::types::{FileTags, ResultsMap};

/// What to collect for each match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    /// Attach documentation comments and a `doc_head`
    pub extract_documentation: bool,
    /// Guess argument lists in summaries
    pub guess_fargs: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            extract_documentation: true,
            guess_fargs: true,
        }
    }
}

/// Applies the rules of a compiled language table to source files.
///
/// The analyzer is immutable once built, so one instance can serve any
/// number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Analyzer {
    languages: Vec<Language>,
    groups: Vec<Vec<String>>,
}

impl Analyzer {
    /// Compile `table` into an analyzer.
    pub fn new(table: &LanguageTable) -> Result<Self> {
        Ok(Self {
            languages: table.compile()?,
            groups: table.extension_groups(),
        })
    }

    /// An analyzer over the built-in table.
    pub fn builtin() -> Result<Self> {
        Self::new(&LanguageTable::builtin()?)
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// The language whose extensions include the extension of `path`.
    pub fn language_for(&self, path: &str) -> Option<&Language> {
        self.languages.iter().find(|language| language.handles(path))
    }

    /// Run every rule of `language` over `contents` into one results map.
    pub fn tag_contents<S: AsRef<str>>(
        &self,
        language: &Language,
        lines: &[S],
        contents: &str,
        options: &AnalyzeOptions,
    ) -> ResultsMap {
        let mut results = ResultsMap::new();
        for rule in &language.rules {
            find_matching_tags(
                lines,
                contents,
                rule,
                options.extract_documentation,
                options.guess_fargs,
                &mut results,
            );
        }
        results
    }

    /// Find and summarize the tags of one file.
    pub fn analyze(&self, path: &str, contents: &str, options: &AnalyzeOptions) -> FileTags {
        let Some(language) = self.language_for(path) else {
            debug!("No language for {}", path);
            return FileTags {
                path: path.to_string(),
                language: None,
                tags: Vec::new(),
                error: None,
            };
        };

        let lines = split_lines(contents);
        let results = self.tag_contents(language, &lines, contents, options);
        let tags = summarize(&lines, &results);
        debug!(
            "Tagged {} ({}): {} symbols, {} tags",
            path,
            language.name,
            results.len(),
            tags.len()
        );

        FileTags {
            path: path.to_string(),
            language: Some(language.name.clone()),
            tags,
            error: None,
        }
    }

    /// Open files worth suggesting as imports for `path`.
    pub fn matching_open_files<O: OpenFiles + ?Sized>(&self, path: &str, open: &O) -> Vec<String> {
        find_matching_open_files(&self.groups, path, open)
    }
}

/// Split source text into rows that agree with newline offsets.
///
/// A trailing `\r` is dropped from each row so CRLF files display cleanly;
/// row numbers are unaffected.
pub fn split_lines(contents: &str) -> Vec<&str> {
    contents
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
