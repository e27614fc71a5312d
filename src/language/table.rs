//! Per-language pattern tables.
//!
//! The table maps each language to its extension group and the pattern
//! rules used to find symbol definitions. A built-in table ships with the
//! crate; a YAML file of the same shape can replace it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

use super::groups::extension_of;
use crate::error::{Error, Result};
use crate::types::{PatternRule, RuleSpec};

const BUILTIN_TABLE: &str = include_str!("languages.yaml");

/// One language as written in a table file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDef {
    /// Language name
    pub name: String,
    /// Extensions treated as interchangeable for import suggestions
    pub extensions: Vec<String>,
    /// Symbol rules, applied in order
    #[serde(default)]
    pub tags: Vec<RuleSpec>,
}

/// A table of languages, in lookup order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTable {
    pub languages: Vec<LanguageDef>,
}

impl LanguageTable {
    /// The table shipped with tagscan.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_TABLE)
    }

    /// Parse a table from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let table: Self = serde_yaml::from_str(yaml)?;
        table.check()?;
        Ok(table)
    }

    /// Load a table file.
    pub async fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).await?;
        let table = Self::from_yaml(&yaml)?;
        debug!(
            "Loaded {} languages from {:?}",
            table.languages.len(),
            path
        );
        Ok(table)
    }

    fn check(&self) -> Result<()> {
        for language in &self.languages {
            if language.name.trim().is_empty() {
                return Err(Error::Config("language without a name".to_string()));
            }
            if language.extensions.is_empty() {
                return Err(Error::Config(format!(
                    "language '{}' has no extensions",
                    language.name
                )));
            }
        }
        Ok(())
    }

    /// Extension groups, one per language.
    pub fn extension_groups(&self) -> Vec<Vec<String>> {
        self.languages
            .iter()
            .map(|language| language.extensions.clone())
            .collect()
    }

    /// Look up a language by name.
    pub fn language(&self, name: &str) -> Result<&LanguageDef> {
        self.languages
            .iter()
            .find(|language| language.name == name)
            .ok_or_else(|| Error::UnknownLanguage(name.to_string()))
    }

    /// Compile every rule of the table.
    ///
    /// Fails on the first rule that breaks the pattern contract.
    pub fn compile(&self) -> Result<Vec<Language>> {
        self.languages.iter().map(Language::compile).collect()
    }
}

/// A language with compiled rules.
#[derive(Debug, Clone)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
    pub rules: Vec<PatternRule>,
}

impl Language {
    /// Compile the rules of a language definition.
    pub fn compile(def: &LanguageDef) -> Result<Self> {
        let rules = def
            .tags
            .iter()
            .map(PatternRule::from_spec)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: def.name.clone(),
            extensions: def.extensions.clone(),
            rules,
        })
    }

    /// Whether `path` has one of this language's extensions.
    pub fn handles(&self, path: &str) -> bool {
        let ext = extension_of(path);
        self.extensions.iter().any(|candidate| candidate == ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_compiles() {
        let table = LanguageTable::builtin().unwrap();
        let languages = table.compile().unwrap();
        assert_eq!(languages.len(), table.languages.len());
        assert!(languages.iter().all(|language| !language.rules.is_empty()));
    }

    #[test]
    fn test_builtin_groups_script_with_markup() {
        let table = LanguageTable::builtin().unwrap();
        let groups = table.extension_groups();
        assert!(groups
            .iter()
            .any(|group| group.contains(&"js".to_string()) && group.contains(&"html".to_string())));
    }

    #[test]
    fn test_builtin_has_doc_only_rule() {
        let table = LanguageTable::builtin().unwrap();
        let javascript = table.language("javascript").unwrap();
        assert!(javascript.tags.iter().any(|rule| rule.doc_only));
    }

    #[test]
    fn test_unknown_language() {
        let table = LanguageTable::builtin().unwrap();
        let err = table.language("cobol").unwrap_err();
        assert!(matches!(err, Error::UnknownLanguage(_)));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
languages:
  - name: toy
    extensions: [toy, toys]
    tags:
      - pattern: '(?m)^proc\s+(\w+)'
        kind: function
"#;
        let table = LanguageTable::from_yaml(yaml).unwrap();
        assert_eq!(table.languages[0].extensions, ["toy", "toys"]);

        let languages = table.compile().unwrap();
        assert!(languages[0].handles("src/main.toy"));
        assert!(!languages[0].handles("src/main.rs"));
    }

    #[test]
    fn test_compile_rejects_two_capture_groups() {
        let yaml = r#"
languages:
  - name: toy
    extensions: [toy]
    tags:
      - pattern: '(proc|func)\s+(\w+)'
        kind: function
"#;
        let table = LanguageTable::from_yaml(yaml).unwrap();
        let err = table.compile().unwrap_err();
        assert!(matches!(err, Error::CaptureGroups { found: 2, .. }));
    }

    #[test]
    fn test_rejects_language_without_extensions() {
        let yaml = "languages:\n  - name: toy\n    extensions: []\n";
        let err = LanguageTable::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.yaml");
        tokio::fs::write(
            &path,
            "languages:\n  - name: toy\n    extensions: [toy]\n    tags: []\n",
        )
        .await
        .unwrap();

        let table = LanguageTable::load(&path).await.unwrap();
        assert_eq!(table.languages.len(), 1);
        assert_eq!(table.languages[0].name, "toy");
    }
}
