//! Scan service - tags many files concurrently.

use futures::future::join_all;
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::tags::{AnalyzeOptions, Analyzer};
use crate::types::FileTags;

/// Directories never worth scanning.
const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".svn",
    ".hg",
    "target",
    "dist",
    "build",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
];

/// Result of scanning a set of paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Tagged files, in discovery order
    pub files: Vec<FileTags>,
    /// Files skipped for size
    pub skipped: usize,
    /// Wall time in milliseconds
    pub duration_ms: u64,
}

impl ScanReport {
    /// Total number of tags across all files.
    pub fn tag_count(&self) -> usize {
        self.files.iter().map(|file| file.tags.len()).sum()
    }
}

/// Service that discovers files and tags them in parallel.
pub struct ScanService {
    analyzer: Arc<Analyzer>,
    options: AnalyzeOptions,
    max_file_size: usize,
    include: Option<Pattern>,
}

impl ScanService {
    /// Create a scan service over a compiled analyzer.
    pub fn new(analyzer: Arc<Analyzer>, config: &Config) -> Self {
        Self {
            analyzer,
            options: AnalyzeOptions::default(),
            max_file_size: config.max_file_size,
            include: None,
        }
    }

    /// Set what to collect for each match.
    pub fn with_options(mut self, options: AnalyzeOptions) -> Self {
        self.options = options;
        self
    }

    /// Only scan files whose path matches `pattern`.
    pub fn with_include(mut self, pattern: &str) -> Result<Self> {
        self.include = Some(Pattern::new(pattern)?);
        Ok(self)
    }

    /// Tag every file reachable from `paths`.
    pub async fn scan(&self, paths: &[PathBuf]) -> Result<ScanReport> {
        let start_time = std::time::Instant::now();
        let files = self.discover_files(paths)?;
        info!("Discovered {} files to scan", files.len());

        let mut skipped = 0;
        let mut pending = Vec::with_capacity(files.len());
        for path in files {
            let label = path.to_string_lossy().to_string();
            match fs::metadata(&path).await {
                Ok(meta) if meta.len() as usize > self.max_file_size => {
                    warn!("Skipping large file: {} ({} bytes)", label, meta.len());
                    skipped += 1;
                }
                _ => pending.push(self.scan_file(path, label)),
            }
        }

        let files = join_all(pending).await;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        let report = ScanReport {
            files,
            skipped,
            duration_ms,
        };
        info!(
            "Scan complete: {} files, {} tags, {} skipped in {}ms",
            report.files.len(),
            report.tag_count(),
            skipped,
            duration_ms
        );
        Ok(report)
    }

    /// Read and tag a single file.
    async fn scan_file(&self, path: PathBuf, label: String) -> FileTags {
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read {}: {}", label, e);
                return FileTags {
                    path: label,
                    language: None,
                    tags: Vec::new(),
                    error: Some(e.to_string()),
                };
            }
        };

        let analyzer = self.analyzer.clone();
        let options = self.options;
        let name = label.clone();
        let task = tokio::task::spawn_blocking(move || analyzer.analyze(&name, &contents, &options));

        match task.await {
            Ok(tags) => tags,
            Err(e) => {
                let err = Error::Internal(format!("tagging task failed: {}", e));
                warn!("{}: {}", label, err);
                FileTags {
                    path: label,
                    language: None,
                    tags: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        }
    }

    /// Expand directories and filter files the analyzer can handle.
    fn discover_files(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for root in paths {
            if root.is_file() {
                // Explicit files are always scanned
                files.push(root.clone());
                continue;
            }
            if !root.is_dir() {
                return Err(Error::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no such file or directory: {}", root.display()),
                )));
            }

            let walker = WalkDir::new(root)
                .follow_links(false)
                .into_iter()
                .filter_entry(|entry| entry.depth() == 0 || !is_ignored_dir(entry));

            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        debug!("Cannot walk entry: {}", e);
                        continue;
                    }
                };
                if !entry.file_type().is_file() {
                    continue;
                }

                let path = entry.path();
                let path_str = path.to_string_lossy();
                if self.analyzer.language_for(&path_str).is_none() {
                    continue;
                }
                if let Some(include) = &self.include {
                    if !include.matches_path(path) {
                        continue;
                    }
                }
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| DEFAULT_IGNORE_DIRS.contains(&name))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> ScanService {
        let analyzer = Arc::new(Analyzer::builtin().unwrap());
        ScanService::new(analyzer, &Config::default())
    }

    fn workspace() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("app.py"),
            "# Entry point.\ndef main(argv):\n    pass\n",
        )
        .unwrap();
        std::fs::create_dir(dir.path().join("lib")).unwrap();
        std::fs::write(
            dir.path().join("lib").join("util.js"),
            "function helper(a, b) {\n}\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("README.md"), "# Title\n").unwrap();
        std::fs::create_dir(dir.path().join("node_modules")).unwrap();
        std::fs::write(
            dir.path().join("node_modules").join("dep.js"),
            "function dep() {}\n",
        )
        .unwrap();
        dir
    }

    #[tokio::test]
    async fn test_scan_directory() {
        let dir = workspace();
        let report = service().scan(&[dir.path().to_path_buf()]).await.unwrap();

        let mut paths: Vec<&str> = report.files.iter().map(|f| f.path.as_str()).collect();
        paths.sort();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("app.py"));
        assert!(paths[1].ends_with("util.js"));
        assert_eq!(report.tag_count(), 2);
        assert_eq!(report.skipped, 0);

        let app = report
            .files
            .iter()
            .find(|f| f.path.ends_with("app.py"))
            .unwrap();
        assert_eq!(app.tags[0].name, "main");
        assert_eq!(app.tags[0].doc.as_deref(), Some("Entry point."));
        assert_eq!(app.tags[0].fargs.as_deref(), Some("(argv)"));
    }

    #[tokio::test]
    async fn test_scan_with_include_glob() {
        let dir = workspace();
        let service = service().with_include("*.js").unwrap();
        let report = service.scan(&[dir.path().to_path_buf()]).await.unwrap();

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files[0].tags[0].name, "helper");
    }

    #[tokio::test]
    async fn test_skips_large_files() {
        let dir = workspace();
        let config = Config {
            max_file_size: 10,
            ..Config::default()
        };
        let analyzer = Arc::new(Analyzer::builtin().unwrap());
        let report = ScanService::new(analyzer, &config)
            .scan(&[dir.path().to_path_buf()])
            .await
            .unwrap();

        assert!(report.files.is_empty());
        assert_eq!(report.skipped, 2);
    }

    #[tokio::test]
    async fn test_explicit_file_with_unknown_extension() {
        let dir = workspace();
        let readme = dir.path().join("README.md");
        let report = service().scan(&[readme]).await.unwrap();

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files[0].language, None);
        assert!(report.files[0].tags.is_empty());
    }

    #[tokio::test]
    async fn test_missing_path_is_an_error() {
        let dir = workspace();
        let missing = dir.path().join("nope");
        let err = service().scan(&[missing]).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[tokio::test]
    async fn test_unreadable_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.py");
        std::fs::write(&bad, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let report = service().scan(&[bad]).await.unwrap();
        assert_eq!(report.files.len(), 1);
        assert!(report.files[0].path.ends_with("bad.py"));
        assert!(report.files[0].error.is_some());
        assert!(report.files[0].tags.is_empty());
    }

    #[test]
    fn test_ignored_dir_checks_entry_type() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("build")).unwrap();
        std::fs::write(dir.path().join("dist"), "").unwrap();

        let entries: Vec<DirEntry> = WalkDir::new(dir.path())
            .min_depth(1)
            .into_iter()
            .map(|entry| entry.unwrap())
            .collect();
        let build = entries.iter().find(|e| e.file_name() == "build").unwrap();
        let dist = entries.iter().find(|e| e.file_name() == "dist").unwrap();

        assert!(is_ignored_dir(build));
        assert!(!is_ignored_dir(dist));
    }

    #[test]
    fn test_invalid_include_glob() {
        let err = service().with_include("[").err().unwrap();
        assert!(matches!(err, Error::Glob(_)));
    }
}
