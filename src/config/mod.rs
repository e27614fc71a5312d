//! Configuration management for tagscan.

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::error::Result;
use crate::language::LanguageTable;

/// Command-line arguments for tagscan.
#[derive(Parser, Debug, Clone)]
#[command(name = "tagscan")]
#[command(author = "tagscan contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find symbol definitions and their documentation comments")]
pub struct Args {
    /// Language table file (YAML), replaces the built-in table
    #[arg(short, long, global = true, env = "TAGSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, env = "TAGSCAN_DEBUG")]
    pub debug: bool,

    /// Maximum file size to scan (bytes)
    #[arg(long, global = true, default_value = "1048576", env = "TAGSCAN_MAX_FILE_SIZE")]
    pub max_file_size: usize,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tag files and directories
    Scan {
        /// Files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Only scan files matching this glob
        #[arg(short, long)]
        glob: Option<String>,

        /// Skip documentation extraction
        #[arg(long)]
        no_docs: bool,

        /// Skip argument list guessing
        #[arg(long)]
        no_fargs: bool,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Print the documentation comment ending at a row
    Doc {
        /// Source file
        file: PathBuf,

        /// 0-based row where the comment ends
        row: usize,
    },

    /// List open files compatible with a path, for import suggestions
    Imports {
        /// Path being edited
        path: String,

        /// Paths of the currently open files
        #[arg(short, long, num_args = 1..)]
        open: Vec<String>,
    },

    /// Print the effective language table
    Languages {
        /// Only print this language
        name: Option<String>,
    },
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Text,
}

/// Runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Explicit language table file
    pub language_table: Option<PathBuf>,
    /// Debug mode
    pub debug: bool,
    /// Maximum file size
    pub max_file_size: usize,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            language_table: args.config.clone(),
            debug: args.debug,
            max_file_size: args.max_file_size,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language_table: None,
            debug: false,
            max_file_size: 1024 * 1024,
        }
    }
}

impl Config {
    /// Table file in the user's config directory, if one exists.
    pub fn user_table_path() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("tagscan").join("languages.yaml"))
            .filter(|path| path.is_file())
    }

    /// Load the language table this configuration points at.
    ///
    /// An explicit table wins, then the user's table, then the built-in one.
    pub async fn load_table(&self) -> Result<LanguageTable> {
        if let Some(path) = &self.language_table {
            return LanguageTable::load(path).await;
        }
        if let Some(path) = Self::user_table_path() {
            debug!("Using language table {:?}", path);
            return LanguageTable::load(&path).await;
        }
        LanguageTable::builtin()
    }
}
