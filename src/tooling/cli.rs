//! CLI Tooling
//!
//! Command-line driver for the aggregation engine. Each invocation ingests the given
//! paths into a fresh session, applies any reorder/remove edits, and prints one view.

use crate::config::sources::workspace_file::WORKSPACE_CONFIG_FILE;
use crate::config::{ConfigLoader, StitchConfig};
use crate::error::ApiError;
use crate::ingest::PathUploadSource;
use crate::logging::LoggingConfig;
use crate::render::download_file_name;
use crate::session::Session;
use crate::types::StoreIndex;
use crate::views::TreeRow;
use clap::{Args, Parser, Subcommand};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Filestitch CLI - merge files and archives into one document
#[derive(Parser)]
#[command(name = "filestitch")]
#[command(about = "Aggregate files and archives, browse them as a tree, and merge them into one document")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (same as --log-level debug)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line logging flags on top of the configured settings.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

/// Inputs shared by every command that builds a collection
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Files, directories, or zip archives to ingest, in order
    pub paths: Vec<PathBuf>,

    /// Also read standard input as a pasted text file
    #[arg(long)]
    pub paste: bool,

    /// Move the file at FROM to position TO (zero-based, repeatable, applied in order)
    #[arg(long = "reorder", value_name = "FROM:TO", value_parser = parse_move)]
    pub reorder: Vec<(StoreIndex, StoreIndex)>,

    /// Remove the file at this position after reordering (repeatable)
    #[arg(long = "remove", value_name = "INDEX")]
    pub remove: Vec<StoreIndex>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the merged document
    Merge {
        #[command(flatten)]
        input: InputArgs,
        /// Header template; the name token is replaced by each file name
        #[arg(long)]
        template: Option<String>,
        /// Write the document into this directory as merged-YYYY-MM-DD.txt instead of printing it
        #[arg(long, value_name = "DIR")]
        download: Option<PathBuf>,
    },
    /// Print the folder structure listing
    Tree {
        #[command(flatten)]
        input: InputArgs,
    },
    /// List the collection as a table or tree
    List {
        #[command(flatten)]
        input: InputArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Show the hierarchical view instead of the flat list
        #[arg(long)]
        tree: bool,
    },
    /// Write a starter filestitch.toml into the workspace
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_move(value: &str) -> Result<(StoreIndex, StoreIndex), String> {
    let (from, to) = value
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{}'", value))?;
    let from = from
        .trim()
        .parse()
        .map_err(|e| format!("invalid FROM '{}': {}", from, e))?;
    let to = to
        .trim()
        .parse()
        .map_err(|e| format!("invalid TO '{}': {}", to, e))?;
    Ok((from, to))
}

/// CLI context for executing commands
pub struct CliContext {
    workspace_root: PathBuf,
    config: StitchConfig,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(cfg_path) = &config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn with_config(workspace_root: PathBuf, config: StitchConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &StitchConfig {
        &self.config
    }

    /// Execute a CLI command
    pub async fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let output = match command {
            Commands::Merge {
                input,
                template,
                download,
            } => {
                let mut session = self.build_session(input).await?;
                if let Some(template) = template {
                    session.set_template(template.as_str());
                }
                match download {
                    Some(dir) => self.download(&session, dir).await,
                    None => Ok(session.document().to_string()),
                }
            }
            Commands::Tree { input } => {
                let session = self.build_session(input).await?;
                Ok(session.structure().to_string())
            }
            Commands::List {
                input,
                format,
                tree,
            } => {
                let mut session = self.build_session(input).await?;
                if *tree {
                    session.expand_all();
                    format_tree_rows(&session.tree_rows(), format)
                } else {
                    format_flat_list(&session, format)
                }
            }
            Commands::Init { force } => self.init(*force),
        }?;
        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        Ok(output)
    }

    async fn build_session(&self, input: &InputArgs) -> Result<Session, ApiError> {
        let mut session = Session::new(&self.config);

        if !input.paths.is_empty() {
            let paths = input.paths.iter().map(|p| self.resolve(p));
            let mut source = PathUploadSource::new(paths);
            session.ingest(&mut source).await?;
        }
        if input.paste {
            let text = std::io::read_to_string(std::io::stdin())?;
            session
                .paste(&text, chrono::Local::now().naive_local())
                .await?;
        }
        for &(from, to) in &input.reorder {
            session.reorder(from, to)?;
        }
        if !input.remove.is_empty() {
            session.remove_many(input.remove.iter().copied());
        }

        info!(files = session.store().len(), "Collection ready");
        Ok(session)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        }
    }

    async fn download(&self, session: &Session, dir: &Path) -> Result<String, ApiError> {
        let dir = self.resolve(dir);
        tokio::fs::create_dir_all(&dir).await?;
        let target = dir.join(download_file_name(chrono::Local::now().date_naive()));
        tokio::fs::write(&target, session.document()).await?;

        let stats = session.stats();
        Ok(format!(
            "Wrote {} files ({} characters, {} lines) to {}",
            stats.files,
            stats.characters,
            stats.lines,
            target.display()
        ))
    }

    fn init(&self, force: bool) -> Result<String, ApiError> {
        let target = self.workspace_root.join(WORKSPACE_CONFIG_FILE);
        if target.exists() && !force {
            return Err(ApiError::ConfigError(format!(
                "{} already exists (use --force to overwrite)",
                target.display()
            )));
        }
        std::fs::write(&target, StitchConfig::default().to_toml_string()?)?;
        Ok(format!("Wrote {}", target.display()))
    }
}

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::Output(e.to_string()))
}

fn format_flat_list(session: &Session, format: &str) -> Result<String, ApiError> {
    let rows = session.flat_rows();
    if format == "json" {
        return to_json(&rows);
    }
    if rows.is_empty() {
        return Ok("No files.".to_string());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Name", "Characters"]);
    for row in &rows {
        table.add_row(vec![row.index.to_string(), row.name.clone(), row.chars.to_string()]);
    }

    let stats = session.stats();
    Ok(format!(
        "{}\n\n{}\n\n{} files, {} characters, {} lines",
        format_section_heading("Files"),
        table,
        stats.files,
        stats.characters,
        stats.lines
    ))
}

fn format_tree_rows(rows: &[TreeRow], format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return to_json(rows);
    }
    let mut out = format_section_heading("Tree");
    out.push('\n');
    for row in rows {
        out.push('\n');
        out.push_str(&"  ".repeat(row.depth));
        if row.is_folder {
            out.push_str(&format!("{}/", row.name));
        } else {
            match row.file_index {
                Some(index) => out.push_str(&format!("{} [{}]", row.name, index)),
                None => out.push_str(&row.name),
            }
        }
    }
    Ok(out)
}
