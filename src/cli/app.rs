//! Main CLI application structure

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::domain::Task;
use crate::render::{self, text};
use crate::settings::Settings;

#[derive(Parser)]
#[command(name = "logbook")]
#[command(author, version, about = "Render Things logbook exports as markdown checklists")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a JSON task export to markdown
    Render {
        /// Path to the task export, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Path to a settings file (defaults to the global location)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Override the section heading
        #[arg(long)]
        section_heading: Option<String>,

        /// Override the tag prefix
        #[arg(long)]
        tag_prefix: Option<String>,

        /// Override the mark used for cancelled tasks
        #[arg(long)]
        cancelled_mark: Option<String>,

        /// Group by project name when a task has no area
        #[arg(long)]
        group_by_project: bool,

        /// Merge consecutive empty lines in the output
        #[arg(long)]
        collapse_empty_lines: bool,

        /// Leave task note bodies out of the output
        #[arg(long)]
        no_notes: bool,

        /// Indent notes and subtasks with spaces instead of a tab
        #[arg(long)]
        use_spaces: bool,

        /// Number of spaces per indent level (with --use-spaces)
        #[arg(long, default_value = "4")]
        tab_size: usize,
    },

    /// Write a default settings file
    Init {
        /// Destination path (defaults to the global location)
        path: Option<PathBuf>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            settings,
            section_heading,
            tag_prefix,
            cancelled_mark,
            group_by_project,
            collapse_empty_lines,
            no_notes,
            use_spaces,
            tab_size,
        } => {
            let mut resolved = Settings::load(settings.as_deref())?;

            if let Some(heading) = section_heading {
                resolved.section_heading = heading;
            }
            if let Some(prefix) = tag_prefix {
                resolved.tag_prefix = prefix;
            }
            if let Some(mark) = cancelled_mark {
                resolved.cancelled_mark = mark;
            }
            if group_by_project {
                resolved.group_by_project = true;
            }
            if collapse_empty_lines {
                resolved.collapse_empty_lines = true;
            }
            if no_notes {
                resolved.include_notes = false;
            }
            if use_spaces {
                resolved.tab = text::indent(false, tab_size);
            }

            let tasks = read_tasks(&input)?;
            if cli.verbose {
                eprintln!("[verbose] Rendering {} tasks from {}", tasks.len(), input);
            }

            println!("{}", render::render(&tasks, &resolved));
        }

        Commands::Init { path } => {
            let path = match path {
                Some(path) => path,
                None => Settings::global_dir()
                    .context("Could not determine settings directory")?
                    .join("settings.toml"),
            };

            if path.exists() {
                anyhow::bail!("Settings file already exists: {}", path.display());
            }

            Settings::default().save(&path)?;
            println!("Wrote default settings to {}", path.display());
        }
    }

    Ok(())
}

/// Reads a task export from a file path, or stdin when the path is `-`
fn read_tasks(input: &str) -> Result<Vec<Task>> {
    let content = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read task export from stdin")?;
        buffer
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read task export: {}", input))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse task export: {}", input))
}
