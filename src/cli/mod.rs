use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::NoteCategory;
use crate::store::query::DEFAULT_LATEST_LIMIT;

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod show;
pub mod summary;
pub mod ui;

pub use add::run_add;
pub use delete::{run_clear, run_delete};
pub use edit::run_edit;
pub use export::run_export;
pub use list::run_list;
pub use show::run_show;
pub use summary::run_summary;

#[derive(Parser)]
#[command(name = "notecmd")]
#[command(about = "Categorized short notes for the command line")]
#[command(version)]
pub struct Cli {
    /// Log store activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// Keep the database and exports under this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a new note
    Add(AddArgs),
    /// List notes, newest first, or one category in creation order
    List(ListArgs),
    /// Show a note in full
    Show(ShowArgs),
    /// Change a note's category or content
    Edit(EditArgs),
    /// Delete one note
    Delete(DeleteArgs),
    /// Delete every note
    Clear(ClearArgs),
    /// Counts and latest notes per category
    Summary(SummaryArgs),
    /// Export all notes as a text file, or share them
    Export(ExportArgs),
}

/// Accepts raw values, labels, and short aliases such as `work`
pub fn parse_category(s: &str) -> Result<NoteCategory, String> {
    NoteCategory::parse(s)
        .ok_or_else(|| format!("unknown category '{}'; use work, life, or health", s))
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<NoteCategory>,
    /// Note text; prompted for when omitted
    pub content: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<NoteCategory>,
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Note ID or unique prefix
    pub id: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Note ID or unique prefix
    pub id: String,
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<NoteCategory>,
    #[arg(long)]
    pub content: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Note ID or unique prefix
    pub id: String,
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[arg(short, long, default_value_t = DEFAULT_LATEST_LIMIT)]
    pub limit: usize,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Hand the export to the configured share command instead
    #[arg(short, long)]
    pub share: bool,
}
