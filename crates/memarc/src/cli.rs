//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "memarc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal memory archive CLI")]
#[command(long_about = "A simple CLI tool to store, retrieve, and organize your memories")]
pub struct Cli {
    /// Path to database file (default: ~/.memarc/memarc.db)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Path to config file (default: ~/.memarc/config.toml)
    #[arg(long, global = true, value_name = "PATH", env = "MEMARC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new memory entry
    Add(AddArgs),

    /// List memory entries, optionally for a single day
    List(ListArgs),

    /// Show one entry in full
    Show(ShowArgs),

    /// Change the content, type or tags of an entry
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Memory text; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub content: Vec<String>,

    /// Entry type (personal, professional, study, etc.)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub entry_type: Option<String>,

    /// Comma-separated tags
    #[arg(short = 'g', long, default_value = "")]
    pub tags: String,
}

impl AddArgs {
    pub fn content(&self) -> String {
        self.content.join(" ")
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only entries created on this day (YYYY-MM-DD, local time)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Entry ID
    pub id: i64,

    /// Print the entry as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Entry ID
    pub id: i64,

    /// New content
    #[arg(short, long)]
    pub content: Option<String>,

    /// New entry type
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub entry_type: Option<String>,

    /// New comma-separated tags (pass "" to clear)
    #[arg(short = 'g', long)]
    pub tags: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Entry ID
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "memarc", "add", "Finished", "the", "book", "-t", "study", "-g", "books,rust",
        ])
        .unwrap();
        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.content(), "Finished the book");
                assert_eq!(args.entry_type.as_deref(), Some("study"));
                assert_eq!(args.tags, "books,rust");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_add_defaults() {
        let cli = Cli::try_parse_from(["memarc", "add", "hello"]).unwrap();
        match cli.command {
            Command::Add(args) => {
                assert!(args.entry_type.is_none());
                assert!(args.tags.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_add_requires_content() {
        assert!(Cli::try_parse_from(["memarc", "add"]).is_err());
    }

    #[test]
    fn test_global_db_flag() {
        let cli = Cli::try_parse_from(["memarc", "list", "--db", "/tmp/a.db", "--date", "2024-03-15"])
            .unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/a.db")));
        match cli.command {
            Command::List(args) => assert_eq!(args.date.as_deref(), Some("2024-03-15")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_edit() {
        let cli = Cli::try_parse_from(["memarc", "edit", "3", "--tags", ""]).unwrap();
        match cli.command {
            Command::Edit(args) => {
                assert_eq!(args.id, 3);
                assert_eq!(args.tags.as_deref(), Some(""));
                assert!(args.content.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["memarc", "delete", "abc"]).is_err());
    }
}
