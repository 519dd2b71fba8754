// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Base URL of the notebook API (overrides the config file)
    #[arg(short, long, value_name = "URL", env = "NOTEVIEW_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Path to a TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all folders
    Folders {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the notes of a folder
    Notes {
        #[arg(value_name = "FOLDER_ID")]
        folder_id: String,

        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Open a folder, and optionally one of its notes, in the browser
    Open {
        #[arg(value_name = "FOLDER_ID")]
        folder_id: String,

        #[arg(value_name = "NOTE_ID")]
        note_id: Option<String>,

        /// Output the view state as JSON instead of opening the browser
        #[arg(long)]
        json: bool,
    },

    /// Create a note stub in a folder and open it
    NewNote {
        #[arg(value_name = "FOLDER_ID")]
        folder_id: String,
    },

    /// Update title and/or content of a note
    Edit {
        #[arg(value_name = "FOLDER_ID")]
        folder_id: String,

        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// New title (keeps the current title when omitted)
        #[arg(long)]
        title: Option<String>,

        /// New content (keeps the current content when omitted)
        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a note
    RmNote {
        #[arg(value_name = "FOLDER_ID")]
        folder_id: String,

        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Create a folder
    NewFolder {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Rename a folder
    RenameFolder {
        #[arg(value_name = "FOLDER_ID")]
        folder_id: String,

        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Delete a folder and all of its notes
    RmFolder {
        #[arg(value_name = "FOLDER_ID")]
        folder_id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Search all notes by title or content
    Search {
        #[arg(value_name = "QUERY")]
        query: String,

        /// Output the hits as JSON instead of rendering them
        #[arg(long)]
        json: bool,

        /// Open the Nth hit (1-based) in the editor instead of listing
        #[arg(long, value_name = "N")]
        open: Option<usize>,
    },
}
