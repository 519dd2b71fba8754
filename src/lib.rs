// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::application::{ViewState, Workspace};
use crate::cli::args::{Args, Command};
use crate::infrastructure::{BrowserViewer, Config, RestRepository};
use crate::ports::HtmlPresenter;
use crate::util::text::format_timestamp;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting noteview with arguments");

    // Initialize infrastructure
    let config = match &args.config {
        Some(path) => {
            debug!(?path, "Using provided config path");
            Config::load(path)?
        }
        None => Config::load_or_default()?,
    };
    let api_url = args
        .api_url
        .clone()
        .unwrap_or_else(|| config.backend.api_url.clone());

    let repository = RestRepository::new(api_url.as_str())?;

    // Initialize application
    let mut workspace =
        Workspace::new(repository).with_default_note_title(config.notes.default_title.as_str());

    // Initialize presentation
    let presenter = HtmlPresenter::new();

    match args.command {
        Command::Folders { json } => {
            workspace.refresh_folders()?;
            let folders = &workspace.state().folders;
            if json {
                println!("{}", serde_json::to_string_pretty(folders)?);
            } else {
                for folder in folders {
                    println!("{:<26} {:>5}  {}", folder.id, folder.note_count, folder.name);
                }
            }
        }

        Command::Notes { folder_id, json } => {
            workspace.refresh_folders()?;
            workspace.select_folder(&folder_id)?;
            let notes = &workspace.state().notes;
            if json {
                println!("{}", serde_json::to_string_pretty(notes)?);
            } else {
                for note in notes {
                    let title = if note.title.is_empty() {
                        "Untitled"
                    } else {
                        note.title.as_str()
                    };
                    println!(
                        "{:<26} {:>16}  {}",
                        note.id,
                        format_timestamp(note.updated_at),
                        title
                    );
                }
            }
        }

        Command::Open {
            folder_id,
            note_id,
            json,
        } => {
            workspace.refresh_folders()?;
            workspace.select_folder(&folder_id)?;
            if let Some(note_id) = note_id {
                workspace.select_note(&note_id)?;
            }
            if json {
                println!("{}", serde_json::to_string_pretty(workspace.state())?);
            } else {
                show_page(&presenter, workspace.state())?;
            }
        }

        Command::NewNote { folder_id } => {
            workspace.refresh_folders()?;
            workspace.select_folder(&folder_id)?;
            let note = workspace.create_note()?;
            println!("{}", note.id);
            show_page(&presenter, workspace.state())?;
        }

        Command::Edit {
            folder_id,
            note_id,
            title,
            content,
        } => {
            workspace.refresh_folders()?;
            workspace.select_folder(&folder_id)?;
            workspace.select_note(&note_id)?;

            let current = workspace
                .state()
                .current_note
                .clone()
                .expect("note selected above");
            let title = title.unwrap_or(current.title);
            let content = content.unwrap_or(current.content);

            workspace.save_note(&title, &content)?;
            println!("{note_id}");
        }

        Command::RmNote {
            folder_id,
            note_id,
            yes,
        } => {
            workspace.refresh_folders()?;
            workspace.select_folder(&folder_id)?;
            workspace.select_note(&note_id)?;

            let title = workspace
                .state()
                .current_note
                .as_ref()
                .map(|n| n.title.clone())
                .unwrap_or_else(|| note_id.clone());
            if !yes && !confirm(&format!("Delete note '{title}'?"))? {
                println!("Aborted");
                return Ok(());
            }

            workspace.delete_note()?;
            println!("{note_id}");
        }

        Command::NewFolder { name } => {
            let folder = workspace.create_folder(&name)?;
            println!("{}", folder.id);
        }

        Command::RenameFolder { folder_id, name } => {
            let folder = workspace.rename_folder(&folder_id, &name)?;
            println!("{}", folder.id);
        }

        Command::RmFolder { folder_id, yes } => {
            workspace.refresh_folders()?;
            let name = workspace
                .state()
                .folders
                .iter()
                .find(|f| f.id == folder_id)
                .map(|f| f.name.clone())
                .unwrap_or_else(|| folder_id.clone());
            if !yes && !confirm(&format!("Delete folder '{name}' and all of its notes?"))? {
                println!("Aborted");
                return Ok(());
            }

            workspace.delete_folder(&folder_id)?;
            println!("{folder_id}");
        }

        Command::Search { query, json, open } => {
            workspace.refresh_folders()?;
            eprintln!("Searching...");
            let hits = workspace.search(&query)?.to_vec();
            info!(%query, hits = hits.len(), "Search finished");

            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else if let Some(number) = open {
                let index = number
                    .checked_sub(1)
                    .context("Hit numbers start at 1")?;
                let Some(hit) = hits.get(index) else {
                    bail!("No search hit #{number} ({} hits)", hits.len());
                };
                let (folder_id, note_id) = (hit.folder_id.clone(), hit.note_id.clone());
                workspace.open_search_result(&folder_id, &note_id)?;
                show_page(&presenter, workspace.state())?;
            } else if hits.is_empty() {
                println!("No matching notes");
            } else {
                show_page(&presenter, workspace.state())?;
            }
        }
    }

    Ok(())
}

/// Render the current view state and hand it to the system browser.
fn show_page(presenter: &HtmlPresenter, state: &ViewState) -> Result<()> {
    let html = presenter.render_page(state);
    debug!(bytes = html.len(), "Rendered page");

    let mut viewer = BrowserViewer::new();
    let temp_path = viewer.create_temp_file(&html)?;
    viewer.open_in_browser(&temp_path)?;
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    use std::io::Write;

    print!("{prompt} [y/N] ");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
