// src/application/search.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::{SEARCH_PREVIEW_CHARS, UNKNOWN_FOLDER_LABEL};
use crate::domain::{Folder, Note};
use crate::util::text::preview;

/// A search match annotated with its folder name and a content preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub note_id: String,
    pub folder_id: String,
    pub title: String,
    pub folder_name: String,
    pub preview: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Case-insensitive substring match on title OR content.
pub fn matches(note: &Note, query: &str) -> bool {
    let query = query.to_lowercase();
    note.title.to_lowercase().contains(&query) || note.content.to_lowercase().contains(&query)
}

/// Filter `notes` by `query` and annotate each match with its folder name.
///
/// A folder id that does not resolve against `folders` gets a fixed fallback
/// label. Hit order follows the order of `notes`.
pub fn build_hits(folders: &[Folder], notes: &[Note], query: &str) -> Vec<SearchHit> {
    notes
        .iter()
        .filter(|note| matches(note, query))
        .map(|note| {
            let folder_name = folders
                .iter()
                .find(|f| f.id == note.folder_id)
                .map(|f| f.name.clone())
                .unwrap_or_else(|| UNKNOWN_FOLDER_LABEL.to_string());

            SearchHit {
                note_id: note.id.clone(),
                folder_id: note.folder_id.clone(),
                title: note.title.clone(),
                folder_name,
                preview: preview(&note.content, SEARCH_PREVIEW_CHARS),
                updated_at: note.updated_at,
            }
        })
        .collect()
}
