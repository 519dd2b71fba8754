// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A title/content pair associated with exactly one folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "folderId")]
    pub folder_id: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request payload for `POST /notes`.
#[derive(Debug, Clone, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    #[serde(rename = "folderId")]
    pub folder_id: String,
}

/// Request payload for `PUT /notes/:id`.
#[derive(Debug, Clone, Serialize)]
pub struct NoteUpdate {
    pub title: String,
    pub content: String,
}
