// src/domain/folder.rs
use serde::{Deserialize, Serialize};

/// A named container grouping notes.
///
/// The backend stores Mongo-style documents, hence the `_id`/`noteCount`
/// wire names. `note_count` is a denormalized counter maintained by the
/// backend and may be absent for freshly created folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "noteCount", default)]
    pub note_count: u32,
}
