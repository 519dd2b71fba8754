// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Folder not found: {0}")]
    FolderNotFound(String),
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("No folder selected")]
    NoFolderSelected,
    #[error("No note selected")]
    NoNoteSelected,
    #[error("Folder name must not be empty")]
    EmptyFolderName,
    #[error("Backend error: {0}")]
    BackendError(String),
}
