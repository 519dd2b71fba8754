// src/application/workspace.rs
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::application::search::{self, SearchHit};
use crate::constants::DEFAULT_NOTE_TITLE;
use crate::domain::{DomainError, Folder, Note, NoteDraft, NoteUpdate};

/// Backend access used by the workspace.
///
/// Implemented by `infrastructure::RestRepository` for the real service and
/// by `util::testing::MockNotebookRepository` in tests.
pub trait NotebookRepository {
    fn list_folders(&mut self) -> Result<Vec<Folder>, DomainError>;

    fn list_folder_notes(&mut self, folder_id: &str) -> Result<Vec<Note>, DomainError>;

    /// All notes across every folder, used by search only
    fn list_all_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    fn create_note(&mut self, draft: &NoteDraft) -> Result<Note, DomainError>;

    fn update_note(&mut self, id: &str, update: &NoteUpdate) -> Result<Note, DomainError>;

    fn delete_note(&mut self, id: &str) -> Result<(), DomainError>;

    fn create_folder(&mut self, name: &str) -> Result<Folder, DomainError>;

    fn rename_folder(&mut self, id: &str, name: &str) -> Result<Folder, DomainError>;

    fn delete_folder(&mut self, id: &str) -> Result<(), DomainError>;
}

/// An active search result list.
#[derive(Debug, Clone, Serialize)]
pub struct SearchView {
    pub query: String,
    pub hits: Vec<SearchHit>,
}

/// The in-memory view state: cached collections plus the current selection.
///
/// Collections are replaced wholesale on each fetch. Selection is transient
/// and cleared whenever its referent is deleted or its containing folder
/// changes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewState {
    pub folders: Vec<Folder>,
    pub notes: Vec<Note>,
    pub current_folder: Option<Folder>,
    pub current_note: Option<Note>,
    pub search: Option<SearchView>,
}

/// The four visibility regions of the view, derived from state alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRegion {
    Empty,
    FolderSelected,
    NoteOpen,
    SearchActive,
}

impl ViewState {
    pub fn region(&self) -> ViewRegion {
        if self.search.is_some() {
            ViewRegion::SearchActive
        } else if self.current_note.is_some() {
            ViewRegion::NoteOpen
        } else if self.current_folder.is_some() {
            ViewRegion::FolderSelected
        } else {
            ViewRegion::Empty
        }
    }
}

/// View-state synchronizer: every operation fetches from the backend,
/// mutates the local state, and leaves rendering to the presentation layer.
pub struct Workspace<R: NotebookRepository> {
    repository: R,
    state: ViewState,
    default_note_title: String,
}

impl<R: NotebookRepository> Workspace<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            state: ViewState::default(),
            default_note_title: DEFAULT_NOTE_TITLE.to_string(),
        }
    }

    pub fn with_default_note_title(mut self, title: impl Into<String>) -> Self {
        self.default_note_title = title.into();
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Fetch all folders and replace the local list. Selection is untouched.
    pub fn refresh_folders(&mut self) -> Result<(), DomainError> {
        self.state.folders = self.repository.list_folders()?;
        debug!(count = self.state.folders.len(), "Refreshed folder list");
        Ok(())
    }

    /// Make a folder current, clear the note selection, and replace the note
    /// list with that folder's notes.
    ///
    /// The folder must be present in the cached folder list. On a failed
    /// notes fetch the error propagates and the note list keeps its
    /// pre-action contents.
    pub fn select_folder(&mut self, folder_id: &str) -> Result<(), DomainError> {
        let folder = self
            .state
            .folders
            .iter()
            .find(|f| f.id == folder_id)
            .cloned()
            .ok_or_else(|| DomainError::FolderNotFound(folder_id.to_string()))?;

        self.state.current_folder = Some(folder);
        self.state.current_note = None;

        let notes = self.repository.list_folder_notes(folder_id)?;
        debug!(folder_id, count = notes.len(), "Loaded folder notes");
        self.state.notes = notes;
        Ok(())
    }

    /// Make a note from the cached note list current.
    pub fn select_note(&mut self, note_id: &str) -> Result<(), DomainError> {
        let note = self
            .state
            .notes
            .iter()
            .find(|n| n.id == note_id)
            .cloned()
            .ok_or_else(|| DomainError::NoteNotFound(note_id.to_string()))?;

        self.state.current_note = Some(note);
        Ok(())
    }

    /// Create a note stub in the current folder, prepend the server-returned
    /// note to the local list, and select it.
    pub fn create_note(&mut self) -> Result<Note, DomainError> {
        let folder = self
            .state
            .current_folder
            .as_ref()
            .ok_or(DomainError::NoFolderSelected)?;

        let draft = NoteDraft {
            title: self.default_note_title.clone(),
            content: String::new(),
            folder_id: folder.id.clone(),
        };
        let note = self.repository.create_note(&draft)?;
        info!(note_id = %note.id, folder_id = %note.folder_id, "Created note");

        self.state.notes.insert(0, note.clone());
        self.state.current_note = Some(note.clone());
        self.refresh_folder_counts();
        Ok(note)
    }

    /// Save title and content of the current note.
    ///
    /// Not optimistic: the local list entry and selection are replaced with
    /// the server-returned note only after the backend confirms. On failure
    /// the error propagates and local state is unchanged.
    pub fn save_note(&mut self, title: &str, content: &str) -> Result<(), DomainError> {
        let note_id = self
            .state
            .current_note
            .as_ref()
            .map(|n| n.id.clone())
            .ok_or(DomainError::NoNoteSelected)?;

        let update = NoteUpdate {
            title: title.to_string(),
            content: content.to_string(),
        };
        let updated = self.repository.update_note(&note_id, &update)?;
        info!(note_id = %updated.id, "Saved note");

        if let Some(slot) = self.state.notes.iter_mut().find(|n| n.id == updated.id) {
            *slot = updated.clone();
        }
        self.state.current_note = Some(updated);
        Ok(())
    }

    /// Delete the current note. Local state is mutated only after the
    /// backend confirms the deletion.
    pub fn delete_note(&mut self) -> Result<(), DomainError> {
        let note_id = self
            .state
            .current_note
            .as_ref()
            .map(|n| n.id.clone())
            .ok_or(DomainError::NoNoteSelected)?;

        self.repository.delete_note(&note_id)?;
        info!(note_id = %note_id, "Deleted note");

        self.state.notes.retain(|n| n.id != note_id);
        self.state.current_note = None;
        self.refresh_folder_counts();
        Ok(())
    }

    /// Create a folder, then refresh the folder list.
    pub fn create_folder(&mut self, name: &str) -> Result<Folder, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyFolderName);
        }

        let folder = self.repository.create_folder(name)?;
        info!(folder_id = %folder.id, name, "Created folder");
        self.refresh_folder_counts();
        Ok(folder)
    }

    /// Rename a folder, then refresh the folder list.
    pub fn rename_folder(&mut self, folder_id: &str, name: &str) -> Result<Folder, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyFolderName);
        }

        let folder = self.repository.rename_folder(folder_id, name)?;
        info!(folder_id = %folder.id, name, "Renamed folder");
        self.refresh_folder_counts();
        Ok(folder)
    }

    /// Delete a folder. Deleting the current folder resets all selection and
    /// the note list to the empty state.
    pub fn delete_folder(&mut self, folder_id: &str) -> Result<(), DomainError> {
        self.repository.delete_folder(folder_id)?;
        info!(folder_id, "Deleted folder");

        let was_current = self
            .state
            .current_folder
            .as_ref()
            .is_some_and(|f| f.id == folder_id);
        if was_current {
            self.state.current_folder = None;
            self.state.current_note = None;
            self.state.notes.clear();
        }
        self.refresh_folder_counts();
        Ok(())
    }

    /// Run a client-side search over all folders and all notes.
    ///
    /// A blank query clears any active search. Both fetches are unscoped and
    /// independent of the current selection; either failure propagates.
    pub fn search(&mut self, query: &str) -> Result<&[SearchHit], DomainError> {
        let query = query.trim();
        if query.is_empty() {
            self.state.search = None;
            return Ok(&[]);
        }

        let folders = self.repository.list_folders()?;
        let all_notes = self.repository.list_all_notes()?;
        let hits = search::build_hits(&folders, &all_notes, query);
        debug!(query, hits = hits.len(), "Search complete");

        let view = self.state.search.insert(SearchView {
            query: query.to_string(),
            hits,
        });
        Ok(&view.hits)
    }

    /// Navigate to a search hit: clear the search, select its folder, load
    /// that folder's notes, and open the note in the editor.
    ///
    /// A stale folder id (folder deleted since the hit was built) is
    /// tolerated; a note missing from the loaded list is an error.
    pub fn open_search_result(
        &mut self,
        folder_id: &str,
        note_id: &str,
    ) -> Result<(), DomainError> {
        self.state.search = None;

        self.state.current_folder = self.state.folders.iter().find(|f| f.id == folder_id).cloned();
        self.state.current_note = None;

        self.state.notes = self.repository.list_folder_notes(folder_id)?;
        self.select_note(note_id)
    }

    /// Best-effort refresh of the folder list after a mutation changed the
    /// note counts. A failure is logged and otherwise silent.
    fn refresh_folder_counts(&mut self) {
        match self.repository.list_folders() {
            Ok(folders) => self.state.folders = folders,
            Err(error) => warn!(%error, "Failed to refresh folder counts"),
        }
    }
}
