// src/util/testing.rs

use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NotebookRepository;
use crate::domain::{DomainError, Folder, Note, NoteDraft, NoteUpdate};

/// Folder fixture with a fixed update-free shape.
pub fn sample_folder(id: &str, name: &str, note_count: u32) -> Folder {
    Folder {
        id: id.to_string(),
        name: name.to_string(),
        note_count,
    }
}

/// Note fixture with a fixed timestamp so date rendering is deterministic.
pub fn sample_note(id: &str, folder_id: &str, title: &str, content: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        folder_id: folder_id.to_string(),
        updated_at: Some("2024-03-01T10:30:00Z".parse().expect("fixture timestamp")),
    }
}

/// Shared mock backend for testing use cases that depend on
/// `NotebookRepository`.
///
/// Behaves like a small in-memory notebook service: created notes show up in
/// later folder listings, folder note counts are derived from the stored
/// notes, and targeted failures can be injected per operation.
///
/// # Examples
///
/// ```
/// use noteview::util::testing::{sample_folder, sample_note, MockNotebookRepository};
///
/// let mock = MockNotebookRepository::builder()
///     .with_folder(sample_folder("f1", "Work", 1))
///     .with_notes("f1", vec![sample_note("n1", "f1", "Foo Report", "bar")])
///     .build();
/// ```
pub struct MockNotebookRepository {
    folders: Vec<Folder>,
    notes: HashMap<String, Vec<Note>>,
    all_notes_override: Option<Vec<Note>>,
    list_folders_failure_after: Option<u32>,
    folder_notes_failures: HashSet<String>,
    update_failures: HashSet<String>,
    delete_note_failures: HashSet<String>,
    next_id: u32,
}

impl MockNotebookRepository {
    pub fn builder() -> MockNotebookRepositoryBuilder {
        MockNotebookRepositoryBuilder::new()
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn derived_count(&self, folder: &Folder) -> u32 {
        self.notes
            .get(&folder.id)
            .map(|notes| notes.len() as u32)
            .unwrap_or(folder.note_count)
    }
}

impl NotebookRepository for MockNotebookRepository {
    fn list_folders(&mut self) -> Result<Vec<Folder>, DomainError> {
        if let Some(remaining) = &mut self.list_folders_failure_after {
            if *remaining == 0 {
                return Err(DomainError::BackendError("list folders failed (stub)".into()));
            }
            *remaining -= 1;
        }
        Ok(self
            .folders
            .iter()
            .map(|f| Folder {
                note_count: self.derived_count(f),
                ..f.clone()
            })
            .collect())
    }

    fn list_folder_notes(&mut self, folder_id: &str) -> Result<Vec<Note>, DomainError> {
        if self.folder_notes_failures.contains(folder_id) {
            return Err(DomainError::BackendError("list notes failed (stub)".into()));
        }
        Ok(self.notes.get(folder_id).cloned().unwrap_or_default())
    }

    fn list_all_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        if let Some(notes) = &self.all_notes_override {
            return Ok(notes.clone());
        }
        Ok(self
            .folders
            .iter()
            .flat_map(|f| self.notes.get(&f.id).cloned().unwrap_or_default())
            .collect())
    }

    fn create_note(&mut self, draft: &NoteDraft) -> Result<Note, DomainError> {
        let note = Note {
            id: self.next_id("note"),
            title: draft.title.clone(),
            content: draft.content.clone(),
            folder_id: draft.folder_id.clone(),
            updated_at: Some("2024-03-01T12:00:00Z".parse().expect("fixture timestamp")),
        };
        self.notes
            .entry(draft.folder_id.clone())
            .or_default()
            .insert(0, note.clone());
        Ok(note)
    }

    fn update_note(&mut self, id: &str, update: &NoteUpdate) -> Result<Note, DomainError> {
        if self.update_failures.contains(id) {
            return Err(DomainError::BackendError("update failed (stub)".into()));
        }
        for notes in self.notes.values_mut() {
            if let Some(note) = notes.iter_mut().find(|n| n.id == id) {
                note.title = update.title.clone();
                note.content = update.content.clone();
                return Ok(note.clone());
            }
        }
        Err(DomainError::NoteNotFound(id.to_string()))
    }

    fn delete_note(&mut self, id: &str) -> Result<(), DomainError> {
        if self.delete_note_failures.contains(id) {
            return Err(DomainError::BackendError("delete failed (stub)".into()));
        }
        for notes in self.notes.values_mut() {
            let before = notes.len();
            notes.retain(|n| n.id != id);
            if notes.len() < before {
                return Ok(());
            }
        }
        Err(DomainError::NoteNotFound(id.to_string()))
    }

    fn create_folder(&mut self, name: &str) -> Result<Folder, DomainError> {
        let folder = Folder {
            id: self.next_id("folder"),
            name: name.to_string(),
            note_count: 0,
        };
        self.folders.push(folder.clone());
        Ok(folder)
    }

    fn rename_folder(&mut self, id: &str, name: &str) -> Result<Folder, DomainError> {
        let folder = self
            .folders
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| DomainError::FolderNotFound(id.to_string()))?;
        folder.name = name.to_string();
        Ok(folder.clone())
    }

    fn delete_folder(&mut self, id: &str) -> Result<(), DomainError> {
        let before = self.folders.len();
        self.folders.retain(|f| f.id != id);
        if self.folders.len() == before {
            return Err(DomainError::FolderNotFound(id.to_string()));
        }
        self.notes.remove(id);
        Ok(())
    }
}

/// Builder for `MockNotebookRepository`
///
/// Provides a fluent interface for seeding data and injecting failures.
pub struct MockNotebookRepositoryBuilder {
    folders: Vec<Folder>,
    notes: HashMap<String, Vec<Note>>,
    all_notes_override: Option<Vec<Note>>,
    list_folders_failure_after: Option<u32>,
    folder_notes_failures: HashSet<String>,
    update_failures: HashSet<String>,
    delete_note_failures: HashSet<String>,
}

impl MockNotebookRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            folders: Vec::new(),
            notes: HashMap::new(),
            all_notes_override: None,
            list_folders_failure_after: None,
            folder_notes_failures: HashSet::new(),
            update_failures: HashSet::new(),
            delete_note_failures: HashSet::new(),
        }
    }

    /// Add a folder to the backend listing
    pub fn with_folder(mut self, folder: Folder) -> Self {
        self.folders.push(folder);
        self
    }

    /// Seed the notes of a folder
    pub fn with_notes(mut self, folder_id: &str, notes: Vec<Note>) -> Self {
        self.notes.insert(folder_id.to_string(), notes);
        self
    }

    /// Override the unscoped `GET /notes` result independently of the
    /// per-folder seeds (for stale-folder search scenarios)
    pub fn with_all_notes(mut self, notes: Vec<Note>) -> Self {
        self.all_notes_override = Some(notes);
        self
    }

    /// Make `list_folders` fail immediately
    pub fn with_list_folders_failure(mut self) -> Self {
        self.list_folders_failure_after = Some(0);
        self
    }

    /// Make `list_folders` fail after `successes` successful calls
    pub fn with_list_folders_failure_after(mut self, successes: u32) -> Self {
        self.list_folders_failure_after = Some(successes);
        self
    }

    /// Make `list_folder_notes` fail for a specific folder
    pub fn with_folder_notes_failure(mut self, folder_id: &str) -> Self {
        self.folder_notes_failures.insert(folder_id.to_string());
        self
    }

    /// Make `update_note` fail for a specific note id
    pub fn with_update_failure(mut self, note_id: &str) -> Self {
        self.update_failures.insert(note_id.to_string());
        self
    }

    /// Make `delete_note` fail for a specific note id
    pub fn with_delete_note_failure(mut self, note_id: &str) -> Self {
        self.delete_note_failures.insert(note_id.to_string());
        self
    }

    pub fn build(self) -> MockNotebookRepository {
        MockNotebookRepository {
            folders: self.folders,
            notes: self.notes,
            all_notes_override: self.all_notes_override,
            list_folders_failure_after: self.list_folders_failure_after,
            folder_notes_failures: self.folder_notes_failures,
            update_failures: self.update_failures,
            delete_note_failures: self.delete_note_failures,
            next_id: 0,
        }
    }
}

impl Default for MockNotebookRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
