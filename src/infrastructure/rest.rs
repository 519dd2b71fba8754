// src/infrastructure/rest.rs
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use tracing::{debug, info, instrument};

use crate::application::NotebookRepository;
use crate::domain::{DomainError, Folder, Note, NoteDraft, NoteUpdate};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Notebook backend over JSON/HTTP.
///
/// Thin and synchronous: one request per operation, no retries, no caching.
/// All state lives in the `Workspace`; this type only moves documents.
pub struct RestRepository {
    client: Client,
    base_url: String,
}

impl RestRepository {
    pub fn new(base_url: impl Into<String>) -> Result<Self, DomainError> {
        let base_url = normalize_base_url(base_url.into())?;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| DomainError::BackendError(format!("Failed to build HTTP client: {e}")))?;

        info!(%base_url, "Connected notebook backend");
        Ok(Self { client, base_url })
    }

    /// The normalized API base URL used by this repository.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport(error: reqwest::Error) -> DomainError {
        DomainError::BackendError(error.to_string())
    }

    fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, DomainError> {
        response
            .json()
            .map_err(|e| DomainError::BackendError(format!("Invalid response body: {e}")))
    }

    /// Map non-2xx statuses to a domain error. A 404 becomes the
    /// caller-supplied not-found variant so ids surface in messages.
    fn expect_success(
        response: Response,
        not_found: Option<DomainError>,
    ) -> Result<Response, DomainError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            if let Some(error) = not_found {
                return Err(error);
            }
        }
        let body = response.text().unwrap_or_default();
        Err(DomainError::BackendError(format!(
            "Request failed ({status}): {body}"
        )))
    }
}

impl NotebookRepository for RestRepository {
    #[instrument(level = "debug", skip(self))]
    fn list_folders(&mut self) -> Result<Vec<Folder>, DomainError> {
        let response = self
            .client
            .get(self.url("/folders"))
            .send()
            .map_err(Self::transport)?;
        let folders: Vec<Folder> = Self::decode(Self::expect_success(response, None)?)?;
        debug!(count = folders.len(), "Fetched folders");
        Ok(folders)
    }

    #[instrument(level = "debug", skip(self))]
    fn list_folder_notes(&mut self, folder_id: &str) -> Result<Vec<Note>, DomainError> {
        let response = self
            .client
            .get(self.url(&format!("/folders/{folder_id}/notes")))
            .send()
            .map_err(Self::transport)?;
        let response = Self::expect_success(
            response,
            Some(DomainError::FolderNotFound(folder_id.to_string())),
        )?;
        Self::decode(response)
    }

    #[instrument(level = "debug", skip(self))]
    fn list_all_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        let response = self
            .client
            .get(self.url("/notes"))
            .send()
            .map_err(Self::transport)?;
        Self::decode(Self::expect_success(response, None)?)
    }

    #[instrument(level = "debug", skip(self, draft))]
    fn create_note(&mut self, draft: &NoteDraft) -> Result<Note, DomainError> {
        let response = self
            .client
            .post(self.url("/notes"))
            .json(draft)
            .send()
            .map_err(Self::transport)?;
        Self::decode(Self::expect_success(response, None)?)
    }

    #[instrument(level = "debug", skip(self, update))]
    fn update_note(&mut self, id: &str, update: &NoteUpdate) -> Result<Note, DomainError> {
        let response = self
            .client
            .put(self.url(&format!("/notes/{id}")))
            .json(update)
            .send()
            .map_err(Self::transport)?;
        let response =
            Self::expect_success(response, Some(DomainError::NoteNotFound(id.to_string())))?;
        Self::decode(response)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.url(&format!("/notes/{id}")))
            .send()
            .map_err(Self::transport)?;
        Self::expect_success(response, Some(DomainError::NoteNotFound(id.to_string())))?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn create_folder(&mut self, name: &str) -> Result<Folder, DomainError> {
        let response = self
            .client
            .post(self.url("/folders"))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .map_err(Self::transport)?;
        Self::decode(Self::expect_success(response, None)?)
    }

    #[instrument(level = "debug", skip(self))]
    fn rename_folder(&mut self, id: &str, name: &str) -> Result<Folder, DomainError> {
        let response = self
            .client
            .put(self.url(&format!("/folders/{id}")))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .map_err(Self::transport)?;
        let response =
            Self::expect_success(response, Some(DomainError::FolderNotFound(id.to_string())))?;
        Self::decode(response)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_folder(&mut self, id: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.url(&format!("/folders/{id}")))
            .send()
            .map_err(Self::transport)?;
        Self::expect_success(response, Some(DomainError::FolderNotFound(id.to_string())))?;
        Ok(())
    }
}

fn normalize_base_url(raw: String) -> Result<String, DomainError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(DomainError::BackendError(format!(
            "Invalid API base URL (expected http(s) scheme): {raw:?}"
        )));
    }
    Ok(trimmed.to_string())
}
