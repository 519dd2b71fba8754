// src/constants.rs
//
// Application-wide constants extracted from magic numbers throughout the codebase.
// Each constant is documented with its purpose and usage context.

/// Default base URL of the notebook backend.
///
/// Overridden by `--api-url`, the `NOTEVIEW_API_URL` environment variable, or
/// the `[backend] api_url` key of the config file, in that order.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_API_URL: &str = "https://notebook-backend-xh7d.onrender.com/api";

/// Title given to a freshly created note stub.
///
/// The backend requires a title on `POST /notes`; the stub title is replaced
/// on the first save. Configurable via `[notes] default_title`.
///
/// Used in: `infrastructure/config.rs`, `application/workspace.rs`
pub const DEFAULT_NOTE_TITLE: &str = "New note";

/// Label shown for a search hit whose folder id no longer resolves.
///
/// The unscoped `GET /notes` fetch can return notes whose folder was deleted
/// between the two search requests.
///
/// Used in: `application/search.rs`
pub const UNKNOWN_FOLDER_LABEL: &str = "Unknown folder";

/// Maximum characters of note content shown in the note list preview.
///
/// Used in: `ports/html.rs`
pub const NOTE_PREVIEW_CHARS: usize = 50;

/// Maximum characters of note content shown in a search hit preview.
///
/// Used in: `application/search.rs`
pub const SEARCH_PREVIEW_CHARS: usize = 80;

/// Delay in milliseconds after launching the browser before returning.
///
/// The temp directory holding the rendered page must stay alive until the
/// browser has opened the file.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 200;
