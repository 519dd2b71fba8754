// src/ports/html.rs
use html_escape::{encode_double_quoted_attribute, encode_text};
use regex::Regex;

use crate::application::{SearchHit, ViewState};
use crate::constants::NOTE_PREVIEW_CHARS;
use crate::domain::{Folder, Note};
use crate::util::text::{clip, format_timestamp};

/// Pure view-state to HTML mapping. No I/O, no DOM: every method returns a
/// string, so rendering is testable in isolation and the browser delivery is
/// someone else's job.
#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Wrap every case-insensitive occurrence of the literal `query` in a
    /// highlight span, HTML-escaping the surrounding text.
    ///
    /// The query is escaped before the pattern is built, so metacharacters
    /// like `a(b` search for the literal text instead of blowing up.
    pub fn highlight_matches(&self, text: &str, query: &str) -> String {
        if query.is_empty() {
            return encode_text(text).into_owned();
        }

        // Escaped literal, cannot fail to compile
        let pattern = Regex::new(&format!("(?i){}", regex::escape(query))).unwrap();

        let mut out = String::with_capacity(text.len() + 64);
        let mut last = 0;
        for found in pattern.find_iter(text) {
            out.push_str(&encode_text(&text[last..found.start()]));
            out.push_str(r#"<span class="search-highlight">"#);
            out.push_str(&encode_text(found.as_str()));
            out.push_str("</span>");
            last = found.end();
        }
        out.push_str(&encode_text(&text[last..]));
        out
    }

    /// One entry per folder, in the order received. The active folder is
    /// marked by id comparison.
    pub fn render_folder_list(&self, folders: &[Folder], active_id: Option<&str>) -> String {
        folders
            .iter()
            .map(|folder| {
                let active = if active_id == Some(folder.id.as_str()) {
                    " active"
                } else {
                    ""
                };
                format!(
                    r#"<div class="folder-item{active}" data-id="{id}">
    <span class="folder-name">{name}</span>
    <span class="note-count">{count}</span>
</div>"#,
                    active = active,
                    id = encode_double_quoted_attribute(&folder.id),
                    name = encode_text(&folder.name),
                    count = folder.note_count,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_note_list(&self, notes: &[Note], active_id: Option<&str>) -> String {
        if notes.is_empty() {
            return r#"<div class="notes-empty">No notes yet</div>"#.to_string();
        }

        notes
            .iter()
            .map(|note| {
                let active = if active_id == Some(note.id.as_str()) {
                    " active"
                } else {
                    ""
                };
                let title = if note.title.is_empty() {
                    "Untitled"
                } else {
                    note.title.as_str()
                };
                let preview = if note.content.is_empty() {
                    "No content".to_string()
                } else {
                    clip(&note.content, NOTE_PREVIEW_CHARS)
                };
                format!(
                    r#"<div class="note-item{active}" data-id="{id}">
    <div class="note-item-title">{title}</div>
    <div class="note-item-preview">{preview}</div>
    <div class="note-item-date">{date}</div>
</div>"#,
                    active = active,
                    id = encode_double_quoted_attribute(&note.id),
                    title = encode_text(title),
                    preview = encode_text(&preview),
                    date = format_timestamp(note.updated_at),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_editor(&self, note: &Note) -> String {
        format!(
            r#"<div class="note-editor">
    <input class="note-title" value="{title}">
    <textarea class="note-content">{content}</textarea>
</div>"#,
            title = encode_double_quoted_attribute(&note.title),
            content = encode_text(&note.content),
        )
    }

    /// Flat search result list: highlighted title, folder label, highlighted
    /// content preview per hit.
    pub fn render_search_results(&self, hits: &[SearchHit], query: &str) -> String {
        if hits.is_empty() {
            return r#"<div class="search-empty">No matching notes</div>"#.to_string();
        }

        hits.iter()
            .map(|hit| {
                format!(
                    r#"<div class="search-result-item" data-folder-id="{folder_id}" data-note-id="{note_id}">
    <div class="search-result-title">{title}</div>
    <div class="search-result-folder">{folder}</div>
    <div class="search-result-preview">{preview}</div>
</div>"#,
                    folder_id = encode_double_quoted_attribute(&hit.folder_id),
                    note_id = encode_double_quoted_attribute(&hit.note_id),
                    title = self.highlight_matches(&hit.title, query),
                    folder = encode_text(&hit.folder_name),
                    preview = self.highlight_matches(&hit.preview, query),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Compose the full page from the view state. Panel visibility is a pure
    /// function of the selection and search state.
    pub fn render_page(&self, state: &ViewState) -> String {
        let active_folder = state.current_folder.as_ref().map(|f| f.id.as_str());
        let active_note = state.current_note.as_ref().map(|n| n.id.as_str());

        let folder_list = self.render_folder_list(&state.folders, active_folder);

        let (search_query, search_block) = match &state.search {
            Some(search) => (
                search.query.clone(),
                format!(
                    "<div class=\"search-results\">\n{}\n</div>",
                    self.render_search_results(&search.hits, &search.query)
                ),
            ),
            None => (String::new(), String::new()),
        };

        let header = match &state.current_folder {
            Some(folder) => encode_text(&folder.name).into_owned(),
            None => "Select a folder".to_string(),
        };

        let notes_block = match &state.current_folder {
            Some(_) => format!(
                "<div class=\"note-list\">\n{}\n</div>",
                self.render_note_list(&state.notes, active_note)
            ),
            None => {
                r#"<div class="empty-state">Select a folder to get started</div>"#.to_string()
            }
        };

        let editor_block = match &state.current_note {
            Some(note) => self.render_editor(note),
            None => String::new(),
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Noteview</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            margin: 0;
            background-color: #f5f5f5;
        }}
        .layout {{
            display: flex;
            min-height: 100vh;
        }}
        .sidebar {{
            width: 280px;
            background: #2c3e50;
            color: #ecf0f1;
            padding: 1rem;
        }}
        .search-box {{
            background: #34495e;
            border-radius: 4px;
            padding: 6px 10px;
            margin-bottom: 1rem;
            color: #bdc3c7;
        }}
        .folder-item {{
            display: flex;
            justify-content: space-between;
            padding: 8px 10px;
            border-radius: 4px;
            cursor: pointer;
        }}
        .folder-item.active {{
            background: #3498db;
        }}
        .note-count {{
            color: #bdc3c7;
            font-size: 0.85em;
        }}
        .content {{
            flex: 1;
            padding: 1.5rem 2rem;
        }}
        .notes-header {{
            font-size: 1.3em;
            font-weight: 600;
            margin-bottom: 1rem;
        }}
        .note-item {{
            background: white;
            border-radius: 6px;
            padding: 10px 14px;
            margin-bottom: 8px;
            box-shadow: 0 1px 2px rgba(0,0,0,0.08);
        }}
        .note-item.active {{
            outline: 2px solid #3498db;
        }}
        .note-item-title {{
            font-weight: 600;
        }}
        .note-item-preview {{
            color: #666;
            font-size: 0.9em;
        }}
        .note-item-date {{
            color: #999;
            font-size: 0.8em;
        }}
        .notes-empty, .empty-state, .search-empty {{
            padding: 20px;
            color: #999;
            text-align: center;
        }}
        .note-editor {{
            margin-top: 1.5rem;
        }}
        .note-title {{
            width: 100%;
            font-size: 1.1em;
            padding: 8px;
            margin-bottom: 8px;
            border: 1px solid #ddd;
            border-radius: 4px;
        }}
        .note-content {{
            width: 100%;
            min-height: 300px;
            padding: 8px;
            border: 1px solid #ddd;
            border-radius: 4px;
            font-family: inherit;
        }}
        .search-result-item {{
            background: #34495e;
            border-radius: 4px;
            padding: 8px 10px;
            margin-bottom: 6px;
        }}
        .search-result-folder {{
            color: #bdc3c7;
            font-size: 0.8em;
        }}
        .search-result-preview {{
            color: #ecf0f1;
            font-size: 0.85em;
        }}
        .search-highlight {{
            background: #f1c40f;
            color: #2c3e50;
            border-radius: 2px;
        }}
    </style>
</head>
<body>
    <div class="layout">
        <aside class="sidebar">
            <div class="search-box">{search_query}</div>
            {search_block}
            <div class="folder-list">
{folder_list}
            </div>
        </aside>
        <main class="content">
            <header class="notes-header">{header}</header>
            {notes_block}
            {editor_block}
        </main>
    </div>
</body>
</html>"#,
            search_query = encode_text(&search_query),
            search_block = search_block,
            folder_list = folder_list,
            header = header,
            notes_block = notes_block,
            editor_block = editor_block,
        )
    }
}
