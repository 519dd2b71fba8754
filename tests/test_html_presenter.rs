mod helpers;

use helpers::{sample_workspace, test_data};
use noteview::ports::HtmlPresenter;

#[test]
fn given_fresh_state_when_rendering_page_then_empty_region_shows_prompt() {
    // Arrange
    let workspace = sample_workspace();
    let presenter = HtmlPresenter::new();

    // Act
    let html = presenter.render_page(workspace.state());

    // Assert
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Select a folder to get started"));
    assert!(!html.contains(r#"<div class="note-editor">"#));
    // One entry per folder, in backend order
    assert_eq!(html.matches(r#"<div class="folder-item"#).count(), 2);
    assert!(html.find("Work").unwrap() < html.find("Ideas").unwrap());
}

#[test]
fn given_selected_folder_when_rendering_page_then_marks_it_active_and_lists_notes() {
    // Arrange
    let mut workspace = sample_workspace();
    workspace
        .select_folder(test_data::WORK)
        .expect("Select should succeed");
    let presenter = HtmlPresenter::new();

    // Act
    let html = presenter.render_page(workspace.state());

    // Assert
    assert!(html.contains(r#"<div class="folder-item active" data-id="f1">"#));
    assert!(html.contains("Work</header>"));
    assert_eq!(html.matches(r#"<div class="note-item""#).count(), 2);
    assert!(!html.contains(r#"<div class="note-editor">"#));
}

#[test]
fn given_open_note_when_rendering_page_then_editor_shows_title_and_content() {
    // Arrange
    let mut workspace = sample_workspace();
    workspace
        .select_folder(test_data::WORK)
        .expect("Select should succeed");
    workspace
        .select_note(test_data::FOO_REPORT)
        .expect("Select should succeed");
    let presenter = HtmlPresenter::new();

    // Act
    let html = presenter.render_page(workspace.state());

    // Assert
    assert!(html.contains(r#"<div class="note-editor">"#));
    assert!(html.contains(r#"value="Foo Report""#));
    assert!(html.contains(">bar</textarea>"));
}

#[test]
fn given_active_search_when_rendering_page_then_hits_and_query_are_shown() {
    // Arrange
    let mut workspace = sample_workspace();
    workspace.search("foo").expect("Search should succeed");
    let presenter = HtmlPresenter::new();

    // Act
    let html = presenter.render_page(workspace.state());

    // Assert
    assert!(html.contains(r#"<div class="search-box">foo</div>"#));
    assert_eq!(html.matches(r#"<div class="search-result-item""#).count(), 2);
    assert!(html.contains(r#"<span class="search-highlight">Foo</span> Report"#));
    assert!(html.contains("search-result-folder"));
}

#[test]
fn given_deleted_current_folder_when_rendering_page_then_back_to_empty_prompt() {
    // Arrange
    let mut workspace = sample_workspace();
    workspace
        .select_folder(test_data::WORK)
        .expect("Select should succeed");
    workspace
        .delete_folder(test_data::WORK)
        .expect("Delete should succeed");
    let presenter = HtmlPresenter::new();

    // Act
    let html = presenter.render_page(workspace.state());

    // Assert
    assert!(html.contains("Select a folder to get started"));
    assert!(html.contains("Select a folder</header>"));
    assert!(!html.contains(r#"<div class="note-editor">"#));
}
