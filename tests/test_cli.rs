use clap::Parser;
use noteview::cli::args::{Args, Command};

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["noteview"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_folders_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["noteview", "folders"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Folders { json } => assert!(!json),
        _ => panic!("Expected Folders command"),
    }
    assert_eq!(parsed.api_url, None);
}

#[test]
fn given_open_with_note_when_parsing_then_captures_both_ids() {
    // Arrange
    let args = vec!["noteview", "open", "f1", "n1", "--json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Open {
            folder_id,
            note_id,
            json,
        } => {
            assert_eq!(folder_id, "f1");
            assert_eq!(note_id, Some("n1".to_string()));
            assert!(json);
        }
        _ => panic!("Expected Open command"),
    }
}

#[test]
fn given_edit_command_when_parsing_then_captures_optional_fields() {
    // Arrange
    let args = vec![
        "noteview",
        "edit",
        "f1",
        "n1",
        "--title",
        "Weekly minutes",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Edit {
            folder_id,
            note_id,
            title,
            content,
        } => {
            assert_eq!(folder_id, "f1");
            assert_eq!(note_id, "n1");
            assert_eq!(title, Some("Weekly minutes".to_string()));
            assert_eq!(content, None);
        }
        _ => panic!("Expected Edit command"),
    }
}

#[test]
fn given_rm_note_with_yes_when_parsing_then_skips_confirmation() {
    // Arrange
    let args = vec!["noteview", "rm-note", "f1", "n1", "--yes"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::RmNote {
            folder_id,
            note_id,
            yes,
        } => {
            assert_eq!(folder_id, "f1");
            assert_eq!(note_id, "n1");
            assert!(yes);
        }
        _ => panic!("Expected RmNote command"),
    }
}

#[test]
fn given_search_with_open_when_parsing_then_captures_hit_number() {
    // Arrange
    let args = vec!["noteview", "search", "foo", "--open", "2"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Search { query, json, open } => {
            assert_eq!(query, "foo");
            assert!(!json);
            assert_eq!(open, Some(2));
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn given_global_api_url_flag_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "noteview",
        "-a",
        "http://localhost:3000/api",
        "folders",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.api_url, Some("http://localhost:3000/api".to_string()));
}

#[test]
fn given_verbose_flags_when_parsing_then_counts_them() {
    // Arrange
    let args = vec!["noteview", "-vv", "folders"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_new_folder_command_when_parsing_then_captures_name() {
    // Arrange
    let args = vec!["noteview", "new-folder", "Archive"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::NewFolder { name } => assert_eq!(name, "Archive"),
        _ => panic!("Expected NewFolder command"),
    }
}
