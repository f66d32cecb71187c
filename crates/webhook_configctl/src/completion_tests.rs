use super::*;
use std::fs;
use tempfile::TempDir;

fn fixture() -> (TempDir, String) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("deploy.sh"), "#!/bin/sh\n").expect("write");
    fs::write(temp_dir.path().join("deploy-staging.sh"), "#!/bin/sh\n").expect("write");
    fs::write(temp_dir.path().join("readme.md"), "").expect("write");
    fs::create_dir(temp_dir.path().join("deploy.d")).expect("mkdir");
    let base = format!("{}/", temp_dir.path().display());
    (temp_dir, base)
}

#[test]
fn test_suggestions_match_prefix_and_mark_directories() {
    let (_dir, base) = fixture();

    let suggestions = path_suggestions(&format!("{base}dep"));

    assert_eq!(
        suggestions,
        vec![
            format!("{base}deploy-staging.sh"),
            format!("{base}deploy.d/"),
            format!("{base}deploy.sh"),
        ]
    );
}

#[test]
fn test_trailing_separator_lists_directory() {
    let (_dir, base) = fixture();

    let suggestions = path_suggestions(&base);

    assert_eq!(suggestions.len(), 4);
    assert!(suggestions.contains(&format!("{base}readme.md")));
}

#[test]
fn test_unreadable_directory_yields_nothing() {
    let (_dir, base) = fixture();

    assert!(path_suggestions(&format!("{base}missing/dep")).is_empty());
}

#[test]
fn test_no_match_yields_nothing() {
    let (_dir, base) = fixture();

    assert!(path_suggestions(&format!("{base}zzz")).is_empty());
}

#[test]
fn test_complete_single_match() {
    let (_dir, base) = fixture();

    assert_eq!(
        complete_path(&format!("{base}re")),
        Some(format!("{base}readme.md"))
    );
}

#[test]
fn test_complete_extends_to_shared_prefix() {
    let (_dir, base) = fixture();

    assert_eq!(
        complete_path(&format!("{base}d")),
        Some(format!("{base}deploy"))
    );
}

#[test]
fn test_complete_without_progress_is_none() {
    let (_dir, base) = fixture();

    assert_eq!(complete_path(&format!("{base}deploy")), None);
}

#[test]
fn test_common_prefix() {
    assert_eq!(common_prefix("deploy.sh", "deploy.d/"), "deploy.");
    assert_eq!(common_prefix("abc", "xyz"), "");
    assert_eq!(common_prefix("é1", "é2"), "é");
}
