use std::fs;

use reader_engine::{ensure_output_dir, DirectoryFileSaver, FileSaver, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_download_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("downloads");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn saved_bytes_match_payload_exactly() {
    let temp = TempDir::new().unwrap();
    let saver = DirectoryFileSaver::new(temp.path().join("downloads"));
    let text = "# Title\nBody text";

    let path = saver.save("extracted-content.md", text.as_bytes()).unwrap();

    assert_eq!(path.file_name().unwrap(), "extracted-content.md");
    assert_eq!(fs::read_to_string(&path).unwrap(), text);
}

#[test]
fn saving_again_replaces_previous_download() {
    let temp = TempDir::new().unwrap();
    let saver = DirectoryFileSaver::new(temp.path().to_path_buf());

    let first = saver.save("extracted-content.md", b"hello").unwrap();
    let second = saver.save("extracted-content.md", b"world").unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn name_cannot_escape_download_dir() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("downloads");
    let saver = DirectoryFileSaver::new(dir.clone());

    let path = saver.save("../outside.md", b"x").unwrap();

    assert_eq!(path.parent().unwrap(), dir.as_path());
    assert!(!temp.path().join("outside.md").exists());
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let saver = DirectoryFileSaver::new(file_path.clone());
    let result = saver.save("extracted-content.md", b"data");

    assert!(matches!(result, Err(PersistError::OutputDir(_))));
    assert!(!file_path.with_file_name("extracted-content.md").exists());
}

#[test]
fn empty_name_is_rejected() {
    let temp = TempDir::new().unwrap();
    let saver = DirectoryFileSaver::new(temp.path().to_path_buf());

    let result = saver.save("", b"data");

    assert!(matches!(result, Err(PersistError::InvalidFilename(_))));
}

#[test]
fn failed_replace_keeps_existing_target() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("extracted-content.md");
    fs::create_dir(&blocker).unwrap();
    fs::write(blocker.join("keep.txt"), "kept").unwrap();
    let saver = DirectoryFileSaver::new(temp.path().to_path_buf());

    let result = saver.save("extracted-content.md", b"data");

    assert!(matches!(result, Err(PersistError::Io(_))));
    assert_eq!(fs::read_to_string(blocker.join("keep.txt")).unwrap(), "kept");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}
