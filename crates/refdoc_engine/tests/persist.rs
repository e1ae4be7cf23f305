use std::fs;

use refdoc_engine::{ensure_parent_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_parent_dir() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("out").join("docs.md");
    assert!(!target.parent().unwrap().exists());
    ensure_parent_dir(&target).unwrap();
    assert!(target.parent().unwrap().is_dir());
}

#[test]
fn atomic_write_replaces_existing_content() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("docs.md");
    let writer = AtomicFileWriter::new(target.clone());

    writer.write("hello").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "hello");

    writer.write("world").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "world");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let writer = AtomicFileWriter::new(blocker.join("docs.md"));
    assert!(writer.write("data").is_err());
    assert!(!blocker.join("docs.md").exists());
}
