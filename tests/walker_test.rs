mod common;

use collectkit::error::Error;
use collectkit::walker::{traverse, PathMatcher};
use common::write_file;
use std::path::PathBuf;
use tempfile::TempDir;

fn nested_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "a.json", "1");
    write_file(root, "l1/b.json", "2");
    write_file(root, "l1/l2/c.json", "3");
    write_file(root, "l1/l2/l3/d.json", "4");
    temp_dir
}

fn names(paths: Vec<PathBuf>) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect()
}

#[test]
fn test_unbounded_traversal_is_breadth_first() {
    let temp_dir = nested_tree();
    let files: Vec<_> = traverse(temp_dir.path(), 0).collect::<Result<_, _>>().unwrap();
    assert_eq!(names(files), vec!["a.json", "b.json", "c.json", "d.json"]);
}

#[test]
fn test_depth_bound() {
    let temp_dir = nested_tree();

    let files: Vec<_> = traverse(temp_dir.path(), 1).collect::<Result<_, _>>().unwrap();
    assert_eq!(names(files), vec!["a.json", "b.json"]);

    let files: Vec<_> = traverse(temp_dir.path(), 2).collect::<Result<_, _>>().unwrap();
    assert_eq!(names(files), vec!["a.json", "b.json", "c.json"]);

    let files: Vec<_> = traverse(temp_dir.path(), 10).collect::<Result<_, _>>().unwrap();
    assert_eq!(files.len(), 4);
}

#[test]
fn test_directories_are_not_yielded() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("empty/nested")).unwrap();
    assert_eq!(traverse(temp_dir.path(), 0).count(), 0);
}

#[test]
fn test_matching_filters_lazily() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "keep.anim.json", "{}");
    write_file(root, "skip.txt", "");
    write_file(root, "d/also.anim.json", "{}");
    write_file(root, "d/also.json", "{}");

    let matcher = PathMatcher::new("*.anim.json").unwrap();
    let mut files = names(traverse(root, 0).matching(matcher).collect::<Result<_, _>>().unwrap());
    files.sort();
    assert_eq!(files, vec!["also.anim.json", "keep.anim.json"]);
}

#[test]
fn test_matching_on_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "sort.animation/data.json", "{}");
    write_file(root, "other/data.json", "{}");

    let matcher = PathMatcher::new("*.animation/*.json").unwrap();
    let files: Vec<_> = traverse(root, 0).matching(matcher).collect::<Result<_, _>>().unwrap();
    assert_eq!(files, vec![root.join("sort.animation/data.json")]);
}

#[test]
fn test_unreadable_root_fails_traversal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let mut traversal = traverse(&missing, 0);
    match traversal.next() {
        Some(Err(Error::TraversalError { path, .. })) => assert_eq!(path, missing),
        other => panic!("Expected TraversalError, got {other:?}"),
    }
    assert!(traversal.next().is_none());
}

#[test]
fn test_file_root_fails_traversal() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_file(temp_dir.path(), "plain.txt", "");
    let result: Result<Vec<_>, _> = traverse(&file, 0).collect();
    assert!(matches!(result, Err(Error::TraversalError { .. })));
}
