use codeprep::output::write_output;
use std::fs;
use tempfile::tempdir;

#[tokio::test]
async fn test_write_output_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prompt.md");

    write_output("formatted prompt\n", &path.to_string_lossy())
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "formatted prompt\n");
}

#[tokio::test]
async fn test_write_output_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prompt.md");
    fs::write(&path, "old content that is much longer\n").unwrap();

    write_output("new\n", &path.to_string_lossy()).await.unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
}

#[tokio::test]
async fn test_write_output_to_unwritable_path_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir").join("out.txt");

    let result = write_output("text\n", &path.to_string_lossy()).await;

    assert!(result.is_err());
}
