use crate::common::command::{compare_trees, trees_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use filetime::FileTime;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn ignore_modification_times(trees_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let a_file = trees_dir.path().join("a/notes.txt");
    let b_file = trees_dir.path().join("b/notes.txt");
    write_file(FileSpec::new(a_file.clone(), "same words".to_string()));
    write_file(FileSpec::new(b_file.clone(), "same words".to_string()));

    filetime::set_file_mtime(&a_file, FileTime::from_unix_time(1_000_000, 0))?;
    filetime::set_file_mtime(&b_file, FileTime::from_unix_time(2_000_000, 0))?;

    let stdout = compare_trees(trees_dir.path(), &[])?;
    assert_eq!(stdout, "No differences.\n");

    Ok(())
}
