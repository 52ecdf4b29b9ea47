use crate::common::command::{compare_trees, trees_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_entries_missing_from_either_side(
    trees_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = trees_dir.path();
    write_file(FileSpec::new(root.join("a/shared/old.txt"), "old".to_string()));
    write_file(FileSpec::new(root.join("a/shared/keep.txt"), "keep".to_string()));
    write_file(FileSpec::new(root.join("a/gone/deep/file"), "x".to_string()));
    write_file(FileSpec::new(root.join("b/shared/keep.txt"), "keep".to_string()));
    write_file(FileSpec::new(root.join("b/shared/new.txt"), "new".to_string()));

    let stdout = compare_trees(root, &["--color", "never", "--no-legend"])?;

    // a directory missing on one side is reported once, without its contents
    assert_eq!(
        stdout,
        "Diff:\n\
         ? <root>:\n\
         |  - gone\n\
         |  ? shared:\n\
         |  |  + new.txt\n\
         |  |  - old.txt\n"
    );

    Ok(())
}
