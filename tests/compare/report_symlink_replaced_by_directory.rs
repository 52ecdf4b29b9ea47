use crate::common::command::{compare_trees, trees_dir};
use crate::common::file::{FileSpec, make_dir, make_symlink, write_file};
use crate::common::with_legend;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_symlink_replaced_by_directory(
    trees_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = trees_dir.path();
    make_dir(&root.join("a/target"));
    make_dir(&root.join("b/target"));
    make_dir(&root.join("b/link"));
    make_symlink("target", &root.join("a/link"));

    // links are compared by target, never followed
    make_symlink("one", &root.join("a/pointer"));
    make_symlink("two", &root.join("b/pointer"));
    make_symlink("same", &root.join("a/stable"));
    make_symlink("same", &root.join("b/stable"));
    write_file(FileSpec::new(root.join("a/target/file"), "x".to_string()));
    write_file(FileSpec::new(root.join("b/target/file"), "x".to_string()));

    let stdout = compare_trees(root, &["--color", "never"])?;

    let expected = with_legend(
        "? <root>:\n\
         |  ! link\n\
         |  ? pointer\n",
    );
    assert_eq!(stdout, expected);

    Ok(())
}
