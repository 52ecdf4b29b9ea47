use crate::common::command::{run_dirdiff, trees_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn write_patches_at_depth(trees_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let root = trees_dir.path();
    write_file(FileSpec::new(root.join("a/app/main.c"), "return 0;\n".to_string()));
    write_file(FileSpec::new(root.join("b/app/main.c"), "return 1;\n".to_string()));
    write_file(FileSpec::new(root.join("a/same/x"), "x\n".to_string()));
    write_file(FileSpec::new(root.join("b/same/x"), "x\n".to_string()));

    run_dirdiff(
        root,
        &["--color", "never", "--patch-depth", "0", "--patch-dir", "patches", "a", "b"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("? app:"));

    let patch = std::fs::read_to_string(root.join("patches/app.patch"))?;
    assert!(patch.contains("--- a/app/main.c"));
    assert!(patch.contains("+++ b/app/main.c"));
    assert!(patch.contains("-return 0;"));
    assert!(patch.contains("+return 1;"));
    assert!(!root.join("patches/same.patch").exists());

    Ok(())
}

#[rstest]
fn patch_tool_failure_is_not_fatal(trees_dir: TempDir) {
    let root = trees_dir.path();
    write_file(FileSpec::new(root.join("a/app/main.c"), "0".to_string()));
    write_file(FileSpec::new(root.join("b/app/main.c"), "1".to_string()));

    run_dirdiff(
        root,
        &["--patch-depth", "0", "--diff-tool", "dirdiff-no-such-tool", "a", "b"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("app"))
    .stderr(predicate::str::contains("patch generation failed"));
}
