use crate::common::command::{run_dirdiff, trees_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn fail_when_root_is_a_file(trees_dir: TempDir) {
    write_file(FileSpec::new(trees_dir.path().join("plain.txt"), "x".to_string()));

    run_dirdiff(trees_dir.path(), &["plain.txt", "b"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));
}
