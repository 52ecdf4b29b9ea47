use crate::common::command::{run_dirdiff, trees_dir};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case::no_paths(&[])]
#[case::one_path(&["a"])]
#[case::three_paths(&["a", "b", "c"])]
fn require_two_paths(trees_dir: TempDir, #[case] args: &[&str]) {
    run_dirdiff(trees_dir.path(), args)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}
