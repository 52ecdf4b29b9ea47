use crate::common::file::{FileSpec, make_dir, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Working directory holding two empty trees, `a` and `b`
#[fixture]
pub fn trees_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    make_dir(&dir.path().join("a"));
    make_dir(&dir.path().join("b"));
    dir
}

/// `a` = {f.txt: hello, sub/x: 1}, `b` = {f.txt: world, sub/x: 1, extra: 2}
#[fixture]
pub fn scenario_dir(trees_dir: TempDir) -> TempDir {
    let root = trees_dir.path();

    write_file(FileSpec::new(root.join("a/f.txt"), "hello".to_string()));
    write_file(FileSpec::new(root.join("a/sub/x"), "1".to_string()));
    write_file(FileSpec::new(root.join("b/f.txt"), "world".to_string()));
    write_file(FileSpec::new(root.join("b/sub/x"), "1".to_string()));
    write_file(FileSpec::new(root.join("b/extra"), "2".to_string()));

    trees_dir
}

pub fn run_dirdiff(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("dirdiff").expect("Failed to find dirdiff binary");
    cmd.env_remove("DIRDIFF_LOG");
    cmd.env_remove("CLICOLOR_FORCE");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Compare `a` against `b` inside `dir` with extra options, returning stdout
pub fn compare_trees(dir: &Path, options: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let mut args = options.to_vec();
    args.extend(["a", "b"]);

    let output = run_dirdiff(dir, &args).assert().success();
    let stdout = output.get_output().stdout.clone();

    Ok(String::from_utf8(stdout)?)
}
