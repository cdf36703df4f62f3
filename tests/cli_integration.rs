//! Integration tests that run the CLI binary.

use std::fs;
use std::path::Path;

fn bin() -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_paths", "-", "only"));
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("PATHS_ONLY_OUTPUT");
    cmd.env_remove("PATHS_ONLY_EXCLUDE");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "x").unwrap();
}

fn sorted_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = content.lines().collect();
    lines.sort_unstable();
    lines
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("paths-only") && stdout.contains("--exclude"),
        "expected usage text in output"
    );
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("paths-only"));
}

#[test]
fn no_arguments_lists_current_directory_into_file_paths_txt() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    touch(tmp.path(), "a.txt");
    touch(tmp.path(), "sub/b.txt");
    touch(tmp.path(), "node_modules/pkg/index.js");
    touch(tmp.path(), ".git/HEAD");

    let output = bin()
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Done!"), "got: {}", stdout);

    let content = fs::read_to_string(tmp.path().join("file_paths.txt")).unwrap();
    assert!(content.ends_with('\n'));
    // The output file exists before the walk starts, so it lists itself.
    assert_eq!(
        sorted_lines(&content),
        vec!["a.txt", "file_paths.txt", "sub/b.txt"]
    );
}

#[test]
fn rerun_reflects_only_current_tree() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let tree = tmp.path().join("tree");
    touch(&tree, "one.txt");
    touch(&tree, "two.txt");
    let out = tmp.path().join("list.txt");

    for _ in 0..2 {
        let status = bin()
            .arg("-C")
            .arg(&tree)
            .arg("-o")
            .arg(&out)
            .status()
            .expect("binary not found - run cargo build first");
        assert!(status.success());
        if tree.join("two.txt").exists() {
            fs::remove_file(tree.join("two.txt")).unwrap();
        }
    }

    assert_eq!(fs::read_to_string(&out).unwrap(), "one.txt\n");
}

#[test]
fn missing_root_fails_without_creating_output() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .current_dir(tmp.path())
        .args(["-C", "does-not-exist"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does-not-exist"),
        "expected missing path in error, got: {}",
        stderr
    );
    assert!(!tmp.path().join("file_paths.txt").exists());
}

#[test]
fn stdout_output_with_sort_and_extra_excludes() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    touch(tmp.path(), "b.rs");
    touch(tmp.path(), "a.rs");
    touch(tmp.path(), "target/debug/app");
    touch(tmp.path(), "dist/bundle.js");

    let output = bin()
        .current_dir(tmp.path())
        .args(["-o", "-", "--sort", "-e", "target"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a.rs\nb.rs\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Done!"));
    assert!(!tmp.path().join("file_paths.txt").exists());
}

#[test]
fn env_exclude_is_applied() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    touch(tmp.path(), "keep.txt");
    touch(tmp.path(), ".venv/lib/site.py");

    let output = bin()
        .current_dir(tmp.path())
        .env("PATHS_ONLY_EXCLUDE", ".venv")
        .args(["-o", "-"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "keep.txt\n");
}

#[test]
fn invalid_exclude_name_is_rejected() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .current_dir(tmp.path())
        .args(["-e", "a/b"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid exclude name"));
    assert!(!tmp.path().join("file_paths.txt").exists());
}

#[test]
fn completions_subcommand_prints_script() {
    let output = bin()
        .args(["completions", "bash"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("paths-only"));
}
