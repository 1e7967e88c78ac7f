//! Integration tests for the style-hooks CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const GOOD_PY: &str = "def f():\n    return 1\n";
const BAD_PY: &str = "def f():\n  return 1\n";

/// Creates a test git repository.
fn create_test_repo() -> TempDir {
    let temp = TempDir::new().expect("create temp dir");

    std::process::Command::new("git")
        .args(["init"])
        .current_dir(temp.path())
        .output()
        .expect("init repo");

    std::process::Command::new("git")
        .args(["config", "user.email", "test@test.com"])
        .current_dir(temp.path())
        .output()
        .expect("set email");

    std::process::Command::new("git")
        .args(["config", "user.name", "Test"])
        .current_dir(temp.path())
        .output()
        .expect("set name");

    temp
}

/// Writes and stages a file in the test repository.
fn stage(repo: &Path, name: &str, contents: &str) {
    if let Some(parent) = Path::new(name).parent() {
        std::fs::create_dir_all(repo.join(parent)).expect("create dirs");
    }
    std::fs::write(repo.join(name), contents).expect("write file");
    std::process::Command::new("git")
        .args(["add", name])
        .current_dir(repo)
        .output()
        .expect("stage file");
}

/// Creates a fake `gofmt` shell script in a bin dir and returns a PATH value
/// with that dir prepended.
fn fake_gofmt(temp: &TempDir, script_body: &str) -> String {
    let bin = temp.path().join("fakebin");
    std::fs::create_dir_all(&bin).expect("create bin dir");
    let gofmt = bin.join("gofmt");
    std::fs::write(&gofmt, format!("#!/bin/sh\n{script_body}\n")).expect("write script");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&gofmt).expect("metadata").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&gofmt, perms).expect("chmod");
    }

    let existing = std::env::var("PATH").unwrap_or_default();
    format!("{}:{existing}", bin.display())
}

fn stylehook() -> Command {
    Command::cargo_bin("stylehook").expect("binary built")
}

// =============================================================================
// Basic CLI behavior
// =============================================================================

#[test]
fn test_help() {
    stylehook()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("blocks commits"));
}

#[test]
fn test_version() {
    stylehook()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_not_git_repo() {
    let temp = TempDir::new().expect("create temp dir");

    stylehook()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not in a Git repository"));
}

// =============================================================================
// run: verdicts
// =============================================================================

#[test]
fn test_run_no_staged_files_allows() {
    let temp = create_test_repo();

    stylehook()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn test_run_conforming_python_allows() {
    let temp = create_test_repo();
    stage(temp.path(), "ok.py", GOOD_PY);

    stylehook()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn test_run_python_docstring_not_flagged() {
    let temp = create_test_repo();
    stage(
        temp.path(),
        "doc.py",
        "def f():\n    \"\"\"Args:\n      x: thing\n    \"\"\"\n    return 1\n",
    );

    stylehook()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn test_run_bad_python_blocks_with_advisory() {
    let temp = create_test_repo();
    stage(temp.path(), "bad.py", BAD_PY);

    stylehook()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("pyindent -n bad.py"));
}

#[test]
fn test_run_lists_every_bad_python_file() {
    let temp = create_test_repo();
    stage(temp.path(), "a.py", BAD_PY);
    stage(temp.path(), "b.py", BAD_PY);
    stage(temp.path(), "ok.py", GOOD_PY);

    stylehook()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("pyindent -n a.py"))
        .stdout(predicate::str::contains("pyindent -n b.py"))
        .stdout(predicate::str::contains("pyindent -n ok.py").not());
}

#[test]
fn test_run_unstaged_files_ignored() {
    let temp = create_test_repo();
    // Bad file exists in the worktree but is not staged
    std::fs::write(temp.path().join("loose.py"), BAD_PY).expect("write file");

    stylehook()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .success();
}

// =============================================================================
// run: gofmt via a fake formatter
// =============================================================================

#[test]
fn test_run_gofmt_clean_allows() {
    let temp = create_test_repo();
    stage(temp.path(), "main.go", "package main\n");
    let path = fake_gofmt(&temp, "exit 0");

    stylehook()
        .arg("run")
        .env("PATH", path)
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn test_run_gofmt_listing_blocks_with_advisory() {
    let temp = create_test_repo();
    stage(temp.path(), "main.go", "package main\n");
    let path = fake_gofmt(&temp, "echo main.go");

    stylehook()
        .arg("run")
        .env("PATH", path)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("gofmt -w main.go"));
}

#[test]
fn test_run_gofmt_stderr_blocks_as_tool_error() {
    let temp = create_test_repo();
    stage(temp.path(), "main.go", "package main\n");
    let path = fake_gofmt(&temp, "echo 'parse error' >&2");

    stylehook()
        .arg("run")
        .env("PATH", path)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("gofmt errors:"))
        .stdout(predicate::str::contains("gofmt -w").not());
}

#[test]
fn test_run_gofmt_missing_blocks() {
    let temp = create_test_repo();
    stage(temp.path(), "main.go", "package main\n");
    std::fs::write(
        temp.path().join("style-hooks.toml"),
        "[gofmt]\nprogram = \"definitely-not-a-gofmt-54321\"\n",
    )
    .expect("write config");

    stylehook()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("gofmt:"))
        .stdout(predicate::str::contains("gofmt -w").not());
}

#[test]
fn test_run_no_go_files_never_spawns_gofmt() {
    let temp = create_test_repo();
    stage(temp.path(), "ok.py", GOOD_PY);
    // A formatter that would explode if invoked
    std::fs::write(
        temp.path().join("style-hooks.toml"),
        "[gofmt]\nprogram = \"definitely-not-a-gofmt-54321\"\n",
    )
    .expect("write config");

    stylehook()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .success();
}

// =============================================================================
// run: selection, filtering, configuration
// =============================================================================

#[test]
fn test_run_hook_selection_skips_other_check() {
    let temp = create_test_repo();
    stage(temp.path(), "bad.py", BAD_PY);

    stylehook()
        .args(["run", "--hook", "gofmt"])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn test_run_path_patterns_narrow_changeset() {
    let temp = create_test_repo();
    stage(temp.path(), "src/bad.py", BAD_PY);
    stage(temp.path(), "tools/bad.py", BAD_PY);

    stylehook()
        .args(["run", "tools/*.py"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("pyindent -n tools/bad.py"))
        .stdout(predicate::str::contains("src/bad.py").not());
}

#[test]
fn test_run_disabled_hook_does_not_block() {
    let temp = create_test_repo();
    stage(temp.path(), "bad.py", BAD_PY);
    std::fs::write(
        temp.path().join("style-hooks.toml"),
        "[pyindent]\nenabled = false\n",
    )
    .expect("write config");

    stylehook()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn test_run_idempotent() {
    let temp = create_test_repo();
    stage(temp.path(), "bad.py", BAD_PY);

    let first = stylehook()
        .arg("run")
        .current_dir(temp.path())
        .output()
        .expect("first run");
    let second = stylehook()
        .arg("run")
        .current_dir(temp.path())
        .output()
        .expect("second run");

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_skip_with_env_var() {
    let temp = create_test_repo();
    stage(temp.path(), "bad.py", BAD_PY);

    stylehook()
        .arg("run")
        .env("STYLEHOOK_SKIP", "1")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping"));
}

// =============================================================================
// init / validate / config
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp = create_test_repo();

    stylehook()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Created style-hooks.toml"));

    assert!(temp.path().join("style-hooks.toml").exists());
}

#[test]
fn test_init_already_exists() {
    let temp = create_test_repo();
    std::fs::write(temp.path().join("style-hooks.toml"), "").expect("create config");

    stylehook()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force() {
    let temp = create_test_repo();
    std::fs::write(temp.path().join("style-hooks.toml"), "").expect("create config");

    stylehook()
        .args(["init", "--force"])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn test_validate_valid_config() {
    let temp = create_test_repo();

    stylehook()
        .arg("init")
        .current_dir(temp.path())
        .output()
        .expect("init");

    stylehook()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("valid"));
}

#[test]
fn test_validate_invalid_config() {
    let temp = create_test_repo();
    std::fs::write(
        temp.path().join("style-hooks.toml"),
        "[pyindent]\nindent = 0\n",
    )
    .expect("write config");

    stylehook()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("pyindent.indent"));
}

// =============================================================================
// install / uninstall
// =============================================================================

#[test]
fn test_install_hook() {
    let temp = create_test_repo();

    stylehook()
        .arg("install")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Installed pre-commit hook"));

    let hook_path = temp.path().join(".git/hooks/pre-commit");
    assert!(hook_path.exists());

    let hook_content = std::fs::read_to_string(&hook_path).expect("read hook");
    assert!(hook_content.contains("style-hooks"));
}

#[test]
fn test_install_refuses_foreign_hook() {
    let temp = create_test_repo();
    let hooks_dir = temp.path().join(".git/hooks");
    std::fs::create_dir_all(&hooks_dir).expect("create hooks dir");
    std::fs::write(hooks_dir.join("pre-commit"), "#!/bin/sh\nexit 0\n").expect("write hook");

    stylehook()
        .arg("install")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_install_force_backs_up_foreign_hook() {
    let temp = create_test_repo();
    let hooks_dir = temp.path().join(".git/hooks");
    std::fs::create_dir_all(&hooks_dir).expect("create hooks dir");
    std::fs::write(hooks_dir.join("pre-commit"), "#!/bin/sh\nexit 0\n").expect("write hook");

    stylehook()
        .args(["install", "--force"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(hooks_dir.join("pre-commit.bak").exists());
}

#[test]
fn test_uninstall_hook() {
    let temp = create_test_repo();

    stylehook()
        .arg("install")
        .current_dir(temp.path())
        .output()
        .expect("install");

    stylehook()
        .arg("uninstall")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Removed"));

    assert!(!temp.path().join(".git/hooks/pre-commit").exists());
}
