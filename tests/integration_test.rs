// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use git2::{Commit, Oid, Repository, Signature};
use tempfile::TempDir;

/// Run the binary with a scratch user config directory, so a personal
/// `verbump.toml` can't leak into the results.
fn verbump(args: &[&str]) -> Output {
    let home = TempDir::new().unwrap();

    Command::new(env!("CARGO_BIN_EXE_verbump"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .output()
        .expect("Failed to execute command")
}

fn commit_file(repo: &Repository, path: &str, message: &str) -> Oid {
    let full_path = repo.workdir().unwrap().join(path);
    fs::create_dir_all(full_path.parent().unwrap()).unwrap();
    fs::write(&full_path, message).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(path)).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

    let sig = Signature::now("Test User", "test@example.com").unwrap();
    let parents: Vec<Commit<'_>> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&Commit<'_>> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

/// Repository tagged `v1.2.3` with a VERSION file, followed by `subjects`.
fn release_repo(subjects: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();

    fs::write(dir.path().join("VERSION"), "1.2.3\n").unwrap();
    let released = commit_file(&repo, "README.md", "chore: release 1.2.3");
    let object = repo.find_object(released, None).unwrap();
    repo.tag_lightweight("v1.2.3", &object, false).unwrap();

    for (path, subject) in subjects {
        commit_file(&repo, path, subject);
    }

    dir
}

#[test]
fn test_verbump_help() {
    let output = verbump(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("verbump"));
    assert!(stdout.contains("bump"));
}

#[test]
fn test_verbump_version() {
    let output = verbump(&["version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_bump_writes_version_file() {
    let dir = release_repo(&[("src/a.rs", "feat: add a"), ("src/b.rs", "fix: b")]);
    let repository = dir.path().to_str().unwrap();
    let version_file = dir.path().join("VERSION");

    let output = verbump(&[
        "bump",
        "-r",
        repository,
        "-c",
        version_file.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "1.3.0");
    assert_eq!(fs::read_to_string(&version_file).unwrap(), "1.3.0");
}

#[test]
fn test_bump_dry_run_with_pre_release() {
    let dir = release_repo(&[("src/a.rs", "fix: a")]);
    let repository = dir.path().to_str().unwrap();
    let version_file = dir.path().join("VERSION");

    let output = verbump(&[
        "bump",
        "--repository",
        repository,
        "--version-file",
        version_file.to_str().unwrap(),
        "--pre-release",
        "beta",
        "--dry-run",
    ]);

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "1.2.4-beta.0");
    assert!(semver::Version::parse(stdout.trim()).is_ok());
    assert_eq!(fs::read_to_string(&version_file).unwrap(), "1.2.3\n");
}

#[test]
fn test_bump_scoped_to_subfolder() {
    let dir = release_repo(&[
        ("services/api/main.rs", "fix(api): timeout"),
        ("services/web/app.ts", "feat(web): dark mode"),
    ]);
    let repository = dir.path().to_str().unwrap();

    let output = verbump(&["bump", "-r", repository, "-i", "services/api", "--dry-run"]);

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "1.2.4");
}

#[test]
fn test_bump_reads_config_file() {
    let dir = release_repo(&[("src/a.rs", "feat!: drop v1 api")]);
    fs::write(
        dir.path().join("verbump.toml"),
        "[version]\nfile = \"VERSION\"\n",
    )
    .unwrap();

    let output = verbump(&["bump", "-r", dir.path().to_str().unwrap()]);

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        fs::read_to_string(dir.path().join("VERSION")).unwrap(),
        "2.0.0"
    );
}

#[test]
fn test_bump_from_package_folder() {
    let dir = release_repo(&[
        ("services/api/main.rs", "fix(api): timeout"),
        ("services/web/app.ts", "feat(web): dark mode"),
    ]);
    let package = dir.path().join("services/api");
    fs::write(package.join("VERSION"), "0.3.1").unwrap();
    fs::write(
        package.join("verbump.toml"),
        "[version]\nfile = \"VERSION\"\n",
    )
    .unwrap();

    let output = verbump(&["bump", "-r", package.to_str().unwrap()]);

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "0.3.2");
    assert_eq!(fs::read_to_string(package.join("VERSION")).unwrap(), "0.3.2");
}

#[test]
fn test_bump_invalid_version_fails() {
    let dir = release_repo(&[("src/a.rs", "fix: a")]);

    let output = verbump(&[
        "bump",
        "-r",
        dir.path().to_str().unwrap(),
        "--current",
        "1.x.3",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERROR"));
    assert!(stderr.contains("Invalid minor version component"));
}

#[test]
fn test_bump_rejects_unknown_change() {
    let dir = release_repo(&[]);

    let output = verbump(&[
        "bump",
        "-r",
        dir.path().to_str().unwrap(),
        "--change",
        "huge",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid version change type"));
}
