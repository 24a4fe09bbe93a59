use pyimports::core::scanner::{PathWalker, WalkOptions};
use pyimports::core::ImportGraphError;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

fn touch<P: AsRef<Path>>(p: P) {
    let p = p.as_ref();
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, "# test\n").unwrap();
}

fn walk(root: &Path, options: &WalkOptions) -> HashSet<PathBuf> {
    let walker = PathWalker::new(options).unwrap();
    walker.walk(root).collect()
}

#[test]
fn non_recursive_walk_skips_subdirectories() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    touch(root.join("top.py"));
    touch(root.join("pkg/inner.py"));

    let files = walk(root, &WalkOptions::recursive(false));
    assert_eq!(files, HashSet::from([root.join("top.py")]));
}

#[test]
fn recursive_walk_reaches_arbitrary_depth() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    touch(root.join("top.py"));
    touch(root.join("a/b/c/d/deep.py"));

    let files = walk(root, &WalkOptions::recursive(true));
    assert!(files.contains(&root.join("top.py")));
    assert!(files.contains(&root.join("a/b/c/d/deep.py")));
    assert_eq!(files.len(), 2);
}

#[test]
fn default_exclude_wins_over_include() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    touch(root.join("app.py"));
    touch(root.join(".venv/site/pkg.py"));
    touch(root.join("env/lib/python3.11/os.py"));

    let files = walk(root, &WalkOptions::recursive(true));
    assert_eq!(files, HashSet::from([root.join("app.py")]));
}

#[test]
fn include_pattern_filters_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    touch(root.join("app.py"));
    touch(root.join("notes.txt"));

    let options = WalkOptions {
        include: r"\.py$".to_string(),
        ..WalkOptions::recursive(true)
    };
    let files = walk(root, &options);
    assert_eq!(files, HashSet::from([root.join("app.py")]));
}

#[test]
fn single_file_root_bypasses_filters() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join(".venv/tool.py");
    touch(&file);

    let options = WalkOptions {
        include: "never-matches".to_string(),
        ..WalkOptions::recursive(false)
    };
    let files = walk(&file, &options);
    assert_eq!(files, HashSet::from([file]));
}

#[test]
fn default_exclude_matches_stdlib_and_venv_segments() {
    let walker = PathWalker::new(&WalkOptions::default()).unwrap();
    assert!(!walker.accepts(Path::new("/proj/.venv/site.py")));
    assert!(!walker.accepts(Path::new("/usr/lib/python3.11/os.py")));
    assert!(walker.accepts(Path::new("/proj/lib/helpers.py")));
}

#[test]
fn unconfigured_exclude_keeps_everything() {
    let options = WalkOptions {
        exclude: None,
        ..WalkOptions::default()
    };
    let walker = PathWalker::new(&options).unwrap();
    assert!(walker.accepts(Path::new("/proj/.venv/site.py")));
}

#[test]
fn invalid_pattern_is_a_configuration_error() {
    let options = WalkOptions {
        include: "(".to_string(),
        ..WalkOptions::default()
    };
    let err = PathWalker::new(&options).unwrap_err();
    assert!(matches!(err, ImportGraphError::InvalidPattern { kind: "include", .. }));
    assert!(err.is_configuration());
}

#[cfg(unix)]
#[test]
fn unreadable_directory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    touch(root.join("ok.py"));
    touch(root.join("locked/hidden.py"));
    let locked = root.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users read through mode 0o000; nothing to check then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("skipping: permissions are not enforced for this user");
        return;
    }

    let files = walk(root, &WalkOptions::recursive(true));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(files, HashSet::from([root.join("ok.py")]));
}
