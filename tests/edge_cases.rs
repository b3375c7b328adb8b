//! Edge case and error handling tests for dyad-tree


use harness::{TestTree, body_lines, run_dyad_tree};
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Permission Error Handling
// ============================================================================

/// Lock a directory; returns false when the process can still list it
/// (e.g. running as root), in which case the caller should skip.
#[cfg(unix)]
fn lock_dir(path: &std::path::Path) -> bool {
    fs::set_permissions(path, fs::Permissions::from_mode(0o000)).expect("Failed to set permissions");
    fs::read_dir(path).is_err()
}

#[cfg(unix)]
fn unlock_dir(path: &std::path::Path) {
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to restore permissions");
}

#[test]
#[cfg(unix)]
fn test_unreadable_directory() {
    let tree = TestTree::new();
    tree.add_file("readable/file.py", "");
    tree.add_file("unreadable/hidden.py", "");
    tree.add_file("zz.md", "");

    let unreadable = tree.path().join("unreadable");
    if !lock_dir(&unreadable) {
        unlock_dir(&unreadable);
        return;
    }

    let (stdout, _stderr, success) = run_dyad_tree(tree.path(), &["-o", ""]);
    unlock_dir(&unreadable);

    assert!(success, "should handle unreadable directories gracefully");
    assert_eq!(
        body_lines(&stdout),
        vec![
            "├── 📁 readable/",
            "│   └── 🐍 file.py",
            "├── 📁 unreadable/",
            "│   !!! Permission Denied !!!",
            "└── 📝 zz.md",
        ]
    );
    assert!(!stdout.contains("hidden.py"));
}

#[test]
#[cfg(unix)]
fn test_unreadable_root() {
    let tree = TestTree::new();
    let root = tree.add_dir("locked");
    tree.add_file("locked/inside.py", "");

    if !lock_dir(&root) {
        unlock_dir(&root);
        return;
    }

    let (stdout, _stderr, success) = run_dyad_tree(tree.path(), &["--path", "locked", "-o", ""]);
    unlock_dir(&root);

    assert!(success);
    assert_eq!(body_lines(&stdout), vec!["!!! Permission Denied !!!"]);
}

#[test]
#[cfg(unix)]
fn test_unreadable_hidden_directory_is_silent() {
    let tree = TestTree::new();
    tree.add_file("node_modules/pkg/index.py", "");
    tree.add_file("main.py", "");

    let hidden = tree.path().join("node_modules");
    if !lock_dir(&hidden) {
        unlock_dir(&hidden);
        return;
    }

    let (stdout, _stderr, success) = run_dyad_tree(tree.path(), &["-o", ""]);
    unlock_dir(&hidden);

    assert!(success);
    assert_eq!(body_lines(&stdout), vec!["└── 🐍 main.py"]);
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
#[cfg(unix)]
fn test_symlink_to_parent_stops_at_depth() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.py", "");
    symlink("..", tree.path().join("subdir").join("parent")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_dyad_tree(tree.path(), &["-o", "", "-L", "2"]);
    assert!(success, "depth bound should end the cycle");
    assert!(stdout.contains("subdir/"));
    assert!(stdout.contains("parent/"));
}

#[test]
#[cfg(unix)]
fn test_broken_symlink_omitted() {
    let tree = TestTree::new();
    tree.add_file("real.py", "");
    symlink("nonexistent.py", tree.path().join("broken_link.py"))
        .expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_dyad_tree(tree.path(), &["-o", ""]);
    assert!(success, "should handle broken symlinks");
    assert!(stdout.contains("real.py"));
    assert!(!stdout.contains("broken_link.py"));
}

#[test]
#[cfg(unix)]
fn test_symlinked_file_shown() {
    let tree = TestTree::new();
    tree.add_file("target.py", "");
    symlink(tree.path().join("target.py"), tree.path().join("link.py"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_dyad_tree(tree.path(), &["-o", ""]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        vec!["├── 🐍 link.py", "└── 🐍 target.py"]
    );
}

// ============================================================================
// Exclusion Rules
// ============================================================================

#[test]
fn test_excluded_directories_hidden() {
    let tree = TestTree::new();
    tree.add_file(".git/config.json", "{}");
    tree.add_file("__pycache__/mod.py", "");
    tree.add_file(".ipynb_checkpoints/nb.ipynb", "");
    tree.add_file("node_modules/pkg/readme.md", "");
    tree.add_file("uv.venv/lib/site.py", "");
    tree.add_file("kept.py", "");

    let (stdout, _stderr, success) = run_dyad_tree(tree.path(), &["-o", ""]);
    assert!(success);
    assert_eq!(body_lines(&stdout), vec!["└── 🐍 kept.py"]);
}

#[test]
fn test_key_directory_under_excluded_parent() {
    let tree = TestTree::new();
    tree.add_file("node_modules/scripts/setup.bat", "");
    tree.add_file("node_modules/scripts/vendor/lib.py", "");
    tree.add_file("node_modules/other/skip.py", "");
    tree.add_file("app.py", "");

    let (stdout, _stderr, success) = run_dyad_tree(tree.path(), &["-o", ""]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        vec![
            "├── 📂 node_modules/scripts/",
            "│   └── ⚙️ setup.bat",
            "└── 🐍 app.py",
        ]
    );
}

#[test]
fn test_empty_directories_shown() {
    let tree = TestTree::new();
    tree.add_dir("empty");
    tree.add_file("only_data/file.dat", "");

    let (stdout, _stderr, success) = run_dyad_tree(tree.path(), &["-o", ""]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        vec!["├── 📁 empty/", "└── 📁 only_data/"]
    );
}

#[test]
fn test_empty_root() {
    let tree = TestTree::new();

    let (stdout, _stderr, success) = run_dyad_tree(tree.path(), &["-o", ""]);
    assert!(success);
    assert!(body_lines(&stdout).is_empty());
    assert!(stdout.ends_with(&format!("{}\n\n", "-".repeat(80))));
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let tree = TestTree::new();
    tree.add_file("file with spaces.py", "");
    tree.add_file("dir with spaces/nested.md", "");

    let (stdout, _stderr, success) = run_dyad_tree(tree.path(), &["-o", ""]);
    assert!(success);
    assert!(stdout.contains("🐍 file with spaces.py"));
    assert!(stdout.contains("📁 dir with spaces/"));
}

#[test]
fn test_filename_with_unicode() {
    let tree = TestTree::new();
    tree.add_file("日本語.py", "");
    tree.add_file("émoji_🎉.md", "");
    tree.add_file("中文目录/文件.csv", "");

    let (stdout, _stderr, success) = run_dyad_tree(tree.path(), &["-o", ""]);
    assert!(success);
    assert!(stdout.contains("日本語.py"));
    assert!(stdout.contains("émoji_🎉.md"));
    assert!(stdout.contains("📁 中文目录/"));
    assert!(stdout.contains("📊 文件.csv"));
}

#[test]
fn test_extension_case_sensitive() {
    let tree = TestTree::new();
    tree.add_file("upper.PY", "");
    tree.add_file("lower.py", "");

    let (stdout, _stderr, success) = run_dyad_tree(tree.path(), &["-o", ""]);
    assert!(success);
    assert_eq!(body_lines(&stdout), vec!["└── 🐍 lower.py"]);
}
