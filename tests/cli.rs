use std::fs;
use std::process::{Command, Output};

/// A blog root with the three default buckets
fn blog_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for bucket in ["_posts", "_drafts", "_til"] {
        fs::create_dir(dir.path().join(bucket)).unwrap();
    }
    dir
}

/// Run the binary against `dir`, dated 2024-01-02
fn run(dir: &tempfile::TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_create-post"))
        .arg("-C")
        .arg(dir.path())
        .args(["--date", "2024-01-02"])
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_leading_draft_flag_reaches_title_words() {
    let dir = blog_dir();
    let output = run(&dir, &["--no-edit", "--draft", "My", "Post"]);

    assert_eq!(output.status.code(), Some(0));
    let post = dir.path().join("_drafts/2024-01-02-my-post.md");
    assert_eq!(
        fs::read_to_string(post).unwrap(),
        "---\nlayout: post\ntitle: My Post\ncategories: random\n---\n"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Created:").count(), 1);
}

#[test]
fn test_til_and_default_buckets() {
    let dir = blog_dir();

    let output = run(&dir, &["--no-edit", "--til", "Learned Something"]);
    assert!(output.status.success());
    let note = dir.path().join("_til/2024-01-02-learned-something.md");
    assert!(note.is_file());

    let output = run(&dir, &["--no-edit", "Plain Post"]);
    assert!(output.status.success());
    assert!(dir.path().join("_posts/2024-01-02-plain-post.md").is_file());
}

#[test]
fn test_second_flag_is_part_of_title() {
    let dir = blog_dir();
    let output = run(&dir, &["--no-edit", "--draft", "--til", "x"]);

    assert!(output.status.success());
    assert!(dir.path().join("_drafts/2024-01-02---til-x.md").is_file());
    assert_eq!(fs::read_dir(dir.path().join("_til")).unwrap().count(), 0);
}

#[test]
fn test_missing_title_fails() {
    let dir = blog_dir();
    let output = run(&dir, &["--no-edit", "--draft"]);

    assert!(!output.status.success());
    assert_eq!(fs::read_dir(dir.path().join("_drafts")).unwrap().count(), 0);
}

#[test]
fn test_missing_bucket_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir, &["--no-edit", "Nowhere"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2024-01-02-nowhere.md"));
}

#[cfg(unix)]
#[test]
fn test_exit_status_follows_editor() {
    let dir = blog_dir();

    let output = run(&dir, &["--editor", "sh -c 'exit 3' --", "x"]);
    assert_eq!(output.status.code(), Some(3));
    // the file is written before the editor runs
    assert!(dir.path().join("_posts/2024-01-02-x.md").is_file());

    let output = run(&dir, &["--editor", "true", "y"]);
    assert_eq!(output.status.code(), Some(0));
}

#[cfg(unix)]
#[test]
fn test_editor_killed_by_signal_exits_with_one() {
    let dir = blog_dir();
    let output = run(&dir, &["--editor", "sh -c 'kill -9 $$' --", "x"]);

    assert_eq!(output.status.code(), Some(1));
}

#[cfg(unix)]
#[test]
fn test_editor_from_config_file() {
    let dir = blog_dir();
    let config = "editor: sh -c 'exit 4' --\n";
    fs::write(dir.path().join("_scaffold.yml"), config).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_create-post"))
        .arg("-C")
        .arg(dir.path())
        .arg("x")
        .env("VISUAL", "false")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}
