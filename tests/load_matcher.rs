// tests/load_matcher.rs

use layered_ignore::{IgnoreConfig, LoadOptions, MatchResult, MemDir, load_from, load_matcher};
use std::fs;
use std::io;
use tempfile::tempdir;

fn repo() -> tempfile::TempDir {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join(".gitignore"), "target/\n*.log\n!keep.log\n").unwrap();
    fs::create_dir_all(root.join("docs/build")).unwrap();
    fs::write(root.join("docs/.gitignore"), "build/\n/draft*\n").unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join(".git/.gitignore"), "*\n").unwrap();
    tmp
}

#[test]
fn nested_rules_are_scoped_to_their_directory() {
    let tmp = repo();
    let m = load_matcher(tmp.path(), &IgnoreConfig::default()).unwrap();
    assert_eq!(m.len(), 5);

    assert!(m.is_excluded(&["target"], true));
    assert!(!m.is_excluded(&["target"], false));
    assert!(m.is_excluded(&["src", "app.log"], false));
    assert!(!m.is_excluded(&["src", "keep.log"], false));
    assert!(m.is_excluded(&["docs", "build", "index.html"], false));
    assert!(!m.is_excluded(&["build", "index.html"], false));
    assert!(m.is_excluded(&["docs", "draft1.md"], false));
    assert!(!m.is_excluded(&["docs", "guide", "draft1.md"], false));
    assert!(!m.is_excluded(&["draft1.md"], false));
}

#[test]
fn overrides_take_precedence() {
    let tmp = repo();
    let cfg = IgnoreConfig::builder()
        .overrides(["!target/", "# comment", "", "*.md"])
        .build();
    let m = load_matcher(tmp.path(), &cfg).unwrap();
    assert_eq!(m.len(), 7);
    assert_eq!(m.decide(&["target"], true), MatchResult::Include);
    assert!(m.is_excluded(&["README.md"], false));

    let (pattern, _) = m.deciding_pattern(&["README.md"], false).unwrap();
    assert_eq!(pattern.source(), None);
    let (pattern, _) = m.deciding_pattern(&["a.log"], false).unwrap();
    assert_eq!(pattern.source(), Some(std::path::Path::new(".gitignore")));
}

#[test]
fn load_options_come_from_config() {
    let tmp = repo();
    fs::write(tmp.path().join(".ignore"), "*.md\n").unwrap();
    let cfg = IgnoreConfig::builder()
        .load(LoadOptions::default().with_file_name(".ignore"))
        .build();
    let m = load_matcher(tmp.path(), &cfg).unwrap();
    assert_eq!(m.len(), 1);
    assert!(m.is_excluded(&["notes.md"], false));
    assert!(!m.is_excluded(&["target"], true));
}

#[test]
fn missing_root_is_an_error() {
    let tmp = tempdir().unwrap();
    let err = load_matcher(tmp.path().join("absent"), &IgnoreConfig::default()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn in_memory_sources_share_the_pipeline() {
    let root = MemDir::root()
        .with_file(".gitignore", "*.o\n")
        .with_dir("lib", |d| d.with_file(".gitignore", "!keep.o\n"));
    let cfg = IgnoreConfig::builder().overrides(["debug/"]).build();
    let m = load_from(&root, &cfg).unwrap();
    assert!(m.is_excluded(&["main.o"], false));
    assert!(!m.is_excluded(&["lib", "keep.o"], false));
    assert!(m.is_excluded(&["lib", "other.o"], false));
    assert!(m.is_excluded(&["lib", "debug", "x"], false));

    let broken = MemDir::root().with_error(io::ErrorKind::Other, "listing failed");
    let err = load_from(&broken, &cfg).unwrap_err();
    assert_eq!(err.to_string(), "listing failed");
}

#[test]
fn matcher_is_shared_across_threads() {
    let tmp = repo();
    let m = load_matcher(tmp.path(), &IgnoreConfig::default()).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let m = m.clone();
            std::thread::spawn(move || {
                let name = format!("file{i}.log");
                m.is_excluded(&["src", name.as_str()], false)
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
