use super::*;

fn document(
    relative_path: &str,
    text: &str,
) -> Document {
    Document {
        relative_path: relative_path.to_string(),
        text: text.to_string(),
        ..Default::default()
    }
}

#[test]
fn reads_from_root_and_serves_later_lookups_from_cache() {
    let root = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(root.path().join("pkg")).expect("mkdir");
    let file = root.path().join("pkg/main.go");
    std::fs::write(&file, "package main\n\nfunc main() {\n}\n").expect("write source");

    let mut cache = SourceCache::new(root.path());
    let doc = document("pkg/main.go", "");
    assert_eq!(cache.text_for(&doc).expect("first read").line_count(), 5);

    std::fs::remove_file(&file).expect("remove source");
    let cached = cache.text_for(&doc).expect("cached read");
    assert_eq!(cached.line_text(2), Some("func main() {"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn embedded_text_is_used_without_touching_disk() {
    let root = tempfile::tempdir().expect("tempdir");
    let mut cache = SourceCache::new(root.path());
    let doc = document("missing/on/disk.rs", "fn main() {}\n");

    let text = cache.text_for(&doc).expect("embedded text");
    assert_eq!(text.as_str(), "fn main() {}\n");
}

#[test]
fn embedded_text_is_cached_by_path() {
    let mut cache = SourceCache::default();
    let first = document("lib.rs", "first");
    let second = document("lib.rs", "second");

    assert_eq!(cache.text_for(&first).expect("first").as_str(), "first");
    assert_eq!(cache.text_for(&second).expect("second").as_str(), "first");
}

#[test]
fn unreadable_file_is_reported_and_not_cached() {
    let root = tempfile::tempdir().expect("tempdir");
    let mut cache = SourceCache::new(root.path());
    let doc = document("nope.go", "");

    let err = cache.text_for(&doc).expect_err("missing file");
    let SourceError::Read {
        path,
        ..
    } = &err;
    assert!(path.ends_with("nope.go"), "unexpected path {}", path.display());
    assert!(err.to_string().starts_with("unable to read file"));
    assert!(cache.is_empty());
}
