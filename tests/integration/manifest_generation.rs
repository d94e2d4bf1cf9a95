//! End-to-end manifest generation over real directory trees

use std::fs;
use tempfile::TempDir;
use treesum::error::ManifestError;
use treesum::manifest::builder::ManifestBuilder;
use treesum::manifest::{writer, Manifest};
use treesum::tree::walker::WalkerConfig;

/// A root containing hello.txt with the two bytes "hi" produces a
/// single record with the known digest.
#[test]
fn test_hello_txt_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join("hello.txt"), "hi").unwrap();

    let manifest = ManifestBuilder::new(root).build().unwrap();

    assert_eq!(manifest.files.len(), 1);
    let record = &manifest.files[0];
    assert_eq!(record.path, "hello.txt");
    assert_eq!(
        record.hash,
        "8f434346648f6b96df89dda901c5176b10a6d83961dd3c1ac88b59b2dc327aa4"
    );
    assert_eq!(record.size, 2);
}

/// A tree with N regular files yields exactly N records.
#[test]
fn test_completeness_over_nested_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("a.txt"), "a").unwrap();
    fs::create_dir_all(root.join("d1").join("d2")).unwrap();
    fs::write(root.join("d1").join("b.txt"), "b").unwrap();
    fs::write(root.join("d1").join("d2").join("c.txt"), "c").unwrap();
    fs::create_dir(root.join("empty")).unwrap();

    let manifest = ManifestBuilder::new(root).build().unwrap();

    let paths: Vec<_> = manifest.files.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["a.txt", "d1/b.txt", "d1/d2/c.txt"]);
}

/// Two runs against identical content produce byte-identical documents.
#[test]
fn test_reproducible_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir(&root).unwrap();

    fs::write(root.join("one.txt"), "first").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("two.txt"), "second").unwrap();

    let out1 = temp_dir.path().join("m1.json");
    let out2 = temp_dir.path().join("m2.json");

    let builder = ManifestBuilder::new(root);
    writer::write_manifest(&builder.build().unwrap(), &out1).unwrap();
    writer::write_manifest(&builder.build().unwrap(), &out2).unwrap();

    assert_eq!(fs::read(&out1).unwrap(), fs::read(&out2).unwrap());
}

/// Empty root: {"files": []} and a count of zero.
#[test]
fn test_empty_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    let output = temp_dir.path().join("manifest.json");

    let manifest = ManifestBuilder::new(root).build().unwrap();
    assert_eq!(manifest.files.len(), 0);

    writer::write_manifest(&manifest, &output).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "{\n    \"files\": []\n}\n"
    );
}

/// A missing root fails with PathNotFound before anything is written.
#[test]
fn test_missing_root_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no-such-root");
    let output = temp_dir.path().join("manifest.json");

    let err = ManifestBuilder::new(missing).build().unwrap_err();
    assert!(matches!(err, ManifestError::PathNotFound(_)));
    assert!(!output.exists());
}

/// Version tags survive into the serialized document.
#[test]
fn test_version_tag_in_document() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join("f.txt"), "x").unwrap();

    let manifest = ManifestBuilder::new(root)
        .with_version("3.1.4".to_string())
        .build()
        .unwrap();
    let document = writer::render(&manifest).unwrap();

    let parsed: Manifest = serde_json::from_str(&document).unwrap();
    assert_eq!(parsed.version.as_deref(), Some("3.1.4"));
}

/// Excluded names are absent from the manifest.
#[test]
fn test_exclude_patterns_respected() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("keep.txt"), "keep").unwrap();
    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(".git").join("HEAD"), "ref").unwrap();

    let manifest = ManifestBuilder::new(root)
        .with_walker_config(WalkerConfig {
            exclude_patterns: vec![".git".to_string()],
            ..WalkerConfig::default()
        })
        .build()
        .unwrap();

    let paths: Vec<_> = manifest.files.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["keep.txt"]);
}

/// Symlinked files are hashed through, like the files they point at.
#[cfg(unix)]
#[test]
fn test_symlinks_hashed_as_regular_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("real.txt"), "hi").unwrap();
    std::os::unix::fs::symlink(root.join("real.txt"), root.join("alias.txt")).unwrap();

    let manifest = ManifestBuilder::new(root).build().unwrap();

    assert_eq!(manifest.files.len(), 2);
    assert_eq!(manifest.files[0].hash, manifest.files[1].hash);
    assert_eq!(manifest.files[0].size, 2);
    assert_eq!(manifest.files[1].size, 2);
}
