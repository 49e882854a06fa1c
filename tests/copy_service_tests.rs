//! Unit tests for the copy resolution engine

use copyway::config::Destination;
use copyway::operations::{CopyErrorKind, CopyService};
use copyway::system::mock::Operation;
use copyway::system::{FileStore, MockFileStore};
use std::io;
use std::path::{Path, PathBuf};

fn destination(path: &str) -> Destination {
    Destination {
        path: path.to_owned(),
        description: "Archive Folder".to_owned(),
        overwrite: false,
        extension: None,
    }
}

fn with_extension(path: &str, extension: &str) -> Destination {
    Destination {
        extension: Some(extension.to_owned()),
        ..destination(path)
    }
}

#[test]
fn test_copy_to_empty_directory() {
    let store = MockFileStore::new().with_dir("/archive").unwrap();
    let service = CopyService::new(&store);

    let path = service
        .copy("# Test content", "test.md", &destination("/archive"))
        .unwrap();

    assert_eq!(path, PathBuf::from("/archive/test.md"));
    assert_eq!(
        store.read_to_string(Path::new("/archive/test.md")).unwrap(),
        "# Test content"
    );
}

#[test]
fn test_copy_keeps_multi_dot_name() {
    let store = MockFileStore::new().with_dir("/out").unwrap();
    let service = CopyService::new(&store);

    let path = service
        .copy("x", "file.test.md", &destination("/out"))
        .unwrap();
    assert_eq!(path, PathBuf::from("/out/file.test.md"));
}

#[test]
fn test_copy_refuses_existing_file_without_overwrite() {
    let store = MockFileStore::new()
        .with_file("/out/a.md", b"original")
        .unwrap();
    let service = CopyService::new(&store);

    let failure = service.copy("new", "a.md", &destination("/out")).unwrap_err();

    assert_eq!(failure.error, CopyErrorKind::FileExists);
    assert!(failure.message.contains("a.md"));
    assert_eq!(
        store.read_to_string(Path::new("/out/a.md")).unwrap(),
        "original"
    );
    assert_eq!(store.write_count().unwrap(), 0);
}

#[test]
fn test_copy_overwrites_when_allowed() {
    let store = MockFileStore::new()
        .with_file("/out/a.md", b"original")
        .unwrap();
    let service = CopyService::new(&store);
    let dest = Destination {
        overwrite: true,
        ..destination("/out")
    };

    let path = service.copy("new", "a.md", &dest).unwrap();

    assert_eq!(path, PathBuf::from("/out/a.md"));
    assert_eq!(store.read_to_string(&path).unwrap(), "new");
}

#[test]
fn test_missing_directory_is_checked_first() {
    let store = MockFileStore::new()
        .with_failure(Operation::FileExists, io::ErrorKind::Other, "should not be called")
        .unwrap();
    let service = CopyService::new(&store);

    let failure = service.copy("x", "a.md", &destination("/missing")).unwrap_err();
    assert_eq!(failure.error, CopyErrorKind::DirNotFound);
    assert!(failure.message.contains("/missing"));

    let failure = service
        .copy_with_rename("x", "a.md", &destination("/missing"))
        .unwrap_err();
    assert_eq!(failure.error, CopyErrorKind::DirNotFound);

    let calls = store.calls().unwrap();
    assert!(calls.iter().all(|(op, _)| *op == Operation::DirectoryExists));
}

#[test]
fn test_directory_that_is_a_file_is_not_found() {
    let store = MockFileStore::new().with_file("/notes", b"").unwrap();
    let service = CopyService::new(&store);

    let failure = service.copy("x", "a.md", &destination("/notes")).unwrap_err();
    assert_eq!(failure.error, CopyErrorKind::DirNotFound);
}

#[test]
fn test_io_order_is_dir_then_file_then_write() {
    let store = MockFileStore::new().with_dir("/out").unwrap();
    let service = CopyService::new(&store);

    service.copy("x", "a.md", &destination("/out")).unwrap();

    let ops: Vec<Operation> = store.calls().unwrap().into_iter().map(|(op, _)| op).collect();
    assert_eq!(
        ops,
        vec![
            Operation::DirectoryExists,
            Operation::FileExists,
            Operation::WriteFile
        ]
    );
}

#[test]
fn test_extension_override_variants() {
    let store = MockFileStore::new().with_dir("/out").unwrap();
    let service = CopyService::new(&store);

    let cases = [
        ("source.md", ".txt", "/out/source.txt"),
        ("source.md", "txt", "/out/source.txt"),
        ("source.md", "", "/out/source"),
        ("README", ".md", "/out/README.md"),
    ];

    for (source, extension, expected) in cases {
        let dest = Destination {
            overwrite: true,
            ..with_extension("/out", extension)
        };
        let path = service.copy("x", source, &dest).unwrap();
        assert_eq!(path, PathBuf::from(expected), "extension {extension:?}");
    }
}

#[test]
fn test_rename_probes_until_free() {
    let store = MockFileStore::new()
        .with_file("/out/note.md", b"0")
        .unwrap()
        .with_file("/out/note_1.md", b"1")
        .unwrap();
    let service = CopyService::new(&store);

    let path = service
        .copy_with_rename("new", "note.md", &destination("/out"))
        .unwrap();

    assert_eq!(path, PathBuf::from("/out/note_2.md"));
    assert_eq!(store.read_to_string(&path).unwrap(), "new");
    assert_eq!(
        store.read_to_string(Path::new("/out/note.md")).unwrap(),
        "0"
    );
}

#[test]
fn test_rename_skips_long_run_of_taken_names() {
    let store = ["doc.md", "doc_1.md", "doc_2.md", "doc_3.md"]
        .into_iter()
        .fold(MockFileStore::new(), |store, name| {
            store.with_file(format!("/out/{name}"), b"taken").unwrap()
        });
    let service = CopyService::new(&store);

    let path = service
        .copy_with_rename("new", "doc.md", &destination("/out"))
        .unwrap();
    assert_eq!(path, PathBuf::from("/out/doc_4.md"));
}

#[test]
fn test_rename_inserts_counter_before_last_extension() {
    let store = MockFileStore::new()
        .with_file("/out/file.test.md", b"taken")
        .unwrap();
    let service = CopyService::new(&store);

    let path = service
        .copy_with_rename("new", "file.test.md", &destination("/out"))
        .unwrap();
    assert_eq!(path, PathBuf::from("/out/file.test_1.md"));
}

#[test]
fn test_rename_without_collision_uses_original_name() {
    let store = MockFileStore::new().with_dir("/out").unwrap();
    let service = CopyService::new(&store);

    let path = service
        .copy_with_rename("new", "README", &destination("/out"))
        .unwrap();
    assert_eq!(path, PathBuf::from("/out/README"));
}

#[test]
fn test_rename_ignores_overwrite_flag() {
    let store = MockFileStore::new().with_file("/out/a.md", b"old").unwrap();
    let service = CopyService::new(&store);
    let dest = Destination {
        overwrite: true,
        ..destination("/out")
    };

    let path = service.copy_with_rename("new", "a.md", &dest).unwrap();
    assert_eq!(path, PathBuf::from("/out/a_1.md"));
    assert_eq!(store.read_to_string(Path::new("/out/a.md")).unwrap(), "old");
}

#[test]
fn test_rename_probes_with_overridden_extension() {
    let store = MockFileStore::new()
        .with_file("/out/source.txt", b"taken")
        .unwrap()
        .with_file("/out/source_1.md", b"different extension")
        .unwrap();
    let service = CopyService::new(&store);

    let path = service
        .copy_with_rename("new", "source.md", &with_extension("/out", "txt"))
        .unwrap();
    assert_eq!(path, PathBuf::from("/out/source_1.txt"));
}

#[test]
fn test_write_failure_becomes_io_error() {
    let store = MockFileStore::new()
        .with_dir("/out")
        .unwrap()
        .with_failure(Operation::WriteFile, io::ErrorKind::Other, "disk full")
        .unwrap();
    let service = CopyService::new(&store);

    let failure = service.copy("x", "a.md", &destination("/out")).unwrap_err();
    assert_eq!(failure.error, CopyErrorKind::IoError);
    assert!(failure.message.contains("disk full"));

    let failure = service
        .copy_with_rename("x", "a.md", &destination("/out"))
        .unwrap_err();
    assert_eq!(failure.error, CopyErrorKind::IoError);
    assert!(failure.message.contains("disk full"));
}

#[test]
fn test_lookup_failure_becomes_io_error() {
    let store = MockFileStore::new()
        .with_failure(
            Operation::DirectoryExists,
            io::ErrorKind::PermissionDenied,
            "EACCES: permission denied",
        )
        .unwrap();
    let service = CopyService::new(&store);

    let failure = service.copy("x", "a.md", &destination("/out")).unwrap_err();
    assert_eq!(failure.error, CopyErrorKind::IoError);
    assert!(failure.is_permission_denied());
}

#[test]
fn test_file_exists_propagates_store_errors() {
    let store = MockFileStore::new()
        .with_failure(Operation::FileExists, io::ErrorKind::Other, "stat failed")
        .unwrap();
    let service = CopyService::new(&store);

    let err = service.file_exists("/out", "a.md").unwrap_err();
    assert_eq!(err.to_string(), "stat failed");
}

#[test]
fn test_file_exists_joins_destination_and_name() {
    let store = MockFileStore::new().with_file("/out/a.md", b"").unwrap();
    let service = CopyService::new(&store);

    assert!(service.file_exists("/out", "a.md").unwrap());
    assert!(!service.file_exists("/out", "b.md").unwrap());
    assert_eq!(
        store.calls().unwrap()[0],
        (Operation::FileExists, PathBuf::from("/out/a.md"))
    );
}

#[test]
fn test_tilde_destination_uses_store_home() {
    let store = MockFileStore::new()
        .with_home("/home/user")
        .unwrap()
        .with_dir("/home/user/archive")
        .unwrap()
        .with_dir("/data/~/archive")
        .unwrap();
    let service = CopyService::new(&store);

    let path = service.copy("x", "a.md", &destination("~/archive")).unwrap();
    assert_eq!(path, PathBuf::from("/home/user/archive/a.md"));

    let path = service
        .copy("x", "a.md", &destination("/data/~/archive"))
        .unwrap();
    assert_eq!(path, PathBuf::from("/data/~/archive/a.md"));
}

#[test]
fn test_doubled_separator_after_tilde_stays_in_home() {
    let store = MockFileStore::new()
        .with_home("/home/user")
        .unwrap()
        .with_dir("/home/user/notes")
        .unwrap()
        .with_dir("/notes")
        .unwrap();
    let service = CopyService::new(&store);

    let path = service.copy("x", "a.md", &destination("~//notes")).unwrap();
    assert_eq!(path, PathBuf::from("/home/user/notes/a.md"));
    assert!(!store.file_exists(Path::new("/notes/a.md")).unwrap());
}
