use std::io;
use std::path::PathBuf;

use flaskgen::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::AlreadyExists {
        path: PathBuf::from("demo"),
    };
    assert_eq!(err.to_string(), "Project directory 'demo' already exists.");

    let err = Error::UnknownStructure("tree".to_string());
    assert_eq!(err.to_string(), "Unknown project structure: 'tree'.");

    let err = Error::FileWriteError {
        path: PathBuf::from("demo/app.py"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to write file 'demo/app.py': denied.");
}

#[test]
fn test_error_source() {
    use std::error::Error as _;

    let err = Error::DirectoryCreateError {
        path: PathBuf::from("demo"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.source().is_some());
}
