use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // Raised when an item is asked to be lent while it is already out on loan. The item and
    // the borrower history are left untouched, so the caller may simply report it.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn unavailable(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, LibraryError::CurrentlyUnavailable { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("output io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::CurrentlyUnavailable { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for lending operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ItemStatus {
    Available,
    CheckedOut,
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemStatus::Available => write!(f, "Available"),
            ItemStatus::CheckedOut => write!(f, "CheckedOut"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ItemKind {
    Book,
    Magazine,
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemKind::Book => write!(f, "Book"),
            ItemKind::Magazine => write!(f, "Magazine"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;
    use crate::core::library::{ItemKind, ItemStatus, LibraryError};

    #[test]
    fn test_should_create_unavailable_error() {
        let err = LibraryError::unavailable("test", None);
        assert!(matches!(err, LibraryError::CurrentlyUnavailable{ message: _, reason_code: _ }));
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_should_create_serialization_error() {
        let err = LibraryError::serialization("test");
        assert!(matches!(err, LibraryError::Serialization{ message: _ }));
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_convert_io_error() {
        let err = LibraryError::from(std::io::Error::new(ErrorKind::BrokenPipe, "closed"));
        assert!(matches!(err, LibraryError::Runtime{ reason_code: Some(ref code), .. } if code == "BrokenPipe"));
    }

    #[test]
    fn test_should_display_message() {
        let err = LibraryError::unavailable("item 2 is already lent", Some("409".to_string()));
        assert_eq!("item 2 is already lent Some(\"409\")", err.to_string());
    }

    #[test]
    fn test_should_display_item_status() {
        assert_eq!("Available", ItemStatus::Available.to_string());
        assert_eq!("CheckedOut", ItemStatus::CheckedOut.to_string());
    }

    #[test]
    fn test_should_display_item_kind() {
        assert_eq!("Book", ItemKind::Book.to_string());
        assert_eq!("Magazine", ItemKind::Magazine.to_string());
    }
}
