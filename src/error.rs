// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Errors raised by the card store and the practice session. All of them
/// are recoverable: the caller reports them and keeps its last known good
/// in-memory state.
#[derive(Debug, PartialEq)]
pub enum CardError {
    /// A question or answer was empty after trimming.
    Validation(String),
    /// The card identity no longer exists (e.g. a stale selection).
    NotFound(String),
    /// Writing the storage file failed.
    Storage {
        kind: StorageErrorKind,
        path: PathBuf,
        message: String,
    },
    /// The storage file could not be read or parsed.
    CorruptData { path: PathBuf, message: String },
    /// A practice intent was issued in the wrong state.
    InvalidTransition(String),
    /// Practice was requested on a collection with no cards.
    EmptyCollection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    Permission,
    Io,
}

impl From<ErrorKind> for StorageErrorKind {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::PermissionDenied => StorageErrorKind::Permission,
            _ => StorageErrorKind::Io,
        }
    }
}

impl CardError {
    pub fn storage(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        CardError::Storage {
            kind: StorageErrorKind::from(err.kind()),
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl Display for CardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CardError::Validation(msg) => write!(f, "invalid card: {msg}"),
            CardError::NotFound(question) => write!(f, "no card with question {question:?}"),
            CardError::Storage {
                kind: StorageErrorKind::Permission,
                path,
                ..
            } => write!(
                f,
                "failed to save flashcards to '{}': check file permissions",
                path.display()
            ),
            CardError::Storage {
                kind: StorageErrorKind::Io,
                path,
                message,
            } => write!(
                f,
                "file I/O error while saving '{}': {message}",
                path.display()
            ),
            CardError::CorruptData { path, message } => write!(
                f,
                "failed to read '{}' ({message}); the file may be corrupt, loading defaults",
                path.display()
            ),
            CardError::InvalidTransition(msg) => write!(f, "invalid action: {msg}"),
            CardError::EmptyCollection => write!(f, "no cards to practice, create flashcards first"),
        }
    }
}

impl Error for CardError {}

/// The error type surfaced at the command-line boundary.
#[derive(Debug, PartialEq)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {}

impl From<CardError> for ErrorReport {
    fn from(value: CardError) -> Self {
        ErrorReport::new(&value.to_string())
    }
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport::new(&format!("I/O error: {value}"))
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport::new(&format!("JSON error: {value}"))
    }
}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(msg: &str) -> Fallible<T> {
    Err(ErrorReport::new(msg))
}
