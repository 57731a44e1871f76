// SPDX-License-Identifier: Apache-2.0

//! Error types for reading Liberty files.
//!
//! A [`GroupError`] aborts the innermost group being read and is caught by the
//! per-entry loop at library level, where it becomes an [`EntryFailure`]. A
//! [`LibraryError`] is what the top-level read call returns; nothing below the
//! top level catches it.

use std::fmt;

use crate::loc::Loc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    TypeMismatch,
    MissingRequiredAttribute,
    AttributeCardinalityViolation,
    MutuallyExclusiveAttributesPresent,
    UnresolvedPinReference,
    UnknownTemplateReference,
    InvalidValue,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Lexical => "lexical error",
            ErrorKind::Syntax => "syntax error",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::MissingRequiredAttribute => "missing required attribute",
            ErrorKind::AttributeCardinalityViolation => "attribute cardinality violation",
            ErrorKind::MutuallyExclusiveAttributesPresent => {
                "mutually exclusive attributes present"
            }
            ErrorKind::UnresolvedPinReference => "unresolved pin reference",
            ErrorKind::UnknownTemplateReference => "unknown template reference",
            ErrorKind::InvalidValue => "invalid value",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupError {
    pub kind: ErrorKind,
    pub loc: Loc,
    pub message: String,
}

impl GroupError {
    pub fn new(kind: ErrorKind, loc: Loc, message: impl Into<String>) -> Self {
        Self {
            kind,
            loc,
            message: message.into(),
        }
    }

    pub fn lexical(loc: Loc, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lexical, loc, message)
    }

    pub fn syntax(loc: Loc, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax, loc, message)
    }

    pub fn type_mismatch(loc: Loc, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeMismatch, loc, message)
    }

    pub fn invalid_value(loc: Loc, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidValue, loc, message)
    }

    pub fn missing(loc: Loc, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingRequiredAttribute, loc, message)
    }
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.loc, self.kind, self.message)
    }
}

impl std::error::Error for GroupError {}

/// One top-level library entry (a `cell`, `lu_table_template`, ...) that
/// failed to read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryFailure {
    pub keyword: String,
    pub name: Option<String>,
    pub error: GroupError,
}

impl fmt::Display for EntryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({}): {}", self.keyword, name, self.error),
            None => write!(f, "{}: {}", self.keyword, self.error),
        }
    }
}

#[derive(Debug)]
pub enum LibraryError {
    Io(std::io::Error),
    /// The first keyword of the file was not `library`.
    MissingLibrary { loc: Loc, found: String },
    /// An error that cannot be attributed to a single library entry, such as a
    /// malformed library header.
    Syntax(GroupError),
    /// At least one library entry failed; every failure is listed.
    EntriesFailed(Vec<EntryFailure>),
}

impl LibraryError {
    /// Failures attributed to individual entries; empty for the other
    /// variants.
    pub fn entry_failures(&self) -> &[EntryFailure] {
        match self {
            LibraryError::EntriesFailed(failures) => failures,
            _ => &[],
        }
    }
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Io(e) => write!(f, "I/O error: {}", e),
            LibraryError::MissingLibrary { loc, found } => write!(
                f,
                "{}: 'library' keyword is expected, found {:?}",
                loc, found
            ),
            LibraryError::Syntax(e) => write!(f, "{}", e),
            LibraryError::EntriesFailed(failures) => {
                write!(f, "{} library entries failed to read", failures.len())?;
                for failure in failures {
                    write!(f, "\n  {}", failure)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for LibraryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LibraryError::Io(e) => Some(e),
            LibraryError::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(e: std::io::Error) -> Self {
        LibraryError::Io(e)
    }
}

impl From<GroupError> for LibraryError {
    fn from(e: GroupError) -> Self {
        LibraryError::Syntax(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_failed_lists_every_failure() {
        let err = LibraryError::EntriesFailed(vec![
            EntryFailure {
                keyword: "cell".to_string(),
                name: Some("INV".to_string()),
                error: GroupError::missing(Loc::new(2, 3), "'area' attribute is missing"),
            },
            EntryFailure {
                keyword: "lu_table_template".to_string(),
                name: None,
                error: GroupError::syntax(Loc::new(9, 1), "'(' is expected"),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "2 library entries failed to read\n  \
             cell (INV): 2:3: missing required attribute: 'area' attribute is missing\n  \
             lu_table_template: 9:1: syntax error: '(' is expected"
        );
        assert_eq!(err.entry_failures().len(), 2);
    }
}
