// SPDX-License-Identifier: Apache-2.0

//! Source positions.

use std::fmt;

/// A 1-based line/column position in the input text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Loc {
    pub line: usize,
    pub col: usize,
}

impl Loc {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Span of a token or construct; `end` is the position just past the last
/// byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FileRegion {
    pub start: Loc,
    pub end: Loc,
}

impl FileRegion {
    pub fn new(start: Loc, end: Loc) -> Self {
        Self { start, end }
    }

    /// Smallest region covering both `self` and `other`.
    pub fn join(self, other: FileRegion) -> FileRegion {
        FileRegion {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for FileRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(f, "{}:{}-{}", self.start.line, self.start.col, self.end.col)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let region = FileRegion::new(Loc::new(3, 5), Loc::new(3, 9));
        assert_eq!(region.to_string(), "3:5-9");
        let region = FileRegion::new(Loc::new(3, 5), Loc::new(4, 2));
        assert_eq!(region.to_string(), "3:5-4:2");
    }

    #[test]
    fn test_join() {
        let a = FileRegion::new(Loc::new(1, 4), Loc::new(1, 8));
        let b = FileRegion::new(Loc::new(2, 1), Loc::new(2, 3));
        assert_eq!(
            a.join(b),
            FileRegion::new(Loc::new(1, 4), Loc::new(2, 3))
        );
    }
}
