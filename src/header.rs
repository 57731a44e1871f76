// SPDX-License-Identifier: Apache-2.0

//! Shapes of parenthesized headers, shared by group headers (`cell (INV)`)
//! and complex attributes (`capacitive_load_unit (1, ff) ;`).
//!
//! Every shape is validated by the one [`HeaderReader`] state machine: the
//! parser calls [`HeaderReader::read_header_value`] for each comma-separated
//! value to learn what kind of value to read at that position, then
//! [`HeaderReader::end_header`] once the closing `)` is reached.

use crate::error::{ErrorKind, GroupError};
use crate::loc::Loc;

/// Kind of a single header value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Str,
    Int,
    Float,
    /// A string holding a comma or space separated list of floats.
    FloatVector,
    /// A string holding a comma or space separated list of integers.
    IntVector,
    Technology,
}

/// How many values a shape takes and of which kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Fixed(&'static [ValueKind]),
    /// Zero or more values of one kind.
    List(ValueKind),
    /// Zero or one value.
    Optional(ValueKind),
    /// `int, float` followed by up to three more floats.
    FanoutLength,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderShape {
    Empty,
    Str,
    StrStr,
    StrStrInt,
    StrStrStr,
    StrFloat,
    StrInt,
    FloatFloat,
    FloatFloatStr,
    FloatStr,
    IntFloat,
    IntFloatVector,
    IntStr,
    FloatVector,
    IntVector,
    Technology,
    StrList,
    IntList,
    FloatList,
    /// The `values ( "...", "..." )` table body: a list of float vectors.
    Values,
    OptStr,
    FanoutLength,
}

use ValueKind as K;

impl HeaderShape {
    pub fn arity(self) -> Arity {
        match self {
            HeaderShape::Empty => Arity::Fixed(&[]),
            HeaderShape::Str => Arity::Fixed(&[K::Str]),
            HeaderShape::StrStr => Arity::Fixed(&[K::Str, K::Str]),
            HeaderShape::StrStrInt => Arity::Fixed(&[K::Str, K::Str, K::Int]),
            HeaderShape::StrStrStr => Arity::Fixed(&[K::Str, K::Str, K::Str]),
            HeaderShape::StrFloat => Arity::Fixed(&[K::Str, K::Float]),
            HeaderShape::StrInt => Arity::Fixed(&[K::Str, K::Int]),
            HeaderShape::FloatFloat => Arity::Fixed(&[K::Float, K::Float]),
            HeaderShape::FloatFloatStr => Arity::Fixed(&[K::Float, K::Float, K::Str]),
            HeaderShape::FloatStr => Arity::Fixed(&[K::Float, K::Str]),
            HeaderShape::IntFloat => Arity::Fixed(&[K::Int, K::Float]),
            HeaderShape::IntFloatVector => Arity::Fixed(&[K::Int, K::FloatVector]),
            HeaderShape::IntStr => Arity::Fixed(&[K::Int, K::Str]),
            HeaderShape::FloatVector => Arity::Fixed(&[K::FloatVector]),
            HeaderShape::IntVector => Arity::Fixed(&[K::IntVector]),
            HeaderShape::Technology => Arity::Fixed(&[K::Technology]),
            HeaderShape::StrList => Arity::List(K::Str),
            HeaderShape::IntList => Arity::List(K::Int),
            HeaderShape::FloatList => Arity::List(K::Float),
            HeaderShape::Values => Arity::List(K::FloatVector),
            HeaderShape::OptStr => Arity::Optional(K::Str),
            HeaderShape::FanoutLength => Arity::FanoutLength,
        }
    }
}

const FANOUT_LENGTH_MIN: usize = 2;
const FANOUT_LENGTH_MAX: usize = 5;

/// Per-header accumulator; one is created at `(` and consumed at `)`.
#[derive(Debug)]
pub struct HeaderReader {
    shape: HeaderShape,
    count: usize,
}

impl HeaderReader {
    pub fn begin_header(shape: HeaderShape) -> Self {
        Self { shape, count: 0 }
    }

    /// Validates that a value may appear at `ordinal` (0-based) and returns
    /// the kind to read there.
    pub fn read_header_value(&mut self, loc: Loc, ordinal: usize) -> Result<ValueKind, GroupError> {
        debug_assert_eq!(ordinal, self.count);
        let kind = match self.shape.arity() {
            Arity::Fixed(kinds) => kinds.get(ordinal).copied().ok_or_else(|| {
                too_many(loc, format!("Too many values, expected {}", kinds.len()))
            })?,
            Arity::List(kind) => kind,
            Arity::Optional(kind) => {
                if ordinal > 0 {
                    return Err(too_many(loc, "Too many values, expected at most 1"));
                }
                kind
            }
            Arity::FanoutLength => match ordinal {
                0 => ValueKind::Int,
                n if n < FANOUT_LENGTH_MAX => ValueKind::Float,
                _ => {
                    return Err(too_many(
                        loc,
                        format!("Too many values, expected at most {}", FANOUT_LENGTH_MAX),
                    ));
                }
            },
        };
        self.count += 1;
        Ok(kind)
    }

    /// Validates the total count; `loc` is that of the closing `)`.
    pub fn end_header(self, loc: Loc) -> Result<usize, GroupError> {
        let short = |message: String| {
            GroupError::new(ErrorKind::AttributeCardinalityViolation, loc, message)
        };
        match self.shape.arity() {
            Arity::Fixed(kinds) if self.count < kinds.len() => Err(short(format!(
                "Too few values, expected {}",
                kinds.len()
            ))),
            Arity::FanoutLength if self.count < FANOUT_LENGTH_MIN => Err(short(format!(
                "Too few values, expected at least {}",
                FANOUT_LENGTH_MIN
            ))),
            _ => Ok(self.count),
        }
    }
}

fn too_many(loc: Loc, message: impl Into<String>) -> GroupError {
    GroupError::new(ErrorKind::AttributeCardinalityViolation, loc, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn feed(shape: HeaderShape, n: usize) -> Result<Vec<ValueKind>, GroupError> {
        let mut reader = HeaderReader::begin_header(shape);
        let mut kinds = Vec::new();
        for i in 0..n {
            kinds.push(reader.read_header_value(Loc::new(1, i + 1), i)?);
        }
        reader.end_header(Loc::new(1, 99))?;
        Ok(kinds)
    }

    #[test_case(HeaderShape::StrStrInt, 3, vec![ValueKind::Str, ValueKind::Str, ValueKind::Int]; "str str int")]
    #[test_case(HeaderShape::StrList, 4, vec![ValueKind::Str; 4]; "str list")]
    #[test_case(HeaderShape::OptStr, 0, vec![]; "optional absent")]
    #[test_case(HeaderShape::FanoutLength, 5, vec![ValueKind::Int, ValueKind::Float, ValueKind::Float, ValueKind::Float, ValueKind::Float]; "fanout length full")]
    fn test_accepted(shape: HeaderShape, n: usize, want: Vec<ValueKind>) {
        assert_eq!(feed(shape, n).unwrap(), want);
    }

    #[test]
    fn test_excess_value_rejected_at_that_value() {
        let err = feed(HeaderShape::StrStrInt, 4).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AttributeCardinalityViolation);
        assert_eq!(err.message, "Too many values, expected 3");
        assert_eq!(err.loc, Loc::new(1, 4));
    }

    #[test]
    fn test_short_header_rejected_at_close() {
        let err = feed(HeaderShape::StrStr, 1).unwrap_err();
        assert_eq!(err.message, "Too few values, expected 2");
        assert_eq!(err.loc, Loc::new(1, 99));
        let err = feed(HeaderShape::FanoutLength, 1).unwrap_err();
        assert_eq!(err.message, "Too few values, expected at least 2");
    }

    #[test]
    fn test_optional_rejects_second_value() {
        assert!(feed(HeaderShape::OptStr, 1).is_ok());
        assert!(feed(HeaderShape::OptStr, 2).is_err());
    }
}
