// SPDX-License-Identifier: Apache-2.0

//! Resolved Boolean functions over positional input variables.
//!
//! [`LogicExpr`] is what a cell's function, clock, clear and similar
//! attributes become once pin names have been mapped to indices. [`TvFunc`]
//! is its truth-table form, used to derive timing senses by cofactoring.

use bitvec::prelude::*;
use serde::Serialize;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Widest function for which a truth table is built.
pub const MAX_TV_INPUTS: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum LogicExpr {
    /// Marker for an expression that referenced an unknown pin name.
    Invalid,
    Zero,
    One,
    Literal { var: usize, inverted: bool },
    Not(Box<LogicExpr>),
    And(Vec<LogicExpr>),
    Or(Vec<LogicExpr>),
    Xor(Vec<LogicExpr>),
}

impl LogicExpr {
    pub fn posi_literal(var: usize) -> Self {
        LogicExpr::Literal {
            var,
            inverted: false,
        }
    }

    pub fn nega_literal(var: usize) -> Self {
        LogicExpr::Literal {
            var,
            inverted: true,
        }
    }

    /// False if an unresolved reference appears anywhere in the tree.
    pub fn is_valid(&self) -> bool {
        match self {
            LogicExpr::Invalid => false,
            LogicExpr::Zero | LogicExpr::One | LogicExpr::Literal { .. } => true,
            LogicExpr::Not(e) => e.is_valid(),
            LogicExpr::And(v) | LogicExpr::Or(v) | LogicExpr::Xor(v) => {
                v.iter().all(LogicExpr::is_valid)
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, LogicExpr::Zero)
    }

    pub fn is_one(&self) -> bool {
        matches!(self, LogicExpr::One)
    }

    /// One past the largest variable index used.
    pub fn input_size(&self) -> usize {
        match self {
            LogicExpr::Invalid | LogicExpr::Zero | LogicExpr::One => 0,
            LogicExpr::Literal { var, .. } => var + 1,
            LogicExpr::Not(e) => e.input_size(),
            LogicExpr::And(v) | LogicExpr::Or(v) | LogicExpr::Xor(v) => {
                v.iter().map(LogicExpr::input_size).max().unwrap_or(0)
            }
        }
    }

    /// Evaluates under `inputs[i]` for variable `i`; `None` for invalid
    /// expressions or out-of-range variables.
    pub fn eval(&self, inputs: &[bool]) -> Option<bool> {
        match self {
            LogicExpr::Invalid => None,
            LogicExpr::Zero => Some(false),
            LogicExpr::One => Some(true),
            LogicExpr::Literal { var, inverted } => inputs.get(*var).map(|v| *v != *inverted),
            LogicExpr::Not(e) => e.eval(inputs).map(|v| !v),
            LogicExpr::And(v) => v.iter().try_fold(true, |acc, e| Some(acc & e.eval(inputs)?)),
            LogicExpr::Or(v) => v.iter().try_fold(false, |acc, e| Some(acc | e.eval(inputs)?)),
            LogicExpr::Xor(v) => v.iter().try_fold(false, |acc, e| Some(acc ^ e.eval(inputs)?)),
        }
    }

    /// Truth table over `ni` inputs. `None` if the expression is invalid, uses
    /// a variable `>= ni`, or `ni` exceeds [`MAX_TV_INPUTS`].
    pub fn make_tv(&self, ni: usize) -> Option<TvFunc> {
        if ni > MAX_TV_INPUTS || self.input_size() > ni {
            return None;
        }
        self.tv_rec(ni)
    }

    fn tv_rec(&self, ni: usize) -> Option<TvFunc> {
        Some(match self {
            LogicExpr::Invalid => return None,
            LogicExpr::Zero => TvFunc::zero(ni),
            LogicExpr::One => TvFunc::one(ni),
            LogicExpr::Literal { var, inverted } => TvFunc::literal(ni, *var, *inverted),
            LogicExpr::Not(e) => !&e.tv_rec(ni)?,
            LogicExpr::And(v) => {
                let mut acc = TvFunc::one(ni);
                for e in v {
                    acc = &acc & &e.tv_rec(ni)?;
                }
                acc
            }
            LogicExpr::Or(v) => {
                let mut acc = TvFunc::zero(ni);
                for e in v {
                    acc = &acc | &e.tv_rec(ni)?;
                }
                acc
            }
            LogicExpr::Xor(v) => {
                let mut acc = TvFunc::zero(ni);
                for e in v {
                    acc = &acc ^ &e.tv_rec(ni)?;
                }
                acc
            }
        })
    }

    fn combine(
        self,
        rhs: LogicExpr,
        wrap: fn(Vec<LogicExpr>) -> LogicExpr,
        unwrap: fn(LogicExpr) -> Result<Vec<LogicExpr>, LogicExpr>,
    ) -> LogicExpr {
        let mut operands = Vec::new();
        for e in [self, rhs] {
            match unwrap(e) {
                Ok(inner) => operands.extend(inner),
                Err(e) => operands.push(e),
            }
        }
        wrap(operands)
    }
}

impl Not for LogicExpr {
    type Output = LogicExpr;

    fn not(self) -> LogicExpr {
        match self {
            LogicExpr::Invalid => LogicExpr::Invalid,
            LogicExpr::Zero => LogicExpr::One,
            LogicExpr::One => LogicExpr::Zero,
            LogicExpr::Literal { var, inverted } => LogicExpr::Literal {
                var,
                inverted: !inverted,
            },
            LogicExpr::Not(e) => *e,
            e => LogicExpr::Not(Box::new(e)),
        }
    }
}

impl BitAnd for LogicExpr {
    type Output = LogicExpr;

    fn bitand(self, rhs: LogicExpr) -> LogicExpr {
        match (self, rhs) {
            (LogicExpr::Invalid, _) | (_, LogicExpr::Invalid) => LogicExpr::Invalid,
            (LogicExpr::Zero, _) | (_, LogicExpr::Zero) => LogicExpr::Zero,
            (LogicExpr::One, e) | (e, LogicExpr::One) => e,
            (a, b) => a.combine(b, LogicExpr::And, |e| match e {
                LogicExpr::And(v) => Ok(v),
                e => Err(e),
            }),
        }
    }
}

impl BitOr for LogicExpr {
    type Output = LogicExpr;

    fn bitor(self, rhs: LogicExpr) -> LogicExpr {
        match (self, rhs) {
            (LogicExpr::Invalid, _) | (_, LogicExpr::Invalid) => LogicExpr::Invalid,
            (LogicExpr::One, _) | (_, LogicExpr::One) => LogicExpr::One,
            (LogicExpr::Zero, e) | (e, LogicExpr::Zero) => e,
            (a, b) => a.combine(b, LogicExpr::Or, |e| match e {
                LogicExpr::Or(v) => Ok(v),
                e => Err(e),
            }),
        }
    }
}

impl BitXor for LogicExpr {
    type Output = LogicExpr;

    fn bitxor(self, rhs: LogicExpr) -> LogicExpr {
        match (self, rhs) {
            (LogicExpr::Invalid, _) | (_, LogicExpr::Invalid) => LogicExpr::Invalid,
            (LogicExpr::Zero, e) | (e, LogicExpr::Zero) => e,
            (LogicExpr::One, e) | (e, LogicExpr::One) => !e,
            (a, b) => a.combine(b, LogicExpr::Xor, |e| match e {
                LogicExpr::Xor(v) => Ok(v),
                e => Err(e),
            }),
        }
    }
}

impl fmt::Display for LogicExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |f: &mut fmt::Formatter<'_>, v: &[LogicExpr], op: &str| -> fmt::Result {
            write!(f, "(")?;
            for (i, e) in v.iter().enumerate() {
                if i > 0 {
                    write!(f, " {} ", op)?;
                }
                write!(f, "{}", e)?;
            }
            write!(f, ")")
        };
        match self {
            LogicExpr::Invalid => write!(f, "<invalid>"),
            LogicExpr::Zero => write!(f, "0"),
            LogicExpr::One => write!(f, "1"),
            LogicExpr::Literal { var, inverted: false } => write!(f, "x{}", var),
            LogicExpr::Literal { var, inverted: true } => write!(f, "!x{}", var),
            LogicExpr::Not(e) => write!(f, "!{}", e),
            LogicExpr::And(v) => join(f, v, "&"),
            LogicExpr::Or(v) => join(f, v, "|"),
            LogicExpr::Xor(v) => join(f, v, "^"),
        }
    }
}

/// Truth table of a function of `ni` inputs. Bit `m` holds the output for the
/// assignment where input `i` takes bit `i` of `m`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TvFunc {
    ni: usize,
    bits: BitVec,
}

impl TvFunc {
    pub fn zero(ni: usize) -> Self {
        Self {
            ni,
            bits: bitvec![0; 1 << ni],
        }
    }

    pub fn one(ni: usize) -> Self {
        Self {
            ni,
            bits: bitvec![1; 1 << ni],
        }
    }

    pub fn literal(ni: usize, var: usize, inverted: bool) -> Self {
        let mut bits = bitvec![0; 1 << ni];
        for m in 0..bits.len() {
            let v = (m >> var) & 1 == 1;
            bits.set(m, v != inverted);
        }
        Self { ni, bits }
    }

    pub fn input_num(&self) -> usize {
        self.ni
    }

    /// Output for `minterm`, or `None` past the `2^ni` rows.
    pub fn value(&self, minterm: usize) -> Option<bool> {
        self.bits.get(minterm).map(|b| *b)
    }

    pub fn is_zero(&self) -> bool {
        self.bits.not_any()
    }

    pub fn is_one(&self) -> bool {
        self.bits.all()
    }

    /// The function with input `var` fixed to `value`, still over `ni`
    /// inputs.
    pub fn cofactor(&self, var: usize, value: bool) -> TvFunc {
        let mut bits = bitvec![0; self.bits.len()];
        for m in 0..self.bits.len() {
            let src = if value { m | (1 << var) } else { m & !(1 << var) };
            bits.set(m, self.bits[src]);
        }
        TvFunc { ni: self.ni, bits }
    }

    /// Whether `self` and `other` are both true for some assignment.
    pub fn intersects(&self, other: &TvFunc) -> bool {
        let mut bits = self.bits.clone();
        bits &= other.bits.as_bitslice();
        bits.any()
    }
}

impl Not for &TvFunc {
    type Output = TvFunc;

    fn not(self) -> TvFunc {
        TvFunc {
            ni: self.ni,
            bits: !self.bits.clone(),
        }
    }
}

impl BitAnd for &TvFunc {
    type Output = TvFunc;

    fn bitand(self, rhs: &TvFunc) -> TvFunc {
        debug_assert_eq!(self.ni, rhs.ni);
        let mut bits = self.bits.clone();
        bits &= rhs.bits.as_bitslice();
        TvFunc { ni: self.ni, bits }
    }
}

impl BitOr for &TvFunc {
    type Output = TvFunc;

    fn bitor(self, rhs: &TvFunc) -> TvFunc {
        debug_assert_eq!(self.ni, rhs.ni);
        let mut bits = self.bits.clone();
        bits |= rhs.bits.as_bitslice();
        TvFunc { ni: self.ni, bits }
    }
}

impl BitXor for &TvFunc {
    type Output = TvFunc;

    fn bitxor(self, rhs: &TvFunc) -> TvFunc {
        debug_assert_eq!(self.ni, rhs.ni);
        let mut bits = self.bits.clone();
        bits ^= rhs.bits.as_bitslice();
        TvFunc { ni: self.ni, bits }
    }
}
