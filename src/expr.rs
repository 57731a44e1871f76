// SPDX-License-Identifier: Apache-2.0

//! Expression trees read from attribute values.
//!
//! Boolean functions (`function : "A & !B" ;`) arrive as quoted strings and are
//! parsed here with [`parse_function`]. Arithmetic expressions over the supply
//! names are read straight from the token stream by the scanner. Both produce
//! an [`AstExpr`] whose leaves still name pins; [`AstExpr::to_expr`] resolves
//! them against a pin-index map.

use ahash::AHashMap;
use std::fmt;

use crate::logic::LogicExpr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Supply {
    Vdd,
    Vss,
    Vcc,
}

impl Supply {
    pub fn as_str(self) -> &'static str {
        match self {
            Supply::Vdd => "VDD",
            Supply::Vss => "VSS",
            Supply::Vcc => "VCC",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Plus,
    Minus,
    Mult,
    Div,
    And,
    Or,
    Xor,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Plus => "+",
            BinOp::Minus => "-",
            BinOp::Mult => "*",
            BinOp::Div => "/",
            BinOp::And => "&",
            BinOp::Or => "|",
            BinOp::Xor => "^",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AstExpr {
    Bool(bool),
    Float(f64),
    /// A pin name, unresolved.
    Str(String),
    Supply(Supply),
    Not(Box<AstExpr>),
    Binary {
        op: BinOp,
        lhs: Box<AstExpr>,
        rhs: Box<AstExpr>,
    },
}

impl AstExpr {
    pub fn binary(op: BinOp, lhs: AstExpr, rhs: AstExpr) -> Self {
        AstExpr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn negate(e: AstExpr) -> Self {
        AstExpr::Not(Box::new(e))
    }

    /// Recursively collect all pin names referenced by the expression.
    pub fn names(&self) -> Vec<&str> {
        let mut v = Vec::new();
        self.collect_names(&mut v);
        v
    }

    fn collect_names<'a>(&'a self, v: &mut Vec<&'a str>) {
        match self {
            AstExpr::Str(s) => v.push(s),
            AstExpr::Not(e) => e.collect_names(v),
            AstExpr::Binary { lhs, rhs, .. } => {
                lhs.collect_names(v);
                rhs.collect_names(v);
            }
            AstExpr::Bool(_) | AstExpr::Float(_) | AstExpr::Supply(_) => {}
        }
    }

    /// Resolves pin names through `pin_map`.
    ///
    /// A name missing from the map yields [`LogicExpr::Invalid`] (which
    /// absorbs every enclosing operator) and a warning; callers decide whether
    /// that is fatal. Note that a Boolean constant maps to its complement:
    /// `Bool(true)` resolves to [`LogicExpr::Zero`] and `Bool(false)` to
    /// [`LogicExpr::One`].
    pub fn to_expr(&self, pin_map: &AHashMap<String, usize>) -> LogicExpr {
        match self {
            AstExpr::Bool(true) => LogicExpr::Zero,
            AstExpr::Bool(false) => LogicExpr::One,
            AstExpr::Str(name) => match pin_map.get(name) {
                Some(&var) => LogicExpr::posi_literal(var),
                None => {
                    log::warn!("{}: No such pin-name", name);
                    LogicExpr::Invalid
                }
            },
            AstExpr::Not(e) => !e.to_expr(pin_map),
            AstExpr::Binary { op, lhs, rhs } => {
                let l = lhs.to_expr(pin_map);
                let r = rhs.to_expr(pin_map);
                match op {
                    BinOp::And => l & r,
                    BinOp::Or => l | r,
                    BinOp::Xor => l ^ r,
                    BinOp::Plus | BinOp::Minus | BinOp::Mult | BinOp::Div => {
                        log::warn!("'{}' has no Boolean meaning", op.symbol());
                        LogicExpr::Invalid
                    }
                }
            }
            AstExpr::Float(_) | AstExpr::Supply(_) => {
                log::warn!("{}: not a Boolean operand", self);
                LogicExpr::Invalid
            }
        }
    }
}

impl fmt::Display for AstExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstExpr::Bool(b) => write!(f, "{}", if *b { "1" } else { "0" }),
            AstExpr::Float(v) => write!(f, "{}", v),
            AstExpr::Str(s) => write!(f, "{}", s),
            AstExpr::Supply(s) => write!(f, "{}", s.as_str()),
            AstExpr::Not(e) => write!(f, "!{}", e),
            AstExpr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Tok {
    Ident(String),
    LParen,
    RParen,
    And,
    Or,
    Xor,
    Not,
    Prime,
    Const(bool),
}

fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut tokens = Vec::new();
    let mut chars = s.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' | '\n' | '\r' => {
                chars.next();
            }
            '(' => {
                tokens.push(Tok::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(Tok::RParen);
                chars.next();
            }
            '&' | '*' => {
                tokens.push(Tok::And);
                chars.next();
            }
            '|' | '+' => {
                tokens.push(Tok::Or);
                chars.next();
            }
            '^' => {
                tokens.push(Tok::Xor);
                chars.next();
            }
            '!' => {
                tokens.push(Tok::Not);
                chars.next();
            }
            '\'' => {
                tokens.push(Tok::Prime);
                chars.next();
            }
            '0' | '1' => {
                let mut digits = String::new();
                while let Some(&c2) = chars.peek() {
                    if c2 == '0' || c2 == '1' {
                        digits.push(c2);
                        chars.next();
                    } else {
                        break;
                    }
                }
                match digits.as_str() {
                    "0" => tokens.push(Tok::Const(false)),
                    "1" => tokens.push(Tok::Const(true)),
                    _ => return Err(format!("0 or 1 is expected, found {}", digits)),
                }
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(&c2) = chars.peek() {
                    if c2.is_ascii_alphanumeric() || matches!(c2, '_' | '[' | ']' | '.') {
                        ident.push(c2);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Tok::Ident(ident));
            }
            _ => return Err(format!("Unexpected character in function: '{}'", c)),
        }
    }
    Ok(tokens)
}

/// Parse a Liberty Boolean function string into an expression tree.
///
/// `|`, `+` and `^` bind loosest (left-associative, `^` is XOR); `&`, `*` and
/// plain juxtaposition are AND; `!` is prefix NOT and `'` postfix NOT.
pub fn parse_function(s: &str) -> Result<AstExpr, String> {
    let tokens = tokenize(s)?;
    let (expr, rest) = parse_or(&tokens)?;
    if !rest.is_empty() {
        return Err(format!("Unexpected tokens at end: {:?}", rest));
    }
    Ok(expr)
}

fn parse_or(tokens: &[Tok]) -> Result<(AstExpr, &[Tok]), String> {
    let (mut lhs, mut rest) = parse_and(tokens)?;
    loop {
        let op = match rest.first() {
            Some(Tok::Or) => BinOp::Or,
            Some(Tok::Xor) => BinOp::Xor,
            _ => return Ok((lhs, rest)),
        };
        let (rhs, rest2) = parse_and(&rest[1..])?;
        lhs = AstExpr::binary(op, lhs, rhs);
        rest = rest2;
    }
}

fn starts_factor(tok: Option<&Tok>) -> bool {
    matches!(
        tok,
        Some(Tok::Not | Tok::LParen | Tok::Ident(_) | Tok::Const(_))
    )
}

fn parse_and(tokens: &[Tok]) -> Result<(AstExpr, &[Tok]), String> {
    let (mut lhs, mut rest) = parse_not(tokens)?;
    loop {
        if let Some(Tok::And) = rest.first() {
            rest = &rest[1..];
        } else if !starts_factor(rest.first()) {
            return Ok((lhs, rest));
        }
        let (rhs, rest2) = parse_not(rest)?;
        lhs = AstExpr::binary(BinOp::And, lhs, rhs);
        rest = rest2;
    }
}

fn parse_not(tokens: &[Tok]) -> Result<(AstExpr, &[Tok]), String> {
    if let Some(Tok::Not) = tokens.first() {
        let (expr, rest) = parse_not(&tokens[1..])?;
        return Ok((AstExpr::negate(expr), rest));
    }
    let (mut expr, mut rest) = parse_atom(tokens)?;
    while let Some(Tok::Prime) = rest.first() {
        expr = AstExpr::negate(expr);
        rest = &rest[1..];
    }
    Ok((expr, rest))
}

fn parse_atom(tokens: &[Tok]) -> Result<(AstExpr, &[Tok]), String> {
    match tokens.first() {
        Some(Tok::Ident(s)) => Ok((AstExpr::Str(s.clone()), &tokens[1..])),
        Some(Tok::Const(b)) => Ok((AstExpr::Bool(*b), &tokens[1..])),
        Some(Tok::LParen) => {
            let (expr, rest) = parse_or(&tokens[1..])?;
            match rest.first() {
                Some(Tok::RParen) => Ok((expr, &rest[1..])),
                _ => Err("Expected ')'".to_string()),
            }
        }
        Some(tok) => Err(format!("Unexpected token: {:?}", tok)),
        None => Err("Unexpected end of input".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use pretty_assertions::assert_eq;

    fn s(name: &str) -> AstExpr {
        AstExpr::Str(name.to_string())
    }

    fn pin_map(names: &[&str]) -> AHashMap<String, usize> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.to_string(), i))
            .collect()
    }

    #[test]
    fn test_parse_precedence() {
        let e = parse_function("A | B & C").unwrap();
        assert_eq!(
            e,
            AstExpr::binary(
                BinOp::Or,
                s("A"),
                AstExpr::binary(BinOp::And, s("B"), s("C"))
            )
        );
    }

    #[test]
    fn test_parse_juxtaposition_and_prime() {
        let e = parse_function("A B' + (C ^ D)").unwrap();
        assert_eq!(e.to_string(), "((A & !B) | (C ^ D))");
    }

    #[test]
    fn test_parse_bus_bit_names() {
        let e = parse_function("!D[0] * Q_reg.x").unwrap();
        assert_eq!(e.names(), vec!["D[0]", "Q_reg.x"]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_function("(A * )").is_err());
        assert!(parse_function("A +").is_err());
        assert!(parse_function("(A").is_err());
        assert!(parse_function("A $ B").is_err());
        assert!(parse_function("10").is_err());
    }

    #[test]
    fn test_to_expr_resolves_positions() {
        let map = pin_map(&["A", "B"]);
        let e = parse_function("A & !B").unwrap().to_expr(&map);
        assert_eq!(
            e,
            LogicExpr::posi_literal(0) & LogicExpr::nega_literal(1)
        );
    }

    #[test]
    fn test_to_expr_missing_pin_is_invalid() {
        let _ = env_logger::builder().is_test(true).try_init();
        let map = pin_map(&["A"]);
        let e = parse_function("A | Z").unwrap().to_expr(&map);
        assert_eq!(e, LogicExpr::Invalid);
    }

    #[test]
    fn test_bool_constants_map_to_complement() {
        let map = pin_map(&[]);
        assert_eq!(AstExpr::Bool(true).to_expr(&map), LogicExpr::Zero);
        assert_eq!(AstExpr::Bool(false).to_expr(&map), LogicExpr::One);
        assert_eq!(parse_function("1").unwrap(), AstExpr::Bool(true));
    }

    #[test]
    fn test_every_listed_pin_resolves() {
        let cases = hashmap! {
            "A" => 0usize,
            "B" => 1usize,
            "CK" => 2usize,
        };
        let map: AHashMap<String, usize> =
            cases.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        for (name, index) in &cases {
            let e = s(name).to_expr(&map);
            assert!(e.is_valid());
            assert_eq!(e, LogicExpr::posi_literal(*index));
        }
    }
}
