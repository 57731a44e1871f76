// SPDX-License-Identifier: Apache-2.0

//! Byte-level tokenizer for Liberty text.
//!
//! The scanner pulls bytes lazily from any `Iterator<Item = u8>`, so it works
//! the same over an in-memory string and a decompressing file reader. It keeps
//! one token of lookahead and tracks curly-brace depth, which the parser uses
//! to resynchronize after a failed library entry.

use std::fmt;

use crate::error::GroupError;
use crate::expr::{self, AstExpr, BinOp, Supply};
use crate::loc::{FileRegion, Loc};
use crate::types::{DelayModel, Direction, Technology, TimingSense, TimingType, VarType};
use crate::util::split_list;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Colon,
    Semi,
    Comma,
    Plus,
    Minus,
    Mult,
    Div,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Symbol,
    End,
}

impl TokenKind {
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Colon => "':'",
            TokenKind::Semi => "';'",
            TokenKind::Comma => "','",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Mult => "'*'",
            TokenKind::Div => "'/'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Symbol => "symbol",
            TokenKind::End => "end-of-file",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Symbol text with any surrounding quotes removed; the punctuation
    /// character itself for the single-character kinds.
    pub text: String,
    pub quoted: bool,
    pub region: FileRegion,
}

impl Token {
    pub fn loc(&self) -> Loc {
        self.region.start
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Symbol if self.quoted => write!(f, "\"{}\"", self.text),
            TokenKind::Symbol => write!(f, "'{}'", self.text),
            kind => write!(f, "{}", kind.describe()),
        }
    }
}

fn is_delimiter(b: u8) -> bool {
    b.is_ascii_whitespace()
        || matches!(
            b,
            b'/' | b':' | b';' | b',' | b'+' | b'-' | b'*' | b'(' | b')' | b'{' | b'}'
        )
}

/// True if `text` reads as the mantissa of a number ending in an exponent
/// marker, e.g. `1.5e`, so that a following sign belongs to the same symbol.
fn ends_in_exponent(text: &[u8]) -> bool {
    match (text.first(), text.last()) {
        (Some(first), Some(last)) => {
            (first.is_ascii_digit() || *first == b'.')
                && (*last == b'e' || *last == b'E')
                && text[..text.len() - 1]
                    .iter()
                    .all(|b| b.is_ascii_digit() || *b == b'.')
        }
        _ => false,
    }
}

pub struct Scanner<I: Iterator<Item = u8>> {
    iter: I,
    buffer: Vec<u8>,
    raw_pos: usize,
    lineno: usize,
    colno: usize,
    peeked: Option<Token>,
    depth: usize,
    lcb_count: usize,
}

impl<I: Iterator<Item = u8>> Scanner<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            buffer: Vec::new(),
            raw_pos: 0,
            lineno: 0,
            colno: 0,
            peeked: None,
            depth: 0,
            lcb_count: 0,
        }
    }

    fn pos(&self) -> Loc {
        // lineno and colno are zero-based.
        Loc::new(self.lineno + 1, self.colno + 1)
    }

    fn ensure_buffer(&mut self, n: usize) {
        while self.buffer.len().saturating_sub(self.raw_pos) < n {
            if let Some(b) = self.iter.next() {
                self.buffer.push(b);
            } else {
                break;
            }
        }
    }

    fn consume(&mut self, n: usize) {
        debug_assert!(self.raw_pos + n <= self.buffer.len());
        for i in 0..n {
            if self.buffer[self.raw_pos + i] == b'\n' {
                self.lineno += 1;
                self.colno = 0;
            } else {
                self.colno += 1;
            }
        }
        self.raw_pos += n;
        if self.raw_pos > 64 * 1024 {
            self.buffer.drain(0..self.raw_pos);
            self.raw_pos = 0;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.ensure_buffer(1);
        self.buffer.get(self.raw_pos).cloned()
    }

    fn peek_ahead(&mut self, n: usize) -> Option<u8> {
        self.ensure_buffer(n + 1);
        self.buffer.get(self.raw_pos + n).cloned()
    }

    fn get(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.consume(1);
        Some(b)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), GroupError> {
        loop {
            match self.peek() {
                Some(b) if b.is_ascii_whitespace() => self.consume(1),
                // A backslash outside quotes is dropped; before a newline it is
                // a line continuation.
                Some(b'\\') => self.consume(1),
                Some(b'/') if self.peek_ahead(1) == Some(b'/') => {
                    while let Some(b) = self.peek() {
                        if b == b'\n' {
                            break;
                        }
                        self.consume(1);
                    }
                }
                Some(b'/') if self.peek_ahead(1) == Some(b'*') => {
                    let start = self.pos();
                    self.consume(2);
                    loop {
                        match self.peek() {
                            None => {
                                return Err(GroupError::lexical(
                                    start,
                                    "unexpected end-of-file in comment",
                                ));
                            }
                            Some(b'*') if self.peek_ahead(1) == Some(b'/') => {
                                self.consume(2);
                                break;
                            }
                            Some(_) => self.consume(1),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn lex(&mut self) -> Result<Token, GroupError> {
        self.skip_whitespace_and_comments()?;
        let start = self.pos();
        let Some(b) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::End,
                text: String::new(),
                quoted: false,
                region: FileRegion::new(start, start),
            });
        };
        let kind = match b {
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semi,
            b',' => TokenKind::Comma,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Mult,
            b'/' => TokenKind::Div,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'"' => return self.lex_quoted(start),
            _ => return Ok(self.lex_symbol(start)),
        };
        self.consume(1);
        Ok(Token {
            kind,
            text: (b as char).to_string(),
            quoted: false,
            region: FileRegion::new(start, self.pos()),
        })
    }

    fn lex_symbol(&mut self, start: Loc) -> Token {
        let mut text = Vec::new();
        while let Some(b) = self.peek() {
            let exponent_sign = (b == b'-' || b == b'+') && ends_in_exponent(&text);
            if is_delimiter(b) && !exponent_sign {
                break;
            }
            text.push(b);
            self.consume(1);
        }
        Token {
            kind: TokenKind::Symbol,
            text: String::from_utf8_lossy(&text).into_owned(),
            quoted: false,
            region: FileRegion::new(start, self.pos()),
        }
    }

    fn lex_quoted(&mut self, start: Loc) -> Result<Token, GroupError> {
        self.consume(1);
        let mut text = Vec::new();
        loop {
            match self.get() {
                None => {
                    return Err(GroupError::lexical(
                        start,
                        "unexpected end-of-file in quoted string",
                    ));
                }
                Some(b'\n') => {
                    return Err(GroupError::lexical(
                        start,
                        "unexpected newline in quoted string",
                    ));
                }
                Some(b'"') => break,
                Some(b'\\') => match self.get() {
                    Some(b'\n') => text.push(b' '),
                    Some(b'\r') if self.peek() == Some(b'\n') => {
                        self.consume(1);
                        text.push(b' ');
                    }
                    Some(b) => text.push(b),
                    None => {
                        return Err(GroupError::lexical(
                            start,
                            "unexpected end-of-file in quoted string",
                        ));
                    }
                },
                Some(b) => text.push(b),
            }
        }
        Ok(Token {
            kind: TokenKind::Symbol,
            text: String::from_utf8_lossy(&text).into_owned(),
            quoted: true,
            region: FileRegion::new(start, self.pos()),
        })
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&mut self) -> Result<&Token, GroupError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.lex()?,
        };
        Ok(self.peeked.insert(token))
    }

    pub fn peek_kind(&mut self) -> Result<TokenKind, GroupError> {
        Ok(self.peek_token()?.kind)
    }

    /// Location of the next token.
    pub fn cur_loc(&mut self) -> Result<Loc, GroupError> {
        Ok(self.peek_token()?.loc())
    }

    pub fn read_token(&mut self) -> Result<Token, GroupError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.lex()?,
        };
        match token.kind {
            TokenKind::LBrace => {
                self.depth += 1;
                self.lcb_count += 1;
            }
            TokenKind::RBrace => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        Ok(token)
    }

    /// Consumes the next token if it is of the given kind.
    pub fn accept(&mut self, kind: TokenKind) -> Result<Option<Token>, GroupError> {
        if self.peek_kind()? == kind {
            Ok(Some(self.read_token()?))
        } else {
            Ok(None)
        }
    }

    pub fn read_and_verify(&mut self, kind: TokenKind) -> Result<Token, GroupError> {
        let token = self.read_token()?;
        if token.kind != kind {
            return Err(GroupError::syntax(
                token.loc(),
                format!("{} is expected, found {}", kind.describe(), token),
            ));
        }
        Ok(token)
    }

    /// Number of currently open curly braces.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Total number of `{` consumed so far.
    pub fn lcb_count(&self) -> usize {
        self.lcb_count
    }
}

// Leaf value readers. Each reads exactly the tokens of one simple-attribute
// value; `keyword` only feeds the error messages.
impl<I: Iterator<Item = u8>> Scanner<I> {
    fn read_symbol(&mut self, keyword: &str, expected: &str) -> Result<Token, GroupError> {
        let token = self.read_token()?;
        if token.kind != TokenKind::Symbol {
            return Err(GroupError::type_mismatch(
                token.loc(),
                format!("{}: {} value is expected, found {}", keyword, expected, token),
            ));
        }
        Ok(token)
    }

    pub fn read_int(&mut self, keyword: &str) -> Result<i64, GroupError> {
        let token = self.read_symbol(keyword, "integer")?;
        parse_int(&token.text).ok_or_else(|| {
            GroupError::type_mismatch(
                token.loc(),
                format!("{}: {}: Not an integer value", keyword, token.text),
            )
        })
    }

    pub fn read_float(&mut self, keyword: &str) -> Result<f64, GroupError> {
        let negate = self.accept(TokenKind::Minus)?.is_some();
        let token = self.read_symbol(keyword, "number")?;
        let value = token.text.trim().parse::<f64>().map_err(|_| {
            GroupError::type_mismatch(
                token.loc(),
                format!("{}: {}: Not a number value", keyword, token.text),
            )
        })?;
        Ok(if negate { -value } else { value })
    }

    pub fn read_string(&mut self, keyword: &str) -> Result<String, GroupError> {
        Ok(self.read_symbol(keyword, "string")?.text)
    }

    fn read_keyword<T>(
        &mut self,
        keyword: &str,
        parse: impl Fn(&str) -> Option<T>,
        allowed: &str,
    ) -> Result<T, GroupError> {
        let token = self.read_symbol(keyword, "string")?;
        parse(&token.text).ok_or_else(|| {
            GroupError::invalid_value(
                token.loc(),
                format!(
                    "{}: Illegal value for '{}'. Only {} are allowed",
                    token.text, keyword, allowed
                ),
            )
        })
    }

    pub fn read_bool(&mut self, keyword: &str) -> Result<bool, GroupError> {
        self.read_keyword(
            keyword,
            |s| match s {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            "'true' or 'false'",
        )
    }

    pub fn read_technology(&mut self, keyword: &str) -> Result<Technology, GroupError> {
        self.read_keyword(keyword, Technology::from_keyword, "'cmos' or 'fpga'")
    }

    pub fn read_delay_model(&mut self, keyword: &str) -> Result<DelayModel, GroupError> {
        self.read_keyword(
            keyword,
            DelayModel::from_keyword,
            "'generic_cmos', 'table_lookup', 'piecewise_cmos', 'cmos2', 'dcm' or 'polynomial'",
        )
    }

    pub fn read_direction(&mut self, keyword: &str) -> Result<Direction, GroupError> {
        self.read_keyword(
            keyword,
            Direction::from_keyword,
            "'input', 'output', 'inout' or 'internal'",
        )
    }

    pub fn read_timing_sense(&mut self, keyword: &str) -> Result<TimingSense, GroupError> {
        self.read_keyword(
            keyword,
            TimingSense::from_keyword,
            "'positive_unate', 'negative_unate' or 'non_unate'",
        )
    }

    pub fn read_timing_type(&mut self, keyword: &str) -> Result<TimingType, GroupError> {
        self.read_keyword(keyword, TimingType::from_keyword, "timing type names")
    }

    pub fn read_var_type(&mut self, keyword: &str) -> Result<VarType, GroupError> {
        self.read_keyword(keyword, VarType::from_keyword, "table variable names")
    }

    /// Reads a symbol holding comma or space separated numbers.
    pub fn read_float_vector(&mut self, keyword: &str) -> Result<Vec<f64>, GroupError> {
        let token = self.read_symbol(keyword, "number list")?;
        split_list(&token.text)
            .map(|piece| {
                piece.parse::<f64>().map_err(|_| {
                    GroupError::type_mismatch(
                        token.loc(),
                        format!("{}: {}: Not a number value", keyword, piece),
                    )
                })
            })
            .collect()
    }

    pub fn read_int_vector(&mut self, keyword: &str) -> Result<Vec<i64>, GroupError> {
        let token = self.read_symbol(keyword, "integer list")?;
        split_list(&token.text)
            .map(|piece| {
                parse_int(piece).ok_or_else(|| {
                    GroupError::type_mismatch(
                        token.loc(),
                        format!("{}: {}: Not an integer value", keyword, piece),
                    )
                })
            })
            .collect()
    }

    /// Reads a quoted Boolean function such as `"A & !B"`.
    pub fn read_function(&mut self, keyword: &str) -> Result<AstExpr, GroupError> {
        let token = self.read_symbol(keyword, "function")?;
        expr::parse_function(&token.text).map_err(|e| {
            GroupError::syntax(
                token.loc(),
                format!("{}: {}: {}", keyword, token.text, e),
            )
        })
    }

    /// Reads an arithmetic expression over numbers and the supply names
    /// directly from the token stream, stopping before the first token that
    /// cannot continue it.
    pub fn read_expr(&mut self, keyword: &str) -> Result<AstExpr, GroupError> {
        let mut lhs = self.read_product(keyword)?;
        loop {
            let op = match self.peek_kind()? {
                TokenKind::Plus => BinOp::Plus,
                TokenKind::Minus => BinOp::Minus,
                _ => return Ok(lhs),
            };
            self.read_token()?;
            let rhs = self.read_product(keyword)?;
            lhs = AstExpr::binary(op, lhs, rhs);
        }
    }

    fn read_product(&mut self, keyword: &str) -> Result<AstExpr, GroupError> {
        let mut lhs = self.read_primary(keyword)?;
        loop {
            let op = match self.peek_kind()? {
                TokenKind::Mult => BinOp::Mult,
                TokenKind::Div => BinOp::Div,
                _ => return Ok(lhs),
            };
            self.read_token()?;
            let rhs = self.read_primary(keyword)?;
            lhs = AstExpr::binary(op, lhs, rhs);
        }
    }

    fn read_primary(&mut self, keyword: &str) -> Result<AstExpr, GroupError> {
        let token = self.read_token()?;
        match token.kind {
            TokenKind::LParen => {
                let inner = self.read_expr(keyword)?;
                self.read_and_verify(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Minus => {
                let operand = self.read_primary(keyword)?;
                Ok(AstExpr::binary(BinOp::Minus, AstExpr::Float(0.0), operand))
            }
            TokenKind::Symbol => match token.text.as_str() {
                "VDD" => Ok(AstExpr::Supply(Supply::Vdd)),
                "VSS" => Ok(AstExpr::Supply(Supply::Vss)),
                "VCC" => Ok(AstExpr::Supply(Supply::Vcc)),
                text => text.parse::<f64>().map(AstExpr::Float).map_err(|_| {
                    GroupError::syntax(
                        token.loc(),
                        format!(
                            "{}: {}: a number, 'VDD', 'VSS' or 'VCC' is expected",
                            keyword, text
                        ),
                    )
                }),
            },
            _ => Err(GroupError::syntax(
                token.loc(),
                format!("{}: expression is expected, found {}", keyword, token),
            )),
        }
    }
}

fn parse_int(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn kinds(text: &str) -> Vec<(TokenKind, String)> {
        let mut scanner = Scanner::new(text.bytes());
        let mut out = Vec::new();
        loop {
            let token = scanner.read_token().unwrap();
            if token.kind == TokenKind::End {
                return out;
            }
            out.push((token.kind, token.text));
        }
    }

    #[test]
    fn test_punctuation_and_symbols() {
        let got = kinds("cell (INV) { area : 1.5 ; }");
        let want: Vec<(TokenKind, String)> = vec![
            (TokenKind::Symbol, "cell".into()),
            (TokenKind::LParen, "(".into()),
            (TokenKind::Symbol, "INV".into()),
            (TokenKind::RParen, ")".into()),
            (TokenKind::LBrace, "{".into()),
            (TokenKind::Symbol, "area".into()),
            (TokenKind::Colon, ":".into()),
            (TokenKind::Symbol, "1.5".into()),
            (TokenKind::Semi, ";".into()),
            (TokenKind::RBrace, "}".into()),
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn test_comments_and_continuations() {
        let got = kinds("a /* x\n y */ b // rest of line\n c \\\n d / e");
        let want: Vec<(TokenKind, String)> = vec![
            (TokenKind::Symbol, "a".into()),
            (TokenKind::Symbol, "b".into()),
            (TokenKind::Symbol, "c".into()),
            (TokenKind::Symbol, "d".into()),
            (TokenKind::Div, "/".into()),
            (TokenKind::Symbol, "e".into()),
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn test_quoted_string() {
        let mut scanner = Scanner::new("\"A & \\\nB\" x".bytes());
        let token = scanner.read_token().unwrap();
        assert_eq!(token.kind, TokenKind::Symbol);
        assert!(token.quoted);
        assert_eq!(token.text, "A &  B");
        let token = scanner.read_token().unwrap();
        assert_eq!(token.loc(), Loc::new(2, 4));
    }

    #[test]
    fn test_newline_in_quoted_string_is_an_error() {
        let mut scanner = Scanner::new("\"abc\ndef\"".bytes());
        let err = scanner.read_token().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.loc, Loc::new(1, 1));
    }

    #[test]
    fn test_unterminated_comment() {
        let mut scanner = Scanner::new("a /* never closed".bytes());
        scanner.read_token().unwrap();
        let err = scanner.read_token().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.loc, Loc::new(1, 3));
    }

    #[test]
    fn test_exponent_sign_stays_in_symbol() {
        let got = kinds("1.5e-3 x-y");
        let want: Vec<(TokenKind, String)> = vec![
            (TokenKind::Symbol, "1.5e-3".into()),
            (TokenKind::Symbol, "x".into()),
            (TokenKind::Minus, "-".into()),
            (TokenKind::Symbol, "y".into()),
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn test_depth_tracking() {
        let mut scanner = Scanner::new("{ { } } }".bytes());
        let mut depths = Vec::new();
        for _ in 0..5 {
            scanner.read_token().unwrap();
            depths.push(scanner.depth());
        }
        assert_eq!(depths, vec![1, 2, 1, 0, 0]);
        assert_eq!(scanner.lcb_count(), 2);
    }

    #[test]
    fn test_read_leaf_values() {
        let mut scanner = Scanner::new("- 2.5 42 true input \"1, 2.5 3\" fpga".bytes());
        assert_eq!(scanner.read_float("area").unwrap(), -2.5);
        assert_eq!(scanner.read_int("bit_width").unwrap(), 42);
        assert!(scanner.read_bool("dont_use").unwrap());
        assert_eq!(scanner.read_direction("direction").unwrap(), Direction::Input);
        assert_eq!(
            scanner.read_float_vector("index_1").unwrap(),
            vec![1.0, 2.5, 3.0]
        );
        let err = scanner.read_delay_model("delay_model").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidValue);
        assert!(err.message.contains("'delay_model'"), "{}", err.message);
    }

    #[test]
    fn test_read_int_rejects_non_digits() {
        let mut scanner = Scanner::new("12a".bytes());
        let err = scanner.read_int("bit_width").unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert!(err.message.starts_with("bit_width:"));
    }

    #[test]
    fn test_read_float_wrong_token_kind() {
        let mut scanner = Scanner::new("( 1.0 )".bytes());
        let err = scanner.read_float("capacitance").unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.loc, Loc::new(1, 1));
        assert!(err.message.contains("capacitance"));
    }

    #[test]
    fn test_read_expr() {
        let mut scanner = Scanner::new("0.5 * VDD + 0.1 ;".bytes());
        let e = scanner.read_expr("vil").unwrap();
        assert_eq!(e.to_string(), "((0.5 * VDD) + 0.1)");
        assert_eq!(scanner.peek_kind().unwrap(), TokenKind::Semi);
    }
}
