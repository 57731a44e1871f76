// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent reader for the generic Liberty statement forms:
//!
//! ```text
//! keyword : value ;                      -- simple attribute
//! keyword ( v1, v2, ... ) ;              -- complex attribute
//! keyword ( v1, v2, ... ) { body }       -- group
//! ```
//!
//! Which form a keyword takes, and how its values are read, comes from the
//! dispatch table of the enclosing group ([`GroupKind::lookup`]). A keyword the
//! table does not know is skipped with a warning.
//!
//! Errors abort the innermost group. At library level each entry is read
//! independently: a failed entry is recorded as an [`EntryFailure`], the
//! scanner is resynchronized on brace depth, and reading continues with the
//! next entry.

use crate::ast::{AstArena, AstAttr, AstValueKind, ValueId};
use crate::attr_type::AttrType;
use crate::error::{EntryFailure, GroupError, LibraryError};
use crate::handler::{self, GroupKind, SimpleKind, Syntax};
use crate::header::{HeaderReader, HeaderShape, ValueKind};
use crate::loc::Loc;
use crate::read::ReadOptions;
use crate::scanner::{Scanner, TokenKind};

/// Result of the syntactic pass over one library.
#[derive(Debug)]
pub struct ParsedLibrary {
    pub arena: AstArena,
    /// The `library` group; failed entries are absent from its children.
    pub root: ValueId,
    pub failures: Vec<EntryFailure>,
}

pub struct Parser<I: Iterator<Item = u8>> {
    scanner: Scanner<I>,
    arena: AstArena,
    options: ReadOptions,
    lib_depth: usize,
    entry_name: Option<String>,
}

impl<I: Iterator<Item = u8>> Parser<I> {
    pub fn new(iter: I, options: &ReadOptions) -> Self {
        Self {
            scanner: Scanner::new(iter),
            arena: AstArena::new(),
            options: options.clone(),
            lib_depth: 0,
            entry_name: None,
        }
    }

    pub fn parse(mut self) -> Result<ParsedLibrary, LibraryError> {
        let token = self.scanner.read_token()?;
        if token.kind != TokenKind::Symbol || token.text != AttrType::Library.as_str() {
            return Err(LibraryError::MissingLibrary {
                loc: token.loc(),
                found: token.to_string(),
            });
        }
        let lib_loc = token.loc();
        let header = self.read_header(AttrType::Library, GroupKind::Library.header())?;
        self.scanner.read_and_verify(TokenKind::LBrace)?;
        self.lib_depth = self.scanner.depth();
        log::info!("reading library body at {}", lib_loc);

        let mut children = Vec::new();
        let mut failures = Vec::new();
        loop {
            match self.scanner.peek_kind()? {
                TokenKind::RBrace => {
                    self.scanner.read_token()?;
                    break;
                }
                TokenKind::End => {
                    let loc = self.scanner.cur_loc()?;
                    return Err(LibraryError::Syntax(GroupError::syntax(
                        loc,
                        "unexpected end-of-file, '}' is expected",
                    )));
                }
                _ => {}
            }
            let keyword = self.scanner.peek_token()?.text.clone();
            let lcb_before = self.scanner.lcb_count();
            self.entry_name = None;
            match self.read_statement(GroupKind::Library) {
                Ok(Some(attr)) => children.push(attr),
                Ok(None) => {}
                Err(error) => {
                    let failure = EntryFailure {
                        keyword,
                        name: self.entry_name.take(),
                        error,
                    };
                    log::warn!("{}", failure);
                    failures.push(failure);
                    self.recover(lcb_before)?;
                }
            }
        }

        match self.scanner.peek_kind() {
            Ok(TokenKind::End) => {}
            _ => log::warn!(
                "{}: contents after library group are ignored",
                self.scanner.cur_loc().unwrap_or_default()
            ),
        }

        log::info!(
            "read {} library entries ({} failed), {} AST nodes",
            children.len() + failures.len(),
            failures.len(),
            self.arena.len()
        );
        let root = self.arena.alloc(AstValueKind::Group { header, children }, lib_loc);
        Ok(ParsedLibrary {
            arena: self.arena,
            root,
            failures,
        })
    }

    /// Brings the scanner back to library level after a failed entry.
    fn recover(&mut self, lcb_before: usize) -> Result<(), LibraryError> {
        if self.scanner.depth() > self.lib_depth {
            // Failed inside the entry's body: drop everything up to the brace
            // that closes it.
            while self.scanner.depth() > self.lib_depth {
                if self.skip_token()? == TokenKind::End {
                    break;
                }
            }
        } else if self.scanner.lcb_count() == lcb_before {
            // Failed before any body was opened: drop the rest of the
            // statement.
            loop {
                match self.scanner.peek_kind() {
                    Ok(TokenKind::RBrace) | Ok(TokenKind::End) => break,
                    Ok(TokenKind::Semi) => {
                        self.skip_token()?;
                        break;
                    }
                    Ok(TokenKind::LBrace) => {
                        self.skip_token()?;
                        while self.scanner.depth() > self.lib_depth {
                            if self.skip_token()? == TokenKind::End {
                                break;
                            }
                        }
                        break;
                    }
                    _ => {
                        self.skip_token()?;
                    }
                }
            }
        }
        if self.scanner.peek_kind()? == TokenKind::End {
            let loc = self.scanner.cur_loc()?;
            return Err(LibraryError::Syntax(GroupError::syntax(
                loc,
                "unexpected end-of-file, '}' is expected",
            )));
        }
        Ok(())
    }

    /// Consumes one token while resynchronizing; lexical errors are dropped
    /// since the bytes they cover are being discarded anyway.
    fn skip_token(&mut self) -> Result<TokenKind, LibraryError> {
        loop {
            match self.scanner.read_token() {
                Ok(token) => return Ok(token.kind),
                Err(e) => log::debug!("ignored while skipping: {}", e),
            }
        }
    }

    /// Reads one statement inside a `group` body. `Ok(None)` means the
    /// keyword was not recognized and the statement was skipped.
    fn read_statement(&mut self, group: GroupKind) -> Result<Option<AstAttr>, GroupError> {
        let token = self.scanner.read_token()?;
        if token.kind != TokenKind::Symbol {
            return Err(GroupError::syntax(
                token.loc(),
                format!("attribute keyword is expected, found {}", token),
            ));
        }
        let kwd_loc = token.loc();
        let attr = AttrType::from_keyword(&token.text);
        match attr.and_then(|a| group.lookup(a).map(|syntax| (a, syntax))) {
            Some((attr, syntax)) => {
                log::trace!("{}: {} as {:?}", kwd_loc, attr, syntax);
                let value = self.read_value(attr, syntax, kwd_loc)?;
                Ok(Some(AstAttr {
                    attr,
                    kwd_loc,
                    value,
                }))
            }
            None => {
                if self.options.strict_unknown_keywords {
                    return Err(GroupError::syntax(
                        kwd_loc,
                        format!("'{}' is not a valid keyword here", token.text),
                    ));
                }
                log::warn!("{}: unknown keyword '{}' is skipped", kwd_loc, token.text);
                self.skip_statement()?;
                Ok(None)
            }
        }
    }

    /// Skips the remainder of an unrecognized statement: up to and including
    /// its `;`, or through the matching `}` of its body.
    fn skip_statement(&mut self) -> Result<(), GroupError> {
        if self.options.allow_no_semi && self.scanner.accept(TokenKind::Colon)?.is_some() {
            self.scanner.read_token()?;
            self.scanner.accept(TokenKind::Semi)?;
            return Ok(());
        }
        let base = self.scanner.depth();
        loop {
            let token = self.scanner.peek_token()?;
            let (kind, loc) = (token.kind, token.loc());
            match kind {
                TokenKind::End => {
                    return Err(GroupError::syntax(loc, "unexpected end-of-file"));
                }
                TokenKind::Semi => {
                    self.scanner.read_token()?;
                    return Ok(());
                }
                TokenKind::RBrace => return Ok(()),
                TokenKind::LBrace => {
                    self.scanner.read_token()?;
                    while self.scanner.depth() > base {
                        if self.scanner.read_token()?.kind == TokenKind::End {
                            return Err(GroupError::syntax(loc, "unexpected end-of-file in group"));
                        }
                    }
                    return Ok(());
                }
                _ => {
                    self.scanner.read_token()?;
                }
            }
        }
    }

    fn read_value(
        &mut self,
        attr: AttrType,
        syntax: Syntax,
        kwd_loc: Loc,
    ) -> Result<ValueId, GroupError> {
        match syntax {
            Syntax::Simple(kind) => {
                self.scanner.read_and_verify(TokenKind::Colon)?;
                let loc = self.scanner.cur_loc()?;
                let value = self.read_simple(attr, kind)?;
                let id = self.arena.alloc(value, loc);
                self.read_tail()?;
                Ok(id)
            }
            Syntax::Complex(shape) => {
                let id = self.read_header(attr, shape)?;
                self.read_tail()?;
                Ok(id)
            }
            Syntax::Group(kind) => self.read_group(attr, kind, kwd_loc),
        }
    }

    fn read_simple(&mut self, attr: AttrType, kind: SimpleKind) -> Result<AstValueKind, GroupError> {
        let keyword = attr.as_str();
        let s = &mut self.scanner;
        Ok(match kind {
            SimpleKind::Bool => AstValueKind::Bool(s.read_bool(keyword)?),
            SimpleKind::Int => AstValueKind::Int(s.read_int(keyword)?),
            SimpleKind::Float => AstValueKind::Float(s.read_float(keyword)?),
            SimpleKind::Str => AstValueKind::Str(s.read_string(keyword)?),
            SimpleKind::DelayModel => AstValueKind::DelayModel(s.read_delay_model(keyword)?),
            SimpleKind::Direction => AstValueKind::Direction(s.read_direction(keyword)?),
            SimpleKind::Expr => AstValueKind::Expr(s.read_expr(keyword)?),
            SimpleKind::Function => AstValueKind::Expr(s.read_function(keyword)?),
            SimpleKind::TimingSense => AstValueKind::TimingSense(s.read_timing_sense(keyword)?),
            SimpleKind::TimingType => AstValueKind::TimingType(s.read_timing_type(keyword)?),
            SimpleKind::VarType => AstValueKind::VarType(s.read_var_type(keyword)?),
        })
    }

    /// The `;` that ends a simple or complex attribute.
    fn read_tail(&mut self) -> Result<(), GroupError> {
        if self.scanner.accept(TokenKind::Semi)?.is_some() || self.options.allow_no_semi {
            return Ok(());
        }
        let token = self.scanner.peek_token()?;
        Err(GroupError::syntax(
            token.loc(),
            format!("';' is expected, found {}", token),
        ))
    }

    /// Reads `( v1, v2, ... )` as a complex value, validating it against
    /// `shape`.
    fn read_header(&mut self, attr: AttrType, shape: HeaderShape) -> Result<ValueId, GroupError> {
        let keyword = attr.as_str();
        let lp = self.scanner.read_and_verify(TokenKind::LParen)?;
        let mut reader = HeaderReader::begin_header(shape);
        let mut elems = Vec::new();
        let rp_loc = match self.scanner.accept(TokenKind::RParen)? {
            Some(rp) => rp.loc(),
            None => loop {
                let loc = self.scanner.cur_loc()?;
                let kind = reader.read_header_value(loc, elems.len())?;
                let s = &mut self.scanner;
                let value = match kind {
                    ValueKind::Str => AstValueKind::Str(s.read_string(keyword)?),
                    ValueKind::Int => AstValueKind::Int(s.read_int(keyword)?),
                    ValueKind::Float => AstValueKind::Float(s.read_float(keyword)?),
                    ValueKind::FloatVector => {
                        AstValueKind::FloatVector(s.read_float_vector(keyword)?)
                    }
                    ValueKind::IntVector => AstValueKind::IntVector(s.read_int_vector(keyword)?),
                    ValueKind::Technology => {
                        AstValueKind::Technology(s.read_technology(keyword)?)
                    }
                };
                elems.push(self.arena.alloc(value, loc));
                let sep = self.scanner.read_token()?;
                match sep.kind {
                    TokenKind::Comma => {}
                    TokenKind::RParen => break sep.loc(),
                    _ => {
                        return Err(GroupError::syntax(
                            sep.loc(),
                            format!("',' or ')' is expected, found {}", sep),
                        ));
                    }
                }
            },
        };
        reader.end_header(rp_loc)?;
        Ok(self.arena.alloc(AstValueKind::Complex(elems), lp.loc()))
    }

    fn read_group(
        &mut self,
        attr: AttrType,
        kind: GroupKind,
        kwd_loc: Loc,
    ) -> Result<ValueId, GroupError> {
        let header = self.read_header(attr, kind.header())?;
        if self.entry_name.is_none() && self.scanner.depth() == self.lib_depth {
            self.entry_name = self
                .arena
                .value(header)
                .complex_elem_value(0)
                .and_then(|v| v.string_value())
                .map(str::to_string);
        }
        self.scanner.read_and_verify(TokenKind::LBrace)?;
        let mut children = Vec::new();
        loop {
            match self.scanner.peek_kind()? {
                TokenKind::RBrace => {
                    self.scanner.read_token()?;
                    break;
                }
                TokenKind::End => {
                    let loc = self.scanner.cur_loc()?;
                    return Err(GroupError::syntax(
                        loc,
                        format!("unexpected end-of-file in '{}' group", attr),
                    ));
                }
                _ => {
                    if let Some(child) = self.read_statement(kind)? {
                        children.push(child);
                    }
                }
            }
        }
        let id = self
            .arena
            .alloc(AstValueKind::Group { header, children }, kwd_loc);
        handler::end_group(kind, &self.arena.value(id).gen_group_elem_dict())?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::header::Arity;
    use crate::types::{DelayModel, Direction, Technology, TimingSense, TimingType, VarType};
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Result<ParsedLibrary, LibraryError> {
        let _ = env_logger::builder().is_test(true).try_init();
        Parser::new(text.bytes(), &ReadOptions::default()).parse()
    }

    fn parse_with(text: &str, options: ReadOptions) -> Result<ParsedLibrary, LibraryError> {
        let _ = env_logger::builder().is_test(true).try_init();
        Parser::new(text.bytes(), &options).parse()
    }

    /// Keywords of the library's direct children, in order.
    fn entry_keywords(parsed: &ParsedLibrary) -> Vec<String> {
        parsed
            .arena
            .value(parsed.root)
            .group_children()
            .iter()
            .map(|a| a.attr.to_string())
            .collect()
    }

    const INV: &str = r#"
library (lib1) {
  delay_model : table_lookup ;
  capacitive_load_unit (1, ff) ;
  cell (INV) {
    area : 1.0 ;
    pin (A) { direction : input ; capacitance : 0.5 ; }
    pin (Y) { direction : output ; function : "A'" ; }
  }
}
"#;

    #[test]
    fn test_parse_small_library() {
        let parsed = parse(INV).unwrap();
        assert!(parsed.failures.is_empty());
        assert_eq!(
            entry_keywords(&parsed),
            vec!["delay_model", "capacitive_load_unit", "cell"]
        );
        let root = parsed.arena.value(parsed.root);
        let name = root.group_header_value().unwrap().complex_elem_value(0).unwrap();
        assert_eq!(name.string_value(), Some("lib1"));

        let lib = root.gen_group_elem_dict();
        let unit = lib.get_complex(AttrType::CapacitiveLoadUnit).unwrap().unwrap();
        assert_eq!(unit.complex_elem_value(0).unwrap().float_value(), Some(1.0));
        assert_eq!(unit.complex_elem_value(1).unwrap().string_value(), Some("ff"));

        let cell = lib.get_group(AttrType::Cell).unwrap().unwrap();
        let cell_dict = cell.gen_group_elem_dict();
        assert_eq!(cell_dict.get_float(AttrType::Area).unwrap(), Some(1.0));
        let pins = cell_dict.get_all(AttrType::Pin);
        assert_eq!(pins.len(), 2);
        let y = pins[1].gen_group_elem_dict();
        assert_eq!(y.get_direction(AttrType::Direction).unwrap(), Some(Direction::Output));
        assert_eq!(y.get_expr(AttrType::Function).unwrap().unwrap().to_string(), "!A");
    }

    #[test]
    fn test_first_keyword_must_be_library() {
        let err = parse("cell (X) { }").unwrap_err();
        match err {
            LibraryError::MissingLibrary { loc, found } => {
                assert_eq!(loc, Loc::new(1, 1));
                assert_eq!(found, "'cell'");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_bad_library_header_is_fatal() {
        let err = parse("library (a, b) { }").unwrap_err();
        match err {
            LibraryError::Syntax(e) => {
                assert_eq!(e.kind, ErrorKind::AttributeCardinalityViolation);
                assert_eq!(e.message, "Too many values, expected 1");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unknown_keyword_is_skipped() {
        let with = r#"library (l) {
  vendor_thing : 3 ;
  vendor_group (x) { a : 1 ; b (1, 2) ; }
  time_unit : "1ns" ;
}"#;
        let without = r#"library (l) {
  time_unit : "1ns" ;
}"#;
        let a = parse(with).unwrap();
        let b = parse(without).unwrap();
        assert_eq!(entry_keywords(&a), entry_keywords(&b));
        let dict = a.arena.value(a.root).gen_group_elem_dict();
        assert_eq!(dict.get_string(AttrType::TimeUnit).unwrap(), Some("1ns"));
    }

    #[test]
    fn test_strict_unknown_keyword_fails_entry() {
        let text = "library (l) { vendor_thing : 3 ; time_unit : \"1ns\" ; }";
        let parsed = parse_with(
            text,
            ReadOptions {
                strict_unknown_keywords: true,
                ..ReadOptions::default()
            },
        )
        .unwrap();
        assert_eq!(parsed.failures.len(), 1);
        assert_eq!(parsed.failures[0].keyword, "vendor_thing");
        assert_eq!(parsed.failures[0].error.kind, ErrorKind::Syntax);
        assert_eq!(entry_keywords(&parsed), vec!["time_unit"]);
    }

    #[test]
    fn test_missing_semicolon() {
        let text = "library (l) { time_unit : \"1ns\" comment : \"x\" ; }";
        let parsed = parse(text).unwrap();
        assert_eq!(parsed.failures.len(), 1);
        assert_eq!(parsed.failures[0].error.message, "';' is expected, found 'comment'");

        let parsed = parse_with(
            text,
            ReadOptions {
                allow_no_semi: true,
                ..ReadOptions::default()
            },
        )
        .unwrap();
        assert!(parsed.failures.is_empty());
        assert_eq!(entry_keywords(&parsed), vec!["time_unit", "comment"]);
    }

    #[test]
    fn test_failed_entries_do_not_stop_reading() {
        let text = r#"library (l) {
  cell (A) { area : x ; }
  cell (B) { area : 2 ; }
  cell (C { area : 3 ; }
  cell (D) { area : 4 ; pin (P) { direction : sideways ; } }
  cell (E) { area : 5 ; }
}"#;
        let parsed = parse(text).unwrap();
        let failed: Vec<Option<String>> =
            parsed.failures.iter().map(|f| f.name.clone()).collect();
        assert_eq!(
            failed,
            vec![Some("A".to_string()), None, Some("D".to_string())]
        );
        assert_eq!(parsed.failures[0].error.kind, ErrorKind::TypeMismatch);
        assert_eq!(parsed.failures[0].error.loc, Loc::new(2, 21));
        assert_eq!(parsed.failures[2].error.kind, ErrorKind::InvalidValue);
        let names: Vec<String> = parsed
            .arena
            .value(parsed.root)
            .gen_group_elem_dict()
            .get_all(AttrType::Cell)
            .iter()
            .map(|c| {
                c.group_header_value()
                    .unwrap()
                    .complex_elem_value(0)
                    .unwrap()
                    .string_value()
                    .unwrap()
                    .to_string()
            })
            .collect();
        assert_eq!(names, vec!["B", "E"]);
    }

    #[test]
    fn test_wrong_form_for_keyword() {
        let text = "library (l) { cell : INV ; time_unit : \"1ns\" ; }";
        let parsed = parse(text).unwrap();
        assert_eq!(parsed.failures.len(), 1);
        assert_eq!(parsed.failures[0].error.message, "'(' is expected, found ':'");
        assert_eq!(entry_keywords(&parsed), vec!["time_unit"]);
    }

    #[test]
    fn test_mutually_exclusive_groups_in_cell() {
        let text = r#"library (l) {
  cell (X) {
    area : 1 ;
    ff (IQ, IQN) { clocked_on : "CK" ; next_state : "D" ; }
    latch (IQ, IQN) { enable : "G" ; data_in : "D" ; }
  }
}"#;
        let parsed = parse(text).unwrap();
        assert_eq!(parsed.failures.len(), 1);
        assert_eq!(
            parsed.failures[0].error.kind,
            ErrorKind::MutuallyExclusiveAttributesPresent
        );
        assert_eq!(parsed.failures[0].error.loc, Loc::new(5, 5));
    }

    #[test]
    fn test_unterminated_library_is_fatal() {
        let err = parse("library (l) { time_unit : \"1ns\" ;").unwrap_err();
        assert!(matches!(err, LibraryError::Syntax(_)), "{}", err);
    }

    #[test]
    fn test_trailing_content_is_ignored() {
        let parsed = parse("library (l) { } library (m) { }").unwrap();
        let root = parsed.arena.value(parsed.root);
        let name = root.group_header_value().unwrap().complex_elem_value(0).unwrap();
        assert_eq!(name.string_value(), Some("l"));
    }

    #[test]
    fn test_template_headers_and_tables() {
        let text = r#"library (l) {
  lu_table_template (t2) {
    variable_1 : input_net_transition ;
    variable_2 : total_output_net_capacitance ;
    index_1 ("0.1, 0.2") ;
    index_2 ("1, 2, 4") ;
  }
  wire_load (w) { fanout_length (1, 2.5) ; fanout_length (2, 3.5, 0.1, 0.2, 0.3) ; }
}"#;
        let parsed = parse(text).unwrap();
        assert!(parsed.failures.is_empty(), "{:?}", parsed.failures);
        let lib = parsed.arena.value(parsed.root).gen_group_elem_dict();
        let templ = lib
            .get_group(AttrType::LuTableTemplate)
            .unwrap()
            .unwrap()
            .gen_group_elem_dict();
        assert_eq!(
            templ.get_float_vector(AttrType::Index2).unwrap(),
            Some(&[1.0, 2.0, 4.0][..])
        );
        let wire_load = lib.get_group(AttrType::WireLoad).unwrap().unwrap();
        assert_eq!(
            wire_load
                .gen_group_elem_dict()
                .get_all(AttrType::FanoutLength)
                .iter()
                .map(|v| v.complex_elem_size())
                .collect::<Vec<_>>(),
            vec![2, 5]
        );
    }

    fn sample_value(kind: ValueKind) -> &'static str {
        match kind {
            ValueKind::Str => "s",
            ValueKind::Int => "1",
            ValueKind::Float => "0.5",
            ValueKind::FloatVector => "\"0.1, 0.2\"",
            ValueKind::IntVector => "\"1, 2\"",
            ValueKind::Technology => Technology::Cmos.as_str(),
        }
    }

    fn sample_header(shape: HeaderShape) -> String {
        let kinds = match shape.arity() {
            Arity::Fixed(kinds) => kinds.to_vec(),
            Arity::List(kind) => vec![kind, kind],
            Arity::Optional(kind) => vec![kind],
            Arity::FanoutLength => vec![ValueKind::Int, ValueKind::Float, ValueKind::Float],
        };
        let values: Vec<&str> = kinds.into_iter().map(sample_value).collect();
        format!("( {} )", values.join(", "))
    }

    fn sample_simple(kind: SimpleKind) -> &'static str {
        match kind {
            SimpleKind::Bool => "true",
            SimpleKind::Int => "3",
            SimpleKind::Float => "-0.25",
            SimpleKind::Str => "s",
            SimpleKind::DelayModel => DelayModel::TableLookup.as_str(),
            SimpleKind::Direction => Direction::Output.as_str(),
            SimpleKind::Expr => "0.9 * VDD",
            SimpleKind::Function => "\"A & B\"",
            SimpleKind::TimingSense => TimingSense::NonUnate.as_str(),
            SimpleKind::TimingType => TimingType::RisingEdge.as_str(),
            SimpleKind::VarType => VarType::InputNetTransition.as_str(),
        }
    }

    fn sample_statement(attr: AttrType, syntax: Syntax) -> String {
        match syntax {
            Syntax::Simple(kind) => format!("{} : {} ;", attr, sample_simple(kind)),
            Syntax::Complex(shape) => format!("{} {} ;", attr, sample_header(shape)),
            Syntax::Group(kind) => format!("{} {} {{ }}", attr, sample_header(kind.header())),
        }
    }

    /// Reads one statement of `text` inside a `group` body and returns the
    /// result along with the text of the token that follows it.
    fn read_one(group: GroupKind, text: &str) -> (Result<Option<AstAttr>, GroupError>, String) {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut parser = Parser::new(text.bytes(), &ReadOptions::default());
        let result = parser.read_statement(group);
        let next = parser
            .scanner
            .peek_token()
            .map(|t| t.text.clone())
            .unwrap_or_default();
        (result, next)
    }

    #[test]
    fn test_every_binding_reads_its_own_syntax() {
        let mut bindings = 0;
        for group in GroupKind::ALL {
            for (attr, syntax) in group.attrs() {
                let text = format!("{} next_kw", sample_statement(*attr, *syntax));
                let (result, next) = read_one(*group, &text);
                match result {
                    Ok(Some(read)) => assert_eq!(read.attr, *attr, "{:?}: {}", group, text),
                    other => panic!("{:?}: {}: {:?}", group, text, other),
                }
                assert_eq!(next, "next_kw", "{:?}: {}", group, text);
                bindings += 1;
            }
        }
        assert!(bindings > 1000, "only {} bindings", bindings);
    }

    #[test]
    fn test_every_binding_rejects_the_wrong_form() {
        for group in GroupKind::ALL {
            for (attr, syntax) in group.attrs() {
                let wrong = match syntax {
                    Syntax::Simple(_) => [format!("{} ( 1 ) ;", attr), format!("{} : ;", attr)],
                    Syntax::Complex(_) | Syntax::Group(_) => {
                        [format!("{} : 1 ;", attr), format!("{} ( ; ) ;", attr)]
                    }
                };
                for text in &wrong {
                    let (result, _) = read_one(*group, text);
                    assert!(result.is_err(), "{:?}: {}: {:?}", group, text, result);
                }
            }
        }
    }
}
