// SPDX-License-Identifier: Apache-2.0

//! Binder layer: turns the generic AST into a [`CellLibrary`].
//!
//! Each `*Info` type is built from one group's [`ElemDict`] by a `set`
//! function that performs every check and reference resolution the group
//! needs, and is then committed with an `add` function that only calls the
//! construction API. A group that fails in `set` therefore leaves nothing
//! behind in the library.
//!
//! Templates are collected from the whole library before any cell is bound,
//! so a table may name a template declared after it.

mod cell;
mod pin;
mod table;
mod timing;

pub use cell::{CellInfo, FfInfo, FsmInfo, LatchInfo};
pub use pin::PinInfo;
pub use table::{LuTemplInfo, TableInfo};
pub use timing::{TimingInfo, arc_senses};

use ahash::AHashMap;

use crate::ast::{ElemDict, ValueRef};
use crate::attr_type::AttrType;
use crate::cell_library::CellLibrary;
use crate::error::{EntryFailure, ErrorKind, GroupError, LibraryError};
use crate::expr::AstExpr;
use crate::logic::LogicExpr;
use crate::loc::Loc;
use crate::parser::ParsedLibrary;

/// Library-level string attributes copied into [`CellLibrary::attrs`].
const LIBRARY_STRING_ATTRS: [AttrType; 9] = [
    AttrType::BusNamingStyle,
    AttrType::Comment,
    AttrType::Date,
    AttrType::Revision,
    AttrType::TimeUnit,
    AttrType::VoltageUnit,
    AttrType::CurrentUnit,
    AttrType::PullingResistanceUnit,
    AttrType::LeakagePowerUnit,
];

/// First string of a group's header, which names the group.
pub(crate) fn header_name<'a>(value: ValueRef<'a>) -> Option<&'a str> {
    value
        .group_header_value()?
        .complex_elem_value(0)?
        .string_value()
}

/// Like [`header_name`] but an error when the header is empty.
pub(crate) fn require_header_name<'a>(
    value: ValueRef<'a>,
    attr: AttrType,
) -> Result<&'a str, GroupError> {
    header_name(value).ok_or_else(|| {
        GroupError::missing(value.loc(), format!("'{}' group has no name", attr))
    })
}

/// A Boolean function attribute together with where it was written.
#[derive(Clone, Copy, Debug)]
pub struct ExprAttr<'a> {
    pub attr: AttrType,
    pub expr: &'a AstExpr,
    pub loc: Loc,
}

impl<'a> ExprAttr<'a> {
    pub fn get(dict: &ElemDict<'a>, attr: AttrType) -> Result<Option<Self>, GroupError> {
        Ok(dict.get_expr(attr)?.map(|expr| ExprAttr {
            attr,
            expr,
            loc: dict.attr_loc(attr).unwrap_or(dict.loc()),
        }))
    }

    pub fn require(dict: &ElemDict<'a>, attr: AttrType) -> Result<Self, GroupError> {
        dict.require(attr, Self::get(dict, attr))
    }

    /// Maps pin names to positions; any name missing from `pin_map` makes
    /// this an `UnresolvedPinReference`.
    pub fn resolve(&self, pin_map: &AHashMap<String, usize>) -> Result<LogicExpr, GroupError> {
        let resolved = self.expr.to_expr(pin_map);
        if resolved.is_valid() {
            return Ok(resolved);
        }
        let missing: Vec<&str> = self
            .expr
            .names()
            .into_iter()
            .filter(|name| !pin_map.contains_key(*name))
            .collect();
        if missing.is_empty() {
            return Err(GroupError::invalid_value(
                self.loc,
                format!("{}: \"{}\" is not a Boolean function", self.attr, self.expr),
            ));
        }
        Err(GroupError::new(
            ErrorKind::UnresolvedPinReference,
            self.loc,
            format!("{}: No such pin-name '{}'", self.attr, missing.join("', '")),
        ))
    }
}

pub(crate) fn resolve_opt(
    attr: &Option<ExprAttr<'_>>,
    pin_map: &AHashMap<String, usize>,
) -> Result<Option<LogicExpr>, GroupError> {
    attr.as_ref().map(|a| a.resolve(pin_map)).transpose()
}

/// Binds a whole parsed library.
pub struct LibraryInfo;

impl LibraryInfo {
    /// Builds the library, or reports every entry that failed in either the
    /// parser or the binder.
    pub fn bind(parsed: ParsedLibrary) -> Result<CellLibrary, LibraryError> {
        let ParsedLibrary {
            arena,
            root,
            mut failures,
        } = parsed;
        let root = arena.value(root);
        let mut lib = Self::set(root, &mut failures)?;
        let children = root.group_children();

        for child in children.iter().filter(|c| c.attr == AttrType::LuTableTemplate) {
            let value = arena.value(child.value);
            match LuTemplInfo::set(value, &lib) {
                Ok(templ) => {
                    templ.add(&mut lib);
                }
                Err(error) => failures.push(Self::failure(child.attr, value, error)),
            }
        }

        for child in children.iter().filter(|c| c.attr == AttrType::Cell) {
            let value = arena.value(child.value);
            match CellInfo::set(value, &lib) {
                Ok(cell) => {
                    cell.add_cell(&mut lib);
                }
                Err(error) => failures.push(Self::failure(child.attr, value, error)),
            }
        }

        if !failures.is_empty() {
            failures.sort_by_key(|f| f.error.loc);
            for failure in &failures {
                log::debug!("{}", failure);
            }
            return Err(LibraryError::EntriesFailed(failures));
        }
        log::info!(
            "library '{}': {} cells, {} templates, {} tables, {} timings",
            lib.name,
            lib.cells().len(),
            lib.templates().len(),
            lib.lut_num(),
            lib.timing_num()
        );
        Ok(lib)
    }

    fn failure(attr: AttrType, value: ValueRef<'_>, error: GroupError) -> EntryFailure {
        let failure = EntryFailure {
            keyword: attr.to_string(),
            name: header_name(value).map(str::to_string),
            error,
        };
        log::warn!("{}", failure);
        failure
    }

    /// Library-level attributes. Only a missing library name stops the
    /// bind; any other bad attribute is recorded against the library entry
    /// and left at its default.
    fn set(
        root: ValueRef<'_>,
        failures: &mut Vec<EntryFailure>,
    ) -> Result<CellLibrary, GroupError> {
        let dict = root.gen_group_elem_dict();
        let mut lib = CellLibrary::new(require_header_name(root, AttrType::Library)?);
        let mut errors = Vec::new();
        if let Some(technology) = or_record(dict.get_complex(AttrType::Technology), &mut errors) {
            if let Some(t) = technology
                .complex_elem_value(0)
                .and_then(|v| v.technology_value())
            {
                lib.technology = t;
            }
        }
        if let Some(delay_model) = or_record(dict.get_delay_model(AttrType::DelayModel), &mut errors) {
            lib.delay_model = delay_model;
        }
        for attr in LIBRARY_STRING_ATTRS {
            if let Some(s) = or_record(dict.get_string(attr), &mut errors) {
                lib.attrs.insert(attr.to_string(), s.to_string());
            }
        }
        if let Some(unit) = or_record(dict.get_complex(AttrType::CapacitiveLoadUnit), &mut errors) {
            let scale = unit.complex_elem_value(0).and_then(|v| v.float_value());
            let name = unit.complex_elem_value(1).and_then(|v| v.string_value());
            if let (Some(scale), Some(name)) = (scale, name) {
                lib.capacitive_load_unit = Some((scale, name.to_string()));
            }
        }
        failures.extend(
            errors
                .into_iter()
                .map(|error| Self::failure(AttrType::Library, root, error)),
        );
        log::debug!(
            "library '{}': technology {}, delay model {}",
            lib.name,
            lib.technology,
            lib.delay_model
        );
        Ok(lib)
    }
}

/// Unwraps an optional attribute, moving a read error into `errors`.
fn or_record<T>(result: Result<Option<T>, GroupError>, errors: &mut Vec<GroupError>) -> Option<T> {
    result.unwrap_or_else(|error| {
        errors.push(error);
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::read::ReadOptions;
    use maplit::hashmap;

    fn bind(text: &str) -> Result<CellLibrary, LibraryError> {
        let _ = env_logger::builder().is_test(true).try_init();
        let parsed = Parser::new(text.bytes(), &ReadOptions::default()).parse()?;
        LibraryInfo::bind(parsed)
    }

    #[test]
    fn test_library_attributes() {
        let lib = bind(
            r#"library (demo) {
  technology (cmos) ;
  delay_model : table_lookup ;
  time_unit : "1ns" ;
  voltage_unit : "1V" ;
  nom_voltage : 1.2 ;
  capacitive_load_unit (1, pf) ;
}"#,
        )
        .unwrap();
        assert_eq!(lib.name, "demo");
        assert_eq!(lib.delay_model, crate::types::DelayModel::TableLookup);
        assert_eq!(lib.capacitive_load_unit, Some((1.0, "pf".to_string())));
        let attrs: std::collections::HashMap<&str, &str> = lib
            .attrs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(attrs, hashmap! { "time_unit" => "1ns", "voltage_unit" => "1V" });
    }

    #[test]
    fn test_duplicate_library_attribute_is_an_entry_failure() {
        let err = bind(
            "library (l) { time_unit : \"1ns\" ; time_unit : \"1ps\" ; delay_model : table_lookup ; }",
        )
        .unwrap_err();
        let failures = err.entry_failures();
        assert_eq!(failures.len(), 1, "{:?}", failures);
        assert_eq!(failures[0].keyword, "library");
        assert_eq!(failures[0].name.as_deref(), Some("l"));
        assert_eq!(failures[0].error.kind, ErrorKind::AttributeCardinalityViolation);
        assert_eq!(failures[0].error.loc, Loc::new(1, 35));
    }

    #[test]
    fn test_unnamed_library_is_fatal() {
        let err = bind("library () { time_unit : \"1ns\" ; }").unwrap_err();
        assert!(matches!(err, LibraryError::Syntax(_)), "{}", err);
        assert!(err.entry_failures().is_empty());
    }

    #[test]
    fn test_expr_attr_resolution() {
        let expr = crate::expr::parse_function("A & B").unwrap();
        let attr = ExprAttr {
            attr: AttrType::Function,
            expr: &expr,
            loc: Loc::new(3, 7),
        };
        let map: AHashMap<String, usize> =
            [("A".to_string(), 0), ("B".to_string(), 1)].into_iter().collect();
        assert_eq!(
            attr.resolve(&map).unwrap(),
            LogicExpr::posi_literal(0) & LogicExpr::posi_literal(1)
        );

        let only_a: AHashMap<String, usize> = [("A".to_string(), 0)].into_iter().collect();
        let err = attr.resolve(&only_a).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnresolvedPinReference);
        assert_eq!(err.loc, Loc::new(3, 7));
        assert_eq!(err.message, "function: No such pin-name 'B'");
    }
}
