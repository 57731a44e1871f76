// SPDX-License-Identifier: Apache-2.0

use crate::ast::ValueRef;
use crate::attr_type::AttrType;
use crate::cell_library::{CellLibrary, LutId, TemplateId};
use crate::error::{ErrorKind, GroupError};
use crate::types::VarType;

use super::require_header_name;

const VARIABLES: [AttrType; 3] = [AttrType::Variable1, AttrType::Variable2, AttrType::Variable3];
const INDICES: [AttrType; 3] = [AttrType::Index1, AttrType::Index2, AttrType::Index3];

/// Name of the built-in zero-dimensional template.
pub const SCALAR_TEMPLATE: &str = "scalar";

/// One axis of a template: its variable and, optionally, default
/// breakpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplAxis {
    pub var: VarType,
    pub index: Option<Vec<f64>>,
}

/// A `lu_table_template` group.
#[derive(Debug, Clone, PartialEq)]
pub struct LuTemplInfo {
    pub name: String,
    pub var1: TemplAxis,
    pub var2: Option<TemplAxis>,
    pub var3: Option<TemplAxis>,
}

impl LuTemplInfo {
    pub fn set(value: ValueRef<'_>, lib: &CellLibrary) -> Result<Self, GroupError> {
        let name = require_header_name(value, AttrType::LuTableTemplate)?;
        if lib.template_by_name(name).is_some() {
            return Err(GroupError::new(
                ErrorKind::AttributeCardinalityViolation,
                value.loc(),
                format!("lu_table_template '{}' is defined more than once", name),
            ));
        }
        let dict = value.gen_group_elem_dict();
        let mut axes = Vec::new();
        for (d, (var_attr, index_attr)) in VARIABLES.into_iter().zip(INDICES).enumerate() {
            match dict.get_var_type(var_attr)? {
                Some(var) => {
                    if axes.len() < d {
                        return Err(GroupError::missing(
                            dict.loc(),
                            format!("'{}' attribute is missing", VARIABLES[axes.len()]),
                        ));
                    }
                    let index = dict.get_float_vector(index_attr)?.map(<[f64]>::to_vec);
                    axes.push(TemplAxis { var, index });
                }
                None if dict.contains(index_attr) => log::warn!(
                    "{}: lu_table_template '{}': {} without {} is ignored",
                    dict.attr_loc(index_attr).unwrap_or(dict.loc()),
                    name,
                    index_attr,
                    var_attr
                ),
                None => {}
            }
        }
        let mut axes = axes.into_iter();
        let var1 = axes.next().ok_or_else(|| {
            GroupError::missing(
                dict.loc(),
                format!("'{}' attribute is missing", AttrType::Variable1),
            )
        })?;
        Ok(Self {
            name: name.to_string(),
            var1,
            var2: axes.next(),
            var3: axes.next(),
        })
    }

    pub fn dimension(&self) -> usize {
        1 + usize::from(self.var2.is_some()) + usize::from(self.var3.is_some())
    }

    pub fn add(self, lib: &mut CellLibrary) -> TemplateId {
        let LuTemplInfo {
            name,
            var1,
            var2,
            var3,
        } = self;
        match (var2, var3) {
            (Some(var2), Some(var3)) => lib.add_lut_template3(
                name, var1.var, var1.index, var2.var, var2.index, var3.var, var3.index,
            ),
            (Some(var2), None) => {
                lib.add_lut_template2(name, var1.var, var1.index, var2.var, var2.index)
            }
            _ => lib.add_lut_template1(name, var1.var, var1.index),
        }
    }
}

/// A table group such as `cell_rise (tmpl) { index_1 (...) ; values (...) ; }`
/// with its axes resolved against the named template.
#[derive(Debug, Clone, PartialEq)]
pub struct TableInfo {
    pub template: Option<TemplateId>,
    pub vars: Vec<VarType>,
    pub indices: Vec<Vec<f64>>,
    pub values: Vec<f64>,
}

impl TableInfo {
    pub fn set(value: ValueRef<'_>, attr: AttrType, lib: &CellLibrary) -> Result<Self, GroupError> {
        let name = require_header_name(value, attr)?;
        let dict = value.gen_group_elem_dict();
        let values_loc = dict.attr_loc(AttrType::Values).unwrap_or(dict.loc());
        let rows = dict.require(AttrType::Values, dict.get_complex(AttrType::Values))?;
        let values: Vec<f64> = rows
            .complex_elems()
            .iter()
            .filter_map(|row| row.float_vector_value())
            .flatten()
            .copied()
            .collect();

        if name == SCALAR_TEMPLATE {
            if values.len() != 1 {
                return Err(GroupError::invalid_value(
                    values_loc,
                    format!("{}: scalar table has {} values, expected 1", attr, values.len()),
                ));
            }
            return Ok(Self {
                template: None,
                vars: Vec::new(),
                indices: Vec::new(),
                values,
            });
        }

        let template = lib.template_by_name(name).ok_or_else(|| {
            let loc = value.group_header_value().map_or(value.loc(), |h| h.loc());
            GroupError::new(
                ErrorKind::UnknownTemplateReference,
                loc,
                format!("{}: No such lu_table template", name),
            )
        })?;
        let templ = lib.template(template);
        let mut indices = Vec::with_capacity(templ.dimension());
        for (d, default) in templ.indices.iter().enumerate() {
            let index = match dict.get_float_vector(INDICES[d])? {
                Some(index) => index.to_vec(),
                None => default.clone().ok_or_else(|| {
                    GroupError::missing(
                        dict.loc(),
                        format!("'{}' attribute is missing", INDICES[d]),
                    )
                })?,
            };
            indices.push(index);
        }
        let expected: usize = indices.iter().map(Vec::len).product();
        if values.len() != expected {
            return Err(GroupError::invalid_value(
                values_loc,
                format!(
                    "{}: values has {} elements, expected {}",
                    attr,
                    values.len(),
                    expected
                ),
            ));
        }
        Ok(Self {
            template: Some(template),
            vars: templ.vars.clone(),
            indices,
            values,
        })
    }

    pub fn add(self, lib: &mut CellLibrary) -> LutId {
        lib.new_lut(self.template, self.vars, self.indices, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::AstArena;
    use crate::loc::Loc;
    use crate::parser::Parser;
    use crate::read::ReadOptions;
    use pretty_assertions::assert_eq;

    /// Parses `body` as the only entries of a library and returns the arena
    /// with the library's value id.
    fn parse(body: &str) -> (AstArena, crate::ast::ValueId) {
        let text = format!("library (l) {{ delay_model : table_lookup ;\n{}\n}}", body);
        let parsed = Parser::new(text.bytes(), &ReadOptions::default())
            .parse()
            .unwrap();
        assert!(parsed.failures.is_empty(), "{:?}", parsed.failures);
        (parsed.arena, parsed.root)
    }

    fn templates(arena: &AstArena, root: crate::ast::ValueId) -> CellLibrary {
        let mut lib = CellLibrary::new("l");
        for t in arena.value(root).gen_group_elem_dict().get_all(AttrType::LuTableTemplate) {
            LuTemplInfo::set(t, &lib).unwrap().add(&mut lib);
        }
        lib
    }

    const TEMPLATES: &str = r#"
lu_table_template (delay_2d) {
  variable_1 : input_net_transition ;
  variable_2 : total_output_net_capacitance ;
  index_1 ("0.1, 0.5") ;
  index_2 ("0.01, 0.02, 0.04") ;
}
lu_table_template (open_1d) {
  variable_1 : input_net_transition ;
}
"#;

    #[test]
    fn test_template_dimensions() {
        let (arena, root) = parse(TEMPLATES);
        let lib = templates(&arena, root);
        let t = lib.template(lib.template_by_name("delay_2d").unwrap());
        assert_eq!(t.dimension(), 2);
        assert_eq!(
            t.vars,
            vec![VarType::InputNetTransition, VarType::TotalOutputNetCapacitance]
        );
        assert_eq!(t.indices[1], Some(vec![0.01, 0.02, 0.04]));
        let t = lib.template(lib.template_by_name("open_1d").unwrap());
        assert_eq!(t.indices, vec![None]);
    }

    #[test]
    fn test_template_variable_gap() {
        let (arena, root) = parse(
            "lu_table_template (t) { variable_2 : input_net_transition ; index_2 (\"1\") ; }",
        );
        let lib = CellLibrary::new("l");
        let value = arena.value(root).gen_group_elem_dict().get_all(AttrType::LuTableTemplate)[0];
        let err = LuTemplInfo::set(value, &lib).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingRequiredAttribute);
        assert_eq!(err.message, "'variable_1' attribute is missing");
    }

    fn table(body: &str) -> Result<TableInfo, GroupError> {
        let text = format!(
            "{}\ncell (C) {{ area : 1 ; pin (Y) {{ direction : output ; timing () {{ related_pin : \"A\" ; {} }} }} }}",
            TEMPLATES, body
        );
        let (arena, root) = parse(&text);
        let lib = templates(&arena, root);
        let lib_dict = arena.value(root).gen_group_elem_dict();
        let cell = lib_dict.get_group(AttrType::Cell).unwrap().unwrap();
        let pin = cell.gen_group_elem_dict().get_group(AttrType::Pin).unwrap().unwrap();
        let timing = pin.gen_group_elem_dict().get_group(AttrType::Timing).unwrap().unwrap();
        let cell_rise = timing
            .gen_group_elem_dict()
            .get_group(AttrType::CellRise)
            .unwrap()
            .unwrap();
        TableInfo::set(cell_rise, AttrType::CellRise, &lib)
    }

    #[test]
    fn test_table_uses_template_axes() {
        let t = table("cell_rise (delay_2d) { values (\"1, 2, 3\", \"4, 5, 6\") ; }").unwrap();
        assert_eq!(t.indices, vec![vec![0.1, 0.5], vec![0.01, 0.02, 0.04]]);
        assert_eq!(t.values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(t.template.is_some());
    }

    #[test]
    fn test_table_index_overrides_template() {
        let t = table(
            "cell_rise (delay_2d) { index_2 (\"0.1, 0.2\") ; values (\"1, 2\", \"3, 4\") ; }",
        )
        .unwrap();
        assert_eq!(t.indices[1], vec![0.1, 0.2]);
    }

    #[test]
    fn test_table_value_count_mismatch() {
        let err = table("cell_rise (delay_2d) { values (\"1, 2\", \"3, 4\") ; }").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidValue);
        assert_eq!(err.message, "cell_rise: values has 4 elements, expected 6");
    }

    #[test]
    fn test_table_open_axis_must_be_given() {
        let err = table("cell_rise (open_1d) { values (\"1, 2\") ; }").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingRequiredAttribute);
        let t = table("cell_rise (open_1d) { index_1 (\"1, 2\") ; values (\"1, 2\") ; }").unwrap();
        assert_eq!(t.indices, vec![vec![1.0, 2.0]]);
    }

    #[test]
    fn test_scalar_table() {
        let t = table("cell_rise (scalar) { values (\"0.25\") ; }").unwrap();
        assert_eq!(t.template, None);
        assert!(t.indices.is_empty());
        assert_eq!(t.values, vec![0.25]);
        assert!(table("cell_rise (scalar) { values (\"0.25, 1\") ; }").is_err());
    }

    #[test]
    fn test_unknown_template() {
        let err = table("cell_rise (nope) { values (\"1\") ; }").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownTemplateReference);
        assert_eq!(err.message, "nope: No such lu_table template");
        assert_eq!(err.loc.line, 13);
        assert_ne!(err.loc, Loc::default());
    }
}
