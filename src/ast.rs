// SPDX-License-Identifier: Apache-2.0

//! Generic attribute/value tree produced by the parser.
//!
//! All nodes of one parse live in a single [`AstArena`] and refer to each
//! other by [`ValueId`]. The arena is dropped as a whole once the library has
//! been bound. [`ValueRef`] pairs an id with its arena for reading, and
//! [`ElemDict`] groups a group's children by keyword for the binder.

use ahash::AHashMap;

use crate::attr_type::AttrType;
use crate::error::{ErrorKind, GroupError};
use crate::expr::AstExpr;
use crate::loc::Loc;
use crate::types::{DelayModel, Direction, Technology, TimingSense, TimingType, VarType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueId(u32);

impl ValueId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AstValueKind {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Technology(Technology),
    DelayModel(DelayModel),
    Direction(Direction),
    TimingSense(TimingSense),
    TimingType(TimingType),
    VarType(VarType),
    Expr(AstExpr),
    FloatVector(Vec<f64>),
    IntVector(Vec<i64>),
    /// A parenthesized tuple: a complex attribute's value or a group header.
    Complex(Vec<ValueId>),
    Group {
        header: ValueId,
        children: Vec<AstAttr>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AstValue {
    pub kind: AstValueKind,
    pub loc: Loc,
}

/// One keyword occurrence inside a group body.
#[derive(Clone, Debug, PartialEq)]
pub struct AstAttr {
    pub attr: AttrType,
    pub kwd_loc: Loc,
    pub value: ValueId,
}

#[derive(Debug, Default)]
pub struct AstArena {
    values: Vec<AstValue>,
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, kind: AstValueKind, loc: Loc) -> ValueId {
        let id = ValueId(self.values.len() as u32);
        self.values.push(AstValue { kind, loc });
        id
    }

    pub fn get(&self, id: ValueId) -> &AstValue {
        &self.values[id.index()]
    }

    pub fn value(&self, id: ValueId) -> ValueRef<'_> {
        ValueRef { arena: self, id }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read-only handle on one arena node.
#[derive(Clone, Copy, Debug)]
pub struct ValueRef<'a> {
    arena: &'a AstArena,
    id: ValueId,
}

impl<'a> ValueRef<'a> {
    pub fn id(&self) -> ValueId {
        self.id
    }

    pub fn loc(&self) -> Loc {
        self.arena.get(self.id).loc
    }

    pub fn kind(&self) -> &'a AstValueKind {
        &self.arena.get(self.id).kind
    }

    pub fn bool_value(&self) -> Option<bool> {
        match self.kind() {
            AstValueKind::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn int_value(&self) -> Option<i64> {
        match self.kind() {
            AstValueKind::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Also accepts an integer node, widening it.
    pub fn float_value(&self) -> Option<f64> {
        match self.kind() {
            AstValueKind::Float(v) => Some(*v),
            AstValueKind::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn string_value(&self) -> Option<&'a str> {
        match self.kind() {
            AstValueKind::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn technology_value(&self) -> Option<Technology> {
        match self.kind() {
            AstValueKind::Technology(v) => Some(*v),
            _ => None,
        }
    }

    pub fn delay_model_value(&self) -> Option<DelayModel> {
        match self.kind() {
            AstValueKind::DelayModel(v) => Some(*v),
            _ => None,
        }
    }

    pub fn direction_value(&self) -> Option<Direction> {
        match self.kind() {
            AstValueKind::Direction(v) => Some(*v),
            _ => None,
        }
    }

    pub fn timing_sense_value(&self) -> Option<TimingSense> {
        match self.kind() {
            AstValueKind::TimingSense(v) => Some(*v),
            _ => None,
        }
    }

    pub fn timing_type_value(&self) -> Option<TimingType> {
        match self.kind() {
            AstValueKind::TimingType(v) => Some(*v),
            _ => None,
        }
    }

    pub fn var_type_value(&self) -> Option<VarType> {
        match self.kind() {
            AstValueKind::VarType(v) => Some(*v),
            _ => None,
        }
    }

    pub fn expr_value(&self) -> Option<&'a AstExpr> {
        match self.kind() {
            AstValueKind::Expr(e) => Some(e),
            _ => None,
        }
    }

    pub fn float_vector_value(&self) -> Option<&'a [f64]> {
        match self.kind() {
            AstValueKind::FloatVector(v) => Some(v),
            _ => None,
        }
    }

    pub fn int_vector_value(&self) -> Option<&'a [i64]> {
        match self.kind() {
            AstValueKind::IntVector(v) => Some(v),
            _ => None,
        }
    }

    /// Number of elements of a complex value; 0 for anything else.
    pub fn complex_elem_size(&self) -> usize {
        match self.kind() {
            AstValueKind::Complex(elems) => elems.len(),
            _ => 0,
        }
    }

    pub fn complex_elem_value(&self, pos: usize) -> Option<ValueRef<'a>> {
        match self.kind() {
            AstValueKind::Complex(elems) => elems.get(pos).map(|id| self.arena.value(*id)),
            _ => None,
        }
    }

    pub fn complex_elems(&self) -> Vec<ValueRef<'a>> {
        (0..self.complex_elem_size())
            .filter_map(|i| self.complex_elem_value(i))
            .collect()
    }

    pub fn group_header_value(&self) -> Option<ValueRef<'a>> {
        match self.kind() {
            AstValueKind::Group { header, .. } => Some(self.arena.value(*header)),
            _ => None,
        }
    }

    pub fn group_children(&self) -> &'a [AstAttr] {
        match self.kind() {
            AstValueKind::Group { children, .. } => children,
            _ => &[],
        }
    }

    /// Buckets the group's children by keyword, keeping source order within
    /// each bucket.
    pub fn gen_group_elem_dict(&self) -> ElemDict<'a> {
        let mut map: AHashMap<AttrType, Vec<&'a AstAttr>> = AHashMap::new();
        for child in self.group_children() {
            map.entry(child.attr).or_default().push(child);
        }
        ElemDict {
            arena: self.arena,
            map,
            loc: self.loc(),
        }
    }
}

/// Keyword to occurrences map for one group body.
#[derive(Debug)]
pub struct ElemDict<'a> {
    arena: &'a AstArena,
    map: AHashMap<AttrType, Vec<&'a AstAttr>>,
    loc: Loc,
}

impl<'a> ElemDict<'a> {
    /// Location of the group this dictionary was built from.
    pub fn loc(&self) -> Loc {
        self.loc
    }

    pub fn contains(&self, attr: AttrType) -> bool {
        self.map.contains_key(&attr)
    }

    pub fn count(&self, attr: AttrType) -> usize {
        self.map.get(&attr).map_or(0, Vec::len)
    }

    /// Location of the first occurrence of `attr`'s keyword.
    pub fn attr_loc(&self, attr: AttrType) -> Option<Loc> {
        self.map.get(&attr).and_then(|v| v.first()).map(|a| a.kwd_loc)
    }

    /// All occurrences of `attr`, in source order.
    pub fn get_all(&self, attr: AttrType) -> Vec<ValueRef<'a>> {
        self.map
            .get(&attr)
            .map(|v| v.iter().map(|a| self.arena.value(a.value)).collect())
            .unwrap_or_default()
    }

    /// The value of a single-valued attribute; an error if it occurs more
    /// than once.
    pub fn get_single(&self, attr: AttrType) -> Result<Option<ValueRef<'a>>, GroupError> {
        match self.map.get(&attr).map(Vec::as_slice) {
            None | Some([]) => Ok(None),
            Some([only]) => Ok(Some(self.arena.value(only.value))),
            Some([first, second, ..]) => Err(GroupError::new(
                ErrorKind::AttributeCardinalityViolation,
                second.kwd_loc,
                format!(
                    "{} appear more than once. Previously appears at {}",
                    attr, first.kwd_loc
                ),
            )),
        }
    }

    fn get_with<T>(
        &self,
        attr: AttrType,
        what: &str,
        f: impl FnOnce(ValueRef<'a>) -> Option<T>,
    ) -> Result<Option<T>, GroupError> {
        match self.get_single(attr)? {
            None => Ok(None),
            Some(v) => f(v).map(Some).ok_or_else(|| {
                GroupError::type_mismatch(
                    v.loc(),
                    format!("{}: {} value is expected", attr, what),
                )
            }),
        }
    }

    pub fn get_bool(&self, attr: AttrType) -> Result<Option<bool>, GroupError> {
        self.get_with(attr, "boolean", |v| v.bool_value())
    }

    pub fn get_int(&self, attr: AttrType) -> Result<Option<i64>, GroupError> {
        self.get_with(attr, "integer", |v| v.int_value())
    }

    pub fn get_float(&self, attr: AttrType) -> Result<Option<f64>, GroupError> {
        self.get_with(attr, "float", |v| v.float_value())
    }

    pub fn get_string(&self, attr: AttrType) -> Result<Option<&'a str>, GroupError> {
        self.get_with(attr, "string", |v| v.string_value())
    }

    pub fn get_technology(&self, attr: AttrType) -> Result<Option<Technology>, GroupError> {
        self.get_with(attr, "technology", |v| v.technology_value())
    }

    pub fn get_delay_model(&self, attr: AttrType) -> Result<Option<DelayModel>, GroupError> {
        self.get_with(attr, "delay_model", |v| v.delay_model_value())
    }

    pub fn get_direction(&self, attr: AttrType) -> Result<Option<Direction>, GroupError> {
        self.get_with(attr, "direction", |v| v.direction_value())
    }

    pub fn get_timing_sense(&self, attr: AttrType) -> Result<Option<TimingSense>, GroupError> {
        self.get_with(attr, "timing_sense", |v| v.timing_sense_value())
    }

    pub fn get_timing_type(&self, attr: AttrType) -> Result<Option<TimingType>, GroupError> {
        self.get_with(attr, "timing_type", |v| v.timing_type_value())
    }

    pub fn get_var_type(&self, attr: AttrType) -> Result<Option<VarType>, GroupError> {
        self.get_with(attr, "variable type", |v| v.var_type_value())
    }

    pub fn get_expr(&self, attr: AttrType) -> Result<Option<&'a AstExpr>, GroupError> {
        self.get_with(attr, "expression", |v| v.expr_value())
    }

    /// A complex attribute's tuple.
    pub fn get_complex(&self, attr: AttrType) -> Result<Option<ValueRef<'a>>, GroupError> {
        self.get_with(attr, "complex", |v| match v.kind() {
            AstValueKind::Complex(_) => Some(v),
            _ => None,
        })
    }

    /// A one-element complex attribute holding a float list, such as
    /// `index_1 ("0.1, 0.2")`.
    pub fn get_float_vector(&self, attr: AttrType) -> Result<Option<&'a [f64]>, GroupError> {
        self.get_with(attr, "float vector", |v| {
            v.complex_elem_value(0)?.float_vector_value()
        })
    }

    /// A single nested group.
    pub fn get_group(&self, attr: AttrType) -> Result<Option<ValueRef<'a>>, GroupError> {
        self.get_with(attr, "group", |v| match v.kind() {
            AstValueKind::Group { .. } => Some(v),
            _ => None,
        })
    }

    /// Like `get_*` followed by a presence check.
    pub fn require<T>(
        &self,
        attr: AttrType,
        got: Result<Option<T>, GroupError>,
    ) -> Result<T, GroupError> {
        got?.ok_or_else(|| {
            GroupError::missing(self.loc, format!("'{}' attribute is missing", attr))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float_attr(arena: &mut AstArena, attr: AttrType, v: f64, line: usize) -> AstAttr {
        let value = arena.alloc(AstValueKind::Float(v), Loc::new(line, 8));
        AstAttr {
            attr,
            kwd_loc: Loc::new(line, 1),
            value,
        }
    }

    fn group(arena: &mut AstArena, children: Vec<AstAttr>) -> ValueId {
        let name = arena.alloc(AstValueKind::Str("INV".to_string()), Loc::new(1, 7));
        let header = arena.alloc(AstValueKind::Complex(vec![name]), Loc::new(1, 6));
        arena.alloc(AstValueKind::Group { header, children }, Loc::new(1, 1))
    }

    #[test]
    fn test_header_and_elem_dict() {
        let mut arena = AstArena::new();
        let children = vec![
            float_attr(&mut arena, AttrType::Area, 2.0, 2),
            float_attr(&mut arena, AttrType::Capacitance, 0.5, 3),
        ];
        let id = group(&mut arena, children);
        let g = arena.value(id);
        let header = g.group_header_value().unwrap();
        assert_eq!(header.complex_elem_size(), 1);
        assert_eq!(header.complex_elem_value(0).unwrap().string_value(), Some("INV"));

        let dict = g.gen_group_elem_dict();
        assert_eq!(dict.get_float(AttrType::Area).unwrap(), Some(2.0));
        assert_eq!(dict.get_float(AttrType::DontUse).unwrap(), None);
        assert_eq!(dict.attr_loc(AttrType::Capacitance), Some(Loc::new(3, 1)));
        assert_eq!(dict.loc(), Loc::new(1, 1));
    }

    #[test]
    fn test_repeated_single_attribute() {
        let mut arena = AstArena::new();
        let children = vec![
            float_attr(&mut arena, AttrType::Area, 2.0, 2),
            float_attr(&mut arena, AttrType::Area, 3.0, 5),
        ];
        let id = group(&mut arena, children);
        let dict = arena.value(id).gen_group_elem_dict();
        let err = dict.get_float(AttrType::Area).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AttributeCardinalityViolation);
        assert_eq!(err.loc, Loc::new(5, 1));
        assert_eq!(err.message, "area appear more than once. Previously appears at 2:1");
        // Repeated keywords keep source order.
        let all: Vec<f64> = dict
            .get_all(AttrType::Area)
            .iter()
            .map(|v| v.float_value().unwrap())
            .collect();
        assert_eq!(all, vec![2.0, 3.0]);
    }

    #[test]
    fn test_wrong_kind_and_missing() {
        let mut arena = AstArena::new();
        let children = vec![float_attr(&mut arena, AttrType::Direction, 1.0, 2)];
        let id = group(&mut arena, children);
        let dict = arena.value(id).gen_group_elem_dict();
        let err = dict.get_direction(AttrType::Direction).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.loc, Loc::new(2, 8));
        let err = dict
            .require(AttrType::Area, dict.get_float(AttrType::Area))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingRequiredAttribute);
        assert_eq!(err.message, "'area' attribute is missing");
    }
}
