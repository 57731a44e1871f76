// SPDX-License-Identifier: Apache-2.0

//! Per-group dispatch: for each kind of group, which keywords its body accepts
//! and how each keyword's value is read.
//!
//! The tables themselves live in [`tables`] as static `(AttrType, Syntax)`
//! slices. They are merged once into a single hash map keyed by
//! `(GroupKind, AttrType)`, which is what the parser consults.

use ahash::AHashMap;
use once_cell::sync::Lazy;

use crate::ast::ElemDict;
use crate::attr_type::AttrType;
use crate::error::{ErrorKind, GroupError};
use crate::header::HeaderShape;

mod tables;

/// How a simple (`keyword : value ;`) attribute's value is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimpleKind {
    Bool,
    Int,
    Float,
    Str,
    DelayModel,
    Direction,
    /// Arithmetic over numbers and supply names, unquoted.
    Expr,
    /// Quoted Boolean function.
    Function,
    TimingSense,
    TimingType,
    VarType,
}

/// The statement form a keyword takes inside a particular group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Syntax {
    Simple(SimpleKind),
    Complex(HeaderShape),
    Group(GroupKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Library,
    BaseCurves,
    CompactLutTemplate,
    Domain,
    FpgaIsd,
    InputVoltage,
    OutputVoltage,
    OperatingConditions,
    Part,
    SpeedGrade,
    PolyTemplate,
    PowerSupply,
    Sensitization,
    Table,
    Template,
    LuTableTemplate,
    TimingRange,
    Type,
    WireLoad,
    WireLoadSelection,
    WireLoadTable,
    Cell,
    ScaledCell,
    Model,
    DynamicCurrent,
    SwitchingGroup,
    SgPgCurrent,
    SgVector,
    Ff,
    FfBank,
    FpgaCondition,
    FpgaConditionValue,
    FunctionalYieldMetric,
    AverageNumberOfFaults,
    LeakageCurrent,
    LcPgCurrent,
    GateLeakage,
    LeakagePower,
    GeneratedClock,
    IntrinsicParasitic,
    IntrinsicCapacitance,
    IntrinsicResistance,
    TotalCapacitance,
    Latch,
    LatchBank,
    Lut,
    ModeDefinition,
    ModeValue,
    PgPin,
    RoutingTrack,
    Statetable,
    TestCell,
    Pin,
    Bundle,
    Bus,
    Ccsn,
    CcsnTable,
    Electromigration,
    EmMaxToggleRate,
    HyperbolicNoise,
    InternalPower,
    Power,
    MaxCap,
    MaxTrans,
    MinPulseWidth,
    MinimumPeriod,
    PinCapacitance,
    PcCapacitance,
    PcCapacitanceRange,
    PcCapacitanceBound,
    Tlatch,
    Timing,
    CellDegradation,
    CompactCcs,
    NoiseImmunity,
    OutputCurrent,
    OcVector,
    PropagatedNoise,
    ReceiverCapacitance,
}

static DISPATCH: Lazy<AHashMap<(GroupKind, AttrType), Syntax>> = Lazy::new(|| {
    let mut map = AHashMap::new();
    for group in GroupKind::ALL {
        for (attr, syntax) in group.attrs() {
            map.insert((*group, *attr), *syntax);
        }
    }
    log::debug!("dispatch table holds {} keyword bindings", map.len());
    map
});

impl GroupKind {
    /// How `attr` is read inside a body of this kind, or `None` if the
    /// keyword is not accepted here.
    pub fn lookup(self, attr: AttrType) -> Option<Syntax> {
        DISPATCH.get(&(self, attr)).copied()
    }
}

const SEQUENTIAL_GROUPS: [AttrType; 3] = [AttrType::Ff, AttrType::Latch, AttrType::Statetable];

const TIMING_EXCLUSIVE_PAIRS: [(AttrType, AttrType); 2] = [
    (AttrType::CellRise, AttrType::RisePropagation),
    (AttrType::CellFall, AttrType::FallPropagation),
];

fn check_exclusive(dict: &ElemDict<'_>, a: AttrType, b: AttrType) -> Result<(), GroupError> {
    if let (Some(loc_a), Some(loc_b)) = (dict.attr_loc(a), dict.attr_loc(b)) {
        return Err(GroupError::new(
            ErrorKind::MutuallyExclusiveAttributesPresent,
            loc_a.max(loc_b),
            format!(
                "'{}' and '{}' are mutually exclusive ('{}' appears at {})",
                a,
                b,
                if loc_a < loc_b { a } else { b },
                loc_a.min(loc_b)
            ),
        ));
    }
    Ok(())
}

/// Whole-group checks run once a group body has been read.
pub fn end_group(kind: GroupKind, dict: &ElemDict<'_>) -> Result<(), GroupError> {
    match kind {
        GroupKind::Cell | GroupKind::ScaledCell | GroupKind::TestCell => {
            for (i, a) in SEQUENTIAL_GROUPS.iter().enumerate() {
                for b in &SEQUENTIAL_GROUPS[i + 1..] {
                    check_exclusive(dict, *a, *b)?;
                }
            }
            Ok(())
        }
        GroupKind::Timing => {
            for (a, b) in TIMING_EXCLUSIVE_PAIRS {
                check_exclusive(dict, a, b)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AstArena, AstAttr, AstValueKind};
    use crate::loc::Loc;
    use ahash::AHashSet;
    use test_case::test_case;

    #[test]
    fn test_no_table_repeats_a_keyword() {
        for group in GroupKind::ALL {
            let mut seen = AHashSet::new();
            for (attr, _) in group.attrs() {
                assert!(seen.insert(*attr), "{:?} lists {} twice", group, attr);
            }
        }
    }

    #[test]
    fn test_every_keyword_is_dispatched_somewhere() {
        let used: AHashSet<AttrType> = GroupKind::ALL
            .iter()
            .flat_map(|g| g.attrs().iter().map(|(a, _)| *a))
            .collect();
        for attr in AttrType::all() {
            if attr == AttrType::Library {
                continue;
            }
            assert!(used.contains(&attr), "{} is in no dispatch table", attr);
        }
    }

    #[test]
    fn test_every_group_kind_is_reachable() {
        let reachable: AHashSet<GroupKind> = GroupKind::ALL
            .iter()
            .flat_map(|g| g.attrs().iter())
            .filter_map(|(_, syntax)| match syntax {
                Syntax::Group(kind) => Some(*kind),
                _ => None,
            })
            .collect();
        for group in GroupKind::ALL {
            if *group != GroupKind::Library {
                assert!(reachable.contains(group), "{:?} is unreachable", group);
            }
        }
    }

    #[test_case(GroupKind::Cell, AttrType::Area, Syntax::Simple(SimpleKind::Float))]
    #[test_case(GroupKind::Pin, AttrType::Direction, Syntax::Simple(SimpleKind::Direction))]
    #[test_case(GroupKind::Pin, AttrType::Function, Syntax::Simple(SimpleKind::Function))]
    #[test_case(GroupKind::Pin, AttrType::Timing, Syntax::Group(GroupKind::Timing))]
    #[test_case(GroupKind::Timing, AttrType::CellRise, Syntax::Group(GroupKind::Table))]
    #[test_case(GroupKind::Timing, AttrType::RelatedPin, Syntax::Simple(SimpleKind::Str))]
    #[test_case(GroupKind::Ff, AttrType::NextState, Syntax::Simple(SimpleKind::Function))]
    #[test_case(GroupKind::Library, AttrType::CapacitiveLoadUnit, Syntax::Complex(HeaderShape::FloatStr))]
    #[test_case(GroupKind::LuTableTemplate, AttrType::Variable1, Syntax::Simple(SimpleKind::VarType))]
    #[test_case(GroupKind::Table, AttrType::Values, Syntax::Complex(HeaderShape::Values))]
    fn test_lookup(group: GroupKind, attr: AttrType, want: Syntax) {
        assert_eq!(group.lookup(attr), Some(want));
    }

    #[test]
    fn test_lookup_outside_group() {
        assert_eq!(GroupKind::Pin.lookup(AttrType::Area), None);
        assert_eq!(GroupKind::Timing.lookup(AttrType::Pin), None);
    }

    #[test]
    fn test_header_shapes() {
        assert_eq!(GroupKind::Pin.header(), HeaderShape::StrList);
        assert_eq!(GroupKind::Ff.header(), HeaderShape::StrStr);
        assert_eq!(GroupKind::Timing.header(), HeaderShape::OptStr);
        assert_eq!(GroupKind::FfBank.header(), HeaderShape::StrStrInt);
    }

    fn dict_with(arena: &mut AstArena, attrs: &[(AttrType, usize)]) -> crate::ast::ValueId {
        let children = attrs
            .iter()
            .map(|(attr, line)| {
                let header = arena.alloc(AstValueKind::Complex(vec![]), Loc::new(*line, 5));
                let value = arena.alloc(
                    AstValueKind::Group {
                        header,
                        children: vec![],
                    },
                    Loc::new(*line, 1),
                );
                AstAttr {
                    attr: *attr,
                    kwd_loc: Loc::new(*line, 1),
                    value,
                }
            })
            .collect();
        let header = arena.alloc(AstValueKind::Complex(vec![]), Loc::new(1, 5));
        arena.alloc(AstValueKind::Group { header, children }, Loc::new(1, 1))
    }

    #[test_case(GroupKind::Cell, AttrType::Ff, AttrType::Latch)]
    #[test_case(GroupKind::Cell, AttrType::Ff, AttrType::Statetable)]
    #[test_case(GroupKind::Cell, AttrType::Latch, AttrType::Statetable)]
    #[test_case(GroupKind::Timing, AttrType::CellRise, AttrType::RisePropagation)]
    #[test_case(GroupKind::Timing, AttrType::CellFall, AttrType::FallPropagation)]
    fn test_end_group_exclusive_pairs(kind: GroupKind, a: AttrType, b: AttrType) {
        let mut arena = AstArena::new();
        let id = dict_with(&mut arena, &[(a, 2), (b, 4)]);
        let dict = arena.value(id).gen_group_elem_dict();
        let err = end_group(kind, &dict).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MutuallyExclusiveAttributesPresent);
        assert_eq!(err.loc, Loc::new(4, 1));

        let mut arena = AstArena::new();
        let id = dict_with(&mut arena, &[(a, 2)]);
        let dict = arena.value(id).gen_group_elem_dict();
        assert!(end_group(kind, &dict).is_ok());
    }

    #[test]
    fn test_end_group_allows_lut_type_pairs() {
        let mut arena = AstArena::new();
        let id = dict_with(
            &mut arena,
            &[(AttrType::CellRise, 2), (AttrType::FallPropagation, 3)],
        );
        let dict = arena.value(id).gen_group_elem_dict();
        assert!(end_group(GroupKind::Timing, &dict).is_ok());
    }
}
