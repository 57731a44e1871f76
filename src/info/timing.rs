// SPDX-License-Identifier: Apache-2.0

use ahash::AHashMap;

use crate::ast::{ElemDict, ValueRef};
use crate::attr_type::AttrType;
use crate::cell_library::{CellId, CellLibrary, GenericDelay, LutId, TimingId};
use crate::error::{ErrorKind, GroupError};
use crate::logic::{LogicExpr, TvFunc};
use crate::loc::Loc;
use crate::types::{DelayModel, TimingSense, TimingType};
use crate::util::split_list;

use super::{ExprAttr, TableInfo, resolve_opt};

/// Delay data of one timing group, by delay model.
#[derive(Debug, Clone, PartialEq)]
pub enum TimingDelayInfo {
    Generic(GenericDelay),
    Lut1 {
        cell_rise: Option<TableInfo>,
        cell_fall: Option<TableInfo>,
        rise_transition: Option<TableInfo>,
        fall_transition: Option<TableInfo>,
    },
    Lut2 {
        rise_transition: Option<TableInfo>,
        fall_transition: Option<TableInfo>,
        rise_propagation: Option<TableInfo>,
        fall_propagation: Option<TableInfo>,
    },
    /// A delay model whose timing data is not bound.
    Unbound(DelayModel),
}

/// A `timing` group inside an output or inout pin.
#[derive(Debug, Clone)]
pub struct TimingInfo<'a> {
    pub loc: Loc,
    pub timing_type: TimingType,
    pub timing_sense: Option<TimingSense>,
    pub related_pins: Vec<String>,
    pub when: Option<ExprAttr<'a>>,
    pub delay: TimingDelayInfo,
}

impl<'a> TimingInfo<'a> {
    pub fn set(value: ValueRef<'a>, lib: &CellLibrary) -> Result<Self, GroupError> {
        let dict = value.gen_group_elem_dict();
        let related = dict.require(AttrType::RelatedPin, dict.get_string(AttrType::RelatedPin))?;
        let related_pins: Vec<String> = split_list(related).map(str::to_string).collect();
        if related_pins.is_empty() {
            return Err(GroupError::missing(
                dict.attr_loc(AttrType::RelatedPin).unwrap_or(dict.loc()),
                "related_pin: no pin name is given",
            ));
        }
        let delay = match lib.delay_model {
            DelayModel::GenericCmos => TimingDelayInfo::Generic(Self::generic_delay(&dict)?),
            DelayModel::TableLookup => Self::table_delay(&dict, lib)?,
            other => TimingDelayInfo::Unbound(other),
        };
        Ok(Self {
            loc: value.loc(),
            timing_type: dict
                .get_timing_type(AttrType::TimingType)?
                .unwrap_or(TimingType::Combinational),
            timing_sense: dict.get_timing_sense(AttrType::TimingSense)?,
            related_pins,
            when: ExprAttr::get(&dict, AttrType::When)?,
            delay,
        })
    }

    fn generic_delay(dict: &ElemDict<'_>) -> Result<GenericDelay, GroupError> {
        let float = |attr: AttrType| dict.require(attr, dict.get_float(attr));
        Ok(GenericDelay {
            intrinsic_rise: float(AttrType::IntrinsicRise)?,
            intrinsic_fall: float(AttrType::IntrinsicFall)?,
            slope_rise: float(AttrType::SlopeRise)?,
            slope_fall: float(AttrType::SlopeFall)?,
            rise_resistance: float(AttrType::RiseResistance)?,
            fall_resistance: float(AttrType::FallResistance)?,
        })
    }

    fn table_delay(
        dict: &ElemDict<'_>,
        lib: &CellLibrary,
    ) -> Result<TimingDelayInfo, GroupError> {
        let table = |attr: AttrType| -> Result<Option<TableInfo>, GroupError> {
            dict.get_group(attr)?
                .map(|v| TableInfo::set(v, attr, lib))
                .transpose()
        };
        let cell_rise = table(AttrType::CellRise)?;
        let cell_fall = table(AttrType::CellFall)?;
        let rise_transition = table(AttrType::RiseTransition)?;
        let fall_transition = table(AttrType::FallTransition)?;
        let rise_propagation = table(AttrType::RisePropagation)?;
        let fall_propagation = table(AttrType::FallPropagation)?;

        // 1: cell_*, 2: *_propagation; the same side cannot hold both.
        let side = |cell: AttrType, prop: AttrType| {
            if dict.contains(cell) {
                Some((1, cell))
            } else if dict.contains(prop) {
                Some((2, prop))
            } else {
                None
            }
        };
        let rise = side(AttrType::CellRise, AttrType::RisePropagation);
        let fall = side(AttrType::CellFall, AttrType::FallPropagation);
        if let (Some((rt, ra)), Some((ft, fa))) = (rise, fall) {
            if rt != ft {
                let (loc_r, loc_f) = (dict.attr_loc(ra), dict.attr_loc(fa));
                return Err(GroupError::new(
                    ErrorKind::MutuallyExclusiveAttributesPresent,
                    loc_r.max(loc_f).unwrap_or(dict.loc()),
                    format!("'{}' and '{}' cannot be mixed in one timing group", ra, fa),
                ));
            }
        }
        if rise_transition.is_none() && fall_transition.is_none() {
            return Err(GroupError::missing(
                dict.loc(),
                "'rise_transition' or 'fall_transition' attribute is missing",
            ));
        }
        let lut_type = rise.or(fall).map_or(1, |(t, _)| t);
        Ok(if lut_type == 1 {
            TimingDelayInfo::Lut1 {
                cell_rise,
                cell_fall,
                rise_transition,
                fall_transition,
            }
        } else {
            TimingDelayInfo::Lut2 {
                rise_transition,
                fall_transition,
                rise_propagation,
                fall_propagation,
            }
        })
    }

    /// Input positions of the related pins.
    pub fn resolve_related(&self, ipin_map: &AHashMap<String, usize>) -> Result<Vec<usize>, GroupError> {
        self.related_pins
            .iter()
            .map(|name| {
                ipin_map.get(name).copied().ok_or_else(|| {
                    GroupError::new(
                        ErrorKind::UnresolvedPinReference,
                        self.loc,
                        format!("related_pin: No such pin-name '{}'", name),
                    )
                })
            })
            .collect()
    }

    pub fn resolve_when(
        &self,
        ipin_map: &AHashMap<String, usize>,
    ) -> Result<Option<LogicExpr>, GroupError> {
        resolve_opt(&self.when, ipin_map)
    }

    /// Registers the timing with the cell, or returns `None` for a delay model
    /// whose timing data is not bound.
    pub fn add(self, lib: &mut CellLibrary, cell: CellId, when: Option<LogicExpr>) -> Option<TimingId> {
        fn lut(lib: &mut CellLibrary, t: Option<TableInfo>) -> Option<LutId> {
            t.map(|t| t.add(lib))
        }
        match self.delay {
            TimingDelayInfo::Generic(delay) => {
                Some(lib.add_timing_generic(cell, self.timing_type, when, delay))
            }
            TimingDelayInfo::Lut1 {
                cell_rise,
                cell_fall,
                rise_transition,
                fall_transition,
            } => {
                let (cr, cf) = (lut(lib, cell_rise), lut(lib, cell_fall));
                let (rt, ft) = (lut(lib, rise_transition), lut(lib, fall_transition));
                Some(lib.add_timing_lut1(cell, self.timing_type, when, cr, cf, rt, ft))
            }
            TimingDelayInfo::Lut2 {
                rise_transition,
                fall_transition,
                rise_propagation,
                fall_propagation,
            } => {
                let (rt, ft) = (lut(lib, rise_transition), lut(lib, fall_transition));
                let (rp, fp) = (lut(lib, rise_propagation), lut(lib, fall_propagation));
                Some(lib.add_timing_lut2(cell, self.timing_type, when, rt, ft, rp, fp))
            }
            TimingDelayInfo::Unbound(model) => {
                log::info!(
                    "{}: timing data for delay model '{}' is not bound; no arc is created",
                    self.loc,
                    model
                );
                None
            }
        }
    }
}

/// Senses under which the output depends on input `ipos`.
///
/// For the combinational timing types the output function's truth table
/// decides: positive if raising the input can raise the output, negative if
/// it can lower it, and no arc at all if the input is not in the function's
/// support. Without a function (or when it is too wide to tabulate, `tv` is
/// `None` with `has_function` set) the explicit `timing_sense` applies,
/// defaulting to both. Every other timing type is both.
pub fn arc_senses(
    timing_type: TimingType,
    explicit: Option<TimingSense>,
    has_function: bool,
    tv: Option<&TvFunc>,
    ipos: usize,
) -> Vec<TimingSense> {
    const BOTH: [TimingSense; 2] = [TimingSense::PositiveUnate, TimingSense::NegativeUnate];
    if !timing_type.is_combinational() {
        return BOTH.to_vec();
    }
    match (has_function, tv) {
        (true, Some(f)) => {
            let f0 = f.cofactor(ipos, false);
            let f1 = f.cofactor(ipos, true);
            let mut senses = Vec::new();
            if f1.intersects(&!&f0) {
                senses.push(TimingSense::PositiveUnate);
            }
            if f0.intersects(&!&f1) {
                senses.push(TimingSense::NegativeUnate);
            }
            senses
        }
        (true, None) => BOTH.to_vec(),
        (false, _) => match explicit {
            Some(TimingSense::PositiveUnate) => vec![TimingSense::PositiveUnate],
            Some(TimingSense::NegativeUnate) => vec![TimingSense::NegativeUnate],
            Some(TimingSense::NonUnate) | None => BOTH.to_vec(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const POS: TimingSense = TimingSense::PositiveUnate;
    const NEG: TimingSense = TimingSense::NegativeUnate;

    fn and2() -> TvFunc {
        (LogicExpr::posi_literal(0) & LogicExpr::posi_literal(1))
            .make_tv(3)
            .unwrap()
    }

    #[test]
    fn test_senses_from_function() {
        let f = and2();
        let comb = TimingType::Combinational;
        assert_eq!(arc_senses(comb, None, true, Some(&f), 0), vec![POS]);
        let nand = !&f;
        assert_eq!(arc_senses(comb, None, true, Some(&nand), 1), vec![NEG]);
        let xor = (LogicExpr::posi_literal(0) ^ LogicExpr::posi_literal(1))
            .make_tv(2)
            .unwrap();
        assert_eq!(arc_senses(comb, None, true, Some(&xor), 0), vec![POS, NEG]);
        // Input 2 is outside the support of the AND.
        assert_eq!(arc_senses(comb, None, true, Some(&f), 2), vec![]);
    }

    #[test]
    fn test_explicit_sense_does_not_override_function() {
        let f = and2();
        assert_eq!(
            arc_senses(TimingType::CombinationalRise, Some(TimingSense::NegativeUnate), true, Some(&f), 0),
            vec![POS]
        );
    }

    #[test_case(Some(TimingSense::PositiveUnate), vec![POS])]
    #[test_case(Some(TimingSense::NegativeUnate), vec![NEG])]
    #[test_case(Some(TimingSense::NonUnate), vec![POS, NEG])]
    #[test_case(None, vec![POS, NEG])]
    fn test_senses_without_function(explicit: Option<TimingSense>, want: Vec<TimingSense>) {
        assert_eq!(arc_senses(TimingType::Combinational, explicit, false, None, 0), want);
    }

    #[test_case(TimingType::RisingEdge)]
    #[test_case(TimingType::ThreeStateEnable)]
    #[test_case(TimingType::SetupRising)]
    fn test_non_combinational_is_both(timing_type: TimingType) {
        let f = and2();
        assert_eq!(
            arc_senses(timing_type, Some(TimingSense::PositiveUnate), true, Some(&f), 0),
            vec![POS, NEG]
        );
    }

    #[test]
    fn test_too_wide_function_is_both() {
        assert_eq!(
            arc_senses(TimingType::Combinational, None, true, None, 0),
            vec![POS, NEG]
        );
    }
}
