// SPDX-License-Identifier: Apache-2.0

use ahash::AHashMap;

use crate::ast::{ElemDict, ValueRef};
use crate::attr_type::AttrType;
use crate::cell_library::{
    CellId, CellLibrary, FfAttrs, FsmAttrs, InputCaps, LatchAttrs, OutputAttrs,
};
use crate::error::{ErrorKind, GroupError};
use crate::logic::{LogicExpr, MAX_TV_INPUTS};
use crate::loc::Loc;
use crate::types::{ClearPresetVar, Direction, TimingSense};
use crate::util::split_list;

use super::{ExprAttr, PinInfo, TimingInfo, arc_senses, require_header_name, resolve_opt};

fn clear_preset_var(dict: &ElemDict<'_>, attr: AttrType) -> Result<ClearPresetVar, GroupError> {
    match dict.get_string(attr)? {
        None => Ok(ClearPresetVar::default()),
        Some(s) => ClearPresetVar::from_keyword(s).ok_or_else(|| {
            GroupError::invalid_value(
                dict.attr_loc(attr).unwrap_or(dict.loc()),
                format!(
                    "{}: Illegal value for '{}'. Only 'L', 'H', 'N', 'T' or 'X' are allowed",
                    s, attr
                ),
            )
        }),
    }
}

/// The two state variable names of an `ff` or `latch` header.
fn state_vars(value: ValueRef<'_>) -> (String, String) {
    let name = |pos| {
        value
            .group_header_value()
            .and_then(|h| h.complex_elem_value(pos))
            .and_then(|v| v.string_value())
            .unwrap_or_default()
            .to_string()
    };
    (name(0), name(1))
}

/// An `ff (var1, var2)` group.
#[derive(Debug, Clone)]
pub struct FfInfo<'a> {
    pub var1: String,
    pub var2: String,
    pub clocked_on: ExprAttr<'a>,
    pub clocked_on_also: Option<ExprAttr<'a>>,
    pub next_state: ExprAttr<'a>,
    pub clear: Option<ExprAttr<'a>>,
    pub preset: Option<ExprAttr<'a>>,
    pub clear_preset_var1: ClearPresetVar,
    pub clear_preset_var2: ClearPresetVar,
}

impl<'a> FfInfo<'a> {
    pub fn set(value: ValueRef<'a>) -> Result<Self, GroupError> {
        let dict = value.gen_group_elem_dict();
        let (var1, var2) = state_vars(value);
        Ok(Self {
            var1,
            var2,
            clocked_on: ExprAttr::require(&dict, AttrType::ClockedOn)?,
            clocked_on_also: ExprAttr::get(&dict, AttrType::ClockedOnAlso)?,
            next_state: ExprAttr::require(&dict, AttrType::NextState)?,
            clear: ExprAttr::get(&dict, AttrType::Clear)?,
            preset: ExprAttr::get(&dict, AttrType::Preset)?,
            clear_preset_var1: clear_preset_var(&dict, AttrType::ClearPresetVar1)?,
            clear_preset_var2: clear_preset_var(&dict, AttrType::ClearPresetVar2)?,
        })
    }

    pub fn resolve(&self, ipin_map: &AHashMap<String, usize>) -> Result<FfAttrs, GroupError> {
        Ok(FfAttrs {
            var1: self.var1.clone(),
            var2: self.var2.clone(),
            clocked_on: self.clocked_on.resolve(ipin_map)?,
            clocked_on_also: resolve_opt(&self.clocked_on_also, ipin_map)?,
            next_state: self.next_state.resolve(ipin_map)?,
            clear: resolve_opt(&self.clear, ipin_map)?,
            preset: resolve_opt(&self.preset, ipin_map)?,
            clear_preset_var1: self.clear_preset_var1,
            clear_preset_var2: self.clear_preset_var2,
        })
    }
}

/// A `latch (var1, var2)` group.
#[derive(Debug, Clone)]
pub struct LatchInfo<'a> {
    pub var1: String,
    pub var2: String,
    pub enable: Option<ExprAttr<'a>>,
    pub enable_also: Option<ExprAttr<'a>>,
    pub data_in: Option<ExprAttr<'a>>,
    pub clear: Option<ExprAttr<'a>>,
    pub preset: Option<ExprAttr<'a>>,
    pub clear_preset_var1: ClearPresetVar,
    pub clear_preset_var2: ClearPresetVar,
}

impl<'a> LatchInfo<'a> {
    pub fn set(value: ValueRef<'a>) -> Result<Self, GroupError> {
        let dict = value.gen_group_elem_dict();
        let (var1, var2) = state_vars(value);
        Ok(Self {
            var1,
            var2,
            enable: ExprAttr::get(&dict, AttrType::Enable)?,
            enable_also: ExprAttr::get(&dict, AttrType::EnableAlso)?,
            data_in: ExprAttr::get(&dict, AttrType::DataIn)?,
            clear: ExprAttr::get(&dict, AttrType::Clear)?,
            preset: ExprAttr::get(&dict, AttrType::Preset)?,
            clear_preset_var1: clear_preset_var(&dict, AttrType::ClearPresetVar1)?,
            clear_preset_var2: clear_preset_var(&dict, AttrType::ClearPresetVar2)?,
        })
    }

    pub fn resolve(&self, ipin_map: &AHashMap<String, usize>) -> Result<LatchAttrs, GroupError> {
        Ok(LatchAttrs {
            var1: self.var1.clone(),
            var2: self.var2.clone(),
            enable: resolve_opt(&self.enable, ipin_map)?,
            enable_also: resolve_opt(&self.enable_also, ipin_map)?,
            data_in: resolve_opt(&self.data_in, ipin_map)?,
            clear: resolve_opt(&self.clear, ipin_map)?,
            preset: resolve_opt(&self.preset, ipin_map)?,
            clear_preset_var1: self.clear_preset_var1,
            clear_preset_var2: self.clear_preset_var2,
        })
    }
}

/// A `statetable ("inputs", "internal nodes")` group.
#[derive(Debug, Clone, PartialEq)]
pub struct FsmInfo {
    pub input_nodes: Vec<String>,
    pub internal_nodes: Vec<String>,
    pub table: String,
}

impl FsmInfo {
    pub fn set(value: ValueRef<'_>) -> Result<Self, GroupError> {
        let dict = value.gen_group_elem_dict();
        let list = |pos| -> Vec<String> {
            value
                .group_header_value()
                .and_then(|h| h.complex_elem_value(pos))
                .and_then(|v| v.string_value())
                .map(|s| split_list(s).map(str::to_string).collect())
                .unwrap_or_default()
        };
        Ok(Self {
            input_nodes: list(0),
            internal_nodes: list(1),
            table: dict
                .require(AttrType::Table, dict.get_string(AttrType::Table))?
                .to_string(),
        })
    }
}

#[derive(Debug, Clone)]
enum SeqInfo<'a> {
    Logic,
    Ff(FfInfo<'a>),
    Latch(LatchInfo<'a>),
    Fsm(FsmInfo),
}

#[derive(Debug, Clone)]
enum SeqAttrs {
    Logic,
    Ff(FfAttrs),
    Latch(LatchAttrs),
    Fsm(FsmAttrs),
}

/// One physical pin with everything resolved, in the order pins are added.
#[derive(Debug, Clone)]
enum BoundPin {
    Input(String, InputCaps),
    Output(String, OutputAttrs),
    Inout(String, InputCaps, OutputAttrs),
    Internal(String),
}

/// A timing group ready to be added, with the arcs it covers.
#[derive(Debug, Clone)]
struct BoundTiming<'a> {
    info: TimingInfo<'a>,
    when: Option<LogicExpr>,
    arcs: Vec<(usize, usize, TimingSense)>,
}

/// A `cell` group, fully validated and resolved.
#[derive(Debug, Clone)]
pub struct CellInfo<'a> {
    pub name: String,
    pub area: f64,
    pub dont_use: bool,
    pub dont_touch: bool,
    pub cell_footprint: Option<String>,
    /// Input position of every input, inout and state variable name.
    pub ipin_map: AHashMap<String, usize>,
    /// Output position of every output and inout name.
    pub opin_map: AHashMap<String, usize>,
    seq: SeqAttrs,
    pins: Vec<BoundPin>,
    timings: Vec<BoundTiming<'a>>,
}

impl<'a> CellInfo<'a> {
    pub fn set(value: ValueRef<'a>, lib: &CellLibrary) -> Result<Self, GroupError> {
        let name = require_header_name(value, AttrType::Cell)?;
        if lib.cell_by_name(name).is_some() {
            return Err(GroupError::new(
                ErrorKind::AttributeCardinalityViolation,
                value.loc(),
                format!("cell '{}' is defined more than once", name),
            ));
        }
        let dict = value.gen_group_elem_dict();
        let area = dict.require(AttrType::Area, dict.get_float(AttrType::Area))?;

        let seq = if let Some(ff) = dict.get_group(AttrType::Ff)? {
            SeqInfo::Ff(FfInfo::set(ff)?)
        } else if let Some(latch) = dict.get_group(AttrType::Latch)? {
            SeqInfo::Latch(LatchInfo::set(latch)?)
        } else if let Some(table) = dict.get_group(AttrType::Statetable)? {
            SeqInfo::Fsm(FsmInfo::set(table)?)
        } else {
            for bank in [AttrType::FfBank, AttrType::LatchBank] {
                if dict.contains(bank) {
                    log::debug!(
                        "cell '{}': '{}' at {} is not bound, reading the cell as logic",
                        name,
                        bank,
                        dict.attr_loc(bank).unwrap_or(dict.loc())
                    );
                }
            }
            SeqInfo::Logic
        };

        let pins = dict
            .get_all(AttrType::Pin)
            .into_iter()
            .map(|p| PinInfo::set(p, lib))
            .collect::<Result<Vec<_>, _>>()?;
        if pins.is_empty() {
            return Err(GroupError::missing(dict.loc(), "'pin' attribute is missing"));
        }

        let (ipin_map, opin_map) = Self::pin_maps(&pins, &seq, dict.loc())?;

        let seq = match seq {
            SeqInfo::Logic => SeqAttrs::Logic,
            SeqInfo::Ff(ff) => SeqAttrs::Ff(ff.resolve(&ipin_map)?),
            SeqInfo::Latch(latch) => SeqAttrs::Latch(latch.resolve(&ipin_map)?),
            SeqInfo::Fsm(fsm) => SeqAttrs::Fsm(FsmAttrs {
                input_nodes: fsm.input_nodes,
                internal_nodes: fsm.internal_nodes,
                table: fsm.table,
            }),
        };

        let ni = ipin_map.len();
        let mut bound_pins = Vec::new();
        let mut timings = Vec::new();
        for direction in [Direction::Input, Direction::Output, Direction::Inout, Direction::Internal] {
            for pin in pins.iter().filter(|p| p.direction == direction) {
                let output = pin.resolve_output(&ipin_map)?;
                for pin_name in &pin.names {
                    bound_pins.push(match (direction, &pin.input, &output) {
                        (Direction::Input, Some(caps), _) => {
                            BoundPin::Input(pin_name.clone(), caps.clone())
                        }
                        (Direction::Output, _, Some(attrs)) => {
                            BoundPin::Output(pin_name.clone(), attrs.clone())
                        }
                        (Direction::Inout, Some(caps), Some(attrs)) => {
                            BoundPin::Inout(pin_name.clone(), caps.clone(), attrs.clone())
                        }
                        _ => BoundPin::Internal(pin_name.clone()),
                    });
                }
                let Some(attrs) = &output else {
                    continue;
                };
                let tv = match &attrs.function {
                    Some(_) if ni > MAX_TV_INPUTS => {
                        log::warn!(
                            "{}: function of '{}' has {} inputs, more than {}; timing senses are not derived",
                            pin.loc,
                            pin.names.join(", "),
                            ni,
                            MAX_TV_INPUTS
                        );
                        None
                    }
                    Some(f) => f.make_tv(ni),
                    None => None,
                };
                for timing in &pin.timings {
                    let inputs = timing.resolve_related(&ipin_map)?;
                    let when = timing.resolve_when(&ipin_map)?;
                    let mut arcs = Vec::new();
                    for pin_name in &pin.names {
                        let Some(&opos) = opin_map.get(pin_name) else {
                            continue;
                        };
                        for &ipos in &inputs {
                            for sense in arc_senses(
                                timing.timing_type,
                                timing.timing_sense,
                                attrs.function.is_some(),
                                tv.as_ref(),
                                ipos,
                            ) {
                                arcs.push((ipos, opos, sense));
                            }
                        }
                    }
                    timings.push(BoundTiming {
                        info: timing.clone(),
                        when,
                        arcs,
                    });
                }
            }
        }

        Ok(Self {
            name: name.to_string(),
            area,
            dont_use: dict.get_bool(AttrType::DontUse)?.unwrap_or(false),
            dont_touch: dict.get_bool(AttrType::DontTouch)?.unwrap_or(false),
            cell_footprint: dict.get_string(AttrType::CellFootprint)?.map(str::to_string),
            ipin_map,
            opin_map,
            seq,
            pins: bound_pins,
            timings,
        })
    }

    /// Assigns input and output positions: inputs, then outputs, then
    /// inouts (which take one of each), then the state variables, which are
    /// appended to the input space.
    fn pin_maps(
        pins: &[PinInfo<'_>],
        seq: &SeqInfo<'_>,
        loc: Loc,
    ) -> Result<(AHashMap<String, usize>, AHashMap<String, usize>), GroupError> {
        let mut ipin_map = AHashMap::new();
        let mut opin_map = AHashMap::new();
        let mut seen: AHashMap<String, Loc> = AHashMap::new();
        let mut claim = |name: &str, at: Loc| -> Result<(), GroupError> {
            if let Some(prev) = seen.insert(name.to_string(), at) {
                return Err(GroupError::new(
                    ErrorKind::AttributeCardinalityViolation,
                    at,
                    format!("pin '{}' is defined more than once (also at {})", name, prev),
                ));
            }
            Ok(())
        };
        for direction in [Direction::Input, Direction::Output, Direction::Inout, Direction::Internal] {
            for pin in pins.iter().filter(|p| p.direction == direction) {
                for name in &pin.names {
                    claim(name, pin.loc)?;
                    if matches!(direction, Direction::Input | Direction::Inout) {
                        let pos = ipin_map.len();
                        ipin_map.insert(name.clone(), pos);
                    }
                    if matches!(direction, Direction::Output | Direction::Inout) {
                        let pos = opin_map.len();
                        opin_map.insert(name.clone(), pos);
                    }
                }
            }
        }
        let state_vars: Vec<&str> = match seq {
            SeqInfo::Logic => Vec::new(),
            SeqInfo::Ff(ff) => vec![ff.var1.as_str(), ff.var2.as_str()],
            SeqInfo::Latch(latch) => vec![latch.var1.as_str(), latch.var2.as_str()],
            SeqInfo::Fsm(fsm) => fsm.internal_nodes.iter().map(String::as_str).collect(),
        };
        for var in state_vars {
            claim(var, loc)?;
            let pos = ipin_map.len();
            ipin_map.insert(var.to_string(), pos);
        }
        Ok((ipin_map, opin_map))
    }

    /// Commits the cell with its pins and timings.
    pub fn add_cell(self, lib: &mut CellLibrary) -> CellId {
        let id = match self.seq {
            SeqAttrs::Logic => lib.add_logic_cell(&self.name, self.area),
            SeqAttrs::Ff(ff) => lib.add_ff_cell(&self.name, self.area, ff),
            SeqAttrs::Latch(latch) => lib.add_latch_cell(&self.name, self.area, latch),
            SeqAttrs::Fsm(fsm) => lib.add_fsm_cell(&self.name, self.area, fsm),
        };
        lib.set_cell_options(id, self.dont_use, self.dont_touch, self.cell_footprint);
        for pin in self.pins {
            match pin {
                BoundPin::Input(name, caps) => {
                    lib.add_input(id, name, caps);
                }
                BoundPin::Output(name, attrs) => {
                    lib.add_output(id, name, attrs);
                }
                BoundPin::Inout(name, caps, attrs) => {
                    lib.add_inout(id, name, caps, attrs);
                }
                BoundPin::Internal(name) => lib.add_internal(id, name),
            }
        }
        for timing in self.timings {
            if let Some(tid) = timing.info.add(lib, id, timing.when) {
                for (ipos, opos, sense) in timing.arcs {
                    lib.set_timing(id, ipos, opos, sense, tid);
                }
            }
        }
        log::debug!("cell '{}' added", lib.cell(id).name);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::read::ReadOptions;
    use maplit::hashmap;
    use pretty_assertions::assert_eq;

    fn with_cell<R>(cell: &str, f: impl FnOnce(Result<CellInfo<'_>, GroupError>) -> R) -> R {
        let _ = env_logger::builder().is_test(true).try_init();
        let text = format!("library (l) {{ {} }}", cell);
        let parsed = Parser::new(text.bytes(), &ReadOptions::default())
            .parse()
            .unwrap();
        assert!(parsed.failures.is_empty(), "{:?}", parsed.failures);
        let lib = CellLibrary::new("l");
        let cell = parsed
            .arena
            .value(parsed.root)
            .gen_group_elem_dict()
            .get_group(AttrType::Cell)
            .unwrap()
            .unwrap();
        f(CellInfo::set(cell, &lib))
    }

    fn positions(map: &AHashMap<String, usize>) -> std::collections::HashMap<&str, usize> {
        map.iter().map(|(k, v)| (k.as_str(), *v)).collect()
    }

    #[test]
    fn test_pin_maps_follow_phase_order() {
        let cell = r#"cell (C) {
  area : 1 ;
  pin (IO) { direction : inout ; capacitance : 1 ; }
  pin (Y) { direction : output ; }
  pin (B) { direction : input ; capacitance : 1 ; }
  pin (A) { direction : input ; capacitance : 1 ; }
  pin (n1) { direction : internal ; }
}"#;
        with_cell(cell, |info| {
            let info = info.unwrap();
            assert_eq!(
                positions(&info.ipin_map),
                hashmap! { "B" => 0, "A" => 1, "IO" => 2 }
            );
            assert_eq!(positions(&info.opin_map), hashmap! { "Y" => 0, "IO" => 1 });
        });
    }

    #[test]
    fn test_ff_state_vars_follow_pins() {
        let cell = r#"cell (DFF) {
  area : 4 ;
  ff (IQ, IQN) { clocked_on : "CLK" ; next_state : "D" ; clear_preset_var1 : L ; }
  pin (Q) { direction : output ; function : "IQ" ; }
  pin (CLK) { direction : input ; capacitance : 1 ; }
  pin (D) { direction : input ; capacitance : 1 ; }
}"#;
        with_cell(cell, |info| {
            let info = info.unwrap();
            assert_eq!(
                positions(&info.ipin_map),
                hashmap! { "CLK" => 0, "D" => 1, "IQ" => 2, "IQN" => 3 }
            );
            match &info.seq {
                SeqAttrs::Ff(ff) => {
                    assert_eq!(ff.next_state, LogicExpr::posi_literal(1));
                    assert_eq!(ff.clocked_on, LogicExpr::posi_literal(0));
                    assert_eq!(ff.clear_preset_var1, ClearPresetVar::Low);
                    assert_eq!(ff.clear_preset_var2, ClearPresetVar::Unknown);
                }
                other => panic!("unexpected kind: {:?}", other),
            }
        });
    }

    #[test]
    fn test_ff_requires_next_state() {
        with_cell(
            "cell (X) { area : 1 ; ff (IQ, IQN) { clocked_on : \"CK\" ; } pin (CK) { direction : input ; capacitance : 1 ; } }",
            |info| {
                let err = info.unwrap_err();
                assert_eq!(err.kind, ErrorKind::MissingRequiredAttribute);
                assert_eq!(err.message, "'next_state' attribute is missing");
            },
        );
    }

    #[test]
    fn test_bad_clear_preset_var() {
        with_cell(
            "cell (X) { area : 1 ; latch (IQ, IQN) { enable : \"G\" ; clear_preset_var2 : Z ; } pin (G) { direction : input ; capacitance : 1 ; } }",
            |info| {
                let err = info.unwrap_err();
                assert_eq!(err.kind, ErrorKind::InvalidValue);
                assert!(err.message.starts_with("Z: Illegal value for 'clear_preset_var2'"));
            },
        );
    }

    #[test]
    fn test_statetable_internal_nodes_are_inputs() {
        let cell = r#"cell (S) {
  area : 2 ;
  statetable ("D CK", "IQ") { table : "L R : - : L, H R : - : H" ; }
  pin (D) { direction : input ; capacitance : 1 ; }
  pin (CK) { direction : input ; capacitance : 1 ; }
  pin (Q) { direction : output ; function : "IQ" ; }
}"#;
        with_cell(cell, |info| {
            let info = info.unwrap();
            assert_eq!(info.ipin_map.get("IQ"), Some(&2));
            match &info.seq {
                SeqAttrs::Fsm(fsm) => {
                    assert_eq!(fsm.input_nodes, vec!["D", "CK"]);
                    assert_eq!(fsm.table, "L R : - : L, H R : - : H");
                }
                other => panic!("unexpected kind: {:?}", other),
            }
        });
    }

    #[test]
    fn test_register_bank_reads_as_logic() {
        let cell = r#"cell (BANK) {
  area : 8 ;
  ff_bank (IQ, IQN, 4) { clocked_on : "CK" ; next_state : "D" ; }
  pin (CK) { direction : input ; capacitance : 1 ; }
  pin (D) { direction : input ; capacitance : 1 ; }
  pin (Q) { direction : output ; }
}"#;
        with_cell(cell, |info| {
            let info = info.unwrap();
            assert!(matches!(info.seq, SeqAttrs::Logic), "{:?}", info.seq);
            assert_eq!(info.ipin_map.get("IQ"), None);
            assert_eq!(positions(&info.ipin_map), hashmap! { "CK" => 0, "D" => 1 });
        });
    }

    #[test]
    fn test_missing_area_and_pins() {
        with_cell("cell (X) { pin (A) { direction : input ; capacitance : 1 ; } }", |info| {
            assert_eq!(info.unwrap_err().message, "'area' attribute is missing");
        });
        with_cell("cell (X) { area : 1 ; }", |info| {
            assert_eq!(info.unwrap_err().message, "'pin' attribute is missing");
        });
    }

    #[test]
    fn test_duplicate_pin_name() {
        with_cell(
            "cell (X) { area : 1 ; pin (A) { direction : input ; capacitance : 1 ; } pin (A) { direction : output ; } }",
            |info| {
                assert_eq!(info.unwrap_err().kind, ErrorKind::AttributeCardinalityViolation);
            },
        );
    }

    #[test]
    fn test_unknown_function_pin() {
        with_cell(
            "cell (X) { area : 1 ; pin (A) { direction : input ; capacitance : 1 ; } pin (Y) { direction : output ; function : \"A & B\" ; } }",
            |info| {
                let err = info.unwrap_err();
                assert_eq!(err.kind, ErrorKind::UnresolvedPinReference);
                assert_eq!(err.message, "function: No such pin-name 'B'");
            },
        );
    }
}
