// SPDX-License-Identifier: Apache-2.0

use ahash::AHashMap;

use crate::ast::ValueRef;
use crate::attr_type::AttrType;
use crate::cell_library::{CellLibrary, InputCaps, OutputAttrs};
use crate::error::GroupError;
use crate::loc::Loc;
use crate::types::Direction;

use super::{ExprAttr, TimingInfo, resolve_opt};

/// Output-side attributes before the function expressions are resolved.
#[derive(Debug, Clone)]
pub struct OutputInfo<'a> {
    pub max_fanout: f64,
    pub min_fanout: f64,
    pub max_capacitance: f64,
    pub min_capacitance: f64,
    pub max_transition: f64,
    pub min_transition: f64,
    pub function: Option<ExprAttr<'a>>,
    pub three_state: Option<ExprAttr<'a>>,
}

/// A `pin` group. A header listing several names stands for that many pins
/// with identical attributes.
#[derive(Debug, Clone)]
pub struct PinInfo<'a> {
    pub loc: Loc,
    pub names: Vec<String>,
    pub direction: Direction,
    pub input: Option<InputCaps>,
    pub output: Option<OutputInfo<'a>>,
    pub timings: Vec<TimingInfo<'a>>,
}

impl<'a> PinInfo<'a> {
    pub fn set(value: ValueRef<'a>, lib: &CellLibrary) -> Result<Self, GroupError> {
        let names: Vec<String> = value
            .group_header_value()
            .map(|h| h.complex_elems())
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.string_value())
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            return Err(GroupError::missing(value.loc(), "'pin' group has no name"));
        }
        let dict = value.gen_group_elem_dict();
        let direction = dict.require(AttrType::Direction, dict.get_direction(AttrType::Direction))?;

        let input = match direction {
            Direction::Input | Direction::Inout => {
                let capacitance =
                    dict.require(AttrType::Capacitance, dict.get_float(AttrType::Capacitance))?;
                let rise = dict.get_float(AttrType::RiseCapacitance)?;
                let fall = dict.get_float(AttrType::FallCapacitance)?;
                let (rise_capacitance, fall_capacitance) = match (rise, fall) {
                    (Some(r), Some(f)) => (r, f),
                    (None, None) => (capacitance, capacitance),
                    (Some(_), None) => {
                        return Err(GroupError::missing(
                            dict.loc(),
                            "'fall_capacitance' attribute is missing",
                        ));
                    }
                    (None, Some(_)) => {
                        return Err(GroupError::missing(
                            dict.loc(),
                            "'rise_capacitance' attribute is missing",
                        ));
                    }
                };
                Some(InputCaps {
                    capacitance,
                    rise_capacitance,
                    fall_capacitance,
                })
            }
            Direction::Output | Direction::Internal => None,
        };

        let output = match direction {
            Direction::Output | Direction::Inout => {
                let defaults = OutputAttrs::default();
                let float = |attr: AttrType, default: f64| -> Result<f64, GroupError> {
                    Ok(dict.get_float(attr)?.unwrap_or(default))
                };
                Some(OutputInfo {
                    max_fanout: float(AttrType::MaxFanout, defaults.max_fanout)?,
                    min_fanout: float(AttrType::MinFanout, defaults.min_fanout)?,
                    max_capacitance: float(AttrType::MaxCapacitance, defaults.max_capacitance)?,
                    min_capacitance: float(AttrType::MinCapacitance, defaults.min_capacitance)?,
                    max_transition: float(AttrType::MaxTransition, defaults.max_transition)?,
                    min_transition: float(AttrType::MinTransition, defaults.min_transition)?,
                    function: ExprAttr::get(&dict, AttrType::Function)?,
                    three_state: ExprAttr::get(&dict, AttrType::ThreeState)?,
                })
            }
            Direction::Input | Direction::Internal => None,
        };

        let timing_groups = dict.get_all(AttrType::Timing);
        let timings = if output.is_some() {
            timing_groups
                .into_iter()
                .map(|t| TimingInfo::set(t, lib))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            if !timing_groups.is_empty() {
                log::debug!(
                    "{}: {} timing groups of {} pin '{}' are not bound",
                    value.loc(),
                    timing_groups.len(),
                    direction,
                    names.join(", ")
                );
            }
            Vec::new()
        };

        Ok(Self {
            loc: value.loc(),
            names,
            direction,
            input,
            output,
            timings,
        })
    }

    /// The output attributes with `function` and `three_state` resolved
    /// against the cell's input positions.
    pub fn resolve_output(
        &self,
        ipin_map: &AHashMap<String, usize>,
    ) -> Result<Option<OutputAttrs>, GroupError> {
        let Some(o) = &self.output else {
            return Ok(None);
        };
        Ok(Some(OutputAttrs {
            max_fanout: o.max_fanout,
            min_fanout: o.min_fanout,
            max_capacitance: o.max_capacitance,
            min_capacitance: o.min_capacitance,
            max_transition: o.max_transition,
            min_transition: o.min_transition,
            function: resolve_opt(&o.function, ipin_map)?,
            three_state: resolve_opt(&o.three_state, ipin_map)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::AstArena;
    use crate::error::ErrorKind;
    use crate::parser::Parser;
    use crate::read::ReadOptions;

    fn with_pin<R>(pin: &str, f: impl FnOnce(Result<PinInfo<'_>, GroupError>) -> R) -> R {
        let text = format!(
            "library (l) {{ delay_model : table_lookup ; cell (C) {{ area : 1 ; {} }} }}",
            pin
        );
        let parsed = Parser::new(text.bytes(), &ReadOptions::default())
            .parse()
            .unwrap();
        assert!(parsed.failures.is_empty(), "{:?}", parsed.failures);
        let arena: &AstArena = &parsed.arena;
        let lib = CellLibrary::new("l");
        let cell = arena
            .value(parsed.root)
            .gen_group_elem_dict()
            .get_group(AttrType::Cell)
            .unwrap()
            .unwrap();
        let pin = cell.gen_group_elem_dict().get_group(AttrType::Pin).unwrap().unwrap();
        f(PinInfo::set(pin, &lib))
    }

    #[test]
    fn test_input_capacitance_defaults() {
        with_pin("pin (A, B) { direction : input ; capacitance : 0.5 ; }", |pin| {
            let pin = pin.unwrap();
            assert_eq!(pin.names, vec!["A", "B"]);
            assert_eq!(
                pin.input,
                Some(InputCaps {
                    capacitance: 0.5,
                    rise_capacitance: 0.5,
                    fall_capacitance: 0.5,
                })
            );
            assert!(pin.output.is_none());
        });
    }

    #[test]
    fn test_rise_capacitance_needs_fall() {
        with_pin(
            "pin (A) { direction : input ; capacitance : 0.5 ; rise_capacitance : 0.4 ; }",
            |pin| {
                let err = pin.unwrap_err();
                assert_eq!(err.kind, ErrorKind::MissingRequiredAttribute);
                assert_eq!(err.message, "'fall_capacitance' attribute is missing");
            },
        );
    }

    #[test]
    fn test_input_requires_capacitance() {
        with_pin("pin (A) { direction : input ; }", |pin| {
            assert_eq!(pin.unwrap_err().message, "'capacitance' attribute is missing");
        });
    }

    #[test]
    fn test_missing_direction() {
        with_pin("pin (A) { capacitance : 1 ; }", |pin| {
            assert_eq!(pin.unwrap_err().message, "'direction' attribute is missing");
        });
    }

    #[test]
    fn test_output_defaults_and_function() {
        with_pin(
            "pin (Y) { direction : output ; max_capacitance : 0.2 ; function : \"!(A B)\" ; }",
            |pin| {
                let pin = pin.unwrap();
                let output = pin.output.as_ref().unwrap();
                assert_eq!(output.max_capacitance, 0.2);
                assert_eq!(output.max_fanout, f64::INFINITY);
                assert_eq!(output.min_transition, 0.0);
                let map: AHashMap<String, usize> =
                    [("A".to_string(), 0), ("B".to_string(), 1)].into_iter().collect();
                let resolved = pin.resolve_output(&map).unwrap().unwrap();
                let f = resolved.function.unwrap();
                assert_eq!(f.eval(&[true, true]), Some(false));
                assert_eq!(f.eval(&[true, false]), Some(true));
                assert_eq!(resolved.three_state, None);
            },
        );
    }

    #[test]
    fn test_inout_has_both_sides() {
        with_pin(
            "pin (IO) { direction : inout ; capacitance : 1 ; three_state : \"EN'\" ; }",
            |pin| {
                let pin = pin.unwrap();
                assert!(pin.input.is_some());
                assert!(pin.output.as_ref().unwrap().three_state.is_some());
            },
        );
    }
}
