// SPDX-License-Identifier: Apache-2.0

//! In-memory cell library built by the binder.
//!
//! Everything is owned by [`CellLibrary`] in flat vectors and addressed by
//! typed ids. The `add_*` methods are the only way entities are created; the
//! binder validates its input before calling them, so they do not fail.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::Serialize;

use crate::logic::LogicExpr;
use crate::types::{ClearPresetVar, DelayModel, Direction, Technology, TimingSense, TimingType, VarType};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $name(usize);

        impl $name {
            pub fn index(self) -> usize {
                self.0
            }
        }
    };
}

define_id!(CellId);
define_id!(TemplateId);
define_id!(LutId);
define_id!(TimingId);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LutTemplate {
    pub name: String,
    pub vars: Vec<VarType>,
    /// Default breakpoints per axis; `None` where the template leaves the
    /// axis to each table.
    pub indices: Vec<Option<Vec<f64>>>,
}

impl LutTemplate {
    pub fn dimension(&self) -> usize {
        self.vars.len()
    }
}

/// A lookup table with its axes fully resolved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Lut {
    /// `None` for the built-in `scalar` template.
    pub template: Option<TemplateId>,
    pub vars: Vec<VarType>,
    pub indices: Vec<Vec<f64>>,
    /// Row-major: the last axis varies fastest.
    pub values: Vec<f64>,
}

impl Lut {
    pub fn dimension(&self) -> usize {
        self.vars.len()
    }

    /// The value at grid position `pos`, one coordinate per axis.
    pub fn value(&self, pos: &[usize]) -> Option<f64> {
        if pos.len() != self.indices.len() {
            return None;
        }
        let mut offset = 0;
        for (p, axis) in pos.iter().zip(&self.indices) {
            if *p >= axis.len() {
                return None;
            }
            offset = offset * axis.len() + p;
        }
        self.values.get(offset).copied()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenericDelay {
    pub intrinsic_rise: f64,
    pub intrinsic_fall: f64,
    pub slope_rise: f64,
    pub slope_fall: f64,
    pub rise_resistance: f64,
    pub fall_resistance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TimingDelay {
    Generic(GenericDelay),
    /// `cell_rise`/`cell_fall` with output transitions.
    Lut1 {
        cell_rise: Option<LutId>,
        cell_fall: Option<LutId>,
        rise_transition: Option<LutId>,
        fall_transition: Option<LutId>,
    },
    /// `rise_propagation`/`fall_propagation` with output transitions.
    Lut2 {
        rise_transition: Option<LutId>,
        fall_transition: Option<LutId>,
        rise_propagation: Option<LutId>,
        fall_propagation: Option<LutId>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Timing {
    pub timing_type: TimingType,
    pub when: Option<LogicExpr>,
    pub delay: TimingDelay,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputCaps {
    pub capacitance: f64,
    pub rise_capacitance: f64,
    pub fall_capacitance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutputAttrs {
    pub max_fanout: f64,
    pub min_fanout: f64,
    pub max_capacitance: f64,
    pub min_capacitance: f64,
    pub max_transition: f64,
    pub min_transition: f64,
    pub function: Option<LogicExpr>,
    pub three_state: Option<LogicExpr>,
}

impl Default for OutputAttrs {
    fn default() -> Self {
        Self {
            max_fanout: f64::INFINITY,
            min_fanout: 0.0,
            max_capacitance: f64::INFINITY,
            min_capacitance: 0.0,
            max_transition: f64::INFINITY,
            min_transition: 0.0,
            function: None,
            three_state: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Pin {
    pub name: String,
    pub direction: Direction,
    /// Position in the cell's input space, for input and inout pins.
    pub input_id: Option<usize>,
    /// Position in the cell's output space, for output and inout pins.
    pub output_id: Option<usize>,
    pub input: Option<InputCaps>,
    pub output: Option<OutputAttrs>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FfAttrs {
    pub var1: String,
    pub var2: String,
    pub clocked_on: LogicExpr,
    pub clocked_on_also: Option<LogicExpr>,
    pub next_state: LogicExpr,
    pub clear: Option<LogicExpr>,
    pub preset: Option<LogicExpr>,
    pub clear_preset_var1: ClearPresetVar,
    pub clear_preset_var2: ClearPresetVar,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LatchAttrs {
    pub var1: String,
    pub var2: String,
    pub enable: Option<LogicExpr>,
    pub enable_also: Option<LogicExpr>,
    pub data_in: Option<LogicExpr>,
    pub clear: Option<LogicExpr>,
    pub preset: Option<LogicExpr>,
    pub clear_preset_var1: ClearPresetVar,
    pub clear_preset_var2: ClearPresetVar,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FsmAttrs {
    pub input_nodes: Vec<String>,
    pub internal_nodes: Vec<String>,
    pub table: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum CellKind {
    Logic,
    Ff(FfAttrs),
    Latch(LatchAttrs),
    Fsm(FsmAttrs),
}

/// One registered (input, output) dependency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TimingArc {
    pub input_id: usize,
    pub output_id: usize,
    pub sense: TimingSense,
    pub timing: TimingId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cell {
    pub name: String,
    pub area: f64,
    pub kind: CellKind,
    pub dont_use: bool,
    pub dont_touch: bool,
    pub cell_footprint: Option<String>,
    pub pins: Vec<Pin>,
    pub internal_pins: Vec<String>,
    pub input_num: usize,
    pub output_num: usize,
    pub timings: Vec<TimingId>,
    pub arcs: Vec<TimingArc>,
}

impl Cell {
    fn new(name: String, area: f64, kind: CellKind) -> Self {
        Self {
            name,
            area,
            kind,
            dont_use: false,
            dont_touch: false,
            cell_footprint: None,
            pins: Vec::new(),
            internal_pins: Vec::new(),
            input_num: 0,
            output_num: 0,
            timings: Vec::new(),
            arcs: Vec::new(),
        }
    }

    pub fn pin_by_name(&self, name: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.name == name)
    }

    pub fn input_pins(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter().filter(|p| p.direction == Direction::Input)
    }

    pub fn output_pins(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter().filter(|p| p.direction == Direction::Output)
    }

    pub fn inout_pins(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter().filter(|p| p.direction == Direction::Inout)
    }

    pub fn is_sequential(&self) -> bool {
        !matches!(self.kind, CellKind::Logic)
    }

    /// Arcs from input position `ipos` to output position `opos`.
    pub fn timing_arcs(&self, ipos: usize, opos: usize) -> Vec<(TimingSense, TimingId)> {
        self.arcs
            .iter()
            .filter(|a| a.input_id == ipos && a.output_id == opos)
            .map(|a| (a.sense, a.timing))
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct CellLibrary {
    pub name: String,
    pub technology: Technology,
    pub delay_model: DelayModel,
    /// Library-level string attributes such as `time_unit` or `date`.
    pub attrs: BTreeMap<String, String>,
    pub capacitive_load_unit: Option<(f64, String)>,
    templates: Vec<LutTemplate>,
    luts: Vec<Lut>,
    timings: Vec<Timing>,
    cells: Vec<Cell>,
    #[serde(skip)]
    template_index: AHashMap<String, TemplateId>,
    #[serde(skip)]
    cell_index: AHashMap<String, CellId>,
}

impl CellLibrary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            technology: Technology::Cmos,
            delay_model: DelayModel::GenericCmos,
            attrs: BTreeMap::new(),
            capacitive_load_unit: None,
            templates: Vec::new(),
            luts: Vec::new(),
            timings: Vec::new(),
            cells: Vec::new(),
            template_index: AHashMap::new(),
            cell_index: AHashMap::new(),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    pub fn cell_by_name(&self, name: &str) -> Option<&Cell> {
        self.cell_index.get(name).map(|id| &self.cells[id.0])
    }

    pub fn templates(&self) -> &[LutTemplate] {
        &self.templates
    }

    pub fn template(&self, id: TemplateId) -> &LutTemplate {
        &self.templates[id.0]
    }

    pub fn template_by_name(&self, name: &str) -> Option<TemplateId> {
        self.template_index.get(name).copied()
    }

    pub fn lut(&self, id: LutId) -> &Lut {
        &self.luts[id.0]
    }

    pub fn lut_num(&self) -> usize {
        self.luts.len()
    }

    pub fn timing(&self, id: TimingId) -> &Timing {
        &self.timings[id.0]
    }

    pub fn timing_num(&self) -> usize {
        self.timings.len()
    }

    fn add_lut_template(
        &mut self,
        name: String,
        vars: Vec<VarType>,
        indices: Vec<Option<Vec<f64>>>,
    ) -> TemplateId {
        let id = TemplateId(self.templates.len());
        self.template_index.insert(name.clone(), id);
        self.templates.push(LutTemplate {
            name,
            vars,
            indices,
        });
        id
    }

    pub fn add_lut_template1(
        &mut self,
        name: impl Into<String>,
        var1: VarType,
        index1: Option<Vec<f64>>,
    ) -> TemplateId {
        self.add_lut_template(name.into(), vec![var1], vec![index1])
    }

    pub fn add_lut_template2(
        &mut self,
        name: impl Into<String>,
        var1: VarType,
        index1: Option<Vec<f64>>,
        var2: VarType,
        index2: Option<Vec<f64>>,
    ) -> TemplateId {
        self.add_lut_template(name.into(), vec![var1, var2], vec![index1, index2])
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_lut_template3(
        &mut self,
        name: impl Into<String>,
        var1: VarType,
        index1: Option<Vec<f64>>,
        var2: VarType,
        index2: Option<Vec<f64>>,
        var3: VarType,
        index3: Option<Vec<f64>>,
    ) -> TemplateId {
        self.add_lut_template(
            name.into(),
            vec![var1, var2, var3],
            vec![index1, index2, index3],
        )
    }

    /// Registers a table whose `values.len()` equals the product of the axis
    /// lengths.
    pub fn new_lut(
        &mut self,
        template: Option<TemplateId>,
        vars: Vec<VarType>,
        indices: Vec<Vec<f64>>,
        values: Vec<f64>,
    ) -> LutId {
        debug_assert_eq!(
            values.len(),
            indices.iter().map(Vec::len).product::<usize>()
        );
        let id = LutId(self.luts.len());
        self.luts.push(Lut {
            template,
            vars,
            indices,
            values,
        });
        id
    }

    fn add_cell(&mut self, name: String, area: f64, kind: CellKind) -> CellId {
        let id = CellId(self.cells.len());
        self.cell_index.insert(name.clone(), id);
        self.cells.push(Cell::new(name, area, kind));
        id
    }

    pub fn add_logic_cell(&mut self, name: impl Into<String>, area: f64) -> CellId {
        self.add_cell(name.into(), area, CellKind::Logic)
    }

    pub fn add_ff_cell(&mut self, name: impl Into<String>, area: f64, ff: FfAttrs) -> CellId {
        self.add_cell(name.into(), area, CellKind::Ff(ff))
    }

    pub fn add_latch_cell(
        &mut self,
        name: impl Into<String>,
        area: f64,
        latch: LatchAttrs,
    ) -> CellId {
        self.add_cell(name.into(), area, CellKind::Latch(latch))
    }

    pub fn add_fsm_cell(&mut self, name: impl Into<String>, area: f64, fsm: FsmAttrs) -> CellId {
        self.add_cell(name.into(), area, CellKind::Fsm(fsm))
    }

    pub fn set_cell_options(
        &mut self,
        cell: CellId,
        dont_use: bool,
        dont_touch: bool,
        cell_footprint: Option<String>,
    ) {
        let cell = &mut self.cells[cell.0];
        cell.dont_use = dont_use;
        cell.dont_touch = dont_touch;
        cell.cell_footprint = cell_footprint;
    }

    /// Adds an input pin at the next input position and returns that
    /// position.
    pub fn add_input(&mut self, cell: CellId, name: impl Into<String>, caps: InputCaps) -> usize {
        let cell = &mut self.cells[cell.0];
        let input_id = cell.input_num;
        cell.input_num += 1;
        cell.pins.push(Pin {
            name: name.into(),
            direction: Direction::Input,
            input_id: Some(input_id),
            output_id: None,
            input: Some(caps),
            output: None,
        });
        input_id
    }

    /// Adds an output pin at the next output position and returns that
    /// position.
    pub fn add_output(&mut self, cell: CellId, name: impl Into<String>, attrs: OutputAttrs) -> usize {
        let cell = &mut self.cells[cell.0];
        let output_id = cell.output_num;
        cell.output_num += 1;
        cell.pins.push(Pin {
            name: name.into(),
            direction: Direction::Output,
            input_id: None,
            output_id: Some(output_id),
            input: None,
            output: Some(attrs),
        });
        output_id
    }

    /// Adds a pin occupying both an input and an output position.
    pub fn add_inout(
        &mut self,
        cell: CellId,
        name: impl Into<String>,
        caps: InputCaps,
        attrs: OutputAttrs,
    ) -> (usize, usize) {
        let cell = &mut self.cells[cell.0];
        let ids = (cell.input_num, cell.output_num);
        cell.input_num += 1;
        cell.output_num += 1;
        cell.pins.push(Pin {
            name: name.into(),
            direction: Direction::Inout,
            input_id: Some(ids.0),
            output_id: Some(ids.1),
            input: Some(caps),
            output: Some(attrs),
        });
        ids
    }

    pub fn add_internal(&mut self, cell: CellId, name: impl Into<String>) {
        self.cells[cell.0].internal_pins.push(name.into());
    }

    fn add_timing(&mut self, cell: CellId, timing: Timing) -> TimingId {
        let id = TimingId(self.timings.len());
        self.timings.push(timing);
        self.cells[cell.0].timings.push(id);
        id
    }

    pub fn add_timing_generic(
        &mut self,
        cell: CellId,
        timing_type: TimingType,
        when: Option<LogicExpr>,
        delay: GenericDelay,
    ) -> TimingId {
        self.add_timing(
            cell,
            Timing {
                timing_type,
                when,
                delay: TimingDelay::Generic(delay),
            },
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_timing_lut1(
        &mut self,
        cell: CellId,
        timing_type: TimingType,
        when: Option<LogicExpr>,
        cell_rise: Option<LutId>,
        cell_fall: Option<LutId>,
        rise_transition: Option<LutId>,
        fall_transition: Option<LutId>,
    ) -> TimingId {
        self.add_timing(
            cell,
            Timing {
                timing_type,
                when,
                delay: TimingDelay::Lut1 {
                    cell_rise,
                    cell_fall,
                    rise_transition,
                    fall_transition,
                },
            },
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_timing_lut2(
        &mut self,
        cell: CellId,
        timing_type: TimingType,
        when: Option<LogicExpr>,
        rise_transition: Option<LutId>,
        fall_transition: Option<LutId>,
        rise_propagation: Option<LutId>,
        fall_propagation: Option<LutId>,
    ) -> TimingId {
        self.add_timing(
            cell,
            Timing {
                timing_type,
                when,
                delay: TimingDelay::Lut2 {
                    rise_transition,
                    fall_transition,
                    rise_propagation,
                    fall_propagation,
                },
            },
        )
    }

    pub fn set_timing(
        &mut self,
        cell: CellId,
        ipos: usize,
        opos: usize,
        sense: TimingSense,
        timing: TimingId,
    ) {
        self.cells[cell.0].arcs.push(TimingArc {
            input_id: ipos,
            output_id: opos,
            sense,
            timing,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lut_value_is_row_major() {
        let mut lib = CellLibrary::new("l");
        let t = lib.add_lut_template2(
            "t",
            VarType::InputNetTransition,
            None,
            VarType::TotalOutputNetCapacitance,
            None,
        );
        let id = lib.new_lut(
            Some(t),
            lib.template(t).vars.clone(),
            vec![vec![0.1, 0.2], vec![1.0, 2.0, 3.0]],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        );
        let lut = lib.lut(id);
        assert_eq!(lut.dimension(), 2);
        assert_eq!(lut.value(&[0, 2]), Some(3.0));
        assert_eq!(lut.value(&[1, 0]), Some(4.0));
        assert_eq!(lut.value(&[2, 0]), None);
        assert_eq!(lut.value(&[0]), None);
    }

    #[test]
    fn test_pin_positions_follow_add_order() {
        let mut lib = CellLibrary::new("l");
        let cell = lib.add_logic_cell("MUX", 2.0);
        let caps = InputCaps {
            capacitance: 1.0,
            rise_capacitance: 1.0,
            fall_capacitance: 1.0,
        };
        assert_eq!(lib.add_input(cell, "A", caps.clone()), 0);
        assert_eq!(lib.add_input(cell, "B", caps.clone()), 1);
        assert_eq!(lib.add_output(cell, "Y", OutputAttrs::default()), 0);
        assert_eq!(
            lib.add_inout(cell, "IO", caps, OutputAttrs::default()),
            (2, 1)
        );
        lib.add_internal(cell, "n1");
        let c = lib.cell_by_name("MUX").unwrap();
        assert_eq!((c.input_num, c.output_num), (3, 2));
        assert_eq!(c.pin_by_name("IO").unwrap().direction, Direction::Inout);
        assert_eq!(c.inout_pins().count(), 1);
        assert_eq!(c.internal_pins, vec!["n1"]);
        assert!(c.pin_by_name("n1").is_none());
    }

    #[test]
    fn test_timing_arcs_by_pin_pair() {
        let mut lib = CellLibrary::new("l");
        let cell = lib.add_logic_cell("XOR2", 3.0);
        let t = lib.add_timing_lut1(cell, TimingType::Combinational, None, None, None, None, None);
        lib.set_timing(cell, 0, 0, TimingSense::PositiveUnate, t);
        lib.set_timing(cell, 0, 0, TimingSense::NegativeUnate, t);
        lib.set_timing(cell, 1, 0, TimingSense::PositiveUnate, t);
        let c = lib.cell(cell);
        assert_eq!(c.timings, vec![t]);
        assert_eq!(
            c.timing_arcs(0, 0),
            vec![
                (TimingSense::PositiveUnate, t),
                (TimingSense::NegativeUnate, t)
            ]
        );
        assert_eq!(c.timing_arcs(1, 1), vec![]);
        assert_eq!(lib.timing(t).timing_type, TimingType::Combinational);
    }
}
