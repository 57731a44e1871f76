// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use xlsynth_liberty::cell_library::{CellKind, TimingDelay};
use xlsynth_liberty::logic::LogicExpr;
use xlsynth_liberty::types::{Direction, TimingSense, TimingType};
use xlsynth_liberty::{
    CellLibrary, EntryFailure, ErrorKind, LibraryError, ReadOptions, read_liberty,
    read_liberty_str,
};

const POS: TimingSense = TimingSense::PositiveUnate;
const NEG: TimingSense = TimingSense::NegativeUnate;

fn read(text: &str) -> Result<CellLibrary, LibraryError> {
    let _ = env_logger::builder().is_test(true).try_init();
    read_liberty_str(text, &ReadOptions::default())
}

fn failures(text: &str) -> Vec<EntryFailure> {
    match read(text) {
        Err(LibraryError::EntriesFailed(failures)) => failures,
        Err(other) => panic!("unexpected error: {}", other),
        Ok(lib) => panic!("library '{}' read without errors", lib.name),
    }
}

#[test]
fn test_inverter() {
    let lib = read(
        r#"library (demo) {
  cell (INV) {
    area: 1.0;
    pin (A) { direction: input; capacitance: 1.0; }
    pin (Y) { direction: output; function: "A'"; }
  }
}"#,
    )
    .unwrap();
    let cell = lib.cell_by_name("INV").unwrap();
    assert_eq!(cell.area, 1.0);
    assert_eq!(cell.kind, CellKind::Logic);
    assert_eq!(cell.input_num, 1);
    assert_eq!(cell.output_num, 1);

    let a = cell.pin_by_name("A").unwrap();
    assert_eq!(a.direction, Direction::Input);
    assert_eq!(a.input_id, Some(0));

    let y = cell.pin_by_name("Y").unwrap();
    let function = y.output.as_ref().unwrap().function.as_ref().unwrap();
    assert_eq!(function.eval(&[false]), Some(true));
    assert_eq!(function.eval(&[true]), Some(false));
}

#[test]
fn test_cell_rise_with_rise_propagation_fails() {
    let failures = failures(
        r#"library (demo) {
  delay_model : table_lookup ;
  cell (INV) {
    area : 1.0 ;
    pin (A) { direction : input ; capacitance : 1.0 ; }
    pin (Y) {
      direction : output ;
      function : "A'" ;
      timing () {
        related_pin : "A" ;
        cell_rise (scalar) { values ("0.1") ; }
        rise_propagation (scalar) { values ("0.1") ; }
        rise_transition (scalar) { values ("0.1") ; }
      }
    }
  }
}"#,
    );
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].keyword, "cell");
    assert_eq!(failures[0].name.as_deref(), Some("INV"));
    assert_eq!(
        failures[0].error.kind,
        ErrorKind::MutuallyExclusiveAttributesPresent
    );
    assert_eq!(failures[0].error.loc.line, 12);
}

#[test]
fn test_unresolved_related_pin() {
    let failures = failures(
        r#"library (demo) {
  cell (BUF) {
    area : 1 ;
    pin (A) { direction : input ; capacitance : 1 ; }
    pin (Y) {
      direction : output ;
      function : "A" ;
      timing () {
        related_pin : "B" ;
        intrinsic_rise : 0.1 ; intrinsic_fall : 0.1 ;
        slope_rise : 0 ; slope_fall : 0 ;
        rise_resistance : 1 ; fall_resistance : 1 ;
      }
    }
  }
}"#,
    );
    assert_eq!(failures.len(), 1);
    let error = &failures[0].error;
    assert_eq!(error.kind, ErrorKind::UnresolvedPinReference);
    assert_eq!(error.message, "related_pin: No such pin-name 'B'");
    assert_eq!((error.loc.line, error.loc.col), (8, 7));
}

const DFF: &str = r#"library (seq) {
  cell (DFF) {
    area : 5 ;
    ff (IQ, IQN) { clocked_on : "CLK" ; next_state : "D" ; }
    pin (CLK) { direction : input ; capacitance : 1 ; }
    pin (D) { direction : input ; capacitance : 1 ; }
    pin (Q) {
      direction : output ;
      function : "IQ" ;
      timing () {
        related_pin : "CLK" ;
        timing_type : rising_edge ;
        intrinsic_rise : 0.2 ; intrinsic_fall : 0.3 ;
        slope_rise : 0 ; slope_fall : 0 ;
        rise_resistance : 1 ; fall_resistance : 1 ;
      }
    }
    pin (QN) { direction : output ; function : "IQN" ; }
  }
}"#;

#[test]
fn test_flip_flop_state_variables() {
    let lib = read(DFF).unwrap();
    let cell = lib.cell_by_name("DFF").unwrap();
    assert!(cell.is_sequential());
    match &cell.kind {
        CellKind::Ff(ff) => {
            assert_eq!(ff.var1, "IQ");
            assert_eq!(ff.var2, "IQN");
            assert_eq!(ff.clocked_on, LogicExpr::posi_literal(0));
            assert_eq!(ff.next_state, LogicExpr::posi_literal(1));
            assert_eq!(ff.clear, None);
        }
        other => panic!("unexpected kind: {:?}", other),
    }
    // IQ and IQN follow the two physical inputs.
    let function = |name: &str| {
        cell.pin_by_name(name)
            .and_then(|p| p.output.as_ref())
            .and_then(|o| o.function.clone())
    };
    assert_eq!(function("Q"), Some(LogicExpr::posi_literal(2)));
    assert_eq!(function("QN"), Some(LogicExpr::posi_literal(3)));
    assert_eq!(cell.input_num, 2);
}

#[test]
fn test_clock_edge_arc_has_both_senses() {
    let lib = read(DFF).unwrap();
    let cell = lib.cell_by_name("DFF").unwrap();
    let arcs = cell.timing_arcs(0, 0);
    let senses: Vec<TimingSense> = arcs.iter().map(|(s, _)| *s).collect();
    assert_eq!(senses, vec![POS, NEG]);
    let timing = lib.timing(arcs[0].1);
    assert_eq!(timing.timing_type, TimingType::RisingEdge);
    match &timing.delay {
        TimingDelay::Generic(d) => {
            assert_eq!(d.intrinsic_rise, 0.2);
            assert_eq!(d.intrinsic_fall, 0.3);
        }
        other => panic!("unexpected delay: {:?}", other),
    }
    assert!(cell.timing_arcs(1, 0).is_empty());
}

#[test]
fn test_ff_and_latch_are_exclusive() {
    let failures = failures(
        r#"library (seq) {
  cell (X) {
    area : 5 ;
    ff (IQ, IQN) { clocked_on : "CLK" ; next_state : "CLK" ; }
    latch (IQ, IQN) { enable : "CLK" ; }
    pin (CLK) { direction : input ; capacitance : 1 ; }
  }
}"#,
    );
    assert_eq!(failures.len(), 1);
    assert_eq!(
        failures[0].error.kind,
        ErrorKind::MutuallyExclusiveAttributesPresent
    );
}

#[test]
fn test_every_failed_entry_is_reported() {
    let failures = failures(
        r#"library (l) {
  lu_table_template (empty) { }
  cell (GOOD1) { area : 1 ; pin (A) { direction : input ; capacitance : 1 ; } }
  cell (BAD1) { pin (A) { direction : input ; capacitance : 1 ; } }
  cell (GOOD2) { area : 1 ; pin (A) { direction : input ; capacitance : 1 ; } }
  cell (BAD2) { area : 1 ; pin (Y) { direction : output ; function : "Q" ; } }
}"#,
    );
    let summary: Vec<(&str, Option<&str>, ErrorKind, usize)> = failures
        .iter()
        .map(|f| {
            (
                f.keyword.as_str(),
                f.name.as_deref(),
                f.error.kind,
                f.error.loc.line,
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (
                "lu_table_template",
                Some("empty"),
                ErrorKind::MissingRequiredAttribute,
                2
            ),
            ("cell", Some("BAD1"), ErrorKind::MissingRequiredAttribute, 4),
            ("cell", Some("BAD2"), ErrorKind::UnresolvedPinReference, 6),
        ]
    );
}

#[test]
fn test_library_attribute_errors_do_not_stop_cells() {
    let failures = failures(
        r#"library (l) {
  delay_model : table_lookup ;
  time_unit : "1ns" ; time_unit : "1ps" ;
  cell (BAD1) { pin (A) { direction : input ; capacitance : 1 ; } }
  cell (BAD2) { area : x ; pin (A) { direction : input ; capacitance : 1 ; } }
  cell (GOOD) { area : 1 ; pin (A) { direction : input ; capacitance : 1 ; } }
}"#,
    );
    let entries: Vec<(&str, Option<&str>, usize)> = failures
        .iter()
        .map(|f| (f.keyword.as_str(), f.name.as_deref(), f.error.loc.line))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("library", Some("l"), 3),
            ("cell", Some("BAD1"), 4),
            ("cell", Some("BAD2"), 5),
        ]
    );
    assert_eq!(
        failures[0].error.kind,
        ErrorKind::AttributeCardinalityViolation
    );
    assert_eq!(failures[1].error.kind, ErrorKind::MissingRequiredAttribute);
}

#[test]
fn test_pins_are_numbered_by_direction() {
    let lib = read(
        r#"library (l) {
  cell (C) {
    area : 1 ;
    pin (Y) { direction : output ; function : "A & B" ; }
    pin (IO) { direction : inout ; capacitance : 1 ; three_state : "B" ; }
    pin (B) { direction : input ; capacitance : 1 ; }
    pin (A) { direction : input ; capacitance : 1 ; }
  }
}"#,
    )
    .unwrap();
    let cell = lib.cell_by_name("C").unwrap();
    let pins: Vec<(&str, Option<usize>, Option<usize>)> = cell
        .pins
        .iter()
        .map(|p| (p.name.as_str(), p.input_id, p.output_id))
        .collect();
    assert_eq!(
        pins,
        vec![
            ("B", Some(0), None),
            ("A", Some(1), None),
            ("Y", None, Some(0)),
            ("IO", Some(2), Some(1)),
        ]
    );
    assert_eq!(cell.input_pins().count(), 2);
    assert_eq!(cell.inout_pins().count(), 1);
    let io = cell.pin_by_name("IO").unwrap();
    assert_eq!(
        io.output.as_ref().unwrap().three_state,
        Some(LogicExpr::posi_literal(0))
    );
}

const NAND2: &str = r#"library (demo) {
  delay_model : table_lookup ;
  cell (NAND2) {
    area : 2 ;
    pin (A) { direction : input ; capacitance : 0.01 ; }
    pin (B) { direction : input ; capacitance : 0.012 ; }
    pin (Y) {
      direction : output ;
      function : "!(A & B)" ;
      timing () {
        related_pin : "A" ;
        cell_rise (delay_2x2) { values ("0.1, 0.2", "0.3, 0.4") ; }
        rise_transition (delay_2x2) { values ("0.01, 0.02", "0.03, 0.04") ; }
      }
      timing () {
        related_pin : "B" ;
        cell_fall (scalar) { values ("0.5") ; }
        fall_transition (scalar) { values ("0.05") ; }
      }
    }
  }
  lu_table_template (delay_2x2) {
    variable_1 : input_net_transition ;
    variable_2 : total_output_net_capacitance ;
    index_1 ("0.1, 0.2") ;
    index_2 ("0.01, 0.02") ;
  }
}"#;

#[test]
fn test_lookup_tables() {
    let lib = read(NAND2).unwrap();
    assert_eq!(lib.templates().len(), 1);
    assert_eq!(lib.lut_num(), 4);
    assert_eq!(lib.timing_num(), 2);

    let cell = lib.cell_by_name("NAND2").unwrap();
    let arcs_a = cell.timing_arcs(0, 0);
    let arcs_b = cell.timing_arcs(1, 0);
    assert_eq!(arcs_a.len(), 1);
    assert_eq!(arcs_a[0].0, NEG);
    assert_eq!(arcs_b.len(), 1);
    assert_eq!(arcs_b[0].0, NEG);

    match &lib.timing(arcs_a[0].1).delay {
        TimingDelay::Lut1 {
            cell_rise: Some(cell_rise),
            cell_fall: None,
            rise_transition: Some(_),
            fall_transition: None,
        } => {
            let lut = lib.lut(*cell_rise);
            assert_eq!(lut.template, lib.template_by_name("delay_2x2"));
            assert_eq!(lut.indices, vec![vec![0.1, 0.2], vec![0.01, 0.02]]);
            assert_eq!(lut.value(&[1, 0]), Some(0.3));
            assert_eq!(lut.value(&[2, 0]), None);
        }
        other => panic!("unexpected delay: {:?}", other),
    }
    match &lib.timing(arcs_b[0].1).delay {
        TimingDelay::Lut1 {
            cell_fall: Some(cell_fall),
            ..
        } => {
            let lut = lib.lut(*cell_fall);
            assert_eq!(lut.template, None);
            assert_eq!(lut.dimension(), 0);
            assert_eq!(lut.value(&[]), Some(0.5));
        }
        other => panic!("unexpected delay: {:?}", other),
    }
}

#[test]
fn test_unknown_template_reference() {
    let failures = failures(
        r#"library (demo) {
  delay_model : table_lookup ;
  cell (BUF) {
    area : 1 ;
    pin (A) { direction : input ; capacitance : 1 ; }
    pin (Y) {
      direction : output ;
      timing () {
        related_pin : "A" ;
        cell_rise (missing) { values ("0.1") ; }
        rise_transition (scalar) { values ("0.1") ; }
      }
    }
  }
}"#,
    );
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].error.kind, ErrorKind::UnknownTemplateReference);
    assert_eq!(failures[0].error.message, "missing: No such lu_table template");
    assert_eq!(failures[0].error.loc.line, 10);
}

#[test]
fn test_unknown_keywords_are_skipped() {
    let plain = read(NAND2).unwrap();
    let noisy_text = NAND2
        .replace(
            "  delay_model : table_lookup ;\n",
            "  delay_model : table_lookup ;\n  vendor_flag : 3 ;\n  vendor_block (x) { depth : 1 ; nested { a : b ; } }\n",
        )
        .replace(
            "    area : 2 ;\n",
            "    area : 2 ;\n    vendor_cell_note : \"hello\" ;\n",
        );
    let noisy = read(&noisy_text).unwrap();
    assert_eq!(
        serde_json::to_value(&plain).unwrap(),
        serde_json::to_value(&noisy).unwrap()
    );

    let strict = ReadOptions {
        strict_unknown_keywords: true,
        ..ReadOptions::default()
    };
    let err = read_liberty_str(&noisy_text, &strict).unwrap_err();
    assert!(!err.entry_failures().is_empty(), "{}", err);
}

#[test]
fn test_missing_semicolon_option() {
    let text = "library (l) {\n  cell (C) {\n    area : 1\n    pin (A) { direction : input ; capacitance : 1 ; }\n  }\n}";
    assert_eq!(failures(text).len(), 1);
    let lenient = ReadOptions {
        allow_no_semi: true,
        ..ReadOptions::default()
    };
    let lib = read_liberty_str(text, &lenient).unwrap();
    assert_eq!(lib.cell_by_name("C").unwrap().area, 1.0);
}

#[test]
fn test_missing_library_keyword() {
    match read("cell (C) { area : 1 ; }") {
        Err(LibraryError::MissingLibrary { loc, .. }) => assert_eq!(loc.line, 1),
        other => panic!("unexpected result: {:?}", other.map(|l| l.name)),
    }
}

#[test]
fn test_read_gzipped_file() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut file = tempfile::Builder::new()
        .suffix(".lib.gz")
        .tempfile()
        .unwrap();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(NAND2.as_bytes()).unwrap();
    file.write_all(&encoder.finish().unwrap()).unwrap();
    file.flush().unwrap();

    let lib = read_liberty(file.path(), &ReadOptions::default()).unwrap();
    assert_eq!(lib.name, "demo");
    assert!(lib.cell_by_name("NAND2").is_some());
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_liberty(&dir.path().join("none.lib"), &ReadOptions::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("none.lib"));
}
