// SPDX-License-Identifier: Apache-2.0

//! Closed keyword enumerations that appear as attribute values.

use serde::Serialize;
use std::fmt;

/// Declares a keyword-valued enum along with its spelling table.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $kw:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(#[serde(rename = $kw)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $kw),+
                }
            }

            pub fn from_keyword(s: &str) -> Option<Self> {
                match s {
                    $($kw => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

keyword_enum! {
    pub enum Technology {
        Cmos => "cmos",
        Fpga => "fpga",
    }
}

keyword_enum! {
    pub enum DelayModel {
        GenericCmos => "generic_cmos",
        TableLookup => "table_lookup",
        PiecewiseCmos => "piecewise_cmos",
        Cmos2 => "cmos2",
        Dcm => "dcm",
        Polynomial => "polynomial",
    }
}

keyword_enum! {
    pub enum Direction {
        Input => "input",
        Output => "output",
        Inout => "inout",
        Internal => "internal",
    }
}

keyword_enum! {
    pub enum TimingSense {
        PositiveUnate => "positive_unate",
        NegativeUnate => "negative_unate",
        NonUnate => "non_unate",
    }
}

keyword_enum! {
    pub enum TimingType {
        Combinational => "combinational",
        CombinationalRise => "combinational_rise",
        CombinationalFall => "combinational_fall",
        ThreeStateEnable => "three_state_enable",
        ThreeStateEnableRise => "three_state_enable_rise",
        ThreeStateEnableFall => "three_state_enable_fall",
        ThreeStateDisable => "three_state_disable",
        ThreeStateDisableRise => "three_state_disable_rise",
        ThreeStateDisableFall => "three_state_disable_fall",
        RisingEdge => "rising_edge",
        FallingEdge => "falling_edge",
        Preset => "preset",
        Clear => "clear",
        HoldRising => "hold_rising",
        HoldFalling => "hold_falling",
        SetupRising => "setup_rising",
        SetupFalling => "setup_falling",
        RecoveryRising => "recovery_rising",
        RecoveryFalling => "recovery_falling",
        SkewRising => "skew_rising",
        SkewFalling => "skew_falling",
        RemovalRising => "removal_rising",
        RemovalFalling => "removal_falling",
        NonSeqSetupRising => "non_seq_setup_rising",
        NonSeqSetupFalling => "non_seq_setup_falling",
        NonSeqHoldRising => "non_seq_hold_rising",
        NonSeqHoldFalling => "non_seq_hold_falling",
        NochangeHighHigh => "nochange_high_high",
        NochangeHighLow => "nochange_high_low",
        NochangeLowHigh => "nochange_low_high",
        NochangeLowLow => "nochange_low_low",
    }
}

impl TimingType {
    /// Whether arcs of this type follow the output function, as opposed to a
    /// clock edge or constraint check.
    pub fn is_combinational(self) -> bool {
        matches!(
            self,
            TimingType::Combinational
                | TimingType::CombinationalRise
                | TimingType::CombinationalFall
        )
    }
}

keyword_enum! {
    pub enum VarType {
        InputNetTransition => "input_net_transition",
        TotalOutputNetCapacitance => "total_output_net_capacitance",
        EqualOrOppositeOutputNetCapacitance => "equal_or_opposite_output_net_capacitance",
        InputTransitionTime => "input_transition_time",
        OutputNetLength => "output_net_length",
        OutputNetWireCap => "output_net_wire_cap",
        OutputNetPinCap => "output_net_pin_cap",
        RelatedOutTotalOutputNetCapacitance => "related_out_total_output_net_capacitance",
        RelatedOutOutputNetLength => "related_out_output_net_length",
        RelatedOutOutputNetWireCap => "related_out_output_net_wire_cap",
        RelatedOutOutputNetPinCap => "related_out_output_net_pin_cap",
        ConstrainedPinTransition => "constrained_pin_transition",
        RelatedPinTransition => "related_pin_transition",
    }
}

/// Value a flip-flop or latch state variable takes when clear and preset are
/// asserted together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ClearPresetVar {
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "H")]
    High,
    #[serde(rename = "N")]
    NoChange,
    #[serde(rename = "T")]
    Toggle,
    #[default]
    #[serde(rename = "X")]
    Unknown,
}

impl ClearPresetVar {
    /// Accepts a single letter, case-insensitively.
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "L" | "l" => Some(ClearPresetVar::Low),
            "H" | "h" => Some(ClearPresetVar::High),
            "N" | "n" => Some(ClearPresetVar::NoChange),
            "T" | "t" => Some(ClearPresetVar::Toggle),
            "X" | "x" => Some(ClearPresetVar::Unknown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("table_lookup", Some(DelayModel::TableLookup); "table lookup")]
    #[test_case("cmos2", Some(DelayModel::Cmos2); "cmos2")]
    #[test_case("Table_Lookup", None; "case sensitive")]
    fn test_delay_model_keyword(s: &str, want: Option<DelayModel>) {
        assert_eq!(DelayModel::from_keyword(s), want);
    }

    #[test]
    fn test_enum_sizes() {
        assert_eq!(TimingType::ALL.len(), 31);
        assert_eq!(VarType::ALL.len(), 13);
        for t in TimingType::ALL {
            assert_eq!(TimingType::from_keyword(t.as_str()), Some(*t));
        }
    }

    #[test]
    fn test_clear_preset_var() {
        assert_eq!(ClearPresetVar::from_keyword("h"), Some(ClearPresetVar::High));
        assert_eq!(ClearPresetVar::from_keyword("T"), Some(ClearPresetVar::Toggle));
        assert_eq!(ClearPresetVar::from_keyword("Q"), None);
        assert_eq!(ClearPresetVar::default(), ClearPresetVar::Unknown);
    }

    #[test]
    fn test_combinational_types() {
        assert!(TimingType::CombinationalFall.is_combinational());
        assert!(!TimingType::RisingEdge.is_combinational());
        assert!(!TimingType::ThreeStateEnable.is_combinational());
    }
}
