// SPDX-License-Identifier: Apache-2.0

//! Closed registry of the Liberty keywords this reader understands.
//!
//! Every attribute and group keyword that appears in a dispatch table in
//! [`crate::handler`] has exactly one [`AttrType`]. Keywords outside this set
//! are reported by [`AttrType::from_keyword`] as `None` and are skipped by the
//! parser.

use ahash::AHashMap;
use once_cell::sync::Lazy;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttrType {
    Area,
    AreaCoefficient,
    AuxiliaryPadCell,
    AverageNumberOfFaults,
    BaseCurveType,
    BaseCurves,
    BaseCurvesGroup,
    BaseName,
    BaseType,
    BitFrom,
    BitTo,
    BitWidth,
    Bundle,
    Bus,
    BusNamingStyle,
    BusType,
    CalcMode,
    Capacitance,
    CapacitanceUnit,
    CapacitiveLoadUnit,
    CcsnFirstStage,
    CcsnLastStage,
    Cell,
    CellDegradation,
    CellFall,
    CellFootprint,
    CellLeakagePower,
    CellName,
    CellRise,
    Clear,
    ClearPresetVar1,
    ClearPresetVar2,
    Clock,
    ClockGateClockPin,
    ClockGateEnablePin,
    ClockGateObsPin,
    ClockGateOutPin,
    ClockGateTestPin,
    ClockGatingFlag,
    ClockGatingIntegratedCell,
    ClockPin,
    ClockedOn,
    ClockedOnAlso,
    Coefs,
    Comment,
    CompactCcsFall,
    CompactCcsRise,
    CompactLutTemplate,
    ComplementaryPin,
    ConnectionClass,
    Constraint,
    ConstraintHigh,
    ConstraintLow,
    ContentionCondition,
    CurrentUnit,
    CurveX,
    CurveY,
    DataIn,
    DataType,
    Date,
    DcCurrent,
    DcCurrentTemplate,
    DefaultCellLeakagePower,
    DefaultConnectionClass,
    DefaultFallDelayIntercept,
    DefaultFallPinResistance,
    DefaultFanoutLoad,
    DefaultFpgaIsd,
    DefaultInoutPinCap,
    DefaultInoutPinFallRes,
    DefaultInoutPinRiseRes,
    DefaultInputPinCap,
    DefaultIntrinsicFall,
    DefaultIntrinsicRise,
    DefaultLeakagePowerDensity,
    DefaultMaxCapacitance,
    DefaultMaxFanout,
    DefaultMaxTransition,
    DefaultMaxUtilization,
    DefaultMinPorosity,
    DefaultOperatingConditions,
    DefaultOutputPinCap,
    DefaultOutputPinFallRes,
    DefaultOutputPinRiseRes,
    DefaultPart,
    DefaultPowerRail,
    DefaultRiseDelayIntercept,
    DefaultRisePinResistance,
    DefaultSlopeFall,
    DefaultSlopeRise,
    DefaultStepLevel,
    DefaultTiming,
    DefaultWireLoad,
    DefaultWireLoadArea,
    DefaultWireLoadCapacitance,
    DefaultWireLoadMode,
    DefaultWireLoadResistance,
    DefaultWireLoadSelection,
    Define,
    DefineCellArea,
    DefineGroup,
    DelayModel,
    Direction,
    DividedBy,
    Domain,
    DontFault,
    DontTouch,
    DontUse,
    Downto,
    Drive,
    DriveCurrent,
    DriverType,
    DutyCycle,
    DynamicCurrent,
    EdgeType,
    Edges,
    EdifName,
    Electromigration,
    EmLutTemplate,
    EmMaxToggleRate,
    EmTempDegradationFactor,
    Enable,
    EnableAlso,
    EqualOrOppositeOutput,
    FallCapacitance,
    FallCapacitanceRange,
    FallConstraint,
    FallCurrentSlopeAfterThreshold,
    FallCurrentSlopeBeforeThreshold,
    FallDelayIntercept,
    FallNetDelay,
    FallPinResistance,
    FallPower,
    FallPropagation,
    FallResistance,
    FallTimeAfterThreshold,
    FallTimeBeforeThreshold,
    FallTransition,
    FallTransitionDegradation,
    FallingTogetherGroup,
    FanoutArea,
    FanoutCapacitance,
    FanoutLength,
    FanoutLoad,
    FanoutResistance,
    FasterFactor,
    FaultModel,
    FaultsLutTemplate,
    Ff,
    FfBank,
    FpgaArcCondition,
    FpgaCellType,
    FpgaCondition,
    FpgaConditionValue,
    FpgaDomainStyle,
    FpgaIsd,
    FpgaTechnology,
    Function,
    FunctionalYieldMetric,
    GateLeakage,
    GeneratedClock,
    GeometryPrint,
    HandleNegativeConstraint,
    HasBuiltinPad,
    HeightCoefficient,
    HyperbolicNoiseAboveHigh,
    HyperbolicNoiseBelowLow,
    HyperbolicNoiseHigh,
    HyperbolicNoiseLow,
    Hysteresis,
    InPlaceSwapMode,
    Index1,
    Index2,
    Index3,
    Index4,
    IndexOutput,
    InputHighValue,
    InputLowValue,
    InputMap,
    InputPins,
    InputSignalLevel,
    InputSwitchingCondition,
    InputThresholdPctFall,
    InputThresholdPctRise,
    InputVoltage,
    InputVoltageRange,
    InterdependenceId,
    InterfaceTiming,
    InternalNode,
    InternalPower,
    IntrinsicCapacitance,
    IntrinsicFall,
    IntrinsicParasitic,
    IntrinsicResistance,
    IntrinsicRise,
    Invert,
    InvertedOutput,
    IoType,
    IsClockGatingCell,
    IsInverting,
    IsIsolationCell,
    IsLevelShifter,
    IsNeeded,
    IsPad,
    IsolationCellEnablePin,
    IvLutTemplate,
    KProcessCellFall,
    KProcessCellLeakagePower,
    KProcessCellRise,
    KProcessDriveCurrent,
    KProcessDriveFall,
    KProcessDriveRise,
    KProcessFallDelayIntercept,
    KProcessFallPinResistance,
    KProcessFallPropagation,
    KProcessFallTransition,
    KProcessHoldFall,
    KProcessHoldRise,
    KProcessInternalPower,
    KProcessIntrinsicFall,
    KProcessIntrinsicRise,
    KProcessMinPeriod,
    KProcessMinPulseWidthHigh,
    KProcessMinPulseWidthLow,
    KProcessNochangeFall,
    KProcessNochangeRise,
    KProcessPinCap,
    KProcessRecoveryFall,
    KProcessRecoveryRise,
    KProcessRemovalFall,
    KProcessRemovalRise,
    KProcessRiseDelayIntercept,
    KProcessRisePinResistance,
    KProcessRisePropagation,
    KProcessRiseTransition,
    KProcessSetupFall,
    KProcessSetupRise,
    KProcessSkewFall,
    KProcessSkewRise,
    KProcessSlopeFall,
    KProcessSlopeRise,
    KProcessWireCap,
    KProcessWireRes,
    KTempCellFall,
    KTempCellLeakagePower,
    KTempCellRise,
    KTempDriveCurrent,
    KTempDriveFall,
    KTempDriveRise,
    KTempFallDelayIntercept,
    KTempFallPinResistance,
    KTempFallPropagation,
    KTempFallTransition,
    KTempHoldFall,
    KTempHoldRise,
    KTempInternalPower,
    KTempIntrinsicFall,
    KTempIntrinsicRise,
    KTempMinPeriod,
    KTempMinPulseWidthHigh,
    KTempMinPulseWidthLow,
    KTempNochangeFall,
    KTempNochangeRise,
    KTempPinCap,
    KTempRecoveryFall,
    KTempRecoveryRise,
    KTempRemovalFall,
    KTempRemovalRise,
    KTempRiseDelayIntercept,
    KTempRisePinResistance,
    KTempRisePropagation,
    KTempRiseTransition,
    KTempSetupFall,
    KTempSetupRise,
    KTempSkewFall,
    KTempSkewRise,
    KTempSlopeFall,
    KTempSlopeRise,
    KTempWireCap,
    KTempWireRes,
    KVoltCellFall,
    KVoltCellLeakagePower,
    KVoltCellRise,
    KVoltDriveCurrent,
    KVoltDriveFall,
    KVoltDriveRise,
    KVoltFallDelayIntercept,
    KVoltFallPinResistance,
    KVoltFallPropagation,
    KVoltFallTransition,
    KVoltHoldFall,
    KVoltHoldRise,
    KVoltInternalPower,
    KVoltIntrinsicFall,
    KVoltIntrinsicRise,
    KVoltMinPeriod,
    KVoltMinPulseWidthHigh,
    KVoltMinPulseWidthLow,
    KVoltNochangeFall,
    KVoltNochangeRise,
    KVoltPinCap,
    KVoltRecoveryFall,
    KVoltRecoveryRise,
    KVoltRemovalFall,
    KVoltRemovalRise,
    KVoltRiseDelayIntercept,
    KVoltRisePinResistance,
    KVoltRisePropagation,
    KVoltRiseTransition,
    KVoltSetupFall,
    KVoltSetupRise,
    KVoltSkewFall,
    KVoltSkewRise,
    KVoltSlopeFall,
    KVoltSlopeRise,
    KVoltWireCap,
    KVoltWireRes,
    Latch,
    LatchBank,
    LeakageCurrent,
    LeakagePower,
    LeakagePowerUnit,
    LevelShifterEnablePin,
    LevelShifterType,
    Library,
    LibraryFeatures,
    Lower,
    LuTableTemplate,
    Lut,
    MapOnly,
    MapToLogic,
    Mapping,
    MasterPin,
    MaxCap,
    MaxCapacitance,
    MaxCount,
    MaxFanout,
    MaxInputNoiseWidth,
    MaxInputSwitchingCount,
    MaxTrans,
    MaxTransition,
    MaxcapLutTemplate,
    MaxtransLutTemplate,
    Members,
    MillerCapFall,
    MillerCapRise,
    MinCapacitance,
    MinFanout,
    MinInputNoiseWidth,
    MinInputSwitchingCount,
    MinPeriod,
    MinPulseWidth,
    MinPulseWidthHigh,
    MinPulseWidthLow,
    MinTransition,
    MinimumPeriod,
    Mode,
    ModeDefinition,
    ModeValue,
    Model,
    MulticellPadPin,
    MultipliedBy,
    NextState,
    NextstateType,
    NoiseImmunityAboveHigh,
    NoiseImmunityBelowLow,
    NoiseImmunityHigh,
    NoiseImmunityLow,
    NoiseLutTemplate,
    NomCalcMode,
    NomProcess,
    NomTemperature,
    NomVoltage,
    NumBlockrams,
    NumCols,
    NumFfs,
    NumLuts,
    NumRows,
    OperatingConditions,
    Orders,
    OutputCurrentFall,
    OutputCurrentRise,
    OutputCurrentTemplate,
    OutputSignalLevel,
    OutputSwitchingCondition,
    OutputThresholdPctFall,
    OutputThresholdPctRise,
    OutputVoltage,
    OutputVoltageFall,
    OutputVoltageRange,
    OutputVoltageRise,
    PadCell,
    PadType,
    Parameter1,
    Parameter2,
    Parameter3,
    Parameter4,
    Parameter5,
    Part,
    PgCurrent,
    PgFunction,
    PgPin,
    PgType,
    PieceDefine,
    PieceType,
    Pin,
    PinCapacitance,
    PinCount,
    PinEqual,
    PinFuncType,
    PinNameMap,
    PinNames,
    PinOpposite,
    PolyTemplate,
    Power,
    PowerCellType,
    PowerDownFunction,
    PowerGatingCell,
    PowerGatingPin,
    PowerLevel,
    PowerLutTemplate,
    PowerModel,
    PowerPolyTemplate,
    PowerRail,
    PowerSupply,
    PowerUnit,
    PreferTied,
    Preferred,
    PreferredInputPadVoltage,
    PreferredOutputPadSlewRateControl,
    PreferredOutputPadVoltage,
    Preset,
    PrimaryOutput,
    Process,
    PropagatedNoiseHeightAboveHigh,
    PropagatedNoiseHeightBelowLow,
    PropagatedNoiseHeightHigh,
    PropagatedNoiseHeightLow,
    PropagatedNoiseHigh,
    PropagatedNoiseLow,
    PropagatedNoisePeakTimeRatioAboveHigh,
    PropagatedNoisePeakTimeRatioBelowLow,
    PropagatedNoisePeakTimeRatioHigh,
    PropagatedNoisePeakTimeRatioLow,
    PropagatedNoiseWidthAboveHigh,
    PropagatedNoiseWidthBelowLow,
    PropagatedNoiseWidthHigh,
    PropagatedNoiseWidthLow,
    PropagationLutTemplate,
    PullingCurrent,
    PullingResistance,
    PullingResistanceUnit,
    PulseClock,
    RailConnection,
    ReceiverCapacitance1Fall,
    ReceiverCapacitance1Rise,
    ReceiverCapacitance2Fall,
    ReceiverCapacitance2Rise,
    ReferenceTime,
    RelatedBusEquivalent,
    RelatedBusPins,
    RelatedGroundPin,
    RelatedInputs,
    RelatedOutput,
    RelatedOutputPin,
    RelatedOutputs,
    RelatedPgPin,
    RelatedPin,
    RelatedPowerPin,
    Resistance,
    ResistanceUnit,
    ResourceUsage,
    RetainFallSlew,
    RetainRiseSlew,
    RetainingFall,
    RetainingRise,
    Revision,
    RiseCapacitance,
    RiseCapacitanceRange,
    RiseConstraint,
    RiseCurrentSlopeAfterThreshold,
    RiseCurrentSlopeBeforeThreshold,
    RiseDelayIntercept,
    RiseNetDelay,
    RisePinResistance,
    RisePower,
    RisePropagation,
    RiseResistance,
    RiseTimeAfterThreshold,
    RiseTimeBeforeThreshold,
    RiseTransition,
    RiseTransitionDegradation,
    RisingTogetherGroup,
    RoutingLayers,
    RoutingTrack,
    ScaledCell,
    ScalingFactors,
    SdfCond,
    SdfCondEnd,
    SdfCondStart,
    SdfEdges,
    Sensitization,
    SensitizationMaster,
    Shifts,
    Short,
    SignalType,
    Simulation,
    SingleBitDegenerate,
    Slew,
    SlewControl,
    SlewDerateFromLibrary,
    SlewLowerThresholdPctFall,
    SlewLowerThresholdPctRise,
    SlewType,
    SlewUpperThresholdPctFall,
    SlewUpperThresholdPctRise,
    Slope,
    SlopeFall,
    SlopeRise,
    SlowerFactor,
    SpeedGrade,
    StageType,
    StateFunction,
    Statetable,
    StdCellMainRail,
    SteadyStateCurrentHigh,
    SteadyStateCurrentLow,
    SteadyStateCurrentTristate,
    SteadyStateResistanceAboveHigh,
    SteadyStateResistanceBelowLow,
    SteadyStateResistanceHigh,
    SteadyStateResistanceLow,
    StepLevel,
    SwitchCellType,
    SwitchFunction,
    SwitchPin,
    SwitchingGroup,
    SwitchingInterval,
    SwitchingTogetherGroup,
    Table,
    Tdisable,
    Technology,
    Temperature,
    TestCell,
    TestOutputOnly,
    ThreeState,
    ThresholdVoltageGroup,
    TiedOff,
    TimeUnit,
    Timing,
    TimingModelType,
    TimingRange,
    TimingSense,
    TimingType,
    Tlatch,
    TotalCapacitance,
    TotalTrackArea,
    Tracks,
    TreeType,
    Type,
    TypicalCapacitances,
    Upper,
    UseForSizeOnly,
    ValidSpeedGrade,
    ValidStepLevels,
    Value,
    Values,
    Variable1,
    Variable1Range,
    Variable2,
    Variable2Range,
    Variable3,
    Variable3Range,
    VariableNRange,
    Variables,
    Vector,
    VhdlName,
    Vih,
    Vil,
    Vimax,
    Vimin,
    Voh,
    Vol,
    Voltage,
    VoltageName,
    VoltageUnit,
    Vomax,
    Vomin,
    WaveFall,
    WaveFallSamplingIndex,
    WaveFallTimeInterval,
    WaveRise,
    WaveRiseSamplingIndex,
    WaveRiseTimeInterval,
    When,
    WhenEnd,
    WhenStart,
    WidthCoefficient,
    WireLoad,
    WireLoadFromArea,
    WireLoadSelection,
    WireLoadTable,
    XFunction,
}

/// Keyword spellings, indexed by discriminant.
const KEYWORDS: &[(AttrType, &str)] = &[
    (AttrType::Area, "area"),
    (AttrType::AreaCoefficient, "area_coefficient"),
    (AttrType::AuxiliaryPadCell, "auxiliary_pad_cell"),
    (AttrType::AverageNumberOfFaults, "average_number_of_faults"),
    (AttrType::BaseCurveType, "base_curve_type"),
    (AttrType::BaseCurves, "base_curves"),
    (AttrType::BaseCurvesGroup, "base_curves_group"),
    (AttrType::BaseName, "base_name"),
    (AttrType::BaseType, "base_type"),
    (AttrType::BitFrom, "bit_from"),
    (AttrType::BitTo, "bit_to"),
    (AttrType::BitWidth, "bit_width"),
    (AttrType::Bundle, "bundle"),
    (AttrType::Bus, "bus"),
    (AttrType::BusNamingStyle, "bus_naming_style"),
    (AttrType::BusType, "bus_type"),
    (AttrType::CalcMode, "calc_mode"),
    (AttrType::Capacitance, "capacitance"),
    (AttrType::CapacitanceUnit, "capacitance_unit"),
    (AttrType::CapacitiveLoadUnit, "capacitive_load_unit"),
    (AttrType::CcsnFirstStage, "ccsn_first_stage"),
    (AttrType::CcsnLastStage, "ccsn_last_stage"),
    (AttrType::Cell, "cell"),
    (AttrType::CellDegradation, "cell_degradation"),
    (AttrType::CellFall, "cell_fall"),
    (AttrType::CellFootprint, "cell_footprint"),
    (AttrType::CellLeakagePower, "cell_leakage_power"),
    (AttrType::CellName, "cell_name"),
    (AttrType::CellRise, "cell_rise"),
    (AttrType::Clear, "clear"),
    (AttrType::ClearPresetVar1, "clear_preset_var1"),
    (AttrType::ClearPresetVar2, "clear_preset_var2"),
    (AttrType::Clock, "clock"),
    (AttrType::ClockGateClockPin, "clock_gate_clock_pin"),
    (AttrType::ClockGateEnablePin, "clock_gate_enable_pin"),
    (AttrType::ClockGateObsPin, "clock_gate_obs_pin"),
    (AttrType::ClockGateOutPin, "clock_gate_out_pin"),
    (AttrType::ClockGateTestPin, "clock_gate_test_pin"),
    (AttrType::ClockGatingFlag, "clock_gating_flag"),
    (AttrType::ClockGatingIntegratedCell, "clock_gating_integrated_cell"),
    (AttrType::ClockPin, "clock_pin"),
    (AttrType::ClockedOn, "clocked_on"),
    (AttrType::ClockedOnAlso, "clocked_on_also"),
    (AttrType::Coefs, "coefs"),
    (AttrType::Comment, "comment"),
    (AttrType::CompactCcsFall, "compact_ccs_fall"),
    (AttrType::CompactCcsRise, "compact_ccs_rise"),
    (AttrType::CompactLutTemplate, "compact_lut_template"),
    (AttrType::ComplementaryPin, "complementary_pin"),
    (AttrType::ConnectionClass, "connection_class"),
    (AttrType::Constraint, "constraint"),
    (AttrType::ConstraintHigh, "constraint_high"),
    (AttrType::ConstraintLow, "constraint_low"),
    (AttrType::ContentionCondition, "contention_condition"),
    (AttrType::CurrentUnit, "current_unit"),
    (AttrType::CurveX, "curve_x"),
    (AttrType::CurveY, "curve_y"),
    (AttrType::DataIn, "data_in"),
    (AttrType::DataType, "data_type"),
    (AttrType::Date, "date"),
    (AttrType::DcCurrent, "dc_current"),
    (AttrType::DcCurrentTemplate, "dc_current_template"),
    (AttrType::DefaultCellLeakagePower, "default_cell_leakage_power"),
    (AttrType::DefaultConnectionClass, "default_connection_class"),
    (AttrType::DefaultFallDelayIntercept, "default_fall_delay_intercept"),
    (AttrType::DefaultFallPinResistance, "default_fall_pin_resistance"),
    (AttrType::DefaultFanoutLoad, "default_fanout_load"),
    (AttrType::DefaultFpgaIsd, "default_fpga_isd"),
    (AttrType::DefaultInoutPinCap, "default_inout_pin_cap"),
    (AttrType::DefaultInoutPinFallRes, "default_inout_pin_fall_res"),
    (AttrType::DefaultInoutPinRiseRes, "default_inout_pin_rise_res"),
    (AttrType::DefaultInputPinCap, "default_input_pin_cap"),
    (AttrType::DefaultIntrinsicFall, "default_intrinsic_fall"),
    (AttrType::DefaultIntrinsicRise, "default_intrinsic_rise"),
    (AttrType::DefaultLeakagePowerDensity, "default_leakage_power_density"),
    (AttrType::DefaultMaxCapacitance, "default_max_capacitance"),
    (AttrType::DefaultMaxFanout, "default_max_fanout"),
    (AttrType::DefaultMaxTransition, "default_max_transition"),
    (AttrType::DefaultMaxUtilization, "default_max_utilization"),
    (AttrType::DefaultMinPorosity, "default_min_porosity"),
    (AttrType::DefaultOperatingConditions, "default_operating_conditions"),
    (AttrType::DefaultOutputPinCap, "default_output_pin_cap"),
    (AttrType::DefaultOutputPinFallRes, "default_output_pin_fall_res"),
    (AttrType::DefaultOutputPinRiseRes, "default_output_pin_rise_res"),
    (AttrType::DefaultPart, "default_part"),
    (AttrType::DefaultPowerRail, "default_power_rail"),
    (AttrType::DefaultRiseDelayIntercept, "default_rise_delay_intercept"),
    (AttrType::DefaultRisePinResistance, "default_rise_pin_resistance"),
    (AttrType::DefaultSlopeFall, "default_slope_fall"),
    (AttrType::DefaultSlopeRise, "default_slope_rise"),
    (AttrType::DefaultStepLevel, "default_step_level"),
    (AttrType::DefaultTiming, "default_timing"),
    (AttrType::DefaultWireLoad, "default_wire_load"),
    (AttrType::DefaultWireLoadArea, "default_wire_load_area"),
    (AttrType::DefaultWireLoadCapacitance, "default_wire_load_capacitance"),
    (AttrType::DefaultWireLoadMode, "default_wire_load_mode"),
    (AttrType::DefaultWireLoadResistance, "default_wire_load_resistance"),
    (AttrType::DefaultWireLoadSelection, "default_wire_load_selection"),
    (AttrType::Define, "define"),
    (AttrType::DefineCellArea, "define_cell_area"),
    (AttrType::DefineGroup, "define_group"),
    (AttrType::DelayModel, "delay_model"),
    (AttrType::Direction, "direction"),
    (AttrType::DividedBy, "divided_by"),
    (AttrType::Domain, "domain"),
    (AttrType::DontFault, "dont_fault"),
    (AttrType::DontTouch, "dont_touch"),
    (AttrType::DontUse, "dont_use"),
    (AttrType::Downto, "downto"),
    (AttrType::Drive, "drive"),
    (AttrType::DriveCurrent, "drive_current"),
    (AttrType::DriverType, "driver_type"),
    (AttrType::DutyCycle, "duty_cycle"),
    (AttrType::DynamicCurrent, "dynamic_current"),
    (AttrType::EdgeType, "edge_type"),
    (AttrType::Edges, "edges"),
    (AttrType::EdifName, "edif_name"),
    (AttrType::Electromigration, "electromigration"),
    (AttrType::EmLutTemplate, "em_lut_template"),
    (AttrType::EmMaxToggleRate, "em_max_toggle_rate"),
    (AttrType::EmTempDegradationFactor, "em_temp_degradation_factor"),
    (AttrType::Enable, "enable"),
    (AttrType::EnableAlso, "enable_also"),
    (AttrType::EqualOrOppositeOutput, "equal_or_opposite_output"),
    (AttrType::FallCapacitance, "fall_capacitance"),
    (AttrType::FallCapacitanceRange, "fall_capacitance_range"),
    (AttrType::FallConstraint, "fall_constraint"),
    (AttrType::FallCurrentSlopeAfterThreshold, "fall_current_slope_after_threshold"),
    (AttrType::FallCurrentSlopeBeforeThreshold, "fall_current_slope_before_threshold"),
    (AttrType::FallDelayIntercept, "fall_delay_intercept"),
    (AttrType::FallNetDelay, "fall_net_delay"),
    (AttrType::FallPinResistance, "fall_pin_resistance"),
    (AttrType::FallPower, "fall_power"),
    (AttrType::FallPropagation, "fall_propagation"),
    (AttrType::FallResistance, "fall_resistance"),
    (AttrType::FallTimeAfterThreshold, "fall_time_after_threshold"),
    (AttrType::FallTimeBeforeThreshold, "fall_time_before_threshold"),
    (AttrType::FallTransition, "fall_transition"),
    (AttrType::FallTransitionDegradation, "fall_transition_degradation"),
    (AttrType::FallingTogetherGroup, "falling_together_group"),
    (AttrType::FanoutArea, "fanout_area"),
    (AttrType::FanoutCapacitance, "fanout_capacitance"),
    (AttrType::FanoutLength, "fanout_length"),
    (AttrType::FanoutLoad, "fanout_load"),
    (AttrType::FanoutResistance, "fanout_resistance"),
    (AttrType::FasterFactor, "faster_factor"),
    (AttrType::FaultModel, "fault_model"),
    (AttrType::FaultsLutTemplate, "faults_lut_template"),
    (AttrType::Ff, "ff"),
    (AttrType::FfBank, "ff_bank"),
    (AttrType::FpgaArcCondition, "fpga_arc_condition"),
    (AttrType::FpgaCellType, "fpga_cell_type"),
    (AttrType::FpgaCondition, "fpga_condition"),
    (AttrType::FpgaConditionValue, "fpga_condition_value"),
    (AttrType::FpgaDomainStyle, "fpga_domain_style"),
    (AttrType::FpgaIsd, "fpga_isd"),
    (AttrType::FpgaTechnology, "fpga_technology"),
    (AttrType::Function, "function"),
    (AttrType::FunctionalYieldMetric, "functional_yield_metric"),
    (AttrType::GateLeakage, "gate_leakage"),
    (AttrType::GeneratedClock, "generated_clock"),
    (AttrType::GeometryPrint, "geometry_print"),
    (AttrType::HandleNegativeConstraint, "handle_negative_constraint"),
    (AttrType::HasBuiltinPad, "has_builtin_pad"),
    (AttrType::HeightCoefficient, "height_coefficient"),
    (AttrType::HyperbolicNoiseAboveHigh, "hyperbolic_noise_above_high"),
    (AttrType::HyperbolicNoiseBelowLow, "hyperbolic_noise_below_low"),
    (AttrType::HyperbolicNoiseHigh, "hyperbolic_noise_high"),
    (AttrType::HyperbolicNoiseLow, "hyperbolic_noise_low"),
    (AttrType::Hysteresis, "hysteresis"),
    (AttrType::InPlaceSwapMode, "in_place_swap_mode"),
    (AttrType::Index1, "index_1"),
    (AttrType::Index2, "index_2"),
    (AttrType::Index3, "index_3"),
    (AttrType::Index4, "index_4"),
    (AttrType::IndexOutput, "index_output"),
    (AttrType::InputHighValue, "input_high_value"),
    (AttrType::InputLowValue, "input_low_value"),
    (AttrType::InputMap, "input_map"),
    (AttrType::InputPins, "input_pins"),
    (AttrType::InputSignalLevel, "input_signal_level"),
    (AttrType::InputSwitchingCondition, "input_switching_condition"),
    (AttrType::InputThresholdPctFall, "input_threshold_pct_fall"),
    (AttrType::InputThresholdPctRise, "input_threshold_pct_rise"),
    (AttrType::InputVoltage, "input_voltage"),
    (AttrType::InputVoltageRange, "input_voltage_range"),
    (AttrType::InterdependenceId, "interdependence_id"),
    (AttrType::InterfaceTiming, "interface_timing"),
    (AttrType::InternalNode, "internal_node"),
    (AttrType::InternalPower, "internal_power"),
    (AttrType::IntrinsicCapacitance, "intrinsic_capacitance"),
    (AttrType::IntrinsicFall, "intrinsic_fall"),
    (AttrType::IntrinsicParasitic, "intrinsic_parasitic"),
    (AttrType::IntrinsicResistance, "intrinsic_resistance"),
    (AttrType::IntrinsicRise, "intrinsic_rise"),
    (AttrType::Invert, "invert"),
    (AttrType::InvertedOutput, "inverted_output"),
    (AttrType::IoType, "io_type"),
    (AttrType::IsClockGatingCell, "is_clock_gating_cell"),
    (AttrType::IsInverting, "is_inverting"),
    (AttrType::IsIsolationCell, "is_isolation_cell"),
    (AttrType::IsLevelShifter, "is_level_shifter"),
    (AttrType::IsNeeded, "is_needed"),
    (AttrType::IsPad, "is_pad"),
    (AttrType::IsolationCellEnablePin, "isolation_cell_enable_pin"),
    (AttrType::IvLutTemplate, "iv_lut_template"),
    (AttrType::KProcessCellFall, "k_process_cell_fall"),
    (AttrType::KProcessCellLeakagePower, "k_process_cell_leakage_power"),
    (AttrType::KProcessCellRise, "k_process_cell_rise"),
    (AttrType::KProcessDriveCurrent, "k_process_drive_current"),
    (AttrType::KProcessDriveFall, "k_process_drive_fall"),
    (AttrType::KProcessDriveRise, "k_process_drive_rise"),
    (AttrType::KProcessFallDelayIntercept, "k_process_fall_delay_intercept"),
    (AttrType::KProcessFallPinResistance, "k_process_fall_pin_resistance"),
    (AttrType::KProcessFallPropagation, "k_process_fall_propagation"),
    (AttrType::KProcessFallTransition, "k_process_fall_transition"),
    (AttrType::KProcessHoldFall, "k_process_hold_fall"),
    (AttrType::KProcessHoldRise, "k_process_hold_rise"),
    (AttrType::KProcessInternalPower, "k_process_internal_power"),
    (AttrType::KProcessIntrinsicFall, "k_process_intrinsic_fall"),
    (AttrType::KProcessIntrinsicRise, "k_process_intrinsic_rise"),
    (AttrType::KProcessMinPeriod, "k_process_min_period"),
    (AttrType::KProcessMinPulseWidthHigh, "k_process_min_pulse_width_high"),
    (AttrType::KProcessMinPulseWidthLow, "k_process_min_pulse_width_low"),
    (AttrType::KProcessNochangeFall, "k_process_nochange_fall"),
    (AttrType::KProcessNochangeRise, "k_process_nochange_rise"),
    (AttrType::KProcessPinCap, "k_process_pin_cap"),
    (AttrType::KProcessRecoveryFall, "k_process_recovery_fall"),
    (AttrType::KProcessRecoveryRise, "k_process_recovery_rise"),
    (AttrType::KProcessRemovalFall, "k_process_removal_fall"),
    (AttrType::KProcessRemovalRise, "k_process_removal_rise"),
    (AttrType::KProcessRiseDelayIntercept, "k_process_rise_delay_intercept"),
    (AttrType::KProcessRisePinResistance, "k_process_rise_pin_resistance"),
    (AttrType::KProcessRisePropagation, "k_process_rise_propagation"),
    (AttrType::KProcessRiseTransition, "k_process_rise_transition"),
    (AttrType::KProcessSetupFall, "k_process_setup_fall"),
    (AttrType::KProcessSetupRise, "k_process_setup_rise"),
    (AttrType::KProcessSkewFall, "k_process_skew_fall"),
    (AttrType::KProcessSkewRise, "k_process_skew_rise"),
    (AttrType::KProcessSlopeFall, "k_process_slope_fall"),
    (AttrType::KProcessSlopeRise, "k_process_slope_rise"),
    (AttrType::KProcessWireCap, "k_process_wire_cap"),
    (AttrType::KProcessWireRes, "k_process_wire_res"),
    (AttrType::KTempCellFall, "k_temp_cell_fall"),
    (AttrType::KTempCellLeakagePower, "k_temp_cell_leakage_power"),
    (AttrType::KTempCellRise, "k_temp_cell_rise"),
    (AttrType::KTempDriveCurrent, "k_temp_drive_current"),
    (AttrType::KTempDriveFall, "k_temp_drive_fall"),
    (AttrType::KTempDriveRise, "k_temp_drive_rise"),
    (AttrType::KTempFallDelayIntercept, "k_temp_fall_delay_intercept"),
    (AttrType::KTempFallPinResistance, "k_temp_fall_pin_resistance"),
    (AttrType::KTempFallPropagation, "k_temp_fall_propagation"),
    (AttrType::KTempFallTransition, "k_temp_fall_transition"),
    (AttrType::KTempHoldFall, "k_temp_hold_fall"),
    (AttrType::KTempHoldRise, "k_temp_hold_rise"),
    (AttrType::KTempInternalPower, "k_temp_internal_power"),
    (AttrType::KTempIntrinsicFall, "k_temp_intrinsic_fall"),
    (AttrType::KTempIntrinsicRise, "k_temp_intrinsic_rise"),
    (AttrType::KTempMinPeriod, "k_temp_min_period"),
    (AttrType::KTempMinPulseWidthHigh, "k_temp_min_pulse_width_high"),
    (AttrType::KTempMinPulseWidthLow, "k_temp_min_pulse_width_low"),
    (AttrType::KTempNochangeFall, "k_temp_nochange_fall"),
    (AttrType::KTempNochangeRise, "k_temp_nochange_rise"),
    (AttrType::KTempPinCap, "k_temp_pin_cap"),
    (AttrType::KTempRecoveryFall, "k_temp_recovery_fall"),
    (AttrType::KTempRecoveryRise, "k_temp_recovery_rise"),
    (AttrType::KTempRemovalFall, "k_temp_removal_fall"),
    (AttrType::KTempRemovalRise, "k_temp_removal_rise"),
    (AttrType::KTempRiseDelayIntercept, "k_temp_rise_delay_intercept"),
    (AttrType::KTempRisePinResistance, "k_temp_rise_pin_resistance"),
    (AttrType::KTempRisePropagation, "k_temp_rise_propagation"),
    (AttrType::KTempRiseTransition, "k_temp_rise_transition"),
    (AttrType::KTempSetupFall, "k_temp_setup_fall"),
    (AttrType::KTempSetupRise, "k_temp_setup_rise"),
    (AttrType::KTempSkewFall, "k_temp_skew_fall"),
    (AttrType::KTempSkewRise, "k_temp_skew_rise"),
    (AttrType::KTempSlopeFall, "k_temp_slope_fall"),
    (AttrType::KTempSlopeRise, "k_temp_slope_rise"),
    (AttrType::KTempWireCap, "k_temp_wire_cap"),
    (AttrType::KTempWireRes, "k_temp_wire_res"),
    (AttrType::KVoltCellFall, "k_volt_cell_fall"),
    (AttrType::KVoltCellLeakagePower, "k_volt_cell_leakage_power"),
    (AttrType::KVoltCellRise, "k_volt_cell_rise"),
    (AttrType::KVoltDriveCurrent, "k_volt_drive_current"),
    (AttrType::KVoltDriveFall, "k_volt_drive_fall"),
    (AttrType::KVoltDriveRise, "k_volt_drive_rise"),
    (AttrType::KVoltFallDelayIntercept, "k_volt_fall_delay_intercept"),
    (AttrType::KVoltFallPinResistance, "k_volt_fall_pin_resistance"),
    (AttrType::KVoltFallPropagation, "k_volt_fall_propagation"),
    (AttrType::KVoltFallTransition, "k_volt_fall_transition"),
    (AttrType::KVoltHoldFall, "k_volt_hold_fall"),
    (AttrType::KVoltHoldRise, "k_volt_hold_rise"),
    (AttrType::KVoltInternalPower, "k_volt_internal_power"),
    (AttrType::KVoltIntrinsicFall, "k_volt_intrinsic_fall"),
    (AttrType::KVoltIntrinsicRise, "k_volt_intrinsic_rise"),
    (AttrType::KVoltMinPeriod, "k_volt_min_period"),
    (AttrType::KVoltMinPulseWidthHigh, "k_volt_min_pulse_width_high"),
    (AttrType::KVoltMinPulseWidthLow, "k_volt_min_pulse_width_low"),
    (AttrType::KVoltNochangeFall, "k_volt_nochange_fall"),
    (AttrType::KVoltNochangeRise, "k_volt_nochange_rise"),
    (AttrType::KVoltPinCap, "k_volt_pin_cap"),
    (AttrType::KVoltRecoveryFall, "k_volt_recovery_fall"),
    (AttrType::KVoltRecoveryRise, "k_volt_recovery_rise"),
    (AttrType::KVoltRemovalFall, "k_volt_removal_fall"),
    (AttrType::KVoltRemovalRise, "k_volt_removal_rise"),
    (AttrType::KVoltRiseDelayIntercept, "k_volt_rise_delay_intercept"),
    (AttrType::KVoltRisePinResistance, "k_volt_rise_pin_resistance"),
    (AttrType::KVoltRisePropagation, "k_volt_rise_propagation"),
    (AttrType::KVoltRiseTransition, "k_volt_rise_transition"),
    (AttrType::KVoltSetupFall, "k_volt_setup_fall"),
    (AttrType::KVoltSetupRise, "k_volt_setup_rise"),
    (AttrType::KVoltSkewFall, "k_volt_skew_fall"),
    (AttrType::KVoltSkewRise, "k_volt_skew_rise"),
    (AttrType::KVoltSlopeFall, "k_volt_slope_fall"),
    (AttrType::KVoltSlopeRise, "k_volt_slope_rise"),
    (AttrType::KVoltWireCap, "k_volt_wire_cap"),
    (AttrType::KVoltWireRes, "k_volt_wire_res"),
    (AttrType::Latch, "latch"),
    (AttrType::LatchBank, "latch_bank"),
    (AttrType::LeakageCurrent, "leakage_current"),
    (AttrType::LeakagePower, "leakage_power"),
    (AttrType::LeakagePowerUnit, "leakage_power_unit"),
    (AttrType::LevelShifterEnablePin, "level_shifter_enable_pin"),
    (AttrType::LevelShifterType, "level_shifter_type"),
    (AttrType::Library, "library"),
    (AttrType::LibraryFeatures, "library_features"),
    (AttrType::Lower, "lower"),
    (AttrType::LuTableTemplate, "lu_table_template"),
    (AttrType::Lut, "lut"),
    (AttrType::MapOnly, "map_only"),
    (AttrType::MapToLogic, "map_to_logic"),
    (AttrType::Mapping, "mapping"),
    (AttrType::MasterPin, "master_pin"),
    (AttrType::MaxCap, "max_cap"),
    (AttrType::MaxCapacitance, "max_capacitance"),
    (AttrType::MaxCount, "max_count"),
    (AttrType::MaxFanout, "max_fanout"),
    (AttrType::MaxInputNoiseWidth, "max_input_noise_width"),
    (AttrType::MaxInputSwitchingCount, "max_input_switching_count"),
    (AttrType::MaxTrans, "max_trans"),
    (AttrType::MaxTransition, "max_transition"),
    (AttrType::MaxcapLutTemplate, "maxcap_lut_template"),
    (AttrType::MaxtransLutTemplate, "maxtrans_lut_template"),
    (AttrType::Members, "members"),
    (AttrType::MillerCapFall, "miller_cap_fall"),
    (AttrType::MillerCapRise, "miller_cap_rise"),
    (AttrType::MinCapacitance, "min_capacitance"),
    (AttrType::MinFanout, "min_fanout"),
    (AttrType::MinInputNoiseWidth, "min_input_noise_width"),
    (AttrType::MinInputSwitchingCount, "min_input_switching_count"),
    (AttrType::MinPeriod, "min_period"),
    (AttrType::MinPulseWidth, "min_pulse_width"),
    (AttrType::MinPulseWidthHigh, "min_pulse_width_high"),
    (AttrType::MinPulseWidthLow, "min_pulse_width_low"),
    (AttrType::MinTransition, "min_transition"),
    (AttrType::MinimumPeriod, "minimum_period"),
    (AttrType::Mode, "mode"),
    (AttrType::ModeDefinition, "mode_definition"),
    (AttrType::ModeValue, "mode_value"),
    (AttrType::Model, "model"),
    (AttrType::MulticellPadPin, "multicell_pad_pin"),
    (AttrType::MultipliedBy, "multiplied_by"),
    (AttrType::NextState, "next_state"),
    (AttrType::NextstateType, "nextstate_type"),
    (AttrType::NoiseImmunityAboveHigh, "noise_immunity_above_high"),
    (AttrType::NoiseImmunityBelowLow, "noise_immunity_below_low"),
    (AttrType::NoiseImmunityHigh, "noise_immunity_high"),
    (AttrType::NoiseImmunityLow, "noise_immunity_low"),
    (AttrType::NoiseLutTemplate, "noise_lut_template"),
    (AttrType::NomCalcMode, "nom_calc_mode"),
    (AttrType::NomProcess, "nom_process"),
    (AttrType::NomTemperature, "nom_temperature"),
    (AttrType::NomVoltage, "nom_voltage"),
    (AttrType::NumBlockrams, "num_blockrams"),
    (AttrType::NumCols, "num_cols"),
    (AttrType::NumFfs, "num_ffs"),
    (AttrType::NumLuts, "num_luts"),
    (AttrType::NumRows, "num_rows"),
    (AttrType::OperatingConditions, "operating_conditions"),
    (AttrType::Orders, "orders"),
    (AttrType::OutputCurrentFall, "output_current_fall"),
    (AttrType::OutputCurrentRise, "output_current_rise"),
    (AttrType::OutputCurrentTemplate, "output_current_template"),
    (AttrType::OutputSignalLevel, "output_signal_level"),
    (AttrType::OutputSwitchingCondition, "output_switching_condition"),
    (AttrType::OutputThresholdPctFall, "output_threshold_pct_fall"),
    (AttrType::OutputThresholdPctRise, "output_threshold_pct_rise"),
    (AttrType::OutputVoltage, "output_voltage"),
    (AttrType::OutputVoltageFall, "output_voltage_fall"),
    (AttrType::OutputVoltageRange, "output_voltage_range"),
    (AttrType::OutputVoltageRise, "output_voltage_rise"),
    (AttrType::PadCell, "pad_cell"),
    (AttrType::PadType, "pad_type"),
    (AttrType::Parameter1, "parameter1"),
    (AttrType::Parameter2, "parameter2"),
    (AttrType::Parameter3, "parameter3"),
    (AttrType::Parameter4, "parameter4"),
    (AttrType::Parameter5, "parameter5"),
    (AttrType::Part, "part"),
    (AttrType::PgCurrent, "pg_current"),
    (AttrType::PgFunction, "pg_function"),
    (AttrType::PgPin, "pg_pin"),
    (AttrType::PgType, "pg_type"),
    (AttrType::PieceDefine, "piece_define"),
    (AttrType::PieceType, "piece_type"),
    (AttrType::Pin, "pin"),
    (AttrType::PinCapacitance, "pin_capacitance"),
    (AttrType::PinCount, "pin_count"),
    (AttrType::PinEqual, "pin_equal"),
    (AttrType::PinFuncType, "pin_func_type"),
    (AttrType::PinNameMap, "pin_name_map"),
    (AttrType::PinNames, "pin_names"),
    (AttrType::PinOpposite, "pin_opposite"),
    (AttrType::PolyTemplate, "poly_template"),
    (AttrType::Power, "power"),
    (AttrType::PowerCellType, "power_cell_type"),
    (AttrType::PowerDownFunction, "power_down_function"),
    (AttrType::PowerGatingCell, "power_gating_cell"),
    (AttrType::PowerGatingPin, "power_gating_pin"),
    (AttrType::PowerLevel, "power_level"),
    (AttrType::PowerLutTemplate, "power_lut_template"),
    (AttrType::PowerModel, "power_model"),
    (AttrType::PowerPolyTemplate, "power_poly_template"),
    (AttrType::PowerRail, "power_rail"),
    (AttrType::PowerSupply, "power_supply"),
    (AttrType::PowerUnit, "power_unit"),
    (AttrType::PreferTied, "prefer_tied"),
    (AttrType::Preferred, "preferred"),
    (AttrType::PreferredInputPadVoltage, "preferred_input_pad_voltage"),
    (AttrType::PreferredOutputPadSlewRateControl, "preferred_output_pad_slew_rate_control"),
    (AttrType::PreferredOutputPadVoltage, "preferred_output_pad_voltage"),
    (AttrType::Preset, "preset"),
    (AttrType::PrimaryOutput, "primary_output"),
    (AttrType::Process, "process"),
    (AttrType::PropagatedNoiseHeightAboveHigh, "propagated_noise_height_above_high"),
    (AttrType::PropagatedNoiseHeightBelowLow, "propagated_noise_height_below_low"),
    (AttrType::PropagatedNoiseHeightHigh, "propagated_noise_height_high"),
    (AttrType::PropagatedNoiseHeightLow, "propagated_noise_height_low"),
    (AttrType::PropagatedNoiseHigh, "propagated_noise_high"),
    (AttrType::PropagatedNoiseLow, "propagated_noise_low"),
    (AttrType::PropagatedNoisePeakTimeRatioAboveHigh, "propagated_noise_peak_time_ratio_above_high"),
    (AttrType::PropagatedNoisePeakTimeRatioBelowLow, "propagated_noise_peak_time_ratio_below_low"),
    (AttrType::PropagatedNoisePeakTimeRatioHigh, "propagated_noise_peak_time_ratio_high"),
    (AttrType::PropagatedNoisePeakTimeRatioLow, "propagated_noise_peak_time_ratio_low"),
    (AttrType::PropagatedNoiseWidthAboveHigh, "propagated_noise_width_above_high"),
    (AttrType::PropagatedNoiseWidthBelowLow, "propagated_noise_width_below_low"),
    (AttrType::PropagatedNoiseWidthHigh, "propagated_noise_width_high"),
    (AttrType::PropagatedNoiseWidthLow, "propagated_noise_width_low"),
    (AttrType::PropagationLutTemplate, "propagation_lut_template"),
    (AttrType::PullingCurrent, "pulling_current"),
    (AttrType::PullingResistance, "pulling_resistance"),
    (AttrType::PullingResistanceUnit, "pulling_resistance_unit"),
    (AttrType::PulseClock, "pulse_clock"),
    (AttrType::RailConnection, "rail_connection"),
    (AttrType::ReceiverCapacitance1Fall, "receiver_capacitance1_fall"),
    (AttrType::ReceiverCapacitance1Rise, "receiver_capacitance1_rise"),
    (AttrType::ReceiverCapacitance2Fall, "receiver_capacitance2_fall"),
    (AttrType::ReceiverCapacitance2Rise, "receiver_capacitance2_rise"),
    (AttrType::ReferenceTime, "reference_time"),
    (AttrType::RelatedBusEquivalent, "related_bus_equivalent"),
    (AttrType::RelatedBusPins, "related_bus_pins"),
    (AttrType::RelatedGroundPin, "related_ground_pin"),
    (AttrType::RelatedInputs, "related_inputs"),
    (AttrType::RelatedOutput, "related_output"),
    (AttrType::RelatedOutputPin, "related_output_pin"),
    (AttrType::RelatedOutputs, "related_outputs"),
    (AttrType::RelatedPgPin, "related_pg_pin"),
    (AttrType::RelatedPin, "related_pin"),
    (AttrType::RelatedPowerPin, "related_power_pin"),
    (AttrType::Resistance, "resistance"),
    (AttrType::ResistanceUnit, "resistance_unit"),
    (AttrType::ResourceUsage, "resource_usage"),
    (AttrType::RetainFallSlew, "retain_fall_slew"),
    (AttrType::RetainRiseSlew, "retain_rise_slew"),
    (AttrType::RetainingFall, "retaining_fall"),
    (AttrType::RetainingRise, "retaining_rise"),
    (AttrType::Revision, "revision"),
    (AttrType::RiseCapacitance, "rise_capacitance"),
    (AttrType::RiseCapacitanceRange, "rise_capacitance_range"),
    (AttrType::RiseConstraint, "rise_constraint"),
    (AttrType::RiseCurrentSlopeAfterThreshold, "rise_current_slope_after_threshold"),
    (AttrType::RiseCurrentSlopeBeforeThreshold, "rise_current_slope_before_threshold"),
    (AttrType::RiseDelayIntercept, "rise_delay_intercept"),
    (AttrType::RiseNetDelay, "rise_net_delay"),
    (AttrType::RisePinResistance, "rise_pin_resistance"),
    (AttrType::RisePower, "rise_power"),
    (AttrType::RisePropagation, "rise_propagation"),
    (AttrType::RiseResistance, "rise_resistance"),
    (AttrType::RiseTimeAfterThreshold, "rise_time_after_threshold"),
    (AttrType::RiseTimeBeforeThreshold, "rise_time_before_threshold"),
    (AttrType::RiseTransition, "rise_transition"),
    (AttrType::RiseTransitionDegradation, "rise_transition_degradation"),
    (AttrType::RisingTogetherGroup, "rising_together_group"),
    (AttrType::RoutingLayers, "routing_layers"),
    (AttrType::RoutingTrack, "routing_track"),
    (AttrType::ScaledCell, "scaled_cell"),
    (AttrType::ScalingFactors, "scaling_factors"),
    (AttrType::SdfCond, "sdf_cond"),
    (AttrType::SdfCondEnd, "sdf_cond_end"),
    (AttrType::SdfCondStart, "sdf_cond_start"),
    (AttrType::SdfEdges, "sdf_edges"),
    (AttrType::Sensitization, "sensitization"),
    (AttrType::SensitizationMaster, "sensitization_master"),
    (AttrType::Shifts, "shifts"),
    (AttrType::Short, "short"),
    (AttrType::SignalType, "signal_type"),
    (AttrType::Simulation, "simulation"),
    (AttrType::SingleBitDegenerate, "single_bit_degenerate"),
    (AttrType::Slew, "slew"),
    (AttrType::SlewControl, "slew_control"),
    (AttrType::SlewDerateFromLibrary, "slew_derate_from_library"),
    (AttrType::SlewLowerThresholdPctFall, "slew_lower_threshold_pct_fall"),
    (AttrType::SlewLowerThresholdPctRise, "slew_lower_threshold_pct_rise"),
    (AttrType::SlewType, "slew_type"),
    (AttrType::SlewUpperThresholdPctFall, "slew_upper_threshold_pct_fall"),
    (AttrType::SlewUpperThresholdPctRise, "slew_upper_threshold_pct_rise"),
    (AttrType::Slope, "slope"),
    (AttrType::SlopeFall, "slope_fall"),
    (AttrType::SlopeRise, "slope_rise"),
    (AttrType::SlowerFactor, "slower_factor"),
    (AttrType::SpeedGrade, "speed_grade"),
    (AttrType::StageType, "stage_type"),
    (AttrType::StateFunction, "state_function"),
    (AttrType::Statetable, "statetable"),
    (AttrType::StdCellMainRail, "std_cell_main_rail"),
    (AttrType::SteadyStateCurrentHigh, "steady_state_current_high"),
    (AttrType::SteadyStateCurrentLow, "steady_state_current_low"),
    (AttrType::SteadyStateCurrentTristate, "steady_state_current_tristate"),
    (AttrType::SteadyStateResistanceAboveHigh, "steady_state_resistance_above_high"),
    (AttrType::SteadyStateResistanceBelowLow, "steady_state_resistance_below_low"),
    (AttrType::SteadyStateResistanceHigh, "steady_state_resistance_high"),
    (AttrType::SteadyStateResistanceLow, "steady_state_resistance_low"),
    (AttrType::StepLevel, "step_level"),
    (AttrType::SwitchCellType, "switch_cell_type"),
    (AttrType::SwitchFunction, "switch_function"),
    (AttrType::SwitchPin, "switch_pin"),
    (AttrType::SwitchingGroup, "switching_group"),
    (AttrType::SwitchingInterval, "switching_interval"),
    (AttrType::SwitchingTogetherGroup, "switching_together_group"),
    (AttrType::Table, "table"),
    (AttrType::Tdisable, "tdisable"),
    (AttrType::Technology, "technology"),
    (AttrType::Temperature, "temperature"),
    (AttrType::TestCell, "test_cell"),
    (AttrType::TestOutputOnly, "test_output_only"),
    (AttrType::ThreeState, "three_state"),
    (AttrType::ThresholdVoltageGroup, "threshold_voltage_group"),
    (AttrType::TiedOff, "tied_off"),
    (AttrType::TimeUnit, "time_unit"),
    (AttrType::Timing, "timing"),
    (AttrType::TimingModelType, "timing_model_type"),
    (AttrType::TimingRange, "timing_range"),
    (AttrType::TimingSense, "timing_sense"),
    (AttrType::TimingType, "timing_type"),
    (AttrType::Tlatch, "tlatch"),
    (AttrType::TotalCapacitance, "total_capacitance"),
    (AttrType::TotalTrackArea, "total_track_area"),
    (AttrType::Tracks, "tracks"),
    (AttrType::TreeType, "tree_type"),
    (AttrType::Type, "type"),
    (AttrType::TypicalCapacitances, "typical_capacitances"),
    (AttrType::Upper, "upper"),
    (AttrType::UseForSizeOnly, "use_for_size_only"),
    (AttrType::ValidSpeedGrade, "valid_speed_grade"),
    (AttrType::ValidStepLevels, "valid_step_levels"),
    (AttrType::Value, "value"),
    (AttrType::Values, "values"),
    (AttrType::Variable1, "variable_1"),
    (AttrType::Variable1Range, "variable_1_range"),
    (AttrType::Variable2, "variable_2"),
    (AttrType::Variable2Range, "variable_2_range"),
    (AttrType::Variable3, "variable_3"),
    (AttrType::Variable3Range, "variable_3_range"),
    (AttrType::VariableNRange, "variable_n_range"),
    (AttrType::Variables, "variables"),
    (AttrType::Vector, "vector"),
    (AttrType::VhdlName, "vhdl_name"),
    (AttrType::Vih, "vih"),
    (AttrType::Vil, "vil"),
    (AttrType::Vimax, "vimax"),
    (AttrType::Vimin, "vimin"),
    (AttrType::Voh, "voh"),
    (AttrType::Vol, "vol"),
    (AttrType::Voltage, "voltage"),
    (AttrType::VoltageName, "voltage_name"),
    (AttrType::VoltageUnit, "voltage_unit"),
    (AttrType::Vomax, "vomax"),
    (AttrType::Vomin, "vomin"),
    (AttrType::WaveFall, "wave_fall"),
    (AttrType::WaveFallSamplingIndex, "wave_fall_sampling_index"),
    (AttrType::WaveFallTimeInterval, "wave_fall_time_interval"),
    (AttrType::WaveRise, "wave_rise"),
    (AttrType::WaveRiseSamplingIndex, "wave_rise_sampling_index"),
    (AttrType::WaveRiseTimeInterval, "wave_rise_time_interval"),
    (AttrType::When, "when"),
    (AttrType::WhenEnd, "when_end"),
    (AttrType::WhenStart, "when_start"),
    (AttrType::WidthCoefficient, "width_coefficient"),
    (AttrType::WireLoad, "wire_load"),
    (AttrType::WireLoadFromArea, "wire_load_from_area"),
    (AttrType::WireLoadSelection, "wire_load_selection"),
    (AttrType::WireLoadTable, "wire_load_table"),
    (AttrType::XFunction, "x_function"),
];

static BY_KEYWORD: Lazy<AHashMap<&'static str, AttrType>> =
    Lazy::new(|| KEYWORDS.iter().map(|(attr, kwd)| (*kwd, *attr)).collect());

impl AttrType {
    pub fn all() -> impl Iterator<Item = AttrType> {
        KEYWORDS.iter().map(|(attr, _)| *attr)
    }

    /// Exact-match lookup; returns `None` for keywords this reader does not
    /// model.
    pub fn from_keyword(keyword: &str) -> Option<AttrType> {
        BY_KEYWORD.get(keyword).copied()
    }

    pub fn as_str(self) -> &'static str {
        KEYWORDS[self as usize].1
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_keyword_table_matches_discriminants() {
        for (i, (attr, _)) in KEYWORDS.iter().enumerate() {
            assert_eq!(*attr as usize, i, "{attr:?} is out of order");
        }
    }

    #[test]
    fn test_round_trip_every_keyword() {
        for attr in AttrType::all() {
            assert_eq!(AttrType::from_keyword(attr.as_str()), Some(attr));
        }
    }

    #[test_case("area", AttrType::Area)]
    #[test_case("clocked_on_also", AttrType::ClockedOnAlso)]
    #[test_case("lu_table_template", AttrType::LuTableTemplate)]
    #[test_case("index_3", AttrType::Index3)]
    #[test_case("k_volt_cell_leakage_power", AttrType::KVoltCellLeakagePower)]
    fn test_from_keyword(keyword: &str, expected: AttrType) {
        assert_eq!(AttrType::from_keyword(keyword), Some(expected));
        assert_eq!(expected.to_string(), keyword);
    }

    #[test]
    fn test_unrecognized_keyword() {
        assert_eq!(AttrType::from_keyword("my_vendor_extension"), None);
        assert_eq!(AttrType::from_keyword("Area"), None);
        assert_eq!(AttrType::from_keyword(""), None);
    }
}
