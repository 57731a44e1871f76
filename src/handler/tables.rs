// SPDX-License-Identifier: Apache-2.0

//! Per-group dispatch tables: which keywords a group body accepts and how each
//! one is read.

use super::GroupKind;
use super::Syntax::{self, Complex, Group, Simple};
use super::SimpleKind;
use crate::attr_type::AttrType;
use crate::header::HeaderShape;

const BOOL: Syntax = Simple(SimpleKind::Bool);
const INT: Syntax = Simple(SimpleKind::Int);
const FLOAT: Syntax = Simple(SimpleKind::Float);
const STRING: Syntax = Simple(SimpleKind::Str);
const DELAY_MODEL: Syntax = Simple(SimpleKind::DelayModel);
const DIRECTION: Syntax = Simple(SimpleKind::Direction);
const EXPR: Syntax = Simple(SimpleKind::Expr);
const FUNCTION: Syntax = Simple(SimpleKind::Function);
const TIMING_SENSE: Syntax = Simple(SimpleKind::TimingSense);
const TIMING_TYPE: Syntax = Simple(SimpleKind::TimingType);
const VAR_TYPE: Syntax = Simple(SimpleKind::VarType);

const LIBRARY_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::BusNamingStyle, STRING),
    (AttrType::Comment, STRING),
    (AttrType::CurrentUnit, STRING),
    (AttrType::Date, STRING),
    (AttrType::DelayModel, DELAY_MODEL),
    (AttrType::EmTempDegradationFactor, FLOAT),
    (AttrType::FpgaDomainStyle, STRING),
    (AttrType::FpgaTechnology, STRING),
    (AttrType::InputThresholdPctFall, FLOAT),
    (AttrType::InputThresholdPctRise, FLOAT),
    (AttrType::OutputThresholdPctFall, FLOAT),
    (AttrType::OutputThresholdPctRise, FLOAT),
    (AttrType::InPlaceSwapMode, STRING),
    (AttrType::LeakagePowerUnit, STRING),
    (AttrType::NomCalcMode, STRING),
    (AttrType::NomProcess, FLOAT),
    (AttrType::NomTemperature, FLOAT),
    (AttrType::NomVoltage, FLOAT),
    (AttrType::PieceType, STRING),
    (AttrType::PowerModel, STRING),
    (AttrType::PowerUnit, STRING),
    (AttrType::PreferredInputPadVoltage, STRING),
    (AttrType::PreferredOutputPadVoltage, STRING),
    (AttrType::PreferredOutputPadSlewRateControl, STRING),
    (AttrType::PullingResistanceUnit, STRING),
    (AttrType::ResistanceUnit, STRING),
    (AttrType::CapacitanceUnit, STRING),
    (AttrType::Revision, STRING),
    (AttrType::Simulation, BOOL),
    (AttrType::SlewDerateFromLibrary, FLOAT),
    (AttrType::SlewLowerThresholdPctFall, FLOAT),
    (AttrType::SlewLowerThresholdPctRise, FLOAT),
    (AttrType::SlewUpperThresholdPctFall, FLOAT),
    (AttrType::SlewUpperThresholdPctRise, FLOAT),
    (AttrType::ThresholdVoltageGroup, STRING),
    (AttrType::TimeUnit, STRING),
    (AttrType::VoltageUnit, STRING),
    (AttrType::DefaultCellLeakagePower, FLOAT),
    (AttrType::DefaultConnectionClass, STRING),
    (AttrType::DefaultFallDelayIntercept, FLOAT),
    (AttrType::DefaultRiseDelayIntercept, FLOAT),
    (AttrType::DefaultFallPinResistance, FLOAT),
    (AttrType::DefaultRisePinResistance, FLOAT),
    (AttrType::DefaultFanoutLoad, FLOAT),
    (AttrType::DefaultFpgaIsd, STRING),
    (AttrType::DefaultInoutPinCap, FLOAT),
    (AttrType::DefaultInputPinCap, FLOAT),
    (AttrType::DefaultOutputPinCap, FLOAT),
    (AttrType::DefaultInoutPinFallRes, FLOAT),
    (AttrType::DefaultInoutPinRiseRes, FLOAT),
    (AttrType::DefaultOutputPinFallRes, FLOAT),
    (AttrType::DefaultOutputPinRiseRes, FLOAT),
    (AttrType::DefaultIntrinsicFall, FLOAT),
    (AttrType::DefaultIntrinsicRise, FLOAT),
    (AttrType::DefaultLeakagePowerDensity, FLOAT),
    (AttrType::DefaultMaxCapacitance, FLOAT),
    (AttrType::DefaultMaxFanout, FLOAT),
    (AttrType::DefaultMaxTransition, FLOAT),
    (AttrType::DefaultMaxUtilization, FLOAT),
    (AttrType::DefaultMinPorosity, FLOAT),
    (AttrType::DefaultOperatingConditions, STRING),
    (AttrType::DefaultSlopeFall, FLOAT),
    (AttrType::DefaultSlopeRise, FLOAT),
    (AttrType::DefaultWireLoad, STRING),
    (AttrType::DefaultWireLoadArea, FLOAT),
    (AttrType::DefaultWireLoadCapacitance, FLOAT),
    (AttrType::DefaultWireLoadMode, STRING),
    (AttrType::DefaultWireLoadResistance, FLOAT),
    (AttrType::DefaultWireLoadSelection, STRING),
    (AttrType::KProcessCellFall, FLOAT),
    (AttrType::KProcessCellRise, FLOAT),
    (AttrType::KTempCellFall, FLOAT),
    (AttrType::KTempCellRise, FLOAT),
    (AttrType::KVoltCellFall, FLOAT),
    (AttrType::KVoltCellRise, FLOAT),
    (AttrType::KProcessCellLeakagePower, FLOAT),
    (AttrType::KTempCellLeakagePower, FLOAT),
    (AttrType::KVoltCellLeakagePower, FLOAT),
    (AttrType::KProcessDriveCurrent, FLOAT),
    (AttrType::KTempDriveCurrent, FLOAT),
    (AttrType::KVoltDriveCurrent, FLOAT),
    (AttrType::KProcessDriveFall, FLOAT),
    (AttrType::KProcessDriveRise, FLOAT),
    (AttrType::KTempDriveFall, FLOAT),
    (AttrType::KTempDriveRise, FLOAT),
    (AttrType::KVoltDriveFall, FLOAT),
    (AttrType::KVoltDriveRise, FLOAT),
    (AttrType::KProcessFallDelayIntercept, FLOAT),
    (AttrType::KProcessRiseDelayIntercept, FLOAT),
    (AttrType::KTempFallDelayIntercept, FLOAT),
    (AttrType::KTempRiseDelayIntercept, FLOAT),
    (AttrType::KVoltFallDelayIntercept, FLOAT),
    (AttrType::KVoltRiseDelayIntercept, FLOAT),
    (AttrType::KProcessFallPinResistance, FLOAT),
    (AttrType::KProcessRisePinResistance, FLOAT),
    (AttrType::KTempFallPinResistance, FLOAT),
    (AttrType::KTempRisePinResistance, FLOAT),
    (AttrType::KVoltFallPinResistance, FLOAT),
    (AttrType::KVoltRisePinResistance, FLOAT),
    (AttrType::KProcessFallPropagation, FLOAT),
    (AttrType::KProcessRisePropagation, FLOAT),
    (AttrType::KTempFallPropagation, FLOAT),
    (AttrType::KTempRisePropagation, FLOAT),
    (AttrType::KVoltFallPropagation, FLOAT),
    (AttrType::KVoltRisePropagation, FLOAT),
    (AttrType::KProcessFallTransition, FLOAT),
    (AttrType::KProcessRiseTransition, FLOAT),
    (AttrType::KTempFallTransition, FLOAT),
    (AttrType::KTempRiseTransition, FLOAT),
    (AttrType::KVoltFallTransition, FLOAT),
    (AttrType::KVoltRiseTransition, FLOAT),
    (AttrType::KProcessHoldFall, FLOAT),
    (AttrType::KProcessHoldRise, FLOAT),
    (AttrType::KTempHoldFall, FLOAT),
    (AttrType::KTempHoldRise, FLOAT),
    (AttrType::KVoltHoldFall, FLOAT),
    (AttrType::KVoltHoldRise, FLOAT),
    (AttrType::KProcessInternalPower, FLOAT),
    (AttrType::KTempInternalPower, FLOAT),
    (AttrType::KVoltInternalPower, FLOAT),
    (AttrType::KProcessIntrinsicFall, FLOAT),
    (AttrType::KProcessIntrinsicRise, FLOAT),
    (AttrType::KTempIntrinsicFall, FLOAT),
    (AttrType::KTempIntrinsicRise, FLOAT),
    (AttrType::KVoltIntrinsicFall, FLOAT),
    (AttrType::KVoltIntrinsicRise, FLOAT),
    (AttrType::KProcessMinPeriod, FLOAT),
    (AttrType::KTempMinPeriod, FLOAT),
    (AttrType::KVoltMinPeriod, FLOAT),
    (AttrType::KProcessMinPulseWidthHigh, FLOAT),
    (AttrType::KProcessMinPulseWidthLow, FLOAT),
    (AttrType::KTempMinPulseWidthHigh, FLOAT),
    (AttrType::KTempMinPulseWidthLow, FLOAT),
    (AttrType::KVoltMinPulseWidthHigh, FLOAT),
    (AttrType::KVoltMinPulseWidthLow, FLOAT),
    (AttrType::KProcessNochangeFall, FLOAT),
    (AttrType::KProcessNochangeRise, FLOAT),
    (AttrType::KTempNochangeFall, FLOAT),
    (AttrType::KTempNochangeRise, FLOAT),
    (AttrType::KVoltNochangeFall, FLOAT),
    (AttrType::KVoltNochangeRise, FLOAT),
    (AttrType::KProcessPinCap, FLOAT),
    (AttrType::KTempPinCap, FLOAT),
    (AttrType::KVoltPinCap, FLOAT),
    (AttrType::KProcessRecoveryFall, FLOAT),
    (AttrType::KProcessRecoveryRise, FLOAT),
    (AttrType::KProcessRemovalFall, FLOAT),
    (AttrType::KProcessRemovalRise, FLOAT),
    (AttrType::KProcessSetupFall, FLOAT),
    (AttrType::KProcessSetupRise, FLOAT),
    (AttrType::KProcessSkewFall, FLOAT),
    (AttrType::KProcessSkewRise, FLOAT),
    (AttrType::KProcessSlopeFall, FLOAT),
    (AttrType::KProcessSlopeRise, FLOAT),
    (AttrType::KTempRecoveryFall, FLOAT),
    (AttrType::KTempRecoveryRise, FLOAT),
    (AttrType::KTempRemovalFall, FLOAT),
    (AttrType::KTempRemovalRise, FLOAT),
    (AttrType::KTempSetupFall, FLOAT),
    (AttrType::KTempSetupRise, FLOAT),
    (AttrType::KTempSkewFall, FLOAT),
    (AttrType::KTempSkewRise, FLOAT),
    (AttrType::KTempSlopeFall, FLOAT),
    (AttrType::KTempSlopeRise, FLOAT),
    (AttrType::KVoltRecoveryFall, FLOAT),
    (AttrType::KVoltRecoveryRise, FLOAT),
    (AttrType::KVoltRemovalFall, FLOAT),
    (AttrType::KVoltRemovalRise, FLOAT),
    (AttrType::KVoltSetupFall, FLOAT),
    (AttrType::KVoltSetupRise, FLOAT),
    (AttrType::KVoltSkewFall, FLOAT),
    (AttrType::KVoltSkewRise, FLOAT),
    (AttrType::KVoltSlopeFall, FLOAT),
    (AttrType::KVoltSlopeRise, FLOAT),
    (AttrType::KProcessWireCap, FLOAT),
    (AttrType::KTempWireCap, FLOAT),
    (AttrType::KVoltWireCap, FLOAT),
    (AttrType::KProcessWireRes, FLOAT),
    (AttrType::KTempWireRes, FLOAT),
    (AttrType::KVoltWireRes, FLOAT),
    (AttrType::CapacitiveLoadUnit, Complex(HeaderShape::FloatStr)),
    (AttrType::DefaultPart, Complex(HeaderShape::StrStr)),
    (AttrType::Define, Complex(HeaderShape::StrStrStr)),
    (AttrType::DefineCellArea, Complex(HeaderShape::StrStr)),
    (AttrType::DefineGroup, Complex(HeaderShape::StrStr)),
    (AttrType::LibraryFeatures, Complex(HeaderShape::StrList)),
    (AttrType::PieceDefine, Complex(HeaderShape::Str)),
    (AttrType::RoutingLayers, Complex(HeaderShape::StrList)),
    (AttrType::Technology, Complex(HeaderShape::Technology)),
    (AttrType::BaseCurves, Group(GroupKind::BaseCurves)),
    (AttrType::Cell, Group(GroupKind::Cell)),
    (AttrType::CompactLutTemplate, Group(GroupKind::CompactLutTemplate)),
    (AttrType::DcCurrentTemplate, Group(GroupKind::Template)),
    (AttrType::EmLutTemplate, Group(GroupKind::Template)),
    (AttrType::FaultsLutTemplate, Group(GroupKind::Template)),
    (AttrType::IvLutTemplate, Group(GroupKind::Template)),
    (AttrType::MaxcapLutTemplate, Group(GroupKind::Template)),
    (AttrType::MaxtransLutTemplate, Group(GroupKind::Template)),
    (AttrType::NoiseLutTemplate, Group(GroupKind::Template)),
    (AttrType::OutputCurrentTemplate, Group(GroupKind::Template)),
    (AttrType::PowerLutTemplate, Group(GroupKind::Template)),
    (AttrType::PropagationLutTemplate, Group(GroupKind::Template)),
    (AttrType::LuTableTemplate, Group(GroupKind::LuTableTemplate)),
    (AttrType::Model, Group(GroupKind::Model)),
    (AttrType::FallNetDelay, Group(GroupKind::Table)),
    (AttrType::RiseNetDelay, Group(GroupKind::Table)),
    (AttrType::FallTransitionDegradation, Group(GroupKind::Table)),
    (AttrType::RiseTransitionDegradation, Group(GroupKind::Table)),
    (AttrType::FpgaIsd, Group(GroupKind::FpgaIsd)),
    (AttrType::InputVoltage, Group(GroupKind::InputVoltage)),
    (AttrType::OutputVoltage, Group(GroupKind::OutputVoltage)),
    (AttrType::OperatingConditions, Group(GroupKind::OperatingConditions)),
    (AttrType::Part, Group(GroupKind::Part)),
    (AttrType::PolyTemplate, Group(GroupKind::PolyTemplate)),
    (AttrType::PowerPolyTemplate, Group(GroupKind::PolyTemplate)),
    (AttrType::PowerSupply, Group(GroupKind::PowerSupply)),
    (AttrType::ScaledCell, Group(GroupKind::ScaledCell)),
    (AttrType::Sensitization, Group(GroupKind::Sensitization)),
    (AttrType::TimingRange, Group(GroupKind::TimingRange)),
    (AttrType::Type, Group(GroupKind::Type)),
    (AttrType::WireLoad, Group(GroupKind::WireLoad)),
    (AttrType::WireLoadSelection, Group(GroupKind::WireLoadSelection)),
    (AttrType::WireLoadTable, Group(GroupKind::WireLoadTable)),
];

const BASE_CURVES_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::BaseCurveType, STRING),
    (AttrType::CurveX, Complex(HeaderShape::FloatVector)),
    (AttrType::CurveY, Complex(HeaderShape::IntFloatVector)),
];

const COMPACT_LUT_TEMPLATE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::BaseCurvesGroup, STRING),
    (AttrType::Variable1, STRING),
    (AttrType::Variable2, STRING),
    (AttrType::Variable3, STRING),
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Index2, Complex(HeaderShape::FloatVector)),
    (AttrType::Index3, Complex(HeaderShape::FloatVector)),
];

const DOMAIN_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::CalcMode, STRING),
    (AttrType::Coefs, Complex(HeaderShape::FloatVector)),
    (AttrType::Orders, Complex(HeaderShape::IntVector)),
    (AttrType::Variable1Range, Complex(HeaderShape::FloatFloat)),
    (AttrType::Variable2Range, Complex(HeaderShape::FloatFloat)),
    (AttrType::Variable3Range, Complex(HeaderShape::FloatFloat)),
];

const FPGA_ISD_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Drive, STRING),
    (AttrType::IoType, STRING),
    (AttrType::Slew, STRING),
];

const INPUT_VOLTAGE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Vil, EXPR),
    (AttrType::Vih, EXPR),
    (AttrType::Vimin, EXPR),
    (AttrType::Vimax, EXPR),
];

const OUTPUT_VOLTAGE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Vol, EXPR),
    (AttrType::Voh, EXPR),
    (AttrType::Vomin, EXPR),
    (AttrType::Vomax, EXPR),
];

const OPERATING_CONDITIONS_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::CalcMode, STRING),
    (AttrType::Parameter1, FLOAT),
    (AttrType::Parameter2, FLOAT),
    (AttrType::Parameter3, FLOAT),
    (AttrType::Parameter4, FLOAT),
    (AttrType::Parameter5, FLOAT),
    (AttrType::Process, FLOAT),
    (AttrType::Temperature, FLOAT),
    (AttrType::TreeType, STRING),
    (AttrType::Voltage, FLOAT),
    (AttrType::PowerRail, Complex(HeaderShape::StrFloat)),
];

const PART_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::DefaultStepLevel, STRING),
    (AttrType::FpgaIsd, STRING),
    (AttrType::NumBlockrams, INT),
    (AttrType::NumCols, INT),
    (AttrType::NumFfs, INT),
    (AttrType::NumLuts, INT),
    (AttrType::NumRows, INT),
    (AttrType::PinCount, INT),
    (AttrType::MaxCount, Complex(HeaderShape::StrInt)),
    (AttrType::ValidSpeedGrade, Complex(HeaderShape::StrList)),
    (AttrType::ValidStepLevels, Complex(HeaderShape::StrList)),
    (AttrType::SpeedGrade, Group(GroupKind::SpeedGrade)),
];

const SPEED_GRADE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::FpgaIsd, STRING),
    (AttrType::StepLevel, Complex(HeaderShape::Str)),
];

const POLY_TEMPLATE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Variables, Complex(HeaderShape::StrList)),
    (AttrType::Variable1Range, Complex(HeaderShape::FloatFloat)),
    (AttrType::Variable2Range, Complex(HeaderShape::FloatFloat)),
    (AttrType::Variable3Range, Complex(HeaderShape::FloatFloat)),
    (AttrType::Mapping, Complex(HeaderShape::StrStr)),
    (AttrType::Orders, Complex(HeaderShape::IntVector)),
    (AttrType::Domain, Group(GroupKind::Domain)),
];

const POWER_SUPPLY_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::DefaultPowerRail, STRING),
    (AttrType::PowerRail, Complex(HeaderShape::StrFloat)),
];

const SENSITIZATION_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::PinNames, Complex(HeaderShape::StrList)),
    (AttrType::Vector, Complex(HeaderShape::IntStr)),
];

const TABLE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Index2, Complex(HeaderShape::FloatVector)),
    (AttrType::Index3, Complex(HeaderShape::FloatVector)),
    (AttrType::Values, Complex(HeaderShape::Values)),
    (AttrType::Orders, Complex(HeaderShape::IntVector)),
    (AttrType::Coefs, Complex(HeaderShape::FloatVector)),
    (AttrType::Variable1Range, Complex(HeaderShape::FloatFloat)),
    (AttrType::Variable2Range, Complex(HeaderShape::FloatFloat)),
    (AttrType::Variable3Range, Complex(HeaderShape::FloatFloat)),
    (AttrType::Domain, Group(GroupKind::Domain)),
];

const TEMPLATE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Variable1, STRING),
    (AttrType::Variable2, STRING),
    (AttrType::Variable3, STRING),
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Index2, Complex(HeaderShape::FloatVector)),
    (AttrType::Index3, Complex(HeaderShape::FloatVector)),
];

const LU_TABLE_TEMPLATE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Variable1, VAR_TYPE),
    (AttrType::Variable2, VAR_TYPE),
    (AttrType::Variable3, VAR_TYPE),
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Index2, Complex(HeaderShape::FloatVector)),
    (AttrType::Index3, Complex(HeaderShape::FloatVector)),
];

const TIMING_RANGE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::FasterFactor, FLOAT),
    (AttrType::SlowerFactor, FLOAT),
];

const TYPE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::BaseType, STRING),
    (AttrType::BitFrom, INT),
    (AttrType::BitTo, INT),
    (AttrType::BitWidth, INT),
    (AttrType::DataType, STRING),
    (AttrType::Downto, BOOL),
];

const WIRE_LOAD_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Area, FLOAT),
    (AttrType::Capacitance, FLOAT),
    (AttrType::Resistance, FLOAT),
    (AttrType::Slope, FLOAT),
    (AttrType::FanoutLength, Complex(HeaderShape::FanoutLength)),
];

const WIRE_LOAD_SELECTION_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::WireLoadFromArea, Complex(HeaderShape::FloatFloatStr)),
];

const WIRE_LOAD_TABLE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::FanoutArea, Complex(HeaderShape::IntFloat)),
    (AttrType::FanoutCapacitance, Complex(HeaderShape::IntFloat)),
    (AttrType::FanoutLength, Complex(HeaderShape::IntFloat)),
    (AttrType::FanoutResistance, Complex(HeaderShape::IntFloat)),
];

const CELL_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Area, FLOAT),
    (AttrType::AuxiliaryPadCell, BOOL),
    (AttrType::BaseName, STRING),
    (AttrType::BusNamingStyle, STRING),
    (AttrType::CellFootprint, STRING),
    (AttrType::CellLeakagePower, FLOAT),
    (AttrType::ClockGatingIntegratedCell, STRING),
    (AttrType::ContentionCondition, FUNCTION),
    (AttrType::DontFault, STRING),
    (AttrType::DontTouch, BOOL),
    (AttrType::DontUse, BOOL),
    (AttrType::DriverType, STRING),
    (AttrType::EdifName, STRING),
    (AttrType::EmTempDegradationFactor, FLOAT),
    (AttrType::FpgaCellType, STRING),
    (AttrType::FpgaDomainStyle, STRING),
    (AttrType::GeometryPrint, STRING),
    (AttrType::HandleNegativeConstraint, BOOL),
    (AttrType::InterfaceTiming, BOOL),
    (AttrType::IoType, STRING),
    (AttrType::IsClockGatingCell, BOOL),
    (AttrType::IsIsolationCell, BOOL),
    (AttrType::IsLevelShifter, BOOL),
    (AttrType::LevelShifterType, STRING),
    (AttrType::MapOnly, BOOL),
    (AttrType::PadCell, BOOL),
    (AttrType::PadType, STRING),
    (AttrType::PowerCellType, STRING),
    (AttrType::PowerGatingCell, STRING),
    (AttrType::Preferred, BOOL),
    (AttrType::ScalingFactors, STRING),
    (AttrType::SensitizationMaster, STRING),
    (AttrType::SingleBitDegenerate, STRING),
    (AttrType::SlewType, STRING),
    (AttrType::SwitchCellType, STRING),
    (AttrType::ThresholdVoltageGroup, STRING),
    (AttrType::TimingModelType, STRING),
    (AttrType::UseForSizeOnly, BOOL),
    (AttrType::VhdlName, STRING),
    (AttrType::InputVoltageRange, Complex(HeaderShape::FloatFloat)),
    (AttrType::OutputVoltageRange, Complex(HeaderShape::FloatFloat)),
    (AttrType::PinEqual, Complex(HeaderShape::Str)),
    (AttrType::PinNameMap, Complex(HeaderShape::StrList)),
    (AttrType::PinOpposite, Complex(HeaderShape::StrStr)),
    (AttrType::RailConnection, Complex(HeaderShape::StrStr)),
    (AttrType::ResourceUsage, Complex(HeaderShape::StrStr)),
    (AttrType::Bundle, Group(GroupKind::Bundle)),
    (AttrType::Bus, Group(GroupKind::Bus)),
    (AttrType::DynamicCurrent, Group(GroupKind::DynamicCurrent)),
    (AttrType::Ff, Group(GroupKind::Ff)),
    (AttrType::FfBank, Group(GroupKind::FfBank)),
    (AttrType::FpgaCondition, Group(GroupKind::FpgaCondition)),
    (AttrType::FunctionalYieldMetric, Group(GroupKind::FunctionalYieldMetric)),
    (AttrType::GeneratedClock, Group(GroupKind::GeneratedClock)),
    (AttrType::IntrinsicParasitic, Group(GroupKind::IntrinsicParasitic)),
    (AttrType::Latch, Group(GroupKind::Latch)),
    (AttrType::LatchBank, Group(GroupKind::LatchBank)),
    (AttrType::LeakageCurrent, Group(GroupKind::LeakageCurrent)),
    (AttrType::LeakagePower, Group(GroupKind::LeakagePower)),
    (AttrType::Lut, Group(GroupKind::Lut)),
    (AttrType::ModeDefinition, Group(GroupKind::ModeDefinition)),
    (AttrType::PgPin, Group(GroupKind::PgPin)),
    (AttrType::Pin, Group(GroupKind::Pin)),
    (AttrType::RoutingTrack, Group(GroupKind::RoutingTrack)),
    (AttrType::Statetable, Group(GroupKind::Statetable)),
    (AttrType::TestCell, Group(GroupKind::TestCell)),
    (AttrType::Type, Group(GroupKind::Type)),
];

const MODEL_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Area, FLOAT),
    (AttrType::AuxiliaryPadCell, BOOL),
    (AttrType::BaseName, STRING),
    (AttrType::BusNamingStyle, STRING),
    (AttrType::CellFootprint, STRING),
    (AttrType::CellLeakagePower, FLOAT),
    (AttrType::ClockGatingIntegratedCell, STRING),
    (AttrType::ContentionCondition, FUNCTION),
    (AttrType::DontFault, STRING),
    (AttrType::DontTouch, BOOL),
    (AttrType::DontUse, BOOL),
    (AttrType::DriverType, STRING),
    (AttrType::EdifName, STRING),
    (AttrType::EmTempDegradationFactor, FLOAT),
    (AttrType::FpgaCellType, STRING),
    (AttrType::FpgaDomainStyle, STRING),
    (AttrType::GeometryPrint, STRING),
    (AttrType::HandleNegativeConstraint, BOOL),
    (AttrType::InterfaceTiming, BOOL),
    (AttrType::IoType, STRING),
    (AttrType::IsClockGatingCell, BOOL),
    (AttrType::IsIsolationCell, BOOL),
    (AttrType::IsLevelShifter, BOOL),
    (AttrType::LevelShifterType, STRING),
    (AttrType::MapOnly, BOOL),
    (AttrType::PadCell, BOOL),
    (AttrType::PadType, STRING),
    (AttrType::PowerCellType, STRING),
    (AttrType::PowerGatingCell, STRING),
    (AttrType::Preferred, BOOL),
    (AttrType::ScalingFactors, STRING),
    (AttrType::SensitizationMaster, STRING),
    (AttrType::SingleBitDegenerate, STRING),
    (AttrType::SlewType, STRING),
    (AttrType::SwitchCellType, STRING),
    (AttrType::ThresholdVoltageGroup, STRING),
    (AttrType::TimingModelType, STRING),
    (AttrType::UseForSizeOnly, BOOL),
    (AttrType::VhdlName, STRING),
    (AttrType::CellName, STRING),
    (AttrType::InputVoltageRange, Complex(HeaderShape::FloatFloat)),
    (AttrType::OutputVoltageRange, Complex(HeaderShape::FloatFloat)),
    (AttrType::PinEqual, Complex(HeaderShape::Str)),
    (AttrType::PinNameMap, Complex(HeaderShape::StrList)),
    (AttrType::PinOpposite, Complex(HeaderShape::StrStr)),
    (AttrType::RailConnection, Complex(HeaderShape::StrStr)),
    (AttrType::ResourceUsage, Complex(HeaderShape::StrStr)),
    (AttrType::Short, Complex(HeaderShape::StrList)),
    (AttrType::Bundle, Group(GroupKind::Bundle)),
    (AttrType::Bus, Group(GroupKind::Bus)),
    (AttrType::DynamicCurrent, Group(GroupKind::DynamicCurrent)),
    (AttrType::Ff, Group(GroupKind::Ff)),
    (AttrType::FfBank, Group(GroupKind::FfBank)),
    (AttrType::FpgaCondition, Group(GroupKind::FpgaCondition)),
    (AttrType::FunctionalYieldMetric, Group(GroupKind::FunctionalYieldMetric)),
    (AttrType::GeneratedClock, Group(GroupKind::GeneratedClock)),
    (AttrType::IntrinsicParasitic, Group(GroupKind::IntrinsicParasitic)),
    (AttrType::Latch, Group(GroupKind::Latch)),
    (AttrType::LatchBank, Group(GroupKind::LatchBank)),
    (AttrType::LeakageCurrent, Group(GroupKind::LeakageCurrent)),
    (AttrType::LeakagePower, Group(GroupKind::LeakagePower)),
    (AttrType::Lut, Group(GroupKind::Lut)),
    (AttrType::ModeDefinition, Group(GroupKind::ModeDefinition)),
    (AttrType::PgPin, Group(GroupKind::PgPin)),
    (AttrType::Pin, Group(GroupKind::Pin)),
    (AttrType::RoutingTrack, Group(GroupKind::RoutingTrack)),
    (AttrType::Statetable, Group(GroupKind::Statetable)),
    (AttrType::TestCell, Group(GroupKind::TestCell)),
    (AttrType::Type, Group(GroupKind::Type)),
];

const DYNAMIC_CURRENT_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::RelatedInputs, STRING),
    (AttrType::RelatedOutputs, STRING),
    (AttrType::When, FUNCTION),
    (AttrType::TypicalCapacitances, Complex(HeaderShape::FloatVector)),
    (AttrType::SwitchingGroup, Group(GroupKind::SwitchingGroup)),
];

const SWITCHING_GROUP_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::MaxInputSwitchingCount, INT),
    (AttrType::MinInputSwitchingCount, INT),
    (AttrType::InputSwitchingCondition, Complex(HeaderShape::StrList)),
    (AttrType::OutputSwitchingCondition, Complex(HeaderShape::StrList)),
    (AttrType::PgCurrent, Group(GroupKind::SgPgCurrent)),
];

const SG_PG_CURRENT_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Vector, Group(GroupKind::SgVector)),
];

const SG_VECTOR_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::IndexOutput, STRING),
    (AttrType::ReferenceTime, FLOAT),
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Index2, Complex(HeaderShape::FloatVector)),
    (AttrType::Index3, Complex(HeaderShape::FloatVector)),
    (AttrType::Index4, Complex(HeaderShape::FloatVector)),
    (AttrType::Values, Complex(HeaderShape::Values)),
];

const FF_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Clear, FUNCTION),
    (AttrType::ClearPresetVar1, STRING),
    (AttrType::ClearPresetVar2, STRING),
    (AttrType::ClockedOn, FUNCTION),
    (AttrType::ClockedOnAlso, FUNCTION),
    (AttrType::NextState, FUNCTION),
    (AttrType::Preset, FUNCTION),
];

const FPGA_CONDITION_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::FpgaConditionValue, Group(GroupKind::FpgaConditionValue)),
];

const FPGA_CONDITION_VALUE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::FpgaArcCondition, BOOL),
];

const FUNCTIONAL_YIELD_METRIC_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::AverageNumberOfFaults, Group(GroupKind::AverageNumberOfFaults)),
];

const AVERAGE_NUMBER_OF_FAULTS_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Variable1, STRING),
    (AttrType::Variable2, STRING),
    (AttrType::Values, Complex(HeaderShape::Values)),
];

const LEAKAGE_CURRENT_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::When, FUNCTION),
    (AttrType::Value, FLOAT),
    (AttrType::PgCurrent, Group(GroupKind::LcPgCurrent)),
    (AttrType::GateLeakage, Group(GroupKind::GateLeakage)),
];

const LC_PG_CURRENT_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Value, FLOAT),
];

const GATE_LEAKAGE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::InputHighValue, FLOAT),
    (AttrType::InputLowValue, FLOAT),
];

const LEAKAGE_POWER_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::PowerLevel, STRING),
    (AttrType::RelatedPgPin, STRING),
    (AttrType::When, FUNCTION),
    (AttrType::Value, FLOAT),
];

const GENERATED_CLOCK_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::ClockPin, STRING),
    (AttrType::MasterPin, STRING),
    (AttrType::DividedBy, INT),
    (AttrType::MultipliedBy, INT),
    (AttrType::Invert, BOOL),
    (AttrType::DutyCycle, FLOAT),
    (AttrType::Edges, Complex(HeaderShape::IntList)),
    (AttrType::Shifts, Complex(HeaderShape::FloatList)),
];

const INTRINSIC_PARASITIC_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::When, FUNCTION),
    (AttrType::IntrinsicCapacitance, Group(GroupKind::IntrinsicCapacitance)),
    (AttrType::IntrinsicResistance, Group(GroupKind::IntrinsicResistance)),
    (AttrType::TotalCapacitance, Group(GroupKind::TotalCapacitance)),
];

const INTRINSIC_RESISTANCE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::RelatedOutput, STRING),
    (AttrType::Value, FLOAT),
];

const LATCH_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Clear, FUNCTION),
    (AttrType::ClearPresetVar1, STRING),
    (AttrType::ClearPresetVar2, STRING),
    (AttrType::DataIn, FUNCTION),
    (AttrType::Enable, FUNCTION),
    (AttrType::EnableAlso, FUNCTION),
    (AttrType::Preset, FUNCTION),
];

const LUT_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::InputPins, STRING),
];

const MODE_DEFINITION_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::ModeValue, Group(GroupKind::ModeValue)),
];

const MODE_VALUE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::When, FUNCTION),
    (AttrType::SdfCond, STRING),
];

const PG_PIN_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::VoltageName, STRING),
    (AttrType::PgType, STRING),
];

const ROUTING_TRACK_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Tracks, INT),
    (AttrType::TotalTrackArea, FLOAT),
];

const STATETABLE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Table, STRING),
];

const TEST_CELL_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Ff, Group(GroupKind::Ff)),
    (AttrType::FfBank, Group(GroupKind::FfBank)),
    (AttrType::Latch, Group(GroupKind::Latch)),
    (AttrType::LatchBank, Group(GroupKind::LatchBank)),
    (AttrType::Pin, Group(GroupKind::Pin)),
    (AttrType::Statetable, Group(GroupKind::Statetable)),
];

const PIN_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::BitWidth, INT),
    (AttrType::Capacitance, FLOAT),
    (AttrType::Clock, BOOL),
    (AttrType::ClockGateClockPin, BOOL),
    (AttrType::ClockGateEnablePin, BOOL),
    (AttrType::ClockGateTestPin, BOOL),
    (AttrType::ClockGateObsPin, BOOL),
    (AttrType::ClockGateOutPin, BOOL),
    (AttrType::ComplementaryPin, STRING),
    (AttrType::ConnectionClass, STRING),
    (AttrType::Direction, DIRECTION),
    (AttrType::DontFault, STRING),
    (AttrType::DriveCurrent, FLOAT),
    (AttrType::DriverType, STRING),
    (AttrType::FallCapacitance, FLOAT),
    (AttrType::RiseCapacitance, FLOAT),
    (AttrType::FallCurrentSlopeAfterThreshold, FLOAT),
    (AttrType::FallCurrentSlopeBeforeThreshold, FLOAT),
    (AttrType::RiseCurrentSlopeAfterThreshold, FLOAT),
    (AttrType::RiseCurrentSlopeBeforeThreshold, FLOAT),
    (AttrType::FallTimeAfterThreshold, FLOAT),
    (AttrType::FallTimeBeforeThreshold, FLOAT),
    (AttrType::RiseTimeAfterThreshold, FLOAT),
    (AttrType::RiseTimeBeforeThreshold, FLOAT),
    (AttrType::FanoutLoad, FLOAT),
    (AttrType::FaultModel, STRING),
    (AttrType::Function, FUNCTION),
    (AttrType::HasBuiltinPad, BOOL),
    (AttrType::Hysteresis, BOOL),
    (AttrType::InputMap, STRING),
    (AttrType::InputSignalLevel, STRING),
    (AttrType::InputThresholdPctFall, FLOAT),
    (AttrType::InputThresholdPctRise, FLOAT),
    (AttrType::InputVoltage, STRING),
    (AttrType::InternalNode, STRING),
    (AttrType::InvertedOutput, BOOL),
    (AttrType::IsPad, BOOL),
    (AttrType::IsolationCellEnablePin, BOOL),
    (AttrType::LevelShifterEnablePin, BOOL),
    (AttrType::MapToLogic, EXPR),
    (AttrType::MaxCapacitance, FLOAT),
    (AttrType::MinCapacitance, FLOAT),
    (AttrType::MaxFanout, FLOAT),
    (AttrType::MinFanout, FLOAT),
    (AttrType::MaxInputNoiseWidth, FLOAT),
    (AttrType::MinInputNoiseWidth, FLOAT),
    (AttrType::MaxTransition, FLOAT),
    (AttrType::MinTransition, FLOAT),
    (AttrType::MinPeriod, FLOAT),
    (AttrType::MinPulseWidthHigh, FLOAT),
    (AttrType::MinPulseWidthLow, FLOAT),
    (AttrType::MulticellPadPin, BOOL),
    (AttrType::NextstateType, STRING),
    (AttrType::OutputSignalLevel, STRING),
    (AttrType::OutputVoltage, STRING),
    (AttrType::PgFunction, FUNCTION),
    (AttrType::PinFuncType, STRING),
    (AttrType::PowerDownFunction, FUNCTION),
    (AttrType::PreferTied, FUNCTION),
    (AttrType::PrimaryOutput, BOOL),
    (AttrType::PullingCurrent, FLOAT),
    (AttrType::PullingResistance, FLOAT),
    (AttrType::PulseClock, STRING),
    (AttrType::RelatedGroundPin, STRING),
    (AttrType::RelatedPowerPin, STRING),
    (AttrType::SignalType, STRING),
    (AttrType::SlewControl, STRING),
    (AttrType::SlewLowerThresholdPctFall, FLOAT),
    (AttrType::SlewLowerThresholdPctRise, FLOAT),
    (AttrType::SlewUpperThresholdPctFall, FLOAT),
    (AttrType::SlewUpperThresholdPctRise, FLOAT),
    (AttrType::StateFunction, FUNCTION),
    (AttrType::StdCellMainRail, BOOL),
    (AttrType::SwitchFunction, FUNCTION),
    (AttrType::SwitchPin, BOOL),
    (AttrType::TestOutputOnly, BOOL),
    (AttrType::ThreeState, FUNCTION),
    (AttrType::VhdlName, STRING),
    (AttrType::XFunction, FUNCTION),
    (AttrType::FallCapacitanceRange, Complex(HeaderShape::FloatFloat)),
    (AttrType::RiseCapacitanceRange, Complex(HeaderShape::FloatFloat)),
    (AttrType::PowerGatingPin, Complex(HeaderShape::StrInt)),
    (AttrType::CcsnFirstStage, Group(GroupKind::Ccsn)),
    (AttrType::CcsnLastStage, Group(GroupKind::Ccsn)),
    (AttrType::DcCurrent, Group(GroupKind::Table)),
    (AttrType::Electromigration, Group(GroupKind::Electromigration)),
    (AttrType::HyperbolicNoiseAboveHigh, Group(GroupKind::HyperbolicNoise)),
    (AttrType::HyperbolicNoiseBelowLow, Group(GroupKind::HyperbolicNoise)),
    (AttrType::HyperbolicNoiseHigh, Group(GroupKind::HyperbolicNoise)),
    (AttrType::HyperbolicNoiseLow, Group(GroupKind::HyperbolicNoise)),
    (AttrType::InternalPower, Group(GroupKind::InternalPower)),
    (AttrType::MaxCap, Group(GroupKind::MaxCap)),
    (AttrType::MaxTrans, Group(GroupKind::MaxTrans)),
    (AttrType::MinPulseWidth, Group(GroupKind::MinPulseWidth)),
    (AttrType::MinimumPeriod, Group(GroupKind::MinimumPeriod)),
    (AttrType::PinCapacitance, Group(GroupKind::PinCapacitance)),
    (AttrType::Timing, Group(GroupKind::Timing)),
    (AttrType::Tlatch, Group(GroupKind::Tlatch)),
];

const BUNDLE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::BitWidth, INT),
    (AttrType::Capacitance, FLOAT),
    (AttrType::Clock, BOOL),
    (AttrType::ClockGateClockPin, BOOL),
    (AttrType::ClockGateEnablePin, BOOL),
    (AttrType::ClockGateTestPin, BOOL),
    (AttrType::ClockGateObsPin, BOOL),
    (AttrType::ClockGateOutPin, BOOL),
    (AttrType::ComplementaryPin, STRING),
    (AttrType::ConnectionClass, STRING),
    (AttrType::Direction, DIRECTION),
    (AttrType::DontFault, STRING),
    (AttrType::DriveCurrent, FLOAT),
    (AttrType::DriverType, STRING),
    (AttrType::FallCapacitance, FLOAT),
    (AttrType::RiseCapacitance, FLOAT),
    (AttrType::FallCurrentSlopeAfterThreshold, FLOAT),
    (AttrType::FallCurrentSlopeBeforeThreshold, FLOAT),
    (AttrType::RiseCurrentSlopeAfterThreshold, FLOAT),
    (AttrType::RiseCurrentSlopeBeforeThreshold, FLOAT),
    (AttrType::FallTimeAfterThreshold, FLOAT),
    (AttrType::FallTimeBeforeThreshold, FLOAT),
    (AttrType::RiseTimeAfterThreshold, FLOAT),
    (AttrType::RiseTimeBeforeThreshold, FLOAT),
    (AttrType::FanoutLoad, FLOAT),
    (AttrType::FaultModel, STRING),
    (AttrType::Function, FUNCTION),
    (AttrType::HasBuiltinPad, BOOL),
    (AttrType::Hysteresis, BOOL),
    (AttrType::InputMap, STRING),
    (AttrType::InputSignalLevel, STRING),
    (AttrType::InputThresholdPctFall, FLOAT),
    (AttrType::InputThresholdPctRise, FLOAT),
    (AttrType::InputVoltage, STRING),
    (AttrType::InternalNode, STRING),
    (AttrType::InvertedOutput, BOOL),
    (AttrType::IsPad, BOOL),
    (AttrType::IsolationCellEnablePin, BOOL),
    (AttrType::LevelShifterEnablePin, BOOL),
    (AttrType::MapToLogic, EXPR),
    (AttrType::MaxCapacitance, FLOAT),
    (AttrType::MinCapacitance, FLOAT),
    (AttrType::MaxFanout, FLOAT),
    (AttrType::MinFanout, FLOAT),
    (AttrType::MaxInputNoiseWidth, FLOAT),
    (AttrType::MinInputNoiseWidth, FLOAT),
    (AttrType::MaxTransition, FLOAT),
    (AttrType::MinTransition, FLOAT),
    (AttrType::MinPeriod, FLOAT),
    (AttrType::MinPulseWidthHigh, FLOAT),
    (AttrType::MinPulseWidthLow, FLOAT),
    (AttrType::MulticellPadPin, BOOL),
    (AttrType::NextstateType, STRING),
    (AttrType::OutputSignalLevel, STRING),
    (AttrType::OutputVoltage, STRING),
    (AttrType::PgFunction, FUNCTION),
    (AttrType::PinFuncType, STRING),
    (AttrType::PowerDownFunction, FUNCTION),
    (AttrType::PreferTied, FUNCTION),
    (AttrType::PrimaryOutput, BOOL),
    (AttrType::PullingCurrent, FLOAT),
    (AttrType::PullingResistance, FLOAT),
    (AttrType::PulseClock, STRING),
    (AttrType::RelatedGroundPin, STRING),
    (AttrType::RelatedPowerPin, STRING),
    (AttrType::SignalType, STRING),
    (AttrType::SlewControl, STRING),
    (AttrType::SlewLowerThresholdPctFall, FLOAT),
    (AttrType::SlewLowerThresholdPctRise, FLOAT),
    (AttrType::SlewUpperThresholdPctFall, FLOAT),
    (AttrType::SlewUpperThresholdPctRise, FLOAT),
    (AttrType::StateFunction, FUNCTION),
    (AttrType::StdCellMainRail, BOOL),
    (AttrType::SwitchFunction, FUNCTION),
    (AttrType::SwitchPin, BOOL),
    (AttrType::TestOutputOnly, BOOL),
    (AttrType::ThreeState, FUNCTION),
    (AttrType::VhdlName, STRING),
    (AttrType::XFunction, FUNCTION),
    (AttrType::Members, Complex(HeaderShape::StrList)),
    (AttrType::CcsnFirstStage, Group(GroupKind::Ccsn)),
    (AttrType::CcsnLastStage, Group(GroupKind::Ccsn)),
    (AttrType::DcCurrent, Group(GroupKind::Table)),
    (AttrType::Electromigration, Group(GroupKind::Electromigration)),
    (AttrType::HyperbolicNoiseAboveHigh, Group(GroupKind::HyperbolicNoise)),
    (AttrType::HyperbolicNoiseBelowLow, Group(GroupKind::HyperbolicNoise)),
    (AttrType::HyperbolicNoiseHigh, Group(GroupKind::HyperbolicNoise)),
    (AttrType::HyperbolicNoiseLow, Group(GroupKind::HyperbolicNoise)),
    (AttrType::InternalPower, Group(GroupKind::InternalPower)),
    (AttrType::MaxCap, Group(GroupKind::MaxCap)),
    (AttrType::MaxTrans, Group(GroupKind::MaxTrans)),
    (AttrType::MinPulseWidth, Group(GroupKind::MinPulseWidth)),
    (AttrType::MinimumPeriod, Group(GroupKind::MinimumPeriod)),
    (AttrType::PinCapacitance, Group(GroupKind::PinCapacitance)),
    (AttrType::Timing, Group(GroupKind::Timing)),
    (AttrType::Tlatch, Group(GroupKind::Tlatch)),
    (AttrType::Pin, Group(GroupKind::Pin)),
];

const BUS_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::BitWidth, INT),
    (AttrType::Capacitance, FLOAT),
    (AttrType::Clock, BOOL),
    (AttrType::ClockGateClockPin, BOOL),
    (AttrType::ClockGateEnablePin, BOOL),
    (AttrType::ClockGateTestPin, BOOL),
    (AttrType::ClockGateObsPin, BOOL),
    (AttrType::ClockGateOutPin, BOOL),
    (AttrType::ComplementaryPin, STRING),
    (AttrType::ConnectionClass, STRING),
    (AttrType::Direction, DIRECTION),
    (AttrType::DontFault, STRING),
    (AttrType::DriveCurrent, FLOAT),
    (AttrType::DriverType, STRING),
    (AttrType::FallCapacitance, FLOAT),
    (AttrType::RiseCapacitance, FLOAT),
    (AttrType::FallCurrentSlopeAfterThreshold, FLOAT),
    (AttrType::FallCurrentSlopeBeforeThreshold, FLOAT),
    (AttrType::RiseCurrentSlopeAfterThreshold, FLOAT),
    (AttrType::RiseCurrentSlopeBeforeThreshold, FLOAT),
    (AttrType::FallTimeAfterThreshold, FLOAT),
    (AttrType::FallTimeBeforeThreshold, FLOAT),
    (AttrType::RiseTimeAfterThreshold, FLOAT),
    (AttrType::RiseTimeBeforeThreshold, FLOAT),
    (AttrType::FanoutLoad, FLOAT),
    (AttrType::FaultModel, STRING),
    (AttrType::Function, FUNCTION),
    (AttrType::HasBuiltinPad, BOOL),
    (AttrType::Hysteresis, BOOL),
    (AttrType::InputMap, STRING),
    (AttrType::InputSignalLevel, STRING),
    (AttrType::InputThresholdPctFall, FLOAT),
    (AttrType::InputThresholdPctRise, FLOAT),
    (AttrType::InputVoltage, STRING),
    (AttrType::InternalNode, STRING),
    (AttrType::InvertedOutput, BOOL),
    (AttrType::IsPad, BOOL),
    (AttrType::IsolationCellEnablePin, BOOL),
    (AttrType::LevelShifterEnablePin, BOOL),
    (AttrType::MapToLogic, EXPR),
    (AttrType::MaxCapacitance, FLOAT),
    (AttrType::MinCapacitance, FLOAT),
    (AttrType::MaxFanout, FLOAT),
    (AttrType::MinFanout, FLOAT),
    (AttrType::MaxInputNoiseWidth, FLOAT),
    (AttrType::MinInputNoiseWidth, FLOAT),
    (AttrType::MaxTransition, FLOAT),
    (AttrType::MinTransition, FLOAT),
    (AttrType::MinPeriod, FLOAT),
    (AttrType::MinPulseWidthHigh, FLOAT),
    (AttrType::MinPulseWidthLow, FLOAT),
    (AttrType::MulticellPadPin, BOOL),
    (AttrType::NextstateType, STRING),
    (AttrType::OutputSignalLevel, STRING),
    (AttrType::OutputVoltage, STRING),
    (AttrType::PgFunction, FUNCTION),
    (AttrType::PinFuncType, STRING),
    (AttrType::PowerDownFunction, FUNCTION),
    (AttrType::PreferTied, FUNCTION),
    (AttrType::PrimaryOutput, BOOL),
    (AttrType::PullingCurrent, FLOAT),
    (AttrType::PullingResistance, FLOAT),
    (AttrType::PulseClock, STRING),
    (AttrType::RelatedGroundPin, STRING),
    (AttrType::RelatedPowerPin, STRING),
    (AttrType::SignalType, STRING),
    (AttrType::SlewControl, STRING),
    (AttrType::SlewLowerThresholdPctFall, FLOAT),
    (AttrType::SlewLowerThresholdPctRise, FLOAT),
    (AttrType::SlewUpperThresholdPctFall, FLOAT),
    (AttrType::SlewUpperThresholdPctRise, FLOAT),
    (AttrType::StateFunction, FUNCTION),
    (AttrType::StdCellMainRail, BOOL),
    (AttrType::SwitchFunction, FUNCTION),
    (AttrType::SwitchPin, BOOL),
    (AttrType::TestOutputOnly, BOOL),
    (AttrType::ThreeState, FUNCTION),
    (AttrType::VhdlName, STRING),
    (AttrType::XFunction, FUNCTION),
    (AttrType::BusType, STRING),
    (AttrType::FallCapacitanceRange, Complex(HeaderShape::FloatFloat)),
    (AttrType::RiseCapacitanceRange, Complex(HeaderShape::FloatFloat)),
    (AttrType::PowerGatingPin, Complex(HeaderShape::StrInt)),
    (AttrType::CcsnFirstStage, Group(GroupKind::Ccsn)),
    (AttrType::CcsnLastStage, Group(GroupKind::Ccsn)),
    (AttrType::DcCurrent, Group(GroupKind::Table)),
    (AttrType::Electromigration, Group(GroupKind::Electromigration)),
    (AttrType::HyperbolicNoiseAboveHigh, Group(GroupKind::HyperbolicNoise)),
    (AttrType::HyperbolicNoiseBelowLow, Group(GroupKind::HyperbolicNoise)),
    (AttrType::HyperbolicNoiseHigh, Group(GroupKind::HyperbolicNoise)),
    (AttrType::HyperbolicNoiseLow, Group(GroupKind::HyperbolicNoise)),
    (AttrType::InternalPower, Group(GroupKind::InternalPower)),
    (AttrType::MaxCap, Group(GroupKind::MaxCap)),
    (AttrType::MaxTrans, Group(GroupKind::MaxTrans)),
    (AttrType::MinPulseWidth, Group(GroupKind::MinPulseWidth)),
    (AttrType::MinimumPeriod, Group(GroupKind::MinimumPeriod)),
    (AttrType::PinCapacitance, Group(GroupKind::PinCapacitance)),
    (AttrType::Timing, Group(GroupKind::Timing)),
    (AttrType::Tlatch, Group(GroupKind::Tlatch)),
    (AttrType::Pin, Group(GroupKind::Pin)),
];

const CCSN_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::IsNeeded, BOOL),
    (AttrType::IsInverting, BOOL),
    (AttrType::StageType, STRING),
    (AttrType::MillerCapFall, FLOAT),
    (AttrType::MillerCapRise, FLOAT),
    (AttrType::When, FUNCTION),
    (AttrType::DcCurrent, Group(GroupKind::CcsnTable)),
    (AttrType::OutputVoltageFall, Group(GroupKind::CcsnTable)),
    (AttrType::OutputVoltageRise, Group(GroupKind::CcsnTable)),
    (AttrType::PropagatedNoiseHigh, Group(GroupKind::CcsnTable)),
    (AttrType::PropagatedNoiseLow, Group(GroupKind::CcsnTable)),
];

const CCSN_TABLE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Index2, Complex(HeaderShape::FloatVector)),
    (AttrType::Index3, Complex(HeaderShape::FloatVector)),
    (AttrType::Index4, Complex(HeaderShape::FloatVector)),
    (AttrType::Values, Complex(HeaderShape::Values)),
];

const ELECTROMIGRATION_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::RelatedPin, STRING),
    (AttrType::RelatedBusPins, STRING),
    (AttrType::When, FUNCTION),
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Index2, Complex(HeaderShape::FloatVector)),
    (AttrType::Values, Complex(HeaderShape::Values)),
    (AttrType::EmMaxToggleRate, Group(GroupKind::EmMaxToggleRate)),
];

const EM_MAX_TOGGLE_RATE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Index2, Complex(HeaderShape::FloatVector)),
    (AttrType::Values, Complex(HeaderShape::Values)),
];

const HYPERBOLIC_NOISE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::AreaCoefficient, FLOAT),
    (AttrType::HeightCoefficient, FLOAT),
    (AttrType::WidthCoefficient, FLOAT),
];

const INTERNAL_POWER_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::EqualOrOppositeOutput, STRING),
    (AttrType::FallingTogetherGroup, STRING),
    (AttrType::RisingTogetherGroup, STRING),
    (AttrType::PowerLevel, STRING),
    (AttrType::RelatedPin, STRING),
    (AttrType::RelatedPgPin, STRING),
    (AttrType::SwitchingInterval, FLOAT),
    (AttrType::SwitchingTogetherGroup, STRING),
    (AttrType::When, FUNCTION),
    (AttrType::Domain, Group(GroupKind::Domain)),
    (AttrType::Power, Group(GroupKind::Power)),
    (AttrType::FallPower, Group(GroupKind::Power)),
    (AttrType::RisePower, Group(GroupKind::Power)),
];

const POWER_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Index2, Complex(HeaderShape::FloatVector)),
    (AttrType::Index3, Complex(HeaderShape::FloatVector)),
    (AttrType::Values, Complex(HeaderShape::Values)),
    (AttrType::Orders, Complex(HeaderShape::IntVector)),
    (AttrType::Coefs, Complex(HeaderShape::FloatVector)),
    (AttrType::Domain, Group(GroupKind::Domain)),
];

const MAX_TRANS_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Index2, Complex(HeaderShape::FloatVector)),
    (AttrType::Values, Complex(HeaderShape::Values)),
    (AttrType::Variable1Range, Complex(HeaderShape::FloatVector)),
    (AttrType::Variable2Range, Complex(HeaderShape::FloatVector)),
    (AttrType::VariableNRange, Complex(HeaderShape::FloatVector)),
    (AttrType::Orders, Complex(HeaderShape::IntVector)),
    (AttrType::Coefs, Complex(HeaderShape::FloatVector)),
];

const MIN_PULSE_WIDTH_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::ConstraintHigh, FLOAT),
    (AttrType::ConstraintLow, FLOAT),
    (AttrType::When, FUNCTION),
    (AttrType::SdfCond, STRING),
];

const MINIMUM_PERIOD_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Constraint, FLOAT),
    (AttrType::When, FUNCTION),
    (AttrType::SdfCond, STRING),
];

const PIN_CAPACITANCE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Capacitance, Group(GroupKind::PcCapacitance)),
    (AttrType::FallCapacitance, Group(GroupKind::PcCapacitance)),
    (AttrType::RiseCapacitance, Group(GroupKind::PcCapacitance)),
    (AttrType::FallCapacitanceRange, Group(GroupKind::PcCapacitanceRange)),
    (AttrType::RiseCapacitanceRange, Group(GroupKind::PcCapacitanceRange)),
];

const PC_CAPACITANCE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Orders, Complex(HeaderShape::IntVector)),
    (AttrType::Coefs, Complex(HeaderShape::FloatVector)),
];

const PC_CAPACITANCE_RANGE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Lower, Group(GroupKind::PcCapacitanceBound)),
    (AttrType::Upper, Group(GroupKind::PcCapacitanceBound)),
];

const PC_CAPACITANCE_BOUND_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Variable1Range, Complex(HeaderShape::FloatVector)),
    (AttrType::Variable2Range, Complex(HeaderShape::FloatVector)),
    (AttrType::VariableNRange, Complex(HeaderShape::FloatVector)),
    (AttrType::Orders, Complex(HeaderShape::IntVector)),
    (AttrType::Coefs, Complex(HeaderShape::FloatVector)),
];

const TLATCH_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::EdgeType, STRING),
    (AttrType::Tdisable, BOOL),
];

const TIMING_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::ClockGatingFlag, BOOL),
    (AttrType::DefaultTiming, BOOL),
    (AttrType::FallResistance, FLOAT),
    (AttrType::RiseResistance, FLOAT),
    (AttrType::FpgaArcCondition, FUNCTION),
    (AttrType::FpgaDomainStyle, STRING),
    (AttrType::InterdependenceId, INT),
    (AttrType::IntrinsicFall, FLOAT),
    (AttrType::IntrinsicRise, FLOAT),
    (AttrType::RelatedBusEquivalent, STRING),
    (AttrType::RelatedBusPins, STRING),
    (AttrType::RelatedOutputPin, STRING),
    (AttrType::RelatedPin, STRING),
    (AttrType::SdfCond, STRING),
    (AttrType::SdfCondEnd, STRING),
    (AttrType::SdfCondStart, STRING),
    (AttrType::SdfEdges, STRING),
    (AttrType::SlopeFall, FLOAT),
    (AttrType::SlopeRise, FLOAT),
    (AttrType::SteadyStateResistanceAboveHigh, FLOAT),
    (AttrType::SteadyStateResistanceBelowLow, FLOAT),
    (AttrType::SteadyStateResistanceHigh, FLOAT),
    (AttrType::SteadyStateResistanceLow, FLOAT),
    (AttrType::TiedOff, BOOL),
    (AttrType::TimingSense, TIMING_SENSE),
    (AttrType::TimingType, TIMING_TYPE),
    (AttrType::WaveFallSamplingIndex, INT),
    (AttrType::WaveRiseSamplingIndex, INT),
    (AttrType::When, FUNCTION),
    (AttrType::WhenEnd, FUNCTION),
    (AttrType::WhenStart, FUNCTION),
    (AttrType::FallDelayIntercept, Complex(HeaderShape::IntFloat)),
    (AttrType::RiseDelayIntercept, Complex(HeaderShape::IntFloat)),
    (AttrType::FallPinResistance, Complex(HeaderShape::IntFloat)),
    (AttrType::RisePinResistance, Complex(HeaderShape::IntFloat)),
    (AttrType::Mode, Complex(HeaderShape::StrStr)),
    (AttrType::PinNameMap, Complex(HeaderShape::StrList)),
    (AttrType::WaveFall, Complex(HeaderShape::IntVector)),
    (AttrType::WaveRise, Complex(HeaderShape::IntVector)),
    (AttrType::WaveFallTimeInterval, Complex(HeaderShape::FloatVector)),
    (AttrType::WaveRiseTimeInterval, Complex(HeaderShape::FloatVector)),
    (AttrType::CellDegradation, Group(GroupKind::CellDegradation)),
    (AttrType::CellFall, Group(GroupKind::Table)),
    (AttrType::CellRise, Group(GroupKind::Table)),
    (AttrType::CompactCcsFall, Group(GroupKind::CompactCcs)),
    (AttrType::CompactCcsRise, Group(GroupKind::CompactCcs)),
    (AttrType::FallConstraint, Group(GroupKind::Table)),
    (AttrType::FallPropagation, Group(GroupKind::Table)),
    (AttrType::FallTransition, Group(GroupKind::Table)),
    (AttrType::RiseConstraint, Group(GroupKind::Table)),
    (AttrType::RisePropagation, Group(GroupKind::Table)),
    (AttrType::RiseTransition, Group(GroupKind::Table)),
    (AttrType::NoiseImmunityAboveHigh, Group(GroupKind::NoiseImmunity)),
    (AttrType::NoiseImmunityBelowLow, Group(GroupKind::NoiseImmunity)),
    (AttrType::NoiseImmunityHigh, Group(GroupKind::NoiseImmunity)),
    (AttrType::NoiseImmunityLow, Group(GroupKind::NoiseImmunity)),
    (AttrType::OutputCurrentFall, Group(GroupKind::OutputCurrent)),
    (AttrType::OutputCurrentRise, Group(GroupKind::OutputCurrent)),
    (AttrType::PropagatedNoiseHeightAboveHigh, Group(GroupKind::PropagatedNoise)),
    (AttrType::PropagatedNoiseHeightBelowLow, Group(GroupKind::PropagatedNoise)),
    (AttrType::PropagatedNoiseHeightHigh, Group(GroupKind::PropagatedNoise)),
    (AttrType::PropagatedNoiseHeightLow, Group(GroupKind::PropagatedNoise)),
    (AttrType::PropagatedNoisePeakTimeRatioAboveHigh, Group(GroupKind::PropagatedNoise)),
    (AttrType::PropagatedNoisePeakTimeRatioBelowLow, Group(GroupKind::PropagatedNoise)),
    (AttrType::PropagatedNoisePeakTimeRatioHigh, Group(GroupKind::PropagatedNoise)),
    (AttrType::PropagatedNoisePeakTimeRatioLow, Group(GroupKind::PropagatedNoise)),
    (AttrType::PropagatedNoiseWidthAboveHigh, Group(GroupKind::PropagatedNoise)),
    (AttrType::PropagatedNoiseWidthBelowLow, Group(GroupKind::PropagatedNoise)),
    (AttrType::PropagatedNoiseWidthHigh, Group(GroupKind::PropagatedNoise)),
    (AttrType::PropagatedNoiseWidthLow, Group(GroupKind::PropagatedNoise)),
    (AttrType::ReceiverCapacitance1Fall, Group(GroupKind::ReceiverCapacitance)),
    (AttrType::ReceiverCapacitance1Rise, Group(GroupKind::ReceiverCapacitance)),
    (AttrType::ReceiverCapacitance2Fall, Group(GroupKind::ReceiverCapacitance)),
    (AttrType::ReceiverCapacitance2Rise, Group(GroupKind::ReceiverCapacitance)),
    (AttrType::RetainingFall, Group(GroupKind::Table)),
    (AttrType::RetainingRise, Group(GroupKind::Table)),
    (AttrType::RetainFallSlew, Group(GroupKind::Table)),
    (AttrType::RetainRiseSlew, Group(GroupKind::Table)),
    (AttrType::SteadyStateCurrentHigh, Group(GroupKind::Table)),
    (AttrType::SteadyStateCurrentLow, Group(GroupKind::Table)),
    (AttrType::SteadyStateCurrentTristate, Group(GroupKind::Table)),
];

const CELL_DEGRADATION_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Coefs, Complex(HeaderShape::FloatVector)),
    (AttrType::Orders, Complex(HeaderShape::IntVector)),
    (AttrType::Values, Complex(HeaderShape::Values)),
    (AttrType::VariableNRange, Complex(HeaderShape::FloatVector)),
    (AttrType::Domain, Group(GroupKind::Domain)),
];

const COMPACT_CCS_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::BaseCurvesGroup, STRING),
    (AttrType::Values, Complex(HeaderShape::Values)),
];

const NOISE_IMMUNITY_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Coefs, Complex(HeaderShape::FloatVector)),
    (AttrType::Orders, Complex(HeaderShape::IntVector)),
    (AttrType::Values, Complex(HeaderShape::Values)),
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Index2, Complex(HeaderShape::FloatVector)),
    (AttrType::Index3, Complex(HeaderShape::FloatVector)),
    (AttrType::Domain, Group(GroupKind::Domain)),
];

const OUTPUT_CURRENT_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Vector, Group(GroupKind::OcVector)),
];

const OC_VECTOR_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::ReferenceTime, FLOAT),
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Index2, Complex(HeaderShape::FloatVector)),
    (AttrType::Index3, Complex(HeaderShape::FloatVector)),
    (AttrType::Values, Complex(HeaderShape::Values)),
];

const RECEIVER_CAPACITANCE_ATTRS: &[(AttrType, Syntax)] = &[
    (AttrType::Index1, Complex(HeaderShape::FloatVector)),
    (AttrType::Index2, Complex(HeaderShape::FloatVector)),
    (AttrType::Index3, Complex(HeaderShape::FloatVector)),
    (AttrType::Values, Complex(HeaderShape::Values)),
];

impl GroupKind {
    pub const ALL: &'static [GroupKind] = &[
        GroupKind::Library,
        GroupKind::BaseCurves,
        GroupKind::CompactLutTemplate,
        GroupKind::Domain,
        GroupKind::FpgaIsd,
        GroupKind::InputVoltage,
        GroupKind::OutputVoltage,
        GroupKind::OperatingConditions,
        GroupKind::Part,
        GroupKind::SpeedGrade,
        GroupKind::PolyTemplate,
        GroupKind::PowerSupply,
        GroupKind::Sensitization,
        GroupKind::Table,
        GroupKind::Template,
        GroupKind::LuTableTemplate,
        GroupKind::TimingRange,
        GroupKind::Type,
        GroupKind::WireLoad,
        GroupKind::WireLoadSelection,
        GroupKind::WireLoadTable,
        GroupKind::Cell,
        GroupKind::ScaledCell,
        GroupKind::Model,
        GroupKind::DynamicCurrent,
        GroupKind::SwitchingGroup,
        GroupKind::SgPgCurrent,
        GroupKind::SgVector,
        GroupKind::Ff,
        GroupKind::FfBank,
        GroupKind::FpgaCondition,
        GroupKind::FpgaConditionValue,
        GroupKind::FunctionalYieldMetric,
        GroupKind::AverageNumberOfFaults,
        GroupKind::LeakageCurrent,
        GroupKind::LcPgCurrent,
        GroupKind::GateLeakage,
        GroupKind::LeakagePower,
        GroupKind::GeneratedClock,
        GroupKind::IntrinsicParasitic,
        GroupKind::IntrinsicCapacitance,
        GroupKind::IntrinsicResistance,
        GroupKind::TotalCapacitance,
        GroupKind::Latch,
        GroupKind::LatchBank,
        GroupKind::Lut,
        GroupKind::ModeDefinition,
        GroupKind::ModeValue,
        GroupKind::PgPin,
        GroupKind::RoutingTrack,
        GroupKind::Statetable,
        GroupKind::TestCell,
        GroupKind::Pin,
        GroupKind::Bundle,
        GroupKind::Bus,
        GroupKind::Ccsn,
        GroupKind::CcsnTable,
        GroupKind::Electromigration,
        GroupKind::EmMaxToggleRate,
        GroupKind::HyperbolicNoise,
        GroupKind::InternalPower,
        GroupKind::Power,
        GroupKind::MaxCap,
        GroupKind::MaxTrans,
        GroupKind::MinPulseWidth,
        GroupKind::MinimumPeriod,
        GroupKind::PinCapacitance,
        GroupKind::PcCapacitance,
        GroupKind::PcCapacitanceRange,
        GroupKind::PcCapacitanceBound,
        GroupKind::Tlatch,
        GroupKind::Timing,
        GroupKind::CellDegradation,
        GroupKind::CompactCcs,
        GroupKind::NoiseImmunity,
        GroupKind::OutputCurrent,
        GroupKind::OcVector,
        GroupKind::PropagatedNoise,
        GroupKind::ReceiverCapacitance,
    ];

    /// Shape of the parenthesized header that precedes the group body.
    pub fn header(self) -> HeaderShape {
        match self {
            GroupKind::Library => HeaderShape::Str,
            GroupKind::BaseCurves => HeaderShape::Str,
            GroupKind::CompactLutTemplate => HeaderShape::Str,
            GroupKind::Domain => HeaderShape::Str,
            GroupKind::FpgaIsd => HeaderShape::Str,
            GroupKind::InputVoltage => HeaderShape::Str,
            GroupKind::OutputVoltage => HeaderShape::Str,
            GroupKind::OperatingConditions => HeaderShape::Str,
            GroupKind::Part => HeaderShape::Str,
            GroupKind::SpeedGrade => HeaderShape::Str,
            GroupKind::PolyTemplate => HeaderShape::Str,
            GroupKind::PowerSupply => HeaderShape::OptStr,
            GroupKind::Sensitization => HeaderShape::Str,
            GroupKind::Table => HeaderShape::Str,
            GroupKind::Template => HeaderShape::Str,
            GroupKind::LuTableTemplate => HeaderShape::Str,
            GroupKind::TimingRange => HeaderShape::Str,
            GroupKind::Type => HeaderShape::Str,
            GroupKind::WireLoad => HeaderShape::Str,
            GroupKind::WireLoadSelection => HeaderShape::Str,
            GroupKind::WireLoadTable => HeaderShape::Str,
            GroupKind::Cell => HeaderShape::Str,
            GroupKind::ScaledCell => HeaderShape::StrStr,
            GroupKind::Model => HeaderShape::Str,
            GroupKind::DynamicCurrent => HeaderShape::Empty,
            GroupKind::SwitchingGroup => HeaderShape::Empty,
            GroupKind::SgPgCurrent => HeaderShape::Str,
            GroupKind::SgVector => HeaderShape::Str,
            GroupKind::Ff => HeaderShape::StrStr,
            GroupKind::FfBank => HeaderShape::StrStrInt,
            GroupKind::FpgaCondition => HeaderShape::Str,
            GroupKind::FpgaConditionValue => HeaderShape::Str,
            GroupKind::FunctionalYieldMetric => HeaderShape::Empty,
            GroupKind::AverageNumberOfFaults => HeaderShape::Str,
            GroupKind::LeakageCurrent => HeaderShape::Empty,
            GroupKind::LcPgCurrent => HeaderShape::Str,
            GroupKind::GateLeakage => HeaderShape::Str,
            GroupKind::LeakagePower => HeaderShape::Empty,
            GroupKind::GeneratedClock => HeaderShape::Str,
            GroupKind::IntrinsicParasitic => HeaderShape::Str,
            GroupKind::IntrinsicCapacitance => HeaderShape::Str,
            GroupKind::IntrinsicResistance => HeaderShape::Str,
            GroupKind::TotalCapacitance => HeaderShape::Str,
            GroupKind::Latch => HeaderShape::StrStr,
            GroupKind::LatchBank => HeaderShape::StrStrInt,
            GroupKind::Lut => HeaderShape::Str,
            GroupKind::ModeDefinition => HeaderShape::Str,
            GroupKind::ModeValue => HeaderShape::Str,
            GroupKind::PgPin => HeaderShape::Str,
            GroupKind::RoutingTrack => HeaderShape::Str,
            GroupKind::Statetable => HeaderShape::StrStr,
            GroupKind::TestCell => HeaderShape::Empty,
            GroupKind::Pin => HeaderShape::StrList,
            GroupKind::Bundle => HeaderShape::Str,
            GroupKind::Bus => HeaderShape::Str,
            GroupKind::Ccsn => HeaderShape::Empty,
            GroupKind::CcsnTable => HeaderShape::Str,
            GroupKind::Electromigration => HeaderShape::Empty,
            GroupKind::EmMaxToggleRate => HeaderShape::Str,
            GroupKind::HyperbolicNoise => HeaderShape::Empty,
            GroupKind::InternalPower => HeaderShape::Empty,
            GroupKind::Power => HeaderShape::Str,
            GroupKind::MaxCap => HeaderShape::Str,
            GroupKind::MaxTrans => HeaderShape::Str,
            GroupKind::MinPulseWidth => HeaderShape::Empty,
            GroupKind::MinimumPeriod => HeaderShape::Empty,
            GroupKind::PinCapacitance => HeaderShape::Empty,
            GroupKind::PcCapacitance => HeaderShape::Str,
            GroupKind::PcCapacitanceRange => HeaderShape::Str,
            GroupKind::PcCapacitanceBound => HeaderShape::Str,
            GroupKind::Tlatch => HeaderShape::Str,
            GroupKind::Timing => HeaderShape::OptStr,
            GroupKind::CellDegradation => HeaderShape::Str,
            GroupKind::CompactCcs => HeaderShape::Str,
            GroupKind::NoiseImmunity => HeaderShape::Str,
            GroupKind::OutputCurrent => HeaderShape::Str,
            GroupKind::OcVector => HeaderShape::Str,
            GroupKind::PropagatedNoise => HeaderShape::Str,
            GroupKind::ReceiverCapacitance => HeaderShape::Str,
        }
    }

    /// Keywords accepted inside the group body, in declaration order.
    pub fn attrs(self) -> &'static [(AttrType, Syntax)] {
        match self {
            GroupKind::Library => LIBRARY_ATTRS,
            GroupKind::BaseCurves => BASE_CURVES_ATTRS,
            GroupKind::CompactLutTemplate => COMPACT_LUT_TEMPLATE_ATTRS,
            GroupKind::Domain => DOMAIN_ATTRS,
            GroupKind::FpgaIsd => FPGA_ISD_ATTRS,
            GroupKind::InputVoltage => INPUT_VOLTAGE_ATTRS,
            GroupKind::OutputVoltage => OUTPUT_VOLTAGE_ATTRS,
            GroupKind::OperatingConditions => OPERATING_CONDITIONS_ATTRS,
            GroupKind::Part => PART_ATTRS,
            GroupKind::SpeedGrade => SPEED_GRADE_ATTRS,
            GroupKind::PolyTemplate => POLY_TEMPLATE_ATTRS,
            GroupKind::PowerSupply => POWER_SUPPLY_ATTRS,
            GroupKind::Sensitization => SENSITIZATION_ATTRS,
            GroupKind::Table => TABLE_ATTRS,
            GroupKind::Template => TEMPLATE_ATTRS,
            GroupKind::LuTableTemplate => LU_TABLE_TEMPLATE_ATTRS,
            GroupKind::TimingRange => TIMING_RANGE_ATTRS,
            GroupKind::Type => TYPE_ATTRS,
            GroupKind::WireLoad => WIRE_LOAD_ATTRS,
            GroupKind::WireLoadSelection => WIRE_LOAD_SELECTION_ATTRS,
            GroupKind::WireLoadTable => WIRE_LOAD_TABLE_ATTRS,
            GroupKind::Cell => CELL_ATTRS,
            GroupKind::ScaledCell => CELL_ATTRS,
            GroupKind::Model => MODEL_ATTRS,
            GroupKind::DynamicCurrent => DYNAMIC_CURRENT_ATTRS,
            GroupKind::SwitchingGroup => SWITCHING_GROUP_ATTRS,
            GroupKind::SgPgCurrent => SG_PG_CURRENT_ATTRS,
            GroupKind::SgVector => SG_VECTOR_ATTRS,
            GroupKind::Ff => FF_ATTRS,
            GroupKind::FfBank => FF_ATTRS,
            GroupKind::FpgaCondition => FPGA_CONDITION_ATTRS,
            GroupKind::FpgaConditionValue => FPGA_CONDITION_VALUE_ATTRS,
            GroupKind::FunctionalYieldMetric => FUNCTIONAL_YIELD_METRIC_ATTRS,
            GroupKind::AverageNumberOfFaults => AVERAGE_NUMBER_OF_FAULTS_ATTRS,
            GroupKind::LeakageCurrent => LEAKAGE_CURRENT_ATTRS,
            GroupKind::LcPgCurrent => LC_PG_CURRENT_ATTRS,
            GroupKind::GateLeakage => GATE_LEAKAGE_ATTRS,
            GroupKind::LeakagePower => LEAKAGE_POWER_ATTRS,
            GroupKind::GeneratedClock => GENERATED_CLOCK_ATTRS,
            GroupKind::IntrinsicParasitic => INTRINSIC_PARASITIC_ATTRS,
            GroupKind::IntrinsicCapacitance => LC_PG_CURRENT_ATTRS,
            GroupKind::IntrinsicResistance => INTRINSIC_RESISTANCE_ATTRS,
            GroupKind::TotalCapacitance => LC_PG_CURRENT_ATTRS,
            GroupKind::Latch => LATCH_ATTRS,
            GroupKind::LatchBank => LATCH_ATTRS,
            GroupKind::Lut => LUT_ATTRS,
            GroupKind::ModeDefinition => MODE_DEFINITION_ATTRS,
            GroupKind::ModeValue => MODE_VALUE_ATTRS,
            GroupKind::PgPin => PG_PIN_ATTRS,
            GroupKind::RoutingTrack => ROUTING_TRACK_ATTRS,
            GroupKind::Statetable => STATETABLE_ATTRS,
            GroupKind::TestCell => TEST_CELL_ATTRS,
            GroupKind::Pin => PIN_ATTRS,
            GroupKind::Bundle => BUNDLE_ATTRS,
            GroupKind::Bus => BUS_ATTRS,
            GroupKind::Ccsn => CCSN_ATTRS,
            GroupKind::CcsnTable => CCSN_TABLE_ATTRS,
            GroupKind::Electromigration => ELECTROMIGRATION_ATTRS,
            GroupKind::EmMaxToggleRate => EM_MAX_TOGGLE_RATE_ATTRS,
            GroupKind::HyperbolicNoise => HYPERBOLIC_NOISE_ATTRS,
            GroupKind::InternalPower => INTERNAL_POWER_ATTRS,
            GroupKind::Power => POWER_ATTRS,
            GroupKind::MaxCap => EM_MAX_TOGGLE_RATE_ATTRS,
            GroupKind::MaxTrans => MAX_TRANS_ATTRS,
            GroupKind::MinPulseWidth => MIN_PULSE_WIDTH_ATTRS,
            GroupKind::MinimumPeriod => MINIMUM_PERIOD_ATTRS,
            GroupKind::PinCapacitance => PIN_CAPACITANCE_ATTRS,
            GroupKind::PcCapacitance => PC_CAPACITANCE_ATTRS,
            GroupKind::PcCapacitanceRange => PC_CAPACITANCE_RANGE_ATTRS,
            GroupKind::PcCapacitanceBound => PC_CAPACITANCE_BOUND_ATTRS,
            GroupKind::Tlatch => TLATCH_ATTRS,
            GroupKind::Timing => TIMING_ATTRS,
            GroupKind::CellDegradation => CELL_DEGRADATION_ATTRS,
            GroupKind::CompactCcs => COMPACT_CCS_ATTRS,
            GroupKind::NoiseImmunity => NOISE_IMMUNITY_ATTRS,
            GroupKind::OutputCurrent => OUTPUT_CURRENT_ATTRS,
            GroupKind::OcVector => OC_VECTOR_ATTRS,
            GroupKind::PropagatedNoise => NOISE_IMMUNITY_ATTRS,
            GroupKind::ReceiverCapacitance => RECEIVER_CAPACITANCE_ATTRS,
        }
    }
}
