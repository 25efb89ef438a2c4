//! Control identifiers
//!
//! Every control the camera library can report, with its declared element
//! type. Core controls live at the top of this module; draft and vendor
//! controls live in the [`draft`] and [`rpi`] submodules, following the
//! library's own namespaces.
//!
//! [`CONTROLS`] pairs each identifier with its extent and the tier that
//! introduced it. The table is immutable and is the only source of extents.

use crate::config::Tier;
use crate::value::ControlType;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Extent of a control whose array length is only known at runtime
pub const DYNAMIC_EXTENT: usize = usize::MAX;

/// Handle of a camera control
///
/// Two handles are the same control when their numeric ids are equal.
#[derive(Debug, Clone, Copy)]
pub struct ControlId {
    id: u32,
    name: &'static str,
    vendor: &'static str,
    control_type: ControlType,
}

impl ControlId {
    pub const fn new(
        id: u32,
        name: &'static str,
        vendor: &'static str,
        control_type: ControlType,
    ) -> Self {
        Self {
            id,
            name,
            vendor,
            control_type,
        }
    }

    pub const fn id(&self) -> u32 {
        self.id
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn vendor(&self) -> &'static str {
        self.vendor
    }

    /// Declared element type of the control
    pub const fn control_type(&self) -> ControlType {
        self.control_type
    }
}

impl PartialEq for ControlId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ControlId {}

impl Hash for ControlId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vendor == VENDOR_CORE {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}::{}", self.vendor, self.name)
        }
    }
}

/// An entry of the control table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlEntry {
    pub control: ControlId,
    /// 0 for scalar controls, the fixed array length otherwise
    pub extent: usize,
    pub tier: Tier,
}

pub(crate) const VENDOR_CORE: &str = "libcamera";

const fn core_id(id: u32, name: &'static str, control_type: ControlType) -> ControlId {
    ControlId::new(id, name, VENDOR_CORE, control_type)
}

const fn scalar(control: ControlId, tier: Tier) -> ControlEntry {
    ControlEntry {
        control,
        extent: 0,
        tier,
    }
}

/// Array-shaped entry. A zero extent fails constant evaluation of the table.
const fn span(control: ControlId, extent: usize, tier: Tier) -> ControlEntry {
    assert!(extent != 0, "array control declared with zero extent");
    ControlEntry {
        control,
        extent,
        tier,
    }
}

pub const AE_ENABLE: ControlId = core_id(1, "AeEnable", ControlType::Bool);
pub const AE_LOCKED: ControlId = core_id(2, "AeLocked", ControlType::Bool);
pub const AE_METERING_MODE: ControlId = core_id(3, "AeMeteringMode", ControlType::Integer32);
pub const AE_CONSTRAINT_MODE: ControlId = core_id(4, "AeConstraintMode", ControlType::Integer32);
pub const AE_EXPOSURE_MODE: ControlId = core_id(5, "AeExposureMode", ControlType::Integer32);
pub const EXPOSURE_VALUE: ControlId = core_id(6, "ExposureValue", ControlType::Float);
pub const EXPOSURE_TIME: ControlId = core_id(7, "ExposureTime", ControlType::Integer32);
pub const ANALOGUE_GAIN: ControlId = core_id(8, "AnalogueGain", ControlType::Float);
pub const BRIGHTNESS: ControlId = core_id(9, "Brightness", ControlType::Float);
pub const CONTRAST: ControlId = core_id(10, "Contrast", ControlType::Float);
pub const LUX: ControlId = core_id(11, "Lux", ControlType::Float);
pub const AWB_ENABLE: ControlId = core_id(12, "AwbEnable", ControlType::Bool);
pub const AWB_MODE: ControlId = core_id(13, "AwbMode", ControlType::Integer32);
pub const AWB_LOCKED: ControlId = core_id(14, "AwbLocked", ControlType::Bool);
pub const COLOUR_GAINS: ControlId = core_id(15, "ColourGains", ControlType::Float);
pub const COLOUR_TEMPERATURE: ControlId = core_id(16, "ColourTemperature", ControlType::Integer32);
pub const SATURATION: ControlId = core_id(17, "Saturation", ControlType::Float);
pub const SENSOR_BLACK_LEVELS: ControlId = core_id(18, "SensorBlackLevels", ControlType::Integer32);
pub const SHARPNESS: ControlId = core_id(19, "Sharpness", ControlType::Float);
pub const FOCUS_FOM: ControlId = core_id(20, "FocusFoM", ControlType::Integer32);
pub const COLOUR_CORRECTION_MATRIX: ControlId =
    core_id(21, "ColourCorrectionMatrix", ControlType::Float);
pub const SCALER_CROP: ControlId = core_id(22, "ScalerCrop", ControlType::Rectangle);
pub const DIGITAL_GAIN: ControlId = core_id(23, "DigitalGain", ControlType::Float);
pub const FRAME_DURATION: ControlId = core_id(24, "FrameDuration", ControlType::Integer64);
pub const FRAME_DURATION_LIMITS: ControlId =
    core_id(25, "FrameDurationLimits", ControlType::Integer64);
pub const SENSOR_TIMESTAMP: ControlId = core_id(27, "SensorTimestamp", ControlType::Integer64);
pub const AF_MODE: ControlId = core_id(28, "AfMode", ControlType::Integer32);
pub const AF_RANGE: ControlId = core_id(29, "AfRange", ControlType::Integer32);
pub const AF_SPEED: ControlId = core_id(30, "AfSpeed", ControlType::Integer32);
pub const AF_METERING: ControlId = core_id(31, "AfMetering", ControlType::Integer32);
pub const AF_WINDOWS: ControlId = core_id(32, "AfWindows", ControlType::Rectangle);
pub const AF_TRIGGER: ControlId = core_id(33, "AfTrigger", ControlType::Integer32);
pub const AF_PAUSE: ControlId = core_id(34, "AfPause", ControlType::Integer32);
pub const LENS_POSITION: ControlId = core_id(35, "LensPosition", ControlType::Float);
pub const AF_STATE: ControlId = core_id(36, "AfState", ControlType::Integer32);
pub const AF_PAUSE_STATE: ControlId = core_id(37, "AfPauseState", ControlType::Integer32);
pub const HDR_MODE: ControlId = core_id(38, "HdrMode", ControlType::Integer32);
pub const AE_FLICKER_MODE: ControlId = core_id(39, "AeFlickerMode", ControlType::Integer32);
pub const AE_FLICKER_PERIOD: ControlId = core_id(40, "AeFlickerPeriod", ControlType::Integer32);

/// Draft controls
pub mod draft {
    use super::{ControlId, ControlType};

    pub const NOISE_REDUCTION_MODE: ControlId =
        ControlId::new(10002, "NoiseReductionMode", "draft", ControlType::Integer32);
}

/// Raspberry Pi vendor controls
pub mod rpi {
    use super::{ControlId, ControlType};

    pub const STATS_OUTPUT_ENABLE: ControlId =
        ControlId::new(20001, "StatsOutputEnable", "rpi", ControlType::Bool);
    pub const BCM2835_STATS_OUTPUT: ControlId =
        ControlId::new(20002, "Bcm2835StatsOutput", "rpi", ControlType::Byte);
    pub const CNN_ENABLE_INPUT_TENSOR: ControlId =
        ControlId::new(20010, "CnnEnableInputTensor", "rpi", ControlType::Bool);
}

/// Every known control with its extent and availability tier
pub static CONTROLS: &[ControlEntry] = &[
    scalar(AE_ENABLE, Tier::V0_1_0),
    scalar(AE_LOCKED, Tier::V0_1_0),
    scalar(AE_METERING_MODE, Tier::V0_1_0),
    scalar(AE_CONSTRAINT_MODE, Tier::V0_1_0),
    scalar(AE_EXPOSURE_MODE, Tier::V0_1_0),
    scalar(EXPOSURE_VALUE, Tier::V0_1_0),
    scalar(EXPOSURE_TIME, Tier::V0_1_0),
    scalar(ANALOGUE_GAIN, Tier::V0_1_0),
    scalar(BRIGHTNESS, Tier::V0_1_0),
    scalar(CONTRAST, Tier::V0_1_0),
    scalar(LUX, Tier::V0_1_0),
    scalar(AWB_ENABLE, Tier::V0_1_0),
    scalar(AWB_MODE, Tier::V0_1_0),
    scalar(AWB_LOCKED, Tier::V0_1_0),
    span(COLOUR_GAINS, 2, Tier::V0_1_0),
    scalar(COLOUR_TEMPERATURE, Tier::V0_1_0),
    scalar(SATURATION, Tier::V0_1_0),
    span(SENSOR_BLACK_LEVELS, 4, Tier::V0_1_0),
    scalar(SHARPNESS, Tier::V0_1_0),
    scalar(FOCUS_FOM, Tier::V0_1_0),
    span(COLOUR_CORRECTION_MATRIX, 9, Tier::V0_1_0),
    scalar(SCALER_CROP, Tier::V0_1_0),
    scalar(DIGITAL_GAIN, Tier::V0_1_0),
    scalar(FRAME_DURATION, Tier::V0_1_0),
    span(FRAME_DURATION_LIMITS, 2, Tier::V0_1_0),
    scalar(SENSOR_TIMESTAMP, Tier::V0_1_0),
    scalar(AF_MODE, Tier::V0_1_0),
    scalar(AF_RANGE, Tier::V0_1_0),
    scalar(AF_SPEED, Tier::V0_1_0),
    scalar(AF_METERING, Tier::V0_1_0),
    span(AF_WINDOWS, DYNAMIC_EXTENT, Tier::V0_1_0),
    scalar(AF_TRIGGER, Tier::V0_1_0),
    scalar(AF_PAUSE, Tier::V0_1_0),
    scalar(LENS_POSITION, Tier::V0_1_0),
    scalar(AF_STATE, Tier::V0_1_0),
    scalar(AF_PAUSE_STATE, Tier::V0_1_0),
    scalar(HDR_MODE, Tier::V0_2_0),
    scalar(AE_FLICKER_PERIOD, Tier::V0_2_0),
    scalar(AE_FLICKER_MODE, Tier::V0_2_0),
    scalar(draft::NOISE_REDUCTION_MODE, Tier::V0_2_0),
    scalar(rpi::STATS_OUTPUT_ENABLE, Tier::RpiVendor),
    span(rpi::BCM2835_STATS_OUTPUT, DYNAMIC_EXTENT, Tier::RpiVendor),
    scalar(rpi::CNN_ENABLE_INPUT_TENSOR, Tier::RpiFork),
];

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in CONTROLS.iter().enumerate() {
            for b in &CONTROLS[i + 1..] {
                assert_ne!(a.control, b.control, "{} collides with {}", a.control, b.control);
            }
        }
    }

    #[test]
    fn test_structured_arrays_only_where_expected() {
        let structured: alloc::vec::Vec<_> = CONTROLS
            .iter()
            .filter(|e| e.extent != 0 && e.control.control_type().is_structured())
            .map(|e| e.control)
            .collect();
        assert_eq!(structured, [AF_WINDOWS]);
    }

    #[test]
    fn test_identity_is_numeric_id() {
        let alias = ControlId::new(AE_ENABLE.id(), "Other", "x", ControlType::Float);
        assert_eq!(alias, AE_ENABLE);
        assert_ne!(AE_ENABLE, AE_LOCKED);
    }

    #[test]
    fn test_display() {
        assert_eq!(SCALER_CROP.to_string(), "ScalerCrop");
        assert_eq!(rpi::STATS_OUTPUT_ENABLE.to_string(), "rpi::StatsOutputEnable");
    }
}
