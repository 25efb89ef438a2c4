//! Extent registry
//!
//! Maps a control identifier to the fixed element count of its value: 0 for
//! scalar controls, the array length for array controls
//! ([`DYNAMIC_EXTENT`](crate::ids::DYNAMIC_EXTENT) when the length varies).
//! The extent depends only on the identifier, never on a value.
//!
//! # Example
//!
//! ```
//! use camparam_controls::{ids, ExtentRegistry};
//!
//! let registry = ExtentRegistry::default();
//! assert_eq!(registry.extent_of(&ids::EXPOSURE_TIME), Ok(0));
//! assert_eq!(registry.extent_of(&ids::SENSOR_BLACK_LEVELS), Ok(4));
//! ```

use crate::config::Capabilities;
use crate::ids::{ControlEntry, ControlId, CONTROLS, VENDOR_CORE};
use core::fmt;

/// Error looking up a control in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtentError {
    /// The control is not in the table, or not available in this build
    UnknownControl { id: u32, name: &'static str },
}

impl fmt::Display for ExtentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtentError::UnknownControl { id, name } => {
                write!(f, "unknown control {} ({})", name, id)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExtentError {}

/// Read-only view of the control table under a set of capabilities
#[derive(Debug, Clone, Copy)]
pub struct ExtentRegistry {
    caps: Capabilities,
    entries: &'static [ControlEntry],
}

impl Default for ExtentRegistry {
    fn default() -> Self {
        Self::new(Capabilities::default())
    }
}

impl ExtentRegistry {
    /// Registry over the built-in control table
    pub const fn new(caps: Capabilities) -> Self {
        Self {
            caps,
            entries: CONTROLS,
        }
    }

    pub const fn capabilities(&self) -> &Capabilities {
        &self.caps
    }

    /// Entries available under the configured capabilities
    pub fn iter(&self) -> impl Iterator<Item = &'static ControlEntry> + '_ {
        self.entries
            .iter()
            .filter(move |entry| self.caps.tier_available(entry.tier))
    }

    /// Find the table entry of a control
    pub fn find(&self, id: &ControlId) -> Option<&'static ControlEntry> {
        self.iter().find(|entry| entry.control == *id)
    }

    /// Find the table entry of a control by its name
    ///
    /// Vendor controls are matched by their qualified name, e.g.
    /// `rpi::StatsOutputEnable`; core controls by their bare name.
    pub fn find_by_name(&self, name: &str) -> Option<&'static ControlEntry> {
        self.iter().find(|entry| {
            let control = &entry.control;
            match name.split_once("::") {
                Some((vendor, bare)) => control.vendor() == vendor && control.name() == bare,
                None => control.vendor() == VENDOR_CORE && control.name() == name,
            }
        })
    }

    /// Table entry of a control, or an error if the table has none
    ///
    /// The entry is the authority on both the extent and the declared type
    /// of the control, whatever type the caller's handle carries.
    pub fn entry_of(&self, id: &ControlId) -> Result<&'static ControlEntry, ExtentError> {
        match self.find(id) {
            Some(entry) => Ok(entry),
            None => {
                #[cfg(feature = "log")]
                log::warn!("control {} ({}) is not in the control table", id, id.id());

                Err(ExtentError::UnknownControl {
                    id: id.id(),
                    name: id.name(),
                })
            }
        }
    }

    /// Fixed element count of a control's value
    pub fn extent_of(&self, id: &ControlId) -> Result<usize, ExtentError> {
        self.entry_of(id).map(|entry| entry.extent)
    }
}

/// Look up the extent of a control with the default capabilities
pub fn extent_of(id: &ControlId) -> Result<usize, ExtentError> {
    ExtentRegistry::default().extent_of(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LibcameraVersion;
    use crate::ids::{self, draft, rpi, DYNAMIC_EXTENT};
    use crate::value::ControlType;

    #[test]
    fn test_scalar_controls_have_zero_extent() {
        let registry = ExtentRegistry::default();
        assert_eq!(registry.extent_of(&ids::AE_ENABLE), Ok(0));
        assert_eq!(registry.extent_of(&ids::SCALER_CROP), Ok(0));
        assert_eq!(registry.extent_of(&ids::FRAME_DURATION), Ok(0));
    }

    #[test]
    fn test_array_controls_have_fixed_extent() {
        let registry = ExtentRegistry::default();
        assert_eq!(registry.extent_of(&ids::COLOUR_GAINS), Ok(2));
        assert_eq!(registry.extent_of(&ids::COLOUR_CORRECTION_MATRIX), Ok(9));
        assert_eq!(registry.extent_of(&ids::FRAME_DURATION_LIMITS), Ok(2));
        assert_eq!(registry.extent_of(&ids::AF_WINDOWS), Ok(DYNAMIC_EXTENT));
    }

    #[test]
    fn test_unknown_control() {
        let bogus = ControlId::new(9999, "Bogus", "libcamera", ControlType::Bool);
        assert_eq!(
            extent_of(&bogus),
            Err(ExtentError::UnknownControl {
                id: 9999,
                name: "Bogus"
            })
        );
    }

    #[test]
    fn test_tier_gating() {
        let old = ExtentRegistry::new(Capabilities::new(LibcameraVersion::V0_1_0));
        assert!(old.extent_of(&ids::AE_ENABLE).is_ok());
        assert!(old.extent_of(&ids::HDR_MODE).is_err());
        assert!(old.extent_of(&draft::NOISE_REDUCTION_MODE).is_err());

        let upstream = ExtentRegistry::default();
        assert_eq!(upstream.extent_of(&ids::HDR_MODE), Ok(0));
        assert!(upstream.extent_of(&rpi::STATS_OUTPUT_ENABLE).is_err());

        let vendor = ExtentRegistry::new(Capabilities::default().rpi_vendor(true));
        assert_eq!(vendor.extent_of(&rpi::STATS_OUTPUT_ENABLE), Ok(0));
        assert_eq!(
            vendor.extent_of(&rpi::BCM2835_STATS_OUTPUT),
            Ok(DYNAMIC_EXTENT)
        );
        assert!(vendor.extent_of(&rpi::CNN_ENABLE_INPUT_TENSOR).is_err());

        let fork = ExtentRegistry::new(Capabilities::default().rpi_vendor(true).raspberry_pi(true));
        assert_eq!(fork.extent_of(&rpi::CNN_ENABLE_INPUT_TENSOR), Ok(0));
    }

    #[test]
    fn test_entry_of_uses_table_type() {
        let registry = ExtentRegistry::default();
        let retyped = ControlId::new(
            ids::COLOUR_GAINS.id(),
            "ColourGains",
            "libcamera",
            ControlType::Point,
        );
        let entry = registry.entry_of(&retyped).unwrap();
        assert_eq!(entry.control.control_type(), ControlType::Float);
        assert_eq!(entry.extent, 2);

        let bogus = ControlId::new(9999, "Bogus", "libcamera", ControlType::Bool);
        assert!(registry.entry_of(&bogus).is_err());
    }

    #[test]
    fn test_find_by_name() {
        let registry = ExtentRegistry::new(Capabilities::default().rpi_vendor(true));
        assert_eq!(
            registry.find_by_name("SensorBlackLevels").map(|e| e.extent),
            Some(4)
        );
        assert_eq!(
            registry
                .find_by_name("rpi::StatsOutputEnable")
                .map(|e| e.control),
            Some(rpi::STATS_OUTPUT_ENABLE)
        );
        assert!(registry.find_by_name("StatsOutputEnable").is_none());
        assert!(registry.find_by_name("draft::NoiseReductionMode").is_some());
        assert!(registry.find_by_name("").is_none());
    }

    #[test]
    fn test_iter_respects_capabilities() {
        let upstream = ExtentRegistry::default().iter().count();
        let vendor = ExtentRegistry::new(Capabilities::default().rpi_vendor(true))
            .iter()
            .count();
        assert_eq!(vendor, upstream + 2);
        assert_eq!(
            ExtentRegistry::new(Capabilities::new(LibcameraVersion::V0_1_0))
                .iter()
                .count(),
            36
        );
    }
}
