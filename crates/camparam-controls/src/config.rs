//! Capability configuration
//!
//! The camera library grew new control types and controls over its
//! releases, and the Raspberry Pi fork ships some of them early. A
//! [`Capabilities`] value describes which library build the controls come
//! from, so the type enumeration and the control table stay fixed while only
//! the availability of their entries changes.
//!
//! # Example
//!
//! ```
//! use camparam_controls::{Capabilities, LibcameraVersion};
//!
//! let caps = Capabilities::new(LibcameraVersion::new(0, 3, 2))
//!     .raspberry_pi(true)
//!     .rpi_vendor(true);
//!
//! assert!(caps.has_point());
//! assert!(!caps.has_unsigned());
//! ```

use core::fmt;
use core::str::FromStr;

/// Version of the camera library the controls are taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LibcameraVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl LibcameraVersion {
    pub const V0_1_0: Self = Self::new(0, 1, 0);
    pub const V0_2_0: Self = Self::new(0, 2, 0);
    pub const V0_3_2: Self = Self::new(0, 3, 2);
    pub const V0_4_0: Self = Self::new(0, 4, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Check whether this version is at least `other`
    pub const fn at_least(&self, other: Self) -> bool {
        if self.major != other.major {
            return self.major > other.major;
        }
        if self.minor != other.minor {
            return self.minor > other.minor;
        }
        self.patch >= other.patch
    }
}

impl fmt::Display for LibcameraVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Error parsing a `MAJOR.MINOR.PATCH` version string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionParseError {
    /// Fewer or more than three dot-separated components
    InvalidFormat,
    /// A component is not a non-negative integer
    InvalidNumber,
}

impl fmt::Display for VersionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionParseError::InvalidFormat => write!(f, "expected MAJOR.MINOR.PATCH"),
            VersionParseError::InvalidNumber => write!(f, "invalid version number"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VersionParseError {}

impl FromStr for LibcameraVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('.');
        let mut next = || -> Result<u32, VersionParseError> {
            parts
                .next()
                .ok_or(VersionParseError::InvalidFormat)?
                .parse()
                .map_err(|_| VersionParseError::InvalidNumber)
        };

        let version = Self::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(VersionParseError::InvalidFormat);
        }
        Ok(version)
    }
}

/// Availability tier of an entry in the control table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Core controls present since 0.1.0
    V0_1_0,
    /// Core controls added in 0.2.0
    V0_2_0,
    /// Raspberry Pi vendor controls, 0.2.0 onwards
    RpiVendor,
    /// Raspberry Pi vendor controls of the Raspberry Pi fork, 0.4.0 onwards
    RpiFork,
}

/// Capability descriptor of the camera library build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Library version
    pub version: LibcameraVersion,
    /// Built against the Raspberry Pi fork of the library
    pub raspberry_pi: bool,
    /// Raspberry Pi vendor controls are compiled in
    pub rpi_vendor: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::new(LibcameraVersion::V0_4_0)
    }
}

impl Capabilities {
    /// Upstream library of the given version, without vendor controls
    pub const fn new(version: LibcameraVersion) -> Self {
        Self {
            version,
            raspberry_pi: false,
            rpi_vendor: false,
        }
    }

    /// Set whether the library is the Raspberry Pi fork
    pub const fn raspberry_pi(mut self, enabled: bool) -> Self {
        self.raspberry_pi = enabled;
        self
    }

    /// Set whether the Raspberry Pi vendor controls are available
    pub const fn rpi_vendor(mut self, enabled: bool) -> Self {
        self.rpi_vendor = enabled;
        self
    }

    /// Unsigned 16 and 32-bit control types
    pub const fn has_unsigned(&self) -> bool {
        self.version.at_least(LibcameraVersion::V0_4_0)
    }

    /// Point control type
    pub const fn has_point(&self) -> bool {
        self.version.at_least(LibcameraVersion::V0_4_0)
            || (self.raspberry_pi && self.version.at_least(LibcameraVersion::V0_3_2))
    }

    /// Check whether controls of the given tier exist in this build
    pub const fn tier_available(&self, tier: Tier) -> bool {
        match tier {
            Tier::V0_1_0 => self.version.at_least(LibcameraVersion::V0_1_0),
            Tier::V0_2_0 => self.version.at_least(LibcameraVersion::V0_2_0),
            Tier::RpiVendor => self.rpi_vendor && self.version.at_least(LibcameraVersion::V0_2_0),
            Tier::RpiFork => {
                self.rpi_vendor
                    && self.raspberry_pi
                    && self.version.at_least(LibcameraVersion::V0_4_0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_ordering() {
        let v = LibcameraVersion::new(0, 3, 2);
        assert!(v.at_least(LibcameraVersion::V0_2_0));
        assert!(v.at_least(LibcameraVersion::V0_3_2));
        assert!(!v.at_least(LibcameraVersion::V0_4_0));
        assert!(LibcameraVersion::new(1, 0, 0).at_least(LibcameraVersion::V0_4_0));
    }

    #[test]
    fn test_version_parse() {
        assert_eq!("0.4.0".parse::<LibcameraVersion>(), Ok(LibcameraVersion::V0_4_0));
        assert_eq!(" 0.3.2\n".parse::<LibcameraVersion>(), Ok(LibcameraVersion::V0_3_2));
        assert_eq!(
            "0.4".parse::<LibcameraVersion>(),
            Err(VersionParseError::InvalidFormat)
        );
        assert_eq!(
            "0.4.0.1".parse::<LibcameraVersion>(),
            Err(VersionParseError::InvalidFormat)
        );
        assert_eq!(
            "0.x.0".parse::<LibcameraVersion>(),
            Err(VersionParseError::InvalidNumber)
        );
    }

    #[test]
    fn test_unsigned_gating() {
        assert!(Capabilities::default().has_unsigned());
        assert!(!Capabilities::new(LibcameraVersion::V0_3_2)
            .raspberry_pi(true)
            .has_unsigned());
    }

    #[test]
    fn test_point_gating() {
        let upstream = Capabilities::new(LibcameraVersion::V0_3_2);
        assert!(!upstream.has_point());
        assert!(upstream.raspberry_pi(true).has_point());
        assert!(!Capabilities::new(LibcameraVersion::new(0, 3, 1))
            .raspberry_pi(true)
            .has_point());
    }

    #[test]
    fn test_tier_gating() {
        let caps = Capabilities::new(LibcameraVersion::V0_1_0);
        assert!(caps.tier_available(Tier::V0_1_0));
        assert!(!caps.tier_available(Tier::V0_2_0));

        let caps = Capabilities::default();
        assert!(caps.tier_available(Tier::V0_2_0));
        assert!(!caps.tier_available(Tier::RpiVendor));

        let caps = caps.rpi_vendor(true);
        assert!(caps.tier_available(Tier::RpiVendor));
        assert!(!caps.tier_available(Tier::RpiFork));
        assert!(caps.raspberry_pi(true).tier_available(Tier::RpiFork));
    }
}
