//! Camera controls for camparam
//!
//! This crate models the control side of the conversion:
//! - [`ControlValue`]: runtime-tagged scalar or array control values
//! - [`ControlId`] and the static control table in [`ids`]
//! - [`ExtentRegistry`]: fixed element count of each control
//! - [`Capabilities`]: which camera library build the controls come from
//!
//! # Features
//!
//! - `std` - Enable standard library support
//! - `log` - Log lookups of unknown controls

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod config;
pub mod extent;
pub mod geometry;
pub mod ids;
pub mod value;

pub use config::{Capabilities, LibcameraVersion, Tier, VersionParseError};
pub use extent::{extent_of, ExtentError, ExtentRegistry};
pub use geometry::{Point, Rectangle, Size};
pub use ids::{ControlEntry, ControlId, CONTROLS, DYNAMIC_EXTENT};
pub use value::{ControlElement, ControlPayload, ControlType, ControlValue};
