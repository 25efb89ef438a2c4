//! # camparam
//!
//! Expose camera controls as ROS 2 parameters.
//!
//! Camera controls carry values of a richer type system than ROS 2
//! parameters: unsigned integers, single precision floats and geometry
//! types. This crate converts control values into parameter values and
//! infers the parameter type each control should be declared with.
//!
//! ## Quick Start
//!
//! ```
//! use camparam::prelude::*;
//!
//! let converter = Converter::new(Capabilities::default());
//!
//! // Declare the parameter with the type inferred from the control
//! let ty = converter.infer_parameter_type(&ids::COLOUR_GAINS).unwrap();
//! assert_eq!(ty, ParameterType::DoubleArray);
//!
//! // Convert values reported by the camera
//! let value = converter
//!     .convert_value(&ControlValue::array([1.5f32, 2.0]))
//!     .unwrap();
//! assert_eq!(value, ParameterValue::DoubleArray(vec![1.5, 2.0]));
//! ```
//!
//! ## Crate Features
//!
//! - `std` (default) - Enable standard library support
//! - `log` - Log type inference and unknown controls through the `log` facade

#![no_std]

#[cfg(feature = "std")]
extern crate std;

// Re-export control types
pub use camparam_controls::{
    extent_of, ids, Capabilities, ControlElement, ControlEntry, ControlId, ControlPayload,
    ControlType, ControlValue, ExtentError, ExtentRegistry, LibcameraVersion, Point, Rectangle,
    Size, Tier, VersionParseError, CONTROLS, DYNAMIC_EXTENT,
};

// Re-export conversion
pub use camparam_convert::{convert_value, infer_parameter_type, ConversionError, Converter};

// Re-export parameter types
pub use camparam_params::{ParameterType, ParameterValue};

/// Prelude module for convenient imports
///
/// Import everything you need with a single statement:
/// ```
/// use camparam::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ids, Capabilities, ControlId, ControlType, ControlValue, ConversionError, Converter,
        ExtentRegistry, LibcameraVersion, ParameterType, ParameterValue, Point, Rectangle, Size,
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let converter = Converter::new(Capabilities::new(LibcameraVersion::V0_1_0));
        assert_eq!(
            converter.infer_parameter_type(&ids::AE_ENABLE),
            Ok(ParameterType::Bool)
        );
    }
}
