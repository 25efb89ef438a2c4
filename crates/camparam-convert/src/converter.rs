//! Control to parameter converter
//!
//! [`Converter`] answers two independent questions for a camera control:
//! which parameter value a concrete control value becomes, and which
//! parameter type should be declared for a control before any value is
//! known.
//!
//! # Example
//!
//! ```
//! use camparam_controls::{ids, Capabilities, ControlValue, Rectangle};
//! use camparam_convert::Converter;
//! use camparam_params::{ParameterType, ParameterValue};
//!
//! let converter = Converter::new(Capabilities::default());
//!
//! let crop = ControlValue::scalar(Rectangle::new(0, 0, 1920, 1080));
//! assert_eq!(
//!     converter.convert_value(&crop),
//!     Ok(ParameterValue::IntegerArray(vec![0, 0, 1920, 1080]))
//! );
//! assert_eq!(
//!     converter.infer_parameter_type(&ids::SCALER_CROP),
//!     Ok(ParameterType::IntegerArray)
//! );
//! ```

use crate::error::ConversionError;
use crate::value::collapse;
use camparam_controls::{
    Capabilities, ControlId, ControlPayload, ControlType, ControlValue, ExtentRegistry,
};
use camparam_params::{ParameterType, ParameterValue};

/// Converter from camera controls to ROS 2 parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    registry: ExtentRegistry,
}

impl Converter {
    /// Create a converter for the given library capabilities
    pub const fn new(caps: Capabilities) -> Self {
        Self {
            registry: ExtentRegistry::new(caps),
        }
    }

    pub const fn capabilities(&self) -> &Capabilities {
        self.registry.capabilities()
    }

    pub const fn registry(&self) -> &ExtentRegistry {
        &self.registry
    }

    /// Fixed element count of a control, see [`ExtentRegistry::extent_of`]
    pub fn extent_of(&self, id: &ControlId) -> Result<usize, ConversionError> {
        Ok(self.registry.extent_of(id)?)
    }

    /// Convert a control value into a parameter value
    ///
    /// `none` values, empty arrays and values of a type this library build
    /// does not know yield [`ParameterValue::NotSet`]. A single-element array
    /// converts exactly like the scalar it holds. Geometry values become
    /// integer arrays.
    ///
    /// # Errors
    ///
    /// [`ConversionError::InvalidConversion`] for an array of two or more
    /// geometry values, which no parameter type can hold.
    pub fn convert_value(&self, value: &ControlValue) -> Result<ParameterValue, ConversionError> {
        let control_type = value.control_type();
        if !control_type.is_available(self.capabilities()) {
            #[cfg(feature = "log")]
            log::debug!("control type {} is not available, value not set", control_type);
            return Ok(ParameterValue::NotSet);
        }

        match value.payload() {
            ControlPayload::None => Ok(ParameterValue::NotSet),
            ControlPayload::Bool(values) => collapse(values),
            ControlPayload::Byte(values) => collapse(values),
            ControlPayload::Integer32(values) => collapse(values),
            ControlPayload::Integer64(values) => collapse(values),
            ControlPayload::Unsigned16(values) => collapse(values),
            ControlPayload::Unsigned32(values) => collapse(values),
            ControlPayload::Float(values) => collapse(values),
            ControlPayload::String(values) => collapse(values),
            ControlPayload::Rectangle(values) => collapse(values),
            ControlPayload::Size(values) => collapse(values),
            ControlPayload::Point(values) => collapse(values),
        }
    }

    /// Infer the parameter type to declare for a control
    ///
    /// The control's extent decides between the scalar and the array
    /// mapping of its declared type. Both come from the control table entry
    /// matching the id, not from the handle passed in. Array controls of
    /// geometry types have no parameter type and yield
    /// [`ParameterType::NotSet`], meaning the control should not be
    /// declared.
    ///
    /// # Errors
    ///
    /// [`ConversionError::UnknownControl`] if the control is not in the
    /// control table under the configured capabilities.
    pub fn infer_parameter_type(&self, id: &ControlId) -> Result<ParameterType, ConversionError> {
        let entry = self.registry.entry_of(id)?;
        let extent = entry.extent;
        let control_type = entry.control.control_type();

        #[cfg(feature = "log")]
        log::debug!(
            "extent of {} is {}, declared type is {}",
            entry.control,
            extent,
            control_type
        );

        if !control_type.is_available(self.capabilities()) {
            return Ok(ParameterType::NotSet);
        }

        Ok(if extent == 0 {
            scalar_parameter_type(control_type)
        } else {
            array_parameter_type(control_type)
        })
    }
}

/// Parameter type of a scalar control
const fn scalar_parameter_type(control_type: ControlType) -> ParameterType {
    match control_type {
        ControlType::None => ParameterType::NotSet,
        ControlType::Bool => ParameterType::Bool,
        ControlType::Byte
        | ControlType::Integer32
        | ControlType::Integer64
        | ControlType::Unsigned16
        | ControlType::Unsigned32 => ParameterType::Integer,
        ControlType::Float => ParameterType::Double,
        ControlType::String => ParameterType::String,
        ControlType::Rectangle | ControlType::Size | ControlType::Point => {
            ParameterType::IntegerArray
        }
    }
}

/// Parameter type of an array control
const fn array_parameter_type(control_type: ControlType) -> ParameterType {
    match control_type {
        ControlType::None => ParameterType::NotSet,
        ControlType::Bool => ParameterType::BoolArray,
        ControlType::Byte
        | ControlType::Integer32
        | ControlType::Integer64
        | ControlType::Unsigned16
        | ControlType::Unsigned32 => ParameterType::IntegerArray,
        ControlType::Float => ParameterType::DoubleArray,
        ControlType::String => ParameterType::StringArray,
        // arrays of arrays
        ControlType::Rectangle | ControlType::Size | ControlType::Point => ParameterType::NotSet,
    }
}

/// Convert a control value with the default capabilities
pub fn convert_value(value: &ControlValue) -> Result<ParameterValue, ConversionError> {
    Converter::default().convert_value(value)
}

/// Infer the parameter type of a control with the default capabilities
pub fn infer_parameter_type(id: &ControlId) -> Result<ParameterType, ConversionError> {
    Converter::default().infer_parameter_type(id)
}
