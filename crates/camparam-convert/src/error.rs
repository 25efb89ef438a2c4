//! Error types for control conversion

use camparam_controls::{ControlType, ExtentError};
use core::fmt;

/// Conversion error
///
/// Both kinds are logic errors of the caller or of the control table, never
/// transient. Values that are well formed but cannot be represented are not
/// errors and convert to `NotSet` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// The control is not in the control table
    UnknownControl { id: u32, name: &'static str },
    /// An array of this element type has no parameter counterpart
    InvalidConversion(ControlType),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::UnknownControl { id, name } => {
                write!(f, "unknown control {} ({})", name, id)
            }
            ConversionError::InvalidConversion(ty) => {
                write!(f, "no parameter type for an array of {}", ty)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {}

impl From<ExtentError> for ConversionError {
    fn from(e: ExtentError) -> Self {
        match e {
            ExtentError::UnknownControl { id, name } => ConversionError::UnknownControl { id, name },
        }
    }
}
