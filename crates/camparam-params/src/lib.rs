//! Parameter value model for camparam
//!
//! The ROS 2 parameter type system that camera controls are exposed through.
//! It is deliberately narrower than the control type system: no unsigned
//! integers, no single precision floats and no compound types.
//!
//! # Example
//!
//! ```
//! use camparam_params::{ParameterType, ParameterValue};
//!
//! let value = ParameterValue::IntegerArray(vec![0, 0, 640, 480]);
//! assert_eq!(value.param_type(), ParameterType::IntegerArray);
//! assert!(value.param_type().is_array());
//! ```
//!
//! # Features
//!
//! - `std` - Enable standard library support

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod types;

pub use types::{ParameterType, ParameterValue};
