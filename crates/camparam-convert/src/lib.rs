//! Control to parameter conversion for camparam
//!
//! Bridges camera control values and types into the ROS 2 parameter type
//! system, which has no unsigned integers and no compound types:
//! - unsigned integers widen into the signed 64-bit parameter integer
//! - geometry values are flattened into integer arrays
//! - single-element arrays collapse to scalars, empty arrays to `NotSet`
//!
//! All operations are pure. The control table is static and read-only, so a
//! [`Converter`] can be shared freely between threads.
//!
//! # Features
//!
//! - `std` - Enable standard library support
//! - `log` - Log type inference and skipped values

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod converter;
pub mod error;
mod value;

pub use converter::{convert_value, infer_parameter_type, Converter};
pub use error::ConversionError;
