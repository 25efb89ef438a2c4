//! Control values
//!
//! A [`ControlValue`] is tagged at runtime with a [`ControlType`] and is
//! either a scalar or an array. Internally a scalar is stored as a
//! one-element sequence, so every value exposes its payload as a slice of
//! the concrete element type.

use crate::config::Capabilities;
use crate::geometry::{Point, Rectangle, Size};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Element type of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlType {
    None,
    Bool,
    Byte,
    Integer32,
    Integer64,
    Unsigned16,
    Unsigned32,
    Float,
    String,
    Rectangle,
    Size,
    Point,
}

impl ControlType {
    /// Check whether the library build described by `caps` knows this type
    pub const fn is_available(self, caps: &Capabilities) -> bool {
        match self {
            Self::Unsigned16 | Self::Unsigned32 => caps.has_unsigned(),
            Self::Point => caps.has_point(),
            Self::None
            | Self::Bool
            | Self::Byte
            | Self::Integer32
            | Self::Integer64
            | Self::Float
            | Self::String
            | Self::Rectangle
            | Self::Size => true,
        }
    }

    /// Compound geometry types made of several named fields
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Rectangle | Self::Size | Self::Point)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::Integer32 => "int32",
            Self::Integer64 => "int64",
            Self::Unsigned16 => "uint16",
            Self::Unsigned32 => "uint32",
            Self::Float => "float",
            Self::String => "string",
            Self::Rectangle => "rectangle",
            Self::Size => "size",
            Self::Point => "point",
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed storage of a control value's elements
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPayload {
    None,
    Bool(Vec<bool>),
    Byte(Vec<u8>),
    Integer32(Vec<i32>),
    Integer64(Vec<i64>),
    Unsigned16(Vec<u16>),
    Unsigned32(Vec<u32>),
    Float(Vec<f32>),
    String(Vec<String>),
    Rectangle(Vec<Rectangle>),
    Size(Vec<Size>),
    Point(Vec<Point>),
}

impl ControlPayload {
    pub const fn control_type(&self) -> ControlType {
        match self {
            Self::None => ControlType::None,
            Self::Bool(_) => ControlType::Bool,
            Self::Byte(_) => ControlType::Byte,
            Self::Integer32(_) => ControlType::Integer32,
            Self::Integer64(_) => ControlType::Integer64,
            Self::Unsigned16(_) => ControlType::Unsigned16,
            Self::Unsigned32(_) => ControlType::Unsigned32,
            Self::Float(_) => ControlType::Float,
            Self::String(_) => ControlType::String,
            Self::Rectangle(_) => ControlType::Rectangle,
            Self::Size(_) => ControlType::Size,
            Self::Point(_) => ControlType::Point,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Bool(v) => v.len(),
            Self::Byte(v) => v.len(),
            Self::Integer32(v) => v.len(),
            Self::Integer64(v) => v.len(),
            Self::Unsigned16(v) => v.len(),
            Self::Unsigned32(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::String(v) => v.len(),
            Self::Rectangle(v) => v.len(),
            Self::Size(v) => v.len(),
            Self::Point(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rust types that can be stored in a control value
pub trait ControlElement: Sized {
    /// Control type tag of the element
    const TYPE: ControlType;

    /// Wrap a sequence of elements into a payload
    fn into_payload(values: Vec<Self>) -> ControlPayload;

    /// Borrow the elements if the payload holds this type
    fn from_payload(payload: &ControlPayload) -> Option<&[Self]>;
}

macro_rules! impl_control_element {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ControlElement for $ty {
                const TYPE: ControlType = ControlType::$variant;

                #[inline]
                fn into_payload(values: Vec<Self>) -> ControlPayload {
                    ControlPayload::$variant(values)
                }

                #[inline]
                fn from_payload(payload: &ControlPayload) -> Option<&[Self]> {
                    match payload {
                        ControlPayload::$variant(values) => Some(values),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_control_element! {
    bool => Bool,
    u8 => Byte,
    i32 => Integer32,
    i64 => Integer64,
    u16 => Unsigned16,
    u32 => Unsigned32,
    f32 => Float,
    String => String,
    Rectangle => Rectangle,
    Size => Size,
    Point => Point,
}

/// A runtime-tagged control value
///
/// # Example
///
/// ```
/// use camparam_controls::{ControlType, ControlValue};
///
/// let gains = ControlValue::array([1.5f32, 2.0]);
/// assert_eq!(gains.control_type(), ControlType::Float);
/// assert!(gains.is_array());
/// assert_eq!(gains.get::<f32>(), Some(&[1.5, 2.0][..]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ControlValue {
    payload: ControlPayload,
    is_array: bool,
}

impl Default for ControlValue {
    fn default() -> Self {
        Self::none()
    }
}

impl ControlValue {
    /// A value of type none, carrying no payload
    pub const fn none() -> Self {
        Self {
            payload: ControlPayload::None,
            is_array: false,
        }
    }

    /// A scalar value
    pub fn scalar<T: ControlElement>(value: T) -> Self {
        Self {
            payload: T::into_payload(vec![value]),
            is_array: false,
        }
    }

    /// An array value, possibly empty
    pub fn array<T, I>(values: I) -> Self
    where
        T: ControlElement,
        I: IntoIterator<Item = T>,
    {
        Self {
            payload: T::into_payload(values.into_iter().collect()),
            is_array: true,
        }
    }

    pub const fn control_type(&self) -> ControlType {
        self.payload.control_type()
    }

    pub const fn is_array(&self) -> bool {
        self.is_array
    }

    pub const fn is_none(&self) -> bool {
        matches!(self.payload, ControlPayload::None)
    }

    /// Number of elements; 1 for scalars, 0 for none
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn payload(&self) -> &ControlPayload {
        &self.payload
    }

    /// Elements as a slice of `T`, if the value holds that type
    pub fn get<T: ControlElement>(&self) -> Option<&[T]> {
        T::from_payload(&self.payload)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ControlValue {
                fn from(value: $ty) -> Self {
                    Self::scalar(value)
                }
            }
        )*
    };
}

impl_from_scalar!(bool, u8, i32, i64, u16, u32, f32, String, Rectangle, Size, Point);
