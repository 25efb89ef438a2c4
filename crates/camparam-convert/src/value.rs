//! Element-wise conversion of control values into parameter values

use crate::error::ConversionError;
use alloc::string::String;
use alloc::vec::Vec;
use camparam_controls::{ControlElement, Point, Rectangle, Size};
use camparam_params::ParameterValue;

/// Conversion of control elements into parameter values
pub(crate) trait ToParameter: ControlElement {
    /// Convert a single element
    fn to_scalar(&self) -> ParameterValue;

    /// Convert a sequence of two or more elements
    fn to_array(values: &[Self]) -> Result<ParameterValue, ConversionError>;
}

/// Convert a payload by its element count
///
/// An empty payload has no value, a single element converts as a scalar
/// whether or not the control is an array, anything longer as an array.
pub(crate) fn collapse<T: ToParameter>(values: &[T]) -> Result<ParameterValue, ConversionError> {
    match values {
        [] => Ok(ParameterValue::NotSet),
        [value] => Ok(value.to_scalar()),
        values => T::to_array(values),
    }
}

impl ToParameter for bool {
    fn to_scalar(&self) -> ParameterValue {
        ParameterValue::Bool(*self)
    }

    fn to_array(values: &[Self]) -> Result<ParameterValue, ConversionError> {
        Ok(ParameterValue::BoolArray(values.to_vec()))
    }
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToParameter for $ty {
                #[inline]
                fn to_scalar(&self) -> ParameterValue {
                    ParameterValue::Integer(i64::from(*self))
                }

                fn to_array(values: &[Self]) -> Result<ParameterValue, ConversionError> {
                    Ok(ParameterValue::IntegerArray(
                        values.iter().map(|v| i64::from(*v)).collect(),
                    ))
                }
            }
        )*
    };
}

// u16 and u32 widen losslessly into the signed 64-bit parameter integer
impl_integer!(u8, i32, i64, u16, u32);

impl ToParameter for f32 {
    fn to_scalar(&self) -> ParameterValue {
        ParameterValue::Double(f64::from(*self))
    }

    fn to_array(values: &[Self]) -> Result<ParameterValue, ConversionError> {
        Ok(ParameterValue::DoubleArray(
            values.iter().map(|v| f64::from(*v)).collect(),
        ))
    }
}

impl ToParameter for String {
    fn to_scalar(&self) -> ParameterValue {
        ParameterValue::String(self.clone())
    }

    fn to_array(values: &[Self]) -> Result<ParameterValue, ConversionError> {
        Ok(ParameterValue::StringArray(values.to_vec()))
    }
}

macro_rules! impl_structured {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToParameter for $ty {
                fn to_scalar(&self) -> ParameterValue {
                    ParameterValue::IntegerArray(Vec::from(self.to_array()))
                }

                fn to_array(_values: &[Self]) -> Result<ParameterValue, ConversionError> {
                    Err(ConversionError::InvalidConversion(Self::TYPE))
                }
            }
        )*
    };
}

// a single geometry value becomes an integer array; several have no counterpart
impl_structured!(Rectangle, Size, Point);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use camparam_controls::ControlType;

    #[test]
    fn test_collapse_empty() {
        assert_eq!(collapse::<i32>(&[]), Ok(ParameterValue::NotSet));
        assert_eq!(collapse::<Rectangle>(&[]), Ok(ParameterValue::NotSet));
    }

    #[test]
    fn test_collapse_single() {
        assert_eq!(collapse(&[true]), Ok(ParameterValue::Bool(true)));
        assert_eq!(collapse(&[0.25f32]), Ok(ParameterValue::Double(0.25)));
    }

    #[test]
    fn test_collapse_many() {
        assert_eq!(
            collapse(&[1u8, 255]),
            Ok(ParameterValue::IntegerArray(vec![1, 255]))
        );
        assert_eq!(
            collapse(&["a".to_string(), "b".to_string()]),
            Ok(ParameterValue::StringArray(vec!["a".into(), "b".into()]))
        );
    }

    #[test]
    fn test_unsigned_widening() {
        assert_eq!(u16::MAX.to_scalar(), ParameterValue::Integer(65_535));
        assert_eq!(u32::MAX.to_scalar(), ParameterValue::Integer(4_294_967_295));
        assert_eq!(
            u32::to_array(&[0, u32::MAX]),
            Ok(ParameterValue::IntegerArray(vec![0, 4_294_967_295]))
        );
    }

    #[test]
    fn test_structured_scalar() {
        assert_eq!(
            Rectangle::new(1, 2, 3, 4).to_scalar(),
            ParameterValue::IntegerArray(vec![1, 2, 3, 4])
        );
        assert_eq!(
            Size::new(640, 480).to_scalar(),
            ParameterValue::IntegerArray(vec![640, 480])
        );
        assert_eq!(
            Point::new(-1, 5).to_scalar(),
            ParameterValue::IntegerArray(vec![-1, 5])
        );
    }

    #[test]
    fn test_structured_array_is_invalid() {
        let sizes = [Size::new(1, 1), Size::new(2, 2)];
        assert_eq!(
            collapse(&sizes),
            Err(ConversionError::InvalidConversion(ControlType::Size))
        );
    }
}
