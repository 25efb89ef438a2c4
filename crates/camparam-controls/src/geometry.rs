//! Geometry types carried by camera controls

/// A rectangle positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Flatten into `[x, y, width, height]`
    pub fn to_array(&self) -> [i64; 4] {
        [
            i64::from(self.x),
            i64::from(self.y),
            i64::from(self.width),
            i64::from(self.height),
        ]
    }
}

/// A two-dimensional size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Flatten into `[width, height]`
    pub fn to_array(&self) -> [i64; 2] {
        [i64::from(self.width), i64::from(self.height)]
    }
}

/// A point in two-dimensional space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Flatten into `[x, y]`
    pub fn to_array(&self) -> [i64; 2] {
        [i64::from(self.x), i64::from(self.y)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_field_order() {
        let rect = Rectangle::new(-4, 8, 1920, 1080);
        assert_eq!(rect.to_array(), [-4, 8, 1920, 1080]);
    }

    #[test]
    fn test_unsigned_fields_do_not_wrap() {
        let size = Size::new(u32::MAX, 1);
        assert_eq!(size.to_array(), [4_294_967_295, 1]);
    }

    #[test]
    fn test_point() {
        assert_eq!(Point::new(3, -7).to_array(), [3, -7]);
    }
}
