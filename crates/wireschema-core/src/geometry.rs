//! Geometric primitives for component placement and wire routing.
//!
//! - [`Point`] - A 2D coordinate in layout space
//! - [`Size`] - Width and height of a placed component
//!
//! Coordinates are stored as `f64` so that any decimal written by the
//! exporter reads back to the exact same value.

/// A 2D point in layout coordinate space.
///
/// # Examples
///
/// ```
/// # use wireschema_core::geometry::Point;
/// let p = Point::new(-12.0, -23.0);
/// assert_eq!(p.x(), -12.0);
/// assert!(p.is_finite());
/// assert!(!Point::new(f64::NAN, 0.0).is_finite());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns `true` when both coordinates are finite numbers.
    ///
    /// Only finite points can be written to and read back from the text format.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Dimensions of a placed component.
///
/// Always zero when produced by the importer; placement logic outside this
/// crate computes real sizes from the component catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }

    /// Checks if both dimensions are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}
