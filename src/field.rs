//! Playing-field dimensions
//!
//! Every physics constant is a fraction of these, so a `FieldSize` is always
//! finite and strictly positive.

use serde::{Deserialize, Serialize};

use crate::consts::{CONTAINER_MARGIN, FIELD_ASPECT, MAX_FIELD_WIDTH};

/// Width and height of the playing field, in pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSize {
    width: f32,
    height: f32,
}

impl Default for FieldSize {
    fn default() -> Self {
        Self {
            width: MAX_FIELD_WIDTH,
            height: MAX_FIELD_WIDTH * FIELD_ASPECT,
        }
    }
}

impl FieldSize {
    /// Returns `None` for zero, negative or non-finite dimensions
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Some(Self { width, height })
        } else {
            None
        }
    }

    /// Fit a 4:3 field into a container of the given width, capped at 800 px
    pub fn fit_container(container_width: f32) -> Option<Self> {
        let width = (container_width - CONTAINER_MARGIN).min(MAX_FIELD_WIDTH);
        Self::new(width, width * FIELD_ASPECT)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate_dimensions() {
        assert!(FieldSize::new(0.0, 600.0).is_none());
        assert!(FieldSize::new(800.0, -1.0).is_none());
        assert!(FieldSize::new(f32::NAN, 600.0).is_none());
        assert!(FieldSize::new(f32::INFINITY, 600.0).is_none());
        assert!(FieldSize::new(800.0, 600.0).is_some());
    }

    #[test]
    fn test_fit_container() {
        // Wide container caps at 800x600
        let field = FieldSize::fit_container(1920.0).unwrap();
        assert_eq!(field.width(), 800.0);
        assert_eq!(field.height(), 600.0);

        // Narrow container keeps the margin and 4:3 ratio
        let field = FieldSize::fit_container(420.0).unwrap();
        assert_eq!(field.width(), 400.0);
        assert_eq!(field.height(), 300.0);

        // Container smaller than the margin
        assert!(FieldSize::fit_container(10.0).is_none());
    }
}
