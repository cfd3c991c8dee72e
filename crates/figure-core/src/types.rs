// File: crates/figure-core/src/types.rs
// Summary: Shared types and constants (canvas size, frame margins).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default canvas width in pixels.
pub const WIDTH: i32 = 600;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 600;

/// Frame margins as fractions of the canvas extent.
/// Contract: all fields lie in [0, 1], `top + bottom < 1` and `left + right < 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// Margins in the top/right/bottom/left order used throughout the crate.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Width of the frame interior, `1 - left - right`.
    pub fn frame_width(&self) -> f64 { 1.0 - self.left - self.right }
    /// Height of the frame interior, `1 - top - bottom`.
    pub fn frame_height(&self) -> f64 { 1.0 - self.top - self.bottom }

    /// True when every side is within [0, 1] and the frame interior is non-empty.
    pub fn is_valid(&self) -> bool {
        let unit = |v: f64| (0.0..=1.0).contains(&v);
        unit(self.top)
            && unit(self.right)
            && unit(self.bottom)
            && unit(self.left)
            && self.top + self.bottom < 1.0
            && self.left + self.right < 1.0
    }
}

impl Default for Margins {
    /// Pad margins of the TDR style.
    fn default() -> Self {
        Self::new(0.05, 0.02, 0.13, 0.16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_extent() {
        let m = Margins::default();
        assert!((m.frame_width() - 0.82).abs() < 1e-12);
        assert!((m.frame_height() - 0.82).abs() < 1e-12);
        assert!(m.is_valid());
        assert!(!Margins::new(0.6, 0.0, 0.5, 0.0).is_valid());
        assert!(!Margins::new(-0.1, 0.0, 0.0, 0.0).is_valid());
    }
}
