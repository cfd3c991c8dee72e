// File: crates/figure-core/src/geometry.rs
// Summary: Lightweight geometry helpers for mapping NDC coordinates onto pixel canvases.

use crate::types::Margins;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

/// Map an NDC point (origin bottom-left, y up) to pixels (origin top-left, y down).
#[inline]
pub fn ndc_to_px(x: f64, y: f64, width: i32, height: i32) -> (f32, f32) {
    ((x * width as f64) as f32, ((1.0 - y) * height as f64) as f32)
}

/// Pixel rectangle of the frame interior of a `width` x `height` canvas.
pub fn frame_rect(margins: &Margins, width: i32, height: i32) -> RectI32 {
    let w = width as f64;
    let h = height as f64;
    RectI32::from_ltrb(
        (margins.left * w).round() as i32,
        (margins.top * h).round() as i32,
        ((1.0 - margins.right) * w).round() as i32,
        ((1.0 - margins.bottom) * h).round() as i32,
    )
}

/// Convert an NDC text size into pixels. Sizes are relative to the shorter canvas side.
#[inline]
pub fn text_size_px(size: f64, width: i32, height: i32) -> f32 {
    (size * width.min(height) as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners() {
        assert_eq!(ndc_to_px(0.0, 1.0, 600, 400), (0.0, 0.0));
        assert_eq!(ndc_to_px(1.0, 0.0, 600, 400), (600.0, 400.0));
    }

    #[test]
    fn frame_of_default_margins() {
        let r = frame_rect(&Margins::default(), 600, 600);
        assert_eq!(r, RectI32::from_ltrb(96, 30, 588, 522));
        assert_eq!(r.width(), 492);
        assert_eq!(r.height(), 492);
    }
}
