// File: crates/figure-render-skia/src/lib.rs
// Summary: Skia renderer crate; CPU raster surface for figure labels and frames.

pub mod text;
pub mod surface;

pub use surface::SkiaSurface;
pub use text::FontResolver;
