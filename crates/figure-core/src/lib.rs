// File: crates/figure-core/src/lib.rs
// Summary: Core library entry point; exports the label model, placement geometry and style preset.

pub mod types;
pub mod geometry;
pub mod error;
pub mod align;
pub mod font;
pub mod label;
pub mod placement;
pub mod surface;
pub mod draw;
pub mod style;

pub use types::Margins;
pub use error::{LabelError, SurfaceError};
pub use align::{HAlign, TextAlign, VAlign};
pub use font::{FontCode, FontFace, FontFamily};
pub use label::{Label, LuminosityLabel, Position, Sublabel};
pub use placement::{place_label, place_luminosity, LabelLayout, TextPlacement};
pub use surface::{DrawCall, RecordingSurface, Surface};
pub use draw::draw_labels;
pub use style::{ColorIndex, StyleContext, StyleGuard, TdrStyle};
