// File: crates/figure-core/src/surface.rs
// Summary: Drawing-surface trait (renderer-agnostic) and an in-memory recording surface.

use crate::error::SurfaceError;
use crate::placement::TextPlacement;
use crate::types::Margins;

/// The host canvas labels are drawn onto.
///
/// Implementations report their frame margins and render text anchored at NDC
/// coordinates; `update` asks the host to redraw the canvas.
pub trait Surface {
    fn margins(&self) -> Margins;
    fn draw_text_ndc(&mut self, text: &TextPlacement) -> Result<(), SurfaceError>;
    fn update(&mut self) -> Result<(), SurfaceError>;
}

/// A call received by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Text(TextPlacement),
    Update,
}

/// Surface that keeps every call in order instead of rendering; useful headless and in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    margins: Margins,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(margins: Margins) -> Self {
        Self { margins, calls: Vec::new() }
    }

    pub fn set_margins(&mut self, margins: Margins) { self.margins = margins; }

    pub fn calls(&self) -> &[DrawCall] { &self.calls }

    /// Text draws in call order.
    pub fn texts(&self) -> impl Iterator<Item = &TextPlacement> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text(t) => Some(t),
            DrawCall::Update => None,
        })
    }

    pub fn update_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Update)).count()
    }

    pub fn clear(&mut self) { self.calls.clear(); }
}

impl Surface for RecordingSurface {
    fn margins(&self) -> Margins { self.margins }

    fn draw_text_ndc(&mut self, text: &TextPlacement) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::Text(text.clone()));
        Ok(())
    }

    fn update(&mut self) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::Update);
        Ok(())
    }
}
