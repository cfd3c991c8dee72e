// File: crates/figure-core/src/draw.rs
// Summary: Draw operations: resolve label geometry against a surface, then issue one text call per label.

use tracing::{debug, warn};

use crate::error::LabelError;
use crate::label::{Label, LuminosityLabel, Position};
use crate::placement::{place_label, place_luminosity, LabelLayout, TextPlacement};
use crate::surface::Surface;

impl Label {
    /// Draw the label, then the sublabel when its text is non-empty.
    /// Returns the placements that were drawn.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<LabelLayout, LabelError> {
        let layout = place_label(self, &surface.margins());
        emit(surface, &layout.label)?;
        if let Some(sub) = &layout.sublabel {
            emit(surface, sub)?;
        }
        Ok(layout)
    }
}

impl LuminosityLabel {
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<TextPlacement, LabelError> {
        let placement = place_luminosity(self, &surface.margins());
        emit(surface, &placement)?;
        Ok(placement)
    }
}

/// Draw the standard figure labels and redraw the surface.
///
/// `position` is one of `left`, `center`, `right` or `outside`; `extra_text` is the
/// sublabel ("Preliminary", "Simulation", ...) and may be empty. The position is
/// validated before anything is drawn.
pub fn draw_labels<S: Surface + ?Sized>(
    surface: &mut S,
    lumi_text: &str,
    position: &str,
    extra_text: &str,
) -> Result<(), LabelError> {
    let position: Position = position.parse()?;
    let label = Label::new().with_position(position).with_sublabel(extra_text);
    label.draw(surface)?;
    LuminosityLabel::new(lumi_text).draw(surface)?;
    surface.update()?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn emit<S: Surface + ?Sized>(surface: &mut S, text: &TextPlacement) -> Result<(), LabelError> {
    if !text.is_within_unit_square() {
        warn!(text = %text.text, x = text.x, y = text.y, "label anchor outside the canvas");
    }
    debug!(text = %text.text, x = text.x, y = text.y, align = %text.align, "draw text");
    surface.draw_text_ndc(text)?;
    Ok(())
}
