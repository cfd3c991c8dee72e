// File: crates/figure-core/src/placement.rs
// Summary: Pure label placement geometry in normalized device coordinates.
// Notes:
// - The frame interior is [left, 1 - right] x [bottom, 1 - top].
// - Inside the frame, paddings are fractions of the frame extent; outside, of the top margin.

use tracing::debug;

use crate::align::TextAlign;
use crate::font::FontCode;
use crate::label::{Label, LuminosityLabel, Position, Sublabel};
use crate::types::Margins;

/// A fully resolved text draw: anchor in NDC, alignment about the anchor, font and size.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPlacement {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub align: TextAlign,
    pub font: FontCode,
    /// Text size as a fraction of the canvas.
    pub size: f64,
}

impl TextPlacement {
    pub fn is_within_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// Placement of an experiment label and its optional sublabel.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelLayout {
    pub label: TextPlacement,
    pub sublabel: Option<TextPlacement>,
}

/// Compute where `label` and its sublabel go for the given canvas margins.
pub fn place_label(label: &Label, margins: &Margins) -> LabelLayout {
    let primary = place_primary(label, margins);
    let sublabel = place_sublabel(&label.sublabel, &primary, label.position, margins);
    debug!(
        position = %label.position,
        x = primary.x,
        y = primary.y,
        align = primary.align.code(),
        size = primary.size,
        sublabel = sublabel.is_some(),
        "placed label"
    );
    LabelLayout { label: primary, sublabel }
}

/// Compute where the luminosity label goes: above the frame, flush with its right edge.
pub fn place_luminosity(label: &LuminosityLabel, margins: &Margins) -> TextPlacement {
    let placement = TextPlacement {
        text: label.text.clone(),
        x: 1.0 - margins.right,
        y: 1.0 - label.padding_top * margins.top,
        align: label.align,
        font: label.font,
        size: label.scale * margins.top,
    };
    debug!(x = placement.x, y = placement.y, size = placement.size, "placed luminosity label");
    placement
}

fn place_primary(label: &Label, m: &Margins) -> TextPlacement {
    let pad_top = label.resolved_padding_top();
    let inside_y = 1.0 - m.top - pad_top * m.frame_height();
    let (x, y, align) = match label.position {
        Position::Left => (m.left + label.padding_left * m.frame_width(), inside_y, TextAlign::LEFT_TOP),
        Position::Center => (m.left + 0.5 * m.frame_width(), inside_y, TextAlign::CENTER_TOP),
        Position::Right => (1.0 - m.right - label.padding_right * m.frame_width(), inside_y, TextAlign::RIGHT_TOP),
        Position::Outside => (m.left, 1.0 - pad_top * m.top, TextAlign::LEFT_BOTTOM),
    };
    TextPlacement {
        text: label.text.clone(),
        x,
        y,
        align,
        font: label.font,
        size: label.scale * m.top,
    }
}

fn place_sublabel(
    sub: &Sublabel,
    primary: &TextPlacement,
    position: Position,
    m: &Margins,
) -> Option<TextPlacement> {
    if sub.text.is_empty() {
        return None;
    }
    // Beside the label above the frame, underneath it inside the frame.
    let (x, y) = if position.is_inside_frame() {
        (primary.x, primary.y - sub.padding_top * primary.size)
    } else {
        (m.left + sub.padding_left * m.frame_width(), primary.y)
    };
    Some(TextPlacement {
        text: sub.text.clone(),
        x,
        y,
        align: primary.align,
        font: sub.font,
        size: sub.scale * primary.size,
    })
}
