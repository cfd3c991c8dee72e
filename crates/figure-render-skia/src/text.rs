// File: crates/figure-render-skia/src/text.rs
// Summary: Font-code to typeface resolution and anchor math for aligned text.

use std::collections::HashMap;

use figure_core::{FontCode, FontFace, FontFamily, TextAlign, VAlign};
use skia_safe as skia;
use tracing::{debug, warn};

/// Resolves font codes to system typefaces, caching each lookup.
pub struct FontResolver {
    mgr: skia::FontMgr,
    cache: HashMap<FontCode, Option<skia::Typeface>>,
}

impl Default for FontResolver {
    fn default() -> Self { Self::new() }
}

impl FontResolver {
    pub fn new() -> Self {
        Self { mgr: skia::FontMgr::default(), cache: HashMap::new() }
    }

    pub fn typeface(&mut self, code: FontCode) -> Option<skia::Typeface> {
        let mgr = &self.mgr;
        self.cache.entry(code).or_insert_with(|| lookup(mgr, code)).clone()
    }

    /// Font for `code` at `size_px`. Falls back to Skia's default face when no system font matches.
    pub fn font(&mut self, code: FontCode, size_px: f32) -> skia::Font {
        match self.typeface(code) {
            Some(tf) => skia::Font::from_typeface(tf, size_px),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size_px);
                font
            }
        }
    }
}

fn lookup(mgr: &skia::FontMgr, code: FontCode) -> Option<skia::Typeface> {
    let face = code.face().unwrap_or_else(|| {
        warn!(code = code.0, "unknown font code, using Helvetica");
        FontFace { family: FontFamily::Helvetica, bold: false, italic: false }
    });
    let style = match (face.bold, face.italic) {
        (true, true) => skia::FontStyle::bold_italic(),
        (true, false) => skia::FontStyle::bold(),
        (false, true) => skia::FontStyle::italic(),
        (false, false) => skia::FontStyle::normal(),
    };
    let found = face
        .family
        .candidates()
        .iter()
        .find_map(|name| mgr.match_family_style(name, style))
        .or_else(|| mgr.legacy_make_typeface(None::<&str>, style));
    if found.is_none() {
        warn!(code = code.0, "no typeface available");
    } else {
        debug!(code = code.0, family = ?face.family, "resolved typeface");
    }
    found
}

/// Baseline origin for text of the given advance width anchored at `anchor` (pixels, y down).
/// `ascent` is negative above the baseline and `descent` positive below it.
pub fn aligned_origin(anchor: (f32, f32), advance: f32, ascent: f32, descent: f32, align: TextAlign) -> (f32, f32) {
    let x = anchor.0 - advance * align.h.anchor_fraction();
    let y = match align.v {
        VAlign::Bottom => anchor.1,
        VAlign::Top => anchor.1 - ascent,
        VAlign::Center => anchor.1 - (ascent + descent) * 0.5,
    };
    (x, y)
}
