// File: crates/figure-core/src/font.rs
// Summary: Numeric font codes (family * 10 + precision) and their typeface description.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Times,
    Helvetica,
    Courier,
    Symbol,
    Wingdings,
}

impl FontFamily {
    /// Family names tried in order when resolving a system typeface.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            FontFamily::Times => &["Times New Roman", "Times", "Liberation Serif", "DejaVu Serif", "serif"],
            FontFamily::Helvetica => &["Helvetica", "Arial", "Liberation Sans", "DejaVu Sans", "sans-serif"],
            FontFamily::Courier => &["Courier New", "Courier", "Liberation Mono", "DejaVu Sans Mono", "monospace"],
            FontFamily::Symbol => &["Symbol", "Standard Symbols PS", "DejaVu Sans"],
            FontFamily::Wingdings => &["Wingdings", "Dingbats", "DejaVu Sans"],
        }
    }
}

/// Resolved typeface of a font code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontFace {
    pub family: FontFamily,
    pub bold: bool,
    pub italic: bool,
}

impl FontFace {
    const fn new(family: FontFamily, bold: bool, italic: bool) -> Self {
        Self { family, bold, italic }
    }
}

/// Font code `10 * number + precision`, e.g. 61 is Helvetica bold and 52 Helvetica italic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FontCode(pub u16);

impl FontCode {
    pub const HELVETICA: FontCode = FontCode(42);
    pub const HELVETICA_ITALIC: FontCode = FontCode(52);
    pub const HELVETICA_BOLD: FontCode = FontCode(61);

    /// Font table index (1..=15 for known faces).
    pub const fn number(self) -> u16 { self.0 / 10 }

    /// Precision digit; 2 and 3 select scalable fonts, 3 interprets sizes in pixels.
    pub const fn precision(self) -> u8 { (self.0 % 10) as u8 }

    pub fn face(self) -> Option<FontFace> {
        use FontFamily::*;
        let face = match self.number() {
            1 => FontFace::new(Times, false, true),
            2 => FontFace::new(Times, true, false),
            3 => FontFace::new(Times, true, true),
            4 => FontFace::new(Helvetica, false, false),
            5 => FontFace::new(Helvetica, false, true),
            6 => FontFace::new(Helvetica, true, false),
            7 => FontFace::new(Helvetica, true, true),
            8 => FontFace::new(Courier, false, false),
            9 => FontFace::new(Courier, false, true),
            10 => FontFace::new(Courier, true, false),
            11 => FontFace::new(Courier, true, true),
            12 => FontFace::new(Symbol, false, false),
            13 => FontFace::new(Times, false, false),
            14 => FontFace::new(Wingdings, false, false),
            15 => FontFace::new(Symbol, false, true),
            _ => return None,
        };
        Some(face)
    }
}

impl Default for FontCode {
    fn default() -> Self { FontCode::HELVETICA }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_fonts_decode() {
        let bold = FontCode::HELVETICA_BOLD.face().unwrap();
        assert_eq!(bold, FontFace { family: FontFamily::Helvetica, bold: true, italic: false });
        let italic = FontCode::HELVETICA_ITALIC.face().unwrap();
        assert!(italic.italic && !italic.bold);
        assert_eq!(FontCode::HELVETICA.precision(), 2);
        assert_eq!(FontCode(132).face().unwrap().family, FontFamily::Times);
        assert!(FontCode(162).face().is_none());
        assert!(FontCode(2).face().is_none());
    }
}
