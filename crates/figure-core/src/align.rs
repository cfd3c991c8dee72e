// File: crates/figure-core/src/align.rs
// Summary: Text alignment as a single enum pair with one mapping to the legacy numeric code.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LabelError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VAlign {
    Bottom,
    Center,
    Top,
}

impl HAlign {
    pub const fn name(self) -> &'static str {
        match self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(HAlign::Left),
            "center" => Some(HAlign::Center),
            "right" => Some(HAlign::Right),
            _ => None,
        }
    }

    const fn digit(self) -> i32 {
        match self {
            HAlign::Left => 1,
            HAlign::Center => 2,
            HAlign::Right => 3,
        }
    }

    /// Fraction of the text advance that lies left of the anchor.
    pub const fn anchor_fraction(self) -> f32 {
        match self {
            HAlign::Left => 0.0,
            HAlign::Center => 0.5,
            HAlign::Right => 1.0,
        }
    }
}

impl VAlign {
    pub const fn name(self) -> &'static str {
        match self {
            VAlign::Bottom => "bottom",
            VAlign::Center => "center",
            VAlign::Top => "top",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bottom" => Some(VAlign::Bottom),
            "center" => Some(VAlign::Center),
            "top" => Some(VAlign::Top),
            _ => None,
        }
    }

    const fn digit(self) -> i32 {
        match self {
            VAlign::Bottom => 1,
            VAlign::Center => 2,
            VAlign::Top => 3,
        }
    }
}

/// Horizontal and vertical text alignment relative to the drawing coordinates.
///
/// The legacy numeric encoding is `10 * h + v` with `h` in {1 left, 2 center, 3 right}
/// and `v` in {1 bottom, 2 center, 3 top}, so `(left, top)` is 13 and `(right, bottom)` is 31.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct TextAlign {
    pub h: HAlign,
    pub v: VAlign,
}

impl TextAlign {
    pub const LEFT_BOTTOM: TextAlign = TextAlign::new(HAlign::Left, VAlign::Bottom);
    pub const LEFT_TOP: TextAlign = TextAlign::new(HAlign::Left, VAlign::Top);
    pub const CENTER_TOP: TextAlign = TextAlign::new(HAlign::Center, VAlign::Top);
    pub const RIGHT_BOTTOM: TextAlign = TextAlign::new(HAlign::Right, VAlign::Bottom);
    pub const RIGHT_TOP: TextAlign = TextAlign::new(HAlign::Right, VAlign::Top);

    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Self { h, v }
    }

    /// All nine combinations in legacy code order (11, 12, 13, 21, ... 33).
    pub fn all() -> [TextAlign; 9] {
        let hs = [HAlign::Left, HAlign::Center, HAlign::Right];
        let vs = [VAlign::Bottom, VAlign::Center, VAlign::Top];
        std::array::from_fn(|i| TextAlign::new(hs[i / 3], vs[i % 3]))
    }

    /// Legacy numeric alignment code.
    pub const fn code(self) -> i32 {
        10 * self.h.digit() + self.v.digit()
    }

    pub fn from_code(code: i32) -> Result<Self, LabelError> {
        TextAlign::all()
            .into_iter()
            .find(|a| a.code() == code)
            .ok_or_else(|| LabelError::InvalidAlignment(code.to_string()))
    }

    /// Parse a `(horizontal, vertical)` name pair such as `("left", "top")`.
    pub fn from_names(h: &str, v: &str) -> Result<Self, LabelError> {
        match (HAlign::from_name(h), VAlign::from_name(v)) {
            (Some(h), Some(v)) => Ok(TextAlign::new(h, v)),
            _ => Err(LabelError::InvalidAlignment(format!("({h}, {v})"))),
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.h.name(), self.v.name())
    }
}

impl TryFrom<i32> for TextAlign {
    type Error = LabelError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        TextAlign::from_code(code)
    }
}

impl TryFrom<(&str, &str)> for TextAlign {
    type Error = LabelError;

    fn try_from((h, v): (&str, &str)) -> Result<Self, Self::Error> {
        TextAlign::from_names(h, v)
    }
}

impl From<TextAlign> for i32 {
    fn from(align: TextAlign) -> Self {
        align.code()
    }
}
