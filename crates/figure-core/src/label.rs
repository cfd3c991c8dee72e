// File: crates/figure-core/src/label.rs
// Summary: Experiment-name label, its sublabel, and the luminosity label as plain data records.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::align::TextAlign;
use crate::error::LabelError;
use crate::font::FontCode;

/// Where the experiment label sits on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    /// Top left corner inside the frame.
    #[default]
    Left,
    /// Top center inside the frame.
    Center,
    /// Top right corner inside the frame.
    Right,
    /// Top left corner above the frame.
    Outside,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::Left, Position::Center, Position::Right, Position::Outside];

    pub const fn name(self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Center => "center",
            Position::Right => "right",
            Position::Outside => "outside",
        }
    }

    pub const fn is_inside_frame(self) -> bool {
        !matches!(self, Position::Outside)
    }

    /// Top padding used when a label leaves `padding_top` unset.
    /// Inside the frame it is a fraction of the frame height; outside, of the top margin.
    pub const fn default_padding_top(self) -> f64 {
        match self {
            Position::Outside => 0.8,
            Position::Left | Position::Center | Position::Right => 0.035,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| LabelError::InvalidPlacementMode(s.to_string()))
    }
}

/// Secondary text drawn next to the experiment label ("Preliminary", "Simulation", ...).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Sublabel {
    /// Empty text means no sublabel is drawn.
    pub text: String,
    pub font: FontCode,
    /// Text size relative to the resolved size of the main label.
    pub scale: f64,
    /// Offset from the frame's left edge as a fraction of the frame width; only used outside the frame.
    pub padding_left: f64,
    /// Gap below the main label in units of its text size; only used inside the frame.
    pub padding_top: f64,
}

impl Default for Sublabel {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: FontCode::HELVETICA_ITALIC,
            scale: 0.76,
            padding_left: 0.12,
            padding_top: 1.2,
        }
    }
}

/// The experiment name label.
///
/// Defaults follow the publication committee guidelines: bold Helvetica "CMS" in the
/// top left corner of the frame, sized to three quarters of the top margin.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Label {
    pub text: String,
    pub position: Position,
    pub font: FontCode,
    /// Text size relative to the top margin.
    pub scale: f64,
    /// Fraction of the frame width left of the text (left position).
    pub padding_left: f64,
    /// Fraction of the frame width right of the text (right position).
    pub padding_right: f64,
    /// `None` selects [`Position::default_padding_top`].
    pub padding_top: Option<f64>,
    pub sublabel: Sublabel,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            text: "CMS".to_string(),
            position: Position::Left,
            font: FontCode::HELVETICA_BOLD,
            scale: 0.75,
            padding_left: 0.045,
            padding_right: 0.045,
            padding_top: None,
            sublabel: Sublabel::default(),
        }
    }
}

impl Label {
    pub fn new() -> Self { Self::default() }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_sublabel(mut self, text: impl Into<String>) -> Self {
        self.sublabel.text = text.into();
        self
    }

    /// Set the position from its name, rejecting anything but left/center/right/outside.
    pub fn set_position(&mut self, name: &str) -> Result<(), LabelError> {
        self.position = name.parse()?;
        Ok(())
    }

    /// Top padding in effect for the current position.
    pub fn resolved_padding_top(&self) -> f64 {
        self.padding_top.unwrap_or_else(|| self.position.default_padding_top())
    }
}

/// Integrated luminosity and centre-of-mass energy label, drawn above the frame's right edge.
///
/// Data-taking periods are separated by `+`, e.g. `"19.7 fb^{-1} (8 TeV) + 4.9 fb^{-1} (7 TeV)"`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LuminosityLabel {
    pub text: String,
    pub font: FontCode,
    /// Text size relative to the top margin.
    pub scale: f64,
    pub align: TextAlign,
    /// Distance from the canvas top as a fraction of the top margin.
    pub padding_top: f64,
}

impl Default for LuminosityLabel {
    fn default() -> Self {
        Self::new("")
    }
}

impl LuminosityLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: FontCode::HELVETICA,
            scale: 0.6,
            align: TextAlign::RIGHT_BOTTOM,
            padding_top: 0.8,
        }
    }
}
