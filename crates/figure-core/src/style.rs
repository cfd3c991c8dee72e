// File: crates/figure-core/src/style.rs
// Summary: TDR (Technical Design Report) figure style preset and scoped style activation.
// Notes:
// - The preset is plain data; renderers read whichever style is active when they draw.
// - Unused options of the historical style definition are left out.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::font::FontCode;
use crate::types::{Margins, HEIGHT, WIDTH};

/// Index into the basic colour table (0 white, 1 black, 2 red, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColorIndex(pub u16);

impl ColorIndex {
    pub const WHITE: ColorIndex = ColorIndex(0);
    pub const BLACK: ColorIndex = ColorIndex(1);
    pub const RED: ColorIndex = ColorIndex(2);
    /// Near-white used for title boxes.
    pub const PAPER: ColorIndex = ColorIndex(10);

    /// RGB of the basic colours 0..=10.
    pub fn rgb(self) -> Option<(u8, u8, u8)> {
        let rgb = match self.0 {
            0 => (255, 255, 255),
            1 => (0, 0, 0),
            2 => (255, 0, 0),
            3 => (0, 255, 0),
            4 => (0, 0, 255),
            5 => (255, 255, 0),
            6 => (255, 0, 255),
            7 => (0, 255, 255),
            8 => (89, 212, 84),
            9 => (89, 84, 217),
            10 => (254, 254, 254),
            _ => return None,
        };
        Some(rgb)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanvasStyle {
    pub border_mode: i32,
    pub color: ColorIndex,
    pub default_width: i32,
    pub default_height: i32,
    /// On-screen position.
    pub default_x: i32,
    pub default_y: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PadStyle {
    pub border_mode: i32,
    pub color: ColorIndex,
    pub grid_x: bool,
    pub grid_y: bool,
    pub grid_color: ColorIndex,
    pub grid_style: i32,
    pub grid_width: i32,
    pub margins: Margins,
    /// Tick marks (and labels) on the opposite x/y axis too.
    pub tick_x: bool,
    pub tick_y: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameStyle {
    pub border_mode: i32,
    pub border_size: i32,
    pub fill_color: ColorIndex,
    pub fill_style: i32,
    pub line_color: ColorIndex,
    pub line_style: i32,
    pub line_width: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistStyle {
    pub line_color: ColorIndex,
    pub line_style: i32,
    pub line_width: i32,
    pub end_error_size: f64,
    pub marker_style: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitStyle {
    pub opt_fit: i32,
    pub format: String,
    pub func_color: ColorIndex,
    pub func_style: i32,
    pub func_width: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatStyle {
    pub opt_file: i32,
    /// 0 hides the statistics box; "mr" style option strings select entries.
    pub opt_stat: String,
    pub color: ColorIndex,
    pub font: FontCode,
    pub font_size: f64,
    pub text_color: ColorIndex,
    pub format: String,
    pub border_size: i32,
    pub height: f64,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TitleStyle {
    pub show: bool,
    pub font: FontCode,
    pub color: ColorIndex,
    pub text_color: ColorIndex,
    pub fill_color: ColorIndex,
    pub font_size: f64,
}

/// Per-axis title, label and tick settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisStyle {
    pub title_color: ColorIndex,
    pub title_font: FontCode,
    pub title_size: f64,
    pub title_offset: f64,
    pub label_color: ColorIndex,
    pub label_font: FontCode,
    pub label_offset: f64,
    pub label_size: f64,
    pub axis_color: ColorIndex,
    pub tick_length: f64,
    pub ndivisions: i32,
    pub log: bool,
}

impl AxisStyle {
    fn tdr(title_offset: f64) -> Self {
        Self {
            title_color: ColorIndex::BLACK,
            title_font: FontCode::HELVETICA,
            title_size: 0.06,
            title_offset,
            label_color: ColorIndex::BLACK,
            label_font: FontCode::HELVETICA,
            label_offset: 0.007,
            label_size: 0.05,
            axis_color: ColorIndex::BLACK,
            tick_length: 0.03,
            ndivisions: 510,
            log: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HatchStyle {
    pub line_width: i32,
    pub spacing: f64,
}

/// Complete figure style. [`TdrStyle::tdr`] (also the `Default`) is the TDR preset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TdrStyle {
    pub name: String,
    pub title: String,
    pub canvas: CanvasStyle,
    pub pad: PadStyle,
    pub frame: FrameStyle,
    pub hist: HistStyle,
    pub fit: FitStyle,
    pub show_date: bool,
    pub stat: StatStyle,
    pub global_title: TitleStyle,
    pub x_axis: AxisStyle,
    pub y_axis: AxisStyle,
    pub z_axis: AxisStyle,
    pub strip_decimals: bool,
    /// Paper size in centimetres for vector output.
    pub paper_size: (f64, f64),
    pub hatches: HatchStyle,
}

impl TdrStyle {
    pub fn tdr() -> Self {
        Self {
            name: "tdrStyle".to_string(),
            title: "Style for P-TDR".to_string(),
            canvas: CanvasStyle {
                border_mode: 0,
                color: ColorIndex::WHITE,
                default_width: WIDTH,
                default_height: HEIGHT,
                default_x: 0,
                default_y: 0,
            },
            pad: PadStyle {
                border_mode: 0,
                color: ColorIndex::WHITE,
                grid_x: false,
                grid_y: false,
                grid_color: ColorIndex::WHITE,
                grid_style: 3,
                grid_width: 1,
                margins: Margins::new(0.05, 0.02, 0.13, 0.16),
                tick_x: true,
                tick_y: true,
            },
            frame: FrameStyle {
                border_mode: 0,
                border_size: 1,
                fill_color: ColorIndex::WHITE,
                fill_style: 0,
                line_color: ColorIndex::BLACK,
                line_style: 1,
                line_width: 1,
            },
            hist: HistStyle {
                line_color: ColorIndex::BLACK,
                line_style: 0,
                line_width: 1,
                end_error_size: 2.0,
                marker_style: 20,
            },
            fit: FitStyle {
                opt_fit: 1,
                format: "5.4g".to_string(),
                func_color: ColorIndex::RED,
                func_style: 1,
                func_width: 1,
            },
            show_date: false,
            stat: StatStyle {
                opt_file: 0,
                opt_stat: "0".to_string(),
                color: ColorIndex::WHITE,
                font: FontCode::HELVETICA,
                font_size: 0.025,
                text_color: ColorIndex::BLACK,
                format: "6.4g".to_string(),
                border_size: 1,
                height: 0.1,
                width: 0.15,
            },
            global_title: TitleStyle {
                show: false,
                font: FontCode::HELVETICA,
                color: ColorIndex::BLACK,
                text_color: ColorIndex::BLACK,
                fill_color: ColorIndex::PAPER,
                font_size: 0.05,
            },
            x_axis: AxisStyle::tdr(0.9),
            y_axis: AxisStyle::tdr(1.25),
            z_axis: AxisStyle::tdr(1.0),
            strip_decimals: true,
            paper_size: (20.0, 20.0),
            hatches: HatchStyle { line_width: 5, spacing: 0.05 },
        }
    }

    /// Margins a newly created pad gets under this style.
    pub fn pad_margins(&self) -> Margins { self.pad.margins }
}

impl Default for TdrStyle {
    fn default() -> Self { Self::tdr() }
}

/// Holds the style that drawing code currently reads.
///
/// Replaces an implicit process-wide "current style": callers own the context
/// and pass it where a style is needed.
#[derive(Clone, Debug, Default)]
pub struct StyleContext {
    active: TdrStyle,
}

impl StyleContext {
    pub fn new(initial: TdrStyle) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> &TdrStyle { &self.active }

    /// Make `style` active until the returned guard is dropped, which restores
    /// the style that was active before. Guards nest.
    pub fn activate(&mut self, style: TdrStyle) -> StyleGuard<'_> {
        let previous = std::mem::replace(&mut self.active, style);
        trace!(active = %self.active.name, previous = %previous.name, "style activated");
        StyleGuard { ctx: self, previous: Some(previous) }
    }
}

/// Scope of an activated style; see [`StyleContext::activate`].
#[must_use = "the previous style is restored as soon as the guard is dropped"]
pub struct StyleGuard<'a> {
    ctx: &'a mut StyleContext,
    previous: Option<TdrStyle>,
}

impl std::ops::Deref for StyleGuard<'_> {
    type Target = StyleContext;
    fn deref(&self) -> &StyleContext { &*self.ctx }
}

impl std::ops::DerefMut for StyleGuard<'_> {
    fn deref_mut(&mut self) -> &mut StyleContext { &mut *self.ctx }
}

impl Drop for StyleGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            trace!(restored = %previous.name, "style restored");
            self.ctx.active = previous;
        }
    }
}
