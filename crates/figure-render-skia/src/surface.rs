// File: crates/figure-render-skia/src/surface.rs
// Summary: SkiaSurface: figure-core drawing surface backed by a Skia CPU raster surface.

use anyhow::Result;
use figure_core::geometry::{frame_rect, ndc_to_px, text_size_px};
use figure_core::{ColorIndex, Margins, Surface, SurfaceError, TdrStyle, TextPlacement};
use skia_safe as skia;
use tracing::{debug, trace};

use crate::text::{aligned_origin, FontResolver};

pub struct SkiaSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
    margins: Margins,
    fonts: FontResolver,
    text_color: skia::Color,
    updates: usize,
}

impl SkiaSurface {
    /// Create a `width` x `height` pixel canvas whose frame is inset by `margins`.
    pub fn new(width: i32, height: i32, margins: Margins) -> Result<Self> {
        if !margins.is_valid() {
            anyhow::bail!("invalid canvas margins: {:?}", margins);
        }
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        surface.canvas().clear(skia::Color::WHITE);
        Ok(Self {
            surface,
            width,
            height,
            margins,
            fonts: FontResolver::new(),
            text_color: skia::Color::BLACK,
            updates: 0,
        })
    }

    /// Canvas sized and inset like a new pad under `style`, filled with its canvas colour.
    pub fn from_style(style: &TdrStyle) -> Result<Self> {
        let mut s = Self::new(style.canvas.default_width, style.canvas.default_height, style.pad_margins())?;
        s.clear(style.canvas.color);
        Ok(s)
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    /// Number of `update` requests received so far.
    pub fn update_count(&self) -> usize { self.updates }

    pub fn set_text_color(&mut self, color: ColorIndex) { self.text_color = to_skia(color); }

    pub fn clear(&mut self, color: ColorIndex) {
        self.surface.canvas().clear(to_skia(color));
    }

    /// Fill and stroke the frame rectangle using the frame settings of `style`.
    pub fn draw_frame(&mut self, style: &TdrStyle) {
        let r = frame_rect(&self.margins, self.width, self.height);
        let rect = skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
        let canvas = self.surface.canvas();

        // Fill style 0 is hollow.
        if style.frame.fill_style != 0 {
            let mut fill = skia::Paint::default();
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(to_skia(style.frame.fill_color));
            canvas.draw_rect(rect, &fill);
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(style.frame.line_width.max(1) as f32);
        stroke.set_color(to_skia(style.frame.line_color));
        canvas.draw_rect(rect, &stroke);
        debug!(left = r.left, top = r.top, width = r.width(), height = r.height(), "drew frame");
    }

    /// Encode the current canvas contents as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the canvas to `path` as PNG, creating parent directories.
    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Surface for SkiaSurface {
    fn margins(&self) -> Margins { self.margins }

    fn draw_text_ndc(&mut self, text: &TextPlacement) -> Result<(), SurfaceError> {
        if text.text.is_empty() {
            return Ok(());
        }
        let size_px = text_size_px(text.size, self.width, self.height);
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(SurfaceError::Text(format!("text size {} is not drawable", text.size)));
        }
        let font = self.fonts.font(text.font, size_px);
        let (advance, _bounds) = font.measure_str(&text.text, None);
        let (_spacing, metrics) = font.metrics();
        let anchor = ndc_to_px(text.x, text.y, self.width, self.height);
        let origin = aligned_origin(anchor, advance, metrics.ascent, metrics.descent, text.align);

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(self.text_color);
        self.surface.canvas().draw_str(&text.text, origin, &font, &paint);
        trace!(text = %text.text, px = origin.0, py = origin.1, size_px, "drew text");
        Ok(())
    }

    fn update(&mut self) -> Result<(), SurfaceError> {
        self.updates += 1;
        trace!(updates = self.updates, "surface update");
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(index: ColorIndex) -> skia::Color {
    match index.rgb() {
        Some((r, g, b)) => skia::Color::from_rgb(r, g, b),
        None => skia::Color::BLACK,
    }
}
