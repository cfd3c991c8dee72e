// File: crates/demo/src/main.rs
// Summary: Demo renders a TDR-style frame with experiment and luminosity labels for each position.
// Usage: figure-demo [config.json]   (RUST_LOG=debug shows placement details)

use anyhow::{Context, Result};
use figure_core::{Label, LuminosityLabel, Position, StyleContext, Surface, TdrStyle};
use figure_render_skia::SkiaSurface;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Optional JSON overrides; every field falls back to the built-in defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct FigureConfig {
    label: Label,
    luminosity: LuminosityLabel,
    style: TdrStyle,
    out_dir: PathBuf,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            label: Label::new().with_sublabel("Preliminary"),
            luminosity: LuminosityLabel::new("35.9 fb^{-1} (13 TeV)"),
            style: TdrStyle::tdr(),
            out_dir: PathBuf::from("target/out"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(raw) => load_config(Path::new(&raw))?,
        None => FigureConfig::default(),
    };

    let mut styles = StyleContext::default();
    let scope = styles.activate(config.style.clone());
    info!(style = %scope.active().name, "style active");

    for position in Position::ALL {
        let out = render(scope.active(), &config, position)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<FigureConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

fn render(style: &TdrStyle, config: &FigureConfig, position: Position) -> Result<PathBuf> {
    let mut surface = SkiaSurface::from_style(style)?;
    surface.draw_frame(style);

    let label = config.label.clone().with_position(position);
    label.draw(&mut surface).with_context(|| format!("drawing {position} label"))?;
    config.luminosity.draw(&mut surface).context("drawing luminosity label")?;
    surface.update()?;

    let out = config.out_dir.join(format!("figure_{position}.png"));
    surface.save_png(&out).with_context(|| format!("writing {}", out.display()))?;
    Ok(out)
}
