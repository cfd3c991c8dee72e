// File: crates/figure-render-skia/tests/smoke.rs
// Purpose: End-to-end render of a styled figure with labels to PNG.

use figure_core::{draw_labels, Label, Margins, Position, Surface, TdrStyle};
use figure_render_skia::SkiaSurface;

#[test]
fn render_labels_png() {
    let style = TdrStyle::tdr();
    let mut surface = SkiaSurface::from_style(&style).expect("surface");
    assert_eq!((surface.width(), surface.height()), (600, 600));
    assert_eq!(surface.margins(), style.pad_margins());

    surface.draw_frame(&style);
    draw_labels(&mut surface, "35.9 fb^{-1} (13 TeV)", "left", "Preliminary").expect("draw labels");
    assert_eq!(surface.update_count(), 1);

    let out = std::path::PathBuf::from("target/test_out/labels_left.png");
    surface.save_png(&out).expect("save png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = surface.encode_png().expect("encode");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn every_position_renders() {
    for position in Position::ALL {
        let mut surface = SkiaSurface::new(800, 600, Margins::default()).expect("surface");
        let layout = Label::new().with_position(position).with_sublabel("Simulation").draw(&mut surface).expect("draw");
        assert!(layout.sublabel.is_some());
    }
}

#[test]
fn rejects_invalid_margins() {
    assert!(SkiaSurface::new(600, 600, Margins::new(0.6, 0.1, 0.5, 0.1)).is_err());
}
