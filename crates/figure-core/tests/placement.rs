// File: crates/figure-core/tests/placement.rs
// Purpose: Validate label and sublabel coordinates for every placement mode against worked values.

use figure_core::{place_label, place_luminosity, Label, LuminosityLabel, Margins, Position, TextAlign};
use float_cmp::approx_eq;

const TDR: Margins = Margins::new(0.05, 0.02, 0.13, 0.16);

fn close(a: f64, b: f64) -> bool {
    approx_eq!(f64, a, b, epsilon = 1e-9)
}

#[test]
fn left_inside_frame() {
    let layout = place_label(&Label::new(), &TDR);
    let l = &layout.label;
    assert!(close(l.x, 0.1969), "x = {}", l.x);
    assert!(close(l.y, 0.9213), "y = {}", l.y);
    assert_eq!(l.align, TextAlign::LEFT_TOP);
    assert!(close(l.size, 0.0375));
    assert_eq!(l.text, "CMS");
    assert!(layout.sublabel.is_none(), "empty sublabel text draws nothing");
}

#[test]
fn center_and_right_inside_frame() {
    let center = place_label(&Label::new().with_position(Position::Center), &TDR).label;
    assert!(close(center.x, 0.57));
    assert!(close(center.y, 0.9213));
    assert_eq!(center.align, TextAlign::CENTER_TOP);

    let right = place_label(&Label::new().with_position(Position::Right), &TDR).label;
    assert!(close(right.x, 0.9431));
    assert!(close(right.y, 0.9213));
    assert_eq!(right.align, TextAlign::RIGHT_TOP);
}

#[test]
fn outside_frame_uses_top_margin_padding() {
    let l = place_label(&Label::new().with_position(Position::Outside), &TDR).label;
    assert!(close(l.x, 0.16));
    assert!(close(l.y, 0.96));
    assert_eq!(l.align, TextAlign::LEFT_BOTTOM);
}

#[test]
fn explicit_padding_top_overrides_mode_default() {
    let mut label = Label::new().with_position(Position::Outside);
    label.padding_top = Some(0.5);
    assert!(close(place_label(&label, &TDR).label.y, 0.975));

    label.position = Position::Left;
    label.padding_top = Some(0.1);
    assert!(close(place_label(&label, &TDR).label.y, 0.95 - 0.082));
}

#[test]
fn sublabel_below_label_inside_frame() {
    let layout = place_label(&Label::new().with_sublabel("Preliminary"), &TDR);
    let sub = layout.sublabel.expect("sublabel placed");
    assert!(close(sub.x, 0.1969));
    assert!(close(sub.y, 0.8763), "y = {}", sub.y);
    assert!(close(sub.size, 0.76 * 0.0375));
    assert_eq!(sub.align, layout.label.align);
    assert_eq!(sub.text, "Preliminary");
    assert_eq!(sub.font.0, 52);
}

#[test]
fn sublabel_beside_label_outside_frame() {
    let layout = place_label(&Label::new().with_position(Position::Outside).with_sublabel("Simulation"), &TDR);
    let sub = layout.sublabel.expect("sublabel placed");
    assert!(close(sub.x, 0.16 + 0.12 * 0.82));
    assert!(close(sub.y, layout.label.y));
    assert_eq!(sub.align, TextAlign::LEFT_BOTTOM);
}

#[test]
fn sublabel_scale_follows_main_label_size() {
    let mut label = Label::new().with_sublabel("Unpublished");
    label.scale = 1.0;
    label.sublabel.scale = 0.5;
    let layout = place_label(&label, &TDR);
    assert!(close(layout.label.size, 0.05));
    assert!(close(layout.sublabel.unwrap().size, 0.025));
}

#[test]
fn luminosity_top_right_corner() {
    let l = place_luminosity(&LuminosityLabel::new("35.9 fb^{-1} (13 TeV)"), &TDR);
    assert!(close(l.x, 0.98));
    assert!(close(l.y, 0.96));
    assert!(close(l.size, 0.03));
    assert_eq!(l.align, TextAlign::RIGHT_BOTTOM);
    assert_eq!(l.font.0, 42);
}

#[test]
fn luminosity_alignment_override() {
    let mut lumi = LuminosityLabel::new("13 TeV");
    lumi.align = TextAlign::try_from(("right", "top")).unwrap();
    assert_eq!(place_luminosity(&lumi, &TDR).align.code(), 33);
}
