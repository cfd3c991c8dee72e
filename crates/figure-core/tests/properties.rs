// File: crates/figure-core/tests/properties.rs
// Purpose: Property checks: placements stay on the canvas and are deterministic.

use figure_core::{place_label, place_luminosity, Label, LuminosityLabel, Margins, Position};
use proptest::prelude::*;

fn margins() -> impl Strategy<Value = Margins> {
    (0.0..0.49f64, 0.0..0.49f64, 0.0..0.49f64, 0.0..0.49f64)
        .prop_map(|(t, r, b, l)| Margins::new(t, r, b, l))
}

fn position() -> impl Strategy<Value = Position> {
    prop::sample::select(Position::ALL.to_vec())
}

proptest! {
    #[test]
    fn anchors_within_unit_square(
        m in margins(),
        pos in position(),
        pad_left in 0.0..=1.0f64,
        pad_right in 0.0..=1.0f64,
        pad_top in prop::option::of(0.0..=1.0f64),
    ) {
        let mut label = Label::new().with_position(pos).with_sublabel("Preliminary");
        label.padding_left = pad_left;
        label.padding_right = pad_right;
        label.padding_top = pad_top;
        label.sublabel.padding_left = pad_left;
        label.sublabel.padding_top = 0.0;
        let layout = place_label(&label, &m);
        prop_assert!(layout.label.is_within_unit_square(), "{:?}", layout.label);
        prop_assert!(layout.sublabel.unwrap().is_within_unit_square());
        prop_assert!(place_luminosity(&LuminosityLabel::new("lumi"), &m).is_within_unit_square());
    }

    #[test]
    fn placement_is_deterministic(m in margins(), pos in position()) {
        let label = Label::new().with_position(pos).with_sublabel("Simulation");
        prop_assert_eq!(place_label(&label, &m), place_label(&label, &m));
    }
}
