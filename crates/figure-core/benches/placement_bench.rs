use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figure_core::{place_label, place_luminosity, Label, LuminosityLabel, Margins, Position};

fn bench_placement(c: &mut Criterion) {
    let margins = Margins::default();
    let mut group = c.benchmark_group("place_label");
    for pos in Position::ALL {
        let label = Label::new().with_position(pos).with_sublabel("Preliminary");
        group.bench_function(pos.name(), |b| b.iter(|| black_box(place_label(black_box(&label), &margins))));
    }
    group.finish();

    let lumi = LuminosityLabel::new("35.9 fb^{-1} (13 TeV)");
    c.bench_function("place_luminosity", |b| b.iter(|| black_box(place_luminosity(black_box(&lumi), &margins))));
}

criterion_group!(benches, bench_placement);
criterion_main!(benches);
