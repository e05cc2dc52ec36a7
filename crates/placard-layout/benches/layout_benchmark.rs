//! Layout search benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use placard_core::{
    Asset, AssetCatalog, DrawableHandle, FixedMeasurer, HeuristicMeasurer, LayoutConfig, Rect,
};
use placard_layout::compute_layout;
use placard_parser::tokenize;

const SHORT_CAPTION: &str = "Meet the crew behind the scenes!";

const LONG_CAPTION: &str = "Every frame of this sequence was painted by hand \
over three weeks. [[asset:brush]] The background plates came first, then the \
character passes, and finally the light. Thanks for watching all the way to \
the end. [[asset:star]] See you in the next one.";

fn catalog() -> AssetCatalog {
    let mut catalog = AssetCatalog::new();
    catalog.insert(Asset::new("brush", "brush", 128.0, 128.0, DrawableHandle(1)));
    catalog.insert(Asset::new("star", "star", 96.0, 96.0, DrawableHandle(2)));
    catalog
}

fn layout_short(c: &mut Criterion) {
    let assets = catalog();
    let tokens = tokenize(SHORT_CAPTION, &assets);
    let config = LayoutConfig::default();
    let safe = Rect::new(40.0, 40.0, 600.0, 900.0);
    let measurer = FixedMeasurer::default();
    c.bench_function("layout_short", |b| {
        b.iter(|| {
            compute_layout(
                black_box(&tokens),
                &assets,
                &config,
                safe,
                true,
                &measurer,
            )
        })
    });
}

fn layout_long_tight(c: &mut Criterion) {
    let assets = catalog();
    let tokens = tokenize(LONG_CAPTION, &assets);
    let config = LayoutConfig::default();
    // Tight region so the search walks several font sizes and counts.
    let safe = Rect::new(40.0, 40.0, 420.0, 320.0);
    let measurer = HeuristicMeasurer;
    c.bench_function("layout_long_tight", |b| {
        b.iter(|| {
            compute_layout(
                black_box(&tokens),
                &assets,
                &config,
                safe,
                true,
                &measurer,
            )
        })
    });
}

criterion_group!(benches, layout_short, layout_long_tight);
criterion_main!(benches);
