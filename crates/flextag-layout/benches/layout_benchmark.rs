//! Layout pass benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flextag_core::{LineAlignment, Size};
use flextag_layout::{FlowLayout, LayoutConfig};

fn tag_sizes(count: usize) -> Vec<Size> {
    (0..count)
        .map(|i| Size::new(40.0 + (i * 37 % 90) as f64, 28.0 + (i % 3) as f64 * 6.0))
        .collect()
}

fn layout_small(c: &mut Criterion) {
    let layout = FlowLayout::new(LayoutConfig::default());
    let items = tag_sizes(20);
    c.bench_function("layout_20_tags", |b| {
        b.iter(|| layout.layout(black_box(&items), black_box(375.0)))
    });
}

fn layout_large_centered(c: &mut Criterion) {
    let layout = FlowLayout::new(LayoutConfig::default().with_alignment(LineAlignment::Center));
    let items = tag_sizes(300);
    c.bench_function("layout_300_tags_centered", |b| {
        b.iter(|| layout.layout(black_box(&items), black_box(768.0)))
    });
}

criterion_group!(benches, layout_small, layout_large_centered);
criterion_main!(benches);
