use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::Vec2;
use text_layout::{FixedPitchShaper, GlyphLayout, RawTextMetrics};

const SMALL_LINES: usize = 8;
const LARGE_LINES: usize = 2_000;

fn make_paragraphs(lines: usize) -> String {
    let mut text = String::with_capacity(lines * 32);
    for i in 0..lines {
        text.push_str("the quick brown fox jumps over ");
        if i % 7 == 0 {
            text.push_str("lazy dogs");
        }
        text.push('\n');
    }
    text
}

fn shape(lines: usize) -> RawTextMetrics {
    let shaper = FixedPitchShaper {
        wrap_columns: Some(40),
        ..FixedPitchShaper::default()
    };
    shaper.shape(&make_paragraphs(lines))
}

fn bench_build_small(c: &mut Criterion) {
    let raw = shape(SMALL_LINES);
    c.bench_function("bench_build_small", |b| {
        b.iter(|| {
            let layout = GlyphLayout::multi_line(black_box(&raw));
            black_box(layout.map(|l| l.anchor_count()));
        });
    });
}

fn bench_build_large(c: &mut Criterion) {
    let raw = shape(LARGE_LINES);
    c.bench_function("bench_build_large", |b| {
        b.iter(|| {
            let layout = GlyphLayout::multi_line(black_box(&raw));
            black_box(layout.map(|l| l.anchor_count()));
        });
    });
}

fn bench_caret_lookup(c: &mut Criterion) {
    let raw = shape(LARGE_LINES);
    let layout = GlyphLayout::multi_line(&raw).expect("fixture metrics should build");
    let points: Vec<Vec2> = (0..layout.anchor_count())
        .step_by(17)
        .map(|i| layout.anchor(i))
        .collect();
    c.bench_function("bench_caret_lookup", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for point in &points {
                acc = acc.wrapping_add(layout.caret_at_point(black_box(*point)));
            }
            black_box(acc);
        });
    });
}

fn bench_selection_rects(c: &mut Criterion) {
    let raw = shape(LARGE_LINES);
    let layout = GlyphLayout::multi_line(&raw).expect("fixture metrics should build");
    let end = layout.char_count();
    c.bench_function("bench_selection_rects", |b| {
        b.iter(|| {
            let rects = layout.selection_rects(black_box(0), black_box(end));
            black_box(rects.len());
        });
    });
}

criterion_group!(
    benches,
    bench_build_small,
    bench_build_large,
    bench_caret_lookup,
    bench_selection_rects
);
criterion_main!(benches);
