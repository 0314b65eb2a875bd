use criterion::{black_box, BenchmarkId, Criterion};
use streamline::svg::SVG;
use streamline::{streamline_collection, streamline_plot, LineCollection, StreamlineStyle};

use crate::common::samples::TRAJECTORIES;

pub fn collection(c: &mut Criterion) {
    let style = StreamlineStyle::default();
    let mut group = c.benchmark_group("collection");
    for (x, y) in TRAJECTORIES.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(x.len()), &(x, y), |b, (x, y)| {
            b.iter(|| black_box(streamline_collection(x, y, &style)))
        });
    }
    group.finish();
}

pub fn svg(c: &mut Criterion) {
    let style = StreamlineStyle::default();
    let mut group = c.benchmark_group("svg");
    for (x, y) in TRAJECTORIES.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(x.len()), &(x, y), |b, (x, y)| {
            b.iter(|| {
                let mut svg = SVG::new((0.0, 0.0, 100.0, 100.0));
                let _ = streamline_plot(&mut svg, x, y, &style);
                black_box(svg.to_string())
            })
        });
    }
    group.finish();
}

pub fn record(c: &mut Criterion) {
    let style = StreamlineStyle::default();
    c.bench_function("record", |b| {
        let (x, y) = &TRAJECTORIES[2];
        b.iter(|| {
            let mut surface: Vec<LineCollection> = Vec::new();
            let _ = streamline_plot(&mut surface, x, y, &style);
            black_box(surface)
        })
    });
}

pub fn all(c: &mut Criterion) {
    collection(c);
    svg(c);
    record(c);
}
