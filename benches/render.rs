#[macro_use]
extern crate criterion;
extern crate mandelbrot;
extern crate num;

use criterion::Criterion;
use mandelbrot::{colorize, evaluate, render, render_threaded, Viewport};
use num::Complex;

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate inside", |b| {
        b.iter(|| evaluate(Complex::new(-0.1, 0.1)))
    });
    c.bench_function("evaluate boundary", |b| {
        b.iter(|| evaluate(Complex::new(-0.747162, -0.087584)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut viewport = Viewport::new(160);
    viewport.set_center(-0.747162, -0.087584);
    viewport.scale(100.0);

    c.bench_function("render 160", move |b| {
        b.iter(|| render(&viewport, 160))
    });

    let threaded = Viewport::new(160);
    c.bench_function("render 160 on 4 threads", move |b| {
        b.iter(|| render_threaded(&threaded, 160, 4))
    });

    let grid = render(&Viewport::new(160), 160);
    c.bench_function("colorize 160", move |b| b.iter(|| colorize(&grid, true)));
}

criterion_group!(benches, bench_evaluate, bench_render);
criterion_main!(benches);
