#[macro_use]
extern crate criterion;
extern crate cyclebrot;
extern crate num;
extern crate rand;

use criterion::{black_box, Criterion};
use num::Complex;

use cyclebrot::{classify, Palette, Pixel, PlaneMapper, Sampler};

fn classifier(c: &mut Criterion) {
    c.bench_function("classify fast escape", |b| {
        b.iter(|| classify(black_box(Complex::new(0.5, 0.5))))
    });
    c.bench_function("classify cardioid fixed point", |b| {
        b.iter(|| classify(black_box(Complex::new(-0.2, 0.0))))
    });
    c.bench_function("classify period-2 bulb", |b| {
        b.iter(|| classify(black_box(Complex::new(-1.0, 0.1))))
    });
    c.bench_function("classify near the boundary", |b| {
        b.iter(|| classify(black_box(Complex::new(-0.75, 0.015))))
    });
}

fn sampler(c: &mut Criterion) {
    let plane = PlaneMapper::new(
        1920,
        1080,
        Complex::new(-2.5, -1.0),
        Complex::new(1.0, 1.0),
    )
    .unwrap();
    let palette = Palette::new();

    c.bench_function("sample one anti-aliased pixel", move |b| {
        let sampler = Sampler::new(&plane, &palette, Some(30));
        let center = plane.pixel_to_point(&Pixel(700, 540));
        let mut rng = rand::thread_rng();
        b.iter(|| sampler.sample(black_box(center), &mut rng))
    });
}

criterion_group!(benches, classifier, sampler);
criterion_main!(benches);
