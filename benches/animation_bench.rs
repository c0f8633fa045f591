use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use kinema::animation::effects::RotatingConfig;
use kinema::animation::{Animation, Timing};
use kinema::mobject::Mobject;
use kinema::util::easing::RateFunction;

fn line_mobject(count: usize) -> Mobject {
    Mobject::from_points(
        (0..count)
            .map(|i| Vec3::new(i as f32 * 0.1, (i % 7) as f32, 0.0))
            .collect(),
    )
}

fn rate_function_benchmark(c: &mut Criterion) {
    let f = RateFunction::Smooth;
    c.bench_function("smooth_rate_function", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn show_creation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("show_creation_update");

    for count in [10, 100, 1000].iter() {
        let mut anim =
            Animation::show_creation(line_mobject(*count), Timing::default())
                .unwrap();
        group.bench_function(format!("{}_points", count), |b| {
            b.iter(|| anim.state_at(black_box(0.5)))
        });
    }
    group.finish();
}

fn rotating_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotating_update");

    for count in [10, 100, 1000].iter() {
        let mut anim = Animation::rotating(
            line_mobject(*count),
            RotatingConfig::default(),
        )
        .unwrap();
        group.bench_function(format!("{}_points", count), |b| {
            b.iter(|| anim.state_at(black_box(0.25)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    rate_function_benchmark,
    show_creation_benchmark,
    rotating_benchmark
);
criterion_main!(benches);
