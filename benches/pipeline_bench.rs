/// Benchmarks for the assessment pipeline over a synthetic bill of
/// materials.
use circmap::{assess, Component, ProductParams};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic_bom(size: usize) -> Vec<Component> {
    (0..size)
        .map(|index| {
            let phase = index as f64 / size as f64;
            Component {
                fr: 0.3 * phase,
                efp: 0.85 + 0.1 * phase,
                ecp: 0.8 + 0.15 * phase,
                cfp: 0.5 * phase,
                ccp: 0.4 * phase,
                ems: 0.6 + 0.3 * phase,
                erfp: 0.5 + 0.4 * phase,
                ..Component::new(
                    format!("c{}", index),
                    format!("Component {}", index),
                    0.05 + phase * 10.0,
                )
            }
        })
        .collect()
}

fn bench_assess(c: &mut Criterion) {
    let params = ProductParams {
        fu: 0.1,
        cu: 0.05,
        cr: 0.6,
        lifetime: 1.5,
        ..ProductParams::default()
    };

    let mut group = c.benchmark_group("assess");
    for size in [16, 256, 4096].iter() {
        let components = synthetic_bom(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| assess(black_box(&components), black_box(&params)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_assess);
criterion_main!(benches);
