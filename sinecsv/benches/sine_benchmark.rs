use criterion::*;
use sinecsv::csv::write_csv;
use sinecsv::signal_generator::{angles, generate_sine_wave};
use sinecsv::{SineSamples, Variant};

fn sampling_benchmark(c: &mut Criterion) {
    let x = angles(Variant::FullPeriod);
    c.bench_function("generate_sine_wave", |b| {
        b.iter(|| generate_sine_wave(black_box(&x)))
    });
}

fn write_benchmark(c: &mut Criterion) {
    let samples = SineSamples::generate(Variant::FullPeriod);
    c.bench_function("write_csv", |b| {
        b.iter(|| write_csv(std::io::sink(), black_box(&samples)))
    });
}

criterion_group!(benches, sampling_benchmark, write_benchmark);

criterion_main!(benches);
