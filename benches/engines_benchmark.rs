use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use streamsum::Algorithm;

pub fn criterion_benchmark(c: &mut Criterion) {
    let input = vec![0xA5u8; 64 * 1024];

    let mut group = c.benchmark_group("engines");
    group.throughput(Throughput::Bytes(input.len() as u64));
    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| {
                let mut engine = algorithm.engine();
                engine.update(black_box(&input)).unwrap();
                engine.finalize_hex().unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
