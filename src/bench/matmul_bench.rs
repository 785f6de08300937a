use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use matmul_lab::blocked::DEFAULT_TILE;
use matmul_lab::{Matrix, Variant};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for size in [64, 128, 256] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let a = Matrix::random(size, &mut rng);
        let b = Matrix::random(size, &mut rng);
        let mut out = Matrix::zeros(size);

        group.throughput(Throughput::Elements((size * size * size) as u64));
        for variant in Variant::ALL {
            group.bench_with_input(
                BenchmarkId::new(variant.label(), size),
                &size,
                |bench, _| {
                    bench.iter(|| {
                        variant.run(black_box(&a), black_box(&b), &mut out, DEFAULT_TILE);
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_tile_sizes(c: &mut Criterion) {
    let size = 256;
    let mut rng = StdRng::seed_from_u64(7);
    let a = Matrix::random(size, &mut rng);
    let b = Matrix::random(size, &mut rng);
    let mut out = Matrix::zeros(size);

    let mut group = c.benchmark_group("tile_size");
    group.sample_size(10);

    for tile in [8, 16, 32, 64, 128] {
        group.bench_with_input(BenchmarkId::new("matmul_IKJ tiling", tile), &tile, |bench, &tile| {
            bench.iter(|| Variant::TiledIkj.run(black_box(&a), black_box(&b), &mut out, tile))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_variants, bench_tile_sizes);
criterion_main!(benches);
