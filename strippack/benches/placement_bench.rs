use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use strippack::entities::{Item, Strip};
use strippack::placement::bl_pack;

criterion_main!(benches);
criterion_group!(benches, bl_pack_bench);

const N_ITEMS: [usize; 3] = [25, 50, 100];
const STRIP_WIDTH: i32 = 100;

fn random_items(n: usize, rng: &mut SmallRng) -> Vec<Item> {
    (0..n)
        .map(|id| Item::new(id, rng.random_range(1..=40), rng.random_range(1..=40)))
        .collect()
}

/// Benchmark how many complete bottom-left packings can be performed every second for different instance sizes.
fn bl_pack_bench(c: &mut Criterion) {
    let strip = Strip::new(STRIP_WIDTH).unwrap();
    let mut group = c.benchmark_group("bl_pack");
    for n in N_ITEMS {
        let mut rng = SmallRng::seed_from_u64(0);
        let items = random_items(n, &mut rng);

        group.throughput(criterion::Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| bl_pack(black_box(&items), strip).unwrap().fitness())
        });
    }
    group.finish();
}
