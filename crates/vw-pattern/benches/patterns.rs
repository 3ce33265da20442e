use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vw_pattern::{checkerboard, nested_rings, tile};

fn bench_checkerboard(c: &mut Criterion) {
    c.bench_function("checkerboard_2048_cell128", |b| {
        b.iter(|| {
            let out = checkerboard(black_box(2048usize), black_box(128usize), false).expect("valid");
            black_box(out);
        });
    });
}

fn bench_nested_rings(c: &mut Criterion) {
    c.bench_function("nested_rings_1024_n8", |b| {
        b.iter(|| {
            let out = nested_rings(black_box(1024usize), black_box(8)).expect("valid");
            black_box(out);
        });
    });
}

fn bench_tile(c: &mut Criterion) {
    let cell = checkerboard(64usize, 8usize, false).expect("valid");
    let view = cell.as_view();

    c.bench_function("tile_64_to_2048", |b| {
        b.iter(|| {
            let out = tile(black_box(&view), black_box(2048usize)).expect("valid");
            black_box(out);
        });
    });
}

criterion_group!(benches, bench_checkerboard, bench_nested_rings, bench_tile);
criterion_main!(benches);
