//! Benchmarks for the rotation engine and the layer by layer solver.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use layered_cube_solver::{
	locate_corner, locate_edge,
	scramble::seeded_rng,
	solve,
	stats::{solve_batch, BatchConfig},
	Color, Cube, SolverLimits, ALL_MOVES,
};

fn bench_apply_all_moves(c: &mut Criterion) {
	let cube = Cube::new();
	c.bench_function("apply_12_moves", |b| {
		b.iter(|| {
			let mut cube = black_box(cube);
			cube.apply_all(&ALL_MOVES);
			cube
		})
	});
}

fn bench_locate(c: &mut Criterion) {
	let (cube, _) = Cube::new_scrambled(40, &mut seeded_rng(1, 0));
	c.bench_function("locate_edge", |b| {
		b.iter(|| locate_edge(black_box(&cube), Color::B, Color::R))
	});
	c.bench_function("locate_corner", |b| {
		b.iter(|| locate_corner(black_box(&cube), Color::G, Color::Y, Color::R))
	});
}

/// Full solve of one seeded scramble.
fn bench_solve(c: &mut Criterion) {
	let (cube, _) = Cube::new_scrambled(40, &mut seeded_rng(2, 0));
	c.bench_function("solve_scrambled", |b| {
		b.iter_batched(|| cube, |mut cube| solve(&mut cube), BatchSize::SmallInput)
	});
}

fn bench_batch(c: &mut Criterion) {
	let mut group = c.benchmark_group("batch");
	group.sample_size(10);
	let config = BatchConfig::new(1000, 3);
	group.bench_function("solve_1000", |b| {
		b.iter(|| solve_batch(black_box(&config), &SolverLimits::default()))
	});
	group.finish();
}

criterion_group!(
	benches,
	bench_apply_all_moves,
	bench_locate,
	bench_solve,
	bench_batch,
);
criterion_main!(benches);
