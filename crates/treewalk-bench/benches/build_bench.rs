//! Benchmarks for tree construction

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use treewalk_core::{ArenaTree, Depth, Tree};

fn bench_build_boxed(c: &mut Criterion) {
    let depth = Depth::of(12);

    c.bench_function("build_boxed_depth12", |b| {
        b.iter(|| black_box(Tree::build(black_box(depth))))
    });
}

fn bench_build_arena(c: &mut Criterion) {
    let depth = Depth::of(12);

    c.bench_function("build_arena_depth12", |b| {
        b.iter(|| black_box(ArenaTree::build(black_box(depth)).unwrap()))
    });
}

fn bench_intern_boxed(c: &mut Criterion) {
    let tree = Tree::build(Depth::of(12));

    c.bench_function("intern_boxed_depth12", |b| {
        b.iter(|| black_box(ArenaTree::from_tree(black_box(&tree)).unwrap()))
    });
}

criterion_group!(benches, bench_build_boxed, bench_build_arena, bench_intern_boxed);
criterion_main!(benches);
