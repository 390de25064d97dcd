use criterion::{criterion_group, criterion_main, Criterion};
use point_index::naive;
use point_index::{Point, PointSet, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::{RTree, AABB};

const NUM_POINTS: usize = 10_000;
const NUM_QUERIES: usize = 100;
const NEIGHBORS_K: usize = 10;

fn generate_coords(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            (
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
            )
        })
        .collect()
}

fn generate_rects(n: usize, seed: u64) -> Vec<Rect<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let x = rng.gen_range(-1000.0..900.0);
            let y = rng.gen_range(-1000.0..900.0);
            let w = rng.gen_range(0.0..100.0);
            let h = rng.gen_range(0.0..100.0);
            Rect::new(Point::new(x, y), Point::new(x + w, y + h))
        })
        .collect()
}

fn construct_point_set(coords: &[(f64, f64)]) -> PointSet<f64> {
    let mut set = PointSet::new();
    for &(x, y) in coords {
        set.put(Point::new(x, y));
    }
    // Touch the set so the lazy build is not deferred into the query loops.
    set.len();
    set
}

fn construct_naive(coords: &[(f64, f64)]) -> naive::PointSet<f64> {
    let mut set = naive::PointSet::new();
    for &(x, y) in coords {
        set.put(Point::new(x, y));
    }
    set
}

fn construct_rstar(coords: &[(f64, f64)]) -> RTree<(f64, f64)> {
    RTree::bulk_load(coords.to_vec())
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let coords = generate_coords(NUM_POINTS, 42);
    let rects = generate_rects(NUM_QUERIES, 43);
    let queries = generate_coords(NUM_QUERIES, 44);

    c.bench_function("construction (kdtree)", |b| {
        b.iter(|| construct_point_set(&coords))
    });

    c.bench_function("construction (rstar bulk)", |b| {
        b.iter(|| construct_rstar(&coords))
    });

    let set = construct_point_set(&coords);
    let oracle = construct_naive(&coords);
    let rstar_tree = construct_rstar(&coords);

    c.bench_function("range (kdtree)", |b| {
        b.iter(|| {
            let mut found = 0;
            for rect in &rects {
                found += set.range(rect).len();
            }
            found
        })
    });

    c.bench_function("range (naive)", |b| {
        b.iter(|| {
            let mut found = 0;
            for rect in &rects {
                found += oracle.range(rect).len();
            }
            found
        })
    });

    c.bench_function("range (rstar)", |b| {
        b.iter(|| {
            let mut found = 0;
            for rect in &rects {
                let aabb =
                    AABB::from_corners((rect.min_x(), rect.min_y()), (rect.max_x(), rect.max_y()));
                found += rstar_tree.locate_in_envelope(&aabb).count();
            }
            found
        })
    });

    c.bench_function("neighbors (kdtree)", |b| {
        b.iter(|| {
            let mut found = 0;
            for &(x, y) in &queries {
                found += set.neighbors(&Point::new(x, y), NEIGHBORS_K).len();
            }
            found
        })
    });

    c.bench_function("neighbors (naive)", |b| {
        b.iter(|| {
            let mut found = 0;
            for &(x, y) in &queries {
                found += oracle.neighbors(&Point::new(x, y), NEIGHBORS_K).len();
            }
            found
        })
    });

    c.bench_function("neighbors (rstar)", |b| {
        b.iter(|| {
            let mut found = 0;
            for &query in &queries {
                found += rstar_tree
                    .nearest_neighbor_iter(&query)
                    .take(NEIGHBORS_K)
                    .count();
            }
            found
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
