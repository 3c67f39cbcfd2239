//! Seeded graph generators for benchmarks and sample datasets

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::bail_invalid;
use crate::dataset::{EdgeSpec, TestCase};
use crate::error::Result;

/// Inclusive weight range for generated edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightRange {
    pub min: u32,
    pub max: u32,
}

impl WeightRange {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            bail_invalid!("weight range", format!("{min}..={max}"));
        }
        Ok(Self { min, max })
    }

    pub const fn unit() -> Self {
        Self { min: 1, max: 1 }
    }

    fn sample(&self, rng: &mut StdRng) -> i64 {
        i64::from(rng.gen_range(self.min..=self.max))
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self { min: 1, max: 10 }
    }
}

fn weighted(u: usize, v: usize, w: i64) -> EdgeSpec {
    EdgeSpec::Weighted([u as i64, v as i64, w])
}

/// Random connected undirected graph with `n` nodes and `m` edges.
///
/// A random spanning tree guarantees connectivity; the remaining edges
/// are distinct random pairs without self-loops.
pub fn random_connected(n: usize, m: usize, weights: WeightRange, seed: u64) -> Result<TestCase> {
    if n < 2 {
        bail_invalid!("node count", format!("{n} (need at least 2)"));
    }
    let max_edges = n * (n - 1) / 2;
    if m > max_edges {
        bail_invalid!(
            "edge count",
            format!("{m} (at most {max_edges} for {n} nodes)")
        );
    }
    if m < n - 1 {
        bail_invalid!(
            "edge count",
            format!("{m} (at least {} to stay connected)", n - 1)
        );
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(m);
    let mut edges = Vec::with_capacity(m);

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);
    for i in 1..n {
        let u = order[i];
        let v = order[rng.gen_range(0..i)];
        seen.insert((u.min(v), u.max(v)));
        edges.push(weighted(u, v, weights.sample(&mut rng)));
    }

    while edges.len() < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v || !seen.insert((u.min(v), u.max(v))) {
            continue;
        }
        edges.push(weighted(u, v, weights.sample(&mut rng)));
    }

    tracing::debug!(n, m, seed, "generated_random_graph");

    let mut case = TestCase::new(n);
    case.name = Some(format!("random-n{n}-m{m}-s{seed}"));
    case.edges = edges;
    Ok(case)
}

/// `height` x `width` grid; node `r * width + c`, query from corner to corner
pub fn grid(height: usize, width: usize, weights: WeightRange, seed: u64) -> Result<TestCase> {
    if height == 0 || width == 0 {
        bail_invalid!("grid size", format!("{height}x{width}"));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(2 * height * width);
    for r in 0..height {
        for c in 0..width {
            let id = r * width + c;
            if c + 1 < width {
                edges.push(weighted(id, id + 1, weights.sample(&mut rng)));
            }
            if r + 1 < height {
                edges.push(weighted(id, id + width, weights.sample(&mut rng)));
            }
        }
    }

    let mut case = TestCase::new(height * width);
    case.name = Some(format!("grid-{height}x{width}-s{seed}"));
    case.edges = edges;
    Ok(case)
}

/// Path graph 0 - 1 - ... - (n-1) with uniform weight
pub fn chain(n: usize, weight: u32) -> Result<TestCase> {
    if n == 0 {
        bail_invalid!("node count", 0);
    }
    let mut case = TestCase::new(n);
    case.name = Some(format!("chain-n{n}"));
    case.weight = i64::from(weight);
    case.edges = (1..n)
        .map(|i| EdgeSpec::Pair([i as i64 - 1, i as i64]))
        .collect();
    Ok(case)
}

/// Complete graph on `n` nodes with uniform weight
pub fn complete(n: usize, weight: u32) -> Result<TestCase> {
    if n == 0 {
        bail_invalid!("node count", 0);
    }
    let mut case = TestCase::new(n);
    case.name = Some(format!("complete-n{n}"));
    case.weight = i64::from(weight);
    case.edges = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| EdgeSpec::Pair([i as i64, j as i64])))
        .collect();
    Ok(case)
}
