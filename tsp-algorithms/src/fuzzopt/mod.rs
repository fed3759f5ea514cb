//! FuzzOpt iterated local search: start from a random tour, repeatedly
//! perturb the incumbent with a random interior double-swap, refine the
//! perturbed tour with 2-opt or 3-opt, and keep it only on strict
//! improvement. The generator is owned and seedable, so runs are
//! reproducible under test.

use anyhow::Result;
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};
use tsp_instance::{DistanceMatrix, Instance};

use crate::local_search::{closed_length, three_opt, two_opt, LocalSearch};

/// Knobs for a FuzzOpt run.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzOptConfig {
    /// Perturbation rounds; defaults to the city count.
    pub max_iterations: Option<usize>,
    /// Refinement pass applied after each perturbation.
    pub variant: LocalSearch,
    /// Seed for the owned generator; unseeded runs draw one from the clock.
    pub seed: Option<u64>,
}

pub fn fuzzopt(instance: &Instance, config: &FuzzOptConfig) -> Result<(f64, Vec<usize>)> {
    let n = instance.dimension();
    if n == 1 {
        return Ok((0.0, vec![1, 1]));
    }

    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut rng = SmallRng::seed_from_u64(seed);
    let matrix = DistanceMatrix::build(instance);

    // Identity-then-shuffle start, city 1 pinned at both ends.
    let mut best: Vec<usize> = (1..=n).collect();
    best[1..].shuffle(&mut rng);
    best.push(1);
    let mut best_length = closed_length(&matrix, &best);

    if n == 2 {
        // No two distinct interior positions to swap.
        return Ok((best_length, best));
    }

    let refine: fn(&DistanceMatrix, &[usize]) -> (f64, Vec<usize>) = match config.variant {
        LocalSearch::TwoOpt => two_opt,
        LocalSearch::ThreeOpt => three_opt,
    };
    let max_iterations = config.max_iterations.unwrap_or(n);
    debug!("fuzzopt: seed {seed}, {max_iterations} iterations, {:?}", config.variant);

    for iteration in 0..max_iterations {
        let mut candidate = best.clone();
        let u = rng.gen_range(1..n);
        let mut v = rng.gen_range(1..n);
        while v == u {
            v = rng.gen_range(1..n);
        }
        candidate.swap(u, v);

        let (length, candidate) = refine(&matrix, &candidate);
        if length < best_length {
            debug!("fuzzopt: iteration {iteration} improved {best_length} -> {length}");
            best = candidate;
            best_length = length;
        }
    }

    Ok((best_length, best))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}
