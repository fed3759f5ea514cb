//! Exact and approximate solvers for the symmetric Euclidean TSP.
//!
//! Each solver consumes a [`tsp_instance::Instance`] and returns a
//! `(length, tour)` pair where the tour is a closed 1-based cycle starting
//! and ending at city 1. Callers pick exactly one [`Algorithm`] per run;
//! nothing is shared between invocations.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use tsp_instance::Instance;

pub mod approx_mst;
pub mod christofides;
pub mod fuzzopt;
pub mod held_karp;
pub mod local_search;
pub mod mst;

pub use christofides::MatchingStrategy;
pub use fuzzopt::FuzzOptConfig;
pub use local_search::LocalSearch;

/// The five solver strategies selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    HeldKarp,
    Christofides,
    ApproxMst,
    FuzzOptTwoOpt,
    FuzzOptThreeOpt,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::HeldKarp,
        Algorithm::Christofides,
        Algorithm::ApproxMst,
        Algorithm::FuzzOptTwoOpt,
        Algorithm::FuzzOptThreeOpt,
    ];

    /// Stable selector id, also accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::HeldKarp => "held-karp",
            Algorithm::Christofides => "christofides",
            Algorithm::ApproxMst => "approx-mst",
            Algorithm::FuzzOptTwoOpt => "fuzzopt-2opt",
            Algorithm::FuzzOptThreeOpt => "fuzzopt-3opt",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "held-karp" => Ok(Algorithm::HeldKarp),
            "christofides" => Ok(Algorithm::Christofides),
            "approx-mst" => Ok(Algorithm::ApproxMst),
            "fuzzopt-2opt" => Ok(Algorithm::FuzzOptTwoOpt),
            "fuzzopt-3opt" => Ok(Algorithm::FuzzOptThreeOpt),
            _ => Err(anyhow!("unknown algorithm {s:?}")),
        }
    }
}

/// Outcome of a single solver run, ready for display by the caller.
#[derive(Debug, Clone)]
pub struct Summary {
    pub method: &'static str,
    pub length: f64,
    pub tour: Vec<usize>,
}

/// Per-run knobs. Only the FuzzOpt variants read them today.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    /// FuzzOpt perturbation rounds; defaults to the city count.
    pub max_iterations: Option<usize>,
    /// Seed for FuzzOpt's generator; unseeded runs draw one from the clock.
    pub seed: Option<u64>,
}

/// Runs the selected solver on `instance` and returns its summary.
pub fn solve(algorithm: Algorithm, instance: &Instance, options: &SolveOptions) -> Result<Summary> {
    let (length, tour) = match algorithm {
        Algorithm::HeldKarp => held_karp::held_karp(instance)?,
        Algorithm::Christofides => christofides::christofides(instance)?,
        Algorithm::ApproxMst => approx_mst::approx_tsp_tour(instance)?,
        Algorithm::FuzzOptTwoOpt => fuzzopt::fuzzopt(
            instance,
            &FuzzOptConfig {
                max_iterations: options.max_iterations,
                variant: LocalSearch::TwoOpt,
                seed: options.seed,
            },
        )?,
        Algorithm::FuzzOptThreeOpt => fuzzopt::fuzzopt(
            instance,
            &FuzzOptConfig {
                max_iterations: options.max_iterations,
                variant: LocalSearch::ThreeOpt,
                seed: options.seed,
            },
        )?,
    };
    Ok(Summary {
        method: algorithm.name(),
        length,
        tour,
    })
}
