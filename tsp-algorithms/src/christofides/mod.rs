//! Christofides-style construction: minimum spanning tree, matching over
//! the odd-degree vertices, Eulerian circuit of the combined multigraph,
//! triangle-inequality shortcut to a Hamiltonian tour.

use anyhow::Result;
use log::debug;
use tsp_instance::{tour_length, Instance, TspError};

use crate::mst;

mod euler;
pub mod matching;

use euler::Multigraph;
pub use matching::MatchingStrategy;

/// Solves with the default greedy-nearest matching. That matching is not
/// minimum-weight, so the classical 1.5-approximation bound does not hold;
/// it is kept as the default because it is cheap and was the reference
/// behavior. See [`christofides_with_matching`] for the exact variant.
pub fn christofides(instance: &Instance) -> Result<(f64, Vec<usize>)> {
    christofides_with_matching(instance, MatchingStrategy::GreedyNearest)
}

pub fn christofides_with_matching(
    instance: &Instance,
    strategy: MatchingStrategy,
) -> Result<(f64, Vec<usize>)> {
    let n = instance.dimension();
    if n == 1 {
        return Ok((0.0, vec![1, 1]));
    }
    if n == 2 {
        return Ok((2.0 * instance.distance(1, 2), vec![1, 2, 1]));
    }

    let tree = mst::prim(instance);
    let odd = tree.odd_vertices();
    if odd.len() % 2 != 0 {
        // Impossible for a valid tree; report rather than tolerate.
        return Err(TspError::InvariantViolation(format!(
            "odd-degree set of a spanning tree has odd cardinality {}",
            odd.len()
        ))
        .into());
    }
    debug!(
        "christofides: {} odd-degree vertices, {strategy:?} matching",
        odd.len()
    );
    let pairs = matching::match_vertices(instance, &odd, strategy)?;

    let mut multigraph = Multigraph::new(n);
    for (u, v) in tree.edges() {
        multigraph.add_edge(u, v);
    }
    for (u, v) in pairs {
        multigraph.add_edge(u, v);
    }

    let circuit = multigraph.eulerian_circuit(1)?;

    // Shortcut: keep the first occurrence of each vertex, then close.
    let mut seen = vec![false; n + 1];
    let mut tour = Vec::with_capacity(n + 1);
    for v in circuit {
        if !seen[v] {
            seen[v] = true;
            tour.push(v);
        }
    }
    tour.push(1);

    let length = tour_length(instance, &tour)?;
    Ok((length, tour))
}
