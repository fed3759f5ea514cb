//! 2-opt and 3-opt neighborhood search over a closed tour and a precomputed
//! distance matrix. Both passes use the first-improvement strategy: apply
//! the first shortening move found in a sweep, restart the sweep, and stop
//! once a full sweep finds nothing. Position 0 and position n stay pinned to
//! the start city throughout.

use tsp_instance::DistanceMatrix;

/// Floating-point guard: a move must beat this margin to count as an
/// improvement, so ties cannot cycle forever.
const EPSILON: f64 = 1e-10;

/// Which refinement pass FuzzOpt runs after each perturbation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalSearch {
    #[default]
    TwoOpt,
    ThreeOpt,
}

/// Length of an already-closed tour (first element repeated at the end).
pub fn closed_length(matrix: &DistanceMatrix, tour: &[usize]) -> f64 {
    tour.windows(2).map(|pair| matrix.get(pair[0], pair[1])).sum()
}

/// First-improvement 2-opt. For positions `1 <= i < j <= n-1` the edges
/// `(tour[i-1], tour[i])` and `(tour[j], tour[j+1])` are replaced by
/// `(tour[i-1], tour[j])` and `(tour[i], tour[j+1])` via reversal of
/// `tour[i..=j]` whenever that shortens the tour. The result is never longer
/// than the input and is 2-opt-locally-optimal on return.
pub fn two_opt(matrix: &DistanceMatrix, tour: &[usize]) -> (f64, Vec<usize>) {
    let n = tour.len() - 1;
    let mut tour = tour.to_vec();
    if n >= 3 {
        'sweep: loop {
            for i in 1..n - 1 {
                for j in i + 1..n {
                    let removed = matrix.get(tour[i - 1], tour[i]) + matrix.get(tour[j], tour[j + 1]);
                    let added = matrix.get(tour[i - 1], tour[j]) + matrix.get(tour[i], tour[j + 1]);
                    if added + EPSILON < removed {
                        tour[i..=j].reverse();
                        continue 'sweep;
                    }
                }
            }
            break;
        }
    }
    (closed_length(matrix, &tour), tour)
}

/// First-improvement 3-opt. Removal positions `i < j < k` split the tour
/// into `A = t[..i]`, `B = t[i..j]`, `C = t[j..k]`, `D = t[k..]`, cutting
/// the edges `(a,b)`, `(c,d)`, `(e,f)` at the segment boundaries. Four
/// reconnections are tried per triple: the two single-segment reversals
/// (each equivalent to a 2-opt move) and the two pure 3-opt patterns
/// `A C B D` and `A B' C' D`.
///
/// Tours with fewer than six cities are returned unchanged; below that the
/// position ranges collapse and no 3-opt move is distinct from a 2-opt one.
pub fn three_opt(matrix: &DistanceMatrix, tour: &[usize]) -> (f64, Vec<usize>) {
    let n = tour.len() - 1;
    let mut tour = tour.to_vec();
    if n < 6 {
        return (closed_length(matrix, &tour), tour);
    }
    'sweep: loop {
        for i in 1..n - 4 {
            for j in i + 2..n - 2 {
                for k in j + 2..n {
                    if let Some(next) = reconnect(matrix, &tour, i, j, k) {
                        tour = next;
                        continue 'sweep;
                    }
                }
            }
        }
        break;
    }
    (closed_length(matrix, &tour), tour)
}

/// Returns the first reconnection of segments `B = t[i..j]` and
/// `C = t[j..k]` that shortens the tour, or `None` if none does. Every
/// pattern keeps `t[0]` inside `A` and `t[n]` inside `D`, so the closed
/// permutation invariant survives each accepted move.
fn reconnect(
    matrix: &DistanceMatrix,
    tour: &[usize],
    i: usize,
    j: usize,
    k: usize,
) -> Option<Vec<usize>> {
    let (a, b) = (tour[i - 1], tour[i]);
    let (c, d) = (tour[j - 1], tour[j]);
    let (e, f) = (tour[k - 1], tour[k]);
    let removed = matrix.get(a, b) + matrix.get(c, d) + matrix.get(e, f);

    // A B' C D: new edges (a,c), (b,d), (e,f)
    if matrix.get(a, c) + matrix.get(b, d) + matrix.get(e, f) + EPSILON < removed {
        let mut next = tour.to_vec();
        next[i..j].reverse();
        return Some(next);
    }

    // A B C' D: new edges (a,b), (c,e), (d,f)
    if matrix.get(a, b) + matrix.get(c, e) + matrix.get(d, f) + EPSILON < removed {
        let mut next = tour.to_vec();
        next[j..k].reverse();
        return Some(next);
    }

    // A C B D: new edges (a,d), (e,b), (c,f)
    if matrix.get(a, d) + matrix.get(e, b) + matrix.get(c, f) + EPSILON < removed {
        let mut next = Vec::with_capacity(tour.len());
        next.extend_from_slice(&tour[..i]);
        next.extend_from_slice(&tour[j..k]);
        next.extend_from_slice(&tour[i..j]);
        next.extend_from_slice(&tour[k..]);
        return Some(next);
    }

    // A B' C' D: new edges (a,c), (b,e), (d,f)
    if matrix.get(a, c) + matrix.get(b, e) + matrix.get(d, f) + EPSILON < removed {
        let mut next = tour.to_vec();
        next[i..j].reverse();
        next[j..k].reverse();
        return Some(next);
    }

    None
}
