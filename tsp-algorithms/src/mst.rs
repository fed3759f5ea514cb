//! Prim's algorithm over the complete distance graph, plus the preorder
//! walk shared by the MST approximation and the Christofides construction.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tsp_instance::Instance;

/// Candidate edge in Prim's frontier. The ordering is inverted so the
/// max-heap pops the lightest edge first; equal weights break ties by
/// endpoint labels, keeping tree construction deterministic for a fixed
/// input.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FrontierEdge {
    weight: f64,
    from: usize,
    to: usize,
}

impl Eq for FrontierEdge {}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.to.cmp(&self.to))
            .then_with(|| other.from.cmp(&self.from))
    }
}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Spanning tree of the complete distance graph, adjacency-listed by
/// 1-based label (slot 0 unused). Holds exactly `n - 1` edges.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    adj: Vec<Vec<usize>>,
}

impl SpanningTree {
    /// Tree edges as `(u, v)` pairs with `u < v`.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for u in 1..self.adj.len() {
            for &v in &self.adj[u] {
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges
    }

    /// Vertices with an odd number of tree neighbors. For any tree over
    /// two or more vertices this set has even cardinality.
    pub fn odd_vertices(&self) -> Vec<usize> {
        (1..self.adj.len())
            .filter(|&v| self.adj[v].len() % 2 == 1)
            .collect()
    }
}

/// Builds the minimum spanning tree rooted at city 1: pop the lightest
/// frontier edge into an unvisited vertex, adopt it, then push edges from
/// the new vertex to every remaining unvisited vertex.
pub fn prim(instance: &Instance) -> SpanningTree {
    let n = instance.dimension();
    let mut adj = vec![Vec::new(); n + 1];
    let mut visited = vec![false; n + 1];
    visited[1] = true;
    let mut in_tree = 1;

    let mut heap = BinaryHeap::new();
    for v in 2..=n {
        heap.push(FrontierEdge {
            weight: instance.distance(1, v),
            from: 1,
            to: v,
        });
    }

    while let Some(edge) = heap.pop() {
        if in_tree == n {
            break;
        }
        if visited[edge.to] {
            continue;
        }
        visited[edge.to] = true;
        in_tree += 1;
        adj[edge.from].push(edge.to);
        adj[edge.to].push(edge.from);
        for w in 1..=n {
            if !visited[w] {
                heap.push(FrontierEdge {
                    weight: instance.distance(edge.to, w),
                    from: edge.to,
                    to: w,
                });
            }
        }
    }

    SpanningTree { adj }
}

/// Depth-first preorder from city 1, recording each vertex once. Uses an
/// explicit stack so deep trees cannot overflow the call stack; children
/// are pushed in reverse adjacency order to keep the recursive visitation
/// order.
pub fn preorder(tree: &SpanningTree) -> Vec<usize> {
    let n = tree.adj.len().saturating_sub(1);
    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n + 1];
    let mut stack = vec![1usize];
    while let Some(u) = stack.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        order.push(u);
        for &w in tree.adj[u].iter().rev() {
            if !visited[w] {
                stack.push(w);
            }
        }
    }
    order
}
