use ndarray::Array2;

use crate::instance::Instance;

/// Precomputed symmetric distance matrix for O(1) lookups during local
/// search. Built fresh per solver invocation that needs it; solvers that
/// touch each distance once compute on demand instead.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    dist: Array2<f64>,
}

impl DistanceMatrix {
    pub fn build(instance: &Instance) -> Self {
        let n = instance.dimension();
        let mut dist = Array2::zeros((n, n));
        for i in 1..=n {
            for j in (i + 1)..=n {
                let d = instance.distance(i, j);
                dist[[i - 1, j - 1]] = d;
                dist[[j - 1, i - 1]] = d;
            }
        }
        Self { dist }
    }

    /// Number of cities covered by the matrix.
    pub fn len(&self) -> usize {
        self.dist.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.nrows() == 0
    }

    /// Distance between 1-based labels `i` and `j`; the offset to 0-based
    /// storage happens here and nowhere else.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.dist[[i - 1, j - 1]]
    }
}
