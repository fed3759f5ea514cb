//! MST preorder-walk approximation: build a minimum spanning tree, walk it
//! depth-first, close the cycle at the root. On metric instances the result
//! is at most twice the optimal tour length.

use anyhow::Result;
use tsp_instance::{tour_length, Instance};

use crate::mst;

pub fn approx_tsp_tour(instance: &Instance) -> Result<(f64, Vec<usize>)> {
    let n = instance.dimension();
    if n == 1 {
        return Ok((0.0, vec![1, 1]));
    }

    let tree = mst::prim(instance);
    let mut tour = mst::preorder(&tree);
    tour.push(1);

    let length = tour_length(instance, &tour)?;
    Ok((length, tour))
}
