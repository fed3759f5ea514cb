//! Held–Karp exact dynamic program over (visited-subset, endpoint) states,
//! O(n²·2ⁿ) time and space. The table footprint is checked against a byte
//! budget before allocation, and the optimal tour is reconstructed by
//! backtracking the retained argmin predecessors.

use anyhow::Result;
use log::debug;
use tsp_instance::{Instance, TspError};

/// Default ceiling on the combined cost + parent table footprint: 1 GiB,
/// which admits instances up to roughly n = 22.
pub const DEFAULT_TABLE_BUDGET: u64 = 1 << 30;

const COST_ENTRY_BYTES: u128 = std::mem::size_of::<f64>() as u128;
const PARENT_ENTRY_BYTES: u128 = std::mem::size_of::<u32>() as u128;

pub fn held_karp(instance: &Instance) -> Result<(f64, Vec<usize>)> {
    held_karp_with_budget(instance, DEFAULT_TABLE_BUDGET)
}

/// Exact solve with an explicit memory budget in bytes.
///
/// States are (subset of `{2..n}`, endpoint) pairs stored flat at
/// `mask * (n - 1) + (endpoint - 2)`, with bit `j - 2` of `mask` marking
/// city `j`. Masks are filled in increasing numeric order, so every proper
/// submask is ready before its supermasks are visited.
pub fn held_karp_with_budget(instance: &Instance, budget_bytes: u64) -> Result<(f64, Vec<usize>)> {
    let n = instance.dimension();
    if n == 1 {
        return Ok((0.0, vec![1, 1]));
    }
    if n == 2 {
        let d = instance.distance(1, 2);
        return Ok((2.0 * d, vec![1, 2, 1]));
    }

    let m = n - 1; // cities 2..=n, one bit each
    // Beyond 63 subset bits the table cannot fit any u64 budget; saturate
    // instead of overflowing the shift.
    let (states, required_bytes) = if m >= 64 {
        (u128::MAX, u128::MAX)
    } else {
        let states = (1u128 << m) * m as u128;
        (states, states * (COST_ENTRY_BYTES + PARENT_ENTRY_BYTES))
    };
    if required_bytes > u128::from(budget_bytes) {
        return Err(TspError::CapacityExceeded {
            states,
            required_bytes,
            budget_bytes,
        }
        .into());
    }
    debug!("held-karp: {n} cities, {states} states, {required_bytes} table bytes");

    let full = (1usize << m) - 1;
    let mut cost = vec![f64::INFINITY; (full + 1) * m];
    let mut parent = vec![u32::MAX; (full + 1) * m];

    // Base case: start at city 1, go straight to j.
    for j in 0..m {
        cost[(1 << j) * m + j] = instance.distance(1, j + 2);
    }

    for mask in 1..=full {
        if mask.count_ones() < 2 {
            continue;
        }
        for j in 0..m {
            if mask & (1 << j) == 0 {
                continue;
            }
            let prev = mask ^ (1 << j);
            let mut best = f64::INFINITY;
            let mut best_k = u32::MAX;
            for k in 0..m {
                if prev & (1 << k) == 0 {
                    continue;
                }
                let candidate = cost[prev * m + k] + instance.distance(k + 2, j + 2);
                if candidate < best {
                    best = candidate;
                    best_k = k as u32;
                }
            }
            cost[mask * m + j] = best;
            parent[mask * m + j] = best_k;
        }
    }

    // Close the cycle back to city 1.
    let mut best_cost = f64::INFINITY;
    let mut best_end = 0usize;
    for j in 0..m {
        let candidate = cost[full * m + j] + instance.distance(j + 2, 1);
        if candidate < best_cost {
            best_cost = candidate;
            best_end = j;
        }
    }

    // Backtrack the argmin chain from (full, best_end) down to the base
    // case, then flip it into visiting order.
    let mut suffix = Vec::with_capacity(m);
    let mut mask = full;
    let mut j = best_end;
    while mask != 0 {
        suffix.push(j + 2);
        let k = parent[mask * m + j];
        mask ^= 1 << j;
        if k == u32::MAX {
            break;
        }
        j = k as usize;
    }
    suffix.reverse();

    let mut tour = Vec::with_capacity(n + 1);
    tour.push(1);
    tour.extend(suffix);
    tour.push(1);
    Ok((best_cost, tour))
}
