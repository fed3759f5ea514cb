use crate::error::TspError;
use crate::instance::Instance;

/// Checks that `tour` is a closed cycle over all cities: `n + 1` entries,
/// first equal to last, and the first `n` a permutation of `1..=n`.
pub fn verify_tour(instance: &Instance, tour: &[usize]) -> Result<(), TspError> {
    let n = instance.dimension();
    if tour.len() != n + 1 {
        return Err(TspError::InvalidTour(format!(
            "tour has {} entries, expected {}",
            tour.len(),
            n + 1
        )));
    }
    if tour[0] != tour[n] {
        return Err(TspError::InvalidTour(format!(
            "tour is not closed: starts at {} but ends at {}",
            tour[0], tour[n]
        )));
    }
    let mut seen = vec![false; n + 1];
    for &city in &tour[..n] {
        if city < 1 || city > n {
            return Err(TspError::InvalidTour(format!(
                "city label {city} is outside 1..={n}"
            )));
        }
        if seen[city] {
            return Err(TspError::InvalidTour(format!(
                "city {city} appears more than once"
            )));
        }
        seen[city] = true;
    }
    Ok(())
}

/// Total length of a closed tour, re-derived from scratch by summing every
/// consecutive pair including the closing edge. Kept free of incremental
/// bookkeeping so solver-reported lengths can be checked against it.
pub fn tour_length(instance: &Instance, tour: &[usize]) -> Result<f64, TspError> {
    verify_tour(instance, tour)?;
    Ok(tour
        .windows(2)
        .map(|pair| instance.distance(pair[0], pair[1]))
        .sum())
}
