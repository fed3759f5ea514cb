use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tsp_algorithms::held_karp::{held_karp, held_karp_with_budget};
use tsp_instance::{tour_length, Instance, TspError};

const TOLERANCE: f64 = 1e-9;

fn random_instance(rng: &mut SmallRng, n: usize) -> Instance {
    let cities = (0..n)
        .map(|_| (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect();
    Instance::new(cities).unwrap()
}

/// Exhaustive optimum over all permutations of cities 2..=n.
fn brute_force(instance: &Instance) -> f64 {
    let n = instance.dimension();
    let mut rest: Vec<usize> = (2..=n).collect();
    let mut best = f64::INFINITY;
    permute(instance, &mut rest, 0, &mut best);
    best
}

fn permute(instance: &Instance, rest: &mut Vec<usize>, depth: usize, best: &mut f64) {
    if depth == rest.len() {
        let mut tour = Vec::with_capacity(rest.len() + 2);
        tour.push(1);
        tour.extend_from_slice(rest);
        tour.push(1);
        let length = tour_length(instance, &tour).unwrap();
        if length < *best {
            *best = length;
        }
        return;
    }
    for idx in depth..rest.len() {
        rest.swap(depth, idx);
        permute(instance, rest, depth + 1, best);
        rest.swap(depth, idx);
    }
}

#[test]
fn test_single_city() {
    let instance = Instance::new(vec![(7.0, -3.0)]).unwrap();
    let (length, tour) = held_karp(&instance).unwrap();
    assert_eq!(length, 0.0);
    assert_eq!(tour, vec![1, 1]);
}

#[test]
fn test_two_cities() {
    let instance = Instance::new(vec![(0.0, 0.0), (3.0, 4.0)]).unwrap();
    let (length, tour) = held_karp(&instance).unwrap();
    assert_eq!(length, 10.0);
    assert_eq!(tour, vec![1, 2, 1]);
}

#[test]
fn test_line_of_three() {
    // There and back along the x axis: exactly 4.0.
    let instance = Instance::new(vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap();
    let (length, tour) = held_karp(&instance).unwrap();
    assert_eq!(length, 4.0);
    assert_eq!(tour_length(&instance, &tour).unwrap(), length);
}

#[test]
fn test_unit_square_exact() {
    let instance =
        Instance::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
    let (length, tour) = held_karp(&instance).unwrap();
    assert_eq!(length, 4.0);
    assert_eq!(tour_length(&instance, &tour).unwrap(), 4.0);
}

#[test]
fn test_matches_brute_force_on_random_instances() {
    let mut rng = SmallRng::seed_from_u64(42);
    for n in 3..=9 {
        let instance = random_instance(&mut rng, n);
        let optimal = brute_force(&instance);
        let (length, tour) = held_karp(&instance).unwrap();
        assert!(
            (length - optimal).abs() < TOLERANCE,
            "n={n}: held-karp {length} vs brute force {optimal}"
        );
        // The reconstructed tour must re-measure to the reported cost.
        let measured = tour_length(&instance, &tour).unwrap();
        assert!(
            (measured - length).abs() < TOLERANCE,
            "n={n}: tour measures {measured}, cost says {length}"
        );
    }
}

#[test]
fn test_budget_rejected_before_allocation() {
    let mut rng = SmallRng::seed_from_u64(7);
    let instance = random_instance(&mut rng, 12);
    let err = held_karp_with_budget(&instance, 64).unwrap_err();
    match err.downcast_ref::<TspError>() {
        Some(TspError::CapacityExceeded { budget_bytes, .. }) => {
            assert_eq!(*budget_bytes, 64);
        }
        other => panic!("expected CapacityExceeded, got {other:?}"),
    }
}
