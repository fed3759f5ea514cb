use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tsp_algorithms::approx_mst::approx_tsp_tour;
use tsp_algorithms::christofides::{christofides, christofides_with_matching};
use tsp_algorithms::mst;
use tsp_algorithms::christofides::matching::{match_vertices, MatchingStrategy};
use tsp_instance::{tour_length, verify_tour, Instance};

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
fn test_mst_has_n_minus_one_edges_and_even_odd_set() {
    let mut rng = SmallRng::seed_from_u64(11);
    for n in [2, 3, 5, 8, 13, 21] {
        let instance = random_instance(&mut rng, n);
        let tree = mst::prim(&instance);
        assert_eq!(tree.edges().len(), n - 1, "n={n}");
        assert_eq!(tree.odd_vertices().len() % 2, 0, "n={n}");
        // Preorder visits every vertex exactly once.
        let mut order = mst::preorder(&tree);
        order.sort_unstable();
        assert_eq!(order, (1..=n).collect::<Vec<_>>(), "n={n}");
    }
}

#[test]
fn test_approx_mst_unit_square() {
    let instance =
        Instance::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
    let (length, tour) = approx_tsp_tour(&instance).unwrap();
    verify_tour(&instance, &tour).unwrap();
    assert_eq!(length, 4.0);
}

#[test]
fn test_approx_mst_single_city() {
    let instance = Instance::new(vec![(1.0, 2.0)]).unwrap();
    assert_eq!(approx_tsp_tour(&instance).unwrap(), (0.0, vec![1, 1]));
}

#[test]
fn test_approx_mst_within_twice_optimal() {
    let mut rng = SmallRng::seed_from_u64(99);
    for n in 4..=8 {
        let instance = random_instance(&mut rng, n);
        let optimal = brute_force(&instance);
        let (length, tour) = approx_tsp_tour(&instance).unwrap();
        assert!(
            (tour_length(&instance, &tour).unwrap() - length).abs() < TOLERANCE,
            "n={n}"
        );
        assert!(
            length <= 2.0 * optimal + TOLERANCE,
            "n={n}: approx {length} exceeds twice the optimum {optimal}"
        );
    }
}

#[test]
fn test_christofides_unit_square() {
    let instance =
        Instance::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
    let (length, tour) = christofides(&instance).unwrap();
    verify_tour(&instance, &tour).unwrap();
    assert_eq!(length, 4.0);
}

#[test]
fn test_christofides_degenerate_sizes() {
    let single = Instance::new(vec![(0.0, 0.0)]).unwrap();
    assert_eq!(christofides(&single).unwrap(), (0.0, vec![1, 1]));

    let pair = Instance::new(vec![(0.0, 0.0), (3.0, 4.0)]).unwrap();
    let (length, tour) = christofides(&pair).unwrap();
    assert_eq!(length, 10.0);
    assert_eq!(tour, vec![1, 2, 1]);
}

#[test]
fn test_christofides_valid_on_random_instances() {
    let mut rng = SmallRng::seed_from_u64(5);
    for n in [3, 4, 7, 12, 25, 40] {
        let instance = random_instance(&mut rng, n);
        for strategy in [MatchingStrategy::GreedyNearest, MatchingStrategy::MinimumWeight] {
            let (length, tour) = christofides_with_matching(&instance, strategy).unwrap();
            verify_tour(&instance, &tour).unwrap();
            let measured = tour_length(&instance, &tour).unwrap();
            assert!(
                (measured - length).abs() < TOLERANCE,
                "n={n} {strategy:?}: reported {length}, measured {measured}"
            );
        }
    }
}

#[test]
fn test_matching_strategies_are_perfect_and_ordered() {
    let mut rng = SmallRng::seed_from_u64(23);
    for n in [6, 10, 16] {
        let instance = random_instance(&mut rng, n);
        let tree = mst::prim(&instance);
        let odd = tree.odd_vertices();

        let weight = |pairs: &[(usize, usize)]| -> f64 {
            pairs.iter().map(|&(u, v)| instance.distance(u, v)).sum()
        };
        let check_perfect = |pairs: &[(usize, usize)]| {
            let mut covered: Vec<usize> =
                pairs.iter().flat_map(|&(u, v)| [u, v]).collect();
            covered.sort_unstable();
            let mut expected = odd.clone();
            expected.sort_unstable();
            assert_eq!(covered, expected, "n={n}");
        };

        let greedy =
            match_vertices(&instance, &odd, MatchingStrategy::GreedyNearest).unwrap();
        let minimum =
            match_vertices(&instance, &odd, MatchingStrategy::MinimumWeight).unwrap();
        check_perfect(&greedy);
        check_perfect(&minimum);
        assert!(
            weight(&minimum) <= weight(&greedy) + TOLERANCE,
            "n={n}: exact matching heavier than greedy"
        );
    }
}
