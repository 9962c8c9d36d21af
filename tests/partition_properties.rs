//! Every generator keeps each location in exactly one route.

use std::sync::Arc;

use proptest::prelude::*;
use u_brigade::constructive::{initial_solution, ClosestNext, InitialStateGenerator, RandomPartition};
use u_brigade::evaluation::{evaluate, waiting_time_fitness, INFEASIBLE_PENALTY};
use u_brigade::models::{Coords, Location, OpeningHours, Solution};
use u_brigade::neighborhood::{
    BestOfN, Crossover, Multi, Mutation, NeighborhoodGenerator, RandomOf, Shuffle,
};
use u_brigade::network::{Network, TravelMatrix};
use u_brigade::random::create_rng;

prop_compose! {
    fn network_strategy()(n in 2usize..24)(
        travel in prop::collection::vec(0.0f64..3600.0, (n + 1) * (n + 1)),
        masks in prop::collection::vec(0u32..(1 << 24), n),
        services in prop::collection::vec(0.0f64..7200.0, n),
    ) -> Network {
        let locations = masks
            .iter()
            .zip(&services)
            .enumerate()
            .map(|(i, (&mask, &service))| {
                Location::new(i + 1, Coords::default(), service)
                    .with_opening_hours(OpeningHours::from_mask(mask))
            })
            .collect::<Vec<_>>();
        let size = locations.len() + 1;
        let matrix = TravelMatrix::from_data(size, travel).expect("square data");
        Network::new(Location::depot(0, Coords::default()), locations, matrix).expect("valid network")
    }
}

prop_compose! {
    fn instance()(network in network_strategy())(
        carriers in 1..=network.num_locations(),
        seed in any::<u64>(),
        network in Just(network),
    ) -> (Network, usize, u64) {
        (network, carriers, seed)
    }
}

fn neighborhoods(network: &Arc<Network>) -> Vec<Box<dyn NeighborhoodGenerator>> {
    let primitives = || -> Vec<Box<dyn NeighborhoodGenerator>> {
        vec![Box::new(Crossover), Box::new(Mutation), Box::new(Shuffle)]
    };
    vec![
        Box::new(Crossover),
        Box::new(Mutation),
        Box::new(Shuffle),
        Box::new(RandomOf::new(primitives()).expect("non-empty")),
        Box::new(Multi::new(primitives()).expect("non-empty")),
        Box::new(
            BestOfN::new(
                Box::new(RandomOf::new(primitives()).expect("non-empty")),
                waiting_time_fitness(Arc::clone(network)),
                3,
            )
            .expect("valid"),
        ),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn initial_generators_partition_locations((network, carriers, seed) in instance()) {
        let expected = network.location_ids();
        let generators: [&dyn InitialStateGenerator; 2] = [&RandomPartition, &ClosestNext];
        for generator in generators {
            let mut rng = create_rng(seed);
            let solution = initial_solution(generator, &network, carriers, &mut rng).expect("valid carriers");
            prop_assert_eq!(solution.num_brigades(), carriers);
            prop_assert!(solution.is_partition_of(&expected));
        }
    }

    #[test]
    fn neighborhoods_preserve_partition((network, carriers, seed) in instance()) {
        let expected = network.location_ids();
        let network = Arc::new(network);
        let mut rng = create_rng(seed);
        let start = initial_solution(&RandomPartition, &network, carriers, &mut rng).expect("valid carriers");

        for op in neighborhoods(&network) {
            let mut current: Solution = start.clone();
            for _ in 0..10 {
                let next = op.apply(&current, &mut rng);
                prop_assert!(next.is_partition_of(&expected), "{} broke the partition", op.name());
                prop_assert_eq!(next.num_brigades(), carriers);
                current = next;
            }
            prop_assert!(start.is_partition_of(&expected));
        }
    }

    #[test]
    fn cost_is_non_negative_and_stable((network, carriers, seed) in instance()) {
        let mut rng = create_rng(seed);
        let solution = initial_solution(&RandomPartition, &network, carriers, &mut rng).expect("valid carriers");
        let first = evaluate(&solution, &network);
        prop_assert!(first >= 0.0);
        prop_assert_eq!(evaluate(&solution, &network), first);

        let never_open = network.locations().iter().any(|l| l.opening_hours().is_never_open());
        if never_open {
            prop_assert_eq!(first, INFEASIBLE_PENALTY);
        } else {
            prop_assert!(first < 24.0 * 3600.0 * network.num_locations() as f64);
        }
    }
}
