//! Property-based tests for distance queries.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{Distance, Instance, UserRef, to_ungraph};
    use petgraph::algo::dijkstra;
    use proptest::prelude::*;

    const MAX_USERS: usize = 6;

    /// A random small instance: user count plus friendship pairs by index.
    fn arb_instance() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (1..=MAX_USERS).prop_flat_map(|n| {
            let pairs = proptest::collection::vec((0..n, 0..n), 0..(n * 2));
            (Just(n), pairs)
        })
    }

    fn build(n: usize, pairs: &[(usize, usize)]) -> (Instance, Vec<UserRef>) {
        let mut inst = Instance::new();
        let users: Vec<UserRef> = (0..n)
            .map(|i| inst.register(format!("u{i}")).unwrap())
            .collect();
        for &(a, b) in pairs {
            inst.add_friendship(&users[a], &users[b]).unwrap();
        }
        (inst, users)
    }

    fn matrix(inst: &Instance, users: &[UserRef]) -> Vec<Vec<Option<usize>>> {
        users
            .iter()
            .map(|a| {
                users
                    .iter()
                    .map(|b| inst.distance_between(a, b).unwrap().hops())
                    .collect()
            })
            .collect()
    }

    proptest! {
        #[test]
        fn test_distance_to_self_is_zero((n, pairs) in arb_instance()) {
            let (inst, users) = build(n, &pairs);
            for u in &users {
                prop_assert_eq!(inst.distance_between(u, u).unwrap(), Distance::Hops(0));
            }
        }

        #[test]
        fn test_distance_is_symmetric((n, pairs) in arb_instance()) {
            let (inst, users) = build(n, &pairs);
            let d = matrix(&inst, &users);
            for a in 0..n {
                for b in 0..n {
                    prop_assert_eq!(d[a][b], d[b][a]);
                }
            }
        }

        #[test]
        fn test_triangle_inequality((n, pairs) in arb_instance()) {
            let (inst, users) = build(n, &pairs);
            let d = matrix(&inst, &users);
            for a in 0..n {
                for b in 0..n {
                    for c in 0..n {
                        if let (Some(ab), Some(bc), Some(ac)) = (d[a][b], d[b][c], d[a][c]) {
                            prop_assert!(ac <= ab + bc);
                        }
                    }
                }
            }
        }

        #[test]
        fn test_matches_shortest_path_oracle((n, pairs) in arb_instance()) {
            let (inst, users) = build(n, &pairs);
            let graph = to_ungraph(&inst);

            for start in graph.node_indices() {
                let costs = dijkstra(&graph, start, None, |_| 1usize);
                let from = inst.lookup(&graph[start]).unwrap();

                for end in graph.node_indices() {
                    let to = inst.lookup(&graph[end]).unwrap();
                    let expected = Distance::from(costs.get(&end).copied());
                    prop_assert_eq!(inst.distance_between(&from, &to).unwrap(), expected);
                }
            }
            prop_assert_eq!(graph.node_count(), users.len());
        }

        #[test]
        fn test_unconnected_users_have_no_path(n in 2..=MAX_USERS) {
            let (inst, users) = build(n, &[]);
            for a in &users {
                for b in &users {
                    let expected = if a == b { Distance::Hops(0) } else { Distance::NoPath };
                    prop_assert_eq!(inst.distance_between(a, b).unwrap(), expected);
                }
            }
        }
    }
}
