/*!
# Graph Generators

Builders for test inputs and benchmark instances:

- [`GeneratorSubstructures`] adds deterministic motifs (paths, cycles, cliques, stars, matchings)
  to an existing graph,
- [`RandomGraph`] creates whole random graphs from a seeded random number generator,
- [`random_permutation`] draws a relabelling of the nodes, e.g. for [`GraphRelabel::relabelled`].

All random builders take the RNG as an argument so that results are reproducible with seeded
generators such as `rand_pcg::Pcg64Mcg`.
*/

use rand::{Rng, seq::SliceRandom};

use crate::prelude::*;

mod substructures;

pub use substructures::*;

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a simple `G(n,p)` graph: every unordered pair of distinct nodes is connected with
    /// probability `p`, independently of all other pairs.
    /// ** Panics if `p` is not a probability **
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        assert!((0.0..=1.0).contains(&p), "{p} is not a valid probability");

        let mut edges = Vec::new();
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.random_bool(p) {
                    edges.push(Edge(u, v));
                }
            }
        }

        Self::from_edges(n, edges.into_iter())
    }
}

/// Returns a uniformly random permutation of `0..n`
pub fn random_permutation<R: Rng>(rng: &mut R, n: NumNodes) -> Vec<Node> {
    let mut mapping: Vec<Node> = (0..n).collect();
    mapping.shuffle(rng);
    mapping
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn gnp_extremes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        let empty = AdjArray::gnp(rng, 10, 0.0);
        assert_eq!(empty.number_of_nodes(), 10);
        assert_eq!(empty.number_of_edges(), 0);

        let complete = AdjArray::gnp(rng, 10, 1.0);
        assert_eq!(complete.number_of_edges(), 45);
        assert!(complete.degrees().all(|d| d == 9));
    }

    #[test]
    fn gnp_is_simple() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        for _ in 0..10 {
            let graph = AdjArray::gnp(rng, 30, 0.2);
            for u in graph.vertices() {
                assert!(!graph.has_self_loop(u));
                assert!(graph.neighbors_of(u).all_unique());
            }
        }
    }

    #[test]
    fn gnp_is_reproducible() {
        let a = AdjArray::gnp(&mut Pcg64Mcg::seed_from_u64(5), 20, 0.3);
        let b = AdjArray::gnp(&mut Pcg64Mcg::seed_from_u64(5), 20, 0.3);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "not a valid probability")]
    fn gnp_rejects_invalid_probability() {
        let _ = AdjArray::gnp(&mut Pcg64Mcg::seed_from_u64(0), 5, 1.5);
    }

    #[test]
    fn permutations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for n in [0, 1, 5, 50] {
            let mut mapping = random_permutation(rng, n);
            assert_eq!(mapping.len(), n as usize);
            mapping.sort_unstable();
            assert_eq!(mapping, (0..n).collect_vec());
        }
    }
}
