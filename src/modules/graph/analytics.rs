//! In-memory friendship graph and the two ranking algorithms behind the
//! recommendation endpoints. The projection is built per request from the
//! stored edge list and dropped when the request ends.

use std::collections::{HashMap, HashSet};
use uuid::Uuid;

const DAMPING: f64 = 0.85;
const MAX_ITERATIONS: usize = 50;
const CONVERGENCE_EPSILON: f64 = 1e-6;

pub struct FriendGraph {
    adjacency: HashMap<Uuid, HashSet<Uuid>>,
}

impl FriendGraph {
    /// Builds the undirected graph from stored edges. Each pair appears
    /// once in the store; both directions are materialized here.
    pub fn from_edges(edges: &[(Uuid, Uuid)]) -> Self {
        let mut adjacency: HashMap<Uuid, HashSet<Uuid>> = HashMap::new();
        for &(a, b) in edges {
            adjacency.entry(a).or_default().insert(b);
            adjacency.entry(b).or_default().insert(a);
        }
        FriendGraph { adjacency }
    }

    fn jaccard(&self, a: &Uuid, b: &Uuid) -> f64 {
        let (Some(na), Some(nb)) = (self.adjacency.get(a), self.adjacency.get(b)) else {
            return 0.0;
        };
        let intersection = na.intersection(nb).count();
        let union = na.union(nb).count();
        if union == 0 {
            return 0.0;
        }
        intersection as f64 / union as f64
    }

    /// Teams most similar to `subject` by shared friends, excluding the
    /// subject itself and teams it is already friends with. Ties are broken
    /// by id so equal scores rank deterministically.
    pub fn similar_to(&self, subject: &Uuid, limit: usize) -> Vec<(Uuid, f64)> {
        let Some(neighbors) = self.adjacency.get(subject) else {
            return Vec::new();
        };

        let mut scored: Vec<(Uuid, f64)> = self
            .adjacency
            .keys()
            .filter(|id| *id != subject && !neighbors.contains(id))
            .map(|id| (*id, self.jaccard(subject, id)))
            .filter(|(_, score)| *score > 0.0)
            .collect();

        scored.sort_by(|(id_a, score_a), (id_b, score_b)| {
            score_b.total_cmp(score_a).then_with(|| id_a.cmp(id_b))
        });
        scored.truncate(limit);
        scored
    }

    /// PageRank over the undirected graph, highest score first. Every
    /// friendship edge contributes in both directions, so well-connected
    /// teams accumulate rank from their neighborhoods.
    pub fn page_rank(&self) -> Vec<(Uuid, f64)> {
        let n = self.adjacency.len();
        if n == 0 {
            return Vec::new();
        }

        let initial = 1.0 / n as f64;
        let mut ranks: HashMap<Uuid, f64> =
            self.adjacency.keys().map(|id| (*id, initial)).collect();

        for _ in 0..MAX_ITERATIONS {
            let mut next: HashMap<Uuid, f64> =
                self.adjacency.keys().map(|id| (*id, (1.0 - DAMPING) / n as f64)).collect();

            for (id, neighbors) in &self.adjacency {
                if neighbors.is_empty() {
                    continue;
                }
                let share = DAMPING * ranks[id] / neighbors.len() as f64;
                for neighbor in neighbors {
                    *next.entry(*neighbor).or_insert(0.0) += share;
                }
            }

            let delta: f64 =
                next.iter().map(|(id, rank)| (rank - ranks[id]).abs()).sum();
            ranks = next;
            if delta < CONVERGENCE_EPSILON {
                break;
            }
        }

        let mut scored: Vec<(Uuid, f64)> = ranks.into_iter().collect();
        scored.sort_by(|(id_a, score_a), (id_b, score_b)| {
            score_b.total_cmp(score_a).then_with(|| id_a.cmp(id_b))
        });
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::new_uuid;

    fn ids(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| new_uuid()).collect()
    }

    #[test]
    fn similarity_ranks_shared_neighborhoods() {
        // a and c share both friends (b, d) but are not friends themselves.
        let v = ids(4);
        let (a, b, c, d) = (v[0], v[1], v[2], v[3]);
        let graph = FriendGraph::from_edges(&[(a, b), (a, d), (c, b), (c, d)]);

        let similar = graph.similar_to(&a, 5);
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].0, c);
        assert!((similar[0].1 - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn similarity_excludes_existing_friends() {
        let v = ids(3);
        let (a, b, c) = (v[0], v[1], v[2]);
        // a-b are friends; b-c are friends. c is the only candidate for a.
        let graph = FriendGraph::from_edges(&[(a, b), (b, c)]);

        let similar = graph.similar_to(&a, 5);
        assert!(similar.iter().all(|(id, _)| *id != b));
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].0, c);
    }

    #[test]
    fn similarity_of_unknown_team_is_empty() {
        let v = ids(3);
        let graph = FriendGraph::from_edges(&[(v[0], v[1])]);
        assert!(graph.similar_to(&v[2], 5).is_empty());
    }

    #[test]
    fn page_rank_favors_the_hub() {
        // Star topology: hub is friends with everyone else.
        let v = ids(5);
        let hub = v[0];
        let edges: Vec<(Uuid, Uuid)> = v[1..].iter().map(|leaf| (hub, *leaf)).collect();
        let graph = FriendGraph::from_edges(&edges);

        let ranked = graph.page_rank();
        assert_eq!(ranked[0].0, hub);
        assert_eq!(ranked.len(), 5);

        let total: f64 = ranked.iter().map(|(_, s)| s).sum();
        assert!((total - 1.0).abs() < 1e-3);
    }

    #[test]
    fn page_rank_of_empty_graph_is_empty() {
        let graph = FriendGraph::from_edges(&[]);
        assert!(graph.page_rank().is_empty());
    }
}
