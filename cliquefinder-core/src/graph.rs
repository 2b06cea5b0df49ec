// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Borrow;
use std::hash::Hash;

use foldhash::{HashMap, HashMapExt, HashSet, HashSetExt};

use crate::error::CliqueError;
use crate::vertex::Vertex;

/// An undirected graph without self-loops, stored as a symmetric adjacency map.
///
/// Vertices only come into existence through [`Graph::add_edge`]; querying a
/// vertex that was never part of an edge yields an empty neighbor set and
/// leaves the graph untouched.
#[derive(Clone, Debug)]
pub struct Graph<N = Vertex> {
    adjacency: HashMap<N, HashSet<N>>,
    empty: HashSet<N>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Graph {
            adjacency: HashMap::default(),
            empty: HashSet::default(),
        }
    }
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Graph {
            adjacency: HashMap::with_capacity(vertices),
            empty: HashSet::new(),
        }
    }

    /// Connect `a` and `b` in both directions.
    ///
    /// Self-loops are ignored and inserting an existing edge again has no
    /// effect. Returns `true` if the edge was not present before.
    pub fn add_edge(&mut self, a: N, b: N) -> bool {
        if a == b {
            return false;
        }
        let inserted = self
            .adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        inserted
    }

    /// Neighbors of `v`, or an empty set if `v` has no recorded edges.
    #[inline]
    pub fn neighbors<Q>(&self, v: &Q) -> &HashSet<N>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.get(v).unwrap_or(&self.empty)
    }

    #[inline]
    pub fn degree<Q>(&self, v: &Q) -> usize
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.neighbors(v).len()
    }

    pub fn contains_vertex<Q>(&self, v: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.contains_key(v)
    }

    pub fn is_adjacent<Q>(&self, a: &Q, b: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.neighbors(a).contains(b)
    }

    /// Number of vertices that take part in at least one edge.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum::<usize>() / 2
    }

    /// Vertices with at least one edge, in arbitrary order.
    pub fn vertices(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Return the candidate with the most neighbors in the whole graph.
    ///
    /// Degree is not restricted to `candidates`. Ties go to the first maximum
    /// in iteration order, so pass candidates in a stable order for
    /// reproducible results.
    ///
    /// # Errors
    /// [`CliqueError::InvalidArgument`] if `candidates` is empty.
    pub fn vertex_of_max_degree<'a, I>(&self, candidates: I) -> Result<&'a N, CliqueError>
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        let mut best: Option<(&'a N, usize)> = None;
        for candidate in candidates {
            let degree = self.degree(candidate);
            match best {
                Some((_, best_degree)) if best_degree >= degree => {}
                _ => best = Some((candidate, degree)),
            }
        }
        best.map(|(vertex, _)| vertex).ok_or(CliqueError::InvalidArgument(
            "vertex_of_max_degree requires at least one candidate",
        ))
    }
}

impl<N> Extend<(N, N)> for Graph<N>
where
    N: Clone + Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (N, N)>>(&mut self, edges: T) {
        for (a, b) in edges {
            self.add_edge(a, b);
        }
    }
}

impl<N> FromIterator<(N, N)> for Graph<N>
where
    N: Clone + Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (N, N)>>(edges: T) -> Self {
        let mut graph = Graph::new();
        graph.extend(edges);
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::Graph;
    use crate::error::CliqueError;
    use crate::vertex::Vertex;

    fn v(label: &str) -> Vertex {
        Vertex::from(label)
    }

    #[test]
    fn self_loops_are_ignored() {
        let mut g = Graph::new();
        assert!(!g.add_edge(v("node1"), v("node1")));
        assert!(g.neighbors("node1").is_empty());
        assert!(!g.contains_vertex("node1"));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn edges_are_symmetric_and_idempotent() {
        let mut g = Graph::new();
        assert!(g.add_edge(v("a"), v("b")));
        let once = g.neighbors("a").clone();
        assert!(!g.add_edge(v("a"), v("b")));
        assert!(!g.add_edge(v("b"), v("a")));

        assert_eq!(g.neighbors("a"), &once);
        assert!(g.is_adjacent("a", "b"));
        assert!(g.is_adjacent("b", "a"));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn returns_correct_adjacent_nodes() {
        // n1 - n2 - n3
        let g: Graph = [(v("node1"), v("node2")), (v("node2"), v("node3"))]
            .into_iter()
            .collect();
        let mut adjacent: Vec<&str> = g.neighbors("node2").iter().map(Vertex::label).collect();
        adjacent.sort_unstable();
        assert_eq!(adjacent, ["node1", "node3"]);
    }

    #[test]
    fn unknown_vertex_has_no_neighbors_and_is_not_created() {
        let g: Graph = Graph::new();
        assert!(g.neighbors("testNode").is_empty());
        assert_eq!(g.degree("testNode"), 0);
        assert_eq!(g.vertex_count(), 0);
    }

    #[test]
    fn returns_node_with_max_degree() {
        // n1 - n2 - n3
        //       |
        //       n4
        let mut g = Graph::new();
        g.add_edge(v("node1"), v("node2"));
        g.add_edge(v("node2"), v("node3"));
        g.add_edge(v("node2"), v("node4"));

        let candidates = [v("node1"), v("node2"), v("node3"), v("node4")];
        assert_eq!(g.vertex_of_max_degree(&candidates), Ok(&v("node2")));
    }

    #[test]
    fn max_degree_counts_edges_outside_the_candidates() {
        // "b" only has a single neighbor among the candidates but three overall.
        let mut g = Graph::new();
        g.add_edge(v("a"), v("c"));
        g.add_edge(v("a"), v("d"));
        g.add_edge(v("b"), v("x"));
        g.add_edge(v("b"), v("y"));
        g.add_edge(v("b"), v("z"));

        let candidates = [v("a"), v("b")];
        assert_eq!(g.vertex_of_max_degree(&candidates), Ok(&v("b")));
    }

    #[test]
    fn max_degree_ties_go_to_the_first_candidate() {
        let mut g = Graph::new();
        g.add_edge(v("a"), v("b"));

        assert_eq!(g.vertex_of_max_degree(&[v("a"), v("b")]), Ok(&v("a")));
        assert_eq!(g.vertex_of_max_degree(&[v("b"), v("a")]), Ok(&v("b")));
        // isolated candidates still produce a result
        assert_eq!(g.vertex_of_max_degree(&[v("q"), v("r")]), Ok(&v("q")));
    }

    #[test]
    fn max_degree_of_nothing_is_an_error() {
        let g: Graph = Graph::new();
        assert!(matches!(
            g.vertex_of_max_degree(&[]),
            Err(CliqueError::InvalidArgument(_))
        ));
    }

    #[test]
    fn works_with_non_string_vertices() {
        let mut g: Graph<u32> = Graph::new();
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        assert_eq!(g.degree(&2), 2);
        assert_eq!(g.vertex_of_max_degree(&[1, 2, 3]), Ok(&2));
    }
}
