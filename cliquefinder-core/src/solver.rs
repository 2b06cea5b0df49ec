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
// Bron, C.; Kerbosch, J. (1973). "Algorithm 457: finding all cliques of an undirected graph". Communications of the ACM. 16 (9): 575–577. doi:10.1145/362342.362367.

use std::hash::Hash;

use fixedbitset::FixedBitSet;
use foldhash::{HashMap, HashMapExt, HashSet, HashSetExt};
use rayon::prelude::*;
use smallvec::SmallVec;
use tracing::debug;

use crate::clique::{Clique, CliqueSet};
use crate::components::split_components;
use crate::error::CliqueError;
use crate::graph::Graph;
use crate::vertex::Vertex;

/// Enumerates maximal cliques of a [`Graph`] with Bron-Kerbosch and pivoting.
///
/// The solver only borrows the graph, so one graph can back any number of
/// solvers, including solvers running on different threads.
#[derive(Debug)]
pub struct CliqueSolver<'g, N = Vertex> {
    graph: &'g Graph<N>,
}

impl<N> Clone for CliqueSolver<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for CliqueSolver<'_, N> {}

/// Candidates mapped onto a dense index in ascending order, with adjacency
/// restricted to the candidate set. Bit `i` of any set refers to `vertices[i]`.
pub(crate) struct CandidateIndex<N> {
    pub(crate) vertices: Vec<N>,
    pub(crate) rows: Vec<FixedBitSet>,
}

impl<N> CandidateIndex<N>
where
    N: Clone + Ord + Hash,
{
    pub(crate) fn new<I: IntoIterator<Item = N>>(graph: &Graph<N>, candidates: I) -> Self {
        let mut vertices: Vec<N> = candidates.into_iter().collect();
        vertices.sort_unstable();
        vertices.dedup();

        let n = vertices.len();
        let mut position: HashMap<&N, usize> = HashMap::with_capacity(n);
        for (i, v) in vertices.iter().enumerate() {
            position.insert(v, i);
        }

        let mut rows = vec![FixedBitSet::with_capacity(n); n];
        for (i, v) in vertices.iter().enumerate() {
            for neighbor in graph.neighbors(v) {
                if let Some(&j) = position.get(neighbor) {
                    rows[i].insert(j);
                }
            }
        }
        CandidateIndex { vertices, rows }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }

    fn position(&self, vertex: &N) -> Result<usize, CliqueError> {
        self.vertices
            .binary_search(vertex)
            .map_err(|_| CliqueError::InvalidArgument("pivot is not a candidate"))
    }
}

/// One pending step of the recursion: the clique built so far (`R`), the
/// vertices that may still extend it (`P`) and the ones already explored by an
/// earlier sibling (`X`).
struct Frame {
    clique: SmallVec<[usize; 8]>,
    candidates: FixedBitSet,
    excluded: FixedBitSet,
}

impl<'g, N> CliqueSolver<'g, N>
where
    N: Clone + Ord + Hash,
{
    pub fn new(graph: &'g Graph<N>) -> Self {
        CliqueSolver { graph }
    }

    #[inline]
    pub fn graph(&self) -> &'g Graph<N> {
        self.graph
    }

    /// Find every maximal clique among `initial_candidates`.
    ///
    /// Adjacency and degree come from the full graph, but only the given
    /// candidates can become clique members. Candidates without neighbors
    /// among the other candidates come back as singleton cliques.
    ///
    /// # Errors
    /// [`CliqueError::InvalidArgument`] only if an internal invariant breaks;
    /// treat it as fatal.
    pub fn compute<I>(&self, initial_candidates: I) -> Result<CliqueSet<N>, CliqueError>
    where
        I: IntoIterator<Item = N>,
    {
        let index = CandidateIndex::new(self.graph, initial_candidates);
        if index.len() == 0 {
            return Ok(HashSet::new());
        }

        let mut all = FixedBitSet::with_capacity(index.len());
        all.insert_range(..);
        let mut cliques = HashSet::new();
        self.enumerate(&index, all, &mut cliques)?;

        debug!(
            candidates = index.len(),
            cliques = cliques.len(),
            "enumerated maximal cliques"
        );
        Ok(cliques)
    }

    /// Same result as [`CliqueSolver::compute`], but each connected component
    /// of the candidate subgraph is enumerated on the rayon thread pool.
    ///
    /// # Errors
    /// See [`CliqueSolver::compute`].
    pub fn compute_components<I>(&self, initial_candidates: I) -> Result<CliqueSet<N>, CliqueError>
    where
        I: IntoIterator<Item = N>,
        N: Send + Sync,
    {
        let index = CandidateIndex::new(self.graph, initial_candidates);
        if index.len() == 0 {
            return Ok(HashSet::new());
        }

        let components = split_components(&index);
        debug!(
            candidates = index.len(),
            components = components.len(),
            "enumerating components in parallel"
        );

        let partial: Vec<CliqueSet<N>> = components
            .into_par_iter()
            .map(|component| {
                let mut cliques = HashSet::new();
                self.enumerate(&index, component, &mut cliques)?;
                Ok::<_, CliqueError>(cliques)
            })
            .collect::<Result<_, CliqueError>>()?;

        let mut cliques = HashSet::with_capacity(partial.iter().map(|c| c.len()).sum());
        for part in partial {
            cliques.extend(part);
        }
        Ok(cliques)
    }

    /// Drain a work stack seeded with `R = ∅, P = candidates, X = ∅`.
    ///
    /// Frames are popped in the order the recursive formulation would visit
    /// them, so the native call stack stays flat however deep the cliques go.
    fn enumerate(
        &self,
        index: &CandidateIndex<N>,
        candidates: FixedBitSet,
        cliques: &mut CliqueSet<N>,
    ) -> Result<(), CliqueError> {
        let mut stack = vec![Frame {
            clique: SmallVec::new(),
            excluded: FixedBitSet::with_capacity(index.len()),
            candidates,
        }];
        while let Some(frame) = stack.pop() {
            self.extend(index, frame, &mut stack, cliques)?;
        }
        Ok(())
    }

    fn extend(
        &self,
        index: &CandidateIndex<N>,
        frame: Frame,
        stack: &mut Vec<Frame>,
        cliques: &mut CliqueSet<N>,
    ) -> Result<(), CliqueError> {
        let Frame {
            clique,
            mut candidates,
            mut excluded,
        } = frame;

        if candidates.is_clear() {
            // With X non-empty, R was already reported as part of a larger
            // clique rooted at an earlier sibling.
            if excluded.is_clear() {
                cliques.insert(Clique::new(
                    clique.iter().map(|&i| index.vertices[i].clone()),
                ));
            }
            return Ok(());
        }

        let mut pool = candidates.clone();
        pool.union_with(&excluded);
        let pivot = self
            .graph
            .vertex_of_max_degree(pool.ones().map(|i| &index.vertices[i]))?;
        let pivot = index.position(pivot)?;

        // Only candidates outside the pivot's neighborhood need a branch of
        // their own; the rest are reached through one of them.
        let mut branches = candidates.clone();
        branches.difference_with(&index.rows[pivot]);

        let mut children = Vec::with_capacity(branches.count_ones(..));
        for v in branches.ones() {
            let neighbors = &index.rows[v];

            let mut next_candidates = candidates.clone();
            next_candidates.intersect_with(neighbors);
            let mut next_excluded = excluded.clone();
            next_excluded.intersect_with(neighbors);
            let mut next_clique = clique.clone();
            next_clique.push(v);

            children.push(Frame {
                clique: next_clique,
                candidates: next_candidates,
                excluded: next_excluded,
            });

            candidates.set(v, false);
            excluded.insert(v);
        }

        // Reversed so the smallest branch is popped first.
        stack.extend(children.into_iter().rev());
        Ok(())
    }
}
