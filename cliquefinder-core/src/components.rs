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

//! Connected components of the subgraph induced by a candidate set.
//!
//! Maximal cliques never span two components, so each component can be
//! enumerated on its own.

use std::hash::Hash;

use fixedbitset::FixedBitSet;
use foldhash::{HashMap, HashMapExt};
use petgraph::unionfind::UnionFind;

use crate::graph::Graph;
use crate::solver::CandidateIndex;

/// Group `candidates` into the connected components of the subgraph they
/// induce in `graph`.
///
/// Each component is sorted, and components are ordered by their smallest
/// member. Edges to vertices outside `candidates` do not connect anything.
pub fn candidate_components<N, I>(graph: &Graph<N>, candidates: I) -> Vec<Vec<N>>
where
    N: Clone + Ord + Hash,
    I: IntoIterator<Item = N>,
{
    let index = CandidateIndex::new(graph, candidates);
    split_components(&index)
        .into_iter()
        .map(|component| {
            component
                .ones()
                .map(|i| index.vertices[i].clone())
                .collect()
        })
        .collect()
}

/// Components as bitsets over the dense candidate index, ordered by their
/// lowest index.
pub(crate) fn split_components<N>(index: &CandidateIndex<N>) -> Vec<FixedBitSet> {
    let n = index.rows.len();
    let mut uf = UnionFind::<usize>::new(n);
    for (i, row) in index.rows.iter().enumerate() {
        for j in row.ones().filter(|&j| j > i) {
            uf.union(i, j);
        }
    }

    let mut by_label: HashMap<usize, FixedBitSet> = HashMap::new();
    for (i, label) in uf.into_labeling().into_iter().enumerate() {
        by_label
            .entry(label)
            .or_insert_with(|| FixedBitSet::with_capacity(n))
            .insert(i);
    }

    let mut components: Vec<FixedBitSet> = by_label.into_values().collect();
    components.sort_by_key(|component| component.ones().next());
    components
}
