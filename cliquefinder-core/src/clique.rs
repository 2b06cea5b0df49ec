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

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use foldhash::HashSet;

use crate::graph::Graph;
use crate::vertex::Vertex;

/// The set of cliques produced by one solver run.
pub type CliqueSet<N = Vertex> = HashSet<Clique<N>>;

/// A set of pairwise adjacent vertices.
///
/// Members are kept sorted and free of duplicates, so two cliques are equal
/// exactly when they contain the same vertices, whatever order they were
/// built in. Maximality is a property of how the clique was found and is not
/// enforced here; see [`Clique::is_maximal_in`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Clique<N = Vertex> {
    members: Vec<N>,
}

impl<N: Ord> Clique<N> {
    pub fn new<I: IntoIterator<Item = N>>(members: I) -> Self {
        let mut members: Vec<N> = members.into_iter().collect();
        members.sort_unstable();
        members.dedup();
        Clique { members }
    }

    /// Members in ascending order.
    #[inline]
    pub fn members(&self) -> &[N] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Smallest member.
    #[inline]
    pub fn first(&self) -> Option<&N> {
        self.members.first()
    }

    pub fn contains(&self, vertex: &N) -> bool {
        self.members.binary_search(vertex).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.members.iter()
    }

    pub fn into_members(self) -> Vec<N> {
        self.members
    }
}

impl<N> Clique<N>
where
    N: Clone + Ord + Hash,
{
    /// Whether every pair of members is adjacent in `graph`.
    pub fn is_clique_in(&self, graph: &Graph<N>) -> bool {
        self.members.iter().enumerate().all(|(i, a)| {
            self.members[i + 1..]
                .iter()
                .all(|b| graph.is_adjacent(a, b))
        })
    }

    /// Whether this is a clique of `graph` that no other candidate extends.
    pub fn is_maximal_in<'a, I>(&self, graph: &Graph<N>, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        if !self.is_clique_in(graph) {
            return false;
        }
        candidates.into_iter().all(|candidate| {
            self.contains(candidate)
                || !self
                    .members
                    .iter()
                    .all(|member| graph.is_adjacent(member, candidate))
        })
    }
}

impl<N: Ord> FromIterator<N> for Clique<N> {
    fn from_iter<I: IntoIterator<Item = N>>(members: I) -> Self {
        Clique::new(members)
    }
}

impl<'a, N> IntoIterator for &'a Clique<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

// Smallest member first, then size, then the members themselves.
impl<N: Ord> Ord for Clique<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.members
            .first()
            .cmp(&other.members.first())
            .then_with(|| self.members.len().cmp(&other.members.len()))
            .then_with(|| self.members.cmp(&other.members))
    }
}

impl<N: Ord> PartialOrd for Clique<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: fmt::Display> fmt::Display for Clique<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut members = self.members.iter();
        if let Some(first) = members.next() {
            write!(f, "{first}")?;
            for member in members {
                write!(f, " {member}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<N: serde::Serialize> serde::Serialize for Clique<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.members.serialize(serializer)
    }
}
