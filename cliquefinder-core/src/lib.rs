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

//! Maximal clique enumeration over labelled undirected graphs.
//!
//! A [`Graph`] is populated edge by edge, then handed to a [`CliqueSolver`]
//! together with the candidate vertices. The solver runs Bron-Kerbosch with
//! max-degree pivoting and returns every maximal [`Clique`] of the subgraph
//! induced by the candidates.
//!
//! ```
//! use cliquefinder_core::{Clique, CliqueSolver, Graph, Vertex};
//!
//! let mut graph = Graph::new();
//! graph.add_edge(Vertex::from("v1"), Vertex::from("v2"));
//!
//! let cliques = CliqueSolver::new(&graph)
//!     .compute(["v1", "v2"].map(Vertex::from))
//!     .unwrap();
//! assert!(cliques.contains(&Clique::new(["v2", "v1"].map(Vertex::from))));
//! ```

pub mod clique;
pub mod components;
pub mod error;
pub mod graph;
pub mod solver;
pub mod vertex;

pub use clique::{Clique, CliqueSet};
pub use components::candidate_components;
pub use error::CliqueError;
pub use graph::Graph;
pub use solver::CliqueSolver;
pub use vertex::Vertex;
