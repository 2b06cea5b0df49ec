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

//! Discover tightly-connected groups of people.
//!
//! Connections between the people listed in a names file are collected from
//! recorded data (explicit edge lists, shared organization membership and
//! mutual follows) into one undirected graph, and every maximal clique among
//! those people is reported. The clique engine itself lives in
//! [`cliquefinder_core`].

pub mod cli;
pub mod config;
pub mod error;
pub mod facts;
pub mod names;
pub mod pipeline;
pub mod report;

pub use cliquefinder_core::{Clique, CliqueSet, CliqueSolver, Graph, Vertex};
pub use config::{Config, OutputFormat};
pub use error::{AppError, Result};
pub use pipeline::{run, RunSummary};
