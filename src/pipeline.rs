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

//! The end-to-end run: names in, graph built from every source, cliques out.

use cliquefinder_core::{CliqueSet, CliqueSolver, Graph, Vertex};
use indexmap::IndexSet;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::facts::{self, FactSource};
use crate::names::read_names;
use crate::report;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub names: usize,
    pub vertices: usize,
    pub edges: usize,
    pub cliques_found: usize,
    pub cliques_written: usize,
}

/// Build the graph for `names` from `sources`, in order.
pub fn build_graph(names: &IndexSet<String>, sources: &[Box<dyn FactSource>]) -> Graph {
    let mut graph = Graph::with_capacity(names.len());
    for source in sources {
        let added = source.add_edges(names, &mut graph);
        info!(source = source.name(), added, "collected edges");
    }
    graph
}

/// Enumerate the maximal cliques among `names`.
///
/// # Errors
/// Returns error only if the solver reports a broken invariant.
pub fn solve(graph: &Graph, names: &IndexSet<String>, parallel: bool) -> Result<CliqueSet> {
    let candidates = names.iter().map(|name| Vertex::from(name.as_str()));
    let solver = CliqueSolver::new(graph);
    let cliques = if parallel {
        solver.compute_components(candidates)?
    } else {
        solver.compute(candidates)?
    };
    Ok(cliques)
}

/// Run the whole pipeline described by `config`.
///
/// # Errors
/// Returns error if the config is incomplete, any input cannot be read or
/// parsed, or the report cannot be written.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;
    let (Some(names_path), Some(output_path)) = (&config.names, &config.output) else {
        return Err(AppError::InvalidConfig("names and output are required"));
    };

    let names = read_names(names_path)?;
    let sources = facts::load_sources(&config.sources)?;
    let graph = build_graph(&names, &sources);

    info!(
        names = names.len(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "fetched all the data, starting computation"
    );
    let cliques = solve(&graph, &names, config.parallel)?;
    let cliques_found = cliques.len();

    let selected = report::select(cliques, config.min_size);
    info!(
        found = cliques_found,
        written = selected.len(),
        path = %output_path.display(),
        "writing result"
    );
    report::write_report(output_path, &selected, config.format)?;

    Ok(RunSummary {
        names: names.len(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        cliques_found,
        cliques_written: selected.len(),
    })
}

