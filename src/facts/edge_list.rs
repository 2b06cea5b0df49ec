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

use std::path::Path;

use cliquefinder_core::{Graph, Vertex};
use indexmap::IndexSet;
use tracing::debug;

use super::common::read_text;
use super::FactSource;
use crate::error::{AppError, Result};

/// Explicit connections, two whitespace separated names per line.
///
/// Blank lines and lines starting with `#` are skipped. Names do not have to
/// belong to the name universe; the solver ignores anything that is not a
/// candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    edges: Vec<(String, String)>,
}

impl EdgeList {
    /// # Errors
    /// Returns error if the file cannot be read or a line is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_text(path)?;
        let list = Self::parse(&content, path)?;
        debug!(path = %path.display(), edges = list.edges.len(), "read edge list");
        Ok(list)
    }

    /// `path` is only used for error messages.
    ///
    /// # Errors
    /// Returns [`AppError::MalformedEdge`] for a line without exactly two names.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut edges = Vec::new();
        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [a, b] => edges.push(((*a).to_owned(), (*b).to_owned())),
                _ => {
                    return Err(AppError::MalformedEdge {
                        path: path.to_path_buf(),
                        line: i + 1,
                        found: fields.len(),
                    })
                }
            }
        }
        Ok(EdgeList { edges })
    }

    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }
}

impl FactSource for EdgeList {
    fn name(&self) -> &'static str {
        "edge list"
    }

    fn add_edges(&self, _names: &IndexSet<String>, graph: &mut Graph) -> usize {
        self.edges
            .iter()
            .filter(|(a, b)| graph.add_edge(Vertex::from(a.as_str()), Vertex::from(b.as_str())))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::EdgeList;
    use crate::error::AppError;
    use crate::facts::FactSource;
    use cliquefinder_core::Graph;
    use indexmap::IndexSet;
    use std::path::Path;

    #[test]
    fn parses_pairs_and_skips_comments() {
        let list = EdgeList::parse(
            "# wikipedia example\nv1 v2\n\n  v1\tv5  \nv2 v1\nv3 v3\n",
            Path::new("edges.txt"),
        )
        .unwrap();
        assert_eq!(list.edges().len(), 4);

        let mut graph = Graph::new();
        // the reversed duplicate and the self-loop add nothing
        assert_eq!(list.add_edges(&IndexSet::new(), &mut graph), 2);
        assert!(graph.is_adjacent("v1", "v5"));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn reports_the_malformed_line() {
        let err = EdgeList::parse("a b\na b c\n", Path::new("edges.txt")).unwrap_err();
        match err {
            AppError::MalformedEdge { line, found, .. } => {
                assert_eq!(line, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
