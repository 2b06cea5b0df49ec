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

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use cliquefinder_core::{Clique, CliqueSet};
use tracing::info;

use crate::config::OutputFormat;
use crate::error::{AppError, Result};

/// Drop cliques below `min_size` and put the rest in presentation order:
/// smallest member first, then size, then the remaining members.
#[must_use]
pub fn select(cliques: CliqueSet, min_size: usize) -> Vec<Clique> {
    let mut selected: Vec<Clique> = cliques
        .into_iter()
        .filter(|clique| clique.len() >= min_size)
        .collect();
    selected.sort_unstable();
    selected
}

/// # Errors
/// Returns error if JSON encoding fails.
pub fn render(cliques: &[Clique], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for clique in cliques {
                // writing into a String cannot fail
                let _ = writeln!(out, "{clique}");
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(cliques)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Write the report to `path`, replacing any existing file.
///
/// # Errors
/// Returns error if encoding or writing fails.
pub fn write_report(path: &Path, cliques: &[Clique], format: OutputFormat) -> Result<()> {
    let content = render(cliques, format)?;
    if path.exists() {
        info!(path = %path.display(), "output file already exists, overwriting");
    }
    fs::write(path, content).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}
