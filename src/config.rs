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

//! Run configuration, loaded from an optional TOML file and then overridden
//! from the command line.
//!
//! ```toml
//! names = "names.txt"
//! output = "cliques.txt"
//! format = "json"
//! min_size = 2
//! parallel = true
//!
//! [sources]
//! edge_lists = ["extra_edges.txt"]
//! organizations = "github_orgs.json"
//! followers = "twitter_followers.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One clique per line, members separated by a space.
    #[default]
    Text,
    /// Array of arrays of labels.
    Json,
}

/// Recorded data that contributes edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub edge_lists: Vec<PathBuf>,
    pub organizations: Option<PathBuf>,
    pub followers: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub names: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    /// Cliques with fewer members are left out of the report.
    pub min_size: usize,
    /// Enumerate connected components on the rayon pool.
    pub parallel: bool,
    pub sources: SourcesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            names: None,
            output: None,
            format: OutputFormat::default(),
            min_size: default_min_size(),
            parallel: false,
            sources: SourcesConfig::default(),
        }
    }
}

fn default_min_size() -> usize {
    2
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a config file. Missing keys keep their defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// # Errors
    /// Returns error if `content` is not a valid config document.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// # Errors
    /// Returns error if the input or output path is unset or `min_size` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.names.is_none() {
            return Err(AppError::InvalidConfig("no names file given"));
        }
        if self.output.is_none() {
            return Err(AppError::InvalidConfig("no output file given"));
        }
        if self.min_size == 0 {
            return Err(AppError::InvalidConfig("min_size must be at least 1"));
        }
        Ok(())
    }
}
