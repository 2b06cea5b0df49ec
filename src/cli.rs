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

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, OutputFormat};

#[derive(Parser, Debug, Default)]
#[command(name = "cliquefinder", version, about = "Find maximal cliques of connected people")]
pub struct Cli {
    /// File with one name per line
    pub names: Option<PathBuf>,

    /// Where to write the cliques (overwritten if it exists)
    pub output: Option<PathBuf>,

    /// TOML config file; command line values take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Edge list with two names per line (repeatable)
    #[arg(long = "edges", value_name = "FILE")]
    pub edge_lists: Vec<PathBuf>,

    /// Recorded organization memberships (JSON)
    #[arg(long, value_name = "FILE")]
    pub organizations: Option<PathBuf>,

    /// Recorded follower lists (JSON)
    #[arg(long, value_name = "FILE")]
    pub followers: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Leave out cliques with fewer members
    #[arg(long, value_name = "N")]
    pub min_size: Option<usize>,

    /// Enumerate connected components in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Layer the command line on top of `config`.
    #[must_use]
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(names) = &self.names {
            config.names = Some(names.clone());
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        config
            .sources
            .edge_lists
            .extend(self.edge_lists.iter().cloned());
        if let Some(path) = &self.organizations {
            config.sources.organizations = Some(path.clone());
        }
        if let Some(path) = &self.followers {
            config.sources.followers = Some(path.clone());
        }
        if let Some(format) = self.format {
            config.format = format.into();
        }
        if let Some(min_size) = self.min_size {
            config.min_size = min_size;
        }
        config.parallel |= self.parallel;
        config
    }
}
