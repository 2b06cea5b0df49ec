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

//! Adapters that turn recorded account data into "connected" edges.
//!
//! Every source works over the same universe of names and only ever adds
//! edges; what counts as a connection is up to the source.

mod common;
pub mod edge_list;
pub mod followers;
pub mod organizations;

use cliquefinder_core::Graph;
use indexmap::IndexSet;

use crate::config::SourcesConfig;
use crate::error::Result;

pub use edge_list::EdgeList;
pub use followers::Followers;
pub use organizations::Organizations;

pub trait FactSource {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Add this source's edges for `names` to `graph`, returning how many
    /// edges were new.
    fn add_edges(&self, names: &IndexSet<String>, graph: &mut Graph) -> usize;
}

/// Load every source named in `config`: edge lists first, then
/// organizations, then followers.
///
/// # Errors
/// Returns error if any source file cannot be read or parsed.
pub fn load_sources(config: &SourcesConfig) -> Result<Vec<Box<dyn FactSource>>> {
    let mut sources: Vec<Box<dyn FactSource>> = Vec::new();
    for path in &config.edge_lists {
        sources.push(Box::new(EdgeList::load(path)?));
    }
    if let Some(path) = &config.organizations {
        sources.push(Box::new(Organizations::load(path)?));
    }
    if let Some(path) = &config.followers {
        sources.push(Box::new(Followers::load(path)?));
    }
    Ok(sources)
}
