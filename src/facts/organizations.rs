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
use foldhash::{HashMap, HashMapExt, HashSet, HashSetExt};
use indexmap::IndexSet;
use serde::Deserialize;
use tracing::{debug, warn};

use super::common::{read_json, AccountId};
use super::FactSource;
use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
struct Organization {
    id: AccountId,
}

/// Co-membership: two people are connected when they belong to a common
/// organization.
///
/// Reads a recorded `GET /users/{name}/orgs` response per account, keyed by
/// name:
///
/// ```json
/// { "alex": [{ "id": 1342004, "login": "rust-lang" }], "alice": [] }
/// ```
///
/// Other fields of an organization object are ignored.
#[derive(Debug, Clone, Default)]
pub struct Organizations {
    memberships: HashMap<String, Vec<AccountId>>,
}

impl Organizations {
    /// # Errors
    /// Returns error if the file cannot be read or is not a valid snapshot.
    pub fn load(path: &Path) -> Result<Self> {
        let raw: HashMap<String, Vec<Organization>> = read_json(path)?;
        debug!(path = %path.display(), accounts = raw.len(), "read organizations");
        Ok(Self::from_raw(raw))
    }

    /// # Errors
    /// Returns error if `content` is not a valid snapshot.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content).map(Self::from_raw)
    }

    fn from_raw(raw: HashMap<String, Vec<Organization>>) -> Self {
        let memberships = raw
            .into_iter()
            .map(|(name, orgs)| (name, orgs.into_iter().map(|org| org.id).collect()))
            .collect();
        Organizations { memberships }
    }
}

impl FactSource for Organizations {
    fn name(&self) -> &'static str {
        "organizations"
    }

    fn add_edges(&self, names: &IndexSet<String>, graph: &mut Graph) -> usize {
        let mut members: HashMap<String, Vec<&str>> = HashMap::new();
        let mut added = 0;

        for name in names {
            let Some(orgs) = self.memberships.get(name) else {
                warn!(name = %name, "no organization data, skipping");
                continue;
            };
            let mut seen = HashSet::with_capacity(orgs.len());
            for org in orgs {
                let key = org.key();
                if !seen.insert(key.clone()) {
                    continue;
                }
                let joined = members.entry(key).or_default();
                for &other in joined.iter() {
                    if graph.add_edge(Vertex::from(name.as_str()), Vertex::from(other)) {
                        added += 1;
                    }
                }
                joined.push(name.as_str());
            }
        }
        added
    }
}
