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
use foldhash::{HashMap, HashMapExt, HashSet};
use indexmap::IndexSet;
use serde::Deserialize;
use tracing::{debug, warn};

use super::common::{read_json, AccountId};
use super::FactSource;
use crate::error::Result;

/// Mutual follow: two people are connected when each follows the other.
///
/// Reads recorded user lookups (`ids`) and follower id lists (`followers`),
/// both keyed by name:
///
/// ```json
/// {
///   "ids": { "alice": "100", "bob": 200 },
///   "followers": { "alice": ["200"], "bob": [100, 999] }
/// }
/// ```
///
/// Follower ids that do not resolve to a known name are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Followers {
    ids: HashMap<String, AccountId>,
    followers: HashMap<String, Vec<AccountId>>,
}

impl Followers {
    /// # Errors
    /// Returns error if the file cannot be read or is not a valid snapshot.
    pub fn load(path: &Path) -> Result<Self> {
        let snapshot: Followers = read_json(path)?;
        debug!(
            path = %path.display(),
            ids = snapshot.ids.len(),
            accounts = snapshot.followers.len(),
            "read followers"
        );
        Ok(snapshot)
    }

    /// # Errors
    /// Returns error if `content` is not a valid snapshot.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Who follows whom, restricted to `names`.
    fn followed_by<'a>(&self, names: &'a IndexSet<String>) -> HashMap<&'a str, HashSet<&'a str>> {
        let mut id_to_name: HashMap<String, &'a str> = HashMap::with_capacity(names.len());
        for name in names {
            match self.ids.get(name) {
                Some(id) => {
                    id_to_name.insert(id.key(), name.as_str());
                }
                None => warn!(name = %name, "no account id, skipping"),
            }
        }

        let mut followed_by = HashMap::with_capacity(names.len());
        for name in names {
            let Some(ids) = self.followers.get(name) else {
                warn!(name = %name, "no follower data, skipping");
                continue;
            };
            let resolved: HashSet<&'a str> = ids
                .iter()
                .filter_map(|id| id_to_name.get(&id.key()).copied())
                .collect();
            followed_by.insert(name.as_str(), resolved);
        }
        followed_by
    }
}

impl FactSource for Followers {
    fn name(&self) -> &'static str {
        "followers"
    }

    fn add_edges(&self, names: &IndexSet<String>, graph: &mut Graph) -> usize {
        let followed_by = self.followed_by(names);
        let mut added = 0;
        for name in names {
            let Some(followers) = followed_by.get(name.as_str()) else {
                continue;
            };
            for &follower in followers {
                let mutual = followed_by
                    .get(follower)
                    .is_some_and(|back| back.contains(name.as_str()));
                if mutual && graph.add_edge(Vertex::from(name.as_str()), Vertex::from(follower)) {
                    added += 1;
                }
            }
        }
        added
    }
}
