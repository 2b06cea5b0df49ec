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

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A named participant in the graph.
///
/// Equality, hashing and ordering all follow the label, so two vertices built
/// from the same name are interchangeable. Cloning shares the label.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex(Arc<str>);

impl Vertex {
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Vertex(label.into())
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Vertex::new(label)
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Vertex::new(label)
    }
}

// Lets graphs keyed by `Vertex` be queried with a plain `&str`.
impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Vertex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vertex").field(&&*self.0).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Vertex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Vertex {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Vertex::from)
    }
}

#[cfg(test)]
mod tests {
    use super::Vertex;
    use foldhash::{HashSet, HashSetExt};

    #[test]
    fn equal_labels_are_equal_vertices() {
        let a = Vertex::from("alice");
        let b = Vertex::from(String::from("alice"));
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(set.contains("alice"));
    }

    #[test]
    fn ordering_is_lexicographic_on_label() {
        let mut vertices: Vec<Vertex> = ["eve", "alex", "bob", "alice"]
            .into_iter()
            .map(Vertex::from)
            .collect();
        vertices.sort();
        let labels: Vec<&str> = vertices.iter().map(Vertex::label).collect();
        assert_eq!(labels, ["alex", "alice", "bob", "eve"]);
    }

    #[test]
    fn display_is_the_bare_label() {
        let v = Vertex::from("grunt");
        assert_eq!(v.to_string(), "grunt");
        assert_eq!(format!("{v:?}"), "Vertex(\"grunt\")");
    }
}
