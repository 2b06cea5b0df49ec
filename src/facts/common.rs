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

//! Shared helpers for the fact sources.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{AppError, Result};

/// Read a whole file, keeping the path in the error.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and deserialize a JSON snapshot.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|source| AppError::Snapshot {
        path: path.to_path_buf(),
        source,
    })
}

/// Remote identifier of an account or organization.
///
/// Recorded API responses carry these either as JSON numbers or as strings;
/// both compare by their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub(crate) enum AccountId {
    Number(u64),
    Text(String),
}

impl AccountId {
    pub(crate) fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountId::Number(n) => write!(f, "{n}"),
            AccountId::Text(s) => f.write_str(s),
        }
    }
}
