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

use std::fs;
use std::path::Path;

use indexmap::IndexSet;
use tracing::debug;

use crate::error::{AppError, Result};

/// Read the universe of names, one per line.
///
/// Lines are trimmed, blank lines skipped and repeated names kept once, in
/// order of first appearance.
///
/// # Errors
/// Returns error if the file does not exist or cannot be read.
pub fn read_names(path: &Path) -> Result<IndexSet<String>> {
    if !path.exists() {
        return Err(AppError::MissingInput(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let names = parse_names(&content);
    debug!(path = %path.display(), names = names.len(), "read names");
    Ok(names)
}

#[must_use]
pub fn parse_names(content: &str) -> IndexSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_names, read_names};
    use crate::error::AppError;
    use std::path::Path;

    #[test]
    fn trims_skips_blanks_and_deduplicates() {
        let names = parse_names("alex\n  bob \n\nalice\nbob\r\n\t\neve");
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(names, ["alex", "bob", "alice", "eve"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_names(Path::new("/definitely/not/here/names.txt")).unwrap_err();
        assert!(matches!(err, AppError::MissingInput(_)));
    }
}
