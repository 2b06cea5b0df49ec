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

use thiserror::Error;

/// Errors raised by the clique engine.
///
/// Every variant signals a broken internal contract rather than bad input, so
/// callers should abort the computation instead of recovering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliqueError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
