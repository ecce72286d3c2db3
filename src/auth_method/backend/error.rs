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
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::error::DatabaseError;

/// Auth method database backend error.
#[derive(Error, Debug)]
pub enum AuthMethodDatabaseError {
    /// Auth method not found.
    #[error("auth method {0} not found")]
    AuthMethodNotFound(String),

    /// Database error.
    #[error(transparent)]
    Database {
        #[from]
        source: DatabaseError,
    },

    /// Version does not fit into the version column.
    #[error("auth method {id} version {version} is out of range")]
    InvalidVersion { id: String, version: i64 },

    /// Stored operational state is not recognized.
    #[error("invalid operational state {0} stored")]
    InvalidOperationalState(String),

    /// Stored version differs from the expected one.
    #[error("auth method {id} version {version} does not match the stored version")]
    VersionMismatch { id: String, version: u32 },
}
