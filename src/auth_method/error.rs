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
//! # Auth method error

use thiserror::Error;

use crate::auth_method::backend::error::AuthMethodDatabaseError;
use crate::auth_method::discovery::DiscoveryError;
use crate::auth_method::types::AuthMethod;
use crate::error::{BuilderError, DatabaseError};

/// Auth method provider error.
#[derive(Error, Debug)]
pub enum AuthMethodProviderError {
    /// SQL backend error.
    #[error(transparent)]
    Backend {
        /// The source of the error.
        source: AuthMethodDatabaseError,
    },

    /// Conflict.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Discovery client error.
    #[error(transparent)]
    Discovery {
        /// The source of the error.
        #[from]
        source: DiscoveryError,
    },

    /// Dry run update failed the validation. Carries the auth method the
    /// update would have produced.
    #[error("dry run: {source}")]
    DryRun {
        auth_method: Box<AuthMethod>,
        source: Box<AuthMethodProviderError>,
    },

    /// Neither field mask nor null fields are given.
    #[error("empty field mask")]
    EmptyFieldMask,

    /// Invalid parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Auth method not found.
    #[error("auth method {0} not found")]
    RecordNotFound(String),

    /// Structures builder error.
    #[error(transparent)]
    StructBuilder {
        /// The source of the error.
        #[from]
        source: BuilderError,
    },

    /// Unknown error of the external dependency.
    #[error("unknown: {0}")]
    Unknown(String),

    /// Unsupported driver.
    #[error("unsupported driver {0}")]
    UnsupportedDriver(String),

    /// Stored version differs from the expected one.
    #[error("auth method {id} has been modified: version {version} is outdated")]
    VersionMismatch { id: String, version: u32 },
}

/// Kind of the [`AuthMethodProviderError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Conflict,
    EmptyFieldMask,
    InvalidParameter,
    RecordNotFound,
    Unknown,
    VersionMismatch,
}

impl AuthMethodProviderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::DryRun { source, .. } => source.kind(),
            Self::EmptyFieldMask => ErrorKind::EmptyFieldMask,
            Self::InvalidParameter(_) | Self::StructBuilder { .. } => ErrorKind::InvalidParameter,
            Self::RecordNotFound(_) => ErrorKind::RecordNotFound,
            Self::VersionMismatch { .. } => ErrorKind::VersionMismatch,
            Self::Backend { .. }
            | Self::Discovery { .. }
            | Self::Unknown(_)
            | Self::UnsupportedDriver(_) => ErrorKind::Unknown,
        }
    }
}

impl From<AuthMethodDatabaseError> for AuthMethodProviderError {
    fn from(source: AuthMethodDatabaseError) -> Self {
        match source {
            AuthMethodDatabaseError::Database { source } => match source {
                cfl @ DatabaseError::Conflict { .. } => Self::Conflict(cfl.to_string()),
                other => Self::Backend {
                    source: AuthMethodDatabaseError::Database { source: other },
                },
            },
            AuthMethodDatabaseError::AuthMethodNotFound(val) => Self::RecordNotFound(val),
            AuthMethodDatabaseError::VersionMismatch { id, version } => {
                Self::VersionMismatch { id, version }
            }
            _ => Self::Backend { source },
        }
    }
}
