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
//! # Error
//!
//! Errors shared by the providers of the service (not tied to a single
//! provider).
use sea_orm::SqlErr;
use thiserror::Error;

use crate::auth_method::error::AuthMethodProviderError;

/// Service error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Auth method provider error.
    #[error(transparent)]
    AuthMethodProvider {
        /// The source of the error.
        #[from]
        source: AuthMethodProviderError,
    },
}

/// Database error with the context of the operation.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Unique or foreign key constraint violation.
    #[error("{message} while {context}")]
    Conflict { message: String, context: String },

    /// Other SQL level error.
    #[error("{message} while {context}")]
    Sql { message: String, context: String },

    /// Database error.
    #[error("database error while {context}")]
    Database {
        source: sea_orm::DbErr,
        context: String,
    },
}

/// Attach the context to the [`sea_orm::DbErr`] converting it into the
/// [`DatabaseError`].
pub trait DbContextExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T, DatabaseError>;
}

impl<T> DbContextExt<T> for Result<T, sea_orm::DbErr> {
    fn context(self, context: impl Into<String>) -> Result<T, DatabaseError> {
        self.map_err(|err| db_err(err, context.into()))
    }
}

/// Convert the DB error into the [`DatabaseError`] with the context
/// information.
pub fn db_err(e: sea_orm::DbErr, context: String) -> DatabaseError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(descr))
        | Some(SqlErr::ForeignKeyConstraintViolation(descr)) => DatabaseError::Conflict {
            message: descr.to_string(),
            context,
        },
        Some(other) => DatabaseError::Sql {
            message: other.to_string(),
            context,
        },
        None => DatabaseError::Database { source: e, context },
    }
}

/// Builder error.
///
/// Used as the error type of the `derive_builder` generated builders.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Uninitialized field.
    #[error("{0}")]
    UninitializedField(String),

    /// Custom validation error.
    #[error("{0}")]
    Validation(String),
}

impl From<String> for BuilderError {
    fn from(s: String) -> Self {
        Self::Validation(s)
    }
}

impl From<derive_builder::UninitializedFieldError> for BuilderError {
    fn from(ufe: derive_builder::UninitializedFieldError) -> Self {
        Self::UninitializedField(ufe.to_string())
    }
}
