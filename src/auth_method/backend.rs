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
//! Auth method provider Backend trait.
use async_trait::async_trait;

use crate::auth_method::{AuthMethodProviderError, types::*};
use crate::service::ServiceState;

pub mod error;
pub mod sql;

/// Changes of the auth method to be persisted by the backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthMethodUpdate {
    /// Auth method with the resulting scalar attributes.
    pub auth_method: AuthMethod,
    /// Version the stored record must have.
    pub version: u32,
    /// Value objects to be inserted.
    pub to_add: Vec<ValueObject>,
    /// Value objects to be removed.
    pub to_delete: Vec<ValueObject>,
}

/// AuthMethodBackend trait.
///
/// Backend driver interface expected by the auth method provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthMethodBackend: Send + Sync {
    /// Get the auth method with all its value objects.
    async fn get_auth_method<'a>(
        &self,
        state: &ServiceState,
        id: &'a str,
    ) -> Result<Option<AuthMethod>, AuthMethodProviderError>;

    /// Persist the auth method changes.
    ///
    /// Scalar attributes and value objects are written in a single
    /// transaction guarded by the expected version. The version is
    /// incremented and the audit record is written. Returns the stored auth
    /// method.
    async fn update_auth_method(
        &self,
        state: &ServiceState,
        update: AuthMethodUpdate,
    ) -> Result<AuthMethod, AuthMethodProviderError>;
}
