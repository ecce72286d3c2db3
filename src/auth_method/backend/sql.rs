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
//! Auth method: database backend.

use async_trait::async_trait;

use super::{AuthMethodBackend, AuthMethodUpdate};
use crate::auth_method::error::AuthMethodProviderError;
use crate::auth_method::types::*;
use crate::service::ServiceState;

mod audit;
mod auth_method;
mod value_object;

/// Sql Database auth method backend.
#[derive(Default)]
pub struct SqlBackend {}

#[async_trait]
impl AuthMethodBackend for SqlBackend {
    /// Get the auth method.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn get_auth_method<'a>(
        &self,
        state: &ServiceState,
        id: &'a str,
    ) -> Result<Option<AuthMethod>, AuthMethodProviderError> {
        Ok(auth_method::get(&state.db, id).await?)
    }

    /// Persist the auth method changes.
    #[tracing::instrument(level = "debug", skip_all, fields(id = %update.auth_method.public_id, version = update.version))]
    async fn update_auth_method(
        &self,
        state: &ServiceState,
        update: AuthMethodUpdate,
    ) -> Result<AuthMethod, AuthMethodProviderError> {
        Ok(auth_method::update(&state.db, update).await?)
    }
}
