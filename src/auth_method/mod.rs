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
//! # OIDC auth method provider.
//!
//! Versioned, field mask driven updates of the OIDC auth methods. Every update
//! merges the masked attributes over the stored auth method, reconciles the
//! value objects, validates the active auth method against the configuration
//! advertised by the OIDC provider and persists the result guarded by the
//! expected version.

use std::sync::Arc;

use async_trait::async_trait;

pub mod backend;
pub mod discovery;
pub mod error;
#[cfg(test)]
mod mock;
pub mod types;
mod update;
mod validate;

use crate::config::Config;
use crate::plugin_manager::PluginManager;
use crate::service::ServiceState;
use backend::{AuthMethodBackend, sql::SqlBackend};
use discovery::{DiscoveryClient, OidcDiscoveryClient};
use types::*;

pub use error::AuthMethodProviderError;
#[cfg(test)]
pub use mock::MockAuthMethodProvider;
pub use types::AuthMethodApi;

/// Auth method provider.
pub struct AuthMethodProvider {
    /// Backend driver.
    backend_driver: Arc<dyn AuthMethodBackend>,

    /// OIDC discovery client.
    discovery: Arc<dyn DiscoveryClient>,
}

impl AuthMethodProvider {
    pub fn new(
        config: &Config,
        plugin_manager: &PluginManager,
    ) -> Result<Self, AuthMethodProviderError> {
        let backend_driver = if let Some(driver) =
            plugin_manager.get_auth_method_backend(&config.auth_method.driver)
        {
            driver.clone()
        } else {
            match config.auth_method.driver.as_str() {
                "sql" => Arc::new(SqlBackend::default()),
                _ => {
                    return Err(AuthMethodProviderError::UnsupportedDriver(
                        config.auth_method.driver.clone(),
                    ));
                }
            }
        };
        let discovery = if let Some(client) = plugin_manager.get_discovery_client() {
            client.clone()
        } else {
            Arc::new(OidcDiscoveryClient::new(config)?)
        };
        Ok(Self {
            backend_driver,
            discovery,
        })
    }
}

#[async_trait]
impl AuthMethodApi for AuthMethodProvider {
    /// Get the auth method.
    #[tracing::instrument(skip(self, state))]
    async fn get_auth_method<'a>(
        &self,
        state: &ServiceState,
        id: &'a str,
    ) -> Result<Option<AuthMethod>, AuthMethodProviderError> {
        self.backend_driver.get_auth_method(state, id).await
    }

    /// Update the auth method.
    #[tracing::instrument(skip(self, state, auth_method), fields(id = %auth_method.public_id))]
    async fn update_auth_method(
        &self,
        state: &ServiceState,
        auth_method: &AuthMethod,
        version: u32,
        field_mask: &[String],
        options: &UpdateOptions,
    ) -> Result<(AuthMethod, u64), AuthMethodProviderError> {
        self.update(state, auth_method, version, field_mask, options)
            .await
    }

    /// Validate the auth method against the discovered provider
    /// configuration.
    #[tracing::instrument(skip_all)]
    async fn validate_discovery_info(
        &self,
        state: &ServiceState,
        options: &ValidateDiscoveryOptions,
    ) -> Result<(), AuthMethodProviderError> {
        let loaded;
        let auth_method = match (&options.auth_method, &options.public_id) {
            (Some(auth_method), _) => auth_method,
            (None, Some(id)) => {
                loaded = self
                    .backend_driver
                    .get_auth_method(state, id)
                    .await?
                    .ok_or_else(|| AuthMethodProviderError::RecordNotFound(id.clone()))?;
                &loaded
            }
            (None, None) => {
                return Err(AuthMethodProviderError::InvalidParameter(
                    "neither auth method nor public id is given".into(),
                ));
            }
        };
        validate::validate_discovery_info(self.discovery.as_ref(), auth_method).await
    }
}
