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
//! # Provider manager
//!
//! Provider manager provides access to the individual service providers while
//! also allowing an easy injection of mocked providers.
use derive_builder::Builder;
use mockall_double::double;

use crate::auth_method::AuthMethodApi;
#[double]
use crate::auth_method::AuthMethodProvider;
use crate::config::Config;
use crate::error::ServiceError;
use crate::plugin_manager::PluginManager;

/// Global provider manager.
#[derive(Builder)]
// It is necessary to use the owned pattern since otherwise builder invokes clone which immediately
// confuses mockall used in tests
#[builder(pattern = "owned")]
pub struct Provider {
    /// Configuration.
    pub config: Config,
    /// Auth method provider.
    auth_method: AuthMethodProvider,
}

impl Provider {
    pub fn new(cfg: Config, plugin_manager: PluginManager) -> Result<Self, ServiceError> {
        let auth_method_provider = AuthMethodProvider::new(&cfg, &plugin_manager)?;

        Ok(Self {
            config: cfg,
            auth_method: auth_method_provider,
        })
    }

    /// Get the auth method provider.
    pub fn get_auth_method_provider(&self) -> &impl AuthMethodApi {
        &self.auth_method
    }
}

#[cfg(test)]
impl Provider {
    pub fn mocked_builder() -> ProviderBuilder {
        let config = Config::default();
        let auth_method_mock = crate::auth_method::MockAuthMethodProvider::default();

        ProviderBuilder::default()
            .config(config)
            .auth_method(auth_method_mock)
    }
}
