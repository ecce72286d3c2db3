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

use async_trait::async_trait;
use mockall::mock;

use crate::auth_method::AuthMethodApi;
use crate::auth_method::error::AuthMethodProviderError;
use crate::auth_method::types::{AuthMethod, UpdateOptions, ValidateDiscoveryOptions};
use crate::config::Config;
use crate::plugin_manager::PluginManager;
use crate::service::ServiceState;

mock! {
    pub AuthMethodProvider {
        pub fn new(cfg: &Config, plugin_manager: &PluginManager) -> Result<Self, AuthMethodProviderError>;
    }

    #[async_trait]
    impl AuthMethodApi for AuthMethodProvider {
        async fn get_auth_method<'a>(
            &self,
            state: &ServiceState,
            id: &'a str,
        ) -> Result<Option<AuthMethod>, AuthMethodProviderError>;

        async fn update_auth_method(
            &self,
            state: &ServiceState,
            auth_method: &AuthMethod,
            version: u32,
            field_mask: &[String],
            options: &UpdateOptions,
        ) -> Result<(AuthMethod, u64), AuthMethodProviderError>;

        async fn validate_discovery_info(
            &self,
            state: &ServiceState,
            options: &ValidateDiscoveryOptions,
        ) -> Result<(), AuthMethodProviderError>;
    }
}
