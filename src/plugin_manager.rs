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
//! # Plugin manager
//!
//! A driver, also known as a backend, is an abstraction around the data
//! access needed by a particular provider. The [PluginManager] is responsible
//! for picking the proper backend driver for the provider, and allows
//! replacing the OIDC discovery client.
use std::collections::HashMap;
use std::sync::Arc;

use crate::auth_method::backend::AuthMethodBackend;
use crate::auth_method::discovery::DiscoveryClient;

/// Plugin manager allowing to pass custom backend plugins implementing required
/// trait during the service start.
#[derive(Clone, Default)]
pub struct PluginManager {
    /// Auth method backend plugins.
    auth_method_backends: HashMap<String, Arc<dyn AuthMethodBackend>>,
    /// OIDC discovery client replacing the default one.
    discovery_client: Option<Arc<dyn DiscoveryClient>>,
}

impl PluginManager {
    /// Register auth method backend.
    pub fn register_auth_method_backend<S: AsRef<str>>(
        &mut self,
        name: S,
        plugin: Arc<dyn AuthMethodBackend>,
    ) {
        self.auth_method_backends
            .insert(name.as_ref().to_string(), plugin);
    }

    /// Register the OIDC discovery client.
    pub fn register_discovery_client(&mut self, client: Arc<dyn DiscoveryClient>) {
        self.discovery_client = Some(client);
    }

    /// Get registered auth method backend.
    pub fn get_auth_method_backend<S: AsRef<str>>(
        &self,
        name: S,
    ) -> Option<&Arc<dyn AuthMethodBackend>> {
        self.auth_method_backends.get(name.as_ref())
    }

    /// Get registered OIDC discovery client.
    pub fn get_discovery_client(&self) -> Option<&Arc<dyn DiscoveryClient>> {
        self.discovery_client.as_ref()
    }
}
