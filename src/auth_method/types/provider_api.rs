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
//! Auth method provider interface.

use async_trait::async_trait;

use crate::auth_method::{AuthMethodProviderError, types::*};
use crate::service::ServiceState;

/// Auth method Provider interface.
#[async_trait]
pub trait AuthMethodApi: Send + Sync {
    /// Get the auth method with its value objects by the public ID.
    async fn get_auth_method<'a>(
        &self,
        state: &ServiceState,
        id: &'a str,
    ) -> Result<Option<AuthMethod>, AuthMethodProviderError>;

    /// Update the auth method.
    ///
    /// Only the attributes named in the `field_mask` (set from the
    /// `auth_method`) and in the `options.null_fields` (cleared) are
    /// changed. The `version` must match the stored version. Returns the
    /// resulting auth method and the number of updated records, which is `0`
    /// when nothing changed or for the dry run.
    async fn update_auth_method(
        &self,
        state: &ServiceState,
        auth_method: &AuthMethod,
        version: u32,
        field_mask: &[String],
        options: &UpdateOptions,
    ) -> Result<(AuthMethod, u64), AuthMethodProviderError>;

    /// Validate the auth method against the configuration advertised by the
    /// OIDC provider.
    async fn validate_discovery_info(
        &self,
        state: &ServiceState,
        options: &ValidateDiscoveryOptions,
    ) -> Result<(), AuthMethodProviderError>;
}
