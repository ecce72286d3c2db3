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
//! # Auth method validation against the discovered provider configuration.

use tracing::debug;

use crate::auth_method::discovery::DiscoveryClient;
use crate::auth_method::error::AuthMethodProviderError;
use crate::auth_method::types::AuthMethod;

/// Validate the auth method against the discovered provider configuration.
///
/// Checks are performed in order: completeness of the auth method, discovery
/// of the issuer metadata (the advertised issuer must match the discovery
/// url), support of every configured signing algorithm by the provider and the
/// reachability of the provider JWKS endpoint.
#[tracing::instrument(level = "debug", skip_all, fields(id = %auth_method.public_id))]
pub async fn validate_discovery_info(
    discovery: &dyn DiscoveryClient,
    auth_method: &AuthMethod,
) -> Result<(), AuthMethodProviderError> {
    auth_method.is_complete()?;
    let issuer = auth_method.discovery_url.as_deref().unwrap_or_default();

    let metadata = discovery.discover(issuer).await.map_err(|err| {
        AuthMethodProviderError::InvalidParameter(format!(
            "auth method cannot be converted to a valid OIDC provider: {err}"
        ))
    })?;
    if metadata.issuer.trim_end_matches('/') != issuer.trim_end_matches('/') {
        return Err(AuthMethodProviderError::InvalidParameter(format!(
            "discovered issuer {} does not match the discovery url {issuer}",
            metadata.issuer
        )));
    }

    let unsupported: Vec<&str> = auth_method
        .signing_algs
        .iter()
        .filter(|alg| !metadata.signing_algs_supported.contains(*alg))
        .map(String::as_str)
        .collect();
    if !unsupported.is_empty() {
        return Err(AuthMethodProviderError::InvalidParameter(format!(
            "signing algorithms {} are not supported by the provider {issuer}",
            unsupported.join(", ")
        )));
    }

    let status = discovery
        .ping_jwks(&metadata.jwks_uri)
        .await
        .map_err(|err| {
            AuthMethodProviderError::Unknown(format!(
                "unable to reach the JWKS endpoint {}: {err}",
                metadata.jwks_uri
            ))
        })?;
    if status != 200 {
        return Err(AuthMethodProviderError::Unknown(format!(
            "non-200 status {status} returned by the JWKS endpoint {}",
            metadata.jwks_uri
        )));
    }
    debug!("auth method matches the discovered provider configuration");
    Ok(())
}
