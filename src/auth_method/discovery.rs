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
//! # OIDC provider discovery.
//!
//! Client fetching the provider metadata of the issuer and checking the
//! reachability of the provider JWKS endpoint.

use std::time::Duration;

use async_trait::async_trait;
use openidconnect::core::CoreProviderMetadata;
use openidconnect::{IssuerUrl, reqwest};
use thiserror::Error;

use crate::config::Config;

/// Subset of the discovered OIDC provider metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProviderMetadata {
    pub issuer: String,
    pub jwks_uri: String,
    /// JWS algorithms supported for the ID token signature.
    pub signing_algs_supported: Vec<String>,
}

/// Discovery client error.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("discovery error: {msg}")]
    Discovery { msg: String },

    #[error(transparent)]
    OpenIdConnectReqwest {
        #[from]
        source: reqwest::Error,
    },

    #[error("request to {url} failed: {msg}")]
    Transport { url: String, msg: String },

    #[error(transparent)]
    UrlParse {
        #[from]
        source: url::ParseError,
    },
}

impl DiscoveryError {
    pub fn discovery<T: std::error::Error>(fail: &T) -> Self {
        Self::Discovery {
            msg: fail.to_string(),
        }
    }
}

/// OIDC provider discovery client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiscoveryClient: Send + Sync {
    /// Fetch and validate the metadata document of the issuer.
    async fn discover(&self, issuer: &str) -> Result<ProviderMetadata, DiscoveryError>;

    /// Issue the GET request to the JWKS endpoint returning the response
    /// status code.
    async fn ping_jwks(&self, jwks_uri: &str) -> Result<u16, DiscoveryError>;
}

/// Discovery client using `openidconnect` on top of `reqwest`.
pub struct OidcDiscoveryClient {
    http_client: reqwest::Client,
}

impl OidcDiscoveryClient {
    pub fn new(config: &Config) -> Result<Self, DiscoveryError> {
        let http_client = reqwest::ClientBuilder::new()
            // Following redirects opens the client up to SSRF vulnerabilities.
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(config.oidc.discovery_timeout))
            .build()?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl DiscoveryClient for OidcDiscoveryClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn discover(&self, issuer: &str) -> Result<ProviderMetadata, DiscoveryError> {
        let metadata = CoreProviderMetadata::discover_async(
            IssuerUrl::new(issuer.to_string())?,
            &self.http_client,
        )
        .await
        .map_err(|err| DiscoveryError::discovery(&err))?;

        let signing_algs_supported = metadata
            .id_token_signing_alg_values_supported()
            .iter()
            .filter_map(|alg| {
                serde_json::to_value(alg)
                    .ok()
                    .and_then(|val| val.as_str().map(String::from))
            })
            .collect();

        Ok(ProviderMetadata {
            issuer: metadata.issuer().url().to_string(),
            jwks_uri: metadata.jwks_uri().url().to_string(),
            signing_algs_supported,
        })
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn ping_jwks(&self, jwks_uri: &str) -> Result<u16, DiscoveryError> {
        let response = self
            .http_client
            .get(jwks_uri)
            .send()
            .await
            .map_err(|err| DiscoveryError::Transport {
                url: jwks_uri.to_string(),
                msg: err.to_string(),
            })?;
        Ok(response.status().as_u16())
    }
}
