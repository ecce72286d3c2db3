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
//! # OIDC auth method types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth_method::error::AuthMethodProviderError;
use crate::error::BuilderError;

/// Operational state of the auth method.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationalState {
    /// Not used for authentication. May be incomplete.
    #[default]
    Inactive,
    /// Active, but not listed for unauthenticated users.
    ActivePrivate,
    /// Active and listed.
    ActivePublic,
}

impl OperationalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::ActivePrivate => "active-private",
            Self::ActivePublic => "active-public",
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

impl fmt::Display for OperationalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationalState {
    type Err = AuthMethodProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inactive" => Ok(Self::Inactive),
            "active-private" => Ok(Self::ActivePrivate),
            "active-public" => Ok(Self::ActivePublic),
            other => Err(AuthMethodProviderError::InvalidParameter(format!(
                "unknown operational state {other}"
            ))),
        }
    }
}

/// OIDC auth method.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct AuthMethod {
    /// Public ID of the auth method.
    #[validate(length(max = 64))]
    pub public_id: String,

    /// Scope owning the auth method.
    #[validate(length(max = 64))]
    pub scope_id: String,

    #[builder(default)]
    #[validate(length(max = 255))]
    pub name: Option<String>,

    #[builder(default)]
    #[validate(length(max = 1024))]
    pub description: Option<String>,

    #[builder(default)]
    pub operational_state: OperationalState,

    /// OIDC issuer url used for the provider discovery.
    #[builder(default)]
    #[validate(url)]
    pub discovery_url: Option<String>,

    #[builder(default)]
    #[validate(length(max = 255))]
    pub client_id: Option<String>,

    #[builder(default)]
    pub client_secret: Option<String>,

    /// Maximum allowable elapsed time in seconds since the last active
    /// authentication of the user.
    #[builder(default)]
    pub max_age: Option<i32>,

    /// Discovered configuration has not been validated for this auth method.
    #[builder(default)]
    pub disable_discovered_config_validation: bool,

    #[builder(default)]
    pub signing_algs: Vec<String>,

    /// PEM encoded certificates trusted for the provider connection.
    #[builder(default)]
    pub certificates: Vec<String>,

    #[builder(default)]
    pub aud_claims: Vec<String>,

    #[builder(default)]
    pub callback_urls: Vec<String>,

    #[builder(default)]
    pub version: u32,

    #[builder(default)]
    pub create_time: Option<DateTime<Utc>>,

    #[builder(default)]
    pub update_time: Option<DateTime<Utc>>,
}

impl AuthMethod {
    /// Verify the auth method carries everything required to be used as an
    /// OIDC provider.
    pub fn is_complete(&self) -> Result<(), AuthMethodProviderError> {
        let mut missing: Vec<&str> = Vec::new();
        if self.discovery_url.as_deref().is_none_or(str::is_empty) {
            missing.push("missing discovery url");
        }
        if self.client_id.as_deref().is_none_or(str::is_empty) {
            missing.push("missing client id");
        }
        if self.client_secret.as_deref().is_none_or(str::is_empty) {
            missing.push("missing client secret");
        }
        if self.signing_algs.is_empty() {
            missing.push("missing signing algorithms");
        }
        if self.callback_urls.is_empty() {
            missing.push("missing callback urls");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AuthMethodProviderError::InvalidParameter(format!(
                "auth method {} is incomplete: {}",
                self.public_id,
                missing.join("; ")
            )))
        }
    }
}

/// Options of the auth method update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateOptions {
    /// Attributes to be cleared.
    pub null_fields: Vec<String>,
    /// Skip the discovery validation of the active auth method and mark the
    /// result with `disable_discovered_config_validation`.
    pub force: bool,
    /// Compute the resulting auth method without persisting it.
    pub dry_run: bool,
}

/// Source of the auth method to validate against the discovered provider
/// configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidateDiscoveryOptions {
    /// In-memory auth method.
    pub auth_method: Option<AuthMethod>,
    /// Public id of the stored auth method. Ignored when `auth_method` is
    /// set.
    pub public_id: Option<String>,
}
