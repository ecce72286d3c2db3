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
//! # Auth method field mask.
//!
//! The closed set of auth method attributes that can be changed by the
//! update. Operational state, version, identity and timestamps are not part
//! of it.

use std::fmt;
use std::str::FromStr;

use crate::auth_method::error::AuthMethodProviderError;
use crate::auth_method::types::{AuthMethod, ValueObjectKind};

/// Updatable attribute of the [`AuthMethod`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AuthMethodField {
    Name,
    Description,
    DiscoveryUrl,
    ClientId,
    ClientSecret,
    MaxAge,
    SigningAlgs,
    CallbackUrls,
    AudClaims,
    Certificates,
}

impl AuthMethodField {
    pub const ALL: [AuthMethodField; 10] = [
        AuthMethodField::Name,
        AuthMethodField::Description,
        AuthMethodField::DiscoveryUrl,
        AuthMethodField::ClientId,
        AuthMethodField::ClientSecret,
        AuthMethodField::MaxAge,
        AuthMethodField::SigningAlgs,
        AuthMethodField::CallbackUrls,
        AuthMethodField::AudClaims,
        AuthMethodField::Certificates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
            Self::DiscoveryUrl => "DiscoveryUrl",
            Self::ClientId => "ClientId",
            Self::ClientSecret => "ClientSecret",
            Self::MaxAge => "MaxAge",
            Self::SigningAlgs => "SigningAlgs",
            Self::CallbackUrls => "CallbackUrls",
            Self::AudClaims => "AudClaims",
            Self::Certificates => "Certificates",
        }
    }

    /// Value object kind stored by the attribute.
    pub fn value_object_kind(&self) -> Option<ValueObjectKind> {
        match self {
            Self::SigningAlgs => Some(ValueObjectKind::SigningAlg),
            Self::CallbackUrls => Some(ValueObjectKind::CallbackUrl),
            Self::AudClaims => Some(ValueObjectKind::AudClaim),
            Self::Certificates => Some(ValueObjectKind::Certificate),
            _ => None,
        }
    }

    /// Copy the attribute value from `from` into `to`.
    pub fn copy(&self, from: &AuthMethod, to: &mut AuthMethod) {
        match self {
            Self::Name => to.name.clone_from(&from.name),
            Self::Description => to.description.clone_from(&from.description),
            Self::DiscoveryUrl => to.discovery_url.clone_from(&from.discovery_url),
            Self::ClientId => to.client_id.clone_from(&from.client_id),
            Self::ClientSecret => to.client_secret.clone_from(&from.client_secret),
            Self::MaxAge => to.max_age = from.max_age,
            Self::SigningAlgs => to.signing_algs.clone_from(&from.signing_algs),
            Self::CallbackUrls => to.callback_urls.clone_from(&from.callback_urls),
            Self::AudClaims => to.aud_claims.clone_from(&from.aud_claims),
            Self::Certificates => to.certificates.clone_from(&from.certificates),
        }
    }

    /// Reset the attribute of the `target` to the empty value.
    pub fn clear(&self, target: &mut AuthMethod) {
        match self {
            Self::Name => target.name = None,
            Self::Description => target.description = None,
            Self::DiscoveryUrl => target.discovery_url = None,
            Self::ClientId => target.client_id = None,
            Self::ClientSecret => target.client_secret = None,
            Self::MaxAge => target.max_age = None,
            Self::SigningAlgs => target.signing_algs.clear(),
            Self::CallbackUrls => target.callback_urls.clear(),
            Self::AudClaims => target.aud_claims.clear(),
            Self::Certificates => target.certificates.clear(),
        }
    }

    /// Whether the attribute of the `auth_method` holds no value.
    pub fn is_empty(&self, auth_method: &AuthMethod) -> bool {
        match self {
            Self::Name => auth_method.name.as_deref().is_none_or(str::is_empty),
            Self::Description => auth_method.description.as_deref().is_none_or(str::is_empty),
            Self::DiscoveryUrl => auth_method
                .discovery_url
                .as_deref()
                .is_none_or(str::is_empty),
            Self::ClientId => auth_method.client_id.as_deref().is_none_or(str::is_empty),
            Self::ClientSecret => auth_method
                .client_secret
                .as_deref()
                .is_none_or(str::is_empty),
            Self::MaxAge => auth_method.max_age.is_none(),
            Self::SigningAlgs => auth_method.signing_algs.is_empty(),
            Self::CallbackUrls => auth_method.callback_urls.is_empty(),
            Self::AudClaims => auth_method.aud_claims.is_empty(),
            Self::Certificates => auth_method.certificates.is_empty(),
        }
    }
}

impl fmt::Display for AuthMethodField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMethodField {
    type Err = AuthMethodProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                AuthMethodProviderError::InvalidParameter(format!("invalid field mask: {s}"))
            })
    }
}

/// Verify every entry of the mask names an updatable attribute.
pub fn validate_field_mask<S: AsRef<str>>(
    field_mask: &[S],
) -> Result<Vec<AuthMethodField>, AuthMethodProviderError> {
    field_mask
        .iter()
        .map(|entry| AuthMethodField::from_str(entry.as_ref()))
        .collect()
}

/// Merge the masked attributes of `new` over the copy of `orig`.
pub fn apply_update(
    new: &AuthMethod,
    orig: &AuthMethod,
    field_mask: &[AuthMethodField],
) -> AuthMethod {
    let mut merged = orig.clone();
    for field in field_mask {
        field.copy(new, &mut merged);
    }
    merged
}

/// Attributes to be set and attributes to be cleared by the update.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UpdatePaths {
    pub set: Vec<AuthMethodField>,
    pub null: Vec<AuthMethodField>,
}

impl UpdatePaths {
    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.null.is_empty()
    }

    /// Names of the attributes to be set.
    pub fn set_names(&self) -> Vec<&'static str> {
        self.set.iter().map(AuthMethodField::as_str).collect()
    }

    /// Names of the attributes to be cleared.
    pub fn null_names(&self) -> Vec<&'static str> {
        self.null.iter().map(AuthMethodField::as_str).collect()
    }
}

/// Split the field mask into the attributes to set and the attributes to
/// clear. A masked attribute with an empty value in `new` is cleared.
pub fn build_update_paths(
    new: &AuthMethod,
    field_mask: &[AuthMethodField],
    null_fields: &[AuthMethodField],
) -> UpdatePaths {
    let mut paths = UpdatePaths::default();
    for field in field_mask {
        if field.is_empty(new) {
            if !paths.null.contains(field) {
                paths.null.push(*field);
            }
        } else if !paths.set.contains(field) {
            paths.set.push(*field);
        }
    }
    for field in null_fields {
        if !paths.null.contains(field) {
            paths.null.push(*field);
        }
    }
    paths.set.retain(|field| !paths.null.contains(field));
    paths
}
