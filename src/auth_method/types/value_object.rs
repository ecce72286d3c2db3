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
//! # Auth method value objects.
//!
//! Multi-valued attributes of the auth method (signing algorithms, trusted
//! certificates, audience claims and callback urls). Every value object is
//! owned by the auth method and identified by the parent public id together
//! with the value.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::auth_method::error::AuthMethodProviderError;

const PEM_CERTIFICATE_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_CERTIFICATE_END: &str = "-----END CERTIFICATE-----";
/// Width of the audience claim column.
pub const MAX_AUD_CLAIM_LEN: usize = 255;

/// Value object kind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum ValueObjectKind {
    SigningAlg,
    Certificate,
    AudClaim,
    CallbackUrl,
}

impl ValueObjectKind {
    pub const ALL: [ValueObjectKind; 4] = [
        ValueObjectKind::SigningAlg,
        ValueObjectKind::Certificate,
        ValueObjectKind::AudClaim,
        ValueObjectKind::CallbackUrl,
    ];

    /// Name of the kind. Matches the name of the auth method attribute holding
    /// the values of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SigningAlg => "SigningAlgs",
            Self::Certificate => "Certificates",
            Self::AudClaim => "AudClaims",
            Self::CallbackUrl => "CallbackUrls",
        }
    }
}

impl fmt::Display for ValueObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueObjectKind {
    type Err = AuthMethodProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                AuthMethodProviderError::InvalidParameter(format!(
                    "unknown value object kind {s}"
                ))
            })
    }
}

/// JWS signing algorithm accepted for the ID token verification.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum SigningAlgorithm {
    RS256,
    RS384,
    RS512,
    ES256,
    ES384,
    ES512,
    PS256,
    PS384,
    PS512,
    EdDSA,
}

impl SigningAlgorithm {
    pub const ALL: [SigningAlgorithm; 10] = [
        SigningAlgorithm::RS256,
        SigningAlgorithm::RS384,
        SigningAlgorithm::RS512,
        SigningAlgorithm::ES256,
        SigningAlgorithm::ES384,
        SigningAlgorithm::ES512,
        SigningAlgorithm::PS256,
        SigningAlgorithm::PS384,
        SigningAlgorithm::PS512,
        SigningAlgorithm::EdDSA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RS256 => "RS256",
            Self::RS384 => "RS384",
            Self::RS512 => "RS512",
            Self::ES256 => "ES256",
            Self::ES384 => "ES384",
            Self::ES512 => "ES512",
            Self::PS256 => "PS256",
            Self::PS384 => "PS384",
            Self::PS512 => "PS512",
            Self::EdDSA => "EdDSA",
        }
    }
}

impl FromStr for SigningAlgorithm {
    type Err = AuthMethodProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| {
                AuthMethodProviderError::InvalidParameter(format!(
                    "unsupported signing algorithm {s}"
                ))
            })
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value object of the auth method.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum ValueObject {
    SigningAlg {
        auth_method_id: String,
        alg: SigningAlgorithm,
    },
    Certificate {
        auth_method_id: String,
        cert: String,
    },
    AudClaim {
        auth_method_id: String,
        aud: String,
    },
    CallbackUrl {
        auth_method_id: String,
        url: String,
    },
}

impl ValueObject {
    /// Construct the value object of the `kind` owned by the `auth_method_id`
    /// validating the value.
    pub fn new<I: Into<String>, V: AsRef<str>>(
        kind: ValueObjectKind,
        auth_method_id: I,
        value: V,
    ) -> Result<Self, AuthMethodProviderError> {
        let auth_method_id = auth_method_id.into();
        if auth_method_id.is_empty() {
            return Err(AuthMethodProviderError::InvalidParameter(
                "missing auth method id".into(),
            ));
        }
        let value = value.as_ref();
        Ok(match kind {
            ValueObjectKind::SigningAlg => Self::SigningAlg {
                auth_method_id,
                alg: SigningAlgorithm::from_str(value)?,
            },
            ValueObjectKind::Certificate => {
                validate_pem_certificate(value)?;
                Self::Certificate {
                    auth_method_id,
                    cert: value.to_string(),
                }
            }
            ValueObjectKind::AudClaim => {
                if value.is_empty() {
                    return Err(AuthMethodProviderError::InvalidParameter(
                        "empty audience claim".into(),
                    ));
                }
                if value.chars().count() > MAX_AUD_CLAIM_LEN {
                    return Err(AuthMethodProviderError::InvalidParameter(format!(
                        "audience claim is longer than {MAX_AUD_CLAIM_LEN} characters"
                    )));
                }
                Self::AudClaim {
                    auth_method_id,
                    aud: value.to_string(),
                }
            }
            ValueObjectKind::CallbackUrl => {
                Url::parse(value).map_err(|err| {
                    AuthMethodProviderError::InvalidParameter(format!(
                        "invalid callback url {value}: {err}"
                    ))
                })?;
                Self::CallbackUrl {
                    auth_method_id,
                    url: value.to_string(),
                }
            }
        })
    }

    pub fn kind(&self) -> ValueObjectKind {
        match self {
            Self::SigningAlg { .. } => ValueObjectKind::SigningAlg,
            Self::Certificate { .. } => ValueObjectKind::Certificate,
            Self::AudClaim { .. } => ValueObjectKind::AudClaim,
            Self::CallbackUrl { .. } => ValueObjectKind::CallbackUrl,
        }
    }

    pub fn auth_method_id(&self) -> &str {
        match self {
            Self::SigningAlg { auth_method_id, .. }
            | Self::Certificate { auth_method_id, .. }
            | Self::AudClaim { auth_method_id, .. }
            | Self::CallbackUrl { auth_method_id, .. } => auth_method_id,
        }
    }

    /// Raw value as stored in the database.
    pub fn value(&self) -> &str {
        match self {
            Self::SigningAlg { alg, .. } => alg.as_str(),
            Self::Certificate { cert, .. } => cert,
            Self::AudClaim { aud, .. } => aud,
            Self::CallbackUrl { url, .. } => url,
        }
    }
}

fn validate_pem_certificate(value: &str) -> Result<(), AuthMethodProviderError> {
    let trimmed = value.trim();
    let body = trimmed
        .strip_prefix(PEM_CERTIFICATE_BEGIN)
        .and_then(|rest| rest.strip_suffix(PEM_CERTIFICATE_END));
    match body {
        Some(body) if !body.trim().is_empty() => Ok(()),
        _ => Err(AuthMethodProviderError::InvalidParameter(
            "certificate is not a PEM encoded CERTIFICATE block".into(),
        )),
    }
}

/// Value objects to be added and deleted for a single kind.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValueObjectChanges {
    /// New values in the order of the first occurrence in the new set.
    pub to_add: Vec<ValueObject>,
    /// Removed values sorted by value.
    pub to_delete: Vec<ValueObject>,
}

impl ValueObjectChanges {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_delete.is_empty()
    }
}

/// Calculate the value objects of the `kind` that must be added and deleted
/// to turn `old_values` into `new_values`.
///
/// Nothing changes unless the kind is named in the `db_mask` or the
/// `null_fields`. When named in the `null_fields` all the old values are
/// deleted.
pub fn value_object_changes<S: AsRef<str>>(
    parent_id: &str,
    kind: &str,
    new_values: &[String],
    old_values: &[String],
    db_mask: &[S],
    null_fields: &[S],
) -> Result<ValueObjectChanges, AuthMethodProviderError> {
    if parent_id.is_empty() {
        return Err(AuthMethodProviderError::InvalidParameter(
            "missing auth method public id".into(),
        ));
    }
    let kind = ValueObjectKind::from_str(kind)?;

    let named = |fields: &[S]| {
        fields
            .iter()
            .any(|field| field.as_ref().eq_ignore_ascii_case(kind.as_str()))
    };
    let nulled = named(null_fields);
    if !nulled && !named(db_mask) {
        return Ok(ValueObjectChanges::default());
    }

    let new_values: &[String] = if nulled { &[] } else { new_values };
    let new_set = unique_set(kind, "new", new_values)?;
    let old_set = unique_set(kind, "old", old_values)?;

    let to_add = new_values
        .iter()
        .filter(|val| !old_set.contains(val.as_str()))
        .map(|val| ValueObject::new(kind, parent_id, val))
        .collect::<Result<Vec<_>, _>>()?;

    let mut removed: Vec<&String> = old_values
        .iter()
        .filter(|val| !new_set.contains(val.as_str()))
        .collect();
    removed.sort();
    let to_delete = removed
        .into_iter()
        .map(|val| ValueObject::new(kind, parent_id, val))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValueObjectChanges { to_add, to_delete })
}

fn unique_set<'a>(
    kind: ValueObjectKind,
    label: &str,
    values: &'a [String],
) -> Result<HashSet<&'a str>, AuthMethodProviderError> {
    let mut set = HashSet::with_capacity(values.len());
    for val in values {
        if !set.insert(val.as_str()) {
            return Err(AuthMethodProviderError::InvalidParameter(format!(
                "duplicate {label} {kind}: {val}"
            )));
        }
    }
    Ok(set)
}
