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
//! # Auth method update.

use tracing::{debug, warn};
use validator::Validate;

use super::AuthMethodProvider;
use super::backend::AuthMethodUpdate;
use super::error::AuthMethodProviderError;
use super::types::*;
use super::validate;
use crate::service::ServiceState;

impl AuthMethodProvider {
    /// Apply the masked attributes of `auth_method` to the stored auth method
    /// with the expected `version`.
    ///
    /// Returns the resulting auth method and the number of updated records.
    pub(super) async fn update(
        &self,
        state: &ServiceState,
        auth_method: &AuthMethod,
        version: u32,
        field_mask: &[String],
        options: &UpdateOptions,
    ) -> Result<(AuthMethod, u64), AuthMethodProviderError> {
        if auth_method.public_id.is_empty() {
            return Err(AuthMethodProviderError::InvalidParameter(
                "missing auth method public id".into(),
            ));
        }
        if field_mask.is_empty() && options.null_fields.is_empty() {
            return Err(AuthMethodProviderError::EmptyFieldMask);
        }
        let mask = validate_field_mask(field_mask)?;
        let null_fields = validate_field_mask(&options.null_fields)?;

        let orig = self
            .backend_driver
            .get_auth_method(state, &auth_method.public_id)
            .await?
            .ok_or_else(|| AuthMethodProviderError::RecordNotFound(auth_method.public_id.clone()))?;
        // Stored version is checked again by the backend within the transaction.
        if orig.version != version {
            return Err(AuthMethodProviderError::VersionMismatch {
                id: orig.public_id,
                version,
            });
        }

        let paths = build_update_paths(auth_method, &mask, &null_fields);
        let mut candidate = apply_update(auth_method, &orig, &paths.set);
        for field in &paths.null {
            field.clear(&mut candidate);
        }
        candidate
            .validate()
            .map_err(|err| AuthMethodProviderError::InvalidParameter(err.to_string()))?;

        let set_names = paths.set_names();
        let null_names = paths.null_names();
        let mut to_add: Vec<ValueObject> = Vec::new();
        let mut to_delete: Vec<ValueObject> = Vec::new();
        for (kind, new_values, old_values) in [
            (
                ValueObjectKind::SigningAlg,
                &candidate.signing_algs,
                &orig.signing_algs,
            ),
            (
                ValueObjectKind::Certificate,
                &candidate.certificates,
                &orig.certificates,
            ),
            (
                ValueObjectKind::AudClaim,
                &candidate.aud_claims,
                &orig.aud_claims,
            ),
            (
                ValueObjectKind::CallbackUrl,
                &candidate.callback_urls,
                &orig.callback_urls,
            ),
        ] {
            let changes = value_object_changes(
                &orig.public_id,
                kind.as_str(),
                new_values,
                old_values,
                &set_names,
                &null_names,
            )?;
            to_add.extend(changes.to_add);
            to_delete.extend(changes.to_delete);
        }

        if options.force {
            candidate.disable_discovered_config_validation = true;
        } else if candidate.operational_state.is_active() {
            match validate::validate_discovery_info(self.discovery.as_ref(), &candidate).await {
                Ok(()) => {
                    candidate.disable_discovered_config_validation = false;
                }
                Err(err) => {
                    warn!("auth method {} failed the validation: {err}", orig.public_id);
                    if options.dry_run {
                        return Err(AuthMethodProviderError::DryRun {
                            auth_method: Box::new(candidate),
                            source: Box::new(err),
                        });
                    }
                    return Err(err);
                }
            }
        }

        if to_add.is_empty() && to_delete.is_empty() && same_attributes(&candidate, &orig) {
            debug!("no changes for the auth method {}", orig.public_id);
            return Ok((orig, 0));
        }

        if options.dry_run {
            debug!("dry run update of the auth method {}", orig.public_id);
            return Ok((candidate, 0));
        }

        let updated = self
            .backend_driver
            .update_auth_method(
                state,
                AuthMethodUpdate {
                    auth_method: candidate,
                    version,
                    to_add,
                    to_delete,
                },
            )
            .await?;
        Ok((updated, 1))
    }
}

/// Compare the scalar attributes ignoring the value objects.
fn same_attributes(a: &AuthMethod, b: &AuthMethod) -> bool {
    a.name == b.name
        && a.description == b.description
        && a.operational_state == b.operational_state
        && a.discovery_url == b.discovery_url
        && a.client_id == b.client_id
        && a.client_secret == b.client_secret
        && a.max_age == b.max_age
        && a.disable_discovered_config_validation == b.disable_discovered_config_validation
}
