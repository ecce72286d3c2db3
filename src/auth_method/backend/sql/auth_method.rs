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
//! Auth method records.

use chrono::NaiveDateTime;
use sea_orm::entity::*;

use super::value_object::StoredValueObjects;
use crate::auth_method::backend::error::AuthMethodDatabaseError;
use crate::auth_method::types::*;
use crate::db::entity::oidc_auth_method as db_auth_method;

mod get;
mod update;

pub use get::get;
pub use update::update;

/// Convert the domain version into the column value.
pub(super) fn db_version(id: &str, version: u32) -> Result<i32, AuthMethodDatabaseError> {
    i32::try_from(version).map_err(|_| AuthMethodDatabaseError::InvalidVersion {
        id: id.to_string(),
        version: version.into(),
    })
}

impl db_auth_method::Model {
    /// Build the [`AuthMethod`] from the stored record and its value objects.
    fn into_auth_method(
        self,
        value_objects: StoredValueObjects,
    ) -> Result<AuthMethod, AuthMethodDatabaseError> {
        let operational_state = self
            .operational_state
            .parse::<OperationalState>()
            .map_err(|_| {
                AuthMethodDatabaseError::InvalidOperationalState(self.operational_state.clone())
            })?;
        let version =
            u32::try_from(self.version).map_err(|_| AuthMethodDatabaseError::InvalidVersion {
                id: self.public_id.clone(),
                version: self.version.into(),
            })?;
        Ok(AuthMethod {
            public_id: self.public_id,
            scope_id: self.scope_id,
            name: self.name,
            description: self.description,
            operational_state,
            discovery_url: self.discovery_url,
            client_id: self.client_id,
            client_secret: self.client_secret,
            max_age: self.max_age,
            disable_discovered_config_validation: self.disable_discovered_config_validation,
            signing_algs: value_objects.signing_algs,
            certificates: value_objects.certificates,
            aud_claims: value_objects.aud_claims,
            callback_urls: value_objects.callback_urls,
            version,
            create_time: Some(self.create_time.and_utc()),
            update_time: Some(self.update_time.and_utc()),
        })
    }
}

impl AuthMethod {
    /// Build an [`db_auth_method::ActiveModel`] setting every updatable
    /// column together with the new version.
    fn to_active_model_update(
        &self,
        version: i32,
        update_time: NaiveDateTime,
    ) -> db_auth_method::ActiveModel {
        db_auth_method::ActiveModel {
            name: Set(self.name.clone()),
            description: Set(self.description.clone()),
            discovery_url: Set(self.discovery_url.clone()),
            client_id: Set(self.client_id.clone()),
            client_secret: Set(self.client_secret.clone()),
            max_age: Set(self.max_age),
            disable_discovered_config_validation: Set(self.disable_discovered_config_validation),
            version: Set(version),
            update_time: Set(update_time),
            ..Default::default()
        }
    }
}
