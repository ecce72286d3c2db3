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
//! Update the existing auth method.

use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::query::*;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use super::{db_version, get};
use crate::auth_method::backend::{
    AuthMethodUpdate,
    error::AuthMethodDatabaseError,
    sql::{audit, value_object},
};
use crate::auth_method::types::AuthMethod;
use crate::db::entity::{oidc_auth_method as db_auth_method, prelude::OidcAuthMethod};
use crate::error::DbContextExt;

/// Update the auth method guarded by the expected version.
///
/// Scalar columns, value objects and the audit record are written in an
/// isolated transaction. Any error before the commit rolls it back.
pub async fn update(
    db: &DatabaseConnection,
    update: AuthMethodUpdate,
) -> Result<AuthMethod, AuthMethodDatabaseError> {
    let id = update.auth_method.public_id.clone();
    let expected_version = db_version(&id, update.version)?;
    let new_version = db_version(&id, update.version.saturating_add(1))?;
    let now = Utc::now().naive_utc();

    let txn = db
        .begin()
        .await
        .context("starting transaction for updating oidc auth method")?;

    let res = OidcAuthMethod::update_many()
        .set(update.auth_method.to_active_model_update(new_version, now))
        .filter(db_auth_method::Column::PublicId.eq(id.as_str()))
        .filter(db_auth_method::Column::Version.eq(expected_version))
        .exec(&txn)
        .await
        .context("updating oidc auth method")?;
    if res.rows_affected == 0 {
        let exists = OidcAuthMethod::find_by_id(id.as_str())
            .one(&txn)
            .await
            .context("searching for the oidc auth method after the failed update")?
            .is_some();
        return Err(if exists {
            AuthMethodDatabaseError::VersionMismatch {
                id,
                version: update.version,
            }
        } else {
            AuthMethodDatabaseError::AuthMethodNotFound(id)
        });
    }

    let deleted = value_object::delete(&txn, &id, &update.to_delete).await?;
    let inserted = value_object::insert(&txn, &update.to_add).await?;
    debug!(deleted, inserted, "value objects of the auth method updated");

    audit::create(
        &txn,
        &id,
        audit::OPERATION_UPDATE,
        new_version,
        now,
    )
    .await?;

    let stored = get(&txn, &id)
        .await?
        .ok_or_else(|| AuthMethodDatabaseError::AuthMethodNotFound(id.clone()))?;

    txn.commit()
        .await
        .context("committing the oidc auth method update transaction")?;
    Ok(stored)
}
