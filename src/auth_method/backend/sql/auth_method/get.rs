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
//! Get existing auth method.
use sea_orm::ConnectionTrait;
use sea_orm::entity::*;

use crate::auth_method::backend::{error::AuthMethodDatabaseError, sql::value_object};
use crate::auth_method::types::AuthMethod;
use crate::db::entity::prelude::OidcAuthMethod;
use crate::error::DbContextExt;

/// Get existing auth method with its value objects by the public ID.
pub async fn get<C: ConnectionTrait, S: AsRef<str>>(
    db: &C,
    id: S,
) -> Result<Option<AuthMethod>, AuthMethodDatabaseError> {
    let Some(record) = OidcAuthMethod::find_by_id(id.as_ref())
        .one(db)
        .await
        .context("reading oidc auth method record")?
    else {
        return Ok(None);
    };
    let value_objects = value_object::list(db, id.as_ref()).await?;
    Ok(Some(record.into_auth_method(value_objects)?))
}
