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
//! Auth method audit records.

use chrono::NaiveDateTime;
use sea_orm::ConnectionTrait;
use sea_orm::entity::*;

use crate::auth_method::backend::error::AuthMethodDatabaseError;
use crate::db::entity::{auth_method_audit as db_audit, prelude::AuthMethodAudit};
use crate::error::DbContextExt;

/// Operation recorded for the auth method update.
pub const OPERATION_UPDATE: &str = "update";

/// Record the operation on the auth method.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    resource_id: &str,
    operation: &str,
    version: i32,
    created_at: NaiveDateTime,
) -> Result<(), AuthMethodDatabaseError> {
    AuthMethodAudit::insert(db_audit::ActiveModel {
        id: Set(uuid::Uuid::new_v4().simple().to_string()),
        resource_id: Set(resource_id.to_string()),
        operation: Set(operation.to_string()),
        version: Set(version),
        created_at: Set(created_at),
    })
    .exec_without_returning(db)
    .await
    .context("writing the auth method audit record")?;
    Ok(())
}
