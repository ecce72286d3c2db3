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
//! Schema migrations.

use eyre::Result;
use sea_orm::{ConnectionTrait, Statement};
use sea_orm_migration::MigratorTrait;

use oidc_auth_method::config::Config;
use oidc_auth_method::db_migration::{MigrationCommand, Migrator, command};

use crate::common::connect_isolated;

async fn count_tables<C: ConnectionTrait>(db: &C) -> Result<i64> {
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT COUNT(*) AS cnt FROM sqlite_master WHERE type = 'table' AND name IN \
             ('oidc_auth_method', 'oidc_signing_alg', 'oidc_certificate', \
             'oidc_aud_claim', 'oidc_callback_url', 'auth_method_audit')",
        ))
        .await?;
    Ok(row.map(|row| row.try_get::<i64>("", "cnt")).transpose()?.unwrap_or(0))
}

#[tokio::test]
async fn test_up_down() -> Result<()> {
    if std::env::var("DATABASE_URL").is_ok() {
        // Table introspection below is sqlite specific
        return Ok(());
    }
    let db = connect_isolated().await?;

    Migrator::up(&db, None).await?;
    assert!(Migrator::get_pending_migrations(&db).await?.is_empty());
    assert_eq!(1, Migrator::get_applied_migrations(&db).await?.len());
    assert_eq!(6, count_tables(&db).await?);

    Migrator::down(&db, None).await?;
    assert_eq!(0, count_tables(&db).await?);
    Ok(())
}

#[tokio::test]
async fn test_command_status() -> Result<()> {
    let db = connect_isolated().await?;

    let status = command::execute(&db, MigrationCommand::Status).await?;
    assert_eq!(1, status.pending.len());
    assert!(status.applied.is_empty());

    let status = command::execute(&db, MigrationCommand::Up { steps: None }).await?;
    assert!(status.is_current());
    assert_eq!(vec!["m20250601_000001_oidc_auth_method".to_string()], status.applied);

    let status = command::execute(&db, MigrationCommand::Refresh).await?;
    assert!(status.is_current());
    assert_eq!(1, status.applied.len());

    let status = command::execute(&db, MigrationCommand::Down { steps: Some(1) }).await?;
    assert_eq!(1, status.pending.len());
    assert!(status.applied.is_empty());

    let status = command::execute(&db, MigrationCommand::Fresh).await?;
    assert!(status.is_current());

    let status = command::execute(&db, MigrationCommand::Reset).await?;
    assert!(status.applied.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_command_from_config() -> Result<()> {
    if std::env::var("DATABASE_URL").is_ok() {
        return Ok(());
    }
    let cfg = Config::try_from(
        config::Config::builder()
            .set_override("database.connection", "sqlite::memory:")?,
    )?;
    let db = sea_orm::Database::connect(cfg.database.connect_options()).await?;

    let status = command::execute(&db, MigrationCommand::Up { steps: Some(1) }).await?;
    assert!(status.is_current());
    assert_eq!(6, count_tables(&db).await?);
    Ok(())
}
