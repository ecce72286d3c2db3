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
//! # Schema management commands
//!
//! Commands of the `oidc-auth-method-db` tool. Every command reports the
//! resulting migration status.
use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::{Migration, MigratorTrait};
use std::fmt;
use tracing::info;

use crate::db_migration::Migrator;

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::Subcommand)]
pub enum MigrationCommand {
    /// Apply pending migrations.
    Up {
        /// Number of pending migrations to apply.
        #[arg(short('n'))]
        steps: Option<u32>,
    },
    /// Rollback applied migrations.
    Down {
        /// Number of migrations to rollback.
        #[arg(short('n'))]
        steps: Option<u32>,
    },
    /// Show pending and applied migrations.
    Status,
    /// Drop all tables from the database, then reapply all migrations.
    Fresh,
    /// Rollback all applied migrations, then reapply all migrations.
    Refresh,
    /// Rollback all applied migrations.
    Reset,
}

/// Migration names on both sides of the current schema version.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MigrationStatus {
    pub pending: Vec<String>,
    pub applied: Vec<String>,
}

impl MigrationStatus {
    pub async fn load(db: &DatabaseConnection) -> Result<Self, DbErr> {
        Ok(Self {
            pending: names(Migrator::get_pending_migrations(db).await?),
            applied: names(Migrator::get_applied_migrations(db).await?),
        })
    }

    /// Whether the schema is at the latest version.
    pub fn is_current(&self) -> bool {
        self.pending.is_empty()
    }
}

impl fmt::Display for MigrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pending.is_empty() {
            writeln!(f, "No pending migrations")?;
        } else {
            writeln!(f, "Pending migrations:")?;
            for name in &self.pending {
                writeln!(f, "  {name}")?;
            }
        }
        if self.applied.is_empty() {
            write!(f, "No applied migrations")
        } else {
            write!(f, "Applied migrations:")?;
            for name in &self.applied {
                write!(f, "\n  {name}")?;
            }
            Ok(())
        }
    }
}

fn names(migrations: Vec<Migration>) -> Vec<String> {
    migrations
        .iter()
        .map(|migration| migration.name().to_string())
        .collect()
}

/// Run the command against the auth method store.
#[tracing::instrument(level = "info", skip(db))]
pub async fn execute(
    db: &DatabaseConnection,
    command: MigrationCommand,
) -> Result<MigrationStatus, DbErr> {
    match command {
        MigrationCommand::Up { steps } => Migrator::up(db, steps).await?,
        MigrationCommand::Down { steps } => Migrator::down(db, steps).await?,
        MigrationCommand::Status => {}
        MigrationCommand::Fresh => Migrator::fresh(db).await?,
        MigrationCommand::Refresh => Migrator::refresh(db).await?,
        MigrationCommand::Reset => Migrator::reset(db).await?,
    }
    let status = MigrationStatus::load(db).await?;
    info!(
        pending = status.pending.len(),
        applied = status.applied.len(),
        "schema status"
    );
    Ok(status)
}
