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

use async_trait::async_trait;
use eyre::{Result, WrapErr};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbConn, EntityTrait,
    schema::Schema,
};
use uuid::Uuid;

use oidc_auth_method::auth_method::discovery::{DiscoveryClient, DiscoveryError, ProviderMetadata};
use oidc_auth_method::db::entity::prelude::*;

pub const ISSUER: &str = "https://issuer.example.com";

/// Create table with the related types and indexes (when known)
async fn create_table<C, E>(conn: &C, schema: &Schema, entity: E) -> Result<()>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    for ttype in schema.create_enum_from_entity(entity) {
        conn.execute(conn.get_database_backend().build(&ttype))
            .await?;
    }
    conn.execute(
        conn.get_database_backend()
            .build(&schema.create_table_from_entity(entity)),
    )
    .await?;
    for tidx in schema.create_index_from_entity(entity) {
        conn.execute(conn.get_database_backend().build(&tidx))
            .await?;
    }
    Ok(())
}

/// Setup the database schema.
///
/// Create tables in the order of the foreign references.
pub async fn setup_schema(db: &DbConn) -> Result<()> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, OidcAuthMethod).await?;
    create_table(db, &schema, OidcSigningAlg).await?;
    create_table(db, &schema, OidcCertificate).await?;
    create_table(db, &schema, OidcAudClaim).await?;
    create_table(db, &schema, OidcCallbackUrl).await?;
    create_table(db, &schema, AuthMethodAudit).await?;
    Ok(())
}

/// Connect to the test database.
///
/// `DATABASE_URL` environment variable selects the database. Postgres gets a
/// unique schema, MySQL a unique database. By default the in-memory sqlite is
/// used.
pub async fn connect_isolated() -> Result<DatabaseConnection> {
    let db_conn = std::env::var("DATABASE_URL").unwrap_or("sqlite::memory:".to_string());
    let opts: ConnectOptions = ConnectOptions::new(&db_conn).sqlx_logging(false).to_owned();
    let root_db = Database::connect(opts)
        .await
        .wrap_err_with(|| format!("Failed to connect to database at {db_conn}"))?;
    let isolated_db_url = if db_conn.starts_with("postgres") {
        let schema_name = format!("test_schema_{}", Uuid::new_v4().simple());
        root_db
            .execute_unprepared(&format!("CREATE SCHEMA \"{schema_name}\""))
            .await?;
        // Postgres resolves the table names through the search_path
        if db_conn.contains('?') {
            format!("{db_conn}&options=-c%20search_path%3D{schema_name}")
        } else {
            format!("{db_conn}?options=-c%20search_path%3D{schema_name}")
        }
    } else if db_conn.starts_with("mysql") {
        let db_name = format!("test_db_{}", Uuid::new_v4().simple());
        root_db
            .execute_unprepared(&format!("CREATE DATABASE `{db_name}`"))
            .await?;
        format!("{}/{}", db_conn.trim_end_matches('/'), db_name)
    } else {
        // In-memory sqlite lives as long as the connection
        return Ok(root_db);
    };
    let opts = ConnectOptions::new(&isolated_db_url)
        .sqlx_logging(false)
        .to_owned();
    Database::connect(opts)
        .await
        .wrap_err_with(|| format!("Failed to connect to database at {isolated_db_url}"))
}

/// Prepare the isolated database with the schema created from the entities.
pub async fn get_isolated_database() -> Result<DatabaseConnection> {
    let db = connect_isolated().await?;
    setup_schema(&db).await?;
    Ok(db)
}

/// Discovery client answering for the [`ISSUER`] only.
pub struct TestDiscoveryClient;

#[async_trait]
impl DiscoveryClient for TestDiscoveryClient {
    async fn discover(&self, issuer: &str) -> Result<ProviderMetadata, DiscoveryError> {
        if issuer.trim_end_matches('/') != ISSUER {
            return Err(DiscoveryError::Discovery {
                msg: format!("unknown issuer {issuer}"),
            });
        }
        Ok(ProviderMetadata {
            issuer: ISSUER.into(),
            jwks_uri: format!("{ISSUER}/keys"),
            signing_algs_supported: vec!["RS256".into(), "ES256".into()],
        })
    }

    async fn ping_jwks(&self, _jwks_uri: &str) -> Result<u16, DiscoveryError> {
        Ok(200)
    }
}
