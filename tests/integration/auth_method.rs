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

use chrono::Utc;
use eyre::Report;
use sea_orm::{DbConn, entity::*, query::*};
use std::sync::Arc;

use oidc_auth_method::config::Config;
use oidc_auth_method::db::entity::{
    auth_method_audit, oidc_auth_method as db_auth_method, oidc_callback_url, oidc_signing_alg,
    prelude::{AuthMethodAudit, OidcCallbackUrl, OidcSigningAlg},
};
use oidc_auth_method::plugin_manager::PluginManager;
use oidc_auth_method::provider::Provider;
use oidc_auth_method::service::{Service, ServiceState};

use crate::common::{ISSUER, TestDiscoveryClient, get_isolated_database};

mod update;
mod validate;

async fn insert_auth_method(
    db: &DbConn,
    id: &str,
    operational_state: &str,
    signing_algs: &[&str],
) -> Result<(), Report> {
    let now = Utc::now().naive_utc();
    db_auth_method::ActiveModel {
        public_id: Set(id.into()),
        scope_id: Set("o_1".into()),
        name: Set(Some(id.into())),
        description: Set(None),
        operational_state: Set(operational_state.into()),
        discovery_url: Set(Some(ISSUER.into())),
        client_id: Set(Some("client".into())),
        client_secret: Set(Some("secret".into())),
        max_age: Set(None),
        disable_discovered_config_validation: Set(false),
        version: Set(1),
        create_time: Set(now),
        update_time: Set(now),
    }
    .insert(db)
    .await?;
    if !signing_algs.is_empty() {
        OidcSigningAlg::insert_many(signing_algs.iter().map(|alg| oidc_signing_alg::ActiveModel {
            auth_method_id: Set(id.into()),
            alg: Set(alg.to_string()),
        }))
        .exec(db)
        .await?;
    }
    OidcCallbackUrl::insert(oidc_callback_url::ActiveModel {
        auth_method_id: Set(id.into()),
        url: Set("https://cb.example.com/callback".into()),
    })
    .exec(db)
    .await?;
    Ok(())
}

async fn setup_data(db: &DbConn) -> Result<(), Report> {
    insert_auth_method(db, "am_active", "active-public", &["RS256"]).await?;
    insert_auth_method(
        db,
        "am_inactive",
        "inactive",
        &["RS256", "RS384", "RS512"],
    )
    .await?;
    Ok(())
}

async fn get_state() -> Result<ServiceState, Report> {
    let db = get_isolated_database().await?;
    setup_data(&db).await?;

    let cfg = Config::default();
    let mut plugin_manager = PluginManager::default();
    plugin_manager.register_discovery_client(Arc::new(TestDiscoveryClient));
    let provider = Provider::new(cfg.clone(), plugin_manager)?;
    Ok(Arc::new(Service::new(cfg, db, provider)))
}

async fn get_audit(state: &ServiceState, id: &str) -> Result<Vec<auth_method_audit::Model>, Report> {
    Ok(AuthMethodAudit::find()
        .filter(auth_method_audit::Column::ResourceId.eq(id))
        .order_by_asc(auth_method_audit::Column::Version)
        .all(&state.db)
        .await?)
}

async fn get_stored_version(state: &ServiceState, id: &str) -> Result<Option<i32>, Report> {
    Ok(db_auth_method::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .map(|row| row.version))
}
