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
//! Auth method value object records.

use sea_orm::ConnectionTrait;
use sea_orm::entity::*;
use sea_orm::query::*;

use crate::auth_method::backend::error::AuthMethodDatabaseError;
use crate::auth_method::types::{ValueObject, ValueObjectKind};
use crate::db::entity::{
    oidc_aud_claim as db_aud_claim, oidc_callback_url as db_callback_url,
    oidc_certificate as db_certificate, oidc_signing_alg as db_signing_alg,
    prelude::{OidcAudClaim, OidcCallbackUrl, OidcCertificate, OidcSigningAlg},
};
use crate::error::DbContextExt;

/// Value objects of the auth method as stored in the database.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoredValueObjects {
    pub signing_algs: Vec<String>,
    pub certificates: Vec<String>,
    pub aud_claims: Vec<String>,
    pub callback_urls: Vec<String>,
}

/// List value objects of the auth method ordered by value.
pub async fn list<C: ConnectionTrait>(
    db: &C,
    auth_method_id: &str,
) -> Result<StoredValueObjects, AuthMethodDatabaseError> {
    let signing_algs = OidcSigningAlg::find()
        .filter(db_signing_alg::Column::AuthMethodId.eq(auth_method_id))
        .order_by_asc(db_signing_alg::Column::Alg)
        .all(db)
        .await
        .context("listing signing algorithms of the auth method")?
        .into_iter()
        .map(|rec| rec.alg)
        .collect();
    let certificates = OidcCertificate::find()
        .filter(db_certificate::Column::AuthMethodId.eq(auth_method_id))
        .order_by_asc(db_certificate::Column::Cert)
        .all(db)
        .await
        .context("listing certificates of the auth method")?
        .into_iter()
        .map(|rec| rec.cert)
        .collect();
    let aud_claims = OidcAudClaim::find()
        .filter(db_aud_claim::Column::AuthMethodId.eq(auth_method_id))
        .order_by_asc(db_aud_claim::Column::Aud)
        .all(db)
        .await
        .context("listing audience claims of the auth method")?
        .into_iter()
        .map(|rec| rec.aud)
        .collect();
    let callback_urls = OidcCallbackUrl::find()
        .filter(db_callback_url::Column::AuthMethodId.eq(auth_method_id))
        .order_by_asc(db_callback_url::Column::Url)
        .all(db)
        .await
        .context("listing callback urls of the auth method")?
        .into_iter()
        .map(|rec| rec.url)
        .collect();

    Ok(StoredValueObjects {
        signing_algs,
        certificates,
        aud_claims,
        callback_urls,
    })
}

fn values_of(value_objects: &[ValueObject], kind: ValueObjectKind) -> Vec<String> {
    value_objects
        .iter()
        .filter(|vo| vo.kind() == kind)
        .map(|vo| vo.value().to_string())
        .collect()
}

/// Delete the value objects of the auth method.
pub async fn delete<C: ConnectionTrait>(
    db: &C,
    auth_method_id: &str,
    value_objects: &[ValueObject],
) -> Result<u64, AuthMethodDatabaseError> {
    let mut count = 0;
    for kind in ValueObjectKind::ALL {
        let values = values_of(value_objects, kind);
        if values.is_empty() {
            continue;
        }
        let res = match kind {
            ValueObjectKind::SigningAlg => OidcSigningAlg::delete_many()
                .filter(db_signing_alg::Column::AuthMethodId.eq(auth_method_id))
                .filter(db_signing_alg::Column::Alg.is_in(values))
                .exec(db)
                .await
                .context("deleting signing algorithms")?,
            ValueObjectKind::Certificate => OidcCertificate::delete_many()
                .filter(db_certificate::Column::AuthMethodId.eq(auth_method_id))
                .filter(db_certificate::Column::Cert.is_in(values))
                .exec(db)
                .await
                .context("deleting certificates")?,
            ValueObjectKind::AudClaim => OidcAudClaim::delete_many()
                .filter(db_aud_claim::Column::AuthMethodId.eq(auth_method_id))
                .filter(db_aud_claim::Column::Aud.is_in(values))
                .exec(db)
                .await
                .context("deleting audience claims")?,
            ValueObjectKind::CallbackUrl => OidcCallbackUrl::delete_many()
                .filter(db_callback_url::Column::AuthMethodId.eq(auth_method_id))
                .filter(db_callback_url::Column::Url.is_in(values))
                .exec(db)
                .await
                .context("deleting callback urls")?,
        };
        count += res.rows_affected;
    }
    Ok(count)
}

/// Insert the value objects.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    value_objects: &[ValueObject],
) -> Result<u64, AuthMethodDatabaseError> {
    let mut algs: Vec<db_signing_alg::ActiveModel> = Vec::new();
    let mut certs: Vec<db_certificate::ActiveModel> = Vec::new();
    let mut auds: Vec<db_aud_claim::ActiveModel> = Vec::new();
    let mut urls: Vec<db_callback_url::ActiveModel> = Vec::new();
    for vo in value_objects {
        match vo {
            ValueObject::SigningAlg {
                auth_method_id,
                alg,
            } => algs.push(db_signing_alg::ActiveModel {
                auth_method_id: Set(auth_method_id.clone()),
                alg: Set(alg.to_string()),
            }),
            ValueObject::Certificate {
                auth_method_id,
                cert,
            } => certs.push(db_certificate::ActiveModel {
                auth_method_id: Set(auth_method_id.clone()),
                cert: Set(cert.clone()),
            }),
            ValueObject::AudClaim {
                auth_method_id,
                aud,
            } => auds.push(db_aud_claim::ActiveModel {
                auth_method_id: Set(auth_method_id.clone()),
                aud: Set(aud.clone()),
            }),
            ValueObject::CallbackUrl {
                auth_method_id,
                url,
            } => urls.push(db_callback_url::ActiveModel {
                auth_method_id: Set(auth_method_id.clone()),
                url: Set(url.clone()),
            }),
        }
    }

    let mut count = 0;
    if !algs.is_empty() {
        count += OidcSigningAlg::insert_many(algs)
            .exec_without_returning(db)
            .await
            .context("inserting signing algorithms")?;
    }
    if !certs.is_empty() {
        count += OidcCertificate::insert_many(certs)
            .exec_without_returning(db)
            .await
            .context("inserting certificates")?;
    }
    if !auds.is_empty() {
        count += OidcAudClaim::insert_many(auds)
            .exec_without_returning(db)
            .await
            .context("inserting audience claims")?;
    }
    if !urls.is_empty() {
        count += OidcCallbackUrl::insert_many(urls)
            .exec_without_returning(db)
            .await
            .context("inserting callback urls")?;
    }
    Ok(count)
}
