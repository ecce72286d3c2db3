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
//! Test the update of the auth method.

use eyre::Result;
use tracing_test::traced_test;

use oidc_auth_method::auth_method::error::ErrorKind;
use oidc_auth_method::auth_method::{AuthMethodApi, AuthMethodProviderError, types::*};

use super::*;

fn mask(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

async fn load(state: &ServiceState, id: &str) -> Result<AuthMethod> {
    state
        .provider
        .get_auth_method_provider()
        .get_auth_method(state, id)
        .await?
        .ok_or_else(|| eyre::eyre!("auth method {id} not found"))
}

#[tokio::test]
#[traced_test]
async fn test_update_name() -> Result<()> {
    let state = get_state().await?;
    let mut new = load(&state, "am_active").await?;
    new.name = Some("renamed".into());
    new.description = Some("described".into());

    let (res, count) = state
        .provider
        .get_auth_method_provider()
        .update_auth_method(
            &state,
            &new,
            1,
            &mask(&["Name", "Description"]),
            &UpdateOptions::default(),
        )
        .await?;
    assert_eq!(1, count);
    assert_eq!(2, res.version);
    assert_eq!(Some("renamed".to_string()), res.name);
    assert_eq!(Some("described".to_string()), res.description);
    assert_eq!(vec!["RS256".to_string()], res.signing_algs);
    assert_eq!(res, load(&state, "am_active").await?);

    let audit = get_audit(&state, "am_active").await?;
    assert_eq!(1, audit.len());
    assert_eq!("update", audit[0].operation);
    assert_eq!(2, audit[0].version);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_update_value_objects() -> Result<()> {
    let state = get_state().await?;
    let mut new = load(&state, "am_active").await?;
    new.signing_algs = vec!["ES256".into(), "RS256".into()];
    new.aud_claims = vec!["aud_1".into(), "aud_2".into()];
    new.callback_urls = vec!["https://cb.example.com/other".into()];

    let (res, count) = state
        .provider
        .get_auth_method_provider()
        .update_auth_method(
            &state,
            &new,
            1,
            &mask(&["SigningAlgs", "AudClaims", "CallbackUrls"]),
            &UpdateOptions::default(),
        )
        .await?;
    assert_eq!(1, count);
    let mut algs = res.signing_algs.clone();
    algs.sort();
    assert_eq!(vec!["ES256".to_string(), "RS256".to_string()], algs);
    assert_eq!(vec!["aud_1".to_string(), "aud_2".to_string()], res.aud_claims);
    assert_eq!(
        vec!["https://cb.example.com/other".to_string()],
        res.callback_urls
    );
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_update_delete_all_signing_algs() -> Result<()> {
    let state = get_state().await?;
    let mut new = load(&state, "am_inactive").await?;
    new.signing_algs.clear();

    let (res, count) = state
        .provider
        .get_auth_method_provider()
        .update_auth_method(
            &state,
            &new,
            1,
            &mask(&["SigningAlgs"]),
            &UpdateOptions::default(),
        )
        .await?;
    assert_eq!(1, count);
    assert!(res.signing_algs.is_empty());
    assert_eq!(
        0,
        OidcSigningAlg::find()
            .filter(oidc_signing_alg::Column::AuthMethodId.eq("am_inactive"))
            .count(&state.db)
            .await?
    );
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_update_version_mismatch() -> Result<()> {
    let state = get_state().await?;
    let mut new = load(&state, "am_active").await?;
    new.name = Some("renamed".into());

    let err = state
        .provider
        .get_auth_method_provider()
        .update_auth_method(&state, &new, 5, &mask(&["Name"]), &UpdateOptions::default())
        .await
        .unwrap_err();
    assert_eq!(ErrorKind::VersionMismatch, err.kind());
    assert_eq!(Some(1), get_stored_version(&state, "am_active").await?);
    assert!(get_audit(&state, "am_active").await?.is_empty());
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_update_second_writer_loses() -> Result<()> {
    let state = get_state().await?;
    let mut first = load(&state, "am_active").await?;
    first.name = Some("first".into());
    let mut second = first.clone();
    second.name = Some("second".into());

    state
        .provider
        .get_auth_method_provider()
        .update_auth_method(&state, &first, 1, &mask(&["Name"]), &UpdateOptions::default())
        .await?;
    let err = state
        .provider
        .get_auth_method_provider()
        .update_auth_method(&state, &second, 1, &mask(&["Name"]), &UpdateOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AuthMethodProviderError::VersionMismatch { version: 1, .. }
    ));
    assert_eq!(
        Some("first".to_string()),
        load(&state, "am_active").await?.name
    );
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_update_not_found() -> Result<()> {
    let state = get_state().await?;
    let new = AuthMethod {
        public_id: "am_missing".into(),
        name: Some("name".into()),
        ..Default::default()
    };

    let err = state
        .provider
        .get_auth_method_provider()
        .update_auth_method(&state, &new, 1, &mask(&["Name"]), &UpdateOptions::default())
        .await
        .unwrap_err();
    assert_eq!(ErrorKind::RecordNotFound, err.kind());
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_update_no_changes() -> Result<()> {
    let state = get_state().await?;
    let new = load(&state, "am_active").await?;

    let (res, count) = state
        .provider
        .get_auth_method_provider()
        .update_auth_method(
            &state,
            &new,
            1,
            &mask(&["Name", "SigningAlgs"]),
            &UpdateOptions::default(),
        )
        .await?;
    assert_eq!(0, count);
    assert_eq!(new, res);
    assert_eq!(Some(1), get_stored_version(&state, "am_active").await?);
    assert!(get_audit(&state, "am_active").await?.is_empty());
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_update_dry_run() -> Result<()> {
    let state = get_state().await?;
    let orig = load(&state, "am_active").await?;
    let mut new = orig.clone();
    new.client_id = Some("other-client".into());

    let (res, count) = state
        .provider
        .get_auth_method_provider()
        .update_auth_method(
            &state,
            &new,
            1,
            &mask(&["ClientId"]),
            &UpdateOptions {
                dry_run: true,
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(0, count);
    assert_eq!(1, res.version);
    assert_eq!(Some("other-client".to_string()), res.client_id);
    assert_eq!(orig, load(&state, "am_active").await?);
    assert!(get_audit(&state, "am_active").await?.is_empty());
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_update_dry_run_stale_version() -> Result<()> {
    let state = get_state().await?;
    let orig = load(&state, "am_active").await?;
    let mut new = orig.clone();
    new.name = Some("renamed".into());

    for dry_run in [false, true] {
        let err = state
            .provider
            .get_auth_method_provider()
            .update_auth_method(
                &state,
                &new,
                7,
                &mask(&["Name"]),
                &UpdateOptions {
                    dry_run,
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(ErrorKind::VersionMismatch, err.kind());
    }
    assert_eq!(orig, load(&state, "am_active").await?);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_update_active_incomplete() -> Result<()> {
    let state = get_state().await?;
    let orig = load(&state, "am_active").await?;

    let err = state
        .provider
        .get_auth_method_provider()
        .update_auth_method(
            &state,
            &orig,
            1,
            &[],
            &UpdateOptions {
                null_fields: mask(&["CallbackUrls"]),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(ErrorKind::InvalidParameter, err.kind());
    assert_eq!(orig, load(&state, "am_active").await?);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_update_active_incomplete_forced() -> Result<()> {
    let state = get_state().await?;
    let orig = load(&state, "am_active").await?;

    let (res, count) = state
        .provider
        .get_auth_method_provider()
        .update_auth_method(
            &state,
            &orig,
            1,
            &[],
            &UpdateOptions {
                null_fields: mask(&["CallbackUrls"]),
                force: true,
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(1, count);
    assert!(res.callback_urls.is_empty());
    assert!(res.disable_discovered_config_validation);
    assert_eq!(
        0,
        OidcCallbackUrl::find()
            .filter(oidc_callback_url::Column::AuthMethodId.eq("am_active"))
            .count(&state.db)
            .await?
    );
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_update_unknown_issuer() -> Result<()> {
    let state = get_state().await?;
    let mut new = load(&state, "am_active").await?;
    new.discovery_url = Some("https://unknown.example.com".into());

    let err = state
        .provider
        .get_auth_method_provider()
        .update_auth_method(
            &state,
            &new,
            1,
            &mask(&["DiscoveryUrl"]),
            &UpdateOptions::default(),
        )
        .await
        .unwrap_err();
    assert_eq!(ErrorKind::InvalidParameter, err.kind());
    assert!(
        err.to_string()
            .contains("cannot be converted to a valid OIDC provider")
    );
    Ok(())
}
