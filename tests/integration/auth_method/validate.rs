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
//! Test the validation against the discovered provider configuration.

use eyre::Result;
use tracing_test::traced_test;

use oidc_auth_method::auth_method::error::ErrorKind;
use oidc_auth_method::auth_method::{AuthMethodApi, types::*};

use super::*;

#[tokio::test]
#[traced_test]
async fn test_validate_stored() -> Result<()> {
    let state = get_state().await?;
    state
        .provider
        .get_auth_method_provider()
        .validate_discovery_info(
            &state,
            &ValidateDiscoveryOptions {
                auth_method: None,
                public_id: Some("am_active".into()),
            },
        )
        .await?;
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_validate_unsupported_alg() -> Result<()> {
    let state = get_state().await?;
    // RS384 and RS512 are not advertised by the provider
    let err = state
        .provider
        .get_auth_method_provider()
        .validate_discovery_info(
            &state,
            &ValidateDiscoveryOptions {
                auth_method: None,
                public_id: Some("am_inactive".into()),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(ErrorKind::InvalidParameter, err.kind());
    assert!(err.to_string().contains("RS384, RS512"));
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_validate_missing() -> Result<()> {
    let state = get_state().await?;
    let err = state
        .provider
        .get_auth_method_provider()
        .validate_discovery_info(
            &state,
            &ValidateDiscoveryOptions {
                auth_method: None,
                public_id: Some("am_missing".into()),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(ErrorKind::RecordNotFound, err.kind());
    Ok(())
}
