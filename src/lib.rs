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
//! # OIDC auth method store
//!
//! Storage and update of the OIDC auth methods of an identity service. An
//! auth method describes an external OpenID Connect provider used to
//! authenticate the users of a scope: the issuer discovery URL, the client
//! credentials and the lists of the accepted signing algorithms, trusted
//! certificates, audience claims and callback URLs.
//!
//! Updates are driven by a field mask naming the attributes to change. Each
//! update is guarded by the expected version of the stored auth method,
//! reconciles the value object lists, validates active auth methods against
//! the configuration discovered from the OIDC provider and writes an audit
//! record in the same database transaction.
//!
//! The [provider::Provider] gives access to the
//! [auth_method::AuthMethodProvider] while the [service::Service] bundles it
//! with the configuration and the database connection.

pub mod auth_method;
pub mod config;
pub mod db;
pub mod db_migration;
pub mod error;
pub mod plugin_manager;
pub mod provider;
pub mod service;
