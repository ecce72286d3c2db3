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

use config::{File, FileFormat};
use eyre::{Report, WrapErr};
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sea_orm::ConnectOptions;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    /// Global configuration options
    #[serde(rename = "DEFAULT")]
    pub default: Option<DefaultSection>,

    /// Auth method provider configuration.
    #[serde(default)]
    pub auth_method: AuthMethodSection,

    /// Database configuration
    pub database: DatabaseSection,

    /// OIDC provider discovery configuration.
    #[serde(default)]
    pub oidc: OidcSection,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct DefaultSection {
    /// Debug logging
    pub debug: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct DatabaseSection {
    /// Database URL.
    pub connection: SecretString,
}

impl DatabaseSection {
    /// Return the connection string with the python style `dialect+driver://`
    /// prefix reduced to `dialect://`.
    pub fn get_connection(&self) -> SecretString {
        let val = self.connection.expose_secret();
        if val.contains("+") {
            return Regex::new(r"(?<type>\w+)\+(\w+)://")
                .map(|re| SecretString::from(re.replace(val, "${type}://").to_string()))
                .unwrap_or(self.connection.clone());
        }
        self.connection.clone()
    }

    /// Connection options for the configured database. The connection string
    /// carries the credentials and is kept out of the sqlx statement log.
    pub fn connect_options(&self) -> ConnectOptions {
        ConnectOptions::new(self.get_connection().expose_secret())
            .sqlx_logging(false)
            .to_owned()
    }
}

/// Auth method provider configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthMethodSection {
    /// Backend driver. Only `sql` is provided, other names must be registered
    /// in the plugin manager.
    #[serde(default = "default_sql_driver")]
    pub driver: String,
}

impl Default for AuthMethodSection {
    fn default() -> Self {
        Self {
            driver: default_sql_driver(),
        }
    }
}

/// OIDC discovery configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct OidcSection {
    /// Timeout (in seconds) for the discovery and JWKS requests issued while
    /// validating an active auth method.
    #[serde(default = "default_discovery_timeout")]
    pub discovery_timeout: u64,
}

impl Default for OidcSection {
    fn default() -> Self {
        Self {
            discovery_timeout: default_discovery_timeout(),
        }
    }
}

fn default_sql_driver() -> String {
    "sql".into()
}

fn default_discovery_timeout() -> u64 {
    10
}

impl Config {
    /// Whether `[DEFAULT] debug` is enabled.
    pub fn is_debug(&self) -> bool {
        self.default
            .as_ref()
            .and_then(|default| default.debug)
            .unwrap_or_default()
    }

    /// Log level for the `verbose` count of the command line. Debug mode
    /// raises the level to at least `DEBUG`.
    pub fn log_level(&self, verbose: u8) -> LevelFilter {
        let level = match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        if self.is_debug() {
            level.max(LevelFilter::DEBUG)
        } else {
            level
        }
    }

    pub fn new(path: PathBuf) -> Result<Self, Report> {
        let mut builder = config::Config::builder();

        if std::path::Path::new(&path).is_file() {
            builder = builder.add_source(File::from(path).format(FileFormat::Ini));
        }

        builder.try_into()
    }
}

impl TryFrom<config::ConfigBuilder<config::builder::DefaultState>> for Config {
    type Error = Report;
    fn try_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, Self::Error> {
        let mut builder = builder;
        builder = builder
            .set_default("auth_method.driver", "sql")?
            .set_default("oidc.discovery_timeout", "10")?;

        builder
            .build()
            .wrap_err("Failed to read configuration file")?
            .try_deserialize()
            .wrap_err("Failed to parse configuration file")
    }
}
