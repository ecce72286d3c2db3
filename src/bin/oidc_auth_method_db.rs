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
//! # Schema management of the OIDC auth method store.
//!
//! Applies or rolls back the auth method tables of the database named in the
//! `[database]` section and prints the resulting migration status.
use clap::Parser;
use color_eyre::Report;
use eyre::WrapErr;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{filter::Targets, prelude::*};

use sea_orm::Database;

use oidc_auth_method::config::Config;
use oidc_auth_method::db_migration::{MigrationCommand, command};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to the config file.
    #[arg(short, long, default_value = "/etc/oidc-auth-method/oidc-auth-method.conf")]
    config: PathBuf,

    /// Verbosity level. Repeat to increase level. `[DEFAULT] debug` raises
    /// it to at least debug.
    #[arg(short, long, global=true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: MigrationCommand,
}

#[allow(clippy::print_stdout)]
#[tokio::main]
async fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let cfg = Config::new(cli.config)?;

    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(Targets::new().with_default(cfg.log_level(cli.verbose)));
    tracing_subscriber::registry().with(log_layer).init();

    info!("Establishing the database connection...");
    let conn = Database::connect(cfg.database.connect_options())
        .await
        .wrap_err("Database connection failed")?;

    let status = command::execute(&conn, cli.command)
        .await
        .wrap_err_with(|| format!("{:?} failed", cli.command))?;
    println!("{status}");
    Ok(())
}
