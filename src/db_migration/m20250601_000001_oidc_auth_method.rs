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

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OidcAuthMethod::Table)
                    .if_not_exists()
                    .col(string_len(OidcAuthMethod::PublicId, 64).primary_key())
                    .col(string_len(OidcAuthMethod::ScopeId, 64))
                    .col(string_len_null(OidcAuthMethod::Name, 255))
                    .col(string_len_null(OidcAuthMethod::Description, 1024))
                    .col(string_len(OidcAuthMethod::OperationalState, 32).default("inactive"))
                    .col(text_null(OidcAuthMethod::DiscoveryUrl))
                    .col(string_len_null(OidcAuthMethod::ClientId, 255))
                    .col(text_null(OidcAuthMethod::ClientSecret))
                    .col(integer_null(OidcAuthMethod::MaxAge))
                    .col(boolean(OidcAuthMethod::DisableDiscoveredConfigValidation).default(false))
                    .col(integer(OidcAuthMethod::Version).default(1))
                    .col(date_time(OidcAuthMethod::CreateTime))
                    .col(date_time(OidcAuthMethod::UpdateTime))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OidcSigningAlg::Table)
                    .if_not_exists()
                    .col(string_len(OidcSigningAlg::AuthMethodId, 64))
                    .col(string_len(OidcSigningAlg::Alg, 16))
                    .primary_key(
                        Index::create()
                            .name("pk-oidc-signing-alg")
                            .col(OidcSigningAlg::AuthMethodId)
                            .col(OidcSigningAlg::Alg),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-oidc-signing-alg-auth-method")
                            .from(OidcSigningAlg::Table, OidcSigningAlg::AuthMethodId)
                            .to(OidcAuthMethod::Table, OidcAuthMethod::PublicId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OidcCertificate::Table)
                    .if_not_exists()
                    .col(string_len(OidcCertificate::AuthMethodId, 64))
                    .col(text(OidcCertificate::Cert))
                    .primary_key(
                        Index::create()
                            .name("pk-oidc-certificate")
                            .col(OidcCertificate::AuthMethodId)
                            .col(OidcCertificate::Cert),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-oidc-certificate-auth-method")
                            .from(OidcCertificate::Table, OidcCertificate::AuthMethodId)
                            .to(OidcAuthMethod::Table, OidcAuthMethod::PublicId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OidcAudClaim::Table)
                    .if_not_exists()
                    .col(string_len(OidcAudClaim::AuthMethodId, 64))
                    .col(string_len(OidcAudClaim::Aud, 255))
                    .primary_key(
                        Index::create()
                            .name("pk-oidc-aud-claim")
                            .col(OidcAudClaim::AuthMethodId)
                            .col(OidcAudClaim::Aud),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-oidc-aud-claim-auth-method")
                            .from(OidcAudClaim::Table, OidcAudClaim::AuthMethodId)
                            .to(OidcAuthMethod::Table, OidcAuthMethod::PublicId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OidcCallbackUrl::Table)
                    .if_not_exists()
                    .col(string_len(OidcCallbackUrl::AuthMethodId, 64))
                    .col(text(OidcCallbackUrl::Url))
                    .primary_key(
                        Index::create()
                            .name("pk-oidc-callback-url")
                            .col(OidcCallbackUrl::AuthMethodId)
                            .col(OidcCallbackUrl::Url),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-oidc-callback-url-auth-method")
                            .from(OidcCallbackUrl::Table, OidcCallbackUrl::AuthMethodId)
                            .to(OidcAuthMethod::Table, OidcAuthMethod::PublicId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuthMethodAudit::Table)
                    .if_not_exists()
                    .col(string_len(AuthMethodAudit::Id, 64).primary_key())
                    .col(string_len(AuthMethodAudit::ResourceId, 64))
                    .col(string_len(AuthMethodAudit::Operation, 32))
                    .col(integer(AuthMethodAudit::Version))
                    .col(date_time(AuthMethodAudit::CreatedAt))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-auth-method-audit-resource")
                    .table(AuthMethodAudit::Table)
                    .col(AuthMethodAudit::ResourceId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthMethodAudit::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OidcCallbackUrl::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OidcAudClaim::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OidcCertificate::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OidcSigningAlg::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OidcAuthMethod::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum OidcAuthMethod {
    Table,
    PublicId,
    ScopeId,
    Name,
    Description,
    OperationalState,
    DiscoveryUrl,
    ClientId,
    ClientSecret,
    MaxAge,
    DisableDiscoveredConfigValidation,
    Version,
    CreateTime,
    UpdateTime,
}

#[derive(DeriveIden)]
enum OidcSigningAlg {
    Table,
    AuthMethodId,
    Alg,
}

#[derive(DeriveIden)]
enum OidcCertificate {
    Table,
    AuthMethodId,
    Cert,
}

#[derive(DeriveIden)]
enum OidcAudClaim {
    Table,
    AuthMethodId,
    Aud,
}

#[derive(DeriveIden)]
enum OidcCallbackUrl {
    Table,
    AuthMethodId,
    Url,
}

#[derive(DeriveIden)]
enum AuthMethodAudit {
    Table,
    Id,
    ResourceId,
    Operation,
    Version,
    CreatedAt,
}
