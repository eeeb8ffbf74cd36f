//! Create `administrators` table.
//!
//! `role` holds the literal role names (`Adm`, `Editor`).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Administrators::Table)
                    .if_not_exists()
                    .col(pk_auto(Administrators::Id))
                    .col(string_len(Administrators::Email, 255).unique_key())
                    .col(string_len(Administrators::Password, 50))
                    .col(string_len(Administrators::Role, 10))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Administrators::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Administrators { Table, Id, Email, Password, Role }
