//! Create `vehicles` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicles::Id))
                    .col(string_len(Vehicles::Name, 150))
                    .col(string_len(Vehicles::Brand, 100))
                    .col(integer(Vehicles::Year))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vehicles::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vehicles { Table, Id, Name, Brand, Year }
