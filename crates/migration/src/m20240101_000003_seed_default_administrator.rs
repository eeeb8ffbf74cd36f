//! Seed the bootstrap administrator so a fresh database can be logged into.
use sea_orm_migration::prelude::*;

pub const DEFAULT_ADMIN_EMAIL: &str = "administrador@teste.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "123456";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Administrators::Table)
            .columns([Administrators::Email, Administrators::Password, Administrators::Role]);
        insert
            .values([DEFAULT_ADMIN_EMAIL.into(), DEFAULT_ADMIN_PASSWORD.into(), "Adm".into()])
            .map_err(|e| DbErr::Custom(e.to_string()))?;
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Administrators::Table)
            .and_where(Expr::col(Administrators::Email).eq(DEFAULT_ADMIN_EMAIL))
            .to_owned();
        manager.exec_stmt(delete).await
    }
}

#[derive(DeriveIden)]
enum Administrators { Table, Email, Password, Role }
