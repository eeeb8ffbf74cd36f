use std::fmt;
use std::str::FromStr;

use sea_orm::{entity::prelude::*, ColumnTrait, DatabaseConnection, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors;

/// Authorization tier of an administrator.
///
/// Stored and serialized as the literal strings `Adm` and `Editor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Role {
    #[sea_orm(string_value = "Adm")]
    #[serde(rename = "Adm")]
    Admin,
    #[sea_orm(string_value = "Editor")]
    #[serde(rename = "Editor")]
    Editor,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Editor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Adm",
            Role::Editor => "Editor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "administrators")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, email: &str, password: &str, role: Role) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        email: Set(email.to_string()),
        password: Set(password.to_string()),
        role: Set(role),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Row matching both fields exactly, if any.
pub async fn find_by_credentials(db: &DatabaseConnection, email: &str, password: &str) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find()
        .filter(Column::Email.eq(email))
        .filter(Column::Password.eq(password))
        .one(db)
        .await?;
    Ok(found)
}
