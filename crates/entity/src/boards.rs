//! Boards Entity
//!
//! A board groups ordered lists of cards and carries per-user permissions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "boards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:           i32,
    pub workspace_id: i32,
    pub name:         String,
    pub visibility:   Visibility,
    pub created_by:   i32,
    pub created_at:   DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Creator,
    #[sea_orm(has_many = "super::lists::Entity")]
    Lists,
    #[sea_orm(has_many = "super::board_members::Entity")]
    BoardMembers,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::Creator.def() }
}

impl Related<super::lists::Entity> for Entity {
    fn to() -> RelationDef { Relation::Lists.def() }
}

impl Related<super::board_members::Entity> for Entity {
    fn to() -> RelationDef { Relation::BoardMembers.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Board visibility enumeration
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Visibility {
    /// Visible only to board members
    #[sea_orm(string_value = "private")]
    Private,
    /// Visible to everyone in the workspace
    #[sea_orm(string_value = "workspace")]
    Workspace,
    /// Visible to anyone with the link
    #[sea_orm(string_value = "public")]
    Public,
}

impl Default for Visibility {
    fn default() -> Self { Visibility::Workspace }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Private => write!(f, "private"),
            Visibility::Workspace => write!(f, "workspace"),
            Visibility::Public => write!(f, "public"),
        }
    }
}

impl std::str::FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "private" => Ok(Visibility::Private),
            "workspace" => Ok(Visibility::Workspace),
            "public" => Ok(Visibility::Public),
            other => Err(format!("Unknown visibility: {}", other)),
        }
    }
}
