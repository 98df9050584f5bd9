//! Board Members Entity
//!
//! Links users to boards with a permission level. One row per (board, user).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "board_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub board_id:   i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id:    i32,
    pub permission: Permission,
    pub joined_at:  DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::boards::Entity",
        from = "Column::BoardId",
        to = "super::boards::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Board,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::boards::Entity> for Entity {
    fn to() -> RelationDef { Relation::Board.def() }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Board permission enumeration
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Permission {
    /// Full control, including board rename and delete
    #[sea_orm(string_value = "admin")]
    Admin,
    /// Can create, edit, and delete lists and cards
    #[sea_orm(string_value = "edit")]
    Edit,
    /// Read-only access
    #[sea_orm(string_value = "view")]
    View,
}

impl Permission {
    /// Whether this permission allows mutating lists and cards.
    pub fn can_edit(&self) -> bool { matches!(self, Permission::Admin | Permission::Edit) }

    /// Whether this permission allows board-level administration.
    pub fn is_admin(&self) -> bool { matches!(self, Permission::Admin) }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Permission::Admin => write!(f, "admin"),
            Permission::Edit => write!(f, "edit"),
            Permission::View => write!(f, "view"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_can_edit() {
        assert!(Permission::Admin.can_edit());
        assert!(Permission::Edit.can_edit());
        assert!(!Permission::View.can_edit());
    }

    #[test]
    fn test_permission_is_admin() {
        assert!(Permission::Admin.is_admin());
        assert!(!Permission::Edit.is_admin());
        assert!(!Permission::View.is_admin());
    }
}
