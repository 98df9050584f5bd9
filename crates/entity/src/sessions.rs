//! Sessions Entity
//!
//! Server-side login sessions referenced by the signed session cookie.
//! `display_name` caches the user's first name at login time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id:           Uuid,
    pub user_id:      i32,
    pub display_name: String,
    pub created_at:   DateTime,
    pub last_used_at: DateTime,
    pub revoked_at:   Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether this session can still authenticate requests.
    pub fn is_active(&self) -> bool { self.revoked_at.is_none() }
}
