//! Users Entity
//!
//! Represents people who log in and appear as card assignees.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:         i32,
    pub first_name: String,
    pub last_name:  String,
    #[sea_orm(unique)]
    pub email:      String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::boards::Entity")]
    CreatedBoards,
    #[sea_orm(has_many = "super::board_members::Entity")]
    BoardMembers,
    #[sea_orm(has_many = "super::card_members::Entity")]
    CardMembers,
    #[sea_orm(has_many = "super::sessions::Entity")]
    Sessions,
}

impl Related<super::boards::Entity> for Entity {
    fn to() -> RelationDef { Relation::CreatedBoards.def() }
}

impl Related<super::board_members::Entity> for Entity {
    fn to() -> RelationDef { Relation::BoardMembers.def() }
}

impl Related<super::card_members::Entity> for Entity {
    fn to() -> RelationDef { Relation::CardMembers.def() }
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef { Relation::Sessions.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Full display name, first then last.
    pub fn full_name(&self) -> String { format!("{} {}", self.first_name, self.last_name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let user = Model {
            id:         1,
            first_name: "Ada".to_string(),
            last_name:  "Lovelace".to_string(),
            email:      "ada@example.com".to_string(),
            created_at: chrono::NaiveDateTime::default(),
        };
        assert_eq!(user.full_name(), "Ada Lovelace");
    }
}
