//! Lists Entity
//!
//! An ordered column of cards within a board. `card_limit = 0` means
//! unlimited; titles are unique per board so view bucketing by title is
//! unambiguous.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "lists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:         i32,
    pub board_id:   i32,
    pub title:      String,
    pub position:   i32,
    pub card_limit: i32,
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
    #[sea_orm(has_many = "super::cards::Entity")]
    Cards,
}

impl Related<super::boards::Entity> for Entity {
    fn to() -> RelationDef { Relation::Board.def() }
}

impl Related<super::cards::Entity> for Entity {
    fn to() -> RelationDef { Relation::Cards.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether this list caps how many cards it may hold.
    pub fn has_card_limit(&self) -> bool { self.card_limit > 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_card_limit() {
        let mut list = Model {
            id:         1,
            board_id:   1,
            title:      "Doing".to_string(),
            position:   2,
            card_limit: 5,
        };
        assert!(list.has_card_limit());

        list.card_limit = 0;
        assert!(!list.has_card_limit());
    }
}
