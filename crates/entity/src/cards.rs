//! Cards Entity
//!
//! A task item belonging to one list, with priority, dates, completion
//! state, and a modification audit trail.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:           i32,
    pub list_id:      i32,
    pub title:        String,
    pub description:  Option<String>,
    pub priority:     Priority,
    pub is_completed: bool,
    pub start_date:   Option<Date>,
    pub due_date:     Option<Date>,
    pub created_by:   i32,
    pub created_at:   DateTime,
    pub modified_by:  i32,
    pub modified_at:  DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lists::Entity",
        from = "Column::ListId",
        to = "super::lists::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    List,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Creator,
    #[sea_orm(has_many = "super::card_members::Entity")]
    CardMembers,
}

impl Related<super::lists::Entity> for Entity {
    fn to() -> RelationDef { Relation::List.def() }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::Creator.def() }
}

impl Related<super::card_members::Entity> for Entity {
    fn to() -> RelationDef { Relation::CardMembers.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Progress percentage derived from the completion flag.
    pub fn progress(&self) -> u8 {
        if self.is_completed {
            100
        }
        else {
            0
        }
    }
}

/// Card priority enumeration
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Priority {
    /// Can wait
    #[sea_orm(string_value = "low")]
    Low,
    /// Normal scheduling
    #[sea_orm(string_value = "medium")]
    Medium,
    /// Should be picked up soon
    #[sea_orm(string_value = "high")]
    High,
    /// Drop everything
    #[sea_orm(string_value = "urgent")]
    Urgent,
}

impl Default for Priority {
    fn default() -> Self { Priority::Medium }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Urgent => write!(f, "urgent"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            other => Err(format!("Unknown priority: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_default() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_priority_from_str_case_insensitive() {
        assert_eq!("low".parse::<Priority>(), Ok(Priority::Low));
        assert_eq!("Urgent".parse::<Priority>(), Ok(Priority::Urgent));
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert!("critical".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_display_round_trip() {
        for priority in [
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Urgent,
        ] {
            assert_eq!(priority.to_string().parse::<Priority>(), Ok(priority));
        }
    }

    #[test]
    fn test_card_progress() {
        let mut card = Model {
            id:           1,
            list_id:      1,
            title:        "Write report".to_string(),
            description:  None,
            priority:     Priority::Medium,
            is_completed: false,
            start_date:   None,
            due_date:     None,
            created_by:   1,
            created_at:   chrono::NaiveDateTime::default(),
            modified_by:  1,
            modified_at:  chrono::NaiveDateTime::default(),
        };
        assert_eq!(card.progress(), 0);

        card.is_completed = true;
        assert_eq!(card.progress(), 100);
    }
}
