//! Entity definitions for Kanri
//!
//! This crate contains Sea-ORM entity definitions for the database models.

pub mod boards;
pub use boards::Entity as Boards;
pub mod board_members;
pub use board_members::Entity as BoardMembers;
pub mod cards;
pub use cards::Entity as Cards;
pub mod card_members;
pub use card_members::Entity as CardMembers;
pub mod lists;
pub use lists::Entity as Lists;
pub mod sessions;
pub use sessions::Entity as Sessions;
pub mod users;
pub use users::Entity as Users;

pub use board_members::Permission;
pub use boards::Visibility;
pub use cards::Priority;
