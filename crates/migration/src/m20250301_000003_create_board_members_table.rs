use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create board_members table with a composite primary key so a user
        // can hold at most one permission per board
        manager
            .create_table(
                Table::create()
                    .table(BoardMembers::Table)
                    .if_not_exists()
                    .col(integer(BoardMembers::BoardId).not_null())
                    .col(integer(BoardMembers::UserId).not_null())
                    .col(
                        string_len(BoardMembers::Permission, 16)
                            .not_null()
                            .default("view"),
                    )
                    .col(
                        date_time(BoardMembers::JoinedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(BoardMembers::BoardId)
                            .col(BoardMembers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_members_board_id")
                            .from(BoardMembers::Table, BoardMembers::BoardId)
                            .to(Boards::Table, Boards::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_members_user_id")
                            .from(BoardMembers::Table, BoardMembers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for membership lookups by user
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_board_members_user_id")
                    .table(BoardMembers::Table)
                    .col(BoardMembers::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardMembers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BoardMembers {
    Table,
    BoardId,
    UserId,
    Permission,
    JoinedAt,
}

// Reference to boards table
#[derive(DeriveIden)]
pub enum Boards {
    Table,
    Id,
}

// Reference to users table
#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
}
