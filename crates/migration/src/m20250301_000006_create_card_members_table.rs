use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create card_members table with a composite primary key so a user
        // appears at most once per card
        manager
            .create_table(
                Table::create()
                    .table(CardMembers::Table)
                    .if_not_exists()
                    .col(integer(CardMembers::CardId).not_null())
                    .col(integer(CardMembers::UserId).not_null())
                    .col(
                        string_len(CardMembers::Role, 32)
                            .not_null()
                            .default("Assignee"),
                    )
                    .primary_key(
                        Index::create()
                            .col(CardMembers::CardId)
                            .col(CardMembers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_members_card_id")
                            .from(CardMembers::Table, CardMembers::CardId)
                            .to(Cards::Table, Cards::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_members_user_id")
                            .from(CardMembers::Table, CardMembers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for assignment lookups by user
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_card_members_user_id")
                    .table(CardMembers::Table)
                    .col(CardMembers::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CardMembers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CardMembers {
    Table,
    CardId,
    UserId,
    Role,
}

// Reference to cards table
#[derive(DeriveIden)]
pub enum Cards {
    Table,
    Id,
}

// Reference to users table
#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
}
