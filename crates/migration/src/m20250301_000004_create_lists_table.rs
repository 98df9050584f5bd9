use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create lists table using schema helpers.
        // CardLimit of zero means the list accepts any number of cards.
        manager
            .create_table(
                Table::create()
                    .table(Lists::Table)
                    .if_not_exists()
                    .col(pk_auto(Lists::Id))
                    .col(integer(Lists::BoardId).not_null())
                    .col(string(Lists::Title).not_null())
                    .col(integer(Lists::Position).not_null())
                    .col(integer(Lists::CardLimit).not_null().default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lists_board_id")
                            .from(Lists::Table, Lists::BoardId)
                            .to(Boards::Table, Boards::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for board column lookups
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lists_board_id")
                    .table(Lists::Table)
                    .col(Lists::BoardId)
                    .to_owned(),
            )
            .await?;

        // Create unique constraint: list titles double as column keys on a board
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lists_board_title_unique")
                    .table(Lists::Table)
                    .col(Lists::BoardId)
                    .col(Lists::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lists::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Lists {
    Table,
    Id,
    BoardId,
    Title,
    Position,
    CardLimit,
}

// Reference to boards table
#[derive(DeriveIden)]
pub enum Boards {
    Table,
    Id,
}
