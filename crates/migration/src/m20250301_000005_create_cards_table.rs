use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create cards table using schema helpers.
        // ModifiedBy/ModifiedAt start out equal to the creator audit fields
        // and are rewritten on every edit.
        manager
            .create_table(
                Table::create()
                    .table(Cards::Table)
                    .if_not_exists()
                    .col(pk_auto(Cards::Id))
                    .col(integer(Cards::ListId).not_null())
                    .col(string(Cards::Title).not_null())
                    .col(text_null(Cards::Description))
                    .col(
                        string_len(Cards::Priority, 16)
                            .not_null()
                            .default("medium"),
                    )
                    .col(boolean(Cards::IsCompleted).not_null().default(false))
                    .col(date_null(Cards::StartDate))
                    .col(date_null(Cards::DueDate))
                    .col(integer(Cards::CreatedBy).not_null())
                    .col(
                        date_time(Cards::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(integer(Cards::ModifiedBy).not_null())
                    .col(
                        date_time(Cards::ModifiedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_list_id")
                            .from(Cards::Table, Cards::ListId)
                            .to(Lists::Table, Lists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_created_by")
                            .from(Cards::Table, Cards::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_modified_by")
                            .from(Cards::Table, Cards::ModifiedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for column capacity checks and board rendering
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cards_list_id")
                    .table(Cards::Table)
                    .col(Cards::ListId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cards::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Cards {
    Table,
    Id,
    ListId,
    Title,
    Description,
    Priority,
    IsCompleted,
    StartDate,
    DueDate,
    CreatedBy,
    CreatedAt,
    ModifiedBy,
    ModifiedAt,
}

// Reference to lists table
#[derive(DeriveIden)]
pub enum Lists {
    Table,
    Id,
}

// Reference to users table
#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
}
