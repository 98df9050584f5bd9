use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create boards table using schema helpers.
        // Visibility stays a plain string column so the schema works on both
        // MySQL and SQLite; the entity layer constrains the values.
        manager
            .create_table(
                Table::create()
                    .table(Boards::Table)
                    .if_not_exists()
                    .col(pk_auto(Boards::Id))
                    .col(integer(Boards::WorkspaceId).not_null().default(1))
                    .col(string(Boards::Name).not_null())
                    .col(
                        string_len(Boards::Visibility, 16)
                            .not_null()
                            .default("workspace"),
                    )
                    .col(integer(Boards::CreatedBy).not_null())
                    .col(
                        date_time(Boards::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_boards_created_by")
                            .from(Boards::Table, Boards::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Boards::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Boards {
    Table,
    Id,
    WorkspaceId,
    Name,
    Visibility,
    CreatedBy,
    CreatedAt,
}

// Reference to users table
#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
}
