use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create user table
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len(User::Username, 50).unique_key())
                    .to_owned(),
            )
            .await?;

        // Create manuscript table
        manager
            .create_table(
                Table::create()
                    .table(Manuscript::Table)
                    .if_not_exists()
                    .col(pk_auto(Manuscript::Id))
                    .col(string_len(Manuscript::Title, 100).default("Untitled"))
                    .col(text(Manuscript::Content))
                    .col(date_time(Manuscript::CreatedAt).default(Expr::current_timestamp()))
                    .col(integer(Manuscript::UserId))
                    .col(string_len_null(Manuscript::Sentiment, 50))
                    .col(text_null(Manuscript::AiFeedback))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_manuscript_user")
                            .from(Manuscript::Table, Manuscript::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_manuscript_created_at")
                    .table(Manuscript::Table)
                    .col(Manuscript::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(Manuscript::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Username,
}

#[derive(DeriveIden)]
enum Manuscript {
    Table,
    Id,
    Title,
    Content,
    CreatedAt,
    UserId,
    Sentiment,
    AiFeedback,
}
