use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TodayComments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TodayComments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TodayComments::UserId).integer().not_null())
                    .col(ColumnDef::new(TodayComments::Date).date().not_null())
                    .col(ColumnDef::new(TodayComments::Comment).text().null())
                    .col(
                        ColumnDef::new(TodayComments::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-today_comment-user_id")
                            .from(TodayComments::Table, TodayComments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One comment per calendar date. Inserts use ON CONFLICT (date) DO NOTHING.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq-today_comments-date")
                    .table(TodayComments::Table)
                    .col(TodayComments::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TodayComments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TodayComments {
    Table,
    Id,
    UserId,
    Date,
    Comment,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
