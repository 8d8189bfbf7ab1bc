use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create Users Table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create Diaries Table
        manager
            .create_table(
                Table::create()
                    .table(Diaries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Diaries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Diaries::UserId).integer().not_null())
                    .col(ColumnDef::new(Diaries::Content).text().not_null())
                    .col(ColumnDef::new(Diaries::Date).date().not_null())
                    .col(ColumnDef::new(Diaries::Emotion).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Diaries::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-diary-user_id")
                            .from(Diaries::Table, Diaries::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Latest-diary lookups scan by (user_id, date desc)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-diaries-user_id-date")
                    .table(Diaries::Table)
                    .col(Diaries::UserId)
                    .col(Diaries::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Diaries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    Email,
    Name,
    CreatedAt,
}

#[derive(Iden)]
pub enum Diaries {
    Table,
    Id,
    UserId,
    Content,
    Date,
    Emotion,
    CreatedAt,
}
