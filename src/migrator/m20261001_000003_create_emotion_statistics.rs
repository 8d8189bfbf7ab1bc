use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let counter = |col: EmotionStatistics| {
            ColumnDef::new(col)
                .big_integer()
                .not_null()
                .default(0)
                .to_owned()
        };

        manager
            .create_table(
                Table::create()
                    .table(EmotionStatistics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmotionStatistics::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EmotionStatistics::UserId).integer().not_null())
                    .col(ColumnDef::new(EmotionStatistics::Year).integer().not_null())
                    .col(ColumnDef::new(EmotionStatistics::Month).integer().not_null())
                    .col(counter(EmotionStatistics::Joy))
                    .col(counter(EmotionStatistics::Excitement))
                    .col(counter(EmotionStatistics::Happiness))
                    .col(counter(EmotionStatistics::Calm))
                    .col(counter(EmotionStatistics::Depression))
                    .col(counter(EmotionStatistics::Anxiety))
                    .col(counter(EmotionStatistics::Sadness))
                    .col(counter(EmotionStatistics::Anger))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-emotion_statistics-user_id")
                            .from(EmotionStatistics::Table, EmotionStatistics::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq-emotion_statistics-user_id-year-month")
                    .table(EmotionStatistics::Table)
                    .col(EmotionStatistics::UserId)
                    .col(EmotionStatistics::Year)
                    .col(EmotionStatistics::Month)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmotionStatistics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum EmotionStatistics {
    Table,
    Id,
    UserId,
    Year,
    Month,
    Joy,
    Excitement,
    Happiness,
    Calm,
    Depression,
    Anxiety,
    Sadness,
    Anger,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
