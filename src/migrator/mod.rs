use sea_orm_migration::prelude::*;

mod m20261001_000001_create_users_and_diaries;
mod m20261001_000002_create_today_comments;
mod m20261001_000003_create_emotion_statistics;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_users_and_diaries::Migration),
            Box::new(m20261001_000002_create_today_comments::Migration),
            Box::new(m20261001_000003_create_emotion_statistics::Migration),
        ]
    }
}
