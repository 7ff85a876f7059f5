pub use sea_orm_migration::prelude::*;

mod m20240312_000001_create_jobs;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240312_000001_create_jobs::Migration)]
    }
}

pub struct Migrator;
