//! `SeaORM` Entity for scheduled download jobs

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Free-form; stored exactly as submitted.
    #[sea_orm(column_name = "time")]
    pub scheduled_time: String,
    pub url: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether this stored job collides with a submission named `name`.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }
}
