pub use sea_orm_migration::prelude::*;

mod m20260115_000001_user;
mod m20260115_000002_token_blocked_list;
mod m20260115_000003_people;
mod m20260115_000004_planet;
mod m20260115_000005_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_user::Migration),
            Box::new(m20260115_000002_token_blocked_list::Migration),
            Box::new(m20260115_000003_people::Migration),
            Box::new(m20260115_000004_planet::Migration),
            Box::new(m20260115_000005_favorites::Migration),
        ]
    }
}
