use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_user::User, m20260115_000003_people::People, m20260115_000004_planet::Planet,
};

static FK_FAVORITES_PLANET_ID: &str = "fk_favorites_planet_id";
static FK_FAVORITES_PEOPLE_ID: &str = "fk_favorites_people_id";
static FK_FAVORITES_USER_ID: &str = "fk_favorites_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(string_len(Favorites::Type, 16))
                    .col(integer_null(Favorites::PlanetId))
                    .col(integer_null(Favorites::PeopleId))
                    .col(integer(Favorites::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITES_PLANET_ID)
                    .from_tbl(Favorites::Table)
                    .from_col(Favorites::PlanetId)
                    .to_tbl(Planet::Table)
                    .to_col(Planet::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITES_PEOPLE_ID)
                    .from_tbl(Favorites::Table)
                    .from_col(Favorites::PeopleId)
                    .to_tbl(People::Table)
                    .to_col(People::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITES_USER_ID)
                    .from_tbl(Favorites::Table)
                    .from_col(Favorites::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITES_PLANET_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITES_PEOPLE_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITES_USER_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Favorites {
    Table,
    Id,
    Type,
    PlanetId,
    PeopleId,
    UserId,
}
