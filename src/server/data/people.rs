use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    QueryOrder,
};

pub struct PeopleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleRepository<'a> {
    /// Creates a new instance of [`PeopleRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::people::Model, DbErr> {
        let people = entity::people::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        people.insert(self.db).await
    }

    pub async fn get_by_id(&self, people_id: i32) -> Result<Option<entity::people::Model>, DbErr> {
        entity::prelude::People::find_by_id(people_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::people::Model>, DbErr> {
        entity::prelude::People::find()
            .order_by_asc(entity::people::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, people_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::People::delete_by_id(people_id)
            .exec(self.db)
            .await
    }
}
