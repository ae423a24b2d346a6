use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, Select, Set,
};
use uuid::Uuid;

use entities::user::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct UserAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> UserAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait UserFilter {
    fn filter_eq_is_active(self, is_active: bool) -> Self;
    fn filter_ne_id(self, id: Uuid) -> Self;
}

impl UserFilter for UserAdapter<'_> {
    fn filter_eq_is_active(mut self, is_active: bool) -> Self {
        self.query = self.query.filter(Column::IsActive.eq(is_active));
        self
    }

    fn filter_ne_id(mut self, id: Uuid) -> Self {
        self.query = self.query.filter(Column::Id.ne(id));
        self
    }
}

pub trait UserQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_email(self, email: String) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl UserQuery for UserAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_email(self, email: String) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub trait UserMutation {
    fn create(self, params: CreateUserParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn update_name(self, user: Model, name: String) -> impl Future<Output = Result<Model, DbErr>>;
    fn update_email(self, user: Model, email: String)
        -> impl Future<Output = Result<Model, DbErr>>;
    fn update_password(
        self,
        user: Model,
        password: String,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn increment_session_version(self, user: Model) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, user: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl UserMutation for UserAdapter<'_> {
    async fn create(self, params: CreateUserParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(params.name),
            email: Set(params.email),
            password: Set(params.password),
            is_active: Set(true),
            session_version: Set(0),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn update_name(self, user: Model, name: String) -> Result<Model, DbErr> {
        let mut user = user.into_active_model();
        user.name = Set(name);
        user.updated_at = Set(Utc::now().into());
        user.update(self.db).await
    }

    async fn update_email(self, user: Model, email: String) -> Result<Model, DbErr> {
        let mut user = user.into_active_model();
        user.email = Set(email);
        user.updated_at = Set(Utc::now().into());
        user.update(self.db).await
    }

    async fn update_password(self, user: Model, password: String) -> Result<Model, DbErr> {
        let mut user = user.into_active_model();
        user.password = Set(password);
        user.updated_at = Set(Utc::now().into());
        user.update(self.db).await
    }

    async fn increment_session_version(self, user: Model) -> Result<Model, DbErr> {
        let session_version = user.session_version.wrapping_add(1);
        let mut user = user.into_active_model();
        user.session_version = Set(session_version);
        user.updated_at = Set(Utc::now().into());
        user.update(self.db).await
    }

    async fn delete(self, user: Model) -> Result<(), DbErr> {
        user.delete(self.db).await.map(|_| ())
    }
}
