use std::future::Future;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, ModelTrait, Order, QueryFilter,
    QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::{
    email_verification::{ActiveModel, Column, Entity, Model},
    user,
};

#[derive(Clone)]
pub struct EmailVerificationAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> EmailVerificationAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait EmailVerificationFilter {
    fn filter_eq_user(self, user: &user::Model) -> Self;
}

impl EmailVerificationFilter for EmailVerificationAdapter<'_> {
    fn filter_eq_user(mut self, user: &user::Model) -> Self {
        self.query = self.query.filter(Column::UserId.eq(user.id));
        self
    }
}

pub trait EmailVerificationOrder {
    fn order_by_created_at(self, order: Order) -> Self;
}

impl EmailVerificationOrder for EmailVerificationAdapter<'_> {
    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }
}

pub trait EmailVerificationQuery {
    fn get_one(self) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl EmailVerificationQuery for EmailVerificationAdapter<'_> {
    async fn get_one(self) -> Result<Option<Model>, DbErr> {
        self.query.one(self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct CreateEmailVerificationParams {
    pub user_id: Uuid,
    pub new_email: String,
    pub hashed_token: String,
    pub expires_at: DateTime<Utc>,
}

pub trait EmailVerificationMutation {
    fn create(
        self,
        params: CreateEmailVerificationParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, verification: Model) -> impl Future<Output = Result<(), DbErr>>;
    fn delete_all_for_user(self, user: &user::Model) -> impl Future<Output = Result<u64, DbErr>>;
    fn delete_expired(self, now: DateTime<Utc>) -> impl Future<Output = Result<u64, DbErr>>;
}

impl EmailVerificationMutation for EmailVerificationAdapter<'_> {
    async fn create(self, params: CreateEmailVerificationParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(params.user_id),
            new_email: Set(params.new_email),
            token: Set(params.hashed_token),
            expires_at: Set(params.expires_at.into()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn delete(self, verification: Model) -> Result<(), DbErr> {
        verification.delete(self.db).await.map(|_| ())
    }

    async fn delete_all_for_user(self, user: &user::Model) -> Result<u64, DbErr> {
        Entity::delete_many()
            .filter(Column::UserId.eq(user.id))
            .exec(self.db)
            .await
            .map(|res| res.rows_affected)
    }

    async fn delete_expired(self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        Entity::delete_many()
            .filter(Column::ExpiresAt.lt(now))
            .exec(self.db)
            .await
            .map(|res| res.rows_affected)
    }
}
