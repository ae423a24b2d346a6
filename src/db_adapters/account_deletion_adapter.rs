use std::future::Future;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    Order, QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::{
    account_deletion::{ActiveModel, Column, Entity, Model},
    custom_methods::account_deletion::scheduled_deletion_at,
    sea_orm_active_enums::AccountDeletionStatus,
    user,
};

#[derive(Clone)]
pub struct AccountDeletionAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> AccountDeletionAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait AccountDeletionFilter {
    fn filter_eq_user(self, user: &user::Model) -> Self;
    fn filter_eq_status(self, status: AccountDeletionStatus) -> Self;
    fn filter_due(self, now: DateTime<Utc>) -> Self;
}

impl AccountDeletionFilter for AccountDeletionAdapter<'_> {
    fn filter_eq_user(mut self, user: &user::Model) -> Self {
        self.query = self.query.filter(Column::UserId.eq(user.id));
        self
    }

    fn filter_eq_status(mut self, status: AccountDeletionStatus) -> Self {
        self.query = self.query.filter(Column::Status.eq(status));
        self
    }

    fn filter_due(mut self, now: DateTime<Utc>) -> Self {
        self.query = self
            .query
            .filter(Column::Status.eq(AccountDeletionStatus::Pending))
            .filter(Column::ScheduledDeletionAt.lte(now));
        self
    }
}

pub trait AccountDeletionOrder {
    fn order_by_requested_at(self, order: Order) -> Self;
}

impl AccountDeletionOrder for AccountDeletionAdapter<'_> {
    fn order_by_requested_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::RequestedAt, order);
        self
    }
}

pub trait AccountDeletionQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_one(self) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl AccountDeletionQuery for AccountDeletionAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }

    async fn get_one(self) -> Result<Option<Model>, DbErr> {
        self.query.one(self.db).await
    }
}

pub trait AccountDeletionMutation {
    fn create_pending(
        self,
        user: &user::Model,
        requested_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn cancel(self, account_deletion: Model) -> impl Future<Output = Result<Model, DbErr>>;
    fn cancel_all_pending_for_user(
        self,
        user: &user::Model,
    ) -> impl Future<Output = Result<u64, DbErr>>;
    fn mark_completed(self, account_deletion: Model)
        -> impl Future<Output = Result<Model, DbErr>>;
}

impl AccountDeletionMutation for AccountDeletionAdapter<'_> {
    async fn create_pending(
        self,
        user: &user::Model,
        requested_at: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(Some(user.id)),
            requested_at: Set(requested_at.into()),
            scheduled_deletion_at: Set(scheduled_deletion_at(requested_at).into()),
            status: Set(AccountDeletionStatus::Pending),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn cancel(self, account_deletion: Model) -> Result<Model, DbErr> {
        let mut account_deletion = account_deletion.into_active_model();
        account_deletion.status = Set(AccountDeletionStatus::Cancelled);
        account_deletion.updated_at = Set(Utc::now().into());
        account_deletion.update(self.db).await
    }

    async fn cancel_all_pending_for_user(self, user: &user::Model) -> Result<u64, DbErr> {
        Entity::update_many()
            .col_expr(Column::Status, Expr::value(AccountDeletionStatus::Cancelled))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::UserId.eq(user.id))
            .filter(Column::Status.eq(AccountDeletionStatus::Pending))
            .exec(self.db)
            .await
            .map(|res| res.rows_affected)
    }

    async fn mark_completed(self, account_deletion: Model) -> Result<Model, DbErr> {
        let mut account_deletion = account_deletion.into_active_model();
        account_deletion.status = Set(AccountDeletionStatus::Completed);
        account_deletion.updated_at = Set(Utc::now().into());
        account_deletion.update(self.db).await
    }
}
