use async_trait::async_trait;
use helpdesk_core_db::{
    models::user::UserModel,
    repository::{find_by_email::FindByEmail, find_by_id::FindById},
};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct UserRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl UserRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for UserModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(UserModel {
            id: row.try_get("id")?,
            email: get_heapless_string(row, "email")?,
            display_name: get_optional_heapless_string(row, "display_name")?,
            role: row.try_get("role")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl FindById<Postgres, UserModel> for UserRepositoryImpl {
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<UserModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}

#[async_trait]
impl FindByEmail<Postgres, UserModel> for UserRepositoryImpl {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::find_by_email_impl(self, email).await
    }
}
