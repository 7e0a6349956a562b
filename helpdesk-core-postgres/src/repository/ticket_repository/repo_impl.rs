use async_trait::async_trait;
use helpdesk_core_db::{
    models::ticket::TicketModel,
    repository::{
        create::Create,
        delete::Delete,
        find_by_created_by::FindByCreatedBy,
        find_by_id::FindById,
        list_recent::ListRecent,
        pagination::{Page, PageRequest},
        update::Update,
    },
};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct TicketRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl TicketRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for TicketModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(TicketModel {
            id: row.try_get("id")?,
            title: get_heapless_string(row, "title")?,
            description: row.try_get("description")?,
            priority: row.try_get("priority")?,
            category: row.try_get("category")?,
            contact_email: get_heapless_string(row, "contact_email")?,
            contact_phone: get_optional_heapless_string(row, "contact_phone")?,
            status: row.try_get("status")?,
            created_by: row.try_get("created_by")?,
            created_by_email: get_heapless_string(row, "created_by_email")?,
            created_at: row.try_get("created_at")?,
            last_updated: row.try_get("last_updated")?,
            updated_by: row.try_get("updated_by")?,
            assigned_to: get_optional_heapless_string(row, "assigned_to")?,
            due_date: row.try_get("due_date")?,
            department: row.try_get("department")?,
            impact: row.try_get("impact")?,
            urgency: row.try_get("urgency")?,
            requires_onsite: row.try_get("requires_onsite")?,
            additional_notes: row.try_get("additional_notes")?,
        })
    }
}

#[async_trait]
impl Create<Postgres, TicketModel> for TicketRepositoryImpl {
    async fn create(
        &self,
        item: TicketModel,
    ) -> Result<TicketModel, Box<dyn std::error::Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

#[async_trait]
impl FindById<Postgres, TicketModel> for TicketRepositoryImpl {
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<TicketModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}

#[async_trait]
impl FindByCreatedBy<Postgres, TicketModel> for TicketRepositoryImpl {
    async fn find_by_created_by(
        &self,
        created_by: Uuid,
        page: PageRequest,
    ) -> Result<Page<TicketModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::find_by_created_by_impl(self, created_by, page).await
    }
}

#[async_trait]
impl ListRecent<Postgres, TicketModel> for TicketRepositoryImpl {
    async fn list_recent(
        &self,
        page: PageRequest,
    ) -> Result<Page<TicketModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::list_recent_impl(self, page).await
    }
}

#[async_trait]
impl Update<Postgres, TicketModel> for TicketRepositoryImpl {
    async fn update(
        &self,
        item: TicketModel,
    ) -> Result<TicketModel, Box<dyn std::error::Error + Send + Sync>> {
        Self::update_impl(self, item).await
    }
}

#[async_trait]
impl Delete<Postgres, TicketModel> for TicketRepositoryImpl {
    async fn delete(&self, id: Uuid) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Self::delete_impl(self, id).await
    }
}
