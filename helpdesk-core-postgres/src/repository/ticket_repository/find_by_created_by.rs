use helpdesk_core_db::models::ticket::TicketModel;
use helpdesk_core_db::repository::pagination::{Page, PageRequest};
use sqlx::Row;
use uuid::Uuid;

use super::repo_impl::TicketRepositoryImpl;
use crate::utils::TryFromRow;

impl TicketRepositoryImpl {
    pub(super) async fn find_by_created_by_impl(
        repo: &TicketRepositoryImpl,
        created_by: Uuid,
        page: PageRequest,
    ) -> Result<Page<TicketModel>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM tickets
            WHERE created_by = $1
            ORDER BY created_at DESC, id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(created_by)
        .bind(page.limit as i64)
        .bind(page.offset as i64)
        .fetch_all(&*repo.pool)
        .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            items.push(TicketModel::try_from_row(row)?);
        }

        let total: i64 = sqlx::query(
            r#"
            SELECT COUNT(*) AS total FROM tickets WHERE created_by = $1
            "#,
        )
        .bind(created_by)
        .fetch_one(&*repo.pool)
        .await?
        .try_get("total")?;

        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}
