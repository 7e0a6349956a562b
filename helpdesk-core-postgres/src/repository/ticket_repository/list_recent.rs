use helpdesk_core_db::models::ticket::TicketModel;
use helpdesk_core_db::repository::pagination::{Page, PageRequest};
use sqlx::Row;

use super::repo_impl::TicketRepositoryImpl;
use crate::utils::TryFromRow;

impl TicketRepositoryImpl {
    pub(super) async fn list_recent_impl(
        repo: &TicketRepositoryImpl,
        page: PageRequest,
    ) -> Result<Page<TicketModel>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM tickets
            ORDER BY created_at DESC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
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
            SELECT COUNT(*) AS total FROM tickets
            "#,
        )
        .fetch_one(&*repo.pool)
        .await?
        .try_get("total")?;

        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{new_test_ticket, setup_test_context};
    use chrono::Duration;
    use helpdesk_core_db::repository::create::Create;
    use helpdesk_core_db::repository::list_recent::ListRecent;
    use helpdesk_core_db::repository::pagination::PageRequest;

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL"]
    #[serial_test::serial]
    async fn test_list_recent_orders_and_pages(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.repos.ticket_repository();

        for i in 0..3 {
            let mut ticket = new_test_ticket();
            ticket.created_at -= Duration::minutes(i);
            ticket.last_updated = ticket.created_at;
            repo.create(ticket).await?;
        }

        let page = repo.list_recent(PageRequest::new(2, 0)).await?;
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);
        assert!(page.has_more());
        assert!(page.items[0].created_at >= page.items[1].created_at);

        let rest = repo.list_recent(PageRequest::new(2, 2)).await?;
        assert_eq!(rest.items.len(), 1);
        assert!(!rest.has_more());

        Ok(())
    }
}
