use uuid::Uuid;

use super::repo_impl::TicketRepositoryImpl;

impl TicketRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &TicketRepositoryImpl,
        id: Uuid,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let result = sqlx::query(
            r#"
            DELETE FROM tickets WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&*repo.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
