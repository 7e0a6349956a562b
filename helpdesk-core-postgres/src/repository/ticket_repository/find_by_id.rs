use helpdesk_core_db::models::ticket::TicketModel;
use uuid::Uuid;

use super::repo_impl::TicketRepositoryImpl;
use crate::utils::TryFromRow;

impl TicketRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &TicketRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<TicketModel>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT * FROM tickets WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&*repo.pool)
        .await?;

        row.as_ref().map(TicketModel::try_from_row).transpose()
    }
}
