use helpdesk_core_db::models::ticket::TicketModel;

use super::repo_impl::TicketRepositoryImpl;

impl TicketRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &TicketRepositoryImpl,
        ticket: TicketModel,
    ) -> Result<TicketModel, Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            r#"
            INSERT INTO tickets (
                id, title, description, priority, category,
                contact_email, contact_phone, status,
                created_by, created_by_email, created_at, last_updated,
                updated_by, assigned_to,
                due_date, department, impact, urgency,
                requires_onsite, additional_notes
            )
            VALUES (
                $1, $2, $3, $4, $5,
                $6, $7, $8,
                $9, $10, $11, $12,
                $13, $14,
                $15, $16, $17, $18,
                $19, $20
            )
            "#,
        )
        .bind(ticket.id)
        .bind(ticket.title.as_str())
        .bind(&ticket.description)
        .bind(ticket.priority)
        .bind(ticket.category)
        .bind(ticket.contact_email.as_str())
        .bind(ticket.contact_phone.as_deref())
        .bind(ticket.status)
        .bind(ticket.created_by)
        .bind(ticket.created_by_email.as_str())
        .bind(ticket.created_at)
        .bind(ticket.last_updated)
        .bind(ticket.updated_by)
        .bind(ticket.assigned_to.as_deref())
        .bind(ticket.due_date)
        .bind(ticket.department)
        .bind(ticket.impact)
        .bind(ticket.urgency)
        .bind(ticket.requires_onsite)
        .bind(ticket.additional_notes.as_deref())
        .execute(&*repo.pool)
        .await?;

        Ok(ticket)
    }
}
