use helpdesk_core_db::models::ticket::TicketModel;

use super::repo_impl::TicketRepositoryImpl;

impl TicketRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &TicketRepositoryImpl,
        ticket: TicketModel,
    ) -> Result<TicketModel, Box<dyn std::error::Error + Send + Sync>> {
        let result = sqlx::query(
            r#"
            UPDATE tickets SET
                title = $2,
                description = $3,
                priority = $4,
                category = $5,
                contact_email = $6,
                contact_phone = $7,
                status = $8,
                last_updated = $9,
                updated_by = $10,
                assigned_to = $11,
                due_date = $12,
                department = $13,
                impact = $14,
                urgency = $15,
                requires_onsite = $16,
                additional_notes = $17
            WHERE id = $1
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

        if result.rows_affected() == 0 {
            return Err(format!("Ticket not found: {}", ticket.id).into());
        }

        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{new_test_ticket, setup_test_context};
    use chrono::Utc;
    use helpdesk_core_api::domain::common_enums::TicketStatus;
    use helpdesk_core_db::repository::create::Create;
    use helpdesk_core_db::repository::delete::Delete;
    use helpdesk_core_db::repository::find_by_id::FindById;
    use helpdesk_core_db::repository::update::Update;
    use heapless::String as HeaplessString;
    use std::str::FromStr;

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL"]
    #[serial_test::serial]
    async fn test_update_then_delete() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.repos.ticket_repository();

        let mut ticket = repo.create(new_test_ticket()).await?;
        ticket.status = TicketStatus::InProgress;
        ticket.assigned_to = Some(HeaplessString::from_str("agent2@support.com").unwrap());
        ticket.last_updated = Utc::now();
        repo.update(ticket.clone()).await?;

        let found = repo.find_by_id(ticket.id).await?.ok_or("ticket vanished")?;
        assert_eq!(found.status, TicketStatus::InProgress);
        assert_eq!(found.assigned_to.as_deref(), Some("agent2@support.com"));

        assert!(repo.delete(ticket.id).await?);
        assert!(!repo.delete(ticket.id).await?);

        Ok(())
    }
}
