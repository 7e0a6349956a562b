use std::marker::PhantomData;
use std::sync::Arc;

use chrono::Utc;
use heapless::String as HeaplessString;
use sqlx::Database;
use uuid::Uuid;
use validator::Validate;

use helpdesk_core_api::domain::common_enums::{TicketStatus, UserRole};
use helpdesk_core_api::domain::identity::Identity;
use helpdesk_core_api::domain::ticket_draft::TicketDraft;
use helpdesk_core_api::error::{TicketError, TicketResult};
use helpdesk_core_api::service::authorization::{authorize, TicketAction, TicketContext};

use crate::models::ticket::TicketModel;
use crate::repository::pagination::{Page, PageRequest};
use crate::repository::{TicketRepository, UserRepository};

/// Listing cap applied when the caller does not paginate explicitly.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// The ticket domain service: every create/read/mutate path on tickets goes
/// through here, in the fixed order validate, authorize, then a single store
/// round trip. Nothing is written when any step before the write fails.
///
/// Identities are passed explicitly into every call; the service holds no
/// session state of its own.
pub struct TicketDomainService<DB, TR, UR> {
    tickets: Arc<TR>,
    users: Arc<UR>,
    _db: PhantomData<fn() -> DB>,
}

impl<DB, TR, UR> Clone for TicketDomainService<DB, TR, UR> {
    fn clone(&self) -> Self {
        Self {
            tickets: Arc::clone(&self.tickets),
            users: Arc::clone(&self.users),
            _db: PhantomData,
        }
    }
}

impl<DB, TR, UR> TicketDomainService<DB, TR, UR>
where
    DB: Database,
    TR: TicketRepository<DB>,
    UR: UserRepository<DB>,
{
    pub fn new(tickets: Arc<TR>, users: Arc<UR>) -> Self {
        Self {
            tickets,
            users,
            _db: PhantomData,
        }
    }

    /// Create a ticket on behalf of a customer.
    ///
    /// The new ticket starts in the initial status, unassigned, with
    /// `created_at == last_updated`.
    pub async fn create_ticket(
        &self,
        identity: &Identity,
        draft: TicketDraft,
    ) -> TicketResult<TicketModel> {
        authorize(identity, TicketAction::Create, None)?;
        draft.validate()?;

        let now = Utc::now();
        let mut ticket = TicketModel {
            id: Uuid::new_v4(),
            title: bounded("title", &draft.title)?,
            description: draft.description.clone(),
            priority: draft.priority,
            category: draft.category,
            contact_email: bounded("contact_email", &draft.contact_email)?,
            contact_phone: bounded_opt("contact_phone", draft.contact_phone.as_deref())?,
            status: TicketStatus::initial(),
            created_by: identity.user_id,
            created_by_email: identity.email.clone(),
            created_at: now,
            last_updated: now,
            updated_by: None,
            assigned_to: None,
            due_date: draft.due_date,
            department: draft.department,
            impact: draft.impact,
            urgency: draft.urgency,
            requires_onsite: draft.requires_onsite,
            additional_notes: draft.additional_notes.clone(),
        };
        ticket = self.tickets.create(ticket).await?;
        tracing::info!(ticket_id = %ticket.id, customer = %identity.user_id, "ticket created");
        Ok(ticket)
    }

    /// Role-filtered listing: customers see their own tickets, agents see
    /// everything. Capped at [`DEFAULT_LIST_LIMIT`] newest tickets.
    pub async fn list_tickets(&self, identity: &Identity) -> TicketResult<Vec<TicketModel>> {
        let page = self
            .list_tickets_page(identity, PageRequest::new(DEFAULT_LIST_LIMIT, 0))
            .await?;
        Ok(page.items)
    }

    /// Paginated variant of [`Self::list_tickets`].
    pub async fn list_tickets_page(
        &self,
        identity: &Identity,
        page: PageRequest,
    ) -> TicketResult<Page<TicketModel>> {
        let mut result = match identity.role {
            UserRole::Customer => {
                self.tickets
                    .find_by_created_by(identity.user_id, page)
                    .await?
            }
            UserRole::Agent => self.tickets.list_recent(page).await?,
        };
        // The store orders too; re-sorting here keeps the tie-break
        // deterministic no matter what backend produced the page.
        result
            .items
            .sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(result)
    }

    /// Fetch one ticket, subject to the visibility rules.
    pub async fn get_ticket(&self, identity: &Identity, ticket_id: Uuid) -> TicketResult<TicketModel> {
        let ticket = self.load_existing(ticket_id).await?;
        authorize(identity, TicketAction::View, Some(&context_of(&ticket)))?;
        Ok(ticket)
    }

    /// Move a ticket to a new lifecycle status. Agent-only; the transition
    /// must not go backward.
    pub async fn update_status(
        &self,
        identity: &Identity,
        ticket_id: Uuid,
        new_status: TicketStatus,
    ) -> TicketResult<TicketModel> {
        authorize(identity, TicketAction::UpdateStatus, None)?;
        let mut ticket = self.load_existing(ticket_id).await?;

        if !ticket.status.can_transition_to(new_status) {
            return Err(TicketError::InvalidTransition(format!(
                "{} -> {new_status}",
                ticket.status
            )));
        }

        ticket.status = new_status;
        ticket.last_updated = Utc::now();
        ticket.updated_by = Some(identity.user_id);
        let ticket = self.tickets.update(ticket).await?;
        tracing::info!(ticket_id = %ticket.id, status = %ticket.status, agent = %identity.user_id, "status updated");
        Ok(ticket)
    }

    /// Same as [`Self::update_status`] but takes the UI-supplied label.
    /// Unknown labels are rejected without touching the ticket.
    pub async fn update_status_label(
        &self,
        identity: &Identity,
        ticket_id: Uuid,
        label: &str,
    ) -> TicketResult<TicketModel> {
        let new_status: TicketStatus = label
            .parse()
            .map_err(|_| TicketError::InvalidTransition(format!("unknown status {label:?}")))?;
        self.update_status(identity, ticket_id, new_status).await
    }

    /// Assign a ticket to an agent, or clear the assignment. Agent-only.
    ///
    /// `None` and the empty string are both the unassigned sentinel; any
    /// other value must resolve to a known agent account.
    pub async fn assign_ticket(
        &self,
        identity: &Identity,
        ticket_id: Uuid,
        assignee: Option<&str>,
    ) -> TicketResult<TicketModel> {
        authorize(identity, TicketAction::Assign, None)?;
        let mut ticket = self.load_existing(ticket_id).await?;

        let assigned_to = match assignee {
            None => None,
            Some("") => None,
            Some(email) => {
                let user = self.users.find_by_email(email).await?;
                match user {
                    Some(user) if user.role == UserRole::Agent => Some(user.email.clone()),
                    _ => {
                        return Err(TicketError::InvalidTransition(format!(
                            "{email} is not a known agent"
                        )))
                    }
                }
            }
        };

        ticket.assigned_to = assigned_to;
        ticket.last_updated = Utc::now();
        ticket.updated_by = Some(identity.user_id);
        let ticket = self.tickets.update(ticket).await?;
        tracing::info!(
            ticket_id = %ticket.id,
            assignee = ticket.assigned_to.as_deref().unwrap_or("unassigned"),
            agent = %identity.user_id,
            "ticket assigned"
        );
        Ok(ticket)
    }

    /// Rewrite a ticket's customer-supplied content. Owner-only, and only
    /// while the ticket is still in its initial status; all fields are
    /// re-validated exactly as on create.
    pub async fn edit_ticket(
        &self,
        identity: &Identity,
        ticket_id: Uuid,
        draft: TicketDraft,
    ) -> TicketResult<TicketModel> {
        let mut ticket = self.load_existing(ticket_id).await?;
        authorize(identity, TicketAction::EditContent, Some(&context_of(&ticket)))?;
        draft.validate()?;

        ticket.title = bounded("title", &draft.title)?;
        ticket.description = draft.description;
        ticket.priority = draft.priority;
        ticket.category = draft.category;
        ticket.contact_email = bounded("contact_email", &draft.contact_email)?;
        ticket.contact_phone = bounded_opt("contact_phone", draft.contact_phone.as_deref())?;
        ticket.due_date = draft.due_date;
        ticket.department = draft.department;
        ticket.impact = draft.impact;
        ticket.urgency = draft.urgency;
        ticket.requires_onsite = draft.requires_onsite;
        ticket.additional_notes = draft.additional_notes;
        ticket.last_updated = Utc::now();

        let ticket = self.tickets.update(ticket).await?;
        tracing::info!(ticket_id = %ticket.id, customer = %identity.user_id, "ticket edited");
        Ok(ticket)
    }

    /// Remove a ticket. Owner-only, and only while the ticket is still in
    /// its initial status, so agent work is never silently discarded.
    pub async fn delete_ticket(&self, identity: &Identity, ticket_id: Uuid) -> TicketResult<()> {
        let ticket = self.load_existing(ticket_id).await?;
        authorize(identity, TicketAction::Delete, Some(&context_of(&ticket)))?;

        let deleted = self.tickets.delete(ticket_id).await?;
        if !deleted {
            // Raced with another delete; the id is gone either way.
            return Err(TicketError::not_found(ticket_id));
        }
        tracing::info!(ticket_id = %ticket_id, customer = %identity.user_id, "ticket deleted");
        Ok(())
    }

    async fn load_existing(&self, ticket_id: Uuid) -> TicketResult<TicketModel> {
        self.tickets
            .find_by_id(ticket_id)
            .await?
            .ok_or_else(|| TicketError::not_found(ticket_id))
    }
}

fn context_of(ticket: &TicketModel) -> TicketContext {
    TicketContext {
        created_by: ticket.created_by,
        status: ticket.status,
    }
}

fn bounded<const N: usize>(
    field: &'static str,
    value: &str,
) -> TicketResult<HeaplessString<N>> {
    HeaplessString::try_from(value).map_err(|_| TicketError::invalid_field(field, "length"))
}

fn bounded_opt<const N: usize>(
    field: &'static str,
    value: Option<&str>,
) -> TicketResult<Option<HeaplessString<N>>> {
    match value {
        // An empty optional field is stored as absent, not as "".
        None | Some("") => Ok(None),
        Some(value) => bounded(field, value).map(Some),
    }
}
