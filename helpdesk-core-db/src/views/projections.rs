use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use helpdesk_core_api::domain::common_enums::{
    Department, TicketCategory, TicketImpact, TicketPriority, TicketStatus, TicketUrgency,
};
use helpdesk_core_api::domain::identity::Identity;
use helpdesk_core_api::service::authorization::{is_allowed, TicketAction, TicketContext};

use crate::models::ticket::TicketModel;
use crate::views::badges::{priority_badge, status_badge, Badge};

pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// Which controls the current actor gets on a given ticket. Derived from
/// the central authorization policy only; views never re-decide access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TicketPermissions {
    pub can_view: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_update_status: bool,
    pub can_assign: bool,
}

impl TicketPermissions {
    pub fn for_ticket(identity: &Identity, ticket: &TicketModel) -> Self {
        let context = TicketContext {
            created_by: ticket.created_by,
            status: ticket.status,
        };
        Self {
            can_view: is_allowed(identity, TicketAction::View, Some(&context)),
            can_edit: is_allowed(identity, TicketAction::EditContent, Some(&context)),
            can_delete: is_allowed(identity, TicketAction::Delete, Some(&context)),
            can_update_status: is_allowed(identity, TicketAction::UpdateStatus, Some(&context)),
            can_assign: is_allowed(identity, TicketAction::Assign, Some(&context)),
        }
    }
}

/// One row of a ticket listing.
#[derive(Debug, Clone, Serialize)]
pub struct TicketSummaryView {
    pub id: Uuid,
    /// First 8 characters of the id, as the dashboards render it.
    pub short_id: String,
    pub title: String,
    pub priority: Badge,
    pub status: Badge,
    pub category: String,
    pub created_by_email: String,
    pub assigned_to: String,
    pub created_at: DateTime<Utc>,
    pub permissions: TicketPermissions,
}

/// The full projection behind the ticket detail modal.
#[derive(Debug, Clone, Serialize)]
pub struct TicketDetailView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: Badge,
    pub status: Badge,
    pub category: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub created_by_email: String,
    pub assigned_to: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub due_date: Option<NaiveDate>,
    pub department: Option<String>,
    pub impact: Option<String>,
    pub urgency: Option<String>,
    pub requires_onsite: bool,
    pub additional_notes: Option<String>,
    pub permissions: TicketPermissions,
}

pub fn summarize(ticket: &TicketModel, identity: &Identity) -> TicketSummaryView {
    TicketSummaryView {
        id: ticket.id,
        short_id: short_id(ticket.id),
        title: ticket.title.to_string(),
        priority: priority_badge(ticket.priority),
        status: status_badge(ticket.status),
        category: ticket.category.to_string(),
        created_by_email: ticket.created_by_email.to_string(),
        assigned_to: assignee_label(ticket),
        created_at: ticket.created_at,
        permissions: TicketPermissions::for_ticket(identity, ticket),
    }
}

/// Listing projection for a whole page of tickets, in the order given.
pub fn list_view(tickets: &[TicketModel], identity: &Identity) -> Vec<TicketSummaryView> {
    tickets.iter().map(|t| summarize(t, identity)).collect()
}

pub fn ticket_detail(ticket: &TicketModel, identity: &Identity) -> TicketDetailView {
    TicketDetailView {
        id: ticket.id,
        title: ticket.title.to_string(),
        description: ticket.description.clone(),
        priority: priority_badge(ticket.priority),
        status: status_badge(ticket.status),
        category: ticket.category.to_string(),
        contact_email: ticket.contact_email.to_string(),
        contact_phone: ticket.contact_phone.as_ref().map(|p| p.to_string()),
        created_by_email: ticket.created_by_email.to_string(),
        assigned_to: assignee_label(ticket),
        created_at: ticket.created_at,
        last_updated: ticket.last_updated,
        due_date: ticket.due_date,
        department: ticket.department.map(|d| d.to_string()),
        impact: ticket.impact.map(|i| i.to_string()),
        urgency: ticket.urgency.map(|u| u.to_string()),
        requires_onsite: ticket.requires_onsite,
        additional_notes: ticket.additional_notes.clone(),
        permissions: TicketPermissions::for_ticket(identity, ticket),
    }
}

fn short_id(id: Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

fn assignee_label(ticket: &TicketModel) -> String {
    ticket
        .assigned_to
        .as_ref()
        .map(|a| a.to_string())
        .unwrap_or_else(|| UNASSIGNED_LABEL.to_string())
}

// Select-option helpers so no UI hardcodes an enumerated list.

pub fn status_options() -> Vec<String> {
    TicketStatus::ALL.iter().map(|s| s.to_string()).collect()
}

pub fn priority_options() -> Vec<String> {
    TicketPriority::ALL.iter().map(|p| p.to_string()).collect()
}

pub fn category_options() -> Vec<String> {
    TicketCategory::ALL.iter().map(|c| c.to_string()).collect()
}

pub fn department_options() -> Vec<String> {
    Department::ALL.iter().map(|d| d.to_string()).collect()
}

pub fn impact_options() -> Vec<String> {
    TicketImpact::ALL.iter().map(|i| i.to_string()).collect()
}

pub fn urgency_options() -> Vec<String> {
    TicketUrgency::ALL.iter().map(|u| u.to_string()).collect()
}
