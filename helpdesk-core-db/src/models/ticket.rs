use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use helpdesk_core_api::domain::common_enums::{
    self, Department, TicketCategory, TicketImpact, TicketPriority, TicketStatus, TicketUrgency,
};

/// Database model for a support ticket.
///
/// Write-once fields: `id`, `created_by`, `created_by_email`, `created_at`.
/// `last_updated` moves on every mutation; `updated_by` records the agent
/// behind the latest status or assignment change. `assigned_to` holds the
/// assignee's email, `None` meaning unassigned.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TicketModel {
    pub id: Uuid,

    pub title: HeaplessString<200>,
    pub description: String,

    #[serde(
        serialize_with = "common_enums::serialize_ticket_priority",
        deserialize_with = "common_enums::deserialize_ticket_priority"
    )]
    pub priority: TicketPriority,

    #[serde(
        serialize_with = "common_enums::serialize_ticket_category",
        deserialize_with = "common_enums::deserialize_ticket_category"
    )]
    pub category: TicketCategory,

    pub contact_email: HeaplessString<100>,
    pub contact_phone: Option<HeaplessString<30>>,

    #[serde(
        serialize_with = "common_enums::serialize_ticket_status",
        deserialize_with = "common_enums::deserialize_ticket_status"
    )]
    pub status: TicketStatus,

    /// Owning customer's identity id.
    pub created_by: Uuid,
    /// Owner's email, denormalized for agent listings.
    pub created_by_email: HeaplessString<100>,

    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,

    /// Agent behind the latest status/assignment change.
    pub updated_by: Option<Uuid>,

    /// Assignee's email; `None` until an agent sets it.
    pub assigned_to: Option<HeaplessString<100>>,

    // Extended fields of the richer ticket variant.
    pub due_date: Option<NaiveDate>,
    pub department: Option<Department>,
    pub impact: Option<TicketImpact>,
    pub urgency: Option<TicketUrgency>,
    pub requires_onsite: bool,
    pub additional_notes: Option<String>,
}

impl Identifiable for TicketModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
