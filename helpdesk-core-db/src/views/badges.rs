use serde::Serialize;

use helpdesk_core_api::domain::common_enums::{TicketPriority, TicketStatus};

/// Color family of a labeled chip, matching the dashboard styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Green,
    Yellow,
    Blue,
    Purple,
    Red,
    Gray,
}

/// A display-ready chip: human label plus color tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub tone: BadgeTone,
}

impl Badge {
    fn new(label: impl Into<String>, tone: BadgeTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

pub fn status_badge(status: TicketStatus) -> Badge {
    let tone = match status {
        TicketStatus::New => BadgeTone::Blue,
        TicketStatus::InProgress => BadgeTone::Purple,
        TicketStatus::Resolved => BadgeTone::Green,
        TicketStatus::Closed => BadgeTone::Gray,
    };
    Badge::new(status.to_string(), tone)
}

pub fn priority_badge(priority: TicketPriority) -> Badge {
    let tone = match priority {
        TicketPriority::High | TicketPriority::Critical => BadgeTone::Red,
        TicketPriority::Medium => BadgeTone::Yellow,
        TicketPriority::Low => BadgeTone::Green,
    };
    Badge::new(priority.to_string(), tone)
}
