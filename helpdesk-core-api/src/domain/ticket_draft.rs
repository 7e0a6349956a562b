use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::common_enums::{
    self, Department, TicketCategory, TicketImpact, TicketPriority, TicketUrgency,
};

/// The customer-supplied content of a ticket, used both for creation and for
/// owner edits (an edit re-validates every field exactly like a create).
///
/// Enum-typed fields cannot hold an out-of-set value by construction; the
/// string fields carry the field-level rules.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TicketDraft {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
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

    #[validate(email(message = "Invalid email address"))]
    #[validate(length(min = 1, max = 100, message = "Contact email is required"))]
    pub contact_email: String,

    #[validate(custom(function = validate_contact_phone))]
    #[validate(length(max = 30, message = "Phone number is too long"))]
    pub contact_phone: Option<String>,

    // Extended fields from the richer ticket variant. All optional at the
    // domain level; a UI may require them for specific flows.
    pub due_date: Option<NaiveDate>,
    pub department: Option<Department>,
    pub impact: Option<TicketImpact>,
    pub urgency: Option<TicketUrgency>,
    #[serde(default)]
    pub requires_onsite: bool,
    pub additional_notes: Option<String>,
}

/// Digits, `+`, `-`, parentheses and spaces only.
fn validate_contact_phone(phone: &str) -> Result<(), ValidationError> {
    let valid = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '));
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message("Invalid phone number".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> TicketDraft {
        TicketDraft {
            title: "Printer down".to_string(),
            description: "The office printer no longer responds.".to_string(),
            priority: TicketPriority::High,
            category: TicketCategory::Technical,
            contact_email: "a@b.com".to_string(),
            contact_phone: Some("+1 (555) 010-2030".to_string()),
            due_date: None,
            department: None,
            impact: None,
            urgency: None,
            requires_onsite: false,
            additional_notes: None,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn empty_title_and_description_are_rejected_per_field() {
        let mut draft = valid_draft();
        draft.title = String::new();
        draft.description = String::new();
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(errors.field_errors().contains_key("description"));
        assert!(!errors.field_errors().contains_key("contact_email"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut draft = valid_draft();
        draft.contact_email = "not-an-email".to_string();
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("contact_email"));
    }

    #[test]
    fn phone_rejects_letters_but_allows_punctuation() {
        let mut draft = valid_draft();
        draft.contact_phone = Some("call me".to_string());
        assert!(draft.validate().is_err());

        draft.contact_phone = Some("(555) 010-2030".to_string());
        assert!(draft.validate().is_ok());

        draft.contact_phone = None;
        assert!(draft.validate().is_ok());
    }
}
