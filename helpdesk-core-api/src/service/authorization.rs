use uuid::Uuid;

use crate::domain::common_enums::TicketStatus;
use crate::domain::identity::Identity;
use crate::error::{TicketError, TicketResult};

/// The privileged operations the policy knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketAction {
    Create,
    View,
    EditContent,
    Delete,
    UpdateStatus,
    Assign,
}

/// The ticket facts the policy needs: who owns it and where it is in its
/// lifecycle. Actions that are pure role checks pass no context.
#[derive(Debug, Clone, Copy)]
pub struct TicketContext {
    pub created_by: Uuid,
    pub status: TicketStatus,
}

/// Single authorization policy, consulted by every domain operation and by
/// view composition. Nothing else in the workspace decides who may do what.
///
/// Rules:
/// - `Create`: customers only.
/// - `View`: any agent, or the owning customer.
/// - `EditContent` / `Delete`: the owning customer, and only while the
///   ticket is still in its initial state. Once an agent has progressed the
///   ticket, rewriting or removing it would silently invalidate decisions
///   already in flight.
/// - `UpdateStatus` / `Assign`: agents only, including against tickets they
///   do not own.
///
/// Actions that need ticket facts fail closed when called without them.
pub fn authorize(
    identity: &Identity,
    action: TicketAction,
    ticket: Option<&TicketContext>,
) -> TicketResult<()> {
    match action {
        TicketAction::Create => {
            if identity.is_customer() {
                Ok(())
            } else {
                Err(TicketError::Forbidden(
                    "only customers may create tickets".to_string(),
                ))
            }
        }
        TicketAction::UpdateStatus => {
            if identity.is_agent() {
                Ok(())
            } else {
                Err(TicketError::Forbidden(
                    "only agents may change ticket status".to_string(),
                ))
            }
        }
        TicketAction::Assign => {
            if identity.is_agent() {
                Ok(())
            } else {
                Err(TicketError::Forbidden(
                    "only agents may assign tickets".to_string(),
                ))
            }
        }
        TicketAction::View => {
            let ticket = require_context(ticket)?;
            if identity.is_agent() || ticket.created_by == identity.user_id {
                Ok(())
            } else {
                Err(TicketError::Forbidden(
                    "ticket belongs to another customer".to_string(),
                ))
            }
        }
        TicketAction::EditContent | TicketAction::Delete => {
            let ticket = require_context(ticket)?;
            if !identity.is_customer() || ticket.created_by != identity.user_id {
                return Err(TicketError::Forbidden(
                    "only the owning customer may modify a ticket".to_string(),
                ));
            }
            if !ticket.status.is_initial() {
                return Err(TicketError::Forbidden(
                    "ticket has already been progressed by an agent".to_string(),
                ));
            }
            Ok(())
        }
    }
}

/// Non-failing probe used by view composition to derive permission flags.
pub fn is_allowed(identity: &Identity, action: TicketAction, ticket: Option<&TicketContext>) -> bool {
    authorize(identity, action, ticket).is_ok()
}

fn require_context(ticket: Option<&TicketContext>) -> TicketResult<&TicketContext> {
    ticket.ok_or_else(|| TicketError::Forbidden("missing ticket context".to_string()))
}
