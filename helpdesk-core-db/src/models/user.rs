use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use helpdesk_core_api::domain::common_enums::UserRole;
use helpdesk_core_api::domain::identity::Identity;

/// Database model for an account in the identity store.
///
/// `role` is fixed at signup and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub email: HeaplessString<100>,
    pub display_name: Option<HeaplessString<100>>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl UserModel {
    /// The identity this account asserts on privileged operations.
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.id,
            email: self.email.clone(),
            role: self.role,
        }
    }
}

impl Identifiable for UserModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_carries_id_email_and_role() {
        let user = UserModel {
            id: Uuid::new_v4(),
            email: HeaplessString::try_from("agent1@support.com").unwrap(),
            display_name: None,
            role: UserRole::Agent,
            created_at: Utc::now(),
        };
        let identity = user.identity();
        assert_eq!(identity.user_id, user.id);
        assert_eq!(identity.email.as_str(), "agent1@support.com");
        assert!(identity.is_agent());
    }
}
