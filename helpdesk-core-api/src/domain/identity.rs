use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common_enums::UserRole;

/// An authenticated actor as supplied by the external auth provider.
///
/// The domain service never authenticates; it trusts the identity it is
/// handed and every operation takes one explicitly. Code that only holds an
/// `Option<Identity>` (session resolution, route guards) fails closed on
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: HeaplessString<100>,
    pub role: UserRole,
}

impl Identity {
    pub fn new(user_id: Uuid, email: &str, role: UserRole) -> Result<Self, &'static str> {
        let email = HeaplessString::try_from(email).map_err(|_| "email exceeds 100 chars")?;
        Ok(Self {
            user_id,
            email,
            role,
        })
    }

    pub fn is_agent(&self) -> bool {
        self.role == UserRole::Agent
    }

    pub fn is_customer(&self) -> bool {
        self.role == UserRole::Customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_role_predicates() {
        let agent = Identity::new(Uuid::new_v4(), "agent1@support.com", UserRole::Agent).unwrap();
        assert!(agent.is_agent());
        assert!(!agent.is_customer());

        let customer = Identity::new(Uuid::new_v4(), "a@b.com", UserRole::Customer).unwrap();
        assert!(customer.is_customer());
    }

    #[test]
    fn identity_rejects_oversized_email() {
        let long = format!("{}@example.com", "x".repeat(120));
        assert!(Identity::new(Uuid::new_v4(), &long, UserRole::Customer).is_err());
    }
}
