use async_trait::async_trait;

use crate::domain::identity::Identity;

/// Contract for the external auth provider.
///
/// `None` means unauthenticated; callers must treat it as such and never
/// substitute a default identity.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_identity(&self) -> Option<Identity>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common_enums::UserRole;
    use uuid::Uuid;

    struct FixedProvider(Option<Identity>);

    #[async_trait]
    impl IdentityProvider for FixedProvider {
        async fn current_identity(&self) -> Option<Identity> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn provider_yields_identity_or_none() {
        let identity =
            Identity::new(Uuid::new_v4(), "a@b.com", UserRole::Customer).unwrap();
        let signed_in = FixedProvider(Some(identity.clone()));
        assert_eq!(signed_in.current_identity().await, Some(identity));

        let signed_out = FixedProvider(None);
        assert_eq!(signed_out.current_identity().await, None);
    }
}
