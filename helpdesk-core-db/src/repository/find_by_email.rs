use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for finding an entity by an email column
///
/// Emails are unique in the identity store, so at most one entity matches.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl FindByEmail<Postgres, UserModel> for UserRepositoryImpl {
///     async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindByEmail<DB: Database, T: Identifiable>: Send + Sync {
    /// Find an entity by its email address
    ///
    /// # Arguments
    /// * `email` - The email to match exactly
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If no entity carries that email
    /// * `Err` - An error if the query could not be executed
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
