use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for deleting an entity by its ID
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Delete<Postgres, TicketModel> for TicketRepositoryImpl {
///     async fn delete(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Delete<DB: Database, T: Identifiable>: Send + Sync {
    /// Delete an entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the entity to delete
    ///
    /// # Returns
    /// * `Ok(true)` - The entity existed and was removed
    /// * `Ok(false)` - No entity with that id existed
    /// * `Err` - An error if the delete could not be executed
    async fn delete(&self, id: Uuid) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
