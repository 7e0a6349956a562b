use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for inserting a single entity
///
/// The store assigns nothing: the entity is persisted exactly as handed in,
/// and the saved copy is returned for the caller to echo back.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Create<Postgres, TicketModel> for TicketRepositoryImpl {
///     async fn create(&self, item: TicketModel) -> Result<TicketModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<DB: Database, T: Identifiable>: Send + Sync {
    /// Persist a new entity
    ///
    /// # Arguments
    /// * `item` - The entity to insert
    ///
    /// # Returns
    /// * `Ok(T)` - The saved entity
    /// * `Err` - An error if the insert could not be executed
    async fn create(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
