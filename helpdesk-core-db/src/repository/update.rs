use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for replacing an entity's stored state
///
/// Whole-row semantics: the store takes the entity as given, last write
/// wins. Concurrent writers are not reconciled.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Update<Postgres, TicketModel> for TicketRepositoryImpl {
///     async fn update(&self, item: TicketModel) -> Result<TicketModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Update<DB: Database, T: Identifiable>: Send + Sync {
    /// Replace the stored entity with the given state
    ///
    /// # Arguments
    /// * `item` - The entity carrying its own id and the new state
    ///
    /// # Returns
    /// * `Ok(T)` - The saved entity
    /// * `Err` - An error if the entity is absent or the write failed
    async fn update(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
