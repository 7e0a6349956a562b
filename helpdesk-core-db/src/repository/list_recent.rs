use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;
use crate::repository::pagination::{Page, PageRequest};

/// Generic repository trait for listing all entities, newest first
///
/// Same ordering contract as
/// [`crate::repository::find_by_created_by::FindByCreatedBy`]: `created_at`
/// descending, ties broken by `id` ascending.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl ListRecent<Postgres, TicketModel> for TicketRepositoryImpl {
///     async fn list_recent(&self, page: PageRequest) -> Result<Page<TicketModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait ListRecent<DB: Database, T: Identifiable>: Send + Sync {
    /// List entities across all owners, newest first
    ///
    /// # Arguments
    /// * `page` - Pagination window
    ///
    /// # Returns
    /// * `Ok(Page<T>)` - The requested page plus the total count
    /// * `Err` - An error if the query could not be executed
    async fn list_recent(
        &self,
        page: PageRequest,
    ) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
