use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::repository::pagination::{Page, PageRequest};

/// Generic repository trait for listing the entities a customer owns
///
/// Ordering contract: `created_at` descending, ties broken by `id`
/// ascending, so repeated reads paginate deterministically.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl FindByCreatedBy<Postgres, TicketModel> for TicketRepositoryImpl {
///     async fn find_by_created_by(&self, created_by: Uuid, page: PageRequest) -> Result<Page<TicketModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindByCreatedBy<DB: Database, T: Identifiable>: Send + Sync {
    /// List entities created by the given identity, newest first
    ///
    /// # Arguments
    /// * `created_by` - Identity id of the owner
    /// * `page` - Pagination window
    ///
    /// # Returns
    /// * `Ok(Page<T>)` - The requested page plus the total owned count
    /// * `Err` - An error if the query could not be executed
    async fn find_by_created_by(
        &self,
        created_by: Uuid,
        page: PageRequest,
    ) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
