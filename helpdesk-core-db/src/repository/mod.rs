pub mod create;
pub mod delete;
pub mod find_by_created_by;
pub mod find_by_email;
pub mod find_by_id;
pub mod list_recent;
pub mod pagination;
pub mod update;

// Re-exports
pub use create::*;
pub use delete::*;
pub use find_by_created_by::*;
pub use find_by_email::*;
pub use find_by_id::*;
pub use list_recent::*;
pub use pagination::*;
pub use update::*;

use sqlx::Database;

use crate::models::ticket::TicketModel;
use crate::models::user::UserModel;

/// Everything the domain service needs from the ticket store.
///
/// Blanket-implemented for any type that provides the individual operation
/// traits, so store adapters only implement those.
pub trait TicketRepository<DB: Database>:
    Create<DB, TicketModel>
    + FindById<DB, TicketModel>
    + FindByCreatedBy<DB, TicketModel>
    + ListRecent<DB, TicketModel>
    + Update<DB, TicketModel>
    + Delete<DB, TicketModel>
{
}

impl<DB: Database, R> TicketRepository<DB> for R where
    R: Create<DB, TicketModel>
        + FindById<DB, TicketModel>
        + FindByCreatedBy<DB, TicketModel>
        + ListRecent<DB, TicketModel>
        + Update<DB, TicketModel>
        + Delete<DB, TicketModel>
{
}

/// Read access to the identity store, used to resolve assignees and roles.
pub trait UserRepository<DB: Database>:
    FindById<DB, UserModel> + FindByEmail<DB, UserModel>
{
}

impl<DB: Database, R> UserRepository<DB> for R where
    R: FindById<DB, UserModel> + FindByEmail<DB, UserModel>
{
}
