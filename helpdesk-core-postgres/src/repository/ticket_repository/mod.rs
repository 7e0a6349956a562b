pub mod create;
pub mod delete;
pub mod find_by_created_by;
pub mod find_by_id;
pub mod list_recent;
pub mod repo_impl;
pub mod update;

pub use repo_impl::TicketRepositoryImpl;
