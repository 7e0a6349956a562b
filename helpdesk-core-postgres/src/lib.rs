pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::PostgresRepositories;
pub use repository::ticket_repository::TicketRepositoryImpl;
pub use repository::user_repository::UserRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
