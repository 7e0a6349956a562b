use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};
use std::sync::Arc;
use std::time::Duration;

use helpdesk_core_db::service::ticket_domain_service::TicketDomainService;

use crate::repository::ticket_repository::TicketRepositoryImpl;
use crate::repository::user_repository::UserRepositoryImpl;

/// The fully wired domain service over the PostgreSQL stores.
pub type PostgresTicketService =
    TicketDomainService<Postgres, TicketRepositoryImpl, UserRepositoryImpl>;

/// Factory for the PostgreSQL-backed repositories, sharing a single pool.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connect to the database and build the factory around a fresh pool.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(database_url)
            .await?;
        tracing::info!("connected to PostgreSQL");
        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    pub fn ticket_repository(&self) -> Arc<TicketRepositoryImpl> {
        Arc::new(TicketRepositoryImpl::new(Arc::clone(&self.pool)))
    }

    pub fn user_repository(&self) -> Arc<UserRepositoryImpl> {
        Arc::new(UserRepositoryImpl::new(Arc::clone(&self.pool)))
    }

    /// Build the domain service over repositories sharing this factory's pool.
    pub fn domain_service(&self) -> PostgresTicketService {
        TicketDomainService::new(self.ticket_repository(), self.user_repository())
    }
}
