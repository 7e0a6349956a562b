pub mod ticket_domain_service;

// Re-exports
pub use ticket_domain_service::*;
