pub mod identifiable;
pub mod ticket;
pub mod user;

// Re-exports
pub use identifiable::*;
pub use ticket::*;
pub use user::*;
